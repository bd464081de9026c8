use raylib::prelude::*;

use crate::constants::*;
use crate::indicator::dot_under;

/// A single navigation intent, translated from a key press or mouse click.
/// One event is processed to completion per frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CarouselEvent {
    Next,
    Previous,
    JumpTo(usize),
}

/// Side of the window an arrow button sits on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArrowSide {
    Left,
    Right,
}

/// Vertical center of both arrow buttons.
pub fn arrow_center_y(screen_height: f32) -> f32 {
    screen_height * 0.5
}

/// X position of the arrow tip-side edge for the given side.
pub fn arrow_edge_x(side: ArrowSide, screen_width: f32) -> f32 {
    match side {
        ArrowSide::Left => ARROW_MARGIN,
        ArrowSide::Right => screen_width - ARROW_MARGIN - ARROW_WIDTH,
    }
}

fn arrow_contains(side: ArrowSide, x: f32, y: f32, screen_width: f32, screen_height: f32) -> bool {
    let left = arrow_edge_x(side, screen_width) - ARROW_HIT_PADDING;
    let right = arrow_edge_x(side, screen_width) + ARROW_WIDTH + ARROW_HIT_PADDING;
    let top = arrow_center_y(screen_height) - ARROW_HALF_HEIGHT - ARROW_HIT_PADDING;
    let bottom = arrow_center_y(screen_height) + ARROW_HALF_HEIGHT + ARROW_HIT_PADDING;
    x >= left && x <= right && y >= top && y <= bottom
}

/// Resolves a click position to a navigation event: indicator dots first,
/// then the prev/next arrows. Clicks elsewhere do nothing.
pub fn click_event(
    cursor_x: f32,
    cursor_y: f32,
    slide_count: usize,
    screen_width: f32,
    screen_height: f32,
) -> Option<CarouselEvent> {
    if let Some(index) = dot_under(cursor_x, cursor_y, slide_count, screen_width, screen_height) {
        return Some(CarouselEvent::JumpTo(index));
    }
    if arrow_contains(ArrowSide::Left, cursor_x, cursor_y, screen_width, screen_height) {
        return Some(CarouselEvent::Previous);
    }
    if arrow_contains(ArrowSide::Right, cursor_x, cursor_y, screen_width, screen_height) {
        return Some(CarouselEvent::Next);
    }
    None
}

/// Polls raylib for at most one navigation event this frame.
pub fn poll(rl: &RaylibHandle, slide_count: usize) -> Option<CarouselEvent> {
    if rl.is_key_pressed(KeyboardKey::KEY_RIGHT) {
        return Some(CarouselEvent::Next);
    }
    if rl.is_key_pressed(KeyboardKey::KEY_LEFT) {
        return Some(CarouselEvent::Previous);
    }
    if rl.is_mouse_button_pressed(MouseButton::MOUSE_BUTTON_LEFT) {
        let cursor = rl.get_mouse_position();
        return click_event(
            cursor.x,
            cursor.y,
            slide_count,
            rl.get_screen_width() as f32,
            rl.get_screen_height() as f32,
        );
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::indicator::dot_center;

    const W: f32 = 960.0;
    const H: f32 = 640.0;

    #[test]
    fn click_on_left_arrow_goes_previous() {
        let x = arrow_edge_x(ArrowSide::Left, W) + ARROW_WIDTH * 0.5;
        let y = arrow_center_y(H);
        assert_eq!(click_event(x, y, 4, W, H), Some(CarouselEvent::Previous));
    }

    #[test]
    fn click_on_right_arrow_goes_next() {
        let x = arrow_edge_x(ArrowSide::Right, W) + ARROW_WIDTH * 0.5;
        let y = arrow_center_y(H);
        assert_eq!(click_event(x, y, 4, W, H), Some(CarouselEvent::Next));
    }

    #[test]
    fn click_on_a_dot_jumps_to_its_slide() {
        let (x, y) = dot_center(3, 5, W, H);
        assert_eq!(click_event(x, y, 5, W, H), Some(CarouselEvent::JumpTo(3)));
    }

    #[test]
    fn click_in_the_middle_of_the_image_is_ignored() {
        assert_eq!(click_event(W * 0.5, H * 0.5, 4, W, H), None);
    }

    #[test]
    fn jump_indices_come_from_dot_positions_only() {
        // Every resolvable JumpTo is in range, whatever the cursor position.
        for x in (0..960).step_by(7) {
            for y in (560..640).step_by(3) {
                if let Some(CarouselEvent::JumpTo(i)) = click_event(x as f32, y as f32, 6, W, H) {
                    assert!(i < 6);
                }
            }
        }
    }
}
