use raylib::prelude::*;

use crate::constants::*;

/// One selection dot. Dots are index-aligned with the slide collection; the
/// active one marks the slide currently on screen.
pub struct Indicator {
    pub active: bool,
}

impl Indicator {
    pub fn new() -> Self {
        Self { active: false }
    }
}

/// Center of dot `index` in a row of `count`, horizontally centered near the
/// bottom edge of the window.
pub fn dot_center(index: usize, count: usize, screen_width: f32, screen_height: f32) -> (f32, f32) {
    let row_width = (count.saturating_sub(1)) as f32 * DOT_SPACING;
    let x = (screen_width - row_width) * 0.5 + index as f32 * DOT_SPACING;
    let y = screen_height - DOT_MARGIN_BOTTOM;
    (x, y)
}

/// Returns the index of the dot under the cursor, if any.
pub fn dot_under(
    cursor_x: f32,
    cursor_y: f32,
    count: usize,
    screen_width: f32,
    screen_height: f32,
) -> Option<usize> {
    // Slightly larger than the drawn dot, still well under half the spacing.
    let hit_radius = DOT_RADIUS + 4.0;
    for index in 0..count {
        let (x, y) = dot_center(index, count, screen_width, screen_height);
        let dx = cursor_x - x;
        let dy = cursor_y - y;
        if dx * dx + dy * dy <= hit_radius * hit_radius {
            return Some(index);
        }
    }
    None
}

pub fn draw_row(d: &mut RaylibDrawHandle, indicators: &[Indicator]) {
    let screen_width = d.get_screen_width() as f32;
    let screen_height = d.get_screen_height() as f32;
    for (index, indicator) in indicators.iter().enumerate() {
        let (x, y) = dot_center(index, indicators.len(), screen_width, screen_height);
        let color = if indicator.active {
            Color::new(255, 255, 255, 255)
        } else {
            Color::new(255, 255, 255, 110)
        };
        d.draw_circle_v(Vector2::new(x, y), DOT_RADIUS, color);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn single_dot_sits_at_the_horizontal_center() {
        let (x, y) = dot_center(0, 1, 960.0, 640.0);
        assert_eq!(x, 480.0);
        assert_eq!(y, 640.0 - DOT_MARGIN_BOTTOM);
    }

    #[test]
    fn row_is_centered_and_evenly_spaced() {
        let (x0, _) = dot_center(0, 5, 960.0, 640.0);
        let (x4, _) = dot_center(4, 5, 960.0, 640.0);
        assert_eq!((x0 + x4) * 0.5, 480.0);

        let (x1, _) = dot_center(1, 5, 960.0, 640.0);
        assert_eq!(x1 - x0, DOT_SPACING);
    }

    #[test]
    fn click_on_a_dot_resolves_to_its_index() {
        let (x, y) = dot_center(2, 4, 960.0, 640.0);
        assert_eq!(dot_under(x, y, 4, 960.0, 640.0), Some(2));
        // A couple of pixels off still counts.
        assert_eq!(dot_under(x + 3.0, y - 3.0, 4, 960.0, 640.0), Some(2));
    }

    #[test]
    fn click_between_dots_misses() {
        let (x0, y) = dot_center(0, 4, 960.0, 640.0);
        assert_eq!(dot_under(x0 + DOT_SPACING * 0.5, y, 4, 960.0, 640.0), None);
    }

    #[test]
    fn click_far_away_misses() {
        assert_eq!(dot_under(10.0, 10.0, 4, 960.0, 640.0), None);
    }
}
