use raylib::prelude::*;

use crate::constants::*;

/// Quit-confirmation dialog. Hidden by default; Escape opens it. While open,
/// Enter confirms, Escape dismisses, and a click outside the dialog box also
/// dismisses. Navigation input is ignored while it is up.
pub struct QuitOverlay {
    visible: bool,
}

impl QuitOverlay {
    pub fn new() -> Self {
        Self { visible: false }
    }

    pub fn visible(&self) -> bool {
        self.visible
    }

    pub fn show(&mut self) {
        self.visible = true;
    }

    pub fn hide(&mut self) {
        self.visible = false;
    }

    pub fn draw(&self, d: &mut RaylibDrawHandle) {
        if !self.visible {
            return;
        }

        let screen_width = d.get_screen_width() as f32;
        let screen_height = d.get_screen_height() as f32;

        // Dim everything behind the dialog.
        d.draw_rectangle(
            0,
            0,
            screen_width as i32,
            screen_height as i32,
            Color::new(0, 0, 0, 160),
        );

        let (x, y, w, h) = dialog_rect(screen_width, screen_height);
        d.draw_rectangle(x as i32, y as i32, w as i32, h as i32, Color::new(30, 30, 30, 255));
        d.draw_rectangle_lines(x as i32, y as i32, w as i32, h as i32, Color::GRAY);

        d.draw_text(
            "Quit the carousel?",
            (x + 24.0) as i32,
            (y + 28.0) as i32,
            DIALOG_FONT_SIZE,
            Color::WHITE,
        );
        d.draw_text(
            "Enter: quit    Esc: keep browsing",
            (x + 24.0) as i32,
            (y + h - 28.0 - DIALOG_FONT_SIZE as f32) as i32,
            DIALOG_FONT_SIZE,
            Color::LIGHTGRAY,
        );
    }
}

/// Dialog box position and size, centered in the window.
pub fn dialog_rect(screen_width: f32, screen_height: f32) -> (f32, f32, f32, f32) {
    (
        (screen_width - DIALOG_WIDTH) * 0.5,
        (screen_height - DIALOG_HEIGHT) * 0.5,
        DIALOG_WIDTH,
        DIALOG_HEIGHT,
    )
}

/// True when a click at the given position lands outside the dialog box,
/// which dismisses the overlay.
pub fn click_dismisses(cursor_x: f32, cursor_y: f32, screen_width: f32, screen_height: f32) -> bool {
    let (x, y, w, h) = dialog_rect(screen_width, screen_height);
    cursor_x < x || cursor_x > x + w || cursor_y < y || cursor_y > y + h
}
