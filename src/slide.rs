use raylib::prelude::*;

use crate::constants::*;

pub struct Slide {
    texture: Texture2D,
    pub visible: bool,
}

impl Slide {
    pub fn new(texture: Texture2D) -> Self {
        // The engine makes the current slide visible on the first render pass.
        Self {
            texture,
            visible: false,
        }
    }

    pub fn draw(&self, d: &mut RaylibDrawHandle) {
        if !self.visible {
            return;
        }

        let screen_width = d.get_screen_width() as f32;
        let screen_height = d.get_screen_height() as f32;

        let tex_width = self.texture.width() as f32;
        let tex_height = self.texture.height() as f32;

        let scale = fit_scale(tex_width, tex_height, screen_width, screen_height);
        let scaled_width = tex_width * scale;
        let scaled_height = tex_height * scale;

        // Centered in the window, whatever its current size.
        let dest = Rectangle::new(
            (screen_width - scaled_width) * 0.5,
            (screen_height - scaled_height) * 0.5,
            scaled_width,
            scaled_height,
        );

        d.draw_texture_pro(
            &self.texture,
            Rectangle::new(0.0, 0.0, tex_width, tex_height),
            dest,
            Vector2::new(0.0, 0.0),
            0.0,
            Color::WHITE,
        );
    }
}

/// Largest scale that keeps the texture within `SLIDE_FIT` of the window,
/// never upscaling beyond 1:1.
pub fn fit_scale(tex_width: f32, tex_height: f32, screen_width: f32, screen_height: f32) -> f32 {
    let fit_w = screen_width * SLIDE_FIT / tex_width;
    let fit_h = screen_height * SLIDE_FIT / tex_height;
    fit_w.min(fit_h).min(1.0)
}
