use anyhow::Result;
use raylib::prelude::*;

use crate::constants::*;
use crate::controller::SlideIndexController;
use crate::indicator::{self, Indicator};
use crate::input::{ArrowSide, CarouselEvent, arrow_center_y, arrow_edge_x};
use crate::slide::Slide;
use crate::view::CarouselView;

/// Everything the controller renders into: the slide and indicator
/// collections plus the counter text. Both collections are built from the
/// same image list, so they are always the same length.
struct Stage {
    slides: Vec<Slide>,
    indicators: Vec<Indicator>,
    counter_text: String,
}

impl CarouselView for Stage {
    fn set_slide_visible(&mut self, index: usize, visible: bool) {
        self.slides[index].visible = visible;
    }

    fn set_indicator_active(&mut self, index: usize, active: bool) {
        self.indicators[index].active = active;
    }

    fn set_counter(&mut self, display_index: usize) {
        self.counter_text = format_counter(display_index, self.slides.len());
    }
}

pub fn format_counter(display_index: usize, total: usize) -> String {
    format!("{}/{}", display_index, total)
}

/// Counts down to the next automatic advance. Inactive unless an interval
/// was configured; manual navigation resets it.
pub struct AutoplayTimer {
    interval: Option<f32>,
    elapsed: f32,
}

impl AutoplayTimer {
    pub fn new(interval: Option<f32>) -> Self {
        Self {
            interval,
            elapsed: 0.0,
        }
    }

    /// Returns true when the interval expired this tick.
    pub fn tick(&mut self, dt: f32) -> bool {
        let Some(interval) = self.interval else {
            return false;
        };
        self.elapsed += dt;
        if self.elapsed >= interval {
            self.elapsed = 0.0;
            true
        } else {
            false
        }
    }

    pub fn reset(&mut self) {
        self.elapsed = 0.0;
    }
}

pub struct CarouselEngine {
    stage: Stage,
    controller: SlideIndexController,
    autoplay: AutoplayTimer,
}

impl CarouselEngine {
    pub fn new(textures: Vec<Texture2D>, autoplay_interval: Option<f32>) -> Result<Self> {
        let controller = SlideIndexController::new(textures.len())?;
        let indicators = (0..textures.len()).map(|_| Indicator::new()).collect();
        let mut engine = Self {
            stage: Stage {
                slides: textures.into_iter().map(Slide::new).collect(),
                indicators,
                counter_text: String::new(),
            },
            controller,
            autoplay: AutoplayTimer::new(autoplay_interval),
        };
        engine.sync();
        Ok(engine)
    }

    pub fn slide_count(&self) -> usize {
        self.controller.len()
    }

    /// Applies one navigation event and re-renders. Manual navigation also
    /// pushes the next automatic advance a full interval away.
    pub fn apply(&mut self, event: CarouselEvent) {
        match event {
            CarouselEvent::Next => self.controller.advance(),
            CarouselEvent::Previous => self.controller.retreat(),
            CarouselEvent::JumpTo(index) => self.controller.jump_to(index),
        }
        self.autoplay.reset();
        self.sync();
    }

    /// Advances the autoplay clock by `dt` seconds.
    pub fn tick(&mut self, dt: f32) {
        if self.autoplay.tick(dt) {
            self.controller.advance();
            self.sync();
        }
    }

    fn sync(&mut self) {
        self.controller.render(&mut self.stage);
    }

    pub fn draw(&self, d: &mut RaylibDrawHandle) {
        for slide in &self.stage.slides {
            slide.draw(d);
        }
        indicator::draw_row(d, &self.stage.indicators);
        self.draw_arrow(d, ArrowSide::Left);
        self.draw_arrow(d, ArrowSide::Right);
        d.draw_text(
            &self.stage.counter_text,
            COUNTER_MARGIN,
            COUNTER_MARGIN,
            COUNTER_FONT_SIZE,
            Color::WHITE,
        );
    }

    fn draw_arrow(&self, d: &mut RaylibDrawHandle, side: ArrowSide) {
        let screen_width = d.get_screen_width() as f32;
        let edge = arrow_edge_x(side, screen_width);
        let center_y = arrow_center_y(d.get_screen_height() as f32);
        let color = Color::new(255, 255, 255, 200);

        // Vertex order matters: raylib culls triangles wound the wrong way.
        match side {
            ArrowSide::Left => d.draw_triangle(
                Vector2::new(edge, center_y),
                Vector2::new(edge + ARROW_WIDTH, center_y + ARROW_HALF_HEIGHT),
                Vector2::new(edge + ARROW_WIDTH, center_y - ARROW_HALF_HEIGHT),
                color,
            ),
            ArrowSide::Right => d.draw_triangle(
                Vector2::new(edge + ARROW_WIDTH, center_y),
                Vector2::new(edge, center_y - ARROW_HALF_HEIGHT),
                Vector2::new(edge, center_y + ARROW_HALF_HEIGHT),
                color,
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn counter_text_is_one_based_over_total() {
        assert_eq!(format_counter(4, 5), "4/5");
        assert_eq!(format_counter(1, 1), "1/1");
    }

    #[test]
    fn autoplay_is_inert_without_an_interval() {
        let mut timer = AutoplayTimer::new(None);
        for _ in 0..1000 {
            assert!(!timer.tick(1.0));
        }
    }

    #[test]
    fn autoplay_fires_once_per_interval() {
        let mut timer = AutoplayTimer::new(Some(2.0));
        assert!(!timer.tick(1.5));
        assert!(timer.tick(0.6));
        // Elapsed restarts from zero after firing.
        assert!(!timer.tick(1.9));
        assert!(timer.tick(0.2));
    }

    #[test]
    fn reset_postpones_the_next_fire() {
        let mut timer = AutoplayTimer::new(Some(2.0));
        timer.tick(1.9);
        timer.reset();
        assert!(!timer.tick(1.9));
        assert!(timer.tick(0.1));
    }
}
