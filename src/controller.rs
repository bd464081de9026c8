use anyhow::{Result, ensure};

use crate::view::CarouselView;

/// Owns the current slide index over a fixed, non-empty set of slides.
///
/// All index arithmetic lives here; pushing the result to the screen goes
/// through [`CarouselView`] so the navigation logic stays independent of the
/// windowing layer.
pub struct SlideIndexController {
    current: usize,
    len: usize,
}

impl SlideIndexController {
    pub fn new(len: usize) -> Result<Self> {
        ensure!(len > 0, "carousel needs at least one slide");
        Ok(Self { current: 0, len })
    }

    pub fn current(&self) -> usize {
        self.current
    }

    pub fn len(&self) -> usize {
        self.len
    }

    /// Moves to the next slide, wrapping from the last back to the first.
    pub fn advance(&mut self) {
        self.current = (self.current + 1) % self.len;
    }

    /// Moves to the previous slide, wrapping from the first to the last.
    pub fn retreat(&mut self) {
        self.current = (self.current + self.len - 1) % self.len;
    }

    /// Jumps straight to `index`. Indices come from indicator positions and
    /// are in range by construction; anything larger is clamped to the last
    /// slide so `current` can never leave `0..len`.
    pub fn jump_to(&mut self, index: usize) {
        self.current = index.min(self.len - 1);
    }

    /// Synchronizes the view with the current index: exactly one slide
    /// visible, exactly one indicator active, counter showing the 1-based
    /// position.
    pub fn render(&self, view: &mut impl CarouselView) {
        for i in 0..self.len {
            view.set_slide_visible(i, i == self.current);
            view.set_indicator_active(i, i == self.current);
        }
        view.set_counter(self.current + 1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // Records what render() asked for, standing in for the drawing layer.
    struct FakeView {
        visible: Vec<bool>,
        active: Vec<bool>,
        counter: usize,
    }

    impl FakeView {
        fn new(len: usize) -> Self {
            Self {
                visible: vec![false; len],
                active: vec![false; len],
                counter: 0,
            }
        }
    }

    impl CarouselView for FakeView {
        fn set_slide_visible(&mut self, index: usize, visible: bool) {
            self.visible[index] = visible;
        }

        fn set_indicator_active(&mut self, index: usize, active: bool) {
            self.active[index] = active;
        }

        fn set_counter(&mut self, display_index: usize) {
            self.counter = display_index;
        }
    }

    #[test]
    fn rejects_empty_carousel() {
        assert!(SlideIndexController::new(0).is_err());
    }

    #[test]
    fn starts_at_first_slide() {
        let ctrl = SlideIndexController::new(3).unwrap();
        assert_eq!(ctrl.current(), 0);
    }

    #[test]
    fn advance_wraps_after_full_cycle() {
        // N = 4: three slides forward, then the wrap back to 0.
        let mut ctrl = SlideIndexController::new(4).unwrap();
        ctrl.advance();
        assert_eq!(ctrl.current(), 1);
        ctrl.advance();
        ctrl.advance();
        assert_eq!(ctrl.current(), 3);
        ctrl.advance();
        assert_eq!(ctrl.current(), 0);
    }

    #[test]
    fn retreat_wraps_backward_from_first() {
        let mut ctrl = SlideIndexController::new(3).unwrap();
        ctrl.retreat();
        assert_eq!(ctrl.current(), 2);
    }

    #[test]
    fn retreat_undoes_advance_from_every_index() {
        let mut ctrl = SlideIndexController::new(5).unwrap();
        for start in 0..5 {
            ctrl.jump_to(start);
            ctrl.advance();
            ctrl.retreat();
            assert_eq!(ctrl.current(), start);
        }
    }

    #[test]
    fn index_stays_in_range_over_arbitrary_navigation() {
        let mut ctrl = SlideIndexController::new(3).unwrap();
        for step in 0..100 {
            if step % 3 == 0 {
                ctrl.retreat();
            } else {
                ctrl.advance();
            }
            assert!(ctrl.current() < ctrl.len());
        }
    }

    #[test]
    fn n_advances_return_to_start() {
        for n in 1..6 {
            let mut ctrl = SlideIndexController::new(n).unwrap();
            ctrl.jump_to(n / 2);
            let start = ctrl.current();
            for _ in 0..n {
                ctrl.advance();
            }
            assert_eq!(ctrl.current(), start);
        }
    }

    #[test]
    fn jump_is_independent_of_prior_state() {
        let mut ctrl = SlideIndexController::new(5).unwrap();
        ctrl.advance();
        ctrl.advance();
        ctrl.jump_to(3);
        assert_eq!(ctrl.current(), 3);
    }

    #[test]
    fn out_of_range_jump_clamps_to_last() {
        let mut ctrl = SlideIndexController::new(4).unwrap();
        ctrl.jump_to(99);
        assert_eq!(ctrl.current(), 3);
    }

    #[test]
    fn render_marks_exactly_one_slide_and_indicator() {
        let mut ctrl = SlideIndexController::new(5).unwrap();
        let mut view = FakeView::new(5);

        ctrl.jump_to(3);
        ctrl.render(&mut view);

        assert_eq!(view.visible.iter().filter(|v| **v).count(), 1);
        assert!(view.visible[3]);
        assert_eq!(view.active.iter().filter(|a| **a).count(), 1);
        assert!(view.active[3]);
        assert_eq!(view.counter, 4); // 1-based display
    }

    #[test]
    fn render_clears_previously_visible_positions() {
        let mut ctrl = SlideIndexController::new(3).unwrap();
        let mut view = FakeView::new(3);

        ctrl.render(&mut view);
        assert!(view.visible[0]);

        ctrl.advance();
        ctrl.render(&mut view);
        assert!(!view.visible[0]);
        assert!(view.visible[1]);
        assert!(!view.active[0]);
        assert!(view.active[1]);
        assert_eq!(view.counter, 2);
    }
}
