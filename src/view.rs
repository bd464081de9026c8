/// Surface the controller renders into. The engine implements this by
/// toggling flags on its slide and indicator collections; tests use a
/// recording fake.
pub trait CarouselView {
    fn set_slide_visible(&mut self, index: usize, visible: bool);
    fn set_indicator_active(&mut self, index: usize, active: bool);

    /// Receives the 1-based position of the current slide for display.
    fn set_counter(&mut self, display_index: usize);
}
