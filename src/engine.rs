use crate::render::Frame;

/// Output surface: receives one frame per navigation event.
pub trait Engine {
    fn present(&mut self, frame: &Frame<'_>);
}
