use crate::presenter::{Frame, Presenter};

/// Holds the latest frame for the draw loop.
#[derive(Debug, Default)]
pub struct GuiPresenter {
    frame: Option<Frame>,
    changed: bool,
}

impl GuiPresenter {
    pub fn frame(&self) -> Option<&Frame> {
        self.frame.as_ref()
    }

    /// True once per rendered frame; the draw loop restarts slide animations on it.
    pub fn take_change(&mut self) -> bool {
        std::mem::take(&mut self.changed)
    }
}

impl Presenter for GuiPresenter {
    fn present(&mut self, frame: &Frame) {
        self.frame = Some(frame.clone());
        self.changed = true;
    }
}
