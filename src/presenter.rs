//! Output side of the navigator.
//!
//! A [`Presenter`] is handed to the navigator at construction and receives a
//! [`Frame`] after every successful transition (and once for the initial
//! slide). Styling and drawing live behind this trait.

use std::fmt;

use crate::state::NavigatorState;

/// Derived UI state for one render.
#[derive(Debug, Clone, PartialEq)]
pub struct Frame {
    pub index: usize,
    pub slide_count: usize,
    pub progress: f32,       // 0..=100, exact
    pub theme: String,       // Theme label of the active slide
    pub prev_disabled: bool,
    pub next_visible: bool,
}

impl Frame {
    pub fn from_state(state: &NavigatorState, theme: &str) -> Self {
        let index = state.current_index();
        let slide_count = state.slide_count();
        Self {
            index,
            slide_count,
            progress: (index + 1) as f32 * 100.0 / slide_count as f32,
            theme: theme.to_string(),
            prev_disabled: state.is_first(),
            next_visible: !state.is_last(),
        }
    }

    pub fn progress_percent(&self) -> u8 {
        self.progress.round().clamp(0.0, 100.0) as u8
    }
}

impl fmt::Display for Frame {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "slide {}/{} progress {:>3}% theme={} prev={} next={}",
            self.index + 1,
            self.slide_count,
            self.progress_percent(),
            self.theme,
            if self.prev_disabled { "disabled" } else { "enabled" },
            if self.next_visible { "visible" } else { "hidden" },
        )
    }
}

pub trait Presenter {
    fn present(&mut self, frame: &Frame);
}

impl Presenter for () {
    fn present(&mut self, _frame: &Frame) {}
}

impl<P: Presenter + ?Sized> Presenter for &mut P {
    fn present(&mut self, frame: &Frame) {
        (**self).present(frame);
    }
}

/// Keeps every frame it is handed, in order.
#[derive(Debug, Default)]
pub struct Recorder {
    frames: Vec<Frame>,
}

impl Recorder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn frames(&self) -> &[Frame] {
        &self.frames
    }

    pub fn last(&self) -> Option<&Frame> {
        self.frames.last()
    }

    pub fn len(&self) -> usize {
        self.frames.len()
    }

    pub fn is_empty(&self) -> bool {
        self.frames.is_empty()
    }
}

impl Presenter for Recorder {
    fn present(&mut self, frame: &Frame) {
        self.frames.push(frame.clone());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn progress_rounds_to_nearest_percent() {
        let mut state = NavigatorState::new(3);
        assert_eq!(Frame::from_state(&state, "a").progress_percent(), 33);
        state.move_to(1);
        assert_eq!(Frame::from_state(&state, "a").progress_percent(), 67);
        state.move_to(2);
        assert_eq!(Frame::from_state(&state, "a").progress_percent(), 100);
    }

    #[test]
    fn four_slides_second_is_half_way() {
        let mut state = NavigatorState::new(4);
        state.move_to(1);
        let frame = Frame::from_state(&state, "dusk");
        assert_eq!(frame.progress_percent(), 50);
        assert_eq!(frame.theme, "dusk");
        assert!(!frame.prev_disabled);
        assert!(frame.next_visible);
    }

    #[test]
    fn display_is_one_line_summary() {
        let state = NavigatorState::new(2);
        let frame = Frame::from_state(&state, "ember");
        assert_eq!(
            frame.to_string(),
            "slide 1/2 progress  50% theme=ember prev=disabled next=visible"
        );
    }

    #[test]
    fn recorder_keeps_frames_in_order() {
        let mut recorder = Recorder::new();
        let mut state = NavigatorState::new(2);
        recorder.present(&Frame::from_state(&state, "a"));
        state.move_to(1);
        recorder.present(&Frame::from_state(&state, "b"));
        assert_eq!(recorder.len(), 2);
        assert_eq!(recorder.frames()[0].theme, "a");
        assert_eq!(recorder.last().map(|f| f.index), Some(1));
    }
}
