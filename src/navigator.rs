//! The slide navigation state machine.
//!
//! [`SlideNavigator`] owns the deck and the current position. Every
//! successful transition deactivates the old slide, activates the new one and
//! hands a fresh [`Frame`] to the injected [`Presenter`]. Navigation requests
//! that cannot be honoured are dropped and reported as [`Outcome::Ignored`];
//! they never surface as errors.
//!
//! With a debounce interval configured, a transition holds a lock until
//! [`SlideNavigator::update`] has accumulated that much time. Requests arriving
//! while the lock is held are dropped, not queued.

use std::time::Duration;

use tracing::{debug, info};

use crate::constants::DEFAULT_DEBOUNCE_MS;
use crate::error::NavigatorError;
use crate::input::Command;
use crate::presenter::{Frame, Presenter};
use crate::slide::Slide;
use crate::state::NavigatorState;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavigatorConfig {
    /// Transition lock. `None` lets transitions follow each other immediately.
    pub debounce: Option<Duration>,
}

impl NavigatorConfig {
    pub fn immediate() -> Self {
        Self { debounce: None }
    }

    /// Zero disables the lock.
    pub fn from_millis(debounce_ms: u64) -> Self {
        Self {
            debounce: (debounce_ms > 0).then(|| Duration::from_millis(debounce_ms)),
        }
    }

    fn lock(&self) -> Option<Duration> {
        self.debounce.filter(|d| !d.is_zero())
    }
}

impl Default for NavigatorConfig {
    fn default() -> Self {
        Self::from_millis(DEFAULT_DEBOUNCE_MS)
    }
}

/// Why a navigation request was dropped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Ignored {
    AlreadyThere, // Target is the current slide
    OutOfRange,   // Target outside the deck, including next/prev at the ends
    Locked,       // Debounce lock still held
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Moved { from: usize, to: usize },
    Ignored(Ignored),
}

impl Outcome {
    pub fn is_moved(&self) -> bool {
        matches!(self, Outcome::Moved { .. })
    }
}

pub struct SlideNavigator<P: Presenter> {
    slides: Vec<Slide>,
    state: NavigatorState,
    config: NavigatorConfig,
    presenter: P,
    frame: Frame,
}

impl<P: Presenter> SlideNavigator<P> {
    /// Activates the first slide and renders it.
    pub fn new(
        mut slides: Vec<Slide>,
        config: NavigatorConfig,
        mut presenter: P,
    ) -> Result<Self, NavigatorError> {
        if slides.is_empty() {
            return Err(NavigatorError::EmptyDeck);
        }

        for (i, slide) in slides.iter_mut().enumerate() {
            slide.is_active = i == 0;
        }

        let state = NavigatorState::new(slides.len());
        let frame = Frame::from_state(&state, slides[0].theme());
        presenter.present(&frame);

        debug!(slides = slides.len(), debounce = ?config.lock(), "navigator ready");

        Ok(Self {
            slides,
            state,
            config,
            presenter,
            frame,
        })
    }

    pub fn go_to(&mut self, target: usize) -> Outcome {
        let from = self.state.current_index();

        if target == from {
            return self.ignore(Some(target), Ignored::AlreadyThere);
        }
        if !self.state.contains(target) {
            return self.ignore(Some(target), Ignored::OutOfRange);
        }
        if self.config.lock().is_some() && self.state.is_transitioning() {
            return self.ignore(Some(target), Ignored::Locked);
        }

        self.slides[from].is_active = false;
        self.state.move_to(target);
        self.slides[target].is_active = true;

        info!(from, to = target, theme = self.slides[target].theme(), "slide transition");
        self.render();

        if self.config.lock().is_none() {
            self.state.release();
        }

        Outcome::Moved { from, to: target }
    }

    pub fn next(&mut self) -> Outcome {
        // current + 1 == slide_count at the last slide, which go_to rejects
        self.go_to(self.state.current_index() + 1)
    }

    pub fn prev(&mut self) -> Outcome {
        match self.state.current_index().checked_sub(1) {
            Some(target) => self.go_to(target),
            None => self.ignore(None, Ignored::OutOfRange),
        }
    }

    pub fn replay(&mut self) -> Outcome {
        self.go_to(0)
    }

    pub fn apply(&mut self, command: Command) -> Outcome {
        match command {
            Command::Advance => self.next(),
            Command::Retreat => self.prev(),
            Command::JumpTo(index) => self.go_to(index),
            Command::Replay => self.replay(),
        }
    }

    /// Advances the debounce timer by `dt`. Never renders.
    pub fn update(&mut self, dt: Duration) {
        if let Some(lock) = self.config.lock() {
            if self.state.tick(dt, lock) {
                debug!(index = self.state.current_index(), "transition lock released");
            }
        }
    }

    fn render(&mut self) {
        self.frame = Frame::from_state(&self.state, self.slides[self.state.current_index()].theme());
        self.presenter.present(&self.frame);
    }

    /// `target` is `None` when the request points before the first slide.
    fn ignore(&self, target: Option<usize>, reason: Ignored) -> Outcome {
        debug!(
            current = self.state.current_index(),
            ?target,
            ?reason,
            "navigation request ignored"
        );
        Outcome::Ignored(reason)
    }

    pub fn current_index(&self) -> usize {
        self.state.current_index()
    }

    pub fn slide_count(&self) -> usize {
        self.state.slide_count()
    }

    pub fn is_transitioning(&self) -> bool {
        self.state.is_transitioning()
    }

    pub fn slides(&self) -> &[Slide] {
        &self.slides
    }

    pub fn current_slide(&self) -> &Slide {
        &self.slides[self.state.current_index()]
    }

    /// Last rendered frame.
    pub fn frame(&self) -> &Frame {
        &self.frame
    }

    pub fn presenter(&self) -> &P {
        &self.presenter
    }

    pub fn presenter_mut(&mut self) -> &mut P {
        &mut self.presenter
    }
}
