use std::time::Duration;

#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum TransitionState {
    Idle,                                // Ready to accept a new transition
    Transitioning { elapsed: Duration }, // Debounce lock held since the last transition started
}

/// Position of the navigator inside its deck.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub struct NavigatorState {
    current_index: usize,
    slide_count: usize,
    transition: TransitionState,
}

impl NavigatorState {
    /// `slide_count` is validated by the navigator before it gets here.
    pub(crate) fn new(slide_count: usize) -> Self {
        debug_assert!(slide_count >= 1);
        Self {
            current_index: 0,
            slide_count,
            transition: TransitionState::Idle,
        }
    }

    pub fn current_index(&self) -> usize {
        self.current_index
    }

    pub fn slide_count(&self) -> usize {
        self.slide_count
    }

    pub fn transition(&self) -> TransitionState {
        self.transition
    }

    pub fn is_transitioning(&self) -> bool {
        matches!(self.transition, TransitionState::Transitioning { .. })
    }

    pub fn is_first(&self) -> bool {
        self.current_index == 0
    }

    pub fn is_last(&self) -> bool {
        self.current_index + 1 == self.slide_count
    }

    pub fn contains(&self, index: usize) -> bool {
        index < self.slide_count
    }

    pub(crate) fn move_to(&mut self, index: usize) {
        debug_assert!(self.contains(index));
        self.current_index = index;
        self.transition = TransitionState::Transitioning { elapsed: Duration::ZERO };
    }

    pub(crate) fn release(&mut self) {
        self.transition = TransitionState::Idle;
    }

    /// Advances the lock timer. Returns true when the lock was released by this tick.
    pub(crate) fn tick(&mut self, dt: Duration, lock: Duration) -> bool {
        match self.transition {
            TransitionState::Idle => false,
            TransitionState::Transitioning { elapsed } => {
                let elapsed = elapsed.saturating_add(dt);
                if elapsed >= lock {
                    self.transition = TransitionState::Idle;
                    true
                } else {
                    self.transition = TransitionState::Transitioning { elapsed };
                    false
                }
            }
        }
    }
}
