// Copyright 2026 the Glint Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Press/release pairing for entity taps.
//!
//! A tap activates an occurrence only when the pointer goes down and comes
//! back up over the same occurrence. Occurrences are compared by value, so
//! a restyle between press and release does not break the pair, but a
//! re-detection that moves or changes the entity does.

use glint_entity::Occurrence;

/// Result of a release.
#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) enum PressResult {
    /// Down and up landed on this occurrence.
    Activate(Occurrence),
    /// No press was active, or the release landed elsewhere.
    Suppressed,
}

/// Single-pointer press tracker.
#[derive(Clone, Debug, Default)]
pub(crate) struct PressState {
    pressed: Option<Occurrence>,
}

impl PressState {
    /// Record a press over `target`. Returns whether an occurrence is now pressed.
    pub(crate) fn on_down(&mut self, target: Option<&Occurrence>) -> bool {
        self.pressed = target.cloned();
        self.pressed.is_some()
    }

    /// Finish the press with a release over `target`.
    pub(crate) fn on_up(&mut self, target: Option<&Occurrence>) -> PressResult {
        match (self.pressed.take(), target) {
            (Some(down), Some(up)) if down == *up => PressResult::Activate(down),
            _ => PressResult::Suppressed,
        }
    }

    /// Forget any active press.
    pub(crate) fn cancel(&mut self) {
        self.pressed = None;
    }

    pub(crate) fn pressed(&self) -> Option<&Occurrence> {
        self.pressed.as_ref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glint_entity::{Payload, TextRange};

    fn tag(start: usize) -> Occurrence {
        Occurrence::new(TextRange::new(start, 2), Payload::Tag("#a".into()))
    }

    #[test]
    fn same_target_activates() {
        let mut state = PressState::default();
        assert!(state.on_down(Some(&tag(0))));
        assert_eq!(state.on_up(Some(&tag(0))), PressResult::Activate(tag(0)));
        assert!(state.pressed().is_none());
    }

    #[test]
    fn different_or_missing_target_suppresses() {
        let mut state = PressState::default();
        state.on_down(Some(&tag(0)));
        assert_eq!(state.on_up(Some(&tag(4))), PressResult::Suppressed);
        state.on_down(Some(&tag(0)));
        assert_eq!(state.on_up(None), PressResult::Suppressed);
        assert!(!state.on_down(None));
        assert_eq!(state.on_up(Some(&tag(0))), PressResult::Suppressed);
    }

    #[test]
    fn cancel_forgets_the_press() {
        let mut state = PressState::default();
        state.on_down(Some(&tag(0)));
        state.cancel();
        assert_eq!(state.on_up(Some(&tag(0))), PressResult::Suppressed);
    }
}
