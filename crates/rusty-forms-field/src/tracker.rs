// File: rusty-forms-field/src/tracker.rs
// Purpose: Touch/focus tracking and the rule for when errors become visible

use rusty_forms_rules::ValidationResult;
use serde::Serialize;

/// Why a field became touched
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TouchReason {
    /// First blur after interaction
    Blur,
    /// Bulk value replacement detected on change
    Autofill,
    /// Programmatic touch, e.g. form submission
    Submit,
}

/// Per-field interaction state
///
/// `display_errors` is empty while `touched` is false, and once touched it mirrors
/// the errors of the latest evaluation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FieldValidationState {
    pub(crate) touched: bool,
    pub(crate) focused: bool,
    pub(crate) last_value: String,
    pub(crate) display_errors: Vec<String>,
}

impl FieldValidationState {
    pub fn touched(&self) -> bool {
        self.touched
    }

    pub fn focused(&self) -> bool {
        self.focused
    }

    pub fn last_value(&self) -> &str {
        &self.last_value
    }

    pub fn display_errors(&self) -> &[String] {
        &self.display_errors
    }
}

/// Tracks interaction flags and decides what part of a result is surfaced
#[derive(Debug, Clone, Default)]
pub struct InteractionTracker {
    state: FieldValidationState,
}

impl InteractionTracker {
    pub fn new(initial_value: impl Into<String>) -> Self {
        Self {
            state: FieldValidationState {
                last_value: initial_value.into(),
                ..Default::default()
            },
        }
    }

    pub fn state(&self) -> &FieldValidationState {
        &self.state
    }

    pub fn is_touched(&self) -> bool {
        self.state.touched
    }

    pub fn focus(&mut self) {
        self.state.focused = true;
    }

    pub fn unfocus(&mut self) {
        self.state.focused = false;
    }

    /// Record a blur. Returns `true` if this blur touched the field.
    pub fn blur(&mut self) -> bool {
        self.unfocus();
        self.touch(TouchReason::Blur)
    }

    /// Mark the field touched. Returns `true` on the untouched -> touched edge.
    pub fn touch(&mut self, reason: TouchReason) -> bool {
        if self.state.touched {
            return false;
        }
        tracing::trace!(?reason, "field touched");
        self.state.touched = true;
        true
    }

    pub fn record_value(&mut self, value: &str) {
        if self.state.last_value != value {
            self.state.last_value.clear();
            self.state.last_value.push_str(value);
        }
    }

    /// Recompute the visible errors from the latest result
    pub fn surface(&mut self, result: &ValidationResult) {
        self.state.display_errors.clear();
        if self.state.touched {
            self.state.display_errors.extend_from_slice(result.errors());
        }
    }

    /// Forget interaction history. Focus and the last value are kept: the input
    /// element itself did not change.
    pub fn reset(&mut self) {
        self.state.touched = false;
        self.state.display_errors.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn failing() -> ValidationResult {
        ValidationResult::from_errors(vec!["City is required".into()])
    }

    #[test]
    fn test_untouched_hides_errors() {
        let mut tracker = InteractionTracker::new("");
        tracker.surface(&failing());
        assert!(tracker.state().display_errors().is_empty());
    }

    #[test]
    fn test_focus_does_not_touch() {
        let mut tracker = InteractionTracker::new("");
        tracker.focus();
        tracker.surface(&failing());
        assert!(tracker.state().focused());
        assert!(!tracker.is_touched());
        assert!(tracker.state().display_errors().is_empty());
    }

    #[test]
    fn test_blur_touches_once() {
        let mut tracker = InteractionTracker::new("");
        tracker.focus();
        assert!(tracker.blur());
        assert!(!tracker.blur());
        assert!(!tracker.state().focused());
        tracker.surface(&failing());
        assert_eq!(tracker.state().display_errors(), ["City is required"]);
    }

    #[test]
    fn test_unfocus_does_not_touch() {
        let mut tracker = InteractionTracker::new("");
        tracker.focus();
        tracker.unfocus();
        assert!(!tracker.state().focused());
        assert!(!tracker.is_touched());
    }

    #[test]
    fn test_touched_mirrors_latest_result() {
        let mut tracker = InteractionTracker::new("");
        tracker.touch(TouchReason::Autofill);
        tracker.surface(&failing());
        tracker.surface(&ValidationResult::valid());
        assert!(tracker.state().display_errors().is_empty());
    }

    #[test]
    fn test_reset_clears_touch_but_keeps_value() {
        let mut tracker = InteractionTracker::new("Paris");
        tracker.focus();
        tracker.blur();
        tracker.surface(&failing());
        tracker.focus();
        tracker.reset();

        let state = tracker.state();
        assert!(!state.touched());
        assert!(state.focused());
        assert_eq!(state.last_value(), "Paris");
        assert!(state.display_errors().is_empty());
    }

    #[test]
    fn test_record_value() {
        let mut tracker = InteractionTracker::new("a");
        tracker.record_value("ab");
        assert_eq!(tracker.state().last_value(), "ab");
    }
}
