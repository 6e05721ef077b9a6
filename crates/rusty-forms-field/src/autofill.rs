// File: rusty-forms-field/src/autofill.rs
// Purpose: Heuristics for spotting browser / password-manager autofill

/// Decides whether a value change looks like autofill rather than typing
///
/// Implemented for any `Fn(&str, &str) -> bool` taking `(old, new)`.
pub trait AutofillDetector {
    fn is_autofill(&self, old_value: &str, new_value: &str) -> bool;
}

impl<F> AutofillDetector for F
where
    F: Fn(&str, &str) -> bool,
{
    fn is_autofill(&self, old_value: &str, new_value: &str) -> bool {
        self(old_value, new_value)
    }
}

/// Default minimum inserted span, in characters, treated as autofill
pub const DEFAULT_MIN_INSERTED_CHARS: usize = 3;

/// Flags a change that inserts several characters in one edit
///
/// The common prefix and suffix of the old and new values are stripped; what is
/// left of the new value is the inserted span. Typing inserts one character per
/// change, even over a selection; autofill and paste insert many, whether they
/// grow, keep or shrink the length. Pure deletions never count.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EditSpanDetector {
    min_inserted_chars: usize,
}

impl EditSpanDetector {
    pub fn new(min_inserted_chars: usize) -> Self {
        // A threshold of 0 or 1 would flag ordinary keystrokes.
        Self {
            min_inserted_chars: min_inserted_chars.max(2),
        }
    }

    pub fn min_inserted_chars(&self) -> usize {
        self.min_inserted_chars
    }
}

impl Default for EditSpanDetector {
    fn default() -> Self {
        Self::new(DEFAULT_MIN_INSERTED_CHARS)
    }
}

impl AutofillDetector for EditSpanDetector {
    fn is_autofill(&self, old_value: &str, new_value: &str) -> bool {
        inserted_span(old_value, new_value) >= self.min_inserted_chars
    }
}

/// Number of characters of `new` not shared with `old` as prefix or suffix
fn inserted_span(old: &str, new: &str) -> usize {
    let old: Vec<char> = old.chars().collect();
    let new: Vec<char> = new.chars().collect();

    let prefix = old.iter().zip(&new).take_while(|(a, b)| a == b).count();
    let suffix = old[prefix..]
        .iter()
        .rev()
        .zip(new[prefix..].iter().rev())
        .take_while(|(a, b)| a == b)
        .count();

    new.len() - prefix - suffix
}

/// Never reports autofill; fields only become touched on blur
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NeverAutofill;

impl AutofillDetector for NeverAutofill {
    fn is_autofill(&self, _old_value: &str, _new_value: &str) -> bool {
        false
    }
}
