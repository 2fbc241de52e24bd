//! Driven port holding the currently selected practice.

use crate::domain::selection::SelectedPractice;

/// Zero-or-one practice shared by every view for the session.
///
/// `set` replaces any current value unconditionally; `clear` makes it absent.
pub trait SelectionContext: Send + Sync {
    /// The selected practice, if any.
    fn current(&self) -> Option<SelectedPractice>;

    /// Replace the selection.
    fn set(&self, practice: SelectedPractice);

    /// Remove the selection.
    fn clear(&self);
}
