//! Action enum for decoupling input handling from state changes.
//!
//! Actions represent user intents that can be logged or bound to several inputs.

/// Actions that can be dispatched from event handlers.
///
/// These represent user intents and are processed by the App to update state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    // === Application ===
    /// Quit the application
    Quit,

    // === Picking ===
    /// Start or stop drawing (one instant draw in instant mode)
    Toggle,
    /// Reveal a draw after a short preview animation
    Preview,

    // === Range field ===
    /// Raise the upper bound by one
    IncrementRange,
    /// Lower the upper bound by one (never below 1)
    DecrementRange,
    /// Start typing a new upper bound
    EditRange,
    /// Add character to the range field
    RangeInputChar(char),
    /// Delete last character of the range field
    RangeInputBackspace,
    /// Apply the typed upper bound
    CommitRange,
    /// Discard the typed upper bound
    CancelRangeEdit,

    // === Options ===
    /// Flip instant mode
    ToggleInstantMode,
    /// Flip the always-on-top hint
    ToggleAlwaysOnTop,

    // === Popups ===
    /// Open help popup
    OpenHelp,
    /// Open about popup
    OpenAbout,
    /// Close whichever popup is open
    ClosePopup,

    /// No action
    None,
}
