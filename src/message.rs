use crate::model::CommitTrigger;
use std::path::PathBuf;

/// Input events a renderer feeds into the navigator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NavEvent {
    // Navigation
    Initialize(PathBuf),
    SegmentClicked(usize),
    SegmentLabelClicked(String),
    SegmentHovered(Option<usize>),

    // Modes
    ToggleRequested,

    // Text editing
    TextChanged(String),
    TabPressed,
    CommitRequested(CommitTrigger),
}

/// Notification fired to change listeners after a state transition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Change {
    Initialized,
    SegmentSelected { index: usize },
    EnteredEditing,
    TextEdited,
    HintResolved,
    SuggestionAccepted,
    /// Edit mode was left; `accepted` is false when the typed text was reverted.
    Committed { accepted: bool },
    Hovered,
}
