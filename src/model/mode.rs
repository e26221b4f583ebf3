/// Which face of the navigator the renderer should show.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DisplayMode {
    /// Clickable breadcrumb segments.
    Segmented,
    /// Raw text field pre-filled with the path string.
    Editing,
}

impl Default for DisplayMode {
    fn default() -> Self {
        Self::Segmented
    }
}

impl DisplayMode {
    pub fn is_editing(&self) -> bool {
        matches!(self, Self::Editing)
    }
}

/// What caused the typed text to be validated.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CommitTrigger {
    Enter,
    Escape,
    FocusLost,
    /// Leaving edit mode through the toggle control.
    Toggle,
}
