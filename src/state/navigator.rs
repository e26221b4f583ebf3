// Navigator controller - the breadcrumb state machine
use super::hint_state::HintState;
use super::listeners::{ListenerId, Listeners};
use super::path_model::PathModel;
use crate::error::InvalidPathError;
use crate::io::{FileSystem, HintRequest, HintResolver, HintResponse};
use crate::message::{Change, NavEvent};
use crate::model::{CommitTrigger, DisplayMode};
use std::path::{Path, PathBuf};

/// Owns the path model, display mode and hint state, and turns user input
/// into transitions.
///
/// Renderers read the accessors and subscribe to [`Change`]s; navigation
/// listeners registered with [`on_path_changed`](Self::on_path_changed) hear
/// about every path that was actually set.
pub struct NavigatorController<F: FileSystem> {
    fs: F,
    resolver: Option<HintResolver>,
    commit_requires_directory: bool,

    model: PathModel,
    mode: DisplayMode,
    hint: HintState,
    hovered: Option<usize>,
    focus_requested: bool,

    change_listeners: Listeners<Change>,
    path_listeners: Listeners<Path>,
}

impl<F: FileSystem> NavigatorController<F> {
    pub fn new(fs: F, path: impl AsRef<Path>) -> Result<Self, InvalidPathError> {
        Ok(Self::with_model(fs, PathModel::new(path)?))
    }

    pub fn with_model(fs: F, model: PathModel) -> Self {
        let mut hint = HintState::new();
        hint.set_text(model.display_string());

        Self {
            fs,
            resolver: Some(HintResolver::default()),
            commit_requires_directory: false,
            model,
            mode: DisplayMode::Segmented,
            hint,
            hovered: None,
            focus_requested: false,
            change_listeners: Listeners::new(),
            path_listeners: Listeners::new(),
        }
    }

    /// Use `resolver` for hints, or disable hints with `None`.
    pub fn with_hints(mut self, resolver: Option<HintResolver>) -> Self {
        self.resolver = resolver;
        self
    }

    /// Only accept committed text that names a directory.
    pub fn with_commit_requires_directory(mut self, required: bool) -> Self {
        self.commit_requires_directory = required;
        self
    }

    // --- Observed state ---

    pub fn current_path(&self) -> &Path {
        self.model.current()
    }

    pub fn segments(&self) -> &[String] {
        self.model.segments()
    }

    pub fn mode(&self) -> DisplayMode {
        self.mode
    }

    pub fn typed_text(&self) -> &str {
        &self.hint.typed_text
    }

    pub fn suggestion(&self) -> Option<&Path> {
        self.hint.suggestion.as_deref()
    }

    pub fn ghost_suffix(&self) -> Option<&str> {
        self.hint.ghost_suffix()
    }

    pub fn hovered(&self) -> Option<usize> {
        self.hovered
    }

    /// The highlighted segment: always the leaf, since clicks navigate
    /// immediately.
    pub fn selected_segment(&self) -> Option<usize> {
        self.model.segments().len().checked_sub(1)
    }

    pub fn display_string(&self) -> String {
        self.model.display_string()
    }

    pub fn filesystem(&self) -> &F {
        &self.fs
    }

    /// True once after entering edit mode; the renderer should focus the
    /// text field.
    pub fn take_focus_request(&mut self) -> bool {
        std::mem::take(&mut self.focus_requested)
    }

    // --- Subscriptions ---

    pub fn subscribe(&mut self, listener: impl FnMut(&Change) + 'static) -> ListenerId {
        self.change_listeners.add(Box::new(listener))
    }

    pub fn unsubscribe(&mut self, id: ListenerId) -> bool {
        self.change_listeners.remove(id)
    }

    pub fn on_path_changed(&mut self, listener: impl FnMut(&Path) + 'static) -> ListenerId {
        self.path_listeners.add(Box::new(listener))
    }

    pub fn remove_path_listener(&mut self, id: ListenerId) -> bool {
        self.path_listeners.remove(id)
    }

    // --- Transitions ---

    pub fn handle(&mut self, event: NavEvent) -> Result<(), InvalidPathError> {
        match event {
            NavEvent::Initialize(path) => return self.navigate_to(path),
            NavEvent::SegmentClicked(index) => self.click_segment(index),
            NavEvent::SegmentLabelClicked(label) => self.click_segment_label(&label),
            NavEvent::SegmentHovered(index) => self.hover_segment(index),
            NavEvent::ToggleRequested => self.toggle(),
            NavEvent::TextChanged(text) => self.text_changed(text),
            NavEvent::TabPressed => self.accept_suggestion(),
            NavEvent::CommitRequested(trigger) => self.commit(trigger),
        }
        Ok(())
    }

    /// Replace the path from outside, returning to the segmented view.
    pub fn navigate_to(&mut self, path: impl AsRef<Path>) -> Result<(), InvalidPathError> {
        self.model.set_path(path)?;
        self.path_set();
        self.leave_editing();
        self.emit(Change::Initialized);
        Ok(())
    }

    pub fn click_segment(&mut self, index: usize) {
        let Some(target) = self.model.ancestor_up_to(index) else {
            log::debug!("ignoring click on segment {} of {}", index, self.segments().len());
            return;
        };
        self.set_path(&target);
        self.leave_editing();
        self.emit(Change::SegmentSelected { index });
    }

    /// Click by label; the first segment with that label is used.
    pub fn click_segment_label(&mut self, label: &str) {
        match self.model.segment_index_of(label) {
            Some(index) => self.click_segment(index),
            None => log::debug!("no segment labelled {:?}", label),
        }
    }

    pub fn hover_segment(&mut self, index: Option<usize>) {
        let index = index.filter(|i| *i < self.segments().len());
        if self.hovered != index {
            self.hovered = index;
            self.emit(Change::Hovered);
        }
    }

    pub fn toggle(&mut self) {
        match self.mode {
            DisplayMode::Segmented => {
                self.mode = DisplayMode::Editing;
                self.hint.set_text(self.model.display_string());
                self.focus_requested = true;
                log::debug!("editing {}", self.hint.typed_text);
                self.emit(Change::EnteredEditing);
            }
            DisplayMode::Editing => self.commit(CommitTrigger::Toggle),
        }
    }

    pub fn text_changed(&mut self, text: String) {
        if !self.mode.is_editing() {
            log::debug!("ignoring text change outside edit mode");
            return;
        }
        let suggestion = self
            .resolver
            .and_then(|resolver| resolver.resolve(&self.fs, &text));
        self.hint.set_text(text);
        self.hint.suggestion = suggestion;
        self.emit(Change::TextEdited);
    }

    /// Record an edit but leave hint lookup to the caller, e.g. a
    /// [`spawn_hint_worker`](crate::io::spawn_hint_worker) thread.
    ///
    /// Returns `None` outside edit mode or when hints are disabled.
    pub fn begin_text_edit(&mut self, text: String) -> Option<HintRequest> {
        if !self.mode.is_editing() {
            log::debug!("ignoring text change outside edit mode");
            return None;
        }
        self.hint.set_text(text);
        self.emit(Change::TextEdited);
        if self.resolver.is_none() {
            return None;
        }
        Some(HintRequest {
            generation: self.hint.generation,
            text: self.hint.typed_text.clone(),
        })
    }

    /// Install a worker result unless the text has changed since it was
    /// requested.
    pub fn apply_hint(&mut self, response: HintResponse) {
        if !self.mode.is_editing() || response.generation != self.hint.generation {
            log::trace!("discarding stale hint #{}", response.generation);
            return;
        }
        self.hint.suggestion = response.suggestion;
        self.emit(Change::HintResolved);
    }

    /// Jump to the suggestion, if there is one.
    pub fn accept_suggestion(&mut self) {
        if !self.mode.is_editing() {
            return;
        }
        let Some(suggestion) = self.hint.suggestion.take() else {
            return;
        };
        self.set_path(&suggestion);
        self.leave_editing();
        self.emit(Change::SuggestionAccepted);
    }

    /// Validate the typed text; a bad path silently snaps back to the
    /// current one. Either way the segmented view returns.
    pub fn commit(&mut self, trigger: CommitTrigger) {
        if !self.mode.is_editing() {
            return;
        }
        let accepted = match self.validate(&self.hint.typed_text) {
            Some(path) => {
                self.set_path(&path);
                true
            }
            None => {
                log::debug!(
                    "reverting {:?} to {} ({:?})",
                    self.hint.typed_text,
                    self.current_path().display(),
                    trigger
                );
                false
            }
        };
        self.leave_editing();
        self.emit(Change::Committed { accepted });
    }

    // --- Internals ---

    // `..` is resolved by the filesystem, so a missing or symlinked step is
    // judged the way the OS would judge it.
    fn validate(&self, text: &str) -> Option<PathBuf> {
        let typed = Path::new(text);
        if !typed.has_root() {
            return None;
        }
        let path = PathModel::parse(self.fs.resolve(typed)?).ok()?;
        if self.commit_requires_directory && !self.fs.is_dir(&path) {
            return None;
        }
        Some(path)
    }

    fn set_path(&mut self, path: &Path) {
        match self.model.set_path(path) {
            Ok(()) => self.path_set(),
            Err(e) => log::error!("navigator rejected internal path: {}", e),
        }
    }

    fn path_set(&mut self) {
        self.hovered = None;
        log::info!("navigated to {}", self.model.current().display());
        self.path_listeners.emit(self.model.current());
    }

    fn leave_editing(&mut self) {
        self.mode = DisplayMode::Segmented;
        self.focus_requested = false;
        self.hint.set_text(self.model.display_string());
    }

    fn emit(&mut self, change: Change) {
        self.change_listeners.emit(&change);
    }
}
