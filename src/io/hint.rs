// Inline autocomplete for the path text field
use super::filesystem::FileSystem;
use std::path::{Path, PathBuf};

const SEPARATOR: char = '/';

/// Finds the first child directory completing a partially typed path.
#[derive(Clone, Copy, Debug)]
pub struct HintResolver {
    pub show_hidden: bool,
}

impl Default for HintResolver {
    fn default() -> Self {
        Self { show_hidden: true }
    }
}

impl HintResolver {
    pub fn new(show_hidden: bool) -> Self {
        Self { show_hidden }
    }

    /// Suggest a directory for `typed`, or `None` when nothing matches.
    ///
    /// Entries are taken in listing order and the first directory whose
    /// name starts with the typed leaf wins. A parent that cannot be listed
    /// simply yields no suggestion.
    pub fn resolve<F: FileSystem + ?Sized>(&self, fs: &F, typed: &str) -> Option<PathBuf> {
        let (parent, prefix) = split_typed(typed)?;
        let entries = match fs.list_directory(parent) {
            Ok(entries) => entries,
            Err(e) => {
                log::trace!("no hint for {:?}: {}", typed, e);
                return None;
            }
        };

        let skip_hidden = !self.show_hidden && !prefix.starts_with('.');
        entries
            .filter(|entry| entry.is_dir)
            .filter(|entry| !(skip_hidden && entry.name.starts_with('.')))
            .find(|entry| entry.name.starts_with(prefix))
            .map(|entry| parent.join(entry.name))
    }
}

/// Split at the final separator into an absolute parent and the leaf prefix.
fn split_typed(typed: &str) -> Option<(&Path, &str)> {
    let idx = typed.rfind(SEPARATOR)?;
    let parent = if idx == 0 { "/" } else { &typed[..idx] };
    let parent = Path::new(parent);
    if !parent.has_root() {
        return None;
    }
    Some((parent, &typed[idx + 1..]))
}
