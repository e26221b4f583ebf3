use super::filesystem::{DirEntry, FileSystem, Listing};
use std::collections::{HashMap, HashSet};
use std::io;
use std::path::{Path, PathBuf};

/// In-memory directory tree with insertion-ordered listings.
///
/// Directories marked unreadable still exist but fail to list, like a
/// permission-denied directory on disk.
#[derive(Clone, Debug)]
pub struct MemoryFileSystem {
    children: HashMap<PathBuf, Vec<DirEntry>>,
    files: HashSet<PathBuf>,
    unreadable: HashSet<PathBuf>,
}

impl Default for MemoryFileSystem {
    fn default() -> Self {
        Self::new()
    }
}

impl MemoryFileSystem {
    pub fn new() -> Self {
        let mut children = HashMap::new();
        children.insert(PathBuf::from("/"), Vec::new());
        Self {
            children,
            files: HashSet::new(),
            unreadable: HashSet::new(),
        }
    }

    /// Add a directory and any missing ancestors.
    pub fn with_dir(mut self, path: impl AsRef<Path>) -> Self {
        self.add_dir(path.as_ref());
        self
    }

    /// Add a file; its parent directories are created as needed.
    pub fn with_file(mut self, path: impl AsRef<Path>) -> Self {
        let path = path.as_ref();
        if let (Some(parent), Some(name)) = (path.parent(), path.file_name()) {
            self.add_dir(parent);
            if self.files.insert(path.to_path_buf()) {
                self.push_child(parent, DirEntry::file(name.to_string_lossy()));
            }
        }
        self
    }

    pub fn with_unreadable(mut self, path: impl AsRef<Path>) -> Self {
        let path = path.as_ref();
        self.add_dir(path);
        self.unreadable.insert(path.to_path_buf());
        self
    }

    fn add_dir(&mut self, path: &Path) {
        if self.children.contains_key(path) {
            return;
        }
        if let (Some(parent), Some(name)) = (path.parent(), path.file_name()) {
            self.add_dir(parent);
            self.push_child(parent, DirEntry::dir(name.to_string_lossy()));
        }
        self.children.insert(path.to_path_buf(), Vec::new());
    }

    fn push_child(&mut self, parent: &Path, entry: DirEntry) {
        self.children
            .entry(parent.to_path_buf())
            .or_default()
            .push(entry);
    }
}

impl FileSystem for MemoryFileSystem {
    fn exists(&self, path: &Path) -> bool {
        self.children.contains_key(path) || self.files.contains(path)
    }

    fn is_dir(&self, path: &Path) -> bool {
        self.children.contains_key(path)
    }

    fn list_directory(&self, path: &Path) -> io::Result<Listing<'_>> {
        if self.unreadable.contains(path) {
            return Err(io::Error::new(io::ErrorKind::PermissionDenied, "permission denied"));
        }
        match self.children.get(path) {
            Some(entries) => Ok(Box::new(entries.iter().cloned())),
            None if self.files.contains(path) => Err(io::Error::new(
                io::ErrorKind::Other,
                "not a directory",
            )),
            None => Err(io::Error::new(io::ErrorKind::NotFound, "no such directory")),
        }
    }
}
