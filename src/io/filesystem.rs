use std::fs;
use std::io;
use std::path::{Component, Path, PathBuf};

/// One entry of a directory listing, as far as the navigator cares.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DirEntry {
    pub name: String,
    pub is_dir: bool,
}

impl DirEntry {
    pub fn dir(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            is_dir: true,
        }
    }

    pub fn file(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            is_dir: false,
        }
    }
}

pub type Listing<'a> = Box<dyn Iterator<Item = DirEntry> + 'a>;

/// Filesystem access used for hint lookups and commit validation.
///
/// Listings are lazy and fetched fresh on every call.
pub trait FileSystem {
    fn exists(&self, path: &Path) -> bool;

    fn is_dir(&self, path: &Path) -> bool;

    fn list_directory(&self, path: &Path) -> io::Result<Listing<'_>>;

    fn parent_of(&self, path: &Path) -> Option<PathBuf> {
        path.parent().map(Path::to_path_buf)
    }

    fn leaf_name(&self, path: &Path) -> Option<String> {
        path.file_name().map(|name| name.to_string_lossy().to_string())
    }

    /// Resolve `.` and `..` in an absolute path against this filesystem.
    ///
    /// `None` when any step does not exist, or when `..` follows something
    /// that is not a directory.
    fn resolve(&self, path: &Path) -> Option<PathBuf> {
        let mut resolved = PathBuf::from("/");
        for component in path.components() {
            match component {
                Component::Normal(name) => {
                    resolved.push(name);
                    if !self.exists(&resolved) {
                        return None;
                    }
                }
                Component::ParentDir => {
                    if !self.is_dir(&resolved) {
                        return None;
                    }
                    if let Some(parent) = self.parent_of(&resolved) {
                        resolved = parent;
                    }
                }
                Component::RootDir | Component::CurDir | Component::Prefix(_) => {}
            }
        }
        self.exists(&resolved).then_some(resolved)
    }
}

impl<F: FileSystem + ?Sized> FileSystem for &F {
    fn exists(&self, path: &Path) -> bool {
        (**self).exists(path)
    }

    fn is_dir(&self, path: &Path) -> bool {
        (**self).is_dir(path)
    }

    fn list_directory(&self, path: &Path) -> io::Result<Listing<'_>> {
        (**self).list_directory(path)
    }

    fn parent_of(&self, path: &Path) -> Option<PathBuf> {
        (**self).parent_of(path)
    }

    fn leaf_name(&self, path: &Path) -> Option<String> {
        (**self).leaf_name(path)
    }

    fn resolve(&self, path: &Path) -> Option<PathBuf> {
        (**self).resolve(path)
    }
}

/// The real filesystem through `std::fs`.
#[derive(Clone, Copy, Debug, Default)]
pub struct LocalFileSystem;

impl FileSystem for LocalFileSystem {
    fn exists(&self, path: &Path) -> bool {
        path.exists()
    }

    fn is_dir(&self, path: &Path) -> bool {
        path.is_dir()
    }

    fn list_directory(&self, path: &Path) -> io::Result<Listing<'_>> {
        let read_dir = fs::read_dir(path)?;
        Ok(Box::new(read_dir.flatten().filter_map(|entry| {
            let name = entry.file_name().into_string().ok()?;
            // Follow symlinks so a link to a directory completes like one
            let is_dir = fs::metadata(entry.path())
                .map(|m| m.is_dir())
                .unwrap_or(false);
            Some(DirEntry { name, is_dir })
        })))
    }

    /// `..` is left to the OS, so it steps out of a symlink's target rather
    /// than back to the link's parent. Components after the last `..` keep
    /// their links.
    fn resolve(&self, path: &Path) -> Option<PathBuf> {
        let components: Vec<Component> = path.components().collect();
        let resolved = match components
            .iter()
            .rposition(|c| matches!(c, Component::ParentDir))
        {
            Some(last) => {
                let head: PathBuf = components[..=last].iter().collect();
                let mut base = fs::canonicalize(head).ok()?;
                base.extend(&components[last + 1..]);
                base
            }
            None => path.to_path_buf(),
        };
        resolved.exists().then_some(resolved)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_local_listing() {
        let tmp = tempfile::tempdir().unwrap();
        fs::create_dir(tmp.path().join("config")).unwrap();
        fs::write(tmp.path().join("notes.txt"), "x").unwrap();

        let local = LocalFileSystem;
        let mut entries: Vec<DirEntry> = local.list_directory(tmp.path()).unwrap().collect();
        entries.sort_by(|a, b| a.name.cmp(&b.name));
        assert_eq!(entries, vec![DirEntry::dir("config"), DirEntry::file("notes.txt")]);
    }

    #[test]
    fn test_local_exists_and_is_dir() {
        let tmp = tempfile::tempdir().unwrap();
        let file = tmp.path().join("notes.txt");
        fs::write(&file, "x").unwrap();

        let local = LocalFileSystem;
        assert!(local.exists(tmp.path()));
        assert!(local.is_dir(tmp.path()));
        assert!(local.exists(&file));
        assert!(!local.is_dir(&file));
        assert!(!local.exists(&tmp.path().join("missing")));
        assert!(local.list_directory(&tmp.path().join("missing")).is_err());
    }

    #[test]
    fn test_parent_and_leaf() {
        let local = LocalFileSystem;
        assert_eq!(local.parent_of(Path::new("/home/config")), Some(PathBuf::from("/home")));
        assert_eq!(local.parent_of(Path::new("/")), None);
        assert_eq!(local.leaf_name(Path::new("/home/config")), Some("config".to_string()));
        assert_eq!(local.leaf_name(Path::new("/")), None);
    }

    #[test]
    fn test_local_resolve_needs_every_step() {
        let tmp = tempfile::tempdir().unwrap();
        fs::create_dir(tmp.path().join("data")).unwrap();

        let local = LocalFileSystem;
        let through_missing = tmp.path().join("nope").join("..").join("data");
        assert_eq!(local.resolve(&through_missing), None);

        let through_data = tmp.path().join("data").join("..").join("data");
        assert_eq!(
            local.resolve(&through_data),
            Some(fs::canonicalize(tmp.path().join("data")).unwrap())
        );
        assert_eq!(local.resolve(&tmp.path().join("data")), Some(tmp.path().join("data")));
    }

    #[cfg(unix)]
    #[test]
    fn test_local_resolve_parent_of_symlink_follows_target() {
        let tmp = tempfile::tempdir().unwrap();
        fs::create_dir_all(tmp.path().join("a").join("real")).unwrap();
        fs::create_dir(tmp.path().join("b")).unwrap();
        std::os::unix::fs::symlink(
            tmp.path().join("a").join("real"),
            tmp.path().join("b").join("link"),
        )
        .unwrap();

        let local = LocalFileSystem;
        let typed = tmp.path().join("b").join("link").join("..");
        assert_eq!(
            local.resolve(&typed),
            Some(fs::canonicalize(tmp.path().join("a")).unwrap())
        );
    }

    #[test]
    fn test_parent_and_leaf_through_reference() {
        let local = LocalFileSystem;
        let by_ref = &local;
        assert_eq!(by_ref.parent_of(Path::new("/a/b")), Some(PathBuf::from("/a")));
        assert_eq!(by_ref.leaf_name(Path::new("/a/b")), Some("b".to_string()));
    }
}
