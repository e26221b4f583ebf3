// Path model - the current path and its breadcrumb segments
use crate::error::InvalidPathError;
use std::path::{Component, Path, PathBuf};

pub const ROOT: &str = "/";

/// The current path together with its root-to-leaf segments.
///
/// Both fields are always rebuilt together; there is no way to touch one
/// without the other.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PathModel {
    current: PathBuf,
    segments: Vec<String>,
}

impl PathModel {
    pub fn new(path: impl AsRef<Path>) -> Result<Self, InvalidPathError> {
        let current = Self::parse(path)?;
        let segments = decompose(&current)?;
        Ok(Self { current, segments })
    }

    pub fn root() -> Self {
        Self {
            current: PathBuf::from(ROOT),
            segments: Vec::new(),
        }
    }

    /// Validate and normalize a path without touching any model.
    ///
    /// `.` components are dropped and `..` is resolved lexically, never
    /// climbing above the root.
    pub fn parse(path: impl AsRef<Path>) -> Result<PathBuf, InvalidPathError> {
        let path = path.as_ref();
        if !path.has_root() {
            return Err(InvalidPathError::NotAbsolute(path.to_path_buf()));
        }

        let mut normalized = PathBuf::from(ROOT);
        for component in path.components() {
            match component {
                Component::Normal(name) => {
                    if name.to_str().is_none() {
                        return Err(InvalidPathError::NonUtf8(path.to_path_buf()));
                    }
                    normalized.push(name);
                }
                Component::ParentDir => {
                    normalized.pop();
                }
                Component::RootDir | Component::CurDir | Component::Prefix(_) => {}
            }
        }
        Ok(normalized)
    }

    pub fn set_path(&mut self, path: impl AsRef<Path>) -> Result<(), InvalidPathError> {
        let current = Self::parse(path)?;
        let segments = decompose(&current)?;
        self.current = current;
        self.segments = segments;
        Ok(())
    }

    pub fn current(&self) -> &Path {
        &self.current
    }

    pub fn segments(&self) -> &[String] {
        &self.segments
    }

    /// Root plus `segments[0..=index]`, or `None` past the leaf.
    pub fn ancestor_up_to(&self, index: usize) -> Option<PathBuf> {
        if index >= self.segments.len() {
            return None;
        }
        let mut path = PathBuf::from(ROOT);
        path.extend(&self.segments[..=index]);
        Some(path)
    }

    /// Index of the first segment labelled `label`.
    pub fn segment_index_of(&self, label: &str) -> Option<usize> {
        self.segments.iter().position(|segment| segment == label)
    }

    pub fn display_string(&self) -> String {
        if self.segments.is_empty() {
            return ROOT.to_string();
        }
        self.segments
            .iter()
            .fold(String::new(), |acc, segment| acc + ROOT + segment)
    }
}

// Walk leaf -> parent until the root, then flip into root-to-leaf order.
fn decompose(path: &Path) -> Result<Vec<String>, InvalidPathError> {
    let mut segments = Vec::new();
    let mut cursor = path;
    while let Some(parent) = cursor.parent() {
        let Some(leaf) = cursor.file_name() else {
            break;
        };
        let leaf = leaf
            .to_str()
            .ok_or_else(|| InvalidPathError::NonUtf8(path.to_path_buf()))?;
        segments.push(leaf.to_string());
        cursor = parent;
    }
    segments.reverse();
    Ok(segments)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rebuild(model: &PathModel) -> PathBuf {
        let mut path = PathBuf::from(ROOT);
        path.extend(model.segments());
        path
    }

    #[test]
    fn test_segments_of_nested_path() {
        let model = PathModel::new("/home/config/settings").unwrap();
        assert_eq!(model.segments(), ["home", "config", "settings"]);
        assert_eq!(model.current(), Path::new("/home/config/settings"));
    }

    #[test]
    fn test_segments_round_trip() {
        for raw in ["/", "/a", "/home/config/settings", "/x/y/z/w/v"] {
            let model = PathModel::new(raw).unwrap();
            assert_eq!(rebuild(&model), PathBuf::from(raw));
        }
    }

    #[test]
    fn test_root_has_no_segments() {
        let model = PathModel::new("/").unwrap();
        assert!(model.segments().is_empty());
        assert_eq!(model.display_string(), "/");
        assert_eq!(model.ancestor_up_to(0), None);
    }

    #[test]
    fn test_root_constructor_matches_parse() {
        assert_eq!(PathModel::root(), PathModel::new("/").unwrap());
    }

    #[test]
    fn test_relative_path_rejected() {
        let err = PathModel::new("home/config").unwrap_err();
        assert_eq!(err, InvalidPathError::NotAbsolute(PathBuf::from("home/config")));

        let mut model = PathModel::new("/home").unwrap();
        assert!(model.set_path("").is_err());
        assert_eq!(model.current(), Path::new("/home"));
        assert_eq!(model.segments(), ["home"]);
    }

    #[test]
    fn test_parse_normalizes() {
        assert_eq!(PathModel::parse("/home/./config/").unwrap(), PathBuf::from("/home/config"));
        assert_eq!(PathModel::parse("/home/config/../data").unwrap(), PathBuf::from("/home/data"));
        assert_eq!(PathModel::parse("/../..").unwrap(), PathBuf::from("/"));
        assert_eq!(PathModel::parse("//home//config").unwrap(), PathBuf::from("/home/config"));
    }

    #[test]
    fn test_ancestor_at_last_index_is_identity() {
        let model = PathModel::new("/home/config/settings").unwrap();
        let last = model.segments().len() - 1;
        assert_eq!(model.ancestor_up_to(last).as_deref(), Some(model.current()));
    }

    #[test]
    fn test_ancestor_truncates_after_index() {
        let model = PathModel::new("/home/config/settings").unwrap();
        assert_eq!(model.ancestor_up_to(0), Some(PathBuf::from("/home")));
        assert_eq!(model.ancestor_up_to(1), Some(PathBuf::from("/home/config")));
        assert_eq!(model.ancestor_up_to(3), None);

        for index in 0..model.segments().len() {
            let ancestor = PathModel::new(model.ancestor_up_to(index).unwrap()).unwrap();
            assert_eq!(ancestor.segments().len(), index + 1);
            assert_eq!(ancestor.segments(), &model.segments()[..=index]);
        }
    }

    #[test]
    fn test_segment_index_of_takes_first_match() {
        let model = PathModel::new("/src/app/src/lib").unwrap();
        assert_eq!(model.segment_index_of("src"), Some(0));
        assert_eq!(model.segment_index_of("lib"), Some(3));
        assert_eq!(model.segment_index_of("missing"), None);
    }

    #[test]
    fn test_display_string() {
        let model = PathModel::new("/home/config").unwrap();
        assert_eq!(model.display_string(), "/home/config");
    }
}
