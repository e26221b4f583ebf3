// Hint state - the edit field text and its pending suggestion
use std::path::PathBuf;

pub struct HintState {
    pub typed_text: String,
    pub suggestion: Option<PathBuf>,
    /// Bumped on every edit so late hint results can be recognized.
    pub generation: u64,
}

impl HintState {
    pub fn new() -> Self {
        Self {
            typed_text: String::new(),
            suggestion: None,
            generation: 0,
        }
    }

    pub fn set_text(&mut self, text: String) {
        self.typed_text = text;
        self.suggestion = None;
        self.generation += 1;
    }

    /// The part of the suggestion that extends past the typed text.
    ///
    /// Doubled separators in the typed text are ignored, matching how the
    /// suggestion path was built.
    pub fn ghost_suffix(&self) -> Option<&str> {
        let suggestion = self.suggestion.as_deref()?.to_str()?;
        suggestion
            .strip_prefix(collapse_separators(&self.typed_text).as_str())
            .filter(|rest| !rest.is_empty())
    }
}

fn collapse_separators(text: &str) -> String {
    let mut collapsed = String::with_capacity(text.len());
    for ch in text.chars() {
        if ch == '/' && collapsed.ends_with('/') {
            continue;
        }
        collapsed.push(ch);
    }
    collapsed
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_set_text_bumps_generation() {
        let mut hint = HintState::new();
        hint.suggestion = Some(PathBuf::from("/home/config"));
        hint.set_text("/home/c".to_string());
        assert_eq!(hint.generation, 1);
        assert_eq!(hint.suggestion, None);
    }

    #[test]
    fn test_ghost_suffix() {
        let mut hint = HintState::new();
        hint.set_text("/home/con".to_string());
        hint.suggestion = Some(PathBuf::from("/home/config"));
        assert_eq!(hint.ghost_suffix(), Some("fig"));

        hint.suggestion = Some(PathBuf::from("/home/con"));
        assert_eq!(hint.ghost_suffix(), None);

        hint.typed_text = "/home/config/".to_string();
        hint.suggestion = Some(PathBuf::from("/home/config/cache"));
        assert_eq!(hint.ghost_suffix(), Some("cache"));
    }

    #[test]
    fn test_ghost_suffix_ignores_doubled_separators() {
        let mut hint = HintState::new();
        hint.set_text("/home//con".to_string());
        hint.suggestion = Some(PathBuf::from("/home/config"));
        assert_eq!(hint.ghost_suffix(), Some("fig"));

        hint.typed_text = "//home///config//".to_string();
        hint.suggestion = Some(PathBuf::from("/home/config/cache"));
        assert_eq!(hint.ghost_suffix(), Some("cache"));
    }
}
