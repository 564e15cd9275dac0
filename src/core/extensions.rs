//! Recognized source file extensions.

use std::ffi::OsStr;

/// Suffixes that mark a file as source code
pub const DEFAULT_EXTENSIONS: &[&str] = &[
    ".py", ".js", ".ts", ".c", ".cpp", ".h", ".hpp", ".java", ".go", ".rs", ".rb", ".php",
    ".html", ".css", ".sh", ".bat", ".json", ".xml", ".yml", ".yaml", ".md",
];

/// Case-sensitive suffix matcher over file names.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceExtensions {
    suffixes: Vec<String>,
}

impl Default for SourceExtensions {
    fn default() -> Self {
        Self::from_list(DEFAULT_EXTENSIONS.iter().copied())
    }
}

impl SourceExtensions {
    /// Build a matcher from extensions. A missing leading dot is added, so
    /// `"rs"` and `".rs"` are the same entry.
    pub fn from_list<I, S>(extensions: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut suffixes: Vec<String> = extensions
            .into_iter()
            .map(|ext| ext.as_ref().trim().to_string())
            .filter(|ext| !ext.is_empty())
            .map(|ext| {
                if ext.starts_with('.') {
                    ext
                } else {
                    format!(".{ext}")
                }
            })
            .collect();
        suffixes.sort();
        suffixes.dedup();
        Self { suffixes }
    }

    pub fn matches(&self, file_name: &OsStr) -> bool {
        let name = file_name.to_string_lossy();
        self.suffixes.iter().any(|suffix| name.ends_with(suffix.as_str()))
    }

    pub fn len(&self) -> usize {
        self.suffixes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.suffixes.is_empty()
    }
}
