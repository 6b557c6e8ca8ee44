use std::path::Path;

/// Set of lowercase, dot-prefixed suffixes parsed from a raw
/// comma-separated extension list. Tokens without a leading dot are
/// dropped, not rejected; an empty set is a valid state that simply
/// matches no files.
#[derive(Debug, Clone, Default)]
pub struct ExtensionSet {
    suffixes: Vec<String>,
}

impl ExtensionSet {
    pub fn parse(raw: &str) -> Self {
        let suffixes = raw
            .split(',')
            .map(str::trim)
            .filter(|token| token.starts_with('.'))
            .map(str::to_lowercase)
            .collect();
        Self { suffixes }
    }

    /// True when the file name's lowercased suffix matches any member.
    /// Matching is suffix-only, so `file.csv.txt` matches `.txt`.
    pub fn matches(&self, path: &Path) -> bool {
        let name = match path.file_name().and_then(|n| n.to_str()) {
            Some(name) => name.to_lowercase(),
            None => return false,
        };
        self.suffixes.iter().any(|ext| name.ends_with(ext.as_str()))
    }

    pub fn is_empty(&self) -> bool {
        self.suffixes.is_empty()
    }
}
