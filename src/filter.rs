/// Path prefixes whose changes never count toward credits (vendored code).
pub const DEFAULT_IGNORED_PREFIXES: &[&str] = &["blender/extern/", "blender/intern/opennl/"];

#[derive(Debug, Clone)]
pub struct CommitFilter {
    ignored_prefixes: Vec<String>,
}

impl CommitFilter {
    pub fn new<I, S>(ignored_prefixes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            ignored_prefixes: ignored_prefixes.into_iter().map(Into::into).collect(),
        }
    }

    pub fn ignored_prefixes(&self) -> &[String] {
        &self.ignored_prefixes
    }

    pub fn is_ignored(&self, path: &str) -> bool {
        self.ignored_prefixes
            .iter()
            .any(|prefix| path.starts_with(prefix.as_str()))
    }

    /// True when the commit touched at least one path outside every ignored
    /// prefix. A commit without changed files is never a credit commit.
    pub fn is_credit_commit<S: AsRef<str>>(&self, files: &[S]) -> bool {
        files.iter().any(|f| !self.is_ignored(f.as_ref()))
    }
}

impl Default for CommitFilter {
    fn default() -> Self {
        Self::new(DEFAULT_IGNORED_PREFIXES.iter().copied())
    }
}
