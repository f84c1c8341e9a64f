use crate::author::AuthorNormalizer;
use crate::error::{CreditsError, Result};
use crate::filter::{CommitFilter, DEFAULT_IGNORED_PREFIXES};
use crate::report::DEFAULT_COMPANIES;
use serde::Deserialize;
use std::collections::BTreeMap;
use std::path::Path;

/// Optional JSON overrides for the built-in credit tables.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CreditsConfig {
    pub aliases: BTreeMap<String, String>,
    pub ignore_prefixes: Option<Vec<String>>,
    pub companies: Option<Vec<String>>,
}

impl CreditsConfig {
    pub fn load(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)
            .map_err(|e| CreditsError::Config(format!("Cannot read {}: {e}", path.display())))?;
        Self::from_json(&text)
            .map_err(|e| CreditsError::Config(format!("Invalid config {}: {e}", path.display())))
    }

    pub fn from_json(text: &str) -> Result<Self> {
        Ok(serde_json::from_str(text)?)
    }

    pub fn normalizer(&self) -> AuthorNormalizer {
        AuthorNormalizer::with_aliases(&self.aliases)
    }

    /// Configured prefixes (or the defaults) followed by `extra`.
    pub fn commit_filter(&self, extra: &[String]) -> CommitFilter {
        let mut prefixes: Vec<String> = match &self.ignore_prefixes {
            Some(p) => p.clone(),
            None => DEFAULT_IGNORED_PREFIXES.iter().map(|p| p.to_string()).collect(),
        };
        prefixes.extend(extra.iter().cloned());
        CommitFilter::new(prefixes)
    }

    pub fn companies(&self) -> Vec<String> {
        match &self.companies {
            Some(c) => c.clone(),
            None => DEFAULT_COMPANIES.iter().map(|c| c.to_string()).collect(),
        }
    }
}
