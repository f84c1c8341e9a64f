use crate::error::{CreditsError, Result};
use crate::model::CommitRecord;
use chrono::DateTime;
use gix::object::tree::diff::ChangeDetached;
use gix::{discover, ObjectId, Repository};
use indicatif::{ProgressBar, ProgressStyle};
use std::collections::{HashSet, VecDeque};
use std::path::{Path, PathBuf};

/// Commits reachable from `tip` but not from `hidden`, like `git log hidden..tip`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommitRange {
    pub tip: ObjectId,
    pub hidden: Option<ObjectId>,
}

pub struct GitRepo {
    repo: Repository,
    path: PathBuf,
}

impl GitRepo {
    /// Open the repository containing `path`.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let repo = discover(path.as_ref())?;
        let path = repo.workdir().unwrap_or_else(|| repo.path()).to_path_buf();

        Ok(Self { repo, path })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Resolve `A..B`, `A..`, `..B` or a single revision. An empty side
    /// stands for `HEAD`.
    pub fn resolve_range(&self, spec: &str) -> Result<CommitRange> {
        let spec = spec.trim();
        if spec.is_empty() {
            return Err(CreditsError::InvalidRange("empty commit range".to_string()));
        }
        if spec.contains("...") {
            return Err(CreditsError::InvalidRange(format!(
                "symmetric difference '{spec}' is not supported, use A..B"
            )));
        }

        match spec.split_once("..") {
            Some((base, tip)) => Ok(CommitRange {
                tip: self.resolve_commit(or_head(tip))?,
                hidden: Some(self.resolve_commit(or_head(base))?),
            }),
            None => Ok(CommitRange {
                tip: self.resolve_commit(spec)?,
                hidden: None,
            }),
        }
    }

    fn resolve_commit(&self, rev: &str) -> Result<ObjectId> {
        let peeled = format!("{rev}^{{commit}}");
        let id = self
            .repo
            .rev_parse_single(peeled.as_str())
            .map_err(|e| CreditsError::InvalidRange(format!("Unknown revision '{rev}': {e}")))?;

        let commit = id
            .object()?
            .try_into_commit()
            .map_err(|_| CreditsError::InvalidRange(format!("Not a commit: {rev}")))?;

        Ok(commit.id)
    }

    fn ancestors(&self, start: ObjectId) -> Result<HashSet<ObjectId>> {
        let mut seen = HashSet::new();
        let mut stack = vec![start];

        while let Some(commit_id) = stack.pop() {
            if !seen.insert(commit_id) {
                continue;
            }
            let commit = self.repo.find_commit(commit_id)?;
            stack.extend(commit.parent_ids().map(ObjectId::from));
        }

        Ok(seen)
    }

    /// Walk `range` and decode every commit in it. Merge commits are
    /// skipped unless `include_merges` is set, in which case they are
    /// diffed against their first parent.
    pub fn collect_commits(&self, range: &CommitRange, include_merges: bool) -> Result<Vec<CommitRecord>> {
        let hidden = match range.hidden {
            Some(base) => self.ancestors(base)?,
            None => HashSet::new(),
        };

        let mut commits = Vec::new();
        let mut seen: HashSet<ObjectId> = HashSet::new();
        let mut stack: VecDeque<ObjectId> = VecDeque::from([range.tip]);
        let mut merges_skipped = 0usize;

        let pb = ProgressBar::new_spinner();
        pb.set_style(
            ProgressStyle::default_spinner()
                .template("{spinner:.green} {msg} ({pos})")
                .unwrap_or_else(|_| ProgressStyle::default_spinner()),
        );
        pb.set_message("Reading history...");

        while let Some(commit_id) = stack.pop_back() {
            if hidden.contains(&commit_id) || !seen.insert(commit_id) {
                continue;
            }

            let commit = self.repo.find_commit(commit_id)?;
            let parents: Vec<ObjectId> = commit.parent_ids().map(|id| id.into()).collect();
            stack.extend(parents.iter().copied());

            if !include_merges && parents.len() > 1 {
                merges_skipped += 1;
                pb.inc(1);
                continue;
            }

            commits.push(self.commit_record(&commit, parents.first().copied())?);
            pb.inc(1);
        }

        pb.finish_with_message("History read");
        log::info!(
            "Collected {} commits ({} merges skipped)",
            commits.len(),
            merges_skipped
        );
        Ok(commits)
    }

    fn commit_record(&self, commit: &gix::Commit<'_>, parent: Option<ObjectId>) -> Result<CommitRecord> {
        let id = commit.id.to_string();

        let secs = commit.time()?.seconds;
        let timestamp = DateTime::from_timestamp(secs, 0)
            .ok_or_else(|| CreditsError::InvalidDate(format!("Invalid timestamp {secs} in commit {id}")))?;

        let author = commit.author()?.name.to_string();
        if author.trim().is_empty() {
            return Err(CreditsError::MalformedCommit {
                id,
                reason: "missing author name".to_string(),
            });
        }

        let files = self.changed_paths(commit, parent)?;

        Ok(CommitRecord {
            id,
            author,
            timestamp,
            files,
        })
    }

    fn changed_paths(&self, commit: &gix::Commit<'_>, parent: Option<ObjectId>) -> Result<Vec<String>> {
        let commit_tree = commit.tree()?;
        let changes: Vec<ChangeDetached> = match parent {
            Some(parent_id) => {
                let parent_tree = self.repo.find_commit(parent_id)?.tree()?;
                self.repo
                    .diff_tree_to_tree(Some(&parent_tree), Some(&commit_tree), None)?
            }
            None => self.repo.diff_tree_to_tree(None, Some(&commit_tree), None)?,
        };

        // Trees show up as their own changes; only blobs and links are files.
        let mut files = Vec::with_capacity(changes.len());
        for change in changes {
            let (location, entry_mode) = match change {
                ChangeDetached::Addition { location, entry_mode, .. }
                | ChangeDetached::Deletion { location, entry_mode, .. }
                | ChangeDetached::Modification { location, entry_mode, .. }
                | ChangeDetached::Rewrite { location, entry_mode, .. } => (location, entry_mode),
            };
            if !entry_mode.is_tree() {
                files.push(location.to_string());
            }
        }
        Ok(files)
    }
}

fn or_head(rev: &str) -> &str {
    if rev.is_empty() {
        "HEAD"
    } else {
        rev
    }
}
