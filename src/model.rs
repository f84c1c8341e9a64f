use crate::util::year_of;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

pub const SCHEMA_VERSION: u32 = 1;

/// One commit as seen by the credits pipeline.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommitRecord {
    pub id: String,
    pub author: String,
    pub timestamp: DateTime<Utc>,
    pub files: Vec<String>,
}

impl CommitRecord {
    pub fn year(&self) -> i32 {
        year_of(&self.timestamp)
    }
}

/// Contribution statistics for one canonical author.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreditUser {
    pub commit_total: u32,
    pub year_min: i32,
    pub year_max: i32,
}

impl CreditUser {
    pub fn new(year: i32) -> Self {
        Self {
            commit_total: 0,
            year_min: year,
            year_max: year,
        }
    }

    pub fn add_commit(&mut self, year: i32) {
        self.commit_total += 1;
        self.year_min = self.year_min.min(year);
        self.year_max = self.year_max.max(year);
    }

    pub fn merge(&mut self, other: &CreditUser) {
        self.commit_total += other.commit_total;
        self.year_min = self.year_min.min(other.year_min);
        self.year_max = self.year_max.max(other.year_max);
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthorCredit {
    pub name: String,
    pub commit_total: u32,
    pub year_min: i32,
    pub year_max: i32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreditsOutput {
    pub version: u32,
    pub generated_at: DateTime<Utc>,
    pub repository_path: String,
    pub range: String,
    pub total_commits: u64,
    pub authors: Vec<AuthorCredit>,
}
