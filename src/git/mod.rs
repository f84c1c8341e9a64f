mod repo;

pub use repo::{CommitRange, GitRepo};
