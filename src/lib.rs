pub mod author;
pub mod cli;
pub mod config;
pub mod credits;
pub mod error;
pub mod exec;
pub mod filter;
pub mod git;
pub mod model;
pub mod report;
pub mod util;
