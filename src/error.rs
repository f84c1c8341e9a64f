use thiserror::Error;

pub type Result<T> = std::result::Result<T, CreditsError>;

#[derive(Error, Debug)]
pub enum CreditsError {
    #[error("Invalid commit range: {0}")]
    InvalidRange(String),
    #[error("Malformed commit {id}: {reason}")]
    MalformedCommit { id: String, reason: String },
    #[error("Invalid date: {0}")]
    InvalidDate(String),
    #[error("Config error: {0}")]
    Config(String),
    #[error("Serialization error: {0}")]
    Serde(#[from] serde_json::Error),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Object find error: {0}")]
    ObjectFind(#[from] Box<gix::object::find::existing::Error>),
    #[error("Commit error: {0}")]
    Commit(#[from] Box<gix::object::commit::Error>),
    #[error("Object find with conversion error: {0}")]
    ObjectFindConv(#[from] Box<gix::object::find::existing::with_conversion::Error>),
    #[error("Object decode error: {0}")]
    ObjectDecode(#[from] Box<gix::objs::decode::Error>),
    #[error("Diff tree to tree error: {0}")]
    DiffTreeToTree(#[from] Box<gix::repository::diff_tree_to_tree::Error>),
    #[error("Git discover error: {0}")]
    GitDiscover(#[from] Box<gix::discover::Error>),
}

// Manual From implementations for unboxed to boxed conversions
impl From<gix::object::find::existing::Error> for CreditsError {
    fn from(err: gix::object::find::existing::Error) -> Self {
        CreditsError::ObjectFind(Box::new(err))
    }
}

impl From<gix::object::commit::Error> for CreditsError {
    fn from(err: gix::object::commit::Error) -> Self {
        CreditsError::Commit(Box::new(err))
    }
}

impl From<gix::object::find::existing::with_conversion::Error> for CreditsError {
    fn from(err: gix::object::find::existing::with_conversion::Error) -> Self {
        CreditsError::ObjectFindConv(Box::new(err))
    }
}

impl From<gix::objs::decode::Error> for CreditsError {
    fn from(err: gix::objs::decode::Error) -> Self {
        CreditsError::ObjectDecode(Box::new(err))
    }
}

impl From<gix::repository::diff_tree_to_tree::Error> for CreditsError {
    fn from(err: gix::repository::diff_tree_to_tree::Error) -> Self {
        CreditsError::DiffTreeToTree(Box::new(err))
    }
}

impl From<gix::discover::Error> for CreditsError {
    fn from(err: gix::discover::Error) -> Self {
        CreditsError::GitDiscover(Box::new(err))
    }
}
