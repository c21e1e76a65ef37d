use thiserror::Error;

/// Rejections from the compare selection list. These are user-facing and
/// never change state.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SelectionError {
    #[error("Name {0} is already in the compare list")]
    AlreadySelected(u32),

    #[error("At most {limit} names can be compared")]
    LimitExceeded { limit: usize },

    #[error("Select at least {required} names to compare ({selected} selected)")]
    InsufficientSelection { required: usize, selected: usize },
}

#[derive(Error, Debug)]
pub enum MingpuError {
    #[error("No catalog entry with id {0}")]
    EntryNotFound(u32),

    #[error("Catalog integrity error in entry {id}: {detail}")]
    DataIntegrity { id: u32, detail: String },

    #[error(transparent)]
    Selection(#[from] SelectionError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Config error: {0}")]
    Config(String),
}

pub type Result<T> = std::result::Result<T, MingpuError>;
