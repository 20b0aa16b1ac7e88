use thiserror::Error;

use crate::codec::DecodeError;
use crate::model::TreeKind;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PlannerError {
    #[error("Tree index {0} is out of range (expected 0..=2)")]
    TreeOutOfRange(usize),

    #[error("Level {level} for '{node}' is out of range (0..={max})")]
    LevelOutOfRange { node: String, level: u32, max: u32 },

    #[error("Unknown node '{node}' in the {tree} tree")]
    UnknownNode { tree: TreeKind, node: String },

    #[error("'{node}' is locked until one of its parents has a level")]
    Locked { node: String },

    #[error("'{node}' cannot drop to 0 while '{child}' depends on it")]
    HasDependents { node: String, child: String },

    #[error("Invalid tree definition: {0}")]
    InvalidTree(String),

    #[error("Invalid build data: {0}")]
    Malformed(#[from] DecodeError),
}

pub type Result<T> = std::result::Result<T, PlannerError>;
