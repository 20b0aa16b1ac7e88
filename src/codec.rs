//! Share/persistence string for a build.
//!
//! `<guardian>-<vanguard>-<cannon>[_<owned>]`, each tree a `.`-joined list of
//! decimal levels in canonical node order. Only URL-unreserved characters are
//! used so the string goes into a query parameter untouched. Node ids are not
//! transmitted; the static tree order gives every position its meaning.

use thiserror::Error;

use crate::build::LevelState;
use crate::model::TreeKind;

pub const LEVEL_SEP: char = '.';
pub const TREE_SEP: char = '-';
pub const FIELD_SEP: char = '_';

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DecodeError {
    #[error("empty payload")]
    Empty,

    #[error("unexpected character {0:?}")]
    IllegalChar(char),

    #[error("expected 3 trees, found {0}")]
    SegmentCount(usize),

    #[error("{tree} tree has {found} levels, expected {expected}")]
    TokenCount {
        tree: TreeKind,
        expected: usize,
        found: usize,
    },

    #[error("{tree} tree has a non-numeric level {token:?}")]
    BadToken { tree: TreeKind, token: String },

    #[error("bad crystal budget {0:?}")]
    BadBudget(String),
}

/// Outcome of a successful decode.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DecodedBuild {
    pub levels: LevelState,
    /// `None` when the payload carried no budget field.
    pub owned: Option<u64>,
}

pub fn encode(state: &LevelState, owned: Option<u64>) -> String {
    let trees: Vec<String> = TreeKind::ALL
        .iter()
        .map(|&k| {
            state
                .levels(k)
                .iter()
                .map(|l| l.to_string())
                .collect::<Vec<_>>()
                .join(&LEVEL_SEP.to_string())
        })
        .collect();
    let mut out = trees.join(&TREE_SEP.to_string());
    if let Some(owned) = owned {
        out.push(FIELD_SEP);
        out.push_str(&owned.to_string());
    }
    out
}

/// All-or-nothing: either every tree parses or the payload is rejected.
/// Levels above a node's current cap are clamped rather than rejected.
pub fn decode(payload: &str) -> Result<DecodedBuild, DecodeError> {
    if payload.is_empty() {
        return Err(DecodeError::Empty);
    }
    if let Some(c) = payload
        .chars()
        .find(|&c| !(c.is_ascii_digit() || c == LEVEL_SEP || c == TREE_SEP || c == FIELD_SEP))
    {
        return Err(DecodeError::IllegalChar(c));
    }

    let (body, owned) = match payload.split_once(FIELD_SEP) {
        Some((body, budget)) => (body, Some(parse_budget(budget)?)),
        None => (payload, None),
    };

    let segments: Vec<&str> = body.split(TREE_SEP).collect();
    if segments.len() != TreeKind::ALL.len() {
        return Err(DecodeError::SegmentCount(segments.len()));
    }

    let mut levels = LevelState::new();
    let mut clamped = 0;
    for (&kind, segment) in TreeKind::ALL.iter().zip(segments) {
        let raw = parse_tree(kind, segment)?;
        clamped += levels.replace_tree(kind, &raw)?;
    }
    if clamped > 0 {
        tracing::info!(clamped, "build decoded with levels above current caps");
    }
    Ok(DecodedBuild { levels, owned })
}

fn parse_tree(kind: TreeKind, segment: &str) -> Result<Vec<u32>, DecodeError> {
    segment
        .split(LEVEL_SEP)
        .map(|t| {
            parse_digits(t).ok_or_else(|| DecodeError::BadToken {
                tree: kind,
                token: t.to_string(),
            })
        })
        .collect()
}

/// Digits only; values past `u32::MAX` saturate and get clamped later.
fn parse_digits(token: &str) -> Option<u32> {
    if token.is_empty() || !token.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    Some(token.bytes().fold(0u32, |acc, b| {
        acc.saturating_mul(10).saturating_add(u32::from(b - b'0'))
    }))
}

fn parse_budget(budget: &str) -> Result<u64, DecodeError> {
    if budget.is_empty() || !budget.bytes().all(|b| b.is_ascii_digit()) {
        return Err(DecodeError::BadBudget(budget.to_string()));
    }
    budget
        .parse::<u64>()
        .map_err(|_| DecodeError::BadBudget(budget.to_string()))
}
