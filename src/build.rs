//! Per-tree level allocations.

use serde::{Deserialize, Serialize};

use crate::codec::DecodeError;
use crate::error::{PlannerError, Result};
use crate::model::{self, NodeDef, TreeKind};

/// How a tap on a node changes its level.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum TapMode {
    /// One level per tap.
    #[default]
    Single,
    /// Jump straight to the cap (or back to 0).
    Max,
}

/// Levels for every node of every tree, stored in canonical node order.
/// Every entry stays within `0..=max_level` of its node.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct LevelState {
    levels: [Vec<u32>; 3],
}

impl Default for LevelState {
    fn default() -> Self {
        Self::new()
    }
}

impl LevelState {
    pub fn new() -> Self {
        Self {
            levels: TreeKind::ALL.map(|k| vec![0; model::tree(k).node_count()]),
        }
    }

    pub fn levels(&self, kind: TreeKind) -> &[u32] {
        &self.levels[kind.index()]
    }

    pub fn level(&self, tree_index: usize, node_id: &str) -> Result<u32> {
        let (kind, idx, _) = locate(tree_index, node_id)?;
        Ok(self.levels[kind.index()][idx])
    }

    /// Interactive path: out-of-range levels and unlock violations are
    /// rejected and nothing changes.
    pub fn set_level(&mut self, tree_index: usize, node_id: &str, level: u32) -> Result<u32> {
        let (kind, idx, def) = locate(tree_index, node_id)?;
        if level > def.max_level {
            return Err(PlannerError::LevelOutOfRange {
                node: def.id.to_string(),
                level,
                max: def.max_level,
            });
        }
        let current = self.levels[kind.index()][idx];
        if level == current {
            return Ok(level);
        }
        if level > current && !self.is_unlocked(kind, idx) {
            return Err(PlannerError::Locked {
                node: def.id.to_string(),
            });
        }
        if level == 0 {
            if let Some(child) = self.stranded_child(kind, idx) {
                return Err(PlannerError::HasDependents {
                    node: def.id.to_string(),
                    child: child.id.to_string(),
                });
            }
        }
        self.levels[kind.index()][idx] = level;
        Ok(level)
    }

    /// Replaces a whole tree, clamping each level into its cap. Returns how
    /// many levels had to be clamped.
    pub fn replace_tree(&mut self, kind: TreeKind, raw: &[u32]) -> std::result::Result<usize, DecodeError> {
        let tree = model::tree(kind);
        if raw.len() != tree.node_count() {
            return Err(DecodeError::TokenCount {
                tree: kind,
                expected: tree.node_count(),
                found: raw.len(),
            });
        }
        let mut clamped = 0;
        let levels: Vec<u32> = tree
            .nodes()
            .zip(raw)
            .map(|(def, &level)| {
                if level > def.max_level {
                    clamped += 1;
                    tracing::debug!(tree = %kind, node = def.id, level, max = def.max_level, "clamping stale level");
                }
                level.min(def.max_level)
            })
            .collect();
        self.levels[kind.index()] = levels;
        Ok(clamped)
    }

    pub fn tap(&mut self, tree_index: usize, node_id: &str, mode: TapMode) -> Result<u32> {
        let (_, _, def) = locate(tree_index, node_id)?;
        let current = self.level(tree_index, node_id)?;
        if current >= def.max_level {
            return Ok(current);
        }
        let target = match mode {
            TapMode::Single => current + 1,
            TapMode::Max => def.max_level,
        };
        self.set_level(tree_index, node_id, target)
    }

    pub fn untap(&mut self, tree_index: usize, node_id: &str, mode: TapMode) -> Result<u32> {
        let current = self.level(tree_index, node_id)?;
        if current == 0 {
            return Ok(0);
        }
        let target = match mode {
            TapMode::Single => current - 1,
            TapMode::Max => 0,
        };
        self.set_level(tree_index, node_id, target)
    }

    pub fn reset_tree(&mut self, tree_index: usize) -> Result<()> {
        let kind = TreeKind::from_index(tree_index)?;
        self.levels[kind.index()].fill(0);
        Ok(())
    }

    pub fn reset_all(&mut self) {
        for levels in &mut self.levels {
            levels.fill(0);
        }
    }

    /// Sum of levels in one tree, or across all trees for `None`.
    pub fn total_levels(&self, tree_index: Option<usize>) -> Result<u64> {
        match tree_index {
            Some(i) => {
                let kind = TreeKind::from_index(i)?;
                Ok(sum(&self.levels[kind.index()]))
            }
            None => Ok(self.levels.iter().map(|l| sum(l)).sum()),
        }
    }

    /// Roots are always unlocked; other nodes need at least one leveled parent.
    pub fn is_unlocked(&self, kind: TreeKind, index: usize) -> bool {
        let tree = model::tree(kind);
        let Some(def) = tree.node_at(index) else {
            return false;
        };
        def.is_root()
            || tree
                .parent_indices(index)
                .into_iter()
                .any(|p| self.levels[kind.index()][p] > 0)
    }

    /// A leveled child whose only leveled parent is `index`.
    fn stranded_child(&self, kind: TreeKind, index: usize) -> Option<&'static NodeDef> {
        let tree = model::tree(kind);
        let levels = &self.levels[kind.index()];
        tree.child_indices(index)
            .into_iter()
            .find(|&c| {
                levels[c] > 0
                    && tree
                        .parent_indices(c)
                        .into_iter()
                        .all(|p| p == index || levels[p] == 0)
            })
            .and_then(|c| tree.node_at(c))
    }
}

fn sum(levels: &[u32]) -> u64 {
    levels.iter().map(|&l| u64::from(l)).sum()
}

fn locate(tree_index: usize, node_id: &str) -> Result<(TreeKind, usize, &'static NodeDef)> {
    let kind = TreeKind::from_index(tree_index)?;
    let tree = model::tree(kind);
    tree.nodes()
        .enumerate()
        .find(|(_, n)| n.id == node_id)
        .map(|(i, n)| (kind, i, n))
        .ok_or_else(|| PlannerError::UnknownNode {
            tree: kind,
            node: node_id.to_string(),
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn in_bounds(state: &LevelState) -> bool {
        TreeKind::ALL.iter().all(|&k| {
            model::tree(k)
                .nodes()
                .zip(state.levels(k))
                .all(|(def, &l)| l <= def.max_level)
        })
    }

    #[test]
    fn basic_allocation() {
        let mut s = LevelState::new();
        assert_eq!(s.set_level(0, "attack_boost", 5), Ok(5));
        assert_eq!(s.total_levels(Some(0)), Ok(5));
        assert_eq!(s.total_levels(Some(1)), Ok(0));
        assert_eq!(s.total_levels(None), Ok(5));
        assert_eq!(s.level(0, "attack_boost"), Ok(5));
    }

    #[test]
    fn level_above_cap_is_rejected_without_change() {
        let mut s = LevelState::new();
        let err = s.set_level(0, "attack_boost", 51).unwrap_err();
        assert_eq!(
            err,
            PlannerError::LevelOutOfRange { node: "attack_boost".into(), level: 51, max: 50 }
        );
        assert_eq!(s, LevelState::new());
    }

    #[test]
    fn unknown_node_is_an_error_and_a_noop() {
        let mut s = LevelState::new();
        let err = s.set_level(2, "attack_boost", 1).unwrap_err();
        assert!(matches!(err, PlannerError::UnknownNode { tree: TreeKind::Cannon, .. }));
        assert_eq!(s, LevelState::new());
        assert!(matches!(s.tap(1, "nope", TapMode::Single), Err(PlannerError::UnknownNode { .. })));
    }

    #[test]
    fn bad_tree_index_is_out_of_range() {
        let mut s = LevelState::new();
        assert_eq!(s.reset_tree(3), Err(PlannerError::TreeOutOfRange(3)));
        assert_eq!(s.total_levels(Some(9)), Err(PlannerError::TreeOutOfRange(9)));
        assert_eq!(s.set_level(5, "attack_boost", 1), Err(PlannerError::TreeOutOfRange(5)));
    }

    #[test]
    fn child_needs_a_leveled_parent() {
        let mut s = LevelState::new();
        assert!(matches!(s.set_level(0, "crit_chance", 1), Err(PlannerError::Locked { .. })));
        s.set_level(0, "attack_boost", 1).unwrap();
        assert_eq!(s.set_level(0, "crit_chance", 1), Ok(1));
    }

    #[test]
    fn merge_node_unlocks_from_either_parent() {
        let mut s = LevelState::new();
        s.set_level(0, "attack_boost", 1).unwrap();
        s.set_level(0, "crit_damage", 1).unwrap();
        assert_eq!(s.set_level(0, "overcharge", 1), Ok(1));
    }

    #[test]
    fn parent_cannot_strand_a_child() {
        let mut s = LevelState::new();
        s.set_level(0, "attack_boost", 2).unwrap();
        s.set_level(0, "crit_chance", 1).unwrap();
        let err = s.set_level(0, "attack_boost", 0).unwrap_err();
        assert_eq!(
            err,
            PlannerError::HasDependents { node: "attack_boost".into(), child: "crit_chance".into() }
        );
        // lowering without reaching 0 is fine
        assert_eq!(s.set_level(0, "attack_boost", 1), Ok(1));
    }

    #[test]
    fn parent_may_drop_when_child_has_another_parent() {
        let mut s = LevelState::new();
        s.set_level(0, "attack_boost", 1).unwrap();
        s.set_level(0, "crit_chance", 1).unwrap();
        s.set_level(0, "crit_damage", 1).unwrap();
        s.set_level(0, "overcharge", 1).unwrap();
        assert_eq!(s.set_level(0, "crit_chance", 0), Ok(0));
    }

    #[test]
    fn tap_modes() {
        let mut s = LevelState::new();
        assert_eq!(s.tap(1, "blade_damage", TapMode::Single), Ok(1));
        assert_eq!(s.tap(1, "blade_damage", TapMode::Single), Ok(2));
        assert_eq!(s.tap(1, "blade_damage", TapMode::Max), Ok(50));
        // tapping a maxed node does nothing
        assert_eq!(s.tap(1, "blade_damage", TapMode::Max), Ok(50));
        assert_eq!(s.untap(1, "blade_damage", TapMode::Single), Ok(49));
        assert_eq!(s.untap(1, "blade_damage", TapMode::Max), Ok(0));
        assert_eq!(s.untap(1, "blade_damage", TapMode::Max), Ok(0));
    }

    #[test]
    fn reset_is_idempotent() {
        let mut s = LevelState::new();
        s.set_level(2, "shell_damage", 10).unwrap();
        s.set_level(0, "attack_boost", 3).unwrap();
        s.reset_tree(2).unwrap();
        let once = s.clone();
        s.reset_tree(2).unwrap();
        assert_eq!(s, once);
        assert_eq!(s.total_levels(Some(2)), Ok(0));
        assert_eq!(s.total_levels(Some(0)), Ok(3));
        s.reset_all();
        assert_eq!(s, LevelState::new());
    }

    #[test]
    fn replace_tree_clamps_and_checks_length() {
        let mut s = LevelState::new();
        let mut raw = vec![0; 30];
        raw[0] = 500;
        raw[4] = 2;
        assert_eq!(s.replace_tree(TreeKind::Guardian, &raw), Ok(2));
        assert_eq!(s.level(0, "attack_boost"), Ok(50));
        assert_eq!(s.level(0, "overcharge"), Ok(1));

        let before = s.clone();
        assert!(matches!(
            s.replace_tree(TreeKind::Vanguard, &[1, 2, 3]),
            Err(DecodeError::TokenCount { expected: 30, found: 3, .. })
        ));
        assert_eq!(s, before);
    }

    proptest! {
        #[test]
        fn bounds_hold_under_any_mutation_sequence(
            ops in prop::collection::vec((0usize..3, 0usize..30, 0u32..200, 0u8..5), 0..200)
        ) {
            let mut s = LevelState::new();
            for (tree, idx, level, op) in ops {
                let kind = TreeKind::ALL[tree];
                let id = model::tree(kind).node_at(idx).unwrap().id;
                match op {
                    0 => { let _ = s.set_level(tree, id, level); }
                    1 => {
                        let mut raw = s.levels(kind).to_vec();
                        raw[idx] = level;
                        s.replace_tree(kind, &raw).unwrap();
                    }
                    2 => { let _ = s.tap(tree, id, TapMode::Single); }
                    3 => { let _ = s.tap(tree, id, TapMode::Max); }
                    _ => { let _ = s.untap(tree, id, TapMode::Single); }
                }
                prop_assert!(in_bounds(&s));
            }
        }
    }
}
