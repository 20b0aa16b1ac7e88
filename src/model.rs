//! Static skill tree definitions and lookups.
//! Trees are immutable and shared read-only; canonical node order is branch
//! order, then node order within each branch. The build codec relies on it.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::{PlannerError, Result};
use crate::tree_data::{CANNON, GUARDIAN, VANGUARD};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TreeKind {
    Guardian,
    Vanguard,
    Cannon,
}

impl TreeKind {
    pub const ALL: [TreeKind; 3] = [TreeKind::Guardian, TreeKind::Vanguard, TreeKind::Cannon];

    pub fn index(self) -> usize {
        match self {
            TreeKind::Guardian => 0,
            TreeKind::Vanguard => 1,
            TreeKind::Cannon => 2,
        }
    }

    pub fn from_index(index: usize) -> Result<Self> {
        Self::ALL
            .get(index)
            .copied()
            .ok_or(PlannerError::TreeOutOfRange(index))
    }

    pub fn name(self) -> &'static str {
        match self {
            TreeKind::Guardian => "Guardian",
            TreeKind::Vanguard => "Vanguard",
            TreeKind::Cannon => "Cannon",
        }
    }
}

impl fmt::Display for TreeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum BranchColor {
    Yellow,
    Orange,
    Blue,
}

impl BranchColor {
    pub fn css(self) -> &'static str {
        match self {
            BranchColor::Yellow => "#d4af37",
            BranchColor::Orange => "#e3792b",
            BranchColor::Blue => "#58a6ff",
        }
    }
}

/// Grid cell used only for layout. Never part of a build payload.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct GridPos {
    pub col: u8,
    pub row: u8,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NodeDef {
    /// Stable skill identifier, unique within its tree.
    pub id: &'static str,
    pub name: &'static str,
    pub max_level: u32,
    /// Ids of nodes defined earlier in the same tree.
    pub parents: &'static [&'static str],
    pub pos: GridPos,
}

impl NodeDef {
    pub fn is_root(&self) -> bool {
        self.parents.is_empty()
    }
}

#[derive(Debug)]
pub struct Branch {
    pub color: BranchColor,
    pub nodes: &'static [NodeDef],
}

#[derive(Debug)]
pub struct Tree {
    pub kind: TreeKind,
    pub branches: &'static [Branch],
}

impl Tree {
    /// Nodes in canonical traversal order.
    pub fn nodes(&self) -> impl Iterator<Item = &'static NodeDef> + '_ {
        self.branches.iter().flat_map(|b| b.nodes.iter())
    }

    pub fn node_count(&self) -> usize {
        self.branches.iter().map(|b| b.nodes.len()).sum()
    }

    pub fn position_of(&self, id: &str) -> Option<usize> {
        self.nodes().position(|n| n.id == id)
    }

    pub fn node(&self, id: &str) -> Option<&'static NodeDef> {
        self.nodes().find(|n| n.id == id)
    }

    pub fn node_at(&self, index: usize) -> Option<&'static NodeDef> {
        self.nodes().nth(index)
    }

    pub fn branch_of(&self, index: usize) -> Option<&Branch> {
        let mut start = 0;
        for branch in self.branches {
            if index < start + branch.nodes.len() {
                return Some(branch);
            }
            start += branch.nodes.len();
        }
        None
    }

    pub fn parent_indices(&self, index: usize) -> Vec<usize> {
        let Some(node) = self.node_at(index) else {
            return Vec::new();
        };
        node.parents
            .iter()
            .filter_map(|p| self.position_of(p))
            .collect()
    }

    pub fn child_indices(&self, index: usize) -> Vec<usize> {
        let Some(node) = self.node_at(index) else {
            return Vec::new();
        };
        self.nodes()
            .enumerate()
            .filter(|(_, n)| n.parents.contains(&node.id))
            .map(|(i, _)| i)
            .collect()
    }

    /// Checks that ids are unique, every parent resolves to an earlier node
    /// and every cap is at least 1.
    pub fn validate(&self) -> Result<()> {
        let nodes: Vec<&NodeDef> = self.nodes().collect();
        for (i, node) in nodes.iter().enumerate() {
            if node.max_level == 0 {
                return Err(PlannerError::InvalidTree(format!(
                    "{}: '{}' has a max level of 0",
                    self.kind, node.id
                )));
            }
            if nodes[..i].iter().any(|n| n.id == node.id) {
                return Err(PlannerError::InvalidTree(format!(
                    "{}: duplicate node id '{}'",
                    self.kind, node.id
                )));
            }
            for parent in node.parents {
                if !nodes[..i].iter().any(|n| n.id == *parent) {
                    return Err(PlannerError::InvalidTree(format!(
                        "{}: '{}' references '{}' which is not defined before it",
                        self.kind, node.id, parent
                    )));
                }
            }
        }
        Ok(())
    }
}

pub static TREES: [&Tree; 3] = [&GUARDIAN, &VANGUARD, &CANNON];

pub fn tree(kind: TreeKind) -> &'static Tree {
    TREES[kind.index()]
}

pub fn get_tree(tree_index: usize) -> Result<&'static Tree> {
    TreeKind::from_index(tree_index).map(tree)
}

pub fn get_node_definition(tree_index: usize, node_id: &str) -> Result<&'static NodeDef> {
    let t = get_tree(tree_index)?;
    t.node(node_id).ok_or_else(|| PlannerError::UnknownNode {
        tree: t.kind,
        node: node_id.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn static_trees_are_valid_dags() {
        for t in TREES {
            t.validate().unwrap();
        }
    }

    #[test]
    fn trees_are_ordered_by_kind() {
        for (i, t) in TREES.iter().enumerate() {
            assert_eq!(t.kind.index(), i);
            assert_eq!(get_tree(i).unwrap().kind, t.kind);
        }
    }

    #[test]
    fn every_tree_has_three_branches_of_ten() {
        for t in TREES {
            assert_eq!(t.branches.len(), 3);
            assert!(t.branches.iter().all(|b| b.nodes.len() == 10));
            assert_eq!(t.node_count(), 30);
        }
    }

    #[test]
    fn caps_are_from_observed_set() {
        for t in TREES {
            assert!(t.nodes().all(|n| matches!(n.max_level, 1 | 50 | 100)));
        }
    }

    #[test]
    fn invalid_tree_index_is_out_of_range() {
        assert_eq!(get_tree(3).unwrap_err(), PlannerError::TreeOutOfRange(3));
        assert!(matches!(
            get_node_definition(7, "attack_boost"),
            Err(PlannerError::TreeOutOfRange(7))
        ));
    }

    #[test]
    fn node_lookup_by_id() {
        let def = get_node_definition(0, "attack_boost").unwrap();
        assert_eq!(def.name, "Attack Boost");
        assert!(def.is_root());
        assert_eq!(tree(TreeKind::Guardian).position_of("attack_boost"), Some(0));

        let err = get_node_definition(1, "attack_boost").unwrap_err();
        assert!(matches!(err, PlannerError::UnknownNode { tree: TreeKind::Vanguard, .. }));
    }

    #[test]
    fn parent_and_child_indices_agree() {
        let t = tree(TreeKind::Cannon);
        for i in 0..t.node_count() {
            for p in t.parent_indices(i) {
                assert!(p < i);
                assert!(t.child_indices(p).contains(&i));
            }
        }
    }

    #[test]
    fn branch_of_maps_flat_index() {
        let t = tree(TreeKind::Guardian);
        assert_eq!(t.branch_of(0).unwrap().color, BranchColor::Yellow);
        assert_eq!(t.branch_of(15).unwrap().color, BranchColor::Orange);
        assert_eq!(t.branch_of(29).unwrap().color, BranchColor::Blue);
        assert!(t.branch_of(30).is_none());
    }

    static BROKEN_NODES: [NodeDef; 2] = [
        NodeDef { id: "b", name: "B", max_level: 1, parents: &["a"], pos: GridPos { col: 0, row: 0 } },
        NodeDef { id: "a", name: "A", max_level: 1, parents: &[], pos: GridPos { col: 0, row: 1 } },
    ];
    static BROKEN_BRANCHES: [Branch; 1] = [Branch { color: BranchColor::Blue, nodes: &BROKEN_NODES }];

    #[test]
    fn forward_parent_reference_is_rejected() {
        let t = Tree { kind: TreeKind::Cannon, branches: &BROKEN_BRANCHES };
        assert!(matches!(t.validate(), Err(PlannerError::InvalidTree(_))));
    }
}
