//! Tech Crystal accounting. Derived from levels; nothing here blocks an
//! allocation.

use crate::build::LevelState;
use crate::model::TreeKind;

pub const CRYSTALS_PER_LEVEL: u64 = 1;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Scope {
    Tree(TreeKind),
    Total,
}

pub fn spent(state: &LevelState, scope: Scope) -> u64 {
    let trees: &[TreeKind] = match scope {
        Scope::Tree(ref kind) => std::slice::from_ref(kind),
        Scope::Total => &TreeKind::ALL,
    };
    let levels: u64 = trees
        .iter()
        .flat_map(|&k| state.levels(k).iter().map(|&l| u64::from(l)))
        .sum();
    levels * CRYSTALS_PER_LEVEL
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Ledger {
    pub owned: u64,
    pub spent: u64,
}

impl Ledger {
    pub fn compute(state: &LevelState, owned: u64) -> Self {
        Self {
            owned,
            spent: spent(state, Scope::Total),
        }
    }

    /// May be negative; the UI shows it as a warning.
    pub fn available(&self) -> i64 {
        i128::from(self.owned)
            .saturating_sub(i128::from(self.spent))
            .clamp(i128::from(i64::MIN), i128::from(i64::MAX)) as i64
    }

    pub fn is_overdrawn(&self) -> bool {
        self.spent > self.owned
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn spent_matches_allocation_scenario() {
        let mut s = LevelState::new();
        s.set_level(0, "attack_boost", 5).unwrap();
        assert_eq!(spent(&s, Scope::Tree(TreeKind::Guardian)), 5);
        assert_eq!(spent(&s, Scope::Tree(TreeKind::Vanguard)), 0);
        assert_eq!(spent(&s, Scope::Total), 5);
    }

    #[test]
    fn available_can_go_negative() {
        let mut s = LevelState::new();
        s.set_level(2, "shell_damage", 40).unwrap();
        let ledger = Ledger::compute(&s, 25);
        assert_eq!(ledger.available(), -15);
        assert!(ledger.is_overdrawn());

        let ledger = Ledger::compute(&s, 40);
        assert_eq!(ledger.available(), 0);
        assert!(!ledger.is_overdrawn());
    }

    #[test]
    fn huge_budget_saturates() {
        let ledger = Ledger { owned: u64::MAX, spent: 0 };
        assert_eq!(ledger.available(), i64::MAX);
    }

    proptest! {
        #[test]
        fn spent_is_sum_of_levels(picks in prop::collection::vec((0usize..3, 0usize..30, 0u32..120), 0..60), owned in 0u64..10_000) {
            let mut s = LevelState::new();
            for (tree, idx, level) in picks {
                let kind = TreeKind::ALL[tree];
                let mut raw = s.levels(kind).to_vec();
                raw[idx] = level;
                s.replace_tree(kind, &raw).unwrap();
            }
            let total: u64 = TreeKind::ALL
                .iter()
                .flat_map(|&k| s.levels(k).iter().map(|&l| u64::from(l)))
                .sum();
            prop_assert_eq!(spent(&s, Scope::Total), total);
            prop_assert_eq!(Some(total), s.total_levels(None).ok());
            let ledger = Ledger::compute(&s, owned);
            prop_assert_eq!(ledger.available(), owned as i64 - total as i64);
        }
    }
}
