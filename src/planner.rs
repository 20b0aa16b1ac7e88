//! Single owner of the planner's mutable state, driven by actions.

use std::rc::Rc;
use yew::Reducible;

use crate::build::{LevelState, TapMode};
use crate::codec;
use crate::currency::Ledger;
use crate::error::{PlannerError, Result};

#[derive(Clone, Debug, Default, PartialEq)]
pub struct Planner {
    pub levels: LevelState,
    /// User-set Tech Crystal budget. Survives tree resets.
    pub owned: u64,
    pub tap_mode: TapMode,
    /// Most recent rejected action, shown as a toast until dismissed.
    pub last_error: Option<PlannerError>,
    /// Bumped on every successful change; effects key persistence on it.
    pub revision: u64,
}

#[derive(Clone, Debug, PartialEq)]
pub enum PlannerAction {
    Tap { tree: usize, node: String },
    Untap { tree: usize, node: String },
    SetLevel { tree: usize, node: String, level: u32 },
    ResetTree(usize),
    ResetAll,
    /// Back to a first-visit state: no levels, no budget, default tap mode.
    Wipe,
    SetOwned(u64),
    SetTapMode(TapMode),
    /// Replace levels (and the budget, when present) from a build string.
    LoadBuild(String),
    DismissError,
}

impl Planner {
    pub fn new(levels: LevelState, owned: u64, tap_mode: TapMode) -> Self {
        Self {
            levels,
            owned,
            tap_mode,
            last_error: None,
            revision: 0,
        }
    }

    pub fn ledger(&self) -> Ledger {
        Ledger::compute(&self.levels, self.owned)
    }

    pub fn serialize(&self) -> String {
        codec::encode(&self.levels, Some(self.owned))
    }

    /// Applies an action in place. On error nothing is changed.
    pub fn apply(&mut self, action: PlannerAction) -> Result<()> {
        use PlannerAction::*;
        match action {
            Tap { tree, node } => {
                self.levels.tap(tree, &node, self.tap_mode)?;
            }
            Untap { tree, node } => {
                self.levels.untap(tree, &node, self.tap_mode)?;
            }
            SetLevel { tree, node, level } => {
                self.levels.set_level(tree, &node, level)?;
            }
            ResetTree(tree) => self.levels.reset_tree(tree)?,
            ResetAll => self.levels.reset_all(),
            Wipe => {
                self.levels.reset_all();
                self.owned = 0;
                self.tap_mode = TapMode::default();
            }
            SetOwned(owned) => self.owned = owned,
            SetTapMode(mode) => self.tap_mode = mode,
            LoadBuild(payload) => {
                let decoded = codec::decode(&payload)?;
                self.levels = decoded.levels;
                if let Some(owned) = decoded.owned {
                    self.owned = owned;
                }
            }
            DismissError => {
                self.last_error = None;
                return Ok(());
            }
        }
        self.revision = self.revision.wrapping_add(1);
        Ok(())
    }
}

impl Reducible for Planner {
    type Action = PlannerAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut new = (*self).clone();
        match new.apply(action) {
            Ok(()) => new.last_error = None,
            Err(e) => {
                tracing::warn!("action rejected: {e}");
                // keep the previous state, only record the error
                new = (*self).clone();
                new.last_error = Some(e);
            }
        }
        Rc::new(new)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::codec::DecodeError;

    fn tap(tree: usize, node: &str) -> PlannerAction {
        PlannerAction::Tap { tree, node: node.to_string() }
    }

    #[test]
    fn reduce_applies_taps_and_bumps_revision() {
        let p = Rc::new(Planner::default());
        let p = p.reduce(tap(0, "attack_boost"));
        let p = p.reduce(tap(0, "attack_boost"));
        assert_eq!(p.levels.level(0, "attack_boost"), Ok(2));
        assert_eq!(p.revision, 2);
        assert_eq!(p.ledger().spent, 2);
    }

    #[test]
    fn rejected_action_keeps_state_and_records_error() {
        let p = Rc::new(Planner::default()).reduce(tap(0, "attack_boost"));
        let before = p.levels.clone();
        let p = p.reduce(tap(0, "no_such_node"));
        assert_eq!(p.levels, before);
        assert_eq!(p.revision, 1);
        assert!(matches!(p.last_error, Some(PlannerError::UnknownNode { .. })));

        let p = p.reduce(PlannerAction::DismissError);
        assert_eq!(p.last_error, None);
        assert_eq!(p.revision, 1);
    }

    #[test]
    fn max_mode_fills_node() {
        let p = Rc::new(Planner::default())
            .reduce(PlannerAction::SetTapMode(TapMode::Max))
            .reduce(tap(2, "shell_damage"));
        assert_eq!(p.levels.level(2, "shell_damage"), Ok(50));
        let p = p.reduce(PlannerAction::Untap { tree: 2, node: "shell_damage".into() });
        assert_eq!(p.levels.level(2, "shell_damage"), Ok(0));
    }

    #[test]
    fn reset_keeps_owned_budget() {
        let p = Rc::new(Planner::default())
            .reduce(PlannerAction::SetOwned(300))
            .reduce(tap(1, "blade_damage"))
            .reduce(PlannerAction::ResetAll);
        assert_eq!(p.owned, 300);
        assert_eq!(p.levels.total_levels(None), Ok(0));
    }

    #[test]
    fn wipe_returns_to_first_visit_in_one_step() {
        let p = Rc::new(Planner::default())
            .reduce(PlannerAction::SetOwned(300))
            .reduce(PlannerAction::SetTapMode(TapMode::Max))
            .reduce(tap(1, "blade_damage"));
        let p = p.reduce(PlannerAction::Wipe);
        assert_eq!(p.levels, LevelState::new());
        assert_eq!(p.owned, 0);
        assert_eq!(p.tap_mode, TapMode::Single);
        assert_eq!(p.revision, 4);
    }

    #[test]
    fn set_level_jumps_straight_to_a_level() {
        let p = Rc::new(Planner::default())
            .reduce(PlannerAction::SetLevel { tree: 2, node: "shell_damage".into(), level: 50 });
        assert_eq!(p.levels.level(2, "shell_damage"), Ok(50));
        let p = p.reduce(PlannerAction::SetLevel { tree: 2, node: "heavy_shells".into(), level: 101 });
        assert!(matches!(p.last_error, Some(PlannerError::LevelOutOfRange { max: 100, .. })));
        assert_eq!(p.levels.level(2, "heavy_shells"), Ok(0));
    }

    #[test]
    fn serialize_then_load_restores_build() {
        let mut p = Planner::new(LevelState::new(), 100, TapMode::Single);
        p.apply(PlannerAction::SetLevel { tree: 0, node: "attack_boost".into(), level: 5 }).unwrap();
        let payload = p.serialize();

        let mut fresh = Planner::default();
        fresh.apply(PlannerAction::LoadBuild(payload)).unwrap();
        assert_eq!(fresh.levels, p.levels);
        assert_eq!(fresh.owned, 100);
    }

    #[test]
    fn load_without_budget_keeps_owned() {
        let mut p = Planner::new(LevelState::new(), 42, TapMode::Single);
        let payload = codec::encode(&LevelState::new(), None);
        p.apply(PlannerAction::LoadBuild(payload)).unwrap();
        assert_eq!(p.owned, 42);
    }

    #[test]
    fn malformed_share_link_leaves_state_untouched() {
        let p = Rc::new(Planner::default())
            .reduce(PlannerAction::SetOwned(80))
            .reduce(tap(0, "attack_boost"));
        let before = (*p).clone();
        let p = p.reduce(PlannerAction::LoadBuild("garbage".into()));
        assert_eq!(p.levels, before.levels);
        assert_eq!(p.owned, before.owned);
        assert_eq!(
            p.last_error,
            Some(PlannerError::Malformed(DecodeError::IllegalChar('g')))
        );
    }
}
