//! Picks the planner state a page load starts from.

use crate::build::LevelState;
use crate::codec;
use crate::planner::{Planner, PlannerAction};
use crate::state::storage::Settings;

#[derive(Clone, Debug, Default)]
pub struct BootSources<'a> {
    /// Token from the share link, if the page was opened with one.
    pub shared: Option<&'a str>,
    pub stored_build: Option<&'a str>,
    pub stored_owned: Option<&'a str>,
    pub settings: Settings,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Boot {
    pub planner: Planner,
    /// Message for the user when a share link could not be used.
    pub notice: Option<String>,
    pub from_share: bool,
}

/// A valid share link wins over stored state. A rejected link falls back to
/// the stored build, and a rejected stored build falls back to all zeros.
pub fn boot(src: BootSources<'_>) -> Boot {
    let owned = src
        .stored_owned
        .and_then(|raw| match raw.trim().parse::<u64>() {
            Ok(v) => Some(v),
            Err(e) => {
                tracing::warn!("ignoring stored crystal budget {raw:?}: {e}");
                None
            }
        })
        .unwrap_or(0);
    let levels = match src.stored_build.map(codec::decode) {
        Some(Ok(decoded)) => decoded.levels,
        Some(Err(e)) => {
            tracing::warn!("discarding stored build: {e}");
            LevelState::new()
        }
        None => LevelState::new(),
    };
    let mut planner = Planner::new(levels, owned, src.settings.tap_mode);

    let Some(token) = src.shared else {
        return Boot { planner, notice: None, from_share: false };
    };
    // decode is all-or-nothing, so a rejected link leaves the stored state
    match planner.apply(PlannerAction::LoadBuild(token.to_string())) {
        Ok(()) => {
            tracing::info!("loaded build from share link");
            Boot { planner, notice: None, from_share: true }
        }
        Err(e) => {
            tracing::warn!("rejected share link: {e}");
            Boot {
                planner,
                notice: Some(format!("That share link is not a valid build ({e}).")),
                from_share: false,
            }
        }
    }
}

/// Build string and budget worth writing to storage. A planner with nothing
/// allocated and no budget has nothing to keep, so its keys are removed.
pub fn snapshot(planner: &Planner) -> Option<(String, u64)> {
    if planner.owned == 0 && planner.levels == LevelState::new() {
        return None;
    }
    Some((codec::encode(&planner.levels, None), planner.owned))
}
