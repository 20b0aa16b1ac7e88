use super::{
    controls_panel::ControlsPanel, help_overlay::HelpOverlay, settings_modal::SettingsModal,
    share_panel::SharePanel, stats_panel::StatsPanel, toast::Toast, tree_view::TreeView,
};
use crate::build::TapMode;
use crate::model::TreeKind;
use crate::planner::PlannerAction;
use crate::state::{boot, session, share, storage, BootSources, Settings};
use yew::prelude::*;

#[function_component(App)]
pub fn app() -> Html {
    // Share link first, then local storage.
    let booted = use_memo((), |_| {
        let search = share::location_search();
        let stored_build = storage::load_build();
        let stored_owned = storage::load_owned();
        boot(BootSources {
            shared: search.as_deref().and_then(share::build_param),
            stored_build: stored_build.as_deref(),
            stored_owned: stored_owned.as_deref(),
            settings: storage::load_settings(),
        })
    });
    let planner = {
        let initial = booted.planner.clone();
        use_reducer(move || initial)
    };
    let selected = use_state(|| TreeKind::Guardian);
    let open_settings = use_state(|| false);
    let show_help = use_state(|| !storage::help_seen());
    let notice = {
        let initial = booted.notice.clone();
        use_state(move || initial)
    };

    // The token has been consumed (or rejected); drop it from the address bar.
    {
        let had_token = share::location_search()
            .as_deref()
            .and_then(share::build_param)
            .is_some();
        use_effect_with((), move |_| {
            if had_token {
                share::strip_build_from_location();
            }
            || ()
        });
    }
    // Persist build and budget on every change
    {
        let planner = planner.clone();
        use_effect_with(planner.revision, move |_| {
            match session::snapshot(&planner) {
                Some((build, owned)) => {
                    storage::save_build(&build);
                    storage::save_owned(owned);
                }
                None => storage::clear_build(),
            }
            || ()
        });
    }
    // Persist settings
    {
        let tap_mode = planner.tap_mode;
        use_effect_with(tap_mode, move |_| {
            storage::save_settings(&Settings { tap_mode });
            || ()
        });
    }

    let on_select = {
        let selected = selected.clone();
        Callback::from(move |kind: TreeKind| selected.set(kind))
    };
    let on_open_settings = {
        let open_settings = open_settings.clone();
        Callback::from(move |_| open_settings.set(true))
    };
    let on_close_settings = {
        let open_settings = open_settings.clone();
        Callback::from(move |_| open_settings.set(false))
    };
    let on_show_help = {
        let show_help = show_help.clone();
        Callback::from(move |_| show_help.set(true))
    };
    let on_close_help = {
        let show_help = show_help.clone();
        Callback::from(move |_| {
            storage::mark_help_seen();
            show_help.set(false);
        })
    };
    let on_set_tap_mode = {
        let planner = planner.clone();
        Callback::from(move |mode: TapMode| planner.dispatch(PlannerAction::SetTapMode(mode)))
    };
    let on_set_owned = {
        let planner = planner.clone();
        Callback::from(move |owned: u64| planner.dispatch(PlannerAction::SetOwned(owned)))
    };
    let on_reset_tree = {
        let planner = planner.clone();
        Callback::from(move |kind: TreeKind| planner.dispatch(PlannerAction::ResetTree(kind.index())))
    };
    let on_reset_all = {
        let planner = planner.clone();
        Callback::from(move |_| planner.dispatch(PlannerAction::ResetAll))
    };
    let on_hard_reset = {
        let planner = planner.clone();
        let show_help = show_help.clone();
        Callback::from(move |_| {
            // the effects above see an empty planner and remove its keys
            planner.dispatch(PlannerAction::Wipe);
            storage::clear_all();
            show_help.set(true);
        })
    };
    let on_dismiss_toast = {
        let planner = planner.clone();
        let notice = notice.clone();
        Callback::from(move |_| {
            notice.set(None);
            planner.dispatch(PlannerAction::DismissError);
        })
    };

    let toast_message = (*notice)
        .clone()
        .or_else(|| planner.last_error.as_ref().map(|e| e.to_string()));
    let share_url = share::base_url()
        .map(|base| share::share_url(&base, &planner.serialize()))
        .unwrap_or_else(|| planner.serialize());

    html! {
        <div id="root" style="min-height:100vh; background:#0d1117; color:#c9d1d9; display:flex; flex-direction:column;">
            <ControlsPanel
                selected={*selected}
                tap_mode={planner.tap_mode}
                {on_select}
                {on_show_help}
                {on_open_settings}
            />
            <div style="display:flex; gap:12px; padding:12px; flex:1; align-items:flex-start;">
                <div style="flex:1; overflow:auto;">
                    <TreeView planner={planner.clone()} tree={*selected} />
                </div>
                <div style="display:flex; flex-direction:column; gap:12px; width:260px;">
                    <StatsPanel levels={planner.levels.clone()} ledger={planner.ledger()} />
                    <SharePanel url={share_url} />
                </div>
            </div>
            <SettingsModal
                show={*open_settings}
                on_close={on_close_settings}
                tap_mode={planner.tap_mode}
                {on_set_tap_mode}
                owned={planner.owned}
                {on_set_owned}
                selected={*selected}
                {on_reset_tree}
                {on_reset_all}
                {on_hard_reset}
            />
            <HelpOverlay show={*show_help} on_close={on_close_help} />
            <Toast message={toast_message} on_dismiss={on_dismiss_toast} />
        </div>
    }
}
