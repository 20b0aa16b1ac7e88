use crate::build::TapMode;
use crate::model::TreeKind;
use web_sys::HtmlInputElement;
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct SettingsModalProps {
    pub show: bool,
    pub on_close: Callback<()>,
    pub tap_mode: TapMode,
    pub on_set_tap_mode: Callback<TapMode>,
    pub owned: u64,
    pub on_set_owned: Callback<u64>,
    pub selected: TreeKind,
    pub on_reset_tree: Callback<TreeKind>,
    pub on_reset_all: Callback<()>,
    pub on_hard_reset: Callback<()>,
}

fn confirmed(message: &str) -> bool {
    web_sys::window()
        .map(|win| win.confirm_with_message(message).unwrap_or(false))
        .unwrap_or(true)
}

#[function_component]
pub fn SettingsModal(props: &SettingsModalProps) -> Html {
    if !props.show {
        return html! {};
    }

    let close_cb = {
        let cb = props.on_close.clone();
        Callback::from(move |_| cb.emit(()))
    };
    let toggle_mode_cb = {
        let cb = props.on_set_tap_mode.clone();
        let next = match props.tap_mode {
            TapMode::Single => TapMode::Max,
            TapMode::Max => TapMode::Single,
        };
        Callback::from(move |_| cb.emit(next))
    };
    let owned_cb = {
        let cb = props.on_set_owned.clone();
        Callback::from(move |e: Event| {
            let input: HtmlInputElement = e.target_unchecked_into();
            match input.value().trim().parse::<u64>() {
                Ok(v) => cb.emit(v),
                Err(_) => tracing::debug!("ignoring crystal input {:?}", input.value()),
            }
        })
    };
    let reset_tree_cb = {
        let cb = props.on_reset_tree.clone();
        let kind = props.selected;
        Callback::from(move |_| {
            if confirmed(&format!("Reset every node in the {} tree?", kind)) {
                cb.emit(kind);
            }
        })
    };
    let reset_all_cb = {
        let cb = props.on_reset_all.clone();
        Callback::from(move |_| {
            if confirmed("Reset all three trees? Your crystal count is kept.") {
                cb.emit(());
            }
        })
    };
    let hard_reset_cb = {
        let cb = props.on_hard_reset.clone();
        Callback::from(move |_| {
            if confirmed("This will WIPE the saved build, crystal count and settings. Are you sure?") {
                cb.emit(());
            }
        })
    };

    html! {<div style="position:fixed; inset:0; display:flex; align-items:center; justify-content:center; background:rgba(0,0,0,0.55); z-index:50;">
        <div style="background:#161b22; border:1px solid #30363d; border-radius:12px; padding:16px 20px; min-width:340px; max-width:480px; display:flex; flex-direction:column; gap:14px;">
            <div style="display:flex; justify-content:space-between; align-items:center;">
                <h3 style="margin:0; font-size:18px;">{"Settings"}</h3>
                <button onclick={close_cb.clone()} style="padding:4px 8px;">{"Close"}</button>
            </div>
            <div style="display:flex; flex-direction:column; gap:10px;">
                <label style="display:flex; align-items:center; gap:8px; cursor:pointer;">
                    <input type="checkbox" checked={props.tap_mode == TapMode::Max} onclick={toggle_mode_cb} />
                    <span>{"Max mode (one click fills or clears a node)"}</span>
                </label>
                <label style="display:flex; align-items:center; gap:8px;">
                    <span>{"Tech Crystals owned"}</span>
                    <input type="number" min="0" value={props.owned.to_string()} onchange={owned_cb} style="width:120px;" />
                </label>
            </div>
            <div style="display:flex; gap:8px; flex-wrap:wrap;">
                <button onclick={reset_tree_cb} style="flex:1;">{ format!("Reset {}", props.selected) }</button>
                <button onclick={reset_all_cb} style="flex:1;">{"Reset All Trees"}</button>
            </div>
            <div style="display:flex; gap:8px; flex-wrap:wrap;">
                <button onclick={hard_reset_cb} style="background:#f85149; border:1px solid #b62324; color:#fff; flex:1;">{"Wipe Saved Data"}</button>
                <button onclick={close_cb} style="flex:0 0 auto;">{"Done"}</button>
            </div>
            <div style="font-size:11px; line-height:1.4; opacity:0.7;">{"Wiping removes the saved build, crystal count and settings (including the help screen)."}</div>
        </div>
    </div>}
}
