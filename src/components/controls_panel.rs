use crate::build::TapMode;
use crate::model::TreeKind;
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct ControlsPanelProps {
    pub selected: TreeKind,
    pub tap_mode: TapMode,
    pub on_select: Callback<TreeKind>,
    pub on_show_help: Callback<()>,
    pub on_open_settings: Callback<()>,
}

#[function_component]
pub fn ControlsPanel(props: &ControlsPanelProps) -> Html {
    let tabs = TreeKind::ALL.iter().map(|&kind| {
        let cb = props.on_select.clone();
        let active = kind == props.selected;
        let style = if active {
            "background:#1f6feb; border:1px solid #388bfd; color:#fff;"
        } else {
            ""
        };
        html! { <button {style} onclick={Callback::from(move |_| cb.emit(kind))}>{ kind.name() }</button> }
    });
    let help_cb = {
        let cb = props.on_show_help.clone();
        Callback::from(move |_| cb.emit(()))
    };
    let settings_cb = {
        let cb = props.on_open_settings.clone();
        Callback::from(move |_| cb.emit(()))
    };
    let mode = match props.tap_mode {
        TapMode::Single => "Click: +1 level",
        TapMode::Max => "Click: max out",
    };
    html! {<div id="top-bar" style="display:flex; gap:6px; align-items:center; flex-wrap:wrap; padding:8px; background:rgba(22,27,34,0.9); border-bottom:1px solid #30363d;">
        { for tabs }
        <span style="flex:1;"></span>
        <span style="font-size:11px; opacity:0.7;">{ mode }</span>
        <button onclick={settings_cb}>{"Settings"}</button>
        <button onclick={help_cb}>{"Help"}</button>
    </div>}
}
