use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct HelpOverlayProps {
    pub show: bool,
    pub on_close: Callback<()>,
}

#[function_component(HelpOverlay)]
pub fn help_overlay(props: &HelpOverlayProps) -> Html {
    if !props.show {
        return html! {};
    }
    let close_cb = {
        let cb = props.on_close.clone();
        Callback::from(move |_| cb.emit(()))
    };
    html! {
        <div style="position:fixed; top:50%; left:50%; transform:translate(-50%, -50%); background:rgba(0,0,0,0.87); border:2px solid #30363d; padding:28px 36px; border-radius:14px; max-width:520px; width:90%; box-shadow:0 0 0 1px #1a1f24, 0 6px 18px rgba(0,0,0,0.6); font-size:14px; line-height:1.4; z-index:60;">
            <h2 style="margin:0 0 12px 0; font-size:22px; color:#58a6ff; text-align:center;">{"Skill Tree Planner"}</h2>
            <ul style="margin:0 0 12px 18px; padding:0; list-style:disc; display:flex; flex-direction:column; gap:4px;">
                <li>{"Pick a tree: Guardian, Vanguard or Cannon."}</li>
                <li>{"Click a node to add a level, right click to remove one."}</li>
                <li>{"A node unlocks once one of its parents has a level."}</li>
                <li>{"Switch to max mode in Settings to fill or clear a node in one click."}</li>
                <li>{"Hold Shift to jump a node straight to its cap, or to zero with a right click."}</li>
                <li>{"Every level costs 1 Tech Crystal. Set how many you own in Settings."}</li>
                <li>{"Your build is saved in this browser. Copy the share link to send it to someone."}</li>
            </ul>
            <div style="display:flex; justify-content:center; margin-top:8px;">
                <button onclick={close_cb}>{"Got it"}</button>
            </div>
        </div>
    }
}
