use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct SharePanelProps {
    pub url: String,
}

#[function_component]
pub fn SharePanel(props: &SharePanelProps) -> Html {
    html! {
        <div style="background:rgba(22,27,34,0.9); border:1px solid #30363d; border-radius:8px; padding:8px 12px; display:flex; flex-direction:column; gap:6px; font-size:12px;">
            <span style="font-weight:600;">{"Share link"}</span>
            <input
                readonly=true
                value={props.url.clone()}
                style="width:100%; font-family:monospace; font-size:11px; background:#0d1117; color:#c9d1d9; border:1px solid #30363d; border-radius:6px; padding:4px 6px;"
            />
        </div>
    }
}
