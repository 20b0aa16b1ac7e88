use crate::currency::{self, Ledger, Scope};
use crate::build::LevelState;
use crate::model::TreeKind;
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct StatsPanelProps {
    pub levels: LevelState,
    pub ledger: Ledger,
}

#[function_component]
pub fn StatsPanel(props: &StatsPanelProps) -> Html {
    let row_style = "display:flex; align-items:center; gap:8px;"; // label | value
    let label_style = "flex:1; font-weight:500;";
    let value_style =
        "min-width:70px; text-align:right; font-variant-numeric:tabular-nums; font-weight:600;";
    let ledger = props.ledger;
    let allocated = props.levels.total_levels(None).unwrap_or_default();
    let available_color = if ledger.is_overdrawn() { "#f85149" } else { "#3fb950" };
    let per_tree = TreeKind::ALL.iter().map(|&k| {
        html! {
            <div style={row_style}>
                <span style={format!("{} opacity:0.8;", label_style)}>{ k.name() }</span>
                <span style={value_style}>{ currency::spent(&props.levels, Scope::Tree(k)) }</span>
            </div>
        }
    });
    html! {
        <div style="background:rgba(22,27,34,0.9); border:1px solid #30363d; border-radius:8px; padding:10px 14px; min-width:230px; display:flex; flex-direction:column; gap:8px; font-size:14px;">
            <div style={row_style}>
                <span style={format!("{} color:#58a6ff;", label_style)}>{"Tech Crystals owned"}</span>
                <span style={format!("{} color:#58a6ff;", value_style)}>{ ledger.owned }</span>
            </div>
            { for per_tree }
            <div style={row_style}>
                <span style={format!("{} opacity:0.8;", label_style)}>{"Levels allocated"}</span>
                <span style={value_style}>{ allocated }</span>
            </div>
            <div style={row_style}>
                <span style={label_style}>{"Spent"}</span>
                <span style={value_style}>{ ledger.spent }</span>
            </div>
            <div style={row_style}>
                <span style={format!("{} color:{};", label_style, available_color)}>{"Available"}</span>
                <span style={format!("{} color:{};", value_style, available_color)}>{ ledger.available() }</span>
            </div>
            { if ledger.is_overdrawn() { html!{ <div style="font-size:11px; color:#f85149;">{"This build costs more crystals than you own."}</div> } } else { html!{} } }
        </div>
    }
}
