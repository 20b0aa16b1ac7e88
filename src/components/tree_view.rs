use crate::model::{self, TreeKind};
use crate::planner::{Planner, PlannerAction};
use yew::prelude::*;

const NODE_W: f64 = 150.0;
const NODE_H: f64 = 84.0;
const COL_GAP: f64 = 170.0;
const ROW_GAP: f64 = 130.0;
const MARGIN: f64 = 24.0;

fn cell_origin(pos: model::GridPos) -> (f64, f64) {
    (
        MARGIN + pos.col as f64 * COL_GAP,
        MARGIN + pos.row as f64 * ROW_GAP,
    )
}

#[derive(Properties, PartialEq, Clone)]
pub struct TreeViewProps {
    pub planner: UseReducerHandle<Planner>,
    pub tree: TreeKind,
}

#[function_component(TreeView)]
pub fn tree_view(props: &TreeViewProps) -> Html {
    let tree = model::tree(props.tree);
    let levels = props.planner.levels.levels(props.tree);
    let tree_index = props.tree.index();

    // Parent -> child edges
    let edge_lines: Vec<Html> = tree
        .nodes()
        .flat_map(|child| child.parents.iter().map(move |p| (*p, child)))
        .filter_map(|(parent_id, child)| {
            let parent = tree.node(parent_id)?;
            let (px, py) = cell_origin(parent.pos);
            let (cx, cy) = cell_origin(child.pos);
            let lit = tree
                .position_of(parent_id)
                .map(|i| levels[i] > 0)
                .unwrap_or(false);
            Some(html! {
                <line
                    x1={format!("{:.1}", px + NODE_W * 0.5)}
                    y1={format!("{:.1}", py + NODE_H)}
                    x2={format!("{:.1}", cx + NODE_W * 0.5)}
                    y2={format!("{:.1}", cy)}
                    stroke={if lit { "#3fb950" } else { "#374151" }}
                    stroke-width="3"
                />
            })
        })
        .collect();

    let node_cards: Vec<Html> = tree
        .nodes()
        .enumerate()
        .map(|(i, def)| {
            let lvl = levels[i];
            let max = def.max_level;
            let unlocked = props.planner.levels.is_unlocked(props.tree, i);
            let color = tree.branch_of(i).map(|b| b.color.css()).unwrap_or("#374151");
            let (x, y) = cell_origin(def.pos);
            let bar = (lvl as f64 / max as f64) * 100.0;
            let mut tip = format!("{}\nLevel: {}/{}", def.name, lvl, max);
            if !unlocked {
                tip.push_str("\nNeeds one of:");
                for &p in def.parents {
                    let name = model::get_node_definition(tree_index, p)
                        .map(|n| n.name)
                        .unwrap_or(p);
                    tip.push_str(&format!("\n- {}", name));
                }
            }
            let node_id = def.id.to_string();
            // shift jumps straight to the cap (click) or to zero (right click)
            let onclick = {
                let planner = props.planner.clone();
                let node = node_id.clone();
                Callback::from(move |e: MouseEvent| {
                    let node = node.clone();
                    planner.dispatch(if e.shift_key() {
                        PlannerAction::SetLevel { tree: tree_index, node, level: max }
                    } else {
                        PlannerAction::Tap { tree: tree_index, node }
                    })
                })
            };
            let oncontextmenu = {
                let planner = props.planner.clone();
                let node = node_id;
                Callback::from(move |e: MouseEvent| {
                    e.prevent_default();
                    let node = node.clone();
                    planner.dispatch(if e.shift_key() {
                        PlannerAction::SetLevel { tree: tree_index, node, level: 0 }
                    } else {
                        PlannerAction::Untap { tree: tree_index, node }
                    })
                })
            };
            let border = if lvl >= max {
                "#3fb950"
            } else if unlocked {
                color
            } else {
                "#30363d"
            };
            html! {
                <div
                    style={format!(
                        "position:absolute; width:{}px; height:{}px; transform:translate({}px, {}px); border:2px solid {}; border-radius:12px; padding:8px 10px; background:#111821; cursor:pointer; user-select:none; opacity:{};",
                        NODE_W, NODE_H, x, y, border, if unlocked { "1" } else { "0.5" }
                    )}
                    title={tip}
                    {onclick}
                    {oncontextmenu}
                >
                    <div style={format!("font-weight:700; font-size:13px; color:{};", color)}>{ def.name }</div>
                    <div style="font-size:12px; opacity:0.8; font-variant-numeric:tabular-nums;">{ format!("{}/{}", lvl, max) }</div>
                    <div style="position:absolute; left:0; bottom:0; height:6px; width:100%; background:#161b22; border-radius:0 0 12px 12px; overflow:hidden;">
                        <div style={format!("height:100%; width:{:.1}%; background:#3fb950;", bar)}></div>
                    </div>
                </div>
            }
        })
        .collect();

    let width = MARGIN * 2.0 + 8.0 * COL_GAP + NODE_W;
    let height = MARGIN * 2.0 + 4.0 * ROW_GAP + NODE_H;
    html! {
        <div style={format!("position:relative; width:{}px; height:{}px; margin:0 auto;", width, height)}>
            <svg style="position:absolute; inset:0; overflow:visible; pointer-events:none;" width={width.to_string()} height={height.to_string()}>
                { for edge_lines }
            </svg>
            { for node_cards }
        </div>
    }
}
