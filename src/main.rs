mod build;
mod codec;
mod components;
mod currency;
mod error;
mod logging;
mod model;
mod planner;
mod state;
mod tree_data;

fn main() {
    logging::init();
    tracing::info!("skill tree planner starting");
    for tree in model::TREES {
        if let Err(e) = tree.validate() {
            tracing::error!("{e}");
        }
    }
    yew::Renderer::<components::App>::new().render();
}
