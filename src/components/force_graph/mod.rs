mod component;
mod render;
mod scale;
mod state;
mod types;

pub use component::ForceGraphCanvas;
pub use types::GraphData;
