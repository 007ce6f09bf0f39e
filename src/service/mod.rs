mod fetch;
mod model;

pub use fetch::fetch_graph;
pub use model::{GraphEdge, GraphModel, GraphNode, NodeKind};
