//! Export functionality for graph consumers
//!
//! Currently supports JSON export of the full game graph or a drill-down
//! subgraph.

mod graph_json;

pub use graph_json::{EdgeRecord, GraphExport, NodeRecord};
