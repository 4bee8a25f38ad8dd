//! JSON export of the game graph for the visualization front end
//!
//! The front end lays nodes out in horizontal bands by level, colors them by
//! level and labels each with its 3x3 grid. This module produces exactly that
//! data; layout and rendering stay on the consumer's side.

use std::{
    fs::File,
    io::{BufReader, BufWriter, Write},
    path::Path,
};

use serde::{Deserialize, Serialize};

use crate::{
    Result,
    error::Error,
    tictactoe::{CELL_COUNT, GameGraph},
};

/// One graph node
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NodeRecord {
    /// Wire encoding of the canonical board, e.g. `0,0,0,0,1,0,0,0,0`
    pub id: String,
    pub level: usize,
    /// Three rows separated by newlines
    pub label: String,
    pub terminal: bool,
}

/// One graph edge
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EdgeRecord {
    pub source: String,
    pub target: String,
    /// Level of the source node, used to color the edge
    pub source_level: usize,
}

/// Node and edge listing of a graph or drill-down subgraph
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GraphExport {
    /// Id of the drill-down root, absent for the full graph
    pub root: Option<String>,
    pub level_histogram: [usize; CELL_COUNT + 1],
    pub nodes: Vec<NodeRecord>,
    pub edges: Vec<EdgeRecord>,
}

impl GraphExport {
    /// Collect every node and edge of `graph`
    pub fn from_graph(graph: &GameGraph, root: Option<String>) -> Self {
        let nodes = graph
            .nodes()
            .map(|(board, node)| NodeRecord {
                id: board.encode(),
                level: node.level,
                label: board.to_string(),
                terminal: node.children.is_empty(),
            })
            .collect();

        let edges = graph
            .nodes()
            .flat_map(|(source, node)| {
                node.children.iter().map(move |target| EdgeRecord {
                    source: source.encode(),
                    target: target.encode(),
                    source_level: node.level,
                })
            })
            .collect();

        GraphExport {
            root,
            level_histogram: graph.level_histogram(),
            nodes,
            edges,
        }
    }

    /// Write pretty-printed JSON to `path`
    pub fn save_to_file<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let path = path.as_ref();
        let file = File::create(path).map_err(|source| Error::Io {
            operation: format!("create file {}", path.display()),
            source,
        })?;
        let mut writer = BufWriter::new(file);

        serde_json::to_writer_pretty(&mut writer, self)?;
        writer.flush().map_err(|source| Error::Io {
            operation: format!("flush {}", path.display()),
            source,
        })?;

        Ok(())
    }

    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|source| Error::Io {
            operation: format!("open file {}", path.display()),
            source,
        })?;

        Ok(serde_json::from_reader(BufReader::new(file))?)
    }
}
