//! Graph error types.

/// Structural inconsistencies in a graph or router table rebuilt from
/// stored parts.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum GraphError {
    /// An edge endpoint is not a vertex of the graph
    #[error("edge {edge} references vertex {vertex} but the graph has {vertex_count} vertices")]
    VertexOutOfRange {
        edge: usize,
        vertex: usize,
        vertex_count: usize,
    },

    /// An incidence list names an edge that does not exist
    #[error("incidence list of vertex {vertex} references missing edge {edge}")]
    EdgeOutOfRange { vertex: usize, edge: usize },

    /// An incidence list entry does not start at its owning vertex
    #[error("edge {edge} is listed under vertex {vertex} but starts elsewhere")]
    MisplacedEdge { vertex: usize, edge: usize },

    /// The incidence lists do not cover every vertex
    #[error("expected {expected} incidence lists, found {found}")]
    IncidenceCount { expected: usize, found: usize },

    /// A stored router table does not match the graph's shape
    #[error("router table is {rows}x{columns} but the graph has {vertex_count} vertices")]
    TableShape {
        rows: usize,
        columns: usize,
        vertex_count: usize,
    },

    /// A stored predecessor edge does not exist
    #[error("router table references missing edge {0}")]
    TableEdge(usize),
}
