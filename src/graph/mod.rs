//! Graph store, its value types and their drawable projections.

mod drawable;
mod error;
mod options;
mod state;
mod types;

pub use drawable::{EdgeDrawable, VertexDrawable};
pub use error::GraphStoreError;
pub use options::{DEFAULT_GRAPH_NAME, EDGE_HIT_TOLERANCE, StoreOptions};
pub use state::{EdgeDrawableId, EdgeId, GraphStore, VertexDrawableId};
pub use types::{Direction, Edge, Graph, Vertex, VertexStyle};
