use thiserror::Error;

/// Precondition violations reported by [`GraphStore`](super::GraphStore).
///
/// Returning one of these never changes the store and never notifies observers.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GraphStoreError {
	/// The operation named a vertex that was never added (or was removed).
	#[error("vertex {0:?} is not in the graph")]
	UnknownVertex(String),
	/// The drawable handle does not belong to a live edge.
	#[error("edge drawable is not in the graph")]
	UnknownEdgeDrawable,
	/// A rename targeted a label already used by another vertex.
	#[error("vertex {0:?} already exists")]
	VertexExists(String),
}
