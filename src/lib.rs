//! In-memory model layer for an interactive graph editor.
//!
//! [`GraphStore`] keeps the logical graph (labelled vertices, weighted
//! directed or undirected edges) in step with its drawable projection
//! (rectangles and segments used for hit-testing and rendering) and notifies
//! registered observers after every change.

#[cfg(target_arch = "wasm32")]
use log::{Level, info};

pub mod graph;
#[cfg(feature = "leptos")]
pub mod reactive;

pub use graph::{
	Direction, Edge, EdgeDrawable, EdgeDrawableId, EdgeId, Graph, GraphStore, GraphStoreError,
	StoreOptions, Vertex, VertexDrawable, VertexDrawableId, VertexStyle,
};

/// Initialize logging and panic hooks for the WASM target.
#[cfg(target_arch = "wasm32")]
pub fn init_logging() {
	let _ = console_log::init_with_level(Level::Debug);
	console_error_panic_hook::set_once();
	info!("Logging initialized");
}
