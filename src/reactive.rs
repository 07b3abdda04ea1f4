//! Leptos bridge for store notifications.

use leptos::prelude::*;

use crate::graph::GraphStore;

/// Subscribes a signal to `store`'s redraw callbacks.
///
/// The returned signal mirrors [`GraphStore::revision`]; a canvas effect that
/// reads it re-runs after every notifying mutation and can then re-query the
/// drawables through its `Rc<RefCell<GraphStore>>`.
pub fn redraw_signal(store: &mut GraphStore) -> ReadSignal<u64> {
	let (revision, set_revision) = signal(store.revision());
	store.add_redraw_callback(move || set_revision.update(|r| *r += 1));
	revision
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::graph::{Direction, Vertex};

	#[test]
	fn signal_tracks_store_revision() {
		let mut store = GraphStore::new();
		store.add_vertex(Vertex::new("A"), 0, 0, 10);
		let revision = redraw_signal(&mut store);
		assert_eq!(revision.get_untracked(), 1);

		store.add_vertex(Vertex::new("B"), 50, 0, 10);
		store
			.add_edge(&Vertex::new("A"), &Vertex::new("B"), Direction::FromTo, 1)
			.unwrap();
		assert_eq!(revision.get_untracked(), store.revision());

		store.rename_vertex("A", "C").unwrap();
		assert_eq!(revision.get_untracked(), 3);
	}
}
