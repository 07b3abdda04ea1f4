use std::collections::HashMap;

use log::{debug, info, trace};
use slotmap::{SlotMap, new_key_type};

use super::drawable::{EdgeDrawable, VertexDrawable};
use super::error::GraphStoreError;
use super::options::StoreOptions;
use super::types::{Direction, Edge, Graph, Vertex};

new_key_type! {
	/// Handle to an edge held by a [`GraphStore`].
	pub struct EdgeId;
	/// Handle to a vertex's rectangle.
	pub struct VertexDrawableId;
	/// Handle to an edge's segment.
	pub struct EdgeDrawableId;
}

type RedrawCallback = Box<dyn FnMut()>;

/// The logical graph of one open document together with its drawable
/// projection.
///
/// Every vertex owns one rectangle and one adjacency list; every edge owns one
/// segment and sits in the adjacency lists of both endpoints. All indexes are
/// updated before any redraw callback runs.
pub struct GraphStore {
	name: String,
	edge_hit_tolerance: f64,
	vertices: Vec<Vertex>,
	edge_order: Vec<EdgeId>,
	edges: SlotMap<EdgeId, Edge>,
	vertex_edges: HashMap<Vertex, Vec<EdgeId>>,
	vertex_render: HashMap<Vertex, VertexDrawableId>,
	edge_render: HashMap<EdgeId, EdgeDrawableId>,
	vertex_drawables: SlotMap<VertexDrawableId, VertexDrawable>,
	edge_drawables: SlotMap<EdgeDrawableId, EdgeDrawable>,
	redraw_callbacks: Vec<RedrawCallback>,
	revision: u64,
}

impl Default for GraphStore {
	fn default() -> Self {
		Self::new()
	}
}

impl GraphStore {
	/// An empty store with default options.
	pub fn new() -> Self {
		Self::with_options(StoreOptions::default())
	}

	/// An empty store configured by `options`.
	pub fn with_options(options: StoreOptions) -> Self {
		debug!("graph store constructed: {}", options.name);
		Self {
			name: options.name,
			edge_hit_tolerance: options.edge_hit_tolerance,
			vertices: Vec::new(),
			edge_order: Vec::new(),
			edges: SlotMap::with_key(),
			vertex_edges: HashMap::new(),
			vertex_render: HashMap::new(),
			edge_render: HashMap::new(),
			vertex_drawables: SlotMap::with_key(),
			edge_drawables: SlotMap::with_key(),
			redraw_callbacks: Vec::new(),
			revision: 0,
		}
	}

	/// Document title.
	pub fn name(&self) -> &str {
		&self.name
	}

	/// Sets the document title. Does not notify.
	pub fn set_name(&mut self, name: impl Into<String>) {
		self.name = name.into();
	}

	/// Registers an observer run after every notifying mutation.
	///
	/// Callbacks run synchronously, in registration order, after the store is
	/// fully updated. They receive no payload and cannot reach the store while
	/// it is being mutated: when the store is shared as `Rc<RefCell<GraphStore>>`,
	/// borrowing it from inside a callback panics. Record the change (a dirty
	/// flag, a signal) and re-query once the mutator has returned.
	pub fn add_redraw_callback<F>(&mut self, callback: F)
	where
		F: FnMut() + 'static,
	{
		self.redraw_callbacks.push(Box::new(callback));
	}

	/// Bumps the revision and runs every redraw callback.
	pub fn invalidate(&mut self) {
		self.revision += 1;
		trace!("invalidate: revision {}", self.revision);
		for callback in &mut self.redraw_callbacks {
			callback();
		}
	}

	/// Number of notifications issued so far.
	pub fn revision(&self) -> u64 {
		self.revision
	}

	/// Adds `v` as a `size`×`size` square centred on `(x, y)`.
	///
	/// Returns `false` and leaves the graph unchanged if `v` is already present.
	/// Notifies in both cases.
	pub fn add_vertex(&mut self, v: Vertex, x: i32, y: i32, size: i32) -> bool {
		let inserted = if self.vertex_edges.contains_key(&v) {
			false
		} else {
			debug!("adding vertex {v}, before size is {}", self.vertices.len());
			let drawable = self
				.vertex_drawables
				.insert(VertexDrawable::centered(x, y, size, v.label()));
			self.vertex_render.insert(v.clone(), drawable);
			self.vertex_edges.insert(v.clone(), Vec::new());
			self.vertices.push(v);
			debug!("after size is {}", self.vertices.len());
			true
		};
		self.invalidate();
		inserted
	}

	/// Connects `v1` and `v2`.
	///
	/// The segment runs from the tail's current centre to the head's. Returns
	/// `Ok(false)` for a duplicate of an existing edge (still notifies).
	pub fn add_edge(
		&mut self,
		v1: &Vertex,
		v2: &Vertex,
		direction: Direction,
		weight: i32,
	) -> Result<bool, GraphStoreError> {
		let c1 = self.center_of(v1)?;
		let c2 = self.center_of(v2)?;
		let edge = Edge::new(v1.clone(), v2.clone(), direction).with_weight(weight);

		let inserted = if self.find_edge(&edge).is_some() {
			false
		} else {
			let (start, end) = if edge.tail() == v1 { (c1, c2) } else { (c2, c1) };
			let drawable = self.edge_drawables.insert(EdgeDrawable::new(
				start.0, start.1, end.0, end.1, weight, direction,
			));
			trace!("adding edge {edge}");
			let id = self.edges.insert(edge);
			self.edge_order.push(id);
			self.edge_render.insert(id, drawable);
			self.link(v1, id);
			if v1 != v2 {
				self.link(v2, id);
			}
			true
		};
		self.invalidate();
		Ok(inserted)
	}

	/// Removes `v`, its rectangle and every incident edge. Notifies.
	pub fn remove_vertex(&mut self, v: &Vertex) -> bool {
		let removed = match self.vertex_edges.remove(v) {
			Some(incident) => {
				debug!("vertex {v} has {} edges", incident.len());
				for id in incident {
					if let Some(edge) = self.detach_edge(id) {
						debug!("removed edge {edge}");
					}
				}
				if let Some(drawable) = self.vertex_render.remove(v) {
					self.vertex_drawables.remove(drawable);
				}
				self.vertices.retain(|x| x != v);
				true
			}
			None => false,
		};
		self.invalidate();
		removed
	}

	/// Removes the edge equal to `e`, if any. Notifies.
	pub fn remove_edge(&mut self, e: &Edge) -> bool {
		debug!("removing edge {e}");
		let removed = match self.find_edge(e) {
			Some(id) => self.detach_edge(id).is_some(),
			None => false,
		};
		self.invalidate();
		removed
	}

	/// Removes every edge joining `v1` and `v2`, in either direction.
	///
	/// Edges from either vertex to a third vertex are kept, so each adjacency
	/// list loses only the shared edges. The editor this model comes from
	/// cleared both lists entirely, which stranded the third-vertex edges.
	/// Returns the number removed. Notifies.
	pub fn remove_all_edges(&mut self, v1: &Vertex, v2: &Vertex) -> usize {
		let shared: Vec<EdgeId> = self
			.edge_order
			.iter()
			.copied()
			.filter(|id| {
				self.edges
					.get(*id)
					.is_some_and(|e| e.touches(v1) && e.touches(v2))
			})
			.collect();
		for id in &shared {
			self.detach_edge(*id);
		}
		self.invalidate();
		shared.len()
	}

	/// Recentres `v` on `(x, y)` keeping its size, and drags the matching end
	/// of every incident segment along.
	pub fn move_vertex_to(&mut self, v: &Vertex, x: i32, y: i32) -> Result<(), GraphStoreError> {
		let vd = self.vertex_drawable_mut(v)?;
		let (width, height) = (vd.width(), vd.height());
		vd.update_bounding_rectangle(
			x.wrapping_sub(width / 2),
			y.wrapping_sub(height / 2),
			width,
			height,
		);
		let (cx, cy) = (vd.center_x(), vd.center_y());

		if let Some(incident) = self.vertex_edges.get(v) {
			for id in incident {
				let Some(edge) = self.edges.get(*id) else {
					continue;
				};
				let Some(ed) = self
					.edge_render
					.get(id)
					.and_then(|d| self.edge_drawables.get_mut(*d))
				else {
					continue;
				};
				if edge.tail() == v {
					ed.set_start(cx, cy);
				}
				if edge.head() == v {
					ed.set_end(cx, cy);
				}
			}
		}

		self.invalidate();
		Ok(())
	}

	/// Resizes `v` to a `new_size` square anchored at its old top-left corner
	/// minus half the new size.
	///
	/// Incident segments are not reattached; they catch up on the next move.
	pub fn scale_vertex(&mut self, v: &Vertex, new_size: i32) -> Result<(), GraphStoreError> {
		let vd = self.vertex_drawable_mut(v)?;
		let left = vd.left().wrapping_sub(new_size / 2);
		let top = vd.top().wrapping_sub(new_size / 2);
		vd.update_bounding_rectangle(left, top, new_size, new_size);
		self.invalidate();
		Ok(())
	}

	/// Sets the style tag on `v`'s rectangle.
	pub fn set_vertex_style(&mut self, v: &Vertex, style: i32) -> Result<(), GraphStoreError> {
		self.vertex_drawable_mut(v)?.set_style(style);
		self.invalidate();
		Ok(())
	}

	/// Updates the weight of the edge projected as `drawable`, on both the
	/// edge and its segment.
	pub fn set_edge_weight(
		&mut self,
		drawable: EdgeDrawableId,
		weight: i32,
	) -> Result<(), GraphStoreError> {
		let id = self
			.edge_render
			.iter()
			.find_map(|(e, d)| (*d == drawable).then_some(*e))
			.ok_or(GraphStoreError::UnknownEdgeDrawable)?;
		let ed = self
			.edge_drawables
			.get_mut(drawable)
			.ok_or(GraphStoreError::UnknownEdgeDrawable)?;
		let edge = self
			.edges
			.get_mut(id)
			.ok_or(GraphStoreError::UnknownEdgeDrawable)?;
		edge.set_weight(weight);
		ed.set_weight(weight);

		self.edge_render.remove(&id);
		self.edge_render.insert(id, drawable);

		self.invalidate();
		Ok(())
	}

	/// Relabels the vertex `old` to `new` across every index.
	///
	/// The rectangle, incident edges and their segments are kept. Returns
	/// `Ok(false)` if there is no vertex `old`. Does not notify.
	pub fn rename_vertex(&mut self, old: &str, new: &str) -> Result<bool, GraphStoreError> {
		let old_v = Vertex::new(old);
		if !self.vertex_edges.contains_key(&old_v) || old == new {
			return Ok(false);
		}
		let new_v = Vertex::new(new);
		if self.vertex_edges.contains_key(&new_v) {
			return Err(GraphStoreError::VertexExists(new.to_owned()));
		}

		if let Some(slot) = self.vertices.iter_mut().find(|x| **x == old_v) {
			*slot = new_v.clone();
		}

		if let Some(drawable) = self.vertex_render.remove(&old_v) {
			if let Some(vd) = self.vertex_drawables.get_mut(drawable) {
				vd.rename(new);
			}
			self.vertex_render.insert(new_v.clone(), drawable);
		}

		let incident = self.vertex_edges.remove(&old_v).unwrap_or_default();
		for id in &incident {
			if let Some(edge) = self.edges.get_mut(*id) {
				edge.replace_vertex(old, new);
			}
		}
		self.vertex_edges.insert(new_v, incident);

		info!("renamed vertex {old} to {new}");
		Ok(true)
	}

	/// True if `v1`'s adjacency list holds an edge whose declared `to` is `v2`.
	pub fn is_edge_between(&self, v1: &Vertex, v2: &Vertex) -> bool {
		self.edge_between(v1, v2).is_some()
	}

	/// First edge in `v1`'s adjacency list whose declared `to` is `v2`.
	pub fn edge_between(&self, v1: &Vertex, v2: &Vertex) -> Option<&Edge> {
		self.vertex_edges
			.get(v1)?
			.iter()
			.filter_map(|id| self.edges.get(*id))
			.find(|e| e.to_vertex() == v2)
	}

	/// True if one hop of travel leads from `v1` to `v2` over a directed edge.
	pub fn is_directed_edge_between_vertices(&self, v1: &Vertex, v2: &Vertex) -> bool {
		self.edges().any(|e| {
			(e.from_vertex() == v1 && e.to_vertex() == v2 && e.direction() == Direction::FromTo)
				|| (e.from_vertex() == v2
					&& e.to_vertex() == v1
					&& e.direction() == Direction::ToFrom)
		})
	}

	/// First vertex rectangle, in insertion order, containing `(x, y)`.
	pub fn vertex_drawable_at(&self, x: i32, y: i32) -> Option<VertexDrawableId> {
		self.vertices
			.iter()
			.filter_map(|v| self.vertex_render.get(v).copied())
			.find(|id| {
				self.vertex_drawables
					.get(*id)
					.is_some_and(|vd| vd.contains(x, y))
			})
	}

	/// First edge segment, in insertion order, passing within the configured
	/// tolerance of `(x, y)`.
	pub fn edge_drawable_at(&self, x: i32, y: i32) -> Option<EdgeDrawableId> {
		self.edge_order
			.iter()
			.filter_map(|id| self.edge_render.get(id).copied())
			.find(|id| {
				self.edge_drawables
					.get(*id)
					.is_some_and(|ed| ed.contains(x, y, self.edge_hit_tolerance))
			})
	}

	/// Detached copy of the current vertices and edges.
	pub fn underlying_graph(&self) -> Graph {
		Graph {
			edges: self.edges().cloned().collect(),
			vertices: self.vertices.clone(),
		}
	}

	/// True if no vertex is currently labelled `label`.
	pub fn is_vertex_name_available(&self, label: &str) -> bool {
		!self.vertices.iter().any(|v| v.to_string() == label)
	}

	/// Vertices in insertion order.
	pub fn vertices(&self) -> &[Vertex] {
		&self.vertices
	}

	/// Edges in insertion order.
	pub fn edges(&self) -> impl Iterator<Item = &Edge> + '_ {
		self.edge_order.iter().filter_map(|id| self.edges.get(*id))
	}

	/// Edge by handle.
	pub fn edge(&self, id: EdgeId) -> Option<&Edge> {
		self.edges.get(id)
	}

	/// Handle of the edge equal to `e`.
	pub fn find_edge(&self, e: &Edge) -> Option<EdgeId> {
		self.edge_order
			.iter()
			.copied()
			.find(|id| self.edges.get(*id).is_some_and(|x| x == e))
	}

	/// Number of vertices.
	pub fn vertex_count(&self) -> usize {
		self.vertices.len()
	}

	/// Number of edges.
	pub fn edge_count(&self) -> usize {
		self.edge_order.len()
	}

	/// True if `v` is in the graph.
	pub fn contains_vertex(&self, v: &Vertex) -> bool {
		self.vertex_edges.contains_key(v)
	}

	/// `v`'s adjacency list; empty for an unknown vertex.
	pub fn incident_edges(&self, v: &Vertex) -> Vec<&Edge> {
		self.vertex_edges
			.get(v)
			.map(|ids| ids.iter().filter_map(|id| self.edges.get(*id)).collect())
			.unwrap_or_default()
	}

	/// Vertex rectangles in vertex insertion order.
	pub fn vertex_drawables(
		&self,
	) -> impl Iterator<Item = (VertexDrawableId, &VertexDrawable)> + '_ {
		self.vertices.iter().filter_map(|v| {
			let id = *self.vertex_render.get(v)?;
			Some((id, self.vertex_drawables.get(id)?))
		})
	}

	/// Edge segments in edge insertion order.
	pub fn edge_drawables(&self) -> impl Iterator<Item = (EdgeDrawableId, &EdgeDrawable)> + '_ {
		self.edge_order.iter().filter_map(|e| {
			let id = *self.edge_render.get(e)?;
			Some((id, self.edge_drawables.get(id)?))
		})
	}

	/// Rectangle by handle.
	pub fn vertex_drawable(&self, id: VertexDrawableId) -> Option<&VertexDrawable> {
		self.vertex_drawables.get(id)
	}

	/// Segment by handle.
	pub fn edge_drawable(&self, id: EdgeDrawableId) -> Option<&EdgeDrawable> {
		self.edge_drawables.get(id)
	}

	/// Handle of `v`'s rectangle.
	pub fn vertex_drawable_id(&self, v: &Vertex) -> Option<VertexDrawableId> {
		self.vertex_render.get(v).copied()
	}

	/// Handle of the segment for the edge equal to `e`.
	pub fn edge_drawable_id(&self, e: &Edge) -> Option<EdgeDrawableId> {
		self.edge_render.get(&self.find_edge(e)?).copied()
	}

	/// `v`'s rectangle.
	pub fn drawable_from_vertex(&self, v: &Vertex) -> Option<&VertexDrawable> {
		self.vertex_drawables.get(self.vertex_drawable_id(v)?)
	}

	/// Rectangle of the vertex labelled `label`.
	pub fn vertex_drawable_by_label(&self, label: &str) -> Option<&VertexDrawable> {
		self.drawable_from_vertex(&Vertex::new(label))
	}

	/// Segment of the edge equal to `e`.
	pub fn drawable_from_edge(&self, e: &Edge) -> Option<&EdgeDrawable> {
		self.edge_drawables.get(self.edge_drawable_id(e)?)
	}

	/// Vertex projected as `drawable`.
	pub fn vertex_from_drawable(&self, drawable: VertexDrawableId) -> Option<&Vertex> {
		self.vertices
			.iter()
			.find(|v| self.vertex_render.get(*v) == Some(&drawable))
	}

	/// Edge projected as `drawable`.
	pub fn edge_from_drawable(&self, drawable: EdgeDrawableId) -> Option<&Edge> {
		self.edge_order
			.iter()
			.find(|id| self.edge_render.get(*id) == Some(&drawable))
			.and_then(|id| self.edges.get(*id))
	}

	fn center_of(&self, v: &Vertex) -> Result<(i32, i32), GraphStoreError> {
		let vd = self
			.drawable_from_vertex(v)
			.ok_or_else(|| GraphStoreError::UnknownVertex(v.label().to_owned()))?;
		Ok((vd.center_x(), vd.center_y()))
	}

	fn vertex_drawable_mut(&mut self, v: &Vertex) -> Result<&mut VertexDrawable, GraphStoreError> {
		let unknown = || GraphStoreError::UnknownVertex(v.label().to_owned());
		let id = *self.vertex_render.get(v).ok_or_else(unknown)?;
		self.vertex_drawables.get_mut(id).ok_or_else(unknown)
	}

	fn link(&mut self, v: &Vertex, id: EdgeId) {
		if let Some(incident) = self.vertex_edges.get_mut(v) {
			incident.push(id);
		}
	}

	/// Drops an edge from the edge list, both adjacency lists and the render map.
	fn detach_edge(&mut self, id: EdgeId) -> Option<Edge> {
		let edge = self.edges.remove(id)?;
		self.edge_order.retain(|e| *e != id);
		if let Some(drawable) = self.edge_render.remove(&id) {
			self.edge_drawables.remove(drawable);
		}
		for v in [edge.from_vertex(), edge.to_vertex()] {
			if let Some(incident) = self.vertex_edges.get_mut(v) {
				incident.retain(|e| *e != id);
			}
		}
		Some(edge)
	}
}
