use std::fmt;
use std::hash::{Hash, Hasher};

/// A graph node, identified by its label.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Vertex {
	label: String,
}

impl Vertex {
	/// Creates a vertex with the given label.
	pub fn new(label: impl Into<String>) -> Self {
		Self {
			label: label.into(),
		}
	}

	/// The label this vertex is identified by.
	pub fn label(&self) -> &str {
		&self.label
	}
}

impl fmt::Display for Vertex {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(&self.label)
	}
}

impl From<&str> for Vertex {
	fn from(label: &str) -> Self {
		Self::new(label)
	}
}

impl From<String> for Vertex {
	fn from(label: String) -> Self {
		Self::new(label)
	}
}

/// Travel direction of an edge relative to its declared `(from, to)` pair.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Direction {
	/// `from` leads to `to`.
	#[default]
	FromTo,
	/// `to` leads to `from`.
	ToFrom,
	/// Either endpoint leads to the other.
	Undirected,
}

/// A weighted connection between two vertices.
///
/// Identity is `(from, to, direction)`; the weight is payload and takes no
/// part in equality or hashing.
#[derive(Clone, Debug)]
pub struct Edge {
	from: Vertex,
	to: Vertex,
	direction: Direction,
	weight: i32,
}

impl Edge {
	/// Creates an edge with weight 0.
	pub fn new(from: Vertex, to: Vertex, direction: Direction) -> Self {
		Self {
			from,
			to,
			direction,
			weight: 0,
		}
	}

	/// Builder-style weight assignment.
	pub fn with_weight(mut self, weight: i32) -> Self {
		self.weight = weight;
		self
	}

	/// Declared first endpoint.
	pub fn from_vertex(&self) -> &Vertex {
		&self.from
	}

	/// Declared second endpoint.
	pub fn to_vertex(&self) -> &Vertex {
		&self.to
	}

	/// Direction tag.
	pub fn direction(&self) -> Direction {
		self.direction
	}

	/// Edge weight.
	pub fn weight(&self) -> i32 {
		self.weight
	}

	pub(crate) fn set_weight(&mut self, weight: i32) {
		self.weight = weight;
	}

	/// The endpoint this edge leaves from. Undirected edges keep declared order.
	pub fn tail(&self) -> &Vertex {
		match self.direction {
			Direction::ToFrom => &self.to,
			Direction::FromTo | Direction::Undirected => &self.from,
		}
	}

	/// The endpoint this edge arrives at.
	pub fn head(&self) -> &Vertex {
		match self.direction {
			Direction::ToFrom => &self.from,
			Direction::FromTo | Direction::Undirected => &self.to,
		}
	}

	/// True if travelling along this edge can arrive at `v`.
	pub fn enters(&self, v: &Vertex) -> bool {
		match self.direction {
			Direction::FromTo => self.to == *v,
			Direction::ToFrom => self.from == *v,
			Direction::Undirected => self.touches(v),
		}
	}

	/// True if travelling along this edge can depart from `v`.
	pub fn exits(&self, v: &Vertex) -> bool {
		match self.direction {
			Direction::FromTo => self.from == *v,
			Direction::ToFrom => self.to == *v,
			Direction::Undirected => self.touches(v),
		}
	}

	/// True if `v` is either endpoint.
	pub fn touches(&self, v: &Vertex) -> bool {
		self.from == *v || self.to == *v
	}

	/// True for an edge whose endpoints are the same vertex.
	pub fn is_loop(&self) -> bool {
		self.from == self.to
	}

	/// Relabels every endpoint currently labelled `old`.
	pub(crate) fn replace_vertex(&mut self, old: &str, new: &str) {
		if self.from.label == old {
			self.from = Vertex::new(new);
		}
		if self.to.label == old {
			self.to = Vertex::new(new);
		}
	}
}

impl PartialEq for Edge {
	fn eq(&self, other: &Self) -> bool {
		self.from == other.from && self.to == other.to && self.direction == other.direction
	}
}

impl Eq for Edge {}

impl Hash for Edge {
	fn hash<H: Hasher>(&self, state: &mut H) {
		self.from.hash(state);
		self.to.hash(state);
		self.direction.hash(state);
	}
}

impl fmt::Display for Edge {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		let arrow = match self.direction {
			Direction::FromTo => "->",
			Direction::ToFrom => "<-",
			Direction::Undirected => "--",
		};
		write!(f, "{} {} {} ({})", self.from, arrow, self.to, self.weight)
	}
}

/// Style tags understood by the editor's style tools (flowchart shapes).
///
/// The store accepts any integer tag; these are the ones with a name.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum VertexStyle {
	/// Plain vertex.
	#[default]
	Normal,
	/// Process box.
	Process,
	/// Decision diamond.
	Decision,
	/// Start/end terminator.
	Terminator,
}

impl VertexStyle {
	/// Raw integer tag stored on a drawable.
	pub fn tag(self) -> i32 {
		match self {
			VertexStyle::Normal => 0,
			VertexStyle::Process => 1,
			VertexStyle::Decision => 2,
			VertexStyle::Terminator => 3,
		}
	}

	/// Named style for a raw tag, if it has one.
	pub fn from_tag(tag: i32) -> Option<Self> {
		match tag {
			0 => Some(VertexStyle::Normal),
			1 => Some(VertexStyle::Process),
			2 => Some(VertexStyle::Decision),
			3 => Some(VertexStyle::Terminator),
			_ => None,
		}
	}
}

impl From<VertexStyle> for i32 {
	fn from(style: VertexStyle) -> Self {
		style.tag()
	}
}

/// Detached copy of the logical graph.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Graph {
	/// Edges in insertion order.
	pub edges: Vec<Edge>,
	/// Vertices in insertion order.
	pub vertices: Vec<Vertex>,
}
