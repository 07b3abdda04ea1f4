use super::types::{Direction, VertexStyle};

/// Screen-space rectangle projected from a vertex.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct VertexDrawable {
	left: i32,
	top: i32,
	width: i32,
	height: i32,
	label: String,
	style: i32,
}

impl VertexDrawable {
	/// A drawable at the given bounds with the normal style.
	pub fn new(left: i32, top: i32, width: i32, height: i32, label: impl Into<String>) -> Self {
		Self {
			left,
			top,
			width,
			height,
			label: label.into(),
			style: VertexStyle::Normal.tag(),
		}
	}

	/// Axis-aligned square of side `size` centred on `(x, y)`.
	///
	/// Coordinates wrap on overflow instead of panicking.
	pub fn centered(x: i32, y: i32, size: i32, label: impl Into<String>) -> Self {
		let half = size / 2;
		Self::new(x.wrapping_sub(half), y.wrapping_sub(half), size, size, label)
	}

	/// Left edge.
	pub fn left(&self) -> i32 {
		self.left
	}

	/// Top edge.
	pub fn top(&self) -> i32 {
		self.top
	}

	/// Width.
	pub fn width(&self) -> i32 {
		self.width
	}

	/// Height.
	pub fn height(&self) -> i32 {
		self.height
	}

	/// Horizontal centre, rounded toward the left edge.
	pub fn center_x(&self) -> i32 {
		self.left.wrapping_add(self.width / 2)
	}

	/// Vertical centre, rounded toward the top edge.
	pub fn center_y(&self) -> i32 {
		self.top.wrapping_add(self.height / 2)
	}

	/// Display label; tracks the owning vertex's label.
	pub fn label(&self) -> &str {
		&self.label
	}

	/// Raw style tag.
	pub fn style(&self) -> i32 {
		self.style
	}

	/// Named style, if the tag has one.
	pub fn style_kind(&self) -> Option<VertexStyle> {
		VertexStyle::from_tag(self.style)
	}

	/// Inclusive point-in-rectangle test. A negative width or height contains
	/// nothing; a rectangle whose far edge wraps past `i32::MAX` keeps its
	/// wrapped extent.
	pub fn contains(&self, x: i32, y: i32) -> bool {
		span_contains(self.left, self.width, x) && span_contains(self.top, self.height, y)
	}

	pub(crate) fn update_bounding_rectangle(
		&mut self,
		left: i32,
		top: i32,
		width: i32,
		height: i32,
	) {
		self.left = left;
		self.top = top;
		self.width = width;
		self.height = height;
	}

	pub(crate) fn rename(&mut self, label: &str) {
		self.label = label.to_owned();
	}

	pub(crate) fn set_style(&mut self, style: i32) {
		self.style = style;
	}
}

/// Screen-space segment projected from an edge, running from the edge's
/// tail centre to its head centre.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EdgeDrawable {
	start_x: i32,
	start_y: i32,
	end_x: i32,
	end_y: i32,
	weight: i32,
	direction: Direction,
}

impl EdgeDrawable {
	/// A segment from `(start_x, start_y)` to `(end_x, end_y)`.
	pub fn new(
		start_x: i32,
		start_y: i32,
		end_x: i32,
		end_y: i32,
		weight: i32,
		direction: Direction,
	) -> Self {
		Self {
			start_x,
			start_y,
			end_x,
			end_y,
			weight,
			direction,
		}
	}

	/// Start x.
	pub fn start_x(&self) -> i32 {
		self.start_x
	}

	/// Start y.
	pub fn start_y(&self) -> i32 {
		self.start_y
	}

	/// End x.
	pub fn end_x(&self) -> i32 {
		self.end_x
	}

	/// End y.
	pub fn end_y(&self) -> i32 {
		self.end_y
	}

	/// Weight shown alongside the segment.
	pub fn weight(&self) -> i32 {
		self.weight
	}

	/// Direction of the projected edge.
	pub fn direction(&self) -> Direction {
		self.direction
	}

	/// True if `(x, y)` lies within `tolerance` of the segment.
	pub fn contains(&self, x: i32, y: i32, tolerance: f64) -> bool {
		let p = (x as f64, y as f64);
		let a = (self.start_x as f64, self.start_y as f64);
		let b = (self.end_x as f64, self.end_y as f64);
		point_segment_distance(p, a, b) <= tolerance
	}

	pub(crate) fn set_start(&mut self, x: i32, y: i32) {
		self.start_x = x;
		self.start_y = y;
	}

	pub(crate) fn set_end(&mut self, x: i32, y: i32) {
		self.end_x = x;
		self.end_y = y;
	}

	pub(crate) fn set_weight(&mut self, weight: i32) {
		self.weight = weight;
	}
}

fn span_contains(start: i32, len: i32, p: i32) -> bool {
	len >= 0 && p.wrapping_sub(start) as u32 <= len as u32
}

fn point_segment_distance(p: (f64, f64), a: (f64, f64), b: (f64, f64)) -> f64 {
	let (ax, ay) = (p.0 - a.0, p.1 - a.1);
	let (bx, by) = (b.0 - a.0, b.1 - a.1);
	let len2 = bx * bx + by * by;
	if len2 <= f64::EPSILON {
		return (ax * ax + ay * ay).sqrt();
	}
	let t = ((ax * bx + ay * by) / len2).clamp(0.0, 1.0);
	let (dx, dy) = (p.0 - (a.0 + bx * t), p.1 - (a.1 + by * t));
	(dx * dx + dy * dy).sqrt()
}
