use {
	crate::color::{Rgba, TRANSPARENT},
	thiserror::Error,
};

#[derive(Debug, Error, PartialEq, Eq)]
pub enum CanvasError {
	#[error("a canvas needs at least one row and one column")]
	Empty,

	#[error("row {row} has {actual} pixels, expected {expected}")]
	RaggedRow { row: usize, expected: usize, actual: usize },
}

/// A `width` × `height` grid of RGBA pixels, row-major.
///
/// Every drawing helper goes through [`Canvas::setPixel`], which silently drops writes that fall
/// outside the grid. Sprites rely on that to draw shapes partially off-canvas.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Canvas {
	pub width: usize,
	pub height: usize,
	pub data: Vec<Rgba>,
}

impl Canvas {
	pub fn fromWidthHeight(width: usize, height: usize) -> Self {
		Self { width, height, data: vec![TRANSPARENT; width * height] }
	}

	pub fn fromRows(rows: &[Vec<Rgba>]) -> Result<Self, CanvasError> {
		let width = rows.first().map_or(0, Vec::len);
		if width == 0 {
			return Err(CanvasError::Empty);
		}
		let mut data = Vec::with_capacity(width * rows.len());
		for (row, pixels) in rows.iter().enumerate() {
			if pixels.len() != width {
				return Err(CanvasError::RaggedRow { row, expected: width, actual: pixels.len() });
			}
			data.extend_from_slice(pixels);
		}
		Ok(Self { width, height: rows.len(), data })
	}

	#[inline]
	fn index(&self, x: i32, y: i32) -> Option<usize> {
		let (x, y) = (usize::try_from(x).ok()?, usize::try_from(y).ok()?);
		(x < self.width && y < self.height).then(|| y * self.width + x)
	}

	#[inline]
	pub fn setPixel(&mut self, x: i32, y: i32, color: Rgba) {
		if let Some(i) = self.index(x, y) {
			self.data[i] = color;
		}
	}

	pub fn pixel(&self, x: i32, y: i32) -> Option<Rgba> {
		self.index(x, y).map(|i| self.data[i])
	}

	pub fn pixelMut(&mut self, x: i32, y: i32) -> Option<&mut Rgba> {
		self.index(x, y).map(|i| &mut self.data[i])
	}

	pub fn fillRect(&mut self, x: i32, y: i32, w: i32, h: i32, color: Rgba) {
		for Δy in 0..h {
			for Δx in 0..w {
				self.setPixel(x + Δx, y + Δy, color);
			}
		}
	}

	pub fn drawBorder(&mut self, x: i32, y: i32, w: i32, h: i32, color: Rgba) {
		for Δx in 0..w {
			self.setPixel(x + Δx, y, color);
			self.setPixel(x + Δx, y + h - 1, color);
		}
		for Δy in 0..h {
			self.setPixel(x, y + Δy, color);
			self.setPixel(x + w - 1, y + Δy, color);
		}
	}

	pub fn fillCircle(&mut self, cx: i32, cy: i32, r: i32, color: Rgba) {
		for Δy in -r..=r {
			for Δx in -r..=r {
				if Δx * Δx + Δy * Δy <= r * r {
					self.setPixel(cx + Δx, cy + Δy, color);
				}
			}
		}
	}

	/// Fills `(Δx/rx)² + (Δy/ry)² <= 1`; degenerate radii draw nothing.
	pub fn fillEllipse(&mut self, cx: i32, cy: i32, rx: i32, ry: i32, color: Rgba) {
		if rx <= 0 || ry <= 0 {
			return;
		}
		let (rxSquared, rySquared) = (f64::from(rx * rx), f64::from(ry * ry));
		for Δy in -ry..=ry {
			for Δx in -rx..=rx {
				if f64::from(Δx * Δx) / rxSquared + f64::from(Δy * Δy) / rySquared <= 1.0 {
					self.setPixel(cx + Δx, cy + Δy, color);
				}
			}
		}
	}

	/// Bresenham, both endpoints included.
	pub fn drawLine(&mut self, mut x0: i32, mut y0: i32, x1: i32, y1: i32, color: Rgba) {
		let (dx, dy) = ((x1 - x0).abs(), -(y1 - y0).abs());
		let (sx, sy) = (if x0 < x1 { 1 } else { -1 }, if y0 < y1 { 1 } else { -1 });
		let mut err = dx + dy;
		loop {
			self.setPixel(x0, y0, color);
			if x0 == x1 && y0 == y1 {
				break;
			}
			let e2 = 2 * err;
			if e2 >= dy {
				err += dy;
				x0 += sx;
			}
			if e2 <= dx {
				err += dx;
				y0 += sy;
			}
		}
	}

	/// Fills `|Δx| + |Δy| <= r`.
	pub fn drawDiamond(&mut self, cx: i32, cy: i32, r: i32, color: Rgba) {
		for Δy in -r..=r {
			let halfWidth = r - Δy.abs();
			for Δx in -halfWidth..=halfWidth {
				self.setPixel(cx + Δx, cy + Δy, color);
			}
		}
	}

	/// Calls `f(Δx, Δy, pixel)` for every in-bounds pixel of the rectangle, `Δ` relative to `(x, y)`.
	pub fn mapRegion(&mut self, x: i32, y: i32, w: i32, h: i32, mut f: impl FnMut(i32, i32, &mut Rgba)) {
		for Δy in 0..h {
			for Δx in 0..w {
				if let Some(pixel) = self.pixelMut(x + Δx, y + Δy) {
					f(Δx, Δy, pixel);
				}
			}
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	const RED: Rgba = [255, 0, 0, 255];

	fn opaqueCount(canvas: &Canvas) -> usize {
		canvas.data.iter().filter(|pixel| **pixel != TRANSPARENT).count()
	}

	#[test]
	fn new_canvas_is_transparent() {
		let canvas = Canvas::fromWidthHeight(3, 2);
		assert_eq!(canvas.data.len(), 6);
		assert!(canvas.data.iter().all(|&pixel| pixel == TRANSPARENT));
	}

	#[test]
	fn out_of_bounds_writes_are_dropped() {
		let (w, h) = (5, 4);
		let mut canvas = Canvas::fromWidthHeight(w as _, h as _);
		let before = canvas.clone();
		for (x, y) in [(-1, 0), (w, 0), (0, -1), (0, h), (i32::MIN, i32::MAX)] {
			canvas.setPixel(x, y, RED);
		}
		assert_eq!(canvas, before);
		assert_eq!(canvas.pixel(w, 0), None);
	}

	#[test]
	fn shapes_clip_at_the_edges() {
		let mut canvas = Canvas::fromWidthHeight(4, 4);
		canvas.fillRect(-2, -2, 4, 4, RED);
		assert_eq!(opaqueCount(&canvas), 4);
		canvas.fillCircle(3, 3, 5, RED);
		assert_eq!(opaqueCount(&canvas), 16);
	}

	#[test]
	fn fill_rect_with_non_positive_size_is_a_no_op() {
		let mut canvas = Canvas::fromWidthHeight(4, 4);
		canvas.fillRect(1, 1, 0, 3, RED);
		canvas.fillRect(1, 1, 3, -1, RED);
		assert_eq!(opaqueCount(&canvas), 0);
	}

	#[test]
	fn border_leaves_the_inside_alone() {
		let mut canvas = Canvas::fromWidthHeight(5, 5);
		canvas.drawBorder(0, 0, 5, 5, RED);
		assert_eq!(opaqueCount(&canvas), 16);
		assert_eq!(canvas.pixel(2, 2), Some(TRANSPARENT));
	}

	#[test]
	fn line_includes_both_endpoints() {
		let mut canvas = Canvas::fromWidthHeight(8, 8);
		canvas.drawLine(6, 1, 1, 4, RED);
		assert_eq!(canvas.pixel(6, 1), Some(RED));
		assert_eq!(canvas.pixel(1, 4), Some(RED));
		// one pixel per step along the major axis
		assert_eq!(opaqueCount(&canvas), 6);
	}

	#[test]
	fn single_point_line() {
		let mut canvas = Canvas::fromWidthHeight(3, 3);
		canvas.drawLine(1, 1, 1, 1, RED);
		assert_eq!(opaqueCount(&canvas), 1);
	}

	#[test]
	fn ellipse_matches_implicit_equation() {
		let mut canvas = Canvas::fromWidthHeight(16, 16);
		canvas.fillEllipse(8, 8, 4, 2, RED);
		for y in 0..16 {
			for x in 0..16 {
				let (Δx, Δy) = (f64::from(x - 8), f64::from(y - 8));
				let inside = (Δx / 4.0).powi(2) + (Δy / 2.0).powi(2) <= 1.0;
				assert_eq!(canvas.pixel(x, y) == Some(RED), inside, "({x}, {y})");
			}
		}
		let mut degenerate = Canvas::fromWidthHeight(4, 4);
		degenerate.fillEllipse(2, 2, 0, 2, RED);
		assert_eq!(opaqueCount(&degenerate), 0);
	}

	#[test]
	fn diamond_area() {
		let mut canvas = Canvas::fromWidthHeight(9, 9);
		canvas.drawDiamond(4, 4, 2, RED);
		assert_eq!(opaqueCount(&canvas), 13);
	}

	#[test]
	fn from_rows_rejects_ragged_input() {
		let row = vec![RED; 3];
		assert_eq!(Canvas::fromRows(&[]), Err(CanvasError::Empty));
		assert_eq!(Canvas::fromRows(&[vec![]]), Err(CanvasError::Empty));
		assert_eq!(
			Canvas::fromRows(&[row.clone(), vec![RED; 2]]),
			Err(CanvasError::RaggedRow { row: 1, expected: 3, actual: 2 })
		);
		let canvas = Canvas::fromRows(&[row.clone(), row]).unwrap();
		assert_eq!((canvas.width, canvas.height), (3, 2));
	}

	#[test]
	fn map_region_sees_local_coordinates() {
		let mut canvas = Canvas::fromWidthHeight(4, 4);
		canvas.mapRegion(2, 2, 4, 4, |Δx, Δy, pixel| *pixel = [Δx as u8, Δy as u8, 0, 255]);
		assert_eq!(canvas.pixel(3, 2), Some([1, 0, 0, 255]));
		assert_eq!(opaqueCount(&canvas), 4);
	}
}
