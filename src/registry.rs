use {
	crate::{canvas::Canvas, config::OverwritePolicy, Error},
	core::fmt,
};

pub type Draw = Box<dyn Fn(&mut Canvas) + Send + Sync>;

pub struct Sprite {
	pub name: String,
	pub width: usize,
	pub height: usize,
	draw: Draw,
}

impl Sprite {
	pub fn render(&self) -> Canvas {
		let mut canvas = Canvas::fromWidthHeight(self.width, self.height);
		(self.draw)(&mut canvas);
		canvas
	}

	pub fn fileName(&self) -> String {
		format!("{}.png", self.name)
	}
}

impl fmt::Debug for Sprite {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("Sprite")
			.field("name", &self.name)
			.field("width", &self.width)
			.field("height", &self.height)
			.finish_non_exhaustive()
	}
}

/// An ordered set of sprites that land in one output directory.
#[derive(Debug)]
pub struct Registry {
	pub setName: &'static str,
	/// Relative to the configured output root.
	pub defaultSubdir: &'static str,
	pub defaultPolicy: OverwritePolicy,
	sprites: Vec<Sprite>,
}

impl Registry {
	pub fn new(setName: &'static str, defaultSubdir: &'static str, defaultPolicy: OverwritePolicy) -> Self {
		Self { setName, defaultSubdir, defaultPolicy, sprites: Vec::new() }
	}

	pub fn register(
		&mut self,
		name: impl Into<String>,
		[width, height]: [usize; 2],
		draw: impl Fn(&mut Canvas) + Send + Sync + 'static,
	) -> Result<&mut Self, Error> {
		let name = name.into();
		if self.get(&name).is_some() {
			return Err(Error::DuplicateSprite { set: self.setName, name });
		}
		self.sprites.push(Sprite { name, width, height, draw: Box::new(draw) });
		Ok(self)
	}

	pub fn get(&self, name: &str) -> Option<&Sprite> {
		self.sprites.iter().find(|sprite| sprite.name == name)
	}

	pub fn names(&self) -> impl Iterator<Item = &str> + '_ {
		self.sprites.iter().map(|sprite| sprite.name.as_str())
	}

	pub fn iter(&self) -> impl Iterator<Item = &Sprite> + '_ {
		self.sprites.iter()
	}

	pub fn len(&self) -> usize {
		self.sprites.len()
	}

	pub fn isEmpty(&self) -> bool {
		self.sprites.is_empty()
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	fn dot(canvas: &mut Canvas) {
		canvas.setPixel(0, 0, [1, 2, 3, 255]);
	}

	#[test]
	fn keeps_registration_order() {
		let mut registry = Registry::new("test", "", OverwritePolicy::Overwrite);
		registry.register("b", [2, 2], dot).unwrap().register("a", [3, 1], dot).unwrap();
		assert_eq!(registry.names().collect::<Vec<_>>(), ["b", "a"]);
		assert_eq!(registry.len(), 2);
		assert!(!registry.isEmpty());
	}

	#[test]
	fn rejects_duplicates() {
		let mut registry = Registry::new("test", "", OverwritePolicy::Skip);
		registry.register("a", [1, 1], dot).unwrap();
		assert!(matches!(
			registry.register("a", [1, 1], dot),
			Err(Error::DuplicateSprite { set: "test", ref name }) if name == "a"
		));
	}

	#[test]
	fn render_uses_declared_size() {
		let mut registry = Registry::new("test", "", OverwritePolicy::Skip);
		registry.register("a", [3, 1], dot).unwrap();
		let sprite = registry.get("a").unwrap();
		let canvas = sprite.render();
		assert_eq!((canvas.width, canvas.height), (3, 1));
		assert_eq!(canvas.pixel(0, 0), Some([1, 2, 3, 255]));
		assert_eq!(sprite.fileName(), "a.png");
		assert!(registry.get("missing").is_none());
	}
}
