pub mod items;
pub mod town_tiles;
pub mod weapons;

use crate::{registry::Registry, Error};

pub const ICON_SIZE: usize = 32;

/// Every known set, in generation order.
pub fn all() -> Result<Vec<Registry>, Error> {
	Ok(vec![items::registry()?, weapons::registry()?, town_tiles::registry()?])
}

#[cfg(test)]
mod tests {
	use {super::*, crate::png};

	#[test]
	fn every_sprite_encodes_at_its_declared_size() {
		for registry in all().unwrap() {
			assert!(!registry.isEmpty());
			for sprite in registry.iter() {
				let canvas = sprite.render();
				assert_eq!((canvas.width, canvas.height), (sprite.width, sprite.height), "{}", sprite.name);
				let encoded = png::encode(&canvas).unwrap();
				assert_eq!(encoded[..8], png::SIGNATURE);
			}
		}
	}

	#[test]
	fn sets_in_generation_order() {
		let names: Vec<_> = all().unwrap().iter().map(|registry| registry.setName).collect();
		assert_eq!(names, ["items", "weapons", "townTiles"]);
	}
}
