//! Stand-in icons for items that had no curated art yet. Existing files are kept by default.

use {
	crate::{
		canvas::Canvas,
		color::{offset, rgba, Rgba, TRANSPARENT},
		config::OverwritePolicy,
		registry::Registry,
		Error,
	},
	super::ICON_SIZE,
};

pub fn registry() -> Result<Registry, Error> {
	let mut registry = Registry::new("items", "items", OverwritePolicy::Skip);
	let size = [ICON_SIZE; 2];

	#[rustfmt::skip]
	let fish: [(&str, Rgba, Rgba, Option<Rgba>); 7] = [
		("smoked_bass", rgba(160, 120, 70, 255), rgba(130, 100, 50, 255), Some(rgba(140, 110, 60, 255))),
		("smoked_carp", rgba(170, 130, 60, 255), rgba(140, 110, 40, 255), None),
		("smoked_eel", rgba(100, 90, 70, 255), rgba(80, 70, 50, 255), Some(rgba(120, 100, 60, 255))),
		("smoked_lava_eel", rgba(140, 60, 30, 255), rgba(110, 40, 20, 255), Some(rgba(180, 80, 30, 255))),
		("smoked_pike", rgba(130, 130, 80, 255), rgba(110, 110, 60, 255), Some(rgba(150, 140, 90, 255))),
		("smoked_salmon", rgba(200, 120, 80, 255), rgba(170, 100, 60, 255), Some(rgba(220, 140, 90, 255))),
		("smoked_trout", rgba(170, 140, 90, 255), rgba(140, 120, 70, 255), None),
	];
	for (name, body, accent, stripe) in fish {
		registry.register(name, size, move |p: &mut Canvas| smokedFish(p, body, accent, stripe))?;
	}

	#[rustfmt::skip]
	let cages: [(&str, Rgba, Rgba, Rgba); 3] = [
		("wooden_cage", rgba(140, 100, 50, 255), rgba(100, 70, 35, 255), rgba(160, 120, 60, 255)),
		("iron_cage", rgba(160, 160, 170, 255), rgba(120, 120, 130, 255), rgba(200, 200, 210, 255)),
		("obsidian_cage", rgba(60, 50, 70, 255), rgba(40, 30, 50, 255), rgba(100, 60, 120, 255)),
	];
	for (name, bars, frame, latch) in cages {
		registry.register(name, size, move |p: &mut Canvas| cage(p, bars, frame, latch))?;
	}

	registry
		.register("pet_salve", size, petSalve)?
		.register("pet_feast", size, petFeast)?
		.register("trainer_whistle", size, trainerWhistle)?
		.register("mail_package", size, mailPackage)?
		.register("collection_parcel", size, collectionParcel)?;
	Ok(registry)
}

fn smokedFish(p: &mut Canvas, body: Rgba, accent: Rgba, stripe: Option<Rgba>) {
	let outline = rgba(40, 30, 20, 255);
	// body
	p.fillRect(8, 13, 16, 6, body);
	p.fillRect(10, 12, 12, 8, body);
	// head, eye
	p.fillRect(22, 14, 3, 4, body);
	p.setPixel(24, 15, outline);
	// tail
	p.fillRect(5, 12, 3, 2, accent);
	p.fillRect(5, 18, 3, 2, accent);
	p.fillRect(6, 14, 2, 4, accent);
	// belly
	p.fillRect(10, 18, 10, 1, offset([body[0], body[1], body[2], 255], [30, 30, 10]));
	if let Some(stripe) = stripe {
		p.fillRect(10, 15, 12, 1, stripe);
	}
	let smoke = rgba(180, 170, 160, 120);
	for (i, sx) in [12, 16, 20].into_iter().enumerate() {
		let wobble = (i % 2) as i32;
		for Δy in 0..3 {
			p.setPixel(sx + wobble, 9 - Δy * 2, smoke);
			p.setPixel(sx + 1 - wobble, 8 - Δy * 2, smoke);
		}
	}
	p.drawBorder(7, 11, 18, 10, outline);
}

fn cage(p: &mut Canvas, bars: Rgba, frame: Rgba, latch: Rgba) {
	p.fillRect(6, 6, 20, 2, frame);
	p.fillRect(6, 24, 20, 2, frame);
	p.fillRect(6, 6, 2, 20, frame);
	p.fillRect(24, 6, 2, 20, frame);
	for x in [10, 14, 18, 22] {
		p.fillRect(x, 8, 1, 16, bars);
	}
	p.fillRect(12, 14, 3, 3, latch);
	p.drawBorder(5, 5, 22, 22, rgba(30, 25, 20, 255));
}

fn petSalve(p: &mut Canvas) {
	let (jar, jarLight, lid) = (rgba(80, 160, 80, 255), rgba(110, 190, 100, 255), rgba(100, 80, 60, 255));
	p.fillRect(10, 14, 12, 10, jar);
	p.fillRect(11, 13, 10, 12, jar);
	p.fillRect(12, 15, 3, 6, jarLight);
	p.fillRect(9, 11, 14, 3, lid);
	p.fillRect(11, 10, 10, 1, lid);
	// healing cross
	let cross = rgba(220, 240, 220, 255);
	p.fillRect(15, 17, 2, 5, cross);
	p.fillRect(13, 19, 6, 1, cross);
	p.drawBorder(9, 10, 14, 15, rgba(30, 50, 30, 255));
}

fn petFeast(p: &mut Canvas) {
	let (bowl, bowlLight) = (rgba(140, 100, 60, 255), rgba(170, 130, 80, 255));
	p.fillRect(8, 18, 16, 6, bowl);
	p.fillRect(7, 17, 18, 2, bowlLight);
	p.fillRect(9, 24, 14, 2, bowl);
	// food mound
	p.fillEllipse(16, 16, 7, 3, rgba(180, 80, 40, 255));
	p.fillEllipse(14, 15, 4, 2, rgba(120, 160, 60, 255));
	// rim
	p.fillRect(8, 17, 16, 1, rgba(190, 150, 100, 255));
	let steam = rgba(200, 200, 200, 100);
	for sx in [12, 16, 20] {
		p.setPixel(sx, 11, steam);
		p.setPixel(sx + 1, 10, steam);
		p.setPixel(sx, 9, steam);
	}
	p.drawBorder(6, 16, 20, 11, rgba(50, 35, 20, 255));
}

fn trainerWhistle(p: &mut Canvas) {
	let (metal, metalLight, metalDark) =
		(rgba(180, 180, 200, 255), rgba(220, 220, 235, 255), rgba(120, 120, 140, 255));
	p.fillRect(8, 14, 14, 5, metal);
	p.fillRect(9, 13, 12, 7, metal);
	// mouthpiece
	p.fillRect(22, 15, 4, 3, metalDark);
	p.fillRect(10, 14, 8, 1, metalLight);
	// sound hole
	p.setPixel(9, 16, rgba(50, 50, 60, 255));
	p.setPixel(10, 16, rgba(50, 50, 60, 255));
	// lanyard ring
	p.fillRect(6, 15, 2, 3, metalDark);
	p.setPixel(7, 16, TRANSPARENT);
	let cord = rgba(120, 80, 40, 255);
	p.drawLine(5, 16, 5, 22, cord);
	p.drawLine(5, 22, 8, 25, cord);
	p.drawBorder(7, 12, 20, 9, rgba(40, 40, 50, 255));
}

fn mailPackage(p: &mut Canvas) {
	let (paper, paperLight, string) = (rgba(180, 150, 100, 255), rgba(200, 170, 120, 255), rgba(120, 80, 40, 255));
	p.fillRect(7, 10, 18, 14, paper);
	p.fillRect(8, 9, 16, 16, paper);
	p.fillRect(8, 10, 8, 14, paperLight);
	p.fillRect(15, 9, 2, 16, string);
	p.fillRect(8, 16, 16, 2, string);
	// bow
	p.fillRect(13, 14, 6, 4, string);
	p.setPixel(14, 15, paper);
	p.setPixel(17, 15, paper);
	p.drawBorder(6, 8, 20, 17, rgba(50, 35, 20, 255));
}

fn collectionParcel(p: &mut Canvas) {
	let (envelope, flap) = (rgba(220, 200, 160, 255), rgba(200, 180, 140, 255));
	p.fillRect(6, 12, 20, 12, envelope);
	for i in 0..6 {
		p.fillRect(6 + i, 12 - i, 20 - 2 * i, 1, flap);
	}
	// stamp
	p.fillRect(20, 14, 4, 4, rgba(180, 50, 50, 255));
	p.fillRect(21, 15, 2, 2, rgba(220, 80, 80, 255));
	// address lines
	let ink = rgba(140, 130, 110, 255);
	p.fillRect(9, 17, 10, 1, ink);
	p.fillRect(9, 19, 8, 1, ink);
	p.fillRect(9, 21, 6, 1, ink);
	p.drawBorder(5, 6, 22, 19, rgba(60, 50, 40, 255));
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn lists_every_stand_in_icon() {
		let registry = registry().unwrap();
		assert_eq!(registry.len(), 15);
		assert_eq!(registry.defaultPolicy, OverwritePolicy::Skip);
		assert!(registry.get("smoked_lava_eel").is_some());
	}

	#[test]
	fn pet_salve_pixels() {
		let canvas = registry().unwrap().get("pet_salve").unwrap().render();
		assert_eq!(canvas.pixel(0, 0), Some(TRANSPARENT));
		// outline corner, lid, cross, jar highlight
		assert_eq!(canvas.pixel(9, 10), Some([30, 50, 30, 255]));
		assert_eq!(canvas.pixel(12, 12), Some([100, 80, 60, 255]));
		assert_eq!(canvas.pixel(16, 19), Some([220, 240, 220, 255]));
		assert_eq!(canvas.pixel(13, 16), Some([110, 190, 100, 255]));
	}

	#[test]
	fn smoked_fish_belly_and_optional_stripe() {
		let canvas = registry().unwrap().get("smoked_salmon").unwrap().render();
		assert_eq!(canvas.pixel(12, 18), Some([230, 150, 90, 255]));
		let stripeless = registry().unwrap().get("smoked_carp").unwrap().render();
		assert_eq!(stripeless.pixel(12, 15), Some([170, 130, 60, 255]));
	}

	#[test]
	fn whistle_outline_is_drawn_last() {
		let canvas = registry().unwrap().get("trainer_whistle").unwrap().render();
		assert_eq!(canvas.pixel(7, 16), Some([40, 40, 50, 255]));
		assert_eq!(canvas.pixel(9, 16), Some([50, 50, 60, 255]));
		// cord ends where the second line stops
		assert_eq!(canvas.pixel(8, 25), Some([120, 80, 40, 255]));
	}
}
