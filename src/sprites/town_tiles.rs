//! 96×96 town autotiles: a 3×3 grid of 32×32 sub-tiles, procedurally textured, with the outer
//! sub-tiles darkened towards their open sides.

use {
	crate::{
		canvas::Canvas,
		color::{clampChannel, Rgba},
		config::OverwritePolicy,
		noise::Mulberry32,
		registry::Registry,
		Error,
	},
	glam::DVec3,
};

pub const SUBTILE: i32 = 32;
pub const GRID: i32 = 3;
pub const SIZE: usize = (SUBTILE * GRID) as usize;

type Pattern = fn(&mut Canvas, [i32; 2], DVec3, &mut Mulberry32);

pub const TOWN_TILES: [(&str, [u8; 3], Pattern); 5] = [
	("wall", [85, 102, 119], wall),
	("floor_wood", [139, 115, 85], floorWood),
	("floor_stone", [112, 112, 112], floorStone),
	("door", [107, 66, 38], door),
	("market_stall", [196, 163, 90], marketStall),
];

pub fn registry() -> Result<Registry, Error> {
	let mut registry = Registry::new("townTiles", ".", OverwritePolicy::Overwrite);
	for (name, base, pattern) in TOWN_TILES {
		registry.register(name, [SIZE; 2], move |p: &mut Canvas| drawTile(p, name, base, pattern))?;
	}
	Ok(registry)
}

pub fn subtileSeed(name: &str, row: i32, col: i32) -> u32 {
	let first = name.bytes().next().map_or(0, u32::from);
	(name.len() as u32).wrapping_mul(1337).wrapping_add(first * 7).wrapping_add((row * 3 + col) as u32)
}

fn drawTile(p: &mut Canvas, name: &str, base: [u8; 3], pattern: Pattern) {
	let base = DVec3::from(base.map(f64::from));
	for row in 0..GRID {
		for col in 0..GRID {
			let (rng, origin) = (&mut Mulberry32::new(subtileSeed(name, row, col)), [col * SUBTILE, row * SUBTILE]);
			pattern(p, origin, base, rng);
			darkenOpenEdges(p, origin, [col, row]);
		}
	}
}

#[inline]
fn opaque(rgb: DVec3) -> Rgba {
	let [r, g, b] = rgb.to_array().map(clampChannel);
	[r, g, b, u8::MAX]
}

/// Sides facing outside the 3×3 grid fade to 70% over 4 px, with a 55% outline on the edge itself.
fn darkenOpenEdges(p: &mut Canvas, [ox, oy]: [i32; 2], [col, row]: [i32; 2]) {
	const BORDER: i32 = 4;
	const DARKEN: f64 = 0.70;
	const OUTLINE_DARKEN: f64 = 0.55;
	let open = [row == 0, row == GRID - 1, col == 0, col == GRID - 1];
	if !open.contains(&true) {
		return;
	}
	p.mapRegion(ox, oy, SUBTILE, SUBTILE, |x, y, pixel| {
		let distances = [y, SUBTILE - 1 - y, x, SUBTILE - 1 - x];
		let minDist = (0..open.len()).filter(|&side| open[side]).map(|side| distances[side]).fold(SUBTILE, i32::min);
		if minDist >= BORDER {
			return;
		}
		let factor = if minDist == 0 {
			OUTLINE_DARKEN
		} else {
			1.0 - (1.0 - f64::from(minDist) / f64::from(BORDER)) * (1.0 - DARKEN)
		};
		for channel in &mut pixel[..3] {
			*channel = clampChannel(f64::from(*channel) * factor);
		}
	});
}

/// Staggered bricks with mortar lines and per-brick shading.
fn wall(p: &mut Canvas, [ox, oy]: [i32; 2], base: DVec3, rng: &mut Mulberry32) {
	const BRICK_HEIGHT: i32 = 6;
	const MORTAR: i32 = 1;
	p.mapRegion(ox, oy, SUBTILE, SUBTILE, |x, y, pixel| {
		let (brickRow, localY) = (y / BRICK_HEIGHT, y % BRICK_HEIGHT);
		let brickX = (x + if brickRow % 2 == 1 { 10 } else { 0 }) % SUBTILE;
		let brickWidth = 12 + (brickRow % 3) * 2;
		let (brickCol, localX) = (brickX / brickWidth, brickX % brickWidth);
		let rgb = if localY < MORTAR || localX < MORTAR {
			base * 0.55 + DVec3::splat(rng.jitter(12.0))
		} else {
			let variation = f64::from((brickRow * 17 + brickCol * 7) * 31 % 30 - 15);
			let mut rgb = base + DVec3::new(1.0, 0.7, 0.5) * variation;
			rgb += DVec3::new(1.0, 0.8, 0.6) * rng.jitter(14.0);
			if localY == MORTAR {
				rgb += DVec3::new(12.0, 10.0, 8.0);
			}
			if localY == BRICK_HEIGHT - 1 {
				rgb -= DVec3::new(10.0, 8.0, 6.0);
			}
			rgb
		};
		*pixel = opaque(rgb);
	});
}

/// Vertical planks with wavy grain, gaps, knots and end joints.
fn floorWood(p: &mut Canvas, [ox, oy]: [i32; 2], base: DVec3, rng: &mut Mulberry32) {
	const PLANK_WIDTH: i32 = 8;
	p.mapRegion(ox, oy, SUBTILE, SUBTILE, |x, y, pixel| {
		let (plank, localX) = (x / PLANK_WIDTH, x % PLANK_WIDTH);
		let variation = f64::from((plank * 23 + 11) % 20 - 10);
		let mut rgb = base + DVec3::new(1.0, 0.8, 0.5) * variation;
		let grain = (f64::from(y + plank * 7) * 0.6 + f64::from(plank) * 2.1).sin() * 6.0;
		rgb += DVec3::new(0.8, 0.5, 0.3) * grain;
		rgb += DVec3::new(1.0, 0.8, 0.5) * rng.jitter(10.0);
		if localX == 0 {
			rgb -= DVec3::new(30.0, 25.0, 20.0);
		}
		// knot
		if rng.nextUnit() < 0.003 {
			rgb -= DVec3::new(20.0, 15.0, 10.0);
		}
		if y == (plank * 13 + 5) % 24 && localX > 0 {
			rgb -= DVec3::new(15.0, 12.0, 8.0);
		}
		*pixel = opaque(rgb);
	});
}

/// Cobblestones from a nearest-two-points partition; mortar where the two distances are close.
fn floorStone(p: &mut Canvas, [ox, oy]: [i32; 2], base: DVec3, rng: &mut Mulberry32) {
	const STONES: usize = 8;
	let stoneRng = &mut Mulberry32::new((ox * 17 + oy * 31) as u32);
	let stones: [(f64, f64, f64); STONES] = [(); STONES].map(|()| {
		let sx = (stoneRng.nextUnit() * f64::from(SUBTILE)).trunc();
		let sy = (stoneRng.nextUnit() * f64::from(SUBTILE)).trunc();
		(sx, sy, stoneRng.jitter(30.0))
	});
	p.mapRegion(ox, oy, SUBTILE, SUBTILE, |x, y, pixel| {
		let (mut nearest, mut secondNearest, mut shade) = (999.0, 999.0, 0.0);
		for &(sx, sy, stoneShade) in &stones {
			let d = (f64::from(x) - sx).hypot(f64::from(y) - sy);
			if d < nearest {
				secondNearest = nearest;
				nearest = d;
				shade = stoneShade;
			} else if d < secondNearest {
				secondNearest = d;
			}
		}
		let mortar = secondNearest - nearest;
		let rgb = if mortar < 1.8 {
			base * 0.5 + DVec3::splat(rng.jitter(8.0))
		} else {
			let mut rgb = base + DVec3::new(1.0, 0.9, 0.8) * shade + DVec3::splat(rng.jitter(12.0));
			if mortar < 3.5 {
				rgb -= DVec3::splat((1.0 - (mortar - 1.8) / 1.7) * 8.0);
			}
			rgb
		};
		*pixel = opaque(rgb);
	});
}

/// Framed plank door with iron studs and a handle.
fn door(p: &mut Canvas, [ox, oy]: [i32; 2], base: DVec3, rng: &mut Mulberry32) {
	const FRAME: i32 = 3;
	const PLANK_WIDTH: i32 = 7;
	const STUD_ROWS: [i32; 2] = [SUBTILE / 4, 3 * SUBTILE / 4];
	const HANDLE: [i32; 2] = [SUBTILE - FRAME - 6, SUBTILE / 2];
	p.mapRegion(ox, oy, SUBTILE, SUBTILE, |x, y, pixel| {
		let isFrame = x < FRAME || x >= SUBTILE - FRAME || y < FRAME || y >= SUBTILE - FRAME;
		let rgb = if isFrame {
			base * 0.65 + DVec3::new(1.0, 0.8, 0.5) * rng.jitter(8.0)
		} else {
			let (plank, localX) = ((x - FRAME) / PLANK_WIDTH, (x - FRAME) % PLANK_WIDTH);
			let variation = f64::from((plank * 19 + 7) % 16 - 8);
			let mut rgb = base + DVec3::new(1.0, 0.7, 0.4) * variation;
			rgb += DVec3::new(0.6, 0.4, 0.2) * (f64::from(x + plank * 3) * 0.4).sin() * 5.0;
			rgb += DVec3::new(1.0, 0.7, 0.4) * rng.jitter(10.0);
			if localX == 0 {
				rgb -= DVec3::new(25.0, 20.0, 15.0);
			}
			if localX == PLANK_WIDTH / 2 && STUD_ROWS.iter().any(|&studY| (y - FRAME - studY).abs() < 2) {
				rgb = DVec3::new(50.0, 50.0, 55.0);
			}
			if (x - HANDLE[0]).abs() < 2 && (y - HANDLE[1]).abs() < 3 {
				rgb = DVec3::new(70.0, 65.0, 60.0);
			}
			rgb
		};
		*pixel = opaque(rgb);
	});
}

/// Packed earth on a 10 px grid, scattered with cloth, produce and straw.
fn marketStall(p: &mut Canvas, [ox, oy]: [i32; 2], base: DVec3, rng: &mut Mulberry32) {
	fn scatter(rng: &mut Mulberry32, [r, g, b]: [f64; 3], [Δr, Δg, Δb]: [f64; 3]) -> DVec3 {
		DVec3::new(r + rng.nextUnit() * Δr, g + rng.nextUnit() * Δg, b + rng.nextUnit() * Δb)
	}
	p.mapRegion(ox, oy, SUBTILE, SUBTILE, |x, y, pixel| {
		let mut rgb = base + DVec3::new(0.9, 0.8, 0.5) * rng.jitter(22.0);
		if x % 10 == 0 || y % 10 == 0 {
			rgb -= DVec3::new(8.0, 7.0, 5.0);
		}
		match rng.nextUnit() {
			roll if roll < 0.01 => rgb = scatter(rng, [160.0, 40.0, 30.0], [40.0, 20.0, 20.0]),
			roll if roll < 0.018 => rgb = scatter(rng, [40.0, 60.0, 140.0], [20.0, 30.0, 40.0]),
			roll if roll < 0.025 => rgb = scatter(rng, [50.0, 120.0, 40.0], [20.0, 40.0, 20.0]),
			roll if roll < 0.04 => rgb = base + DVec3::new(30.0, 25.0, -10.0),
			_ => {}
		}
		*pixel = opaque(rgb);
	});
}

#[cfg(test)]
mod tests {
	use super::*;

	fn render(name: &str) -> Canvas {
		registry().unwrap().get(name).unwrap().render()
	}

	#[test]
	fn seeds_follow_name_and_position() {
		assert_eq!(subtileSeed("wall", 0, 0), 4 * 1337 + u32::from(b'w') * 7);
		assert_eq!(subtileSeed("wall", 2, 1) - subtileSeed("wall", 0, 0), 7);
	}

	#[test]
	fn tiles_are_opaque_and_full_size() {
		let registry = registry().unwrap();
		assert_eq!(registry.len(), TOWN_TILES.len());
		for sprite in registry.iter() {
			let canvas = sprite.render();
			assert_eq!((canvas.width, canvas.height), (SIZE, SIZE));
			assert!(canvas.data.iter().all(|pixel| pixel[3] == u8::MAX), "{}", sprite.name);
		}
	}

	#[test]
	fn rendering_is_deterministic() {
		assert_eq!(render("floor_stone"), render("floor_stone"));
	}

	#[test]
	fn outline_halves_round_to_even() {
		// red is 70 before the 0.55 outline, 38.5 after
		assert_eq!(render("door").pixel(17, 0), Some([38, 24, 14, 255]));
		assert_eq!(render("wall").pixel(6, 0), Some([29, 34, 38, 255]));
	}

	#[test]
	fn known_pixels() {
		let wall = render("wall");
		assert_eq!(wall.pixel(0, 0), Some([28, 32, 38, 255]));
		assert_eq!(wall.pixel(48, 48), Some([44, 53, 62, 255]));
		assert_eq!(render("floor_wood").pixel(45, 40), Some([139, 116, 86, 255]));
		assert_eq!(render("floor_stone").pixel(50, 50), Some([60, 60, 60, 255]));
		// a red cloth scatter in the centre sub-tile
		assert_eq!(render("market_stall").pixel(43, 38), Some([193, 52, 47, 255]));
		let door = render("door");
		// handle of the centre sub-tile
		assert_eq!(door.pixel(32 + 23, 32 + 16), Some([70, 65, 60, 255]));
		assert_eq!(door.pixel(0, 48), Some([36, 22, 13, 255]));
		assert_eq!(door.pixel(32, 48), Some([69, 42, 24, 255]));
	}
}
