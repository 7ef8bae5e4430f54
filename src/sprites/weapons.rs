//! Weapon icons: one drawing template per weapon kind, recolored per material tier.

use {
	crate::{
		canvas::Canvas,
		color::{darken, hex, lighten, Rgba},
		config::OverwritePolicy,
		registry::Registry,
		Error,
	},
	core::f64::consts::PI,
	super::ICON_SIZE,
};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Palette {
	pub metal: Rgba,
	pub metalLight: Rgba,
	pub metalDark: Rgba,
	pub accent: Rgba,
	pub handle: Rgba,
}

macro_rules! palette {
	($metal: literal, $metalLight: literal, $metalDark: literal, $accent: literal, $handle: literal) => {
		Palette {
			metal: hex($metal),
			metalLight: hex($metalLight),
			metalDark: hex($metalDark),
			accent: hex($accent),
			handle: hex($handle),
		}
	};
}

/// Indexed by tier: primitive, bronze, iron, silver, obsidian, flametal.
pub const TIER_PALETTES: [Palette; 6] = [
	palette!(0x8B7355, 0xA0896B, 0x6B5535, 0xDEB887, 0x5A3A1A),
	palette!(0xCD7F32, 0xDAA06D, 0x8B5A2B, 0xFFD700, 0x5A3A1A),
	palette!(0x808080, 0xA0A0A0, 0x555555, 0xC0C0C0, 0x4A2A1A),
	palette!(0xC0C0C0, 0xE0E0E0, 0x909090, 0xFFFFFF, 0x3A2A1A),
	palette!(0x4A2A5A, 0x6A3A7A, 0x2A1A3A, 0x9933FF, 0x2A1A2A),
	palette!(0xCC4400, 0xFF6600, 0x881100, 0xFFAA00, 0x331100),
];

type Template = fn(&mut Canvas, &Palette);

#[rustfmt::skip]
pub const WEAPONS: [(&str, Template, usize); 55] = [
	("wooden_club", club, 0), ("bone_sword", sword, 0),
	("stone_axe", axe, 0), ("wooden_spear", spear, 0),
	("bone_dagger", dagger, 0), ("stone_knuckles", knuckles, 0),
	("wooden_bow", bow, 0),
	("bronze_sword", sword, 1), ("bronze_mace", mace, 1),
	("bronze_spear", spear, 1), ("bronze_axe", axe, 1),
	("bronze_battleaxe", battleaxe, 1), ("bronze_dagger", dagger, 1),
	("bronze_atgeir", atgeir, 1), ("bronze_bow", bow, 1),
	("bronze_knuckles", knuckles, 1), ("bronze_greatsword", greatsword, 1),
	("iron_sword", sword, 2), ("steel_greatsword", greatsword, 2),
	("iron_mace", mace, 2), ("iron_axe", axe, 2),
	("iron_battleaxe", battleaxe, 2), ("iron_spear", spear, 2),
	("iron_dagger", dagger, 2), ("iron_atgeir", atgeir, 2),
	("iron_bow", bow, 2), ("iron_knuckles", knuckles, 2),
	("silver_sword", sword, 3), ("silver_mace", mace, 3),
	("silver_axe", axe, 3), ("silver_battleaxe", battleaxe, 3),
	("silver_spear", spear, 3), ("silver_dagger", dagger, 3),
	("silver_atgeir", atgeir, 3), ("silver_bow", bow, 3),
	("silver_knuckles", knuckles, 3), ("silver_greatsword", greatsword, 3),
	("obsidian_mace", mace, 4), ("obsidian_axe", axe, 4),
	("obsidian_battleaxe", battleaxe, 4), ("obsidian_spear", spear, 4),
	("obsidian_dagger", dagger, 4), ("obsidian_atgeir", atgeir, 4),
	("obsidian_bow", bow, 4), ("obsidian_knuckles", knuckles, 4),
	("obsidian_greatsword", greatsword, 4),
	("flametal_mace", mace, 5), ("flametal_axe", axe, 5),
	("flametal_battleaxe", battleaxe, 5), ("flametal_spear", spear, 5),
	("flametal_dagger", dagger, 5), ("flametal_atgeir", atgeir, 5),
	("flametal_bow", bow, 5), ("flametal_knuckles", knuckles, 5),
	("flametal_greatsword", greatsword, 5),
];

pub fn registry() -> Result<Registry, Error> {
	let mut registry = Registry::new("weapons", "items", OverwritePolicy::Overwrite);
	for (name, template, tier) in WEAPONS {
		let palette = TIER_PALETTES[tier];
		registry.register(name, [ICON_SIZE; 2], move |p: &mut Canvas| template(p, &palette))?;
	}
	Ok(registry)
}

const BINDING: Rgba = hex(0x444444);

fn sword(p: &mut Canvas, pal: &Palette) {
	// blade, bottom-left to top-right
	p.drawLine(20, 4, 10, 20, pal.metal);
	p.drawLine(21, 5, 11, 21, pal.metalLight);
	p.drawLine(22, 5, 12, 21, pal.metalDark);
	p.drawLine(21, 4, 11, 20, pal.metal);
	p.setPixel(20, 3, pal.metalLight);
	p.setPixel(19, 3, pal.metalLight);
	p.drawLine(20, 4, 12, 18, lighten(pal.metalLight));
	// guard, grip, pommel
	p.fillRect(8, 20, 10, 2, pal.accent);
	p.fillRect(10, 22, 3, 5, pal.handle);
	p.fillRect(11, 22, 1, 5, lighten(pal.handle));
	p.fillRect(10, 27, 3, 2, pal.accent);
}

fn club(p: &mut Canvas, pal: &Palette) {
	p.fillRect(12, 4, 8, 10, pal.metal);
	p.fillRect(11, 6, 10, 6, pal.metal);
	p.fillRect(12, 4, 3, 4, pal.metalLight);
	p.fillRect(14, 14, 4, 12, pal.handle);
	p.fillRect(15, 14, 1, 12, lighten(pal.handle));
	// knots
	p.setPixel(14, 7, pal.metalDark);
	p.setPixel(18, 9, pal.metalDark);
}

fn mace(p: &mut Canvas, pal: &Palette) {
	p.fillRect(10, 4, 12, 10, pal.metal);
	p.fillRect(9, 6, 14, 6, pal.metal);
	// flanges
	p.fillRect(8, 5, 2, 8, pal.metalDark);
	p.fillRect(22, 5, 2, 8, pal.metalDark);
	p.fillRect(12, 3, 8, 2, pal.metalDark);
	p.fillRect(11, 5, 4, 4, pal.metalLight);
	p.setPixel(12, 6, lighten(pal.metalLight));
	p.fillRect(14, 14, 4, 12, pal.handle);
	p.fillRect(15, 14, 1, 12, lighten(pal.handle));
	p.fillRect(13, 14, 6, 1, pal.accent);
}

fn axe(p: &mut Canvas, pal: &Palette) {
	p.fillRect(16, 4, 8, 10, pal.metal);
	p.fillRect(18, 3, 6, 12, pal.metal);
	p.fillRect(20, 2, 5, 2, pal.metalDark);
	p.fillRect(20, 13, 5, 2, pal.metalDark);
	// edge
	p.fillRect(24, 4, 2, 10, pal.metalLight);
	p.setPixel(25, 5, lighten(pal.metalLight));
	p.fillRect(14, 3, 3, 25, pal.handle);
	p.fillRect(15, 3, 1, 25, lighten(pal.handle));
}

fn battleaxe(p: &mut Canvas, pal: &Palette) {
	p.fillRect(4, 4, 8, 10, pal.metal);
	p.fillRect(20, 4, 8, 10, pal.metal);
	p.fillRect(2, 5, 4, 8, pal.metalDark);
	p.fillRect(26, 5, 4, 8, pal.metalDark);
	p.fillRect(2, 6, 2, 6, pal.metalLight);
	p.fillRect(28, 6, 2, 6, pal.metalLight);
	// shaft
	p.fillRect(14, 2, 4, 28, pal.handle);
	p.fillRect(15, 2, 2, 28, lighten(pal.handle));
	p.fillRect(12, 6, 8, 6, pal.metal);
	p.fillRect(13, 5, 6, 1, pal.metalDark);
}

fn spear(p: &mut Canvas, pal: &Palette) {
	p.fillRect(15, 8, 2, 22, pal.handle);
	p.setPixel(16, 8, lighten(pal.handle));
	p.fillRect(14, 4, 4, 5, pal.metal);
	p.fillRect(15, 2, 2, 3, pal.metalLight);
	p.setPixel(15, 1, pal.metalLight);
	p.setPixel(16, 1, pal.metal);
	p.setPixel(15, 0, lighten(pal.metalLight));
	p.fillRect(17, 5, 1, 3, pal.metalDark);
	p.fillRect(14, 8, 4, 1, BINDING);
}

fn dagger(p: &mut Canvas, pal: &Palette) {
	p.drawLine(19, 6, 13, 16, pal.metal);
	p.drawLine(20, 7, 14, 17, pal.metalLight);
	p.drawLine(20, 6, 14, 16, pal.metalDark);
	p.setPixel(19, 5, pal.metalLight);
	p.fillRect(10, 17, 8, 2, pal.accent);
	p.fillRect(13, 19, 3, 6, pal.handle);
	p.setPixel(14, 19, lighten(pal.handle));
	p.fillRect(13, 25, 3, 2, pal.metalDark);
}

fn atgeir(p: &mut Canvas, pal: &Palette) {
	p.fillRect(15, 6, 2, 24, pal.handle);
	p.setPixel(16, 6, lighten(pal.handle));
	// wide blade
	p.fillRect(11, 2, 10, 5, pal.metal);
	p.fillRect(10, 3, 12, 3, pal.metal);
	p.fillRect(12, 1, 8, 2, pal.metalLight);
	p.fillRect(10, 3, 1, 3, pal.metalLight);
	p.fillRect(21, 3, 1, 3, pal.metalLight);
	p.fillRect(12, 6, 8, 1, pal.metalDark);
	p.fillRect(13, 7, 6, 1, BINDING);
}

fn bow(p: &mut Canvas, pal: &Palette) {
	let (handleLight, string) = (lighten(pal.handle), hex(0xCCCCAA));
	// limbs along an arc
	for t in 0..30 {
		let a = -PI * 0.7 + f64::from(t) * PI * 1.4 / 30.0;
		let (x, y) = ((12.0 + 10.0 * a.cos()) as i32, (15.0 + 12.0 * a.sin()) as i32);
		p.setPixel(x, y, pal.handle);
		p.setPixel(x + 1, y, handleLight);
	}
	p.setPixel(12, 3, pal.metal);
	p.setPixel(13, 3, pal.metalLight);
	p.setPixel(12, 27, pal.metal);
	p.setPixel(13, 27, pal.metalLight);
	p.drawLine(13, 4, 13, 26, string);
	// grip
	p.fillRect(10, 13, 3, 5, pal.handle);
	p.fillRect(11, 13, 1, 5, handleLight);
	// nocked arrow
	p.drawLine(14, 15, 26, 15, hex(0x8B6914));
	p.setPixel(26, 14, pal.metal);
	p.setPixel(26, 16, pal.metal);
	p.setPixel(27, 15, pal.metalLight);
}

fn knuckles(p: &mut Canvas, pal: &Palette) {
	p.fillRect(7, 10, 18, 12, pal.metal);
	p.fillRect(7, 10, 18, 2, pal.metalLight);
	p.fillRect(7, 20, 18, 2, pal.metalDark);
	for x in [9, 14, 19] {
		p.fillRect(x, 13, 3, 5, hex(0x111111));
	}
	p.fillRect(8, 22, 16, 3, pal.metalDark);
	// studs
	for x in [10, 15, 20] {
		p.fillRect(x, 9, 2, 2, pal.metalLight);
	}
	p.setPixel(8, 11, lighten(pal.metalLight));
}

fn greatsword(p: &mut Canvas, pal: &Palette) {
	p.fillRect(13, 2, 6, 18, pal.metal);
	p.fillRect(12, 4, 8, 14, pal.metal);
	p.fillRect(13, 2, 2, 16, pal.metalLight);
	p.fillRect(18, 4, 2, 14, pal.metalDark);
	p.fillRect(14, 1, 4, 2, pal.metalLight);
	p.setPixel(15, 0, lighten(pal.metalLight));
	p.setPixel(16, 0, pal.metalLight);
	// fuller
	p.fillRect(15, 4, 2, 12, pal.metalDark);
	p.fillRect(7, 19, 18, 2, pal.accent);
	p.fillRect(6, 19, 1, 2, darken(pal.accent));
	p.fillRect(25, 19, 1, 2, darken(pal.accent));
	p.fillRect(14, 21, 4, 5, pal.handle);
	p.fillRect(15, 21, 2, 5, lighten(pal.handle));
	p.fillRect(13, 26, 6, 3, pal.accent);
	p.fillRect(14, 27, 4, 1, lighten(pal.accent));
}
