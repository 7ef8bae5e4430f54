//! RGBA colors and the shading helpers shared by every sprite set.
//!
//! Rounding rules, applied everywhere:
//! - [`darken`], [`lighten`] and [`blend`] scale, truncate toward zero, then clamp to `0..=255`;
//! - [`clampChannel`] (used by procedural texturing) rounds half to even, then clamps.

/// `[R, G, B, A]`; `A == 0` is fully transparent, `A == 255` fully opaque.
pub type Rgba = [u8; 4];

pub const R: usize = 0;
pub const G: usize = 1;
pub const B: usize = 2;
pub const A: usize = 3;

pub const TRANSPARENT: Rgba = [0, 0, 0, 0];

pub const DARKEN_FACTOR: f64 = 0.65;
pub const LIGHTEN_FACTOR: f64 = 1.4;

#[inline(always)]
pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Rgba {
	[r, g, b, a]
}

/// Opaque color from a `0xRRGGBB` literal.
#[inline(always)]
pub const fn hex(rgb: u32) -> Rgba {
	hexAlpha(rgb, u8::MAX)
}

#[inline(always)]
pub const fn hexAlpha(rgb: u32, alpha: u8) -> Rgba {
	[(rgb >> 16) as u8, (rgb >> 8) as u8, rgb as u8, alpha]
}

fn scaleTruncated(channel: u8, factor: f64) -> u8 {
	// `as` saturates, and maps NaN to 0
	(f64::from(channel) * factor).trunc().clamp(0.0, 255.0) as u8
}

pub fn darkenBy(color: Rgba, factor: f64) -> Rgba {
	let [r, g, b, a] = color;
	let [r, g, b] = [r, g, b].map(|channel| scaleTruncated(channel, factor));
	[r, g, b, a]
}

pub fn darken(color: Rgba) -> Rgba {
	darkenBy(color, DARKEN_FACTOR)
}

/// Same formula as [`darkenBy`]; the clamp matters here since factors above 1 overflow.
pub fn lightenBy(color: Rgba, factor: f64) -> Rgba {
	darkenBy(color, factor)
}

pub fn lighten(color: Rgba) -> Rgba {
	lightenBy(color, LIGHTEN_FACTOR)
}

/// Linear interpolation of all four channels, `t == 0` yields `from`, `t == 1` yields `to`.
pub fn blend(from: Rgba, to: Rgba, t: f64) -> Rgba {
	let mut blended = TRANSPARENT;
	for i in 0..blended.len() {
		let value = f64::from(from[i]) * (1.0 - t) + f64::from(to[i]) * t;
		blended[i] = value.trunc().clamp(0.0, 255.0) as u8;
	}
	blended
}

/// Saturating per-channel add on R, G and B.
pub fn offset(color: Rgba, by: [i16; 3]) -> Rgba {
	let mut shifted = color;
	for i in [R, G, B] {
		shifted[i] = (i16::from(color[i]) + by[i]).clamp(0, 255) as u8;
	}
	shifted
}

#[inline]
pub fn clampChannel(value: f64) -> u8 {
	value.round_ties_even().clamp(0.0, 255.0) as u8
}
