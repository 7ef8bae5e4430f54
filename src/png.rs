//! PNG encoder for 8-bit RGBA canvases.
//!
//! The stream is always the same four pieces: signature, `IHDR`, a single zlib-compressed `IDAT`
//! holding filter-0 scanlines, and `IEND`. No ancillary chunks, no timestamps, so encoding is
//! deterministic.

use {
	crate::{canvas::Canvas, color::Rgba},
	byteorder::{WriteBytesExt, BE},
	std::io::{self, Write},
	thiserror::Error,
};

pub const SIGNATURE: [u8; 8] = [0x89, b'P', b'N', b'G', b'\r', b'\n', 0x1A, b'\n'];

pub const IHDR: [u8; 4] = *b"IHDR";
pub const IDAT: [u8; 4] = *b"IDAT";
pub const IEND: [u8; 4] = *b"IEND";

pub const BIT_DEPTH: u8 = 8;
pub const COLOR_TYPE_RGBA: u8 = 6;
pub const FILTER_NONE: u8 = 0;

/// Largest width or height the format allows.
pub const MAX_DIMENSION: usize = (1 << 31) - 1;

/// miniz level 6, what `zlib.compress` uses by default.
const COMPRESSION_LEVEL: u8 = 6;

#[derive(Debug, Error)]
pub enum EncodeError {
	#[error("invalid image dimensions {width}x{height}")]
	InvalidDimensions { width: usize, height: usize },

	#[error("pixel buffer holds {actual} pixels, {expected} expected")]
	BufferSizeMismatch { expected: usize, actual: usize },

	#[error(transparent)]
	Io(#[from] io::Error),
}

/// A typed, length-prefixed, CRC-protected segment of the stream.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Chunk<'a> {
	pub kind: [u8; 4],
	pub data: &'a [u8],
}

impl Chunk<'_> {
	pub fn crc(&self) -> u32 {
		let mut crc = Crc32::new();
		crc.update(&self.kind);
		crc.update(self.data);
		crc.finish()
	}

	/// Length, type, payload, CRC.
	pub fn writeTo(&self, w: &mut impl Write) -> io::Result<()> {
		let len = u32::try_from(self.data.len())
			.map_err(|_| io::Error::new(io::ErrorKind::InvalidInput, "chunk payload exceeds 4 GiB"))?;
		w.write_u32::<BE>(len)?;
		w.write_all(&self.kind)?;
		w.write_all(self.data)?;
		w.write_u32::<BE>(self.crc())
	}
}

pub fn encode(canvas: &Canvas) -> Result<Vec<u8>, EncodeError> {
	encodeRgba(canvas.width, canvas.height, &canvas.data)
}

pub fn encodeRgba(width: usize, height: usize, pixels: &[Rgba]) -> Result<Vec<u8>, EncodeError> {
	let mut png = Vec::with_capacity(pixels.len() * 4 / 2 + 64);
	writePng(&mut png, width, height, pixels)?;
	Ok(png)
}

/// Validates everything up front, so nothing is written for a bad buffer.
pub fn writePng(w: &mut impl Write, width: usize, height: usize, pixels: &[Rgba]) -> Result<(), EncodeError> {
	if !(1..=MAX_DIMENSION).contains(&width) || !(1..=MAX_DIMENSION).contains(&height) {
		return Err(EncodeError::InvalidDimensions { width, height });
	}
	let expected = width.checked_mul(height).ok_or(EncodeError::InvalidDimensions { width, height })?;
	if pixels.len() != expected {
		return Err(EncodeError::BufferSizeMismatch { expected, actual: pixels.len() });
	}

	let idat = miniz_oxide::deflate::compress_to_vec_zlib(&scanlines(width, pixels), COMPRESSION_LEVEL);

	w.write_all(&SIGNATURE)?;
	Chunk { kind: IHDR, data: &header(width as _, height as _) }.writeTo(w)?;
	Chunk { kind: IDAT, data: &idat }.writeTo(w)?;
	Chunk { kind: IEND, data: &[] }.writeTo(w)?;
	Ok(())
}

fn header(width: u32, height: u32) -> [u8; 13] {
	let mut ihdr = [0; 13];
	ihdr[0..4].copy_from_slice(&width.to_be_bytes());
	ihdr[4..8].copy_from_slice(&height.to_be_bytes());
	// compression, filter and interlace methods stay 0
	ihdr[8] = BIT_DEPTH;
	ihdr[9] = COLOR_TYPE_RGBA;
	ihdr
}

/// Each row prefixed with its filter byte, pixels as R, G, B, A.
fn scanlines(width: usize, pixels: &[Rgba]) -> Vec<u8> {
	let mut raw = Vec::with_capacity(pixels.len() * 4 + pixels.len() / width);
	for row in pixels.chunks_exact(width) {
		raw.push(FILTER_NONE);
		for pixel in row {
			raw.extend_from_slice(pixel);
		}
	}
	raw
}

/// CRC-32 as used by PNG, zlib and zip: reflected polynomial `0xEDB88320`.
#[derive(Clone, Copy, Debug)]
pub struct Crc32(u32);

static CRC_TABLE: [u32; 256] = {
	let mut table = [0; 256];
	let mut n = 0;
	while n < 256 {
		let mut c = n as u32;
		let mut k = 0;
		while k < 8 {
			c = if c & 1 != 0 { 0xEDB8_8320 ^ (c >> 1) } else { c >> 1 };
			k += 1;
		}
		table[n] = c;
		n += 1;
	}
	table
};

impl Crc32 {
	pub const fn new() -> Self {
		Self(0xFFFF_FFFF)
	}

	pub fn update(&mut self, bytes: &[u8]) {
		for &byte in bytes {
			self.0 = CRC_TABLE[((self.0 ^ u32::from(byte)) & 0xFF) as usize] ^ (self.0 >> 8);
		}
	}

	pub const fn finish(self) -> u32 {
		self.0 ^ 0xFFFF_FFFF
	}
}

impl Default for Crc32 {
	fn default() -> Self {
		Self::new()
	}
}

pub fn crc32(bytes: &[u8]) -> u32 {
	let mut crc = Crc32::new();
	crc.update(bytes);
	crc.finish()
}
