//! Seeded noise for procedural textures.

use rand::{Error, RngCore, SeedableRng};

/// mulberry32: 32 bits of state, one fixed sequence per seed.
#[derive(Clone, Debug)]
pub struct Mulberry32 {
	state: u32,
}

impl Mulberry32 {
	pub const fn new(seed: u32) -> Self {
		Self { state: seed }
	}

	/// Uniform in `[0, 1)` with 32 bits of resolution.
	#[inline]
	pub fn nextUnit(&mut self) -> f64 {
		f64::from(self.next_u32()) / 4_294_967_296.0
	}

	/// Uniform in `[-amplitude / 2, amplitude / 2)`.
	#[inline]
	pub fn jitter(&mut self, amplitude: f64) -> f64 {
		(self.nextUnit() - 0.5) * amplitude
	}
}

impl RngCore for Mulberry32 {
	fn next_u32(&mut self) -> u32 {
		self.state = self.state.wrapping_add(0x6D2B_79F5);
		let mut t = self.state ^ (self.state >> 15);
		t = t.wrapping_mul(1 | self.state);
		t = t.wrapping_add((t ^ (t >> 7)).wrapping_mul(61 | t));
		t ^ (t >> 14)
	}

	fn next_u64(&mut self) -> u64 {
		let low = u64::from(self.next_u32());
		(u64::from(self.next_u32()) << 32) | low
	}

	fn fill_bytes(&mut self, dest: &mut [u8]) {
		for chunk in dest.chunks_mut(4) {
			let bytes = self.next_u32().to_le_bytes();
			chunk.copy_from_slice(&bytes[..chunk.len()]);
		}
	}

	fn try_fill_bytes(&mut self, dest: &mut [u8]) -> Result<(), Error> {
		self.fill_bytes(dest);
		Ok(())
	}
}

impl SeedableRng for Mulberry32 {
	type Seed = [u8; 4];

	fn from_seed(seed: Self::Seed) -> Self {
		Self::new(u32::from_le_bytes(seed))
	}
}
