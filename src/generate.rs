//! Render → encode → write, one sprite at a time.

use {
	crate::{
		config::{OverwritePolicy, Settings},
		png,
		registry::{Registry, Sprite},
		Error,
	},
	log::{debug, info},
	std::{
		fs,
		path::{Path, PathBuf},
	},
};

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Outcome {
	Written { path: PathBuf, bytes: usize },
	Skipped { path: PathBuf },
}

#[derive(Debug, Default, PartialEq, Eq)]
pub struct Report {
	/// `(name, path, byte count)` in registry order.
	pub written: Vec<(String, PathBuf, usize)>,
	pub skipped: Vec<String>,
}

/// Writes `<dir>/<name>.png`. The file is only opened once the whole image is encoded.
pub fn writeSprite(sprite: &Sprite, dir: &Path, policy: OverwritePolicy) -> Result<Outcome, Error> {
	let path = dir.join(sprite.fileName());
	if policy == OverwritePolicy::Skip && path.exists() {
		debug!("{}: exists, skipping", path.display());
		return Ok(Outcome::Skipped { path });
	}
	let png = png::encode(&sprite.render()).map_err(|source| Error::Encode { name: sprite.name.clone(), source })?;
	fs::write(&path, &png).map_err(|source| Error::Io { path: path.clone(), source })?;
	Ok(Outcome::Written { path, bytes: png.len() })
}

pub fn generate(registry: &Registry, settings: &Settings) -> Result<Report, Error> {
	if let Some(name) = settings.only.iter().find(|name| registry.get(name).is_none()) {
		return Err(Error::UnknownSprite { set: registry.setName, name: name.clone() });
	}
	let dir = &settings.outputDir;
	fs::create_dir_all(dir).map_err(|source| Error::Io { path: dir.clone(), source })?;

	let mut report = Report::default();
	for sprite in registry.iter() {
		if !settings.only.is_empty() && !settings.only.contains(&sprite.name) {
			continue;
		}
		match writeSprite(sprite, dir, settings.overwritePolicy)? {
			Outcome::Written { path, bytes } => {
				info!("  Generated: {} ({bytes} bytes)", sprite.fileName());
				report.written.push((sprite.name.clone(), path, bytes));
			}
			Outcome::Skipped { .. } => report.skipped.push(sprite.name.clone()),
		}
	}

	info!(
		"{}: generated {} sprites, skipped {} existing in {}",
		registry.setName,
		report.written.len(),
		report.skipped.len(),
		dir.display()
	);
	if !report.skipped.is_empty() {
		info!("  Skipped: {}", report.skipped.join(", "));
	}
	Ok(report)
}
