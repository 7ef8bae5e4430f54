#![warn(clippy::pedantic, elided_lifetimes_in_paths, explicit_outlives_requirements)]
#![allow(non_snake_case, confusable_idents, mixed_script_confusables, uncommon_codepoints)]

pub mod canvas;
pub mod cli;
pub mod color;
pub mod config;
pub mod generate;
pub mod logger;
pub mod noise;
pub mod png;
pub mod registry;
pub mod sprites;

use {std::path::PathBuf, thiserror::Error};

#[derive(Debug, Error)]
pub enum Error {
	#[error("{}: {source}", path.display())]
	Io { path: PathBuf, source: std::io::Error },

	#[error("{}: {source}", path.display())]
	Config { path: PathBuf, source: toml::de::Error },

	#[error("{name}: {source}")]
	Encode { name: String, source: self::png::EncodeError },

	#[error("{set}: sprite {name:?} registered twice")]
	DuplicateSprite { set: &'static str, name: String },

	#[error("{set}: no sprite named {name:?}")]
	UnknownSprite { set: &'static str, name: String },

	#[error("config has a table for unknown sprite set {set:?} (known: {known})")]
	UnknownSet { set: String, known: String },
}
