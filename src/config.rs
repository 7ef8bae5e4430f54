use {
	crate::{registry::Registry, Error},
	const_format::concatcp,
	serde::{Deserialize, Serialize},
	std::{
		collections::BTreeMap,
		fs, io,
		path::{Path, PathBuf},
	},
};

pub const DEFAULT_CONFIG_PATH: &str = concatcp!(env!("CARGO_PKG_NAME"), ".toml");
pub const DEFAULT_OUTPUT_ROOT: &str = "tileArt";

/// What to do when `<name>.png` already exists.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OverwritePolicy {
	/// Leave the existing file untouched, e.g. hand-curated art.
	Skip,
	Overwrite,
}

/// Contents of the TOML config file; every field is optional.
#[derive(Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
	pub outputRoot: Option<PathBuf>,
	pub sets: BTreeMap<String, SetConfig>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SetConfig {
	pub outputDir: Option<PathBuf>,
	pub overwritePolicy: Option<OverwritePolicy>,
	pub only: Vec<String>,
}

/// Fully resolved settings for generating one registry.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Settings {
	pub outputDir: PathBuf,
	pub overwritePolicy: OverwritePolicy,
	/// Empty means every sprite.
	pub only: Vec<String>,
}

impl Config {
	pub fn fromToml(toml: &str, path: &Path) -> Result<Self, Error> {
		toml::from_str(toml).map_err(|source| Error::Config { path: path.to_owned(), source })
	}

	pub fn load(path: &Path) -> Result<Self, Error> {
		let toml = fs::read_to_string(path).map_err(|source| Error::Io { path: path.to_owned(), source })?;
		Self::fromToml(&toml, path)
	}

	/// Reads `path` if given, else the default file when present, else an empty config.
	pub fn loadOrDefault(path: Option<&Path>) -> Result<Self, Error> {
		match path {
			Some(path) => Self::load(path),
			None => match fs::read_to_string(DEFAULT_CONFIG_PATH) {
				Ok(toml) => Self::fromToml(&toml, Path::new(DEFAULT_CONFIG_PATH)),
				Err(err) if err.kind() == io::ErrorKind::NotFound => Ok(Self::default()),
				Err(source) => Err(Error::Io { path: DEFAULT_CONFIG_PATH.into(), source }),
			},
		}
	}

	/// Rejects `[sets.<name>]` tables that name no set in `known`.
	pub fn checkSets(&self, known: &[&str]) -> Result<(), Error> {
		match self.sets.keys().find(|set| !known.contains(&set.as_str())) {
			Some(set) => Err(Error::UnknownSet { set: set.clone(), known: known.join(", ") }),
			None => Ok(()),
		}
	}

	/// Precedence: `overrides` (the command line), then the set's table, then the registry defaults.
	pub fn resolve(&self, registry: &Registry, overrides: &SetConfig) -> Settings {
		let set = self.sets.get(registry.setName).cloned().unwrap_or_default();
		let outputDir = overrides.outputDir.clone().or(set.outputDir).unwrap_or_else(|| {
			self.outputRoot.clone().unwrap_or_else(|| DEFAULT_OUTPUT_ROOT.into()).join(registry.defaultSubdir)
		});
		Settings {
			outputDir,
			overwritePolicy: overrides.overwritePolicy.or(set.overwritePolicy).unwrap_or(registry.defaultPolicy),
			only: if overrides.only.is_empty() { set.only } else { overrides.only.clone() },
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	fn registry() -> Registry {
		Registry::new("items", "items", OverwritePolicy::Skip)
	}

	#[test]
	fn empty_config_uses_registry_defaults() {
		let settings = Config::default().resolve(&registry(), &SetConfig::default());
		assert_eq!(
			settings,
			Settings {
				outputDir: Path::new(DEFAULT_OUTPUT_ROOT).join("items"),
				overwritePolicy: OverwritePolicy::Skip,
				only: vec![],
			}
		);
	}

	#[test]
	fn set_table_beats_defaults_and_cli_beats_set_table() {
		let config = Config::fromToml(
			r#"
				outputRoot = "art"

				[sets.items]
				overwritePolicy = "overwrite"
				only = ["pet_salve"]
			"#,
			Path::new("test.toml"),
		)
		.unwrap();
		let settings = config.resolve(&registry(), &SetConfig::default());
		assert_eq!(settings.outputDir, Path::new("art").join("items"));
		assert_eq!(settings.overwritePolicy, OverwritePolicy::Overwrite);
		assert_eq!(settings.only, ["pet_salve"]);

		let overrides = SetConfig {
			outputDir: Some("elsewhere".into()),
			overwritePolicy: Some(OverwritePolicy::Skip),
			only: vec!["iron_cage".into()],
		};
		let settings = config.resolve(&registry(), &overrides);
		assert_eq!(settings.outputDir, Path::new("elsewhere"));
		assert_eq!(settings.overwritePolicy, OverwritePolicy::Skip);
		assert_eq!(settings.only, ["iron_cage"]);
	}

	#[test]
	fn other_sets_do_not_leak() {
		let config = Config::fromToml("[sets.weapons]\noutputDir = \"w\"\n", Path::new("test.toml")).unwrap();
		assert_eq!(config.resolve(&registry(), &SetConfig::default()).outputDir, Path::new("tileArt/items"));
	}

	#[test]
	fn misspelled_set_table_is_rejected() {
		let config = Config::fromToml("[sets.item]\noverwritePolicy = \"skip\"\n", Path::new("test.toml")).unwrap();
		let err = config.checkSets(&["items", "weapons"]).unwrap_err();
		assert!(matches!(&err, Error::UnknownSet { set, .. } if set == "item"));
		assert!(err.to_string().contains("items, weapons"));

		let config = Config::fromToml("[sets.weapons]\noutputDir = \"w\"\n", Path::new("test.toml")).unwrap();
		assert!(config.checkSets(&["items", "weapons"]).is_ok());
		assert!(Config::default().checkSets(&[]).is_ok());
	}

	#[test]
	fn malformed_config_names_the_file() {
		let err = Config::fromToml("overwritePolicy = 3", Path::new("bad.toml")).unwrap_err();
		assert!(matches!(&err, Error::Config { path, .. } if path == Path::new("bad.toml")));
		assert!(err.to_string().contains("bad.toml"));
		assert!(Config::fromToml("[sets.items]\noverwritePolicy = \"sometimes\"", Path::new("x")).is_err());
	}
}
