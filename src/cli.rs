//! Shared command line for the generator binaries.

use {
	crate::{
		config::{Config, OverwritePolicy, SetConfig},
		generate::{generate, Report},
		logger,
		registry::Registry,
		sprites, Error,
	},
	anyhow::{bail, Context},
	clap::Parser,
	std::{io::Write, path::PathBuf, process::ExitCode, slice},
};

#[derive(clap::Args, Debug, Default, PartialEq, Eq)]
pub struct Common {
	/// TOML config file [default: sprite_forge.toml when present]
	#[clap(long, value_name = "PATH")]
	pub config: Option<PathBuf>,

	/// Write into this directory instead of the configured one
	#[clap(long, value_name = "DIR")]
	pub outputDir: Option<PathBuf>,

	#[clap(long, value_enum)]
	pub overwritePolicy: Option<OverwritePolicy>,

	/// Print the sprite names and exit
	#[clap(long)]
	pub list: bool,

	/// Only generate these sprites
	#[clap(value_name = "NAME")]
	pub names: Vec<String>,
}

#[derive(Parser, Debug)]
#[clap(version, about = "Generates one sprite set as PNG files")]
struct SetArgs {
	#[clap(flatten)]
	common: Common,
}

#[derive(Parser, Debug)]
#[clap(version, about = "Generates pixel-art sprite sets as PNG files")]
struct AllArgs {
	/// Restrict to these sets [default: all]
	#[clap(long = "set", value_name = "SET")]
	sets: Vec<String>,

	#[clap(flatten)]
	common: Common,
}

/// `main` of a binary that owns exactly one set.
pub fn runSet(registry: fn() -> Result<Registry, Error>) -> ExitCode {
	let SetArgs { common } = SetArgs::parse();
	report(|| execute(&common, slice::from_ref(&registry()?)))
}

/// `main` of the binary covering every set.
pub fn runAll() -> ExitCode {
	let AllArgs { sets, common } = AllArgs::parse();
	report(|| execute(&common, &select(sprites::all()?, &sets)?))
}

fn report(run: impl FnOnce() -> anyhow::Result<Vec<Report>>) -> ExitCode {
	logger::init();
	match run() {
		Ok(_) => ExitCode::SUCCESS,
		Err(err) => {
			eprintln!("error: {err:#}");
			ExitCode::FAILURE
		}
	}
}

pub fn select(mut registries: Vec<Registry>, sets: &[String]) -> anyhow::Result<Vec<Registry>> {
	if let Some(set) = sets.iter().find(|&set| registries.iter().all(|registry| registry.setName != set)) {
		let known: Vec<_> = registries.iter().map(|registry| registry.setName).collect();
		bail!("no sprite set named {set:?} (known: {})", known.join(", "));
	}
	if !sets.is_empty() {
		registries.retain(|registry| sets.iter().any(|set| set == registry.setName));
	}
	Ok(registries)
}

/// Positional names are routed to whichever set defines them; sets that define none of them
/// are left out.
pub fn execute(common: &Common, registries: &[Registry]) -> anyhow::Result<Vec<Report>> {
	if common.list {
		let stdout = &mut std::io::stdout().lock();
		for registry in registries {
			for name in registry.names() {
				writeln!(stdout, "{}/{name}", registry.setName)?;
			}
		}
		return Ok(Vec::new());
	}
	if let Some(name) = common.names.iter().find(|&name| registries.iter().all(|registry| registry.get(name).is_none())) {
		bail!("no sprite named {name:?}");
	}
	let config = Config::loadOrDefault(common.config.as_deref())?;
	config.checkSets(&sprites::all()?.iter().map(|registry| registry.setName).collect::<Vec<_>>())?;

	let mut reports = Vec::with_capacity(registries.len());
	for registry in registries {
		let only: Vec<String> = common.names.iter().filter(|name| registry.get(name).is_some()).cloned().collect();
		if !common.names.is_empty() && only.is_empty() {
			continue;
		}
		let overrides = SetConfig { outputDir: common.outputDir.clone(), overwritePolicy: common.overwritePolicy, only };
		let settings = config.resolve(registry, &overrides);
		reports.push(generate(registry, &settings).with_context(|| format!("generating {}", registry.setName))?);
	}
	Ok(reports)
}

#[cfg(test)]
mod tests {
	use {super::*, std::path::Path};

	#[test]
	fn flags_are_kebab_case() {
		let AllArgs { sets, common } = AllArgs::try_parse_from([
			"sprite_forge",
			"--set",
			"weapons",
			"--output-dir",
			"out",
			"--overwrite-policy",
			"skip",
			"iron_sword",
		])
		.unwrap();
		assert_eq!(sets, ["weapons"]);
		assert_eq!(common.outputDir.as_deref(), Some(Path::new("out")));
		assert_eq!(common.overwritePolicy, Some(OverwritePolicy::Skip));
		assert_eq!(common.names, ["iron_sword"]);
		assert!(AllArgs::try_parse_from(["sprite_forge", "--overwrite-policy", "sometimes"]).is_err());
		assert!(SetArgs::try_parse_from(["gen_items", "--set", "items"]).is_err());
	}

	#[test]
	fn select_filters_and_rejects_unknown_sets() {
		let all = || sprites::all().unwrap();
		assert_eq!(select(all(), &[]).unwrap().len(), 3);
		let picked = select(all(), &["townTiles".into()]).unwrap();
		assert_eq!(picked.iter().map(|registry| registry.setName).collect::<Vec<_>>(), ["townTiles"]);
		let err = select(all(), &["armor".into()]).unwrap_err();
		assert!(err.to_string().contains("armor"));
	}

	#[test]
	fn names_are_routed_to_their_set() {
		let dir = std::env::temp_dir().join(format!("sprite_forge-cli-{}", std::process::id()));
		let common = Common {
			config: Some(dir.join("missing.toml")),
			outputDir: Some(dir.clone()),
			names: vec!["pet_salve".into(), "iron_sword".into()],
			..Common::default()
		};
		// an explicitly named config file has to exist
		assert!(execute(&common, &sprites::all().unwrap()).is_err());

		let common = Common { config: None, ..common };
		let reports = execute(&common, &sprites::all().unwrap()).unwrap();
		let written: Vec<_> = reports.iter().flat_map(|report| &report.written).map(|(name, ..)| name.as_str()).collect();
		assert_eq!(written, ["pet_salve", "iron_sword"]);
		assert!(dir.join("pet_salve.png").is_file() && dir.join("iron_sword.png").is_file());
		std::fs::remove_dir_all(&dir).unwrap();
	}

	#[test]
	fn misspelled_set_table_fails_before_writing() {
		let dir = std::env::temp_dir().join(format!("sprite_forge-cli-sets-{}", std::process::id()));
		std::fs::create_dir_all(&dir).unwrap();
		let config = dir.join("forge.toml");
		std::fs::write(&config, "[sets.item]\noverwritePolicy = \"skip\"\n").unwrap();
		let common = Common { config: Some(config), outputDir: Some(dir.join("out")), ..Common::default() };
		let err = execute(&common, &sprites::all().unwrap()).unwrap_err();
		assert!(err.to_string().contains("\"item\""));
		assert!(!dir.join("out").exists());
		std::fs::remove_dir_all(&dir).unwrap();
	}

	#[test]
	fn unknown_name_fails_before_writing() {
		let common = Common { names: vec!["excalibur".into()], ..Common::default() };
		let err = execute(&common, &sprites::all().unwrap()).unwrap_err();
		assert!(err.to_string().contains("excalibur"));
	}
}
