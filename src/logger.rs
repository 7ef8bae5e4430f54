// Minimal stderr logger behind the `log` facade; level taken from RUST_LOG.

use {
	log::{Level, LevelFilter, Log, Metadata, Record},
	std::{env, io::Write},
};

struct StderrLogger;

static LOGGER: StderrLogger = StderrLogger;

impl Log for StderrLogger {
	fn enabled(&self, metadata: &Metadata<'_>) -> bool {
		metadata.level() <= log::max_level()
	}

	fn log(&self, record: &Record<'_>) {
		if !self.enabled(record.metadata()) {
			return;
		}
		let stderr = &mut std::io::stderr().lock();
		// nowhere left to report a failing stderr
		_ = match record.level() {
			Level::Info => writeln!(stderr, "{}", record.args()),
			level => writeln!(stderr, "[{level:>5}] {}", record.args()),
		};
	}

	fn flush(&self) {
		_ = std::io::stderr().flush();
	}
}

/// Level of the last `RUST_LOG` directive, bare (`debug`) or targeted (`sprite_forge=debug`).
pub fn levelFromStr(value: &str) -> Option<LevelFilter> {
	let directive = value.rsplit(',').map(str::trim).find(|directive| !directive.is_empty())?;
	let level = directive.rsplit_once('=').map_or(directive, |(_, level)| level);
	level.trim().parse().ok()
}

/// Safe to call more than once; only the first call installs the logger.
pub fn init() {
	let level = env::var("RUST_LOG").ok().as_deref().and_then(levelFromStr).unwrap_or(LevelFilter::Info);
	if log::set_logger(&LOGGER).is_ok() {
		log::set_max_level(level);
	}
}
