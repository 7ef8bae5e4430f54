#![warn(clippy::pedantic, elided_lifetimes_in_paths, explicit_outlives_requirements)]
#![allow(non_snake_case)]

use {
	sprite_forge::{cli, sprites::items},
	std::process::ExitCode,
};

fn main() -> ExitCode {
	cli::runSet(items::registry)
}
