#![warn(clippy::pedantic, elided_lifetimes_in_paths, explicit_outlives_requirements)]
#![allow(non_snake_case)]

use std::process::ExitCode;

fn main() -> ExitCode {
	sprite_forge::cli::runAll()
}
