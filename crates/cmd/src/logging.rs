// Copyright 2025 itscheems
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Logging initialization for the CLI
//!
//! Logs always go to stderr so that stdout carries only command output.
//!
//! # Configuration
//!
//! - `RUST_LOG`: Log level filter (default: `info`, or `debug` with `--debug`)
//!   - Can be set per module: `RUST_LOG=fulu_sdk=debug,reqwest=info`
//!
//! - `LOG_DIR`: When set, logs are also written to a daily-rolling file
//!   `{LOG_DIR}/fulu.{date}.log` without ANSI colors

use std::{env, path::Path, sync::OnceLock};

use anyhow::{Context, Result};
use tracing::debug;
use tracing_appender::{
	non_blocking,
	rolling::{self, Rotation},
};
use tracing_subscriber::{
	EnvFilter, fmt, layer::SubscriberExt, registry::Registry, util::SubscriberInitExt,
};

use crate::config::{DEBUG_LOG_LEVEL, DEFAULT_LOG_LEVEL, LOG_COMPONENT_NAME};

// Store log guard to prevent log loss on program exit
static LOG_GUARD: OnceLock<non_blocking::WorkerGuard> = OnceLock::new();

fn setup_file_logging(log_dir: &Path) -> Result<non_blocking::NonBlocking> {
	std::fs::create_dir_all(log_dir)
		.with_context(|| format!("Failed to create log directory: {}", log_dir.display()))?;

	let file_appender = rolling::RollingFileAppender::builder()
		.rotation(Rotation::DAILY)
		.filename_prefix(LOG_COMPONENT_NAME.to_string())
		.filename_suffix(".log")
		.build(log_dir)
		.with_context(|| {
			format!(
				"Failed to create rolling file appender in {}",
				log_dir.display()
			)
		})?;

	let (file_writer, guard) = non_blocking(file_appender);
	LOG_GUARD.set(guard).ok();

	Ok(file_writer)
}

/// Initialize logging to stderr and, if `LOG_DIR` is set, to a file
pub fn init_logging(debug_mode: bool) -> Result<()> {
	let default_level = if debug_mode {
		DEBUG_LOG_LEVEL
	} else {
		DEFAULT_LOG_LEVEL
	};
	let filter =
		EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

	let file_layer = match env::var("LOG_DIR") {
		Ok(log_dir) => {
			let file_writer = setup_file_logging(Path::new(&log_dir))?;
			Some(
				fmt::layer()
					.with_writer(file_writer)
					.with_timer(fmt::time::UtcTime::rfc_3339())
					.with_thread_ids(true)
					.with_target(true)
					.with_ansi(false),
			)
		}
		Err(_) => None,
	};

	Registry::default()
		.with(filter)
		.with(file_layer)
		.with(
			fmt::layer()
				.with_writer(std::io::stderr)
				.with_timer(fmt::time::UtcTime::rfc_3339())
				.with_target(true),
		)
		.try_init()
		.context("Failed to initialize logging")?;

	debug!(target: "fulu", "Logging initialized (default level {})", default_level);
	Ok(())
}
