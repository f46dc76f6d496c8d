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

use std::path::Path;

use anyhow::{Context, Result};
use fulu_sdk::Config;

// Logging configuration constants
/// Default log level (can be overridden by RUST_LOG environment variable)
pub const DEFAULT_LOG_LEVEL: &str = "info";

/// Log level used when `--debug` is passed
pub const DEBUG_LOG_LEVEL: &str = "debug";

/// Log file name prefix inside LOG_DIR
pub const LOG_COMPONENT_NAME: &str = "fulu";

/// Environment variable prefix, e.g. FULU_APP_KEY
pub const ENV_PREFIX: &str = "FULU";

/// Load SDK configuration from an optional file plus FULU_* environment variables
///
/// Environment variables take precedence over the file. A `.env` file in the
/// working directory is read first if present.
pub fn load_config(path: Option<&Path>) -> Result<Config> {
	dotenv::dotenv().ok();

	let mut builder = config::Config::builder();
	if let Some(path) = path {
		builder = builder.add_source(config::File::from(path));
	}

	let cfg = builder
		.add_source(config::Environment::with_prefix(ENV_PREFIX))
		.build()
		.context("Failed to load configuration")?;

	cfg.try_deserialize()
		.context("Invalid configuration")
}
