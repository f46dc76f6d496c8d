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

use std::{fmt, time::Duration};

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;
use crate::signing::SignType;

/// Default response format
pub const DEFAULT_FORMAT: &str = "json";

/// Default protocol version
pub const DEFAULT_VERSION: &str = "2.0";

/// Default character set
pub const DEFAULT_CHARSET: &str = "utf-8";

/// Default signature algorithm
pub const DEFAULT_SIGN_TYPE: &str = "md5";

/// Default HTTP timeout of the built-in transport, in milliseconds
pub const DEFAULT_TIMEOUT_MS: u64 = 30_000;

/// Client configuration as supplied by the caller
///
/// Empty protocol knobs fall back to their defaults when the configuration is
/// validated. `app_key`, `app_secret` and `endpoint` are mandatory.
#[derive(Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
	/// Log the pre-digest sign string and signature of every request
	pub debug: bool,
	pub endpoint: String,
	pub app_key: String,
	pub app_secret: String,
	pub format: String,
	pub version: String,
	pub charset: String,
	pub sign_type: String,
	/// Delegated-auth token, sent empty when unset
	pub app_auth_token: String,
	/// HTTP timeout of the built-in transport, in milliseconds
	pub timeout_ms: Option<u64>,
	/// Check the signature of successful response envelopes
	pub verify_response: bool,
}

impl fmt::Debug for Config {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("Config")
			.field("debug", &self.debug)
			.field("endpoint", &self.endpoint)
			.field("app_key", &self.app_key)
			.field("app_secret", &"<redacted>")
			.field("format", &self.format)
			.field("version", &self.version)
			.field("charset", &self.charset)
			.field("sign_type", &self.sign_type)
			.field("app_auth_token", &"<redacted>")
			.field("timeout_ms", &self.timeout_ms)
			.field("verify_response", &self.verify_response)
			.finish()
	}
}

impl Config {
	/// Create a configuration with the mandatory fields set
	pub fn new(
		app_key: impl Into<String>,
		app_secret: impl Into<String>,
		endpoint: impl Into<String>,
	) -> Self {
		Self {
			app_key: app_key.into(),
			app_secret: app_secret.into(),
			endpoint: endpoint.into(),
			..Default::default()
		}
	}

	pub fn with_debug(mut self, debug: bool) -> Self {
		self.debug = debug;
		self
	}

	pub fn with_format(mut self, format: impl Into<String>) -> Self {
		self.format = format.into();
		self
	}

	pub fn with_version(mut self, version: impl Into<String>) -> Self {
		self.version = version.into();
		self
	}

	pub fn with_charset(mut self, charset: impl Into<String>) -> Self {
		self.charset = charset.into();
		self
	}

	pub fn with_sign_type(mut self, sign_type: impl Into<String>) -> Self {
		self.sign_type = sign_type.into();
		self
	}

	pub fn with_app_auth_token(mut self, token: impl Into<String>) -> Self {
		self.app_auth_token = token.into();
		self
	}

	/// Set the HTTP timeout, at millisecond resolution
	pub fn with_timeout(mut self, timeout: Duration) -> Self {
		self.timeout_ms = Some(u64::try_from(timeout.as_millis()).unwrap_or(u64::MAX));
		self
	}

	pub fn with_response_verification(mut self, verify: bool) -> Self {
		self.verify_response = verify;
		self
	}

	/// Merge defaults, check mandatory fields and freeze the result
	pub fn validate(self) -> Result<ClientConfig, ConfigError> {
		if self.app_key.trim().is_empty() {
			return Err(ConfigError::MissingAppKey);
		}
		if self.app_secret.trim().is_empty() {
			return Err(ConfigError::MissingAppSecret);
		}
		if self.endpoint.trim().is_empty() {
			return Err(ConfigError::MissingEndpoint);
		}

		let sign_type_name = or_default(self.sign_type, DEFAULT_SIGN_TYPE);
		let sign_type = sign_type_name.parse::<SignType>()?;

		let timeout_ms = self.timeout_ms.unwrap_or(DEFAULT_TIMEOUT_MS);
		if timeout_ms == 0 {
			return Err(ConfigError::ZeroTimeout);
		}

		Ok(ClientConfig {
			debug: self.debug,
			endpoint: self.endpoint,
			app_key: self.app_key,
			app_secret: self.app_secret,
			format: or_default(self.format, DEFAULT_FORMAT),
			version: or_default(self.version, DEFAULT_VERSION),
			charset: or_default(self.charset, DEFAULT_CHARSET),
			sign_type,
			sign_type_name,
			app_auth_token: self.app_auth_token,
			timeout: Duration::from_millis(timeout_ms),
			verify_response: self.verify_response,
		})
	}
}

fn or_default(value: String, default: &str) -> String {
	if value.is_empty() {
		default.to_string()
	} else {
		value
	}
}

/// Validated, immutable configuration owned by a [`crate::Client`]
#[derive(Clone)]
pub struct ClientConfig {
	debug: bool,
	endpoint: String,
	app_key: String,
	app_secret: String,
	format: String,
	version: String,
	charset: String,
	sign_type: SignType,
	// As configured; sent on the wire and covered by the signature
	sign_type_name: String,
	app_auth_token: String,
	timeout: Duration,
	verify_response: bool,
}

impl fmt::Debug for ClientConfig {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("ClientConfig")
			.field("debug", &self.debug)
			.field("endpoint", &self.endpoint)
			.field("app_key", &self.app_key)
			.field("format", &self.format)
			.field("version", &self.version)
			.field("charset", &self.charset)
			.field("sign_type", &self.sign_type)
			.field("timeout", &self.timeout)
			.field("verify_response", &self.verify_response)
			.finish_non_exhaustive()
	}
}

impl ClientConfig {
	pub fn debug(&self) -> bool {
		self.debug
	}

	pub fn endpoint(&self) -> &str {
		&self.endpoint
	}

	pub fn app_key(&self) -> &str {
		&self.app_key
	}

	pub(crate) fn app_secret(&self) -> &str {
		&self.app_secret
	}

	pub fn format(&self) -> &str {
		&self.format
	}

	pub fn version(&self) -> &str {
		&self.version
	}

	pub fn charset(&self) -> &str {
		&self.charset
	}

	pub fn sign_type(&self) -> SignType {
		self.sign_type
	}

	/// `sign_type` exactly as configured, e.g. `MD5`
	pub fn sign_type_name(&self) -> &str {
		&self.sign_type_name
	}

	pub fn app_auth_token(&self) -> &str {
		&self.app_auth_token
	}

	pub fn timeout(&self) -> Duration {
		self.timeout
	}

	pub fn verify_response(&self) -> bool {
		self.verify_response
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_defaults_applied() {
		let config = Config::new("A", "S", "http://x/").validate().unwrap();
		assert_eq!(config.app_key(), "A");
		assert_eq!(config.endpoint(), "http://x/");
		assert_eq!(config.format(), "json");
		assert_eq!(config.version(), "2.0");
		assert_eq!(config.charset(), "utf-8");
		assert_eq!(config.sign_type(), SignType::Md5);
		assert_eq!(config.sign_type_name(), "md5");
		assert_eq!(config.app_auth_token(), "");
		assert_eq!(config.timeout(), Duration::from_secs(30));
		assert!(!config.debug());
		assert!(!config.verify_response());
	}

	#[test]
	fn test_overrides_win() {
		let config = Config::new("A", "S", "http://x/")
			.with_format("xml")
			.with_version("3.0")
			.with_charset("gbk")
			.with_sign_type("SHA256")
			.with_app_auth_token("token")
			.with_timeout(Duration::from_secs(5))
			.with_debug(true)
			.validate()
			.unwrap();
		assert_eq!(config.format(), "xml");
		assert_eq!(config.version(), "3.0");
		assert_eq!(config.charset(), "gbk");
		assert_eq!(config.sign_type(), SignType::Sha256);
		assert_eq!(config.sign_type_name(), "SHA256");
		assert_eq!(config.app_auth_token(), "token");
		assert_eq!(config.timeout(), Duration::from_secs(5));
		assert!(config.debug());
	}

	#[test]
	fn test_mandatory_fields() {
		assert_eq!(
			Config::new("", "S", "http://x/").validate().unwrap_err(),
			ConfigError::MissingAppKey
		);
		assert_eq!(
			Config::new("A", "", "http://x/").validate().unwrap_err(),
			ConfigError::MissingAppSecret
		);
		assert_eq!(
			Config::new("A", "S", "  ").validate().unwrap_err(),
			ConfigError::MissingEndpoint
		);
		assert_eq!(
			Config::default().validate().unwrap_err(),
			ConfigError::MissingAppKey
		);
	}

	#[test]
	fn test_unknown_sign_type_rejected() {
		let err = Config::new("A", "S", "http://x/")
			.with_sign_type("rsa")
			.validate()
			.unwrap_err();
		assert_eq!(err, ConfigError::UnsupportedSignType("rsa".to_string()));
	}

	#[test]
	fn test_sub_second_timeout_kept() {
		let config = Config::new("A", "S", "http://x/")
			.with_timeout(Duration::from_millis(500))
			.validate()
			.unwrap();
		assert_eq!(config.timeout(), Duration::from_millis(500));

		let config: Config = serde_json::from_str(
			r#"{"app_key":"A","app_secret":"S","endpoint":"http://x/","timeout_ms":1500}"#,
		)
		.unwrap();
		assert_eq!(config.validate().unwrap().timeout(), Duration::from_millis(1500));
	}

	#[test]
	fn test_zero_timeout_rejected() {
		for timeout in [Duration::ZERO, Duration::from_micros(300)] {
			let err = Config::new("A", "S", "http://x/")
				.with_timeout(timeout)
				.validate()
				.unwrap_err();
			assert_eq!(err, ConfigError::ZeroTimeout);
		}
	}

	#[test]
	fn test_deserialize_partial() {
		let config: Config =
			serde_json::from_str(r#"{"app_key":"A","app_secret":"S","endpoint":"http://x/"}"#)
				.unwrap();
		assert!(config.format.is_empty());
		let config = config.validate().unwrap();
		assert_eq!(config.format(), "json");
	}

	#[test]
	fn test_debug_redacts_secret() {
		let config = Config::new("A", "top-secret", "http://x/");
		assert!(!format!("{:?}", config).contains("top-secret"));
		let config = config.validate().unwrap();
		assert!(!format!("{:?}", config).contains("top-secret"));
	}
}
