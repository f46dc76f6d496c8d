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

//! Error types for the SDK
//!
//! Every layer returns the first error it hits unchanged. Nothing in the SDK
//! retries or recovers locally; callers decide what to do with a failure.

use thiserror::Error;

/// Result alias used throughout the SDK
pub type Result<T> = std::result::Result<T, Error>;

/// Invalid or incomplete client configuration, reported at construction
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
	#[error("app key is empty")]
	MissingAppKey,
	#[error("app secret is empty")]
	MissingAppSecret,
	#[error("endpoint is empty")]
	MissingEndpoint,
	#[error("Unsupported sign type: {0}")]
	UnsupportedSignType(String),
	#[error("timeout must be at least 1 ms")]
	ZeroTimeout,
}

/// Failure of the HTTP exchange itself
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TransportError {
	#[error("Network error: {0}")]
	Network(String),
	#[error("HTTP status {status}: {reason}")]
	Status { status: u16, reason: String },
	#[error("Request cancelled")]
	Cancelled,
	#[error("Request deadline exceeded")]
	DeadlineExceeded,
}

/// Error returned by every client operation
#[derive(Debug, Error)]
pub enum Error {
	#[error("Configuration error: {0}")]
	Config(#[from] ConfigError),
	#[error("Serialization error: {0}")]
	Serialization(String),
	#[error("Transport error: {0}")]
	Transport(#[from] TransportError),
	#[error("Decode error: {0}")]
	Decode(String),
	/// Well-formed response envelope carrying a non-zero status code
	#[error("API error {code}: {message}")]
	Api { code: i64, message: String },
	/// Response signature did not match the recomputed one
	#[error("Response signature mismatch")]
	SignatureMismatch,
}

impl Error {
	/// Remote status code, for [`Error::Api`] only
	pub fn code(&self) -> Option<i64> {
		match self {
			Error::Api { code, .. } => Some(*code),
			_ => None,
		}
	}

	/// Remote status message, for [`Error::Api`] only
	pub fn message(&self) -> Option<&str> {
		match self {
			Error::Api { message, .. } => Some(message),
			_ => None,
		}
	}

	/// Whether the call stopped because its context was cancelled or timed out
	pub fn is_cancelled(&self) -> bool {
		matches!(
			self,
			Error::Transport(TransportError::Cancelled | TransportError::DeadlineExceeded)
		)
	}
}
