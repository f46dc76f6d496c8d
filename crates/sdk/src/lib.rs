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

//! Fulu SDK - Client library for the Fulu open API
//!
//! This crate builds and signs request envelopes, posts them to the service,
//! and decodes the nested results into typed values.
//!
//! The SDK is designed to be lightweight and embeddable:
//! - No background threads
//! - No runtime initialization
//! - No environment or configuration loading
//!
//! ```no_run
//! use fulu_sdk::{Client, Config, Context};
//!
//! # async fn run() -> fulu_sdk::Result<()> {
//! let client = Client::new(Config::new("app-key", "app-secret", "https://openapi.fulu.com/api/getway"))?;
//! let account = client.get_account_info(&Context::background()).await?;
//! println!("{} has {}", account.name, account.balance);
//! # Ok(())
//! # }
//! ```

pub mod api;
pub mod client;
pub mod config;
pub mod context;
pub mod envelope;
pub mod error;
pub mod signing;
pub mod transport;
pub mod types;

#[cfg(test)]
mod testing;

pub use api::*;
pub use client::Client;
pub use config::{ClientConfig, Config};
pub use context::Context;
pub use envelope::{Method, RequestEnvelope, ResponseEnvelope};
pub use error::{ConfigError, Error, Result, TransportError};
pub use signing::{SignType, Signature, sign_envelope, verify_response_signature};
pub use tokio_util::sync::CancellationToken;
pub use transport::{HttpResponse, HttpTransport, ReqwestTransport};
pub use types::*;
