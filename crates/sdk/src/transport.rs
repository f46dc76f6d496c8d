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

//! HTTP transport abstraction
//!
//! The client only needs a single JSON POST. Connection pooling, TLS and
//! proxies belong to the transport implementation.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client as ReqwestClient, header::CONTENT_TYPE};

use crate::context::Context;
use crate::error::TransportError;

/// Raw HTTP response
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpResponse {
	pub status: u16,
	pub reason: String,
	pub body: Vec<u8>,
}

impl HttpResponse {
	pub fn is_success(&self) -> bool {
		(200..300).contains(&self.status)
	}
}

/// Sends a JSON body to a URL with POST
///
/// The client races every call against the context's cancellation and
/// deadline, so implementations may ignore `ctx`.
#[async_trait]
pub trait HttpTransport: Send + Sync {
	async fn post(
		&self,
		url: &str,
		body: Vec<u8>,
		ctx: &Context,
	) -> Result<HttpResponse, TransportError>;
}

/// Default transport backed by reqwest
#[derive(Debug, Clone)]
pub struct ReqwestTransport {
	client: ReqwestClient,
}

impl ReqwestTransport {
	/// Create a transport with the given request timeout
	pub fn new(timeout: Duration) -> Result<Self, TransportError> {
		let client = ReqwestClient::builder()
			.timeout(timeout)
			.build()
			.map_err(|e| TransportError::Network(format!("Failed to create HTTP client: {}", e)))?;

		Ok(Self { client })
	}

	/// Wrap a preconfigured reqwest client
	pub fn from_client(client: ReqwestClient) -> Self {
		Self { client }
	}
}

#[async_trait]
impl HttpTransport for ReqwestTransport {
	async fn post(
		&self,
		url: &str,
		body: Vec<u8>,
		_ctx: &Context,
	) -> Result<HttpResponse, TransportError> {
		let response = self
			.client
			.post(url)
			.header(CONTENT_TYPE, "application/json")
			.body(body)
			.send()
			.await
			.map_err(|e| TransportError::Network(format!("Request failed: {}", e)))?;

		let status = response.status();
		let body = response
			.bytes()
			.await
			.map_err(|e| TransportError::Network(format!("Failed to read response: {}", e)))?;

		Ok(HttpResponse {
			status: status.as_u16(),
			reason: status.canonical_reason().unwrap_or_default().to_string(),
			body: body.to_vec(),
		})
	}
}
