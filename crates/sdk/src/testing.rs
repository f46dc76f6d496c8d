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

//! Test doubles shared by the unit tests

use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use serde_json::Value;

use crate::client::Client;
use crate::config::Config;
use crate::context::Context;
use crate::error::TransportError;
use crate::transport::{HttpResponse, HttpTransport};

/// Returns a canned response and records the request bodies
pub struct ScriptedTransport {
	status: u16,
	body: Vec<u8>,
	requests: Mutex<Vec<(String, Vec<u8>)>>,
}

impl ScriptedTransport {
	pub fn ok(body: &str) -> Arc<Self> {
		Self::with_status(200, body)
	}

	pub fn with_status(status: u16, body: &str) -> Arc<Self> {
		Arc::new(Self {
			status,
			body: body.as_bytes().to_vec(),
			requests: Mutex::new(Vec::new()),
		})
	}

	/// Successful envelope wrapping `result`
	pub fn success(result: &Value) -> Arc<Self> {
		let envelope = serde_json::json!({
			"code": 0,
			"message": "ok",
			"result": result.to_string(),
			"sign": "",
		});
		Self::ok(&envelope.to_string())
	}

	pub fn last_request(&self) -> (String, Value) {
		let requests = self.requests.lock().unwrap();
		let (url, body) = requests.last().cloned().unwrap();
		(url, serde_json::from_slice(&body).unwrap())
	}

	/// Decoded `biz_content` of the last request
	pub fn last_biz_content(&self) -> Value {
		let (_, request) = self.last_request();
		serde_json::from_str(request["biz_content"].as_str().unwrap()).unwrap()
	}

	pub fn last_method(&self) -> String {
		let (_, request) = self.last_request();
		request["method"].as_str().unwrap().to_string()
	}

	pub fn request_count(&self) -> usize {
		self.requests.lock().unwrap().len()
	}
}

#[async_trait]
impl HttpTransport for ScriptedTransport {
	async fn post(
		&self,
		url: &str,
		body: Vec<u8>,
		_ctx: &Context,
	) -> Result<HttpResponse, TransportError> {
		self.requests.lock().unwrap().push((url.to_string(), body));
		Ok(HttpResponse {
			status: self.status,
			reason: "Scripted".to_string(),
			body: self.body.clone(),
		})
	}
}

pub fn scripted_client(transport: Arc<ScriptedTransport>) -> Client {
	Client::with_shared_transport(Config::new("A", "S", "http://x/"), transport).unwrap()
}
