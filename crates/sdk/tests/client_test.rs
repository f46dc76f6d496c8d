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

//! End-to-end tests for the client
//!
//! These tests drive the public API against an in-process transport that
//! plays the role of the remote service:
//! - Envelope signing against fixed reference vectors
//! - Server-side signature reconstruction from the wire body
//! - Success, API error and decode error paths
//! - Order extension double decode
//! - Cancellation and deadlines

use std::{
	collections::BTreeMap,
	sync::{Arc, Mutex},
	time::Duration,
};

use async_trait::async_trait;
use fulu_sdk::{
	Client, Config, Context, Error, HttpResponse, HttpTransport, ProductListQuery, RequestEnvelope,
	SignType, TransportError, sign_envelope, signing::sign_fields,
};
use serde::Serialize;

/// Plays the remote service: records requests, replies with a fixed body
struct FakeService {
	reply: String,
	delay: Option<Duration>,
	requests: Mutex<Vec<Vec<u8>>>,
}

impl FakeService {
	fn new(reply: &str) -> Arc<Self> {
		Arc::new(Self {
			reply: reply.to_string(),
			delay: None,
			requests: Mutex::new(Vec::new()),
		})
	}

	fn slow(reply: &str, delay: Duration) -> Arc<Self> {
		Arc::new(Self {
			reply: reply.to_string(),
			delay: Some(delay),
			requests: Mutex::new(Vec::new()),
		})
	}

	fn requests(&self) -> Vec<Vec<u8>> {
		self.requests.lock().unwrap().clone()
	}
}

#[async_trait]
impl HttpTransport for FakeService {
	async fn post(
		&self,
		_url: &str,
		body: Vec<u8>,
		_ctx: &Context,
	) -> Result<HttpResponse, TransportError> {
		self.requests.lock().unwrap().push(body);
		if let Some(delay) = self.delay {
			tokio::time::sleep(delay).await;
		}
		Ok(HttpResponse {
			status: 200,
			reason: "OK".to_string(),
			body: self.reply.clone().into_bytes(),
		})
	}
}

fn create_client(service: Arc<FakeService>) -> Client {
	Client::with_shared_transport(Config::new("A", "S", "http://x/"), service)
		.expect("valid configuration")
}

fn envelope(app_key: &str, method: &str, biz_content: &str) -> RequestEnvelope {
	RequestEnvelope {
		app_key: app_key.to_string(),
		method: method.to_string(),
		timestamp: "2020-01-01 00:00:00".to_string(),
		version: "2.0".to_string(),
		format: "json".to_string(),
		charset: "utf-8".to_string(),
		sign_type: "md5".to_string(),
		sign: String::new(),
		app_auth_token: String::new(),
		biz_content: biz_content.to_string(),
	}
}

#[test]
fn test_signature_reference_vector() {
	let signature = sign_envelope(&envelope("k", "m", "null"), "s", SignType::Md5).unwrap();
	assert_eq!(signature.sign, "dd5ecccd6e00a5168924192185690051");
}

#[test]
fn test_signature_reference_vector_multibyte_payload() {
	#[derive(Serialize)]
	struct Payload {
		product_name: &'static str,
		buy_num: i32,
	}
	let biz_content = serde_json::to_string(&Payload {
		product_name: "话费",
		buy_num: 1,
	})
	.unwrap();

	let signature = sign_envelope(
		&envelope("A", "fulu.goods.list.get", &biz_content),
		"S",
		SignType::Md5,
	)
	.unwrap();
	assert_eq!(signature.sign, "efee855678daf21bbcc2dc267f869029");
	assert!(signature.sign_str.ends_with("话费S"));
}

#[test]
fn test_signature_ignores_field_declaration_order() {
	#[derive(Serialize)]
	struct Declared {
		app_key: &'static str,
		method: &'static str,
		sign: &'static str,
		biz_content: &'static str,
	}
	#[derive(Serialize)]
	struct Reversed {
		biz_content: &'static str,
		sign: &'static str,
		method: &'static str,
		app_key: &'static str,
	}

	let one = sign_fields(
		&Declared {
			app_key: "k",
			method: "m",
			sign: "x",
			biz_content: "null",
		},
		"s",
		SignType::Md5,
	)
	.unwrap();
	let two = sign_fields(
		&Reversed {
			biz_content: "null",
			sign: "y",
			method: "m",
			app_key: "k",
		},
		"s",
		SignType::Md5,
	)
	.unwrap();
	assert_eq!(one, two);
}

#[tokio::test]
async fn test_server_can_verify_wire_envelope() {
	let service = FakeService::new(r#"{"code":0,"message":"ok","result":"[]"}"#);
	let client = create_client(service.clone());

	let query = ProductListQuery {
		product_name: Some("话费".to_string()),
		..Default::default()
	};
	let items = client
		.get_product_list(&Context::background(), &query)
		.await
		.unwrap();
	assert!(items.is_empty());

	// Reconstruct the pre-sign field set the way the service does
	let requests = service.requests();
	assert_eq!(requests.len(), 1);
	let mut fields: BTreeMap<String, String> = serde_json::from_slice(&requests[0]).unwrap();
	let sign = fields.remove("sign").unwrap();
	assert_eq!(fields.len(), 9);
	assert_eq!(fields["biz_content"], r#"{"product_name":"话费"}"#);
	assert_eq!(fields["method"], "fulu.goods.list.get");

	let recomputed = sign_fields(&fields, "S", SignType::Md5).unwrap();
	assert_eq!(recomputed.sign, sign);
}

#[tokio::test]
async fn test_account_info_scenario() {
	let service = FakeService::new(
		r#"{"code":0,"message":"ok","result":"{\"name\":\"bob\",\"balance\":1.5,\"is_open\":1}"}"#,
	);
	let client = create_client(service);

	let account = client.get_account_info(&Context::background()).await.unwrap();
	assert_eq!(account.name, "bob");
	assert_eq!(account.balance, 1.5);
	assert_eq!(account.is_open, 1);
}

#[tokio::test]
async fn test_api_error_scenario() {
	let service = FakeService::new(r#"{"code":1,"message":"bad signature","result":""}"#);
	let client = create_client(service);

	let err = client
		.get_account_info(&Context::background())
		.await
		.unwrap_err();
	match err {
		Error::Api { code, message } => {
			assert_eq!(code, 1);
			assert_eq!(message, "bad signature");
		}
		other => panic!("expected API error, got {:?}", other),
	}
}

#[tokio::test]
async fn test_zero_status_with_invalid_result_is_decode_error() {
	let service = FakeService::new(r#"{"code":0,"message":"ok","result":"not-json"}"#);
	let client = create_client(service);

	let err = client
		.query_order(&Context::background(), "C1")
		.await
		.unwrap_err();
	assert!(matches!(err, Error::Decode(_)));
}

#[tokio::test]
async fn test_order_extend_scenario() {
	let service = FakeService::new(
		r#"{"code":0,"message":"ok","result":"{\"order_id\":\"F9\",\"customer_order_no\":\"C9\",\"order_extend_content\":\"{\\\"express_number\\\":\\\"SF1\\\",\\\"recharge_description\\\":null}\"}"}"#,
	);
	let client = create_client(service.clone());

	let extend = client
		.query_order_extend(&Context::background(), "C9")
		.await
		.unwrap();
	assert_eq!(extend.order_id, "F9");
	assert_eq!(extend.customer_order_no, "C9");
	assert_eq!(extend.order_extend_content.express_number, "SF1");
	assert!(extend.order_extend_content.recharge_description.is_empty());

	let request: serde_json::Value = serde_json::from_slice(&service.requests()[0]).unwrap();
	assert_eq!(request["method"], "fulu.order.extend.get");
	assert_eq!(request["biz_content"], r#"{"customer_order_no":"C9"}"#);
}

#[test]
fn test_missing_configuration_fails_construction() {
	for config in [
		Config::new("", "S", "http://x/"),
		Config::new("A", "", "http://x/"),
		Config::new("A", "S", ""),
	] {
		let service = FakeService::new("{}");
		let result = Client::with_shared_transport(config, service);
		assert!(matches!(result, Err(Error::Config(_))));
	}
}

#[tokio::test]
async fn test_cancellation_mid_call() {
	let service = FakeService::slow(
		r#"{"code":0,"message":"ok","result":"{}"}"#,
		Duration::from_secs(30),
	);
	let client = create_client(service.clone());

	let ctx = Context::background();
	let canceller = ctx.clone();
	tokio::spawn(async move {
		tokio::time::sleep(Duration::from_millis(20)).await;
		canceller.cancel();
	});

	let err = client.get_account_info(&ctx).await.unwrap_err();
	assert!(matches!(err, Error::Transport(TransportError::Cancelled)));
	assert_eq!(service.requests().len(), 1);
}

#[tokio::test(start_paused = true)]
async fn test_deadline_mid_call() {
	let service = FakeService::slow(
		r#"{"code":0,"message":"ok","result":"{}"}"#,
		Duration::from_secs(30),
	);
	let client = create_client(service);

	let ctx = Context::with_timeout(Duration::from_secs(1));
	let err = client.get_account_info(&ctx).await.unwrap_err();
	assert!(matches!(err, Error::Transport(TransportError::DeadlineExceeded)));
	assert!(err.is_cancelled());
}

#[tokio::test]
async fn test_shared_client_across_tasks() {
	let service = FakeService::new(
		r#"{"code":0,"message":"ok","result":"{\"nickname\":\"penguin\",\"photo\":\"\"}"}"#,
	);
	let client = create_client(service.clone());

	let mut handles = Vec::new();
	for i in 0..8 {
		let client = client.clone();
		handles.push(tokio::spawn(async move {
			client
				.get_qq_nickname(&Context::background(), &format!("{}", 10000 + i))
				.await
		}));
	}
	for handle in handles {
		let nickname = handle.await.unwrap().unwrap();
		assert_eq!(nickname.nickname, "penguin");
	}
	assert_eq!(service.requests().len(), 8);
}
