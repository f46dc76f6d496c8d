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

//! Request and response envelopes
//!
//! Both directions wrap a method-specific JSON document that has already been
//! serialized to a string (`biz_content` outbound, `result` inbound).

use std::{fmt, str::FromStr};

use serde::{Deserialize, Deserializer, Serialize, de::DeserializeOwned};
use serde_json::Value;

use crate::config::ClientConfig;
use crate::error::{Error, Result};

/// chrono format of the envelope timestamp (`YYYY-MM-DD HH:MM:SS`)
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Envelope key that carries the signature and is excluded from signing
pub const SIGN_FIELD: &str = "sign";

/// Remote operations exposed by the service
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Method {
	#[serde(rename = "fulu.goods.list.get")]
	GetProductList,
	#[serde(rename = "fulu.goods.info.get")]
	GetProductInfo,
	#[serde(rename = "fulu.goods.template.get")]
	GetProductTemplate,
	#[serde(rename = "fulu.goods.stock.check")]
	CheckProductStock,
	#[serde(rename = "fulu.user.info.get")]
	GetAccountInfo,
	#[serde(rename = "fulu.market.qqnickname.get")]
	GetQqNickname,
	#[serde(rename = "fulu.mobile.info.get")]
	GetMobileInfo,
	#[serde(rename = "fulu.mobile.maintain.check")]
	GetMobileMaintainStatus,
	#[serde(rename = "fulu.order.direct.add")]
	CreateDirectOrder,
	#[serde(rename = "fulu.order.card.add")]
	CreateCardOrder,
	#[serde(rename = "fulu.order.mobile.add")]
	CreateMobileOrder,
	#[serde(rename = "fulu.order.info.get")]
	QueryOrder,
	#[serde(rename = "fulu.order.extend.get")]
	QueryOrderExtend,
}

impl Method {
	pub const ALL: [Method; 13] = [
		Method::GetProductList,
		Method::GetProductInfo,
		Method::GetProductTemplate,
		Method::CheckProductStock,
		Method::GetAccountInfo,
		Method::GetQqNickname,
		Method::GetMobileInfo,
		Method::GetMobileMaintainStatus,
		Method::CreateDirectOrder,
		Method::CreateCardOrder,
		Method::CreateMobileOrder,
		Method::QueryOrder,
		Method::QueryOrderExtend,
	];

	/// Method identifier as sent on the wire
	pub fn as_str(&self) -> &'static str {
		match self {
			Method::GetProductList => "fulu.goods.list.get",
			Method::GetProductInfo => "fulu.goods.info.get",
			Method::GetProductTemplate => "fulu.goods.template.get",
			Method::CheckProductStock => "fulu.goods.stock.check",
			Method::GetAccountInfo => "fulu.user.info.get",
			Method::GetQqNickname => "fulu.market.qqnickname.get",
			Method::GetMobileInfo => "fulu.mobile.info.get",
			Method::GetMobileMaintainStatus => "fulu.mobile.maintain.check",
			Method::CreateDirectOrder => "fulu.order.direct.add",
			Method::CreateCardOrder => "fulu.order.card.add",
			Method::CreateMobileOrder => "fulu.order.mobile.add",
			Method::QueryOrder => "fulu.order.info.get",
			Method::QueryOrderExtend => "fulu.order.extend.get",
		}
	}
}

impl fmt::Display for Method {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.as_str())
	}
}

impl FromStr for Method {
	type Err = Error;

	fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
		Method::ALL
			.into_iter()
			.find(|method| method.as_str() == s)
			.ok_or_else(|| Error::Decode(format!("Unknown method: {}", s)))
	}
}

/// Outbound envelope
///
/// Field order follows the service documentation. It has no effect on the
/// signature.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RequestEnvelope {
	pub app_key: String,
	pub method: String,
	pub timestamp: String,
	pub version: String,
	pub format: String,
	pub charset: String,
	pub sign_type: String,
	pub sign: String,
	pub app_auth_token: String,
	pub biz_content: String,
}

impl RequestEnvelope {
	/// Build an unsigned envelope from the client configuration
	pub fn new(
		config: &ClientConfig,
		method: Method,
		timestamp: impl Into<String>,
		biz_content: impl Into<String>,
	) -> Self {
		Self {
			app_key: config.app_key().to_string(),
			method: method.as_str().to_string(),
			timestamp: timestamp.into(),
			version: config.version().to_string(),
			format: config.format().to_string(),
			charset: config.charset().to_string(),
			sign_type: config.sign_type_name().to_string(),
			sign: String::new(),
			app_auth_token: config.app_auth_token().to_string(),
			biz_content: biz_content.into(),
		}
	}
}

/// Inbound envelope
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResponseEnvelope {
	pub code: i64,
	#[serde(default, deserialize_with = "null_as_empty")]
	pub message: String,
	#[serde(default, deserialize_with = "null_as_empty")]
	pub result: String,
	#[serde(default, deserialize_with = "null_as_empty")]
	pub sign: String,
}

impl ResponseEnvelope {
	/// Parse a response body
	pub fn from_slice(body: &[u8]) -> Result<Self> {
		serde_json::from_slice(body)
			.map_err(|e| Error::Decode(format!("Malformed response envelope: {}", e)))
	}

	pub fn is_success(&self) -> bool {
		self.code == 0
	}

	/// Decode the nested `result` document
	///
	/// Callers must check [`ResponseEnvelope::is_success`] first; the content
	/// of `result` is undefined on failure. Object members set to `null`
	/// decode as if absent, so `#[serde(default)]` fields take their default.
	pub fn decode_result<R: DeserializeOwned>(&self) -> Result<R> {
		decode_document(&self.result, "result")
	}
}

/// Decode a JSON document nested in a string field
///
/// Object members set to `null` are removed first.
pub(crate) fn decode_document<R: DeserializeOwned>(raw: &str, what: &str) -> Result<R> {
	let mut value: Value = serde_json::from_str(raw)
		.map_err(|e| Error::Decode(format!("Malformed {}: {}", what, e)))?;
	drop_nulls(&mut value);
	serde_json::from_value(value).map_err(|e| Error::Decode(format!("Malformed {}: {}", what, e)))
}

fn drop_nulls(value: &mut Value) {
	match value {
		Value::Object(map) => {
			map.retain(|_, member| !member.is_null());
			map.values_mut().for_each(drop_nulls);
		}
		Value::Array(items) => items.iter_mut().for_each(drop_nulls),
		_ => {}
	}
}

fn null_as_empty<'de, D: Deserializer<'de>>(deserializer: D) -> std::result::Result<String, D::Error> {
	Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

/// Serialize a payload into the `biz_content` string
///
/// An absent payload becomes the JSON literal `null`.
pub fn encode_payload<P: Serialize + ?Sized>(payload: Option<&P>) -> Result<String> {
	match payload {
		Some(payload) => {
			serde_json::to_string(payload).map_err(|e| Error::Serialization(e.to_string()))
		}
		None => Ok("null".to_string()),
	}
}

/// Current local wall-clock time in envelope format
pub fn now_timestamp() -> String {
	chrono::Local::now().format(TIMESTAMP_FORMAT).to_string()
}
