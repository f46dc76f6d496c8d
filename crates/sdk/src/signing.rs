// Copyright 2025 chenjjiaa
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

//! Envelope signing
//!
//! The service authenticates a request with a keyed digest computed over a
//! character-sorted rendering of the envelope:
//!
//! 1. Serialize the envelope without its `sign` field to compact JSON.
//! 2. Split the JSON text into Unicode scalar values and sort them ascending.
//! 3. Join them and append the shared secret.
//! 4. Digest the UTF-8 bytes (MD5 by default) and hex-encode in lowercase.
//!
//! Because the characters are sorted, the key order of the JSON object does
//! not affect the result.

use std::{fmt, str::FromStr};

use md5::Md5;
use serde::Serialize;
use serde_json::Value;
use sha2::{Digest, Sha256};

use crate::envelope::{RequestEnvelope, ResponseEnvelope, SIGN_FIELD};
use crate::error::{ConfigError, Error, Result};

/// Digest used to produce the signature
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum SignType {
	#[default]
	Md5,
	Sha256,
}

impl SignType {
	/// Wire name sent in the envelope's `sign_type` field
	pub fn as_str(&self) -> &'static str {
		match self {
			SignType::Md5 => "md5",
			SignType::Sha256 => "sha256",
		}
	}

	/// Lowercase hex digest of `input`
	pub fn digest_hex(&self, input: &[u8]) -> String {
		match self {
			SignType::Md5 => hex::encode(Md5::digest(input)),
			SignType::Sha256 => hex::encode(Sha256::digest(input)),
		}
	}
}

impl fmt::Display for SignType {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.as_str())
	}
}

impl FromStr for SignType {
	type Err = ConfigError;

	fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
		if s.eq_ignore_ascii_case("md5") {
			Ok(SignType::Md5)
		} else if s.eq_ignore_ascii_case("sha256") {
			Ok(SignType::Sha256)
		} else {
			Err(ConfigError::UnsupportedSignType(s.to_string()))
		}
	}
}

/// A computed signature together with the string it was digested from
///
/// `sign_str` embeds the shared secret. It is meant for diagnostics only and
/// never leaves the process.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Signature {
	pub sign: String,
	pub sign_str: String,
}

/// Sort the characters of `json` and append `secret`
pub fn canonicalize(json: &str, secret: &str) -> String {
	let mut chars: Vec<char> = json.chars().collect();
	chars.sort_unstable();

	let mut sign_str = String::with_capacity(json.len() + secret.len());
	sign_str.extend(chars);
	sign_str.push_str(secret);
	sign_str
}

/// Sign any value that serializes to a JSON object
///
/// The `sign` key is removed before serialization, whatever its value.
pub fn sign_fields<T: Serialize + ?Sized>(
	fields: &T,
	secret: &str,
	sign_type: SignType,
) -> Result<Signature> {
	let value = serde_json::to_value(fields).map_err(|e| Error::Serialization(e.to_string()))?;
	let Value::Object(mut map) = value else {
		return Err(Error::Serialization(
			"Signing input must be a JSON object".to_string(),
		));
	};
	map.remove(SIGN_FIELD);

	let json = serde_json::to_string(&map).map_err(|e| Error::Serialization(e.to_string()))?;
	let sign_str = canonicalize(&json, secret);
	let sign = sign_type.digest_hex(sign_str.as_bytes());

	Ok(Signature { sign, sign_str })
}

/// Sign an outbound envelope
pub fn sign_envelope(
	envelope: &RequestEnvelope,
	secret: &str,
	sign_type: SignType,
) -> Result<Signature> {
	sign_fields(envelope, secret, sign_type)
}

/// Recompute the signature of an inbound envelope and compare it with `sign`
pub fn verify_response_signature(
	response: &ResponseEnvelope,
	secret: &str,
	sign_type: SignType,
) -> Result<bool> {
	if response.sign.is_empty() {
		return Ok(false);
	}
	let expected = sign_fields(response, secret, sign_type)?;
	Ok(expected.sign.eq_ignore_ascii_case(&response.sign))
}
