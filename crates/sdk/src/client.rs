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

use std::sync::Arc;

use serde::{Serialize, de::DeserializeOwned};
use tracing::{debug, warn};

use crate::config::{ClientConfig, Config};
use crate::context::Context;
use crate::envelope::{Method, RequestEnvelope, ResponseEnvelope, encode_payload, now_timestamp};
use crate::error::{Error, Result, TransportError};
use crate::signing::{Signature, sign_envelope, verify_response_signature};
use crate::transport::{HttpTransport, ReqwestTransport};

/// Client for the Fulu open API
///
/// Configuration is frozen at construction and every call builds its own
/// envelope, so a client can be cloned and shared across tasks freely.
#[derive(Clone)]
pub struct Client {
	config: Arc<ClientConfig>,
	transport: Arc<dyn HttpTransport>,
}

impl Client {
	/// Create a client using the built-in reqwest transport
	pub fn new(config: Config) -> Result<Self> {
		let config = config.validate()?;
		let transport = ReqwestTransport::new(config.timeout())?;

		Ok(Self {
			config: Arc::new(config),
			transport: Arc::new(transport),
		})
	}

	/// Create a client with a custom transport
	pub fn with_transport(config: Config, transport: impl HttpTransport + 'static) -> Result<Self> {
		Self::with_shared_transport(config, Arc::new(transport))
	}

	pub fn with_shared_transport(config: Config, transport: Arc<dyn HttpTransport>) -> Result<Self> {
		Ok(Self {
			config: Arc::new(config.validate()?),
			transport,
		})
	}

	pub fn config(&self) -> &ClientConfig {
		&self.config
	}

	/// Build and sign the envelope for `method` without sending it
	pub fn build_envelope<P: Serialize + ?Sized>(
		&self,
		method: Method,
		payload: Option<&P>,
	) -> Result<(RequestEnvelope, Signature)> {
		let biz_content = encode_payload(payload)?;
		let mut envelope = RequestEnvelope::new(&self.config, method, now_timestamp(), biz_content);

		let signature = sign_envelope(
			&envelope,
			self.config.app_secret(),
			self.config.sign_type(),
		)?;
		envelope.sign = signature.sign.clone();

		Ok((envelope, signature))
	}

	/// Call `method` with `payload` and decode the nested result
	///
	/// The result is only returned when every step succeeded. A non-zero
	/// response code becomes [`Error::Api`] and the result field is not
	/// decoded.
	pub async fn execute<P, R>(&self, ctx: &Context, method: Method, payload: Option<&P>) -> Result<R>
	where
		P: Serialize + ?Sized,
		R: DeserializeOwned,
	{
		let (envelope, signature) = self.build_envelope(method, payload)?;
		if self.config.debug() {
			debug!(
				method = %method,
				sign_str = %signature.sign_str,
				sign = %signature.sign,
				"Signed request envelope"
			);
		}

		let body =
			serde_json::to_vec(&envelope).map_err(|e| Error::Serialization(e.to_string()))?;

		let response = ctx
			.run(self.transport.post(self.config.endpoint(), body, ctx))
			.await?;
		debug!(method = %method, status = response.status, "Received HTTP response");

		if !response.is_success() {
			return Err(TransportError::Status {
				status: response.status,
				reason: response.reason,
			}
			.into());
		}

		let envelope = ResponseEnvelope::from_slice(&response.body)?;
		if !envelope.is_success() {
			warn!(
				method = %method,
				code = envelope.code,
				message = %envelope.message,
				"API call failed"
			);
			return Err(Error::Api {
				code: envelope.code,
				message: envelope.message,
			});
		}

		if self.config.verify_response()
			&& !verify_response_signature(
				&envelope,
				self.config.app_secret(),
				self.config.sign_type(),
			)? {
			warn!(method = %method, "Response signature mismatch");
			return Err(Error::SignatureMismatch);
		}

		envelope.decode_result()
	}
}
