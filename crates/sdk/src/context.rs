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

//! Per-call execution context carrying cancellation and an optional deadline

use std::{future::Future, time::Duration};

use tokio::time::Instant;
use tokio_util::sync::CancellationToken;

use crate::error::TransportError;

/// Cancellation and deadline for a single call
///
/// Cloning shares the cancellation token, so cancelling any clone cancels the
/// call it was handed to.
#[derive(Debug, Clone, Default)]
pub struct Context {
	token: CancellationToken,
	deadline: Option<Instant>,
}

impl Context {
	/// A context that is never cancelled and has no deadline
	pub fn background() -> Self {
		Self::default()
	}

	/// A context that expires `timeout` from now
	pub fn with_timeout(timeout: Duration) -> Self {
		Self::with_deadline(Instant::now() + timeout)
	}

	pub fn with_deadline(deadline: Instant) -> Self {
		Self {
			token: CancellationToken::new(),
			deadline: Some(deadline),
		}
	}

	/// A context cancelled through an existing token
	pub fn with_cancellation(token: CancellationToken) -> Self {
		Self {
			token,
			deadline: None,
		}
	}

	/// Tighten the deadline to at most `timeout` from now
	pub fn timeout(mut self, timeout: Duration) -> Self {
		let deadline = Instant::now() + timeout;
		self.deadline = Some(match self.deadline {
			Some(existing) => existing.min(deadline),
			None => deadline,
		});
		self
	}

	/// Derive a context that is cancelled with this one but can also be
	/// cancelled on its own
	pub fn child(&self) -> Self {
		Self {
			token: self.token.child_token(),
			deadline: self.deadline,
		}
	}

	pub fn cancel(&self) {
		self.token.cancel();
	}

	pub fn is_cancelled(&self) -> bool {
		self.token.is_cancelled()
	}

	pub fn cancellation_token(&self) -> &CancellationToken {
		&self.token
	}

	pub fn deadline(&self) -> Option<Instant> {
		self.deadline
	}

	/// Check the context before starting work
	pub fn check(&self) -> Result<(), TransportError> {
		if self.token.is_cancelled() {
			return Err(TransportError::Cancelled);
		}
		if let Some(deadline) = self.deadline
			&& Instant::now() >= deadline
		{
			return Err(TransportError::DeadlineExceeded);
		}
		Ok(())
	}

	/// Drive `fut` until it completes, the context is cancelled, or the
	/// deadline passes, whichever comes first
	pub async fn run<F, T>(&self, fut: F) -> Result<T, TransportError>
	where
		F: Future<Output = Result<T, TransportError>>,
	{
		self.check()?;

		let guarded = async {
			tokio::select! {
				biased;
				_ = self.token.cancelled() => Err(TransportError::Cancelled),
				result = fut => result,
			}
		};

		match self.deadline {
			Some(deadline) => tokio::time::timeout_at(deadline, guarded)
				.await
				.unwrap_or(Err(TransportError::DeadlineExceeded)),
			None => guarded.await,
		}
	}
}
