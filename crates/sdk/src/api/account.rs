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

use serde::{Deserialize, Serialize};

use crate::client::Client;
use crate::context::Context;
use crate::envelope::Method;
use crate::error::Result;

/// Merchant account information
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AccountInfo {
	pub name: String,
	pub balance: f64,
	/// 1 when the account is open
	pub is_open: i32,
}

impl AccountInfo {
	pub fn is_opened(&self) -> bool {
		self.is_open == 1
	}
}

impl Client {
	/// Fetch the merchant account (`fulu.user.info.get`)
	pub async fn get_account_info(&self, ctx: &Context) -> Result<AccountInfo> {
		self.execute::<(), _>(ctx, Method::GetAccountInfo, None).await
	}
}
