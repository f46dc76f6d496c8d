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

//! Third-party lookups: QQ nicknames and mobile numbers

use serde::{Deserialize, Serialize};

use crate::client::Client;
use crate::context::Context;
use crate::envelope::Method;
use crate::error::Result;
use crate::types::{MaintainState, MobileSpType};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct QqNickname {
	pub nickname: String,
	pub photo: String,
}

#[derive(Debug, Serialize)]
struct MobileInfoQuery<'a> {
	phone: &'a str,
	#[serde(skip_serializing_if = "Option::is_none")]
	face_value: Option<f64>,
}

/// Carrier and region of a mobile number
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MobileInfo {
	/// Carrier name
	pub sp: String,
	pub city_code: String,
	/// Face values available for recharge
	pub face_value: Vec<f64>,
	pub city: String,
	pub province: String,
	pub sp_type: String,
}

impl MobileInfo {
	pub fn carrier(&self) -> Option<MobileSpType> {
		MobileSpType::parse(&self.sp_type)
	}
}

#[derive(Debug, Serialize)]
struct MaintainQuery<'a> {
	mobile: &'a str,
	face_value: i64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MobileMaintainStatus {
	pub province: String,
	pub city: String,
	pub sp: String,
	pub sp_type: String,
	pub maintain_state: String,
	pub current_success_rate: f64,
}

impl MobileMaintainStatus {
	pub fn carrier(&self) -> Option<MobileSpType> {
		MobileSpType::parse(&self.sp_type)
	}

	pub fn state(&self) -> Option<MaintainState> {
		MaintainState::parse(&self.maintain_state)
	}
}

impl Client {
	/// Look up a QQ account's nickname (`fulu.market.qqnickname.get`)
	pub async fn get_qq_nickname(&self, ctx: &Context, qq: &str) -> Result<QqNickname> {
		let query = serde_json::json!({ "qq": qq });
		self.execute(ctx, Method::GetQqNickname, Some(&query)).await
	}

	/// Look up carrier and region of a mobile number (`fulu.mobile.info.get`)
	///
	/// `face_value` narrows the result to a single recharge amount.
	pub async fn get_mobile_info(
		&self,
		ctx: &Context,
		phone: &str,
		face_value: Option<f64>,
	) -> Result<MobileInfo> {
		let query = MobileInfoQuery { phone, face_value };
		self.execute(ctx, Method::GetMobileInfo, Some(&query)).await
	}

	/// Check whether recharges of `face_value` to `mobile` are under
	/// maintenance (`fulu.mobile.maintain.check`)
	pub async fn get_mobile_maintain_status(
		&self,
		ctx: &Context,
		mobile: &str,
		face_value: i64,
	) -> Result<MobileMaintainStatus> {
		let query = MaintainQuery { mobile, face_value };
		self.execute(ctx, Method::GetMobileMaintainStatus, Some(&query))
			.await
	}
}
