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

//! Order placement and order queries
//!
//! The three order types share one result shape, [`Order`]; fields a given
//! order type does not report are left at their defaults.

use serde::{Deserialize, Serialize};

use crate::client::Client;
use crate::context::Context;
use crate::envelope::{Method, decode_document};
use crate::error::{Error, Result};
use crate::types::OrderState;

/// Direct recharge into a customer account (`fulu.order.direct.add`)
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DirectOrderRequest {
	pub product_id: i64,
	pub customer_order_no: String,
	pub charge_account: String,
	pub buy_num: i64,
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub charge_game_name: Option<String>,
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub charge_game_region: Option<String>,
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub charge_game_role: Option<String>,
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub charge_type: Option<String>,
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub charge_password: Option<String>,
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub charge_ip: Option<String>,
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub contact_qq: Option<String>,
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub contact_tel: Option<String>,
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub remaining_number: Option<String>,
	/// Highest unit price the merchant accepts
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub customer_price: Option<f64>,
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub shop_type: Option<String>,
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub external_biz_id: Option<String>,
}

/// Card (voucher) purchase (`fulu.order.card.add`)
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CardOrderRequest {
	pub product_id: i64,
	pub buy_num: i64,
	pub customer_order_no: String,
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub customer_price: Option<f64>,
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub shop_type: Option<String>,
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub external_biz_id: Option<String>,
}

/// Mobile top-up (`fulu.order.mobile.add`)
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MobileOrderRequest {
	pub charge_phone: String,
	pub charge_value: f64,
	pub customer_order_no: String,
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub customer_price: Option<f64>,
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub shop_type: Option<String>,
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub external_biz_id: Option<String>,
}

/// Card delivered by a card order
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CardItem {
	pub card_type: i32,
	pub card_number: String,
	pub card_pwd: String,
	pub card_deadline: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Order {
	pub order_id: String,
	pub customer_order_no: String,
	pub product_id: i64,
	pub product_name: String,
	pub charge_account: String,
	pub buy_num: i64,
	pub order_type: i32,
	pub order_price: f64,
	pub order_state: String,
	// Direct-order responses spell this key "prder_state"
	#[serde(rename = "prder_state", skip_serializing)]
	prder_state: String,
	pub create_time: String,
	pub finish_time: String,
	pub area: String,
	pub server: String,
	#[serde(rename = "type")]
	pub kind: String,
	pub cards: Vec<CardItem>,
	pub operator_serial_number: String,
}

impl Order {
	pub fn state(&self) -> Option<OrderState> {
		OrderState::parse(&self.order_state)
	}

	/// Fold the misspelled state key into `order_state`
	fn normalized(mut self) -> Self {
		if self.order_state.is_empty() {
			self.order_state = std::mem::take(&mut self.prder_state);
		} else {
			self.prder_state.clear();
		}
		self
	}
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OrderExtendContent {
	pub express_number: String,
	pub recharge_description: String,
	pub external_biz_id: String,
}

/// Extended order information
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct OrderExtend {
	pub order_id: String,
	pub customer_order_no: String,
	pub order_extend_content: OrderExtendContent,
}

/// Wire form of [`OrderExtend`]; the content is itself a JSON string
#[derive(Debug, Deserialize)]
struct RawOrderExtend {
	#[serde(default)]
	order_id: String,
	#[serde(default)]
	customer_order_no: String,
	#[serde(default)]
	order_extend_content: String,
}

impl TryFrom<RawOrderExtend> for OrderExtend {
	type Error = Error;

	fn try_from(raw: RawOrderExtend) -> Result<Self> {
		let order_extend_content =
			decode_document(&raw.order_extend_content, "order_extend_content")?;

		Ok(Self {
			order_id: raw.order_id,
			customer_order_no: raw.customer_order_no,
			order_extend_content,
		})
	}
}

impl Client {
	pub async fn create_direct_order(
		&self,
		ctx: &Context,
		request: &DirectOrderRequest,
	) -> Result<Order> {
		let order: Order = self
			.execute(ctx, Method::CreateDirectOrder, Some(request))
			.await?;
		Ok(order.normalized())
	}

	pub async fn create_card_order(&self, ctx: &Context, request: &CardOrderRequest) -> Result<Order> {
		let order: Order = self.execute(ctx, Method::CreateCardOrder, Some(request)).await?;
		Ok(order.normalized())
	}

	pub async fn create_mobile_order(
		&self,
		ctx: &Context,
		request: &MobileOrderRequest,
	) -> Result<Order> {
		let order: Order = self
			.execute(ctx, Method::CreateMobileOrder, Some(request))
			.await?;
		Ok(order.normalized())
	}

	/// Look up an order by the merchant's order number (`fulu.order.info.get`)
	pub async fn query_order(&self, ctx: &Context, customer_order_no: &str) -> Result<Order> {
		let query = serde_json::json!({ "customer_order_no": customer_order_no });
		let order: Order = self.execute(ctx, Method::QueryOrder, Some(&query)).await?;
		Ok(order.normalized())
	}

	/// Look up extended order information (`fulu.order.extend.get`)
	pub async fn query_order_extend(
		&self,
		ctx: &Context,
		customer_order_no: &str,
	) -> Result<OrderExtend> {
		let query = serde_json::json!({ "customer_order_no": customer_order_no });
		let raw: RawOrderExtend = self
			.execute(ctx, Method::QueryOrderExtend, Some(&query))
			.await?;
		raw.try_into()
	}
}
