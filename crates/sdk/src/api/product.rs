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

//! Product catalogue operations

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::client::Client;
use crate::context::Context;
use crate::envelope::Method;
use crate::error::Result;
use crate::types::{DetailFormat, SaleStatus, StockStatus};

/// Filters for the product list; unset filters are not sent
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ProductListQuery {
	#[serde(skip_serializing_if = "Option::is_none")]
	pub product_id: Option<i64>,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub product_name: Option<String>,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub product_type: Option<String>,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub face_value: Option<f64>,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub first_category_id: Option<i64>,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub second_category_id: Option<i64>,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub third_category_id: Option<i64>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProductListItem {
	pub product_id: i64,
	pub product_name: String,
	pub product_type: String,
	pub face_value: f64,
	pub purchase_price: f64,
	pub sales_status: String,
	pub stock_status: String,
	pub template_id: String,
	pub details: String,
}

impl ProductListItem {
	pub fn sale_state(&self) -> Option<SaleStatus> {
		SaleStatus::parse(&self.sales_status)
	}

	pub fn stock_state(&self) -> Option<StockStatus> {
		StockStatus::parse(&self.stock_status)
	}
}

#[derive(Debug, Serialize)]
struct ProductInfoQuery<'a> {
	product_id: &'a str,
	#[serde(skip_serializing_if = "Option::is_none")]
	detail_format: Option<DetailFormat>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProductInfo {
	pub product_id: i64,
	pub product_name: String,
	pub face_value: f64,
	pub product_type: String,
	pub purchase_price: f64,
	pub template_id: String,
	pub stock_status: String,
	pub sales_status: String,
	pub details: String,
	pub four_category_icon: String,
	pub detail_type: i32,
}

impl ProductInfo {
	pub fn sale_state(&self) -> Option<SaleStatus> {
		SaleStatus::parse(&self.sales_status)
	}

	pub fn stock_state(&self) -> Option<StockStatus> {
		StockStatus::parse(&self.stock_status)
	}
}

/// Recharge template describing the inputs a direct order needs
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct ProductTemplate {
	pub address_id: String,
	pub element_info: TemplateElementInfo,
	pub address_name: String,
	/// Reserved by the service
	pub is_service_area: bool,
	// The service spells this key "Tempalte"
	#[serde(rename = "GameTempaltePreviewList")]
	pub game_template_preview_list: Vec<TemplateGameItem>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct TemplateElementInfo {
	pub inputs: Vec<TemplateInput>,
	pub charge_num: TemplateChargeNum,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct TemplateInput {
	#[serde(rename = "Type")]
	pub kind: String,
	pub id: String,
	pub name: String,
	pub sort_id: i32,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct TemplateChargeNum {
	pub id: String,
	pub name: String,
	pub value: String,
	pub unit: TemplateChargeUnit,
	#[serde(rename = "Type")]
	pub kind: String,
	pub sort_id: i32,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TemplateChargeUnit {
	#[serde(rename = "defaultUint")]
	pub default_unit: Value,
	#[serde(rename = "defalutUnitAfter")]
	pub default_unit_after: Value,
	#[serde(rename = "defalutUnitRatio")]
	pub default_unit_ratio: f64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TemplateGameItem {
	#[serde(rename = "ChargeGame")]
	pub charge_game: String,
	#[serde(rename = "gameList")]
	pub game_list: TemplateGameList,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TemplateGameList {
	#[serde(rename = "ChargeRegion")]
	pub charge_region: Vec<TemplateChargeRegion>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TemplateChargeRegion {
	pub name: String,
	pub code: Value,
	#[serde(rename = "ChargeServer")]
	pub charge_server: Vec<TemplateChargeServer>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TemplateChargeServer {
	pub code: Value,
	pub name: String,
	#[serde(rename = "ChargeType")]
	pub charge_type: Vec<Value>,
}

#[derive(Debug, Serialize)]
struct StockCheckQuery<'a> {
	buy_num: i64,
	product_id: &'a str,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StockCheckResult {
	pub stock_status: String,
	pub product_id: i64,
}

impl StockCheckResult {
	pub fn stock_state(&self) -> Option<StockStatus> {
		StockStatus::parse(&self.stock_status)
	}
}

impl Client {
	/// List products matching `query` (`fulu.goods.list.get`)
	pub async fn get_product_list(
		&self,
		ctx: &Context,
		query: &ProductListQuery,
	) -> Result<Vec<ProductListItem>> {
		self.execute(ctx, Method::GetProductList, Some(query)).await
	}

	/// Fetch a single product (`fulu.goods.info.get`)
	pub async fn get_product_info(
		&self,
		ctx: &Context,
		product_id: &str,
		detail_format: Option<DetailFormat>,
	) -> Result<ProductInfo> {
		let query = ProductInfoQuery {
			product_id,
			detail_format,
		};
		self.execute(ctx, Method::GetProductInfo, Some(&query)).await
	}

	/// Fetch a recharge template (`fulu.goods.template.get`)
	pub async fn get_product_template(
		&self,
		ctx: &Context,
		template_id: &str,
	) -> Result<ProductTemplate> {
		let query = serde_json::json!({ "template_id": template_id });
		self.execute(ctx, Method::GetProductTemplate, Some(&query)).await
	}

	/// Check whether `buy_num` units are in stock (`fulu.goods.stock.check`)
	pub async fn check_product_stock(
		&self,
		ctx: &Context,
		product_id: &str,
		buy_num: i64,
	) -> Result<StockCheckResult> {
		let query = StockCheckQuery {
			buy_num,
			product_id,
		};
		self.execute(ctx, Method::CheckProductStock, Some(&query)).await
	}
}
