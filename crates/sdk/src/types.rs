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

//! Enumerations used by the service
//!
//! Result structs keep these values as raw strings so an unexpected value
//! never fails decoding; the typed forms are available through accessors.

use serde::{Serialize, Serializer};

/// Product sale status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SaleStatus {
	OnSale,
	OffSale,
	Maintenance,
	StockMaintenance,
}

impl SaleStatus {
	pub fn as_str(&self) -> &'static str {
		match self {
			SaleStatus::OnSale => "上架",
			SaleStatus::OffSale => "下架",
			SaleStatus::Maintenance => "维护中",
			SaleStatus::StockMaintenance => "库存维护",
		}
	}

	pub fn parse(value: &str) -> Option<Self> {
		match value {
			"上架" => Some(SaleStatus::OnSale),
			"下架" => Some(SaleStatus::OffSale),
			"维护中" => Some(SaleStatus::Maintenance),
			"库存维护" => Some(SaleStatus::StockMaintenance),
			_ => None,
		}
	}
}

/// Product stock status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StockStatus {
	Enough,
	OutOfStock,
	Alarm,
}

impl StockStatus {
	pub fn as_str(&self) -> &'static str {
		match self {
			StockStatus::Enough => "充足",
			StockStatus::OutOfStock => "断货",
			StockStatus::Alarm => "警报",
		}
	}

	pub fn parse(value: &str) -> Option<Self> {
		match value {
			"充足" => Some(StockStatus::Enough),
			"断货" => Some(StockStatus::OutOfStock),
			"警报" => Some(StockStatus::Alarm),
			_ => None,
		}
	}
}

/// Order processing state
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OrderState {
	Success,
	Processing,
	Failed,
	Untreated,
}

impl OrderState {
	pub fn as_str(&self) -> &'static str {
		match self {
			OrderState::Success => "success",
			OrderState::Processing => "processing",
			OrderState::Failed => "failed",
			OrderState::Untreated => "untreated",
		}
	}

	pub fn parse(value: &str) -> Option<Self> {
		match value {
			"success" => Some(OrderState::Success),
			"processing" => Some(OrderState::Processing),
			"failed" => Some(OrderState::Failed),
			"untreated" => Some(OrderState::Untreated),
			_ => None,
		}
	}

	/// Whether the order has reached a final state
	pub fn is_final(&self) -> bool {
		matches!(self, OrderState::Success | OrderState::Failed)
	}
}

/// Mobile carrier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MobileSpType {
	ChinaMobile,
	ChinaTelecom,
	ChinaUnicom,
}

impl MobileSpType {
	pub fn as_str(&self) -> &'static str {
		match self {
			MobileSpType::ChinaMobile => "1",
			MobileSpType::ChinaTelecom => "2",
			MobileSpType::ChinaUnicom => "3",
		}
	}

	pub fn parse(value: &str) -> Option<Self> {
		match value {
			"1" => Some(MobileSpType::ChinaMobile),
			"2" => Some(MobileSpType::ChinaTelecom),
			"3" => Some(MobileSpType::ChinaUnicom),
			_ => None,
		}
	}
}

/// Mobile recharge channel state
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MaintainState {
	Normal,
	Maintenance,
}

impl MaintainState {
	pub fn as_str(&self) -> &'static str {
		match self {
			MaintainState::Normal => "正常",
			MaintainState::Maintenance => "维护",
		}
	}

	pub fn parse(value: &str) -> Option<Self> {
		match value {
			"正常" => Some(MaintainState::Normal),
			"维护" => Some(MaintainState::Maintenance),
			_ => None,
		}
	}
}

/// Format of the product `details` field
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum DetailFormat {
	#[default]
	Plain = 0,
	Json = 1,
}

impl Serialize for DetailFormat {
	fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
		serializer.serialize_u8(*self as u8)
	}
}
