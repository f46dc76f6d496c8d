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

//! Fulu command line client
//!
//! Loads the SDK configuration from a file and/or `FULU_*` environment
//! variables, performs one API call and prints the result as JSON.
//! Ctrl-C cancels the call in flight.

mod config;
mod logging;

use std::path::{Path, PathBuf};

use anyhow::{Context as _, Result};
use clap::{Parser, Subcommand};
use fulu_sdk::{
	CardOrderRequest, Client, Context, DetailFormat, DirectOrderRequest, MobileOrderRequest,
	ProductListQuery,
};
use serde::{Serialize, de::DeserializeOwned};
use tracing::{info, warn};

use crate::{config::load_config, logging::init_logging};

#[derive(Debug, Parser)]
#[command(name = "fulu", about = "Fulu open API client", version)]
struct Cli {
	/// Configuration file (TOML, YAML or JSON); FULU_* variables override it
	#[arg(long, global = true)]
	config: Option<PathBuf>,

	/// Enable debug logging, including request signing details
	#[arg(long, global = true)]
	debug: bool,

	#[command(subcommand)]
	command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
	/// Show the merchant account
	Account,
	/// List products
	Products {
		#[arg(long)]
		product_id: Option<i64>,
		#[arg(long)]
		name: Option<String>,
		#[arg(long = "type")]
		product_type: Option<String>,
		#[arg(long)]
		face_value: Option<f64>,
	},
	/// Show a single product
	Product {
		product_id: String,
		/// Return product details as JSON instead of plain text
		#[arg(long)]
		json_details: bool,
	},
	/// Show a recharge template
	Template { template_id: String },
	/// Check product stock
	Stock { product_id: String, buy_num: i64 },
	/// Look up a QQ nickname
	Qq { number: String },
	/// Look up carrier and region of a mobile number
	Mobile {
		phone: String,
		#[arg(long)]
		face_value: Option<f64>,
	},
	/// Check whether mobile recharges are under maintenance
	Maintain { phone: String, face_value: i64 },
	/// Query an order by customer order number
	Order { customer_order_no: String },
	/// Query extended order information
	OrderExtend { customer_order_no: String },
	/// Place a direct recharge order from a JSON request file
	DirectOrder { request: PathBuf },
	/// Place a card order from a JSON request file
	CardOrder { request: PathBuf },
	/// Place a mobile top-up order from a JSON request file
	MobileOrder { request: PathBuf },
}

#[tokio::main]
async fn main() -> Result<()> {
	let cli = Cli::parse();
	init_logging(cli.debug)?;

	let mut sdk_config = load_config(cli.config.as_deref())?;
	sdk_config.debug |= cli.debug;
	let client = Client::new(sdk_config).context("Failed to create client")?;
	info!(target: "fulu", "Using endpoint {}", client.config().endpoint());

	let ctx = Context::background();
	let canceller = ctx.clone();
	tokio::spawn(async move {
		if tokio::signal::ctrl_c().await.is_ok() {
			warn!(target: "fulu", "Interrupted, cancelling request");
			canceller.cancel();
		}
	});

	run(&client, &ctx, cli.command).await
}

async fn run(client: &Client, ctx: &Context, command: Command) -> Result<()> {
	match command {
		Command::Account => print(client.get_account_info(ctx).await?),
		Command::Products {
			product_id,
			name,
			product_type,
			face_value,
		} => {
			let query = ProductListQuery {
				product_id,
				product_name: name,
				product_type,
				face_value,
				..Default::default()
			};
			print(client.get_product_list(ctx, &query).await?)
		}
		Command::Product {
			product_id,
			json_details,
		} => {
			let format = json_details.then_some(DetailFormat::Json);
			print(client.get_product_info(ctx, &product_id, format).await?)
		}
		Command::Template { template_id } => {
			print(client.get_product_template(ctx, &template_id).await?)
		}
		Command::Stock {
			product_id,
			buy_num,
		} => print(client.check_product_stock(ctx, &product_id, buy_num).await?),
		Command::Qq { number } => print(client.get_qq_nickname(ctx, &number).await?),
		Command::Mobile { phone, face_value } => {
			print(client.get_mobile_info(ctx, &phone, face_value).await?)
		}
		Command::Maintain { phone, face_value } => print(
			client
				.get_mobile_maintain_status(ctx, &phone, face_value)
				.await?,
		),
		Command::Order { customer_order_no } => {
			print(client.query_order(ctx, &customer_order_no).await?)
		}
		Command::OrderExtend { customer_order_no } => {
			print(client.query_order_extend(ctx, &customer_order_no).await?)
		}
		Command::DirectOrder { request } => {
			let request: DirectOrderRequest = read_request(&request)?;
			print(client.create_direct_order(ctx, &request).await?)
		}
		Command::CardOrder { request } => {
			let request: CardOrderRequest = read_request(&request)?;
			print(client.create_card_order(ctx, &request).await?)
		}
		Command::MobileOrder { request } => {
			let request: MobileOrderRequest = read_request(&request)?;
			print(client.create_mobile_order(ctx, &request).await?)
		}
	}
}

fn read_request<T: DeserializeOwned>(path: &Path) -> Result<T> {
	let raw = std::fs::read_to_string(path)
		.with_context(|| format!("Failed to read request file {}", path.display()))?;
	serde_json::from_str(&raw)
		.with_context(|| format!("Invalid request file {}", path.display()))
}

fn print<T: Serialize>(value: T) -> Result<()> {
	let output = serde_json::to_string_pretty(&value).context("Failed to render result")?;
	println!("{}", output);
	Ok(())
}

#[cfg(test)]
mod tests {
	use clap::CommandFactory;

	use super::*;

	#[test]
	fn test_cli_definition() {
		Cli::command().debug_assert();
	}

	#[test]
	fn test_parse_subcommands() {
		let cli = Cli::try_parse_from(["fulu", "--debug", "stock", "42", "3"]).unwrap();
		assert!(cli.debug);
		assert!(matches!(
			cli.command,
			Command::Stock { ref product_id, buy_num: 3 } if product_id == "42"
		));

		let cli = Cli::try_parse_from(["fulu", "products", "--type", "直充"]).unwrap();
		assert!(matches!(
			cli.command,
			Command::Products { product_type: Some(ref t), .. } if t == "直充"
		));

		let cli = Cli::try_parse_from(["fulu", "order-extend", "C1", "--config", "fulu.toml"])
			.unwrap();
		assert_eq!(cli.config, Some(PathBuf::from("fulu.toml")));
	}

	#[test]
	fn test_read_request_file() {
		let path = std::env::temp_dir().join(format!("fulu-card-{}.json", std::process::id()));
		std::fs::write(
			&path,
			r#"{"product_id":8,"buy_num":2,"customer_order_no":"C2"}"#,
		)
		.unwrap();
		let request: CardOrderRequest = read_request(&path).unwrap();
		std::fs::remove_file(&path).ok();

		assert_eq!(request.product_id, 8);
		assert_eq!(request.customer_price, None);
	}
}
