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

//! Typed operations
//!
//! Each operation serializes its request into `biz_content`, calls
//! [`crate::Client::execute`] and returns the decoded result. Business
//! validation is left to the service.

pub mod account;
pub mod mobile;
pub mod order;
pub mod product;

pub use account::*;
pub use mobile::*;
pub use order::*;
pub use product::*;
