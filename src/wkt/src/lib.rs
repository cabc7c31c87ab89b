// Copyright 2025 Google LLC
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     https://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Well-known-types for Tencent Cloud APIs.
//!
//! Every Tencent Cloud API exchanges JSON objects with PascalCase member
//! names. The shapes in this crate are shared by many products (for example
//! resource [Tag]s and query [Filter]s), and the [Message][message::Message]
//! trait is implemented by every request, response, and nested shape.
//!
//! The crate also exposes a few serde adapters used by the generated code.
//! These live in the [internal] module and are not intended for general use.

mod common;
pub use crate::common::*;
pub mod message;

#[doc(hidden)]
pub mod internal;
