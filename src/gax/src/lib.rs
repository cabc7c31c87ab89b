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

//! Tencent Cloud APIs helpers.
//!
//! This crate contains the types and functions shared by the generated Tencent
//! Cloud client libraries: the JSON codec for requests and responses, the
//! strict decoder that rejects unknown request keys, the registry of
//! operations, and the per-call context used to hand encoded requests to a
//! transport.
//!
//! The codec functions are pure: they hold no state, perform no I/O, and do
//! not log. Only the [call] module emits `tracing` events.

/// An alias of [std::result::Result] where the error is always [crate::error::Error].
///
/// This is the result type used by all functions in the client libraries.
pub type Result<T> = std::result::Result<T, crate::error::Error>;

/// The core error types used by generated clients.
pub mod error;

/// Encode and decode request and response messages.
pub mod codec;

/// The trait implemented by every request message.
pub mod request;

/// Lookup tables describing the operations of a service.
pub mod registry;

/// Client configuration.
pub mod options;

/// Per-call context and transport hand-off.
pub mod call;

pub mod response;
