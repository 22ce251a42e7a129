// Copyright 2026 - developers of the `botgram` project.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// https://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or https://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! This library contains the Rust definitions for the [Telegram Bot API]
//! [`types`] and [`methods`] in the form of `struct` and `enum`.
//!
//! Objects received from the API implement [`serde::Deserialize`] (and
//! [`serde::Serialize`], so they can be stored and forwarded). Methods only
//! implement [`serde::Serialize`] and the [`RemoteCall`] trait, which tells
//! the sender which endpoint to call and what the response will look like.
//!
//! Field names follow the API documentation, with a few exceptions to avoid
//! Rust keywords (`type` becomes `kind`) or repeated prefixes
//! (`message_id` becomes `id` inside a [`types::Message`]).
//!
//! [Telegram Bot API]: https://core.telegram.org/bots/api

#![deny(unsafe_code)]

pub mod methods;
pub mod types;

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use std::time::Duration;

pub use types::Upload;

/// Structures implementing this trait are suitable to be sent to the Bot API,
/// and know both the name of the method they invoke and the type of the result.
pub trait RemoteCall: Serialize {
    /// Name of the method, as it appears in the request URL.
    const METHOD: &'static str;

    /// The type of the `result` value in a successful response.
    type Return: DeserializeOwned;

    /// Files that must be uploaded along with the request.
    ///
    /// When this is not empty, the request has to be sent as a multipart
    /// form, and the serialized fields reference the files by their
    /// [`Upload::name`] through `attach://` URIs.
    fn uploads(&self) -> Vec<&Upload> {
        Vec::new()
    }

    /// How long the server may hold the request before answering.
    ///
    /// Only long-polling methods return `Some`, and the transport must wait
    /// at least this long on top of its usual timeout.
    fn long_poll(&self) -> Option<Duration> {
        None
    }
}

/// The envelope every Bot API response is wrapped in.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct ApiResponse<T> {
    pub ok: bool,
    pub result: Option<T>,
    pub description: Option<String>,
    pub error_code: Option<i32>,
    pub parameters: Option<ResponseParameters>,
}

/// Describes why a request was unsuccessful, and how to recover from it.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResponseParameters {
    /// The group has been migrated to a supergroup with this identifier.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub migrate_to_chat_id: Option<i64>,
    /// In case of exceeding flood control, the number of seconds left to wait
    /// before the request can be repeated.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub retry_after: Option<u32>,
}
