// Copyright 2026 - developers of the `botgram` project.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// https://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or https://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! # Brief on the Bot API
//!
//! This library is a high-level implementation to build bots for the [Telegram Bot API].
//!
//! In order to create a bot, you will need to talk to [@BotFather] and obtain a token first.
//! Then, create a [`Sender`] with that token, wrap it in a [`Client`] and start making calls.
//!
//! # Receiving updates
//!
//! Bots learn about new messages, button presses and everything else through updates.
//! [`Client::stream_updates`] long-polls the server for them, keeping track of which ones
//! were already handed out. Where to start and which updates to receive is configured
//! through the [`client::ReceiverOptions`], which can be stored and loaded with `serde`
//! to resume a previous session.
//!
//! # Method cost
//!
//! Calling methods too often will result in the API returning flood control errors
//! (`429 Too Many Requests`) telling how long to wait before the method can be called again.
//! Because they are expected, the default [`client::ClientConfiguration`] will sleep on
//! small flood errors to prevent interruption of simple bots.
//!
//! # Re-exports
//!
//! The [`InvocationError`] is re-exported at the top level, as all methods that interact
//! with the API eventually need to invoke a request and may thus fail. You may also use
//! the [`Result`] alias, which has the `InvocationError` set as its error variant.
//!
//! The rest of `botgram-sender` is re-exported under [`sender`], and the Bot API objects and
//! requests from `botgram-types` under [`types`] and [`methods`]. If the [`Client`] is missing
//! a method to do what you need, you may directly [`Client::invoke`] any of the [`methods`].
//!
//! [Telegram Bot API]: https://core.telegram.org/bots/api
//! [@BotFather]: https://t.me/BotFather
//! [`Sender`]: sender::Sender

#![deny(unsafe_code)]

pub mod client;

pub use botgram_sender::{self as sender, ApiError, InvocationError};
pub use botgram_types::{methods, types};
pub use client::{Client, UpdateStream};

/// Alias for [`std::result::Result`] with the error set to [`InvocationError`].
pub type Result<T> = std::result::Result<T, InvocationError>;
