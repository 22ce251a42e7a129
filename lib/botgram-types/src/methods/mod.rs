// Copyright 2026 - developers of the `botgram` project.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// https://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or https://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Requests that can be sent to the Bot API.
//!
//! See <https://core.telegram.org/bots/api#available-methods>.

mod bots;
mod messages;
mod updates;

pub use bots::{AnswerCallbackQuery, GetMe};
pub use messages::{
    EditInlineMessageLiveLocation, EditMessageLiveLocation, LiveLocation, SendMediaGroup,
    SendMessage,
};
pub use updates::{DeleteWebhook, GetUpdates, LATEST_UPDATE_OFFSET};
