// Copyright 2026 - developers of the `botgram` project.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// https://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or https://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Objects exchanged with the Bot API.
//!
//! See <https://core.telegram.org/bots/api#available-types>.

mod chat;
mod inline;
mod input_media;
mod media;
mod message;
mod message_origin;
mod update;
mod user;

pub use chat::{Chat, ChatId, ChatKind};
pub use inline::{
    ButtonAction, CallbackQuery, ChosenInlineResult, InlineKeyboardButton, InlineKeyboardMarkup,
    InlineQuery,
};
pub use input_media::{
    InputFile, InputMedia, InputMediaAudio, InputMediaDocument, InputMediaPhoto, InputMediaVideo,
    ParseMode, Upload,
};
pub use media::{Audio, Document, Location, PhotoSize, Video, Voice};
pub use message::{Message, MessageEntity};
pub use message_origin::MessageOrigin;
pub use update::{Update, UpdateKind, UpdateType, UpdateTypeParseError};
pub use user::User;
