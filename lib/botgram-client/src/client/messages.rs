// Copyright 2026 - developers of the `botgram` project.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// https://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or https://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Methods related to sending and editing messages.

use super::Client;
use botgram_sender::InvocationError;
use botgram_types::methods::{
    EditInlineMessageLiveLocation, EditMessageLiveLocation, LiveLocation, SendMediaGroup,
    SendMessage,
};
use botgram_types::types::{ChatId, InputMedia, Message};
use log::warn;

impl Client {
    /// Sends a text message to the desired chat.
    ///
    /// Use [`Self::invoke`] with a [`SendMessage`] to customize it further, for example
    /// to attach a keyboard.
    ///
    /// # Examples
    ///
    /// ```
    /// # async fn f(client: botgram_client::Client) -> Result<(), Box<dyn std::error::Error>> {
    /// let message = client.send_message("@botgram", "Boring text message :-(").await?;
    /// println!("Sent message with id {}", message.id);
    /// # Ok(())
    /// # }
    /// ```
    pub async fn send_message<C: Into<ChatId>, T: Into<String>>(
        &self,
        chat: C,
        text: T,
    ) -> Result<Message, InvocationError> {
        self.invoke(&SendMessage::new(chat, text)).await
    }

    /// Sends a group of media as an album.
    ///
    /// The media must contain between 2 and 10 items, and documents or audio files can
    /// only be grouped with others of their same type.
    pub async fn send_media_group<C: Into<ChatId>, M: IntoIterator<Item = InputMedia>>(
        &self,
        chat: C,
        media: M,
    ) -> Result<Vec<Message>, InvocationError> {
        let request = SendMediaGroup::new(chat, media);
        if !(2..=10).contains(&request.media.len()) {
            warn!(
                "sending media group with {} items, which the server will likely reject",
                request.media.len()
            );
        }
        self.invoke(&request).await
    }

    /// Moves a live location sent by the bot, returning the edited message.
    pub async fn edit_message_live_location<C: Into<ChatId>>(
        &self,
        chat: C,
        message_id: i32,
        location: LiveLocation,
    ) -> Result<Message, InvocationError> {
        self.invoke(&EditMessageLiveLocation::new(chat, message_id, location))
            .await
    }

    /// Moves a live location sent via the bot in inline mode.
    pub async fn edit_inline_message_live_location<S: Into<String>>(
        &self,
        inline_message_id: S,
        location: LiveLocation,
    ) -> Result<(), InvocationError> {
        self.invoke(&EditInlineMessageLiveLocation::new(
            inline_message_id,
            location,
        ))
        .await?;
        Ok(())
    }
}
