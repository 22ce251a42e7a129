// Copyright 2026 - developers of the `botgram` project.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// https://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or https://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.
use super::Client;
use botgram_sender::InvocationError;
use botgram_types::methods::{AnswerCallbackQuery, GetMe};
use botgram_types::types::{CallbackQuery, User};

impl Client {
    /// Returns information about the bot the client is acting on behalf of.
    ///
    /// Useful to check that the token is valid.
    pub async fn get_me(&self) -> Result<User, InvocationError> {
        self.invoke(&GetMe {}).await
    }

    /// Answers a callback query, so the user's client stops showing a progress bar.
    ///
    /// Every callback query must be answered, even if there is nothing to say.
    ///
    /// # Examples
    ///
    /// ```
    /// # async fn f(client: botgram_client::Client, query: botgram_client::types::CallbackQuery)
    /// # -> Result<(), Box<dyn std::error::Error>> {
    /// use botgram_client::methods::AnswerCallbackQuery;
    ///
    /// client
    ///     .answer_callback_query(AnswerCallbackQuery::new(&query.id).text("Done!"))
    ///     .await?;
    /// # Ok(())
    /// # }
    /// ```
    pub async fn answer_callback_query(
        &self,
        answer: AnswerCallbackQuery,
    ) -> Result<(), InvocationError> {
        self.invoke(&answer).await?;
        Ok(())
    }

    /// Answers a callback query without showing anything to the user.
    pub async fn ack_callback_query(&self, query: &CallbackQuery) -> Result<(), InvocationError> {
        self.answer_callback_query(AnswerCallbackQuery::new(query.id.as_str()))
            .await
    }
}
