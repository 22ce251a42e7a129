// Copyright 2026 - developers of the `botgram` project.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// https://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or https://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.
use crate::RemoteCall;
use crate::types::User;
use serde::Serialize;

/// A simple method for testing your bot's authentication token.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
pub struct GetMe {}

impl RemoteCall for GetMe {
    const METHOD: &'static str = "getMe";
    type Return = User;
}

/// Send answers to callback queries sent from inline keyboards.
///
/// The answer will be displayed to the user as a notification at the top of the
/// chat screen or as an alert.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct AnswerCallbackQuery {
    pub callback_query_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub show_alert: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    /// The maximum amount of time in seconds that the result may be cached client-side.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cache_time: Option<u32>,
}

impl AnswerCallbackQuery {
    pub fn new<S: Into<String>>(callback_query_id: S) -> Self {
        Self {
            callback_query_id: callback_query_id.into(),
            ..Default::default()
        }
    }

    pub fn text<S: Into<String>>(mut self, text: S) -> Self {
        self.text = Some(text.into());
        self
    }

    /// Show the text as an alert instead of a notification.
    pub fn alert(mut self) -> Self {
        self.show_alert = Some(true);
        self
    }
}

impl RemoteCall for AnswerCallbackQuery {
    const METHOD: &'static str = "answerCallbackQuery";
    type Return = bool;
}
