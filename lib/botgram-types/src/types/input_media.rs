// Copyright 2026 - developers of the `botgram` project.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// https://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or https://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Files and media to be sent.

use serde::{Serialize, Serializer};
use std::fmt;

/// Contents of a file to be uploaded with the request that references it.
#[derive(Clone, PartialEq, Eq)]
pub struct Upload {
    /// Name of the multipart field holding the file, referenced as `attach://<name>`.
    pub name: String,
    /// Name of the file as the recipients will see it.
    pub file_name: String,
    pub bytes: Vec<u8>,
}

impl fmt::Debug for Upload {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Upload")
            .field("name", &self.name)
            .field("file_name", &self.file_name)
            .field("bytes", &format_args!("[{} bytes]", self.bytes.len()))
            .finish()
    }
}

/// A file to be sent.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum InputFile {
    /// A file that already exists on the Telegram servers.
    FileId(String),
    /// A HTTP URL for Telegram to get the file from the Internet.
    Url(String),
    /// A new file to upload.
    Upload(Upload),
}

impl InputFile {
    pub fn file_id<S: Into<String>>(file_id: S) -> Self {
        Self::FileId(file_id.into())
    }

    pub fn url<S: Into<String>>(url: S) -> Self {
        Self::Url(url.into())
    }

    /// Creates a new upload. The `name` must be unique among all uploads of the same request.
    pub fn upload<N: Into<String>, F: Into<String>, B: Into<Vec<u8>>>(
        name: N,
        file_name: F,
        bytes: B,
    ) -> Self {
        Self::Upload(Upload {
            name: name.into(),
            file_name: file_name.into(),
            bytes: bytes.into(),
        })
    }

    pub fn as_upload(&self) -> Option<&Upload> {
        match self {
            Self::Upload(upload) => Some(upload),
            _ => None,
        }
    }
}

impl Serialize for InputFile {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Self::FileId(id) => serializer.serialize_str(id),
            Self::Url(url) => serializer.serialize_str(url),
            Self::Upload(upload) => serializer.collect_str(&format_args!("attach://{}", upload.name)),
        }
    }
}

/// Mode for parsing entities in the message text.
///
/// See <https://core.telegram.org/bots/api#formatting-options>.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub enum ParseMode {
    MarkdownV2,
    #[serde(rename = "HTML")]
    Html,
    /// Legacy mode, kept for backward compatibility.
    Markdown,
}

/// The content of a media message to be sent.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum InputMedia {
    Photo(InputMediaPhoto),
    Video(InputMediaVideo),
    Audio(InputMediaAudio),
    Document(InputMediaDocument),
}

impl InputMedia {
    /// The file to send.
    pub fn media(&self) -> &InputFile {
        match self {
            Self::Photo(photo) => &photo.media,
            Self::Video(video) => &video.media,
            Self::Audio(audio) => &audio.media,
            Self::Document(document) => &document.media,
        }
    }
}

/// A photo to be sent.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct InputMediaPhoto {
    pub media: InputFile,
    /// Caption of the photo to be sent, 0-1024 characters after entities parsing.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub caption: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parse_mode: Option<ParseMode>,
    /// Pass `true` if the photo needs to be covered with a spoiler animation.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub has_spoiler: Option<bool>,
}

impl InputMediaPhoto {
    pub fn new(media: InputFile) -> Self {
        Self {
            media,
            caption: None,
            parse_mode: None,
            has_spoiler: None,
        }
    }

    pub fn caption<S: Into<String>>(mut self, caption: S) -> Self {
        self.caption = Some(caption.into());
        self
    }

    pub fn parse_mode(mut self, parse_mode: ParseMode) -> Self {
        self.parse_mode = Some(parse_mode);
        self
    }

    pub fn spoiler(mut self) -> Self {
        self.has_spoiler = Some(true);
        self
    }
}

impl From<InputMediaPhoto> for InputMedia {
    fn from(photo: InputMediaPhoto) -> Self {
        Self::Photo(photo)
    }
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct InputMediaVideo {
    pub media: InputFile,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub caption: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parse_mode: Option<ParseMode>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub width: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub height: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub duration: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub supports_streaming: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub has_spoiler: Option<bool>,
}

impl InputMediaVideo {
    pub fn new(media: InputFile) -> Self {
        Self {
            media,
            caption: None,
            parse_mode: None,
            width: None,
            height: None,
            duration: None,
            supports_streaming: None,
            has_spoiler: None,
        }
    }
}

impl From<InputMediaVideo> for InputMedia {
    fn from(video: InputMediaVideo) -> Self {
        Self::Video(video)
    }
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct InputMediaAudio {
    pub media: InputFile,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub caption: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parse_mode: Option<ParseMode>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub duration: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub performer: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
}

impl InputMediaAudio {
    pub fn new(media: InputFile) -> Self {
        Self {
            media,
            caption: None,
            parse_mode: None,
            duration: None,
            performer: None,
            title: None,
        }
    }
}

impl From<InputMediaAudio> for InputMedia {
    fn from(audio: InputMediaAudio) -> Self {
        Self::Audio(audio)
    }
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct InputMediaDocument {
    pub media: InputFile,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub caption: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parse_mode: Option<ParseMode>,
    /// Disables automatic server-side content type detection for uploaded files.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub disable_content_type_detection: Option<bool>,
}

impl InputMediaDocument {
    pub fn new(media: InputFile) -> Self {
        Self {
            media,
            caption: None,
            parse_mode: None,
            disable_content_type_detection: None,
        }
    }
}

impl From<InputMediaDocument> for InputMedia {
    fn from(document: InputMediaDocument) -> Self {
        Self::Document(document)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn check_media_is_tagged_by_type() {
        let media = InputMedia::from(
            InputMediaPhoto::new(InputFile::file_id("AgACAgQ"))
                .caption("sunset")
                .spoiler(),
        );

        assert_eq!(
            serde_json::to_value(&media).unwrap(),
            serde_json::json!({
                "type": "photo",
                "media": "AgACAgQ",
                "caption": "sunset",
                "has_spoiler": true,
            })
        );
    }

    #[test]
    fn check_upload_is_attached_by_name() {
        let media = InputMedia::from(InputMediaDocument::new(InputFile::upload(
            "report",
            "report.pdf",
            vec![1, 2, 3],
        )));

        assert_eq!(
            serde_json::to_value(&media).unwrap(),
            serde_json::json!({ "type": "document", "media": "attach://report" })
        );
        assert_eq!(media.media().as_upload().unwrap().file_name, "report.pdf");
    }

    #[test]
    fn check_parse_mode_names() {
        assert_eq!(
            serde_json::to_string(&ParseMode::Html).unwrap(),
            "\"HTML\""
        );
        assert_eq!(
            serde_json::to_string(&ParseMode::MarkdownV2).unwrap(),
            "\"MarkdownV2\""
        );
    }
}
