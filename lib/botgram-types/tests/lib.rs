// Copyright 2026 - developers of the `botgram` project.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// https://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or https://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.
use botgram_types::types::{
    ButtonAction, ChatKind, MessageOrigin, Update, UpdateKind, UpdateType,
};
use botgram_types::{ApiResponse, ResponseParameters};
use serde_json::json;

include!("../../includes/check_deps_documented.rs");

fn private_chat() -> serde_json::Value {
    json!({ "id": 1234, "type": "private", "first_name": "Ada" })
}

fn sender() -> serde_json::Value {
    json!({ "id": 1234, "is_bot": false, "first_name": "Ada", "username": "ada" })
}

#[test]
fn test_decode_command_message() {
    let update: Update = serde_json::from_value(json!({
        "update_id": 501,
        "message": {
            "message_id": 7,
            "from": sender(),
            "chat": private_chat(),
            "date": 1700000000,
            "text": "🙂 /start now",
            "entities": [{ "type": "bot_command", "offset": 3, "length": 6 }],
        }
    }))
    .unwrap();

    assert_eq!(update.id, 501);
    assert_eq!(update.update_type(), Some(UpdateType::Message));

    let message = update.message().unwrap();
    assert_eq!(message.id, 7);
    assert_eq!(message.chat.kind, ChatKind::Private);
    assert_eq!(message.date.timestamp(), 1700000000);
    assert!(!message.is_from_bot());

    let entity = &message.entities.as_ref().unwrap()[0];
    assert_eq!(entity.extract(message.text()), Some("/start"));
}

#[test]
fn test_decode_forwarded_audio() {
    let update: Update = serde_json::from_value(json!({
        "update_id": 502,
        "channel_post": {
            "message_id": 90,
            "chat": { "id": -1001, "type": "channel", "title": "Tunes" },
            "date": 1700000100,
            "forward_origin": {
                "type": "channel",
                "date": 1690000000,
                "chat": { "id": -1002, "type": "channel", "title": "Archive" },
                "message_id": 12,
                "author_signature": "DJ",
            },
            "audio": {
                "file_id": "CQACAgQ",
                "file_unique_id": "AgAD",
                "duration": 215,
                "performer": "Someone",
                "title": "Something",
                "mime_type": "audio/mpeg",
                "file_size": 3441234,
            },
            "caption": "Friday mix",
        }
    }))
    .unwrap();

    assert!(matches!(update.kind, UpdateKind::ChannelPost(_)));
    let message = update.message().unwrap();
    assert_eq!(message.text(), "Friday mix");
    assert!(message.is_forwarded());

    match message.forward_origin.as_ref().unwrap() {
        MessageOrigin::Channel {
            message_id,
            author_signature,
            ..
        } => {
            assert_eq!(*message_id, 12);
            assert_eq!(author_signature.as_deref(), Some("DJ"));
        }
        origin => panic!("unexpected origin: {origin:?}"),
    }
    assert_eq!(
        message.forward_origin.as_ref().unwrap().sender_name(),
        Some("Archive".to_string())
    );

    let audio = message.audio.as_ref().unwrap();
    assert_eq!(audio.duration, 215);
    assert_eq!(audio.file_size, Some(3441234));
}

#[test]
fn test_decode_chosen_inline_result() {
    let update: Update = serde_json::from_value(json!({
        "update_id": 503,
        "chosen_inline_result": {
            "result_id": "r-1",
            "from": sender(),
            "location": { "latitude": 52.37, "longitude": 4.89 },
            "inline_message_id": "AAEAAQ",
            "query": "weather",
        }
    }))
    .unwrap();

    match update.kind {
        UpdateKind::ChosenInlineResult(result) => {
            assert_eq!(result.result_id, "r-1");
            assert_eq!(result.inline_message_id.as_deref(), Some("AAEAAQ"));
            assert_eq!(result.location.unwrap().latitude, 52.37);
        }
        kind => panic!("unexpected update kind: {kind:?}"),
    }
}

#[test]
fn test_decode_callback_query_keyboard() {
    let update: Update = serde_json::from_value(json!({
        "update_id": 504,
        "callback_query": {
            "id": "4382",
            "from": sender(),
            "chat_instance": "-53",
            "data": "vote:yes",
            "message": {
                "message_id": 8,
                "chat": private_chat(),
                "date": 1700000200,
                "text": "Vote?",
                "reply_markup": {
                    "inline_keyboard": [[
                        { "text": "Yes", "callback_data": "vote:yes" },
                        { "text": "Docs", "url": "https://core.telegram.org" },
                        { "text": "Open", "web_app": { "url": "https://example.org" } },
                    ]]
                }
            }
        }
    }))
    .unwrap();

    let message = update.message().unwrap();
    let row = &message.reply_markup.as_ref().unwrap().inline_keyboard[0];
    assert_eq!(
        row[0].action,
        ButtonAction::CallbackData("vote:yes".to_string())
    );
    assert!(matches!(row[1].action, ButtonAction::Url(_)));
    assert!(matches!(row[2].action, ButtonAction::WebApp(_)));
}

#[test]
fn test_update_batch_reencodes() {
    let batch = json!([
        {
            "update_id": 10,
            "edited_message": {
                "message_id": 3,
                "chat": private_chat(),
                "date": 1700000000,
                "edit_date": 1700000060,
                "text": "fixed typo",
            }
        },
        {
            "update_id": 11,
            "my_chat_member": { "chat": private_chat(), "date": 1700000000 }
        }
    ]);

    let updates: Vec<Update> = serde_json::from_value(batch.clone()).unwrap();
    assert_eq!(
        updates.iter().map(Update::update_type).collect::<Vec<_>>(),
        [
            Some(UpdateType::EditedMessage),
            Some(UpdateType::MyChatMember)
        ]
    );
    assert_eq!(serde_json::to_value(&updates).unwrap(), batch);
}

#[test]
fn test_decode_api_responses() {
    let ok: ApiResponse<bool> =
        serde_json::from_str(r#"{"ok":true,"result":true}"#).unwrap();
    assert_eq!(ok.result, Some(true));

    let flood: ApiResponse<bool> = serde_json::from_str(
        r#"{"ok":false,"error_code":429,"description":"Too Many Requests: retry after 5","parameters":{"retry_after":5}}"#,
    )
    .unwrap();
    assert!(!flood.ok);
    assert_eq!(flood.error_code, Some(429));
    assert_eq!(
        flood.parameters,
        Some(ResponseParameters {
            migrate_to_chat_id: None,
            retry_after: Some(5),
        })
    );
}

fn decode_envelope<T: serde::de::DeserializeOwned>(body: &serde_json::Value) -> ApiResponse<T> {
    serde_json::from_value(body.clone()).unwrap()
}

#[test]
fn test_batch_survives_undecodable_payload() {
    let response: ApiResponse<Vec<Update>> = decode_envelope(&json!({
        "ok": true,
        "result": [
            { "update_id": 500, "poll": { "id": "1" } },
            {
                "update_id": 501,
                "message": {
                    "message_id": 9,
                    "chat": private_chat(),
                    "date": 1700000000,
                    "forward_origin": { "type": "story", "date": 1700000000 },
                }
            },
            { "update_id": 502, "poll": { "id": "2" } },
        ]
    }));

    let updates = response.result.unwrap();
    let ids = updates.iter().map(|update| update.id).collect::<Vec<_>>();
    assert_eq!(ids, [500, 501, 502]);
    assert_eq!(updates[1].update_type(), Some(UpdateType::Message));
    assert!(matches!(updates[1].kind, UpdateKind::Other { .. }));
}

#[test]
fn test_error_envelope_without_result() {
    let response: ApiResponse<Vec<Update>> = decode_envelope(&json!({
        "ok": false,
        "error_code": 409,
        "description": "Conflict: terminated by other getUpdates request",
    }));
    assert_eq!(response.result, None);
    assert_eq!(response.error_code, Some(409));
    assert_eq!(response.parameters, None);
}
