// Copyright 2026 - developers of the `botgram` project.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// https://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or https://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! This library sends [`RemoteCall`] requests to the Telegram Bot API
//! over HTTPS and decodes their responses.
//!
//! It makes no attempt at retrying failed requests. That is left to the
//! layer above, which knows whether a request is safe to repeat.

#![deny(unsafe_code)]

mod configuration;
mod errors;

pub use configuration::{ConnectionParams, DEFAULT_API_URL};
pub use errors::{ApiError, InvocationError};

use botgram_types::{ApiResponse, RemoteCall, Upload};
use log::{debug, trace};
use reqwest::StatusCode;
use reqwest::header::CONTENT_TYPE;
use reqwest::multipart::{Form, Part};
use serde::de::DeserializeOwned;
use std::fmt;
use std::time::Duration;
use url::Url;

/// Sends requests to the Bot API on behalf of one bot.
///
/// Cloning is cheap, and clones share the underlying connection pool.
#[derive(Clone)]
pub struct Sender {
    http: reqwest::Client,
    // `{api_url}/bot{token}/`, never logged
    endpoint: Url,
    params: ConnectionParams,
}

impl Sender {
    /// Creates a sender for the bot with the given token, talking to the public server.
    pub fn new(token: &str) -> Result<Self, InvocationError> {
        Self::with_configuration(token, ConnectionParams::default())
    }

    pub fn with_configuration(
        token: &str,
        params: ConnectionParams,
    ) -> Result<Self, InvocationError> {
        // Tokens contain a colon, which would otherwise be parsed as a scheme.
        let endpoint = params.api_url.join(&format!("./bot{token}/"))?;
        let http = reqwest::Client::builder()
            .user_agent(params.user_agent.clone())
            .build()?;

        debug!("created sender for {}", params.api_url);
        Ok(Self {
            http,
            endpoint,
            params,
        })
    }

    pub fn params(&self) -> &ConnectionParams {
        &self.params
    }

    /// Invokes a single request, without retrying.
    ///
    /// Requests carrying uploads are sent as a multipart form, and every
    /// other request as a JSON body.
    pub async fn invoke<R: RemoteCall>(&self, request: &R) -> Result<R::Return, InvocationError> {
        let url = self.method_url(R::METHOD)?;
        let timeout = self.timeout_for(request);
        let uploads = request.uploads();

        let builder = self.http.post(url).timeout(timeout);
        let builder = if uploads.is_empty() {
            let body = serde_json::to_vec(request).map_err(InvocationError::Serialize)?;
            trace!(
                "invoking {} with body {}",
                R::METHOD,
                String::from_utf8_lossy(&body)
            );
            builder.header(CONTENT_TYPE, "application/json").body(body)
        } else {
            debug!("invoking {} with {} upload(s)", R::METHOD, uploads.len());
            builder.multipart(multipart_form(request, &uploads)?)
        };

        let response = builder.send().await?;
        let status = response.status();
        let body = response.bytes().await?;
        debug!(
            "{} answered with status {} ({} bytes)",
            R::METHOD,
            status,
            body.len()
        );
        trace!("{} response: {}", R::METHOD, String::from_utf8_lossy(&body));

        decode_response(status, &body)
    }
}

impl Sender {
    fn method_url(&self, method: &str) -> Result<Url, InvocationError> {
        Ok(self.endpoint.join(method)?)
    }

    /// Long-polling requests may be held by the server on top of the usual timeout.
    fn timeout_for<R: RemoteCall>(&self, request: &R) -> Duration {
        self.params.request_timeout + request.long_poll().unwrap_or_default()
    }
}

impl fmt::Debug for Sender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Sender")
            .field("api_url", &self.params.api_url.as_str())
            .field("request_timeout", &self.params.request_timeout)
            .finish_non_exhaustive()
    }
}

/// Decodes the response envelope of a request.
///
/// The body is expected to be JSON even for failed requests. If it is not,
/// the HTTP status is reported as an [`ApiError`] instead.
pub fn decode_response<T: DeserializeOwned>(
    status: StatusCode,
    body: &[u8],
) -> Result<T, InvocationError> {
    let response = match serde_json::from_slice::<ApiResponse<T>>(body) {
        Ok(response) => response,
        Err(err) if status.is_success() => return Err(InvocationError::Deserialize(err)),
        Err(_) => {
            return Err(ApiError::new(
                i32::from(status.as_u16()),
                status
                    .canonical_reason()
                    .unwrap_or("Unknown Status")
                    .to_string(),
                None,
            )
            .into());
        }
    };

    if response.ok {
        response.result.ok_or_else(|| {
            InvocationError::Deserialize(serde::de::Error::missing_field("result"))
        })
    } else {
        Err(ApiError::new(
            response
                .error_code
                .unwrap_or_else(|| i32::from(status.as_u16())),
            response.description.unwrap_or_default(),
            response.parameters,
        )
        .into())
    }
}

/// Form fields of a request, every non-string value encoded as JSON.
fn form_fields<R: RemoteCall>(request: &R) -> Result<Vec<(String, String)>, InvocationError> {
    let fields = match serde_json::to_value(request).map_err(InvocationError::Serialize)? {
        serde_json::Value::Object(fields) => fields,
        _ => {
            return Err(InvocationError::Serialize(serde::ser::Error::custom(
                "request is not an object",
            )));
        }
    };

    Ok(fields
        .into_iter()
        .filter_map(|(name, value)| match value {
            serde_json::Value::Null => None,
            serde_json::Value::String(text) => Some((name, text)),
            value => Some((name, value.to_string())),
        })
        .collect())
}

fn multipart_form<R: RemoteCall>(request: &R, uploads: &[&Upload]) -> Result<Form, InvocationError> {
    let mut form = Form::new();
    for (name, value) in form_fields(request)? {
        form = form.text(name, value);
    }
    for upload in uploads {
        let part = Part::bytes(upload.bytes.clone()).file_name(upload.file_name.clone());
        form = form.part(upload.name.clone(), part);
    }
    Ok(form)
}

#[cfg(test)]
mod tests {
    use super::*;
    use botgram_types::methods::{GetUpdates, SendMediaGroup};
    use botgram_types::types::{InputFile, InputMedia, InputMediaDocument, Update};

    #[test]
    fn check_successful_response() {
        let updates: Vec<Update> = decode_response(
            StatusCode::OK,
            br#"{"ok":true,"result":[{"update_id":9,"poll":{}}]}"#,
        )
        .unwrap();
        assert_eq!(updates.len(), 1);
        assert_eq!(updates[0].id, 9);
    }

    #[test]
    fn check_error_response() {
        let result = decode_response::<bool>(
            StatusCode::TOO_MANY_REQUESTS,
            br#"{"ok":false,"error_code":429,"description":"Too Many Requests: retry after 3","parameters":{"retry_after":3}}"#,
        );
        match result {
            Err(InvocationError::Api(err)) => {
                assert_eq!(err.code, 429);
                assert_eq!(err.retry_after, Some(3));
                assert!(err.is("Too Many Requests: *"));
            }
            other => panic!("unexpected result: {other:?}"),
        }
    }

    #[test]
    fn check_non_json_error_response() {
        let result = decode_response::<bool>(StatusCode::BAD_GATEWAY, b"<html>nginx</html>");
        match result {
            Err(InvocationError::Api(err)) => {
                assert_eq!(err.code, 502);
                assert_eq!(err.description, "Bad Gateway");
            }
            other => panic!("unexpected result: {other:?}"),
        }
    }

    #[test]
    fn check_unexpected_result_type() {
        let result = decode_response::<bool>(StatusCode::OK, br#"{"ok":true,"result":"yes"}"#);
        assert!(matches!(result, Err(InvocationError::Deserialize(_))));

        let result = decode_response::<bool>(StatusCode::OK, br#"{"ok":true}"#);
        assert!(matches!(result, Err(InvocationError::Deserialize(_))));
    }

    #[test]
    fn check_form_fields_are_json_encoded() {
        let request = GetUpdates {
            offset: Some(42),
            limit: Some(5),
            timeout: None,
            allowed_updates: None,
        };
        let mut fields = form_fields(&request).unwrap();
        fields.sort();
        assert_eq!(
            fields,
            [
                ("limit".to_string(), "5".to_string()),
                ("offset".to_string(), "42".to_string()),
            ]
        );

        let request = SendMediaGroup::new(
            "@botgram",
            [InputMedia::from(InputMediaDocument::new(InputFile::upload(
                "doc",
                "notes.txt",
                b"hello".to_vec(),
            )))],
        );
        let mut fields = form_fields(&request).unwrap();
        fields.sort();
        assert_eq!(fields[0], ("chat_id".to_string(), "@botgram".to_string()));
        assert_eq!(fields[1].0, "media");
        assert_eq!(
            serde_json::from_str::<serde_json::Value>(&fields[1].1).unwrap(),
            serde_json::json!([{ "type": "document", "media": "attach://doc" }])
        );
    }

    #[test]
    fn check_method_url_keeps_token_in_path() {
        let sender = Sender::new("123456:ABC-DEF1234ghIkl-zyx57W2v1u123ew11").unwrap();
        let url = sender.method_url("getMe").unwrap();
        assert_eq!(url.scheme(), "https");
        assert_eq!(url.host_str(), Some("api.telegram.org"));
        assert_eq!(url.path(), "/bot123456:ABC-DEF1234ghIkl-zyx57W2v1u123ew11/getMe");
    }

    #[test]
    fn check_method_url_below_server_prefix() {
        let params = ConnectionParams {
            api_url: Url::parse("http://127.0.0.1:8081/telegram/").unwrap(),
            ..Default::default()
        };
        let sender = Sender::with_configuration("42:XYZ", params).unwrap();
        assert_eq!(
            sender.method_url("getUpdates").unwrap().as_str(),
            "http://127.0.0.1:8081/telegram/bot42:XYZ/getUpdates"
        );
    }

    #[test]
    fn check_long_poll_extends_timeout() {
        let sender = Sender::new("42:XYZ").unwrap();
        let request = GetUpdates {
            offset: None,
            limit: None,
            timeout: Some(30),
            allowed_updates: None,
        };
        assert_eq!(sender.timeout_for(&request), Duration::from_secs(40));
        assert_eq!(
            sender.timeout_for(&botgram_types::methods::GetMe {}),
            Duration::from_secs(10)
        );
    }

    #[test]
    fn check_token_is_not_debug_printed() {
        let sender = Sender::new("123456:SECRET").unwrap();
        assert!(!format!("{sender:?}").contains("SECRET"));
    }
}
