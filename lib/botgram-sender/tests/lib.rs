// Copyright 2026 - developers of the `botgram` project.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// https://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or https://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.
use botgram_sender::{ConnectionParams, InvocationError, Sender};
use botgram_types::methods::GetMe;
use std::time::Duration;

include!("../../includes/check_deps_documented.rs");

const TOKEN: &str = "123456:TOP-SECRET";

// Nothing listens on the discard port, so every request fails to connect.
fn unreachable_sender() -> Sender {
    let params = ConnectionParams {
        api_url: "http://127.0.0.1:9/".parse().unwrap(),
        request_timeout: Duration::from_secs(2),
        ..Default::default()
    };
    Sender::with_configuration(TOKEN, params).unwrap()
}

#[tokio::test]
async fn test_connection_failure_hides_token() {
    let _ = simple_logger::SimpleLogger::new()
        .with_level(log::LevelFilter::Debug)
        .init();

    let sender = unreachable_sender();
    match sender.invoke(&GetMe {}).await {
        Err(err @ InvocationError::Http(_)) => {
            assert!(err.is_network());
            assert!(!err.to_string().contains("TOP-SECRET"));
            assert!(!format!("{err:?}").contains("TOP-SECRET"));
        }
        other => panic!("unexpected result: {other:?}"),
    }
}

#[test]
fn test_custom_server_url() {
    let sender = unreachable_sender();
    assert_eq!(sender.params().api_url.as_str(), "http://127.0.0.1:9/");
    assert!(format!("{sender:?}").contains("127.0.0.1:9"));
}
