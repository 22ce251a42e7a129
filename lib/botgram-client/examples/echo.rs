//! Example to echo text messages back to the chat they were sent in.
//!
//! Pending updates sent while the bot was offline are dropped. The position reached
//! is printed on exit, so it can be passed back to resume from there.
//!
//! Run it as:
//!
//! ```sh
//! cargo run --example echo -- BOT_TOKEN [OFFSET]
//! ```

use std::env;

use botgram_client::client::{AllowedUpdates, ReceiverOptions, UpdatesConfiguration};
use botgram_client::sender::Sender;
use botgram_client::types::{UpdateKind, UpdateType};
use botgram_client::Client;
use simple_logger::SimpleLogger;
use tokio::runtime;

type Result = std::result::Result<(), Box<dyn std::error::Error>>;

async fn async_main() -> Result {
    SimpleLogger::new()
        .with_level(log::LevelFilter::Debug)
        .init()
        .unwrap();

    let token = env::args().nth(1).expect("token missing");
    let offset = env::args()
        .nth(2)
        .map(|offset| offset.parse().expect("offset invalid"));

    let client = Client::new(Sender::new(&token)?);
    let me = client.get_me().await?;
    println!("Running as @{}", me.username.as_deref().unwrap_or("?"));

    let mut updates = client.stream_updates(
        ReceiverOptions {
            offset,
            allowed_updates: AllowedUpdates::only([UpdateType::Message]),
            drop_pending_updates: offset.is_none(),
            ..Default::default()
        },
        UpdatesConfiguration::default(),
    );

    println!("Waiting for messages...");
    loop {
        tokio::select! {
            _ = tokio::signal::ctrl_c() => break,
            update = updates.next() => {
                let update = update?;
                let UpdateKind::Message(message) = update.kind else {
                    continue;
                };
                if message.is_from_bot() || message.text().is_empty() {
                    continue;
                }

                println!("Responding to {}", message.chat.name().unwrap_or("someone"));
                if let Err(e) = client.send_message(&message.chat, message.text()).await {
                    println!("Failed to respond! {e}");
                }
            }
        }
    }

    let cursor = updates.into_cursor();
    println!(
        "Stopped. Resume with offset {}",
        cursor.offset().map_or("none".to_string(), |offset| offset.to_string())
    );
    Ok(())
}

fn main() -> Result {
    runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .unwrap()
        .block_on(async_main())
}
