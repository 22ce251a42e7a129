// Copyright 2026 - developers of the `botgram` project.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// https://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or https://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Methods to deal with and offer access to updates.

use super::{Client, FetchRequest, ReceiverOptions, UpdateCursor, UpdatesConfiguration};
use botgram_sender::InvocationError;
use botgram_types::methods::{DeleteWebhook, GetUpdates};
use botgram_types::types::Update;
use log::{debug, info, trace};
use std::collections::VecDeque;
use std::future::Future;
use std::time::Duration;

/// Something that can fetch a batch of updates.
///
/// Every call performs a single request and does not retry on failure. Errors are
/// handed to the caller of [`UpdateStream::next`], which decides whether to keep polling.
pub trait FetchUpdates {
    /// Fetches the updates described by `request`, waiting up to `timeout`
    /// for new updates if there are none.
    fn fetch_updates(
        &self,
        request: &FetchRequest,
        timeout: Duration,
    ) -> impl Future<Output = Result<Vec<Update>, InvocationError>> + Send;
}

impl FetchUpdates for Client {
    /// Invokes `getUpdates` once, bypassing the client's retry policy.
    fn fetch_updates(
        &self,
        request: &FetchRequest,
        timeout: Duration,
    ) -> impl Future<Output = Result<Vec<Update>, InvocationError>> + Send {
        let request = request.to_get_updates(timeout);
        async move { self.0.sender.invoke(&request).await }
    }
}

/// A long-polling loop, handing out updates one at a time.
///
/// The offset is only advanced once every update of a fetched batch has been handed out
/// and the next one is requested. If a fetch fails, or the future returned by
/// [`UpdateStream::next`] is dropped while fetching, the position stays where it was,
/// and the same updates will be fetched again.
pub struct UpdateStream<F: FetchUpdates = Client> {
    fetcher: F,
    cursor: UpdateCursor,
    configuration: UpdatesConfiguration,
    buffer: VecDeque<Update>,
    // Identifier of the last update in the batch being handed out, if any.
    last_in_batch: Option<i64>,
}

impl<F: FetchUpdates> UpdateStream<F> {
    pub fn new(fetcher: F, cursor: UpdateCursor, configuration: UpdatesConfiguration) -> Self {
        Self {
            fetcher,
            cursor,
            configuration,
            buffer: VecDeque::new(),
            last_in_batch: None,
        }
    }

    /// Returns the next update, fetching more if needed.
    ///
    /// This only returns once an update is available, or if fetching fails.
    pub async fn next(&mut self) -> Result<Update, InvocationError> {
        loop {
            if let Some(update) = self.buffer.pop_front() {
                return Ok(update);
            }
            if let Some(last) = self.last_in_batch.take() {
                self.cursor.advance_past(last);
                trace!("batch consumed, offset is now {:?}", self.cursor.offset());
            }

            let request = self.cursor.next_fetch();
            let timeout = if request.is_backlog_skip() {
                Duration::ZERO
            } else {
                self.configuration.poll_timeout
            };
            trace!("fetching updates with {:?}", request);
            let batch = self.fetcher.fetch_updates(&request, timeout).await?;

            if self.cursor.record_fetch(&request, &batch) {
                if !batch.is_empty() {
                    debug!("fetched {} updates", batch.len());
                }
                self.last_in_batch = batch.iter().map(|update| update.id).max();
                self.buffer.extend(batch);
            } else {
                info!(
                    "dropped pending updates, resuming from offset {:?}",
                    self.cursor.offset()
                );
            }
        }
    }

    pub fn cursor(&self) -> &UpdateCursor {
        &self.cursor
    }

    /// Allows changing the parameters of the next fetches, such as the limit.
    pub fn cursor_mut(&mut self) -> &mut UpdateCursor {
        &mut self.cursor
    }

    pub fn fetcher(&self) -> &F {
        &self.fetcher
    }

    /// Stops polling and returns the position reached.
    ///
    /// Updates of a batch that was not fully handed out are not considered processed,
    /// and will be fetched again by a cursor resumed from this one.
    pub fn into_cursor(self) -> UpdateCursor {
        self.cursor
    }
}

impl Client {
    /// Returns a long-polling stream of updates, starting as described by the `options`.
    ///
    /// Long polling won't work while a webhook is set (see [`Self::delete_webhook`]).
    pub fn stream_updates(
        &self,
        options: ReceiverOptions,
        configuration: UpdatesConfiguration,
    ) -> UpdateStream {
        UpdateStream::new(self.clone(), UpdateCursor::new(options), configuration)
    }

    /// Fetches a single batch of updates.
    ///
    /// Prefer [`Self::stream_updates`], which keeps track of the offset.
    pub async fn get_updates(&self, request: &GetUpdates) -> Result<Vec<Update>, InvocationError> {
        self.invoke(request).await
    }

    /// Removes the webhook integration, if any, optionally dropping all pending updates.
    pub async fn delete_webhook(&self, drop_pending_updates: bool) -> Result<(), InvocationError> {
        self.invoke(&DeleteWebhook {
            drop_pending_updates: Some(drop_pending_updates),
        })
        .await?;
        Ok(())
    }
}
