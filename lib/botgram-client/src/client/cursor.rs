// Copyright 2026 - developers of the `botgram` project.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// https://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or https://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Position and parameters of a long-polling session.
//!
//! The [`UpdateCursor`] performs no I/O. It only plans the next `getUpdates`
//! call and moves forward as batches are fetched and consumed, which is what
//! the [`super::UpdateStream`] drives.

use botgram_types::methods::{GetUpdates, LATEST_UPDATE_OFFSET};
use botgram_types::types::{Update, UpdateType};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::collections::BTreeSet;
use std::fmt;
use std::time::Duration;

/// Maximum number of updates a single fetch may return.
pub const MAX_LIMIT: u8 = 100;

/// The limit was not in the accepted `1..=100` range.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct LimitOutOfRange {
    pub value: i64,
}

impl std::error::Error for LimitOutOfRange {}

impl fmt::Display for LimitOutOfRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "'limit' can not be less than 1 or greater than {MAX_LIMIT} (got {})",
            self.value
        )
    }
}

/// How many updates may be fetched at once. Always between 1 and 100.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "i64", into = "u8")]
pub struct Limit(u8);

impl Limit {
    pub const MIN: Limit = Limit(1);
    pub const MAX: Limit = Limit(MAX_LIMIT);

    pub fn new(value: i64) -> Result<Self, LimitOutOfRange> {
        match u8::try_from(value) {
            Ok(limit) if (1..=MAX_LIMIT).contains(&limit) => Ok(Self(limit)),
            _ => Err(LimitOutOfRange { value }),
        }
    }

    pub fn get(self) -> u8 {
        self.0
    }
}

impl Default for Limit {
    fn default() -> Self {
        Self::MAX
    }
}

impl TryFrom<i64> for Limit {
    type Error = LimitOutOfRange;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Limit> for u8 {
    fn from(limit: Limit) -> Self {
        limit.0
    }
}

/// Which kinds of update the server should deliver.
///
/// In configuration files, [`AllowedUpdates::All`] is written as the string `"all"`
/// and [`AllowedUpdates::Only`] as a list of update types. Leaving the value out
/// means [`AllowedUpdates::Unset`].
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum AllowedUpdates {
    /// Don't send the parameter, so the server keeps using the previous setting.
    #[default]
    Unset,
    /// Every known update type, including the ones the server leaves out by default.
    All,
    /// Only the given update types.
    ///
    /// The server interprets an empty set as all types except `chat_member`,
    /// `message_reaction` and `message_reaction_count`.
    Only(BTreeSet<UpdateType>),
}

impl AllowedUpdates {
    pub fn only(types: impl IntoIterator<Item = UpdateType>) -> Self {
        Self::Only(types.into_iter().collect())
    }

    pub fn is_unset(&self) -> bool {
        matches!(self, Self::Unset)
    }

    /// The value of the `allowed_updates` parameter, if it should be sent.
    pub fn to_request(&self) -> Option<Vec<UpdateType>> {
        match self {
            Self::Unset => None,
            Self::All => Some(UpdateType::ALL.to_vec()),
            Self::Only(types) => Some(types.iter().copied().collect()),
        }
    }
}

#[derive(Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
enum AllKeyword {
    All,
}

#[derive(Serialize, Deserialize)]
#[serde(untagged)]
enum AllowedUpdatesRepr {
    All(AllKeyword),
    Only(BTreeSet<UpdateType>),
}

impl Serialize for AllowedUpdates {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Self::Unset => serializer.serialize_none(),
            Self::All => AllowedUpdatesRepr::All(AllKeyword::All).serialize(serializer),
            Self::Only(types) => serializer.collect_seq(types),
        }
    }
}

impl<'de> Deserialize<'de> for AllowedUpdates {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        Ok(
            match Option::<AllowedUpdatesRepr>::deserialize(deserializer)? {
                None => Self::Unset,
                Some(AllowedUpdatesRepr::All(AllKeyword::All)) => Self::All,
                Some(AllowedUpdatesRepr::Only(types)) => Self::Only(types),
            },
        )
    }
}

/// Configuration of a long-polling session.
///
/// It can be stored and loaded with any `serde` format. Taking it back out of an
/// [`UpdateCursor`] with [`UpdateCursor::into_options`] allows resuming where a
/// previous session left off.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ReceiverOptions {
    /// Identifier of the first update to be returned.
    ///
    /// Ignored on the first fetch if [`Self::drop_pending_updates`] is set.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub offset: Option<i64>,

    /// Maximum number of updates per fetch.
    pub limit: Limit,

    #[serde(skip_serializing_if = "AllowedUpdates::is_unset")]
    pub allowed_updates: AllowedUpdates,

    /// Discard the updates that arrived before polling started.
    pub drop_pending_updates: bool,
}

impl ReceiverOptions {
    /// Changes the [`Self::limit`], with `None` meaning the default of 100.
    ///
    /// Fails without changing anything if the value is outside `1..=100`.
    pub fn set_limit(&mut self, limit: Option<i64>) -> Result<(), LimitOutOfRange> {
        self.limit = limit.map(Limit::new).transpose()?.unwrap_or_default();
        Ok(())
    }
}

/// The `offset` sent in a fetch.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FetchOffset {
    /// Don't send an offset, and get whatever the server still buffers.
    Pending,
    /// Get updates starting at this identifier, confirming all previous ones.
    From(i64),
    /// Get only the most recent buffered update, forgetting all the previous ones.
    Latest,
}

impl FetchOffset {
    pub fn to_request(self) -> Option<i64> {
        match self {
            Self::Pending => None,
            Self::From(offset) => Some(offset),
            Self::Latest => Some(LATEST_UPDATE_OFFSET),
        }
    }
}

/// The parameters of one fetch, as planned by [`UpdateCursor::next_fetch`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FetchRequest {
    pub offset: FetchOffset,
    pub limit: Limit,
    pub allowed_updates: AllowedUpdates,
}

impl FetchRequest {
    /// Whether this fetch exists only to skip the updates buffered before polling started.
    ///
    /// Such a fetch should not wait for new updates to arrive.
    pub fn is_backlog_skip(&self) -> bool {
        self.offset == FetchOffset::Latest
    }

    /// Builds the request, waiting up to `timeout` for updates to arrive.
    ///
    /// The timeout is rounded down to whole seconds.
    pub fn to_get_updates(&self, timeout: Duration) -> GetUpdates {
        GetUpdates {
            offset: self.offset.to_request(),
            limit: Some(self.limit.get()),
            timeout: Some(u32::try_from(timeout.as_secs()).unwrap_or(u32::MAX)),
            allowed_updates: self.allowed_updates.to_request(),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CursorState {
    /// No fetch has completed yet.
    Fresh,
    /// At least one fetch has completed.
    Active,
}

/// Tracks the position of a long-polling session in the update stream.
///
/// The offset only ever moves forward. It is advanced once the updates of a
/// batch have been consumed, so that a failed or cancelled fetch simply
/// requests the same range again.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct UpdateCursor {
    options: ReceiverOptions,
    state: CursorState,
}

impl UpdateCursor {
    pub fn new(options: ReceiverOptions) -> Self {
        Self {
            options,
            state: CursorState::Fresh,
        }
    }

    pub fn offset(&self) -> Option<i64> {
        self.options.offset
    }

    pub fn limit(&self) -> Limit {
        self.options.limit
    }

    pub fn allowed_updates(&self) -> &AllowedUpdates {
        &self.options.allowed_updates
    }

    pub fn drop_pending(&self) -> bool {
        self.options.drop_pending_updates
    }

    pub fn state(&self) -> CursorState {
        self.state
    }

    /// See [`ReceiverOptions::set_limit`]. Takes effect on the next fetch.
    pub fn set_limit(&mut self, limit: Option<i64>) -> Result<(), LimitOutOfRange> {
        self.options.set_limit(limit)
    }

    /// Only has an effect before the first fetch completes.
    pub fn set_drop_pending(&mut self, drop_pending: bool) {
        self.options.drop_pending_updates = drop_pending;
    }

    pub fn set_allowed_updates(&mut self, allowed_updates: AllowedUpdates) {
        self.options.allowed_updates = allowed_updates;
    }

    /// The options to resume polling from the current position.
    pub fn into_options(self) -> ReceiverOptions {
        self.options
    }

    /// Plans the next fetch.
    ///
    /// When pending updates should be dropped and nothing was fetched yet, this is a
    /// fetch of the latest buffered update alone, so that all previous ones are forgotten.
    /// That fetch uses the configured [`AllowedUpdates`], or every type if unset.
    pub fn next_fetch(&self) -> FetchRequest {
        if self.state == CursorState::Fresh && self.options.drop_pending_updates {
            return FetchRequest {
                offset: FetchOffset::Latest,
                limit: Limit::MIN,
                allowed_updates: match &self.options.allowed_updates {
                    AllowedUpdates::Unset => AllowedUpdates::All,
                    allowed => allowed.clone(),
                },
            };
        }

        FetchRequest {
            offset: self
                .options
                .offset
                .map_or(FetchOffset::Pending, FetchOffset::From),
            limit: self.options.limit,
            allowed_updates: self.options.allowed_updates.clone(),
        }
    }

    /// Records the result of a successful fetch made with `request`.
    ///
    /// Returns `false` if the batch only served to skip the backlog and must not be
    /// handed to the application. Otherwise the batch should be consumed, and
    /// [`Self::advance`] called after.
    pub fn record_fetch(&mut self, request: &FetchRequest, batch: &[Update]) -> bool {
        self.state = CursorState::Active;
        if !request.is_backlog_skip() {
            return true;
        }

        // Offsets from a previous session are meaningless after dropping the backlog.
        self.options.offset = batch
            .iter()
            .map(|update| update.id.saturating_add(1))
            .max();
        false
    }

    /// Moves the offset past every update in the batch.
    ///
    /// An empty batch changes nothing, and so does advancing with the same batch twice.
    pub fn advance(&mut self, batch: &[Update]) {
        if let Some(last) = batch.iter().map(|update| update.id).max() {
            self.advance_past(last);
        }
    }

    pub(crate) fn advance_past(&mut self, last: i64) {
        let next = last.saturating_add(1);
        self.options.offset = Some(self.options.offset.map_or(next, |offset| offset.max(next)));
    }
}

impl Default for UpdateCursor {
    fn default() -> Self {
        Self::new(ReceiverOptions::default())
    }
}

impl From<ReceiverOptions> for UpdateCursor {
    fn from(options: ReceiverOptions) -> Self {
        Self::new(options)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use botgram_types::types::UpdateKind;

    fn update(id: i64) -> Update {
        Update {
            id,
            kind: UpdateKind::Other {
                kind: "poll".into(),
                raw: serde_json::json!({}),
            },
        }
    }

    fn batch(ids: impl IntoIterator<Item = i64>) -> Vec<Update> {
        ids.into_iter().map(update).collect()
    }

    #[test]
    fn check_limit_in_range() {
        let mut cursor = UpdateCursor::default();
        for value in 1..=100 {
            cursor.set_limit(Some(value)).unwrap();
            assert_eq!(i64::from(cursor.limit().get()), value);
        }
        cursor.set_limit(None).unwrap();
        assert_eq!(cursor.limit(), Limit::MAX);
    }

    #[test]
    fn check_limit_out_of_range() {
        let mut cursor = UpdateCursor::default();
        cursor.set_limit(Some(42)).unwrap();
        for value in [0, 101, -5, 256, 257, i64::MIN, i64::MAX] {
            assert_eq!(
                cursor.set_limit(Some(value)),
                Err(LimitOutOfRange { value })
            );
            assert_eq!(cursor.limit().get(), 42);
        }
    }

    #[test]
    fn check_limit_error_message() {
        assert_eq!(
            Limit::new(0).unwrap_err().to_string(),
            "'limit' can not be less than 1 or greater than 100 (got 0)"
        );
    }

    #[test]
    fn check_advance_past_batch() {
        let mut cursor = UpdateCursor::default();
        let updates = batch([7, 9, 8]);

        cursor.advance(&updates);
        assert_eq!(cursor.offset(), Some(10));
        cursor.advance(&updates);
        assert_eq!(cursor.offset(), Some(10));
    }

    #[test]
    fn check_advance_empty_batch() {
        let mut cursor = UpdateCursor::default();
        cursor.advance(&[]);
        assert_eq!(cursor.offset(), None);

        cursor.advance(&batch([3]));
        cursor.advance(&[]);
        assert_eq!(cursor.offset(), Some(4));
    }

    #[test]
    fn check_advance_never_goes_back() {
        let mut cursor = UpdateCursor::new(ReceiverOptions {
            offset: Some(100),
            ..Default::default()
        });
        cursor.advance(&batch([20, 21]));
        assert_eq!(cursor.offset(), Some(100));
    }

    #[test]
    fn check_advance_at_largest_id() {
        let mut cursor = UpdateCursor::default();
        cursor.advance(&batch([i64::MAX - 1, i64::MAX]));
        assert_eq!(cursor.offset(), Some(i64::MAX));

        let mut cursor = UpdateCursor::new(ReceiverOptions {
            drop_pending_updates: true,
            ..Default::default()
        });
        let request = cursor.next_fetch();
        assert!(!cursor.record_fetch(&request, &batch([i64::MAX])));
        assert_eq!(cursor.offset(), Some(i64::MAX));
    }

    #[test]
    fn check_first_fetch_without_drop() {
        let cursor = UpdateCursor::new(ReceiverOptions {
            offset: Some(12),
            limit: Limit::new(30).unwrap(),
            ..Default::default()
        });
        assert_eq!(
            cursor.next_fetch(),
            FetchRequest {
                offset: FetchOffset::From(12),
                limit: Limit::new(30).unwrap(),
                allowed_updates: AllowedUpdates::Unset,
            }
        );
        assert_eq!(UpdateCursor::default().next_fetch().offset, FetchOffset::Pending);
    }

    #[test]
    fn check_drop_pending_uses_latest() {
        let mut cursor = UpdateCursor::new(ReceiverOptions {
            offset: Some(300),
            drop_pending_updates: true,
            ..Default::default()
        });

        let request = cursor.next_fetch();
        assert!(request.is_backlog_skip());
        assert_eq!(request.offset, FetchOffset::Latest);
        assert_eq!(request.limit, Limit::MIN);
        assert_eq!(request.allowed_updates, AllowedUpdates::All);
        assert_eq!(request.offset.to_request(), Some(-1));

        assert!(!cursor.record_fetch(&request, &batch([812])));
        assert_eq!(cursor.state(), CursorState::Active);
        assert_eq!(cursor.offset(), Some(813));

        let request = cursor.next_fetch();
        assert!(!request.is_backlog_skip());
        assert_eq!(request.offset, FetchOffset::From(813));
        assert_eq!(request.limit, Limit::MAX);
        assert_eq!(request.allowed_updates, AllowedUpdates::Unset);
    }

    #[test]
    fn check_drop_pending_without_backlog() {
        let mut cursor = UpdateCursor::new(ReceiverOptions {
            offset: Some(300),
            drop_pending_updates: true,
            ..Default::default()
        });

        let request = cursor.next_fetch();
        assert!(!cursor.record_fetch(&request, &[]));
        assert_eq!(cursor.offset(), None);
        assert_eq!(cursor.next_fetch().offset, FetchOffset::Pending);
    }

    #[test]
    fn check_drop_pending_keeps_explicit_filter() {
        let only = AllowedUpdates::only([UpdateType::Message, UpdateType::CallbackQuery]);
        let cursor = UpdateCursor::new(ReceiverOptions {
            allowed_updates: only.clone(),
            drop_pending_updates: true,
            ..Default::default()
        });
        assert_eq!(cursor.next_fetch().allowed_updates, only);
    }

    #[test]
    fn check_drop_pending_after_first_fetch() {
        let mut cursor = UpdateCursor::default();
        let request = cursor.next_fetch();
        assert!(cursor.record_fetch(&request, &batch([1])));

        cursor.set_drop_pending(true);
        assert!(!cursor.next_fetch().is_backlog_skip());
    }

    #[test]
    fn check_sequence_with_new_limit() {
        let mut cursor = UpdateCursor::default();
        assert_eq!(cursor.offset(), None);
        assert_eq!(cursor.limit().get(), 100);

        let request = cursor.next_fetch();
        let updates = batch([501, 502, 503]);
        assert!(cursor.record_fetch(&request, &updates));
        cursor.advance(&updates);
        assert_eq!(cursor.offset(), Some(504));

        cursor.set_limit(Some(50)).unwrap();
        let request = cursor.next_fetch();
        assert_eq!(request.offset, FetchOffset::From(504));
        assert_eq!(request.limit.get(), 50);

        let get_updates = request.to_get_updates(Duration::from_secs(30));
        assert_eq!(get_updates.offset, Some(504));
        assert_eq!(get_updates.limit, Some(50));
        assert_eq!(get_updates.timeout, Some(30));
        assert_eq!(get_updates.allowed_updates, None);
    }

    #[test]
    fn check_allowed_updates_request() {
        assert_eq!(AllowedUpdates::Unset.to_request(), None);
        assert_eq!(
            AllowedUpdates::All.to_request().map(|types| types.len()),
            Some(UpdateType::ALL.len())
        );
        assert_eq!(
            AllowedUpdates::only([UpdateType::Poll, UpdateType::Message]).to_request(),
            Some(vec![UpdateType::Message, UpdateType::Poll])
        );
    }

    #[test]
    fn check_options_json_round_trip() {
        for allowed_updates in [
            AllowedUpdates::Unset,
            AllowedUpdates::All,
            AllowedUpdates::only([]),
            AllowedUpdates::only([UpdateType::EditedMessage, UpdateType::ChatBoost]),
        ] {
            let options = ReceiverOptions {
                offset: Some(504),
                limit: Limit::new(50).unwrap(),
                allowed_updates,
                drop_pending_updates: true,
            };
            let json = serde_json::to_string(&options).unwrap();
            assert_eq!(serde_json::from_str::<ReceiverOptions>(&json).unwrap(), options);
        }
    }

    #[test]
    fn check_options_json_format() {
        let options: ReceiverOptions = serde_json::from_value(serde_json::json!({
            "limit": 20,
            "allowed_updates": "all",
        }))
        .unwrap();
        assert_eq!(options.offset, None);
        assert_eq!(options.limit.get(), 20);
        assert_eq!(options.allowed_updates, AllowedUpdates::All);
        assert!(!options.drop_pending_updates);

        let options: ReceiverOptions = serde_json::from_value(serde_json::json!({
            "allowed_updates": null,
        }))
        .unwrap();
        assert_eq!(options, ReceiverOptions::default());

        assert!(
            serde_json::from_value::<ReceiverOptions>(serde_json::json!({ "limit": 101 }))
                .is_err()
        );
        assert!(
            serde_json::from_value::<ReceiverOptions>(serde_json::json!({
                "allowed_updates": "some",
            }))
            .is_err()
        );
    }
}
