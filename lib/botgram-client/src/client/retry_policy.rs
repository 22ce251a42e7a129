// Copyright 2026 - developers of the `botgram` project.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// https://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or https://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.
use std::num::NonZeroU32;
use std::ops::ControlFlow;
use std::time::Duration;

use botgram_sender::{ApiError, InvocationError};

pub trait RetryPolicy: Send + Sync {
    /// Determines whether the failing request should retry.
    ///
    /// If it should Continue, a sleep duration before retrying is included.
    /// If it should Break, the context error will be propagated to the caller.
    fn should_retry(&self, ctx: &RetryContext) -> ControlFlow<(), Duration>;
}

pub struct RetryContext {
    /// Amount of times the instance of this request has failed.
    pub fail_count: NonZeroU32,
    /// Sum of the durations for all previous continuations.
    pub slept_so_far: Duration,
    /// The most recent error caused by the instance of the request.
    pub error: InvocationError,
}

/// Retry policy that will never retry.
pub struct NoRetries;

impl RetryPolicy for NoRetries {
    fn should_retry(&self, _: &RetryContext) -> ControlFlow<(), Duration> {
        ControlFlow::Break(())
    }
}

/// Retry policy that will retry *once* on flood control errors (`429 Too Many Requests`),
/// if the duration to sleep for is below the threshold.
pub struct AutoSleep {
    /// The threshold below which the library should automatically sleep (inclusive).
    /// For instance, if an `ApiError { code: 429, retry_after: Some(17), .. }` occurs and
    /// the threshold is 20 seconds, the library will `sleep` for 17 seconds before retrying.
    /// If the error was for 21s, it would propagate the error instead.
    pub threshold: Duration,

    /// `Some` if network errors should be treated as a flood error that would last the
    /// specified duration. This duration ignores the `threshold` and is always slept on
    /// the first network error.
    pub io_errors_as_flood_of: Option<Duration>,
}

impl Default for AutoSleep {
    /// Sleeps on flood errors of up to a minute, and once for a second on network errors.
    fn default() -> Self {
        Self {
            threshold: Duration::from_secs(60),
            io_errors_as_flood_of: Some(Duration::from_secs(1)),
        }
    }
}

impl RetryPolicy for AutoSleep {
    fn should_retry(&self, ctx: &RetryContext) -> ControlFlow<(), Duration> {
        if ctx.fail_count.get() != 1 {
            return ControlFlow::Break(());
        }
        match &ctx.error {
            InvocationError::Api(ApiError {
                code: 429,
                retry_after: Some(seconds),
                ..
            }) if u64::from(*seconds) <= self.threshold.as_secs() => {
                ControlFlow::Continue(Duration::from_secs((*seconds).into()))
            }
            err if err.is_network() => match self.io_errors_as_flood_of {
                Some(duration) => ControlFlow::Continue(duration),
                None => ControlFlow::Break(()),
            },
            _ => ControlFlow::Break(()),
        }
    }
}
