// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Log storage client (CloudWatch Logs).
//!
//! One paged primitive; the engine builds both the bounded tail and the
//! follow loop on top of it.

use crate::error::AdapterError;
use async_trait::async_trait;
use aws_sdk_cloudwatchlogs::error::DisplayErrorContext;

/// Options for one log-events page fetch.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LogFetchOpts {
    /// Start the very first page at the head of the stream instead of the
    /// tail. Ignored once a continuation token is in play.
    pub from_start: bool,
    /// Only events at or after this timestamp.
    pub start_time_ms: Option<i64>,
    /// Continuation token from the previous page.
    pub next_token: Option<String>,
}

/// One raw log event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogEvent {
    pub timestamp_ms: Option<i64>,
    pub message: String,
}

/// One page of events plus the token for the next page.
#[derive(Debug, Clone, Default)]
pub struct LogPage {
    pub events: Vec<LogEvent>,
    pub next_token: Option<String>,
}

/// Read-only view of log storage.
#[async_trait]
pub trait LogsApi: Send + Sync {
    /// Fetch one page of events. A missing stream yields an empty page —
    /// "no logs" is a normal outcome, not an error.
    async fn get_log_events(
        &self,
        group: &str,
        stream: &str,
        opts: LogFetchOpts,
    ) -> Result<LogPage, AdapterError>;
}

/// CloudWatch Logs implementation.
#[derive(Clone)]
pub struct CloudWatchLogs {
    client: aws_sdk_cloudwatchlogs::Client,
}

impl CloudWatchLogs {
    pub fn new(client: aws_sdk_cloudwatchlogs::Client) -> Self {
        Self { client }
    }
}

#[async_trait]
impl LogsApi for CloudWatchLogs {
    async fn get_log_events(
        &self,
        group: &str,
        stream: &str,
        opts: LogFetchOpts,
    ) -> Result<LogPage, AdapterError> {
        let result = self
            .client
            .get_log_events()
            .log_group_name(group)
            .log_stream_name(stream)
            .start_from_head(opts.from_start)
            .set_start_time(opts.start_time_ms)
            .set_next_token(opts.next_token)
            .send()
            .await;

        let out = match result {
            Ok(out) => out,
            Err(err) => {
                let service = err.into_service_error();
                if service.is_resource_not_found_exception() {
                    return Ok(LogPage::default());
                }
                return Err(AdapterError::Request(format!(
                    "GetLogEvents: {}",
                    DisplayErrorContext(service)
                )));
            }
        };

        Ok(LogPage {
            events: out
                .events()
                .iter()
                .map(|e| LogEvent {
                    timestamp_ms: e.timestamp(),
                    message: e.message().unwrap_or_default().to_string(),
                })
                .collect(),
            next_token: out.next_forward_token().map(str::to_string),
        })
    }
}
