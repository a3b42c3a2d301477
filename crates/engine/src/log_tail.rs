// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Log tail fetching: bounded tail and cooperative follow mode.

use jt_adapters::{AdapterError, LogFetchOpts, LogsApi};
use std::time::{Duration, SystemTime, UNIX_EPOCH};
use tokio::sync::mpsc;
use tokio_util::sync::CancellationToken;

/// Options for a bounded tail fetch.
#[derive(Debug, Clone)]
pub struct TailOptions {
    /// Number of trailing lines to keep.
    pub lines: usize,
    /// Only include events newer than this.
    pub since: Option<Duration>,
}

impl Default for TailOptions {
    fn default() -> Self {
        Self { lines: 50, since: None }
    }
}

/// Fetch the last `lines` non-empty trimmed lines, oldest retained line
/// first.
pub async fn fetch_tail(
    logs: &dyn LogsApi,
    group: &str,
    stream: &str,
    opts: &TailOptions,
) -> Result<Vec<String>, AdapterError> {
    let start_time_ms = opts.since.map(|since| {
        let now_ms = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap_or_default()
            .as_millis() as i64;
        now_ms.saturating_sub(since.as_millis() as i64)
    });

    let page = logs
        .get_log_events(
            group,
            stream,
            LogFetchOpts { from_start: false, start_time_ms, next_token: None },
        )
        .await?;

    let mut lines: Vec<String> = page
        .events
        .iter()
        .map(|e| e.message.trim())
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect();
    if lines.len() > opts.lines {
        lines.drain(..lines.len() - opts.lines);
    }
    Ok(lines)
}

/// Cooperative polling follower for a live log stream.
///
/// Fetches a page, emits new non-empty lines, sleeps a fixed interval,
/// repeats. The continuation token guarantees previously-emitted lines
/// never repeat. Runs until the cancellation token fires or the
/// receiving side hangs up.
pub struct LogFollower {
    group: String,
    stream: String,
    from_start: bool,
    interval: Duration,
}

impl LogFollower {
    pub fn new(group: impl Into<String>, stream: impl Into<String>) -> Self {
        Self {
            group: group.into(),
            stream: stream.into(),
            from_start: false,
            interval: Duration::from_secs(2),
        }
    }

    jt_core::setters! {
        set {
            from_start: bool,
            interval: Duration,
        }
    }

    /// Poll the stream, sending each new line into `tx`.
    pub async fn run(
        self,
        logs: &dyn LogsApi,
        tx: mpsc::Sender<String>,
        cancel: CancellationToken,
    ) -> Result<(), AdapterError> {
        let mut token: Option<String> = None;
        loop {
            if cancel.is_cancelled() {
                return Ok(());
            }

            let page = logs
                .get_log_events(
                    &self.group,
                    &self.stream,
                    LogFetchOpts {
                        from_start: self.from_start,
                        start_time_ms: None,
                        next_token: token.clone(),
                    },
                )
                .await?;

            for event in &page.events {
                let line = event.message.trim();
                if line.is_empty() {
                    continue;
                }
                if tx.send(line.to_string()).await.is_err() {
                    // Receiver hung up; nothing left to follow for.
                    return Ok(());
                }
            }
            // An idle page may come back with no token; keep the old one
            // so the next poll resumes where this one left off.
            if page.next_token.is_some() {
                token = page.next_token;
            }

            tokio::select! {
                _ = cancel.cancelled() => return Ok(()),
                _ = tokio::time::sleep(self.interval) => {}
            }
        }
    }
}

#[cfg(test)]
#[path = "log_tail_tests.rs"]
mod tests;
