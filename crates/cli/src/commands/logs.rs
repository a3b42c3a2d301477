// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! `jt logs` - Print or follow a job's logs

use std::time::Duration;

use anyhow::Result;
use clap::Args;
use jt_engine::{fetch_tail, LogFollower, ResolveOptions, TailOptions};
use tokio::sync::mpsc;
use tokio_util::sync::CancellationToken;

use crate::Clients;

#[derive(Args)]
pub struct LogsArgs {
    /// Batch job id
    pub job_id: String,

    /// Stream live log output (like tail -f)
    #[arg(long, short)]
    pub follow: bool,

    /// Number of recent lines to show (default: 50)
    #[arg(short = 'n', long, default_value = "50")]
    pub limit: usize,

    /// Log group the job's stream lives in
    #[arg(long, default_value = "/aws/batch/job")]
    pub log_group: String,

    /// Only include logs newer than this (e.g. "15m", "2h")
    #[arg(long, value_parser = super::parse_duration)]
    pub since: Option<Duration>,

    /// With --follow, replay from the beginning of the stream
    #[arg(long)]
    pub from_start: bool,
}

pub async fn run(args: LogsArgs, clients: &Clients) -> Result<()> {
    // Resolve just far enough to learn the stream name.
    let chain = clients
        .resolver()
        .with_options(ResolveOptions::default().fetch_logs(false))
        .resolve(&args.job_id)
        .await?;

    let Some(stream) = chain.log_stream else {
        println!("No logs available for job {}", args.job_id);
        return Ok(());
    };

    if args.follow {
        follow(args, clients, stream).await
    } else {
        let tail_opts = TailOptions { lines: args.limit, since: args.since };
        let lines =
            fetch_tail(clients.logs.as_ref(), &args.log_group, &stream, &tail_opts).await?;
        if lines.is_empty() {
            println!("No logs available for job {}", args.job_id);
            return Ok(());
        }
        for line in lines {
            println!("{line}");
        }
        Ok(())
    }
}

async fn follow(args: LogsArgs, clients: &Clients, stream: String) -> Result<()> {
    let cancel = CancellationToken::new();
    let interrupt = cancel.clone();
    tokio::spawn(async move {
        let _ = tokio::signal::ctrl_c().await;
        interrupt.cancel();
    });

    let (tx, mut rx) = mpsc::channel(256);
    let follower = LogFollower::new(args.log_group, stream).from_start(args.from_start);
    let logs = clients.logs.clone();
    let handle = tokio::spawn(async move { follower.run(logs.as_ref(), tx, cancel).await });

    while let Some(line) = rx.recv().await {
        println!("{line}");
    }
    handle.await??;
    Ok(())
}
