// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! `jt show` - Resolve and display the full job chain

use std::time::Duration;

use anyhow::Result;
use clap::Args;
use jt_engine::ResolveOptions;

use crate::output;
use crate::Clients;

#[derive(Args)]
pub struct ShowArgs {
    /// Batch job id
    pub job_id: String,

    /// Print the raw chain as JSON
    #[arg(long)]
    pub json: bool,

    /// Number of trailing log lines to include (default: 50)
    #[arg(short = 'n', long, default_value = "50")]
    pub log_lines: usize,

    /// Log group the job's stream lives in
    #[arg(long, default_value = "/aws/batch/job")]
    pub log_group: String,

    /// Only include logs newer than this (e.g. "15m", "2h")
    #[arg(long, value_parser = super::parse_duration)]
    pub since: Option<Duration>,

    /// Skip fetching logs
    #[arg(long)]
    pub no_logs: bool,
}

pub async fn run(args: ShowArgs, clients: &Clients) -> Result<()> {
    let mut options = ResolveOptions::default()
        .log_group_name(&args.log_group)
        .log_line_count(args.log_lines)
        .fetch_logs(!args.no_logs);
    if let Some(since) = args.since {
        options = options.log_since(since);
    }

    let chain = clients.resolver().with_options(options).resolve(&args.job_id).await?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&chain)?);
    } else {
        output::print_chain(&chain);
    }
    Ok(())
}
