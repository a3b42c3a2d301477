// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

//! jt: explain where and why an AWS Batch job ran.

mod color;
mod commands;
mod output;

use clap::{Parser, Subcommand};
use jt_adapters::{BatchScheduler, CloudWatchLogs, Ec2Compute, EcsOrchestrator};
use jt_core::Diagnostics;
use jt_engine::Resolver;
use std::sync::Arc;

const VERSION: &str = concat!(env!("CARGO_PKG_VERSION"), " (", env!("BUILD_GIT_HASH"), ")");

#[derive(Parser)]
#[command(
    name = "jt",
    version = VERSION,
    about = "Explain where and why an AWS Batch job ran",
    styles = color::styles()
)]
struct Cli {
    /// AWS region override (defaults to the environment's region)
    #[arg(long, global = true)]
    region: Option<String>,

    /// Emit per-stage resolution diagnostics to stderr
    #[arg(long, global = true)]
    debug: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Resolve and display the full job chain
    Show(commands::show::ShowArgs),
    /// Print or follow a job's logs
    Logs(commands::logs::LogsArgs),
}

/// The four read-only service clients, each scoped to one region.
pub(crate) struct Clients {
    pub scheduler: Arc<BatchScheduler>,
    pub orchestrator: Arc<EcsOrchestrator>,
    pub compute: Arc<Ec2Compute>,
    pub logs: Arc<CloudWatchLogs>,
}

impl Clients {
    async fn load(region: Option<String>) -> Self {
        let mut loader = aws_config::defaults(aws_config::BehaviorVersion::latest());
        if let Some(region) = region {
            loader = loader.region(aws_config::Region::new(region));
        }
        let config = loader.load().await;
        Self {
            scheduler: Arc::new(BatchScheduler::new(aws_sdk_batch::Client::new(&config))),
            orchestrator: Arc::new(EcsOrchestrator::new(aws_sdk_ecs::Client::new(&config))),
            compute: Arc::new(Ec2Compute::new(aws_sdk_ec2::Client::new(&config))),
            logs: Arc::new(CloudWatchLogs::new(aws_sdk_cloudwatchlogs::Client::new(&config))),
        }
    }

    fn resolver(&self) -> Resolver {
        Resolver::new(
            self.scheduler.clone(),
            self.orchestrator.clone(),
            self.compute.clone(),
            self.logs.clone(),
        )
        .with_diagnostics(Diagnostics::tracing())
    }
}

fn init_tracing(debug: bool) {
    use tracing_subscriber::EnvFilter;

    let filter = if debug {
        EnvFilter::new("jobtrail=debug,jt=debug,jt_engine=debug,jt_adapters=debug")
    } else {
        EnvFilter::from_default_env()
    };
    tracing_subscriber::fmt().with_env_filter(filter).with_writer(std::io::stderr).init();
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.debug);

    let clients = Clients::load(cli.region.clone()).await;
    match cli.command {
        Commands::Show(args) => commands::show::run(args, &clients).await,
        Commands::Logs(args) => commands::logs::run(args, &clients).await,
    }
}
