//! Task API server entry point.
//!
//! Constructs the in-memory store once at startup, injects it into the
//! service, and serves the HTTP boundary until the process exits. Nothing is
//! persisted across restarts.

use anyhow::Result;
use clap::Parser;
use mockable::DefaultClock;
use std::net::SocketAddr;
use std::sync::Arc;
use taskdesk::http;
use taskdesk::task::{adapters::memory::InMemoryTaskRepository, services::TaskService};
use tracing_subscriber::EnvFilter;

/// Command-line configuration for the task API server.
#[derive(Debug, Parser)]
#[command(name = "taskdesk", version, about = "Task-management REST service")]
struct Args {
    /// Socket address to bind.
    #[arg(long, env = "TASKDESK_BIND", default_value = "0.0.0.0:8000")]
    bind: SocketAddr,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let args = Args::parse();
    let clock = Arc::new(DefaultClock);
    let repository = Arc::new(InMemoryTaskRepository::new(Arc::clone(&clock)));
    let service = Arc::new(TaskService::new(repository, clock));

    http::serve(args.bind, service).await?;
    Ok(())
}
