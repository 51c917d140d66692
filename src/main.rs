use std::sync::Arc;

use nocache_static_server::config::{AppState, Config};
use nocache_static_server::server;

fn main() {
    if let Err(e) = run() {
        eprintln!("[ERROR] {e}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), Box<dyn std::error::Error>> {
    let cfg = Config::load()?;

    // Multi-threaded runtime; worker count follows `server.workers` when set
    let mut runtime_builder = tokio::runtime::Builder::new_multi_thread();
    runtime_builder.enable_all();

    if let Some(workers) = cfg.server.workers {
        runtime_builder.worker_threads(workers);
    }

    let runtime = runtime_builder.build()?;

    runtime.block_on(async_main(&cfg))
}

async fn async_main(cfg: &Config) -> Result<(), Box<dyn std::error::Error>> {
    let state = Arc::new(AppState::new(cfg)?);
    server::run(state).await
}
