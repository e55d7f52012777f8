use actix_web::web;
use clap::Parser;
use kv_http::{server, Config, Store};
use tracing::info;
use tracing_subscriber::EnvFilter;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    let config = Config::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(&config.log_level)),
        )
        .with_target(true)
        .with_thread_ids(true)
        .init();

    let store = web::Data::new(Store::new());
    let (server, addrs) = server::bind(&config, store)?;
    for addr in &addrs {
        info!(%addr, "Listening");
    }

    server.await
}
