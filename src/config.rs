use clap::Parser;

/// Listener and logging settings. Every flag can also be set from the
/// environment.
#[derive(Parser, Debug, Clone)]
#[command(author, version, about, long_about = None)]
pub struct Config {
    /// Interface to listen on.
    #[arg(long, env = "KV_HOST", default_value = "0.0.0.0")]
    pub host: String,
    #[arg(short, long, env = "KV_PORT", default_value_t = 8080)]
    pub port: u16,
    /// HTTP worker threads; defaults to the available parallelism.
    #[arg(short, long, env = "KV_WORKERS")]
    pub workers: Option<usize>,
    /// Fallback filter when RUST_LOG is unset.
    #[arg(long, env = "KV_LOG_LEVEL", default_value = "info")]
    pub log_level: String,
}

impl Config {
    pub fn listen_addr(&self) -> (&str, u16) {
        (self.host.as_str(), self.port)
    }
}
