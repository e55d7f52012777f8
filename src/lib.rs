//! In-memory string key/value store served over two HTTP endpoints,
//! `GET /get?key=...` and `POST /set?key=value`.

pub mod config;
pub mod error;
pub mod routes;
pub mod server;
pub mod store;

pub use config::Config;
pub use error::{KvError, ParseError};
pub use store::{Entries, Store};
