use crate::config::Config;
use crate::routes;
use crate::store::Store;
use actix_web::dev::Server;
use actix_web::{web, App, HttpServer};
use std::net::SocketAddr;

/// Binds the HTTP listener for `store` and returns the server future along
/// with the addresses it actually bound (port 0 resolves here).
///
/// Binding is the only fallible step; the caller decides whether that is
/// fatal.
pub fn bind(
    config: &Config,
    store: web::Data<Store>,
) -> std::io::Result<(Server, Vec<SocketAddr>)> {
    let mut http_server = HttpServer::new(move || {
        App::new()
            .app_data(store.clone())
            .configure(routes::configure)
    });
    if let Some(workers) = config.workers {
        http_server = http_server.workers(workers);
    }

    let http_server = http_server.bind(config.listen_addr())?;
    let addrs = http_server.addrs();
    Ok((http_server.run(), addrs))
}
