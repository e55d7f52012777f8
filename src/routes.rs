use crate::error::{KvError, ParseError};
use crate::store::Store;
use actix_web::http::header::ContentType;
use actix_web::http::Method;
use actix_web::{web, HttpRequest, HttpResponse};
use tracing::info;

/// Registers `/get` and `/set`. Both resources accept every method so the
/// handlers can answer a wrong verb with 405 instead of falling through to
/// the default 404.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(web::resource("/get").to(get))
        .service(web::resource("/set").to(set));
}

fn expect_method(req: &HttpRequest, expected: Method) -> Result<(), KvError> {
    if *req.method() != expected {
        return Err(KvError::MethodNotAllowed {
            expected,
            received: req.method().clone(),
        });
    }
    Ok(())
}

/// Splits a raw query on its first `=`. Anything after that, further `=`
/// included, is the value. Neither side is percent-decoded.
pub fn parse_key_value(query: &str) -> Result<(&str, &str), ParseError> {
    query.split_once('=').ok_or_else(|| ParseError {
        query: query.to_string(),
    })
}

/// First decoded value of `name` in `query`. Repeats after the first are
/// ignored; an undecodable query has no parameters.
fn first_param(query: &str, name: &str) -> Option<String> {
    let pairs = web::Query::<Vec<(String, String)>>::from_query(query).ok()?;
    pairs
        .into_inner()
        .into_iter()
        .find(|(k, _)| k == name)
        .map(|(_, v)| v)
}

async fn get(req: HttpRequest, kv: web::Data<Store>) -> Result<HttpResponse, KvError> {
    expect_method(&req, Method::GET)?;

    let key = first_param(req.query_string(), "key")
        .filter(|key| !key.is_empty())
        .ok_or(KvError::MissingKey)?;

    let value = {
        let entries = kv.read();
        entries
            .lookup(&key)
            .map(str::to_string)
            .ok_or_else(|| KvError::NotFound(key.clone()))?
    };

    info!(key = %key, value = %value, "Retrieved");
    Ok(HttpResponse::Ok()
        .content_type(ContentType::plaintext())
        .body(value))
}

async fn set(req: HttpRequest, kv: web::Data<Store>) -> Result<HttpResponse, KvError> {
    expect_method(&req, Method::POST)?;

    let (key, value) = parse_key_value(req.query_string()).map_err(|e| {
        info!(error = %e, "Failed to parse key and value");
        e
    })?;

    {
        let mut entries = kv.write();
        info!(key = %key, value = %value, "Writing");
        entries.upsert(key.to_string(), value.to_string());
    }

    Ok(HttpResponse::Ok().finish())
}
