use actix_web::http::header::{self, ContentType};
use actix_web::http::{Method, StatusCode};
use actix_web::{HttpResponse, ResponseError};
use thiserror::Error;

/// Request-level failures. Each one is answered directly as an HTTP error
/// response and never touches the store.
#[derive(Debug, Error)]
pub enum KvError {
    #[error("Invalid HTTP method received; expected {expected}, received {received}")]
    MethodNotAllowed { expected: Method, received: Method },

    #[error("Error missing key")]
    MissingKey,

    #[error("Error parsing key and value")]
    MalformedQuery(#[from] ParseError),

    #[error("Error missing key: {0}")]
    NotFound(String),
}

/// The raw `/set` query had no `=` to split on.
#[derive(Debug, Error, PartialEq, Eq)]
#[error("missing '=' between key and value in {query:?}")]
pub struct ParseError {
    pub query: String,
}

impl ResponseError for KvError {
    fn status_code(&self) -> StatusCode {
        match self {
            KvError::MethodNotAllowed { .. } => StatusCode::METHOD_NOT_ALLOWED,
            KvError::MissingKey | KvError::MalformedQuery(_) => StatusCode::BAD_REQUEST,
            KvError::NotFound(_) => StatusCode::NOT_FOUND,
        }
    }

    fn error_response(&self) -> HttpResponse {
        let mut resp = HttpResponse::build(self.status_code());
        resp.content_type(ContentType::plaintext());
        if let KvError::MethodNotAllowed { expected, .. } = self {
            resp.insert_header((header::ALLOW, expected.as_str()));
        }
        resp.body(self.to_string())
    }
}
