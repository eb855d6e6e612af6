//! Decodes the `Authorization: Bearer` JWT on every request and stores the
//! result in request extensions for handlers to pick up.

use middleware::extractor::ExtractionMiddleware;

pub mod middleware {
    pub mod extractor;
}

pub fn middleware() -> ExtractionMiddleware {
    ExtractionMiddleware::new()
}
