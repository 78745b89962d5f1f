//! Request-logging adapter for synchronous HTTP handlers.

mod logging_middleware;

pub use logging_middleware::{LoggingMiddleware, logging_middleware, request_line};

use http::{Request, Response};

/// A synchronous request handler; the hosting server decides which thread calls it.
pub trait Handler<ReqBody, ResBody>: Send + Sync {
    fn handle(&self, req: Request<ReqBody>) -> Response<ResBody>;
}

impl<F, ReqBody, ResBody> Handler<ReqBody, ResBody> for F
where
    F: Fn(Request<ReqBody>) -> Response<ResBody> + Send + Sync,
{
    fn handle(&self, req: Request<ReqBody>) -> Response<ResBody> {
        self(req)
    }
}
