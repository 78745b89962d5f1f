use super::Handler;
use crate::Error;
use crate::logger::Logger;
use http::{Method, Request, Response};
use std::sync::Arc;
use std::time::{Duration, Instant};

/// Measures each request and logs it through [`Logger::log`] once the wrapped handler returns.
///
/// Wrapping never closes the logger. The file handle lives until
/// [`LoggingMiddleware::shutdown`] runs or the last `Arc<Logger>` is dropped.
pub struct LoggingMiddleware<H> {
    logger: Arc<Logger>,
    next: H,
}

impl<H> LoggingMiddleware<H> {
    /// Shares `logger` with the caller, who keeps the right to close it.
    pub const fn new(logger: Arc<Logger>, next: H) -> Self {
        Self { logger, next }
    }

    /// The shared logger, for writing application records alongside request lines.
    #[must_use]
    pub const fn logger(&self) -> &Arc<Logger> {
        &self.logger
    }

    /// Retires the handler and closes the shared logger.
    ///
    /// # Errors
    /// The I/O error from the logger's final flush.
    pub fn shutdown(self) -> Result<(), Error> {
        tracing::debug!("request logging shut down");
        self.logger.close()
    }
}

impl<H, ReqBody, ResBody> Handler<ReqBody, ResBody> for LoggingMiddleware<H>
where
    H: Handler<ReqBody, ResBody>,
{
    fn handle(&self, req: Request<ReqBody>) -> Response<ResBody> {
        let start = Instant::now();
        let method = req.method().clone();
        let path = req.uri().path().to_string();

        let res = self.next.handle(req);

        self.logger.log(&request_line(&method, &path, start.elapsed()));
        res
    }
}

/// Wraps `next` so every request it serves is logged.
pub const fn logging_middleware<H>(logger: Arc<Logger>, next: H) -> LoggingMiddleware<H> {
    LoggingMiddleware::new(logger, next)
}

/// `Method: GET | Path: /health | Duration: 1.2ms`
#[must_use]
pub fn request_line(method: &Method, path: &str, elapsed: Duration) -> String {
    format!("Method: {method} | Path: {path} | Duration: {elapsed:?}")
}
