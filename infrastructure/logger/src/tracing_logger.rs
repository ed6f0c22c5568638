use business::domain::logger::Logger;
use tracing::{debug, error, info, warn};

/// Forwards the business logger port to `tracing` under the `receipt_scanner` target.
pub struct TracingLogger;

impl Logger for TracingLogger {
    fn info(&self, message: &str) {
        info!(target: "receipt_scanner", "{}", message);
    }
    fn warn(&self, message: &str) {
        warn!(target: "receipt_scanner", "{}", message);
    }
    fn error(&self, message: &str) {
        error!(target: "receipt_scanner", "{}", message);
    }
    fn debug(&self, message: &str) {
        debug!(target: "receipt_scanner", "{}", message);
    }
}
