//! The per-execution logger handed to nodes by the host.

use tracing::{debug, error, info, warn};

/// Sink for workflow log lines.
///
/// Hosts that render logs in their own UI implement this; everyone else uses
/// [`TracingLogger`].
pub trait WorkflowLogger: Send + Sync {
    fn debug(&self, message: &str);
    fn info(&self, message: &str);
    fn warn(&self, message: &str);
    fn error(&self, message: &str);
}

/// Forwards workflow log lines to `tracing`, tagged with the node id.
#[derive(Debug, Clone)]
pub struct TracingLogger {
    node: String,
}

impl TracingLogger {
    pub fn new(node: impl Into<String>) -> Self {
        Self { node: node.into() }
    }
}

impl WorkflowLogger for TracingLogger {
    fn debug(&self, message: &str) {
        debug!(node = %self.node, "{message}");
    }

    fn info(&self, message: &str) {
        info!(node = %self.node, "{message}");
    }

    fn warn(&self, message: &str) {
        warn!(node = %self.node, "{message}");
    }

    fn error(&self, message: &str) {
        error!(node = %self.node, "{message}");
    }
}
