use crate::error::FetchError;

/// Destination for non-fatal fetch failures.
pub trait DiagnosticSink {
    fn report(&mut self, error: &FetchError);
}

/// Sink that writes every report to `tracing` at error level.
#[derive(Clone, Copy, Debug, Default)]
pub struct TracingSink;

impl DiagnosticSink for TracingSink {
    fn report(&mut self, error: &FetchError) {
        tracing::error!("Error fetching profiles: {}", error);
    }
}
