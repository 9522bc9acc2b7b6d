//! Exporter registry.
//!
//! `ReportService` knows nothing about concrete formats: new formats are
//! added by implementing [`Exporter`] and registering an instance.

use crate::domain::FailurePolicy;
use crate::export::{ExportError, Exporter};
use thiserror::Error;

/// A registered exporter that failed during `generate`.
#[derive(Debug, Error)]
#[error("exporter #{} ({exporter}) failed", .position + 1)]
pub struct HandlerFailure {
    /// Zero-based registration index; messages show it one-based.
    pub position: usize,
    pub exporter: String,
    #[source]
    pub source: ExportError,
}

#[derive(Debug, Error)]
pub enum GenerateError {
    #[error(transparent)]
    Aborted(HandlerFailure),

    #[error("{} of {total} exporters failed", .failures.len())]
    Partial { total: usize, failures: Vec<HandlerFailure> },
}

impl GenerateError {
    pub fn failures(&self) -> &[HandlerFailure] {
        match self {
            GenerateError::Aborted(failure) => std::slice::from_ref(failure),
            GenerateError::Partial { failures, .. } => failures,
        }
    }
}

#[derive(Default)]
pub struct ReportService {
    exporters: Vec<Box<dyn Exporter>>,
    policy: FailurePolicy,
}

impl ReportService {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_policy(policy: FailurePolicy) -> Self {
        Self { exporters: Vec::new(), policy }
    }

    pub fn policy(&self) -> FailurePolicy {
        self.policy
    }

    /// Append an exporter. Registering the same type twice is allowed and
    /// produces its output twice.
    pub fn register<E: Exporter + 'static>(&mut self, exporter: E) -> &mut Self {
        self.register_boxed(Box::new(exporter))
    }

    pub fn register_boxed(&mut self, exporter: Box<dyn Exporter>) -> &mut Self {
        tracing::debug!(exporter = exporter.name(), position = self.exporters.len(), "registered");
        self.exporters.push(exporter);
        self
    }

    pub fn len(&self) -> usize {
        self.exporters.len()
    }

    pub fn is_empty(&self) -> bool {
        self.exporters.is_empty()
    }

    pub fn exporter_names(&self) -> Vec<&str> {
        self.exporters.iter().map(|e| e.name()).collect()
    }

    /// Run every exporter on `payload`, in registration order.
    ///
    /// Output already produced by earlier exporters is kept when a later one
    /// fails.
    pub fn generate(&self, payload: &str) -> Result<(), GenerateError> {
        let mut failures = Vec::new();

        for (position, exporter) in self.exporters.iter().enumerate() {
            tracing::debug!(exporter = exporter.name(), position, "exporting");
            let Err(source) = exporter.export(payload) else {
                continue;
            };

            tracing::warn!(exporter = exporter.name(), position, "export failed: {}", source);
            let failure =
                HandlerFailure { position, exporter: exporter.name().to_string(), source };
            match self.policy {
                FailurePolicy::FailFast => return Err(GenerateError::Aborted(failure)),
                FailurePolicy::Continue => failures.push(failure),
            }
        }

        if failures.is_empty() {
            Ok(())
        } else {
            Err(GenerateError::Partial { total: self.exporters.len(), failures })
        }
    }
}
