use crate::record::{AuditAction, AuditLevel, AuditRecord, StructureTag};
use crate::sink::AuditSink;
use tracing::warn;

/// Audit collaborator owned by a workflow component. Gates records by
/// level and delivers them to the sink best-effort: a failed append is
/// reported as a diagnostic and otherwise swallowed, so logging can
/// never affect a business outcome or roll back a state change.
pub struct AuditTrail {
    component: String,
    sink: Box<dyn AuditSink>,
    level: AuditLevel,
}

impl AuditTrail {
    pub fn new(component: impl Into<String>, sink: Box<dyn AuditSink>) -> Self {
        Self {
            component: component.into(),
            sink,
            level: AuditLevel::Info,
        }
    }

    /// External verbosity control. `Off` suppresses all output without
    /// touching the owning component's behavior.
    pub fn set_level(&mut self, level: AuditLevel) {
        self.level = level;
    }

    pub fn level(&self) -> AuditLevel {
        self.level
    }

    /// Record one collection mutation. Call after the mutation has been
    /// applied, never before.
    pub fn record(
        &mut self,
        action: AuditAction,
        bicycle_type: &str,
        customer: &str,
        structure: StructureTag,
    ) {
        if self.level == AuditLevel::Off {
            return;
        }
        let record = AuditRecord::now(action, &self.component, bicycle_type, customer, structure);
        if let Err(err) = self.sink.append(&record) {
            warn!(component = %self.component, error = %err, "audit append failed, state change kept");
        }
    }
}
