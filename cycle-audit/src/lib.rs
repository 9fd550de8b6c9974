pub mod record;
pub mod sink;
pub mod trail;

pub use record::{AuditAction, AuditLevel, AuditRecord, StructureTag};
pub use sink::{AuditError, AuditSink, FileSink, MemorySink};
pub use trail::AuditTrail;
