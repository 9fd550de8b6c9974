use crate::record::AuditRecord;
use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

/// Destination for audit records. Implementations own durability;
/// callers own formatting (one record == one CSV line).
pub trait AuditSink {
    fn append(&mut self, record: &AuditRecord) -> Result<(), AuditError>;
}

/// Append-only file sink. Writes one CSV line per record.
pub struct FileSink {
    path: PathBuf,
}

impl FileSink {
    /// Creates the sink and ensures parent dirs exist. The file itself
    /// is created lazily on first append.
    pub fn new(path: impl AsRef<Path>) -> Result<Self, AuditError> {
        let path = path.as_ref().to_path_buf();
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }
        Ok(Self { path })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl AuditSink for FileSink {
    fn append(&mut self, record: &AuditRecord) -> Result<(), AuditError> {
        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)?;
        file.write_all(record.csv_line().as_bytes())?;
        file.write_all(b"\n")?;
        Ok(())
    }
}

/// In-memory sink for tests and in-process inspection. Clones share
/// the same backing store, so a test can keep a handle while the shop
/// owns the boxed sink.
#[derive(Clone, Default)]
pub struct MemorySink {
    records: Arc<Mutex<Vec<AuditRecord>>>,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn records(&self) -> Vec<AuditRecord> {
        self.records.lock().expect("audit sink lock poisoned").clone()
    }

    pub fn lines(&self) -> Vec<String> {
        self.records().iter().map(AuditRecord::csv_line).collect()
    }

    pub fn len(&self) -> usize {
        self.records.lock().expect("audit sink lock poisoned").len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl AuditSink for MemorySink {
    fn append(&mut self, record: &AuditRecord) -> Result<(), AuditError> {
        self.records
            .lock()
            .expect("audit sink lock poisoned")
            .push(record.clone());
        Ok(())
    }
}

#[derive(Debug, thiserror::Error)]
pub enum AuditError {
    #[error("audit sink i/o failure: {0}")]
    Io(#[from] std::io::Error),
}
