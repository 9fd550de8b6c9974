use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Severity carried by an audit record. `Off` is only meaningful as a
/// trail setting; emitted records are always `Info`.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AuditLevel {
    Info,
    Off,
}

impl fmt::Display for AuditLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AuditLevel::Info => write!(f, "INFO"),
            AuditLevel::Off => write!(f, "OFF"),
        }
    }
}

/// The workflow operation that produced a record
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum AuditAction {
    Accept,
    Repair,
    Deliver,
}

impl fmt::Display for AuditAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AuditAction::Accept => write!(f, "accept"),
            AuditAction::Repair => write!(f, "repair"),
            AuditAction::Deliver => write!(f, "deliver"),
        }
    }
}

/// Which shop collection the mutation touched
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum StructureTag {
    Pending,
    Completed,
}

impl fmt::Display for StructureTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StructureTag::Pending => write!(f, "pending"),
            StructureTag::Completed => write!(f, "completed"),
        }
    }
}

/// One collection mutation, as it appears in the audit log
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct AuditRecord {
    pub timestamp: DateTime<Utc>,
    pub level: AuditLevel,
    pub action: AuditAction,
    pub component: String,
    pub bicycle_type: String,
    pub customer: String,
    pub structure: StructureTag,
}

impl AuditRecord {
    /// Build a record stamped with the current instant
    pub fn now(
        action: AuditAction,
        component: &str,
        bicycle_type: &str,
        customer: &str,
        structure: StructureTag,
    ) -> Self {
        Self {
            timestamp: Utc::now(),
            level: AuditLevel::Info,
            action,
            component: component.to_string(),
            bicycle_type: bicycle_type.to_string(),
            customer: customer.to_string(),
            structure,
        }
    }

    /// Render the record as one CSV line (no trailing newline).
    ///
    /// The message field contains a comma, so it is emitted inside
    /// literal double quotes to keep the line a single CSV record.
    /// This format is a compatibility contract; consumers parse it
    /// byte-for-byte.
    pub fn csv_line(&self) -> String {
        format!(
            "{},{},{},{},\"type={},customer={}\",{}",
            self.timestamp.to_rfc3339_opts(SecondsFormat::Millis, true),
            self.level,
            self.action,
            self.component,
            self.bicycle_type,
            self.customer,
            self.structure,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn fixed_record() -> AuditRecord {
        AuditRecord {
            timestamp: Utc.with_ymd_and_hms(2026, 8, 30, 12, 30, 0).unwrap(),
            level: AuditLevel::Info,
            action: AuditAction::Accept,
            component: "OrderShop".to_string(),
            bicycle_type: "RACE".to_string(),
            customer: "kunde1".to_string(),
            structure: StructureTag::Pending,
        }
    }

    #[test]
    fn test_csv_line_exact_format() {
        let record = fixed_record();
        assert_eq!(
            record.csv_line(),
            "2026-08-30T12:30:00.000Z,INFO,accept,OrderShop,\"type=RACE,customer=kunde1\",pending"
        );
    }

    #[test]
    fn test_csv_line_structure_and_action_tags() {
        let mut record = fixed_record();
        record.action = AuditAction::Repair;
        record.structure = StructureTag::Completed;
        assert_eq!(
            record.csv_line(),
            "2026-08-30T12:30:00.000Z,INFO,repair,OrderShop,\"type=RACE,customer=kunde1\",completed"
        );
    }

    #[test]
    fn test_display_tags_are_lowercase() {
        assert_eq!(AuditAction::Deliver.to_string(), "deliver");
        assert_eq!(StructureTag::Pending.to_string(), "pending");
        assert_eq!(StructureTag::Completed.to_string(), "completed");
        assert_eq!(AuditLevel::Info.to_string(), "INFO");
    }

    #[test]
    fn test_now_stamps_info_level() {
        let record = AuditRecord::now(
            AuditAction::Deliver,
            "OrderShop",
            "ROAD",
            "kunde2",
            StructureTag::Completed,
        );
        assert_eq!(record.level, AuditLevel::Info);
        assert_eq!(record.component, "OrderShop");
        assert_eq!(record.customer, "kunde2");
    }
}
