use crate::models::{BicycleType, Order};
use cycle_audit::{AuditAction, AuditError, AuditLevel, AuditSink, AuditTrail, FileSink, StructureTag};
use std::collections::VecDeque;
use tracing::debug;

/// Most orders the shop keeps open at once
const MAX_PENDING: usize = 5;

/// Default audit target when no sink is supplied
const DEFAULT_LOG_PATH: &str = "shop-log.csv";

/// In-memory repair workflow: accept into a FIFO queue, repair in
/// arrival order, deliver by customer. Every collection mutation is
/// appended to the audit trail; the trail is observational only and
/// never influences an outcome.
///
/// Single logical caller at a time. Callers that share a shop across
/// threads must wrap it in their own mutual-exclusion boundary; the
/// three operations each run to completion without suspending.
pub struct OrderShop {
    pending: VecDeque<Order>,
    // Unordered semantics: lookups scan, removal swaps. A Vec instead
    // of a HashSet so two equal-valued orders can coexist.
    completed: Vec<Order>,
    audit: AuditTrail,
}

impl OrderShop {
    /// Create an empty shop writing audit records to the given sink.
    pub fn new(sink: Box<dyn AuditSink>) -> Self {
        Self {
            pending: VecDeque::new(),
            completed: Vec::new(),
            audit: AuditTrail::new("OrderShop", sink),
        }
    }

    /// Create an empty shop auditing to the default log file.
    pub fn with_default_log() -> Result<Self, AuditError> {
        let sink = FileSink::new(DEFAULT_LOG_PATH)?;
        Ok(Self::new(Box::new(sink)))
    }

    /// Take in a repair order. Admission rules, checked in order:
    /// gravel bikes and e-bikes are never serviced, one open order per
    /// customer, at most five open orders. Rejection is a normal
    /// outcome (`false`), not an error, and leaves no trace.
    pub fn accept(&mut self, order: Order) -> bool {
        if matches!(order.bicycle_type, BicycleType::Gravel | BicycleType::Ebike) {
            debug!(customer = %order.customer, bicycle_type = %order.bicycle_type, "order rejected: type not serviced");
            return false;
        }
        if self.pending.iter().any(|o| o.customer == order.customer) {
            debug!(customer = %order.customer, "order rejected: customer already has an open order");
            return false;
        }
        if self.pending.len() >= MAX_PENDING {
            debug!(customer = %order.customer, "order rejected: shop at capacity");
            return false;
        }

        let bicycle_type = order.bicycle_type.to_string();
        let customer = order.customer.clone();
        self.pending.push_back(order);
        self.audit.record(
            AuditAction::Accept,
            &bicycle_type,
            &customer,
            StructureTag::Pending,
        );
        true
    }

    /// Repair the oldest accepted order and move it to the completed
    /// set. Returns `None` when nothing is waiting.
    ///
    /// A successful repair appends two audit records, one per touched
    /// collection. That per-collection trace is observable behavior
    /// and part of the log's compatibility contract.
    pub fn repair(&mut self) -> Option<Order> {
        let order = self.pending.pop_front()?;
        self.completed.push(order.clone());

        let bicycle_type = order.bicycle_type.to_string();
        self.audit.record(
            AuditAction::Repair,
            &bicycle_type,
            &order.customer,
            StructureTag::Pending,
        );
        self.audit.record(
            AuditAction::Repair,
            &bicycle_type,
            &order.customer,
            StructureTag::Completed,
        );
        debug!(customer = %order.customer, "order repaired");
        Some(order)
    }

    /// Hand a repaired order back to its customer. Returns `None` when
    /// no completed order matches; the match is case-sensitive.
    pub fn deliver(&mut self, customer: &str) -> Option<Order> {
        let idx = self.completed.iter().position(|o| o.customer == customer)?;
        let order = self.completed.swap_remove(idx);

        self.audit.record(
            AuditAction::Deliver,
            &order.bicycle_type.to_string(),
            &order.customer,
            StructureTag::Completed,
        );
        debug!(customer = %order.customer, "order delivered");
        Some(order)
    }

    /// Suppress or restore audit output without changing what accept,
    /// repair and deliver return.
    pub fn set_audit_level(&mut self, level: AuditLevel) {
        self.audit.set_level(level);
    }

    pub fn audit_level(&self) -> AuditLevel {
        self.audit.level()
    }

    pub fn pending_count(&self) -> usize {
        self.pending.len()
    }

    pub fn completed_count(&self) -> usize {
        self.completed.len()
    }
}
