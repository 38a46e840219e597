use serde::{Deserialize, Serialize};

/// Outcome classification for one batch item
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ItemStatus {
    /// Engine call succeeded
    Ok,
    /// Item skipped (missing relationship); batch continued
    Skipped,
    /// Engine call failed; batch continued
    Failed,
}

/// Per-item result: target label, status, and the displayed message
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ItemOutcome {
    pub label: String,
    pub status: ItemStatus,
    pub message: String,
}

impl ItemOutcome {
    pub fn ok(label: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            status: ItemStatus::Ok,
            message: message.into(),
        }
    }

    pub fn skipped(label: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            status: ItemStatus::Skipped,
            message: message.into(),
        }
    }

    pub fn failed(label: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            status: ItemStatus::Failed,
            message: message.into(),
        }
    }
}

/// Ordered per-item outcomes of one executed batch
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct BatchReport {
    items: Vec<ItemOutcome>,
}

impl BatchReport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, outcome: ItemOutcome) {
        self.items.push(outcome);
    }

    pub fn items(&self) -> &[ItemOutcome] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn ok_count(&self) -> usize {
        self.count(ItemStatus::Ok)
    }

    pub fn skipped_count(&self) -> usize {
        self.count(ItemStatus::Skipped)
    }

    pub fn failed_count(&self) -> usize {
        self.count(ItemStatus::Failed)
    }

    /// True when every item succeeded
    pub fn is_clean(&self) -> bool {
        self.items.iter().all(|i| i.status == ItemStatus::Ok)
    }

    /// One-line summary for operator audit trails
    pub fn summary(&self) -> String {
        format!(
            "{} ok, {} skipped, {} failed",
            self.ok_count(),
            self.skipped_count(),
            self.failed_count()
        )
    }

    fn count(&self, status: ItemStatus) -> usize {
        self.items.iter().filter(|i| i.status == status).count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_report_counts_by_status() {
        let mut report = BatchReport::new();
        report.push(ItemOutcome::ok("a", "done"));
        report.push(ItemOutcome::skipped("b", "not skinned"));
        report.push(ItemOutcome::ok("c", "done"));
        report.push(ItemOutcome::failed("d", "engine said no"));

        assert_eq!(report.ok_count(), 2);
        assert_eq!(report.skipped_count(), 1);
        assert_eq!(report.failed_count(), 1);
        assert!(!report.is_clean());
        assert_eq!(report.summary(), "2 ok, 1 skipped, 1 failed");
    }

    #[test]
    fn test_empty_report_is_clean() {
        let report = BatchReport::new();
        assert!(report.is_clean());
        assert!(report.is_empty());
    }
}
