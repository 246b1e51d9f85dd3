//! 批量上报 PL 的计数
//!
//! 逐条处理，单条失败不影响其余记录，整批不在一个事务中。

use crate::models::reports::requests::ReportRef;
use crate::models::reports::responses::GroupSubmitResponse;

use super::transitions::EscalationOutcome;

impl GroupSubmitResponse {
    pub fn new(total_selected: usize) -> Self {
        Self {
            total_selected,
            ..Default::default()
        }
    }

    pub fn record(&mut self, report: &ReportRef, outcome: EscalationOutcome) {
        match outcome {
            EscalationOutcome::Escalated => self.submitted_count += 1,
            EscalationOutcome::AlreadySubmitted => self.already_submitted_count += 1,
            EscalationOutcome::Rejected(reason) => self.record_failure(report, &reason),
        }
    }

    pub fn record_not_found(&mut self, report: &ReportRef) {
        self.not_found_count += 1;
        self.errors.push(format!("Report {report} not found"));
    }

    pub fn record_failure(&mut self, report: &ReportRef, reason: &str) {
        self.failed_count += 1;
        self.errors
            .push(format!("Failed to submit report {report}: {reason}"));
    }

    pub fn summary_message(&self) -> String {
        format!(
            "{} report(s) submitted to PL, {} already submitted, {} not found, {} failed",
            self.submitted_count,
            self.already_submitted_count,
            self.not_found_count,
            self.failed_count
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_counts_accumulate() {
        let mut tally = GroupSubmitResponse::new(4);
        tally.record(&ReportRef::Id(1), EscalationOutcome::Escalated);
        tally.record(&ReportRef::Id(2), EscalationOutcome::AlreadySubmitted);
        tally.record_not_found(&ReportRef::Invalid("x9".to_string()));
        tally.record(
            &ReportRef::Id(4),
            EscalationOutcome::Rejected("bad status".to_string()),
        );

        assert_eq!(tally.submitted_count, 1);
        assert_eq!(tally.already_submitted_count, 1);
        assert_eq!(tally.not_found_count, 1);
        assert_eq!(tally.failed_count, 1);
        assert_eq!(tally.total_selected, 4);
        assert_eq!(tally.errors.len(), 2);
        assert!(tally.errors[0].contains("x9"));
        assert!(tally.errors[1].contains("bad status"));
    }

    #[test]
    fn test_summary_message() {
        let mut tally = GroupSubmitResponse::new(1);
        tally.record(&ReportRef::Id(1), EscalationOutcome::Escalated);
        assert!(tally.summary_message().starts_with("1 report(s) submitted to PL"));
    }
}
