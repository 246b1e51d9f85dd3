//! 报告审批流程的核心规则
//!
//! 分组、状态流转、批量上报计数、汇总统计与导出行，均不依赖存储层。

pub mod escalation;
pub mod export;
pub mod grouping;
pub mod summary;
pub mod transitions;
pub mod validation;

pub use grouping::Bucket;
pub use transitions::{EscalationOutcome, FeedbackAction, escalate};
pub use validation::validate_details;

#[cfg(test)]
pub(crate) mod test_support {
    use crate::models::common::{ProgramType, Stream};
    use crate::models::reports::entities::{Report, ReportDetails, ReportKind, ReportStatus};

    pub fn report(id: i64, kind: ReportKind) -> Report {
        let now = chrono::Utc::now();
        Report {
            id,
            kind,
            stream: Stream::It,
            program_type: ProgramType::Degree,
            status: ReportStatus::Submitted,
            details: ReportDetails::default(),
            feedback: None,
            feedback_date: None,
            prl_feedback: None,
            prl_feedback_date: None,
            pl_feedback: None,
            pl_feedback_date: None,
            is_submitted_to_pl: false,
            submitted_to_pl_date: None,
            created_at: now,
            updated_at: now,
        }
    }
}
