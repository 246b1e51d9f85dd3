//! 报告状态流转
//!
//! | 当前 \ 目标      | reviewed | submitted_to_pl | pl_reviewed |
//! |------------------|----------|-----------------|-------------|
//! | submitted        | ✓        | ✓               | ✓           |
//! | reviewed         | ✓        | ✓               | ✓           |
//! | submitted_to_pl  |          |                 | ✓           |
//! | pl_reviewed      |          |                 | ✓           |
//!
//! 任何状态都不能回到 submitted。

use chrono::{DateTime, Utc};

use crate::errors::{ReportingError, Result};
use crate::models::reports::entities::{Report, ReportStatus};

impl ReportStatus {
    pub fn can_transition_to(self, next: ReportStatus) -> bool {
        use ReportStatus::*;
        matches!(
            (self, next),
            (Submitted | Reviewed, Reviewed | SubmittedToPl | PlReviewed)
                | (SubmittedToPl | PlReviewed, PlReviewed)
        )
    }
}

fn check_transition(report: &Report, next: ReportStatus, enforce: bool) -> Result<()> {
    if enforce && !report.status.can_transition_to(next) {
        return Err(ReportingError::invalid_transition(format!(
            "Report {} cannot move from '{}' to '{}'",
            report.id, report.status, next
        )));
    }
    Ok(())
}

/// 审阅意见类型
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FeedbackAction {
    /// 一线审阅
    Review,
    /// PRL 审阅评分表
    RatingReview,
    /// PL 审阅
    PlReview,
}

impl FeedbackAction {
    pub fn target_status(self) -> ReportStatus {
        match self {
            FeedbackAction::Review | FeedbackAction::RatingReview => ReportStatus::Reviewed,
            FeedbackAction::PlReview => ReportStatus::PlReviewed,
        }
    }

    /// 写入意见、时间戳与新状态
    pub fn apply(
        self,
        report: &mut Report,
        feedback: String,
        now: DateTime<Utc>,
        enforce: bool,
    ) -> Result<()> {
        let next = self.target_status();
        check_transition(report, next, enforce)?;

        match self {
            FeedbackAction::Review => {
                report.feedback = Some(feedback);
                report.feedback_date = Some(now);
            }
            FeedbackAction::RatingReview => {
                report.prl_feedback = Some(feedback);
                report.prl_feedback_date = Some(now);
            }
            FeedbackAction::PlReview => {
                report.pl_feedback = Some(feedback);
                report.pl_feedback_date = Some(now);
            }
        }
        report.status = next;
        report.updated_at = now;
        Ok(())
    }
}

/// 单条报告上报 PL 的结果
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EscalationOutcome {
    Escalated,
    AlreadySubmitted,
    Rejected(String),
}

pub fn escalate(report: &mut Report, now: DateTime<Utc>, enforce: bool) -> EscalationOutcome {
    if report.is_submitted_to_pl {
        return EscalationOutcome::AlreadySubmitted;
    }
    if let Err(e) = check_transition(report, ReportStatus::SubmittedToPl, enforce) {
        return EscalationOutcome::Rejected(e.message().to_string());
    }

    report.is_submitted_to_pl = true;
    report.submitted_to_pl_date = Some(now);
    report.status = ReportStatus::SubmittedToPl;
    report.updated_at = now;
    EscalationOutcome::Escalated
}
