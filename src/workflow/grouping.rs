//! 报告分组
//!
//! 报告类型是唯一判别字段，四个分组互不重叠且覆盖全部报告。

use crate::models::reports::entities::{Report, ReportKind};
use crate::models::reports::responses::{BucketCounts, GroupedReports};

/// 分组
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Bucket {
    Lecturer,
    Student,
    Prl,
    Ratings,
}

impl Bucket {
    /// 导出顺序
    pub const ORDER: [Bucket; 4] = [Bucket::Lecturer, Bucket::Student, Bucket::Prl, Bucket::Ratings];
}

impl From<ReportKind> for Bucket {
    fn from(kind: ReportKind) -> Self {
        match kind {
            ReportKind::Lecturer => Bucket::Lecturer,
            ReportKind::Student => Bucket::Student,
            ReportKind::Prl => Bucket::Prl,
            ReportKind::Rating => Bucket::Ratings,
        }
    }
}

impl GroupedReports {
    pub fn from_reports(reports: impl IntoIterator<Item = Report>) -> Self {
        let mut grouped = GroupedReports::default();
        for report in reports {
            grouped.bucket_mut(Bucket::from(report.kind)).push(report);
        }
        grouped
    }

    pub fn bucket(&self, bucket: Bucket) -> &[Report] {
        match bucket {
            Bucket::Lecturer => &self.lecturer,
            Bucket::Student => &self.student,
            Bucket::Prl => &self.prl,
            Bucket::Ratings => &self.ratings,
        }
    }

    fn bucket_mut(&mut self, bucket: Bucket) -> &mut Vec<Report> {
        match bucket {
            Bucket::Lecturer => &mut self.lecturer,
            Bucket::Student => &mut self.student,
            Bucket::Prl => &mut self.prl,
            Bucket::Ratings => &mut self.ratings,
        }
    }

    pub fn counts(&self) -> BucketCounts {
        BucketCounts {
            lecturer: self.lecturer.len(),
            student: self.student.len(),
            prl: self.prl.len(),
            ratings: self.ratings.len(),
            total: self.total(),
        }
    }

    pub fn total(&self) -> usize {
        self.lecturer.len() + self.student.len() + self.prl.len() + self.ratings.len()
    }

    /// 按导出顺序遍历全部报告
    pub fn iter_ordered(&self) -> impl Iterator<Item = &Report> {
        Bucket::ORDER.into_iter().flat_map(|b| self.bucket(b).iter())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::workflow::test_support::report;

    #[test]
    fn test_grouping_partitions_by_kind() {
        let reports = vec![
            report(1, ReportKind::Lecturer),
            report(2, ReportKind::Rating),
            report(3, ReportKind::Student),
            report(4, ReportKind::Prl),
            report(5, ReportKind::Lecturer),
        ];

        let grouped = GroupedReports::from_reports(reports);
        let ids = |b: Bucket| grouped.bucket(b).iter().map(|r| r.id).collect::<Vec<_>>();

        assert_eq!(ids(Bucket::Lecturer), vec![1, 5]);
        assert_eq!(ids(Bucket::Student), vec![3]);
        assert_eq!(ids(Bucket::Prl), vec![4]);
        assert_eq!(ids(Bucket::Ratings), vec![2]);
    }

    #[test]
    fn test_counts_match_partition() {
        let grouped = GroupedReports::from_reports(vec![
            report(1, ReportKind::Student),
            report(2, ReportKind::Student),
            report(3, ReportKind::Rating),
        ]);
        let counts = grouped.counts();

        assert_eq!(counts.student, 2);
        assert_eq!(counts.ratings, 1);
        assert_eq!(counts.lecturer, 0);
        assert_eq!(counts.total, 3);
    }

    #[test]
    fn test_iter_ordered_follows_bucket_order() {
        let grouped = GroupedReports::from_reports(vec![
            report(1, ReportKind::Rating),
            report(2, ReportKind::Prl),
            report(3, ReportKind::Student),
            report(4, ReportKind::Lecturer),
        ]);
        let ids: Vec<i64> = grouped.iter_ordered().map(|r| r.id).collect();
        assert_eq!(ids, vec![4, 3, 2, 1]);
    }

    #[test]
    fn test_empty_grouping() {
        let grouped = GroupedReports::from_reports(Vec::new());
        assert_eq!(grouped.total(), 0);
        assert_eq!(grouped.counts(), BucketCounts::default());
    }
}
