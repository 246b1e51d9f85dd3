use crate::errors::{ReportingError, Result};
use crate::models::reports::entities::ReportDetails;

pub const MIN_RATING: i32 = 1;
pub const MAX_RATING: i32 = 5;

/// 报告字段间的一致性校验
pub fn validate_details(details: &ReportDetails) -> Result<()> {
    for (field, value) in [
        ("actualStudentsPresent", details.actual_students_present),
        ("totalRegisteredStudents", details.total_registered_students),
    ] {
        if let Some(v) = value
            && v < 0
        {
            return Err(ReportingError::validation(format!(
                "{field} must not be negative"
            )));
        }
    }

    if let (Some(present), Some(total)) = (
        details.actual_students_present,
        details.total_registered_students,
    ) && present > total
    {
        return Err(ReportingError::validation(format!(
            "actualStudentsPresent ({present}) exceeds totalRegisteredStudents ({total})"
        )));
    }

    for (field, value) in [
        ("rating", details.rating),
        ("classRating", details.class_rating),
        ("lecturerRating", details.lecturer_rating),
    ] {
        if let Some(v) = value
            && !(MIN_RATING..=MAX_RATING).contains(&v)
        {
            return Err(ReportingError::validation(format!(
                "{field} must be between {MIN_RATING} and {MAX_RATING}"
            )));
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_details_pass() {
        let details = ReportDetails {
            actual_students_present: Some(28),
            total_registered_students: Some(30),
            rating: Some(5),
            ..Default::default()
        };
        assert!(validate_details(&details).is_ok());
        assert!(validate_details(&ReportDetails::default()).is_ok());
    }

    #[test]
    fn test_attendance_above_registered_fails() {
        let details = ReportDetails {
            actual_students_present: Some(31),
            total_registered_students: Some(30),
            ..Default::default()
        };
        let err = validate_details(&details).unwrap_err();
        assert!(err.message().contains("exceeds"));
    }

    #[test]
    fn test_rating_out_of_range_fails() {
        let details = ReportDetails {
            class_rating: Some(0),
            ..Default::default()
        };
        assert!(validate_details(&details).is_err());

        let details = ReportDetails {
            lecturer_rating: Some(6),
            ..Default::default()
        };
        assert!(validate_details(&details).is_err());
    }

    #[test]
    fn test_negative_attendance_fails() {
        let details = ReportDetails {
            actual_students_present: Some(-1),
            ..Default::default()
        };
        assert!(validate_details(&details).is_err());
    }
}
