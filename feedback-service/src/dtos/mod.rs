use serde::{Deserialize, Serialize};
use validator::Validate;

/// Pass/fail outcome of the academic period.
///
/// Canonical labels are English; the Spanish labels used by older clients
/// are accepted on the wire.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AcademicStatus {
    #[serde(alias = "Aprobado")]
    Approved,
    #[serde(alias = "Suspenso")]
    Failed,
}

impl AcademicStatus {
    pub fn label(&self) -> &'static str {
        match self {
            AcademicStatus::Approved => "Approved",
            AcademicStatus::Failed => "Failed",
        }
    }
}

/// Inbound academic summary. Immutable once validated; lives for one call.
#[derive(Debug, Deserialize, Validate)]
pub struct FeedbackRequest {
    #[validate(length(min = 1, max = 80, message = "Name must be 1-80 characters"))]
    pub name: String,

    #[validate(range(min = 0.0, max = 20.0, message = "Average must be between 0 and 20"))]
    pub average: f64,

    pub status: AcademicStatus,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct FeedbackResponse {
    pub feedback: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request(name: &str, average: f64) -> FeedbackRequest {
        FeedbackRequest {
            name: name.to_string(),
            average,
            status: AcademicStatus::Approved,
        }
    }

    #[test]
    fn accepts_in_range_request() {
        assert!(request("Ana", 9.0).validate().is_ok());
        assert!(request("Ana", 0.0).validate().is_ok());
        assert!(request("Ana", 20.0).validate().is_ok());
    }

    #[test]
    fn rejects_average_out_of_range() {
        assert!(request("Ana", -0.5).validate().is_err());
        assert!(request("Ana", 20.5).validate().is_err());
    }

    #[test]
    fn rejects_empty_and_oversized_name() {
        assert!(request("", 10.0).validate().is_err());
        assert!(request(&"x".repeat(81), 10.0).validate().is_err());
        assert!(request(&"x".repeat(80), 10.0).validate().is_ok());
    }

    #[test]
    fn status_accepts_spanish_aliases() {
        let approved: AcademicStatus = serde_json::from_str("\"Aprobado\"").unwrap();
        assert_eq!(approved, AcademicStatus::Approved);
        let failed: AcademicStatus = serde_json::from_str("\"Suspenso\"").unwrap();
        assert_eq!(failed, AcademicStatus::Failed);
    }

    #[test]
    fn status_rejects_unknown_label() {
        assert!(serde_json::from_str::<AcademicStatus>("\"Pending\"").is_err());
    }
}
