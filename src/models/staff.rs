//! Staff member model.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::RotaPattern;

/// Represents a rostered staff member.
///
/// The anchor date is day 0 of the duty cycle and is always the first day of
/// a duty block. Dates are modeled as [`NaiveDate`] so the whole system
/// shares one day-precision calendar representation with no time-of-day or
/// time-zone component to drift.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StaffMember {
    /// Unique identifier, assigned by the system and immutable thereafter.
    pub id: String,
    /// Display name.
    pub name: String,
    /// Free-form role label (e.g. "Site Doctor", "RN", "Trauma Head").
    pub designation: String,
    /// The validated duty cycle, or `None` if the member has no usable
    /// pattern and is therefore permanently off.
    pub rota_pattern: Option<RotaPattern>,
    /// Day 0 of the duty cycle.
    pub anchor_date: NaiveDate,
    /// Whether the member is currently rostered at all.
    pub active: bool,
    /// Optional avatar reference for display.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avatar: Option<String>,
}

impl StaffMember {
    /// Returns true if the designation counts toward the doctors-on-duty
    /// figure ("Doctor" or "Trauma" appears in the label).
    pub fn is_doctor(&self) -> bool {
        self.designation.contains("Doctor") || self.designation.contains("Trauma")
    }

    /// Returns true if the designation counts toward the nurses-on-duty
    /// figure (the label is exactly "RN").
    pub fn is_nurse(&self) -> bool {
        self.designation == "RN"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create_test_staff(designation: &str) -> StaffMember {
        StaffMember {
            id: "stf_001".to_string(),
            name: "Dr Ghulam Ali".to_string(),
            designation: designation.to_string(),
            rota_pattern: RotaPattern::parse_lenient("15/13"),
            anchor_date: NaiveDate::from_ymd_opt(2026, 1, 16).unwrap(),
            active: true,
            avatar: None,
        }
    }

    #[test]
    fn test_deserialize_staff_member() {
        let json = r#"{
            "id": "stf_001",
            "name": "Dr Ghulam Ali",
            "designation": "Site Doctor",
            "rota_pattern": "15/13",
            "anchor_date": "2026-01-16",
            "active": true
        }"#;

        let staff: StaffMember = serde_json::from_str(json).unwrap();
        assert_eq!(staff.id, "stf_001");
        assert_eq!(staff.rota_pattern.unwrap().cycle_length(), 28);
        assert_eq!(
            staff.anchor_date,
            NaiveDate::from_ymd_opt(2026, 1, 16).unwrap()
        );
        assert!(staff.active);
        assert!(staff.avatar.is_none());
    }

    #[test]
    fn test_deserialize_staff_without_pattern() {
        let json = r#"{
            "id": "stf_002",
            "name": "Arfa Manzoor",
            "designation": "RN",
            "rota_pattern": null,
            "anchor_date": "2026-01-28",
            "active": false,
            "avatar": "https://example.com/a.png"
        }"#;

        let staff: StaffMember = serde_json::from_str(json).unwrap();
        assert!(staff.rota_pattern.is_none());
        assert!(!staff.active);
        assert_eq!(staff.avatar.as_deref(), Some("https://example.com/a.png"));
    }

    #[test]
    fn test_serialize_round_trip() {
        let staff = create_test_staff("Site Doctor");
        let json = serde_json::to_string(&staff).unwrap();
        let deserialized: StaffMember = serde_json::from_str(&json).unwrap();
        assert_eq!(staff, deserialized);
    }

    #[test]
    fn test_is_doctor_matches_doctor_designations() {
        assert!(create_test_staff("Site Doctor").is_doctor());
        assert!(create_test_staff("Trauma Head").is_doctor());
        assert!(!create_test_staff("RN").is_doctor());
        assert!(!create_test_staff("Technician").is_doctor());
    }

    #[test]
    fn test_is_nurse_requires_exact_label() {
        assert!(create_test_staff("RN").is_nurse());
        assert!(!create_test_staff("Senior RN").is_nurse());
        assert!(!create_test_staff("Site Doctor").is_nurse());
    }
}
