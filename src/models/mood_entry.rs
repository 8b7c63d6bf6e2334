use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use crate::error::AppError;
use crate::models::mood::Mood;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MoodEntry {
    pub id: Uuid,
    pub date: NaiveDate,
    pub mood: Mood,
    pub energy: i32,
    pub stress: i32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    pub created_at: DateTime<Utc>,
}

/// POST /api/mood-entries
#[derive(Debug, Deserialize, Validate)]
pub struct CheckInRequest {
    pub mood: Option<String>,

    #[validate(range(min = 1, max = 10, message = "Energy must be between 1 and 10"))]
    pub energy: i32,

    #[validate(range(min = 1, max = 10, message = "Stress must be between 1 and 10"))]
    pub stress: i32,

    #[validate(length(max = 2000, message = "Notes must be at most 2000 characters"))]
    pub notes: Option<String>,
}

/// A check-in that passed boundary validation.
#[derive(Debug, Clone, PartialEq)]
pub struct CheckIn {
    pub mood: Mood,
    pub energy: i32,
    pub stress: i32,
    pub notes: Option<String>,
}

impl CheckInRequest {
    pub fn into_check_in(self) -> Result<CheckIn, AppError> {
        self.validate()?;

        let mood = match self.mood.as_deref().map(str::trim) {
            None | Some("") => return Err(AppError::Validation("Mood is required".into())),
            Some(raw) => raw
                .parse::<Mood>()
                .map_err(|e| AppError::Validation(e.to_string()))?,
        };

        let notes = self
            .notes
            .map(|n| n.trim().to_string())
            .filter(|n| !n.is_empty());

        Ok(CheckIn {
            mood,
            energy: self.energy,
            stress: self.stress,
            notes,
        })
    }
}

impl MoodEntry {
    pub fn from_check_in(check_in: CheckIn, now: DateTime<Utc>) -> Self {
        Self {
            id: Uuid::new_v4(),
            date: now.date_naive(),
            mood: check_in.mood,
            energy: check_in.energy,
            stress: check_in.stress,
            notes: check_in.notes,
            created_at: now,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn request(mood: Option<&str>, energy: i32, stress: i32, notes: Option<&str>) -> CheckInRequest {
        CheckInRequest {
            mood: mood.map(String::from),
            energy,
            stress,
            notes: notes.map(String::from),
        }
    }

    #[test]
    fn test_valid_request_converts() {
        let check_in = request(Some("calm"), 7, 2, Some("  slept well  "))
            .into_check_in()
            .unwrap();
        assert_eq!(check_in.mood, Mood::Calm);
        assert_eq!(check_in.energy, 7);
        assert_eq!(check_in.stress, 2);
        assert_eq!(check_in.notes.as_deref(), Some("slept well"));
    }

    #[test]
    fn test_missing_mood_rejected() {
        let err = request(None, 5, 5, None).into_check_in().unwrap_err();
        assert!(matches!(err, AppError::Validation(msg) if msg == "Mood is required"));

        let err = request(Some("   "), 5, 5, None).into_check_in().unwrap_err();
        assert!(matches!(err, AppError::Validation(_)));
    }

    #[test]
    fn test_unknown_mood_rejected() {
        let err = request(Some("furious"), 5, 5, None).into_check_in().unwrap_err();
        assert!(matches!(err, AppError::Validation(msg) if msg.contains("furious")));
    }

    #[test]
    fn test_out_of_range_levels_rejected() {
        for (energy, stress) in [(0, 5), (11, 5), (5, 0), (5, 11), (-3, 5)] {
            let result = request(Some("happy"), energy, stress, None).into_check_in();
            assert!(
                matches!(result, Err(AppError::Validation(_))),
                "energy={energy} stress={stress} should be rejected"
            );
        }
    }

    #[test]
    fn test_boundary_levels_accepted() {
        assert!(request(Some("tired"), 1, 10, None).into_check_in().is_ok());
        assert!(request(Some("tired"), 10, 1, None).into_check_in().is_ok());
    }

    #[test]
    fn test_blank_notes_become_none() {
        let check_in = request(Some("neutral"), 5, 5, Some(" \n ")).into_check_in().unwrap();
        assert_eq!(check_in.notes, None);
    }

    #[test]
    fn test_overlong_notes_rejected() {
        let long = "x".repeat(2001);
        let result = request(Some("happy"), 5, 5, Some(&long)).into_check_in();
        assert!(matches!(result, Err(AppError::Validation(_))));
    }

    #[test]
    fn test_entry_takes_utc_date() {
        let now = Utc.with_ymd_and_hms(2026, 3, 4, 23, 30, 0).unwrap();
        let entry = MoodEntry::from_check_in(
            CheckIn {
                mood: Mood::Happy,
                energy: 8,
                stress: 3,
                notes: None,
            },
            now,
        );
        assert_eq!(entry.date, NaiveDate::from_ymd_opt(2026, 3, 4).unwrap());
        assert_eq!(entry.created_at, now);
    }

    #[test]
    fn test_entry_omits_absent_notes() {
        let now = Utc.with_ymd_and_hms(2026, 3, 4, 9, 0, 0).unwrap();
        let entry = MoodEntry::from_check_in(
            CheckIn {
                mood: Mood::Sad,
                energy: 3,
                stress: 8,
                notes: None,
            },
            now,
        );
        let json = serde_json::to_value(&entry).unwrap();
        assert!(json.get("notes").is_none());
        assert_eq!(json["mood"], "sad");
        assert_eq!(json["date"], "2026-03-04");
    }
}
