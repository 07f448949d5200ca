//! Trip profile collected from the planning forms, and the stylist prompt
//! built from it.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use thiserror::Error;

const MAX_PLACE_LEN: usize = 100;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TripProfile {
    pub city: String,
    pub region: String,
    pub gender: Option<String>,
    pub age: Option<u32>,
    #[serde(default)]
    pub activities: Vec<String>,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    /// Forecast summary supplied by the weather collaborator.
    pub weather_summary: Option<String>,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum TripError {
    #[error("{0} is required")]
    MissingField(&'static str),

    #[error("{field} must be at most {max} characters")]
    TooLong { field: &'static str, max: usize },

    #[error("end date {end} must be after start date {start}")]
    InvalidDateRange { start: NaiveDate, end: NaiveDate },
}

impl TripProfile {
    /// # Errors
    ///
    /// Returns [`TripError`] when city or region is blank or too long, or
    /// when the end date does not fall after the start date.
    pub fn validate(&self) -> Result<(), TripError> {
        for (field, value) in [("city", &self.city), ("region", &self.region)] {
            let value = value.trim();
            if value.is_empty() {
                return Err(TripError::MissingField(field));
            }
            if value.chars().count() > MAX_PLACE_LEN {
                return Err(TripError::TooLong {
                    field,
                    max: MAX_PLACE_LEN,
                });
            }
        }
        if self.end_date <= self.start_date {
            return Err(TripError::InvalidDateRange {
                start: self.start_date,
                end: self.end_date,
            });
        }
        Ok(())
    }

    /// Number of calendar days covered by the trip, both ends included.
    /// Returns `0` for an inverted range.
    #[must_use]
    pub fn duration_days(&self) -> u32 {
        let days = (self.end_date - self.start_date).num_days() + 1;
        u32::try_from(days).unwrap_or(0)
    }
}

/// Builds the stylist prompt sent to the text-generation collaborator.
///
/// The requested layout (bold `Day N (date): title` headings followed by a
/// `**Product Searches:**` bullet block) is the one the response parser
/// reads back most reliably.
#[must_use]
pub fn build_prompt(profile: &TripProfile) -> String {
    let activities = if profile.activities.is_empty() {
        "general travel".to_string()
    } else {
        profile.activities.join(", ")
    };
    let weather = profile
        .weather_summary
        .as_deref()
        .filter(|w| !w.trim().is_empty())
        .unwrap_or("no weather data available");
    let gender = profile
        .gender
        .as_deref()
        .filter(|g| !g.trim().is_empty())
        .unwrap_or("N/A");
    let age = profile
        .age
        .map_or_else(|| "N/A".to_string(), |a| a.to_string());

    format!(
        "You are a travel stylist. Based on the following trip details:\n\
         Location: {city}, {region}\n\
         Gender: {gender}\n\
         Age: {age}\n\
         Activities: {activities}\n\
         Dates: {start} to {end} ({days} days)\n\
         Weather Forecast: {weather}\n\
         {PROMPT_FORMAT_INSTRUCTIONS}",
        city = profile.city.trim(),
        region = profile.region.trim(),
        start = profile.start_date.format("%b %-d"),
        end = profile.end_date.format("%b %-d"),
        days = profile.duration_days(),
    )
}

const PROMPT_FORMAT_INSTRUCTIONS: &str = "
For each day of the trip, recommend a complete outfit tailored to that day's
activity and weather. Use exactly this layout for every day:

**Day [Number] ([Date]): [Activity] in [City]**

**Weather Adjustments:** [sunscreen, layers, rain gear, ...]

**Complete Outfit:**
- Top: [item]
- Bottom: [item]
- Shoes: [item]
- Accessories: [items]

**Packing Notes:** [pack or purchase]

**Product Searches:**
- Top: [specific style, color and material query]
- Bottom: [query]
- Shoes: [query]
- Accessories: [query]

Make every product search specific enough to shop for, and do not copy the
placeholder values above.
";

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn make_profile() -> TripProfile {
        TripProfile {
            city: "Denver".to_string(),
            region: "CO".to_string(),
            gender: Some("female".to_string()),
            age: Some(29),
            activities: vec!["hiking".to_string(), "museums".to_string()],
            start_date: date(2025, 7, 20),
            end_date: date(2025, 7, 22),
            weather_summary: Some("Sunny, highs near 90F".to_string()),
        }
    }

    #[test]
    fn validate_accepts_well_formed_profile() {
        assert_eq!(make_profile().validate(), Ok(()));
    }

    #[test]
    fn validate_rejects_blank_city() {
        let mut profile = make_profile();
        profile.city = "  ".to_string();
        assert_eq!(profile.validate(), Err(TripError::MissingField("city")));
    }

    #[test]
    fn validate_rejects_long_region() {
        let mut profile = make_profile();
        profile.region = "r".repeat(101);
        assert_eq!(
            profile.validate(),
            Err(TripError::TooLong {
                field: "region",
                max: 100
            })
        );
    }

    #[test]
    fn validate_rejects_end_not_after_start() {
        let mut profile = make_profile();
        profile.end_date = profile.start_date;
        assert!(matches!(
            profile.validate(),
            Err(TripError::InvalidDateRange { .. })
        ));
    }

    #[test]
    fn duration_days_is_inclusive() {
        assert_eq!(make_profile().duration_days(), 3);
    }

    #[test]
    fn duration_days_inverted_range_is_zero() {
        let mut profile = make_profile();
        profile.end_date = date(2025, 7, 1);
        assert_eq!(profile.duration_days(), 0);
    }

    #[test]
    fn build_prompt_includes_trip_details() {
        let prompt = build_prompt(&make_profile());
        assert!(prompt.contains("Location: Denver, CO"));
        assert!(prompt.contains("Gender: female"));
        assert!(prompt.contains("Age: 29"));
        assert!(prompt.contains("Activities: hiking, museums"));
        assert!(prompt.contains("Jul 20 to Jul 22 (3 days)"));
        assert!(prompt.contains("Weather Forecast: Sunny, highs near 90F"));
        assert!(prompt.contains("**Product Searches:**"));
    }

    #[test]
    fn build_prompt_header_lines_in_order() {
        let prompt = build_prompt(&make_profile());
        let header: Vec<&str> = prompt.lines().take(8).collect();
        assert_eq!(
            header,
            vec![
                "You are a travel stylist. Based on the following trip details:",
                "Location: Denver, CO",
                "Gender: female",
                "Age: 29",
                "Activities: hiking, museums",
                "Dates: Jul 20 to Jul 22 (3 days)",
                "Weather Forecast: Sunny, highs near 90F",
                "",
            ]
        );
        assert!(prompt.ends_with("placeholder values above.\n"));
    }

    #[test]
    fn build_prompt_fills_missing_fields() {
        let mut profile = make_profile();
        profile.gender = None;
        profile.age = None;
        profile.activities.clear();
        profile.weather_summary = Some(String::new());
        let prompt = build_prompt(&profile);
        assert!(prompt.contains("Gender: N/A"));
        assert!(prompt.contains("Age: N/A"));
        assert!(prompt.contains("Activities: general travel"));
        assert!(prompt.contains("Weather Forecast: no weather data available"));
    }

    #[test]
    fn profile_deserializes_with_default_activities() {
        let json = r#"{
            "city": "Lisbon",
            "region": "PT",
            "gender": null,
            "age": null,
            "start_date": "2025-09-01",
            "end_date": "2025-09-04",
            "weather_summary": null
        }"#;
        let profile: TripProfile = serde_json::from_str(json).unwrap();
        assert!(profile.activities.is_empty());
        assert_eq!(profile.duration_days(), 4);
    }
}
