use chrono::{DateTime, Datelike, Utc};
use chrono_tz::Tz;
use serde::Deserialize;
use thiserror::Error;

use crate::components::icon::Icon;

const WEBINAR_JSON: &str = include_str!("../content/webinar.json");

#[derive(Debug, Error)]
pub enum ContentError {
    #[error("failed to parse webinar content: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("unknown time zone: {0}")]
    UnknownTimeZone(String),
    #[error("testimonial from {name} has rating {rating}, expected 1 to 5")]
    InvalidRating { name: String, rating: u8 },
    #[error("{0} section is empty")]
    EmptySection(&'static str),
}

/// IANA zone the webinar is announced in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(try_from = "String")]
pub struct EventZone(Tz);

impl TryFrom<String> for EventZone {
    type Error = ContentError;

    fn try_from(name: String) -> Result<Self, Self::Error> {
        name.parse::<Tz>()
            .map(EventZone)
            .map_err(|_| ContentError::UnknownTimeZone(name))
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct EventDetails {
    pub starts_at: DateTime<Utc>,
    pub time_zone: EventZone,
    pub duration_minutes: u32,
    pub registered_count: u32,
    pub seats_remaining: u32,
}

impl EventDetails {
    fn local_start(&self) -> DateTime<Tz> {
        self.starts_at.with_timezone(&self.time_zone.0)
    }

    /// "December 28th, 2024", in the event's own zone.
    pub fn display_date(&self) -> String {
        let local = self.local_start();
        format!(
            "{} {}{}, {}",
            local.format("%B"),
            local.day(),
            ordinal_suffix(local.day()),
            local.year()
        )
    }

    /// "7:00 PM EST"
    pub fn display_time(&self) -> String {
        self.local_start().format("%-I:%M %p %Z").to_string()
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct HeroCopy {
    pub badge: String,
    pub headline: String,
    pub highlight: String,
    pub subtitle: String,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Benefit {
    pub icon: Icon,
    pub title: String,
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Credential {
    pub icon: Icon,
    pub text: String,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Instructor {
    pub name: String,
    pub title: String,
    pub avatar: String,
    pub credentials: Vec<Credential>,
    pub quote: String,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Testimonial {
    pub name: String,
    pub role: String,
    pub content: String,
    pub rating: u8,
}

/// Everything the landing page says. Fixed at build time.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct WebinarContent {
    pub brand: String,
    pub tagline: String,
    pub copyright_year: i32,
    pub event: EventDetails,
    pub hero: HeroCopy,
    pub benefits: Vec<Benefit>,
    pub curriculum: Vec<String>,
    pub instructor: Instructor,
    pub testimonials: Vec<Testimonial>,
}

impl WebinarContent {
    pub fn load() -> Result<Self, ContentError> {
        Self::from_json(WEBINAR_JSON)
    }

    pub fn from_json(raw: &str) -> Result<Self, ContentError> {
        let content: WebinarContent = serde_json::from_str(raw)?;
        content.validate()?;
        Ok(content)
    }

    fn validate(&self) -> Result<(), ContentError> {
        if self.benefits.is_empty() {
            return Err(ContentError::EmptySection("benefits"));
        }
        if self.curriculum.is_empty() {
            return Err(ContentError::EmptySection("curriculum"));
        }
        if let Some(bad) = self.testimonials.iter().find(|t| !(1..=5).contains(&t.rating)) {
            return Err(ContentError::InvalidRating {
                name: bad.name.clone(),
                rating: bad.rating,
            });
        }
        Ok(())
    }
}

fn ordinal_suffix(day: u32) -> &'static str {
    match (day % 10, day % 100) {
        (_, 11..=13) => "th",
        (1, _) => "st",
        (2, _) => "nd",
        (3, _) => "rd",
        _ => "th",
    }
}

/// 3247 -> "3,247"
pub fn format_count(count: u32) -> String {
    let digits = count.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn with_rating(rating: u8) -> String {
        WEBINAR_JSON.replacen("\"rating\": 5", &format!("\"rating\": {}", rating), 1)
    }

    #[test]
    fn bundled_content_loads() {
        let content = WebinarContent::load().unwrap();
        assert_eq!(content.brand, "MindBloom Parenting");
        assert_eq!(content.benefits.len(), 4);
        assert_eq!(content.curriculum.len(), 6);
        assert_eq!(content.testimonials.len(), 3);
        assert_eq!(content.event.seats_remaining, 753);
    }

    #[test]
    fn event_renders_in_local_zone() {
        let content = WebinarContent::load().unwrap();
        assert_eq!(content.event.display_date(), "December 28th, 2024");
        assert_eq!(content.event.display_time(), "7:00 PM EST");
    }

    #[test]
    fn summer_event_uses_daylight_time() {
        let raw = WEBINAR_JSON.replace("2024-12-29T00:00:00Z", "2024-07-01T23:00:00Z");
        let content = WebinarContent::from_json(&raw).unwrap();
        assert_eq!(content.event.display_date(), "July 1st, 2024");
        assert_eq!(content.event.display_time(), "7:00 PM EDT");
    }

    #[test]
    fn ordinal_suffixes() {
        let cases = [
            (1, "st"), (2, "nd"), (3, "rd"), (4, "th"), (11, "th"),
            (12, "th"), (13, "th"), (21, "st"), (22, "nd"), (23, "rd"), (30, "th"),
        ];
        for (day, suffix) in cases {
            assert_eq!(ordinal_suffix(day), suffix, "day {}", day);
        }
    }

    #[test]
    fn counts_get_thousands_separators() {
        assert_eq!(format_count(0), "0");
        assert_eq!(format_count(753), "753");
        assert_eq!(format_count(3247), "3,247");
        assert_eq!(format_count(50000), "50,000");
        assert_eq!(format_count(1234567), "1,234,567");
        assert_eq!(format_count(u32::MAX), "4,294,967,295");
    }

    #[test]
    fn rating_out_of_range_is_rejected() {
        let err = WebinarContent::from_json(&with_rating(6)).unwrap_err();
        assert!(matches!(err, ContentError::InvalidRating { rating: 6, .. }));

        let err = WebinarContent::from_json(&with_rating(0)).unwrap_err();
        assert!(matches!(err, ContentError::InvalidRating { rating: 0, .. }));
    }

    #[test]
    fn unknown_time_zone_is_rejected() {
        let raw = WEBINAR_JSON.replace("America/New_York", "Mars/Olympus_Mons");
        let err = WebinarContent::from_json(&raw).unwrap_err();
        assert!(matches!(err, ContentError::Parse(_)));
        assert!(err.to_string().contains("unknown time zone: Mars/Olympus_Mons"));
    }

    #[test]
    fn empty_curriculum_is_rejected() {
        let mut value: serde_json::Value = serde_json::from_str(WEBINAR_JSON).unwrap();
        value["curriculum"] = serde_json::json!([]);
        let err = WebinarContent::from_json(&value.to_string()).unwrap_err();
        assert!(matches!(err, ContentError::EmptySection("curriculum")));
    }
}
