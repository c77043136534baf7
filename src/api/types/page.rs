//! Page metadata and review types.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Business profile of a page, returned as-is by `page_details`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PageDetails {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub about: Option<String>,
    #[serde(default)]
    pub attire: Option<String>,
    #[serde(default)]
    pub bio: Option<String>,
    #[serde(default)]
    pub location: Option<PageLocation>,
    #[serde(default)]
    pub parking: Option<BTreeMap<String, u8>>,
    /// Opening hours keyed like `mon_1_open`
    #[serde(default)]
    pub hours: Option<BTreeMap<String, String>>,
    #[serde(default)]
    pub emails: Vec<String>,
    #[serde(default)]
    pub website: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PageLocation {
    #[serde(default)]
    pub street: Option<String>,
    #[serde(default)]
    pub city: Option<String>,
    #[serde(default)]
    pub zip: Option<String>,
    #[serde(default)]
    pub country: Option<String>,
    #[serde(default)]
    pub latitude: Option<f64>,
    #[serde(default)]
    pub longitude: Option<f64>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RecommendationType {
    Positive,
    Negative,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Reviewer {
    pub name: String,
    pub id: String,
}

/// One entry of the page's ratings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageReview {
    pub created_time: String,
    pub recommendation_type: RecommendationType,
    #[serde(default)]
    pub review_text: Option<String>,
    /// Absent unless the token may read reviewer identities
    #[serde(default)]
    pub reviewer: Option<Reviewer>,
}

/// Page object reduced to `fan_count`.
#[derive(Debug, Clone, Copy, Deserialize)]
pub(crate) struct FanCount {
    #[serde(default)]
    pub fan_count: Option<u64>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_details_deserialize() {
        let json = r#"{
            "about": "Fresh coffee daily",
            "location": {"city": "Lyon", "country": "France", "latitude": 45.76, "longitude": 4.83, "street": "1 Rue X", "zip": "69001"},
            "parking": {"lot": 1, "street": 0, "valet": 0},
            "hours": {"mon_1_open": "08:00", "mon_1_close": "18:00"},
            "emails": ["hello@example.com"],
            "website": "https://example.com",
            "id": "104"
        }"#;
        let details: PageDetails = serde_json::from_str(json).unwrap();
        assert_eq!(details.location.unwrap().city.as_deref(), Some("Lyon"));
        assert_eq!(details.parking.unwrap()["lot"], 1);
        assert_eq!(details.hours.unwrap()["mon_1_close"], "18:00");
        assert_eq!(details.emails, vec!["hello@example.com"]);
        assert!(details.bio.is_none());
    }

    #[test]
    fn test_page_review_deserialize() {
        let json = r#"{
            "created_time": "2024-03-01T10:00:00+0000",
            "recommendation_type": "negative",
            "review_text": "Too slow",
            "reviewer": {"name": "Sam", "id": "55"}
        }"#;
        let review: PageReview = serde_json::from_str(json).unwrap();
        assert_eq!(review.recommendation_type, RecommendationType::Negative);
        assert_eq!(review.reviewer.unwrap().id, "55");
    }

    #[test]
    fn test_unknown_recommendation_type_is_rejected() {
        let json = r#"{"created_time": "x", "recommendation_type": "neutral"}"#;
        assert!(serde_json::from_str::<PageReview>(json).is_err());
    }
}
