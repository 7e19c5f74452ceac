use serde::{Deserialize, Serialize};
use serde_json::Value;

/// One job listing as the extraction service is asked to shape it.
///
/// This mirrors the field list in the extraction prompt. The pipeline only
/// verifies that the response carries an array; individual items are
/// printed as returned, so this struct is a declared shape, not a gate.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JobListing {
    pub position: String,
    pub location: String,
    pub link: String,
    pub remote: RemoteStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub posted_date: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub application_deadline: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub compensation: Option<String>,
}

/// Remote status: an explicit boolean, or the "not disclosed" sentinel the
/// service is told to use when the page does not say.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RemoteStatus {
    Flag(bool),
    Text(String),
}

/// Best-effort check that a raw listing matches the declared shape.
pub fn matches_schema(value: &Value) -> bool {
    serde_json::from_value::<JobListing>(value.clone()).is_ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn full_listing_round_trips() {
        let raw = json!({
            "position": "Staff Engineer",
            "location": "Amsterdam, NL",
            "link": "https://example.com/jobs/42",
            "remote": true,
            "postedDate": "2026-07-01",
            "applicationDeadline": "2026-09-01",
            "compensation": "$150K - $190K"
        });
        let listing: JobListing = serde_json::from_value(raw.clone()).unwrap();
        assert_eq!(listing.remote, RemoteStatus::Flag(true));
        assert_eq!(listing.posted_date.as_deref(), Some("2026-07-01"));
        assert_eq!(serde_json::to_value(&listing).unwrap(), raw);
    }

    #[test]
    fn optional_fields_omitted_when_unset() {
        let raw = json!({
            "position": "Designer",
            "location": "Remote",
            "link": "https://example.com/jobs/7",
            "remote": "not disclosed"
        });
        let listing: JobListing = serde_json::from_value(raw.clone()).unwrap();
        assert_eq!(listing.remote, RemoteStatus::Text("not disclosed".into()));
        assert!(listing.compensation.is_none());
        // None fields must not reappear as nulls on the way back out
        assert_eq!(serde_json::to_value(&listing).unwrap(), raw);
    }

    #[test]
    fn matches_schema_rejects_missing_required_fields() {
        assert!(matches_schema(&json!({
            "position": "SRE",
            "location": "Berlin",
            "link": "https://example.com/jobs/1",
            "remote": false
        })));
        assert!(!matches_schema(&json!({ "position": "SRE" })));
        assert!(!matches_schema(&json!("not an object")));
    }
}
