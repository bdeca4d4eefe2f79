use reqwest::Client;
use serde_json::{json, Value};
use std::time::Duration;
use thiserror::Error;

use crate::models::{ParentProfile, SearchFilters};

/// Errors that can occur when talking to Firestore
#[derive(Debug, Error)]
pub enum FirestoreError {
    #[error("HTTP request failed: {0}")]
    RequestError(#[from] reqwest::Error),

    #[error("API returned error: {0}")]
    ApiError(String),

    #[error("Unauthorized: invalid API key")]
    Unauthorized,

    #[error("Invalid response format: {0}")]
    InvalidResponse(String),
}

/// Firestore REST client for the profile collection
///
/// Issues read-only `runQuery` calls; the search service never writes.
/// Query failures propagate unchanged to the caller, with no retry.
pub struct FirestoreClient {
    base_url: String,
    api_key: String,
    project_id: String,
    database_id: String,
    profiles_collection: String,
    client: Client,
}

impl FirestoreClient {
    /// Create a new Firestore client
    pub fn new(
        base_url: String,
        api_key: String,
        project_id: String,
        database_id: String,
        profiles_collection: String,
    ) -> Self {
        let client = Client::builder()
            .timeout(Duration::from_secs(30))
            .build()
            .expect("Failed to create HTTP client");

        Self {
            base_url,
            api_key,
            project_id,
            database_id,
            profiles_collection,
            client,
        }
    }

    fn run_query_url(&self) -> String {
        format!(
            "{}/v1/projects/{}/databases/{}/documents:runQuery?key={}",
            self.base_url.trim_end_matches('/'),
            self.project_id,
            self.database_id,
            self.api_key,
        )
    }

    /// Query candidate profiles for a search
    ///
    /// Fetches up to `filters.limit + 1` documents so the caller can detect
    /// a further page without a count query. Documents that fail to decode
    /// are skipped.
    pub async fn query_profiles(
        &self,
        requester_id: &str,
        filters: &SearchFilters,
    ) -> Result<Vec<ParentProfile>, FirestoreError> {
        let query = build_structured_query(&self.profiles_collection, requester_id, filters);

        let response = self
            .client
            .post(self.run_query_url())
            .json(&json!({ "structuredQuery": query }))
            .send()
            .await?;

        let status = response.status();
        if status == reqwest::StatusCode::UNAUTHORIZED || status == reqwest::StatusCode::FORBIDDEN {
            return Err(FirestoreError::Unauthorized);
        }
        if !status.is_success() {
            return Err(FirestoreError::ApiError(format!(
                "Failed to query profiles: {}",
                status
            )));
        }

        let rows: Vec<Value> = response.json().await?;

        let profiles: Vec<ParentProfile> = rows
            .iter()
            .filter_map(|row| row.get("document"))
            .filter_map(|doc| doc.get("fields"))
            .filter_map(decode_profile)
            .collect();

        tracing::debug!(
            "Queried {} profiles for requester {} (rows: {})",
            profiles.len(),
            requester_id,
            rows.len()
        );

        Ok(profiles)
    }

    /// Health check: a limit-1 query against the profile collection
    pub async fn health_check(&self) -> Result<bool, FirestoreError> {
        let query = json!({
            "from": [{ "collectionId": self.profiles_collection }],
            "limit": 1,
        });

        let response = self
            .client
            .post(self.run_query_url())
            .json(&json!({ "structuredQuery": query }))
            .send()
            .await?;

        Ok(response.status().is_success())
    }
}

/// Build the structured query for a search request
///
/// Firestore allows a single array-membership predicate per compound
/// query. `interests` claims that slot with its first element; when no
/// interests are requested the first `children_age_ranges` element takes
/// it instead. The full lists are re-applied in memory afterwards, so the
/// server-side predicate only narrows the candidate set.
pub fn build_structured_query(
    collection: &str,
    requester_id: &str,
    filters: &SearchFilters,
) -> Value {
    let mut predicates = vec![field_filter("uid", "NOT_EQUAL", string_value(requester_id))];

    if let Some(age_range) = &filters.age_range {
        predicates.push(field_filter("ageRange", "IN", array_value(&[age_range])));
    }

    if let Some(status) = &filters.relationship_status {
        predicates.push(field_filter(
            "relationshipStatus",
            "IN",
            array_value(&[status]),
        ));
    }

    if let Some(interest) = filters.interests.first() {
        predicates.push(field_filter(
            "interests",
            "ARRAY_CONTAINS",
            string_value(interest),
        ));
    } else if let Some(age_range) = filters.children_age_ranges.first() {
        predicates.push(field_filter(
            "childrenAgeRanges",
            "ARRAY_CONTAINS",
            string_value(age_range),
        ));
    }

    json!({
        "from": [{ "collectionId": collection }],
        "where": {
            "compositeFilter": {
                "op": "AND",
                "filters": predicates,
            }
        },
        "limit": filters.limit + 1,
    })
}

fn field_filter(field: &str, op: &str, value: Value) -> Value {
    json!({
        "fieldFilter": {
            "field": { "fieldPath": field },
            "op": op,
            "value": value,
        }
    })
}

fn string_value(s: &str) -> Value {
    json!({ "stringValue": s })
}

fn array_value<S: AsRef<str>>(items: &[S]) -> Value {
    let values: Vec<Value> = items.iter().map(|s| string_value(s.as_ref())).collect();
    json!({ "arrayValue": { "values": values } })
}

/// Decode a Firestore `fields` map into a profile
pub fn decode_profile(fields: &Value) -> Option<ParentProfile> {
    let plain = firestore_fields_to_json(fields)?;
    serde_json::from_value(plain).ok()
}

/// Convert a Firestore typed `fields` map to plain JSON
fn firestore_fields_to_json(fields: &Value) -> Option<Value> {
    let map = fields.as_object()?;
    let plain: serde_json::Map<String, Value> = map
        .iter()
        .filter_map(|(k, v)| firestore_value_to_json(v).map(|v| (k.clone(), v)))
        .collect();
    Some(Value::Object(plain))
}

fn firestore_value_to_json(value: &Value) -> Option<Value> {
    let obj = value.as_object()?;

    if let Some(s) = obj.get("stringValue") {
        return Some(s.clone());
    }
    if let Some(s) = obj.get("timestampValue") {
        return Some(s.clone());
    }
    if let Some(b) = obj.get("booleanValue") {
        return Some(b.clone());
    }
    if let Some(n) = obj.get("doubleValue") {
        return Some(n.clone());
    }
    if let Some(n) = obj.get("integerValue") {
        // Firestore encodes integers as strings
        return n.as_str().and_then(|s| s.parse::<i64>().ok()).map(Value::from);
    }
    if let Some(arr) = obj.get("arrayValue") {
        let values = arr
            .get("values")
            .and_then(|v| v.as_array())
            .map(|v| v.as_slice())
            .unwrap_or(&[]);
        let plain: Vec<Value> = values.iter().filter_map(firestore_value_to_json).collect();
        return Some(Value::Array(plain));
    }
    if let Some(m) = obj.get("mapValue") {
        return m.get("fields").and_then(firestore_fields_to_json);
    }
    if obj.contains_key("nullValue") {
        return Some(Value::Null);
    }

    None
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_filters() -> SearchFilters {
        SearchFilters {
            zip_code: "10001".to_string(),
            age_range: Some("30-39".to_string()),
            interests: vec!["hiking".to_string(), "cooking".to_string()],
            children_age_ranges: vec!["0-2".to_string()],
            limit: 50,
            ..Default::default()
        }
    }

    #[test]
    fn test_query_excludes_requester() {
        let query = build_structured_query("profiles", "me", &sample_filters());
        let predicates = query["where"]["compositeFilter"]["filters"]
            .as_array()
            .unwrap();

        let uid = &predicates[0]["fieldFilter"];
        assert_eq!(uid["field"]["fieldPath"], "uid");
        assert_eq!(uid["op"], "NOT_EQUAL");
        assert_eq!(uid["value"]["stringValue"], "me");
    }

    #[test]
    fn test_query_fetches_limit_plus_one() {
        let query = build_structured_query("profiles", "me", &sample_filters());
        assert_eq!(query["limit"], 51);
    }

    #[test]
    fn test_single_array_predicate_interests_first() {
        let query = build_structured_query("profiles", "me", &sample_filters());
        let predicates = query["where"]["compositeFilter"]["filters"]
            .as_array()
            .unwrap();

        let array_predicates: Vec<&Value> = predicates
            .iter()
            .filter(|p| p["fieldFilter"]["op"] == "ARRAY_CONTAINS")
            .collect();

        assert_eq!(array_predicates.len(), 1);
        let ff = &array_predicates[0]["fieldFilter"];
        assert_eq!(ff["field"]["fieldPath"], "interests");
        assert_eq!(ff["value"]["stringValue"], "hiking");
    }

    #[test]
    fn test_children_ranges_take_slot_without_interests() {
        let mut filters = sample_filters();
        filters.interests = vec![];

        let query = build_structured_query("profiles", "me", &filters);
        let predicates = query["where"]["compositeFilter"]["filters"]
            .as_array()
            .unwrap();

        let ff = predicates
            .iter()
            .find(|p| p["fieldFilter"]["op"] == "ARRAY_CONTAINS")
            .map(|p| &p["fieldFilter"])
            .unwrap();
        assert_eq!(ff["field"]["fieldPath"], "childrenAgeRanges");
        assert_eq!(ff["value"]["stringValue"], "0-2");
    }

    #[test]
    fn test_decode_profile() {
        let fields = json!({
            "uid": { "stringValue": "u1" },
            "displayName": { "stringValue": "Sam" },
            "zipCode": { "stringValue": "10001" },
            "ageRange": { "stringValue": "30-39" },
            "interests": {
                "arrayValue": { "values": [{ "stringValue": "hiking" }] }
            },
            "childrenAgeRanges": {
                "arrayValue": { "values": [{ "stringValue": "0-2" }] }
            },
            "relationshipStatus": { "stringValue": "married" },
            "createdAt": { "timestampValue": "2024-03-01T12:00:00Z" }
        });

        let profile = decode_profile(&fields).expect("should decode");
        assert_eq!(profile.uid, "u1");
        assert_eq!(profile.zip_code, "10001");
        assert_eq!(profile.interests, vec!["hiking"]);
        assert!(profile.created_at.is_some());
    }

    #[test]
    fn test_decode_profile_missing_required_field() {
        let fields = json!({
            "displayName": { "stringValue": "No uid" },
            "zipCode": { "stringValue": "10001" }
        });

        assert!(decode_profile(&fields).is_none());
    }

    #[test]
    fn test_decode_empty_array() {
        let fields = json!({
            "uid": { "stringValue": "u1" },
            "displayName": { "stringValue": "Sam" },
            "zipCode": { "stringValue": "10001" },
            "interests": { "arrayValue": {} }
        });

        let profile = decode_profile(&fields).expect("should decode");
        assert!(profile.interests.is_empty());
    }
}
