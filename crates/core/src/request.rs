//! Inbox request records as served by the REST API.
//!
//! Field names are camelCase on the wire. Optional sequences are omitted when absent, and an
//! absent sequence means the same thing as an empty one.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use utoipa::ToSchema;

/// Kind of patient request.
///
/// The known kinds form a closed set, but records from other producers may carry kinds this
/// crate does not recognise. Those are kept verbatim in [`RequestType::Other`] so the presenter
/// can still render a generic row for them.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum RequestType {
    Renewal,
    FreeText,
    LabReport,
    Other(String),
}

impl RequestType {
    /// Wire spelling of the kind.
    pub fn as_str(&self) -> &str {
        match self {
            Self::Renewal => "renewal",
            Self::FreeText => "freeText",
            Self::LabReport => "labReport",
            Self::Other(raw) => raw,
        }
    }
}

impl From<String> for RequestType {
    fn from(raw: String) -> Self {
        match raw.as_str() {
            "renewal" => Self::Renewal,
            "freeText" => Self::FreeText,
            "labReport" => Self::LabReport,
            _ => Self::Other(raw),
        }
    }
}

impl From<&str> for RequestType {
    fn from(raw: &str) -> Self {
        Self::from(raw.to_owned())
    }
}

impl From<RequestType> for String {
    fn from(kind: RequestType) -> Self {
        match kind {
            RequestType::Other(raw) => raw,
            known => known.as_str().to_owned(),
        }
    }
}

impl fmt::Display for RequestType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Clinician the request is assigned to.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Assignment {
    #[schema(value_type = String, format = DateTime)]
    pub assign_date: DateTime<Utc>,
    /// Free-text clinician name, optionally prefixed with a title such as `Dr.`.
    pub assigned_to: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub grouping: Option<String>,
}

/// Suggested action attached to a request.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Recommendation {
    pub recommendation_value: String,
    pub recommendation_description: String,
}

/// A single patient request in the inbox.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct InboxRequest {
    #[serde(rename = "type")]
    #[schema(value_type = String, example = "renewal")]
    pub kind: RequestType,
    pub id: String,
    pub status: String,
    pub is_read: bool,
    pub patient_name: String,
    #[schema(value_type = String, format = DateTime)]
    pub request_date: DateTime<Utc>,
    #[schema(value_type = String, format = DateTime)]
    pub last_modified_date: DateTime<Utc>,
    pub description: String,
    pub estimated_time_sec: u64,
    pub assignment: Assignment,
    pub is_urgent: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub labels: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub panels: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub abnormal_results: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub prescription_ids: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub recommendation: Option<Recommendation>,
}

impl InboxRequest {
    pub fn labels(&self) -> &[String] {
        self.labels.as_deref().unwrap_or_default()
    }

    pub fn panels(&self) -> &[String] {
        self.panels.as_deref().unwrap_or_default()
    }

    pub fn abnormal_results(&self) -> &[String] {
        self.abnormal_results.as_deref().unwrap_or_default()
    }

    pub fn prescription_ids(&self) -> &[String] {
        self.prescription_ids.as_deref().unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = r#"{
        "type": "labReport",
        "id": "3",
        "status": "new",
        "isRead": false,
        "patientName": "Sarah Wilson",
        "requestDate": "2025-06-08T00:00:00.000Z",
        "lastModifiedDate": "2025-06-08T11:01:47.567Z",
        "description": "Quarterly bloods",
        "estimatedTimeSec": 240,
        "assignment": {
            "assignDate": "2025-06-08T11:01:47.567Z",
            "assignedTo": "Dr. Johnson"
        },
        "isUrgent": false,
        "panels": ["CBC", "Lipid Panel"],
        "abnormalResults": []
    }"#;

    #[test]
    fn parses_camel_case_record() {
        let request: InboxRequest = serde_json::from_str(SAMPLE).expect("parse request");
        assert_eq!(request.kind, RequestType::LabReport);
        assert_eq!(request.patient_name, "Sarah Wilson");
        assert_eq!(request.estimated_time_sec, 240);
        assert_eq!(request.assignment.assigned_to, "Dr. Johnson");
        assert_eq!(request.panels(), ["CBC", "Lipid Panel"]);
        assert!(request.abnormal_results().is_empty());
        assert!(request.labels.is_none());
        assert!(request.labels().is_empty());
    }

    #[test]
    fn keeps_unknown_kinds_verbatim() {
        let json = SAMPLE.replace("\"labReport\"", "\"imaging\"");
        let request: InboxRequest = serde_json::from_str(&json).expect("parse request");
        assert_eq!(request.kind, RequestType::Other("imaging".into()));

        let value = serde_json::to_value(&request).expect("serialize");
        assert_eq!(value["type"], "imaging");
    }

    #[test]
    fn omits_absent_sequences_when_serialized() {
        let request: InboxRequest = serde_json::from_str(SAMPLE).expect("parse request");
        let value = serde_json::to_value(&request).expect("serialize");
        assert!(value.get("labels").is_none());
        assert!(value.get("recommendation").is_none());
        assert_eq!(value["abnormalResults"], serde_json::json!([]));
        assert_eq!(value["isRead"], false);
    }

    #[test]
    fn rejects_malformed_timestamps() {
        let json = SAMPLE.replace(
            r#""lastModifiedDate": "2025-06-08T11:01:47.567Z""#,
            r#""lastModifiedDate": "yesterday""#,
        );
        assert!(serde_json::from_str::<InboxRequest>(&json).is_err());
    }
}
