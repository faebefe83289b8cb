//! Domain models and response bodies.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Queue message body: the minimal pointer the processing workflow needs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct WorkItem {
    pub document_id: String,
    pub filename: String,
}

impl WorkItem {
    pub fn new(document_id: impl Into<String>, filename: impl Into<String>) -> Self {
        Self {
            document_id: document_id.into(),
            filename: filename.into(),
        }
    }

    /// Parse a queue message body.
    pub fn from_message_body(body: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(body)
    }

    pub fn to_message_body(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }
}

/// Derived fields written once by the processing workflow.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DocumentResults {
    pub summary: String,
    pub translation: String,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UploadResponse {
    pub message: String,
    pub document_id: String,
}

impl UploadResponse {
    pub fn uploaded(document_id: impl Into<String>) -> Self {
        Self {
            message: "Document uploaded successfully.".to_string(),
            document_id: document_id.into(),
        }
    }
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct SummaryResponse {
    pub summary: String,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct TranslationResponse {
    pub translation: String,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct MessageResponse {
    pub message: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_work_item_uses_camel_case_body() {
        let item = WorkItem::new("doc-1", "doc-1-report.pdf");
        let body = item.to_message_body().unwrap();
        assert_eq!(
            body,
            r#"{"documentId":"doc-1","filename":"doc-1-report.pdf"}"#
        );
    }

    #[test]
    fn test_work_item_rejects_missing_fields() {
        assert!(WorkItem::from_message_body(r#"{"documentId":"doc-1"}"#).is_err());
        assert!(WorkItem::from_message_body("not json").is_err());
    }

    #[test]
    fn test_upload_response_shape() {
        let value = serde_json::to_value(UploadResponse::uploaded("abc")).unwrap();
        assert_eq!(value["message"], "Document uploaded successfully.");
        assert_eq!(value["documentId"], "abc");
    }
}
