//! Storage key derivation for uploaded documents.

/// Build the storage key for a freshly uploaded document: `{document_id}-{original_name}`.
///
/// The original name is kept verbatim so the suffix still identifies the document type.
pub fn document_object_key(document_id: &str, original_name: &str) -> String {
    format!("{}-{}", document_id, original_name)
}
