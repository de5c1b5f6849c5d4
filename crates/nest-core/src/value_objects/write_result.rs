//! Write acknowledgements returned by the store
//!
//! Handlers send these back to the client untouched, so the JSON shape follows
//! the document-store driver conventions the frontend already consumes.

use serde::{Deserialize, Serialize};

use super::Snowflake;

/// Acknowledgement of a single-document insert
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InsertOneResult {
    pub acknowledged: bool,
    pub inserted_id: Snowflake,
}

impl InsertOneResult {
    pub fn new(inserted_id: Snowflake) -> Self {
        Self {
            acknowledged: true,
            inserted_id,
        }
    }
}

/// Acknowledgement of a single-document update
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateResult {
    pub acknowledged: bool,
    pub matched_count: u64,
    pub modified_count: u64,
    pub upserted_count: u64,
    pub upserted_id: Option<Snowflake>,
}

impl UpdateResult {
    /// Update that never inserts; `modified <= matched`
    pub fn new(matched_count: u64, modified_count: u64) -> Self {
        Self {
            acknowledged: true,
            matched_count,
            modified_count: modified_count.min(matched_count),
            upserted_count: 0,
            upserted_id: None,
        }
    }

    pub fn unmatched() -> Self {
        Self::new(0, 0)
    }
}

/// Acknowledgement of a single-document delete
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeleteResult {
    pub acknowledged: bool,
    pub deleted_count: u64,
}

impl DeleteResult {
    pub fn new(deleted_count: u64) -> Self {
        Self {
            acknowledged: true,
            deleted_count,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_insert_result_shape() {
        let value = serde_json::to_value(InsertOneResult::new(Snowflake::new(7))).unwrap();
        assert_eq!(value, json!({ "acknowledged": true, "insertedId": "7" }));
    }

    #[test]
    fn test_update_result_shape() {
        let value = serde_json::to_value(UpdateResult::new(1, 1)).unwrap();
        assert_eq!(
            value,
            json!({
                "acknowledged": true,
                "matchedCount": 1,
                "modifiedCount": 1,
                "upsertedCount": 0,
                "upsertedId": null
            })
        );
    }

    #[test]
    fn test_update_result_clamps_modified() {
        let result = UpdateResult::new(0, 3);
        assert_eq!(result.modified_count, 0);
        assert_eq!(UpdateResult::unmatched().matched_count, 0);
    }

    #[test]
    fn test_delete_result_shape() {
        let value = serde_json::to_value(DeleteResult::new(0)).unwrap();
        assert_eq!(value, json!({ "acknowledged": true, "deletedCount": 0 }));
    }
}
