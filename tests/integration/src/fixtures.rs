//! Test fixtures and data generators
//!
//! Request bodies in the shape the web client sends them.

use chrono::{DateTime, Duration, Utc};
use serde_json::{json, Value};
use std::sync::atomic::{AtomicU64, Ordering};

/// Counter for unique test data
static COUNTER: AtomicU64 = AtomicU64::new(1);

/// Get a unique suffix for test data
pub fn unique_suffix() -> u64 {
    COUNTER.fetch_add(1, Ordering::SeqCst)
}

/// Unique email address
pub fn unique_email() -> String {
    format!("user{}-{}@example.com", unique_suffix(), uuid::Uuid::new_v4().simple())
}

/// Identity posted to `/query/jwt`
pub fn identity(email: &str) -> Value {
    json!({ "email": email, "name": "Test User" })
}

/// Full `POST /query` body for a product
pub fn query_body(product_name: &str, owner_email: &str) -> Value {
    json!({
        "productName": product_name,
        "productBrand": "Acme",
        "productImage": "https://img.example.com/p.png",
        "queryTitle": format!("Is there an alternative to {product_name}?"),
        "boycottingReason": "Supply chain concerns",
        "email": owner_email,
        "name": "Test User",
        "photo": "https://img.example.com/u.png",
    })
}

/// `POST /query` body stamped `minutes_ago` before now
pub fn query_body_at(product_name: &str, minutes_ago: i64) -> Value {
    let created_at: DateTime<Utc> = Utc::now() - Duration::minutes(minutes_ago);
    json!({
        "productName": product_name,
        "createdAt": created_at.to_rfc3339(),
    })
}

/// `POST /recommendations` body with an extra free-form field
pub fn recommendation_body(query_id: &str, recommender: &str, owner: &str) -> Value {
    json!({
        "queryId": query_id,
        "recommenderEmail": recommender,
        "userEmail": owner,
        "recommendationTitle": "Try this instead",
        "recommendedProductName": "Other Widget",
    })
}
