use std::sync::Mutex;

use chrono::{DateTime, Utc};
use uuid::{ContextV7, Timestamp, Uuid};

pub mod entities;
pub mod services;

#[derive(Clone, Debug)]
pub struct PawcareConfig {
    pub database: DatabaseConfig,
    pub demo: DemoConfig,
}

#[derive(Clone, Debug)]
pub struct DatabaseConfig {
    pub url: String,
}

/// Demo owner used when a request carries no owner header, and whether the
/// sample pets and adoption listings are inserted at start-up.
#[derive(Clone, Debug)]
pub struct DemoConfig {
    pub owner_id: Uuid,
    pub seed_data: bool,
}

/// Shared counter so v7 ids minted within one millisecond still sort in
/// creation order.
static ID_CONTEXT: Mutex<ContextV7> = Mutex::new(ContextV7::new());

pub fn generate_timestamp() -> (DateTime<Utc>, Timestamp) {
    let now = Utc::now();
    let seconds = now.timestamp().try_into().unwrap_or(0);
    let timestamp = Timestamp::from_unix(&ID_CONTEXT, seconds, now.timestamp_subsec_nanos());

    (now, timestamp)
}

pub fn generate_uuid_v7() -> Uuid {
    let (_, timestamp) = generate_timestamp();
    Uuid::new_v7(timestamp)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_uuid_v7_ids_sort_in_creation_order() {
        let ids: Vec<Uuid> = (0..64).map(|_| generate_uuid_v7()).collect();
        let mut sorted = ids.clone();
        sorted.sort();
        assert_eq!(ids, sorted);
    }
}
