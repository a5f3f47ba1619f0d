mod units_tests;
mod water_tests;

use crate::core::service::{HydrologService, NewUser};
use crate::core::units::VolumeUnit;
use crate::infrastructure::logging::in_memory::InMemoryAuditLog;
use crate::infrastructure::storage::in_memory::InMemoryStorage;
use chrono::{Offset, Utc};

pub fn create_test_service() -> HydrologService<InMemoryAuditLog, InMemoryStorage> {
    create_test_harness().0
}

/// Also hands back the storage and audit log so tests can backdate
/// entries and inspect audit records.
pub fn create_test_harness() -> (
    HydrologService<InMemoryAuditLog, InMemoryStorage>,
    InMemoryStorage,
    InMemoryAuditLog,
) {
    let storage = InMemoryStorage::new();
    let logging = InMemoryAuditLog::new();
    let service = HydrologService::new(
        storage.clone(),
        logging.clone(),
        "test-secret".to_string(),
        Utc.fix(),
    );
    (service, storage, logging)
}

pub fn test_registration(email: &str) -> NewUser {
    NewUser {
        name: "Test User".to_string(),
        email: email.to_string(),
        password: "hunter2".to_string(),
        daily_goal: Some(2000.0),
        unit_preference: VolumeUnit::Milliliters,
    }
}
