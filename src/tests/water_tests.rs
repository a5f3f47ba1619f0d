use crate::constants::WATER_LOGGED;
use crate::core::aggregate::{DailyTotal, group_by_day, today_window};
use crate::core::errors::HydrologError;
use crate::core::models::entry::WaterLogEntry;
use crate::infrastructure::storage::Storage;
use crate::tests::{create_test_harness, create_test_service, test_registration};
use chrono::{DateTime, FixedOffset, Offset, TimeZone, Utc};
use uuid::Uuid;

fn entry_at(user_id: &str, amount_ml: i64, logged_at: DateTime<Utc>) -> WaterLogEntry {
    WaterLogEntry {
        id: Uuid::new_v4().to_string(),
        user_id: user_id.to_string(),
        amount_ml,
        logged_at,
    }
}

#[tokio::test]
async fn test_today_total_sums_logged_amounts() {
    let service = create_test_service();
    let user = service
        .register_user(test_registration("test@example.com"))
        .await
        .unwrap();

    for amount in [250, 500, 1000] {
        service.log_water(&user.id, amount).await.unwrap();
    }

    let summary = service.today_summary(&user.id).await.unwrap();
    assert_eq!(summary.total_ml, 1750);
    assert_eq!(summary.entries.len(), 3);
}

#[tokio::test]
async fn test_today_total_is_order_independent() {
    let service = create_test_service();
    let first = service
        .register_user(test_registration("first@example.com"))
        .await
        .unwrap();
    let second = service
        .register_user(test_registration("second@example.com"))
        .await
        .unwrap();

    for amount in [250, 500, 1000] {
        service.log_water(&first.id, amount).await.unwrap();
    }
    for amount in [1000, 250, 500] {
        service.log_water(&second.id, amount).await.unwrap();
    }

    let first_total = service.today_summary(&first.id).await.unwrap().total_ml;
    let second_total = service.today_summary(&second.id).await.unwrap().total_ml;
    assert_eq!(first_total, second_total);
}

#[tokio::test]
async fn test_today_total_empty() {
    let service = create_test_service();
    let user = service
        .register_user(test_registration("test@example.com"))
        .await
        .unwrap();

    let summary = service.today_summary(&user.id).await.unwrap();
    assert_eq!(summary.total_ml, 0);
    assert!(summary.entries.is_empty());
}

#[tokio::test]
async fn test_log_water_rejects_non_positive_amounts() {
    let service = create_test_service();
    let user = service
        .register_user(test_registration("test@example.com"))
        .await
        .unwrap();

    for amount in [0, -250] {
        let result = service.log_water(&user.id, amount).await;
        assert!(matches!(result, Err(HydrologError::InvalidAmount(_))));
    }

    // Nothing was persisted
    let summary = service.today_summary(&user.id).await.unwrap();
    assert_eq!(summary.total_ml, 0);
    assert!(summary.entries.is_empty());
}

#[tokio::test]
async fn test_log_water_rejects_oversized_amount() {
    let service = create_test_service();
    let user = service
        .register_user(test_registration("test@example.com"))
        .await
        .unwrap();
    let result = service.log_water(&user.id, 100_001).await;
    assert!(matches!(result, Err(HydrologError::InvalidInput(_, _))));
}

#[tokio::test]
async fn test_log_water_unknown_user() {
    let service = create_test_service();
    let result = service.log_water("missing", 250).await;
    assert!(matches!(result, Err(HydrologError::UserNotFound(_))));
}

#[tokio::test]
async fn test_log_water_writes_audit_record() {
    let (service, _storage, logging) = create_test_harness();
    let user = service
        .register_user(test_registration("test@example.com"))
        .await
        .unwrap();
    service.log_water(&user.id, 250).await.unwrap();

    use crate::infrastructure::logging::LoggingService;
    let logs = logging.get_logs().await.unwrap();
    assert!(logs.iter().any(|l| l.action == WATER_LOGGED));
}

#[tokio::test]
async fn test_history_groups_by_day_descending() {
    let (service, storage, _logging) = create_test_harness();
    let user = service
        .register_user(test_registration("test@example.com"))
        .await
        .unwrap();

    let jan_1_morning = Utc.with_ymd_and_hms(2024, 1, 1, 8, 0, 0).unwrap();
    let jan_1_evening = Utc.with_ymd_and_hms(2024, 1, 1, 20, 0, 0).unwrap();
    let jan_2 = Utc.with_ymd_and_hms(2024, 1, 2, 12, 0, 0).unwrap();
    storage
        .save_entry(entry_at(&user.id, 1200, jan_1_morning))
        .await
        .unwrap();
    storage
        .save_entry(entry_at(&user.id, 800, jan_1_evening))
        .await
        .unwrap();
    storage.save_entry(entry_at(&user.id, 1500, jan_2)).await.unwrap();

    let history = service.daily_history(&user.id).await.unwrap();
    assert_eq!(
        history,
        vec![
            DailyTotal {
                day: "2024-01-02".to_string(),
                total_ml: 1500,
            },
            DailyTotal {
                day: "2024-01-01".to_string(),
                total_ml: 2000,
            },
        ]
    );
}

#[tokio::test]
async fn test_history_empty_for_new_user() {
    let service = create_test_service();
    let user = service
        .register_user(test_registration("test@example.com"))
        .await
        .unwrap();
    let history = service.daily_history(&user.id).await.unwrap();
    assert!(history.is_empty());
}

#[tokio::test]
async fn test_history_labels_strictly_descending_and_unique() {
    let (service, storage, _logging) = create_test_harness();
    let user = service
        .register_user(test_registration("test@example.com"))
        .await
        .unwrap();

    for (day, hour) in [(3, 9), (1, 12), (7, 18), (3, 21)] {
        let ts = Utc.with_ymd_and_hms(2024, 2, day, hour, 0, 0).unwrap();
        storage.save_entry(entry_at(&user.id, 300, ts)).await.unwrap();
    }

    let history = service.daily_history(&user.id).await.unwrap();
    let labels: Vec<&str> = history.iter().map(|d| d.day.as_str()).collect();
    assert_eq!(labels, vec!["2024-02-07", "2024-02-03", "2024-02-01"]);
    assert!(labels.windows(2).all(|pair| pair[0] > pair[1]));
}

#[test]
fn test_today_window_respects_offset() {
    let offset = FixedOffset::east_opt(5 * 3600 + 30 * 60).unwrap();
    let now = Utc.with_ymd_and_hms(2024, 3, 10, 20, 0, 0).unwrap();
    // 20:00 UTC is already 01:30 on March 11th at +05:30
    let (start, end) = today_window(now, offset);
    assert_eq!(start, Utc.with_ymd_and_hms(2024, 3, 10, 18, 30, 0).unwrap());
    assert_eq!(end, Utc.with_ymd_and_hms(2024, 3, 11, 18, 30, 0).unwrap());
}

#[tokio::test]
async fn test_today_window_is_half_open() {
    let (service, storage, _logging) = create_test_harness();
    let user = service
        .register_user(test_registration("test@example.com"))
        .await
        .unwrap();

    let now = Utc.with_ymd_and_hms(2024, 3, 10, 12, 0, 0).unwrap();
    let (start, end) = today_window(now, Utc.fix());
    storage.save_entry(entry_at(&user.id, 100, start)).await.unwrap();
    storage.save_entry(entry_at(&user.id, 200, end)).await.unwrap();

    let entries = storage.entries_in_range(&user.id, start, end).await.unwrap();
    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0].amount_ml, 100);
}

#[test]
fn test_window_and_grouping_agree_at_midnight() {
    let user_id = "user";
    let before_midnight = Utc.with_ymd_and_hms(2024, 1, 1, 23, 59, 59).unwrap();
    let at_midnight = Utc.with_ymd_and_hms(2024, 1, 2, 0, 0, 0).unwrap();
    let entries = vec![
        entry_at(user_id, 300, before_midnight),
        entry_at(user_id, 400, at_midnight),
    ];

    let grouped = group_by_day(&entries, Utc.fix());
    assert_eq!(grouped[0].day, "2024-01-02");
    assert_eq!(grouped[0].total_ml, 400);
    assert_eq!(grouped[1].day, "2024-01-01");
    assert_eq!(grouped[1].total_ml, 300);

    // The timestamp-range view of "today" draws the same boundary
    let (start, _end) = today_window(at_midnight, Utc.fix());
    assert!(at_midnight >= start);
    assert!(before_midnight < start);
}
