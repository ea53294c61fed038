use chrono::{Days, NaiveDate};
use rhabit::core::habits::{HabitLogic, MAX_HISTORY_DAYS};
use rhabit::core::streak::current_streak;
use rhabit::core::summary::HabitSummary;
use rhabit::db::{DbPool, HabitStore, MemoryStore};
use rhabit::errors::AppError;

fn today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 6, 10).unwrap()
}

fn days_ago(n: u64) -> NaiveDate {
    today().checked_sub_days(Days::new(n)).unwrap()
}

/// Run the same scenario against both store implementations.
fn on_each_store(scenario: impl Fn(&mut dyn HabitStore)) {
    let mut mem = MemoryStore::new();
    scenario(&mut mem);

    let mut pool = DbPool::in_memory().expect("in-memory db");
    scenario(&mut pool);
}

#[test]
fn test_create_trims_name() {
    on_each_store(|store| {
        let habit = HabitLogic::create(store, "  Morning Exercise  ").unwrap();
        assert_eq!(habit.name, "Morning Exercise");
        assert!(habit.created().is_some());

        let loaded = HabitLogic::get(store, habit.id).unwrap();
        assert_eq!(loaded, habit);
        assert!(store.get_entries_in_range(habit.id, days_ago(30), today()).unwrap().is_empty());
    });
}

#[test]
fn test_create_rejects_blank_names() {
    on_each_store(|store| {
        for name in ["", "   ", "\t\n"] {
            let err = HabitLogic::create(store, name).unwrap_err();
            assert!(matches!(err, AppError::Validation(_)));
        }
        assert!(store.list_habits().unwrap().is_empty());
    });
}

#[test]
fn test_toggle_scenario() {
    on_each_store(|store| {
        let id = HabitLogic::create(store, "Exercise").unwrap().id;

        assert!(HabitLogic::toggle_today(store, id, today()).unwrap());
        assert_eq!(current_streak(store, id, today()).unwrap(), 1);

        assert!(!HabitLogic::toggle_today(store, id, today()).unwrap());
        assert_eq!(current_streak(store, id, today()).unwrap(), 0);

        // the entry survives with status false
        assert_eq!(store.get_entry(id, today()).unwrap(), Some(false));
    });
}

#[test]
fn test_toggle_twice_is_involution() {
    on_each_store(|store| {
        let id = HabitLogic::create(store, "Read").unwrap().id;

        store.upsert_entry(id, today(), true).unwrap();
        HabitLogic::toggle_today(store, id, today()).unwrap();
        HabitLogic::toggle_today(store, id, today()).unwrap();
        assert_eq!(store.get_entry(id, today()).unwrap(), Some(true));
    });
}

#[test]
fn test_toggle_unknown_habit() {
    on_each_store(|store| {
        let err = HabitLogic::toggle_today(store, 999_999, today()).unwrap_err();
        assert!(matches!(err, AppError::NotFound(999_999)));
    });
}

#[test]
fn test_set_log_history_scenario() {
    on_each_store(|store| {
        let id = HabitLogic::create(store, "Meditate").unwrap().id;

        HabitLogic::set_log(store, id, days_ago(1), true, today()).unwrap();
        HabitLogic::set_log(store, id, days_ago(2), true, today()).unwrap();
        assert_eq!(current_streak(store, id, today()).unwrap(), 2);

        HabitLogic::set_log(store, id, today(), true, today()).unwrap();
        assert_eq!(current_streak(store, id, today()).unwrap(), 3);
    });
}

#[test]
fn test_set_log_reports_previous_status_and_never_duplicates() {
    on_each_store(|store| {
        let id = HabitLogic::create(store, "Walk").unwrap().id;

        let first = HabitLogic::set_log(store, id, days_ago(1), true, today()).unwrap();
        assert!(!first.before);
        assert!(first.after);

        let second = HabitLogic::set_log(store, id, days_ago(1), false, today()).unwrap();
        assert!(second.before);
        assert!(!second.after);

        let entries = store.get_entries_in_range(id, days_ago(1), days_ago(1)).unwrap();
        assert_eq!(entries.len(), 1);
        assert!(!entries[0].status);
    });
}

#[test]
fn test_set_log_rejects_future_dates() {
    on_each_store(|store| {
        let id = HabitLogic::create(store, "Walk").unwrap().id;
        let tomorrow = today().succ_opt().unwrap();

        let err = HabitLogic::set_log(store, id, tomorrow, true, today()).unwrap_err();
        assert!(matches!(err, AppError::Validation(_)));
        assert_eq!(store.get_entry(id, tomorrow).unwrap(), None);
    });
}

#[test]
fn test_set_log_unknown_habit() {
    on_each_store(|store| {
        let err = HabitLogic::set_log(store, 42, today(), true, today()).unwrap_err();
        assert!(matches!(err, AppError::NotFound(42)));
    });
}

#[test]
fn test_delete_cascades_entries() {
    on_each_store(|store| {
        let keep = HabitLogic::create(store, "Keep").unwrap().id;
        let gone = HabitLogic::create(store, "Drop").unwrap().id;

        for n in 0..5 {
            store.upsert_entry(gone, days_ago(n), true).unwrap();
            store.upsert_entry(keep, days_ago(n), true).unwrap();
        }

        let deleted = HabitLogic::delete(store, gone).unwrap();
        assert_eq!(deleted.name, "Drop");

        assert!(store.get_habit(gone).unwrap().is_none());
        assert!(store.get_entries_in_range(gone, days_ago(30), today()).unwrap().is_empty());
        assert!(store.completed_dates_desc(gone).unwrap().is_empty());

        // other habits are untouched
        assert_eq!(store.get_entries_in_range(keep, days_ago(30), today()).unwrap().len(), 5);
    });
}

#[test]
fn test_delete_unknown_habit() {
    on_each_store(|store| {
        let err = HabitLogic::delete(store, 7).unwrap_err();
        assert!(matches!(err, AppError::NotFound(7)));
    });
}

#[test]
fn test_history_fills_missing_days_with_false() {
    on_each_store(|store| {
        let id = HabitLogic::create(store, "Stretch").unwrap().id;
        store.upsert_entry(id, days_ago(2), true).unwrap();
        store.upsert_entry(id, days_ago(1), false).unwrap();

        let history = HabitLogic::history(store, id, 4, today()).unwrap();
        assert_eq!(
            history,
            vec![
                (days_ago(3), false),
                (days_ago(2), true),
                (days_ago(1), false),
                (today(), false),
            ]
        );
    });
}

#[test]
fn test_history_day_count_bounds() {
    on_each_store(|store| {
        let id = HabitLogic::create(store, "Journal").unwrap().id;

        for days in [0, MAX_HISTORY_DAYS + 1, u32::MAX] {
            let err = HabitLogic::history(store, id, days, today()).unwrap_err();
            assert!(matches!(err, AppError::Validation(_)));
        }

        let history = HabitLogic::history(store, id, MAX_HISTORY_DAYS, today()).unwrap();
        assert_eq!(history.len(), MAX_HISTORY_DAYS as usize);
        assert_eq!(history[history.len() - 1], (today(), false));
    });
}

#[test]
fn test_history_reaching_before_first_date() {
    let mut store = MemoryStore::new();
    let id = HabitLogic::create(&mut store, "Journal").unwrap().id;

    let err = HabitLogic::history(&store, id, 2, NaiveDate::MIN).unwrap_err();
    assert!(matches!(err, AppError::Validation(_)));
}

#[test]
fn test_summary_for_listing() {
    let mut store = MemoryStore::new();
    let a = HabitLogic::create(&mut store, "A").unwrap().id;
    let b = HabitLogic::create(&mut store, "B").unwrap().id;

    for n in 0..3 {
        store.upsert_entry(a, days_ago(n), true).unwrap();
    }
    store.upsert_entry(b, days_ago(8), true).unwrap();

    let summaries = HabitSummary::build_all(&store, today()).unwrap();
    assert_eq!(summaries.len(), 2);

    assert_eq!(summaries[0].habit.id, a);
    assert!(summaries[0].done_today);
    assert_eq!(summaries[0].streak, 3);
    assert_eq!(summaries[0].last_7_days, 3);

    assert_eq!(summaries[1].habit.id, b);
    assert!(!summaries[1].done_today);
    assert_eq!(summaries[1].streak, 0);
    assert_eq!(summaries[1].last_7_days, 0);
}
