use chrono::NaiveDate;
use rhabit::core::habits::HabitLogic;
use rhabit::core::streak::{StreakWalk, current_streak, streak_from_dates};
use rhabit::db::{HabitStore, MemoryStore};

fn d(y: i32, m: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, day).unwrap()
}

fn today() -> NaiveDate {
    d(2025, 3, 15)
}

fn store_with_habit() -> (MemoryStore, i64) {
    let mut store = MemoryStore::new();
    let habit = HabitLogic::create(&mut store, "Exercise").unwrap();
    (store, habit.id)
}

#[test]
fn test_streak_no_logs() {
    let (store, id) = store_with_habit();
    assert_eq!(current_streak(&store, id, today()).unwrap(), 0);
}

#[test]
fn test_streak_only_today() {
    let (mut store, id) = store_with_habit();
    store.upsert_entry(id, today(), true).unwrap();
    assert_eq!(current_streak(&store, id, today()).unwrap(), 1);
}

#[test]
fn test_streak_only_yesterday() {
    let (mut store, id) = store_with_habit();
    store.upsert_entry(id, d(2025, 3, 14), true).unwrap();
    assert_eq!(current_streak(&store, id, today()).unwrap(), 1);
}

#[test]
fn test_streak_yesterday_and_before_without_today() {
    let (mut store, id) = store_with_habit();
    store.upsert_entry(id, d(2025, 3, 14), true).unwrap();
    store.upsert_entry(id, d(2025, 3, 13), true).unwrap();

    // the walk continues past the yesterday anchor
    assert_eq!(current_streak(&store, id, today()).unwrap(), 2);
}

#[test]
fn test_streak_continuous_three_days() {
    let (mut store, id) = store_with_habit();
    for day in [13, 14, 15] {
        store.upsert_entry(id, d(2025, 3, day), true).unwrap();
    }
    assert_eq!(current_streak(&store, id, today()).unwrap(), 3);
}

#[test]
fn test_streak_gap_breaks_chain() {
    let (mut store, id) = store_with_habit();
    store.upsert_entry(id, d(2025, 3, 13), true).unwrap();
    store.upsert_entry(id, d(2025, 3, 14), false).unwrap();
    store.upsert_entry(id, today(), true).unwrap();

    assert_eq!(current_streak(&store, id, today()).unwrap(), 1);
}

#[test]
fn test_streak_today_explicitly_false_keeps_yesterday_chain() {
    let (mut store, id) = store_with_habit();
    store.upsert_entry(id, today(), false).unwrap();
    store.upsert_entry(id, d(2025, 3, 14), true).unwrap();

    assert_eq!(current_streak(&store, id, today()).unwrap(), 1);
}

#[test]
fn test_streak_stale_completion_is_zero() {
    let (mut store, id) = store_with_habit();
    for day in [10, 11, 12, 13] {
        store.upsert_entry(id, d(2025, 3, day), true).unwrap();
    }
    // most recent completion is two days ago
    assert_eq!(current_streak(&store, id, today()).unwrap(), 0);
}

#[test]
fn test_streak_crosses_month_boundary() {
    let dates = [d(2025, 3, 2), d(2025, 3, 1), d(2025, 2, 28), d(2025, 2, 27)];
    assert_eq!(streak_from_dates(&dates, d(2025, 3, 2)), 4);
}

#[test]
fn test_streak_ignores_future_and_duplicate_dates() {
    let dates = [d(2025, 3, 20), d(2025, 3, 15), d(2025, 3, 15), d(2025, 3, 14)];
    assert_eq!(streak_from_dates(&dates, today()), 2);
}

#[test]
fn test_walk_states() {
    let walk = StreakWalk::NotStarted;
    assert_eq!(walk.count(), 0);

    let walk = walk.step(today(), d(2025, 3, 14));
    assert_eq!(
        walk,
        StreakWalk::Walking {
            expected: d(2025, 3, 13),
            count: 1
        }
    );

    let walk = walk.step(today(), d(2025, 3, 11));
    assert_eq!(walk, StreakWalk::Broken { count: 1 });
    assert!(walk.is_broken());

    // broken is terminal
    assert_eq!(walk.step(today(), d(2025, 3, 10)).count(), 1);
}

#[test]
fn test_walk_stale_anchor_is_broken_immediately() {
    let walk = StreakWalk::NotStarted.step(today(), d(2025, 3, 12));
    assert_eq!(walk, StreakWalk::Broken { count: 0 });
}
