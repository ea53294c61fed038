//! Current-streak computation.
//!
//! The walk runs over completed dates in descending order. It is anchored on
//! `today` when today is completed, otherwise on yesterday, so an unchecked
//! box for today does not reset a running streak. The first gap ends it.

use crate::db::store::HabitStore;
use crate::errors::AppResult;
use chrono::{Days, NaiveDate};

/// States of the descending date walk.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StreakWalk {
    /// No date consumed yet.
    NotStarted,
    /// `expected` is the next date that keeps the chain alive.
    Walking { expected: NaiveDate, count: u32 },
    /// A gap (or a stale anchor) was found; `count` is final.
    Broken { count: u32 },
}

impl StreakWalk {
    /// Pick the anchor for the most recent completion.
    fn start(today: NaiveDate, most_recent: NaiveDate) -> Self {
        let yesterday = today.pred_opt();

        if most_recent == today || Some(most_recent) == yesterday {
            StreakWalk::Walking {
                expected: most_recent,
                count: 0,
            }
        } else {
            StreakWalk::Broken { count: 0 }
        }
    }

    /// Feed the next (older) completed date into the walk.
    pub fn step(self, today: NaiveDate, date: NaiveDate) -> Self {
        match self {
            StreakWalk::NotStarted => StreakWalk::start(today, date).step(today, date),
            StreakWalk::Walking { expected, count } if date == expected => {
                match expected.checked_sub_days(Days::new(1)) {
                    Some(prev) => StreakWalk::Walking {
                        expected: prev,
                        count: count + 1,
                    },
                    None => StreakWalk::Broken { count: count + 1 },
                }
            }
            StreakWalk::Walking { count, .. } => StreakWalk::Broken { count },
            broken @ StreakWalk::Broken { .. } => broken,
        }
    }

    pub fn count(&self) -> u32 {
        match self {
            StreakWalk::NotStarted => 0,
            StreakWalk::Walking { count, .. } | StreakWalk::Broken { count } => *count,
        }
    }

    pub fn is_broken(&self) -> bool {
        matches!(self, StreakWalk::Broken { .. })
    }
}

/// Streak length from completed dates sorted most recent first.
///
/// Dates after `today` are ignored; duplicates (which a healthy store never
/// returns) are skipped rather than counted twice.
pub fn streak_from_dates(dates_desc: &[NaiveDate], today: NaiveDate) -> u32 {
    let mut walk = StreakWalk::NotStarted;
    let mut last: Option<NaiveDate> = None;

    for &date in dates_desc.iter().filter(|d| **d <= today) {
        if last == Some(date) {
            continue;
        }
        last = Some(date);

        walk = walk.step(today, date);
        if walk.is_broken() {
            break;
        }
    }

    walk.count()
}

/// Current streak of a habit as of `today`.
pub fn current_streak<S: HabitStore + ?Sized>(
    store: &S,
    habit_id: i64,
    today: NaiveDate,
) -> AppResult<u32> {
    let dates = store.completed_dates_desc(habit_id)?;
    Ok(streak_from_dates(&dates, today))
}
