use chrono::{NaiveDate, Utc};
use diesel::pg::PgConnection;
use diesel::prelude::*;
use diesel::result::{DatabaseErrorKind, Error as DieselError};
use uuid::Uuid;

use crate::errors::{AppError, AppResult, ErrorCode};
use crate::models::{MoodLog, NewMoodLog};
use crate::schema::mood_logs;

/// The fixed set of tally counters. Labels outside this set are rejected
/// rather than silently dropped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoodKind {
    Happy,
    Sad,
    Overwhelmed,
    Fear,
    Calm,
    Bored,
    Excited,
    Lonely,
}

impl MoodKind {
    pub const ALL: [MoodKind; 8] = [
        MoodKind::Happy,
        MoodKind::Sad,
        MoodKind::Overwhelmed,
        MoodKind::Fear,
        MoodKind::Calm,
        MoodKind::Bored,
        MoodKind::Excited,
        MoodKind::Lonely,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            MoodKind::Happy => "happy",
            MoodKind::Sad => "sad",
            MoodKind::Overwhelmed => "overwhelmed",
            MoodKind::Fear => "fear",
            MoodKind::Calm => "calm",
            MoodKind::Bored => "bored",
            MoodKind::Excited => "excited",
            MoodKind::Lonely => "lonely",
        }
    }
}

impl std::str::FromStr for MoodKind {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "happy" => Ok(MoodKind::Happy),
            "sad" => Ok(MoodKind::Sad),
            "overwhelmed" => Ok(MoodKind::Overwhelmed),
            "fear" => Ok(MoodKind::Fear),
            "calm" => Ok(MoodKind::Calm),
            "bored" => Ok(MoodKind::Bored),
            "excited" => Ok(MoodKind::Excited),
            "lonely" => Ok(MoodKind::Lonely),
            _ => Err(AppError::new(
                ErrorCode::MoodOptionNotFound,
                "please select the option that suits your current mood",
            )),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoodStatus {
    Created,
    Updated,
}

/// One tally row per (user, UTC day). A first submission of the day inserts
/// the row with the chosen counter at 1; later submissions increment it.
/// The (user_id, day) UNIQUE constraint closes the find-then-create race:
/// a losing insert is retried as the increment.
pub fn submit_mood(
    conn: &mut PgConnection,
    user_id: Uuid,
    kind: MoodKind,
) -> AppResult<(MoodLog, MoodStatus)> {
    let today = Utc::now().date_naive();

    let existing = mood_logs::table
        .filter(mood_logs::user_id.eq(user_id))
        .filter(mood_logs::day.eq(today))
        .first::<MoodLog>(conn)
        .optional()
        .map_err(AppError::Database)?;

    if existing.is_some() {
        let row = increment(conn, user_id, today, kind)?;
        return Ok((row, MoodStatus::Updated));
    }

    match diesel::insert_into(mood_logs::table)
        .values(&first_of_day(user_id, today, kind))
        .get_result::<MoodLog>(conn)
    {
        Ok(row) => Ok((row, MoodStatus::Created)),
        Err(DieselError::DatabaseError(DatabaseErrorKind::UniqueViolation, _)) => {
            let row = increment(conn, user_id, today, kind)?;
            Ok((row, MoodStatus::Updated))
        }
        Err(e) => Err(AppError::Database(e)),
    }
}

fn increment(
    conn: &mut PgConnection,
    user_id: Uuid,
    day: NaiveDate,
    kind: MoodKind,
) -> AppResult<MoodLog> {
    let now = Utc::now();
    let target = mood_logs::table
        .filter(mood_logs::user_id.eq(user_id))
        .filter(mood_logs::day.eq(day));

    let row = match kind {
        MoodKind::Happy => diesel::update(target)
            .set((mood_logs::happy.eq(mood_logs::happy + 1), mood_logs::updated_at.eq(now)))
            .get_result::<MoodLog>(conn)?,
        MoodKind::Sad => diesel::update(target)
            .set((mood_logs::sad.eq(mood_logs::sad + 1), mood_logs::updated_at.eq(now)))
            .get_result::<MoodLog>(conn)?,
        MoodKind::Overwhelmed => diesel::update(target)
            .set((mood_logs::overwhelmed.eq(mood_logs::overwhelmed + 1), mood_logs::updated_at.eq(now)))
            .get_result::<MoodLog>(conn)?,
        MoodKind::Fear => diesel::update(target)
            .set((mood_logs::fear.eq(mood_logs::fear + 1), mood_logs::updated_at.eq(now)))
            .get_result::<MoodLog>(conn)?,
        MoodKind::Calm => diesel::update(target)
            .set((mood_logs::calm.eq(mood_logs::calm + 1), mood_logs::updated_at.eq(now)))
            .get_result::<MoodLog>(conn)?,
        MoodKind::Bored => diesel::update(target)
            .set((mood_logs::bored.eq(mood_logs::bored + 1), mood_logs::updated_at.eq(now)))
            .get_result::<MoodLog>(conn)?,
        MoodKind::Excited => diesel::update(target)
            .set((mood_logs::excited.eq(mood_logs::excited + 1), mood_logs::updated_at.eq(now)))
            .get_result::<MoodLog>(conn)?,
        MoodKind::Lonely => diesel::update(target)
            .set((mood_logs::lonely.eq(mood_logs::lonely + 1), mood_logs::updated_at.eq(now)))
            .get_result::<MoodLog>(conn)?,
    };

    Ok(row)
}

fn first_of_day(user_id: Uuid, day: NaiveDate, kind: MoodKind) -> NewMoodLog {
    let mut row = NewMoodLog {
        user_id,
        day,
        happy: 0,
        sad: 0,
        overwhelmed: 0,
        fear: 0,
        calm: 0,
        bored: 0,
        excited: 0,
        lonely: 0,
    };
    match kind {
        MoodKind::Happy => row.happy = 1,
        MoodKind::Sad => row.sad = 1,
        MoodKind::Overwhelmed => row.overwhelmed = 1,
        MoodKind::Fear => row.fear = 1,
        MoodKind::Calm => row.calm = 1,
        MoodKind::Bored => row.bored = 1,
        MoodKind::Excited => row.excited = 1,
        MoodKind::Lonely => row.lonely = 1,
    }
    row
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_label_parses_back_to_itself() {
        for kind in MoodKind::ALL {
            assert_eq!(kind.as_str().parse::<MoodKind>().unwrap(), kind);
        }
    }

    #[test]
    fn labels_are_case_insensitive() {
        assert_eq!("Happy".parse::<MoodKind>().unwrap(), MoodKind::Happy);
        assert_eq!("LONELY".parse::<MoodKind>().unwrap(), MoodKind::Lonely);
    }

    #[test]
    fn unknown_label_is_rejected_as_mood_option_not_found() {
        let err = "euphoric".parse::<MoodKind>().unwrap_err();
        assert!(matches!(
            err,
            AppError::Known { code: ErrorCode::MoodOptionNotFound, .. }
        ));
    }

    #[test]
    fn first_of_day_sets_exactly_one_counter() {
        let row = first_of_day(Uuid::new_v4(), Utc::now().date_naive(), MoodKind::Calm);
        let counters = [
            row.happy, row.sad, row.overwhelmed, row.fear,
            row.calm, row.bored, row.excited, row.lonely,
        ];
        assert_eq!(counters.iter().sum::<i32>(), 1);
        assert_eq!(row.calm, 1);
    }
}
