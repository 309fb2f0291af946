use vibeloop_core::goals::Goal;
use vibeloop_core::members::{
    resolve_mood_update, MemberGoalRow, MemberProfile, MemberRepositoryTrait, MoodUpdate,
    MoodUpdateOutcome,
};
use vibeloop_core::Result;

use super::model::TeamMemberDB;
use crate::db::{get_connection, DbPool, WriteHandle};
use crate::errors::{IntoCore, StorageError};
use crate::goals::GoalDB;
use crate::schema::{goals, team_members};
use async_trait::async_trait;
use chrono::NaiveDateTime;
use diesel::dsl::exists;
use diesel::prelude::*;
use diesel::SqliteConnection;

use std::sync::Arc;

pub struct MemberRepository {
    pool: Arc<DbPool>,
    writer: WriteHandle,
}

impl MemberRepository {
    pub fn new(pool: Arc<DbPool>, writer: WriteHandle) -> Self {
        MemberRepository { pool, writer }
    }
}

/// `None` when the member does not exist, `Some(None)` when it has no mood yet.
fn load_mood_timestamp(
    conn: &mut SqliteConnection,
    member_id: &str,
) -> Result<Option<Option<NaiveDateTime>>> {
    team_members::table
        .find(member_id)
        .select(team_members::mood_updated_at)
        .first::<Option<NaiveDateTime>>(conn)
        .optional()
        .into_core()
}

#[async_trait]
impl MemberRepositoryTrait for MemberRepository {
    fn list_members_with_goals(&self) -> Result<Vec<MemberGoalRow>> {
        let mut conn = get_connection(&self.pool)?;
        let rows = team_members::table
            .left_join(goals::table)
            .select((TeamMemberDB::as_select(), Option::<GoalDB>::as_select()))
            .order((
                team_members::name.asc(),
                team_members::id.asc(),
                goals::date.desc(),
                goals::created_at.desc(),
            ))
            .load::<(TeamMemberDB, Option<GoalDB>)>(&mut conn)
            .into_core()?;

        rows.into_iter()
            .map(|(member_db, goal_db)| {
                Ok(MemberGoalRow {
                    member: MemberProfile::try_from(member_db)?,
                    goal: goal_db.map(Goal::from),
                })
            })
            .collect::<std::result::Result<Vec<_>, StorageError>>()
            .map_err(Into::into)
    }

    fn member_exists(&self, member_id: &str) -> Result<bool> {
        let mut conn = get_connection(&self.pool)?;
        diesel::select(exists(team_members::table.find(member_id)))
            .get_result::<bool>(&mut conn)
            .into_core()
    }

    async fn update_mood_if_newer(
        &self,
        update: MoodUpdate,
    ) -> Result<Option<MoodUpdateOutcome>> {
        // Read, resolve and write in one writer job so no other write can land in between.
        self.writer
            .exec(
                move |conn: &mut SqliteConnection| -> Result<Option<MoodUpdateOutcome>> {
                    let Some(current) = load_mood_timestamp(conn, &update.member_id)? else {
                        return Ok(None);
                    };

                    let outcome = resolve_mood_update(current, update.timestamp);
                    if outcome == MoodUpdateOutcome::Applied {
                        diesel::update(team_members::table.find(&update.member_id))
                            .set((
                                team_members::mood.eq(update.mood.as_str()),
                                team_members::mood_updated_at.eq(update.timestamp),
                            ))
                            .execute(conn)
                            .into_core()?;
                    }
                    Ok(Some(outcome))
                },
            )
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::{create_pool, run_migrations, write_actor::spawn_writer};
    use crate::goals::GoalRepository;
    use chrono::{Duration, NaiveDate};
    use diesel::RunQueryDsl;
    use tempfile::tempdir;
    use vibeloop_core::goals::{GoalRepositoryTrait, NewGoal};
    use vibeloop_core::members::{aggregate_members, Mood};

    /// Creates a test repository backed by a temp database file.
    /// Returns the repository, pool (for inserting fixtures), writer and temp dir (to keep it alive)
    fn create_test_repository() -> (MemberRepository, Arc<DbPool>, WriteHandle, tempfile::TempDir) {
        let temp_dir = tempdir().expect("Failed to create temp directory");
        let db_path = temp_dir.path().join("test.db");
        let db_path_str = db_path.to_string_lossy().to_string();

        let pool = create_pool(&db_path_str).expect("Failed to create pool");
        run_migrations(&pool).expect("Failed to run migrations");
        let writer = spawn_writer((*pool).clone());

        let repo = MemberRepository::new(Arc::clone(&pool), writer.clone());
        (repo, pool, writer, temp_dir)
    }

    fn create_test_member(pool: &Arc<DbPool>, member_id: &str, name: &str) {
        let mut conn = get_connection(pool).expect("Failed to get connection");
        diesel::sql_query(format!(
            "INSERT INTO team_members (id, name) VALUES ('{}', '{}')",
            member_id, name
        ))
        .execute(&mut conn)
        .expect("Failed to create test member");
    }

    fn create_test_goal(pool: &Arc<DbPool>, goal_id: &str, member_id: &str, date: &str, created_at: &str) {
        let mut conn = get_connection(pool).expect("Failed to get connection");
        diesel::sql_query(format!(
            "INSERT INTO goals (id, member_id, description, completed, created_at, date) \
             VALUES ('{}', '{}', 'Fixture goal', 0, '{}', '{}')",
            goal_id, member_id, created_at, date
        ))
        .execute(&mut conn)
        .expect("Failed to create test goal");
    }

    fn at(h: u32, m: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2024, 6, 1)
            .unwrap()
            .and_hms_opt(h, m, 0)
            .unwrap()
    }

    fn mood_update(member_id: &str, mood: Mood, timestamp: NaiveDateTime) -> MoodUpdate {
        MoodUpdate {
            member_id: member_id.to_string(),
            mood,
            timestamp,
        }
    }

    fn stored_profile(repo: &MemberRepository, member_id: &str) -> MemberProfile {
        repo.list_members_with_goals()
            .unwrap()
            .into_iter()
            .find(|r| r.member.id == member_id)
            .map(|r| r.member)
            .unwrap()
    }

    #[tokio::test]
    async fn lists_members_by_name_then_goal_date_and_creation_desc() {
        let (repo, pool, _writer, _temp_dir) = create_test_repository();
        create_test_member(&pool, "m2", "Bob");
        create_test_member(&pool, "m1", "Alice");
        create_test_member(&pool, "m3", "Charlie");
        create_test_goal(&pool, "g-old", "m1", "2024-06-01", "2024-05-01 08:00:00");
        create_test_goal(&pool, "g-new", "m1", "2024-06-01", "2024-05-02 08:00:00");
        create_test_goal(&pool, "g-late", "m1", "2024-07-01", "2024-04-01 08:00:00");
        create_test_goal(&pool, "g-bob", "m2", "2024-06-05", "2024-05-01 08:00:00");

        let rows = repo.list_members_with_goals().unwrap();
        let flat: Vec<(&str, Option<&str>)> = rows
            .iter()
            .map(|r| (r.member.id.as_str(), r.goal.as_ref().map(|g| g.id.as_str())))
            .collect();

        assert_eq!(
            flat,
            vec![
                ("m1", Some("g-late")),
                ("m1", Some("g-new")),
                ("m1", Some("g-old")),
                ("m2", Some("g-bob")),
                ("m3", None),
            ]
        );

        let members = aggregate_members(rows).into_members();
        assert_eq!(members.len(), 3);
        assert_eq!(members[0].goals.len(), 3);
        assert!(members[2].goals.is_empty());
    }

    #[tokio::test]
    async fn member_exists_checks_ids() {
        let (repo, pool, _writer, _temp_dir) = create_test_repository();
        create_test_member(&pool, "m1", "Alice");

        assert!(repo.member_exists("m1").unwrap());
        assert!(!repo.member_exists("ghost").unwrap());
    }

    #[tokio::test]
    async fn first_mood_is_applied() {
        let (repo, pool, _writer, _temp_dir) = create_test_repository();
        create_test_member(&pool, "m1", "Alice");

        let outcome = repo
            .update_mood_if_newer(mood_update("m1", Mood::Good, at(9, 0)))
            .await
            .unwrap();

        assert_eq!(outcome, Some(MoodUpdateOutcome::Applied));
        let profile = stored_profile(&repo, "m1");
        assert_eq!(profile.mood, Some(Mood::Good));
        assert_eq!(profile.mood_updated_at, Some(at(9, 0)));
    }

    #[tokio::test]
    async fn unknown_member_reports_none() {
        let (repo, _pool, _writer, _temp_dir) = create_test_repository();
        let outcome = repo
            .update_mood_if_newer(mood_update("ghost", Mood::Low, at(9, 0)))
            .await
            .unwrap();
        assert_eq!(outcome, None);
    }

    #[tokio::test]
    async fn equal_and_older_timestamps_leave_row_untouched() {
        let (repo, pool, _writer, _temp_dir) = create_test_repository();
        create_test_member(&pool, "m1", "Alice");
        repo.update_mood_if_newer(mood_update("m1", Mood::Great, at(10, 0)))
            .await
            .unwrap();

        let same = repo
            .update_mood_if_newer(mood_update("m1", Mood::Low, at(10, 0)))
            .await
            .unwrap();
        let older = repo
            .update_mood_if_newer(mood_update("m1", Mood::Stressed, at(9, 0)))
            .await
            .unwrap();

        assert_eq!(same, Some(MoodUpdateOutcome::Stale));
        assert_eq!(older, Some(MoodUpdateOutcome::Stale));
        let profile = stored_profile(&repo, "m1");
        assert_eq!(profile.mood, Some(Mood::Great));
        assert_eq!(profile.mood_updated_at, Some(at(10, 0)));
    }

    #[tokio::test]
    async fn sub_second_timestamps_round_trip() {
        let (repo, pool, _writer, _temp_dir) = create_test_repository();
        create_test_member(&pool, "m1", "Alice");
        let precise = at(9, 0) + Duration::milliseconds(123);

        repo.update_mood_if_newer(mood_update("m1", Mood::Neutral, precise))
            .await
            .unwrap();
        let replay = repo
            .update_mood_if_newer(mood_update("m1", Mood::Neutral, precise))
            .await
            .unwrap();

        assert_eq!(stored_profile(&repo, "m1").mood_updated_at, Some(precise));
        assert_eq!(replay, Some(MoodUpdateOutcome::Stale));
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn concurrent_mood_updates_keep_newest() {
        let (repo, pool, _writer, _temp_dir) = create_test_repository();
        create_test_member(&pool, "m1", "Alice");
        let repo = Arc::new(repo);

        let handles: Vec<_> = (0..30i64)
            .rev()
            .chain(30..60)
            .map(|minute| {
                let repo = repo.clone();
                tokio::spawn(async move {
                    let mood = Mood::ALL[(minute as usize) % Mood::ALL.len()];
                    repo.update_mood_if_newer(mood_update(
                        "m1",
                        mood,
                        at(8, 0) + Duration::minutes(minute),
                    ))
                    .await
                })
            })
            .collect();
        for handle in handles {
            handle.await.unwrap().unwrap();
        }

        let profile = stored_profile(&repo, "m1");
        assert_eq!(profile.mood_updated_at, Some(at(8, 59)));
        assert_eq!(profile.mood, Some(Mood::ALL[59 % Mood::ALL.len()]));
    }

    #[tokio::test]
    async fn created_goal_shows_up_in_listing() {
        let (repo, pool, writer, _temp_dir) = create_test_repository();
        create_test_member(&pool, "m1", "Alice");
        let goal_repo = GoalRepository::new(writer);

        let goal = goal_repo
            .insert_new_goal(NewGoal {
                member_id: "m1".to_string(),
                description: "Ship feature".to_string(),
                date: "2024-06-01".to_string(),
            })
            .await
            .unwrap();

        let members = aggregate_members(repo.list_members_with_goals().unwrap());
        let alice = members.get("m1").unwrap();
        assert_eq!(alice.goals, vec![goal]);
        assert!(!alice.goals[0].completed);
    }
}
