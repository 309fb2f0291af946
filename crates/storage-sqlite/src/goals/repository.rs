use vibeloop_core::goals::{Goal, GoalRepositoryTrait, NewGoal};
use vibeloop_core::Result;

use super::model::GoalDB;
use crate::db::WriteHandle;
use crate::errors::IntoCore;
use crate::schema::goals;
use async_trait::async_trait;
use chrono::Utc;
use diesel::prelude::*;
use diesel::SqliteConnection;

use uuid::Uuid;

/// Goal writes. Goals are read through `MemberRepository::list_members_with_goals`.
pub struct GoalRepository {
    writer: WriteHandle,
}

impl GoalRepository {
    pub fn new(writer: WriteHandle) -> Self {
        GoalRepository { writer }
    }
}

#[async_trait]
impl GoalRepositoryTrait for GoalRepository {
    async fn insert_new_goal(&self, new_goal: NewGoal) -> Result<Goal> {
        self.writer
            .exec(move |conn: &mut SqliteConnection| -> Result<Goal> {
                let goal_db = GoalDB {
                    id: Uuid::new_v4().to_string(),
                    member_id: new_goal.member_id,
                    description: new_goal.description,
                    completed: false,
                    created_at: Utc::now().naive_utc(),
                    date: new_goal.date,
                };

                let result_db = diesel::insert_into(goals::table)
                    .values(&goal_db)
                    .returning(GoalDB::as_returning())
                    .get_result(conn)
                    .into_core()?;
                Ok(Goal::from(result_db))
            })
            .await
    }

    async fn update_goal_completion(&self, goal_id: &str, completed: bool) -> Result<bool> {
        let goal_id = goal_id.to_string();
        self.writer
            .exec(move |conn: &mut SqliteConnection| -> Result<bool> {
                let affected = diesel::update(goals::table.find(goal_id))
                    .set(goals::completed.eq(completed))
                    .execute(conn)
                    .into_core()?;
                Ok(affected > 0)
            })
            .await
    }

    async fn delete_goal(&self, goal_id: &str) -> Result<bool> {
        let goal_id = goal_id.to_string();
        self.writer
            .exec(move |conn: &mut SqliteConnection| -> Result<bool> {
                let affected = diesel::delete(goals::table.find(goal_id))
                    .execute(conn)
                    .into_core()?;
                Ok(affected > 0)
            })
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::{create_pool, get_connection, run_migrations, write_actor::spawn_writer, DbPool};
    use diesel::RunQueryDsl;
    use std::sync::Arc;
    use tempfile::tempdir;
    use vibeloop_core::errors::{DatabaseError, Error};

    fn create_test_repository() -> (GoalRepository, Arc<DbPool>, tempfile::TempDir) {
        let temp_dir = tempdir().expect("Failed to create temp directory");
        let db_path = temp_dir.path().join("test.db");
        let pool = create_pool(&db_path.to_string_lossy()).expect("Failed to create pool");
        run_migrations(&pool).expect("Failed to run migrations");
        let writer = spawn_writer((*pool).clone());
        (GoalRepository::new(writer), pool, temp_dir)
    }

    fn create_test_member(pool: &Arc<DbPool>, member_id: &str) {
        let mut conn = get_connection(pool).expect("Failed to get connection");
        diesel::sql_query(format!(
            "INSERT INTO team_members (id, name) VALUES ('{}', 'Member {}')",
            member_id, member_id
        ))
        .execute(&mut conn)
        .expect("Failed to create test member");
    }

    fn load_goal(pool: &Arc<DbPool>, goal_id: &str) -> Option<GoalDB> {
        let mut conn = get_connection(pool).expect("Failed to get connection");
        goals::table
            .find(goal_id)
            .select(GoalDB::as_select())
            .first(&mut conn)
            .optional()
            .expect("Failed to load goal")
    }

    fn new_goal(member_id: &str) -> NewGoal {
        NewGoal {
            member_id: member_id.to_string(),
            description: "Ship feature".to_string(),
            date: "2024-06-01".to_string(),
        }
    }

    #[tokio::test]
    async fn insert_assigns_id_and_defaults() {
        let (repo, pool, _temp_dir) = create_test_repository();
        create_test_member(&pool, "m1");
        let before = Utc::now().naive_utc();

        let goal = repo.insert_new_goal(new_goal("m1")).await.unwrap();

        assert!(Uuid::parse_str(&goal.id).is_ok());
        assert!(!goal.completed);
        assert!(goal.created_at >= before);
        assert_eq!(goal.date, "2024-06-01");
        assert_eq!(load_goal(&pool, &goal.id).map(Goal::from), Some(goal));
    }

    #[tokio::test]
    async fn insert_for_missing_member_violates_foreign_key() {
        let (repo, _pool, _temp_dir) = create_test_repository();
        let err = repo.insert_new_goal(new_goal("ghost")).await.unwrap_err();
        assert!(matches!(
            err,
            Error::Database(DatabaseError::ForeignKeyViolation(_))
        ));
    }

    #[tokio::test]
    async fn update_completion_reports_whether_goal_exists() {
        let (repo, pool, _temp_dir) = create_test_repository();
        create_test_member(&pool, "m1");
        let goal = repo.insert_new_goal(new_goal("m1")).await.unwrap();

        assert!(repo.update_goal_completion(&goal.id, true).await.unwrap());
        assert!(load_goal(&pool, &goal.id).unwrap().completed);
        assert!(repo.update_goal_completion(&goal.id, false).await.unwrap());
        assert!(!load_goal(&pool, &goal.id).unwrap().completed);

        assert!(!repo.update_goal_completion("missing", true).await.unwrap());
    }

    #[tokio::test]
    async fn second_delete_finds_nothing() {
        let (repo, pool, _temp_dir) = create_test_repository();
        create_test_member(&pool, "m1");
        let goal = repo.insert_new_goal(new_goal("m1")).await.unwrap();

        assert!(repo.delete_goal(&goal.id).await.unwrap());
        assert!(load_goal(&pool, &goal.id).is_none());
        assert!(!repo.delete_goal(&goal.id).await.unwrap());
    }
}
