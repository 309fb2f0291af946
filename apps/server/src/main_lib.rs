use std::sync::Arc;

use tracing_subscriber::prelude::*;
use tracing_subscriber::{fmt, EnvFilter};
use vibeloop_core::{
    goals::{GoalService, GoalServiceTrait},
    members::{MemberService, MemberServiceTrait},
};
use vibeloop_storage_sqlite::{
    db::{self, write_actor},
    goals::GoalRepository,
    members::MemberRepository,
};

use crate::config::Config;

pub struct AppState {
    pub member_service: Arc<dyn MemberServiceTrait + Send + Sync>,
    pub goal_service: Arc<dyn GoalServiceTrait + Send + Sync>,
    pub db_path: String,
}

pub fn init_tracing() {
    let log_format = std::env::var("VL_LOG_FORMAT").unwrap_or_else(|_| "text".to_string());
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let registry = tracing_subscriber::registry().with(filter);

    if log_format.eq_ignore_ascii_case("json") {
        registry
            .with(fmt::layer().json().with_current_span(false))
            .init();
    } else {
        registry
            .with(fmt::layer().with_target(true).with_line_number(true))
            .init();
    }
}

pub async fn build_state(config: &Config) -> anyhow::Result<Arc<AppState>> {
    let db_path = db::init(&config.db_path)?;
    tracing::info!("Database path in use: {}", db_path);

    let pool = db::create_pool(&db_path)?;
    db::run_migrations(&pool)?;
    if config.seed_members {
        db::seed_members(&pool)?;
    }
    let writer = write_actor::spawn_writer((*pool).clone());

    let member_repository = Arc::new(MemberRepository::new(pool.clone(), writer.clone()));
    let goal_repository = Arc::new(GoalRepository::new(writer));

    let member_service = Arc::new(MemberService::new(member_repository.clone()));
    let goal_service = Arc::new(GoalService::new(goal_repository, member_repository));

    Ok(Arc::new(AppState {
        member_service,
        goal_service,
        db_path,
    }))
}
