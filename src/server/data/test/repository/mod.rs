use chrono::Utc;
use sea_orm::{ActiveValue, DbErr, EntityTrait};
use test_utils::{builder::TestBuilder, factory};
use uuid::Uuid;

use crate::server::data::repository::CrudRepository;

mod create;
mod delete;
mod get_all;
mod get_by_id;
mod update;

type Roles<'a> = CrudRepository<'a, entity::prelude::Role, sea_orm::DatabaseConnection>;

fn role_model(name: &str) -> entity::role::ActiveModel {
    let now = Utc::now();
    entity::role::ActiveModel {
        id: ActiveValue::Set(Uuid::new_v4()),
        name: ActiveValue::Set(name.to_string()),
        description: ActiveValue::Set(None),
        created_at: ActiveValue::Set(now),
        updated_at: ActiveValue::Set(now),
        deleted_at: ActiveValue::Set(None),
    }
}
