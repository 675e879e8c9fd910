use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

use crate::server::data::{repository::CrudRepository, user::UserRepository};

mod exists_with_role;
mod find_by_username;
mod find_with_role;
