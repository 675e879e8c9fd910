use chrono::{Duration, Utc};
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

use crate::server::data::{patient::PatientRepository, repository::CrudRepository};

mod comorbidities;
mod listings;
mod medications;
