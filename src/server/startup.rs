//! One-time initialization run before the server starts accepting requests.

use migration::SqlMigrator;
use sea_orm::{ConnectOptions, Database, DatabaseConnection, TransactionTrait};

use crate::server::{
    cache::Cache,
    config::Config,
    data::{repository::CrudRepository, user::UserRepository},
    error::AppError,
    model::{
        role::{CreateRoleParams, ADMIN_ROLE, BUILT_IN_ROLES},
        user::CreateUserParams,
    },
    util::password::hash_password,
};

/// Connects to the database and applies pending migrations.
///
/// Establishes a connection pool using the URL from configuration, then runs every
/// `.sql` file in `MIGRATIONS_DIR` that is not yet recorded in `schema_migrations`.
/// This function must complete successfully before the application can access the
/// database.
///
/// # Arguments
/// - `config` - Application configuration containing the database URL and migrations directory
///
/// # Returns
/// - `Ok(DatabaseConnection)` - Connected database with migrations applied
/// - `Err(AppError)` - Failed to connect to database or run migrations
pub async fn connect_to_database(config: &Config) -> Result<DatabaseConnection, AppError> {
    let mut opt = ConnectOptions::new(&config.database_url);
    opt.sqlx_logging(false);

    let db = Database::connect(opt).await?;

    let applied = SqlMigrator::new(&db, &config.migrations_dir).up().await?;
    if applied.is_empty() {
        tracing::info!("Database schema is up to date");
    } else {
        tracing::info!("Applied {} migration(s): {}", applied.len(), applied.join(", "));
    }

    Ok(db)
}

/// Connects to Redis when `REDIS_URL` is set, otherwise returns a disabled cache.
pub async fn connect_to_cache(config: &Config) -> Result<Cache, AppError> {
    match &config.redis_url {
        Some(url) => {
            let cache = Cache::connect(url, config.cache_ttl_seconds).await?;
            tracing::info!("Connected to Redis cache");
            Ok(cache)
        }
        None => {
            tracing::info!("REDIS_URL not set, caching disabled");
            Ok(Cache::disabled())
        }
    }
}

/// Creates the built-in roles that do not exist yet.
///
/// A built-in role that was soft-deleted is restored instead of recreated, so users
/// still pointing at it keep their role.
pub async fn seed_roles(db: &DatabaseConnection) -> Result<(), AppError> {
    let txn = db.begin().await?;
    let roles = CrudRepository::<entity::prelude::Role, _>::new(&txn);

    for name in BUILT_IN_ROLES {
        if roles
            .find_one_by(entity::role::Column::Name, name)
            .await?
            .is_some()
        {
            continue;
        }

        if let Some(deleted) = roles
            .find_deleted_by(entity::role::Column::Name, name)
            .await?
        {
            roles.restore(deleted.id, entity::role::Column::Id).await?;
            tracing::info!("Restored deleted role {}", name);
            continue;
        }

        let params = CreateRoleParams {
            name: name.to_string(),
            description: None,
        };
        roles.create(params.into_active_model()).await?;
        tracing::info!("Created role {}", name);
    }

    txn.commit().await?;

    Ok(())
}

/// Ensures an administrator account exists.
///
/// When no live user holds the admin role and `ADMIN_USERNAME`/`ADMIN_PASSWORD` are
/// configured, creates that user. Without seed credentials only a warning is logged,
/// since role and user management would otherwise be unreachable.
///
/// # Arguments
/// - `db` - Database connection; the built-in roles must already be seeded
/// - `config` - Application configuration carrying the optional admin seed
///
/// # Returns
/// - `Ok(())` - An admin exists, was created, or no seed was configured
/// - `Err(AppError)` - Database or hashing failure
pub async fn check_for_admin(db: &DatabaseConnection, config: &Config) -> Result<(), AppError> {
    if UserRepository::new(db).exists_with_role(ADMIN_ROLE).await? {
        return Ok(());
    }

    let Some(seed) = &config.admin_seed else {
        tracing::warn!(
            "No admin user exists. Set ADMIN_USERNAME and ADMIN_PASSWORD to create one at startup"
        );
        return Ok(());
    };

    let txn = db.begin().await?;

    let Some(role) = CrudRepository::<entity::prelude::Role, _>::new(&txn)
        .find_one_by(entity::role::Column::Name, ADMIN_ROLE)
        .await?
    else {
        return Err(AppError::InternalError(format!(
            "role '{}' missing while seeding admin user",
            ADMIN_ROLE
        )));
    };

    let params = CreateUserParams {
        username: seed.username.clone(),
        password: seed.password.clone(),
        email: None,
        role_id: role.id,
    };
    let password_hash = hash_password(&params.password)?;

    CrudRepository::<entity::prelude::User, _>::new(&txn)
        .create(params.into_active_model(password_hash))
        .await?;

    txn.commit().await?;

    tracing::info!("Created admin user {}", seed.username);

    Ok(())
}
