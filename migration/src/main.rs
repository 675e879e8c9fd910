use migration::{
    cli::{Action, Command},
    database_url_from_env, MigrationError, SqlMigrator, DEFAULT_MIGRATIONS_DIR,
};
use sea_orm::{ConnectOptions, Database};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), MigrationError> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let command = Command::parse(std::env::args().skip(1))?;
    let dir = command.dir.unwrap_or_else(|| {
        std::env::var("MIGRATIONS_DIR")
            .unwrap_or_else(|_| DEFAULT_MIGRATIONS_DIR.to_string())
            .into()
    });

    let mut opt = ConnectOptions::new(database_url_from_env()?);
    opt.sqlx_logging(false);
    let db = Database::connect(opt).await?;

    let migrator = SqlMigrator::new(&db, dir);
    match command.action {
        Action::Up => {
            migrator.up().await?;
        }
        Action::Down => {
            let rolled_back = migrator.down().await?;
            tracing::info!("Rolled back {} migrations", rolled_back.len());
        }
        Action::Reset => {
            let applied = migrator.reset().await?;
            tracing::info!("Reset complete, {} migrations applied", applied.len());
        }
    }

    Ok(())
}
