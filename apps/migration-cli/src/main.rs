use clap::Parser;
use migration::{migrate, MigrationCommand};
use nourish_backend::config::db::{db_url, kind_for_url, DbKind, SQLITE_MEMORY_URL};
use nourish_backend::infra::db::connect_db;
use tracing::error;

#[derive(Parser)]
#[command(name = "migration-cli")]
#[command(about = "Nourish4All database migration tool")]
struct Args {
    /// Migration command: up | down | fresh | reset | refresh | status
    command: MigrationCommand,

    /// Database URL; defaults to DATABASE_URL or the DB_* variables
    #[arg(long)]
    database_url: Option<String>,
}

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_writer(std::io::stdout)
        .without_time()
        .with_target(false)
        .with_env_filter("migration=info,migration_cli=info,sqlx=warn")
        .init();

    let args = Args::parse();

    let url = match args.database_url {
        Some(url) => url,
        None => match db_url(DbKind::Postgres) {
            Ok(url) => url,
            Err(e) => {
                error!(error = %e, "No database configured");
                std::process::exit(2);
            }
        },
    };

    // Nothing outlives the process, so migrating a private in-memory
    // database would be pointless.
    if url == SQLITE_MEMORY_URL {
        error!("In-memory SQLite is not supported for CLI operations");
        std::process::exit(2);
    }

    let conn = match connect_db(&url, kind_for_url(&url)).await {
        Ok(conn) => conn,
        Err(e) => {
            error!(error = %e, "Failed to connect");
            std::process::exit(1);
        }
    };

    if let Err(e) = migrate(&conn, args.command).await {
        error!(error = %e, "Migration failed");
        std::process::exit(1);
    }
}
