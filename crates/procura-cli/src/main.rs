mod rank;

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

#[derive(Debug, Parser)]
#[command(name = "procura-cli")]
#[command(about = "Procura supplier marketplace operator interface")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Database maintenance
    Db {
        #[command(subcommand)]
        command: DbCommands,
    },
    /// Preview the public listing order for a set of filters
    Rank {
        /// Category slug or service name (e.g. photocopiers)
        #[arg(long)]
        category: Option<String>,
        /// Case-insensitive location substring (city, region or coverage area)
        #[arg(long)]
        location: Option<String>,
        #[arg(long, default_value_t = 1)]
        page: i64,
        #[arg(long, default_value_t = procura_core::DEFAULT_PAGE_LIMIT)]
        limit: i64,
    },
}

#[derive(Debug, Subcommand)]
enum DbCommands {
    /// Check database connectivity
    Ping,
    /// Apply pending migrations
    Migrate,
    /// Upsert vendors and their products from the seed file
    Seed {
        /// Seed file path; defaults to `PROCURA_VENDORS_PATH`
        #[arg(long)]
        path: Option<PathBuf>,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let Some(command) = cli.command else {
        println!("procura-cli: run with --help to list commands");
        return Ok(());
    };

    let config = procura_core::load_app_config()?;
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(config.log_level.clone()))?;
    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    let pool = procura_db::connect_pool(
        &config.database_url,
        procura_db::PoolConfig::from_app_config(&config),
    )
    .await?;

    let result = match command {
        Commands::Db { command } => run_db(&pool, &config, command).await,
        Commands::Rank {
            category,
            location,
            page,
            limit,
        } => rank::run_rank(&pool, category, location, page, limit).await,
    };

    pool.close().await;
    result
}

async fn run_db(
    pool: &sqlx::PgPool,
    config: &procura_core::AppConfig,
    command: DbCommands,
) -> anyhow::Result<()> {
    match command {
        DbCommands::Ping => {
            procura_db::health_check(pool).await?;
            println!("database reachable");
        }
        DbCommands::Migrate => {
            let applied = procura_db::run_migrations(pool).await?;
            println!("applied {applied} migration(s)");
        }
        DbCommands::Seed { path } => {
            let path = path.unwrap_or_else(|| config.vendors_path.clone());
            let seeds = procura_core::load_vendor_seeds(&path)?;
            tracing::info!(path = %path.display(), vendors = seeds.vendors.len(), "seeding vendors");
            let upserted = procura_db::seed_vendors(pool, &seeds.vendors).await?;
            println!("upserted {upserted} vendor(s) from {}", path.display());
        }
    }
    Ok(())
}
