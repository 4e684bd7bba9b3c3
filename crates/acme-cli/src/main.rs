use acme_cli::seeder::{SeedData, Seeder};
use acme_config::{DatabaseConfig, InvoiceIds, SeedConfig};
use acme_db::init_db_pool;
use clap::{Parser, Subcommand};
use dotenvy::dotenv;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "acme-cli")]
#[command(about = "Acme CLI - Database seeding for the Acme dashboard", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Create the tables (if missing) and insert the placeholder dataset
    Seed {
        /// How invoice ids are assigned: "generated" appends on every run,
        /// "deterministic" skips invoices seeded by an earlier run
        #[arg(long)]
        invoice_ids: Option<InvoiceIds>,
    },
    /// Create the uuid-ossp extension and all tables without inserting rows
    EnsureSchema,
    /// Print the number of rows in each seeded table
    Counts,
}

#[tokio::main]
async fn main() {
    dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("acme_cli=info")),
        )
        .init();

    let cli = Cli::parse();

    if let Err(e) = run(cli).await {
        eprintln!("❌ {:#}", e);
        std::process::exit(1);
    }
}

async fn run(cli: Cli) -> anyhow::Result<()> {
    let database = DatabaseConfig::from_env()?;
    let pool = init_db_pool(&database)?;

    match cli.command {
        Commands::Seed { invoice_ids } => handle_seed(pool, invoice_ids).await,
        Commands::EnsureSchema => handle_ensure_schema(pool).await,
        Commands::Counts => handle_counts(pool).await,
    }
}

async fn handle_seed(pool: sqlx::PgPool, invoice_ids: Option<InvoiceIds>) -> anyhow::Result<()> {
    let mut config = SeedConfig::from_env();
    if let Some(invoice_ids) = invoice_ids {
        config = config.with_invoice_ids(invoice_ids);
    }

    println!("🌱 Seeding database (invoice ids: {})...", config.invoice_ids);

    let seeder = Seeder::new(pool, config);
    let summary = seeder.seed(&SeedData::placeholder()).await?;

    println!("✅ Database seeded successfully");
    println!("   Users inserted:     {}", summary.users);
    println!("   Customers inserted: {}", summary.customers);
    println!("   Invoices inserted:  {}", summary.invoices);
    println!("   Revenue inserted:   {}", summary.revenue);

    Ok(())
}

async fn handle_ensure_schema(pool: sqlx::PgPool) -> anyhow::Result<()> {
    Seeder::new(pool, SeedConfig::default())
        .ensure_schema()
        .await?;

    println!("✅ Schema is in place");
    Ok(())
}

async fn handle_counts(pool: sqlx::PgPool) -> anyhow::Result<()> {
    let counts = Seeder::new(pool, SeedConfig::default())
        .table_counts()
        .await?;

    println!("📊 Table counts");
    println!("   users:     {}", counts.users);
    println!("   customers: {}", counts.customers);
    println!("   invoices:  {}", counts.invoices);
    println!("   revenue:   {}", counts.revenue);

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_is_well_formed() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_seed_with_invoice_ids() {
        let cli = Cli::try_parse_from(["acme-cli", "seed", "--invoice-ids", "deterministic"])
            .unwrap();
        match cli.command {
            Commands::Seed { invoice_ids } => {
                assert_eq!(invoice_ids, Some(InvoiceIds::Deterministic));
            }
            _ => panic!("expected seed command"),
        }
    }

    #[test]
    fn test_parse_rejects_unknown_invoice_ids() {
        assert!(Cli::try_parse_from(["acme-cli", "seed", "--invoice-ids", "random"]).is_err());
    }
}
