use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use learning_migrate::{MigrateError, MigrationConfig, Migrator, SUCCESS_MESSAGE};

#[derive(Parser)]
#[command(name = "lmig")]
#[command(about = "Add a second session to every single-session learning topic")]
struct Cli {
    /// Content file to migrate (defaults to the configured target)
    target: Option<PathBuf>,

    /// JSON configuration file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Run the migration without writing the file
    #[arg(long)]
    dry_run: bool,

    /// Truncate and rewrite the target instead of renaming a temporary file over it
    #[arg(long)]
    in_place: bool,
}

/// Initialize tracing on stderr; stdout carries only the outcome message
fn init_tracing() {
    let filter = tracing_subscriber::EnvFilter::new(
        std::env::var("RUST_LOG").unwrap_or_else(|_| "learning_migrate=info,lmig=info".into()),
    );

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

fn run(cli: Cli) -> anyhow::Result<()> {
    let mut config = MigrationConfig::load(cli.config.as_deref())?;
    if let Some(target) = cli.target {
        config.target = target;
    }
    if cli.in_place {
        config.atomic_write = false;
    }

    let migrator = Migrator::new(config)?;

    if cli.dry_run {
        let migration = migrator.preview()?;
        println!(
            "Dry run of {}: {}",
            migrator.config().target.display(),
            migration.report
        );
        return Ok(());
    }

    let report = migrator.run()?;
    tracing::info!(%report, "migration complete");
    println!("{SUCCESS_MESSAGE}");
    Ok(())
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing();

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            // Migration errors already render their cause and context.
            match e.downcast_ref::<MigrateError>() {
                Some(err) => println!("{err}"),
                None => println!("{e:#}"),
            }
            ExitCode::FAILURE
        }
    }
}
