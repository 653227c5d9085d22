use std::sync::Arc;

use anyhow::Context;
use colored::Colorize;
use zoo_server::{ServerConfig, ZooServer};
use zoo_store::{AnimalStore, MigrationOutcome, PgAnimalStore};

use crate::cli::*;

pub async fn run_command(cli: Cli) -> anyhow::Result<()> {
    match cli.command {
        Command::Serve(args) => cmd_serve(args).await,
        Command::Migrate(args) => cmd_migrate(args).await,
        Command::Check(args) => cmd_check(args).await,
    }
}

/// Config file (or defaults), then command-line overrides.
pub fn resolve_config(args: &ConnectArgs) -> anyhow::Result<ServerConfig> {
    let mut config = match &args.config {
        Some(path) => ServerConfig::load(path)?,
        None => ServerConfig::default(),
    };
    if let Some(bind) = args.bind {
        config.bind_addr = bind;
    }
    if let Some(url) = &args.database_url {
        config.database.url = url.clone();
    }
    Ok(config)
}

async fn connect(config: &ServerConfig) -> anyhow::Result<PgAnimalStore> {
    PgAnimalStore::connect(&config.database)
        .await
        .context("error connecting to the database")
}

async fn cmd_serve(args: ConnectArgs) -> anyhow::Result<()> {
    let config = resolve_config(&args)?;
    let store = connect(&config).await?;
    store.migrate().await.context("error creating table")?;
    store.ping().await.context("database connection failed")?;
    tracing::info!("database connected successfully");

    ZooServer::new(config, Arc::new(store)).serve().await?;
    Ok(())
}

async fn cmd_migrate(args: ConnectArgs) -> anyhow::Result<()> {
    let config = resolve_config(&args)?;
    let store = connect(&config).await?;
    let outcome = store.migrate().await.context("error creating table")?;
    match outcome {
        MigrationOutcome::AlreadyPresent => println!("{} Models already migrated.", "✓".green()),
        MigrationOutcome::Created => println!("{} Migration completed successfully.", "✓".green().bold()),
    }
    store.close().await;
    Ok(())
}

async fn cmd_check(args: ConnectArgs) -> anyhow::Result<()> {
    let config = resolve_config(&args)?;
    let store = connect(&config).await?;
    store.ping().await.context("database connection failed")?;
    println!("{} Database connected successfully", "✓".green().bold());
    store.close().await;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_without_file_or_flags() {
        let config = resolve_config(&ConnectArgs::default()).unwrap();
        assert_eq!(config, ServerConfig::default());
    }

    #[test]
    fn flags_override_defaults() {
        let args = ConnectArgs {
            config: None,
            bind: Some("127.0.0.1:9999".parse().unwrap()),
            database_url: Some("postgres://zoo@db/zoo".into()),
        };
        let config = resolve_config(&args).unwrap();
        assert_eq!(config.bind_addr.port(), 9999);
        assert_eq!(config.database.url, "postgres://zoo@db/zoo");
        assert_eq!(config.database.max_connections, 5);
    }

    #[test]
    fn missing_config_file_fails() {
        let args = ConnectArgs {
            config: Some("/definitely/not/here.toml".into()),
            ..ConnectArgs::default()
        };
        assert!(resolve_config(&args).is_err());
    }
}
