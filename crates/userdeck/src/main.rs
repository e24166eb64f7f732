use std::sync::Arc;

use anyhow::{anyhow, Result};
use clap::{Parser, Subcommand};
use tracing::info;
use tracing_subscriber::EnvFilter;
use userdeck_config::{get_config_path, get_log_dir, get_log_path, Config};
use userdeck_output::*;
use userdeck_pager::Pager;
use userdeck_source::{RemoteUserSource, UserSource};
use userdeck_types::User;

mod tui;

const MAIN_HELP: &str = r#"Userdeck fetches a batch of randomly generated user profiles and shows them
one at a time. Run without a command to open the interactive screen: use the
arrow keys, the on-screen buttons, or drag the mouse left/right across the
card to move between users, and press `t` to switch between the light and
dark theme.

Users are fetched once per run and never stored. `userdeck list` and
`userdeck show` print the same data without the interactive screen."#;

#[derive(Parser)]
#[command(name = "userdeck")]
#[command(about = MAIN_HELP)]
#[command(version)]
struct Cli {
    #[arg(long, global = true, help = "Output as JSON")]
    json: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    #[command(about = "Open the interactive user screen (default).")]
    View {
        #[arg(short = 'n', long, value_parser = clap::value_parser!(u32).range(1..), help = "Number of users to fetch")]
        count: Option<u32>,
    },

    #[command(about = "Fetch users and print one line per user.")]
    List {
        #[arg(short = 'n', long, value_parser = clap::value_parser!(u32).range(1..), help = "Number of users to fetch")]
        count: Option<u32>,
    },

    #[command(about = "Fetch users and print the card of one of them.")]
    Show {
        #[arg(short = 'n', long, value_parser = clap::value_parser!(u32).range(1..), help = "Number of users to fetch")]
        count: Option<u32>,
        #[arg(short = 'i', long, default_value = "0", help = "Position of the user to show, starting at 0")]
        index: usize,
    },

    #[command(about = "Print config file location and contents.")]
    Config,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = Config::load()?;
    init_logging(&config)?;

    match cli.command.unwrap_or(Commands::View { count: None }) {
        Commands::View { count } => handle_view(&config, count).await,
        Commands::List { count } => handle_list(&config, cli.json, count).await,
        Commands::Show { count, index } => handle_show(&config, cli.json, count, index).await,
        Commands::Config => handle_config(&config),
    }
}

fn init_logging(config: &Config) -> Result<()> {
    let log_dir = get_log_dir();
    std::fs::create_dir_all(&log_dir)?;

    let log_file = std::fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(get_log_path())?;

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.log.level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(log_file)
        .with_ansi(false)
        .init();
    Ok(())
}

fn source_from_config(config: &Config) -> Result<RemoteUserSource> {
    Ok(RemoteUserSource::new(&config.source.endpoint)?)
}

async fn fetch_users(config: &Config, count: Option<u32>) -> Result<Vec<User>> {
    let source = source_from_config(config)?;
    let count = count.unwrap_or(config.source.count);
    source
        .fetch_users(count)
        .await
        .map_err(|e| anyhow!("Failed to load users: {}", e))
}

async fn handle_view(config: &Config, count: Option<u32>) -> Result<()> {
    let source: Arc<dyn UserSource> = Arc::new(source_from_config(config)?);
    let count = count.unwrap_or(config.source.count);
    info!(count, endpoint = %config.source.endpoint, "Starting userdeck");
    tui::run(source, count, config.initial_theme()).await
}

async fn handle_list(config: &Config, json_output: bool, count: Option<u32>) -> Result<()> {
    let users = fetch_users(config, count).await?;

    if json_output {
        println!("{}", serde_json::to_string_pretty(&users)?);
    } else {
        println!("{}", format_user_list(&users));
    }
    Ok(())
}

async fn handle_show(
    config: &Config,
    json_output: bool,
    count: Option<u32>,
    index: usize,
) -> Result<()> {
    let mut pager = Pager::new();
    pager.set_loaded(fetch_users(config, count).await?);
    pager.advance(index);

    if json_output {
        println!("{}", serde_json::to_string_pretty(&pager.current_user())?);
    } else {
        println!("{}", format_pager_card(&pager));
    }
    Ok(())
}

fn handle_config(config: &Config) -> Result<()> {
    let config_path = get_config_path();
    println!("Config file: {}", config_path.display());
    if !config_path.exists() {
        println!("(file does not exist, using defaults)");
    }
    println!();
    println!("{}", config.to_toml_string()?);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero_count_is_rejected() {
        for command in ["view", "list", "show"] {
            let result = Cli::try_parse_from(["userdeck", command, "-n", "0"]);
            assert!(result.is_err(), "{command} accepted a count of 0");
        }
    }

    #[test]
    fn test_count_and_index_are_parsed() {
        let cli = Cli::try_parse_from(["userdeck", "show", "--count", "3", "-i", "9", "--json"]).unwrap();
        assert!(cli.json);
        match cli.command {
            Some(Commands::Show { count, index }) => {
                assert_eq!(count, Some(3));
                assert_eq!(index, 9);
            }
            _ => panic!("expected show command"),
        }
    }

    #[test]
    fn test_no_command_defaults_to_view() {
        let cli = Cli::try_parse_from(["userdeck"]).unwrap();
        assert!(cli.command.is_none());
    }
}
