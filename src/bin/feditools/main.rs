mod commands;
mod output;

use anyhow::Result;
use clap::{Parser, Subcommand};

use commands::unconfirmed_users::{handle_unconfirmed_users, UnconfirmedUsersArgs};
use commands::user_changes::{handle_user_changes, UserChangesArgs};
use output::OutputManager;

#[derive(Parser)]
#[command(name = "feditools")]
#[command(version)]
#[command(
    about = "Admin reporting tools for a Mastodon-compatible server",
    long_about = r#"Admin reporting tools for a Mastodon-compatible server.

Reads the server's PostgreSQL database (read-only) and prints reports to
stdout, suitable for piping into a scheduled email digest:

  show-user-changes        New, changed, and deleted accounts that mention
                           URLs in their profile, diffed against the
                           previous run's snapshot
  show-unconfirmed-users   Users who have not confirmed their email address

Connection settings live in ~/.feditools/config.json.
"#
)]
#[command(subcommand_required = true, arg_required_else_help = true)]
struct Cli {
    /// Increase logging verbosity (-v: info, -vv: debug)
    #[arg(short = 'v', long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Suppress status chatter (reports are still printed)
    #[arg(short = 'q', long, global = true)]
    quiet: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Report new, changed, and deleted accounts that mention URLs in their profile
    #[command(name = "show-user-changes")]
    ShowUserChanges(UserChangesArgs),

    /// List users who have not confirmed their email address
    #[command(name = "show-unconfirmed-users")]
    ShowUnconfirmedUsers(UnconfirmedUsersArgs),
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let output = OutputManager::new(cli.quiet);

    if let Err(err) = execute(cli, &output).await {
        output.error(&format!("{err:#}"));
        std::process::exit(1);
    }
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => log::LevelFilter::Warn,
        1 => log::LevelFilter::Info,
        _ => log::LevelFilter::Debug,
    };
    env_logger::Builder::from_default_env()
        .filter_level(level)
        .init();
}

async fn execute(cli: Cli, output: &OutputManager) -> Result<()> {
    match cli.command {
        Commands::ShowUserChanges(args) => handle_user_changes(args, output).await,
        Commands::ShowUnconfirmedUsers(args) => handle_unconfirmed_users(args, output).await,
    }
}
