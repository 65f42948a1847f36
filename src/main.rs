use gitr::*;

use anyhow::Result;
use clap::Parser;
use cli::{Cli, Commands};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    human_panic::setup_panic!();

    let cli = Cli::parse();

    let theme = ui::Theme::detect(cli.no_color);
    colored::control::set_override(theme.colored);

    // RUST_LOG wins; otherwise --verbose enables debug for this crate
    let default_directive = if cli.verbose { "gitr=debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(default_directive)),
        )
        .with_writer(std::io::stderr)
        .init();

    let rt = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()?;

    let result = rt.block_on(async {
        match cli.command {
            Some(Commands::Config) => commands::config::run(&theme).await,
            None if cli.commit => {
                let options = commands::CommitOptions {
                    bypass: cli.bypass,
                };
                commands::commit::run(&options, &theme).await
            }
            None => {
                if cli.bypass {
                    eprintln!(
                        "{}",
                        theme.warning("--bypass has no effect without --commit; ignoring it")
                    );
                }
                commands::generate::run(&theme).await
            }
        }
    });

    if let Err(e) = result {
        tracing::debug!("Command failed: {:?}", e);
        eprintln!("{}", theme.error(&e.to_string()));
        if let Some(suggestion) = e.suggestion() {
            eprintln!("{}", theme.info(suggestion));
        }
        std::process::exit(1);
    }

    Ok(())
}
