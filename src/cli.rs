use clap::{Parser, Subcommand, builder::styling};

const STYLES: styling::Styles = styling::Styles::styled()
    .header(styling::AnsiColor::Green.on_default().bold())
    .usage(styling::AnsiColor::Green.on_default().bold())
    .literal(styling::AnsiColor::Cyan.on_default().bold())
    .placeholder(styling::AnsiColor::Cyan.on_default());

const AFTER_HELP: &str = "\
Examples:
  gitr              Generate a commit message for staged changes
  gitr -c           Generate, confirm and commit
  gitr -c -b        Generate and commit without confirmation
  gitr config       Edit the configuration

Configuration is read from the first existing file of:
  ./.gitr_config, ~/.gitr_config, ~/.config/gitr/config";

#[derive(Parser, Debug)]
#[command(name = "gitr")]
#[command(author, version, long_about = None)]
#[command(about = "Generate conventional commit messages from staged changes with AI")]
#[command(styles = STYLES)]
#[command(after_help = AFTER_HELP)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Commit the generated message after confirmation
    #[arg(short, long)]
    pub commit: bool,

    /// Skip confirmation (only with --commit)
    #[arg(short, long)]
    pub bypass: bool,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,
}

#[derive(Subcommand, Debug, PartialEq, Eq)]
pub enum Commands {
    /// Edit configuration (runs setup when none exists)
    Config,
}
