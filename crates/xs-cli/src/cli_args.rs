use clap::{Args, Parser, Subcommand};

#[derive(Debug, Parser)]
#[command(name = "xs-syntax")]
#[command(about = "Script command syntax catalog tool")]
pub(crate) struct Cli {
    #[command(subcommand)]
    pub(crate) command: Mode,
}

#[derive(Debug, Subcommand)]
pub(crate) enum Mode {
    Check(CheckArgs),
    Resolve(ResolveArgs),
}

#[derive(Debug, Args)]
pub(crate) struct SourceArgs {
    #[arg(long = "syntax-file")]
    pub(crate) syntax_file: String,
    /// Drop definitions with unknown group or parameter kind names.
    #[arg(long = "skip-unknown")]
    pub(crate) skip_unknown: bool,
    #[arg(long = "json")]
    pub(crate) json: bool,
}

#[derive(Debug, Args)]
pub(crate) struct CheckArgs {
    #[command(flatten)]
    pub(crate) source: SourceArgs,
}

#[derive(Debug, Args)]
pub(crate) struct ResolveArgs {
    #[command(flatten)]
    pub(crate) source: SourceArgs,
    #[arg(long = "game-version", default_value = "TC")]
    pub(crate) game_version: String,
    /// Whitespace separated `Kind:text` pairs, e.g. `Keyword:if Variable:$x`.
    #[arg(long = "tokens")]
    pub(crate) tokens: String,
}
