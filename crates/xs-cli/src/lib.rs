use std::collections::BTreeMap;
use std::ffi::OsString;
use std::fs::File;
use std::io::BufReader;

use clap::Parser;
use serde::Serialize;
use tracing::debug;
use tracing_subscriber::EnvFilter;
use xs_catalog::{Resolver, SyntaxCatalog};
use xs_core::{CommandGroup, GameVersion};
use xs_legacy::{ReaderOptions, UnknownNamePolicy};

mod cli_args;
mod error_map;
mod token_spec;

pub(crate) use cli_args::{CheckArgs, Cli, Mode, ResolveArgs, SourceArgs};
pub(crate) use error_map::{emit_error, map_cli_output_json, map_cli_source_open, CliError};
pub(crate) use token_spec::{parse_token_spec, InlineObjects};

pub fn run_cli_from_args<I, T>(args: I) -> i32
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    let cli = match Cli::try_parse_from(args) {
        Ok(cli) => cli,
        Err(error) => {
            let _ = error.print();
            return error.exit_code();
        }
    };
    init_tracing();
    match run(cli) {
        Ok(code) => code,
        Err(error) => emit_error(error),
    }
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .try_init();
}

fn run(cli: Cli) -> Result<i32, CliError> {
    match cli.command {
        Mode::Check(args) => run_check(args),
        Mode::Resolve(args) => run_resolve(args),
    }
}

fn load_catalog(source: &SourceArgs) -> Result<SyntaxCatalog, CliError> {
    debug!(path = %source.syntax_file, "loading syntax definitions");
    let file = File::open(&source.syntax_file).map_err(map_cli_source_open)?;
    let options = ReaderOptions {
        unknown_names: if source.skip_unknown {
            UnknownNamePolicy::Skip
        } else {
            UnknownNamePolicy::Abort
        },
    };
    Ok(SyntaxCatalog::load(BufReader::new(file), options)?)
}

#[derive(Debug, Serialize)]
struct CatalogSummary {
    commands: usize,
    groups: BTreeMap<&'static str, usize>,
}

fn summarize(catalog: &SyntaxCatalog) -> CatalogSummary {
    let groups = CommandGroup::all()
        .map(|group| (group.name(), catalog.by_group(group).count()))
        .filter(|(_, count)| *count > 0)
        .collect();
    CatalogSummary {
        commands: catalog.len(),
        groups,
    }
}

fn run_check(args: CheckArgs) -> Result<i32, CliError> {
    let catalog = load_catalog(&args.source)?;
    let summary = summarize(&catalog);
    if args.source.json {
        println!(
            "{}",
            serde_json::to_string(&summary).map_err(map_cli_output_json)?
        );
        return Ok(0);
    }

    println!("RESULT:OK");
    println!("COMMANDS:{}", summary.commands);
    for (name, count) in &summary.groups {
        println!("GROUP:{}:{}", name, count);
    }
    Ok(0)
}

fn run_resolve(args: ResolveArgs) -> Result<i32, CliError> {
    let version = args.game_version.parse::<GameVersion>()?;
    let tokens = parse_token_spec(&args.tokens)?;
    let catalog = load_catalog(&args.source)?;
    let resolution = Resolver::new(&catalog, &InlineObjects).resolve(&tokens, version)?;

    if args.source.json {
        println!(
            "{}",
            serde_json::to_string(&resolution).map_err(map_cli_output_json)?
        );
        return Ok(0);
    }

    println!("RESULT:OK");
    println!("COMMAND_ID:{}", resolution.command.id());
    println!("HASH:{}", resolution.hash);
    for (index, argument) in resolution.arguments.iter().enumerate() {
        let group = argument
            .object_group
            .map(|group| format!(":{:?}", group))
            .unwrap_or_default();
        println!(
            "ARG:{}:{}:{}{}",
            index,
            argument.parameter.kind.name(),
            argument.token.text,
            group
        );
    }
    Ok(0)
}
