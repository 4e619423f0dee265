use std::error::Error;
use std::path::PathBuf;

use clap::{Parser, ValueEnum, error::ErrorKind};

use crate::config::{CollisionPolicy, GraphFormat, PipelineConfig};
use crate::constants::paths::{ENV_CLEANED, ENV_OUTPUT, ENV_SOURCE};
use crate::links::StaticLinkTable;
use crate::metrics::RunSummary;
use crate::pipeline::Pipeline;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum FormatArg {
    Turtle,
    Ntriples,
}

impl From<FormatArg> for GraphFormat {
    fn from(value: FormatArg) -> Self {
        match value {
            FormatArg::Turtle => GraphFormat::Turtle,
            FormatArg::Ntriples => GraphFormat::NTriples,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum StageArg {
    All,
    Clean,
    Graph,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum CollisionArg {
    Fail,
    KeepFirst,
}

impl From<CollisionArg> for CollisionPolicy {
    fn from(value: CollisionArg) -> Self {
        match value {
            CollisionArg::Fail => CollisionPolicy::Fail,
            CollisionArg::KeepFirst => CollisionPolicy::KeepFirst,
        }
    }
}

#[derive(Debug, Parser)]
#[command(
    name = "gpu_graph",
    disable_help_subcommand = true,
    about = "Normalize a GPU spec-sheet table into a typed knowledge graph",
    long_about = "Load the raw GPU spec-sheet CSV, normalize units and dates, drop exact duplicates, derive identifiers, write the cleaned table and emit the graph.",
    after_help = "Paths are resolved in order by explicit arg, environment variables (GPU_GRAPH_SOURCE, GPU_GRAPH_CLEANED, GPU_GRAPH_OUTPUT), then defaults under --data-dir."
)]
struct GpuGraphCli {
    #[arg(long, value_name = "PATH", help = "Raw spec-sheet CSV")]
    source: Option<PathBuf>,
    #[arg(long, value_name = "PATH", help = "Cleaned table written by the clean stage")]
    cleaned: Option<PathBuf>,
    #[arg(long, value_name = "PATH", help = "Graph output file")]
    output: Option<PathBuf>,
    #[arg(
        long = "data-dir",
        value_name = "DIR",
        default_value = crate::constants::paths::DEFAULT_DATA_DIR,
        help = "Directory holding the default source, cleaned and graph files"
    )]
    data_dir: PathBuf,
    #[arg(
        long,
        value_name = "JSON",
        help = "Optional brand/architecture link table for same-as statements"
    )]
    links: Option<PathBuf>,
    #[arg(long, value_enum, default_value_t = FormatArg::Turtle, help = "Graph output format")]
    format: FormatArg,
    #[arg(long, value_enum, default_value_t = StageArg::All, help = "Stages to run")]
    stage: StageArg,
    #[arg(
        long = "on-collision",
        value_enum,
        default_value_t = CollisionArg::Fail,
        help = "Behavior when two products derive the same identifier"
    )]
    on_collision: CollisionArg,
}

/// Run the `gpu_graph` command with `args_iter` (excluding the program name).
///
/// Environment variables are read from the process environment.
pub fn run_gpu_graph<I>(args_iter: I) -> Result<(), Box<dyn Error>>
where
    I: Iterator<Item = String>,
{
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .try_init();

    let Some(summary) = execute(args_iter, |key| std::env::var(key).ok())? else {
        return Ok(());
    };
    for line in summary.report_lines() {
        println!("{line}");
    }
    Ok(())
}

fn execute<I, Env>(args_iter: I, env: Env) -> Result<Option<RunSummary>, Box<dyn Error>>
where
    I: Iterator<Item = String>,
    Env: Fn(&str) -> Option<String>,
{
    let Some(cli) =
        parse_cli::<GpuGraphCli, _>(std::iter::once("gpu_graph".to_string()).chain(args_iter))?
    else {
        return Ok(None);
    };

    let config = resolve_config(&cli, env);
    let links = match &cli.links {
        Some(path) => StaticLinkTable::from_json_file(path)?,
        None => StaticLinkTable::empty(),
    };
    let pipeline = Pipeline::new(config);

    let summary = match cli.stage {
        StageArg::All => pipeline.run(&pipeline.default_source(), &links)?,
        StageArg::Clean => pipeline.clean(&pipeline.default_source())?,
        StageArg::Graph => pipeline.build_graph_from_cleaned(&links)?,
    };
    Ok(Some(summary))
}

fn resolve_config<Env>(cli: &GpuGraphCli, env: Env) -> PipelineConfig
where
    Env: Fn(&str) -> Option<String>,
{
    let mut config = PipelineConfig::in_dir(&cli.data_dir)
        .with_graph_format(cli.format.into())
        .with_collision_policy(cli.on_collision.into());
    if let Some(path) = resolve_path(cli.source.as_ref(), ENV_SOURCE, &env) {
        config = config.with_source_path(path);
    }
    if let Some(path) = resolve_path(cli.cleaned.as_ref(), ENV_CLEANED, &env) {
        config = config.with_cleaned_path(path);
    }
    if let Some(path) = resolve_path(cli.output.as_ref(), ENV_OUTPUT, &env) {
        config = config.with_graph_path(path);
    }
    config
}

fn resolve_path<Env>(explicit: Option<&PathBuf>, key: &str, env: &Env) -> Option<PathBuf>
where
    Env: Fn(&str) -> Option<String>,
{
    explicit
        .cloned()
        .or_else(|| env(key).filter(|value| !value.trim().is_empty()).map(PathBuf::from))
}

fn parse_cli<T, I>(args: I) -> Result<Option<T>, Box<dyn Error>>
where
    T: Parser,
    I: IntoIterator,
    I::Item: Into<std::ffi::OsString> + Clone,
{
    match T::try_parse_from(args) {
        Ok(cli) => Ok(Some(cli)),
        Err(err) => match err.kind() {
            ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => {
                err.print()?;
                Ok(None)
            }
            _ => Err(err.into()),
        },
    }
}
