use std::path::PathBuf;

use anyhow::Context as _;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "ffgraph", version)]
struct Cli {
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print the ffmpeg arguments described by a command JSON, one per line.
    Args(InArgs),
    /// Print only the rendered filtergraph of a command JSON.
    Graph(InArgs),
    /// Build the command and run it (requires the program on PATH).
    Run(RunArgs),
}

#[derive(Parser, Debug)]
struct InArgs {
    /// Input command JSON.
    #[arg(long = "in")]
    in_path: PathBuf,
}

#[derive(Parser, Debug)]
struct RunArgs {
    /// Input command JSON.
    #[arg(long = "in")]
    in_path: PathBuf,

    /// Program to run instead of `ffmpeg`.
    #[arg(long, default_value = ffgraph::FFMPEG)]
    program: PathBuf,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    match cli.cmd {
        Command::Args(args) => cmd_args(args),
        Command::Graph(args) => cmd_graph(args),
        Command::Run(args) => cmd_run(args),
    }
}

fn load(path: &std::path::Path) -> anyhow::Result<ffgraph::CommandSpec> {
    ffgraph::CommandSpec::from_path(path)
        .with_context(|| format!("load command '{}'", path.display()))
}

fn cmd_args(args: InArgs) -> anyhow::Result<()> {
    let cmd = load(&args.in_path)?.build()?;
    for token in cmd.to_args() {
        println!("{token}");
    }
    Ok(())
}

fn cmd_graph(args: InArgs) -> anyhow::Result<()> {
    let spec = load(&args.in_path)?;
    let set = spec
        .filter_set()?
        .with_context(|| format!("'{}' has no filters", args.in_path.display()))?;
    println!("{}", set.render());
    Ok(())
}

fn cmd_run(args: RunArgs) -> anyhow::Result<()> {
    let cmd = load(&args.in_path)?.build()?;
    let exec = ffgraph::SystemExecutor::new(args.program.clone());
    let out = ffgraph::run(&exec, &cmd)
        .with_context(|| format!("run '{}'", args.program.display()))?;
    if !out.stdout.is_empty() {
        print!("{}", out.stdout);
    }
    eprintln!("{} finished", args.program.display());
    Ok(())
}
