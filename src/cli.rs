use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(
    name = "paleoimpact",
    version,
    about = "Allometric mass and ecological impact estimates for dinosaur specimens"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Score a single specimen from flags or a named base
    Score(ScoreArgs),
    /// Score two named specimens head to head
    Compare(CompareArgs),
    /// Score every roster entry in the config file
    Batch(RunArgs),
    /// List the built-in specimen catalog
    Catalog,
    /// Write a starter paleoimpact.toml in the current directory
    Init(InitArgs),
}

#[derive(Debug, Args, Clone)]
pub struct RunArgs {
    #[arg(long)]
    pub config: Option<PathBuf>,
    #[arg(long)]
    pub json: bool,
}

#[derive(Debug, Args, Clone)]
pub struct ScoreArgs {
    #[command(flatten)]
    pub run: RunArgs,
    /// Catalog or roster name to start from; explicit flags override its fields
    #[arg(long)]
    pub specimen: Option<String>,
    /// Display name for the result
    #[arg(long)]
    pub name: Option<String>,
    /// Total length in meters
    #[arg(long)]
    pub length: Option<f64>,
    /// Standing height in meters
    #[arg(long)]
    pub height: Option<f64>,
    /// carnivorous | herbivorous | omnivorous (anything else counts as unknown)
    #[arg(long)]
    pub diet: Option<String>,
    /// sauropod | large theropod | small theropod | ceratopsian | armoured dinosaur | euornithopod
    #[arg(long)]
    pub body_type: Option<String>,
    /// Geological period, e.g. "Late Cretaceous"
    #[arg(long)]
    pub period: Option<String>,
    /// First appearance, millions of years ago
    #[arg(long = "from")]
    pub start_mya: Option<f64>,
    /// Extinction, millions of years ago
    #[arg(long = "to")]
    pub end_mya: Option<f64>,
}

#[derive(Debug, Args, Clone)]
pub struct CompareArgs {
    #[command(flatten)]
    pub run: RunArgs,
    /// First contender (catalog or roster name)
    pub first: String,
    /// Second contender (catalog or roster name)
    pub second: String,
}

#[derive(Debug, Args)]
pub struct InitArgs {
    #[arg(long)]
    pub config: Option<PathBuf>,
}
