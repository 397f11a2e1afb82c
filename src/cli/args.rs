use std::path::PathBuf;

use clap::{Parser, Subcommand};
use tagsync::output::OutputFormat;

#[derive(Parser, Debug)]
#[command(author, version, about)]
pub struct Cli {
    /// Provider config file (JSON)
    #[arg(long, global = true, env = "TAGSYNC_CONFIG")]
    pub config_file: Option<PathBuf>,

    #[arg(long, global = true, env = "AWS_REGION")]
    pub region: Option<String>,

    #[arg(long, global = true, env = "AWS_ACCOUNT_ID")]
    pub account_id: Option<String>,

    #[arg(long, global = true, env = "AWS_ENDPOINT_URL")]
    pub endpoint_url: Option<String>,

    #[arg(long, global = true, value_enum, default_value_t = OutputFormat::Table)]
    pub output: OutputFormat,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Reconcile resource tags
    Tags {
        #[command(subcommand)]
        command: TagsCommand,
    },
    /// Manage Cognito Identity Pools
    Pool {
        #[command(subcommand)]
        command: PoolCommand,
    },
}

#[derive(Subcommand, Debug)]
pub enum TagsCommand {
    /// Show the tag changes between two tag sets without calling AWS
    Plan(PlanArgs),
    /// Apply the tag changes between two tag sets to a resource
    Apply(ApplyArgs),
}

#[derive(clap::Args, Debug)]
pub struct PlanArgs {
    #[arg(long)]
    pub old: PathBuf,

    #[arg(long)]
    pub new: PathBuf,

    /// Label for the tree output
    #[arg(long, default_value = "tags")]
    pub resource: String,
}

#[derive(clap::Args, Debug)]
pub struct ApplyArgs {
    #[arg(long, value_parser = clap::builder::PossibleValuesParser::new(tagsync::providers::TAGGING_SERVICES.iter().copied()))]
    pub service: String,

    /// Resource ARN
    #[arg(long)]
    pub resource: String,

    #[arg(long)]
    pub old: PathBuf,

    #[arg(long)]
    pub new: PathBuf,
}

#[derive(Subcommand, Debug)]
pub enum PoolCommand {
    Create(PoolConfigArgs),
    Read(PoolIdArgs),
    Update(PoolUpdateArgs),
    Delete(PoolIdArgs),
    Import(PoolIdArgs),
}

#[derive(clap::Args, Debug)]
pub struct PoolConfigArgs {
    /// Identity pool config file (JSON)
    #[arg(long)]
    pub config: PathBuf,
}

#[derive(clap::Args, Debug)]
pub struct PoolIdArgs {
    #[arg(long)]
    pub id: String,
}

#[derive(clap::Args, Debug)]
pub struct PoolUpdateArgs {
    #[arg(long)]
    pub id: String,

    /// Identity pool config file (JSON)
    #[arg(long)]
    pub config: PathBuf,
}
