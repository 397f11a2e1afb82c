mod cli;

use clap::Parser;
use color_eyre::eyre::{Result, eyre};
use tracing_subscriber::EnvFilter;

use cli::{ApplyArgs, Cli, Command, PlanArgs, PoolCommand, TagsCommand};
use tagsync::output::{self, OutputFormat};
use tagsync::providers::{self, aws};
use tagsync::{IdentityPoolResource, ProviderConfig, load, update_tags};

#[tokio::main]
async fn main() -> Result<()> {
    color_eyre::install()?;

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let mut config = ProviderConfig::load(cli.config_file.as_deref())?;
    if cli.region.is_some() {
        config.region = cli.region.clone();
    }
    if cli.account_id.is_some() {
        config.account_id = cli.account_id.clone();
    }
    if cli.endpoint_url.is_some() {
        config.endpoint_url = cli.endpoint_url.clone();
    }

    match cli.command {
        Command::Tags { command } => match command {
            TagsCommand::Plan(args) => plan(&args, cli.output)?,
            TagsCommand::Apply(args) => apply(&args, &config, cli.output).await?,
        },
        Command::Pool { command } => {
            let sdk_config =
                aws::load_sdk_config(config.region.as_deref(), config.endpoint_url.as_deref())
                    .await;
            let api = aws::CognitoIdentity::new(&sdk_config);
            let resource = IdentityPoolResource::new(&api, &config);

            let state = match command {
                PoolCommand::Create(args) => {
                    let desired = load::pool_config_from_file(&args.config)?;
                    Some(resource.create(&desired).await?)
                }
                PoolCommand::Read(args) => {
                    let state = resource.read(&args.id, false).await?;
                    if state.is_none() {
                        return Err(eyre!("Cognito Identity Pool ({}) does not exist", args.id));
                    }
                    state
                }
                PoolCommand::Update(args) => {
                    let desired = load::pool_config_from_file(&args.config)?;
                    let prior = resource.import(&args.id).await?;
                    Some(resource.update(&prior, &desired).await?)
                }
                PoolCommand::Delete(args) => {
                    resource.delete(&args.id).await?;
                    tracing::info!(id = %args.id, "Cognito Identity Pool deleted");
                    None
                }
                PoolCommand::Import(args) => Some(resource.import(&args.id).await?),
            };

            if let Some(state) = state {
                println!("{}", output::render_pool(&state, cli.output)?);
            }
        }
    }

    Ok(())
}

fn plan(args: &PlanArgs, format: OutputFormat) -> Result<()> {
    let old = load::tags_from_file(&args.old)?;
    let new = load::tags_from_file(&args.new)?;

    let diff = old.diff(&new);
    tracing::info!(
        removed = diff.removed.len(),
        updated = diff.updated.len(),
        "tag plan computed"
    );

    println!("{}", output::render_diff(&args.resource, &diff, format)?);
    Ok(())
}

async fn apply(args: &ApplyArgs, config: &ProviderConfig, format: OutputFormat) -> Result<()> {
    let old = load::tags_from_file(&args.old)?;
    let new = load::tags_from_file(&args.new)?;

    let sdk_config =
        aws::load_sdk_config(config.region.as_deref(), config.endpoint_url.as_deref()).await;
    let client = providers::tagging_client(&args.service, &sdk_config)?;

    let diff = update_tags(client.as_ref(), &args.resource, &old, &new).await?;
    tracing::info!(
        service = %args.service,
        removed = diff.removed.len(),
        updated = diff.updated.len(),
        "tags applied"
    );

    println!("{}", output::render_diff(&args.resource, &diff, format)?);
    Ok(())
}
