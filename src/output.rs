use tabled::settings::Style;
use tabled::{Table, Tabled};
use termtree::Tree;

use crate::resource::IdentityPoolState;
use crate::tags::TagDiff;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum OutputFormat {
    #[default]
    Table,
    Tree,
    Json,
}

#[derive(Tabled)]
struct TagChangeRow {
    #[tabled(rename = "ACTION")]
    action: &'static str,
    #[tabled(rename = "KEY")]
    key: String,
    #[tabled(rename = "VALUE")]
    value: String,
}

#[derive(Tabled)]
struct AttributeRow {
    #[tabled(rename = "ATTRIBUTE")]
    name: &'static str,
    #[tabled(rename = "VALUE")]
    value: String,
}

pub fn render_diff(
    identifier: &str,
    diff: &TagDiff,
    format: OutputFormat,
) -> Result<String, serde_json::Error> {
    match format {
        OutputFormat::Table => Ok(diff_table(diff)),
        OutputFormat::Tree => Ok(diff_tree(identifier, diff).to_string()),
        OutputFormat::Json => serde_json::to_string_pretty(diff),
    }
}

fn diff_table(diff: &TagDiff) -> String {
    let removed = diff.removed.iter().map(|key| TagChangeRow {
        action: "remove",
        key: key.clone(),
        value: String::new(),
    });
    let updated = diff.updated.iter().map(|(key, value)| TagChangeRow {
        action: "set",
        key: key.to_string(),
        value: value.to_string(),
    });

    Table::new(removed.chain(updated))
        .with(Style::sharp())
        .to_string()
}

fn diff_tree(identifier: &str, diff: &TagDiff) -> Tree<String> {
    let mut root = Tree::new(identifier.to_string());

    if !diff.removed.is_empty() {
        root.push(Tree::new("remove".to_string()).with_leaves(diff.removed.iter().cloned()));
    }
    if !diff.updated.is_empty() {
        root.push(
            Tree::new("set".to_string()).with_leaves(
                diff.updated
                    .iter()
                    .map(|(key, value)| format!("{} = {}", key, value)),
            ),
        );
    }

    root
}

pub fn render_pool(
    state: &IdentityPoolState,
    format: OutputFormat,
) -> Result<String, serde_json::Error> {
    match format {
        OutputFormat::Json => serde_json::to_string_pretty(state),
        OutputFormat::Table => Ok(Table::new(pool_attributes(state))
            .with(Style::sharp())
            .to_string()),
        OutputFormat::Tree => Ok(pool_tree(state).to_string()),
    }
}

fn pool_attributes(state: &IdentityPoolState) -> Vec<AttributeRow> {
    let config = &state.config;
    let join = |items: Vec<String>| items.join(", ");

    vec![
        AttributeRow {
            name: "id",
            value: state.id.clone(),
        },
        AttributeRow {
            name: "arn",
            value: state.arn.clone(),
        },
        AttributeRow {
            name: "identity_pool_name",
            value: config.identity_pool_name.clone(),
        },
        AttributeRow {
            name: "allow_unauthenticated_identities",
            value: config.allow_unauthenticated_identities.to_string(),
        },
        AttributeRow {
            name: "allow_classic_flow",
            value: config.allow_classic_flow.to_string(),
        },
        AttributeRow {
            name: "developer_provider_name",
            value: config.developer_provider_name.clone().unwrap_or_default(),
        },
        AttributeRow {
            name: "cognito_identity_providers",
            value: join(
                config
                    .cognito_identity_providers
                    .iter()
                    .filter_map(|p| p.provider_name.clone())
                    .collect(),
            ),
        },
        AttributeRow {
            name: "openid_connect_provider_arns",
            value: join(config.openid_connect_provider_arns.iter().cloned().collect()),
        },
        AttributeRow {
            name: "saml_provider_arns",
            value: join(config.saml_provider_arns.clone()),
        },
        AttributeRow {
            name: "supported_login_providers",
            value: join(
                config
                    .supported_login_providers
                    .iter()
                    .map(|(k, v)| format!("{}={}", k, v))
                    .collect(),
            ),
        },
        AttributeRow {
            name: "tags_all",
            value: join(
                state
                    .tags_all
                    .iter()
                    .map(|(k, v)| format!("{}={}", k, v))
                    .collect(),
            ),
        },
    ]
}

// Attributes as leaves under the pool id; tags get their own branch.
fn pool_tree(state: &IdentityPoolState) -> Tree<String> {
    let mut root = Tree::new(state.id.clone());

    for row in pool_attributes(state) {
        if row.name == "id" || row.name == "tags_all" {
            continue;
        }
        root.push(format!("{} = {}", row.name, row.value));
    }

    root.push(
        Tree::new("tags_all".to_string()).with_leaves(
            state
                .tags_all
                .iter()
                .map(|(key, value)| format!("{} = {}", key, value)),
        ),
    );

    root
}
