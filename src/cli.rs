mod args;

pub use args::{ApplyArgs, Cli, Command, PlanArgs, PoolCommand, TagsCommand};
