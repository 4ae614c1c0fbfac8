mod args;
mod runner;

pub(crate) use args::{Cli, Commands, ConfigAction, ItemAction, OutputArgs, SavedAction};
pub(crate) use runner::run;
