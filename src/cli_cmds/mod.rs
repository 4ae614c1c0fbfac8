mod common;
mod config_cmds;
mod item_cmds;
mod output;
mod saved_cmds;
mod search_cmds;

pub use common::Context;
pub use config_cmds::cmd_config;
pub use item_cmds::cmd_item;
pub use saved_cmds::cmd_saved;
pub use search_cmds::{cmd_combos, cmd_consider, cmd_match, cmd_name, cmd_suggest};
