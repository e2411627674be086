mod args;
mod output;

pub(crate) use args::{CliArgs, parse_cli};
pub(crate) use output::print_candidates;
