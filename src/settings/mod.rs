//! Configuration loading and resolution.
//!
//! `load` layers built-in defaults, config files, `CBOY_MENU__*` environment
//! variables and CLI flags, and returns a validated [`ResolvedConfig`].

mod loader;
mod raw;
mod resolved;
mod sources;

pub(crate) use loader::load;
pub(crate) use resolved::ResolvedConfig;
