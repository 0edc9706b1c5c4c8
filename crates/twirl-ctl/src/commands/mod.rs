//! Command handlers for the twirl-ctl CLI.
//!
//! Each module handles one command, delegating to `twirl-build` for the
//! actual work.

pub(crate) mod generate;

pub(crate) use generate::handle_generate_command;
