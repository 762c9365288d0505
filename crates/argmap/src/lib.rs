//! Declarative command-line option parsing and validation.
//!
//! Callers declare their options in a [`Registry`] — long form, optional
//! short alias, requiredness, arity, default, description — then run
//! [`parse`] over the raw token list. The result is a [`ValueStore`] that
//! answers [`get`](ValueStore::get) / [`get_flag`](ValueStore::get_flag) /
//! [`get_int`](ValueStore::get_int) / [`get_all`](ValueStore::get_all)
//! queries without ever failing; malformed input is instead rejected during
//! the scan with a typed [`Error`].
//!
//! The pieces compose the way a startup sequence wants them to:
//! - build the registry once ([`Registry::register`] or
//!   [`Registry::from_defs`] for JSON-defined tables);
//! - [`parse`] the argument vector, program name stripped;
//! - honor help-style flags, rendering [`usage`] if asked;
//! - [`check_required`] as an explicit final step.
//!
//! The library performs no I/O and never terminates the process; printing
//! messages and choosing exit codes is the binary's job.

mod def;
mod engine;
mod error;
mod registry;
mod store;
mod usage;

pub use def::{Arity, OptionDef};
pub use engine::{check_required, parse};
pub use error::Error;
pub use registry::{OptionId, Registry};
pub use store::ValueStore;
pub use usage::usage;
