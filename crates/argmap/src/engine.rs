use tracing::{debug, trace};

use crate::def::Arity;
use crate::error::Error;
use crate::registry::{OptionId, Registry};
use crate::store::ValueStore;

/// Scan state: between options, or holding the short-form option whose
/// value token(s) have not arrived yet.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Pending {
    Idle,
    AwaitingValue(OptionId),
}

/// Run the token scan over `argv` (program name already stripped) and
/// resolve it against `registry`.
///
/// A single left-to-right pass classifies each token as a long-form option
/// (`--name` / `--name=value`), a short-form option (`-x`), or a bare value.
/// Long-form tokens are self-contained; short-form options take their values
/// from the following bare tokens. After the scan, defaults are injected for
/// everything still unset.
///
/// Any violation aborts the whole parse. Note that required options are
/// *not* verified here — run [`check_required`] once the caller has dealt
/// with help-style flags.
pub fn parse(registry: &Registry, argv: &[String]) -> Result<ValueStore, Error> {
    debug!(tokens = argv.len(), "parsing argument vector");

    let mut store = ValueStore::default();
    let mut pending = Pending::Idle;

    for token in argv {
        if let Some(body) = long_form(token) {
            // Long-form tokens never await a following bare value, and they
            // stop any earlier option from accumulating.
            pending = Pending::Idle;

            let (name, value) = match body.split_once('=') {
                Some((name, value)) => (name, Some(value)),
                None => (body, None),
            };
            let Some((_, def)) = registry.by_long(name) else {
                return Err(Error::UnknownParameter(name.to_string()));
            };
            let value = match value {
                Some(value) => value,
                // `--name` without `=` is only meaningful as a flag-set.
                None if def.arity == Arity::Flag => "1",
                None => return Err(Error::MissingValue(def.long.clone())),
            };
            trace!(name, value, "long-form option");
            store.apply(def, value)?;
        } else if let Some(alias) = short_form(token) {
            let Some((id, def)) = registry.by_short(alias) else {
                return Err(Error::UnknownParameter(alias.to_string()));
            };
            trace!(alias, long = %def.long, "short-form option");
            if def.arity == Arity::Flag {
                pending = Pending::Idle;
                store.apply(def, "1")?;
            } else {
                // The value arrives as the next bare token(s).
                pending = Pending::AwaitingValue(id);
            }
        } else {
            match pending {
                Pending::AwaitingValue(id) => {
                    let def = registry.get(id);
                    trace!(long = %def.long, value = %token, "value for pending option");
                    store.apply(def, token)?;
                    // Multi options keep accumulating bare tokens until the
                    // next option token.
                    if def.arity != Arity::Multi {
                        pending = Pending::Idle;
                    }
                }
                Pending::Idle => {
                    let Some((_, def)) = registry.catch_all() else {
                        return Err(Error::UnexpectedToken(token.clone()));
                    };
                    trace!(value = %token, "positional argument");
                    store.apply(def, token)?;
                }
            }
        }
    }

    if let Pending::AwaitingValue(id) = pending {
        let def = registry.get(id);
        if def.arity != Arity::Multi {
            return Err(Error::MissingValue(def.long.clone()));
        }
    }

    // Defaults go through the same application rule, so a default can seed
    // a multi list as well.
    for def in registry.defs() {
        if let Some(default) = &def.default_value {
            if !store.contains(&def.long) {
                store.apply(def, default)?;
            }
        }
    }

    Ok(store)
}

/// Verify that every required option received a value. A separate pass by
/// design: callers typically honor `--help` between [`parse`] and this.
pub fn check_required(registry: &Registry, store: &ValueStore) -> Result<(), Error> {
    for def in registry.defs() {
        if def.required && !store.contains(&def.long) {
            return Err(Error::MissingRequired(def.long.clone()));
        }
    }
    Ok(())
}

/// `--name[=value]`: two leading dashes, at least two characters. Returns
/// the token with the leading dash run stripped.
fn long_form(token: &str) -> Option<&str> {
    if token.len() >= 2 && token.starts_with("--") {
        Some(token.trim_start_matches('-'))
    } else {
        None
    }
}

/// `-alias`: one leading dash, at least two characters. The alias is
/// everything after the dash run, so multi-character aliases work.
fn short_form(token: &str) -> Option<&str> {
    if token.len() >= 2 && token.starts_with('-') {
        Some(token.trim_start_matches('-'))
    } else {
        None
    }
}
