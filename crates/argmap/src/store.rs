use std::collections::HashMap;
use std::ops::Index;

use crate::def::{Arity, OptionDef};
use crate::error::Error;

/// The resolved parse result: a last-value map plus ordered multi-value
/// lists.
///
/// A store is built token-by-token during [`parse`] and read-only
/// afterwards. Lookups never fail; an option that was never set reads as the
/// empty string, `0`, or `false` depending on the accessor.
///
/// [`parse`]: crate::parse
#[derive(Debug, Clone, Default)]
pub struct ValueStore {
    singles: HashMap<String, String>,
    multis: HashMap<String, Vec<String>>,
}

impl ValueStore {
    /// Latest value recorded for `name`, or `""` when nothing was stored.
    pub fn get(&self, name: &str) -> &str {
        self.singles.get(name).map(String::as_str).unwrap_or("")
    }

    /// `false` iff the value converts to exactly `0` under [`get_int`]'s
    /// rules.
    ///
    /// [`get_int`]: Self::get_int
    pub fn get_flag(&self, name: &str) -> bool {
        self.get_int(name) != 0
    }

    /// The value of `name` under C `atoi` rules: optional leading
    /// whitespace, optional sign, leading decimal digits. Non-numeric or
    /// absent values read as `0`, never an error.
    pub fn get_int(&self, name: &str) -> i64 {
        leading_int(self.get(name))
    }

    /// All values recorded for a multi option, in encounter order. Empty
    /// when the option was never supplied and has no default.
    pub fn get_all(&self, name: &str) -> &[String] {
        self.multis.get(name).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Whether any value has been stored under `name`.
    pub fn contains(&self, name: &str) -> bool {
        self.singles.contains_key(name)
    }

    /// The shared value-application rule: every path into the store (long
    /// token, short token's bare value, catch-all, default injection) goes
    /// through here.
    pub(crate) fn apply(&mut self, def: &OptionDef, value: &str) -> Result<(), Error> {
        if value.is_empty() {
            return Err(Error::EmptyValue(def.long.clone()));
        }
        match def.arity {
            Arity::Flag => {
                if value != "0" && value != "1" {
                    return Err(Error::MalformedFlagValue(def.long.clone()));
                }
                self.singles.insert(def.long.clone(), value.to_string());
            }
            Arity::Single => {
                if self.singles.contains_key(&def.long) {
                    return Err(Error::DuplicateSingleValue(def.long.clone()));
                }
                self.singles.insert(def.long.clone(), value.to_string());
            }
            Arity::Multi => {
                self.multis
                    .entry(def.long.clone())
                    .or_default()
                    .push(value.to_string());
                // The single-value slot tracks the most recent entry so
                // `get` works uniformly across arities.
                self.singles.insert(def.long.clone(), value.to_string());
            }
        }
        Ok(())
    }
}

impl Index<&str> for ValueStore {
    type Output = str;

    fn index(&self, name: &str) -> &str {
        self.get(name)
    }
}

/// `atoi`-style conversion: consume leading digits, read everything else as
/// zero. Out-of-range magnitudes saturate.
fn leading_int(s: &str) -> i64 {
    let s = s.trim_start();
    let (negative, digits) = match s.as_bytes().first() {
        Some(b'-') => (true, &s[1..]),
        Some(b'+') => (false, &s[1..]),
        _ => (false, s),
    };
    let mut value: i64 = 0;
    for b in digits.bytes() {
        if !b.is_ascii_digit() {
            break;
        }
        value = value.saturating_mul(10).saturating_add(i64::from(b - b'0'));
    }
    if negative { -value } else { value }
}
