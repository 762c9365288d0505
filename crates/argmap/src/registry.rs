use indexmap::IndexMap;

use crate::def::{Arity, OptionDef};
use crate::error::Error;

/// Identifier of a registered option: its index in the registry's arena.
pub type OptionId = usize;

/// The set of declared options.
///
/// Definitions live in a single arena in registration order; two indexes map
/// long forms and short aliases back to arena slots, so a definition is
/// stored exactly once no matter how many names reach it. A registry only
/// grows — build it up front, then hand it to [`parse`] read-only.
///
/// [`parse`]: crate::parse
#[derive(Debug, Clone, Default)]
pub struct Registry {
    defs: Vec<OptionDef>,
    by_long: IndexMap<String, OptionId>,
    by_short: IndexMap<String, OptionId>,
}

impl Registry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add one definition, rejecting name collisions and anonymous flags.
    pub fn register(&mut self, def: OptionDef) -> Result<(), Error> {
        if def.long.is_empty() && def.arity == Arity::Flag {
            return Err(Error::EmptyLongForm);
        }
        if self.by_long.contains_key(&def.long) {
            return Err(Error::DuplicateOption(def.long));
        }
        if let Some(short) = def.short_alias() {
            if self.by_short.contains_key(short) {
                return Err(Error::DuplicateOption(def.long.clone()));
            }
        }

        let mut def = def;
        if def.arity == Arity::Flag && !def.required && def.default_value.is_none() {
            // Optional flags read as false until set.
            def.default_value = Some("0".to_string());
        }

        let id = self.defs.len();
        self.by_long.insert(def.long.clone(), id);
        if let Some(short) = def.short_alias() {
            self.by_short.insert(short.to_string(), id);
        }
        self.defs.push(def);
        Ok(())
    }

    /// Build a registry from a definition table, e.g. one deserialized from
    /// JSON. Fails on the first invariant violation.
    pub fn from_defs<I>(defs: I) -> Result<Self, Error>
    where
        I: IntoIterator<Item = OptionDef>,
    {
        let mut registry = Self::new();
        for def in defs {
            registry.register(def)?;
        }
        Ok(registry)
    }

    pub fn by_long(&self, long: &str) -> Option<(OptionId, &OptionDef)> {
        self.by_long.get(long).map(|&id| (id, &self.defs[id]))
    }

    pub fn by_short(&self, short: &str) -> Option<(OptionId, &OptionDef)> {
        self.by_short.get(short).map(|&id| (id, &self.defs[id]))
    }

    pub fn get(&self, id: OptionId) -> &OptionDef {
        &self.defs[id]
    }

    /// The bare-positional catch-all, when one was registered.
    pub fn catch_all(&self) -> Option<(OptionId, &OptionDef)> {
        self.by_long("")
    }

    /// Definitions in registration order.
    pub fn defs(&self) -> impl Iterator<Item = &OptionDef> {
        self.defs.iter()
    }

    pub fn len(&self) -> usize {
        self.defs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.defs.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn duplicate_long_form_is_rejected() {
        let mut registry = Registry::new();
        registry.register(OptionDef::single("file")).unwrap();
        let err = registry.register(OptionDef::flag("file")).unwrap_err();
        assert_eq!(err, Error::DuplicateOption("file".to_string()));
    }

    #[test]
    fn duplicate_short_alias_is_rejected() {
        let mut registry = Registry::new();
        registry.register(OptionDef::single("file").short("f")).unwrap();
        let err = registry
            .register(OptionDef::flag("force").short("f"))
            .unwrap_err();
        assert_eq!(err, Error::DuplicateOption("force".to_string()));
    }

    #[test]
    fn anonymous_flag_is_rejected() {
        let mut registry = Registry::new();
        let err = registry.register(OptionDef::flag("")).unwrap_err();
        assert_eq!(err, Error::EmptyLongForm);

        // Value-taking definitions may use the empty long form.
        registry.register(OptionDef::multi("")).unwrap();
        assert!(registry.catch_all().is_some());
    }

    #[test]
    fn optional_flags_get_an_implicit_false_default() {
        let mut registry = Registry::new();
        registry.register(OptionDef::flag("verbose")).unwrap();
        registry.register(OptionDef::flag("strict").required()).unwrap();
        registry
            .register(OptionDef::flag("color").default_value("1"))
            .unwrap();

        let (_, verbose) = registry.by_long("verbose").unwrap();
        assert_eq!(verbose.default_value.as_deref(), Some("0"));
        // Required flags have to be supplied, so no implicit default.
        let (_, strict) = registry.by_long("strict").unwrap();
        assert_eq!(strict.default_value, None);
        // An explicit default is left alone.
        let (_, color) = registry.by_long("color").unwrap();
        assert_eq!(color.default_value.as_deref(), Some("1"));
    }

    #[test]
    fn two_options_without_short_aliases_do_not_collide() {
        let mut registry = Registry::new();
        registry.register(OptionDef::single("input").short("")).unwrap();
        registry.register(OptionDef::single("output").short("")).unwrap();
        assert_eq!(registry.len(), 2);
        assert!(registry.by_short("").is_none());
    }

    #[test]
    fn lookups_reach_the_same_definition() {
        let mut registry = Registry::new();
        registry
            .register(OptionDef::single("file").short("f"))
            .unwrap();
        let (long_id, _) = registry.by_long("file").unwrap();
        let (short_id, _) = registry.by_short("f").unwrap();
        assert_eq!(long_id, short_id);
    }
}
