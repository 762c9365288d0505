use serde::{Deserialize, Serialize};

/// How many values an option consumes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Arity {
    /// Boolean flag; consumes no argument and resolves to `"0"` or `"1"`.
    #[default]
    Flag,
    /// Exactly one value, ever.
    Single,
    /// Zero or more values, accumulated in encounter order.
    Multi,
}

/// One declarable parameter.
///
/// The field layout doubles as a wire format: option tables can be embedded
/// or loaded as kebab-case JSON and fed to [`Registry::from_defs`].
///
/// [`Registry::from_defs`]: crate::Registry::from_defs
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct OptionDef {
    /// Canonical long form (e.g. `file` for `--file`). The empty string
    /// declares the bare-positional catch-all.
    pub long: String,
    /// Short alias (e.g. `f` for `-f`).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub short: Option<String>,
    #[serde(default)]
    pub required: bool,
    #[serde(default)]
    pub arity: Arity,
    /// Applied after the scan when no value was stored. Optional flags with
    /// no explicit default are given `"0"` at registration.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_value: Option<String>,
    /// Human-readable description, shown in the usage table only.
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub help: String,
}

impl OptionDef {
    /// A boolean flag (`Arity::Flag`).
    pub fn flag(long: impl Into<String>) -> Self {
        Self {
            long: long.into(),
            arity: Arity::Flag,
            ..Self::default()
        }
    }

    /// An option taking exactly one value (`Arity::Single`).
    pub fn single(long: impl Into<String>) -> Self {
        Self {
            long: long.into(),
            arity: Arity::Single,
            ..Self::default()
        }
    }

    /// An option accumulating any number of values (`Arity::Multi`).
    pub fn multi(long: impl Into<String>) -> Self {
        Self {
            long: long.into(),
            arity: Arity::Multi,
            ..Self::default()
        }
    }

    pub fn short(mut self, short: impl Into<String>) -> Self {
        self.short = Some(short.into());
        self
    }

    pub fn required(mut self) -> Self {
        self.required = true;
        self
    }

    pub fn default_value(mut self, value: impl Into<String>) -> Self {
        self.default_value = Some(value.into());
        self
    }

    pub fn help(mut self, help: impl Into<String>) -> Self {
        self.help = help.into();
        self
    }

    /// Whether the option consumes an argument.
    pub fn takes_value(&self) -> bool {
        self.arity != Arity::Flag
    }

    /// Short alias, with an empty string treated the same as no alias.
    pub(crate) fn short_alias(&self) -> Option<&str> {
        self.short.as_deref().filter(|s| !s.is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builders_fill_the_expected_fields() {
        let def = OptionDef::single("file")
            .short("f")
            .required()
            .default_value("default.conf")
            .help("the configuration file");
        assert_eq!(def.long, "file");
        assert_eq!(def.short.as_deref(), Some("f"));
        assert!(def.required);
        assert_eq!(def.arity, Arity::Single);
        assert_eq!(def.default_value.as_deref(), Some("default.conf"));
        assert!(def.takes_value());
    }

    #[test]
    fn empty_short_alias_counts_as_absent() {
        let def = OptionDef::flag("verbose").short("");
        assert_eq!(def.short_alias(), None);
    }
}
