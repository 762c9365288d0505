use crate::def::OptionDef;
use crate::registry::Registry;

/// Render the usage table for `registry`: a token-grammar reminder, the
/// invocation line, then one column-aligned row per definition in
/// registration order. Returns the text; the caller decides where it goes.
pub fn usage(registry: &Registry, exec: &str) -> String {
    let mut out = String::new();
    out.push_str("Parameters:\n");
    out.push_str("    '-x value', '--xy=value',\n");
    out.push_str("    '-x 1st_arg 2nd_arg ...',\n");
    out.push_str("    '--xy=1st_arg --xy=2nd_arg'\n");
    out.push_str("Flags: '-x' or '--xy=(0|1)'.\n");

    out.push_str(&format!("Execute: {exec} (options)"));
    if registry.catch_all().is_some() {
        out.push_str(" [ARGS]");
    }
    out.push('\n');

    let rows: Vec<(String, String)> = registry
        .defs()
        .map(|def| (row_names(def), row_help(def)))
        .collect();
    let width = rows.iter().map(|(names, _)| names.len()).max().unwrap_or(0);
    for (names, help) in rows {
        out.push_str(&format!("  {names:width$}  {help}\n"));
    }

    out
}

fn row_names(def: &OptionDef) -> String {
    if def.long.is_empty() {
        return "[ARGS]".to_string();
    }
    match def.short_alias() {
        Some(short) => format!("-{short}, --{}", def.long),
        None => format!("    --{}", def.long),
    }
}

fn row_help(def: &OptionDef) -> String {
    let mut out = def.help.trim().to_string();
    if !out.is_empty() {
        out.push(' ');
    }
    out.push_str(if def.required { "(required)" } else { "(optional)" });
    if def.takes_value() {
        if let Some(default) = &def.default_value {
            out.push_str(&format!(", default: {default}"));
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rows_are_aligned_and_annotated() {
        let mut registry = Registry::new();
        registry
            .register(OptionDef::flag("help").short("h").help("Show this help"))
            .unwrap();
        registry
            .register(
                OptionDef::single("file")
                    .short("f")
                    .required()
                    .default_value("default.conf")
                    .help("the configuration file"),
            )
            .unwrap();
        registry
            .register(OptionDef::single("output").help("output path"))
            .unwrap();

        let text = usage(&registry, "demo");
        assert!(text.contains("Execute: demo (options)\n"));
        assert!(text.contains("-h, --help"));
        assert!(text.contains("Show this help (optional)"));
        assert!(text.contains("the configuration file (required), default: default.conf"));
        // Options without a short alias stay column-aligned.
        assert!(text.contains("      --output"));

        // The implicit "0" flag default is not advertised.
        assert!(!text.contains("default: 0"));
    }

    #[test]
    fn catch_all_is_shown_as_args() {
        let mut registry = Registry::new();
        registry
            .register(OptionDef::multi("").help("input files"))
            .unwrap();
        let text = usage(&registry, "demo");
        assert!(text.contains("Execute: demo (options) [ARGS]\n"));
        assert!(text.contains("[ARGS]"));
    }
}
