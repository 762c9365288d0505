use anyhow::{Context, Result};
use argmap::{OptionDef, Registry, ValueStore, check_required, parse, usage};
use tracing_subscriber::{EnvFilter, fmt};

fn main() -> Result<()> {
    init_tracing();

    let registry = build_registry().context("failed to register options")?;

    let exec = std::env::args()
        .next()
        .unwrap_or_else(|| "argmap-cli".to_string());
    let argv: Vec<String> = std::env::args().skip(1).collect();

    let store = match parse(&registry, &argv) {
        Ok(store) => store,
        Err(err) => {
            eprintln!("{err}");
            eprint!("{}", usage(&registry, &exec));
            std::process::exit(1);
        }
    };

    // Help and version win before required validation.
    if store.get_flag("help") {
        print!("{}", usage(&registry, &exec));
        return Ok(());
    }
    if store.get_flag("version") {
        println!("argmap-cli {}", env!("CARGO_PKG_VERSION"));
        return Ok(());
    }

    if let Err(err) = check_required(&registry, &store) {
        eprintln!("{err}");
        eprint!("{}", usage(&registry, &exec));
        std::process::exit(1);
    }

    report(&store);
    Ok(())
}

fn build_registry() -> Result<Registry, argmap::Error> {
    let mut registry = Registry::new();
    registry.register(OptionDef::flag("help").short("h").help("Show this help"))?;
    registry.register(OptionDef::flag("version").short("V").help("Show the version"))?;
    registry.register(OptionDef::flag("verbose").short("v").help("Verbose output"))?;
    registry.register(
        OptionDef::single("file")
            .short("f")
            .default_value("default.conf")
            .help("the configuration file"),
    )?;
    registry.register(OptionDef::multi("pid").short("p").help("process ids to watch"))?;
    registry.register(OptionDef::multi("").help("input files"))?;
    Ok(registry)
}

fn report(store: &ValueStore) {
    tracing::debug!("reporting resolved values");

    println!("file: {}", store.get("file"));
    println!("verbose: {}", store.get_flag("verbose"));
    if !store.get_all("pid").is_empty() {
        println!("pids: {}", store.get_all("pid").join(", "));
    }
    if !store.get_all("").is_empty() {
        println!("inputs: {}", store.get_all("").join(", "));
    }
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    fmt()
        .with_env_filter(filter)
        .with_target(false)
        .compact()
        .init();
}
