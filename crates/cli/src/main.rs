use anyhow::{anyhow, Context, Result};
use clap::{Args, Parser, Subcommand};
use console::style;
use irimap_catalog::Catalog;
use irimap_resolver::{
    CommandLocator, DeclineHandler, ImportHandler, ImportResolver, LocatorConfig, OntologyIri,
    PackageResolver, PhysicalLocation, Resolution, ScriptedHandler,
};
use std::path::PathBuf;
use std::time::Duration;

use crate::prompt::ConsoleImportHandler;
use crate::record::CatalogRecorder;

mod prompt;
mod record;

#[derive(Parser)]
#[command(name = "irimap")]
#[command(about = "Resolve ontology IRIs to loadable locations", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Quiet mode: log only warnings/errors (stdout is reserved for results)
    #[arg(long, global = true)]
    quiet: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Resolve one ontology IRI to a physical location
    Resolve(ResolveArgs),

    /// List the entries of a resolution catalog
    Catalog(CatalogArgs),
}

#[derive(Args)]
struct ResolveArgs {
    /// The ontology IRI to resolve
    iri: String,

    /// Record manual resolutions into this catalog file
    #[arg(long)]
    catalog: Option<PathBuf>,

    /// Scripted resolution: answer with this location instead of prompting
    #[arg(long, conflicts_with = "use_iri")]
    pick: Option<PathBuf>,

    /// Scripted resolution: answer "load the IRI itself" instead of prompting
    #[arg(long)]
    use_iri: bool,

    /// Decline unresolvable imports instead of prompting
    #[arg(long)]
    non_interactive: bool,

    /// Package lookup command line, invoked as `<cmd> <package-name>`
    #[arg(long, default_value = "rospack find")]
    lookup_cmd: String,

    /// Upper bound on the package lookup, in seconds
    #[arg(long, default_value_t = 5)]
    lookup_timeout_secs: u64,

    /// Print the outcome as JSON
    #[arg(long)]
    json: bool,
}

#[derive(Args)]
struct CatalogArgs {
    /// The catalog file to list
    path: PathBuf,

    /// Print the entries as JSON
    #[arg(long)]
    json: bool,
}

fn main() -> Result<()> {
    let mut cli = Cli::parse();

    // Keep stdout clean for parsing when JSON output was requested.
    let json_output = match &cli.command {
        Commands::Resolve(args) => args.json,
        Commands::Catalog(args) => args.json,
    };
    if json_output {
        cli.quiet = true;
    }

    let mut builder =
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"));
    if cli.quiet {
        builder.filter_level(log::LevelFilter::Warn);
    } else if cli.verbose {
        builder.filter_level(log::LevelFilter::Debug);
    }
    builder.target(env_logger::Target::Stderr).init();

    match cli.command {
        Commands::Resolve(args) => run_resolve(args),
        Commands::Catalog(args) => run_catalog(args),
    }
}

fn run_resolve(args: ResolveArgs) -> Result<()> {
    let mut config = LocatorConfig::from_command_line(&args.lookup_cmd)
        .ok_or_else(|| anyhow!("--lookup-cmd must name a command"))?;
    config.timeout = Duration::from_secs(args.lookup_timeout_secs);

    let mut handler: Box<dyn ImportHandler> = if let Some(picked) = &args.pick {
        Box::new(ScriptedHandler::with_fallback(Resolution::Resolved(
            PhysicalLocation::from_path(picked),
        )))
    } else if args.use_iri {
        Box::new(ScriptedHandler::with_fallback(Resolution::UseIri))
    } else if args.non_interactive {
        Box::new(DeclineHandler)
    } else {
        Box::new(ConsoleImportHandler)
    };
    if let Some(catalog_path) = args.catalog {
        handler = Box::new(CatalogRecorder::new(handler, catalog_path));
    }

    let package = PackageResolver::new(Box::new(CommandLocator::new(config)));
    let mut resolver = ImportResolver::new(package, handler);

    let iri = OntologyIri::from(args.iri);
    let outcome = resolver.resolve(&iri);

    if args.json {
        let payload = serde_json::json!({
            "iri": iri.as_str(),
            "outcome": outcome_name(&outcome),
            "location": outcome.location_for(&iri).map(|l| l.as_str().to_string()),
        });
        println!("{}", serde_json::to_string_pretty(&payload)?);
    } else {
        match outcome.location_for(&iri) {
            Some(location) => println!("{location}"),
            None => eprintln!("{} {iri}", style("unresolved:").red().bold()),
        }
    }

    if matches!(outcome, Resolution::Unresolved) {
        std::process::exit(1);
    }
    Ok(())
}

fn run_catalog(args: CatalogArgs) -> Result<()> {
    let catalog = Catalog::load(&args.path)
        .with_context(|| format!("Failed to read catalog {}", args.path.display()))?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(catalog.entries())?);
        return Ok(());
    }

    if catalog.is_empty() {
        println!("{}", style("catalog is empty").dim());
        return Ok(());
    }
    for entry in catalog.entries() {
        println!(
            "{} {} {}",
            style(&entry.source).cyan(),
            style("->").dim(),
            entry.location
        );
    }
    Ok(())
}

fn outcome_name(outcome: &Resolution) -> &'static str {
    match outcome {
        Resolution::Resolved(_) => "resolved",
        Resolution::UseIri => "use-iri",
        Resolution::Unresolved => "unresolved",
    }
}
