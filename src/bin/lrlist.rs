//! Lists the images of a Lightroom collection, in order of capture time.
//!
//! Usage:
//!   lrlist [-d DATABASE] COLLECTION     print one absolute path per line
//!   lrlist [-d DATABASE]                print available collections to stderr, exit 1
//!   lrlist [-d DATABASE] --list         print available collections to stdout
//!
//! DATABASE is a catalog file or a directory holding exactly one `*.lrcat`.
//! It defaults to `$LRLIST_DB`, then the working directory.

use anyhow::{Context, Result, bail};
use clap::{ArgAction, Parser};
use env_logger::{Builder, Target};
use lrlist::{Catalog, Resolution, database_location, locate_catalog, log_level};
use std::io::{self, BufWriter, ErrorKind, Write};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "lrlist", version)]
#[command(about = "List the images in a Lightroom collection, in order of capture time")]
struct Cli {
    /// Path to Lightroom folder or database (defaults to $LRLIST_DB, then ".").
    #[arg(short = 'd', long = "db", value_name = "DATABASE")]
    database: Option<PathBuf>,
    /// Print all collections to stdout and exit successfully.
    #[arg(long, conflicts_with = "collection")]
    list: bool,
    /// Print collections as JSON lines instead of the aligned listing.
    #[arg(long)]
    json: bool,
    /// Fail unless the reference matches exactly one collection.
    #[arg(long)]
    strict: bool,
    /// Increase log verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,
    /// Collection name or numeric id.
    collection: Option<String>,
}

fn main() {
    let cli = Cli::parse();
    init_logger(cli.verbose);
    match run(cli) {
        Ok(code) => std::process::exit(code),
        Err(err) => {
            eprintln!("{err:#}");
            std::process::exit(1);
        }
    }
}

fn init_logger(verbose: u8) {
    if verbose == 0 && std::env::var_os("RUST_LOG").is_some() {
        Builder::from_default_env().target(Target::Stderr).init();
        return;
    }
    Builder::new()
        .target(Target::Stderr)
        .filter_level(log_level(verbose))
        .format_timestamp(None)
        .init();
}

fn run(cli: Cli) -> Result<i32> {
    let location = database_location(cli.database.as_deref());
    let path = locate_catalog(&location)?;
    let catalog = Catalog::open(&path)
        .with_context(|| format!("opening Lightroom database {}", path.display()))?;

    if cli.list {
        let stdout = io::stdout();
        let mut out = BufWriter::new(stdout.lock());
        write_collections(&catalog, &mut out, cli.json)?;
        out.flush()?;
        return Ok(0);
    }

    let Some(reference) = cli.collection else {
        let mut stderr = io::stderr().lock();
        if !cli.json {
            writeln!(stderr, "no collection specified; available collections:")?;
        }
        write_collections(&catalog, &mut stderr, cli.json)?;
        return Ok(1);
    };

    if cli.strict {
        ensure_unique(&catalog, &reference)?;
    } else {
        // Logs a warning for zero or several matches; output is unaffected.
        catalog.resolution(&reference)?;
    }

    write_paths(&catalog, &reference)?;
    Ok(0)
}

fn ensure_unique(catalog: &Catalog, reference: &str) -> Result<()> {
    match catalog.resolution(reference)? {
        Resolution::Unique(_) => Ok(()),
        Resolution::NotFound => bail!("no collection matches '{reference}'"),
        Resolution::Ambiguous(found) => {
            let ids = found
                .iter()
                .map(|collection| format!("{} ({})", collection.id, collection.name))
                .collect::<Vec<_>>()
                .join(", ");
            bail!("collection reference '{reference}' is ambiguous: {ids}")
        }
    }
}

fn write_collections(catalog: &Catalog, out: &mut impl Write, json: bool) -> Result<()> {
    let mut query = catalog.list_all().context("listing collections")?;
    for collection in query.run()? {
        let collection = collection?;
        if json {
            serde_json::to_writer(&mut *out, &collection)?;
            writeln!(out)?;
        } else {
            writeln!(out, "{collection}")?;
        }
    }
    Ok(())
}

fn write_paths(catalog: &Catalog, reference: &str) -> Result<()> {
    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());
    let mut query = catalog
        .enumerate_paths(reference)
        .context("listing collection images")?;
    for path in query.run()? {
        let path = path?;
        if let Err(err) = writeln!(out, "{path}") {
            return quiet_broken_pipe(err);
        }
    }
    out.flush().or_else(quiet_broken_pipe)
}

// Piping into `head` closes stdout early; that is not a failure.
fn quiet_broken_pipe(err: io::Error) -> Result<()> {
    if err.kind() == ErrorKind::BrokenPipe {
        return Ok(());
    }
    Err(err).context("writing image paths")
}
