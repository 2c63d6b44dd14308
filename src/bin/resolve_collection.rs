//! Resolve reference collection names from the command line.
//!
//! Names come from positional args, a names file, `REFCOLLECTION_NAMES`, or
//! stdin, in that order of preference. Every name produces one output record;
//! the process exits non-zero when any of them was rejected.

use anyhow::{Context, Result, bail};
use refcollection::{
    CollectionKind, OutputFormat, Summary, parse_name_stream, resolve_all, split_list,
};
use std::env;
use std::fs;
use std::io::{self, Read, Write};
use std::path::PathBuf;

fn main() {
    match run() {
        Ok(true) => {}
        Ok(false) => std::process::exit(1),
        Err(err) => {
            eprintln!("{err:#}");
            std::process::exit(1);
        }
    }
}

/// Returns whether every name resolved.
fn run() -> Result<bool> {
    let args = CliArgs::parse(env::args().skip(1))?;
    let format = match args.format {
        Some(format) => format,
        None => match env_non_empty("REFCOLLECTION_FORMAT") {
            Some(raw) => OutputFormat::parse(&raw).context("Invalid REFCOLLECTION_FORMAT")?,
            None => OutputFormat::default(),
        },
    };

    let stdout = io::stdout();
    let mut out = stdout.lock();

    if args.list {
        for kind in CollectionKind::ALL {
            writeln!(out, "{}\t{}", kind, kind.route_segment())?;
        }
        return Ok(true);
    }

    let names = collect_names(&args)?;
    let resolutions = resolve_all(&names);
    for resolution in &resolutions {
        writeln!(out, "{}", resolution.render(format)?)?;
        if let Some(error) = &resolution.error {
            eprintln!("resolve-collection: {error}");
        }
    }

    Ok(Summary::from_resolutions(&resolutions).all_resolved())
}

fn collect_names(args: &CliArgs) -> Result<Vec<String>> {
    if !args.names.is_empty() {
        return Ok(args.names.clone());
    }
    if let Some(path) = &args.names_file {
        let contents = fs::read_to_string(path)
            .with_context(|| format!("Unable to read names file {}", path.display()))?;
        return parse_name_stream(&contents)
            .with_context(|| format!("Unable to parse names file {}", path.display()));
    }
    if let Some(raw) = env_non_empty("REFCOLLECTION_NAMES") {
        let names = split_list(&raw);
        if names.is_empty() {
            bail!("REFCOLLECTION_NAMES did not contain any names");
        }
        return Ok(names);
    }

    let mut input = String::new();
    io::stdin()
        .read_to_string(&mut input)
        .context("Unable to read names from stdin")?;
    parse_name_stream(&input)
}

#[derive(Debug, Default, PartialEq)]
struct CliArgs {
    format: Option<OutputFormat>,
    names_file: Option<PathBuf>,
    list: bool,
    names: Vec<String>,
}

impl CliArgs {
    fn parse<I>(args: I) -> Result<Self>
    where
        I: IntoIterator<Item = String>,
    {
        let mut parsed = CliArgs::default();
        let mut args = args.into_iter();
        while let Some(arg) = args.next() {
            match arg.as_str() {
                "--format" => {
                    let value = args.next().context("--format requires a value")?;
                    if parsed.format.is_some() {
                        bail!("--format provided multiple times");
                    }
                    parsed.format = Some(OutputFormat::parse(&value)?);
                }
                "--names-file" => {
                    let value = args.next().context("--names-file requires a path")?;
                    if parsed.names_file.is_some() {
                        bail!("--names-file provided multiple times");
                    }
                    parsed.names_file = Some(PathBuf::from(value));
                }
                "--list" => parsed.list = true,
                "--help" | "-h" => usage(0),
                // Everything after `--` is a name, even if it looks like a flag.
                "--" => {
                    parsed.names.extend(args.by_ref());
                }
                other if other.starts_with("--") => {
                    eprintln!("Unknown argument: {other}");
                    usage(1);
                }
                _ => parsed.names.push(arg),
            }
        }

        if parsed.names_file.is_some() && !parsed.names.is_empty() {
            bail!("--names-file cannot be combined with positional names");
        }
        Ok(parsed)
    }
}

fn env_non_empty(name: &str) -> Option<String> {
    match env::var(name) {
        Ok(value) if !value.is_empty() => Some(value),
        _ => None,
    }
}

fn usage(code: i32) -> ! {
    eprintln!(
        "Usage: resolve-collection [--format json|text] [--names-file PATH] [--list] [NAME...]\n\nResolves each NAME to SCHEMA, MAPPING_TABLE or DATASET (case-insensitive).\nWithout names, reads --names-file, then REFCOLLECTION_NAMES, then stdin\n(JSON array, JSON string, or one name per line).\n\nOptions:\n  --format FORMAT     json (default, one object per line) or text.\n  --names-file PATH   Read names from PATH instead of stdin.\n  --list              Print every kind with its route segment and exit.\n\nEnvironment:\n  REFCOLLECTION_FORMAT  Default output format.\n  REFCOLLECTION_NAMES   Comma/space separated names."
    );
    std::process::exit(code);
}
