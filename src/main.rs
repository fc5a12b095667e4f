use anyhow::{Context, Result};
use clap::Parser;
use schema_edit::{clean, Path};
use serde_json::Value;
use std::fs::File;
use std::io::stdin;
use std::io::BufReader;
use std::io::Read;

/// Edits a JSON document by dotted key path.
#[derive(Parser)]
#[command(name = "schema-edit", version, about)]
struct Cli {
    /// Where to read the document from. Dash (hyphen) indicates stdin.
    #[arg(default_value = "-")]
    input: String,

    /// Set the value at a path, given as PATH=VALUE. The value is parsed
    /// as JSON, or taken as a plain string when it is not valid JSON.
    /// This flag can be provided multiple times; assignments apply in
    /// order.
    #[arg(long = "set", value_name = "PATH=VALUE")]
    set: Vec<String>,

    /// Remove the value at a path. Removals apply after all assignments.
    /// This flag can be provided multiple times.
    #[arg(long = "remove", value_name = "PATH")]
    remove: Vec<String>,

    /// Prune null and empty entries from mappings before printing.
    #[arg(long)]
    clean: bool,

    /// Print only the fragment at this path instead of the whole
    /// document. A missing fragment prints null.
    #[arg(long = "get", value_name = "PATH")]
    get: Option<String>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let reader = BufReader::new(match cli.input.as_str() {
        "-" => Box::new(stdin()) as Box<dyn Read>,
        file => Box::new(
            File::open(file).with_context(|| format!("failed to open {}", file))?,
        ) as Box<dyn Read>,
    });

    let mut document: Value =
        serde_json::from_reader(reader).context("input is not valid JSON")?;

    for assignment in &cli.set {
        let (path, value) = parse_assignment(assignment)?;
        document = path.set(&document, value)?;
    }

    for raw in &cli.remove {
        document = Path::from(raw.as_str())
            .remove(&document)
            .unwrap_or(Value::Null);
    }

    if cli.clean {
        document = clean(&document);
    }

    let output = match &cli.get {
        Some(raw) => Path::from(raw.as_str())
            .get(&document)
            .cloned()
            .unwrap_or(Value::Null),
        None => document,
    };

    println!("{}", serde_json::to_string_pretty(&output)?);

    Ok(())
}

fn parse_assignment(raw: &str) -> Result<(Path, Value)> {
    let (path, value) = raw
        .split_once('=')
        .with_context(|| format!("assignment `{}` is missing `=`", raw))?;

    let value = serde_json::from_str(value).unwrap_or_else(|_| Value::String(value.to_string()));

    Ok((Path::from(path), value))
}
