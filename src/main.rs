use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use std::io::{self, Read, Write};
use std::path::{Path, PathBuf};
use std::str::FromStr;
use tracing::{info, warn};
use tracing_subscriber::{filter::LevelFilter, fmt};
use walkdir::WalkDir;

use conllu_graph::{analyze_conllu, conllu_to_graph, conllu_to_table, Config};

/// Extension of the files picked up when walking a directory
const CONLLU_EXTENSION: &str = "conllu";

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Format {
    /// displaCy-style arc graph as JSON
    Graph,
    /// The validated CoNLL-U table itself
    Conllu,
    /// Question words and verb-subject inversions per sentence, as JSON
    Analysis,
}

impl Format {
    fn extension(self) -> &'static str {
        match self {
            Format::Graph | Format::Analysis => "json",
            Format::Conllu => CONLLU_EXTENSION,
        }
    }
}

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// CoNLL-U file or directory of .conllu files; reads stdin when omitted
    input: Option<PathBuf>,

    /// Output directory for results (overrides OUTPUT_DIR)
    #[arg(short = 'd', long)]
    output_dir: Option<PathBuf>,

    /// What to emit
    #[arg(short = 'f', long, value_enum, default_value_t = Format::Graph)]
    format: Format,

    /// Keep comment lines in CoNLL-U output
    #[arg(short = 'c', long)]
    keep_comments: bool,

    /// Emit single-line JSON
    #[arg(long)]
    compact: bool,

    /// Log level (overrides LOG_LEVEL)
    #[arg(long)]
    log_level: Option<String>,
}

fn main() -> Result<()> {
    dotenv::dotenv().ok();
    let args = Args::parse();
    let config = Config::from_env()?;

    let level = args
        .log_level
        .as_deref()
        .unwrap_or(&config.processing.log_level);
    init_tracing(LevelFilter::from_str(level).unwrap_or(LevelFilter::INFO));

    let output_dir = args.output_dir.clone().or(config.output.output_dir.clone());
    let keep_comments = args.keep_comments || config.processing.keep_comments;
    let pretty = config.output.pretty && !args.compact;

    if let Some(dir) = &output_dir {
        std::fs::create_dir_all(dir)
            .with_context(|| format!("cannot create output directory {}", dir.display()))?;
    }

    let Some(input) = args.input.as_deref() else {
        let mut document = String::new();
        io::stdin().read_to_string(&mut document)?;
        let rendered = render(&document, args.format, keep_comments, pretty)?;
        return emit(&rendered, output_dir.as_deref(), "stdin", args.format);
    };

    let files = collect_inputs(input)?;
    if files.is_empty() {
        warn!(path = %input.display(), "no CoNLL-U files found");
        return Ok(());
    }

    for file in &files {
        let document = std::fs::read_to_string(file)
            .with_context(|| format!("cannot read {}", file.display()))?;
        let rendered = render(&document, args.format, keep_comments, pretty)
            .with_context(|| format!("cannot process {}", file.display()))?;

        let stem = file
            .file_stem()
            .and_then(|s| s.to_str())
            .unwrap_or("document");
        emit(&rendered, output_dir.as_deref(), stem, args.format)?;
    }

    info!(files = files.len(), "processing complete");
    Ok(())
}

fn init_tracing(level: LevelFilter) {
    let subscriber = fmt()
        .with_max_level(level)
        .with_target(false)
        .with_writer(io::stderr)
        .finish();

    if tracing::subscriber::set_global_default(subscriber).is_err() {
        warn!("Tracing subscriber already set; skipping re-initialization.");
    }
}

/// A single file, or every .conllu file below a directory in path order
fn collect_inputs(input: &Path) -> Result<Vec<PathBuf>> {
    if input.is_file() {
        return Ok(vec![input.to_path_buf()]);
    }
    if !input.is_dir() {
        anyhow::bail!("input path does not exist: {}", input.display());
    }

    let mut files: Vec<PathBuf> = WalkDir::new(input)
        .min_depth(1)
        .into_iter()
        .filter_map(|e| e.ok())
        .filter(|entry| entry.file_type().is_file())
        .map(|entry| entry.into_path())
        .filter(|path| path.extension().and_then(|e| e.to_str()) == Some(CONLLU_EXTENSION))
        .collect();
    files.sort();
    Ok(files)
}

fn render(document: &str, format: Format, keep_comments: bool, pretty: bool) -> Result<String> {
    match format {
        Format::Graph => Ok(conllu_to_graph(document)?.to_json(pretty)?),
        Format::Conllu => Ok(conllu_to_table(document, keep_comments)?),
        Format::Analysis => {
            let analyses = analyze_conllu(document)?;
            if pretty {
                Ok(serde_json::to_string_pretty(&analyses)?)
            } else {
                Ok(serde_json::to_string(&analyses)?)
            }
        }
    }
}

fn emit(rendered: &str, output_dir: Option<&Path>, stem: &str, format: Format) -> Result<()> {
    match output_dir {
        Some(dir) => {
            let path = dir.join(format!("{}.{}", stem, format.extension()));
            std::fs::write(&path, rendered)
                .with_context(|| format!("cannot write {}", path.display()))?;
            info!(path = %path.display(), "wrote result");
        }
        None => {
            let mut stdout = io::stdout().lock();
            stdout.write_all(rendered.as_bytes())?;
            if !rendered.ends_with('\n') {
                stdout.write_all(b"\n")?;
            }
        }
    }
    Ok(())
}
