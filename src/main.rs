use anyhow::Result;
use clap::Parser;
use colored::Colorize;
use jstags::js::JsError;
use jstags::{extract_tags, header, write_tags, JsParser, TagCollector};
use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// Extensions treated as JavaScript when walking a directory.
const JS_EXTENSIONS: &[&str] = &["js", "jsx", "mjs", "cjs"];

#[derive(Parser)]
#[command(name = "jstags")]
#[command(about = "Generate a ctags-compatible tag index for JavaScript sources", long_about = None)]
#[command(version)]
struct Cli {
    /// JavaScript files or directories to index (directories are walked
    /// recursively for .js/.jsx/.mjs/.cjs files)
    #[arg(required = true)]
    paths: Vec<PathBuf>,

    /// Write the tag index to a file instead of stdout
    #[arg(short = 'f', long)]
    output: Option<PathBuf>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let files = collect_input_files(&cli.paths)?;

    let mut out: Box<dyn Write> = match &cli.output {
        Some(path) => Box::new(fs::File::create(path)?),
        None => Box::new(io::stdout().lock()),
    };

    // Header goes out once, before any file is processed.
    writeln!(out, "{}", header())?;

    let mut parser = JsParser::new()?;
    let mut collector = TagCollector::new();

    for file in &files {
        if let Err(e) = process_file(&mut parser, file, &mut collector) {
            // A broken file is reported and skipped; the rest of the
            // batch still contributes to the index.
            eprintln!("{} {}: {}", "skipping".yellow(), file.display(), e);
        }
    }

    write_tags(&mut out, &collector.into_sorted())?;

    Ok(())
}

/// Expand the command-line paths into a sorted list of JavaScript files.
/// Explicit file arguments are taken as-is; directories are walked.
fn collect_input_files(paths: &[PathBuf]) -> Result<Vec<PathBuf>> {
    let mut files = Vec::new();

    for path in paths {
        if path.is_dir() {
            for entry in WalkDir::new(path) {
                let entry = entry?;
                if entry.file_type().is_file() && has_js_extension(entry.path()) {
                    files.push(entry.path().to_path_buf());
                }
            }
        } else {
            files.push(path.clone());
        }
    }

    files.sort();
    Ok(files)
}

fn has_js_extension(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| JS_EXTENSIONS.contains(&ext))
}

/// Read, parse, and extract one file into the shared collector.
fn process_file(parser: &mut JsParser, file: &Path, collector: &mut TagCollector) -> Result<()> {
    let source = fs::read_to_string(file).map_err(|e| JsError::Io {
        path: file.to_path_buf(),
        source: e,
    })?;

    let parsed = parser.parse_with_source(&source)?;

    if parsed.has_errors() {
        // Report the first ERROR node; nothing from this file is kept.
        let (row, column) = parsed
            .error_nodes()
            .first()
            .map(|n| (n.start_point.row, n.start_point.column))
            .unwrap_or((0, 0));
        return Err(JsError::SyntaxError {
            line: row + 1,
            column: column + 1,
        }
        .into());
    }

    extract_tags(&parsed, file, collector);
    Ok(())
}
