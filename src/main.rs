//! bindery - manuscript to book formatter

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;

use bindery::{ConversionRequest, Format, ManuscriptKind, Metadata, Options, TrimSize, convert};

#[derive(Parser)]
#[command(name = "bindery")]
#[command(version, about = "Format a manuscript into DOCX, PDF, and EPUB", long_about = None)]
#[command(after_help = "EXAMPLES:
    bindery draft.txt --title 'My Book' --author 'Me'
    bindery draft.docx --title 'My Book' --author 'Me' --formats epub,pdf --toc")]
struct Cli {
    /// Manuscript file (.txt or .docx)
    #[arg(value_name = "INPUT")]
    input: PathBuf,

    /// Book title
    #[arg(long)]
    title: String,

    /// Author name
    #[arg(long)]
    author: String,

    /// Optional subtitle
    #[arg(long)]
    subtitle: Option<String>,

    /// Trim size (6x9, 5.5x8.5, 8.5x11)
    #[arg(long, default_value = "6x9")]
    trim_size: String,

    /// Comma-separated output formats (docx, pdf, epub)
    #[arg(long, value_delimiter = ',', default_value = "docx,pdf,epub")]
    formats: Vec<String>,

    /// Include a table of contents
    #[arg(long)]
    toc: bool,

    /// Include front matter (title page)
    #[arg(long)]
    front_matter: bool,

    /// Collapse doubled blank lines before segmenting
    #[arg(long)]
    normalize: bool,

    /// Output directory
    #[arg(short, long, default_value = ".")]
    output: PathBuf,
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();
    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli) -> Result<(), String> {
    let trim_size = TrimSize::from_label(&cli.trim_size)
        .ok_or_else(|| format!("unknown trim size: {}", cli.trim_size))?;

    let mut metadata =
        Metadata::new(cli.title.as_str(), cli.author.as_str()).with_trim_size(trim_size);
    if let Some(ref subtitle) = cli.subtitle {
        metadata = metadata.with_subtitle(subtitle.as_str());
    }

    let formats = cli
        .formats
        .iter()
        .map(|f| Format::from_extension(f).ok_or_else(|| format!("unknown format: {f}")))
        .collect::<Result<Vec<_>, String>>()?;

    let manuscript = std::fs::read(&cli.input).map_err(|e| e.to_string())?;
    let kind = ManuscriptKind::from_file_name(&cli.input.to_string_lossy());

    let request = ConversionRequest {
        metadata,
        options: Options {
            include_toc: cli.toc,
            include_front_matter: cli.front_matter,
            normalize: cli.normalize,
        },
        manuscript,
        kind,
        formats,
    };

    let mut failed = false;
    for (format, outcome) in convert(&request).map_err(|e| e.to_string())? {
        match outcome {
            Ok(artifact) => {
                let path = cli.output.join(&artifact.name);
                std::fs::write(&path, &artifact.data).map_err(|e| e.to_string())?;
                println!("wrote {}", path.display());
            }
            Err(e) => {
                eprintln!("error rendering {format:?}: {e}");
                failed = true;
            }
        }
    }

    if failed {
        Err("one or more formats failed to render".to_string())
    } else {
        Ok(())
    }
}
