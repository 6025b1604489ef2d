//! steambb CLI - Markdown to Steam BBCode converter.

use clap::{Parser, Subcommand};
use std::fs;
use std::io::{self, Read, Write};
use std::path::{Path, PathBuf};
use steambb::{Node, ParseError, ParseOptions, bbcode, markdown};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "steambb")]
#[command(author, version, about = "Convert Markdown to Steam BBCode", long_about = None)]
struct Cli {
    /// Log at info level (otherwise RUST_LOG, default warn)
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Convert a document to Steam BBCode
    Convert {
        /// Input file (use - for stdin)
        #[arg(default_value = "-")]
        input: PathBuf,

        /// Output file (use - for stdout, or omit to use stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Input format (auto-detected from extension, markdown otherwise)
        #[arg(short, long)]
        from: Option<Format>,

        /// Disable the GitHub extensions (tables, strikethrough, task lists, footnotes)
        #[arg(long)]
        commonmark: bool,
    },

    /// Print the parsed markdown tree as mdast JSON
    Tree {
        /// Input file (use - for stdin)
        #[arg(default_value = "-")]
        input: PathBuf,

        /// Disable the GitHub extensions
        #[arg(long)]
        commonmark: bool,
    },
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, clap::ValueEnum)]
enum Format {
    Markdown,
    MdastJson,
}

impl Format {
    fn from_extension(ext: &str) -> Option<Self> {
        match ext.to_lowercase().as_str() {
            "md" | "markdown" => Some(Format::Markdown),
            "json" => Some(Format::MdastJson),
            _ => None,
        }
    }

    fn detect(input: &Path) -> Self {
        if input.as_os_str() == "-" {
            return Format::Markdown;
        }
        input
            .extension()
            .and_then(|e| e.to_str())
            .and_then(Format::from_extension)
            .unwrap_or(Format::Markdown)
    }
}

#[derive(Debug, thiserror::Error)]
enum CliError {
    #[error(transparent)]
    Parse(#[from] ParseError),
    #[error("invalid mdast JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error("io error: {0}")]
    Io(#[from] io::Error),
}

fn main() {
    let cli = Cli::parse();

    let filter = if cli.verbose {
        EnvFilter::new("info")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();

    if let Err(e) = run(cli.command) {
        eprintln!("error: {e}");
        std::process::exit(1);
    }
}

fn run(command: Commands) -> Result<(), CliError> {
    match command {
        Commands::Convert {
            input,
            output,
            from,
            commonmark,
        } => convert(&input, output.as_deref(), from, &parse_options(commonmark)),
        Commands::Tree { input, commonmark } => tree(&input, &parse_options(commonmark)),
    }
}

fn parse_options(commonmark: bool) -> ParseOptions {
    if commonmark {
        ParseOptions::commonmark()
    } else {
        ParseOptions::default()
    }
}

fn convert(
    input: &Path,
    output: Option<&Path>,
    from: Option<Format>,
    options: &ParseOptions,
) -> Result<(), CliError> {
    let format = from.unwrap_or_else(|| Format::detect(input));
    let bytes = read_input(input)?;

    let tree: Node = match format {
        Format::Markdown => markdown::parse_bytes_with_options(&bytes, options)?,
        Format::MdastJson => serde_json::from_slice(&bytes)?,
    };

    let result = bbcode::emit(&tree);
    if result.has_warnings() {
        tracing::info!(
            count = result.warnings.len(),
            "some nodes have no BBCode rendering"
        );
    }

    match output {
        Some(path) if path.as_os_str() != "-" => fs::write(path, result.value)?,
        _ => io::stdout().write_all(result.value.as_bytes())?,
    }

    Ok(())
}

fn tree(input: &Path, options: &ParseOptions) -> Result<(), CliError> {
    let bytes = read_input(input)?;
    let tree = markdown::parse_bytes_with_options(&bytes, options)?;

    let mut stdout = io::stdout().lock();
    serde_json::to_writer_pretty(&mut stdout, &tree)?;
    stdout.write_all(b"\n")?;
    Ok(())
}

fn read_input(input: &Path) -> Result<Vec<u8>, CliError> {
    if input.as_os_str() == "-" {
        let mut buf = Vec::new();
        io::stdin().read_to_end(&mut buf)?;
        Ok(buf)
    } else {
        Ok(fs::read(input)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_detection() {
        assert_eq!(Format::detect(Path::new("notes.md")), Format::Markdown);
        assert_eq!(Format::detect(Path::new("tree.JSON")), Format::MdastJson);
        assert_eq!(Format::detect(Path::new("-")), Format::Markdown);
        assert_eq!(Format::detect(Path::new("README")), Format::Markdown);
    }

    #[test]
    fn test_cli_arguments() {
        let cli = Cli::try_parse_from([
            "steambb",
            "convert",
            "in.json",
            "--from",
            "mdast-json",
            "-o",
            "out.txt",
            "--commonmark",
        ])
        .unwrap();
        match cli.command {
            Commands::Convert {
                input,
                output,
                from,
                commonmark,
            } => {
                assert_eq!(input, PathBuf::from("in.json"));
                assert_eq!(output, Some(PathBuf::from("out.txt")));
                assert_eq!(from, Some(Format::MdastJson));
                assert!(commonmark);
            }
            Commands::Tree { .. } => panic!("expected convert"),
        }
    }

    #[test]
    fn test_clap_definition() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }
}
