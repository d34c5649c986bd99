use anyhow::{bail, Context, Result};
use clap::{Args, Parser, Subcommand, ValueEnum};
use hotspot_overlay::{LineAnnotationMapper, OverlayConfig, SourceDocument, SourceView};
use hotspot_protocol::{
    input_schema, output_schema, serialize_json_pretty, ErrorEnvelope, OverlayPayload,
    SourceViewFile,
};
use std::path::{Path, PathBuf};

mod config;
mod render;

pub use config::load_overlay_config;
pub use render::Listing;

#[derive(Parser)]
#[command(name = "hotspot")]
#[command(about = "Annotate source files with per-line profiling metrics", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Quiet mode: log only warnings/errors
    #[arg(long, global = true)]
    quiet: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Build the annotation overlay for a source file
    Annotate(AnnotateArgs),

    /// Print the JSON Schema of the input or output document
    Schema(SchemaArgs),
}

#[derive(Args)]
struct AnnotateArgs {
    /// Source view file (JSON or TOML) with per-line metrics
    #[arg(long)]
    metrics: PathBuf,

    /// Source file to annotate (defaults to `file.path` from the metrics file)
    #[arg(long)]
    source: Option<PathBuf>,

    /// Line to navigate to (overrides `file.line`; 0 disables)
    #[arg(long)]
    focus_line: Option<u32>,

    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Json)]
    format: OutputFormat,

    /// Do not put the column caption row on the first line
    #[arg(long)]
    no_header: bool,

    /// Overlay config file (JSON or TOML)
    #[arg(long)]
    config: Option<PathBuf>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    /// Overlay payload as pretty JSON
    Json,
    /// Source text with an annotation gutter
    Listing,
}

#[derive(Args)]
struct SchemaArgs {
    #[arg(value_enum, default_value_t = SchemaKind::Output)]
    kind: SchemaKind,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum SchemaKind {
    Input,
    Output,
}

pub fn main_entry() -> Result<()> {
    let cli = Cli::parse();

    let mut builder =
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"));
    if cli.quiet {
        builder.filter_level(log::LevelFilter::Warn);
    } else if cli.verbose {
        builder.filter_level(log::LevelFilter::Debug);
    }
    builder.target(env_logger::Target::Stderr).init();

    match cli.command {
        Commands::Annotate(args) => {
            if let Err(err) = run_annotate(&args) {
                if args.format == OutputFormat::Json {
                    let envelope = ErrorEnvelope::new("annotate_failed", format!("{err:#}"))
                        .with_hint("Check --metrics/--source paths and the schema (`hotspot schema input`)");
                    println!("{}", serialize_json_pretty(&envelope)?);
                }
                return Err(err);
            }
        }
        Commands::Schema(args) => run_schema(&args)?,
    }

    Ok(())
}

fn run_annotate(args: &AnnotateArgs) -> Result<()> {
    let view_file = SourceViewFile::load(&args.metrics)?;
    let source_path = resolve_source_path(args, &view_file)?;
    let focus_line = args.focus_line.unwrap_or(view_file.file.line);

    let document = SourceDocument::from_path(&source_path, focus_line)
        .with_context(|| format!("Failed to read source {}", source_path.display()))?;

    let mut config = match &args.config {
        Some(path) => load_overlay_config(path)?,
        None => OverlayConfig::default(),
    };
    if args.no_header {
        config.emit_header = false;
    }

    let metrics = view_file.metrics();
    log::info!(
        "annotating {} ({} lines) with {} metrics",
        source_path.display(),
        document.line_count(),
        metrics.len()
    );

    let mut view = SourceView::new(LineAnnotationMapper::new(&config)?);
    match args.format {
        OutputFormat::Json => {
            let overlay = view.rebind(document, metrics);
            println!("{}", serialize_json_pretty(&OverlayPayload::from(overlay))?);
        }
        OutputFormat::Listing => {
            let mut listing = Listing::default();
            view.rebind_into(document, metrics, &mut listing);
            print!("{}", listing.render(&view.document().lines()));
        }
    }

    let stats = view.overlay().stats();
    if stats.out_of_range > 0 {
        log::warn!(
            "{} metrics fall outside {} and were ignored",
            stats.out_of_range,
            source_path.display()
        );
    }
    Ok(())
}

fn resolve_source_path(args: &AnnotateArgs, view_file: &SourceViewFile) -> Result<PathBuf> {
    if let Some(source) = &args.source {
        return Ok(source.clone());
    }

    let Some(path) = view_file.file.path.as_deref() else {
        bail!(
            "No source file: pass --source or set file.path in {}",
            args.metrics.display()
        );
    };

    let path = Path::new(path);
    if path.is_absolute() {
        return Ok(path.to_path_buf());
    }
    let base = args.metrics.parent().unwrap_or_else(|| Path::new(""));
    Ok(base.join(path))
}

fn run_schema(args: &SchemaArgs) -> Result<()> {
    let schema = match args.kind {
        SchemaKind::Input => input_schema()?,
        SchemaKind::Output => output_schema()?,
    };
    println!("{}", serialize_json_pretty(&schema)?);
    Ok(())
}
