//! richblocks - render CMS rich text from the command line

use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use clap::{Args, Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use richblocks::export::{
    Exporter, Format, HtmlConfig, HtmlExporter, JsonExporter, MarkdownExporter, TextExporter,
};
use richblocks::markdown::MarkdownConfig;
use richblocks::{Rendered, parse_page_str, parse_rich_text_str, render};

#[derive(Parser)]
#[command(name = "richblocks")]
#[command(version, about = "Render CMS rich-text blocks", long_about = None)]
#[command(after_help = "EXAMPLES:
    richblocks render about.json                     Render a rich-text field to HTML
    richblocks render about.json -f markdown         Render to Markdown
    richblocks render page.json --section faq --field description
    richblocks sections page.json                    List page sections")]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// More log output (repeatable)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Only log errors
    #[arg(short, long, global = true)]
    quiet: bool,
}

#[derive(Subcommand)]
enum Command {
    /// Render a rich-text document, or one field of a page section
    Render(RenderArgs),
    /// List the sections of a page payload
    Sections {
        /// Page JSON file
        #[arg(value_name = "INPUT")]
        input: PathBuf,
    },
}

#[derive(Args)]
struct RenderArgs {
    /// Rich-text JSON file, or a page JSON file with --section
    #[arg(value_name = "INPUT")]
    input: PathBuf,

    /// Output format: html, markdown, text or json (default: from OUTPUT, else html)
    #[arg(short, long)]
    format: Option<String>,

    /// Output file (default: stdout)
    #[arg(short, long, value_name = "OUTPUT")]
    output: Option<PathBuf>,

    /// Section anchor to read from a page payload
    #[arg(long, requires = "field")]
    section: Option<String>,

    /// Rich-text field of the section
    #[arg(long, requires = "section")]
    field: Option<String>,

    /// Wrap HTML output in a div with this class
    #[arg(long)]
    wrapper_class: Option<String>,

    /// Add slug ids to headings (HTML) or anchor lines (Markdown)
    #[arg(long)]
    heading_ids: bool,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.verbose, cli.quiet);

    let result = match &cli.command {
        Command::Render(args) => run_render(args),
        Command::Sections { input } => run_sections(input),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn init_tracing(verbose: u8, quiet: bool) {
    let default_level = match (quiet, verbose) {
        (true, _) => "error",
        (false, 0) => "warn",
        (false, 1) => "info",
        (false, 2) => "debug",
        (false, _) => "trace",
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn run_render(args: &RenderArgs) -> richblocks::Result<()> {
    let json = fs::read_to_string(&args.input)?;

    let rendered = match (&args.section, &args.field) {
        (Some(anchor), Some(field)) => {
            let page = parse_page_str(&json)?;
            page.require_section(anchor)?.try_render_field(field)?
        }
        _ => render(&parse_rich_text_str(&json)?),
    };
    tracing::info!(
        input = %args.input.display(),
        blocks = rendered.blocks().len(),
        "rendered"
    );

    let format = match (&args.format, &args.output) {
        (Some(name), _) => Format::from_name(name)?,
        (None, Some(path)) => Format::from_path(path).unwrap_or(Format::Html),
        (None, None) => Format::Html,
    };

    match &args.output {
        Some(path) => {
            let mut file = io::BufWriter::new(fs::File::create(path)?);
            write_output(&rendered, format, args, &mut file)?;
            file.flush()?;
        }
        None => {
            let stdout = io::stdout();
            write_output(&rendered, format, args, &mut stdout.lock())?;
        }
    }
    Ok(())
}

fn write_output<W: Write>(
    rendered: &Rendered,
    format: Format,
    args: &RenderArgs,
    writer: &mut W,
) -> io::Result<()> {
    match format {
        Format::Html => HtmlExporter::with_config(HtmlConfig {
            wrapper_class: args.wrapper_class.clone(),
            heading_ids: args.heading_ids,
            ..Default::default()
        })
        .export(rendered, writer),
        Format::Markdown => MarkdownExporter::with_config(MarkdownConfig {
            heading_anchors: args.heading_ids,
            ..Default::default()
        })
        .export(rendered, writer),
        Format::Text => TextExporter::new().export(rendered, writer),
        Format::Json => JsonExporter::pretty().export(rendered, writer),
    }
}

fn run_sections(input: &Path) -> richblocks::Result<()> {
    let page = parse_page_str(&fs::read_to_string(input)?)?;

    if page.is_empty() {
        println!("No sections found (the site would show its maintenance notice)");
        return Ok(());
    }

    for section in &page.sections {
        println!("{}\t{}", section.anchor, section.kind.component());
    }
    Ok(())
}
