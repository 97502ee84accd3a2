//! taxomap CLI - taxonomy reconstruction tool

mod fetch;

use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand};
use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};

use taxomap::render::{self, ExtractionStats};
use taxomap::{
    detect_source_kind_from_bytes, JsonFormat, LandscapeParser, NestedConverter, ParseOptions,
    RenderOptions, SourceKind, Taxomap,
};

use fetch::{load_source, DEFAULT_SOURCE_URL};

#[derive(Parser)]
#[command(name = "taxomap")]
#[command(author = "iyulab")]
#[command(version)]
#[command(about = "Rebuild taxonomy trees from SVG landscapes and nested XML", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Infer the hierarchy of an SVG landscape (URL or file) into CSV + JSON
    Svg {
        /// Landscape URL or file
        #[arg(value_name = "SOURCE", env = "TAXOMAP_SOURCE", default_value = DEFAULT_SOURCE_URL)]
        source: String,

        /// Output directory
        #[arg(short, long, value_name = "DIR", default_value = ".")]
        output: PathBuf,

        /// Output compact JSON
        #[arg(long)]
        compact: bool,

        /// Collapse whitespace and NFC-normalize labels
        #[arg(long)]
        normalize: bool,
    },

    /// Convert a nested XML taxonomy into per-area JSON documents
    Xml {
        /// Nested XML file
        #[arg(value_name = "FILE", default_value = "bian.xml")]
        input: PathBuf,

        /// Output directory
        #[arg(short, long, value_name = "DIR", default_value = "src/data/business_areas")]
        output: PathBuf,

        /// Output compact JSON
        #[arg(long)]
        compact: bool,
    },

    /// Show source kind and extraction statistics
    Info {
        /// URL or file of either kind
        #[arg(value_name = "SOURCE")]
        source: String,
    },

    /// Show version information
    Version,
}

fn main() {
    env_logger::init();

    let cli = Cli::parse();

    let result = match cli.command {
        Some(Commands::Svg {
            source,
            output,
            compact,
            normalize,
        }) => cmd_svg(&source, &output, compact, normalize),
        Some(Commands::Xml {
            input,
            output,
            compact,
        }) => cmd_xml(&input, &output, compact),
        Some(Commands::Info { source }) => cmd_info(&source),
        Some(Commands::Version) => {
            cmd_version();
            Ok(())
        }
        None => {
            println!("{}", "Usage: taxomap <svg|xml|info> [SOURCE]".yellow());
            println!("       taxomap --help for more information");
            Ok(())
        }
    };

    if let Err(e) = result {
        eprintln!("{}: {}", "Error".red().bold(), e);
        std::process::exit(1);
    }
}

fn render_options(compact: bool) -> RenderOptions {
    let format = if compact {
        JsonFormat::Compact
    } else {
        JsonFormat::Pretty
    };
    RenderOptions::new().with_json_format(format)
}

fn cmd_svg(
    source: &str,
    output: &Path,
    compact: bool,
    normalize: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let pb = ProgressBar::new(3);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{bar:40.cyan/blue}] {msg}")?
            .progress_chars("#>-"),
    );

    pb.set_message("Loading landscape...");
    let data = load_source(source)?;
    pb.inc(1);

    pb.set_message("Inferring structure...");
    let options = ParseOptions::new().with_normalized_labels(normalize);
    let graph = LandscapeParser::from_bytes_with_options(&data, options)?.parse()?;
    pb.inc(1);

    pb.set_message("Writing table and graph...");
    let written = render::write_structure(&graph, output, &render_options(compact))?;
    pb.inc(1);

    pb.finish_with_message("Done!");

    print_written(&written);
    print_stats(&ExtractionStats::from_graph(&graph));

    Ok(())
}

fn cmd_xml(input: &Path, output: &Path, compact: bool) -> Result<(), Box<dyn std::error::Error>> {
    let options = ParseOptions::new().lenient();
    let catalog = NestedConverter::open_with_options(input, options)?.convert()?;

    let written = render::write_area_documents(&catalog, output, &render_options(compact))?;

    print_written(&written);
    println!(
        "\n{} {} areas written to {}",
        "Done!".green().bold(),
        catalog.len(),
        output.display()
    );

    Ok(())
}

fn cmd_info(source: &str) -> Result<(), Box<dyn std::error::Error>> {
    let data = load_source(source)?;
    let kind = detect_source_kind_from_bytes(&data)?;
    let result = Taxomap::new().lenient().parse_bytes(&data)?;

    println!("{}", "Source Information".cyan().bold());
    println!("{}", "─".repeat(40).dimmed());
    println!("{}: {}", "Source".bold(), source);
    println!("{}: {}", "Kind".bold(), kind);
    println!("{}: {}", "Bytes".bold(), data.len());

    print_stats(&result.stats());

    if kind == SourceKind::Nested {
        if let Some(catalog) = result.catalog() {
            println!();
            println!("{}", "Areas".cyan().bold());
            println!("{}", "─".repeat(40).dimmed());
            for bundle in catalog.iter() {
                println!(
                    "  {} ({} nodes, {} edges)",
                    bundle.area_id,
                    bundle.nodes.len(),
                    bundle.edges.len()
                );
            }
        }
    }

    Ok(())
}

fn print_written(paths: &[PathBuf]) {
    println!("\n{}", "Output files:".green().bold());
    for (i, path) in paths.iter().enumerate() {
        let branch = if i + 1 == paths.len() { "└─" } else { "├─" };
        println!("  {} {}", branch.dimmed(), path.display());
    }
}

fn print_stats(stats: &ExtractionStats) {
    println!();
    println!("{}", "Extraction Statistics".cyan().bold());
    println!("{}", "─".repeat(40).dimmed());

    if stats.area_count > 0 {
        println!("{}: {}", "Areas".bold(), stats.area_count);
    }
    println!("{}: {}", "Nodes".bold(), stats.node_count);
    println!("{}: {}", "Edges".bold(), stats.edge_count);
    println!("{}: {}", "Business areas".bold(), stats.business_areas);
    println!("{}: {}", "Business domains".bold(), stats.business_domains);
    println!("{}: {}", "Service domains".bold(), stats.service_domains);
    println!("{}: {}", "Unclassified".bold(), stats.unclassified);
    println!("{}: {}", "Roots".bold(), stats.root_count);

    if stats.self_loop_count > 0 {
        println!("{}: {}", "Self-loops".yellow(), stats.self_loop_count);
    }
    if stats.multi_parent_count > 0 {
        println!(
            "{}: {} (first parent kept)",
            "Multiple parents".yellow(),
            stats.multi_parent_count
        );
    }
}

fn cmd_version() {
    println!("{} {}", "taxomap".cyan().bold(), env!("CARGO_PKG_VERSION"));
    println!("Taxonomy reconstruction tool");
    println!();
    println!("Repository: {}", "https://github.com/iyulab/taxomap".dimmed());
    println!("License: MIT");
}
