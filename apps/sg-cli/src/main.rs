use clap::{Parser, Subcommand};
use sg_app::{AppConfig, AppResult, GraphRun, RenderExport, StageTiming};
use sg_source::{JsonFileSource, JsonTextSource, PointSource};
use std::io::{self, Read};
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(name = "sg-cli")]
#[command(about = "StopGraph CLI - schematic graph synthesis from named points", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Parse the point records and report the layout
    Validate {
        /// Path to the records JSON file ("-" for stdin)
        input: PathBuf,
    },
    /// List the stop points that synthesis would add
    Stops {
        /// Path to the records JSON file ("-" for stdin)
        input: PathBuf,
        /// Synthesis config YAML
        #[arg(short, long)]
        config: Option<PathBuf>,
    },
    /// Export the edge list as CSV
    Edges {
        /// Path to the records JSON file ("-" for stdin)
        input: PathBuf,
        /// Synthesis config YAML
        #[arg(short, long)]
        config: Option<PathBuf>,
        /// Output CSV file path (optional, defaults to stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// Export nodes, classification and edges as JSON for a renderer
    Export {
        /// Path to the records JSON file ("-" for stdin)
        input: PathBuf,
        /// Synthesis config YAML
        #[arg(short, long)]
        config: Option<PathBuf>,
        /// Output JSON file path (optional, defaults to stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

fn main() -> AppResult<()> {
    // Initialize tracing
    tracing_subscriber::fmt().with_writer(io::stderr).init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Validate { input } => cmd_validate(&input),
        Commands::Stops { input, config } => cmd_stops(&input, config.as_deref()),
        Commands::Edges {
            input,
            config,
            output,
        } => cmd_edges(&input, config.as_deref(), output.as_deref()),
        Commands::Export {
            input,
            config,
            output,
        } => cmd_export(&input, config.as_deref(), output.as_deref()),
    }
}

fn open_source(input: &Path) -> AppResult<Box<dyn PointSource>> {
    tracing::debug!(input = %input.display(), "opening point source");
    if input == Path::new("-") {
        let mut text = String::new();
        io::stdin().read_to_string(&mut text)?;
        Ok(Box::new(JsonTextSource::new("stdin", text)))
    } else {
        Ok(Box::new(JsonFileSource::new(input)))
    }
}

fn run_pipeline(input: &Path, config: Option<&Path>) -> AppResult<GraphRun> {
    let config: AppConfig = sg_app::load_config_or_default(config)?;
    let source = open_source(input)?;
    sg_app::build_graph(source.as_ref(), &config)
}

fn cmd_validate(input: &Path) -> AppResult<()> {
    eprintln!("Validating records: {}", input.display());
    let source = open_source(input)?;
    let layout = sg_app::load_layout(source.as_ref())?;

    println!("✓ {} points", layout.len());
    for (category, count) in layout.category_counts() {
        if count > 0 {
            println!("  {:<10} {}", category.label(), count);
        }
    }
    Ok(())
}

fn cmd_stops(input: &Path, config: Option<&Path>) -> AppResult<()> {
    let run = run_pipeline(input, config)?;

    if run.graph.stops().is_empty() {
        println!("No stop points generated");
    } else {
        println!("Stop points:");
        for node in run.graph.stop_nodes() {
            println!("  {} ({}, {})", node.name, node.pos.x, node.pos.y);
        }
    }
    print_summary(&run);
    Ok(())
}

fn cmd_edges(input: &Path, config: Option<&Path>, output: Option<&Path>) -> AppResult<()> {
    let run = run_pipeline(input, config)?;
    let csv = sg_app::edges_csv(&run.graph);

    // Write to file or stdout
    if let Some(path) = output {
        std::fs::write(path, csv)?;
        println!(
            "✓ Exported {} edges to {}",
            run.graph.edge_count(),
            path.display()
        );
        print_summary(&run);
    } else {
        print!("{}", csv);
    }
    Ok(())
}

fn cmd_export(input: &Path, config: Option<&Path>, output: Option<&Path>) -> AppResult<()> {
    let run = run_pipeline(input, config)?;
    let json = RenderExport::from_graph(&run.graph).to_json_pretty()?;

    if let Some(path) = output {
        std::fs::write(path, json)?;
        println!("✓ Exported graph to {}", path.display());
        print_summary(&run);
    } else {
        println!("{}", json);
    }
    Ok(())
}

fn print_summary(run: &GraphRun) {
    let summary = sg_app::summarize(&run.graph);
    println!("\nGraph summary:");
    println!("  Records: {}", run.record_count);
    println!("  Nodes:   {}", summary.node_count);
    println!("  Stops:   {}", summary.stop_count);
    println!("  Edges:   {}", summary.edge_count);
    println!("  Isolated: {}", summary.isolated_count);
    print_timing(&run.timing);
}

fn print_timing(timing: &StageTiming) {
    let total = timing.total_s.max(1.0e-12);
    println!("\nTiming summary:");
    println!(
        "  Fetch: {:.3}s ({:.1}%)",
        timing.fetch_s,
        100.0 * timing.fetch_s / total
    );
    println!(
        "  Build: {:.3}s ({:.1}%)",
        timing.build_s,
        100.0 * timing.build_s / total
    );
    println!(
        "  Synth: {:.3}s ({:.1}%)",
        timing.synth_s,
        100.0 * timing.synth_s / total
    );
    println!("  Total: {:.3}s", timing.total_s);
}
