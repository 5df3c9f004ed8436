use clap::Parser;
use comfyscript::prelude::*;
use std::fs;
use std::time::Instant;
use tracing_subscriber::EnvFilter;

/// Transpile a node-graph workflow into a flat call script
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Cli {
    /// Path to the workflow JSON file
    workflow_path: String,

    /// Write the script here instead of stdout
    #[arg(short, long)]
    output: Option<String>,

    /// Accept workflows with any version tag
    #[arg(long)]
    no_version_check: bool,

    /// Prefix used to comment out statements whose outputs are all unused
    #[arg(long, default_value = "# ")]
    dead_code_marker: String,

    /// Pin the callee for a node type, as `NodeType=ClassName`
    #[arg(long = "map", value_parser = parse_mapping)]
    mappings: Vec<(String, String)>,

    /// Print the emission order and timings to stderr
    #[arg(short, long)]
    verbose: bool,
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let total_start = Instant::now();

    // --- 1. Loading and Conversion ---
    let workflow_json = fs::read_to_string(&cli.workflow_path).unwrap_or_else(|e| {
        exit_with_error(&format!(
            "Failed to read workflow file '{}': {}",
            &cli.workflow_path, e
        ))
    });

    let document = if cli.no_version_check {
        WorkflowDocument::from_json_unchecked(&workflow_json)
    } else {
        WorkflowDocument::from_json(&workflow_json)
    }
    .unwrap_or_else(|e| exit_with_error(&format!("Failed to load workflow: {}", e)));

    let workflow = document
        .into_workflow()
        .unwrap_or_else(|e| exit_with_error(&format!("Failed to convert workflow: {}", e)));

    // --- 2. Graph Build ---
    let mut builder = WorkflowToScriptTranspiler::builder(workflow)
        .with_dead_code_marker(&cli.dead_code_marker);
    for (node_type, class_id) in &cli.mappings {
        builder = builder.with_class_mapping(node_type, class_id);
    }
    let transpiler = builder
        .build()
        .unwrap_or_else(|e| exit_with_error(&format!("Failed to build workflow graph: {}", e)));

    // --- 3. Emission ---
    let emit_start = Instant::now();
    let script = transpiler
        .to_script()
        .unwrap_or_else(|e| exit_with_error(&format!("Transpilation failed: {}", e)));
    let emit_duration = emit_start.elapsed();

    match &cli.output {
        Some(path) => {
            fs::write(path, &script).unwrap_or_else(|e| {
                exit_with_error(&format!("Failed to write script to '{}': {}", path, e))
            });
            eprintln!("Wrote script to '{}'", path);
        }
        None => print!("{}", script),
    }

    if cli.verbose {
        let graph = transpiler.graph();
        eprintln!("\n--- Workflow Summary ---");
        eprintln!("Nodes:           {}", graph.node_count());
        eprintln!("Links:           {}", graph.edge_count());
        if let Ok(order) = transpiler.emission_order() {
            eprintln!("Emission order:  {:?}", order);
        }
        eprintln!("\n--- Performance Summary ---");
        eprintln!("Emission:        {:?}", emit_duration);
        eprintln!("Total Execution: {:?}", total_start.elapsed());
    }
}

fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn parse_mapping(raw: &str) -> Result<(String, String), String> {
    raw.split_once('=')
        .filter(|(node_type, class_id)| !node_type.is_empty() && !class_id.is_empty())
        .map(|(node_type, class_id)| (node_type.to_string(), class_id.to_string()))
        .ok_or_else(|| format!("expected NodeType=ClassName, got '{}'", raw))
}

fn exit_with_error(message: &str) -> ! {
    eprintln!("\nError: {}", message);
    std::process::exit(1);
}
