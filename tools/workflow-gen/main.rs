use clap::Parser;
use comfyscript::workflow::SUPPORTED_VERSION;
use rand::{Rng, SeedableRng, rngs::StdRng};
use serde_json::{Value, json};
use std::fs;

/// A CLI tool to generate random, acyclic workflows for the transpiler
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Cli {
    /// The path to write the generated JSON file to
    #[arg(short, long, default_value = "generated_workflow.json")]
    output: String,

    /// The number of nodes to generate
    #[arg(short, long, default_value_t = 50)]
    nodes: usize,

    /// The maximum number of inputs wired into a single node
    #[arg(long, default_value_t = 3)]
    max_inputs: usize,

    /// Seed for reproducible output
    #[arg(long)]
    seed: Option<u64>,
}

/// Node types the generator picks from, with their output types.
const NODE_KINDS: &[(&str, &[&str])] = &[
    ("CheckpointLoaderSimple", &["MODEL", "CLIP", "VAE"]),
    ("CLIPTextEncode", &["CONDITIONING"]),
    ("EmptyLatentImage", &["LATENT"]),
    ("KSampler", &["LATENT"]),
    ("VAEDecode", &["IMAGE"]),
    ("ImageScale", &["IMAGE"]),
    ("SaveImage", &[]),
    ("PreviewImage", &[]),
];

struct GenOutput {
    output_type: &'static str,
    links: Vec<u64>,
}

struct GenNode {
    id: u64,
    kind: &'static str,
    outputs: Vec<GenOutput>,
    inputs: Vec<u64>,
    widgets: Vec<Value>,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    let mut rng = match cli.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    };

    println!("Generating a workflow with {} node(s)...", cli.nodes);

    let mut nodes: Vec<GenNode> = Vec::with_capacity(cli.nodes);
    let mut links: Vec<Value> = Vec::new();
    let mut next_link_id = 1u64;

    for index in 0..cli.nodes {
        let (kind, output_types) = NODE_KINDS[rng.random_range(0..NODE_KINDS.len())];
        let mut node = GenNode {
            id: index as u64 + 1,
            kind,
            outputs: output_types
                .iter()
                .map(|&output_type| GenOutput {
                    output_type,
                    links: Vec::new(),
                })
                .collect(),
            inputs: Vec::new(),
            widgets: generate_widgets(&mut rng),
        };

        // Only earlier nodes may feed this one, which keeps the graph acyclic.
        let producers: Vec<usize> = (0..index).filter(|&i| !nodes[i].outputs.is_empty()).collect();
        if !producers.is_empty() {
            let input_count = rng.random_range(0..=cli.max_inputs);
            for target_slot in 0..input_count {
                let source = producers[rng.random_range(0..producers.len())];
                let source_slot = rng.random_range(0..nodes[source].outputs.len());
                let source_id = nodes[source].id;
                let output = &mut nodes[source].outputs[source_slot];
                output.links.push(next_link_id);
                node.inputs.push(next_link_id);
                links.push(json!([
                    next_link_id,
                    source_id,
                    source_slot,
                    node.id,
                    target_slot,
                    output.output_type
                ]));
                next_link_id += 1;
            }
        }
        nodes.push(node);
    }

    let document = json!({
        "version": SUPPORTED_VERSION,
        "last_node_id": nodes.len(),
        "last_link_id": next_link_id - 1,
        "nodes": nodes.iter().map(node_to_json).collect::<Vec<_>>(),
        "links": links,
    });

    fs::write(&cli.output, serde_json::to_string_pretty(&document)?)?;
    println!(
        "Successfully generated {} node(s) and {} link(s) into '{}'",
        nodes.len(),
        next_link_id - 1,
        cli.output
    );

    Ok(())
}

fn generate_widgets(rng: &mut StdRng) -> Vec<Value> {
    (0..rng.random_range(0..4))
        .map(|_| match rng.random_range(0..3) {
            0 => json!(rng.random_range(1..100)),
            1 => json!((rng.random_range(0.0..10.0f64) * 100.0).round() / 100.0),
            _ => json!(format!("value_{}", rng.random_range(0..1000))),
        })
        .collect()
}

fn node_to_json(node: &GenNode) -> Value {
    let outputs: Vec<Value> = node
        .outputs
        .iter()
        .enumerate()
        .map(|(slot, output)| {
            let mut value = json!({
                "name": output.output_type,
                "type": output.output_type,
                "links": output.links,
            });
            // The editor only writes a slot index once an output has been linked.
            if !output.links.is_empty() {
                value["slot_index"] = json!(slot);
            }
            value
        })
        .collect();
    let inputs: Vec<Value> = node
        .inputs
        .iter()
        .enumerate()
        .map(|(slot, link)| json!({ "name": format!("input_{}", slot), "type": "*", "link": link }))
        .collect();

    json!({
        "id": node.id,
        "type": node.kind,
        "outputs": outputs,
        "inputs": inputs,
        "widgets_values": node.widgets,
    })
}
