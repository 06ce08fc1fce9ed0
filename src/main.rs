// Development harness for the File Format Converter plugin.
// In production the AutoTask host loads the library; this binary runs the same
// nodes from a terminal.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

use file_convert_lib::{manifest, registry, NodeInputs, NodeOutputs, NodeRegistry, PluginConfig, TracingLogger};

#[derive(Parser)]
#[command(name = "autotask-file-convert", version, about = "Run File Format Converter nodes outside the host")]
struct Cli {
    /// Plugin config as a JSON object (e.g. '{"jpegQuality":90}')
    #[arg(long, global = true)]
    config: Option<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Print the plugin manifest as JSON
    Manifest,
    /// List registered node ids
    Nodes,
    /// Execute a node and print its outputs as JSON
    Run {
        /// Node id, e.g. svg_to_image
        node: String,
        /// Node inputs as a JSON object
        #[arg(long)]
        inputs: String,
    },
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_file(false)         // Remove file path
        .with_line_number(false)  // Remove line numbers
        .with_target(false)       // Remove module path
        .with_writer(std::io::stderr)
        .compact()
        .init();

    let cli = Cli::parse();
    debug!("=== File Format Converter harness ===");

    let custom;
    let nodes: &NodeRegistry = match &cli.config {
        Some(raw) => {
            let value: serde_json::Value = serde_json::from_str(raw).context("--config is not valid JSON")?;
            let config = PluginConfig::load(Some(&value))?;
            custom = NodeRegistry::with_builtin_nodes(config);
            &custom
        }
        None => registry(),
    };

    match cli.command {
        Command::Manifest => {
            let mut manifest = manifest();
            manifest.nodes = nodes.descriptors();
            println!("{}", serde_json::to_string_pretty(&manifest)?);
        }
        Command::Nodes => {
            for id in nodes.ids() {
                println!("{id}");
            }
        }
        Command::Run { node, inputs } => {
            let inputs = NodeInputs::from_json(&inputs)?;
            let outputs = run_blocking(nodes, &node, inputs)?;
            println!("{}", serde_json::to_string_pretty(&outputs)?);
            info!("Node '{}' finished", node);
        }
    }

    Ok(())
}

/// Executes the node on tokio's blocking pool, the way an async host would.
fn run_blocking(nodes: &NodeRegistry, id: &str, inputs: NodeInputs) -> Result<NodeOutputs> {
    let runtime = tokio::runtime::Builder::new_multi_thread()
        .worker_threads(1)
        .build()
        .context("failed to start tokio runtime")?;

    let nodes = nodes.clone();
    let id = id.to_string();
    let outputs = runtime.block_on(async move {
        tokio::task::spawn_blocking(move || nodes.execute(&id, &inputs, &TracingLogger::new(id.as_str())))
            .await
    })??;
    Ok(outputs)
}
