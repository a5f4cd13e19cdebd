//! Tessera studio - inspector for the host/shader layout contract
//!
//! # Commands
//!
//! - `tessera-studio layout` - Print the uniform field table and index tables
//! - `tessera-studio wgsl` - Print (or write with `--out`) the WGSL prelude
//! - `tessera-studio frames` - Sample per-frame uniform records of the spinning mesh

use std::path::PathBuf;

use anyhow::Result;
use clap::{Args, Parser, Subcommand};
use tessera_engine::logging::{init_logging, LoggingConfig};
use tessera_engine::transform::{SpinningTransform, TransformConfig};
use tessera_engine::{shader, AttributeChannel, BufferSlot, MeshVertex, TransformUniform};

#[derive(Parser)]
#[command(name = "tessera-studio")]
#[command(about = "Inspect the transform-uniform layout contract")]
#[command(version)]
struct Cli {
    /// Log filter, `env_logger` syntax (overrides RUST_LOG)
    #[arg(long, global = true)]
    log: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print offsets, sizes and index values shared with shaders
    Layout,

    /// Emit the generated WGSL declarations
    Wgsl {
        /// Write to this file instead of stdout
        #[arg(long)]
        out: Option<PathBuf>,
    },

    /// Advance the spinning transform and dump each frame's uniform bytes
    Frames(FramesArgs),
}

#[derive(Args)]
struct FramesArgs {
    #[arg(long, default_value_t = 3)]
    count: u32,

    #[arg(long, default_value_t = 800.0)]
    width: f32,

    #[arg(long, default_value_t = 600.0)]
    height: f32,

    /// Preferred frames per second; 0 uses the fallback rate
    #[arg(long, default_value_t = 0)]
    fps: u32,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    init_logging(LoggingConfig {
        env_filter: cli.log.clone(),
        ..LoggingConfig::default()
    });

    match cli.command {
        Commands::Layout => print_layout(),
        Commands::Wgsl { out: Some(path) } => shader::write_wgsl_prelude(&path)?,
        Commands::Wgsl { out: None } => print!("{}", shader::wgsl_prelude()),
        Commands::Frames(args) => sample_frames(&args),
    }

    Ok(())
}

fn print_layout() {
    let record = TransformUniform::IDENTITY;
    println!("TransformUniform ({} bytes)", TransformUniform::SIZE);
    println!("  {:>6}  {:>4}  field", "offset", "size");
    println!(
        "  {:>6}  {:>4}  projection_matrix",
        std::mem::offset_of!(TransformUniform, projection_matrix),
        std::mem::size_of_val(&record.projection_matrix),
    );
    println!(
        "  {:>6}  {:>4}  model_view_matrix",
        std::mem::offset_of!(TransformUniform, model_view_matrix),
        std::mem::size_of_val(&record.model_view_matrix),
    );
    println!();

    println!("AttributeChannel");
    for channel in AttributeChannel::ALL {
        println!(
            "  {:<10} location {}  offset {:>2}",
            channel,
            channel.location(),
            MeshVertex::attribute_offset(channel),
        );
    }
    println!();

    println!("BufferSlot");
    for slot in BufferSlot::ALL {
        println!("  {:<10} index {}", slot, slot.index());
    }
}

fn sample_frames(args: &FramesArgs) {
    let mut spin = SpinningTransform::new(TransformConfig::default(), args.width, args.height);
    let dt = spin.timestep(args.fps);
    log::info!(
        "sampling {} frames at {}x{}, dt {:.4}s",
        args.count,
        args.width,
        args.height,
        dt
    );

    for frame in 0..args.count {
        let uniforms = spin.uniforms();
        println!("frame {frame} (rotation {:.4} rad)", spin.rotation());
        for (row, chunk) in uniforms.as_bytes().chunks(16).enumerate() {
            let hex: Vec<String> = chunk.iter().map(|b| format!("{b:02x}")).collect();
            println!("  {:04x}: {}", row * 16, hex.join(" "));
        }
        spin.advance(dt);
    }
}
