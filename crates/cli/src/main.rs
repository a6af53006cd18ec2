#![deny(unsafe_code)]
//! CLI binary for quad-canvas.
//!
//! Subcommands:
//! - `plan`: print the quad vertices and the matrices a canvas of a given
//!   size would upload
//! - `shaders`: print the bundled gradient shader sources

mod error;

use clap::{Parser, Subcommand};
use error::CliError;
use quad_canvas_core::shaders::{GRADIENT_FRAGMENT_SHADER, GRADIENT_VERTEX_SHADER};
use quad_canvas_core::{CanvasConfig, FramePlan};
use std::process;

#[derive(Parser)]
#[command(name = "quad-canvas", about = "Inspect the gradient quad pipeline")]
struct Cli {
    /// Output as JSON instead of human-readable text.
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Print the vertex positions and matrices for a surface size.
    Plan {
        /// Surface client width in pixels.
        #[arg(short = 'W', long, default_value_t = 800)]
        width: u32,

        /// Surface client height in pixels.
        #[arg(short = 'H', long, default_value_t = 600)]
        height: u32,

        /// Config overrides as a JSON object (e.g. '{"fov_degrees": 60}').
        #[arg(long, default_value = "{}")]
        config: String,
    },
    /// Print the bundled gradient vertex and fragment shaders.
    Shaders,
}

fn format_matrix(cols: &[f32; 16]) -> String {
    // Printed row by row; storage is column-major.
    (0..4)
        .map(|row| {
            let cells: Vec<String> = (0..4)
                .map(|col| format!("{:>10.5}", cols[col * 4 + row]))
                .collect();
            format!("  [{}]", cells.join(", "))
        })
        .collect::<Vec<_>>()
        .join("\n")
}

fn plan(width: u32, height: u32, config: &str) -> Result<FramePlan, CliError> {
    if width == 0 || height == 0 {
        return Err(CliError::Input(format!(
            "surface size must be non-zero, got {width}x{height}"
        )));
    }

    let overrides: serde_json::Value = serde_json::from_str(config)
        .map_err(|e| CliError::Input(format!("invalid --config JSON: {e}")))?;
    let config = CanvasConfig::from_json(&overrides);
    config.validate()?;

    log::debug!("planning {width}x{height} with {config:?}");
    Ok(FramePlan::new(&config, width, height))
}

fn run(cli: Cli) -> Result<(), CliError> {
    match cli.command {
        Command::Plan {
            width,
            height,
            config,
        } => {
            let plan = plan(width, height, &config)?;

            if cli.json {
                println!("{}", serde_json::to_string_pretty(&plan)?);
            } else {
                println!("surface: {}x{} (aspect {:.5})", plan.width, plan.height, plan.aspect);
                println!("vertices (triangle strip):");
                for i in 0..quad_canvas_core::geometry::VERTEX_COUNT {
                    let [x, y] = plan.geometry.vertex(i);
                    println!("  {i}: ({x:>9.5}, {y:>9.5})");
                }
                println!("projection:");
                println!("{}", format_matrix(&plan.frame.projection_cols()));
                println!("model-view:");
                println!("{}", format_matrix(&plan.frame.view_cols()));
            }
        }
        Command::Shaders => {
            if cli.json {
                let info = serde_json::json!({
                    "vertex": GRADIENT_VERTEX_SHADER,
                    "fragment": GRADIENT_FRAGMENT_SHADER,
                });
                println!("{}", serde_json::to_string_pretty(&info)?);
            } else {
                println!("// vertex{GRADIENT_VERTEX_SHADER}");
                println!("// fragment{GRADIENT_FRAGMENT_SHADER}");
            }
        }
    }

    Ok(())
}

fn main() {
    env_logger::init();
    let cli = Cli::parse();
    let json_mode = cli.json;
    if let Err(e) = run(cli) {
        if json_mode {
            let j = serde_json::json!({"error": e.to_string(), "exit_code": e.exit_code()});
            eprintln!("{}", serde_json::to_string_pretty(&j).unwrap_or_default());
        } else {
            eprintln!("error: {e}");
        }
        process::exit(e.exit_code());
    }
}
