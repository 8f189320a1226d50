use clap::{Parser, Subcommand};
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::time::Instant;

use cryo_ptc::PtcModel;
use cryo_results::TemperatureTable;
use cryo_sim::{Progress, SimOptions};

mod compile;
mod error;

use error::AppResult;

#[derive(Parser)]
#[command(name = "cryo-cli")]
#[command(about = "CryoFlow CLI - Cryostat cool-down simulation tool", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Validate project file syntax and structure
    Validate {
        /// Path to the project YAML file
        project_path: PathBuf,
    },
    /// Run a cool-down simulation
    Run {
        /// Path to the project YAML file
        project_path: PathBuf,
        /// Path to the PTC load curve CSV file
        load_curve_path: PathBuf,
        /// Output CSV file path
        out_path: PathBuf,
        /// Override the iteration budget from the project file
        #[arg(long)]
        iterations: Option<usize>,
        /// Override the initial time step in seconds
        #[arg(long)]
        dt: Option<f64>,
        /// Override the recording decimation
        #[arg(long)]
        record_every: Option<usize>,
    },
}

fn main() -> AppResult<()> {
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Validate { project_path } => cmd_validate(&project_path),
        Commands::Run {
            project_path,
            load_curve_path,
            out_path,
            iterations,
            dt,
            record_every,
        } => cmd_run(
            &project_path,
            &load_curve_path,
            &out_path,
            iterations,
            dt,
            record_every,
        ),
    }
}

fn cmd_validate(project_path: &Path) -> AppResult<()> {
    println!("Validating project: {}", project_path.display());
    let project = cryo_project::load_yaml(project_path)?;
    println!(
        "✓ Project '{}' is valid ({} stages, {} materials)",
        project.name,
        project.stages.len(),
        project.materials.len()
    );
    Ok(())
}

fn cmd_run(
    project_path: &Path,
    load_curve_path: &Path,
    out_path: &Path,
    iterations: Option<usize>,
    dt: Option<f64>,
    record_every: Option<usize>,
) -> AppResult<()> {
    let project = cryo_project::load_yaml(project_path)?;
    let ptc = PtcModel::from_csv_path(load_curve_path)?;

    let opts = SimOptions {
        iterations: iterations.unwrap_or(project.run.iterations),
        dt_initial_s: dt.unwrap_or(project.run.dt_initial_s),
        record_every: record_every.unwrap_or(project.run.record_every),
    };

    println!("Running cool-down for project: {}", project.name);
    println!(
        "  iterations = {}, dt = {:.3} s, record_every = {}",
        opts.iterations, opts.dt_initial_s, opts.record_every
    );

    let mut sim = compile::assemble(&project, ptc, opts)?;

    let start = Instant::now();
    let mut last_emit = Instant::now();
    let mut last_fraction = -1.0f64;
    let mut on_progress = |p: Progress| {
        let fraction = p.step as f64 / p.total_steps as f64;
        let emit_now = (fraction - last_fraction).abs() >= 0.005
            || last_emit.elapsed().as_millis() >= 100
            || p.step == p.total_steps;
        if emit_now {
            render_progress(&p, fraction, start.elapsed().as_secs_f64());
            last_fraction = fraction;
            last_emit = Instant::now();
        }
    };
    let record = sim.run(Some(&mut on_progress))?;
    clear_progress_line();

    let table = TemperatureTable::new(
        record.node_names,
        record.times_s,
        record.temperatures_k,
    )?;
    table.write_csv(out_path)?;

    tracing::info!(
        project = %project.name,
        rows = table.times_s().len(),
        nodes = table.node_names().len(),
        elapsed_s = start.elapsed().as_secs_f64(),
        out = %out_path.display(),
        "cool-down run finished"
    );

    println!("✓ Simulation completed in {:.1}s", start.elapsed().as_secs_f64());
    println!("  Time points: {}", table.times_s().len());
    println!("  Nodes: {}", table.node_names().len());
    println!("  Output: {}", out_path.display());

    Ok(())
}

fn render_progress(p: &Progress, fraction: f64, elapsed_s: f64) {
    let width = 28usize;
    let filled = ((fraction * width as f64).round() as usize).min(width);
    let bar = format!(
        "{}{}",
        "#".repeat(filled),
        "-".repeat(width.saturating_sub(filled))
    );
    print!(
        "\r[{}] {:>6.2}%  step={}/{}  t={:.1}s  dt={:.3}s  elapsed={:.1}s",
        bar,
        fraction * 100.0,
        p.step,
        p.total_steps,
        p.sim_time_s,
        p.dt_s,
        elapsed_s
    );
    let _ = io::stdout().flush();
}

fn clear_progress_line() {
    print!("\r{}\r", " ".repeat(120));
    let _ = io::stdout().flush();
}
