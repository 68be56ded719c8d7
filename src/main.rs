//! dotgrid - connect the dots in the terminal.
//!
//! # Usage
//!
//! ```bash
//! dotgrid edges.txt
//! dotgrid --watch --size 8 edges.txt
//! dotgrid --check edges.txt
//! dotgrid --json - < edges.txt
//! dotgrid --export drawing.svg edges.txt
//! ```

use std::io::Read;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;

use dotgrid::app::{App, DOT_COLORS, read_edges};
use dotgrid::config::{
    ConfigFlags, clear_config_flags, global_config_path, load_config_flags, local_override_path,
    save_config_flags,
};
use dotgrid::export;
use dotgrid::grid::Grid;
use dotgrid::logging;

/// Connect the dots: draw a plain-text edge list on a grid of dots
#[derive(Parser, Debug)]
#[command(name = "dotgrid", version, about, long_about = None)]
struct Cli {
    /// Edge list file, one `x1,y1 x2,y2 color` per line (`-` reads stdin)
    #[arg(value_name = "FILE")]
    file: Option<PathBuf>,

    /// Dots per side of the grid (at most 500)
    #[arg(long, value_name = "N")]
    size: Option<usize>,

    /// Canvas width and height in pixels
    #[arg(long, value_name = "PX")]
    width: Option<u32>,

    /// Color of the grid dots
    #[arg(long, value_name = "COLOR")]
    dot_color: Option<String>,

    /// Watch the edge file for changes and redraw
    #[arg(short, long)]
    watch: bool,

    /// Draw the edges as soon as the viewer opens
    #[arg(short, long)]
    draw: bool,

    /// Validate the edge list, print diagnostics and exit
    #[arg(long)]
    check: bool,

    /// Print scaled edges (or the validation report) as JSON and exit
    #[arg(long)]
    json: bool,

    /// Write the drawing to an SVG file and exit
    #[arg(long, value_name = "PATH")]
    export: Option<PathBuf>,

    /// Write debug logs to a file
    #[arg(long, value_name = "PATH")]
    debug_log: Option<PathBuf>,

    /// Save current command-line flags as defaults
    #[arg(long)]
    save: bool,

    /// Clear saved defaults
    #[arg(long)]
    clear: bool,
}

impl Cli {
    const fn is_batch(&self) -> bool {
        self.check || self.json || self.export.is_some()
    }

    /// The flags that can be saved as defaults.
    fn config_flags(&self) -> ConfigFlags {
        ConfigFlags {
            watch: self.watch,
            size: self.size,
            width: self.width,
            dot_color: self.dot_color.clone(),
            debug_log: self.debug_log.clone(),
        }
    }
}

fn read_input(file: Option<&Path>) -> Result<String> {
    match file {
        Some(path) if path != Path::new("-") => read_edges(path),
        _ => {
            let mut text = String::new();
            std::io::stdin()
                .read_to_string(&mut text)
                .context("Failed to read edge list from stdin")?;
            Ok(text)
        }
    }
}

fn run_batch(cli: &Cli, grid: &Grid, dot_color: &str) -> Result<ExitCode> {
    let text = read_input(cli.file.as_deref())?;
    let report = grid.validate(&text);

    if !report.is_valid() {
        if cli.json {
            println!("{}", serde_json::to_string_pretty(&report)?);
        } else {
            let alert = report
                .alert_message()
                .unwrap_or_else(|| "Nothing to draw.\n".to_string());
            eprint!("{alert}");
        }
        return Ok(ExitCode::FAILURE);
    }

    let edges = grid.edges(&text);
    if let Some(path) = &cli.export {
        export::write_svg(path, grid, dot_color, &edges)?;
    }
    if cli.json {
        println!("{}", serde_json::to_string_pretty(&edges)?);
    } else if cli.check {
        println!(
            "ok: {} edges fit a {1}x{1} grid",
            edges.len(),
            grid.size()
        );
    }
    Ok(ExitCode::SUCCESS)
}

fn main() -> Result<ExitCode> {
    let cli = Cli::parse();
    let global_path = global_config_path();
    let local_path = local_override_path();
    let cli_flags = cli.config_flags();

    if cli.clear {
        clear_config_flags(&global_path)?;
    }
    if cli.save {
        save_config_flags(&global_path, &cli_flags)?;
    }

    let file_flags = if cli.clear {
        ConfigFlags::default()
    } else {
        let global_flags = load_config_flags(&global_path)?;
        let local_flags = load_config_flags(&local_path)?;
        global_flags.union(&local_flags)
    };
    let effective = file_flags.union(&cli_flags);

    let debug_log = effective
        .debug_log
        .clone()
        .or_else(|| std::env::var_os(logging::DEBUG_LOG_ENV).map(PathBuf::from));
    logging::init(debug_log.as_deref())?;

    let grid = Grid::from_flags(effective.size, effective.width, !cli.is_batch())?;
    let dot_color = effective
        .dot_color
        .clone()
        .unwrap_or_else(|| DOT_COLORS[0].to_string());
    tracing::debug!(?effective, "effective flags");

    if cli.is_batch() {
        return run_batch(&cli, &grid, &dot_color);
    }

    let Some(file) = cli.file.clone() else {
        if cli.save || cli.clear {
            return Ok(ExitCode::SUCCESS);
        }
        anyhow::bail!("No edge file given (use --check, --json or --export to read stdin)");
    };
    if !file.exists() {
        anyhow::bail!("File not found: {}", file.display());
    }

    let mut app = App::new(file)
        .with_grid(grid)
        .with_dot_color(Some(dot_color))
        .with_watch(effective.watch)
        .with_draw_on_start(cli.draw)
        .with_config_paths(
            Some(global_path),
            local_path.exists().then_some(local_path),
        );

    app.run().context("Application error")?;
    Ok(ExitCode::SUCCESS)
}
