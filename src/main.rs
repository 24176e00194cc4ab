//! Jadwal CLI
//!
//! Terminal front end for the schedule backend:
//! - List, add and delete entries
//! - Export the list as HTML
//! - Run the spark field headless
//! - Generate a default config file

use clap::{Parser, Subcommand};
use std::cell::RefCell;
use std::path::PathBuf;

use jadwal::config::{generate_default_config, Config, LoggingConfig};
use jadwal::schedule::{
    HttpScheduleApi, ListView, ScheduleController, ScheduleView, SubmitOutcome,
    PLACEHOLDER_HINT, PLACEHOLDER_TITLE,
};
use jadwal::{render_list_html, SparkRenderer};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Frames per second assumed by the headless spark simulation
const SIM_FPS: u32 = 60;

#[derive(Parser)]
#[command(name = "jadwal")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Personal schedule list from the terminal")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Schedule server URL (overrides config)
    #[arg(long, global = true)]
    pub server: Option<String>,

    /// Config file (default: ~/.config/jadwal/config.toml or ./config.toml)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Show the schedule
    List {
        /// Print the list as escaped HTML markup
        #[arg(long)]
        html: bool,
    },

    /// Add entries from free text, e.g. "rapat besok jam 9"
    Add {
        /// Free text describing the entry
        #[arg(required = true)]
        text: Vec<String>,
    },

    /// Delete an entry by id
    Delete {
        id: i64,
    },

    /// Run the spark field without a display and report particle counts
    Sparks {
        /// Number of frames to simulate
        #[arg(short, long, default_value = "600")]
        ticks: u32,
        /// Viewport width
        #[arg(long, default_value = "1280")]
        width: f64,
        /// Viewport height
        #[arg(long, default_value = "720")]
        height: f64,
    },

    /// Generate default config file
    Config {
        /// Output path (default: stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let mut config = match &cli.config {
        Some(path) => Config::load_with_env(path)?,
        None => Config::load_default(),
    };
    if let Some(server) = cli.server {
        config.server.base_url = server;
    }

    init_logging(&config.logging);

    match cli.command {
        Commands::List { html } => {
            let controller = controller(&config, String::new(), html)?;
            controller.load().await?;
        }

        Commands::Add { text } => {
            let controller = controller(&config, text.join(" "), false)?;
            match controller.submit().await? {
                SubmitOutcome::Added => println!("Added."),
                SubmitOutcome::EmptyInput | SubmitOutcome::Rejected(_) => std::process::exit(1),
            }
        }

        Commands::Delete { id } => {
            let controller = controller(&config, String::new(), false)?;
            controller.remove(id).await?;
        }

        Commands::Sparks {
            ticks,
            width,
            height,
        } => {
            run_sparks(&config, ticks, width, height)?;
        }

        Commands::Config { output } => {
            let content = generate_default_config();
            match output {
                Some(path) => {
                    std::fs::write(&path, content)?;
                    println!("Config written to {}", path.display());
                }
                None => print!("{}", content),
            }
        }
    }

    Ok(())
}

fn init_logging(logging: &LoggingConfig) {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(format!("jadwal={}", logging.level)));

    let registry = tracing_subscriber::registry().with(filter);
    if logging.format == "json" {
        registry
            .with(tracing_subscriber::fmt::layer().json().with_writer(std::io::stderr))
            .init();
    } else {
        registry
            .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
            .init();
    }
}

fn controller(
    config: &Config,
    input: String,
    html: bool,
) -> anyhow::Result<ScheduleController<HttpScheduleApi, TerminalView, fn()>> {
    let api = HttpScheduleApi::new(&config.server)?;
    tracing::debug!(server = api.base_url(), "Using schedule server");

    let view = TerminalView {
        input: RefCell::new(input),
        html,
    };

    // No spark field in the terminal
    let fx: fn() = || {};
    Ok(ScheduleController::new(api, view, fx))
}

/// Prints the list to stdout and alerts to stderr
struct TerminalView {
    input: RefCell<String>,
    html: bool,
}

impl ScheduleView for TerminalView {
    fn has_list(&self) -> bool {
        true
    }

    fn render(&self, list: ListView) {
        if self.html {
            println!("{}", render_list_html(&list));
            return;
        }

        match list {
            ListView::Placeholder => {
                println!("{}", PLACEHOLDER_TITLE);
                println!("  {}", PLACEHOLDER_HINT);
            }
            ListView::Rows(rows) => {
                let width = rows.iter().map(|r| r.id.to_string().len()).max().unwrap_or(1);
                for row in rows {
                    println!("{:>width$}  {}  ({})", row.id, row.title, row.subtitle, width = width);
                }
            }
        }
    }

    fn input_text(&self) -> String {
        self.input.borrow().clone()
    }

    fn clear_input(&self) {
        self.input.borrow_mut().clear();
    }

    fn alert(&self, message: &str) {
        eprintln!("{}", message);
    }
}

fn run_sparks(config: &Config, ticks: u32, width: f64, height: f64) -> anyhow::Result<()> {
    anyhow::ensure!(
        width.is_finite() && width >= 0.0 && height.is_finite() && height >= 0.0,
        "viewport must be finite and non-negative, got {}x{}",
        width,
        height
    );
    config.fx.validate().map_err(anyhow::Error::msg)?;

    let mut renderer = SparkRenderer::new(config.fx.clone(), rand::rng());
    renderer.start(width, height);

    let frames_per_burst = frames_per_burst(config.fx.spawn_interval_ms);
    let mut peak = renderer.field().len();

    println!("frame  live");
    for frame in 1..=ticks {
        renderer.tick();
        if u64::from(frame) % frames_per_burst == 0 {
            renderer.on_spawn_timer();
            println!("{:>5}  {}", frame, renderer.field().len());
        }
        peak = peak.max(renderer.field().len());
    }

    println!(
        "peak {} live (cap {}), {} alive after {} frames",
        peak,
        config.fx.max_particles,
        renderer.field().len(),
        ticks
    );

    Ok(())
}

/// Simulated frames between timer bursts, at least one
fn frames_per_burst(interval_ms: u32) -> u64 {
    (u64::from(interval_ms) * u64::from(SIM_FPS) / 1000).max(1)
}
