use std::path::PathBuf;

use anyhow::{Context, bail};
use clap::Parser;
use log::{LevelFilter, info, warn};

use nestlabel::config::RenderConfig;
use nestlabel::font::FontTable;
use nestlabel::logging::init_logger;
use nestlabel::problem::problem_from_file;
use nestlabel::render::{render_bins, write_documents};
use nestlabel::results::{PlacementSource, ResultDirectory};

/// Command line arguments for nestlabel
#[derive(Parser, Debug)]
#[command(author, version, about)]
pub struct CliArgs {
    /// Problem file with the bin size and the original piece geometry
    #[arg(long, value_name = "FILE")]
    pub problem: PathBuf,

    /// Directory holding the Bin-<n>.txt placement files
    #[arg(long, value_name = "DIR", default_value = ".")]
    pub results_dir: PathBuf,

    /// Directory the Bin-<n>.svg drawings are written to
    #[arg(long, value_name = "DIR", default_value = ".")]
    pub output_dir: PathBuf,

    /// JSON render configuration
    #[arg(long, value_name = "FILE")]
    pub config_file: Option<PathBuf>,

    /// Erosion step of the label placement search (overrides the config file)
    #[arg(long, value_name = "STEP")]
    pub erosion_step: Option<f64>,

    /// Draw outlines only
    #[arg(long, default_value_t = false)]
    pub no_labels: bool,

    #[arg(
        long,
        value_name = "[off, error, warn, info, debug, trace]",
        default_value = "info"
    )]
    pub log_level: LevelFilter,
}

/// Parsed configuration returned by the CLI
#[derive(Debug)]
pub struct Config {
    pub problem: PathBuf,
    pub results_dir: PathBuf,
    pub output_dir: PathBuf,
    pub config_file: Option<PathBuf>,
    pub erosion_step: Option<f64>,
    pub labels: bool,
    pub log_level: LevelFilter,
}

impl From<CliArgs> for Config {
    fn from(args: CliArgs) -> Self {
        Self {
            problem: args.problem,
            results_dir: args.results_dir,
            output_dir: args.output_dir,
            config_file: args.config_file,
            erosion_step: args.erosion_step,
            labels: !args.no_labels,
            log_level: args.log_level,
        }
    }
}

impl Config {
    fn render_config(&self) -> anyhow::Result<RenderConfig> {
        let mut render = match &self.config_file {
            Some(path) => RenderConfig::from_file(path)?,
            None => RenderConfig::default(),
        };
        if let Some(step) = self.erosion_step {
            render.erosion_step = step;
        }
        render.labels &= self.labels;
        Ok(render)
    }
}

/// Parse command line arguments into a configuration struct
pub fn parse_config() -> Config {
    let args = CliArgs::parse();
    args.into()
}

fn main() -> anyhow::Result<()> {
    let cfg = parse_config();
    init_logger(cfg.log_level)?;
    let render_cfg = cfg.render_config()?;
    info!("render config: {render_cfg:?}");

    let problem = problem_from_file(&cfg.problem)?;
    info!(
        "loaded {} piece(s) from {}, bin {}x{}",
        problem.pieces().len(),
        cfg.problem.display(),
        problem.bin_width,
        problem.bin_height
    );

    let source = ResultDirectory::new(&cfg.results_dir);
    let bins = source.load_bins()?;
    if bins.is_empty() {
        bail!(
            "no packing results found: no usable Bin-<n>.txt files in {}",
            cfg.results_dir.display()
        );
    }

    let rendered = render_bins(&bins, &problem, FontTable::romans(), &render_cfg)?;
    let skipped: usize = rendered.iter().map(|b| b.diagnostics.len()).sum();
    if skipped > 0 {
        warn!("{skipped} piece(s) were drawn without a label or skipped");
    }
    let written = write_documents(&cfg.output_dir, &rendered)
        .context("failed to write drawings")?;
    println!(
        "Rendered {} bin(s) to {}",
        written.len(),
        cfg.output_dir.display()
    );
    Ok(())
}
