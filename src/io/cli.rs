//! Command-line interface for generating and surveying dungeons

use crate::algorithm::generator::{Dungeon, DungeonGenerator, GeneratorConfig};
use crate::algorithm::random::{ParkMiller, StdRandom};
use crate::analysis::coverage::{CoverageReport, SurveySummary};
use crate::io::configuration::{DEFAULT_SEED, DEFAULT_SURVEY_SEEDS, MapSize};
use crate::io::error::{Result, output_error};
use crate::io::preview::{render_cells, render_tiles};
use crate::io::progress::SurveyProgress;
use clap::{Parser, ValueEnum};
use std::io::Write;

/// Pseudo-random generator driving layout decisions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum SourceKind {
    /// Portable Lehmer generator, stable across versions
    #[default]
    ParkMiller,
    /// The `rand` crate's standard generator
    Std,
}

#[derive(Parser)]
#[command(name = "dungeon-cells")]
#[command(
    author,
    version,
    about = "Grow a macro-cell dungeon layout and print it as text"
)]
/// Command-line arguments for the dungeon generator
pub struct Cli {
    /// Preset map size
    #[arg(long, value_enum, default_value_t = MapSize::Small)]
    pub size: MapSize,

    /// Width in cells (implies square if height not specified)
    #[arg(short = 'w', long)]
    pub width: Option<usize>,

    /// Height in cells
    #[arg(short = 'H', long)]
    pub height: Option<usize>,

    /// Random seed for reproducible generation
    #[arg(short, long, default_value_t = DEFAULT_SEED)]
    pub seed: u32,

    /// Random source implementation
    #[arg(long, value_enum, default_value_t = SourceKind::ParkMiller)]
    pub source: SourceKind,

    /// Print the abstract cell grid instead of tiles
    #[arg(long)]
    pub cells: bool,

    /// Skip entry, exit, boss and loot placement
    #[arg(long)]
    pub no_markers: bool,

    /// Generate consecutive seeds and print coverage statistics
    /// (100 seeds when no count is given)
    #[arg(long, value_name = "SEEDS", num_args = 0..=1)]
    pub survey: Option<Option<u32>>,

    /// Suppress progress output
    #[arg(short, long)]
    pub quiet: bool,
}

impl Cli {
    /// Cell grid dimensions after applying width/height overrides
    pub fn dimensions(&self) -> (usize, usize) {
        match (self.width, self.height) {
            (Some(width), Some(height)) => (width, height),
            (Some(width), None) => (width, width),
            (None, Some(height)) => (self.size.cells(), height),
            (None, None) => (self.size.cells(), self.size.cells()),
        }
    }

    /// Number of seeds to survey, `None` for a single dungeon
    pub fn survey_seeds(&self) -> Option<u32> {
        self.survey
            .map(|seeds| seeds.unwrap_or(DEFAULT_SURVEY_SEEDS))
    }

    /// Generator configuration for one seed
    pub fn config_for(&self, seed: u32) -> GeneratorConfig {
        let (width, height) = self.dimensions();
        GeneratorConfig::new(width, height, seed).with_markers(!self.no_markers)
    }
}

/// Generate a dungeon with the chosen source
///
/// # Errors
///
/// Returns an error if the configuration is invalid or the source misbehaves.
pub fn generate_with(config: GeneratorConfig, source: SourceKind) -> Result<Dungeon> {
    match source {
        SourceKind::ParkMiller => {
            DungeonGenerator::with_source(config, ParkMiller::new(config.seed)).generate()
        }
        SourceKind::Std => {
            DungeonGenerator::with_source(config, StdRandom::new(config.seed)).generate()
        }
    }
}

/// Runs the generation requested on the command line
pub struct CommandRunner {
    cli: Cli,
}

impl CommandRunner {
    /// Create a runner for the parsed arguments
    pub const fn new(cli: Cli) -> Self {
        Self { cli }
    }

    /// Generate and write output
    ///
    /// # Errors
    ///
    /// Returns an error if generation fails or output cannot be written
    pub fn run<W: Write + ?Sized>(&self, out: &mut W) -> Result<()> {
        match self.cli.survey_seeds() {
            Some(seeds) => self.survey(seeds, out),
            None => self.single(out),
        }
    }

    fn single<W: Write + ?Sized>(&self, out: &mut W) -> Result<()> {
        let config = self.cli.config_for(self.cli.seed);
        let dungeon = generate_with(config, self.cli.source)?;

        log::info!(
            "generated {}x{} cells with seed {} ({:?})",
            config.width,
            config.height,
            config.seed,
            self.cli.source
        );

        if self.cli.cells {
            render_cells(&dungeon.cells, out)
        } else {
            render_tiles(&dungeon.tiles, out)
        }
    }

    fn survey<W: Write + ?Sized>(&self, seeds: u32, out: &mut W) -> Result<()> {
        let progress = SurveyProgress::new(u64::from(seeds), !self.cli.quiet);
        let mut summary = SurveySummary::new();

        for offset in 0..seeds {
            let seed = self.cli.seed.wrapping_add(offset);
            let dungeon = generate_with(self.cli.config_for(seed), self.cli.source)?;
            summary.record(&CoverageReport::from_dungeon(&dungeon));
            progress.advance(seed);
        }
        progress.finish();

        log::info!("survey finished after {} seeds", progress.position());
        writeln!(out, "{summary}").map_err(|e| output_error("write survey", e))
    }
}
