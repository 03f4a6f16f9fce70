//! Coverage statistics for generated dungeons and seed surveys

use std::fmt;

use crate::algorithm::generator::Dungeon;
use crate::spatial::{CellType, MaterialType};

/// Per-dungeon structural summary
#[derive(Debug, Clone, PartialEq)]
pub struct CoverageReport {
    /// Grid locations holding a generated cell
    pub occupied_cells: usize,
    /// All grid locations
    pub total_cells: usize,
    /// Generated cells per archetype, in catalog order
    pub type_counts: [usize; CellType::CATALOG.len()],
    /// Cells with exactly one opening
    pub dead_ends: usize,
    /// Floor tiles in the rasterized map
    pub floor_tiles: usize,
}

impl CoverageReport {
    /// Summarize a generated dungeon
    pub fn from_dungeon(dungeon: &Dungeon) -> Self {
        let mut type_counts = [0; CellType::CATALOG.len()];
        let mut dead_ends = 0;

        for (_, cell) in dungeon.cells.iter() {
            if let Some(slot) = cell
                .cell_type
                .catalog_index()
                .and_then(|index| type_counts.get_mut(index))
            {
                *slot += 1;
            }
            if !cell.is_vacant() && cell.openings.len() == 1 {
                dead_ends += 1;
            }
        }

        Self {
            occupied_cells: dungeon.cells.occupied_count(),
            total_cells: dungeon.cells.len(),
            type_counts,
            dead_ends,
            floor_tiles: dungeon.tiles.count_material(MaterialType::Floor),
        }
    }

    /// Fraction of the grid reached by growth
    pub fn coverage(&self) -> f64 {
        if self.total_cells == 0 {
            return 0.0;
        }
        self.occupied_cells as f64 / self.total_cells as f64
    }

    /// Generated cells of one archetype
    pub fn count_of(&self, cell_type: CellType) -> usize {
        cell_type
            .catalog_index()
            .and_then(|index| self.type_counts.get(index))
            .copied()
            .unwrap_or(0)
    }
}

/// Aggregate of coverage over many seeds
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SurveySummary {
    /// Dungeons recorded
    pub samples: usize,
    /// Lowest coverage seen
    pub min_coverage: f64,
    /// Highest coverage seen
    pub max_coverage: f64,
    coverage_sum: f64,
    dead_end_sum: usize,
    /// Dungeons in which some location stayed vacant
    pub incomplete: usize,
}

impl SurveySummary {
    /// Create an empty summary
    pub fn new() -> Self {
        Self::default()
    }

    /// Fold one report into the summary
    pub fn record(&mut self, report: &CoverageReport) {
        let coverage = report.coverage();
        if self.samples == 0 {
            self.min_coverage = coverage;
            self.max_coverage = coverage;
        } else {
            self.min_coverage = self.min_coverage.min(coverage);
            self.max_coverage = self.max_coverage.max(coverage);
        }
        self.samples += 1;
        self.coverage_sum += coverage;
        self.dead_end_sum += report.dead_ends;
        if report.occupied_cells < report.total_cells {
            self.incomplete += 1;
        }
    }

    /// Mean coverage across samples
    pub fn mean_coverage(&self) -> f64 {
        if self.samples == 0 {
            return 0.0;
        }
        self.coverage_sum / self.samples as f64
    }

    /// Mean dead ends per dungeon
    pub fn mean_dead_ends(&self) -> f64 {
        if self.samples == 0 {
            return 0.0;
        }
        self.dead_end_sum as f64 / self.samples as f64
    }
}

impl fmt::Display for SurveySummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} dungeons: coverage mean {:.3} (min {:.3}, max {:.3}), {} incomplete, {:.2} dead ends each",
            self.samples,
            self.mean_coverage(),
            self.min_coverage,
            self.max_coverage,
            self.incomplete,
            self.mean_dead_ends()
        )
    }
}
