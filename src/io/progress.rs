//! Progress display for batch map generation

use crate::io::configuration::MAX_INDIVIDUAL_PROGRESS_BARS;
use indicatif::{MultiProgress, ProgressBar, ProgressStyle};
use std::path::Path;
use std::sync::LazyLock;
use std::time::Duration;

/// Coordinates progress display for a batch of maps
///
/// Small batches get one line per map; larger batches get a single counter
/// so the terminal is not flooded.
pub struct ProgressManager {
    multi_progress: MultiProgress,
    batch_bar: Option<ProgressBar>,
    map_bars: Vec<ProgressBar>,
    map_count: usize,
    completed: usize,
}

impl Default for ProgressManager {
    fn default() -> Self {
        Self::new()
    }
}

static MAP_STYLE: LazyLock<ProgressStyle> = LazyLock::new(|| {
    ProgressStyle::default_spinner()
        .template("{spinner} {prefix} {msg}")
        .unwrap_or_else(|_| ProgressStyle::default_spinner())
});

static BATCH_STYLE: LazyLock<ProgressStyle> = LazyLock::new(|| {
    ProgressStyle::default_bar()
        .template("[{elapsed_precise}] Maps: [{bar:40.cyan/blue}] {pos}/{len}")
        .unwrap_or_else(|_| ProgressStyle::default_bar())
});

impl ProgressManager {
    /// Create a new progress manager
    pub fn new() -> Self {
        Self {
            multi_progress: MultiProgress::new(),
            batch_bar: None,
            map_bars: Vec::new(),
            map_count: 0,
            completed: 0,
        }
    }

    /// Set up bars for `map_count` maps
    pub fn initialize(&mut self, map_count: usize) {
        self.map_count = map_count;
        self.completed = 0;
        self.batch_bar = None;
        self.map_bars.clear();

        if map_count > MAX_INDIVIDUAL_PROGRESS_BARS {
            let batch_bar = ProgressBar::new(map_count as u64);
            batch_bar.set_style(BATCH_STYLE.clone());
            self.batch_bar = Some(self.multi_progress.add(batch_bar));
            return;
        }

        for _ in 0..map_count {
            let pb = ProgressBar::new_spinner();
            pb.set_style(MAP_STYLE.clone());
            self.map_bars.push(self.multi_progress.add(pb));
        }
    }

    /// Show that map `index` is being generated into `path`
    pub fn start_map(&self, index: usize, path: &Path) {
        if let Some(bar) = self.map_bars.get(index) {
            bar.set_prefix(path.display().to_string());
            bar.set_message("generating");
        }
    }

    /// Mark map `index` as written
    pub fn complete_map(&mut self, index: usize, cells: usize, elapsed: Duration) {
        self.completed += 1;
        if let Some(ref batch_bar) = self.batch_bar {
            batch_bar.inc(1);
        }
        if let Some(bar) = self.map_bars.get(index) {
            bar.finish_with_message(format!("✓ {cells} corridor cells in {elapsed:.1?}"));
        }
    }

    /// Number of maps completed since the last `initialize`
    pub const fn completed(&self) -> usize {
        self.completed
    }

    /// Number of maps expected since the last `initialize`
    pub const fn map_count(&self) -> usize {
        self.map_count
    }

    /// Clean up all progress displays
    pub fn finish(&self) {
        if let Some(ref batch_bar) = self.batch_bar {
            batch_bar.finish_with_message("All maps written");
        }
        let _ = self.multi_progress.clear();
    }
}
