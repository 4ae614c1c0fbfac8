use anyhow::{bail, Context as _, Result};
use outfitmatch::config::Config;
use outfitmatch::names::color_by_name;
use outfitmatch::store::WardrobeStore;
use outfitmatch::{Category, Color, OutfitSearch, Wardrobe};
use std::path::{Path, PathBuf};

use crate::OutputArgs;

/// Settings resolved once per invocation
pub struct Context {
    pub config: Config,
    wardrobe_path: PathBuf,
    snapshot: Option<PathBuf>,
}

impl Context {
    pub fn new(config: Config, wardrobe: Option<PathBuf>, snapshot: Option<PathBuf>) -> Self {
        let wardrobe_path = wardrobe.unwrap_or_else(|| config.wardrobe_path());
        Self {
            config,
            wardrobe_path,
            snapshot,
        }
    }

    pub fn wardrobe_path(&self) -> &Path {
        &self.wardrobe_path
    }

    pub fn search(&self) -> OutfitSearch {
        OutfitSearch::new(self.config.thresholds())
    }

    /// Writable store; snapshots are read-only.
    pub fn store(&self) -> Result<WardrobeStore> {
        if let Some(snapshot) = &self.snapshot {
            bail!(
                "{} is a read-only snapshot; drop --snapshot to edit the wardrobe",
                snapshot.display()
            );
        }
        WardrobeStore::load(&self.wardrobe_path)
    }

    /// Wardrobe to search, from the snapshot when one was given.
    pub fn wardrobe(&self) -> Result<Wardrobe> {
        match &self.snapshot {
            Some(path) => {
                let json = std::fs::read_to_string(path)
                    .with_context(|| format!("Failed to read snapshot {}", path.display()))?;
                Ok(Wardrobe::from_json(&json)?)
            }
            None => Ok(WardrobeStore::load(&self.wardrobe_path)?.snapshot()),
        }
    }

    pub fn limit(&self, output: OutputArgs) -> usize {
        output.limit.unwrap_or(self.config.display.limit)
    }

    pub fn show_names(&self) -> bool {
        self.config.display.show_names
    }

    /// Refuse requests whose product of slot sizes is over the configured cap.
    pub fn check_budget(&self, counts: impl IntoIterator<Item = usize>) -> Result<()> {
        let candidates = counts
            .into_iter()
            .fold(1usize, |acc, count| acc.saturating_mul(count));
        let max = self.config.search.max_combinations;
        if candidates > max {
            bail!(
                "{candidates} combinations exceed the limit of {max} (search.max_combinations)"
            );
        }
        Ok(())
    }
}

/// Accepts everything `Color` parses plus CSS color names.
pub fn parse_color(s: &str) -> Result<Color> {
    match s.parse::<Color>() {
        Ok(color) => Ok(color),
        Err(e) => color_by_name(s).ok_or_else(|| anyhow::Error::from(e)),
    }
}

pub fn parse_category(s: &str) -> Result<Category> {
    Ok(s.parse::<Category>()?)
}
