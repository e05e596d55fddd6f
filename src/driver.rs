//! Reference diagram job and the single-call driver.
//!
//! A [`DiagramJob`] bundles three element lists with labels, colors, the bold
//! flag and a save path. [`run`] hands it to a [`Renderer`] in exactly one
//! `plot_venn3` call and adds no handling of its own: renderer errors reach
//! the caller unchanged.

use std::path::{Path, PathBuf};

use log::debug;
use serde::{Deserialize, Serialize};

use crate::{DisplayOptions, RenderConfig, Renderer, Result, VennSets};

pub const REFERENCE_SET1: [&str; 5] = ["A", "B", "C", "D", "E"];
pub const REFERENCE_SET2: [&str; 4] = ["C", "D", "F", "G"];
pub const REFERENCE_SET3: [&str; 6] = ["B", "D", "G", "H", "I", "J"];
pub const REFERENCE_LABELS: [&str; 3] = ["Set1", "Set2", "Set3"];
pub const REFERENCE_COLORS: [&str; 3] = ["#E41A1C", "#377EB8", "#FFAB52"];
pub const REFERENCE_SAVE_PATH: &str = "venn_final.png";

/// One diagram to draw, as loaded from JSON or built in code.
///
/// Every field is optional in JSON and falls back to the reference job.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct DiagramJob {
    pub set1: Vec<String>,
    pub set2: Vec<String>,
    pub set3: Vec<String>,
    pub labels: Vec<String>,
    pub colors: Vec<String>,
    pub bold_labels: bool,
    pub save_path: PathBuf,
    /// Renderer overrides
    pub render: RenderConfig,
}

fn owned(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

impl Default for DiagramJob {
    fn default() -> Self {
        Self {
            set1: owned(&REFERENCE_SET1),
            set2: owned(&REFERENCE_SET2),
            set3: owned(&REFERENCE_SET3),
            labels: owned(&REFERENCE_LABELS),
            colors: owned(&REFERENCE_COLORS),
            bold_labels: true,
            save_path: PathBuf::from(REFERENCE_SAVE_PATH),
            render: RenderConfig::default(),
        }
    }
}

impl DiagramJob {
    pub fn from_json_str(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self> {
        let data = std::fs::read_to_string(path)?;
        Self::from_json_str(&data)
    }

    pub fn sets(&self) -> VennSets {
        VennSets::from_lists(&self.set1, &self.set2, &self.set3)
    }

    /// Display options; fails unless there are exactly three labels and colors.
    pub fn options(&self) -> Result<DisplayOptions> {
        DisplayOptions::from_lists(
            self.labels.clone(),
            self.colors.clone(),
            self.bold_labels,
            self.save_path.clone(),
        )
    }
}

/// The literal reference job: three sets, labels, colors, bold labels and
/// `venn_final.png`.
pub fn reference_job() -> DiagramJob {
    DiagramJob::default()
}

/// Draw `job` with `renderer`. Performs exactly one `plot_venn3` call.
pub fn run<R: Renderer>(renderer: &R, job: &DiagramJob) -> Result<PathBuf> {
    let sets = job.sets();
    let options = job.options()?;
    debug!(
        "plotting {} + {} + {} elements to {}",
        sets.first().len(),
        sets.second().len(),
        sets.third().len(),
        options.save_path.display()
    );
    renderer.plot_venn3(&sets, &options)
}
