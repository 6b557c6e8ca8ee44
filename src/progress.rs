use indicatif::{ProgressBar, ProgressStyle};

use crate::engine::ProgressEvent;

/// Renders ProgressEvents as a terminal bar. A disabled reporter
/// swallows events, so the engine never knows whether a bar exists.
pub struct ProgressReporter {
    bar: Option<ProgressBar>,
}

impl ProgressReporter {
    pub fn new(enabled: bool) -> Self {
        if !enabled {
            return Self { bar: None };
        }
        let style = ProgressStyle::default_bar()
            .template("{spinner:.green} [{elapsed_precise}] {bar:40.cyan/blue} {pos}/{len} files")
            .unwrap()
            .progress_chars("=>-");
        let bar = ProgressBar::new(0);
        bar.set_style(style);
        Self { bar: Some(bar) }
    }

    pub fn update(&self, event: ProgressEvent) {
        if let Some(bar) = &self.bar {
            if bar.length() != Some(event.total as u64) {
                bar.set_length(event.total as u64);
            }
            bar.set_position(event.completed as u64);
        }
    }

    pub fn finish(&self) {
        if let Some(bar) = &self.bar {
            bar.finish_and_clear();
        }
    }
}
