use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use indicatif::{ProgressBar, ProgressStyle};
use rayon::prelude::*;
use serde::Serialize;
use tracing::{info, warn};

use crate::parser::{self, Field, ProfileRecord};

#[derive(Debug, Clone, Serialize)]
pub struct BatchItem {
    pub path: PathBuf,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub record: Option<ProfileRecord>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

#[derive(Debug, Default, PartialEq, Eq)]
pub struct BatchStats {
    pub files: usize,
    pub failed: usize,
    pub names: usize,
    pub titles: usize,
    pub companies: usize,
    pub colleges: usize,
    pub grad_years: usize,
}

impl BatchStats {
    pub fn from_items(items: &[BatchItem]) -> Self {
        let mut stats = BatchStats {
            files: items.len(),
            ..Default::default()
        };
        for item in items {
            let Some(record) = &item.record else {
                stats.failed += 1;
                continue;
            };
            let count = |f: Field| usize::from(record.is_captured(f));
            stats.names += count(Field::Name);
            stats.titles += count(Field::Title);
            stats.companies += count(Field::Company);
            stats.colleges += count(Field::College);
            stats.grad_years += count(Field::GradYear);
        }
        stats
    }

    pub fn print(&self) {
        println!(
            "Parsed {} files ({} failed): {} names, {} titles, {} companies, {} colleges, {} grad years.",
            self.files,
            self.failed,
            self.names,
            self.titles,
            self.companies,
            self.colleges,
            self.grad_years,
        );
    }
}

/// Expand directories to the `.txt` files directly inside them, sorted.
pub fn collect_inputs(paths: &[PathBuf]) -> Result<Vec<PathBuf>> {
    let mut inputs = Vec::new();
    for path in paths {
        if path.is_dir() {
            let mut found: Vec<PathBuf> = std::fs::read_dir(path)
                .with_context(|| format!("reading directory {}", path.display()))?
                .filter_map(|entry| entry.ok().map(|e| e.path()))
                .filter(|p| p.is_file() && p.extension().is_some_and(|ext| ext == "txt"))
                .collect();
            found.sort();
            inputs.extend(found);
        } else {
            inputs.push(path.clone());
        }
    }
    Ok(inputs)
}

fn process_file(path: &Path, current_year: i32) -> BatchItem {
    match std::fs::read_to_string(path) {
        Ok(text) => BatchItem {
            path: path.to_path_buf(),
            record: Some(parser::extract_with_year(&text, current_year)),
            error: None,
        },
        Err(e) => {
            warn!("Failed to read {}: {}", path.display(), e);
            BatchItem {
                path: path.to_path_buf(),
                record: None,
                error: Some(e.to_string()),
            }
        }
    }
}

/// Extract every input in parallel, `chunk_size` files at a time. Unreadable
/// files are reported per item and do not stop the run.
pub fn run(inputs: &[PathBuf], current_year: i32, chunk_size: usize, progress: bool) -> Vec<BatchItem> {
    let pb = if progress {
        let pb = ProgressBar::new(inputs.len() as u64);
        if let Ok(style) = ProgressStyle::default_bar()
            .template("{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} ({per_sec})")
        {
            pb.set_style(style.progress_chars("#>-"));
        }
        pb
    } else {
        ProgressBar::hidden()
    };

    let mut items = Vec::with_capacity(inputs.len());
    for chunk in inputs.chunks(chunk_size.max(1)) {
        let results: Vec<BatchItem> = chunk
            .par_iter()
            .map(|path| process_file(path, current_year))
            .collect();
        items.extend(results);
        pb.inc(chunk.len() as u64);
    }
    pb.finish_and_clear();

    info!("Extracted {} files", items.len());
    items
}
