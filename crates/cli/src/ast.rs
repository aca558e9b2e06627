use crate::language::SourceLanguage;
use astmill_core::Ast;
use astmill_core::compress::simplify;
use astmill_core::config::{MiningConfig, Normalization};
use astmill_core::convert::{convert_source, parse_source};
use astmill_core::storage::{JsonAstStorage, LabeledResult, Storage};
use ignore::WalkBuilder;
use rayon::prelude::*;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

/// Files parsed in parallel before their trees are written and dropped.
const BATCH_SIZE: usize = 256;

#[derive(Debug, Default, PartialEq, Eq)]
pub struct MiningStats {
    pub stored: usize,
    pub skipped: usize,
}

pub fn run(path: &Path, config: &MiningConfig) -> Result<(), Box<dyn std::error::Error>> {
    info!("Mining ASTs under {}...", path.display());
    let stats = mine(path, config)?;
    info!(
        "Stored {} trees in {} ({} files skipped)",
        stats.stored,
        config
            .storage
            .output_dir
            .join(config.holdout.dir_name())
            .display(),
        stats.skipped
    );
    Ok(())
}

pub fn mine(path: &Path, config: &MiningConfig) -> astmill_core::Result<MiningStats> {
    let sources = collect_sources(path);
    debug!("found {} source files", sources.len());

    let mut storage = JsonAstStorage::new(&config.storage)?;
    let mut stats = MiningStats::default();

    for batch in sources.chunks(BATCH_SIZE) {
        // Each tree is built and owned by a single worker.
        let parsed: Vec<_> = batch
            .par_iter()
            .map(|(file, lang)| (file, parse_file(file, *lang, config.normalization)))
            .collect();

        for (file, result) in parsed {
            match result {
                Ok(ast) => {
                    let labeled = LabeledResult {
                        root: ast.root(),
                        label: label_for(file),
                        file_path: file.display().to_string(),
                    };
                    storage.store(&labeled, config.holdout)?;
                    stats.stored += 1;
                }
                Err(err) => {
                    warn!("skipping {}: {}", file.display(), err);
                    stats.skipped += 1;
                }
            }
        }
    }

    storage.close()?;
    Ok(stats)
}

fn collect_sources(root: &Path) -> Vec<(PathBuf, SourceLanguage)> {
    let mut sources: Vec<_> = WalkBuilder::new(root)
        .build()
        .filter_map(|entry| {
            let entry = entry.ok()?;
            let path = entry.path();
            if !path.is_file() {
                return None;
            }
            SourceLanguage::from_path(path).map(|lang| (path.to_path_buf(), lang))
        })
        .collect();
    sources.sort_by(|a, b| a.0.cmp(&b.0));
    sources
}

fn parse_file(
    path: &Path,
    lang: SourceLanguage,
    normalization: Normalization,
) -> astmill_core::Result<Ast> {
    let source = fs::read_to_string(path)?;
    let language = lang.tree_sitter_language();
    match normalization {
        Normalization::Compress => convert_source(&language, &source),
        Normalization::Simplify => parse_source(&language, &source).map(simplify),
        Normalization::Raw => parse_source(&language, &source),
    }
}

fn label_for(path: &Path) -> String {
    path.file_stem()
        .map(|stem| stem.to_string_lossy().into_owned())
        .unwrap_or_default()
}
