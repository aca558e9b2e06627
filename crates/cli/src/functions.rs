use crate::language::SourceLanguage;
use astmill_core::convert::{convert_parse_tree, parse_notation};
use astmill_core::function::FunctionSummary;
use std::fs;
use std::io::Write;
use std::path::Path;
use tracing::info;

pub fn run(
    tree: &Path,
    language: SourceLanguage,
    path: Option<String>,
) -> Result<(), Box<dyn std::error::Error>> {
    let file_path = path.unwrap_or_else(|| tree.display().to_string());
    let summaries = describe(&fs::read_to_string(tree)?, language, &file_path)?;
    info!("Found {} functions in {}", summaries.len(), file_path);

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    for summary in &summaries {
        serde_json::to_writer(&mut out, summary)?;
        writeln!(out)?;
    }
    Ok(())
}

pub fn describe(
    notation: &str,
    language: SourceLanguage,
    file_path: &str,
) -> astmill_core::Result<Vec<FunctionSummary>> {
    let (tree, tables) = parse_notation(notation)?;
    let ast = convert_parse_tree(&tree, tables.rule_names(), &tables)?;
    let extractor = language.extractor();
    Ok(extractor
        .extract_all(&ast, file_path)
        .iter()
        .map(|info| info.summary())
        .collect())
}
