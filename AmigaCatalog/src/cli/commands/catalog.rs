//! CLI commands for catalog file operations

use std::path::{Path, PathBuf};
use std::time::Instant;

use crate::catalog::{
    AmigaCatalog, CATALOG_ARCHIVE_VERSION, CATALOG_MIME_TYPE, SearchRoots, available_languages,
    load_first,
};
use crate::cli::output::{
    CROSS, DOCUMENT, LOOKING_GLASS, print_done, print_heading, print_step, truncate_text,
};
use crate::formats::ctlg::{ChunkReader, read_catalog};

/// Decode a catalog and print its strings
pub fn dump(path: &Path, json: bool, quiet: bool) -> anyhow::Result<()> {
    let record = read_catalog(path)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&record)?);
        return Ok(());
    }

    if !quiet {
        print_heading(&path.display().to_string());
        println!("  Version: {}", record.signature.as_deref().unwrap_or("-"));
        println!("  Language: {}", record.language_name.as_deref().unwrap_or("-"));
        println!("  Strings: {}", record.len());
        println!();
    }

    for entry in &record.entries {
        println!("{}\t{}", entry.id, truncate_text(&entry.text, 200));
    }

    Ok(())
}

/// Print a single string by ID
pub fn get(path: &Path, id: i32) -> anyhow::Result<()> {
    let record = read_catalog(path)?;

    match record.get(id) {
        Some(text) => println!("{text}"),
        None => anyhow::bail!("String not found: {}", id),
    }

    Ok(())
}

/// Search strings by text content
pub fn search(path: &Path, query: &str, limit: usize) -> anyhow::Result<()> {
    let record = read_catalog(path)?;
    let query_lower = query.to_lowercase();

    let matches: Vec<_> = record
        .entries
        .iter()
        .filter(|e| e.text.to_lowercase().contains(&query_lower))
        .take(limit)
        .collect();

    if matches.is_empty() {
        println!("No strings found containing '{query}'");
        return Ok(());
    }

    println!("Found {} strings containing '{}':", matches.len(), query);
    println!();
    for entry in matches {
        println!("{}\t{}", entry.id, truncate_text(&entry.text, 100));
    }

    Ok(())
}

/// List the top-level chunks of a catalog
pub fn inspect(path: &Path) -> anyhow::Result<()> {
    let data = std::fs::read(path)?;
    let reader = ChunkReader::new(&data)?;

    print_heading(&format!("{} (FORM CTLG, {} bytes)", path.display(), data.len()));
    println!("  Type: {CATALOG_MIME_TYPE}, archive version {CATALOG_ARCHIVE_VERSION}");

    let mut count = 0;
    for chunk in reader {
        let chunk = chunk?;
        count += 1;
        println!(
            "  {}  {:>8} bytes  (stream {})",
            chunk.tag,
            chunk.declared_size,
            chunk.padded_size() + 8
        );
    }

    println!("{count} chunks");
    Ok(())
}

/// Probe the candidate files for an application in priority order
pub fn locate(signature: &str, language: &str, roots: &SearchRoots) -> anyhow::Result<()> {
    let start = Instant::now();
    let candidates = roots.candidates(signature, language);
    let total = candidates.len();
    let mut step = 0;

    let result = load_first(&candidates, |path| {
        step += 1;
        print_step(step, total, LOOKING_GLASS, &path.display().to_string());
        let mut catalog = AmigaCatalog::create(path, signature, language);
        catalog
            .read_from_file(None)
            .inspect_err(|err| println!("      {CROSS}{err}"))?;
        Ok(catalog)
    });

    match result {
        Ok((path, catalog)) => {
            println!();
            println!("{DOCUMENT}{}", path.display());
            println!("  Version: {}", catalog.signature());
            println!("  Language: {}", catalog.language_name());
            println!("  Strings: {}", catalog.table().len());
            println!("  Fingerprint: {:#010x}", catalog.fingerprint());
            print_done(start.elapsed());
            Ok(())
        }
        Err(err) => anyhow::bail!("No catalog for {} ({}): {}", signature, language, err),
    }
}

/// List languages with a catalog for an application
pub fn languages(signature: &str, roots: &SearchRoots) -> anyhow::Result<()> {
    let languages = available_languages(roots, signature)?;

    if languages.is_empty() {
        println!("No catalogs found for {signature}");
        return Ok(());
    }

    for language in languages {
        println!("{language}");
    }
    Ok(())
}

/// Show catalog statistics
pub fn stats(paths: &[PathBuf]) -> anyhow::Result<()> {
    let mut total_entries = 0;
    let mut total_chars = 0;

    for path in paths {
        let record = read_catalog(path)?;
        let entries = record.len();
        let chars: usize = record.entries.iter().map(|e| e.text.chars().count()).sum();
        let avg_len = if entries > 0 { chars / entries } else { 0 };

        println!("{}:", path.display());
        println!("  Language: {}", record.language_name.as_deref().unwrap_or("-"));
        println!("  Strings: {entries}");
        println!("  Total characters: {chars}");
        println!("  Average length: {avg_len} chars");

        if let Some(longest) = record.entries.iter().max_by_key(|e| e.text.chars().count()) {
            println!(
                "  Longest: {} ({} chars)",
                longest.id,
                longest.text.chars().count()
            );
        }

        let empty_count = record.entries.iter().filter(|e| e.text.is_empty()).count();
        if empty_count > 0 {
            println!("  Empty strings: {empty_count}");
        }

        println!();

        total_entries += entries;
        total_chars += chars;
    }

    if paths.len() > 1 {
        println!("Total across {} files:", paths.len());
        println!("  Strings: {total_entries}");
        println!("  Characters: {total_chars}");
    }

    Ok(())
}
