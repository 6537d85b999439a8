//! CLI commands for text resource file operations

use std::path::{Path, PathBuf};

use crate::formats::text::{TextGroup, TextResource, read_text_xml, write_text_xml};

/// Validate each file, reporting every failure before giving up
pub fn validate(paths: &[PathBuf]) -> anyhow::Result<()> {
    let mut failed = 0;

    for path in paths {
        match read_text_xml(path) {
            Ok(resource) => {
                println!(
                    "OK    {} ({} groups, {} strings)",
                    path.display(),
                    resource.len(),
                    resource.string_count()
                );
                let duplicates = resource.duplicate_group_ids();
                if !duplicates.is_empty() {
                    println!("      warning: group IDs used more than once: {duplicates:?}");
                }
            }
            Err(err) => {
                println!("FAIL  {}: {err}", path.display());
                failed += 1;
            }
        }
    }

    if failed > 0 {
        anyhow::bail!("{failed} of {} files failed validation", paths.len());
    }
    Ok(())
}

/// Show text resource statistics
pub fn stats(paths: &[PathBuf]) -> anyhow::Result<()> {
    let mut total_groups = 0;
    let mut total_strings = 0;

    for path in paths {
        let resource = read_text_xml(path)?;
        let strings = resource.string_count();
        let chars: usize = resource
            .groups()
            .iter()
            .flat_map(TextGroup::iter)
            .map(|s| s.chars().count())
            .sum();

        println!("{}:", path.display());
        if !resource.name().is_empty() {
            println!("  Name: {}", resource.name());
        }
        println!("  Index with counts: {}", resource.index_with_counts());
        println!("  Groups: {}", resource.len());
        println!("  Strings: {strings}");
        println!("  Total characters: {chars}");

        if let Some(largest) = resource.groups().iter().max_by_key(|g| g.len()) {
            println!("  Largest group: {} ({} strings)", largest.id(), largest.len());
        }

        let empty_groups = resource.groups().iter().filter(|g| g.is_empty()).count();
        if empty_groups > 0 {
            println!("  Empty groups: {empty_groups}");
        }

        println!();

        total_groups += resource.len();
        total_strings += strings;
    }

    if paths.len() > 1 {
        println!("Total across {} files:", paths.len());
        println!("  Groups: {total_groups}");
        println!("  Strings: {total_strings}");
    }

    Ok(())
}

/// Print a string by group ID and index
pub fn get(path: &Path, group: i32, index: usize) -> anyhow::Result<()> {
    let resource = read_text_xml(path)?;

    match resource.get(group, index) {
        Some(text) => println!("{text}"),
        None => anyhow::bail!("No string {} in group {} of {}", index, group, path.display()),
    }

    Ok(())
}

/// Search string content
pub fn search(
    path: &Path,
    query: &str,
    case_sensitive: bool,
    limit: usize,
    quiet: bool,
) -> anyhow::Result<()> {
    let resource = read_text_xml(path)?;
    let matches = resource.search(query, case_sensitive);

    if matches.is_empty() {
        if !quiet {
            println!("No strings found containing '{query}'");
        }
        return Ok(());
    }

    if !quiet {
        println!("Found {} strings containing '{}':", matches.len(), query);
        println!();
    }
    for m in matches.iter().take(limit) {
        println!("{}:{}", m.group_id, m.index);
        if !quiet {
            println!("  {}", truncate_text(m.text, 100));
        }
    }
    if matches.len() > limit && !quiet {
        println!("... {} more", matches.len() - limit);
    }

    Ok(())
}

/// Replace an existing string and save the file
pub fn set(path: &Path, group: i32, index: usize, text: &str) -> anyhow::Result<()> {
    let mut resource: TextResource = read_text_xml(path)?;

    let Some(previous) = resource.set_string(group, index, text) else {
        anyhow::bail!("No string {} in group {} of {}", index, group, path.display());
    };

    write_text_xml(path, &resource)?;
    println!("Updated {group}:{index}");
    println!("  Previous text: {}", truncate_text(&previous, 80));

    Ok(())
}

/// Truncate text for display
fn truncate_text(text: &str, max_len: usize) -> String {
    let text = text.replace('\n', "\\n");
    if text.chars().count() > max_len {
        let kept: String = text.chars().take(max_len.saturating_sub(3)).collect();
        format!("{kept}...")
    } else {
        text
    }
}
