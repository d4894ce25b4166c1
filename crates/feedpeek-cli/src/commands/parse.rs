use std::path::Path;

use anyhow::{Context, Result};

use feedpeek_core::feed::parse_feed;

pub fn run(file: &Path) -> Result<()> {
    let content = std::fs::read(file)
        .with_context(|| format!("failed to read {}", file.display()))?;

    let items = parse_feed(&content)?;

    super::print_items(&items);

    Ok(())
}
