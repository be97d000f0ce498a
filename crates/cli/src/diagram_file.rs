//! Plain-text diagram files: one row per line, cells separated by commas,
//! tokens `x`, `o`, and blank. Empty lines are ignored.

use anyhow::{Context, Result};
use gridknot::{DiagramError, GridDiagram};
use std::fs;
use std::path::Path;

pub fn parse_diagram(text: &str) -> Result<GridDiagram, DiagramError> {
    let rows: Vec<Vec<&str>> = text
        .lines()
        .filter(|line| !line.trim().is_empty())
        .map(|line| line.split(',').map(str::trim).collect())
        .collect();
    GridDiagram::from_tokens(&rows)
}

pub fn read_diagram<P: AsRef<Path>>(path: P) -> Result<GridDiagram> {
    let path = path.as_ref();
    let text =
        fs::read_to_string(path).with_context(|| format!("reading diagram {}", path.display()))?;
    let diagram =
        parse_diagram(&text).with_context(|| format!("parsing diagram {}", path.display()))?;
    tracing::debug!(path = %path.display(), size = diagram.size(), "diagram loaded");
    Ok(diagram)
}

pub fn write_diagram<P: AsRef<Path>>(path: P, diagram: &GridDiagram) -> Result<()> {
    let path = path.as_ref();
    crate::ensure_parent(path)?;
    fs::write(path, diagram.to_string())
        .with_context(|| format!("writing diagram {}", path.display()))
}
