// WHY: Loads caller-managed option lists from JSON for the CLI and tests
// Accepts a JSON array of bare names or objects carrying a `name` field

use anyhow::{Context, Result};
use std::fs;
use std::path::Path;
use tracing::info;

use crate::mention::NamedOption;

/// Parse an option list from JSON text
///
/// # Example
/// ```
/// use mentionscan::options::parse_options;
/// let options = parse_options(r#"["one", {"name": "two", "id": 2}]"#).unwrap();
/// assert_eq!(options[1].name, "two");
/// ```
pub fn parse_options(content: &str) -> Result<Vec<NamedOption>> {
    let options: Vec<NamedOption> =
        serde_json::from_str(content).context("Option list must be a JSON array of names or objects")?;
    Ok(options)
}

/// Read an option list file
pub fn load_options<P: AsRef<Path>>(path: P) -> Result<Vec<NamedOption>> {
    let path = path.as_ref();
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read option list: {}", path.display()))?;
    let options = parse_options(&content).with_context(|| format!("Invalid option list: {}", path.display()))?;
    info!("Loaded {} options from {}", options.len(), path.display());
    Ok(options)
}

/// Read an option list file (async version)
pub async fn load_options_async<P: AsRef<Path>>(path: P) -> Result<Vec<NamedOption>> {
    let path = path.as_ref();
    let content = tokio::fs::read_to_string(path)
        .await
        .with_context(|| format!("Failed to read option list: {}", path.display()))?;
    let options = parse_options(&content).with_context(|| format!("Invalid option list: {}", path.display()))?;
    info!("Loaded {} options from {}", options.len(), path.display());
    Ok(options)
}

/// Normalize `\r\n` and lone `\r` to `\n` so offsets count one unit per line break
pub fn normalize_line_endings(text: &str) -> String {
    text.replace("\r\n", "\n").replace('\r', "\n")
}
