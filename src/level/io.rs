//! Level file loading and saving
//!
//! Level maps are stored as human-readable RON files holding the character
//! grid. Loading validates against explicit limits so a malformed or hostile
//! file cannot exhaust resources; unknown symbols inside the grid remain
//! legal and are treated as empty space by the builder.

use std::fs;
use std::path::Path;
use super::grid::{LevelMap, SYMBOL_SPAWN};

/// Validation limits for level files
pub mod limits {
    /// Maximum number of grid rows
    pub const MAX_ROWS: usize = 256;
    /// Maximum row length in tiles
    pub const MAX_ROW_LEN: usize = 1024;
}

/// Error type for level file IO
#[derive(Debug)]
pub enum LevelError {
    IoError(std::io::Error),
    ParseError(ron::error::SpannedError),
    SerializeError(ron::Error),
    ValidationError(String),
}

impl From<std::io::Error> for LevelError {
    fn from(e: std::io::Error) -> Self {
        LevelError::IoError(e)
    }
}

impl From<ron::error::SpannedError> for LevelError {
    fn from(e: ron::error::SpannedError) -> Self {
        LevelError::ParseError(e)
    }
}

impl From<ron::Error> for LevelError {
    fn from(e: ron::Error) -> Self {
        LevelError::SerializeError(e)
    }
}

impl std::fmt::Display for LevelError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LevelError::IoError(e) => write!(f, "IO error: {}", e),
            LevelError::ParseError(e) => write!(f, "Parse error: {}", e),
            LevelError::SerializeError(e) => write!(f, "Serialize error: {}", e),
            LevelError::ValidationError(e) => write!(f, "Validation error: {}", e),
        }
    }
}

impl std::error::Error for LevelError {}

/// Validate a level map against the limits
fn validate_map(map: &LevelMap) -> Result<(), LevelError> {
    if map.rows.is_empty() {
        return Err(LevelError::ValidationError("level has no rows".to_string()));
    }
    if map.rows.len() > limits::MAX_ROWS {
        return Err(LevelError::ValidationError(format!(
            "too many rows ({} > {})",
            map.rows.len(),
            limits::MAX_ROWS
        )));
    }
    for (i, row) in map.rows.iter().enumerate() {
        let len = row.chars().count();
        if len > limits::MAX_ROW_LEN {
            return Err(LevelError::ValidationError(format!(
                "row {} too long ({} > {})",
                i,
                len,
                limits::MAX_ROW_LEN
            )));
        }
    }
    let spawns: usize = map
        .rows
        .iter()
        .map(|r| r.chars().filter(|&c| c == SYMBOL_SPAWN).count())
        .sum();
    if spawns > 1 {
        return Err(LevelError::ValidationError(format!(
            "multiple player spawns ({})",
            spawns
        )));
    }
    Ok(())
}

/// Parse and validate a level map from RON text
pub fn load_level_map_from_str(text: &str) -> Result<LevelMap, LevelError> {
    let map: LevelMap = ron::from_str(text)?;
    validate_map(&map)?;
    Ok(map)
}

/// Load and validate a level map from a RON file
pub fn load_level_map<P: AsRef<Path>>(path: P) -> Result<LevelMap, LevelError> {
    let text = fs::read_to_string(path)?;
    load_level_map_from_str(&text)
}

/// Serialize a level map to RON text
pub fn serialize_level_map(map: &LevelMap) -> Result<String, LevelError> {
    let text = ron::ser::to_string_pretty(map, ron::ser::PrettyConfig::new())?;
    Ok(text)
}

/// Save a level map to a RON file
pub fn save_level_map<P: AsRef<Path>>(map: &LevelMap, path: P) -> Result<(), LevelError> {
    let text = serialize_level_map(map)?;
    fs::write(path, text)?;
    Ok(())
}
