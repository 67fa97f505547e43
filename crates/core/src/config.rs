//! Board configuration
//!
//! Dimensions and cell pixel size are fixed when the board is built. They can be
//! overridden through environment variables:
//!
//! - `FLOOD_TETRIS_COLUMNS`: grid width (default: 10)
//! - `FLOOD_TETRIS_LINES`: grid height (default: 20)
//! - `FLOOD_TETRIS_CELL_WIDTH`: rendered cell width in pixels (default: 24)
//! - `FLOOD_TETRIS_CELL_HEIGHT`: rendered cell height in pixels (default: 24)

use std::env;
use std::fmt;
use std::str::FromStr;

use crate::board::Board;
use crate::grid::GridError;
use crate::shapes::ShapeTable;
use crate::types::{DEFAULT_CELL_HEIGHT, DEFAULT_CELL_WIDTH, DEFAULT_COLUMNS, DEFAULT_LINES};

pub const COLUMNS_VAR: &str = "FLOOD_TETRIS_COLUMNS";
pub const LINES_VAR: &str = "FLOOD_TETRIS_LINES";
pub const CELL_WIDTH_VAR: &str = "FLOOD_TETRIS_CELL_WIDTH";
pub const CELL_HEIGHT_VAR: &str = "FLOOD_TETRIS_CELL_HEIGHT";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// A variable was set but is not a positive integer
    InvalidValue { var: &'static str, value: String },
    /// The dimensions were rejected by the grid
    Grid(GridError),
}

impl ConfigError {
    pub fn code(&self) -> &'static str {
        match self {
            ConfigError::InvalidValue { .. } => "invalid_config",
            ConfigError::Grid(e) => e.code(),
        }
    }
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::InvalidValue { var, value } => {
                write!(f, "{} must be a positive integer, got {:?}", var, value)
            }
            ConfigError::Grid(e) => write!(f, "{}", e),
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ConfigError::Grid(e) => Some(e),
            ConfigError::InvalidValue { .. } => None,
        }
    }
}

impl From<GridError> for ConfigError {
    fn from(e: GridError) -> Self {
        ConfigError::Grid(e)
    }
}

/// Board construction parameters
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BoardConfig {
    pub columns: usize,
    pub lines: usize,
    /// Rendered cell width in pixels; not used by the engine itself
    pub cell_width: u32,
    /// Rendered cell height in pixels; not used by the engine itself
    pub cell_height: u32,
}

impl Default for BoardConfig {
    fn default() -> Self {
        Self {
            columns: DEFAULT_COLUMNS,
            lines: DEFAULT_LINES,
            cell_width: DEFAULT_CELL_WIDTH,
            cell_height: DEFAULT_CELL_HEIGHT,
        }
    }
}

impl BoardConfig {
    /// Defaults overridden by any `FLOOD_TETRIS_*` variable that is set
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|var| env::var(var).ok())
    }

    /// Same as [`BoardConfig::from_env`] with an injectable variable source
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let defaults = Self::default();
        Ok(Self {
            columns: read_var(&lookup, COLUMNS_VAR, defaults.columns)?,
            lines: read_var(&lookup, LINES_VAR, defaults.lines)?,
            cell_width: read_var(&lookup, CELL_WIDTH_VAR, defaults.cell_width)?,
            cell_height: read_var(&lookup, CELL_HEIGHT_VAR, defaults.cell_height)?,
        })
    }

    /// Build an empty board with these dimensions
    pub fn build<'s>(&self, shapes: &'s ShapeTable) -> Result<Board<'s>, ConfigError> {
        let board = Board::new(self.columns, self.lines, shapes)?;
        log::debug!(
            "board {}x{} ({}x{} px cells)",
            self.columns,
            self.lines,
            self.cell_width,
            self.cell_height
        );
        Ok(board)
    }

    /// Pixel size of the whole grid
    pub fn pixel_size(&self) -> (u64, u64) {
        (
            self.columns as u64 * self.cell_width as u64,
            self.lines as u64 * self.cell_height as u64,
        )
    }
}

fn read_var<T>(
    lookup: &impl Fn(&str) -> Option<String>,
    var: &'static str,
    default: T,
) -> Result<T, ConfigError>
where
    T: FromStr + PartialEq + Default,
{
    let Some(raw) = lookup(var) else {
        return Ok(default);
    };
    let value = raw.trim();
    if value.is_empty() {
        return Ok(default);
    }
    match value.parse::<T>() {
        Ok(parsed) if parsed != T::default() => Ok(parsed),
        _ => Err(ConfigError::InvalidValue {
            var,
            value: raw.clone(),
        }),
    }
}
