//! Level data: character grid, geometry builder, and RON file IO

pub mod build;
pub mod grid;
pub mod io;

pub use build::{Level, ShooterSpawn, Tile, TileKind};
pub use grid::LevelMap;
pub use io::{load_level_map, load_level_map_from_str, save_level_map, serialize_level_map, LevelError};
