pub mod fabric;

pub use fabric::{
    fetch_game_versions, intermediary_coordinate, resolve_intermediary, FabricLibrary,
    FabricServerProfile, GameVersion,
};
