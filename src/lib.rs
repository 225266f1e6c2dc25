pub mod config;
pub mod dataset;
pub mod dino;
pub mod human;
pub mod rng;
pub mod tiles;
pub mod web;

pub use config::AppConfig;
pub use dino::{build_dinos, Dino, RawDino};
pub use human::{Human, HumanForm};
pub use tiles::{build_tiles, Tile};
