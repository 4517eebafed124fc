pub mod use_grid;
pub mod use_music;
pub mod use_route;
