pub mod align;
pub mod config;
pub mod distance;
pub mod export;
pub mod matrix;
pub mod motif;
pub mod pairs;
pub mod stats;
pub mod view;
