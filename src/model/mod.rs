pub mod config;
pub mod dynamics;
pub mod tables;
