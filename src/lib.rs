// Library crate exposing modules for integration tests and benchmarks

pub mod cli;
pub mod config;
pub mod model;
pub mod repository;
pub mod render;
pub mod viewmodel;
pub mod view;
pub mod input;
pub mod util;
