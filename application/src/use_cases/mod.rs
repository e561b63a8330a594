//! Use cases — application workflows built on the ports

pub mod run_generation;
