//! Provider adapters implementing the content gateway port

pub mod deepseek;
