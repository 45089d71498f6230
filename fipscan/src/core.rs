// src/core.rs
pub mod lab;
pub mod pattern;
pub mod ratio;
pub mod report;
pub mod risk;
