// src/lib.rs

pub mod export;
pub mod math;
