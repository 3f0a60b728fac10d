pub mod charts;
pub mod cli;
pub mod cohort;
pub mod comparison;
pub mod config;
pub mod dataset;
pub mod demo;
pub mod error;
pub mod export;
pub mod filter;
pub mod projection;
pub mod scout;
pub mod state;
