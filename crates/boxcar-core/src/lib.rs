pub mod block;
pub mod config;
pub mod dsp;
pub mod runner;
