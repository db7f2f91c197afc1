pub mod benchmarks;
pub mod config;
pub mod consts;
pub mod error;
pub mod loader;

pub use benchmarks::{
    compute_basic_benchmarks, compute_enhanced_benchmarks, BenchmarkCalculator, Benchmarks,
    BoardAnalysis, BoardModifiers, BoardWordStats, Rating, Tier,
};
pub use config::Calibration;
pub use error::{LexiError, LxResult};
