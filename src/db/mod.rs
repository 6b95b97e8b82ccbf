pub mod initialize;
pub mod log;
pub mod migrate;
pub mod pool;
pub mod records;
pub mod settings;
pub mod stats;
