pub mod add;
pub mod advice;
pub mod backup;
pub mod clear;
pub mod list;
pub mod lock;
pub mod log;
pub mod repository;
pub mod settings;
pub mod stats;
pub mod status;
