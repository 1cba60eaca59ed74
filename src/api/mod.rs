mod engine;
mod engine_config;

pub use engine::SyncEngine;
pub use engine_config::SyncEngineConfig;
