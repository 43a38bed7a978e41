mod environment;
mod settings;

pub use environment::Environment;
pub use settings::{EngineSettings, JobSettings, ServerSettings, Settings, StorageSettings};
