use serde::Deserialize;

use super::Environment;

#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    pub environment: Environment,
    pub server: ServerSettings,
    pub storage: StorageSettings,
    pub engines: EngineSettings,
    pub jobs: JobSettings,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerSettings {
    pub host: String,
    pub port: u16,
}

#[derive(Debug, Clone, Deserialize)]
pub struct StorageSettings {
    /// Directory backing the blob store in local deployments.
    pub base_path: String,
    /// Base URL presigned audio links are rooted at.
    pub public_base_url: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct EngineSettings {
    pub transcription_url: String,
    pub translation_url: String,
    pub speech_url: String,
    pub api_key: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct JobSettings {
    pub check_limit: u32,
    pub sync_threshold_bytes: usize,
    pub audio_url_ttl_secs: u64,
}

impl Settings {
    /// Builds settings from environment variables with local-dev defaults.
    pub fn from_env() -> Self {
        fn var_or(name: &str, default: &str) -> String {
            std::env::var(name).unwrap_or_else(|_| default.to_string())
        }

        Self {
            environment: Environment::try_from(var_or("APP_ENV", "local"))
                .unwrap_or(Environment::Local),
            server: ServerSettings {
                host: var_or("SERVER_HOST", "0.0.0.0"),
                port: var_or("SERVER_PORT", "3000").parse().unwrap_or(3000),
            },
            storage: StorageSettings {
                base_path: var_or("STORAGE_BASE_PATH", "./data"),
                public_base_url: var_or("STORAGE_PUBLIC_BASE_URL", "http://localhost:3000/media"),
            },
            engines: EngineSettings {
                transcription_url: var_or("TRANSCRIPTION_URL", "http://localhost:8101"),
                translation_url: var_or("TRANSLATION_URL", "http://localhost:8102"),
                speech_url: var_or("SPEECH_URL", "http://localhost:8103"),
                api_key: var_or("ENGINE_API_KEY", ""),
            },
            jobs: JobSettings {
                check_limit: var_or("JOB_CHECK_LIMIT", "15").parse().unwrap_or(15),
                sync_threshold_bytes: var_or("JOB_SYNC_THRESHOLD_BYTES", "50000")
                    .parse()
                    .unwrap_or(50_000),
                audio_url_ttl_secs: var_or("AUDIO_URL_TTL_SECS", "3600").parse().unwrap_or(3600),
            },
        }
    }
}
