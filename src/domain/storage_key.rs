use std::fmt;

use serde::{Deserialize, Serialize};

use super::JobId;

/// Location of an object in the blob store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct StorageKey(String);

impl StorageKey {
    pub fn input_audio(job_id: JobId) -> Self {
        Self(format!("input/{}.webm", job_id))
    }

    pub fn output_audio(job_id: JobId) -> Self {
        Self(format!("output/{}.mp3", job_id))
    }

    pub fn job_record(job_id: JobId) -> Self {
        Self(format!("jobs/{}.json", job_id))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for StorageKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
