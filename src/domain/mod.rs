mod job;
mod job_id;
mod job_status;
mod language;
mod storage_key;

pub use job::TranslationJob;
pub use job_id::JobId;
pub use job_status::JobStatus;
pub use language::LanguageCode;
pub use storage_key::StorageKey;
