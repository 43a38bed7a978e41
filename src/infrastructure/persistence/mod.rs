mod memory_job_store;
mod object_job_store;

pub use memory_job_store::MemoryJobStore;
pub use object_job_store::ObjectJobStore;
