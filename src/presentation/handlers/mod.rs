mod health;
mod status;
mod submit;

pub use health::health_handler;
pub use status::status_handler;
pub use submit::submit_handler;
