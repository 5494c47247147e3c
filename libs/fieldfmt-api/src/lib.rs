pub mod config;
pub mod copier;
pub mod error;
pub mod record;
pub mod schema;
pub mod stream;
pub mod value;
