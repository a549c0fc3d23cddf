pub mod config;
pub mod error;
pub mod types;

pub use config::{Credentials, DigestConfig};
pub use error::Error;
pub use types::{display_date, Article, DigestEntry};

pub type Result<T> = std::result::Result<T, Error>;
