pub mod publisher;
pub mod templates;

pub use publisher::{Publisher, END_MARKER, START_MARKER};

pub mod prelude {
    pub use super::Publisher;
    pub use digest_core::{DigestEntry, Error, Result};
}
