pub mod collector;

pub use collector::FeedCollector;

pub mod prelude {
    pub use super::FeedCollector;
    pub use digest_core::{Article, Error, Result};
}
