pub mod error;
pub mod models {
    pub mod document;
    pub mod search;
}
pub mod search {
    pub mod matcher;
}
pub mod index;
pub mod state;
#[cfg(feature = "cli")]
pub mod config;

pub use error::{IndexError, Result};
pub use index::SearchIndex;
pub use models::document::Document;
pub use models::search::SearchHit;
