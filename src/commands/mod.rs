//! Browser Side-Effect Wrappers
//!
//! Everything that touches the network, storage or the live DOM outside of
//! component rendering, organized by concern.

mod page_data;
mod contact;
mod storage;
mod scroll;
mod reveal;

// Re-export all public items
pub use page_data::*;
pub use contact::*;
pub use storage::*;
pub use scroll::*;
pub use reveal::*;
