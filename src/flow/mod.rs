pub mod diff;
pub mod document;
pub mod snapshot;

pub use diff::*;
pub use document::*;
pub use snapshot::*;
