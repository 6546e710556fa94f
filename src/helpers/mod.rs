pub(crate) mod aggregates;
pub(crate) mod distinct;
pub(crate) mod grouping;
#[cfg(feature = "json")]
pub(crate) mod json;
pub(crate) mod joins;
pub(crate) mod ordering;
pub(crate) mod partition;
pub(crate) mod stdlib;
pub(crate) mod try_process;

// Only re-export files with public items beyond `impl` blocks
pub use grouping::Group;
pub use ordering::SortOrder;
pub use stdlib::*;
