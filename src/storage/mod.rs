//! File system storage probes
//!
//! Existence checks, child enumeration and search name matching.

pub mod filesystem;
pub mod listing;
pub mod matcher;

pub use filesystem::{
    EntryKind, directory_exists, entry_exists, file_exists, is_directory_empty, list_children,
    move_file,
};
pub use listing::list_entries;
pub use matcher::NameMatcher;
