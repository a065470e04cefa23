//! Typed persistence
//!
//! Saves and loads values as XML files whose names derive from the value's
//! type.

pub mod xml_store;

pub use xml_store::{XmlStore, short_type_name};
