//! Data models for OpenAlex API entities.
//!
//! All fields use `#[serde(default)]` so partial records parse; works are
//! request-scoped and never mutated after fetch.

mod work;

pub use work::{Author, Authorship, InvertedIndex, PrimaryLocation, Work, WorksPage};
