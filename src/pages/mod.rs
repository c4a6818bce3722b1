//! Page storage: one directory per slug, each holding a generated `index.html`,
//! plus a persisted list of the slugs that have been created.

mod error;
mod fragment;
mod index;
mod repository;
mod skeleton;

pub use error::PageError;
pub use fragment::FragmentKind;
pub use repository::PageRepository;
#[cfg(test)]
pub use skeleton::{default_document, INDEX_FILE};
