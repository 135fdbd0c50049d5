//! Trait seams between the service layer and storage backends.

pub mod catalog_storage;

pub use catalog_storage::ICatalogStorage;
