pub mod document_store;

pub use document_store::{DocumentQuery, DocumentStore, DocumentStoreError};
