pub mod document_store_postgres;
pub mod sea_orm_entity;

pub use document_store_postgres::DocumentStorePostgres;
