pub mod document_service;
pub mod domain;
pub mod ports;
