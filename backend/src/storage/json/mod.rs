//! JSON flat-file backend: one file holding the whole novena collection.

pub mod connection;
pub mod novena_repository;

pub use connection::JsonConnection;
pub use novena_repository::NovenaRepository;
