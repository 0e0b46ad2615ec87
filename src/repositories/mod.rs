//! Repositorios de acceso a datos
//!
//! Consultas parametrizadas sobre PostgreSQL, un repositorio por
//! familia de tablas.

pub mod admin_repository;
pub mod pricing_repository;
pub mod reservation_repository;
pub mod vehicle_repository;
