//! Controllers
//!
//! Validación de negocio y orquestación entre DTOs, repositorios
//! y servicios.

pub mod auth_controller;
pub mod contact_controller;
pub mod pricing_controller;
pub mod reservation_controller;
pub mod vehicle_controller;
