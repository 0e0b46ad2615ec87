//! Utilidades del sistema
//!
//! Este módulo contiene utilidades para manejo de errores, validación
//! y saneamiento de texto libre.

pub mod errors;
pub mod sanitize;
pub mod validation;
