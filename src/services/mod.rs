//! Services module
//!
//! Este módulo contiene la lógica de negocio y servicios de la aplicación.
//! Los servicios encapsulan operaciones que involucran integraciones
//! externas (geocoding, routing, pago) o cálculo de precios.

pub mod address_search_service;
pub mod jwt_service;
pub mod mapbox_geocoding;
pub mod nominatim_geocoding;
pub mod payment_service;
pub mod pricing_service;
pub mod routing_service;

pub use address_search_service::*;
pub use jwt_service::*;
pub use pricing_service::*;
