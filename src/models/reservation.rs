//! Modelos de reserva
//!
//! Una reserva se persiste como un agregado de varias tablas:
//! reservations + customer_info + reservation_options, más route_info,
//! pricing_info y waypoints cuando aplican. El insert es transaccional.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// Tipo de servicio solicitado
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum ServiceKind {
    /// Trayecto punto a punto
    Transfer,
    /// Puesta a disposición por horas
    MiseADisposition,
}

impl ServiceKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ServiceKind::Transfer => "transfer",
            ServiceKind::MiseADisposition => "mise_a_disposition",
        }
    }

    pub fn from_str(value: &str) -> Option<Self> {
        match value {
            "transfer" => Some(ServiceKind::Transfer),
            "mise_a_disposition" => Some(ServiceKind::MiseADisposition),
            _ => None,
        }
    }
}

/// Método de pago elegido por el cliente
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum PaymentMethod {
    PayNow,
    PayOnSite,
}

impl PaymentMethod {
    pub fn as_str(&self) -> &'static str {
        match self {
            PaymentMethod::PayNow => "pay_now",
            PaymentMethod::PayOnSite => "pay_on_site",
        }
    }
}

/// Reserva principal - mapea a la tabla reservations
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Reservation {
    pub id: Uuid,
    pub service_kind: String,
    pub vehicle_category: String,
    pub departure_address: String,
    pub departure_lat: Option<f64>,
    pub departure_lon: Option<f64>,
    pub departure_place_id: Option<String>,
    pub arrival_address: Option<String>,
    pub arrival_lat: Option<f64>,
    pub arrival_lon: Option<f64>,
    pub arrival_place_id: Option<String>,
    pub duration_hours: Option<i32>,
    pub pickup_at: DateTime<Utc>,
    pub passengers: i32,
    pub baggage: i32,
    pub payment_method: String,
    pub comments: Option<String>,
    pub estimated_price: Option<Decimal>,
    pub distance_km: Option<f64>,
    pub created_at: DateTime<Utc>,
}

/// Datos de contacto del cliente - tabla customer_info
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct CustomerInfo {
    pub id: Uuid,
    pub reservation_id: Uuid,
    pub full_name: String,
    pub phone: String,
    pub email: String,
}

/// Opciones de la reserva - tabla reservation_options
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct ReservationOptions {
    pub id: Uuid,
    pub reservation_id: Uuid,
    pub child_seats: i32,
    pub flowers: bool,
    pub airport_assistance: bool,
}

/// Resumen de ruta calculado por el preview - tabla route_info
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct RouteInfo {
    pub id: Uuid,
    pub reservation_id: Uuid,
    pub distance_km: f64,
    pub duration_minutes: f64,
    pub geometry: Option<String>,
}

/// Desglose del precio indicativo - tabla pricing_info
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct PricingInfo {
    pub id: Uuid,
    pub reservation_id: Uuid,
    pub base_fare: Decimal,
    pub passenger_surcharge: Decimal,
    pub options_surcharge: Decimal,
    pub total: Decimal,
}

/// Parada intermedia (solo mise à disposition) - tabla waypoints
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Waypoint {
    pub id: Uuid,
    pub reservation_id: Uuid,
    pub position: i32,
    pub address: String,
    pub lat: Option<f64>,
    pub lon: Option<f64>,
}

/// Agregado listo para persistir, ya validado y saneado
#[derive(Debug, Clone)]
pub struct NewReservation {
    pub service_kind: ServiceKind,
    pub vehicle_category: String,
    pub departure_address: String,
    pub departure_lat: Option<f64>,
    pub departure_lon: Option<f64>,
    pub departure_place_id: Option<String>,
    pub arrival_address: Option<String>,
    pub arrival_lat: Option<f64>,
    pub arrival_lon: Option<f64>,
    pub arrival_place_id: Option<String>,
    pub duration_hours: Option<i32>,
    pub pickup_at: DateTime<Utc>,
    pub passengers: i32,
    pub baggage: i32,
    pub payment_method: PaymentMethod,
    pub comments: Option<String>,
    pub estimated_price: Option<Decimal>,
    pub distance_km: Option<f64>,
    pub customer: NewCustomerInfo,
    pub options: NewReservationOptions,
    pub route: Option<NewRouteInfo>,
    pub pricing: Option<NewPricingInfo>,
    pub waypoints: Vec<NewWaypoint>,
}

#[derive(Debug, Clone)]
pub struct NewCustomerInfo {
    pub full_name: String,
    pub phone: String,
    pub email: String,
}

#[derive(Debug, Clone, Default)]
pub struct NewReservationOptions {
    pub child_seats: i32,
    pub flowers: bool,
    pub airport_assistance: bool,
}

#[derive(Debug, Clone)]
pub struct NewRouteInfo {
    pub distance_km: f64,
    pub duration_minutes: f64,
    pub geometry: Option<String>,
}

#[derive(Debug, Clone)]
pub struct NewPricingInfo {
    pub base_fare: Decimal,
    pub passenger_surcharge: Decimal,
    pub options_surcharge: Decimal,
    pub total: Decimal,
}

#[derive(Debug, Clone)]
pub struct NewWaypoint {
    pub address: String,
    pub lat: Option<f64>,
    pub lon: Option<f64>,
}
