use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use crate::models::reservation::{
    CustomerInfo, PaymentMethod, PricingInfo, Reservation, ReservationOptions, RouteInfo,
    ServiceKind, Waypoint,
};
use crate::models::vehicle::VehicleCategory;

// Request público de creación de reserva
#[derive(Debug, Deserialize, Validate)]
pub struct CreateReservationRequest {
    pub service_kind: ServiceKind,

    pub vehicle_category: VehicleCategory,

    #[validate(length(min = 5, max = 255))]
    pub departure_address: String,

    pub departure_lat: Option<f64>,
    pub departure_lon: Option<f64>,
    pub departure_place_id: Option<String>,

    #[validate(length(min = 5, max = 255))]
    pub arrival_address: Option<String>,

    pub arrival_lat: Option<f64>,
    pub arrival_lon: Option<f64>,
    pub arrival_place_id: Option<String>,

    /// Horas de puesta a disposición (solo mise_a_disposition)
    #[validate(range(min = 1, max = 24))]
    pub duration_hours: Option<i32>,

    #[validate(custom = "crate::utils::validation::validate_future_datetime")]
    pub pickup_at: DateTime<Utc>,

    #[validate(range(min = 1, max = 8))]
    pub passengers: i32,

    #[validate(range(min = 0, max = 20))]
    pub baggage: i32,

    pub payment_method: PaymentMethod,

    #[validate(length(max = 500))]
    pub comments: Option<String>,

    #[validate]
    #[serde(default)]
    pub options: ReservationOptionsRequest,

    #[validate]
    #[serde(default)]
    pub waypoints: Vec<WaypointRequest>,

    #[validate]
    pub customer: CustomerInfoRequest,

    pub route: Option<RouteInfoRequest>,

    /// Honeypot: campo oculto que los usuarios reales dejan vacío
    #[serde(default)]
    pub website: String,
}

#[derive(Debug, Default, Deserialize, Validate)]
pub struct ReservationOptionsRequest {
    #[validate(range(min = 0, max = 3))]
    #[serde(default)]
    pub child_seats: i32,

    #[serde(default)]
    pub flowers: bool,

    #[serde(default)]
    pub airport_assistance: bool,
}

#[derive(Debug, Deserialize, Validate)]
pub struct WaypointRequest {
    #[validate(length(min = 5, max = 255))]
    pub address: String,

    pub lat: Option<f64>,
    pub lon: Option<f64>,
}

#[derive(Debug, Deserialize, Validate)]
pub struct CustomerInfoRequest {
    #[validate(length(min = 2, max = 100))]
    pub full_name: String,

    #[validate(regex = "crate::utils::validation::PHONE_RE")]
    pub phone: String,

    #[validate(email)]
    pub email: String,
}

#[derive(Debug, Deserialize)]
pub struct RouteInfoRequest {
    pub distance_km: f64,
    pub duration_minutes: f64,
    pub geometry: Option<String>,
}

// Request de estimación de precio indicativo (sin persistencia)
#[derive(Debug, Deserialize, Validate)]
pub struct EstimateRequest {
    pub service_kind: ServiceKind,

    pub vehicle_category: VehicleCategory,

    #[validate(range(min = 1, max = 8))]
    pub passengers: i32,

    #[validate(range(min = 1, max = 24))]
    pub duration_hours: Option<i32>,

    #[validate]
    #[serde(default)]
    pub options: ReservationOptionsRequest,
}

// Desglose del precio indicativo
#[derive(Debug, Serialize)]
pub struct PriceEstimateResponse {
    pub base_fare: Decimal,
    pub passenger_surcharge: Decimal,
    pub options_surcharge: Decimal,
    pub total: Decimal,
    pub currency: String,
}

// Response de reserva creada
#[derive(Debug, Serialize)]
pub struct ReservationResponse {
    pub id: Uuid,
    pub service_kind: String,
    pub vehicle_category: String,
    pub departure_address: String,
    pub arrival_address: Option<String>,
    pub duration_hours: Option<i32>,
    pub pickup_at: DateTime<Utc>,
    pub passengers: i32,
    pub baggage: i32,
    pub payment_method: String,
    pub estimated_price: Option<Decimal>,
    pub created_at: DateTime<Utc>,
}

impl From<Reservation> for ReservationResponse {
    fn from(r: Reservation) -> Self {
        Self {
            id: r.id,
            service_kind: r.service_kind,
            vehicle_category: r.vehicle_category,
            departure_address: r.departure_address,
            arrival_address: r.arrival_address,
            duration_hours: r.duration_hours,
            pickup_at: r.pickup_at,
            passengers: r.passengers,
            baggage: r.baggage,
            payment_method: r.payment_method,
            estimated_price: r.estimated_price,
            created_at: r.created_at,
        }
    }
}

// Query de listado paginado (back-office)
#[derive(Debug, Deserialize)]
pub struct ReservationListQuery {
    pub page: Option<i64>,
    pub per_page: Option<i64>,
}

// Item del listado admin, con los datos de contacto ya unidos
#[derive(Debug, Serialize)]
pub struct ReservationSummary {
    pub id: Uuid,
    pub service_kind: String,
    pub vehicle_category: String,
    pub departure_address: String,
    pub arrival_address: Option<String>,
    pub pickup_at: DateTime<Utc>,
    pub passengers: i32,
    pub payment_method: String,
    pub estimated_price: Option<Decimal>,
    pub customer_name: String,
    pub customer_phone: String,
    pub customer_email: String,
    pub created_at: DateTime<Utc>,
}

// Detalle completo de una reserva
#[derive(Debug, Serialize)]
pub struct ReservationDetailResponse {
    pub reservation: Reservation,
    pub customer: Option<CustomerInfo>,
    pub options: Option<ReservationOptions>,
    pub route: Option<RouteInfo>,
    pub pricing: Option<PricingInfo>,
    pub waypoints: Vec<Waypoint>,
}

// Envoltorio de paginación
#[derive(Debug, Serialize)]
pub struct PaginatedResponse<T> {
    pub data: Vec<T>,
    pub total: i64,
    pub page: i64,
    pub per_page: i64,
    pub total_pages: i64,
}
