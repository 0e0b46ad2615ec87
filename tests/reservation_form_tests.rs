//! Validación del formulario de reserva: esquema declarativo, reglas de
//! capacidad y fórmula del precio indicativo.

use chrono::{Duration, Utc};
use rust_decimal::Decimal;
use validator::Validate;

use vtc_booking::dto::reservation_dto::{CreateReservationRequest, ReservationOptionsRequest};
use vtc_booking::models::reservation::ServiceKind;
use vtc_booking::models::vehicle::VehicleCategory;
use vtc_booking::services::pricing_service::PricingService;

fn transfer_payload(pickup_at: chrono::DateTime<Utc>) -> serde_json::Value {
    serde_json::json!({
        "service_kind": "transfer",
        "vehicle_category": "confort",
        "departure_address": "10 Rue de Rivoli, Paris",
        "arrival_address": "Aéroport Charles-de-Gaulle (CDG)",
        "pickup_at": pickup_at.to_rfc3339(),
        "passengers": 2,
        "baggage": 2,
        "payment_method": "pay_on_site",
        "customer": {
            "full_name": "Marie Dupont",
            "phone": "+33 6 12 34 56 78",
            "email": "marie.dupont@example.com"
        }
    })
}

#[test]
fn test_valid_transfer_passes_schema_validation() {
    let tomorrow = Utc::now() + Duration::days(1);
    let request: CreateReservationRequest =
        serde_json::from_value(transfer_payload(tomorrow)).unwrap();

    assert!(request.validate().is_ok());
    assert_eq!(request.service_kind, ServiceKind::Transfer);
    assert_eq!(request.vehicle_category, VehicleCategory::Confort);
    assert!(request.website.is_empty());
}

#[test]
fn test_documented_price_formula_for_transfer() {
    // Transfer confort, 2 pasajeros: 50 + (2-1)*10 = 60 €
    let tomorrow = Utc::now() + Duration::days(1);
    let request: CreateReservationRequest =
        serde_json::from_value(transfer_payload(tomorrow)).unwrap();
    assert!(request.validate().is_ok());

    let estimate = PricingService::estimate(
        request.service_kind,
        request.vehicle_category,
        request.passengers,
        request.duration_hours,
        &request.options,
    );

    assert_eq!(estimate.total, Decimal::from(60));
}

#[test]
fn test_addons_are_added_to_the_estimate() {
    let options = ReservationOptionsRequest {
        child_seats: 1,
        flowers: true,
        airport_assistance: false,
    };

    let estimate = PricingService::estimate(
        ServiceKind::Transfer,
        VehicleCategory::Confort,
        2,
        None,
        &options,
    );

    // 60 del transfer + 15 de silla infantil + 20 de flores
    assert_eq!(estimate.total, Decimal::from(95));
}

#[test]
fn test_pickup_date_in_past_fails_validation() {
    let yesterday = Utc::now() - Duration::days(1);
    let request: CreateReservationRequest =
        serde_json::from_value(transfer_payload(yesterday)).unwrap();

    assert!(request.validate().is_err());
}

#[test]
fn test_passenger_capacity_per_category() {
    // La regla cruzada del formulario usa estas capacidades
    assert_eq!(VehicleCategory::Confort.passenger_capacity(), 3);
    assert_eq!(VehicleCategory::Van.passenger_capacity(), 8);
}

#[test]
fn test_passenger_count_out_of_schema_range_fails() {
    let tomorrow = Utc::now() + Duration::days(1);
    let mut payload = transfer_payload(tomorrow);
    payload["passengers"] = serde_json::json!(12);

    let request: CreateReservationRequest = serde_json::from_value(payload).unwrap();
    assert!(request.validate().is_err());
}

#[test]
fn test_invalid_email_fails_validation() {
    let tomorrow = Utc::now() + Duration::days(1);
    let mut payload = transfer_payload(tomorrow);
    payload["customer"]["email"] = serde_json::json!("not-an-email");

    let request: CreateReservationRequest = serde_json::from_value(payload).unwrap();
    assert!(request.validate().is_err());
}

#[test]
fn test_invalid_phone_fails_validation() {
    let tomorrow = Utc::now() + Duration::days(1);
    let mut payload = transfer_payload(tomorrow);
    payload["customer"]["phone"] = serde_json::json!("abc");

    let request: CreateReservationRequest = serde_json::from_value(payload).unwrap();
    assert!(request.validate().is_err());
}

#[test]
fn test_too_long_comment_fails_validation() {
    let tomorrow = Utc::now() + Duration::days(1);
    let mut payload = transfer_payload(tomorrow);
    payload["comments"] = serde_json::json!("x".repeat(501));

    let request: CreateReservationRequest = serde_json::from_value(payload).unwrap();
    assert!(request.validate().is_err());
}

#[test]
fn test_unknown_service_kind_is_rejected_at_deserialization() {
    let tomorrow = Utc::now() + Duration::days(1);
    let mut payload = transfer_payload(tomorrow);
    payload["service_kind"] = serde_json::json!("teleportation");

    assert!(serde_json::from_value::<CreateReservationRequest>(payload).is_err());
}
