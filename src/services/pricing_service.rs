//! Cálculo del precio indicativo
//!
//! Tarifas fijas por categoría para la estimación mostrada al cliente.
//! Es un importe orientativo, nunca un precio contractual.

use rust_decimal::Decimal;

use crate::dto::reservation_dto::ReservationOptionsRequest;
use crate::models::reservation::ServiceKind;
use crate::models::vehicle::VehicleCategory;

/// Base de un transfer punto a punto, en euros
const TRANSFER_BASE_CONFORT: i64 = 50;
const TRANSFER_BASE_VAN: i64 = 90;

/// Suplemento por pasajero a partir del segundo
const PER_EXTRA_PASSENGER: i64 = 10;

/// Tarifa horaria de la mise à disposition
const HOURLY_RATE_CONFORT: i64 = 55;
const HOURLY_RATE_VAN: i64 = 85;

/// Suplementos de opciones
const CHILD_SEAT_SURCHARGE: i64 = 15;
const FLOWERS_SURCHARGE: i64 = 20;
const AIRPORT_ASSISTANCE_SURCHARGE: i64 = 25;

/// Desglose del precio indicativo
#[derive(Debug, Clone, PartialEq)]
pub struct PriceEstimate {
    pub base_fare: Decimal,
    pub passenger_surcharge: Decimal,
    pub options_surcharge: Decimal,
    pub total: Decimal,
}

pub struct PricingService;

impl PricingService {
    /// Estimar el precio indicativo de una reserva.
    ///
    /// Transfer: base por categoría + 10 € por pasajero extra.
    /// Mise à disposition: tarifa horaria por categoría × horas.
    /// Las opciones se suman en ambos casos.
    pub fn estimate(
        service_kind: ServiceKind,
        category: VehicleCategory,
        passengers: i32,
        duration_hours: Option<i32>,
        options: &ReservationOptionsRequest,
    ) -> PriceEstimate {
        let (base_fare, passenger_surcharge) = match service_kind {
            ServiceKind::Transfer => {
                let base = match category {
                    VehicleCategory::Confort => TRANSFER_BASE_CONFORT,
                    VehicleCategory::Van => TRANSFER_BASE_VAN,
                };
                let extra = i64::from(passengers.max(1) - 1) * PER_EXTRA_PASSENGER;
                (Decimal::from(base), Decimal::from(extra))
            }
            ServiceKind::MiseADisposition => {
                let hourly = match category {
                    VehicleCategory::Confort => HOURLY_RATE_CONFORT,
                    VehicleCategory::Van => HOURLY_RATE_VAN,
                };
                let hours = i64::from(duration_hours.unwrap_or(1).max(1));
                (Decimal::from(hourly * hours), Decimal::ZERO)
            }
        };

        let options_surcharge = Self::options_surcharge(options);
        let total = base_fare + passenger_surcharge + options_surcharge;

        PriceEstimate {
            base_fare,
            passenger_surcharge,
            options_surcharge,
            total,
        }
    }

    fn options_surcharge(options: &ReservationOptionsRequest) -> Decimal {
        let mut surcharge = i64::from(options.child_seats.max(0)) * CHILD_SEAT_SURCHARGE;
        if options.flowers {
            surcharge += FLOWERS_SURCHARGE;
        }
        if options.airport_assistance {
            surcharge += AIRPORT_ASSISTANCE_SURCHARGE;
        }
        Decimal::from(surcharge)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn no_options() -> ReservationOptionsRequest {
        ReservationOptionsRequest::default()
    }

    #[test]
    fn test_transfer_confort_two_passengers() {
        // Fórmula documentada: 50 + (2-1)*10 = 60
        let estimate = PricingService::estimate(
            ServiceKind::Transfer,
            VehicleCategory::Confort,
            2,
            None,
            &no_options(),
        );
        assert_eq!(estimate.base_fare, Decimal::from(50));
        assert_eq!(estimate.passenger_surcharge, Decimal::from(10));
        assert_eq!(estimate.total, Decimal::from(60));
    }

    #[test]
    fn test_transfer_van_base() {
        let estimate = PricingService::estimate(
            ServiceKind::Transfer,
            VehicleCategory::Van,
            1,
            None,
            &no_options(),
        );
        assert_eq!(estimate.base_fare, Decimal::from(90));
        assert_eq!(estimate.passenger_surcharge, Decimal::ZERO);
        assert_eq!(estimate.total, Decimal::from(90));
    }

    #[test]
    fn test_hourly_hire() {
        let estimate = PricingService::estimate(
            ServiceKind::MiseADisposition,
            VehicleCategory::Confort,
            2,
            Some(3),
            &no_options(),
        );
        assert_eq!(estimate.base_fare, Decimal::from(165));
        assert_eq!(estimate.passenger_surcharge, Decimal::ZERO);
        assert_eq!(estimate.total, Decimal::from(165));
    }

    #[test]
    fn test_options_surcharges() {
        let options = ReservationOptionsRequest {
            child_seats: 2,
            flowers: true,
            airport_assistance: true,
        };
        let estimate = PricingService::estimate(
            ServiceKind::Transfer,
            VehicleCategory::Confort,
            1,
            None,
            &options,
        );
        // 50 + 2*15 + 20 + 25 = 125
        assert_eq!(estimate.options_surcharge, Decimal::from(75));
        assert_eq!(estimate.total, Decimal::from(125));
    }
}
