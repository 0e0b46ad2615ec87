use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use sqlx::{FromRow, PgPool};
use uuid::Uuid;

use crate::models::reservation::{
    CustomerInfo, NewReservation, PricingInfo, Reservation, ReservationOptions, RouteInfo,
    Waypoint,
};
use crate::utils::errors::AppError;

/// Fila del listado admin con los datos de contacto ya unidos
#[derive(Debug, FromRow)]
pub struct ReservationListRow {
    pub id: Uuid,
    pub service_kind: String,
    pub vehicle_category: String,
    pub departure_address: String,
    pub arrival_address: Option<String>,
    pub pickup_at: DateTime<Utc>,
    pub passengers: i32,
    pub payment_method: String,
    pub estimated_price: Option<Decimal>,
    pub full_name: String,
    pub phone: String,
    pub email: String,
    pub created_at: DateTime<Utc>,
}

/// Detalle completo de una reserva con todas sus tablas asociadas
#[derive(Debug)]
pub struct ReservationDetail {
    pub reservation: Reservation,
    pub customer: Option<CustomerInfo>,
    pub options: Option<ReservationOptions>,
    pub route: Option<RouteInfo>,
    pub pricing: Option<PricingInfo>,
    pub waypoints: Vec<Waypoint>,
}

pub struct ReservationRepository {
    pool: PgPool,
}

impl ReservationRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Insertar la reserva y todas sus tablas asociadas en una transacción.
    /// Si cualquier insert falla, el `?` propaga el error y el drop de la
    /// transacción hace rollback: todo o nada.
    pub async fn create(&self, new: NewReservation) -> Result<Reservation, AppError> {
        let mut tx = self.pool.begin().await?;

        let reservation_id = Uuid::new_v4();
        let now = Utc::now();

        let reservation = sqlx::query_as::<_, Reservation>(
            r#"
            INSERT INTO reservations (
                id, service_kind, vehicle_category,
                departure_address, departure_lat, departure_lon, departure_place_id,
                arrival_address, arrival_lat, arrival_lon, arrival_place_id,
                duration_hours, pickup_at, passengers, baggage,
                payment_method, comments, estimated_price, distance_km, created_at
            )
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10,
                    $11, $12, $13, $14, $15, $16, $17, $18, $19, $20)
            RETURNING *
            "#,
        )
        .bind(reservation_id)
        .bind(new.service_kind.as_str())
        .bind(&new.vehicle_category)
        .bind(&new.departure_address)
        .bind(new.departure_lat)
        .bind(new.departure_lon)
        .bind(&new.departure_place_id)
        .bind(&new.arrival_address)
        .bind(new.arrival_lat)
        .bind(new.arrival_lon)
        .bind(&new.arrival_place_id)
        .bind(new.duration_hours)
        .bind(new.pickup_at)
        .bind(new.passengers)
        .bind(new.baggage)
        .bind(new.payment_method.as_str())
        .bind(&new.comments)
        .bind(new.estimated_price)
        .bind(new.distance_km)
        .bind(now)
        .fetch_one(&mut *tx)
        .await?;

        sqlx::query(
            r#"
            INSERT INTO customer_info (id, reservation_id, full_name, phone, email)
            VALUES ($1, $2, $3, $4, $5)
            "#,
        )
        .bind(Uuid::new_v4())
        .bind(reservation_id)
        .bind(&new.customer.full_name)
        .bind(&new.customer.phone)
        .bind(&new.customer.email)
        .execute(&mut *tx)
        .await?;

        sqlx::query(
            r#"
            INSERT INTO reservation_options (id, reservation_id, child_seats, flowers, airport_assistance)
            VALUES ($1, $2, $3, $4, $5)
            "#,
        )
        .bind(Uuid::new_v4())
        .bind(reservation_id)
        .bind(new.options.child_seats)
        .bind(new.options.flowers)
        .bind(new.options.airport_assistance)
        .execute(&mut *tx)
        .await?;

        if let Some(route) = &new.route {
            sqlx::query(
                r#"
                INSERT INTO route_info (id, reservation_id, distance_km, duration_minutes, geometry)
                VALUES ($1, $2, $3, $4, $5)
                "#,
            )
            .bind(Uuid::new_v4())
            .bind(reservation_id)
            .bind(route.distance_km)
            .bind(route.duration_minutes)
            .bind(&route.geometry)
            .execute(&mut *tx)
            .await?;
        }

        if let Some(pricing) = &new.pricing {
            sqlx::query(
                r#"
                INSERT INTO pricing_info (id, reservation_id, base_fare, passenger_surcharge, options_surcharge, total)
                VALUES ($1, $2, $3, $4, $5, $6)
                "#,
            )
            .bind(Uuid::new_v4())
            .bind(reservation_id)
            .bind(pricing.base_fare)
            .bind(pricing.passenger_surcharge)
            .bind(pricing.options_surcharge)
            .bind(pricing.total)
            .execute(&mut *tx)
            .await?;
        }

        for (position, waypoint) in new.waypoints.iter().enumerate() {
            sqlx::query(
                r#"
                INSERT INTO waypoints (id, reservation_id, position, address, lat, lon)
                VALUES ($1, $2, $3, $4, $5, $6)
                "#,
            )
            .bind(Uuid::new_v4())
            .bind(reservation_id)
            .bind(position as i32)
            .bind(&waypoint.address)
            .bind(waypoint.lat)
            .bind(waypoint.lon)
            .execute(&mut *tx)
            .await?;
        }

        tx.commit().await?;

        Ok(reservation)
    }

    /// Listado paginado para el back-office, con el total para la paginación
    pub async fn list_paginated(
        &self,
        page: i64,
        per_page: i64,
    ) -> Result<(Vec<ReservationListRow>, i64), AppError> {
        let offset = (page - 1) * per_page;

        let rows = sqlx::query_as::<_, ReservationListRow>(
            r#"
            SELECT r.id, r.service_kind, r.vehicle_category,
                   r.departure_address, r.arrival_address, r.pickup_at,
                   r.passengers, r.payment_method, r.estimated_price,
                   c.full_name, c.phone, c.email, r.created_at
            FROM reservations r
            JOIN customer_info c ON c.reservation_id = r.id
            ORDER BY r.created_at DESC
            LIMIT $1 OFFSET $2
            "#,
        )
        .bind(per_page)
        .bind(offset)
        .fetch_all(&self.pool)
        .await?;

        let total: (i64,) = sqlx::query_as("SELECT COUNT(*) FROM reservations")
            .fetch_one(&self.pool)
            .await?;

        Ok((rows, total.0))
    }

    pub async fn find_detail(&self, id: Uuid) -> Result<Option<ReservationDetail>, AppError> {
        let reservation =
            sqlx::query_as::<_, Reservation>("SELECT * FROM reservations WHERE id = $1")
                .bind(id)
                .fetch_optional(&self.pool)
                .await?;

        let Some(reservation) = reservation else {
            return Ok(None);
        };

        let customer = sqlx::query_as::<_, CustomerInfo>(
            "SELECT * FROM customer_info WHERE reservation_id = $1",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        let options = sqlx::query_as::<_, ReservationOptions>(
            "SELECT * FROM reservation_options WHERE reservation_id = $1",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        let route =
            sqlx::query_as::<_, RouteInfo>("SELECT * FROM route_info WHERE reservation_id = $1")
                .bind(id)
                .fetch_optional(&self.pool)
                .await?;

        let pricing = sqlx::query_as::<_, PricingInfo>(
            "SELECT * FROM pricing_info WHERE reservation_id = $1",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        let waypoints = sqlx::query_as::<_, Waypoint>(
            "SELECT * FROM waypoints WHERE reservation_id = $1 ORDER BY position ASC",
        )
        .bind(id)
        .fetch_all(&self.pool)
        .await?;

        Ok(Some(ReservationDetail {
            reservation,
            customer,
            options,
            route,
            pricing,
            waypoints,
        }))
    }

    /// Borrado simple; las tablas asociadas caen por el ON DELETE CASCADE
    pub async fn delete(&self, id: Uuid) -> Result<(), AppError> {
        let result = sqlx::query("DELETE FROM reservations WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(AppError::NotFound("Reserva no encontrada".to_string()));
        }

        Ok(())
    }
}
