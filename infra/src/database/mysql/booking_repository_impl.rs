//! MySQL implementation of the BookingRepository trait.
//!
//! The state-filter predicates from [`StateFilter`] are pushed down into
//! SQL so listings never materialize more rows than they return, always
//! ordered by start descending.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{MySqlPool, Row};

use lend_core::domain::entities::booking::{Booking, BookingStatus};
use lend_core::domain::value_objects::state_filter::StateFilter;
use lend_core::errors::DomainError;
use lend_core::repositories::BookingRepository;

/// Bind value contributed by a state filter's SQL predicate
enum FilterParam {
    Time(DateTime<Utc>),
    Status(&'static str),
}

/// SQL predicate and bind values for one filter, against table alias `b`
fn filter_predicate(filter: StateFilter, now: DateTime<Utc>) -> (&'static str, Vec<FilterParam>) {
    match filter {
        StateFilter::All => ("", Vec::new()),
        StateFilter::Current => (
            " AND b.start_date <= ? AND b.end_date >= ?",
            vec![FilterParam::Time(now), FilterParam::Time(now)],
        ),
        StateFilter::Past => (" AND b.end_date < ?", vec![FilterParam::Time(now)]),
        StateFilter::Future => (" AND b.start_date > ?", vec![FilterParam::Time(now)]),
        StateFilter::Waiting => (" AND b.status = ?", vec![FilterParam::Status("WAITING")]),
        StateFilter::Approved => (" AND b.status = ?", vec![FilterParam::Status("APPROVED")]),
        StateFilter::Rejected => (" AND b.status = ?", vec![FilterParam::Status("REJECTED")]),
    }
}

/// MySQL implementation of BookingRepository
pub struct MySqlBookingRepository {
    /// Database connection pool
    pool: MySqlPool,
}

impl MySqlBookingRepository {
    /// Create a new MySQL booking repository
    pub fn new(pool: MySqlPool) -> Self {
        Self { pool }
    }

    /// Convert a database row to a Booking entity
    fn row_to_booking(row: &sqlx::mysql::MySqlRow) -> Result<Booking, DomainError> {
        let status_str: String = row
            .try_get("status")
            .map_err(|e| DomainError::Database(format!("Failed to get status: {}", e)))?;
        let status: BookingStatus = status_str
            .parse()
            .map_err(|e| DomainError::Database(format!("Invalid status column: {}", e)))?;

        Ok(Booking {
            id: row
                .try_get("id")
                .map_err(|e| DomainError::Database(format!("Failed to get id: {}", e)))?,
            start: row
                .try_get::<DateTime<Utc>, _>("start_date")
                .map_err(|e| DomainError::Database(format!("Failed to get start_date: {}", e)))?,
            end: row
                .try_get::<DateTime<Utc>, _>("end_date")
                .map_err(|e| DomainError::Database(format!("Failed to get end_date: {}", e)))?,
            item_id: row
                .try_get("item_id")
                .map_err(|e| DomainError::Database(format!("Failed to get item_id: {}", e)))?,
            booker_id: row
                .try_get("booker_id")
                .map_err(|e| DomainError::Database(format!("Failed to get booker_id: {}", e)))?,
            status,
        })
    }

    /// Run one of the two filtered listing queries
    async fn fetch_filtered(
        &self,
        base_sql: &str,
        anchor_id: i64,
        filter: StateFilter,
        now: DateTime<Utc>,
    ) -> Result<Vec<Booking>, DomainError> {
        let (predicate, params) = filter_predicate(filter, now);
        let sql = format!("{}{} ORDER BY b.start_date DESC", base_sql, predicate);

        let mut query = sqlx::query(&sql).bind(anchor_id);
        for param in params {
            query = match param {
                FilterParam::Time(t) => query.bind(t),
                FilterParam::Status(s) => query.bind(s),
            };
        }

        let rows = query
            .fetch_all(&self.pool)
            .await
            .map_err(|e| DomainError::Database(format!("Database query failed: {}", e)))?;

        rows.iter().map(Self::row_to_booking).collect()
    }
}

#[async_trait]
impl BookingRepository for MySqlBookingRepository {
    async fn create(&self, mut booking: Booking) -> Result<Booking, DomainError> {
        let query = r#"
            INSERT INTO bookings (start_date, end_date, item_id, booker_id, status)
            VALUES (?, ?, ?, ?, ?)
        "#;

        let result = sqlx::query(query)
            .bind(booking.start)
            .bind(booking.end)
            .bind(booking.item_id)
            .bind(booking.booker_id)
            .bind(booking.status.as_str())
            .execute(&self.pool)
            .await
            .map_err(|e| DomainError::Database(format!("Failed to create booking: {}", e)))?;

        booking.id = result.last_insert_id() as i64;
        Ok(booking)
    }

    async fn update(&self, booking: Booking) -> Result<Booking, DomainError> {
        // Item, booker and interval are immutable; only the status moves
        let query = r#"
            UPDATE bookings
            SET status = ?
            WHERE id = ?
        "#;

        let result = sqlx::query(query)
            .bind(booking.status.as_str())
            .bind(booking.id)
            .execute(&self.pool)
            .await
            .map_err(|e| DomainError::Database(format!("Failed to update booking: {}", e)))?;

        if result.rows_affected() == 0 {
            return Err(DomainError::not_found("Booking"));
        }
        Ok(booking)
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Booking>, DomainError> {
        let query = r#"
            SELECT id, start_date, end_date, item_id, booker_id, status
            FROM bookings
            WHERE id = ?
            LIMIT 1
        "#;

        let result = sqlx::query(query)
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| DomainError::Database(format!("Database query failed: {}", e)))?;

        match result {
            Some(row) => Ok(Some(Self::row_to_booking(&row)?)),
            None => Ok(None),
        }
    }

    async fn find_all_by_item(&self, item_id: i64) -> Result<Vec<Booking>, DomainError> {
        let query = r#"
            SELECT id, start_date, end_date, item_id, booker_id, status
            FROM bookings
            WHERE item_id = ?
            ORDER BY start_date DESC
        "#;

        let rows = sqlx::query(query)
            .bind(item_id)
            .fetch_all(&self.pool)
            .await
            .map_err(|e| DomainError::Database(format!("Database query failed: {}", e)))?;

        rows.iter().map(Self::row_to_booking).collect()
    }

    async fn find_all_by_booker(
        &self,
        booker_id: i64,
        filter: StateFilter,
        now: DateTime<Utc>,
    ) -> Result<Vec<Booking>, DomainError> {
        let base_sql = r#"
            SELECT b.id, b.start_date, b.end_date, b.item_id, b.booker_id, b.status
            FROM bookings b
            WHERE b.booker_id = ?"#;
        self.fetch_filtered(base_sql, booker_id, filter, now).await
    }

    async fn find_all_by_owner(
        &self,
        owner_id: i64,
        filter: StateFilter,
        now: DateTime<Utc>,
    ) -> Result<Vec<Booking>, DomainError> {
        let base_sql = r#"
            SELECT b.id, b.start_date, b.end_date, b.item_id, b.booker_id, b.status
            FROM bookings b
            JOIN items i ON b.item_id = i.id
            WHERE i.owner_id = ?"#;
        self.fetch_filtered(base_sql, owner_id, filter, now).await
    }
}
