//! Club repository for database operations.
//!
//! Club rows are always fetched joined with the owning account's username,
//! since every serialized representation carries the owner as a username.

use chrono::{DateTime, Utc};
use sqlx::SqlitePool;

use clubdesk_core::{AccountId, ClubId};

use super::RepositoryError;
use crate::models::{Club, NewClub};

#[derive(sqlx::FromRow)]
struct ClubRow {
    id: i64,
    owner_id: i64,
    owner_username: String,
    name: String,
    website: String,
    description: String,
    location: String,
    latitude: f64,
    longitude: f64,
    is_active: bool,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl From<ClubRow> for Club {
    fn from(row: ClubRow) -> Self {
        Self {
            id: ClubId::new(row.id),
            owner_id: AccountId::new(row.owner_id),
            owner_username: row.owner_username,
            name: row.name,
            website: row.website,
            description: row.description,
            location: row.location,
            latitude: row.latitude,
            longitude: row.longitude,
            is_active: row.is_active,
            created_at: row.created_at,
            updated_at: row.updated_at,
        }
    }
}

const SELECT_CLUB: &str = r"
    SELECT c.id, c.owner_id, a.username AS owner_username,
           c.name, c.website, c.description, c.location,
           c.latitude, c.longitude, c.is_active,
           c.created_at, c.updated_at
    FROM club c
    JOIN account a ON a.id = c.owner_id
";

/// Repository for club database operations.
pub struct ClubRepository<'a> {
    pool: &'a SqlitePool,
}

impl<'a> ClubRepository<'a> {
    /// Create a new club repository.
    #[must_use]
    pub const fn new(pool: &'a SqlitePool) -> Self {
        Self { pool }
    }

    /// List all active clubs in insertion order.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    pub async fn list_active(&self) -> Result<Vec<Club>, RepositoryError> {
        let rows = sqlx::query_as::<_, ClubRow>(&format!(
            "{SELECT_CLUB} WHERE c.is_active = 1 ORDER BY c.id ASC"
        ))
        .fetch_all(self.pool)
        .await?;

        Ok(rows.into_iter().map(Club::from).collect())
    }

    /// Get an active club by id.
    ///
    /// Inactive (soft-deleted) clubs are invisible here; all API lookups go
    /// through this method.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    pub async fn get_active(&self, id: ClubId) -> Result<Option<Club>, RepositoryError> {
        let row = sqlx::query_as::<_, ClubRow>(&format!(
            "{SELECT_CLUB} WHERE c.id = ? AND c.is_active = 1"
        ))
        .bind(id)
        .fetch_optional(self.pool)
        .await?;

        Ok(row.map(Club::from))
    }

    /// Get a club by id regardless of its active flag.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    pub async fn get(&self, id: ClubId) -> Result<Option<Club>, RepositoryError> {
        let row = sqlx::query_as::<_, ClubRow>(&format!("{SELECT_CLUB} WHERE c.id = ?"))
            .bind(id)
            .fetch_optional(self.pool)
            .await?;

        Ok(row.map(Club::from))
    }

    /// Create a new active club owned by the given account.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the insert fails.
    /// Returns `RepositoryError::DataCorruption` if the created row cannot be
    /// read back.
    pub async fn create(
        &self,
        owner_id: AccountId,
        new_club: &NewClub,
    ) -> Result<Club, RepositoryError> {
        let now = Utc::now();

        let result = sqlx::query(
            r"
            INSERT INTO club (owner_id, name, website, description, location,
                              latitude, longitude, is_active, created_at, updated_at)
            VALUES (?, ?, ?, ?, ?, ?, ?, 1, ?, ?)
            ",
        )
        .bind(owner_id)
        .bind(&new_club.name)
        .bind(&new_club.website)
        .bind(&new_club.description)
        .bind(&new_club.location)
        .bind(new_club.latitude)
        .bind(new_club.longitude)
        .bind(now)
        .bind(now)
        .execute(self.pool)
        .await?;

        let id = ClubId::new(result.last_insert_rowid());
        self.get_active(id).await?.ok_or_else(|| {
            RepositoryError::DataCorruption(format!("created club {id} not readable"))
        })
    }

    /// Persist the mutable fields of a club.
    ///
    /// The owner and active flag are not writable through this method.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::NotFound` if the club doesn't exist.
    /// Returns `RepositoryError::Database` for other database errors.
    pub async fn update(&self, club: &Club) -> Result<(), RepositoryError> {
        let result = sqlx::query(
            r"
            UPDATE club
            SET name = ?, website = ?, description = ?, location = ?,
                latitude = ?, longitude = ?, updated_at = ?
            WHERE id = ?
            ",
        )
        .bind(&club.name)
        .bind(&club.website)
        .bind(&club.description)
        .bind(&club.location)
        .bind(club.latitude)
        .bind(club.longitude)
        .bind(Utc::now())
        .bind(club.id)
        .execute(self.pool)
        .await?;

        if result.rows_affected() == 0 {
            return Err(RepositoryError::NotFound);
        }

        Ok(())
    }

    /// Soft-delete a club: mark it inactive, keeping the record.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::NotFound` if the club doesn't exist.
    /// Returns `RepositoryError::Database` for other database errors.
    pub async fn soft_delete(&self, id: ClubId) -> Result<(), RepositoryError> {
        let result = sqlx::query(
            r"
            UPDATE club
            SET is_active = 0, updated_at = ?
            WHERE id = ?
            ",
        )
        .bind(Utc::now())
        .bind(id)
        .execute(self.pool)
        .await?;

        if result.rows_affected() == 0 {
            return Err(RepositoryError::NotFound);
        }

        Ok(())
    }
}
