//! Club domain types.

use chrono::{DateTime, Utc};

use clubdesk_core::{AccountId, ClubId};

/// A community club (domain type).
///
/// `owner_username` is denormalized from the owning account because every
/// serialized representation carries the owner as a username string.
#[derive(Debug, Clone)]
pub struct Club {
    /// Unique club ID.
    pub id: ClubId,
    /// Account that created the club. Immutable after creation.
    pub owner_id: AccountId,
    /// Username of the owning account.
    pub owner_username: String,
    /// Club name.
    pub name: String,
    /// Club website URL.
    pub website: String,
    /// Free-text description.
    pub description: String,
    /// Free-text location.
    pub location: String,
    /// Latitude. Plain numeric, no bounds validation.
    pub latitude: f64,
    /// Longitude. Plain numeric, no bounds validation.
    pub longitude: f64,
    /// Soft-delete flag; inactive clubs are invisible to the API.
    pub is_active: bool,
    /// When the club was created.
    pub created_at: DateTime<Utc>,
    /// When the club was last updated.
    pub updated_at: DateTime<Utc>,
}

/// Validated field set for creating a club.
///
/// The owner is never part of the payload; it is supplied separately as the
/// acting identity.
#[derive(Debug, Clone)]
pub struct NewClub {
    pub name: String,
    pub website: String,
    pub description: String,
    pub location: String,
    pub latitude: f64,
    pub longitude: f64,
}
