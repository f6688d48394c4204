//! Object-level permission policy for clubs.
//!
//! Reads are open to anyone; writes are reserved for the owner. Callers fold
//! "not authenticated" into the same forbidden outcome as "not the owner".

use crate::models::{Account, Club};

/// Whether `actor` may mutate or soft-delete `club`.
#[must_use]
pub fn can_write(actor: &Account, club: &Club) -> bool {
    actor.id == club.owner_id
}
