//! Ground registration and queries.

use tracing::info;

use crate::entities::Ground;
use crate::errors::domain::{DomainError, NotFoundKind};
use crate::ledger::Ledger;
use crate::repos::grounds;

pub struct GroundService;

impl GroundService {
    pub fn new() -> Self {
        Self
    }

    /// Register a ground. Re-registering an existing `ground_id` replaces
    /// its record.
    pub async fn create_ground<L: Ledger + ?Sized>(
        &self,
        ledger: &L,
        ground_id: &str,
        ground_name: &str,
        available_time_start: u8,
        available_time_end: u8,
        total_hole: u32,
    ) -> Result<Ground, DomainError> {
        let ground = Ground {
            ground_id: ground_id.to_string(),
            ground_name: ground_name.to_string(),
            available_time_start,
            available_time_end,
            total_hole,
        };
        grounds::save(ledger, &ground).await?;
        info!(ground_id, ground_name, "ground registered");
        Ok(ground)
    }

    pub async fn query_ground<L: Ledger + ?Sized>(
        &self,
        ledger: &L,
        ground_id: &str,
    ) -> Result<Ground, DomainError> {
        grounds::find(ledger, ground_id).await?.ok_or_else(|| {
            DomainError::not_found(
                NotFoundKind::Ground,
                format!("ground {ground_id} is not registered"),
            )
        })
    }

    pub async fn query_all_grounds<L: Ledger + ?Sized>(
        &self,
        ledger: &L,
    ) -> Result<Vec<Ground>, DomainError> {
        grounds::find_all(ledger).await
    }
}

impl Default for GroundService {
    fn default() -> Self {
        Self::new()
    }
}
