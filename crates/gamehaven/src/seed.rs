//! Startup seeding of an empty catalog.

use gamehaven_core::catalog::seed_games;
use gamehaven_core::storage::{GameRepository, Result};

/// Inserts the starter catalog when the store holds no games.
///
/// Returns the number of games inserted, 0 when the store was not empty.
pub async fn seed_catalog(repo: &dyn GameRepository) -> Result<usize> {
    let inserted = repo.seed_if_empty(seed_games()).await?;

    if inserted > 0 {
        tracing::info!(inserted, "Seeded empty catalog");
    } else {
        let existing = repo.count_games().await?;
        tracing::debug!(existing, "Catalog already populated, skipping seed");
    }

    Ok(inserted)
}
