//! Article resolution utilities.

use anyhow::{Context, Result, anyhow};

use crate::domain::ArticleId;
use crate::store::ArticleStore;

/// Resolves an article identifier to an existing id.
///
/// Accepted forms:
/// 1. A list position as printed by `ls` (`0`, `1`, ...)
/// 2. An article id (`A3`, case-insensitive prefix)
pub fn resolve_article(store: &ArticleStore, identifier: &str) -> Result<ArticleId> {
    let identifier = identifier.trim();

    if let Ok(position) = identifier.parse::<usize>() {
        return store
            .articles()
            .get(position)
            .map(|a| *a.id())
            .ok_or_else(|| {
                anyhow!(
                    "no article at position {} ({} articles)",
                    position,
                    store.len()
                )
            });
    }

    let id: ArticleId = identifier.parse().with_context(|| {
        format!(
            "'{}' is neither an article id nor a list position",
            identifier
        )
    })?;
    store.get(&id)?;
    Ok(id)
}
