//! View-model assembly: joining line rows with viewer-relative state.
//!
//! This is the one piece of real data-shaping logic in the client. Given a
//! page of line rows (already newest-first from the store) and an optional
//! viewer, it produces the [`DisplayLine`] records the views render.
//!
//! Guarantees:
//! - Input ordering is preserved.
//! - With a viewer, the likes and bookmarks membership lookups run
//!   concurrently, scoped to exactly the ids of the given rows, and both
//!   must resolve before any record is produced.
//! - Without a viewer, no lookup is issued and both flags are `false`.
//! - Any lookup failure aborts the whole assembly; partial results are
//!   never returned.

use std::collections::HashSet;

use crate::error::OneLineResult;
use crate::models::{DisplayLine, LineRow};
use crate::store::StoreClient;

/// Assemble display records for a page of lines.
pub async fn assemble_feed(
    store: &StoreClient,
    rows: Vec<LineRow>,
    viewer: Option<&str>,
) -> OneLineResult<Vec<DisplayLine>> {
    let ids: Vec<String> = rows.iter().map(|row| row.id.clone()).collect();

    let (liked, bookmarked) = match viewer {
        Some(user_id) => {
            tokio::try_join!(store.likes_for(user_id, &ids), store.bookmarks_for(user_id, &ids))?
        }
        None => (HashSet::new(), HashSet::new()),
    };

    Ok(rows
        .into_iter()
        .map(|row| {
            let is_liked = liked.contains(&row.id);
            let is_bookmarked = bookmarked.contains(&row.id);
            DisplayLine {
                author: row.author_name().to_string(),
                id: row.id,
                text: row.text,
                author_id: row.author_id,
                theme: row.theme,
                likes: row.likes_count,
                timestamp: row.created_at,
                is_liked,
                is_bookmarked,
            }
        })
        .collect())
}
