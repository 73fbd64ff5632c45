// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Item discovery and source deduplication.
//!
//! Which strategy runs depends on the host generation:
//!
//! - **Legacy hosts** (below the item-list threshold) have no list primitive.
//!   The context item (or the host's base item) is searched directly and a
//!   single record is returned.
//! - **Current hosts** report a comma-separated `itemlist` for the context.
//!   Each id is resolved independently; ids that fail to resolve (stale,
//!   removed) are dropped without failing the listing.
//!
//! Results are then grouped by source id so linked instances collapse into
//! one [`SourceIdentity`].

use std::collections::HashSet;

use futures::future::join_all;
use stagehand_port::{ItemId, SourceId};
use tracing::{debug, instrument};

use crate::error::{SdkError, SdkResult};
use crate::host::Host;
use crate::identity::SourceIdentity;
use crate::item::keys;

/// Discovers the items visible from the current context.
///
/// Holds no state between calls: every call re-queries the host and builds
/// its own maps, so concurrent enumerations never interfere.
#[derive(Debug, Clone, Copy)]
pub struct ItemEnumerator<'h> {
    host: &'h Host,
}

impl<'h> ItemEnumerator<'h> {
    /// Enumerate through `host`.
    pub fn new(host: &'h Host) -> Self {
        Self { host }
    }

    /// Unique sources visible from `context_item` (or the local context).
    ///
    /// One identity per distinct source id, in order of first occurrence.
    #[instrument(skip(self))]
    pub async fn enumerate(&self, context_item: Option<&ItemId>) -> SdkResult<Vec<SourceIdentity>> {
        let items = self.items(context_item).await?;
        let sources = dedupe_by_source(items);
        debug!(count = sources.len(), "enumerated unique sources");
        Ok(sources)
    }

    /// Every resolvable item instance visible from `context_item`, not
    /// deduplicated, in host list order.
    pub async fn items(&self, context_item: Option<&ItemId>) -> SdkResult<Vec<SourceIdentity>> {
        let context = self.host.context();
        if context.is_extension() {
            return Err(SdkError::UnsupportedContext(context.execution_context()));
        }

        self.host.readiness().wait().await?;

        let gate = self.host.gate();
        if !gate.supports_item_list() {
            debug!(version = %self.host.version(), "host predates itemlist; using direct search");
            return self.legacy_single(context_item).await.map(|one| vec![one]);
        }

        let slot = match context_item {
            Some(id) => Some(self.host.attach(id).await?),
            None => None,
        };
        let raw = self.host.get_property(keys::ITEM_LIST, slot.as_ref()).await?;
        let ids = split_item_list(&raw);
        Ok(self.resolve_all(ids).await)
    }

    async fn legacy_single(&self, context_item: Option<&ItemId>) -> SdkResult<SourceIdentity> {
        let id = match context_item {
            Some(id) => id.clone(),
            None => self
                .host
                .context()
                .base_item_id()
                .ok_or_else(|| SdkError::NotFound("no base item for this context".into()))?,
        };
        let record = self.host.search_item(&id).await?;
        Ok(SourceIdentity::from_record(&record))
    }

    /// Resolve every id concurrently; failures become "no result".
    async fn resolve_all(&self, ids: Vec<ItemId>) -> Vec<SourceIdentity> {
        let lookups = ids.iter().map(|id| async move {
            match self.host.search_item(id).await {
                Ok(record) => Some(SourceIdentity::from_record(&record)),
                Err(err) => {
                    debug!(item = %id, error = %err, "dropping unresolvable item");
                    None
                }
            }
        });
        join_all(lookups).await.into_iter().flatten().collect()
    }
}

/// Split the host's `itemlist` value. Blank entries are ignored.
pub fn split_item_list(raw: &str) -> Vec<ItemId> {
    raw.split(',')
        .map(str::trim)
        .filter(|id| !id.is_empty())
        .map(ItemId::new)
        .collect()
}

/// Keep the first identity seen for each source id.
pub fn dedupe_by_source(items: Vec<SourceIdentity>) -> Vec<SourceIdentity> {
    let mut seen: HashSet<SourceId> = HashSet::with_capacity(items.len());
    items
        .into_iter()
        .filter(|item| seen.insert(item.source_id.clone()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use stagehand_port::PropertyBag;

    fn ident(id: &str, src: &str) -> SourceIdentity {
        let bag: PropertyBag = [("id", id), ("srcid", src)].into_iter().collect();
        SourceIdentity::from_properties(bag, 0)
    }

    #[test]
    fn split_ignores_blanks_and_whitespace() {
        let ids = split_item_list(" {A}, ,{B},,{C} ");
        let raw: Vec<_> = ids.iter().map(ItemId::as_str).collect();
        assert_eq!(raw, vec!["{A}", "{B}", "{C}"]);
        assert!(split_item_list("").is_empty());
    }

    #[test]
    fn dedupe_keeps_first_occurrence_order() {
        let out = dedupe_by_source(vec![
            ident("1", "S2"),
            ident("2", "S1"),
            ident("3", "S2"),
            ident("4", "S1"),
            ident("5", "S3"),
        ]);
        let ids: Vec<_> = out.iter().map(|i| i.id.as_str()).collect();
        assert_eq!(ids, vec!["1", "2", "5"]);
    }
}
