use std::collections::HashMap;
use std::future::Future;
use std::hash::Hash;
use std::sync::Arc;

use tokio::sync::RwLock;

use crate::core::error::Result;

/// Logical labels attached to fetched lists. A mutation marks the affected
/// tags stale; the next read under a stale tag refetches. This is the sole
/// consistency mechanism; there is no manual cache write-back.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Tag {
    /// The category list (all languages).
    Categories,
    /// Subcategory list scoped to its parent category.
    SubCategories(i64),
    /// Content-type list scoped to a category; `None` is the unscoped list.
    ContentTypes(Option<i64>),
    /// The global files list and every per-content-type/per-subcategory view.
    Files,
}

/// Every mutation the contract exposes, carrying the scope needed to resolve
/// its invalidation set.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mutation {
    CreateCategory,
    UpdateCategory,
    DeleteCategory,
    CreateSubCategory { category_id: i64 },
    UpdateSubCategory { category_id: i64 },
    DeleteSubCategory { category_id: i64 },
    CreateContentType { category_id: i64 },
    UpdateContentType { category_id: i64 },
    DeleteContentType { category_id: i64 },
    UploadFiles,
    DeleteFile,
}

/// The invalidation graph, kept as one explicit mapping so the consistency
/// contract stays auditable. Subcategory mutations also invalidate the
/// category list because category-level derived views depend on it.
pub fn invalidated_tags(mutation: Mutation) -> Vec<Tag> {
    match mutation {
        Mutation::CreateCategory | Mutation::UpdateCategory | Mutation::DeleteCategory => {
            vec![Tag::Categories]
        }
        Mutation::CreateSubCategory { category_id }
        | Mutation::UpdateSubCategory { category_id }
        | Mutation::DeleteSubCategory { category_id } => {
            vec![Tag::SubCategories(category_id), Tag::Categories]
        }
        Mutation::CreateContentType { category_id }
        | Mutation::UpdateContentType { category_id }
        | Mutation::DeleteContentType { category_id } => {
            vec![
                Tag::ContentTypes(Some(category_id)),
                Tag::ContentTypes(None),
            ]
        }
        Mutation::UploadFiles | Mutation::DeleteFile => vec![Tag::Files],
    }
}

/// Tracks a monotonically increasing version per tag. Cached entries remember
/// the version they were fetched under; a version mismatch means stale.
#[derive(Default)]
pub struct TagRegistry {
    versions: RwLock<HashMap<Tag, u64>>,
}

impl TagRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn version(&self, tag: Tag) -> u64 {
        self.versions.read().await.get(&tag).copied().unwrap_or(0)
    }

    /// Bump every tag the mutation invalidates.
    pub async fn invalidate(&self, mutation: Mutation) {
        let mut versions = self.versions.write().await;
        for tag in invalidated_tags(mutation) {
            *versions.entry(tag).or_insert(0) += 1;
            tracing::debug!(?mutation, ?tag, "cache tag invalidated");
        }
    }
}

struct CacheEntry<V> {
    data: V,
    seen_version: u64,
}

/// Per-service list cache keyed by query parameters. Reads go through
/// `get_or_fetch`; a failed refetch leaves the prior entry untouched.
pub struct TagCache<K, V> {
    registry: Arc<TagRegistry>,
    entries: RwLock<HashMap<K, CacheEntry<V>>>,
}

impl<K, V> TagCache<K, V>
where
    K: Eq + Hash + Clone,
    V: Clone,
{
    pub fn new(registry: Arc<TagRegistry>) -> Self {
        Self {
            registry,
            entries: RwLock::new(HashMap::new()),
        }
    }

    /// Return the cached value for `key` if it was fetched under the tag's
    /// current version, otherwise run `fetch` and cache the result.
    ///
    /// No in-flight request is cancelled on rapid re-triggering; whichever
    /// response resolves last overwrites the entry.
    pub async fn get_or_fetch<F, Fut>(&self, key: K, tag: Tag, fetch: F) -> Result<V>
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = Result<V>>,
    {
        let current = self.registry.version(tag).await;

        {
            let entries = self.entries.read().await;
            if let Some(entry) = entries.get(&key) {
                if entry.seen_version == current {
                    tracing::debug!(?tag, "cache hit");
                    return Ok(entry.data.clone());
                }
                tracing::debug!(?tag, "cache stale, refetching");
            }
        }

        let data = fetch().await?;

        let mut entries = self.entries.write().await;
        entries.insert(
            key,
            CacheEntry {
                data: data.clone(),
                seen_version: current,
            },
        );

        Ok(data)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};

    #[test]
    fn category_mutations_invalidate_category_list() {
        assert_eq!(invalidated_tags(Mutation::CreateCategory), vec![Tag::Categories]);
        assert_eq!(invalidated_tags(Mutation::DeleteCategory), vec![Tag::Categories]);
    }

    #[test]
    fn subcategory_mutations_invalidate_parent_and_category_list() {
        let tags = invalidated_tags(Mutation::CreateSubCategory { category_id: 7 });
        assert_eq!(tags, vec![Tag::SubCategories(7), Tag::Categories]);
    }

    #[test]
    fn content_type_mutations_are_scoped_to_their_category() {
        let tags = invalidated_tags(Mutation::UpdateContentType { category_id: 3 });
        assert_eq!(
            tags,
            vec![Tag::ContentTypes(Some(3)), Tag::ContentTypes(None)]
        );
        assert!(!tags.contains(&Tag::ContentTypes(Some(4))));
    }

    #[test]
    fn file_mutations_invalidate_the_global_files_tag() {
        assert_eq!(invalidated_tags(Mutation::UploadFiles), vec![Tag::Files]);
        assert_eq!(invalidated_tags(Mutation::DeleteFile), vec![Tag::Files]);
    }

    #[tokio::test]
    async fn cached_value_is_reused_until_invalidated() {
        let registry = Arc::new(TagRegistry::new());
        let cache: TagCache<String, Vec<i64>> = TagCache::new(registry.clone());
        let fetches = AtomicUsize::new(0);

        let fetch = || async {
            fetches.fetch_add(1, Ordering::SeqCst);
            Ok(vec![1, 2, 3])
        };

        let first = cache
            .get_or_fetch("en".to_string(), Tag::Categories, fetch)
            .await
            .unwrap();
        let second = cache
            .get_or_fetch("en".to_string(), Tag::Categories, || async {
                fetches.fetch_add(1, Ordering::SeqCst);
                Ok(vec![1, 2, 3])
            })
            .await
            .unwrap();

        assert_eq!(first, second);
        assert_eq!(fetches.load(Ordering::SeqCst), 1);

        registry.invalidate(Mutation::CreateCategory).await;

        cache
            .get_or_fetch("en".to_string(), Tag::Categories, || async {
                fetches.fetch_add(1, Ordering::SeqCst);
                Ok(vec![1, 2, 3, 4])
            })
            .await
            .unwrap();

        assert_eq!(fetches.load(Ordering::SeqCst), 2);
    }

    #[test]
    fn failed_refetch_keeps_prior_entry() {
        tokio_test::block_on(async {
            let registry = Arc::new(TagRegistry::new());
            let cache: TagCache<String, Vec<i64>> = TagCache::new(registry.clone());

            cache
                .get_or_fetch("en".to_string(), Tag::Categories, || async { Ok(vec![1]) })
                .await
                .unwrap();

            registry.invalidate(Mutation::DeleteCategory).await;

            let result = cache
                .get_or_fetch("en".to_string(), Tag::Categories, || async {
                    Err(crate::core::error::ApiError::Network("down".to_string()))
                })
                .await;
            assert!(result.is_err());

            // The stale entry is still there and served once the tag settles.
            registry.invalidate(Mutation::CreateCategory).await;
            let entries = cache.entries.read().await;
            assert_eq!(entries.get("en").map(|e| e.data.clone()), Some(vec![1]));
        });
    }

    #[tokio::test]
    async fn different_languages_cache_independently() {
        let registry = Arc::new(TagRegistry::new());
        let cache: TagCache<String, Vec<i64>> = TagCache::new(registry);
        let fetches = AtomicUsize::new(0);

        for lang in ["en", "hi", "en"] {
            cache
                .get_or_fetch(lang.to_string(), Tag::Categories, || async {
                    fetches.fetch_add(1, Ordering::SeqCst);
                    Ok(vec![])
                })
                .await
                .unwrap();
        }

        assert_eq!(fetches.load(Ordering::SeqCst), 2);
    }
}
