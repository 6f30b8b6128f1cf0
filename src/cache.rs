/// Lock-free caching of opened datasets for the service layer

use std::path::{Path, PathBuf};
use std::sync::Arc;

use crossbeam::queue::SegQueue;
use dashmap::DashMap;

use crate::dataset::RasterDataset;

/// Lock-free bounded cache of opened datasets keyed by path.
///
/// Datasets are immutable after construction, so entries are shared as
/// `Arc`s and never invalidated, only evicted when the cache is full.
pub struct DatasetCache {
    cache: Arc<DashMap<PathBuf, Arc<RasterDataset>>>,
    lru: Arc<SegQueue<PathBuf>>,
    max_datasets: usize,
}

impl DatasetCache {
    /// Creates a new dataset cache holding at most `max_datasets` entries
    pub fn new(max_datasets: usize) -> Self {
        Self {
            cache: Arc::new(DashMap::new()),
            lru: Arc::new(SegQueue::new()),
            max_datasets: max_datasets.max(1),
        }
    }

    /// Gets a dataset from the cache (lock-free)
    pub fn get(&self, path: &Path) -> Option<Arc<RasterDataset>> {
        if let Some(entry) = self.cache.get(path) {
            self.lru.push(path.to_path_buf());
            return Some(Arc::clone(entry.value()));
        }

        None
    }

    /// Puts a dataset into the cache (lock-free)
    pub fn put(&self, path: PathBuf, dataset: Arc<RasterDataset>) {
        while self.cache.len() >= self.max_datasets {
            if let Some(old_key) = self.lru.pop() {
                self.cache.remove(&old_key);
            } else {
                break;
            }
        }

        self.cache.insert(path.clone(), dataset);
        self.lru.push(path);
    }

    /// Clears the cache
    pub fn clear(&self) {
        self.cache.clear();

        while self.lru.pop().is_some() {}
    }

    /// Returns the current number of cached datasets
    pub fn len(&self) -> usize {
        self.cache.len()
    }

    /// Returns whether the cache is empty
    pub fn is_empty(&self) -> bool {
        self.cache.is_empty()
    }
}

impl Clone for DatasetCache {
    fn clone(&self) -> Self {
        Self {
            cache: Arc::clone(&self.cache),
            lru: Arc::clone(&self.lru),
            max_datasets: self.max_datasets,
        }
    }
}

impl Default for DatasetCache {
    fn default() -> Self {
        Self::new(8)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::source::DecodedGrid;
    use crate::types::GridShape;

    fn dataset() -> Arc<RasterDataset> {
        Arc::new(
            RasterDataset::from_grid(DecodedGrid::new(
                GridShape::new(1, 1, 1),
                [-123.0, 1.0, 0.0, 45.0, 0.0, -1.0],
                vec![7.0],
            ))
            .unwrap(),
        )
    }

    #[test]
    fn test_cache_basic() {
        let cache = DatasetCache::new(2);
        let path = PathBuf::from("/data/a.tif");

        cache.put(path.clone(), dataset());

        assert_eq!(cache.len(), 1);
        assert_eq!(cache.get(&path).unwrap().bands(), 1);
        assert!(cache.get(Path::new("/data/other.tif")).is_none());
    }

    #[test]
    fn test_cache_eviction_respects_bound() {
        let cache = DatasetCache::new(2);

        cache.put(PathBuf::from("/data/a.tif"), dataset());
        cache.put(PathBuf::from("/data/b.tif"), dataset());
        cache.put(PathBuf::from("/data/c.tif"), dataset());

        assert!(cache.len() <= 2);
    }

    #[test]
    fn test_cache_clear() {
        let cache = DatasetCache::new(4);

        cache.put(PathBuf::from("/data/a.tif"), dataset());
        cache.put(PathBuf::from("/data/b.tif"), dataset());

        assert_eq!(cache.len(), 2);

        cache.clear();

        assert_eq!(cache.len(), 0);
        assert!(cache.is_empty());
    }

    #[test]
    fn test_cache_shared_between_clones() {
        let cache = DatasetCache::new(4);
        let clone = cache.clone();

        cache.put(PathBuf::from("/data/a.tif"), dataset());

        assert!(clone.get(Path::new("/data/a.tif")).is_some());
    }
}
