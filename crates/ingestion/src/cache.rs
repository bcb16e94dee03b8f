//! Filesystem layout of the local raster cache.

use std::path::{Path, PathBuf};

use ocean_common::{DatasetSpec, MonthId};

/// Directory layout for downloaded archives and their unpacked CSV grids.
///
/// Each dataset gets one directory under the cache root, named after its NEO
/// dataset code. A month is cached as two files in that directory: the
/// `*.CSV.gz` archive exactly as served, and the `*.csv` grid unpacked from
/// it. The unpacked CSV doubles as the completion marker, so a month whose
/// CSV exists never touches the network again.
#[derive(Debug, Clone)]
pub struct CacheLayout {
    root: PathBuf,
}

/// Sidecar path used while the file at `path` is being produced.
pub(crate) fn partial_path(path: &Path) -> PathBuf {
    let mut name = path.as_os_str().to_os_string();
    name.push(".partial");
    PathBuf::from(name)
}

impl CacheLayout {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Directory holding every cached month of one dataset.
    pub fn dataset_dir(&self, dataset: &DatasetSpec) -> PathBuf {
        self.root.join(&dataset.code)
    }

    /// Path of the compressed archive as downloaded from NEO.
    pub fn archive_path(&self, dataset: &DatasetSpec, month: MonthId) -> PathBuf {
        self.dataset_dir(dataset)
            .join(format!("{}_{}.CSV.gz", dataset.code, month))
    }

    /// Path of the unpacked CSV grid.
    pub fn csv_path(&self, dataset: &DatasetSpec, month: MonthId) -> PathBuf {
        self.dataset_dir(dataset)
            .join(format!("{}_{}.csv", dataset.code, month))
    }
}
