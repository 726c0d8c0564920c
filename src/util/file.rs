//! Read-only access to asset file contents.
//!
//! Supports both memory-mapped and buffered reads, mirroring how the
//! archive readers open their inputs.

use std::fs::File;
use std::io::Read;
use std::ops::Deref;
use std::path::Path;

#[cfg(feature = "mmap")]
use memmap2::Mmap;

use super::{Error, Result};

/// Bytes of an asset file.
pub struct AssetBytes {
    inner: BytesInner,
}

enum BytesInner {
    /// Memory-mapped file (preferred for large textures)
    #[cfg(feature = "mmap")]
    Mmap(Mmap),
    /// Whole file read into memory (fallback)
    Owned(Vec<u8>),
}

impl AssetBytes {
    /// Open a file, memory-mapping it when the `mmap` feature is enabled.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        Self::open_opts(path, cfg!(feature = "mmap"))
    }

    /// Open a file with optional memory mapping.
    ///
    /// Empty files are always read, since they cannot be mapped.
    pub fn open_opts(path: impl AsRef<Path>, use_mmap: bool) -> Result<Self> {
        let path = path.as_ref();
        let mut file = File::open(path).map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                Error::FileNotFound(path.to_path_buf())
            } else {
                Error::Io(e)
            }
        })?;

        let size = file.metadata()?.len();

        if use_mmap && size > 0 {
            if let Some(mapped) = Self::map(&file)? {
                tracing::trace!(path = %path.display(), size, "mapped asset file");
                return Ok(mapped);
            }
        }

        let mut data = Vec::with_capacity(size as usize);
        file.read_to_end(&mut data)?;
        tracing::trace!(path = %path.display(), size = data.len(), "read asset file");
        Ok(Self {
            inner: BytesInner::Owned(data),
        })
    }

    #[cfg(feature = "mmap")]
    fn map(file: &File) -> Result<Option<Self>> {
        // Safety: the file is opened read-only and the mapping is never written.
        let mmap = unsafe { Mmap::map(file) }.map_err(|e| Error::MmapFailed(e.to_string()))?;
        Ok(Some(Self {
            inner: BytesInner::Mmap(mmap),
        }))
    }

    #[cfg(not(feature = "mmap"))]
    fn map(_file: &File) -> Result<Option<Self>> {
        Ok(None)
    }

    /// Wrap bytes already in memory.
    pub fn from_vec(data: Vec<u8>) -> Self {
        Self {
            inner: BytesInner::Owned(data),
        }
    }

    /// Whether the contents are memory-mapped.
    pub fn is_mapped(&self) -> bool {
        match self.inner {
            #[cfg(feature = "mmap")]
            BytesInner::Mmap(_) => true,
            BytesInner::Owned(_) => false,
        }
    }
}

impl Deref for AssetBytes {
    type Target = [u8];

    fn deref(&self) -> &[u8] {
        match &self.inner {
            #[cfg(feature = "mmap")]
            BytesInner::Mmap(mmap) => mmap,
            BytesInner::Owned(data) => data,
        }
    }
}

impl AsRef<[u8]> for AssetBytes {
    fn as_ref(&self) -> &[u8] {
        self
    }
}
