//! Collaborator seams for volume extraction and persistence.

use std::path::Path;

use scanvol_partition::{Chunk, ChunkSize};

use crate::error::ExportResult;
use crate::stack::ImageStack;

/// Downsampling factors applied by the volume reader.
///
/// The source volume may have been resampled once when it was acquired
/// (`raw`) and once when it was converted to an image stack (`tif`); the
/// combined factor relates a chunk's extent to the shape of the stack read
/// for it.
///
/// # Example
///
/// ```
/// use scanvol_export::SamplingParams;
/// use scanvol_partition::ChunkSize;
///
/// let sampling = SamplingParams::default();
/// assert_eq!(sampling.factor(), 1);
/// assert_eq!(sampling.expected_shape(&ChunkSize::new(150, 150, 100)), (150, 150, 100));
///
/// let halved = SamplingParams { raw: 2, tif: 1 };
/// assert_eq!(halved.expected_shape(&ChunkSize::new(150, 150, 100)), (75, 75, 50));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SamplingParams {
    /// Sampling factor of the raw scan volume.
    pub raw: u32,
    /// Sampling factor of the image-stack conversion.
    pub tif: u32,
}

impl Default for SamplingParams {
    fn default() -> Self {
        Self { raw: 1, tif: 1 }
    }
}

impl SamplingParams {
    /// The combined sampling factor. Never less than 1.
    #[must_use]
    pub const fn factor(&self) -> u32 {
        let f = self.raw.saturating_mul(self.tif);
        if f == 0 {
            1
        } else {
            f
        }
    }

    /// The stack shape a reader is expected to produce for a chunk of the
    /// given size: each extent divided by the combined factor, never below 1.
    #[must_use]
    pub const fn expected_shape(&self, size: &ChunkSize) -> (u32, u32, u32) {
        let f = self.factor();
        (
            max_one(size.w / f),
            max_one(size.h / f),
            max_one(size.d / f),
        )
    }
}

const fn max_one(v: u32) -> u32 {
    if v == 0 {
        1
    } else {
        v
    }
}

/// External collaborator that materializes one image stack per chunk from
/// the source scan volume.
pub trait VolumeReader {
    /// Read the sub-volume covered by `chunk`, downsampled by `sampling`.
    ///
    /// # Errors
    ///
    /// Implementations report their own I/O or decoding failures.
    fn read(&self, chunk: &Chunk, sampling: &SamplingParams) -> ExportResult<ImageStack>;
}

/// External collaborator that persists one image stack to a volumetric file.
pub trait VolumeWriter {
    /// Write `stack` to `path` as a single volumetric file.
    ///
    /// # Errors
    ///
    /// Implementations report their own I/O or encoding failures.
    fn write(&self, path: &Path, stack: &ImageStack) -> ExportResult<()>;
}
