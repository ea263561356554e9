//! Chunk volume export for Scanvol.
//!
//! This crate drives the per-chunk extraction pipeline:
//!
//! - **Export** - partition a segment mesh and write one volume file per
//!   occupied chunk, plus a `meta.json` manifest
//! - **Collect** - gather segment OBJ files from a scan package into a
//!   fresh output directory with their own manifest
//! - **Manifests** - serde types for the `meta.json` documents
//!
//! The actual voxel I/O is behind the [`VolumeReader`] and [`VolumeWriter`]
//! traits, so the pipeline stays independent of any particular volumetric
//! file format.
//!
//! # Example
//!
//! ```no_run
//! use scanvol_export::{export_segment, ExportParams, ImageStack, SamplingParams};
//! use scanvol_export::{ExportResult, VolumeReader, VolumeWriter};
//! use scanvol_partition::Chunk;
//! use std::path::Path;
//!
//! struct Reader;
//! impl VolumeReader for Reader {
//!     fn read(&self, chunk: &Chunk, sampling: &SamplingParams) -> ExportResult<ImageStack> {
//!         let (w, h, d) = sampling.expected_shape(&chunk.size);
//!         Ok(ImageStack::new(w, h, d))
//!     }
//! }
//!
//! struct Writer;
//! impl VolumeWriter for Writer {
//!     fn write(&self, _path: &Path, _stack: &ImageStack) -> ExportResult<()> {
//!         Ok(())
//!     }
//! }
//!
//! let manifest = export_segment(
//!     Path::new("segment.obj"),
//!     &ExportParams::default(),
//!     &Reader,
//!     &Writer,
//!     Path::new("out"),
//! ).unwrap();
//! println!("exported {} chunks", manifest.chunks.len());
//! ```
//!
//! # Quality Standards
//!
//! - Zero clippy/doc warnings
//! - Zero `unwrap`/`expect` in library code

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]

mod collect;
mod error;
mod manifest;
mod pipeline;
mod stack;
mod volume;

pub use collect::collect_segments;
pub use error::{ExportError, ExportResult};
pub use manifest::{
    load_manifest, write_manifest, ChunkRecord, ClipRecord, SegmentManifest, SegmentRecord,
    ShapeRecord, VolumeManifest,
};
pub use pipeline::{export_chunks, export_segment, ExportParams};
pub use stack::ImageStack;
pub use volume::{SamplingParams, VolumeReader, VolumeWriter};
