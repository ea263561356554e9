//! JSON manifests describing exported chunks and collected segments.

use std::fs::File;
use std::io::{BufReader, BufWriter};
use std::path::Path;

use serde::{Deserialize, Serialize};

use scanvol_partition::Chunk;

use crate::error::{ExportError, ExportResult};

/// Origin and extent of one clip region, in scan voxel coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClipRecord {
    /// X origin.
    pub x: u32,
    /// Y origin.
    pub y: u32,
    /// Z origin.
    pub z: u32,
    /// Width.
    pub w: u32,
    /// Height.
    pub h: u32,
    /// Depth.
    pub d: u32,
}

/// Shape of one exported image stack.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShapeRecord {
    /// Width.
    pub w: u32,
    /// Height.
    pub h: u32,
    /// Depth.
    pub d: u32,
}

/// Manifest entry for one exported chunk.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChunkRecord {
    /// Chunk id; also the stem of the exported volume file.
    pub id: String,
    /// The chunk's clip region inside the scan volume.
    pub clip: ClipRecord,
    /// Shape of the image stack produced for the chunk.
    pub shape: ShapeRecord,
}

impl ChunkRecord {
    /// Build a record for a chunk and the stack shape produced for it.
    #[must_use]
    pub fn new(chunk: &Chunk, shape: (u32, u32, u32)) -> Self {
        Self {
            id: chunk.id.clone(),
            clip: ClipRecord {
                x: chunk.origin.x,
                y: chunk.origin.y,
                z: chunk.origin.z,
                w: chunk.size.w,
                h: chunk.size.h,
                d: chunk.size.d,
            },
            shape: ShapeRecord {
                w: shape.0,
                h: shape.1,
                d: shape.2,
            },
        }
    }
}

/// Manifest written next to the exported chunk volumes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VolumeManifest {
    /// One record per exported chunk, in emission order.
    #[serde(rename = "nrrd")]
    pub chunks: Vec<ChunkRecord>,
}

/// Manifest entry for one collected segment mesh.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SegmentRecord {
    /// Segment id (the source folder name).
    pub id: String,
    /// Integer bounding-box clip of the whole segment.
    pub clip: ClipRecord,
}

/// Manifest written next to the collected segment meshes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SegmentManifest {
    /// Whether a segment source directory was configured at all.
    pub view_segment: bool,
    /// One record per collected segment.
    #[serde(rename = "obj")]
    pub segments: Vec<SegmentRecord>,
}

/// Write a manifest as pretty-printed JSON.
///
/// # Errors
///
/// Returns an error if the file cannot be created or serialized.
pub fn write_manifest<M: Serialize, P: AsRef<Path>>(manifest: &M, path: P) -> ExportResult<()> {
    let path = path.as_ref();
    let file = File::create(path).map_err(|source| ExportError::IoWrite {
        path: path.to_path_buf(),
        source,
    })?;
    serde_json::to_writer_pretty(BufWriter::new(file), manifest)?;
    Ok(())
}

/// Read a manifest back from JSON.
///
/// # Errors
///
/// Returns an error if the file cannot be read or deserialized.
pub fn load_manifest<M: for<'de> Deserialize<'de>, P: AsRef<Path>>(path: P) -> ExportResult<M> {
    let file = File::open(path)?;
    Ok(serde_json::from_reader(BufReader::new(file))?)
}
