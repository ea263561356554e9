//! Per-chunk export pipeline.

use std::path::Path;

use scanvol_obj::load_obj;
use scanvol_partition::{partition_mesh, PartitionParams};
use scanvol_types::SegmentMesh;
use tracing::{debug, info};

use crate::error::{ExportError, ExportResult};
use crate::manifest::{write_manifest, ChunkRecord, VolumeManifest};
use crate::volume::{SamplingParams, VolumeReader, VolumeWriter};

/// Parameters for a chunk export run.
///
/// # Example
///
/// ```
/// use scanvol_export::ExportParams;
///
/// let params = ExportParams::default();
/// assert_eq!(params.extension, "nrrd");
/// assert_eq!(params.partition.chunk_width, 150);
/// ```
#[derive(Debug, Clone)]
pub struct ExportParams {
    /// Chunk grid parameters.
    pub partition: PartitionParams,
    /// Sampling factors forwarded to the volume reader.
    pub sampling: SamplingParams,
    /// File extension for the per-chunk volume files.
    pub extension: String,
}

impl Default for ExportParams {
    fn default() -> Self {
        Self {
            partition: PartitionParams::default(),
            sampling: SamplingParams::default(),
            extension: "nrrd".to_string(),
        }
    }
}

/// Export one volume file per occupied chunk of a segment mesh.
///
/// The mesh is partitioned, then for each chunk the reader materializes an
/// image stack, its shape is checked against the chunk size and sampling
/// factors, and the writer persists it to `<out_dir>/<id>.<extension>`.
/// Chunks are processed strictly in id order; the returned manifest lists
/// them in the same order.
///
/// # Errors
///
/// Fails on the first reader/writer error or shape mismatch; chunks already
/// written stay on disk.
pub fn export_chunks<R: VolumeReader, W: VolumeWriter>(
    mesh: &SegmentMesh,
    params: &ExportParams,
    reader: &R,
    writer: &W,
    out_dir: &Path,
) -> ExportResult<VolumeManifest> {
    std::fs::create_dir_all(out_dir)?;

    let chunks = partition_mesh(mesh, &params.partition);
    info!(
        chunks = chunks.len(),
        out_dir = %out_dir.display(),
        "Exporting chunk volumes"
    );

    let mut records = Vec::with_capacity(chunks.len());
    for chunk in &chunks {
        let stack = reader.read(chunk, &params.sampling)?;

        let expected = params.sampling.expected_shape(&chunk.size);
        if stack.shape() != expected {
            return Err(ExportError::ShapeMismatch {
                id: chunk.id.clone(),
                expected,
                got: stack.shape(),
            });
        }

        let path = out_dir.join(format!("{}.{}", chunk.id, params.extension));
        writer.write(&path, &stack)?;
        debug!(id = %chunk.id, path = %path.display(), "Wrote chunk volume");

        records.push(ChunkRecord::new(chunk, stack.shape()));
    }

    info!(exported = records.len(), "Export complete");
    Ok(VolumeManifest { chunks: records })
}

/// Load a segment OBJ file, export its chunks, and write `meta.json` next
/// to the volume files.
///
/// # Errors
///
/// Fails if the mesh cannot be loaded or any chunk fails to export.
pub fn export_segment<R: VolumeReader, W: VolumeWriter>(
    obj_path: &Path,
    params: &ExportParams,
    reader: &R,
    writer: &W,
    out_dir: &Path,
) -> ExportResult<VolumeManifest> {
    let mesh = load_obj(obj_path)?;
    let manifest = export_chunks(&mesh, params, reader, writer, out_dir)?;
    write_manifest(&manifest, out_dir.join("meta.json"))?;
    Ok(manifest)
}
