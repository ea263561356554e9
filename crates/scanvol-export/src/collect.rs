//! Collection of segment meshes from a scan package layout.

use std::fs;
use std::io::ErrorKind;
use std::path::Path;

use scanvol_obj::load_obj;
use scanvol_types::SegmentMesh;
use tracing::{debug, info};

use crate::error::ExportResult;
use crate::manifest::{ClipRecord, SegmentManifest, SegmentRecord};

/// Collect segment meshes into a fresh output directory.
///
/// The input layout is one subdirectory per segment, each holding an OBJ
/// named after the directory (`<id>/<id>.obj`). Each matching OBJ is copied
/// to `<output_dir>/<id>.obj` and its integer bounding-box clip recorded.
/// Subdirectories without a matching OBJ are skipped, as are plain files.
/// Entries are visited in name order so the manifest is deterministic.
///
/// With `input_dir` set to `None` the output directory is still reset and
/// an empty manifest with `view_segment: false` is returned.
///
/// The output directory is deleted and recreated first, so stale meshes
/// from a previous run never survive.
///
/// # Errors
///
/// Fails on directory or copy I/O errors, or when a matched OBJ cannot be
/// parsed.
pub fn collect_segments(
    input_dir: Option<&Path>,
    output_dir: &Path,
) -> ExportResult<SegmentManifest> {
    reset_dir(output_dir)?;

    let Some(input_dir) = input_dir else {
        debug!("No segment source directory configured");
        return Ok(SegmentManifest {
            view_segment: false,
            segments: Vec::new(),
        });
    };

    let mut entries: Vec<_> = fs::read_dir(input_dir)?.collect::<Result<_, _>>()?;
    entries.sort_by_key(std::fs::DirEntry::file_name);

    let mut segments = Vec::new();
    for entry in entries {
        if !entry.file_type()?.is_dir() {
            continue;
        }
        let id = entry.file_name().to_string_lossy().into_owned();
        let obj_path = entry.path().join(format!("{id}.obj"));
        if !obj_path.is_file() {
            debug!(id = %id, "Skipping segment directory without a mesh");
            continue;
        }

        let mesh = load_obj(&obj_path)?;
        fs::copy(&obj_path, output_dir.join(format!("{id}.obj")))?;
        debug!(id = %id, vertices = mesh.vertex_count(), "Collected segment mesh");

        segments.push(SegmentRecord {
            id,
            clip: clip_of(&mesh),
        });
    }

    info!(segments = segments.len(), "Segment collection complete");
    Ok(SegmentManifest {
        view_segment: true,
        segments,
    })
}

/// Integer clip region of a whole segment: truncated bounding-box origin
/// plus truncated extents. The bounding box is already clamped to
/// non-negative coordinates, so the casts cannot wrap.
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn clip_of(mesh: &SegmentMesh) -> ClipRecord {
    let min = mesh.bounds.min;
    let size = mesh.bounds.size();
    ClipRecord {
        x: min.x as u32,
        y: min.y as u32,
        z: min.z as u32,
        w: size.x as u32,
        h: size.y as u32,
        d: size.z as u32,
    }
}

/// Remove `path` if it exists, then recreate it empty.
fn reset_dir(path: &Path) -> ExportResult<()> {
    match fs::remove_dir_all(path) {
        Ok(()) => {}
        Err(err) if err.kind() == ErrorKind::NotFound => {}
        Err(err) => return Err(err.into()),
    }
    fs::create_dir_all(path)?;
    Ok(())
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn write_segment(root: &Path, id: &str, contents: &str) {
        let dir = root.join(id);
        fs::create_dir_all(&dir).unwrap();
        fs::write(dir.join(format!("{id}.obj")), contents).unwrap();
    }

    #[test]
    fn collects_matching_segments_in_name_order() {
        let tmp = tempfile::tempdir().unwrap();
        let input = tmp.path().join("segments");
        let output = tmp.path().join("collected");
        fs::create_dir_all(&input).unwrap();

        write_segment(&input, "20230505164332", "v 0 0 0\nv 400 300 80\n");
        write_segment(&input, "20230503225234", "v 10 10 10\nv 30 50 20\n");
        // A directory without a matching OBJ is skipped.
        fs::create_dir_all(input.join("scratch")).unwrap();
        // So is a plain file at the top level.
        fs::write(input.join("notes.txt"), "ignore me").unwrap();

        let manifest = collect_segments(Some(&input), &output).unwrap();

        assert!(manifest.view_segment);
        assert_eq!(manifest.segments.len(), 2);
        assert_eq!(manifest.segments[0].id, "20230503225234");
        assert_eq!(manifest.segments[1].id, "20230505164332");
        assert!(output.join("20230505164332.obj").is_file());
        assert!(output.join("20230503225234.obj").is_file());

        let clip = manifest.segments[1].clip;
        assert_eq!((clip.x, clip.y, clip.z), (0, 0, 0));
        assert_eq!((clip.w, clip.h, clip.d), (400, 300, 80));
    }

    #[test]
    fn no_input_dir_yields_empty_manifest() {
        let tmp = tempfile::tempdir().unwrap();
        let output = tmp.path().join("collected");

        let manifest = collect_segments(None, &output).unwrap();

        assert!(!manifest.view_segment);
        assert!(manifest.segments.is_empty());
        assert!(output.is_dir());
    }

    #[test]
    fn output_dir_is_reset_between_runs() {
        let tmp = tempfile::tempdir().unwrap();
        let output = tmp.path().join("collected");
        fs::create_dir_all(&output).unwrap();
        fs::write(output.join("stale.obj"), "v 0 0 0\n").unwrap();

        collect_segments(None, &output).unwrap();

        assert!(!output.join("stale.obj").exists());
    }

    #[test]
    fn unparseable_mesh_fails_collection() {
        let tmp = tempfile::tempdir().unwrap();
        let input = tmp.path().join("segments");
        let output = tmp.path().join("collected");
        fs::create_dir_all(&input).unwrap();
        write_segment(&input, "bad", "v 1 not-a-number 3\n");

        assert!(collect_segments(Some(&input), &output).is_err());
    }
}
