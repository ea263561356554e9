//! API Regression Tests for the Scanvol Crate Ecosystem
//!
//! These tests serve as a regression suite to ensure the public API remains
//! stable and consistent across the scanvol crate ecosystem. They are
//! organized in 4 tiers of increasing complexity:
//!
//! - Tier 1: Foundation (scanvol-types, bounding boxes)
//! - Tier 2: Mesh I/O (scanvol-obj, parse and serialize)
//! - Tier 3: Partitioning (scanvol-partition, chunk grids)
//! - Tier 4: Export (scanvol-export, full pipeline with mock volume I/O)
//!
//! If any of these tests fail after API changes, it indicates a breaking
//! change that needs documentation in CHANGELOG.md and a version bump.

// Allow test-specific patterns
#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]

use scanvol::{export, obj, prelude::*, types};

/// A segment spanning three chunk columns of the default grid.
fn spread_positions() -> Vec<Point3<f64>> {
    vec![
        Point3::new(0.0, 0.0, 0.0),
        Point3::new(400.0, 300.0, 80.0),
        Point3::new(310.0, 10.0, 10.0),
        Point3::new(10.0, 160.0, 20.0),
    ]
}

fn spread_mesh() -> SegmentMesh {
    SegmentMesh::from_parts(spread_positions(), vec![], vec![], vec![]).unwrap()
}

// =============================================================================
// TIER 1: Foundation - Types and Bounding Boxes
// =============================================================================

mod tier1_foundation {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn mesh_construction_from_parts() {
        let mesh = spread_mesh();
        assert_eq!(mesh.vertex_count(), 4);
        assert_eq!(mesh.face_count(), 0);

        // Empty position arrays have no bounding box
        assert!(SegmentMesh::from_parts(vec![], vec![], vec![], vec![]).is_none());
    }

    #[test]
    fn centroid_deviation_bounds() {
        let mesh = spread_mesh();
        // Centroid (180, 117.5, 27.5); the largest per-axis deviations put
        // the symmetric box below zero, so the minimum corner clamps.
        assert_relative_eq!(mesh.bounds.min.x, 0.0);
        assert_relative_eq!(mesh.bounds.max.x, 400.0);
        assert_relative_eq!(mesh.bounds.min.y, 0.0);
        assert_relative_eq!(mesh.bounds.max.y, 300.0);
        assert_relative_eq!(mesh.bounds.max.z, 80.0);
    }

    #[test]
    fn bounding_box_queries() {
        let bounds = types::BoundingBox::from_positions(&spread_positions()).unwrap();
        assert!(bounds.contains(&Point3::new(200.0, 100.0, 40.0)));
        assert!(!bounds.contains(&Point3::new(500.0, 100.0, 40.0)));
        assert!(!bounds.is_degenerate());
    }
}

// =============================================================================
// TIER 2: Mesh I/O - OBJ Parse and Serialize
// =============================================================================

mod tier2_mesh_io {
    use super::*;

    const TRIANGLE_OBJ: &str = "\
v 0 0 0
v 400 300 80
v 310 10 10
vt 0.5 0.5
vn 0 0 1
f 1/1/1 2/1/1 3/1/1
";

    #[test]
    fn parse_obj_from_reader() {
        let mesh = obj::parse_obj(TRIANGLE_OBJ.as_bytes()).unwrap();
        assert_eq!(mesh.vertex_count(), 3);
        assert_eq!(mesh.normals.len(), 1);
        assert_eq!(mesh.uvs.len(), 1);
        assert_eq!(mesh.face_count(), 1);
        // Face indices are stored 0-based
        assert_eq!(mesh.faces[0].corners[0].position(), Some(0));
    }

    #[test]
    fn file_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("segment.obj");
        std::fs::write(&path, TRIANGLE_OBJ).unwrap();

        let mesh = load_obj(&path).unwrap();
        let out = dir.path().join("copy.obj");
        save_obj(&mesh, &out).unwrap();

        let reloaded = load_obj(&out).unwrap();
        assert_eq!(reloaded.vertex_count(), mesh.vertex_count());
        assert_eq!(reloaded.faces, mesh.faces);
    }

    #[test]
    fn load_errors_are_typed() {
        let missing = load_obj("does/not/exist.obj");
        assert!(matches!(missing, Err(obj::ObjError::FileNotFound { .. })));

        let empty = obj::parse_obj("# comment only\n".as_bytes());
        assert!(matches!(empty, Err(obj::ObjError::EmptyMesh)));
    }
}

// =============================================================================
// TIER 3: Partitioning - Chunk Grids
// =============================================================================

mod tier3_partitioning {
    use super::*;
    use scanvol::partition::{ChunkOrigin, ChunkSize};

    #[test]
    fn default_grid_over_spread_mesh() {
        let chunks = partition_mesh(&spread_mesh(), &PartitionParams::default());

        // Occupied cells in x-major, y-mid, z-minor walk order, with dense
        // sequential ids.
        assert_eq!(chunks.len(), 3);
        assert_eq!(chunks[0].id, "0");
        assert_eq!(chunks[0].origin, ChunkOrigin::new(0, 0, 0));
        assert_eq!(chunks[1].origin, ChunkOrigin::new(0, 150, 0));
        assert_eq!(chunks[2].origin, ChunkOrigin::new(300, 0, 0));

        // The trailing x column is clamped to the bounding box.
        assert_eq!(chunks[2].size, ChunkSize::new(100, 150, 100));
    }

    #[test]
    fn chunk_membership_is_half_open() {
        let chunks = partition_mesh(&spread_mesh(), &PartitionParams::default());
        let first = &chunks[0];
        assert!(first.contains(&Point3::new(0.0, 0.0, 0.0)));
        assert!(!first.contains(&Point3::new(150.0, 0.0, 0.0)));
    }

    #[test]
    fn custom_stride() {
        let params = PartitionParams::uniform(200);
        let chunks = partition_mesh(&spread_mesh(), &params);
        // x origins 0 and 200, y origins 0 and 200. Cell (0, 0) holds the
        // first, (200, 0) the third vertex; the extreme corner at
        // (400, 300, 80) sits on the boundary and lands nowhere.
        assert_eq!(chunks.len(), 2);
        assert_eq!(chunks[0].origin, ChunkOrigin::new(0, 0, 0));
        assert_eq!(chunks[1].origin, ChunkOrigin::new(200, 0, 0));
    }
}

// =============================================================================
// TIER 4: Export - Full Pipeline with Mock Volume I/O
// =============================================================================

mod tier4_export {
    use super::*;
    use std::path::{Path, PathBuf};
    use std::sync::Mutex;

    use scanvol::export::{
        collect_segments, export_chunks, load_manifest, ExportResult, ImageStack, SamplingParams,
        VolumeManifest,
    };
    use scanvol::partition::Chunk;

    struct ZeroReader;

    impl VolumeReader for ZeroReader {
        fn read(&self, chunk: &Chunk, sampling: &SamplingParams) -> ExportResult<ImageStack> {
            let (w, h, d) = sampling.expected_shape(&chunk.size);
            Ok(ImageStack::new(w, h, d))
        }
    }

    #[derive(Default)]
    struct RecordingWriter {
        written: Mutex<Vec<PathBuf>>,
    }

    impl VolumeWriter for RecordingWriter {
        fn write(&self, path: &Path, _stack: &ImageStack) -> ExportResult<()> {
            self.written.lock().unwrap().push(path.to_path_buf());
            Ok(())
        }
    }

    #[test]
    fn export_segment_end_to_end() {
        let dir = tempfile::tempdir().unwrap();
        let obj_path = dir.path().join("segment.obj");
        save_obj(&spread_mesh(), &obj_path).unwrap();

        let out_dir = dir.path().join("volume");
        let writer = RecordingWriter::default();
        let manifest = export_segment(
            &obj_path,
            &ExportParams::default(),
            &ZeroReader,
            &writer,
            &out_dir,
        )
        .unwrap();

        assert_eq!(manifest.chunks.len(), 3);
        assert_eq!(writer.written.lock().unwrap().len(), 3);

        // The manifest on disk matches the one returned.
        let loaded: VolumeManifest = load_manifest(out_dir.join("meta.json")).unwrap();
        assert_eq!(loaded, manifest);
        assert_eq!(loaded.chunks[2].clip.x, 300);
        assert_eq!(loaded.chunks[2].shape.w, 100);
    }

    #[test]
    fn downsampled_export_records_reduced_shapes() {
        let dir = tempfile::tempdir().unwrap();
        let writer = RecordingWriter::default();
        let params = ExportParams {
            sampling: SamplingParams { raw: 2, tif: 1 },
            ..ExportParams::default()
        };
        let manifest =
            export_chunks(&spread_mesh(), &params, &ZeroReader, &writer, dir.path()).unwrap();

        // Clips stay in full scan coordinates; shapes are halved.
        assert_eq!(manifest.chunks[0].clip.w, 150);
        assert_eq!(manifest.chunks[0].shape.w, 75);
        assert_eq!(manifest.chunks[0].shape.d, 50);
    }

    #[test]
    fn segment_collection_end_to_end() {
        let tmp = tempfile::tempdir().unwrap();
        let input = tmp.path().join("segments");
        let seg_dir = input.join("20230505164332");
        std::fs::create_dir_all(&seg_dir).unwrap();
        save_obj(&spread_mesh(), seg_dir.join("20230505164332.obj")).unwrap();

        let output = tmp.path().join("collected");
        let manifest = collect_segments(Some(&input), &output).unwrap();

        assert!(manifest.view_segment);
        assert_eq!(manifest.segments.len(), 1);
        assert_eq!(manifest.segments[0].clip.w, 400);
        assert!(output.join("20230505164332.obj").is_file());
    }

    #[test]
    fn export_module_reexports() {
        let _ = export::ExportParams::default();
        let _ = export::SamplingParams::default();
        let stack = export::ImageStack::new(2, 2, 2);
        assert_eq!(stack.voxel_count(), 8);
    }
}
