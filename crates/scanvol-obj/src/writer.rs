//! OBJ serialization.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use scanvol_types::SegmentMesh;

use crate::error::ObjResult;

/// Save a segment mesh to an OBJ file.
///
/// # Errors
///
/// Returns an error if the file cannot be written.
///
/// # Example
///
/// ```no_run
/// use scanvol_obj::{load_obj, save_obj};
///
/// let mesh = load_obj("segment.obj").unwrap();
/// save_obj(&mesh, "copy.obj").unwrap();
/// ```
pub fn save_obj<P: AsRef<Path>>(mesh: &SegmentMesh, path: P) -> ObjResult<()> {
    let file = File::create(path)?;
    let mut writer = BufWriter::new(file);
    write_obj(&mut writer, mesh)
}

/// Write OBJ records to a writer.
///
/// Records are written in the order vertices, normals, uvs, faces, each
/// sequence in its original order. Face corners are re-joined with `/`;
/// absent index groups are written as empty strings, not placeholders, and
/// indices are converted back to 1-based.
///
/// # Errors
///
/// Returns an error if the writer fails.
pub fn write_obj<W: Write>(writer: &mut W, mesh: &SegmentMesh) -> ObjResult<()> {
    for p in &mesh.positions {
        writeln!(writer, "v {} {} {}", p.x, p.y, p.z)?;
    }
    for n in &mesh.normals {
        writeln!(writer, "vn {} {} {}", n.x, n.y, n.z)?;
    }
    for uv in &mesh.uvs {
        writeln!(writer, "vt {} {}", uv.x, uv.y)?;
    }
    for face in &mesh.faces {
        write!(writer, "f")?;
        for corner in &face.corners {
            let joined = corner
                .groups()
                .iter()
                .map(|group| group.map_or_else(String::new, |i| (i + 1).to_string()))
                .collect::<Vec<_>>()
                .join("/");
            write!(writer, " {joined}")?;
        }
        writeln!(writer)?;
    }
    Ok(())
}
