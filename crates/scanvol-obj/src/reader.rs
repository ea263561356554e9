//! OBJ parsing.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use scanvol_types::{Face, FaceCorner, Point2, Point3, SegmentMesh, Vector3};

use crate::error::{ObjError, ObjResult};

/// Load a segment mesh from an OBJ file.
///
/// # Arguments
///
/// * `path` - Path to the OBJ file
///
/// # Errors
///
/// Returns an error if:
/// - The file cannot be read
/// - A `v`/`vn`/`vt`/`f` record is malformed
/// - The file contains zero vertices (the bounding box would be undefined)
///
/// # Example
///
/// ```no_run
/// use scanvol_obj::load_obj;
///
/// let mesh = load_obj("segment.obj").unwrap();
/// println!("{} vertices, {} faces", mesh.vertex_count(), mesh.face_count());
/// ```
pub fn load_obj<P: AsRef<Path>>(path: P) -> ObjResult<SegmentMesh> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|e| {
        if e.kind() == std::io::ErrorKind::NotFound {
            ObjError::FileNotFound {
                path: path.to_path_buf(),
            }
        } else {
            ObjError::Io(e)
        }
    })?;
    parse_obj(BufReader::new(file))
}

/// Parse OBJ records from a reader.
///
/// Each line's leading token selects the record type: `v` appends a vertex
/// position, `vn` a normal, `vt` a texture coordinate, `f` a face. Lines
/// with any other (or no) leading token are ignored. Face indices are
/// 1-based on disk and converted to 0-based here.
///
/// # Errors
///
/// Returns an error for malformed records or a vertex-free file.
///
/// # Example
///
/// ```
/// use scanvol_obj::parse_obj;
///
/// let source = "v 1 2 3\nv 4 5 6\nf 1 2 1\n";
/// let mesh = parse_obj(source.as_bytes()).unwrap();
/// assert_eq!(mesh.vertex_count(), 2);
/// assert_eq!(mesh.face_count(), 1);
/// ```
pub fn parse_obj<R: BufRead>(reader: R) -> ObjResult<SegmentMesh> {
    let mut positions = Vec::new();
    let mut normals = Vec::new();
    let mut uvs = Vec::new();
    let mut faces = Vec::new();

    for line in reader.lines() {
        let line = line?;
        let mut tokens = line.split_whitespace();
        match tokens.next() {
            Some("v") => {
                let [x, y, z] = parse_components(&mut tokens, "v")?;
                positions.push(Point3::new(x, y, z));
            }
            Some("vn") => {
                let [x, y, z] = parse_components(&mut tokens, "vn")?;
                normals.push(Vector3::new(x, y, z));
            }
            Some("vt") => {
                let [u, v] = parse_components(&mut tokens, "vt")?;
                uvs.push(Point2::new(u, v));
            }
            Some("f") => faces.push(parse_face(tokens)?),
            _ => {}
        }
    }

    SegmentMesh::from_parts(positions, normals, uvs, faces).ok_or(ObjError::EmptyMesh)
}

/// Parse the leading `N` float components of a record. Trailing components
/// (e.g. a `w` coordinate on `v` records) are ignored.
fn parse_components<'a, const N: usize>(
    tokens: &mut impl Iterator<Item = &'a str>,
    record: &str,
) -> ObjResult<[f64; N]> {
    let mut components = [0.0; N];
    for component in &mut components {
        let token = tokens.next().ok_or_else(|| {
            ObjError::invalid_content(format!("`{record}` record needs {N} components"))
        })?;
        *component = token.parse()?;
    }
    Ok(components)
}

fn parse_face<'a>(tokens: impl Iterator<Item = &'a str>) -> ObjResult<Face> {
    let mut corners = Vec::new();
    for token in tokens {
        let mut groups = Vec::new();
        for group in token.split('/') {
            if group.is_empty() {
                groups.push(None);
            } else {
                let index: u32 = group.parse()?;
                let index = index.checked_sub(1).ok_or_else(|| {
                    ObjError::invalid_content("face indices are 1-based; 0 is not valid")
                })?;
                groups.push(Some(index));
            }
        }
        corners.push(FaceCorner::new(groups));
    }

    if corners.len() < 3 {
        return Err(ObjError::invalid_content(format!(
            "face has {} corners, need at least 3",
            corners.len()
        )));
    }
    Ok(Face::new(corners))
}
