//! OBJ file I/O for Scanvol segment meshes.
//!
//! Segmentation tools export regions of interest as Wavefront OBJ surface
//! meshes. This crate parses those files into [`SegmentMesh`] values and
//! writes them back out:
//!
//! - `v` / `vn` / `vt` / `f` records are recognized by their leading token
//! - any other record kind is skipped, for forward compatibility
//! - face corners keep their `/`-joined index groups exactly, so absent
//!   sub-indices round-trip as absent
//!
//! # Engine-Agnostic Crate
//!
//! This crate has no engine dependencies. It can be used in:
//! - CLI tools
//! - Servers
//! - Python bindings
//!
//! # Example
//!
//! ```no_run
//! use scanvol_obj::{load_obj, save_obj};
//!
//! let mesh = load_obj("segment.obj").unwrap();
//! save_obj(&mesh, "normalized.obj").unwrap();
//! ```
//!
//! [`SegmentMesh`]: scanvol_types::SegmentMesh

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]

mod error;
mod reader;
mod writer;

pub use error::{ObjError, ObjResult};
pub use reader::{load_obj, parse_obj};
pub use writer::{save_obj, write_obj};
