//! Fixed narrative content: documents and the directory tree.
//!
//! Everything here is `'static` data. Sessions only ever read it, so a single
//! catalogue serves any number of sessions.

mod catalogue;
mod tree;

pub use catalogue::{
    CORRUPTED_SOUL_DAT, Document, DocumentKind, GATED_FILE, INTRUSION_TRIGGER, documents,
    find_document,
};
pub use tree::{
    ROOT, canonical_directory, directories, files_visible_in, is_directory, listing, locate_file,
    resolve_path, top_level_directory,
};
