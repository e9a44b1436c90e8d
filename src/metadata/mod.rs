/*!
 * Metadata Module
 * Operation model and metadata file reader
 */

pub mod parser;
pub mod types;

// Re-export public API
pub use parser::{load_metadata, parse_metadata, METADATA_FOOTER, METADATA_HEADER};
pub use types::{
    IoDirection, Marker, MemoryAction, MetadataError, MetadataResult, Operation,
};

/// Human-readable dump of an operation list
pub fn display_metadata(operations: &[Operation]) -> String {
    let mut out = String::from("Meta-Data File Display\n----------------------\n");
    for (index, op) in operations.iter().enumerate() {
        out.push_str(&format!("{:>4}: {}\n", index, op));
    }
    out
}
