mod locate;
mod transaction;
mod version;

pub use locate::{MANIFEST_FILE_NAME, locate_manifests};
pub use transaction::{Transaction, print_summary};
pub use version::{
    VERSION_PREFIX, parse_version_line, read_current_version, rewrite_version_lines,
    write_version,
};
