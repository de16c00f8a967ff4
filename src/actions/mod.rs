//! Action library - the file operations menus trigger

pub mod compress;
pub mod convert;
pub mod fs;
pub mod remove;

pub use compress::{compress_all, compress_image, CompressionReport, IMAGE_EXTENSIONS};
pub use convert::{convert_file, ConversionKind, DocumentConverter, OfficeConverter};
pub use fs::{files_with_extensions, is_directory, is_regular_file, list_entries, list_files};
pub use remove::{remove_matching, select_matching, NameFilter};
