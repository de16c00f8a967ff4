//! Menu labels and prompt texts shown by the application

pub const CHANGE_DIR: &str = "Change working directory";
pub const PDF_TO_DOCX: &str = "Convert PDF to DOCX";
pub const DOCX_TO_PDF: &str = "Convert DOCX to PDF";
pub const COMPRESS_IMAGES: &str = "Compress images";
pub const REMOVE_GROUP: &str = "Remove a group of files";
pub const EXIT: &str = "Exit";

pub const BACK: &str = "Back";
pub const NO_FILES: &str = "No matching files";

pub const COMPRESS_ALL: &str = "Compress all files in directory";

pub const REMOVE_STARTS_WITH: &str = "Remove all files starting with a substring";
pub const REMOVE_ENDS_WITH: &str = "Remove all files ending with a substring";
pub const REMOVE_CONTAINS: &str = "Remove all files containing a substring";
pub const REMOVE_BY_EXTENSION: &str = "Remove all files with an extension";

pub const CHANGE_DIR_QUESTION: &str = "Do you really want to change the working directory?";
pub const PATH_PROMPT: &str = "Enter path";
pub const QUALITY_PROMPT: &str = "Enter compression quality (0 to 100)";
pub const SUBSTRING_PROMPT: &str = "Enter substring";
pub const EXTENSION_PROMPT: &str = "Enter extension";
