//! File I/O for article content and directories

mod fs;

pub use fs::{
    CONTENT_FILE, FsError, content_path, create_article, read_content, remove_article_dir,
    remove_content, scan_article_dirs, write_atomic,
};
