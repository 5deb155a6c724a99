//! On-disk JSON index of article metadata

mod file;

pub use file::{
    INDEX_FILE, IndexError, IndexResult, IndexSnapshot, index_path, load_index, save_index,
};
