use std::{io, path::Path};

/// Source of local file content for the `*_from_file(s)` operations.
pub trait FileSystem {
    async fn read_text_file(&self, path: &Path) -> io::Result<String>;
}

#[derive(Debug, Clone, Copy, Default)]
pub struct TokioFileSystem;

impl FileSystem for TokioFileSystem {
    async fn read_text_file(&self, path: &Path) -> io::Result<String> {
        tokio::fs::read_to_string(path).await
    }
}
