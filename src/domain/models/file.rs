#[derive(Debug, Clone)]
pub struct FileData {
    pub content: Vec<u8>,
    pub filename: String,
    pub content_type: Option<String>,
}

impl FileData {
    pub fn new(content: Vec<u8>, filename: String, content_type: Option<String>) -> Self {
        Self {
            content,
            filename,
            content_type,
        }
    }

    pub fn size(&self) -> u64 {
        self.content.len() as u64
    }

    /// Key under which the payload lands in the blob store.
    pub fn storage_key(&self) -> &str {
        &self.filename
    }
}
