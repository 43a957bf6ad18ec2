use pagesmith_compiler_html::PageStore;
use pagesmith_model::Page;
use std::path::PathBuf;

/// Directory-backed page store: one `<id>.page.json` record per page.
pub struct FilePageStore {
    root: PathBuf,
}

impl FilePageStore {
    pub fn new(root: PathBuf) -> Self {
        Self { root }
    }
}

impl PageStore for FilePageStore {
    fn page(&self, id: &str) -> Result<Option<Page>, String> {
        // Ids are opaque keys, never paths.
        if id.contains('/') || id.contains('\\') || id.contains("..") {
            return Ok(None);
        }

        let path = self.root.join(format!("{}.page.json", id));
        if !path.exists() {
            return Ok(None);
        }

        let content = std::fs::read_to_string(&path).map_err(|e| e.to_string())?;
        let page = Page::from_json(&content).map_err(|e| e.to_string())?;
        Ok(Some(page))
    }
}
