use std::{
    collections::HashMap,
    path::PathBuf,
    sync::{Arc, Mutex},
};

use tracing::info;

use crate::{error::BlogErr, fs::write_file};

/// Rendered pages waiting to be written below `dist_folder`.
pub struct Site {
    dist_folder: PathBuf,
    pages: Mutex<HashMap<String, Arc<str>>>,
}

impl Site {
    pub fn new(path: PathBuf) -> Self {
        Self {
            dist_folder: path,
            pages: Mutex::new(HashMap::new()),
        }
    }

    pub fn add_page(&self, path: &str, content: Arc<str>) {
        self.pages
            .lock()
            .unwrap()
            .insert(path.trim_start_matches('/').to_string(), content);
    }

    pub async fn save(&self) -> Result<(), BlogErr> {
        let pages: Vec<(String, Arc<str>)> = self
            .pages
            .lock()
            .unwrap()
            .iter()
            .map(|(path, content)| (path.clone(), content.clone()))
            .collect();
        for (page_path, content) in pages {
            let path = self.dist_folder.join(page_path);
            info!("write to file: {}", path.display());
            write_file(&path, &content).await?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn saves_every_page() {
        let dir = tempfile::tempdir().unwrap();
        let site = Site::new(dir.path().to_path_buf());
        site.add_page("/index.html", Arc::from("home"));
        site.add_page("blogs.html", Arc::from("listing"));
        site.save().await.unwrap();
        assert_eq!(
            std::fs::read_to_string(dir.path().join("index.html")).unwrap(),
            "home"
        );
        assert_eq!(
            std::fs::read_to_string(dir.path().join("blogs.html")).unwrap(),
            "listing"
        );
    }
}
