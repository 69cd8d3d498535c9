use std::path::{Path, PathBuf};

use tokio::{
    fs::{OpenOptions, canonicalize, create_dir_all},
    io::AsyncWriteExt,
};

use crate::error::{BlogErr, ContextExt};

pub async fn canonicalize_and_ensure_path(path: &Path) -> Result<PathBuf, BlogErr> {
    create_dir_all(path)
        .await
        .with_context(|| format!("create directory: {}", path.display()))?;
    Ok(canonicalize(path).await?)
}

pub async fn write_file(path: &Path, content: &str) -> Result<(), BlogErr> {
    if let Some(prefix) = path.parent() {
        create_dir_all(prefix)
            .await
            .with_context(|| format!("create directory: {}", prefix.display()))?;
    }
    let mut file = OpenOptions::new()
        .write(true)
        .create(true)
        .truncate(true)
        .open(path)
        .await
        .with_context(|| format!("open file: {}", path.display()))?;
    file.write_all(content.as_bytes())
        .await
        .with_context(|| format!("write to file: {}", path.display()))?;
    file.flush()
        .await
        .with_context(|| format!("flush file: {}", path.display()))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn write_file_creates_parents_and_truncates() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested/page.html");
        write_file(&path, "a longer first version").await.unwrap();
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "a longer first version");
        write_file(&path, "second").await.unwrap();
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "second");
    }

    #[tokio::test]
    async fn ensure_path_creates_directory() {
        let dir = tempfile::tempdir().unwrap();
        let dist = canonicalize_and_ensure_path(&dir.path().join("dist")).await.unwrap();
        assert!(dist.is_dir());
        assert!(dist.is_absolute());
    }
}
