use anyhow::{Context, Result};
use std::path::PathBuf;
use tokio::fs;
use tracing::info;

use super::QuizContent;

/// Loads and stores quiz content as a JSON file.
pub struct ContentManager {
    path: PathBuf,
}

impl ContentManager {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Load and validate content, seeding the file with the built-in
    /// questionnaire when it does not exist yet.
    pub async fn load(&self) -> Result<QuizContent> {
        if !self.path.exists() {
            let builtin = QuizContent::builtin()?;
            self.save(&builtin).await?;
            info!("Seeded quiz content at {}", self.path.display());
            return Ok(builtin);
        }
        let raw = fs::read_to_string(&self.path).await?;
        let content = QuizContent::from_json(&raw)
            .with_context(|| format!("Invalid quiz content in {}", self.path.display()))?;
        info!(
            questions = content.questions.len(),
            profiles = content.profiles.len(),
            "Loaded quiz content from {}",
            self.path.display()
        );
        Ok(content)
    }

    pub async fn save(&self, content: &QuizContent) -> Result<()> {
        content.validate()?;
        let raw = serde_json::to_string_pretty(content)?;
        fs::write(&self.path, raw).await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ContentError;
    use crate::scoring::CategoryKey;
    use tempfile::NamedTempFile;

    #[tokio::test]
    async fn test_content_save_load() {
        let temp_file = NamedTempFile::new().unwrap();
        let manager = ContentManager::new(temp_file.path().to_path_buf());

        let mut content = QuizContent::builtin().unwrap();
        content.default_key = CategoryKey::Chai;

        manager.save(&content).await.unwrap();
        let loaded = manager.load().await.unwrap();

        assert_eq!(content, loaded);
    }

    #[tokio::test]
    async fn test_content_load_seeds_default() {
        let temp_dir = tempfile::tempdir().unwrap();
        let path = temp_dir.path().join("quiz_content.json");
        let manager = ContentManager::new(&path);

        let loaded = manager.load().await.unwrap();
        assert_eq!(loaded, QuizContent::builtin().unwrap());
        assert!(path.exists());

        let reloaded = manager.load().await.unwrap();
        assert_eq!(loaded, reloaded);
    }

    #[tokio::test]
    async fn test_content_load_rejects_invalid_file() {
        let temp_file = NamedTempFile::new().unwrap();
        std::fs::write(temp_file.path(), r#"{"questions": [], "profiles": []}"#).unwrap();
        let manager = ContentManager::new(temp_file.path().to_path_buf());

        let err = manager.load().await.unwrap_err();
        assert_eq!(err.downcast_ref::<ContentError>(), Some(&ContentError::NoQuestions));
    }

    #[tokio::test]
    async fn test_content_save_refuses_invalid_content() {
        let temp_dir = tempfile::tempdir().unwrap();
        let path = temp_dir.path().join("broken.json");
        let manager = ContentManager::new(&path);

        let mut content = QuizContent::builtin().unwrap();
        content.profiles.clear();
        assert!(manager.save(&content).await.is_err());
        assert!(!path.exists());
    }
}
