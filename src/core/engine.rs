use crate::adapters::serializer_for;
use crate::config::SiteConfig;
use crate::core::runtime::ViewRuntime;
use crate::core::view::PortfolioView;
use crate::core::{ContentTables, Storage};
use crate::utils::error::Result;
use crate::utils::validation::Validate;
use chrono::Datelike;
use std::sync::Arc;

/// Renders one view instance and hands the page to storage.
pub struct PortfolioEngine<S: Storage> {
    storage: S,
    config: SiteConfig,
    content: Arc<ContentTables>,
}

impl<S: Storage> PortfolioEngine<S> {
    pub fn new(storage: S, config: SiteConfig) -> Self {
        let mut content = ContentTables::builtin();
        if let Some(brand) = &config.site.brand {
            content = content.with_brand(brand.clone());
        }
        Self::with_content(storage, config, content)
    }

    pub fn with_content(storage: S, config: SiteConfig, content: ContentTables) -> Self {
        Self {
            storage,
            config,
            content: Arc::new(content),
        }
    }

    /// Returns the relative path of the written page.
    pub async fn run(&self) -> Result<String> {
        let year = chrono::Local::now().year();
        self.run_for_year(year).await
    }

    pub async fn run_for_year(&self, year: i32) -> Result<String> {
        self.config.validate()?;
        self.content.validate()?;

        tracing::info!(
            projects = self.content.projects.len(),
            skills = self.content.skills.len(),
            logos = self.content.logos.len(),
            "starting portfolio render"
        );

        let view = PortfolioView::new(Arc::clone(&self.content))
            .with_reveal_delay(self.config.reveal_delay());
        let mut runtime = ViewRuntime::new(view);
        runtime.start();

        if self.config.animation.settle {
            runtime.settle().await;
        } else {
            tracing::debug!(
                pending = runtime.pending_reveals(),
                "rendering before skill reveal"
            );
        }

        let page = runtime.render(year);
        let serializer = serializer_for(self.config.output.format, &self.config.site.title);
        let body = serializer.serialize(page.as_ref())?;

        let file_name = format!(
            "{}.{}",
            self.config.output.filename,
            serializer.file_extension()
        );
        self.storage.write_file(&file_name, body.as_bytes()).await?;
        tracing::info!(file = %file_name, bytes = body.len(), "page written");

        Ok(file_name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::OutputFormat;
    use crate::utils::error::PortfolioError;
    use std::collections::HashMap;
    use std::sync::Mutex;

    #[derive(Clone, Default)]
    struct MockStorage {
        files: Arc<Mutex<HashMap<String, Vec<u8>>>>,
    }

    impl MockStorage {
        fn get_file(&self, path: &str) -> Option<String> {
            let files = self.files.lock().unwrap();
            files.get(path).map(|d| String::from_utf8_lossy(d).into_owned())
        }
    }

    impl Storage for MockStorage {
        async fn read_file(&self, path: &str) -> Result<Vec<u8>> {
            let files = self.files.lock().unwrap();
            files.get(path).cloned().ok_or_else(|| {
                PortfolioError::IoError(std::io::Error::new(
                    std::io::ErrorKind::NotFound,
                    path.to_string(),
                ))
            })
        }

        async fn write_file(&self, path: &str, data: &[u8]) -> Result<()> {
            let mut files = self.files.lock().unwrap();
            files.insert(path.to_string(), data.to_vec());
            Ok(())
        }
    }

    #[tokio::test(start_paused = true)]
    async fn test_settled_html_page() {
        let storage = MockStorage::default();
        let engine = PortfolioEngine::new(storage.clone(), SiteConfig::default());

        let path = engine.run_for_year(2024).await.unwrap();
        assert_eq!(path, "index.html");

        let html = storage.get_file("index.html").unwrap();
        assert!(html.contains("<section id=\"skills\">"));
        assert!(html.contains("95%"));
        assert!(html.contains("© 2024 JbHub. All rights reserved."));
    }

    #[tokio::test(start_paused = true)]
    async fn test_unsettled_page_shows_zero_progress() {
        let storage = MockStorage::default();
        let mut config = SiteConfig::default();
        config.animation.settle = false;
        let engine = PortfolioEngine::new(storage.clone(), config);

        engine.run_for_year(2024).await.unwrap();
        let html = storage.get_file("index.html").unwrap();
        assert!(html.contains("<span class=\"skill-value\">0%</span>"));
        assert!(!html.contains("95%"));
    }

    #[tokio::test(start_paused = true)]
    async fn test_json_output_and_brand_override() {
        let storage = MockStorage::default();
        let mut config = SiteConfig::default();
        config.output.format = OutputFormat::Json;
        config.site.brand = Some("Jb Studio".to_string());
        let engine = PortfolioEngine::new(storage.clone(), config);

        let path = engine.run_for_year(2024).await.unwrap();
        assert_eq!(path, "index.json");
        let json = storage.get_file("index.json").unwrap();
        assert!(json.contains("Jb Studio"));
        assert!(storage.read_file("index.json").await.is_ok());
    }

    #[tokio::test]
    async fn test_invalid_config_is_rejected_before_rendering() {
        let storage = MockStorage::default();
        let mut config = SiteConfig::default();
        config.output.filename = String::new();
        let engine = PortfolioEngine::new(storage.clone(), config);

        assert!(engine.run_for_year(2024).await.is_err());
        assert!(storage.files.lock().unwrap().is_empty());
    }
}
