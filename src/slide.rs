use std::path::{Path, PathBuf};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Slide {
    theme: String,
    title: Option<String>,
    image: Option<PathBuf>,

    pub(crate) is_active: bool,
}

impl Slide {
    pub fn new(theme: impl Into<String>) -> Self {
        Self {
            theme: theme.into(),
            title: None,
            image: None,
            is_active: false,
        }
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn with_image(mut self, image: impl Into<PathBuf>) -> Self {
        self.image = Some(image.into());
        self
    }

    pub fn theme(&self) -> &str {
        &self.theme
    }

    pub fn title(&self) -> Option<&str> {
        self.title.as_deref()
    }

    pub fn image(&self) -> Option<&Path> {
        self.image.as_deref()
    }

    /// Only the navigator toggles this; exactly one slide of a deck is active.
    pub fn is_active(&self) -> bool {
        self.is_active
    }
}
