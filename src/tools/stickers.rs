use serde::{Deserialize, Serialize};

/// The sticker buttons offered in the toolbar, in display order
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StickerPalette {
    glyphs: Vec<String>,
}

impl StickerPalette {
    pub fn new(glyphs: impl IntoIterator<Item = String>) -> Self {
        Self {
            glyphs: glyphs.into_iter().collect(),
        }
    }

    pub fn glyphs(&self) -> &[String] {
        &self.glyphs
    }

    /// Add a custom sticker. Surrounding whitespace is dropped and empty
    /// names are rejected.
    pub fn add(&mut self, name: &str) -> bool {
        let name = name.trim();
        if name.is_empty() {
            log::warn!("Ignoring empty sticker name");
            return false;
        }
        log::info!("Added sticker {:?}", name);
        self.glyphs.push(name.to_owned());
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_sticker() {
        let mut palette = StickerPalette::new(vec!["🌎".to_owned()]);
        assert!(palette.add("  :D "));
        assert!(!palette.add("   "));
        assert_eq!(palette.glyphs(), &["🌎".to_owned(), ":D".to_owned()]);
    }
}
