// Configuration type definitions

use std::path::Path;

use serde::Deserialize;

/// Tag scanning and note discovery settings
#[derive(Debug, Clone, Deserialize)]
pub struct TagsConfig {
    /// File extensions the vault scanner treats as notes.
    #[serde(default = "default_extensions")]
    pub extensions: Vec<String>,

    /// Whether vault scanning also collects inline `#tag` references from
    /// note bodies, in addition to frontmatter tags.
    #[serde(default = "default_true")]
    pub inline_tags: bool,
}

fn default_extensions() -> Vec<String> {
    vec!["md".to_string(), "markdown".to_string()]
}

fn default_true() -> bool {
    true
}

impl Default for TagsConfig {
    fn default() -> Self {
        TagsConfig {
            extensions: default_extensions(),
            inline_tags: default_true(),
        }
    }
}

impl TagsConfig {
    pub fn is_note_file(&self, path: &Path) -> bool {
        path.extension()
            .and_then(|e| e.to_str())
            .is_some_and(|ext| self.extensions.iter().any(|e| e.eq_ignore_ascii_case(ext)))
    }
}

/// Root configuration structure
#[derive(Debug, Clone, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub tags: TagsConfig,
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn default_extensions_cover_markdown() {
        let config = TagsConfig::default();
        assert!(config.is_note_file(Path::new("note.md")));
        assert!(config.is_note_file(Path::new("note.MD")));
        assert!(config.is_note_file(Path::new("note.markdown")));
        assert!(!config.is_note_file(Path::new("note.txt")));
        assert!(!config.is_note_file(Path::new("no_extension")));
    }

    #[test]
    fn custom_extensions_replace_defaults() {
        let config: Config = toml::from_str(
            r#"
[tags]
extensions = ["txt"]
"#,
        )
        .unwrap();
        assert!(config.tags.is_note_file(Path::new("note.txt")));
        assert!(!config.tags.is_note_file(Path::new("note.md")));
        assert!(config.tags.inline_tags);
    }

    // For any TOML config with missing optional fields, parsing should
    // succeed and use defaults for everything absent.
    proptest! {
        #![proptest_config(ProptestConfig::with_cases(100))]

        #[test]
        fn prop_missing_fields_use_defaults(
            include_tags_section in prop::bool::ANY,
            include_inline_field in prop::bool::ANY
        ) {
            let toml_content = if !include_tags_section {
                String::new()
            } else if !include_inline_field {
                "[tags]\n".to_string()
            } else {
                "[tags]\ninline_tags = false\n".to_string()
            };

            let config: Result<Config, _> = toml::from_str(&toml_content);
            prop_assert!(config.is_ok(), "Failed to parse config with missing fields");

            let config = config.unwrap();
            prop_assert_eq!(config.tags.extensions.len(), 2);
            if !(include_tags_section && include_inline_field) {
                prop_assert!(config.tags.inline_tags);
            } else {
                prop_assert!(!config.tags.inline_tags);
            }
        }
    }
}
