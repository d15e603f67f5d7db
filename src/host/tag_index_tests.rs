//! Tests for tag index implementations

use super::*;

mod static_tags_tests {
    use super::*;

    #[test]
    fn test_preserves_order_and_dedupes() {
        let index = StaticTags::new(["work", "home", "work"]);
        assert_eq!(index.tags(), vec!["work", "home"]);
    }

    #[test]
    fn test_strips_hashes_and_blank_entries() {
        let index = StaticTags::new(["#work", "", "  ", "project/alpha"]);
        assert_eq!(index.tags(), vec!["work", "project/alpha"]);
    }

    #[test]
    fn test_from_file_reads_one_tag_per_line() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("tags.txt");
        std::fs::write(&path, "work\n#home\n\nproject/alpha\n").unwrap();

        let index = StaticTags::from_file(&path).unwrap();
        assert_eq!(index.tags(), vec!["work", "home", "project/alpha"]);
    }

    #[test]
    fn test_from_file_missing_is_io_error() {
        let err = StaticTags::from_file(Path::new("/no/such/tags.txt")).unwrap_err();
        assert!(matches!(err, TagmatterError::Io(_)));
    }
}

mod frontmatter_parsing_tests {
    use super::*;

    #[test]
    fn test_split_frontmatter_basic() {
        let (fm, body) = split_frontmatter("---\ntags: a\n---\nbody\n");
        assert_eq!(fm, Some("tags: a\n"));
        assert_eq!(body, "body\n");
    }

    #[test]
    fn test_unterminated_frontmatter_is_ignored() {
        let (fm, body) = split_frontmatter("---\ntags: a\nno closing");
        assert_eq!(fm, None);
        assert_eq!(body, "---\ntags: a\nno closing");
    }

    #[test]
    fn test_no_frontmatter() {
        let (fm, body) = split_frontmatter("# heading\n");
        assert_eq!(fm, None);
        assert_eq!(body, "# heading\n");
    }

    #[test]
    fn test_inline_tag_list() {
        let tags = frontmatter_tags("tags: work, project/alpha\n");
        assert_eq!(tags, vec!["work", "project/alpha"]);
    }

    #[test]
    fn test_block_tag_list() {
        let tags = frontmatter_tags("title: x\ntags:\n  - work\n  - home\nstatus: done\n");
        assert_eq!(tags, vec!["work", "home"]);
    }

    #[test]
    fn test_list_under_other_key_is_ignored() {
        let tags = frontmatter_tags("aliases:\n  - nickname\ntags: work\n");
        assert_eq!(tags, vec!["work"]);
    }
}

mod inline_tag_tests {
    use super::*;

    #[test]
    fn test_inline_hash_tags() {
        let tags = inline_tags("some #work and #project/alpha here\n");
        assert_eq!(tags, vec!["work", "project/alpha"]);
    }

    #[test]
    fn test_hash_mid_word_is_not_a_tag() {
        assert!(inline_tags("c#sharp").is_empty());
    }

    #[test]
    fn test_heading_marker_is_not_a_tag() {
        assert!(inline_tags("# Heading\n## Sub\n").is_empty());
    }

    #[test]
    fn test_numeric_reference_is_not_a_tag() {
        assert!(inline_tags("see #123 for details").is_empty());
        assert_eq!(inline_tags("release #2024-q1"), vec!["2024-q1"]);
    }

    #[test]
    fn test_tag_after_multibyte_char() {
        // The char before '#' is multi-byte and not whitespace.
        assert!(inline_tags("café#work").is_empty());
        assert_eq!(inline_tags("café #work"), vec!["work"]);
    }
}

mod vault_scan_tests {
    use super::*;
    use crate::config::TagsConfig;

    fn write(dir: &Path, name: &str, contents: &str) {
        std::fs::write(dir.join(name), contents).unwrap();
    }

    #[test]
    fn test_scan_collects_frontmatter_and_inline_tags() {
        let dir = tempfile::tempdir().unwrap();
        write(
            dir.path(),
            "a.md",
            "---\ntags: work, project/alpha\n---\nbody with #inbox\n",
        );
        write(dir.path(), "b.md", "---\ntags:\n  - home\n---\n");

        let index = VaultIndex::scan(dir.path(), &TagsConfig::default()).unwrap();
        assert_eq!(index.tags(), vec!["work", "project/alpha", "inbox", "home"]);
    }

    #[test]
    fn test_scan_recurses_and_skips_hidden() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::create_dir(dir.path().join("sub")).unwrap();
        std::fs::create_dir(dir.path().join(".obsidian")).unwrap();
        write(&dir.path().join("sub"), "n.md", "#nested\n");
        write(&dir.path().join(".obsidian"), "x.md", "#hidden\n");

        let index = VaultIndex::scan(dir.path(), &TagsConfig::default()).unwrap();
        assert_eq!(index.tags(), vec!["nested"]);
    }

    #[test]
    fn test_scan_ignores_non_note_files() {
        let dir = tempfile::tempdir().unwrap();
        write(dir.path(), "notes.md", "#real\n");
        write(dir.path(), "data.json", "#fake\n");

        let index = VaultIndex::scan(dir.path(), &TagsConfig::default()).unwrap();
        assert_eq!(index.tags(), vec!["real"]);
    }

    #[test]
    fn test_inline_tags_can_be_disabled() {
        let dir = tempfile::tempdir().unwrap();
        write(dir.path(), "a.md", "---\ntags: work\n---\n#inline\n");

        let config = TagsConfig {
            inline_tags: false,
            ..TagsConfig::default()
        };
        let index = VaultIndex::scan(dir.path(), &config).unwrap();
        assert_eq!(index.tags(), vec!["work"]);
    }

    #[test]
    fn test_missing_vault_is_an_error() {
        let err = VaultIndex::scan(Path::new("/no/such/vault"), &TagsConfig::default());
        assert!(matches!(err, Err(TagmatterError::VaultNotFound(_))));
    }

    #[test]
    fn test_duplicate_tags_across_notes_deduped() {
        let dir = tempfile::tempdir().unwrap();
        write(dir.path(), "a.md", "#work\n");
        write(dir.path(), "b.md", "#work #home\n");

        let index = VaultIndex::scan(dir.path(), &TagsConfig::default()).unwrap();
        assert_eq!(index.tags(), vec!["work", "home"]);
    }
}
