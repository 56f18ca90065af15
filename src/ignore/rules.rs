// src/ignore/rules.rs
// =============================================================================
// Loading and matching ignore patterns.
//
// How it works:
// 1. Read <root>/.gitignore once (missing file = no patterns)
// 2. Keep every non-blank line that doesn't start with '#'
// 3. A path is ignored if ANY pattern matches either the whole relative
//    path ("src/gen/a.tsx") or just its last segment ("a.tsx")
//
// Matching is shell-glob style, like fnmatch: `*` and `?` may cross '/',
// leading dots are not special, and `**` is just another `*` (so
// "**/node_modules" needs at least one parent directory).
// =============================================================================

use glob::{MatchOptions, Pattern};
use std::fs;
use std::path::Path;
use tracing::{debug, warn};

// Case sensitivity follows the host: Windows filesystems are usually
// case-insensitive, everything else is not.
const MATCH_OPTIONS: MatchOptions = MatchOptions {
    case_sensitive: !cfg!(windows),
    require_literal_separator: false,
    require_literal_leading_dot: false,
};

/// One line of the ignore file, compiled to a glob.
#[derive(Debug, Clone)]
pub struct IgnorePattern {
    text: String,
    glob: Pattern,
}

impl IgnorePattern {
    /// Compiles `text` as a glob. Text that isn't a valid glob (an unclosed
    /// `[` for example) matches itself literally.
    pub fn new(text: &str) -> Self {
        let source = collapse_stars(text);
        let glob = Pattern::new(&source).unwrap_or_else(|e| {
            debug!("Pattern '{}' is not a valid glob ({}), matching literally", text, e);
            Pattern::new(&Pattern::escape(text)).unwrap_or_default()
        });

        Self {
            text: text.to_string(),
            glob,
        }
    }

    pub fn as_str(&self) -> &str {
        &self.text
    }

    /// Does this pattern match the full relative path or its basename?
    pub fn matches(&self, relative_path: &str) -> bool {
        self.glob.matches_with(relative_path, MATCH_OPTIONS)
            || self.glob.matches_with(basename(relative_path), MATCH_OPTIONS)
    }
}

/// The patterns loaded from the crawl root's ignore file.
#[derive(Debug, Clone, Default)]
pub struct IgnoreRuleSet {
    patterns: Vec<IgnorePattern>,
}

impl IgnoreRuleSet {
    /// Loads `<root>/.gitignore`.
    pub fn load(root: &Path) -> Self {
        Self::load_named(root, crate::config::DEFAULT_IGNORE_FILE)
    }

    /// Loads `<root>/<file_name>`.
    ///
    /// Never fails: a missing file gives an empty set, and a file that exists
    /// but can't be read is logged and also gives an empty set.
    pub fn load_named(root: &Path, file_name: &str) -> Self {
        let path = root.join(file_name);

        if !path.exists() {
            debug!("No ignore file at {}", path.display());
            return Self::default();
        }

        match fs::read_to_string(&path) {
            Ok(contents) => {
                let rules = Self::parse(&contents);
                debug!("Loaded {} pattern(s) from {}", rules.len(), path.display());
                rules
            }
            Err(e) => {
                warn!("Error reading ignore file {}: {}", path.display(), e);
                Self::default()
            }
        }
    }

    /// Builds a rule set from ignore-file text.
    pub fn parse(contents: &str) -> Self {
        let patterns = contents
            .lines()
            .filter(|line| !line.starts_with('#'))
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .map(IgnorePattern::new)
            .collect();

        Self { patterns }
    }

    pub fn from_patterns<I, S>(patterns: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self {
            patterns: patterns
                .into_iter()
                .map(|p| IgnorePattern::new(p.as_ref()))
                .collect(),
        }
    }

    pub fn patterns(&self) -> &[IgnorePattern] {
        &self.patterns
    }

    pub fn len(&self) -> usize {
        self.patterns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.patterns.is_empty()
    }

    /// True if any pattern matches `relative_path` (or its basename).
    pub fn matches(&self, relative_path: &str) -> bool {
        matches(relative_path, &self.patterns)
    }
}

/// True if any of `patterns` matches `relative_path` (or its basename).
pub fn matches(relative_path: &str, patterns: &[IgnorePattern]) -> bool {
    patterns.iter().any(|p| p.matches(relative_path))
}

// Squeezes every run of '*' down to one. glob gives "**" a recursive
// meaning (and rejects it mid-segment); here "**" means the same as "*",
// which already crosses '/'
fn collapse_stars(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        if c == '*' && out.ends_with('*') {
            continue;
        }
        out.push(c);
    }
    out
}

// Last '/'-separated segment of a relative path
fn basename(relative_path: &str) -> &str {
    relative_path
        .rsplit('/')
        .next()
        .unwrap_or(relative_path)
}

// -----------------------------------------------------------------------------
// BEGINNER NOTES:
//
// 1. Why check both the full path and the basename?
//    - "*.log" should hide "logs/today.log" even though the full path
//      starts with "logs/"
//    - "src/generated" should hide exactly that directory
//    - Checking both covers the common .gitignore habits
//
// 2. What is a const struct?
//    - MATCH_OPTIONS is built at compile time
//    - cfg!(windows) turns into true/false while compiling
//
// 3. Why unwrap_or_default() on the escaped pattern?
//    - Pattern::escape() always produces a valid glob, so the default
//      (an empty pattern) is never actually used
//    - It keeps this function free of panics anyway
// -----------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_parse_skips_comments_and_blank_lines() {
        let rules = IgnoreRuleSet::parse("# build output\n\n   \ndist\n  *.log  \n");
        let texts: Vec<_> = rules.patterns().iter().map(|p| p.as_str()).collect();
        assert_eq!(texts, vec!["dist", "*.log"]);
    }

    #[test]
    fn test_indented_hash_is_a_pattern() {
        // Only a '#' in the very first column starts a comment
        let rules = IgnoreRuleSet::parse("  #keep\n");
        assert_eq!(rules.len(), 1);
        assert_eq!(rules.patterns()[0].as_str(), "#keep");
    }

    #[test]
    fn test_parse_handles_crlf() {
        let rules = IgnoreRuleSet::parse("a.tsx\r\nb.tsx\r\n");
        assert!(rules.matches("a.tsx"));
        assert!(rules.matches("b.tsx"));
    }

    #[test]
    fn test_matches_basename() {
        let rules = IgnoreRuleSet::from_patterns(["*.log"]);
        assert!(rules.matches("debug.log"));
        assert!(rules.matches("deep/nested/debug.log"));
        assert!(!rules.matches("debug.tsx"));
    }

    #[test]
    fn test_matches_full_relative_path() {
        let rules = IgnoreRuleSet::from_patterns(["src/generated"]);
        assert!(rules.matches("src/generated"));
        assert!(!rules.matches("lib/generated"));
    }

    #[test]
    fn test_star_crosses_separator() {
        let rules = IgnoreRuleSet::from_patterns(["src/*.tsx"]);
        assert!(rules.matches("src/a.tsx"));
        assert!(rules.matches("src/deep/a.tsx"));
    }

    #[test]
    fn test_question_mark_and_class() {
        let rules = IgnoreRuleSet::from_patterns(["file?.tsx", "[ab].tsx", "[!x]y.tsx"]);
        assert!(rules.matches("file1.tsx"));
        assert!(!rules.matches("file10.tsx"));
        assert!(rules.matches("b.tsx"));
        assert!(!rules.matches("c.tsx"));
        assert!(rules.matches("zy.tsx"));
        assert!(!rules.matches("xy.tsx"));
    }

    #[test]
    fn test_leading_dot_not_special() {
        let rules = IgnoreRuleSet::from_patterns(["*rc"]);
        assert!(rules.matches(".eslintrc"));
    }

    #[test]
    fn test_invalid_glob_matches_literally() {
        let rules = IgnoreRuleSet::from_patterns(["weird[name"]);
        assert!(rules.matches("weird[name"));
        assert!(rules.matches("dir/weird[name"));
        assert!(!rules.matches("weirdname"));
    }

    #[test]
    fn test_double_star_is_a_plain_star() {
        let rules = IgnoreRuleSet::from_patterns(["dist**"]);
        assert!(rules.matches("dist"));
        assert!(rules.matches("dist/bundle.tsx"));

        let rules = IgnoreRuleSet::from_patterns(["*.test.**"]);
        assert!(rules.matches("a.test.tsx"));
        assert!(rules.matches("src/a.test.tsx"));
    }

    #[test]
    fn test_double_star_prefix_needs_a_parent() {
        let rules = IgnoreRuleSet::from_patterns(["**/node_modules"]);
        assert!(!rules.matches("node_modules"));
        assert!(rules.matches("web/node_modules"));
    }

    #[test]
    fn test_collapse_stars() {
        assert_eq!(collapse_stars("a***b**"), "a*b*");
        assert_eq!(collapse_stars("[*]?"), "[*]?");
    }

    #[test]
    fn test_empty_rule_set_matches_nothing() {
        let rules = IgnoreRuleSet::default();
        assert!(rules.is_empty());
        assert!(!rules.matches("anything.tsx"));
    }

    #[test]
    fn test_free_function_matches() {
        let patterns = vec![IgnorePattern::new("node_modules")];
        assert!(matches("node_modules", &patterns));
        assert!(matches("web/node_modules", &patterns));
        assert!(!matches("web/src", &patterns));
    }

    #[test]
    fn test_load_missing_file_is_empty() {
        let dir = TempDir::new().unwrap();
        let rules = IgnoreRuleSet::load(dir.path());
        assert!(rules.is_empty());
    }

    #[test]
    fn test_load_reads_root_gitignore() {
        let dir = TempDir::new().unwrap();
        std::fs::write(dir.path().join(".gitignore"), "b.txt\nsub\n").unwrap();

        let rules = IgnoreRuleSet::load(dir.path());
        assert_eq!(rules.len(), 2);
        assert!(rules.matches("b.txt"));
        assert!(rules.matches("sub"));
    }

    #[test]
    fn test_load_named_uses_custom_file() {
        let dir = TempDir::new().unwrap();
        std::fs::write(dir.path().join(".gitignore"), "a\n").unwrap();
        std::fs::write(dir.path().join(".snapshotignore"), "b\nc\n").unwrap();

        let rules = IgnoreRuleSet::load_named(dir.path(), ".snapshotignore");
        assert_eq!(rules.len(), 2);
        assert!(!rules.matches("a"));
    }

    #[test]
    fn test_load_unreadable_file_is_empty() {
        let dir = TempDir::new().unwrap();
        // Invalid UTF-8 can't be read as text
        std::fs::write(dir.path().join(".gitignore"), [0xff, 0xfe, 0x00, 0x80]).unwrap();

        let rules = IgnoreRuleSet::load(dir.path());
        assert!(rules.is_empty());
    }

    #[test]
    fn test_load_ignores_parent_gitignore() {
        let dir = TempDir::new().unwrap();
        std::fs::write(dir.path().join(".gitignore"), "*.tsx\n").unwrap();
        let child = dir.path().join("child");
        std::fs::create_dir(&child).unwrap();

        let rules = IgnoreRuleSet::load(&child);
        assert!(rules.is_empty());
    }
}
