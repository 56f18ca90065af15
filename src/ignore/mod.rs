// src/ignore/mod.rs
// =============================================================================
// This module decides which paths are left out of the snapshot.
//
// Submodules:
// - rules: Loads patterns from the root .gitignore and matches paths
//
// Only ONE ignore file is ever read - the one sitting directly in the crawl
// root. Parent directories and nested .gitignore files are never consulted,
// and `!pattern` negation is not supported.
// =============================================================================

mod rules;

pub use rules::{matches, IgnorePattern, IgnoreRuleSet};
