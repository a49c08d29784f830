use serde::{Deserialize, Serialize};

/// Knobs for a parse.
///
/// Deserializes with every field optional so a config file only needs to
/// name what it changes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ParseOptions {
    /// Maximum nesting of containers (quotes, lists) and of inline spans.
    /// Deeper syntax is kept as literal text.
    pub max_nesting_depth: usize,
    /// Tab stop width used when measuring indentation.
    pub tab_width: usize,
    /// Recognize pipe tables.
    pub tables: bool,
    /// Recognize `---` delimited YAML front matter at the top of the document.
    pub yaml_header: bool,
    /// Turn bare `https://…` and `www.…` URLs into hyperlinks.
    pub autolinks: bool,
    /// Recognize `^word` and `^(text)` superscript.
    pub superscript: bool,
}

impl ParseOptions {
    pub const DEFAULT_MAX_NESTING_DEPTH: usize = 32;
    pub const DEFAULT_TAB_WIDTH: usize = 4;

    pub(crate) fn tab_width(&self) -> usize {
        self.tab_width.max(1)
    }
}

impl Default for ParseOptions {
    fn default() -> Self {
        Self {
            max_nesting_depth: Self::DEFAULT_MAX_NESTING_DEPTH,
            tab_width: Self::DEFAULT_TAB_WIDTH,
            tables: true,
            yaml_header: true,
            autolinks: true,
            superscript: true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_tab_width_is_clamped() {
        let opts = ParseOptions {
            tab_width: 0,
            ..Default::default()
        };
        assert_eq!(opts.tab_width(), 1);
    }

    #[test]
    fn defaults() {
        let opts = ParseOptions::default();
        assert_eq!(opts.max_nesting_depth, 32);
        assert_eq!(opts.tab_width, 4);
        assert!(opts.tables && opts.yaml_header && opts.autolinks && opts.superscript);
    }
}
