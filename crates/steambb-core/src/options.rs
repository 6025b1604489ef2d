//! Reader configuration.

/// Options for parsing markdown.
///
/// The default enables the GitHub-flavoured extensions (tables,
/// strikethrough, task lists, footnotes, autolink literals).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseOptions {
    /// Pipe tables.
    pub tables: bool,
    /// `~~strikethrough~~` text.
    pub strikethrough: bool,
    /// `- [ ]` / `- [x]` list items.
    pub task_lists: bool,
    /// `[^label]` references and definitions.
    pub footnotes: bool,
    /// Bare `https://`, `www.` and email addresses become links.
    pub autolinks: bool,
    /// YAML (`---`) and TOML (`+++`) front matter blocks.
    pub front_matter: bool,
}

impl ParseOptions {
    /// Plain CommonMark with every extension disabled.
    pub fn commonmark() -> Self {
        Self {
            tables: false,
            strikethrough: false,
            task_lists: false,
            footnotes: false,
            autolinks: false,
            front_matter: false,
        }
    }
}

impl Default for ParseOptions {
    fn default() -> Self {
        Self {
            tables: true,
            strikethrough: true,
            task_lists: true,
            footnotes: true,
            autolinks: true,
            front_matter: false,
        }
    }
}
