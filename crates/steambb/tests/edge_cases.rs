//! Edge cases: unicode, structural extremes and node types without a BBCode rendering.

use steambb::{ParseOptions, WarningKind, bbcode, convert, convert_with_options, markdown};

mod unicode {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_emoji() {
        assert_eq!(convert("Hello 👋🏽 World"), "Hello 👋🏽 World");
    }

    #[test]
    fn test_cjk() {
        assert_eq!(convert("**中文测试**"), "[b]中文测试[/b]");
    }

    #[test]
    fn test_multibyte_spoiler_content() {
        assert_eq!(convert(">! 日本語"), "[spoiler]日本語[/spoiler]");
    }
}

mod structure {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_empty_input() {
        assert_eq!(convert(""), "");
    }

    #[test]
    fn test_whitespace_only_input() {
        assert_eq!(convert("   \n\n  \n"), "");
    }

    #[test]
    fn test_deeply_nested_quotes() {
        let markdown = format!("{} deep", ">".repeat(20));
        let expected = format!("{}deep{}", "[quote]".repeat(20), "[/quote]".repeat(20));
        assert_eq!(convert(&markdown), expected);
    }

    #[test]
    fn test_spoiler_inside_quote() {
        assert_eq!(
            convert("> >! hidden"),
            "[quote][spoiler]hidden[/spoiler][/quote]"
        );
    }

    #[test]
    fn test_quote_with_list() {
        assert_eq!(
            convert("> - a\n> - b"),
            "[quote][list][*]a[*]b[/list][/quote]"
        );
    }

    #[test]
    fn test_text_is_not_escaped() {
        assert_eq!(convert("a [b] c"), "a [b] c");
    }

    #[test]
    fn test_many_blocks() {
        let markdown = (0..100).map(|i| format!("p{i}")).collect::<Vec<_>>().join("\n\n");
        let output = convert(&markdown);
        assert_eq!(output.matches("\n\n").count(), 99);
        assert!(output.starts_with("p0"));
        assert!(output.ends_with("p99"));
    }
}

mod fallback {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_table_flattens_to_cell_text() {
        let markdown = "| a | b |\n|---|---|\n| 1 | 2 |\n";
        let result = bbcode::emit(&markdown::parse(markdown));
        assert_eq!(result.value, "ab12");
        assert!(result.warnings.iter().all(|w| matches!(
            w.kind,
            WarningKind::UnsupportedNode(_)
        )));
        // table, two rows, four cells
        assert_eq!(result.warnings.len(), 7);
    }

    #[test]
    fn test_table_stays_text_without_extension() {
        let markdown = "| a |\n|---|\n| 1 |\n";
        assert_eq!(
            convert_with_options(markdown, &ParseOptions::commonmark()),
            "| a |\n|---|\n| 1 |"
        );
    }

    #[test]
    fn test_inline_html_is_kept_verbatim() {
        assert_eq!(convert("a <kbd>b</kbd>"), "a <kbd>b</kbd>");
    }

    #[test]
    fn test_hard_break_is_dropped() {
        assert_eq!(convert("line\\\nnext"), "linenext");
    }

    #[test]
    fn test_thematic_break_is_empty() {
        assert_eq!(convert("above\n\n***\n\nbelow"), "above\n\n\n\nbelow");
    }

    #[test]
    fn test_task_list_markers_are_dropped() {
        assert_eq!(convert("- [x] done\n- [ ] todo"), "[list][*]done[*]todo[/list]");
    }
}

#[test]
fn test_conversion_is_deterministic() {
    let markdown = "# T\n\n> quote\n\n| x |\n|---|\n| y |\n\n- [ ] a\n";
    assert_eq!(convert(markdown), convert(markdown));
}
