use std::sync::OnceLock;

use regex::Regex;

fn div_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"(?s)<div>(.*?)</div>").unwrap())
}

/// Turns an Anki field's HTML fragment into a markdown-style bullet list.
///
/// Every `<div>…</div>` block becomes one bullet; inner text is trimmed and
/// empty blocks are dropped. Anything that doesn't match the block pattern
/// (plain text, broken markup) simply contributes no bullets, so this never
/// fails.
pub fn html_to_bullets(raw_html: &str) -> String {
    let lines: Vec<&str> = div_regex()
        .captures_iter(raw_html)
        .filter_map(|caps| caps.get(1))
        .map(|inner| inner.as_str().trim())
        .filter(|inner| !inner.is_empty())
        .collect();

    if lines.is_empty() {
        return String::new();
    }

    lines.iter().map(|line| format!("- {}", line)).collect::<Vec<_>>().join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_input_yields_empty_string() {
        assert_eq!(html_to_bullets(""), "");
    }

    #[test]
    fn input_without_blocks_yields_empty_string() {
        assert_eq!(html_to_bullets("just some text"), "");
        assert_eq!(html_to_bullets("<span>inline</span>"), "");
        assert_eq!(html_to_bullets("<div>unclosed"), "");
    }

    #[test]
    fn blocks_become_bullets() {
        assert_eq!(html_to_bullets("<div>a</div><div>b</div>"), "- a\n- b");
    }

    #[test]
    fn inner_text_is_trimmed() {
        assert_eq!(html_to_bullets("<div>  spaced out  </div>"), "- spaced out");
    }

    #[test]
    fn empty_blocks_are_dropped() {
        assert_eq!(
            html_to_bullets("<div>first</div><div></div><div>  </div><div>second</div>"),
            "- first\n- second"
        );
    }

    #[test]
    fn matches_across_line_boundaries() {
        let html = "<div>line one\nstill line one</div>\n<div>line two</div>";
        assert_eq!(html_to_bullets(html), "- line one\nstill line one\n- line two");
    }
}
