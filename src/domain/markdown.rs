//! Markdown-subset renderer for outbox posts
//!
//! The agent writes its ritual posts in a tiny markdown dialect: `#`/`###`/
//! `####` headings, `>` quotes, `**bold**`, `*italic*`. This renderer applies
//! an explicit ordered rule list in a single pass so that longer tokens always
//! win: `####`/`###` are checked before `#`, and `**` before `*`. A `## `
//! prefix is deliberately not a rule and falls through unstyled.
//!
//! Source text is trusted agent output; markup-significant characters in it
//! are not escaped.

/// Posts are previewed, not reproduced in full.
const TRUNCATE_AT: usize = 500;
const ELLIPSIS: &str = "...";

/// Line-anchored rules, longest prefix first.
const LINE_RULES: &[(&str, &str, &str)] = &[
    ("#### ", "<h4>", "</h4>"),
    ("### ", "<h3>", "</h3>"),
    ("# ", "<h1>", "</h1>"),
    ("> ", "<blockquote>", "</blockquote>"),
];

/// Inline rules, longest delimiter first.
const INLINE_RULES: &[(&str, &str, &str)] = &[
    ("**", "<strong>", "</strong>"),
    ("*", "<em>", "</em>"),
];

/// Render a post body to an HTML fragment. Empty input yields empty output.
pub fn render(text: &str) -> String {
    if text.is_empty() {
        return String::new();
    }

    let source = truncate(text);
    let rendered: Vec<String> = source.lines().map(render_line).collect();

    // A trailing newline in the source still produces a trailing break.
    let mut out = rendered.join("<br>");
    if source.ends_with('\n') {
        out.push_str("<br>");
    }
    out
}

/// First 500 characters, with a literal ellipsis when anything was cut.
fn truncate(text: &str) -> String {
    let mut chars = text.char_indices();
    match chars.nth(TRUNCATE_AT) {
        Some((byte_idx, _)) => {
            let mut s = text[..byte_idx].to_string();
            s.push_str(ELLIPSIS);
            s
        }
        None => text.to_string(),
    }
}

fn render_line(line: &str) -> String {
    for (prefix, open, close) in LINE_RULES {
        if let Some(body) = line.strip_prefix(prefix) {
            return format!("{}{}{}", open, render_inline(body), close);
        }
    }
    render_inline(line)
}

/// Inline passes run sequentially, so a dangling `**` that the bold pass
/// leaves behind is still two `*` to the italic pass and pairs as an empty
/// `<em></em>`.
fn render_inline(line: &str) -> String {
    let mut out = line.to_string();
    for (delim, open, close) in INLINE_RULES {
        out = replace_pairs(&out, delim, open, close);
    }
    out
}

/// Replace consecutive delimiter pairs with open/close tags, left to right.
/// Within one pass, an unpaired trailing delimiter is left as-is.
fn replace_pairs(text: &str, delim: &str, open: &str, close: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut rest = text;

    while let Some(start) = rest.find(delim) {
        let after = &rest[start + delim.len()..];
        let Some(end) = after.find(delim) else {
            break;
        };
        out.push_str(&rest[..start]);
        out.push_str(open);
        out.push_str(&after[..end]);
        out.push_str(close);
        rest = &after[end + delim.len()..];
    }

    out.push_str(rest);
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_input() {
        assert_eq!(render(""), "");
    }

    #[test]
    fn test_heading_bold_italic_roundtrip() {
        let out = render("# Title\n**bold** and *italic*");
        assert_eq!(
            out,
            "<h1>Title</h1><br><strong>bold</strong> and <em>italic</em>"
        );
    }

    #[test]
    fn test_heading_levels() {
        assert_eq!(render("### Sub"), "<h3>Sub</h3>");
        assert_eq!(render("#### Deep"), "<h4>Deep</h4>");
        assert_eq!(render("# Top"), "<h1>Top</h1>");
    }

    #[test]
    fn test_longer_heading_not_swallowed_by_h1() {
        // "### x" must never become <h1>## x</h1>
        let out = render("### Thesis");
        assert!(!out.contains("<h1>"));
        assert_eq!(out, "<h3>Thesis</h3>");

        let out = render("#### Why now");
        assert_eq!(out, "<h4>Why now</h4>");
    }

    #[test]
    fn test_double_hash_is_an_explicit_gap() {
        // `## ` has no rule; it falls through with inline rules only
        assert_eq!(render("## Not a heading"), "## Not a heading");
        assert_eq!(render("## with **bold**"), "## with <strong>bold</strong>");
    }

    #[test]
    fn test_blockquote() {
        assert_eq!(render("> wisdom"), "<blockquote>wisdom</blockquote>");
    }

    #[test]
    fn test_heading_requires_line_anchor() {
        // Mid-line hashes are not headings
        assert_eq!(render("not # a heading"), "not # a heading");
    }

    #[test]
    fn test_bold_before_italic() {
        // If italic ran first it would consume one star of each pair
        assert_eq!(render("**x**"), "<strong>x</strong>");
        assert_eq!(render("**a** *b*"), "<strong>a</strong> <em>b</em>");
    }

    #[test]
    fn test_unpaired_single_star_left_alone() {
        assert_eq!(render("a * b"), "a * b");
        assert_eq!(render("*open"), "*open");
    }

    #[test]
    fn test_dangling_double_star_pairs_as_empty_italic() {
        // The bold pass finds no closing **, then the italic pass pairs the
        // two adjacent stars
        assert_eq!(render("**open"), "<em></em>open");
    }

    #[test]
    fn test_newlines_become_breaks() {
        assert_eq!(render("a\nb\nc"), "a<br>b<br>c");
        assert_eq!(render("a\n"), "a<br>");
    }

    #[test]
    fn test_truncation_bound() {
        let long = "x".repeat(800);
        let out = render(&long);
        assert_eq!(out.chars().count(), TRUNCATE_AT + ELLIPSIS.len());
        assert!(out.ends_with("..."));
    }

    #[test]
    fn test_no_truncation_at_exact_limit() {
        let exact = "y".repeat(500);
        assert_eq!(render(&exact), exact);
    }

    #[test]
    fn test_truncation_is_character_based() {
        // Multibyte content must not split a character
        let long = "é".repeat(600);
        let out = render(&long);
        assert_eq!(out.chars().count(), TRUNCATE_AT + ELLIPSIS.len());
    }
}
