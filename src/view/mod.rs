//! View Layer - named page regions and the HTML document shell
//!
//! A render tick never touches HTML directly at the call site: it fills a
//! fixed set of named regions on a [`Page`], and `to_html` lays those regions
//! out into the static document that gets written to disk. An offline page is
//! all-or-nothing: once `set_offline` is called, region content is ignored.

pub mod overview;
pub mod rituals;

use std::collections::BTreeMap;

/// The one message shown when the snapshot itself cannot be read.
pub const OFFLINE_MESSAGE: &str = "SEER OFFLINE // awaiting next transmission";

/// Empty-state for the rituals region when the outbox index is unreachable.
pub const NO_RITUALS_MESSAGE: &str = "No transmissions yet.";

/// Fixed region identifiers. Every tick writes this same set.
pub mod region {
    pub const MOOD: &str = "mood";
    pub const EDGE: &str = "edge";
    pub const BUCKET: &str = "bucket";
    pub const WORLD_TEXT: &str = "world-text";
    pub const BALANCES: &str = "balances";
    pub const TREASURY: &str = "treasury";
    pub const POSITIONS: &str = "positions";
    pub const TOKEN_PANEL: &str = "token-panel";
    pub const LAUNCHES: &str = "launches";
    pub const RITUALS: &str = "rituals";
    pub const UPDATED: &str = "updated";
}

/// One rendered page, as a set of named regions.
#[derive(Debug, Clone, Default)]
pub struct Page {
    regions: BTreeMap<&'static str, String>,
    offline: Option<String>,
}

impl Page {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the content of a named region.
    pub fn set(&mut self, region: &'static str, html: impl Into<String>) {
        self.regions.insert(region, html.into());
    }

    /// Replace the entire visible page with a single offline message.
    pub fn set_offline(&mut self, message: impl Into<String>) {
        self.offline = Some(message.into());
    }

    pub fn is_offline(&self) -> bool {
        self.offline.is_some()
    }

    /// Current content of a region, if set this tick.
    pub fn region(&self, id: &str) -> Option<&str> {
        self.regions.get(id).map(String::as_str)
    }

    /// Lay the regions out into a complete static HTML document.
    pub fn to_html(&self) -> String {
        let body = match &self.offline {
            Some(msg) => format!(r#"<main class="offline"><p>{}</p></main>"#, msg),
            None => self.layout(),
        };

        format!(
            "<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n<meta charset=\"utf-8\">\n\
             <meta http-equiv=\"refresh\" content=\"60\">\n<title>seerdeck</title>\n\
             <style>{}</style>\n</head>\n<body>\n{}\n</body>\n</html>\n",
            STYLE, body
        )
    }

    fn layout(&self) -> String {
        let get = |id: &str| self.regions.get(id).cloned().unwrap_or_default();

        format!(
            concat!(
                r#"<main>"#,
                r#"<header><h1>seerdeck</h1><span id="updated">{updated}</span></header>"#,
                r#"<section id="world">"#,
                r#"<div id="mood">{mood}</div>"#,
                r#"<div id="bucket">{bucket}</div>"#,
                r#"<div id="edge">{edge}</div>"#,
                r#"<div id="world-text">{world_text}</div>"#,
                r#"</section>"#,
                r#"<section id="economy">"#,
                r#"<div id="balances">{balances}</div>"#,
                r#"<div id="treasury">{treasury}</div>"#,
                r#"</section>"#,
                r#"<section id="positions">{positions}</section>"#,
                r#"<section id="token-panel">{token_panel}</section>"#,
                r#"<section id="launches">{launches}</section>"#,
                r#"<section id="rituals">{rituals}</section>"#,
                r#"</main>"#,
            ),
            updated = get(region::UPDATED),
            mood = get(region::MOOD),
            bucket = get(region::BUCKET),
            edge = get(region::EDGE),
            world_text = get(region::WORLD_TEXT),
            balances = get(region::BALANCES),
            treasury = get(region::TREASURY),
            positions = get(region::POSITIONS),
            token_panel = get(region::TOKEN_PANEL),
            launches = get(region::LAUNCHES),
            rituals = get(region::RITUALS),
        )
    }
}

const STYLE: &str = "body{background:#0b0e14;color:#cdd6f4;font-family:monospace;\
margin:2rem auto;max-width:72rem}a{color:#89b4fa}h1,h3,h4{color:#f9e2af}\
blockquote{border-left:3px solid #45475a;margin:0;padding-left:1rem;color:#a6adc8}\
table{border-collapse:collapse;width:100%}td,th{border-bottom:1px solid #313244;\
padding:.3rem .6rem;text-align:left}.offline{color:#f38ba8;text-align:center;\
margin-top:6rem}.badge-live{color:#a6e3a1}.badge-idle{color:#6c7086}\
section{margin-top:1.5rem}";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_regions_land_in_document() {
        let mut page = Page::new();
        page.set(region::MOOD, "🟢 Bullish");
        page.set(region::EDGE, "0.3100");

        let html = page.to_html();
        assert!(html.contains(r#"<div id="mood">🟢 Bullish</div>"#));
        assert!(html.contains(r#"<div id="edge">0.3100</div>"#));
        // Unset regions still render as empty slots
        assert!(html.contains(r#"<div id="treasury"></div>"#));
    }

    #[test]
    fn test_offline_replaces_everything() {
        let mut page = Page::new();
        page.set(region::MOOD, "🟢 Bullish");
        page.set_offline(OFFLINE_MESSAGE);

        let html = page.to_html();
        assert!(html.contains(OFFLINE_MESSAGE));
        assert!(!html.contains("Bullish"));
        assert!(!html.contains(r#"id="mood""#));
    }

    #[test]
    fn test_set_replaces_previous_content() {
        let mut page = Page::new();
        page.set(region::TREASURY, "1.00");
        page.set(region::TREASURY, "2.00");
        assert_eq!(page.region(region::TREASURY), Some("2.00"));
    }
}
