//! Rituals view: the outbox post feed
//!
//! Renders fetched outbox posts through the markdown subset. This view has
//! its own narrower fallback: an unreachable index shows the empty-state
//! message without touching the rest of the page.

use crate::domain::markdown;
use crate::view::{region, Page, NO_RITUALS_MESSAGE};

/// Fill the rituals region from fetched posts (filename, body) in index order.
pub fn apply(page: &mut Page, posts: &[(String, String)]) {
    if posts.is_empty() {
        apply_empty(page);
        return;
    }

    let articles: String = posts
        .iter()
        .map(|(name, body)| {
            format!(
                "<article class=\"ritual\" data-post=\"{}\">{}</article>",
                name,
                markdown::render(body),
            )
        })
        .collect();

    page.set(region::RITUALS, articles);
}

/// Empty-state for a missing or unreachable outbox.
pub fn apply_empty(page: &mut Page) {
    page.set(region::RITUALS, format!("<p>{}</p>", NO_RITUALS_MESSAGE));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_posts_rendered_in_index_order() {
        let mut page = Page::new();
        let posts = vec![
            ("post_2.md".to_string(), "# Newest".to_string()),
            ("post_1.md".to_string(), "**older**".to_string()),
        ];
        apply(&mut page, &posts);

        let html = page.region(region::RITUALS).unwrap();
        assert!(html.contains("<h1>Newest</h1>"));
        assert!(html.contains("<strong>older</strong>"));
        assert!(html.find("post_2.md").unwrap() < html.find("post_1.md").unwrap());
    }

    #[test]
    fn test_empty_posts_show_empty_state() {
        let mut page = Page::new();
        apply(&mut page, &[]);
        assert!(page.region(region::RITUALS).unwrap().contains(NO_RITUALS_MESSAGE));
    }

    #[test]
    fn test_apply_empty() {
        let mut page = Page::new();
        apply_empty(&mut page);
        assert!(page.region(region::RITUALS).unwrap().contains(NO_RITUALS_MESSAGE));
    }
}
