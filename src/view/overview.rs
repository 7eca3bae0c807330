//! Overview view: world, economy, positions, token panel, launches
//!
//! Builds the primary regions from a snapshot. Every field falls back to its
//! own placeholder; a snapshot with nothing in it still renders a full page of
//! defaults.

use crate::domain::{format, markdown, Position, RunEvent, Snapshot};
use crate::view::{region, Page};

/// Render knobs for the overview regions.
#[derive(Debug, Clone)]
pub struct OverviewOptions {
    /// Relative base the page uses to link outbox artifacts.
    pub outbox_base: String,
    /// How many of the most recent positions to show.
    pub max_positions: usize,
}

impl Default for OverviewOptions {
    fn default() -> Self {
        Self {
            outbox_base: "../outbox".to_string(),
            max_positions: 5,
        }
    }
}

/// Fill all overview regions on the page from the snapshot.
pub fn apply(page: &mut Page, snapshot: &Snapshot, opts: &OverviewOptions) {
    let world = snapshot.world();
    page.set(region::MOOD, world.mood);
    page.set(region::BUCKET, world.bucket);
    page.set(region::EDGE, format!("edge {}", format::edge(world.edge)));
    page.set(region::WORLD_TEXT, markdown::render(&world.world_text));

    let economy = snapshot.economy();
    page.set(
        region::BALANCES,
        format!(
            "SEER {} | MON {} | burned {}",
            format::amount(economy.seer),
            format::amount(economy.mon),
            format::amount(economy.seer_burned),
        ),
    );
    page.set(
        region::TREASURY,
        format!("treasury {}", format::amount(economy.treasury)),
    );

    page.set(
        region::POSITIONS,
        positions_html(&snapshot.positions(), opts.max_positions),
    );
    page.set(
        region::TOKEN_PANEL,
        token_panel_html(snapshot.latest_run().as_ref()),
    );
    page.set(region::LAUNCHES, launches_html(snapshot, &opts.outbox_base));
}

/// Positions table: the newest `max` entries, newest first.
pub fn positions_html(positions: &[Position], max: usize) -> String {
    if positions.is_empty() {
        return "<p>No active positions.</p>".to_string();
    }

    let rows: String = positions
        .iter()
        .rev()
        .take(max)
        .map(position_row)
        .collect();

    format!(
        "<table><tr><th>ticker</th><th>entry</th><th>alloc</th><th>roi</th>\
         <th>sold</th><th>status</th><th>ladder</th></tr>{}</table>",
        rows
    )
}

fn position_row(p: &Position) -> String {
    let badge = if p.is_live() { "badge-live" } else { "badge-idle" };
    let ladder = if p.ladder_hits.is_empty() {
        "-".to_string()
    } else {
        p.ladder_hits.join(" ")
    };

    format!(
        "<tr><td>{}</td><td>{}</td><td>{}</td><td>{}</td><td>{}</td>\
         <td class=\"{}\">{}</td><td>{}</td></tr>",
        p.ticker,
        format::amount(p.entry_mon),
        format::amount(p.allocation),
        format::percent(p.roi),
        format::percent(p.sold_pct_total),
        badge,
        p.status,
        ladder,
    )
}

/// Token panel: the draft idea of the latest run, or the no-launch fallback.
///
/// The panel shows only when the decision said launch AND an idea is present;
/// the other three combinations all fall back, carrying the decision reason.
pub fn token_panel_html(latest: Option<&RunEvent>) -> String {
    match latest {
        Some(run) if run.launch => match &run.token_idea {
            Some(idea) => format!(
                "<h3>${} - {}</h3><div>{}</div>",
                idea.ticker,
                idea.name,
                markdown::render(&idea.narrative),
            ),
            None => no_launch_html(&run.reason),
        },
        Some(run) => no_launch_html(&run.reason),
        None => no_launch_html("N/A"),
    }
}

fn no_launch_html(reason: &str) -> String {
    format!("<p>No launch this run.</p><em>{}</em>", reason)
}

/// Launch history: artifact links under the outbox base, newest data as the
/// agent recorded it.
pub fn launches_html(snapshot: &Snapshot, outbox_base: &str) -> String {
    let launches = snapshot.launches();
    if launches.is_empty() {
        return "<p>No launches yet.</p>".to_string();
    }

    let items: String = launches
        .iter()
        .map(|l| {
            let file = format::file_name(&l.image_path);
            format!(
                "<li><a href=\"{}\">{}</a> - {}</li>",
                format::artifact_link(outbox_base, &l.image_path),
                file,
                format::unix_date(l.ts),
            )
        })
        .collect();

    format!("<ul>{}</ul>", items)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Snapshot;
    use serde_json::json;

    fn positions_of(n: usize) -> Vec<Position> {
        (0..n)
            .map(|i| {
                Position::from_value(&json!({
                    "ticker": format!("T{}", i),
                    "entry_mon": 100.0 + i as f64,
                    "roi": 10.0 * i as f64,
                    "status": "ACTIVE"
                }))
            })
            .collect()
    }

    #[test]
    fn test_positions_shows_newest_five_reversed() {
        let html = positions_html(&positions_of(8), 5);
        // Entries 7..3, in that order; 2 and older absent
        let idx: Vec<_> = ["T7", "T6", "T5", "T4", "T3"]
            .iter()
            .map(|t| html.find(*t).unwrap())
            .collect();
        assert!(idx.windows(2).all(|w| w[0] < w[1]));
        assert!(!html.contains("T2"));
    }

    #[test]
    fn test_positions_short_list_all_reversed() {
        let html = positions_html(&positions_of(3), 5);
        let i2 = html.find("T2").unwrap();
        let i0 = html.find("T0").unwrap();
        assert!(i2 < i0);
    }

    #[test]
    fn test_positions_empty_state() {
        assert!(positions_html(&[], 5).contains("No active positions"));
    }

    #[test]
    fn test_position_row_shows_allocation_and_sold() {
        let p = Position::from_value(&json!({
            "ticker": "DOG", "entry_mon": 200.0, "token_amount": 1500.5,
            "roi": 40.0, "sold_pct_total": 20.0, "status": "ACTIVE"
        }));
        let html = positions_html(&[p], 5);
        assert!(html.contains("<td>1500.50</td>"));
        assert!(html.contains("<td>20.0%</td>"));
        assert!(html.contains("<th>alloc</th>"));
        assert!(html.contains("<th>sold</th>"));

        // Absent fields keep their own placeholders
        let p = Position::from_value(&json!({"ticker": "CAT"}));
        let html = positions_html(&[p], 5);
        assert!(html.contains("<td>0.00</td>")); // allocation
        assert!(html.contains("<td>-</td>")); // sold
    }

    #[test]
    fn test_token_panel_matrix() {
        let idea = json!({"name": "Dog Wizard", "ticker": "DOGWIZ", "narrative": "woof"});

        // launch=true, idea present -> panel
        let run = RunEvent::from_value(&json!({
            "record": {"decision": {"launch": true, "reason": "go"}, "token_idea": idea}
        }));
        let html = token_panel_html(Some(&run));
        assert!(html.contains("$DOGWIZ"));
        assert!(html.contains("Dog Wizard"));

        // launch=true, idea absent -> fallback
        let run = RunEvent::from_value(&json!({
            "record": {"decision": {"launch": true, "reason": "go"}}
        }));
        let html = token_panel_html(Some(&run));
        assert!(html.contains("No launch this run"));
        assert!(html.contains("go"));

        // launch=false, idea present -> fallback
        let run = RunEvent::from_value(&json!({
            "record": {"decision": {"launch": false, "reason": "gated"}, "token_idea": idea}
        }));
        let html = token_panel_html(Some(&run));
        assert!(html.contains("No launch this run"));
        assert!(html.contains("gated"));
        assert!(!html.contains("$DOGWIZ"));

        // launch=false, idea absent -> fallback with reason default
        let run = RunEvent::from_value(&json!({"record": {}}));
        let html = token_panel_html(Some(&run));
        assert!(html.contains("No launch this run"));
        assert!(html.contains("N/A"));
    }

    #[test]
    fn test_token_panel_no_runs_at_all() {
        let html = token_panel_html(None);
        assert!(html.contains("No launch this run"));
        assert!(html.contains("N/A"));
    }

    #[test]
    fn test_launch_link_uses_filename_under_outbox_base() {
        let snapshot = Snapshot::new(json!({
            "launches": {"x": {"image_path": "a\\b\\c.md", "ts": 1700000000}}
        }));
        let html = launches_html(&snapshot, "../outbox");
        assert!(html.contains("href=\"../outbox/c.md\""));
        assert!(html.contains(">c.md</a>"));
        assert!(html.contains("2023-11-14"));
    }

    #[test]
    fn test_apply_never_fails_on_empty_snapshot() {
        let mut page = Page::new();
        let snapshot = Snapshot::new(json!({}));
        apply(&mut page, &snapshot, &OverviewOptions::default());

        assert_eq!(page.region(region::MOOD), Some("-"));
        assert_eq!(page.region(region::EDGE), Some("edge -"));
        assert!(page
            .region(region::BALANCES)
            .unwrap()
            .contains("SEER 0.00 | MON 0.00 | burned 0.00"));
        assert!(page.region(region::POSITIONS).unwrap().contains("No active positions"));
        assert!(page.region(region::LAUNCHES).unwrap().contains("No launches yet"));
    }
}
