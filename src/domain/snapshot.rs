//! Typed views over the agent memory snapshot
//!
//! The snapshot is whatever the agent last wrote to `memory.json`. Every
//! branch is optional and every accessor here substitutes a field-specific
//! default instead of failing; a half-written or ancient snapshot must still
//! render.

use serde_json::Value;

use super::value::{bool_at, int_at, opt_num_at, pluck, seq_at, str_at};

/// Root of the agent memory document.
#[derive(Debug, Clone)]
pub struct Snapshot {
    root: Value,
}

/// World observation written by the agent's observe step.
#[derive(Debug, Clone, PartialEq)]
pub struct World {
    pub mood: String,
    pub bucket: String,
    pub edge: Option<f64>,
    pub world_text: String,
}

/// Token balances plus treasury.
#[derive(Debug, Clone, PartialEq)]
pub struct Economy {
    pub seer: Option<f64>,
    pub mon: Option<f64>,
    pub seer_burned: Option<f64>,
    pub treasury: Option<f64>,
}

/// A tracked holding from `portfolio.active_positions`.
#[derive(Debug, Clone, PartialEq)]
pub struct Position {
    pub ticker: String,
    pub entry_mon: Option<f64>,
    pub allocation: Option<f64>,
    pub roi: Option<f64>,
    pub status: String,
    pub ladder_hits: Vec<String>,
    pub sold_pct_total: Option<f64>,
}

/// The per-run record embedded in a `run` event.
#[derive(Debug, Clone, PartialEq)]
pub struct RunEvent {
    pub ts: i64,
    pub launch: bool,
    pub reason: String,
    pub token_idea: Option<TokenIdea>,
}

/// Draft token proposed by a run.
#[derive(Debug, Clone, PartialEq)]
pub struct TokenIdea {
    pub name: String,
    pub ticker: String,
    pub narrative: String,
}

/// A completed launch keyed by launch id.
#[derive(Debug, Clone, PartialEq)]
pub struct Launch {
    pub id: String,
    pub image_path: String,
    pub ts: i64,
}

impl Snapshot {
    pub fn new(root: Value) -> Self {
        Self { root }
    }

    pub fn raw(&self) -> &Value {
        &self.root
    }

    pub fn world(&self) -> World {
        World {
            mood: str_at(&self.root, "world.mood", "-"),
            bucket: str_at(&self.root, "world.bucket", "-"),
            edge: opt_num_at(&self.root, "world.edge"),
            world_text: str_at(&self.root, "world.world_text", ""),
        }
    }

    pub fn economy(&self) -> Economy {
        Economy {
            seer: opt_num_at(&self.root, "economy.balances.seer"),
            mon: opt_num_at(&self.root, "economy.balances.mon"),
            seer_burned: opt_num_at(&self.root, "economy.balances.seer_burned"),
            treasury: opt_num_at(&self.root, "economy.treasury"),
        }
    }

    /// Positions in the order the agent appended them (oldest first).
    pub fn positions(&self) -> Vec<Position> {
        seq_at(&self.root, "portfolio.active_positions")
            .iter()
            .map(Position::from_value)
            .collect()
    }

    /// Events of type `run`, in recording order. Other event types are noise
    /// for the dashboard and are dropped here.
    pub fn run_events(&self) -> Vec<RunEvent> {
        seq_at(&self.root, "events")
            .iter()
            .filter(|e| str_at(e, "type", "") == "run")
            .map(RunEvent::from_value)
            .collect()
    }

    /// The most recent run event, if the agent has run at all.
    pub fn latest_run(&self) -> Option<RunEvent> {
        self.run_events().into_iter().last()
    }

    /// Launches sorted by id so render output is stable across polls.
    pub fn launches(&self) -> Vec<Launch> {
        let mut launches: Vec<Launch> = super::value::map_at(&self.root, "launches")
            .map(|(id, v)| Launch {
                id: id.clone(),
                image_path: str_at(v, "image_path", ""),
                ts: int_at(v, "ts", 0),
            })
            .collect();
        launches.sort_by(|a, b| a.id.cmp(&b.id));
        launches
    }
}

impl Position {
    pub fn from_value(v: &Value) -> Self {
        // Older snapshots used "symbol" for the ticker field
        let ticker = match pluck(v, "ticker").and_then(Value::as_str) {
            Some(t) => t.to_string(),
            None => str_at(v, "symbol", "???"),
        };

        Self {
            ticker,
            entry_mon: opt_num_at(v, "entry_mon"),
            allocation: opt_num_at(v, "token_amount"),
            roi: opt_num_at(v, "roi"),
            status: str_at(v, "status", "UNKNOWN"),
            ladder_hits: seq_at(v, "ladder_hits")
                .iter()
                .filter_map(|h| match h {
                    Value::String(s) => Some(s.clone()),
                    Value::Number(n) => n.as_f64().map(|f| format!("{}", f)),
                    _ => None,
                })
                .collect(),
            sold_pct_total: opt_num_at(v, "sold_pct_total"),
        }
    }

    /// Whether this position should wear the active-style badge.
    pub fn is_live(&self) -> bool {
        matches!(
            self.status.to_ascii_uppercase().as_str(),
            "ACTIVE" | "EXITING"
        )
    }
}

impl RunEvent {
    pub fn from_value(v: &Value) -> Self {
        let token_idea = pluck(v, "record.token_idea")
            .filter(|t| t.is_object())
            .map(|t| TokenIdea {
                name: str_at(t, "name", "UNKNOWN"),
                ticker: str_at(t, "ticker", "????"),
                narrative: str_at(t, "narrative", ""),
            });

        Self {
            ts: int_at(v, "ts", 0),
            launch: bool_at(v, "record.decision.launch", false),
            reason: str_at(v, "record.decision.reason", "N/A"),
            token_idea,
        }
    }
}
