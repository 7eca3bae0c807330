#![allow(dead_code, unused_imports, unused_variables)]
//! Seerdeck - Static Dashboard Renderer for the MemeSeer Agent
//!
//! Polls the agent memory snapshot and outbox posts and renders them into a
//! static HTML dashboard, with per-field fallbacks so a partial or missing
//! snapshot never breaks the page.
//!
//! # Modules
//!
//! - `domain`: Pure logic (defensive JSON reads, formatting, markdown subset)
//! - `ports`: Trait abstractions (SnapshotFeed, OutboxFeed)
//! - `adapters`: External implementations (filesystem, HTTP, CLI)
//! - `view`: Page regions and the two rendering views
//! - `config`: Configuration loading and validation
//! - `application`: Orchestrator (poll driver) and outbox indexer

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
pub mod view;
