//! # Torrust Ledger
//!
//! Announce accounting core for private BitTorrent trackers, built in the
//! Torrust-Actix style.
//!
//! ## Overview
//!
//! The protocol layer parses an announce and loads the user, group and
//! torrent it belongs to. The ledger then does the accounting that must happen
//! exactly once per announce: it reconstructs the previous peer state,
//! computes traffic deltas, credits them under the freeleech and double upload
//! policy, classifies the seeder/leecher transition, increments user and
//! torrent aggregates, and queues peer and history records for the batch
//! persistence workers.
//!
//! ## Features
//!
//! - **Serialized per pair**: a TTL lease per (user, torrent), in process or in Redis
//! - **Layered crediting**: personal, group, token and global freeleech; torrent percentages; double upload
//! - **Relative aggregates**: increments only, on SQLite, MySQL, PostgreSQL or in memory
//! - **Flag cache**: freeleech existence remembered in Redis, Memcache or memory
//! - **Worker**: bounded concurrent job processing with contention retry
//! - **Monitoring**: atomic statistics, console reporting and Sentry integration
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use torrust_ledger::config::structs::configuration::Configuration;
//! use torrust_ledger::processor::structs::announce_processor::AnnounceProcessor;
//! use torrust_ledger::stats::structs::stats_atomics::StatsAtomics;
//!
//! let config = Configuration::load_from_file("config.toml", false)?;
//! let processor = AnnounceProcessor::from_config(&config, false, Arc::new(StatsAtomics::new())).await?;
//! let outcome = processor.process(&raw, &user, &group, &torrent).await?;
//! ```
//!
//! ## Modules
//!
//! - [`announce`] - Raw announce normalization, events and errors
//! - [`peer`] - Peers, previous state resolution and connectability
//! - [`credit`] - Freeleech and double upload crediting
//! - [`swarm`] - Seeder/leecher transition classification
//! - [`guard`] - Per (user, torrent) leases
//! - [`aggregate`] - Relative user and torrent increments
//! - [`batch`] - Peer and history records and their queues
//! - [`processor`] - The announce pipeline
//! - [`worker`] - Queue driven processing with retries
//! - [`database`] - Repositories over SQL or memory
//! - [`cache`] - Freeleech flag cache
//! - [`stats`] - Processing statistics
//! - [`config`] - Configuration management and TOML parsing

/// Aggregate updater.
///
/// Applies credited traffic to users and swarm deltas to torrents as
/// relative increments, skipping zero deltas.
pub mod aggregate;

/// Request normalizer.
///
/// Decodes base64 peer ids and addresses and parses the numeric fields of a
/// raw announce. Also home of `AnnounceError`.
pub mod announce;

/// Batch emitter.
///
/// Builds the peer snapshot and history records of an announce and pushes
/// them as JSON onto named queues.
pub mod batch;

/// Freeleech flag cache supporting Redis and Memcache.
pub mod cache;

/// Common utilities and shared functionality.
///
/// Contains logging setup, time helpers, agent truncation and the base64 serde
/// adapter.
pub mod common;

/// Configuration management module.
///
/// Handles loading, parsing, and validating configuration from TOML files.
pub mod config;

/// Credit engine.
pub mod credit;

/// Repository traits with SQL and in-process backends.
///
/// Provides a unified interface for SQLite, MySQL, and PostgreSQL backends
/// with support for custom table and column names.
pub mod database;

/// Serialization guard.
pub mod guard;

/// Peer state resolver and connectability checks.
pub mod peer;

/// Announce pipeline.
pub mod processor;

/// Statistics tracking module.
pub mod stats;

/// CLI argument parsing.
pub mod structs;

/// Swarm transition classifier.
pub mod swarm;

/// Users, groups and torrents as loaded by the caller.
pub mod tracker;

/// Sentry tracing helpers.
pub mod utils;

/// Job queues and the announce worker.
pub mod worker;
