//! Freeleech and double upload crediting.
//!
//! Raw traffic deltas become credited deltas in two independent steps.
//!
//! # Download
//!
//! The first matching rule wins:
//!
//! 1. personal freeleech, group freeleech, a freeleech token or the global
//!    freeleech toggle credit nothing
//! 2. otherwise the torrent's `free` percentage exempts that share of the bytes
//!
//! # Upload
//!
//! Torrent double upload, group double upload and the global toggle each
//! double the credited bytes. They do not stack.
//!
//! Personal freeleech and token existence are looked up through the flag cache
//! and remembered without expiry.

/// Implementation blocks for crediting.
pub mod impls;

/// Credit policy, overrides, results and the engine.
pub mod structs;
