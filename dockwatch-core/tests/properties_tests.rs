//! Property tests for the dockwatch core library
//!
//! These exercise the crate's public API: unit decoding, the sort
//! engine's toggle state machine, and the stats parser.

// Allow common test patterns that Clippy warns about
#![allow(clippy::redundant_clone)]
#![allow(clippy::similar_names)]
#![allow(clippy::too_many_lines)]

mod properties;
