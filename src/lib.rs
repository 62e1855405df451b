//! Rank queries over a stream of values.
//!
//! This crate provides [`RankTree`], a multiset that records values one at a
//! time and reports, for any recorded value `x`, how many recorded values are
//! less than or equal to `x`, not counting `x` itself:
//!
//! - [`track`](RankTree::track) - Record one occurrence of a value
//! - [`rank_of`](RankTree::rank_of) - Get the rank of a value, or `None` if it was never recorded
//! - [`iter`](RankTree::iter) - Dump `(value, count)` pairs in ascending order
//!
//! # Example
//!
//! ```
//! use rank_stream::RankTree;
//!
//! let mut stream = RankTree::new();
//! for value in [5, 1, 4, 4, 5, 9, 7, 13, 3] {
//!     stream.track(value);
//! }
//!
//! assert_eq!(stream.rank_of(&1), Some(0));
//! assert_eq!(stream.rank_of(&5), Some(5));
//! assert_eq!(stream.rank_of(&10), None);
//!
//! // The `-1` convention is available too.
//! assert_eq!(stream.rank_or_sentinel(&10), -1);
//! ```
//!
//! # Implementation
//!
//! A plain binary search tree with one node per distinct value. Each node
//! stores how often its value was recorded and the total count of its
//! subtree, so a rank query is a single root-to-node descent. Nodes live in an
//! arena and link to their children by index.
//!
//! The tree is deliberately not self-balancing: monotonic streams make it a
//! path and both operations linear, random streams keep them logarithmic.

#![no_std]
// These forbid rules and lint groups are meant to be very restrictive.
#![forbid(unsafe_code)]
#![forbid(keyword_idents)]
#![forbid(non_ascii_idents)]
#![forbid(unreachable_pub)]
#![warn(clippy::all)]
#![warn(clippy::cargo)]
#![warn(clippy::pedantic)]
// Enable coverage attributes for nightly builds.
#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

extern crate alloc;

mod raw;

pub mod order_statistic;
pub mod rank_tree;

pub use rank_tree::RankTree;
