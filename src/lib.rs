//! # `irwalk` - Dependency-Order Graph Walkers
//!
//! Generic traversal walkers for the pass pipeline of a tensor compiler's
//! intermediate representation. Passes over an IR graph must visit operator
//! nodes in dependency order and must isolate the cyclic clusters that
//! multi-output fusion groups and control structures introduce; this crate
//! provides exactly those two primitives, plus the plain breadth-first and
//! depth-first walks that round out the family.
//!
//! ## Design
//!
//! - **Callback-defined graphs**: a walker never materializes or owns a
//!   graph. Topology arrives through two [`Edges`] enumerations (predecessor
//!   and successor direction) fixed at construction, so any IR storage (or a
//!   closure over a literal edge list in a test) plugs in unchanged.
//! - **Call-scoped state**: queues, stacks, and visited sets live for one
//!   `walk` call and are discarded. Walkers are immutable configuration and
//!   can be reused; repeated calls are independent.
//! - **Deterministic orders**: the caller's edge enumeration order is the
//!   only ordering law. Identical inputs produce byte-identical visit
//!   sequences.
//! - **No recursion**: the depth-first passes run on explicit frame stacks,
//!   so chains tens of thousands of nodes deep cannot overflow the call
//!   stack.
//!
//! ## Walkers
//!
//! | Walker | Order delivered |
//! |--------|-----------------|
//! | [`TopoWalker`] | dependency order (Kahn-style, predecessor-closed sources) |
//! | [`SccWalker`] | strongly connected components, condensation order |
//! | [`BfsWalker`] | breadth-first discovery order |
//! | [`DfsWalker`] | depth-first pre-order |
//!
//! A fusion/scheduling pass typically chains the first two: decompose cycles
//! into components with [`SccWalker`], then schedule the acyclic condensation
//! with [`TopoWalker`].
//!
//! ## Example
//!
//! ```rust
//! use irwalk::TopoWalker;
//!
//! // 0 --> 1 --> 3
//! //  \--> 2 --/
//! let edges = vec![(0u32, 1u32), (0, 2), (1, 3), (2, 3)];
//! let walker = TopoWalker::new(
//!     |node: &u32, visit: &mut dyn FnMut(u32)| {
//!         for &(from, to) in &edges {
//!             if to == *node {
//!                 visit(from);
//!             }
//!         }
//!     },
//!     |node: &u32, visit: &mut dyn FnMut(u32)| {
//!         for &(from, to) in &edges {
//!             if from == *node {
//!                 visit(to);
//!             }
//!         }
//!     },
//! );
//!
//! let mut order = Vec::new();
//! walker.walk_from(0, |node| order.push(*node));
//! assert_eq!(order, vec![0, 1, 2, 3]);
//! ```
//!
//! ## Feature flags
//!
//! - `tracing`: emit `trace!`-level completion events through the
//!   [`tracing`](https://docs.rs/tracing) crate. Off by default; walks cost
//!   nothing extra when disabled.

#![warn(missing_docs, clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]

pub mod edge;
pub mod walkers;

pub use edge::Edges;
pub use walkers::{BfsWalker, DfsWalker, SccWalker, TopoWalker};
