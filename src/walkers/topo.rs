//! Breadth-first topological scheduling over callback-defined edges.

use std::collections::VecDeque;
use std::hash::Hash;
use std::marker::PhantomData;

use crate::edge::Edges;
use crate::walkers::visited::VisitedSet;

/// A breadth-first scheduler that visits nodes in dependency order.
///
/// Generalized Kahn's algorithm: nodes leave a FIFO queue, and a successor is
/// enqueued only once every one of its predecessors has been discovered. The
/// walker holds nothing but the two edge enumerations; all traversal state is
/// scoped to one [`walk`](Self::walk) call.
///
/// # Contract
///
/// The source set must be *predecessor-closed*: every predecessor of any node
/// that should be visited must itself be reachable from the sources. A node
/// with a predecessor outside that closure never becomes ready and is
/// silently skipped: the walker schedules an already-cut subgraph, it does
/// not detect cycles. Cyclic input likewise strands every node on a cycle.
/// Decompose cycles with [`SccWalker`](crate::SccWalker) first, then schedule
/// the acyclic condensation. Debug builds assert when a walk drains with
/// stranded nodes; release builds keep the silent narrowing.
///
/// # Complexity
///
/// `O(V + E)` queue operations over the reachable subgraph, but the
/// predecessor enumeration of a successor runs once per discovery attempt.
/// Callers with expensive predecessor functions should memoize in-degree.
pub struct TopoWalker<N, P, S> {
    prev: P,
    next: S,
    _node: PhantomData<fn(N) -> N>,
}

impl<N, P, S> TopoWalker<N, P, S>
where
    N: Clone + Eq + Hash,
    P: Edges<N>,
    S: Edges<N>,
{
    /// Creates a scheduler from predecessor and successor enumerations.
    pub fn new(prev: P, next: S) -> Self {
        Self {
            prev,
            next,
            _node: PhantomData,
        }
    }

    /// Walks from a single source node. See [`walk`](Self::walk).
    pub fn walk_from(&self, source: N, handler: impl FnMut(&N)) {
        self.walk(core::iter::once(source), handler);
    }

    /// Visits every node reachable from `sources`, dependency order first.
    ///
    /// `handler` fires exactly once per reachable node, never before all of
    /// the node's predecessors have fired. Duplicate sources collapse. The
    /// visit order is fully determined by the edge enumeration order, so
    /// repeated walks over an unchanged graph are byte-identical.
    ///
    /// Panics raised by the edge functions or the handler unwind through the
    /// walk; the abandoned call leaves no observable state behind.
    pub fn walk<I>(&self, sources: I, mut handler: impl FnMut(&N))
    where
        I: IntoIterator<Item = N>,
    {
        let mut queue = VecDeque::new();
        let mut discovered = VisitedSet::new();
        #[cfg(debug_assertions)]
        let mut deferred: std::collections::HashSet<N> = std::collections::HashSet::new();

        for source in sources {
            if discovered.try_visit(&source) {
                queue.push_back(source);
            }
        }

        while let Some(node) = queue.pop_front() {
            handler(&node);
            self.next.for_each(&node, &mut |succ| {
                if discovered.is_visited(&succ) {
                    return;
                }
                // Ready once no predecessor remains undiscovered.
                let mut unfinished = 0usize;
                self.prev.for_each(&succ, &mut |pred| {
                    if !discovered.is_visited(&pred) {
                        unfinished += 1;
                    }
                });
                if unfinished == 0 {
                    if discovered.try_visit(&succ) {
                        queue.push_back(succ);
                    }
                    return;
                }
                #[cfg(debug_assertions)]
                deferred.insert(succ.clone());
            });
        }

        #[cfg(debug_assertions)]
        {
            deferred.retain(|node| !discovered.is_visited(node));
            debug_assert!(
                deferred.is_empty(),
                "topological walk stalled: {} reachable node(s) never became ready; \
                 the source set is not predecessor-closed or the graph has a cycle",
                deferred.len()
            );
        }

        #[cfg(feature = "tracing")]
        tracing::trace!(scheduled = discovered.len(), "topological walk complete");
    }
}
