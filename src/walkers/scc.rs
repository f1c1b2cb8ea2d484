//! Strongly-connected-component decomposition over callback-defined edges.

use std::hash::Hash;
use std::marker::PhantomData;

use crate::edge::Edges;
use crate::walkers::depth::depth_first;
use crate::walkers::visited::VisitedSet;

/// Partitions a reachable subgraph into maximal cyclic clusters.
///
/// Kosaraju's two-pass method, adapted to edge enumerations and multiple
/// sources. The forward pass follows successor edges depth-first and records
/// the post-order finishing sequence; the backward pass revisits nodes in
/// decreasing finishing order, collecting one component per unvisited root by
/// following predecessor edges. Components come out in a valid topological
/// order of the condensed graph: whenever an edge leads from component `A`
/// into component `B`, `A` is delivered no later than `B`.
///
/// A node with no cycle through it forms a singleton component. Self-loops
/// and parallel edges are harmless; a node is never revisited or delivered
/// twice. The intra-component node order is the discovery pre-order of the
/// backward pass, so for a fixed enumeration order the output is fully
/// deterministic, membership and ordering both.
pub struct SccWalker<N, P, S> {
    prev: P,
    next: S,
    _node: PhantomData<fn(N) -> N>,
}

impl<N, P, S> SccWalker<N, P, S>
where
    N: Clone + Eq + Hash,
    P: Edges<N>,
    S: Edges<N>,
{
    /// Creates a decomposer from predecessor and successor enumerations.
    pub fn new(prev: P, next: S) -> Self {
        Self {
            prev,
            next,
            _node: PhantomData,
        }
    }

    /// Decomposes the subgraph reachable from a single source.
    /// See [`walk`](Self::walk).
    pub fn walk_from(&self, source: N, on_component: impl FnMut(Vec<N>)) {
        self.walk(core::iter::once(source), on_component);
    }

    /// Decomposes the subgraph reachable from `sources` via successor edges.
    ///
    /// `on_component` fires once per strongly connected component, in
    /// condensation dependency order; the component is handed over by value
    /// and not retained. Sources are processed in the order given, with
    /// already-visited ones skipped. Panics from the edge functions or the
    /// callback unwind through the walk, abandoning all call-scoped state.
    pub fn walk<I>(&self, sources: I, mut on_component: impl FnMut(Vec<N>))
    where
        I: IntoIterator<Item = N>,
    {
        // Forward pass: post-order finishing sequence over successor edges.
        let mut visited = VisitedSet::new();
        let mut finish_order: Vec<N> = Vec::new();
        for source in sources {
            depth_first(
                &self.next,
                source,
                &mut visited,
                &mut |_: &N| {},
                &mut |node: N| finish_order.push(node),
            );
        }

        // Backward pass: latest-finishing unvisited node roots the next
        // component, collected in discovery order over predecessor edges.
        let mut visited = VisitedSet::new();
        for root in finish_order.iter().rev() {
            if visited.is_visited(root) {
                continue;
            }
            let mut component: Vec<N> = Vec::new();
            depth_first(
                &self.prev,
                root.clone(),
                &mut visited,
                &mut |node: &N| component.push(node.clone()),
                &mut |_: N| {},
            );
            #[cfg(feature = "tracing")]
            tracing::trace!(len = component.len(), "component delivered");
            on_component(component);
        }

        #[cfg(feature = "tracing")]
        tracing::trace!(nodes = visited.len(), "scc walk complete");
    }
}
