//! The edge-enumeration seam between a walker and the graph that owns the edges.
//!
//! Walkers never materialize a graph. They see topology exclusively through
//! [`Edges`] values handed over at construction: one enumeration per direction,
//! invoked on demand for one node at a time. This keeps the walkers decoupled
//! from any concrete IR representation and testable with plain closures over
//! an edge list.

/// One-directional neighbor enumeration over an abstract graph.
///
/// An implementor calls `visit` once per neighbor of `node`, in whatever
/// order the underlying storage yields them. The walkers preserve that order
/// exactly; it is the only ordering law they follow, so two walks over the
/// same graph with the same enumeration order produce identical output.
///
/// # Contract
///
/// For the duration of one walk call the enumeration must be stable: repeated
/// invocation for the same node yields the same neighbor sequence, and the
/// underlying graph must not mutate. A mutating or non-deterministic
/// implementation does not make a walk unsound, but its output order is
/// unspecified and non-reproducible.
pub trait Edges<N> {
    /// Calls `visit` once per neighbor of `node`.
    fn for_each(&self, node: &N, visit: &mut dyn FnMut(N));
}

/// Any `Fn(&N, &mut dyn FnMut(N))` closure is an edge enumeration.
impl<N, F> Edges<N> for F
where
    F: Fn(&N, &mut dyn FnMut(N)),
{
    #[inline]
    fn for_each(&self, node: &N, visit: &mut dyn FnMut(N)) {
        self(node, visit);
    }
}
