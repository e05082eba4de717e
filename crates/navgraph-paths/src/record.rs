use std::cmp::Ordering;

use navgraph_core::NodeIndex;

// ---------------------------------------------------------------------------
// Search records
// ---------------------------------------------------------------------------

/// Which working set a record currently belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum State {
    /// Pending expansion. `seq` is the insertion order of the live heap
    /// entry for this record; older heap entries for the node are stale.
    Open { seq: u64 },
    Closed,
}

/// Best known way of reaching one node during a single search.
#[derive(Debug, Clone)]
pub(crate) struct Record<C> {
    /// Connection used to reach the node. `None` only for the start.
    pub(crate) incoming: Option<C>,
    /// Cost so far (g).
    pub(crate) g: f32,
    /// Estimated total cost (f = g + h).
    pub(crate) f: f32,
    pub(crate) state: State,
}

/// What to do with a newly found route to a node.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Relax {
    /// No record yet.
    Discover,
    /// Cheaper than the pending open record, which is replaced.
    Improve,
    /// Cheaper than a closed record, which moves back to open.
    Reopen,
    /// Not cheaper than what is already known.
    Skip,
}

impl Relax {
    /// Decide how a route of cost `g` compares to the existing record.
    pub(crate) fn decide<C>(existing: Option<&Record<C>>, g: f32) -> Self {
        match existing {
            None => Self::Discover,
            Some(r) if r.g <= g => Self::Skip,
            Some(r) => match r.state {
                State::Open { .. } => Self::Improve,
                State::Closed => Self::Reopen,
            },
        }
    }
}

// ---------------------------------------------------------------------------
// Open-set heap entry
// ---------------------------------------------------------------------------

/// Heap entry ordered so that `BinaryHeap` (max-heap) pops the smallest `f`
/// first, and among equal `f` the entry inserted first.
#[derive(Debug, Clone, Copy)]
pub(crate) struct OpenEntry {
    pub(crate) f: f32,
    pub(crate) seq: u64,
    pub(crate) node: NodeIndex,
}

impl PartialEq for OpenEntry {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for OpenEntry {}

impl PartialOrd for OpenEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for OpenEntry {
    fn cmp(&self, other: &Self) -> Ordering {
        // Reversed on both keys.
        other
            .f
            .total_cmp(&self.f)
            .then_with(|| other.seq.cmp(&self.seq))
    }
}
