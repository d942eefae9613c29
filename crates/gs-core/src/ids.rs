//! Strongly typed node identifier.
//!
//! `NodeId` is `Copy + Ord + Hash`.  The inner integer is `pub` to allow
//! direct indexing into the population flags via `id.0 as usize`, but callers
//! should prefer `.index()` for clarity.

use std::fmt;

/// Index of a node in the simulated population.  Max ~4.3 billion nodes.
#[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug)]
pub struct NodeId(pub u32);

impl NodeId {
    /// The node that holds the rumour when a run starts.
    pub const ORIGIN: NodeId = NodeId(0);

    /// Cast to `usize` for direct use as a `Vec` index.
    #[inline(always)]
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "NodeId({})", self.0)
    }
}

impl TryFrom<usize> for NodeId {
    type Error = std::num::TryFromIntError;
    fn try_from(n: usize) -> Result<NodeId, Self::Error> {
        u32::try_from(n).map(NodeId)
    }
}
