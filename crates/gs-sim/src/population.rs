//! Infection state of the simulated population.

use gs_core::NodeId;

/// One infected flag per node, plus a running count.
///
/// Flags are monotone: there is no operation that clears one.  Node 0 holds
/// the rumour from the start.
#[derive(Clone, Debug)]
pub struct Population {
    infected: Vec<bool>,
    count:    usize,
}

impl Population {
    /// `n` nodes, only [`NodeId::ORIGIN`] infected.
    ///
    /// # Panics
    /// Panics if `n == 0`; callers validate parameters first.
    pub fn new(n: usize) -> Self {
        let mut infected = vec![false; n];
        infected[NodeId::ORIGIN.index()] = true;
        Self { infected, count: 1 }
    }

    #[inline]
    pub fn node_count(&self) -> usize {
        self.infected.len()
    }

    #[inline]
    pub fn is_infected(&self, node: NodeId) -> bool {
        self.infected[node.index()]
    }

    #[inline]
    pub fn infected_count(&self) -> usize {
        self.count
    }

    #[inline]
    pub fn all_infected(&self) -> bool {
        self.count == self.infected.len()
    }

    /// Mark `node` infected.  Returns `true` if it was not infected before.
    #[inline]
    pub fn infect(&mut self, node: NodeId) -> bool {
        let flag = &mut self.infected[node.index()];
        if *flag {
            return false;
        }
        *flag = true;
        self.count += 1;
        true
    }

    /// Bidirectional exchange between `node` and its `contacts`, applied to
    /// the live state.
    ///
    /// Push first: an infected `node` infects every contact.  Then pull: an
    /// uninfected `node` becomes infected if any contact is infected.
    pub fn exchange(&mut self, node: NodeId, contacts: &[NodeId]) {
        if self.is_infected(node) {
            for &peer in contacts {
                self.infect(peer);
            }
        } else if contacts.iter().any(|&peer| self.is_infected(peer)) {
            self.infect(node);
        }
    }

    /// Read-only view of the flags, indexed by node.
    pub fn flags(&self) -> &[bool] {
        &self.infected
    }
}
