// src/models/node_chain.rs
//
// The fixed-length chain of block rows.
// Built once; nodes are never added or removed. One node is "current" and
// the traversal direction bounces between the two ends of the chain.

use crate::animation::ScaleState;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Traversal {
    Forward,
    Backward,
}

impl Traversal {
    pub fn flipped(self) -> Self {
        match self {
            Traversal::Forward => Traversal::Backward,
            Traversal::Backward => Traversal::Forward,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Advance {
    Moved(usize),
    // stayed on the end node and flipped direction
    BoundaryHit(usize),
}

#[derive(Debug, Clone)]
pub struct Node {
    pub index: usize,
    pub state: ScaleState,
}

#[derive(Debug, Clone)]
pub struct NodeChain {
    nodes: Vec<Node>,
    current: usize,
    direction: Traversal,
}

impl NodeChain {
    /// `count` must be at least 1; config validation enforces this.
    pub fn new(count: usize, scale_step: f32) -> Self {
        let nodes = (0..count.max(1))
            .map(|index| Node {
                index,
                state: ScaleState::new(scale_step),
            })
            .collect();

        Self {
            nodes,
            current: 0,
            direction: Traversal::Forward,
        }
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn nodes(&self) -> &[Node] {
        &self.nodes
    }

    pub fn current_index(&self) -> usize {
        self.current
    }

    pub fn direction(&self) -> Traversal {
        self.direction
    }

    pub fn current(&self) -> &Node {
        &self.nodes[self.current]
    }

    pub fn current_mut(&mut self) -> &mut Node {
        &mut self.nodes[self.current]
    }

    fn neighbor(&self, index: usize, direction: Traversal) -> Option<usize> {
        match direction {
            Traversal::Forward => (index + 1 < self.nodes.len()).then_some(index + 1),
            Traversal::Backward => index.checked_sub(1),
        }
    }

    /// Moves the current pointer one node along the traversal direction.
    /// At either end the pointer stays put and the direction flips.
    pub fn advance(&mut self) -> Advance {
        match self.neighbor(self.current, self.direction) {
            Some(next) => {
                self.current = next;
                Advance::Moved(next)
            }
            None => {
                self.direction = self.direction.flipped();
                Advance::BoundaryHit(self.current)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_chain() {
        let chain = NodeChain::new(5, 0.01);
        assert_eq!(chain.len(), 5);
        assert_eq!(chain.current_index(), 0);
        assert_eq!(chain.direction(), Traversal::Forward);
        let indices: Vec<usize> = chain.nodes().iter().map(|n| n.index).collect();
        assert_eq!(indices, vec![0, 1, 2, 3, 4]);
    }

    #[test]
    fn test_advance_bounces_at_both_ends() {
        let mut chain = NodeChain::new(5, 0.01);
        let steps: Vec<Advance> = (0..10).map(|_| chain.advance()).collect();
        assert_eq!(
            steps,
            vec![
                Advance::Moved(1),
                Advance::Moved(2),
                Advance::Moved(3),
                Advance::Moved(4),
                Advance::BoundaryHit(4),
                Advance::Moved(3),
                Advance::Moved(2),
                Advance::Moved(1),
                Advance::Moved(0),
                Advance::BoundaryHit(0),
            ]
        );
        assert_eq!(chain.direction(), Traversal::Forward);
    }

    #[test]
    fn test_direction_flips_only_at_ends() {
        let mut chain = NodeChain::new(5, 0.01);
        for _ in 0..40 {
            let before = chain.direction();
            let at = chain.current_index();
            let step = chain.advance();
            let at_end = (at == 4 && before == Traversal::Forward)
                || (at == 0 && before == Traversal::Backward);
            assert_eq!(matches!(step, Advance::BoundaryHit(_)), at_end);
            assert_eq!(chain.direction() != before, at_end);
        }
    }

    #[test]
    fn test_single_node_chain() {
        let mut chain = NodeChain::new(1, 0.01);
        assert_eq!(chain.advance(), Advance::BoundaryHit(0));
        assert_eq!(chain.direction(), Traversal::Backward);
        assert_eq!(chain.advance(), Advance::BoundaryHit(0));
        assert_eq!(chain.direction(), Traversal::Forward);
    }

    #[test]
    fn test_zero_count_is_clamped() {
        let chain = NodeChain::new(0, 0.01);
        assert_eq!(chain.len(), 1);
    }
}
