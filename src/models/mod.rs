pub mod node_chain;

pub use node_chain::{Advance, Node, NodeChain, Traversal};
