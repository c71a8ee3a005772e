pub mod debug;
pub mod dom_utils;
pub mod traverse;

mod types;

pub use crate::traverse::DomTree;
pub use crate::types::{Id, Node, NodeId};
