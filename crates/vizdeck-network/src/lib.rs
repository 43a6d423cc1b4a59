//! vizdeck-network — Follower network explored by clicking nodes.
//!
//! A fixed directed graph is read once from a `source target` edge list and
//! bucketed into forward ("following") and reverse ("followers") adjacency.
//! [`expand`] grows the displayed element set one clicked node at a time.

pub mod element;
pub mod expand;
pub mod graph;

pub use element::{Element, ElementData};
pub use expand::{expand, ExpansionMode, ExpansionState, TappedNode};
pub use graph::{Adjacent, FollowerGraph, NetworkError};
