//! Reusable view components.

pub mod knowledge_graph;
