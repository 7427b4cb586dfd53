//! Graph algorithm implementations
//!
//! Contains the three traversal strategies:
//! - `bfs`: Breadth-first search with alphabetical expansion order
//! - `dfs`: Depth-first search over a front-fed open list
//! - `astar`: A* search with a straight-line heuristic
//! - `shared`: Path arena and ordering helpers used by all three

pub mod astar;
pub mod bfs;
pub mod dfs;
pub mod shared;

#[cfg(test)]
pub(crate) mod test_support;

pub use astar::astar_search;
pub use bfs::bfs_search;
pub use dfs::dfs_search;
pub use shared::{NodeHandle, PathArena, Traversal};
