//! Acyclic - directed acyclic graphs with cycle-gated mutation
//!
//! This crate provides a directed graph that refuses to become cyclic,
//! together with a deterministic depth-first topological ordering and a
//! small command-line front end for checking and ordering edge lists.

pub mod cli;
pub mod graph;
