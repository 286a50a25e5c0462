//! Umbrella crate that re-exports the `quest-*` building blocks.
//!
//! This crate is intended as a convenient entrypoint: the capability traits
//! live in [`core`], the graph-search engine in [`graph`], the game-tree
//! engines in [`gametree`], and telemetry/tracing primitives in [`tools`].

#![cfg_attr(docsrs, feature(doc_cfg))]
#![forbid(unsafe_code)]

#[cfg(feature = "core")]
#[cfg_attr(docsrs, doc(cfg(feature = "core")))]
pub use quest_core as core;

#[cfg(feature = "graph")]
#[cfg_attr(docsrs, doc(cfg(feature = "graph")))]
pub use quest_graph as graph;

#[cfg(feature = "gametree")]
#[cfg_attr(docsrs, doc(cfg(feature = "gametree")))]
pub use quest_gametree as gametree;

#[cfg(feature = "tools")]
#[cfg_attr(docsrs, doc(cfg(feature = "tools")))]
pub use quest_tools as tools;
