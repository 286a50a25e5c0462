//! Tooling primitives for the quest search engines (telemetry/tracing).

#![cfg_attr(docsrs, feature(doc_cfg))]
#![forbid(unsafe_code)]

pub mod telemetry;
pub mod trace;

pub use telemetry::{GraphTelemetry, TreeTelemetry};
pub use trace::{NullTraceSink, TraceEvent, TraceSink, VecTraceSink};
