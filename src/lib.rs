//! Universal colorscheme setter engine.
//!
//! Applies a named color scheme to many unrelated applications at once:
//! named schemes and templates are resolved from cached registries (with
//! remote update), template bodies are rendered against the scheme's color
//! data, and results are committed either by full overwrite or by
//! marker-delimited in-place replacement, followed by an optional
//! per-application hook.
//!
//! The pipeline is layered leaves-first:
//!
//! - **[`paths`]** / **[`replace`]** — destination resolution and
//!   marker-delimited section rewriting
//! - **[`registry`]** — cached, updatable, by-name-searchable entity lists,
//!   instantiated for [`scheme`] entries and [`template`]s
//! - **[`render`]** — per-application orchestration of fetch, expand, and
//!   write dispatch
//! - **[`commands`]** — top-level run wiring driven by [`cli`]

pub mod cli;
pub mod commands;
pub mod config;
pub mod error;
pub mod exec;
pub mod fetch;
pub mod fsutil;
pub mod logging;
pub mod paths;
pub mod registry;
pub mod render;
pub mod replace;
pub mod scheme;
pub mod template;
