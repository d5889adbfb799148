//! Service Portal - maintenance & monitoring dashboard shell
//!
//! A single-page admin shell built with Dioxus fullstack.
//!
//! This library provides:
//! - Static localization tables (English, Spanish, Russian)
//! - View state: session gate, drawer, theme, per-entity coordinates, map picker
//! - Web UI (Dioxus SSR + client hydration)
//! - A small axum server for SSR and health checks (server feature)

// =============================================================================
// Lints - Enforce code quality and consistency
// =============================================================================

// Deny truly dangerous patterns (these will fail the build)
#![deny(unsafe_code)]
#![deny(unused_must_use)]

// Dioxus UI app (shared between server SSR and WASM client)
pub mod app;

pub mod error;
pub mod i18n;
pub mod map_embed;
pub mod state;

// Server-only modules (excluded from WASM build)
#[cfg(feature = "server")]
pub mod api;
#[cfg(feature = "server")]
pub mod config;
