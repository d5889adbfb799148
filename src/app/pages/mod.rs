//! Dioxus page components.

mod dashboard;

pub use dashboard::Dashboard;
