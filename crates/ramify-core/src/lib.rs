//! Ramify Core Types and Definitions
//!
//! This crate provides the foundational types shared by the Ramify parser,
//! layout and rendering crates. It includes:
//!
//! - **Outline**: The ordered node sequence produced from outline text ([`outline`] module)
//! - **Geometry**: Basic geometric types ([`geometry`] module)
//! - **Colors**: Color handling with CSS color support ([`color::Color`])
//! - **Themes**: Named color palettes ([`theme`] module)
//! - **Zoom**: The clamped zoom factor ([`zoom::Zoom`])
//! - **Draw**: Draw commands and text measurement ([`draw`] module)

pub mod color;
pub mod draw;
pub mod geometry;
pub mod outline;
pub mod theme;
pub mod zoom;
