//! Touchline Core Types and Definitions
//!
//! This crate provides the foundational types shared by the Touchline drill
//! board. It includes:
//!
//! - **Geometry**: Points, sizes and rectangles in canvas space ([`geometry`] module)
//! - **Colors**: Color handling with CSS color support ([`color::Color`])
//! - **Draw**: Immediate drawing commands, layers and surfaces ([`draw`] module)

pub mod color;
pub mod draw;
pub mod geometry;
