//! Rectplot Core Types and Definitions
//!
//! This crate provides the foundational types for rectplot. It includes:
//!
//! - **Colors**: Color handling with CSS color support and the default palette ([`color`])
//! - **Geometry**: Basic geometric types ([`geometry`] module)
//! - **Rectangles**: The rectangle data model ([`rectangle`] module)
//! - **Layout**: The rectangle layout engine: normalization, bounding boxes,
//!   padded axis limits, ticks and plot framing ([`layout`] module)
//! - **Draw**: SVG drawing primitives ([`draw`] module)

pub mod color;
pub mod draw;
pub mod geometry;
pub mod layout;
pub mod rectangle;
