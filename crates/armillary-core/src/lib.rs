//! Armillary Core Node Model
//!
//! This crate provides the retained-mode scene graph underlying the
//! Armillary vector-graphics library. It includes:
//!
//! - **Colors**: Color handling with CSS color support ([`color::Color`])
//! - **Geometry**: Points, sizes, bounds, and affine transforms
//!   ([`geometry`] module)
//! - **Draw**: Paint and stroke descriptors shared between nodes
//!   ([`draw`] module)
//! - **Nodes**: The polymorphic scene tree ([`node`] module)
//! - **Observation**: Synchronous change notification for attributes and
//!   group contents ([`observe`] module)
//! - **Serialization**: Default-omitting structured output
//!   ([`serialize`] module)
//! - **Gestures**: Interaction descriptors attached to nodes
//!   ([`gesture`] module)

pub mod color;
pub mod draw;
pub mod geometry;
pub mod gesture;
pub mod node;
pub mod observe;
pub mod serialize;
