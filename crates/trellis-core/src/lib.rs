//! Trellis Core Types and Definitions
//!
//! This crate provides the node factories and shared primitives used to build
//! SVG scenes. It includes:
//!
//! - **Elements**: One builder per SVG node kind ([`element`] module)
//! - **Events**: Click listeners attached to text labels ([`event`] module)
//! - **Geometry**: Translation offsets ([`geometry::Point`])
//! - **Identifiers**: Unique element id generation ([`identifier::IdGenerator`])
//! - **Namespaces**: SVG and XLink namespace constants ([`namespace`] module)
//! - **Colors**: CSS color validation ([`color::Color`])

pub mod color;
pub mod element;
pub mod event;
pub mod geometry;
pub mod identifier;
pub mod namespace;
