//! View abstraction consumed by list adapters.
//!
//! Adapters never lay out or paint anything themselves. They hand the host
//! list [`ViewNode`] hierarchies, inflate templates through a
//! [`LayoutInflater`], and read back the bounds the host assigned when they
//! need to hit-test a touch.
//!
//! # Core Types
//!
//! - `ViewNode`: a container or text label with id, bounds, children and tag
//! - `LayoutId` / `ViewId`: identify templates and views within them
//! - `LayoutInflater`: turns a `LayoutId` into a fresh `ViewNode`
//! - `Point`, `Size`, `Rect`: geometry for bounds and touch positions

mod geometry;
mod inflater;
mod node;

pub use geometry::{Point, Rect, Size};
pub use inflater::{LayoutInflater, TemplateInflater};
pub use node::{HorizontalAlignment, LayoutId, ViewId, ViewKind, ViewNode};
