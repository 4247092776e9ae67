// Copyright 2024 the Hairline Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Hairline stroking for 2D vector paths.
//!
//! This crate converts a vector path into the minimal set of straight line
//! segments that visually represent stroking it with a line exactly one
//! device pixel wide, including cap, join, and dash effects, without
//! building stroke outline polygons. At that width, every join and every
//! cap except a butt cap reduces to nudging a segment endpoint by half a
//! pixel along the segment's own slope, which is far cheaper than real
//! outline expansion and is what [`stroke`] does.
//!
//! Paths are sequences of [`PathEl`] commands in fixed-point device
//! coordinates ([`Point`]); cubic Béziers are flattened on the fly within a
//! caller-supplied tolerance, and dash patterns are applied per flattened
//! chord. Each resulting chord is handed to a caller-supplied sink as a
//! [`Line`]; the sink can fail, and the first failure aborts the traversal.
//!
//! Use [`can_use_hairline`] to decide whether a stroke style and transform
//! qualify for this path before calling [`stroke`]:
//!
//! ```
//! use hairline::{can_use_hairline, stroke, Affine, BezPath, Line, Stroke};
//!
//! let mut path = BezPath::new();
//! path.move_to((0.0, 0.0));
//! path.line_to((10.0, 0.0));
//! path.line_to((10.0, 10.0));
//!
//! let style = Stroke::new(1.0);
//! assert!(can_use_hairline(&style, Affine::IDENTITY));
//!
//! let mut segments: Vec<Line> = Vec::new();
//! stroke(
//!     path.iter(),
//!     &style,
//!     Affine::IDENTITY,
//!     Affine::IDENTITY,
//!     0.1,
//!     |line| {
//!         segments.push(line);
//!         Ok::<(), ()>(())
//!     },
//! )
//! .unwrap();
//! assert_eq!(segments.len(), 2);
//! ```
//!
//! # Features
//!
//! This crate either uses the standard library or the [`libm`] crate for
//! math functionality. The `std` feature is enabled by default, but can be
//! disabled, as long as the `libm` feature is enabled. This is useful for
//! `no_std` environments. However, note that the `libm` crate is not as
//! efficient as the standard library, and that this crate still uses the
//! `alloc` crate regardless.
//!
//! [`libm`]: https://docs.rs/libm

#![forbid(unsafe_code)]
#![deny(missing_docs, clippy::trivially_copy_pass_by_ref)]
#![warn(clippy::doc_markdown, rustdoc::broken_intra_doc_links)]
#![warn(clippy::semicolon_if_nothing_returned)]
#![warn(unused_qualifications)]
#![allow(clippy::unreadable_literal, clippy::many_single_char_names)]
#![cfg_attr(docsrs, feature(doc_auto_cfg))]
#![cfg_attr(all(not(feature = "std"), not(test)), no_std)]

#[cfg(not(any(feature = "std", feature = "libm")))]
compile_error!("hairline requires either the `std` or `libm` feature");

extern crate alloc;

mod affine;
mod common;
mod dash;
mod fixed;
mod hairline;
mod line;
mod path;
mod point;
mod spline;
mod stroke;
mod vec2;

pub use crate::affine::*;
pub use crate::dash::*;
pub use crate::fixed::*;
pub use crate::hairline::*;
pub use crate::line::*;
pub use crate::path::*;
pub use crate::point::*;
pub use crate::spline::*;
pub use crate::stroke::*;
pub use crate::vec2::*;
