// Copyright 2026 chroma-core contributors
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! # Chroma Core
//!
//! A small library built around a fixed-layout, 4-channel RGBA color value:
//! a packed-integer codec with a host-endianness-independent wire format,
//! a format-tolerant string parser, HSL conversion, and alpha compositing
//! in both straight and premultiplied conventions.
//!
//! Two concrete color types share the channel-agnostic interface:
//! [`Rgba8`](color::Rgba8) stores 8-bit channels and owns the codec surface,
//! while [`Rgba32F`](color::Rgba32F) stores normalized `f32` channels and
//! owns the operations that only make sense in floating point
//! (premultiplied-alpha blending and the straight/premultiplied
//! conversions).

#![warn(missing_docs)]

pub mod color;
pub mod math;

pub use color::{ColorParseError, Rgba32F, Rgba8};
