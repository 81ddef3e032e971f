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

//! Fixed-layout RGBA color values and the operations over them.
//!
//! The channel order is always R, G, B, A in memory, independent of host
//! byte order. The packed 32-bit wire format puts R in the most significant
//! byte and A in the least significant byte (`0xRRGGBBAA`); the codec
//! performs the byte swap needed on little-endian hosts so the in-memory
//! invariant holds everywhere.
//!
//! All operations are pure: they read their inputs and return a new value.
//! The only mutation path is through the `*_mut` channel accessors.

pub mod hsl;
pub mod parse;
pub mod rgba32f;
pub mod rgba8;

pub use self::parse::ColorParseError;
pub use self::rgba32f::Rgba32F;
pub use self::rgba8::Rgba8;
