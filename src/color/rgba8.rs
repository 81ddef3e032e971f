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

//! Defines the [`Rgba8`] packed color type and its codec surface.

use crate::color::rgba32f::Rgba32F;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Maps a packed `0xRRGGBBAA` value to the host representation whose bytes
/// are R, G, B, A at offsets 0..4, and back. The function is its own
/// inverse: big-endian hosts already store the most significant byte first,
/// little-endian hosts need the four bytes reversed.
#[inline]
const fn correct_endianness(value: u32) -> u32 {
    if cfg!(target_endian = "little") {
        value.swap_bytes()
    } else {
        value
    }
}

/// A color with four 8-bit channels stored in R, G, B, A memory order.
///
/// The in-memory channel order is an invariant of the type and does not
/// depend on host byte order; only [`Rgba8::from_packed`] and
/// [`Rgba8::to_packed`] deal with endianness, via an explicit byte swap.
///
/// Equality is bitwise over the four channels. `#[repr(transparent)]` plus
/// the `bytemuck` derives make slices of `Rgba8` directly reusable as pixel
/// upload buffers.
#[derive(
    Debug,
    Copy,
    Clone,
    PartialEq,
    Eq,
    bytemuck::Pod,
    bytemuck::Zeroable,
    Serialize,
    Deserialize,
)]
#[repr(transparent)]
pub struct Rgba8 {
    channels: [u8; 4],
}

impl Rgba8 {
    // --- Common Color Constants ---

    /// Opaque white (`#FFFFFFFF`). Also the sentinel returned by
    /// [`Rgba8::parse`] on malformed input.
    pub const WHITE: Self = Self::rgb(0xFF, 0xFF, 0xFF);
    /// Opaque black (`#000000FF`).
    pub const BLACK: Self = Self::rgb(0x00, 0x00, 0x00);
    /// Opaque red (`#FF0000FF`).
    pub const RED: Self = Self::rgb(0xFF, 0x00, 0x00);
    /// Opaque green (`#00FF00FF`).
    pub const GREEN: Self = Self::rgb(0x00, 0xFF, 0x00);
    /// Opaque blue (`#0000FFFF`).
    pub const BLUE: Self = Self::rgb(0x00, 0x00, 0xFF);
    /// Fully transparent black (`#00000000`).
    pub const TRANSPARENT: Self = Self::new(0x00, 0x00, 0x00, 0x00);

    // --- Construction ---

    /// Creates a color from four explicit channel values.
    #[inline]
    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self {
            channels: [r, g, b, a],
        }
    }

    /// Creates a fully opaque color from three channel values.
    #[inline]
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self::new(r, g, b, u8::MAX)
    }

    /// Creates a color from normalized floating-point channels.
    ///
    /// Each component is scaled by 255 and rounded to the nearest integer.
    /// Inputs are expected in `0.0..=1.0`; out-of-range values saturate.
    ///
    /// # Examples
    ///
    /// ```
    /// use chroma_core::Rgba8;
    /// assert_eq!(Rgba8::from_f32(1.0, 0.0, 0.5, 1.0), Rgba8::new(255, 0, 128, 255));
    /// ```
    #[inline]
    pub fn from_f32(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self::new(quantize(r), quantize(g), quantize(b), quantize(a))
    }

    /// Creates a color from a channel array in R, G, B, A order.
    #[inline]
    pub const fn from_array(channels: [u8; 4]) -> Self {
        Self { channels }
    }

    /// Creates a color from its packed `0xRRGGBBAA` representation.
    ///
    /// The wire format puts R in the most significant byte and A in the
    /// least significant byte, independent of host endianness.
    ///
    /// # Examples
    ///
    /// ```
    /// use chroma_core::Rgba8;
    /// let c = Rgba8::from_packed(0xAABBCCDD);
    /// assert_eq!((c.r(), c.g(), c.b(), c.a()), (0xAA, 0xBB, 0xCC, 0xDD));
    /// ```
    #[inline]
    pub const fn from_packed(value: u32) -> Self {
        Self {
            channels: correct_endianness(value).to_ne_bytes(),
        }
    }

    // --- Channel Accessors ---

    /// The red channel.
    #[inline]
    pub const fn r(&self) -> u8 {
        self.channels[0]
    }

    /// The green channel.
    #[inline]
    pub const fn g(&self) -> u8 {
        self.channels[1]
    }

    /// The blue channel.
    #[inline]
    pub const fn b(&self) -> u8 {
        self.channels[2]
    }

    /// The alpha channel.
    #[inline]
    pub const fn a(&self) -> u8 {
        self.channels[3]
    }

    /// Mutable access to the red channel.
    #[inline]
    pub fn r_mut(&mut self) -> &mut u8 {
        &mut self.channels[0]
    }

    /// Mutable access to the green channel.
    #[inline]
    pub fn g_mut(&mut self) -> &mut u8 {
        &mut self.channels[1]
    }

    /// Mutable access to the blue channel.
    #[inline]
    pub fn b_mut(&mut self) -> &mut u8 {
        &mut self.channels[2]
    }

    /// Mutable access to the alpha channel.
    #[inline]
    pub fn a_mut(&mut self) -> &mut u8 {
        &mut self.channels[3]
    }

    // --- Conversions ---

    /// Returns the channel array in R, G, B, A order.
    #[inline]
    pub const fn to_array(self) -> [u8; 4] {
        self.channels
    }

    /// Returns the packed `0xRRGGBBAA` representation.
    ///
    /// Exact inverse of [`Rgba8::from_packed`] for every value.
    #[inline]
    pub const fn to_packed(self) -> u32 {
        correct_endianness(u32::from_ne_bytes(self.channels))
    }

    /// Returns the channels as normalized floats in R, G, B, A order.
    ///
    /// Each channel is divided by 255; the result lies in `0.0..=1.0`.
    #[inline]
    pub fn to_normalized(self) -> [f32; 4] {
        [
            f32::from(self.r()) / 255.0,
            f32::from(self.g()) / 255.0,
            f32::from(self.b()) / 255.0,
            f32::from(self.a()) / 255.0,
        ]
    }

    /// Converts to the normalized floating-point color type.
    #[inline]
    pub fn to_rgba32f(self) -> Rgba32F {
        let [r, g, b, a] = self.to_normalized();
        Rgba32F::new(r, g, b, a)
    }

    /// Formats the color as an upper-case `#RRGGBBAA` hex string.
    ///
    /// # Examples
    ///
    /// ```
    /// use chroma_core::Rgba8;
    /// assert_eq!(Rgba8::new(255, 87, 51, 255).to_hex(), "#FF5733FF");
    /// ```
    #[inline]
    pub fn to_hex(&self) -> String {
        format!(
            "#{:02X}{:02X}{:02X}{:02X}",
            self.r(),
            self.g(),
            self.b(),
            self.a()
        )
    }

    // --- Compositing ---

    /// Alpha-blends `src` over `self` with straight (non-premultiplied)
    /// alpha, treating `self` as the backdrop.
    ///
    /// The composite is computed through premultiplied space in floating
    /// point and un-premultiplied afterwards, so the result stays correct
    /// when both colors are translucent. Channels are re-quantized with
    /// round-to-nearest.
    ///
    /// A fully opaque `src` replaces the backdrop exactly; a fully
    /// transparent `src` leaves a non-transparent backdrop unchanged.
    #[inline]
    pub fn blend(self, src: Rgba8) -> Rgba8 {
        self.to_rgba32f().blend(src.to_rgba32f()).to_rgba8()
    }
}

/// Scales a normalized channel by 255 and rounds to the nearest integer.
#[inline]
fn quantize(channel: f32) -> u8 {
    (channel * 255.0).round() as u8
}

impl Default for Rgba8 {
    /// Returns opaque white by default.
    #[inline]
    fn default() -> Self {
        Self::WHITE
    }
}

impl From<[u8; 4]> for Rgba8 {
    #[inline]
    fn from(channels: [u8; 4]) -> Self {
        Self::from_array(channels)
    }
}

impl From<Rgba8> for [u8; 4] {
    #[inline]
    fn from(color: Rgba8) -> Self {
        color.to_array()
    }
}

impl fmt::Display for Rgba8 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}
