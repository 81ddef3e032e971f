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

//! Defines the [`Rgba32F`] normalized color type and the floating-point-only
//! compositing operations.

use crate::color::rgba8::Rgba8;
use serde::{Deserialize, Serialize};
use std::ops::{Add, Mul, Sub};

/// A color with four `f32` channels, conventionally in `0.0..=1.0`.
///
/// Channels are not clamped; callers own the range convention. This is the
/// only type carrying the premultiplied-alpha operations
/// ([`blend_premultiplied`](Rgba32F::blend_premultiplied),
/// [`multiply_alpha`](Rgba32F::multiply_alpha),
/// [`divide_alpha`](Rgba32F::divide_alpha)) — they do not exist on the
/// integer type, so the floating-point precondition holds at compile time.
#[derive(
    Debug,
    Copy,
    Clone,
    PartialEq,
    bytemuck::Pod,
    bytemuck::Zeroable,
    Serialize,
    Deserialize,
)]
#[repr(C)]
pub struct Rgba32F {
    /// The red channel.
    pub r: f32,
    /// The green channel.
    pub g: f32,
    /// The blue channel.
    pub b: f32,
    /// The alpha (opacity) channel.
    pub a: f32,
}

impl Rgba32F {
    // --- Common Color Constants ---

    /// Opaque white (`[1.0, 1.0, 1.0, 1.0]`).
    pub const WHITE: Self = Self::rgb(1.0, 1.0, 1.0);
    /// Opaque black (`[0.0, 0.0, 0.0, 1.0]`).
    pub const BLACK: Self = Self::rgb(0.0, 0.0, 0.0);
    /// Opaque red (`[1.0, 0.0, 0.0, 1.0]`).
    pub const RED: Self = Self::rgb(1.0, 0.0, 0.0);
    /// Opaque green (`[0.0, 1.0, 0.0, 1.0]`).
    pub const GREEN: Self = Self::rgb(0.0, 1.0, 0.0);
    /// Opaque blue (`[0.0, 0.0, 1.0, 1.0]`).
    pub const BLUE: Self = Self::rgb(0.0, 0.0, 1.0);
    /// Fully transparent black (`[0.0, 0.0, 0.0, 0.0]`).
    pub const TRANSPARENT: Self = Self::new(0.0, 0.0, 0.0, 0.0);

    /// Creates a new color with explicit RGBA channels.
    #[inline]
    pub const fn new(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    /// Creates a new opaque color (alpha = 1.0).
    #[inline]
    pub const fn rgb(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b, a: 1.0 }
    }

    /// Returns the channels as an array in R, G, B, A order.
    #[inline]
    pub const fn to_array(self) -> [f32; 4] {
        [self.r, self.g, self.b, self.a]
    }

    /// Returns a new color with the same RGB channels but a different alpha.
    #[inline]
    pub fn with_alpha(&self, a: f32) -> Self {
        Self { a, ..*self }
    }

    /// Quantizes to 8-bit channels with round-to-nearest.
    #[inline]
    pub fn to_rgba8(self) -> Rgba8 {
        Rgba8::from_f32(self.r, self.g, self.b, self.a)
    }

    /// Linearly interpolates between two colors.
    /// The factor `t` is clamped to `[0.0, 1.0]`.
    #[inline]
    pub fn lerp(start: Self, end: Self, t: f32) -> Self {
        let t = t.clamp(0.0, 1.0);
        Self {
            r: start.r + (end.r - start.r) * t,
            g: start.g + (end.g - start.g) * t,
            b: start.b + (end.b - start.b) * t,
            a: start.a + (end.a - start.a) * t,
        }
    }

    // --- Compositing ---

    /// Alpha-blends `src` over `self` with straight alpha, treating `self`
    /// as the backdrop.
    ///
    /// The composite runs through premultiplied space:
    /// `out_a = src.a + (1 - src.a) * dst.a`, each color channel is
    /// `src * src.a + (1 - src.a) * dst * dst.a`, divided by `out_a` when
    /// `out_a` is non-zero and left at the computed value (zero) otherwise.
    #[inline]
    pub fn blend(self, src: Rgba32F) -> Rgba32F {
        let inv_src_a = 1.0 - src.a;
        let out_a = src.a + inv_src_a * self.a;
        let mut out = Self::new(
            src.r * src.a + inv_src_a * self.r * self.a,
            src.g * src.a + inv_src_a * self.g * self.a,
            src.b * src.a + inv_src_a * self.b * self.a,
            out_a,
        );
        if out_a != 0.0 {
            out.r /= out_a;
            out.g /= out_a;
            out.b /= out_a;
        }
        out
    }

    /// Alpha-blends `src` over `self` where both colors already hold
    /// premultiplied channels.
    ///
    /// `out = src + dst * (1 - src.a)` for every channel including alpha.
    /// No un-premultiply step, which makes this cheaper than
    /// [`blend`](Rgba32F::blend).
    #[inline]
    pub fn blend_premultiplied(self, src: Rgba32F) -> Rgba32F {
        let inv_src_a = 1.0 - src.a;
        Self::new(
            src.r + self.r * inv_src_a,
            src.g + self.g * inv_src_a,
            src.b + self.b * inv_src_a,
            src.a + self.a * inv_src_a,
        )
    }

    /// Converts straight-alpha channels to premultiplied form by scaling
    /// R, G, B by A.
    #[inline]
    pub fn multiply_alpha(self) -> Self {
        Self::new(self.r * self.a, self.g * self.a, self.b * self.a, self.a)
    }

    /// Converts premultiplied channels back to straight alpha by dividing
    /// R, G, B by A. A color with zero alpha is returned unchanged.
    #[inline]
    pub fn divide_alpha(self) -> Self {
        if self.a == 0.0 {
            self
        } else {
            Self::new(self.r / self.a, self.g / self.a, self.b / self.a, self.a)
        }
    }
}

impl Default for Rgba32F {
    /// Returns opaque white by default.
    #[inline]
    fn default() -> Self {
        Self::WHITE
    }
}

impl From<Rgba8> for Rgba32F {
    #[inline]
    fn from(color: Rgba8) -> Self {
        color.to_rgba32f()
    }
}

impl Add for Rgba32F {
    type Output = Self;
    /// Adds two colors channel-wise.
    #[inline]
    fn add(self, rhs: Self) -> Self::Output {
        Self::new(
            self.r + rhs.r,
            self.g + rhs.g,
            self.b + rhs.b,
            self.a + rhs.a,
        )
    }
}

impl Sub for Rgba32F {
    type Output = Self;
    /// Subtracts two colors channel-wise.
    #[inline]
    fn sub(self, rhs: Self) -> Self::Output {
        Self::new(
            self.r - rhs.r,
            self.g - rhs.g,
            self.b - rhs.b,
            self.a - rhs.a,
        )
    }
}

impl Mul<f32> for Rgba32F {
    type Output = Self;
    /// Multiplies all channels by a scalar.
    #[inline]
    fn mul(self, scalar: f32) -> Self::Output {
        Self::new(
            self.r * scalar,
            self.g * scalar,
            self.b * scalar,
            self.a * scalar,
        )
    }
}

impl Mul for Rgba32F {
    type Output = Self;
    /// Multiplies two colors channel-wise (modulation).
    #[inline]
    fn mul(self, rhs: Self) -> Self::Output {
        Self::new(
            self.r * rhs.r,
            self.g * rhs.g,
            self.b * rhs.b,
            self.a * rhs.a,
        )
    }
}
