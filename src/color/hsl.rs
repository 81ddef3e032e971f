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

//! HSL to RGB conversion for [`Rgba8`].

use crate::color::rgba8::Rgba8;

impl Rgba8 {
    /// Creates an opaque color from an HSL triple.
    ///
    /// `hue` is an angle in degrees (0..360), `saturation` and `luminance`
    /// are in `0.0..=1.0`. A saturation of exactly zero yields the gray
    /// `R = G = B = round(luminance * 255)`; otherwise the piecewise
    /// hue-to-channel function is evaluated at hue offsets of +1/3 turn for
    /// red, 0 for green, and -1/3 turn for blue, each scaled by 255 and
    /// truncated.
    ///
    /// # Examples
    ///
    /// ```
    /// use chroma_core::Rgba8;
    /// assert_eq!(Rgba8::from_hsl(0, 1.0, 0.5), Rgba8::new(255, 0, 0, 255));
    /// assert_eq!(Rgba8::from_hsl(0, 0.0, 0.5), Rgba8::new(128, 128, 128, 255));
    /// ```
    pub fn from_hsl(hue: u16, saturation: f64, luminance: f64) -> Rgba8 {
        if saturation == 0.0 {
            let gray = (luminance * 255.0).round() as u8;
            return Rgba8::rgb(gray, gray, gray);
        }

        let v2 = if luminance < 0.5 {
            luminance * (1.0 + saturation)
        } else {
            (luminance + saturation) - luminance * saturation
        };
        let v1 = 2.0 * luminance - v2;
        let hue_normalized = f64::from(hue) / 360.0;

        let r = (255.0 * hue_to_channel(v1, v2, hue_normalized + 1.0 / 3.0)) as u8;
        let g = (255.0 * hue_to_channel(v1, v2, hue_normalized)) as u8;
        let b = (255.0 * hue_to_channel(v1, v2, hue_normalized - 1.0 / 3.0)) as u8;
        Rgba8::rgb(r, g, b)
    }
}

/// The piecewise hue-to-channel function of the HSL model: ramp up below
/// 1/6, flat at `v2` between 1/6 and 1/2, ramp down between 1/2 and 2/3,
/// flat at `v1` above. Hue fractions below 0 or above 1 wrap by one turn
/// before evaluation.
fn hue_to_channel(v1: f64, v2: f64, hue: f64) -> f64 {
    let hue = if hue < 0.0 {
        hue + 1.0
    } else if hue > 1.0 {
        hue - 1.0
    } else {
        hue
    };

    if 6.0 * hue < 1.0 {
        v1 + (v2 - v1) * 6.0 * hue
    } else if 2.0 * hue < 1.0 {
        v2
    } else if 3.0 * hue < 2.0 {
        v1 + (v2 - v1) * (2.0 / 3.0 - hue) * 6.0
    } else {
        v1
    }
}

// --- Tests ---
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero_saturation_is_gray() {
        assert_eq!(Rgba8::from_hsl(0, 0.0, 0.5), Rgba8::new(128, 128, 128, 255));
        assert_eq!(Rgba8::from_hsl(200, 0.0, 0.0), Rgba8::BLACK);
        assert_eq!(Rgba8::from_hsl(200, 0.0, 1.0), Rgba8::WHITE);
    }

    #[test]
    fn test_primary_hues() {
        assert_eq!(Rgba8::from_hsl(0, 1.0, 0.5), Rgba8::RED);
        assert_eq!(Rgba8::from_hsl(120, 1.0, 0.5), Rgba8::GREEN);
        assert_eq!(Rgba8::from_hsl(240, 1.0, 0.5), Rgba8::BLUE);
    }

    #[test]
    fn test_intermediate_hues() {
        // Hues inside the ramp segments, away from the segment boundaries
        // where truncation of a value infinitesimally below a whole number
        // is sensitive to the last bit of rounding.
        assert_eq!(Rgba8::from_hsl(30, 1.0, 0.5), Rgba8::rgb(255, 127, 0));
        assert_eq!(Rgba8::from_hsl(90, 1.0, 0.5), Rgba8::rgb(127, 255, 0));
    }

    #[test]
    fn test_hue_wraps_around() {
        // The blue channel evaluates at hue - 1/3 turn, which is negative
        // for small hues and must wrap by a full turn.
        assert_eq!(Rgba8::from_hsl(0, 1.0, 0.5).b(), 0);
        assert_eq!(Rgba8::from_hsl(330, 1.0, 0.5).g(), 0);
    }

    #[test]
    fn test_chromatic_channels_truncate() {
        // lum 0.5, sat 0.5: v2 = 0.75, v1 = 0.25. At hue 0 the red channel
        // sits at v2: 255 * 0.75 = 191.25, truncated to 191.
        let color = Rgba8::from_hsl(0, 0.5, 0.5);
        assert_eq!(color.r(), 191);
        assert_eq!(color.b(), 63); // 255 * 0.25 = 63.75
    }

    #[test]
    fn test_alpha_is_opaque() {
        assert_eq!(Rgba8::from_hsl(77, 0.3, 0.7).a(), 255);
    }
}
