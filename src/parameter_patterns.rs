//! Ready-made spatial fields for [`Grid::update_advanced`].
//!
//! Each field maps a grid coordinate to `t` in `[0, 1]` according to its
//! [`ParameterPattern`] and then linearly onto `low..high`, so the same
//! pattern can drive feed, kill or a diffusion rate.
//!
//! [`Grid::update_advanced`]: crate::Grid::update_advanced

use crate::utils::{lerp, map_t_of_range_a_to_range_b};
use noise::{NoiseFn, Perlin};

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ParameterPattern {
    Uniform,
    HorizontalGradient,
    VerticalGradient,
    DiagonalGradient,
    RadialGradient,
    VerticalStripes,
    HorizontalStripes,
    Checkerboard,
    Noise,
}

impl ParameterPattern {
    pub fn name(&self) -> &'static str {
        match self {
            ParameterPattern::Uniform => "Uniform",
            ParameterPattern::HorizontalGradient => "Horizontal Gradient",
            ParameterPattern::VerticalGradient => "Vertical Gradient",
            ParameterPattern::DiagonalGradient => "Diagonal Gradient",
            ParameterPattern::RadialGradient => "Radial Gradient",
            ParameterPattern::VerticalStripes => "Vertical Stripes",
            ParameterPattern::HorizontalStripes => "Horizontal Stripes",
            ParameterPattern::Checkerboard => "Checkerboard",
            ParameterPattern::Noise => "Noise",
        }
    }

    pub fn all() -> Vec<ParameterPattern> {
        use ParameterPattern::*;
        vec![
            Uniform,
            HorizontalGradient,
            VerticalGradient,
            DiagonalGradient,
            RadialGradient,
            VerticalStripes,
            HorizontalStripes,
            Checkerboard,
            Noise,
        ]
    }
}

pub const DEFAULT_FREQUENCY: f64 = 0.2;

#[derive(Debug, Clone)]
pub struct ParameterField {
    pattern: ParameterPattern,
    low: f64,
    high: f64,
    width: usize,
    height: usize,
    frequency: f64,
    flipped: bool,
    noise: Perlin,
}

impl ParameterField {
    /// A field over a `width` x `height` grid producing values in
    /// `low..=high`. `Uniform` always yields `low`.
    pub fn new(
        pattern: ParameterPattern,
        low: f64,
        high: f64,
        width: usize,
        height: usize,
    ) -> Self {
        Self {
            pattern,
            low,
            high,
            width,
            height,
            frequency: DEFAULT_FREQUENCY,
            flipped: false,
            noise: Perlin::new(Perlin::DEFAULT_SEED),
        }
    }

    /// Spatial frequency of stripes, checkers and noise, in radians (or
    /// cells⁻¹) per cell.
    pub fn with_frequency(mut self, frequency: f64) -> Self {
        self.frequency = frequency;
        self
    }

    pub fn with_seed(mut self, seed: u32) -> Self {
        self.noise = Perlin::new(seed);
        self
    }

    /// Swaps which end of the range each cell gets. Toggling this halfway
    /// through an animation reverses a gradient.
    pub fn flipped(mut self, flipped: bool) -> Self {
        self.flipped = flipped;
        self
    }

    pub fn sample(&self, x: usize, y: usize) -> f64 {
        let t = self.t_at(x, y).clamp(0.0, 1.0);
        let t = if self.flipped { 1.0 - t } else { t };
        lerp(t, self.low..self.high)
    }

    /// Borrows the field as a plain positional function.
    pub fn sampler(&self) -> impl Fn(usize, usize) -> f64 + Sync + '_ {
        move |x, y| self.sample(x, y)
    }

    fn t_at(&self, x: usize, y: usize) -> f64 {
        let (xf, yf) = (x as f64, y as f64);
        let (w, h) = (self.width as f64, self.height as f64);

        match self.pattern {
            ParameterPattern::Uniform => 0.0,
            ParameterPattern::HorizontalGradient => xf / w,
            ParameterPattern::VerticalGradient => yf / h,
            ParameterPattern::DiagonalGradient => (xf + yf) / (w + h),
            ParameterPattern::RadialGradient => {
                let (cx, cy) = (w / 2.0, h / 2.0);
                (xf - cx).hypot(yf - cy) / cx.hypot(cy)
            }
            ParameterPattern::VerticalStripes => {
                map_t_of_range_a_to_range_b((xf * self.frequency).sin(), -1.0..1.0, 0.0..1.0)
            }
            ParameterPattern::HorizontalStripes => {
                map_t_of_range_a_to_range_b((yf * self.frequency).sin(), -1.0..1.0, 0.0..1.0)
            }
            ParameterPattern::Checkerboard => {
                let column = (xf * self.frequency).floor() as i64;
                let row = (yf * self.frequency).floor() as i64;
                (column + row).rem_euclid(2) as f64
            }
            ParameterPattern::Noise => {
                let n = self.noise.get([xf * self.frequency, yf * self.frequency]);
                map_t_of_range_a_to_range_b(n, -1.0..1.0, 0.0..1.0)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f64 = 1e-12;

    #[test]
    fn test_all_patterns_stay_in_range() {
        for pattern in ParameterPattern::all() {
            let field = ParameterField::new(pattern, 0.060, 0.065, 40, 30);
            for y in 0..30 {
                for x in 0..40 {
                    let v = field.sample(x, y);
                    assert!(
                        (0.060 - EPSILON..=0.065 + EPSILON).contains(&v),
                        "{} gave {} at ({}, {})",
                        pattern.name(),
                        v,
                        x,
                        y
                    );
                }
            }
        }
    }

    #[test]
    fn test_uniform() {
        let field = ParameterField::new(ParameterPattern::Uniform, 1.0, 2.0, 10, 10);
        assert_eq!(field.sample(0, 0), 1.0);
        assert_eq!(field.sample(7, 3), 1.0);
    }

    #[test]
    fn test_vertical_gradient_and_flip() {
        let field = ParameterField::new(ParameterPattern::VerticalGradient, 0.0, 1.0, 10, 10);
        assert_eq!(field.sample(3, 0), 0.0);
        assert_eq!(field.sample(3, 5), 0.5);
        assert_eq!(field.sample(9, 5), 0.5);

        let flipped = field.flipped(true);
        assert_eq!(flipped.sample(3, 0), 1.0);
        assert_eq!(flipped.sample(3, 5), 0.5);
    }

    #[test]
    fn test_vertical_stripes_follow_sine() {
        let field = ParameterField::new(ParameterPattern::VerticalStripes, 0.0543, 0.0547, 64, 64);
        // sin(0) = 0 maps to the middle of the range
        assert!((field.sample(0, 9) - 0.0545).abs() < EPSILON);
        let expected = 0.0543 + 0.0004 * ((5.0f64 * 0.2).sin() + 1.0) / 2.0;
        assert!((field.sample(5, 0) - expected).abs() < EPSILON);
    }

    #[test]
    fn test_checkerboard_alternates() {
        let field = ParameterField::new(ParameterPattern::Checkerboard, 0.0, 1.0, 20, 20)
            .with_frequency(0.5);
        assert_eq!(field.sample(0, 0), 0.0);
        assert_eq!(field.sample(1, 1), 0.0);
        assert_eq!(field.sample(2, 0), 1.0);
        assert_eq!(field.sample(2, 2), 0.0);
    }

    #[test]
    fn test_radial_gradient_is_low_at_center() {
        let field = ParameterField::new(ParameterPattern::RadialGradient, 0.0, 1.0, 10, 10);
        assert_eq!(field.sample(5, 5), 0.0);
        assert!(field.sample(0, 0) > field.sample(3, 3));
    }

    #[test]
    fn test_noise_depends_on_seed() {
        let a = ParameterField::new(ParameterPattern::Noise, 0.0, 1.0, 32, 32).with_seed(1);
        let b = a.clone();
        let c = a.clone().with_seed(2);

        let samples = |f: &ParameterField| -> Vec<f64> {
            (0..32).map(|i| f.sample(i, (i * 7) % 32)).collect()
        };
        assert_eq!(samples(&a), samples(&b));
        assert_ne!(samples(&a), samples(&c));
    }

    #[test]
    fn test_sampler_matches_sample() {
        let field = ParameterField::new(ParameterPattern::DiagonalGradient, 0.5, 0.6, 8, 8);
        let f = field.sampler();
        assert_eq!(f(3, 4), field.sample(3, 4));
    }
}
