use std::f32::consts::PI;

#[cfg(feature = "config")]
use serde::{Deserialize, Serialize};

/// Curve family of an easing function.
///
/// `Step` is the discrete one: combined with [`Mode::In`] it always returns 1,
/// which turns an animation into an instantaneous property set that still
/// participates in delay/duration timing.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
#[cfg_attr(feature = "config", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "config", serde(rename_all = "snake_case"))]
pub enum Curve {
    #[default]
    Linear,
    Step,
    Sine,
    Quad,
    Cubic,
    Expo,
    Circ,
    Bounce,
}

/// Whether the curve eases into the motion, out of it, or both.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
#[cfg_attr(feature = "config", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "config", serde(rename_all = "snake_case"))]
pub enum Mode {
    #[default]
    In,
    Out,
    InOut,
}

/// Easing selector carried by an animation.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
#[cfg_attr(feature = "config", derive(Serialize, Deserialize))]
pub struct Easing {
    pub curve: Curve,
    pub mode: Mode,
}

impl Easing {
    pub fn new(curve: Curve, mode: Mode) -> Self {
        Self { curve, mode }
    }

    pub fn get(&self, x: f32) -> f32 {
        ease(x, self.curve, self.mode)
    }
}

/// Maps normalized time `x` in [0, 1] to an eased value, generally in [0, 1].
///
/// Pure and stateless. Every curve except `Step` satisfies
/// `ease(0) == 0` and `ease(1) == 1`.
pub fn ease(x: f32, curve: Curve, mode: Mode) -> f32 {
    const N1: f32 = 7.5625;
    const D1: f32 = 2.75;

    match curve {
        Curve::Linear => x,
        Curve::Step => match mode {
            Mode::In => 1.0,
            Mode::Out => {
                if x >= 1.0 {
                    1.0
                } else {
                    0.0
                }
            }
            Mode::InOut => {
                if x > 0.5 {
                    1.0
                } else {
                    0.0
                }
            }
        },
        Curve::Sine => match mode {
            Mode::In => 1.0 - (x * PI / 2.0).cos(),
            Mode::Out => (x * PI / 2.0).sin(),
            Mode::InOut => -((PI * x).cos() - 1.0) / 2.0,
        },
        Curve::Quad => match mode {
            Mode::In => x * x,
            Mode::Out => 1.0 - (1.0 - x) * (1.0 - x),
            Mode::InOut => {
                if x < 0.5 {
                    2.0 * x * x
                } else {
                    1.0 - (-2.0 * x + 2.0).powi(2) / 2.0
                }
            }
        },
        Curve::Cubic => match mode {
            Mode::In => x * x * x,
            Mode::Out => 1.0 - (1.0 - x).powi(3),
            Mode::InOut => {
                if x < 0.5 {
                    4.0 * x * x * x
                } else {
                    1.0 - (-2.0 * x + 2.0).powi(3) / 2.0
                }
            }
        },
        Curve::Expo => match mode {
            // pow(2, ...) never reaches exactly 0/1, so the boundaries are
            // short-circuited.
            Mode::In => {
                if x == 0.0 {
                    0.0
                } else {
                    2f32.powf(10.0 * x - 10.0)
                }
            }
            Mode::Out => {
                if x == 1.0 {
                    1.0
                } else {
                    1.0 - 2f32.powf(-10.0 * x)
                }
            }
            Mode::InOut => {
                if x <= 0.0 {
                    0.0
                } else if x >= 1.0 {
                    1.0
                } else if x < 0.5 {
                    2f32.powf(20.0 * x - 10.0) / 2.0
                } else {
                    (2.0 - 2f32.powf(-20.0 * x + 10.0)) / 2.0
                }
            }
        },
        Curve::Circ => match mode {
            Mode::In => 1.0 - (1.0 - x * x).sqrt(),
            Mode::Out => (1.0 - (x - 1.0) * (x - 1.0)).sqrt(),
            Mode::InOut => {
                if x < 0.5 {
                    (1.0 - (1.0 - (2.0 * x).powi(2)).sqrt()) / 2.0
                } else {
                    ((1.0 - (-2.0 * x + 2.0).powi(2)).sqrt() + 1.0) / 2.0
                }
            }
        },
        Curve::Bounce => match mode {
            Mode::In => 1.0 - ease(1.0 - x, Curve::Bounce, Mode::Out),
            Mode::Out => {
                if x < 1.0 / D1 {
                    N1 * x * x
                } else if x < 2.0 / D1 {
                    let x = x - 1.5 / D1;
                    N1 * x * x + 0.75
                } else if x < 2.5 / D1 {
                    let x = x - 2.25 / D1;
                    N1 * x * x + 0.9375
                } else {
                    let x = x - 2.625 / D1;
                    N1 * x * x + 0.984375
                }
            }
            Mode::InOut => {
                if x < 0.5 {
                    (1.0 - ease(1.0 - 2.0 * x, Curve::Bounce, Mode::Out)) / 2.0
                } else {
                    (1.0 + ease(2.0 * x - 1.0, Curve::Bounce, Mode::Out)) / 2.0
                }
            }
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const CURVES: [Curve; 8] = [
        Curve::Linear,
        Curve::Step,
        Curve::Sine,
        Curve::Quad,
        Curve::Cubic,
        Curve::Expo,
        Curve::Circ,
        Curve::Bounce,
    ];
    const MODES: [Mode; 3] = [Mode::In, Mode::Out, Mode::InOut];

    #[test]
    fn boundaries_land_on_zero_and_one() {
        for curve in CURVES {
            if curve == Curve::Step {
                continue;
            }
            for mode in MODES {
                let at0 = ease(0.0, curve, mode);
                let at1 = ease(1.0, curve, mode);
                assert!(at0.abs() < 1e-6, "{curve:?}/{mode:?} at 0 gave {at0}");
                assert!((at1 - 1.0).abs() < 1e-6, "{curve:?}/{mode:?} at 1 gave {at1}");
            }
        }
    }

    #[test]
    fn step_in_is_always_one() {
        for x in [0.0, 0.25, 0.5, 0.99, 1.0] {
            assert_eq!(ease(x, Curve::Step, Mode::In), 1.0);
        }
    }

    #[test]
    fn step_out_and_inout_thresholds() {
        assert_eq!(ease(0.999, Curve::Step, Mode::Out), 0.0);
        assert_eq!(ease(1.0, Curve::Step, Mode::Out), 1.0);
        assert_eq!(ease(0.5, Curve::Step, Mode::InOut), 0.0);
        assert_eq!(ease(0.51, Curve::Step, Mode::InOut), 1.0);
    }

    #[test]
    fn bounce_out_first_segment_is_quadratic() {
        let x = 0.2;
        assert!((ease(x, Curve::Bounce, Mode::Out) - 7.5625 * x * x).abs() < 1e-6);
    }

    #[test]
    fn bounce_in_mirrors_bounce_out() {
        for x in [0.1, 0.3, 0.7, 0.9] {
            let out = ease(1.0 - x, Curve::Bounce, Mode::Out);
            assert!((ease(x, Curve::Bounce, Mode::In) - (1.0 - out)).abs() < 1e-6);
        }
    }

    #[test]
    fn inout_curves_are_symmetric_around_half() {
        for curve in [Curve::Sine, Curve::Quad, Curve::Cubic, Curve::Circ] {
            for x in [0.1, 0.2, 0.35] {
                let lo = ease(x, curve, Mode::InOut);
                let hi = ease(1.0 - x, curve, Mode::InOut);
                assert!((lo + hi - 1.0).abs() < 1e-5, "{curve:?} at {x}");
            }
        }
    }

    #[test]
    fn expo_inout_handles_out_of_range_input() {
        assert_eq!(ease(-0.5, Curve::Expo, Mode::InOut), 0.0);
        assert_eq!(ease(1.5, Curve::Expo, Mode::InOut), 1.0);
    }
}
