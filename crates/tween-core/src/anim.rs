use std::cell::Cell;
use std::rc::Rc;

use crate::easing::Easing;
use crate::target::TargetHandle;

/// One bundle of animations advanced together by a single navigation call.
///
/// Identity is its index in the step list; immutable once loaded.
#[derive(Clone)]
pub struct Step {
    pub anims: Vec<Anim>,
}

/// One timed transformation of a single target object.
///
/// A channel with zero authored keyframes is never touched during playback:
/// no keyframe list is built for it and nothing is written to the target.
#[derive(Clone)]
pub struct Anim {
    pub target: TargetHandle,
    /// Duration in seconds.
    pub time: f32,
    /// Seconds before sampling starts.
    pub delay: f32,
    pub easing: Easing,

    pub translations: Vec<Translation>,
    /// 2D scale keyframes; z is taken from the target's current local scale.
    /// A camera target applies the x component to its orthographic size.
    pub scales: Vec<[f32; 2]>,
    /// Z rotation keyframes, in degrees.
    pub rotations: Vec<f32>,
    /// RGBA tint keyframes; requires a tint-capable target.
    pub colors: Vec<[f32; 4]>,
    /// Discrete sprite swap, applied once when the animation starts.
    pub sprite: Option<String>,

    /// Externally-owned float the scalar keyframes write to.
    pub scalar: Option<ScalarCell>,
    pub scalar_keyframes: Vec<f32>,
}

impl Anim {
    pub fn new(target: TargetHandle, time: f32, delay: f32, easing: Easing) -> Self {
        Self {
            target,
            time,
            delay,
            easing,
            translations: Vec::new(),
            scales: Vec::new(),
            rotations: Vec::new(),
            colors: Vec::new(),
            sprite: None,
            scalar: None,
            scalar_keyframes: Vec::new(),
        }
    }

    pub fn has_translations(&self) -> bool {
        !self.translations.is_empty()
    }
    pub fn has_scales(&self) -> bool {
        !self.scales.is_empty()
    }
    pub fn has_rotations(&self) -> bool {
        !self.rotations.is_empty()
    }
    pub fn has_colors(&self) -> bool {
        !self.colors.is_empty()
    }
    pub fn has_scalars(&self) -> bool {
        self.scalar.is_some() && !self.scalar_keyframes.is_empty()
    }
}

/// One translation keyframe.
#[derive(Clone)]
pub struct Translation {
    pub vector: [f32; 2],
    /// When set, `vector` is resolved against this object's bounds instead
    /// of world space.
    pub reference: Option<TargetHandle>,
    /// Without a reference: move by `vector` instead of to `vector`.
    /// With a reference: use the inner bounds (reference scale minus target
    /// scale) instead of the outer bounds.
    pub relative: bool,
}

impl Translation {
    pub fn world(vector: [f32; 2], relative: bool) -> Self {
        Self {
            vector,
            reference: None,
            relative,
        }
    }

    pub fn anchored(vector: [f32; 2], reference: TargetHandle, relative: bool) -> Self {
        Self {
            vector,
            reference: Some(reference),
            relative,
        }
    }
}

/// Cloneable handle to an externally-owned scalar an animation may drive.
///
/// The host keeps one clone and reads `get()` wherever the value is consumed;
/// the engine writes through its own clone during playback.
#[derive(Clone, Default)]
pub struct ScalarCell(Rc<Cell<f32>>);

impl ScalarCell {
    pub fn new(value: f32) -> Self {
        Self(Rc::new(Cell::new(value)))
    }

    pub fn get(&self) -> f32 {
        self.0.get()
    }

    pub fn set(&self, value: f32) {
        self.0.set(value);
    }
}
