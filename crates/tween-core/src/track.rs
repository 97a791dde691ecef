use crate::anim::Anim;
use crate::history::Snapshot;

/// Per-channel keyframe lists for one animation instance.
///
/// Index 0 of every active channel is the starting value (captured live on
/// forward play, restored from history on backward play); the rest are the
/// authored keyframes in declaration order. Inactive channels stay empty.
pub struct Tracks {
    pub translations: Vec<[f32; 3]>,
    pub scales: Vec<[f32; 3]>,
    pub rotations: Vec<f32>,
    pub colors: Vec<[f32; 4]>,
    pub scalars: Vec<f32>,
}

/// Reads the animation's starting values off the live target.
///
/// A camera target contributes its orthographic size duplicated into the x/y
/// scale components. Color and scalar are read only when their channel is
/// active; validation has already checked the capabilities.
pub fn capture(anim: &Anim) -> Snapshot {
    let target = anim.target.borrow();

    let scale = match target.orthographic_size() {
        Some(size) => [size, size, 0.0],
        None => target.local_scale(),
    };

    let color = if anim.has_colors() {
        target.tint_color()
    } else {
        None
    };

    let scalar = if anim.has_scalars() {
        anim.scalar.as_ref().map(|cell| cell.get())
    } else {
        None
    };

    Snapshot {
        translation: target.position(),
        scale,
        rotation: target.z_rotation(),
        color,
        scalar,
    }
}

impl Tracks {
    /// Builds the keyframe lists from `start` plus the authored keyframes.
    pub fn build(anim: &Anim, start: &Snapshot) -> Self {
        let (position, local_scale) = {
            let target = anim.target.borrow();
            (target.position(), target.local_scale())
        };

        let mut translations = Vec::new();
        if anim.has_translations() {
            translations.push(start.translation);
            for entry in &anim.translations {
                let [vx, vy] = entry.vector;
                let point = match &entry.reference {
                    None => {
                        if entry.relative {
                            [position[0] + vx, position[1] + vy, position[2]]
                        } else {
                            [vx, vy, position[2]]
                        }
                    }
                    Some(reference) => {
                        let (ref_position, ref_scale) = {
                            let reference = reference.borrow();
                            (reference.position(), reference.local_scale())
                        };
                        // Outer bounds for absolute moves, inner bounds when
                        // relative: half the reference scale plus or minus
                        // half the target scale.
                        let sign = if entry.relative { -1.0 } else { 1.0 };
                        let hx = ref_scale[0] / 2.0 + local_scale[0] / 2.0 * sign;
                        let hy = ref_scale[1] / 2.0 + local_scale[1] / 2.0 * sign;
                        [
                            vx * hx + ref_position[0],
                            vy * hy + ref_position[1],
                            position[2] + ref_position[2],
                        ]
                    }
                };
                translations.push(point);
            }
        }

        let mut scales = Vec::new();
        if anim.has_scales() {
            scales.push(start.scale);
            for s in &anim.scales {
                scales.push([s[0], s[1], local_scale[2]]);
            }
        }

        let mut rotations = Vec::new();
        if anim.has_rotations() {
            rotations.push(start.rotation);
            rotations.extend_from_slice(&anim.rotations);
        }

        let mut colors = Vec::new();
        if anim.has_colors() {
            colors.push(start.color.unwrap_or([1.0, 1.0, 1.0, 1.0]));
            colors.extend_from_slice(&anim.colors);
        }

        let mut scalars = Vec::new();
        if anim.has_scalars() {
            let live = || anim.scalar.as_ref().map(|c| c.get()).unwrap_or(0.0);
            scalars.push(start.scalar.unwrap_or_else(live));
            scalars.extend_from_slice(&anim.scalar_keyframes);
        }

        Self {
            translations,
            scales,
            rotations,
            colors,
            scalars,
        }
    }
}
