/// Value that can be linearly blended: scalar multiply plus add.
///
/// Implemented for `f32` (rotation, scalar channel), `[f32; 2]`/`[f32; 3]`
/// (translation, scale) and `[f32; 4]` (RGBA color).
pub trait Blend: Copy {
    fn scale(self, k: f32) -> Self;
    fn add(self, other: Self) -> Self;
}

impl Blend for f32 {
    fn scale(self, k: f32) -> Self {
        self * k
    }
    fn add(self, other: Self) -> Self {
        self + other
    }
}

impl Blend for [f32; 2] {
    fn scale(self, k: f32) -> Self {
        [self[0] * k, self[1] * k]
    }
    fn add(self, other: Self) -> Self {
        [self[0] + other[0], self[1] + other[1]]
    }
}

impl Blend for [f32; 3] {
    fn scale(self, k: f32) -> Self {
        [self[0] * k, self[1] * k, self[2] * k]
    }
    fn add(self, other: Self) -> Self {
        [self[0] + other[0], self[1] + other[1], self[2] + other[2]]
    }
}

impl Blend for [f32; 4] {
    fn scale(self, k: f32) -> Self {
        [self[0] * k, self[1] * k, self[2] * k, self[3] * k]
    }
    fn add(self, other: Self) -> Self {
        [
            self[0] + other[0],
            self[1] + other[1],
            self[2] + other[2],
            self[3] + other[3],
        ]
    }
}

/// Piecewise-linear interpolation between the two closest keyframes.
///
/// Keyframes are uniformly spaced over [0, 1]; `t` is clamped, so a list of
/// length 1 is a constant and t outside [0, 1] never extrapolates.
///
/// Panics if `values` is empty; callers only build lists with the captured
/// starting value at index 0.
pub fn lerp_closest<T: Blend>(values: &[T], t: f32) -> T {
    if values.len() == 1 || t <= 0.0 {
        return values[0];
    }
    if t >= 1.0 {
        return values[values.len() - 1];
    }

    let segments = (values.len() - 1) as f32;
    let from = (segments * t) as usize;
    let to = from + 1;

    // Rescale t to [0, 1] over the segment it falls in.
    let local = (t % (1.0 / segments)) * segments;

    values[from].scale(1.0 - local).add(values[to].scale(local))
}
