use thiserror::Error;

/// Load-time configuration errors.
///
/// Everything on the per-frame path recovers locally (navigation clamps,
/// history underflow restores from live values), so playback itself never
/// returns errors.
#[derive(Debug, Error)]
pub enum TweenError {
    #[error("step {step} anim {anim}: unknown target \"{name}\"")]
    UnknownTarget {
        step: usize,
        anim: usize,
        name: String,
    },

    #[error("step {step} anim {anim}: unknown scalar cell \"{name}\"")]
    UnknownCell {
        step: usize,
        anim: usize,
        name: String,
    },

    #[error("step {step} anim {anim}: color keyframes on a target without a tint color")]
    MissingTintTarget { step: usize, anim: usize },

    #[error("step {step} anim {anim}: scalar keyframes without an attached cell")]
    MissingScalarCell { step: usize, anim: usize },

    #[cfg(feature = "config")]
    #[error("malformed step config: {0}")]
    Json(#[from] serde_json::Error),
}
