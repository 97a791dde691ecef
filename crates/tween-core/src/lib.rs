pub mod anim;
pub mod blend;
pub mod easing;
pub mod error;
pub mod history;
pub mod player;
pub mod runner;
pub mod target;
pub mod track;

#[cfg(feature = "config")]
pub mod config;

pub use anim::{Anim, ScalarCell, Step, Translation};
pub use blend::{lerp_closest, Blend};
pub use easing::{ease, Curve, Easing, Mode};
pub use error::TweenError;
pub use history::{History, Snapshot};
pub use player::Player;
pub use target::{Target, TargetHandle, Transform2D};

#[cfg(feature = "config")]
pub use config::SequenceConfig;
