use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::anim::{Anim, ScalarCell, Step, Translation};
use crate::easing::{Curve, Easing, Mode};
use crate::error::TweenError;
use crate::target::TargetHandle;

// ============================================================
// Serializable config types
// ============================================================

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct SequenceConfig {
    pub version: u32,
    pub speed: f32,
    pub steps: Vec<StepConfig>,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct StepConfig {
    pub anims: Vec<AnimConfig>,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct AnimConfig {
    /// Name of the target object, resolved against the host's registry.
    pub target: String,
    pub time: f32,
    #[serde(default)]
    pub delay: f32,
    #[serde(default)]
    pub easing: EasingConfig,

    #[serde(default)]
    pub translations: Vec<TranslationConfig>,
    #[serde(default)]
    pub scales: Vec<[f32; 2]>,
    #[serde(default)]
    pub rotations: Vec<f32>,
    #[serde(default)]
    pub colors: Vec<[f32; 4]>,
    #[serde(default)]
    pub sprite: Option<String>,

    /// Name of a scalar cell, resolved against the host's registry.
    #[serde(default)]
    pub scalar: Option<String>,
    #[serde(default)]
    pub scalar_keyframes: Vec<f32>,
}

#[derive(Clone, Copy, Debug, Default, Serialize, Deserialize)]
pub struct EasingConfig {
    #[serde(default)]
    pub curve: Curve,
    #[serde(default)]
    pub mode: Mode,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct TranslationConfig {
    pub vector: [f32; 2],
    #[serde(default)]
    pub reference: Option<String>,
    #[serde(default)]
    pub relative: bool,
}

// ============================================================
// Conversions: config types → runtime types
// ============================================================

impl From<&EasingConfig> for Easing {
    fn from(c: &EasingConfig) -> Self {
        Self {
            curve: c.curve,
            mode: c.mode,
        }
    }
}

impl From<&Easing> for EasingConfig {
    fn from(e: &Easing) -> Self {
        Self {
            curve: e.curve,
            mode: e.mode,
        }
    }
}

// ============================================================
// SequenceConfig: top-level config
// ============================================================

impl SequenceConfig {
    pub const CURRENT_VERSION: u32 = 1;

    pub fn new(speed: f32, steps: Vec<StepConfig>) -> Self {
        Self {
            version: Self::CURRENT_VERSION,
            speed,
            steps,
        }
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    pub fn from_json(json: &str) -> Result<Self, TweenError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Binds the config to live objects.
    ///
    /// Target and cell names are looked up in the host-supplied registries;
    /// unknown names fail here so a typo never surfaces mid-animation.
    pub fn resolve(
        &self,
        targets: &HashMap<String, TargetHandle>,
        cells: &HashMap<String, ScalarCell>,
    ) -> Result<Vec<Step>, TweenError> {
        let mut steps = Vec::with_capacity(self.steps.len());

        for (step_index, step) in self.steps.iter().enumerate() {
            let mut anims = Vec::with_capacity(step.anims.len());

            for (anim_index, config) in step.anims.iter().enumerate() {
                let target = targets.get(&config.target).cloned().ok_or_else(|| {
                    TweenError::UnknownTarget {
                        step: step_index,
                        anim: anim_index,
                        name: config.target.clone(),
                    }
                })?;

                let scalar = match &config.scalar {
                    None => None,
                    Some(name) => Some(cells.get(name).cloned().ok_or_else(|| {
                        TweenError::UnknownCell {
                            step: step_index,
                            anim: anim_index,
                            name: name.clone(),
                        }
                    })?),
                };

                let translations = config
                    .translations
                    .iter()
                    .map(|t| {
                        let reference = match &t.reference {
                            None => None,
                            Some(name) => Some(targets.get(name).cloned().ok_or_else(|| {
                                TweenError::UnknownTarget {
                                    step: step_index,
                                    anim: anim_index,
                                    name: name.clone(),
                                }
                            })?),
                        };
                        Ok(Translation {
                            vector: t.vector,
                            reference,
                            relative: t.relative,
                        })
                    })
                    .collect::<Result<Vec<_>, TweenError>>()?;

                anims.push(Anim {
                    target,
                    time: config.time,
                    delay: config.delay,
                    easing: Easing::from(&config.easing),
                    translations,
                    scales: config.scales.clone(),
                    rotations: config.rotations.clone(),
                    colors: config.colors.clone(),
                    sprite: config.sprite.clone(),
                    scalar,
                    scalar_keyframes: config.scalar_keyframes.clone(),
                });
            }

            steps.push(Step { anims });
        }

        Ok(steps)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::target::Transform2D;

    const SAMPLE: &str = r#"{
        "version": 1,
        "speed": 1.0,
        "steps": [
            {
                "anims": [
                    {
                        "target": "hero",
                        "time": 0.5,
                        "easing": { "curve": "quad", "mode": "in_out" },
                        "translations": [
                            { "vector": [3.0, 0.0], "relative": true }
                        ],
                        "rotations": [90.0]
                    }
                ]
            }
        ]
    }"#;

    #[test]
    fn parses_and_resolves_sample() {
        let config = SequenceConfig::from_json(SAMPLE).unwrap();
        assert_eq!(config.steps.len(), 1);

        let mut targets = HashMap::new();
        targets.insert(
            "hero".to_string(),
            Transform2D::default().into_handle() as TargetHandle,
        );

        let steps = config.resolve(&targets, &HashMap::new()).unwrap();
        let anim = &steps[0].anims[0];
        assert_eq!(anim.easing.curve, Curve::Quad);
        assert_eq!(anim.easing.mode, Mode::InOut);
        assert!(anim.has_translations());
        assert!(anim.has_rotations());
        assert!(!anim.has_colors());
    }

    #[test]
    fn unknown_target_is_a_load_error() {
        let config = SequenceConfig::from_json(SAMPLE).unwrap();
        let err = config
            .resolve(&HashMap::new(), &HashMap::new())
            .map(|_| ())
            .unwrap_err();
        assert!(matches!(err, TweenError::UnknownTarget { name, .. } if name == "hero"));
    }

    #[test]
    fn new_configs_carry_the_current_version() {
        let config = SequenceConfig::new(1.0, vec![]);
        assert_eq!(config.version, SequenceConfig::CURRENT_VERSION);

        let json = config.to_json().unwrap();
        let back = SequenceConfig::from_json(&json).unwrap();
        assert_eq!(back.version, SequenceConfig::CURRENT_VERSION);
    }

    #[test]
    fn json_round_trips() {
        let config = SequenceConfig::from_json(SAMPLE).unwrap();
        let json = config.to_json().unwrap();
        let back = SequenceConfig::from_json(&json).unwrap();
        assert_eq!(back.steps[0].anims[0].target, "hero");
        assert_eq!(back.steps[0].anims[0].rotations, vec![90.0]);
    }
}
