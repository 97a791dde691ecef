use log::info;

use crate::anim::Step;
use crate::error::TweenError;
use crate::history::History;
use crate::runner::Runner;

/// Checks every animation against its target's capabilities.
///
/// Configuration-shape problems surface here, at load time, instead of
/// mid-animation: color keyframes require a tint-capable target, scalar
/// keyframes require an attached cell.
pub fn validate_steps(steps: &[Step]) -> Result<(), TweenError> {
    for (step_index, step) in steps.iter().enumerate() {
        for (anim_index, anim) in step.anims.iter().enumerate() {
            if anim.has_colors() && anim.target.borrow().tint_color().is_none() {
                return Err(TweenError::MissingTintTarget {
                    step: step_index,
                    anim: anim_index,
                });
            }
            if anim.scalar.is_none() && !anim.scalar_keyframes.is_empty() {
                return Err(TweenError::MissingScalarCell {
                    step: step_index,
                    anim: anim_index,
                });
            }
        }
    }
    Ok(())
}

/// Step sequencer: owns the current step index and drives playback.
///
/// The index lives in [-1, N-1]; -1 means "before the first step".
/// Navigation clamps silently, so walking past either end is a boundary,
/// not an error. The host pumps [`tick`](Self::tick) once per frame.
pub struct Player {
    steps: Vec<Step>,
    step: i32,
    /// 1 for normal speed, 0 to disable animation (navigation then snaps
    /// straight to endpoints). The sign of backward playback is handled by
    /// [`previous`](Self::previous), not by this field.
    pub speed: f32,
    history: History,
    runners: Vec<Runner>,
}

impl Player {
    /// Validates the steps and starts before the first one.
    pub fn new(steps: Vec<Step>, speed: f32) -> Result<Self, TweenError> {
        validate_steps(&steps)?;
        Ok(Self {
            steps,
            step: -1,
            speed,
            history: History::new(),
            runners: Vec::new(),
        })
    }

    pub fn step(&self) -> i32 {
        self.step
    }

    pub fn step_count(&self) -> usize {
        self.steps.len()
    }

    /// True when no runner is live.
    pub fn is_idle(&self) -> bool {
        self.runners.is_empty()
    }

    pub fn set_step(&mut self, step: i32) {
        self.step = step.clamp(-1, self.steps.len() as i32 - 1);
        info!("step {}", self.step);
    }

    /// Advances to the next step and plays it forward.
    ///
    /// At the last step the index stays put but the step replays. `force`
    /// finishes every runner still live from earlier calls first; the
    /// runners launched here are unaffected (they settle next tick).
    pub fn next(&mut self, force: bool) {
        self.set_step(self.step + 1);

        if force {
            self.force_finish();
        }

        if self.step >= 0 {
            self.play_step(self.step as usize, self.speed);
        }
    }

    /// Plays the current step backward, then retreats the index.
    ///
    /// At index -1 there is nothing to play back; the call only clamps.
    pub fn previous(&mut self, force: bool) {
        if force {
            self.force_finish();
        }

        if self.step >= 0 {
            self.play_step(self.step as usize, -self.speed);
        }

        self.set_step(self.step - 1);
    }

    /// Jumps every live runner to its endpoint.
    pub fn force_finish(&mut self) {
        for runner in &mut self.runners {
            runner.finish(&mut self.history);
        }
        self.runners.retain(|r| !r.is_finished());
    }

    /// Advances all live runners by `dt` seconds and retires finished ones.
    pub fn tick(&mut self, dt: f32) {
        for runner in &mut self.runners {
            runner.tick(dt, &mut self.history);
        }
        self.runners.retain(|r| !r.is_finished());
    }

    /// Launches one runner per animation in the step, in declaration order.
    ///
    /// Backward play rewrites each delay to `L - (delay + time)` where `L`
    /// is the longest `delay + time` in the step, mirroring the timeline:
    /// whatever finished last starts first when reversed.
    fn play_step(&mut self, index: usize, speed: f32) {
        let step = &self.steps[index];

        if speed >= 0.0 {
            for (i, anim) in step.anims.iter().enumerate() {
                self.runners.push(Runner::new(anim.clone(), (index, i), speed));
            }
        } else {
            let longest = step
                .anims
                .iter()
                .map(|a| a.delay + a.time)
                .fold(0.0f32, f32::max);

            for (i, anim) in step.anims.iter().enumerate() {
                let mut anim = anim.clone();
                anim.delay = longest - (anim.delay + anim.time);
                self.runners.push(Runner::new(anim, (index, i), speed));
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::anim::{Anim, Step, Translation};
    use crate::easing::Easing;
    use crate::target::Transform2D;

    fn one_step_player() -> Player {
        let transform = Transform2D::default().into_handle();
        let mut anim = Anim::new(transform, 1.0, 0.0, Easing::default());
        anim.translations = vec![Translation::world([1.0, 0.0], false)];
        Player::new(vec![Step { anims: vec![anim] }], 1.0).unwrap()
    }

    #[test]
    fn index_clamps_at_both_ends() {
        let mut player = one_step_player();
        assert_eq!(player.step(), -1);

        player.next(false);
        assert_eq!(player.step(), 0);
        player.next(false);
        assert_eq!(player.step(), 0);

        player.previous(false);
        assert_eq!(player.step(), -1);
        player.previous(false);
        assert_eq!(player.step(), -1);
    }

    #[test]
    fn advance_at_last_step_still_plays_it() {
        let mut player = one_step_player();
        player.next(true);
        for _ in 0..3 {
            player.tick(2.0);
        }
        assert!(player.is_idle());

        // Index is pinned at the end, but the step launches again.
        player.next(false);
        assert_eq!(player.step(), 0);
        assert!(!player.is_idle());
    }

    #[test]
    fn retreat_before_first_step_launches_nothing() {
        let mut player = one_step_player();
        player.previous(false);
        assert!(player.is_idle());
        assert_eq!(player.step(), -1);
    }

    #[test]
    fn color_keyframes_need_a_tintable_target() {
        let transform = Transform2D::default().into_handle();
        let mut anim = Anim::new(transform, 1.0, 0.0, Easing::default());
        anim.colors = vec![[1.0, 0.0, 0.0, 1.0]];

        let err = match Player::new(vec![Step { anims: vec![anim] }], 1.0) {
            Err(err) => err,
            Ok(_) => panic!("expected a validation error"),
        };
        assert!(matches!(
            err,
            TweenError::MissingTintTarget { step: 0, anim: 0 }
        ));
    }

    #[test]
    fn scalar_keyframes_need_a_cell() {
        let transform = Transform2D::default().into_handle();
        let mut anim = Anim::new(transform, 1.0, 0.0, Easing::default());
        anim.scalar_keyframes = vec![1.0];

        let err = match Player::new(vec![Step { anims: vec![anim] }], 1.0) {
            Err(err) => err,
            Ok(_) => panic!("expected a validation error"),
        };
        assert!(matches!(
            err,
            TweenError::MissingScalarCell { step: 0, anim: 0 }
        ));
    }
}
