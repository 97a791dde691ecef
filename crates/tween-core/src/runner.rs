use log::debug;

use crate::anim::Anim;
use crate::blend::lerp_closest;
use crate::history::{History, Slot};
use crate::track::{capture, Tracks};

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
enum State {
    Pending,
    Running,
    Finished,
}

/// One live execution of a single animation's timeline.
///
/// Advanced by [`tick`](Self::tick). The first tick is a settle tick: the
/// keyframe lists are built (capturing or restoring starting values) and the
/// sprite swap happens, but no sampling — mirroring the one-frame suspension
/// before an animation first reads its target. Sampling starts the tick
/// after, and the endpoint is force-applied exactly once on exit so every
/// animation lands on its precise final (or, reversed, initial) values
/// regardless of frame timing.
pub struct Runner {
    anim: Anim,
    slot: Slot,
    speed: f32,
    elapsed: f32,
    state: State,
    tracks: Option<Tracks>,
}

impl Runner {
    /// `speed < 0` plays the animation backward, restoring its starting
    /// values from `history` on the settle tick.
    pub fn new(anim: Anim, slot: Slot, speed: f32) -> Self {
        Self {
            anim,
            slot,
            speed,
            elapsed: 0.0,
            state: State::Pending,
            tracks: None,
        }
    }

    pub fn slot(&self) -> Slot {
        self.slot
    }

    pub fn is_finished(&self) -> bool {
        self.state == State::Finished
    }

    /// Advances the runner by one scheduler tick of `dt` seconds.
    pub fn tick(&mut self, dt: f32, history: &mut History) {
        match self.state {
            State::Finished => {}
            State::Pending => {
                self.settle(history);
                self.state = State::Running;
                // Zero duration or zero speed: straight to the endpoint,
                // no intermediate sampling.
                if self.speed == 0.0 || self.anim.time <= 0.0 {
                    self.finalize();
                }
            }
            State::Running => {
                if self.elapsed > self.anim.delay + self.anim.time {
                    self.finalize();
                    return;
                }
                if self.elapsed > self.anim.delay {
                    let t = self
                        .anim
                        .easing
                        .get((self.elapsed - self.anim.delay) / self.anim.time);
                    self.apply(if self.speed > 0.0 { t } else { 1.0 - t });
                }
                self.elapsed += dt * self.speed.abs();
            }
        }
    }

    /// Force-completion: jumps straight to the endpoint.
    ///
    /// A runner that has not had its settle tick yet still captures or
    /// restores its starting values first, keeping the history consistent.
    pub fn finish(&mut self, history: &mut History) {
        match self.state {
            State::Finished => {}
            State::Pending => {
                self.settle(history);
                self.finalize();
            }
            State::Running => self.finalize(),
        }
    }

    fn settle(&mut self, history: &mut History) {
        let start = if self.speed >= 0.0 {
            let snapshot = capture(&self.anim);
            history.push(self.slot, snapshot);
            snapshot
        } else {
            history
                .pop_or_warn(self.slot)
                .unwrap_or_else(|| capture(&self.anim))
        };

        self.tracks = Some(Tracks::build(&self.anim, &start));

        if let Some(sprite) = &self.anim.sprite {
            self.anim.target.borrow_mut().set_sprite(sprite);
        }

        debug!(
            "step {} anim {} settled (speed {})",
            self.slot.0, self.slot.1, self.speed
        );
    }

    fn finalize(&mut self) {
        self.apply(if self.speed >= 0.0 { 1.0 } else { 0.0 });
        self.state = State::Finished;
        debug!("step {} anim {} finished", self.slot.0, self.slot.1);
    }

    /// Writes the blended values at normalized time `t` to the target,
    /// touching only channels with authored keyframes.
    fn apply(&self, t: f32) {
        let Some(tracks) = &self.tracks else {
            return;
        };
        let mut target = self.anim.target.borrow_mut();

        if !tracks.translations.is_empty() {
            target.set_position(lerp_closest(&tracks.translations, t));
        }

        if !tracks.scales.is_empty() {
            let scale = lerp_closest(&tracks.scales, t);
            if target.orthographic_size().is_some() {
                target.set_orthographic_size(scale[0]);
            } else {
                target.set_local_scale(scale);
            }
        }

        if !tracks.rotations.is_empty() {
            target.set_z_rotation(lerp_closest(&tracks.rotations, t));
        }

        if !tracks.colors.is_empty() {
            target.set_tint_color(lerp_closest(&tracks.colors, t));
        }

        if !tracks.scalars.is_empty() {
            if let Some(cell) = &self.anim.scalar {
                cell.set(lerp_closest(&tracks.scalars, t));
            }
        }
    }
}
