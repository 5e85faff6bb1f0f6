//! Game state and the per-tick update/render pipeline.

use crate::clock::AnimationClock;
use crate::config::StrideConfig;
use crate::geometry::Frame;
use crate::input::{Facing, InputState, movement_delta};
use crate::keyframe::KeyframeTable;
use crate::render::{Rect, RectStyle, RenderSink, Rgb};
use crate::rig::{self, LegSide, PosedLeg, Skeleton};

/// Complete per-process state, owned by the host and passed into every tick.
#[derive(Debug, Clone)]
pub struct GameState {
    pub frame: Frame,
    pub facing: Facing,
    pub skeleton: Skeleton,
    pub clock: AnimationClock,
    keyframes: KeyframeTable,
    config: StrideConfig,
}

impl GameState {
    /// Runs setup: places the frame and poses the skeleton at frame 0.
    pub fn new(config: StrideConfig) -> Self {
        let keyframes = config.keyframes.clone();
        let clock = AnimationClock::new(keyframes.length());
        let skeleton = Skeleton::new(
            config.rig.thigh_length,
            config.rig.shank_length,
            keyframes.pose_at(f64::from(clock.current_frame())),
        );

        tracing::info!(
            "[stride] setup: {} keyframes over {} ticks",
            keyframes.keyframes().len(),
            keyframes.length()
        );

        Self {
            frame: config.initial_frame(),
            facing: Facing::default(),
            skeleton,
            clock,
            keyframes,
            config,
        }
    }

    pub fn config(&self) -> &StrideConfig {
        &self.config
    }

    pub fn keyframes(&self) -> &KeyframeTable {
        &self.keyframes
    }

    /// One scheduler tick: movement, animation keys, clock, then pose.
    pub fn update(&mut self, input: &InputState) {
        self.handle_movement(input);
        self.handle_animation(input);

        self.clock.advance();
        self.skeleton
            .apply_pose(self.keyframes.pose_at(f64::from(self.clock.current_frame())));
    }

    fn handle_movement(&mut self, input: &InputState) {
        if let Some(facing) = input.held.single() {
            self.facing = facing;
        }
        let (dx, dy) = movement_delta(input.held, &self.config.movement);
        self.frame.translate(dx, dy);
    }

    fn handle_animation(&mut self, input: &InputState) {
        if input.toggle_pause {
            self.clock.toggle_pause();
            tracing::debug!("[anim] paused={}", self.clock.is_paused());
        }

        if input.step_forward {
            self.clock.step_forward();
            tracing::debug!("[anim] step forward to {}", self.clock.current_frame());
        } else if input.step_backward {
            self.clock.step_backward();
            tracing::debug!("[anim] step backward to {}", self.clock.current_frame());
        }
    }

    /// Both legs posed and solved for the current skeleton.
    pub fn posed_legs(&self) -> [PosedLeg; 2] {
        LegSide::ALL.map(|side| {
            let scale = rig::leg_scale(&self.frame, &self.config.rig, side);
            rig::pose_leg(&self.frame, &self.skeleton, side, scale)
        })
    }

    /// Draws the frame border, then the far (left) leg, then the near one.
    pub fn render(&self, sink: &mut impl RenderSink) {
        sink.draw_rect(
            Rect {
                x: self.frame.x,
                y: self.frame.y,
                w: self.frame.w,
                h: self.frame.h,
            },
            RectStyle::Border(Rgb::BLACK),
        );

        let legs = self.posed_legs();
        for leg in &legs {
            rig::draw_leg(sink, leg, &self.config.rig);
        }
        if self.config.debug.show_joints {
            for leg in &legs {
                rig::draw_joints(sink, leg, &self.config.rig);
            }
        }
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new(StrideConfig::default())
    }
}
