use std::{
    sync::{
        atomic::{AtomicBool, Ordering},
        Arc,
    },
    thread::sleep,
    time::Instant,
};

use glam::Vec3;
use hecs::{Entity, World};
use log::{debug, info, warn};
use pinchgrab::{
    components::{Grabbable, Grabbed, Handedness, LocalTransform},
    contexts::{FrameEffects, GestureConfig, GestureContext, GestureEvent},
    systems::{grabbing_system, hands_system},
};

use crate::script::{Script, ScriptedFrame};

/// Stands in for the headset: owns the scene and pumps frames through the gesture system.
pub struct Simulator {
    pub world: World,
    pub gesture_context: GestureContext,
    pub object: Entity,
    frame_index: usize,
}

/// What happened over a whole run
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RunSummary {
    pub frames: usize,
    pub frames_moved: usize,
    pub grabs: usize,
    pub final_position: Vec3,
}

impl Simulator {
    pub fn new(config: GestureConfig, object_position: Vec3) -> Self {
        let mut world = World::default();
        let object = world.spawn((
            Grabbable,
            LocalTransform::from_translation(object_position),
        ));

        let mut gesture_context = GestureContext::new(config);
        gesture_context.set_object_position(object_position);

        Self {
            world,
            gesture_context,
            object,
            frame_index: 0,
        }
    }

    /// Run a single frame: extract the hands, update gestures, move the object.
    pub fn tick(&mut self, frame: &ScriptedFrame) -> FrameEffects {
        let samples = hands_system(&frame.sources);
        let effects = grabbing_system(&mut self.world, &mut self.gesture_context, samples);

        for event in &effects.events {
            debug!(
                "[PINCHGRAB_SIMULATOR] Frame {}: {:?}",
                self.frame_index, event
            );
        }
        if let Some(position) = effects.object_position {
            info!(
                "[PINCHGRAB_SIMULATOR] Frame {}: object moved to {:?} by {:?}",
                self.frame_index,
                position,
                self.held_by()
            );
        }

        self.frame_index += 1;
        effects
    }

    /// Play every frame of `script`, pacing to its frame rate if `realtime` is set.
    /// Stops early if `should_quit` is raised.
    pub fn run(
        &mut self,
        script: &Script,
        realtime: bool,
        should_quit: &Arc<AtomicBool>,
    ) -> RunSummary {
        let frame_time = if realtime {
            script
                .frame_time()
                .map_err(|e| warn!("[PINCHGRAB_SIMULATOR] {:#}, not pacing frames", e))
                .ok()
        } else {
            None
        };
        let mut summary = RunSummary::default();

        for frame in &script.frames {
            if should_quit.load(Ordering::Relaxed) {
                info!("[PINCHGRAB_SIMULATOR] Quitting early..");
                break;
            }

            let started = Instant::now();
            let effects = self.tick(frame);

            summary.frames += 1;
            if effects.object_position.is_some() {
                summary.frames_moved += 1;
            }
            summary.grabs += effects
                .events
                .iter()
                .filter(|e| matches!(e, GestureEvent::GrabStarted { .. }))
                .count();

            if let Some(remaining) = frame_time.and_then(|t| t.checked_sub(started.elapsed())) {
                sleep(remaining);
            }
        }

        summary.final_position = self.object_position();
        summary
    }

    pub fn object_position(&self) -> Vec3 {
        self.world
            .get::<&LocalTransform>(self.object)
            .map(|t| t.translation)
            .unwrap_or_default()
    }

    pub fn held_by(&self) -> Option<Handedness> {
        self.world
            .get::<&Grabbed>(self.object)
            .ok()
            .map(|g| g.hand)
    }
}
