use glam::Vec3;
use log::{debug, trace};

use crate::{
    components::{HandSample, HandTable, Handedness},
    contexts::{GestureConfig, LostTrackingPolicy},
    PINCH_THRESHOLD,
};

/// Is a hand with its thumb and index tips `distance` meters apart pinching?
///
/// Stateless version of [`GestureConfig::classify`] using the default [`PINCH_THRESHOLD`].
pub fn pinching(distance: f32) -> bool {
    distance < PINCH_THRESHOLD
}

/// Per-hand pinch state, kept from one frame to the next.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PinchState {
    /// Was this hand pinching as of its most recent sample?
    pub is_pinching: bool,
    /// How many frames in a row this hand has gone without a sample
    pub frames_untracked: u32,
}

/// Which hand, if any, is currently holding the object.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct GrabState {
    /// The hand holding the object
    pub owner: Option<Handedness>,
}

impl GrabState {
    /// Is anything holding the object?
    pub fn active(&self) -> bool {
        self.owner.is_some()
    }
}

/// Why a grab ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReleaseReason {
    /// The holding hand stopped pinching
    PinchReleased,
    /// The holding hand stopped being tracked, see [`LostTrackingPolicy::Release`]
    TrackingLost,
}

/// Things that happened during a frame, in the order they happened.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GestureEvent {
    /// `hand` went from not pinching to pinching
    PinchStarted {
        #[allow(missing_docs)]
        hand: Handedness,
    },
    /// `hand` went from pinching to not pinching
    PinchEnded {
        #[allow(missing_docs)]
        hand: Handedness,
    },
    /// `hand` picked up the object
    GrabStarted {
        #[allow(missing_docs)]
        hand: Handedness,
    },
    /// `hand` let go of the object, and nothing else is holding it
    GrabEnded {
        #[allow(missing_docs)]
        hand: Handedness,
        #[allow(missing_docs)]
        reason: ReleaseReason,
    },
    /// `from` let go of the object while `to` was pinching, so `to` is holding it now
    GrabTransferred {
        #[allow(missing_docs)]
        from: Handedness,
        #[allow(missing_docs)]
        to: Handedness,
    },
}

/// The result of feeding one frame of samples into a [`GestureContext`].
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FrameEffects {
    /// Where the object was moved to this frame, if it moved
    pub object_position: Option<Vec3>,
    /// Transitions that happened this frame
    pub events: Vec<GestureEvent>,
}

/// Context that turns hand samples into pinches, and pinches into a grab on a single object.
///
/// Create one per session and call [`GestureContext::update`] (or [`GestureContext::step`]) exactly
/// once per frame, even when no hands are tracked.
///
/// At most one hand holds the object at a time. The first hand to start pinching while the object
/// is free gets it; a second hand pinching in the meantime is tracked but ignored for grabbing.
#[derive(Debug, Clone, Default)]
pub struct GestureContext {
    config: GestureConfig,
    pinch_states: HandTable<Option<PinchState>>,
    grab_state: GrabState,
    object_position: Option<Vec3>,
}

impl GestureContext {
    /// Create a context with the given configuration
    pub fn new(config: GestureConfig) -> Self {
        Self {
            config,
            ..Default::default()
        }
    }

    /// The configuration this context was created with
    pub fn config(&self) -> &GestureConfig {
        &self.config
    }

    /// Process one frame of samples, returning the object's new position if it moved.
    pub fn update<I>(&mut self, samples: I) -> Option<Vec3>
    where
        I: IntoIterator<Item = HandSample>,
    {
        self.step(samples).object_position
    }

    /// Process one frame of samples, returning everything that happened.
    ///
    /// Samples are processed in order. If a hand appears more than once, only its last sample counts.
    pub fn step<I>(&mut self, samples: I) -> FrameEffects
    where
        I: IntoIterator<Item = HandSample>,
    {
        let samples = samples.into_iter().collect::<Vec<_>>();
        let mut effects = FrameEffects::default();
        let mut seen = HandTable::<bool>::default();

        for (i, sample) in samples.iter().enumerate() {
            if samples[i + 1..]
                .iter()
                .any(|s| s.handedness == sample.handedness)
            {
                trace!(
                    "[PINCHGRAB] Skipping duplicate {} hand sample",
                    sample.handedness.as_str()
                );
                continue;
            }

            seen[sample.handedness] = true;
            self.update_hand(sample, &mut effects);
        }

        for (hand, &tracked) in seen.iter() {
            if !tracked {
                self.update_untracked_hand(hand, &mut effects);
            }
        }

        trace!(
            "[PINCHGRAB] Frame processed - owner: {:?}, moved to: {:?}",
            self.grab_state.owner,
            effects.object_position
        );

        effects
    }

    /// Is `hand` pinching? Hands that have never been seen are not.
    pub fn is_pinching(&self, hand: Handedness) -> bool {
        self.pinch_states[hand]
            .map(|s| s.is_pinching)
            .unwrap_or(false)
    }

    /// The pinch state of `hand`, or `None` if it has never been seen this session
    pub fn pinch_state(&self, hand: Handedness) -> Option<&PinchState> {
        self.pinch_states[hand].as_ref()
    }

    /// Which hand, if any, is holding the object
    pub fn grab_state(&self) -> GrabState {
        self.grab_state
    }

    /// Where the object was last put, if it has ever been moved or seeded
    pub fn object_position(&self) -> Option<Vec3> {
        self.object_position
    }

    /// Tell the context where the object is, eg. when it is first placed in the scene
    pub fn set_object_position(&mut self, position: Vec3) {
        self.object_position = Some(position);
    }

    /// Forget every hand and drop any grab. The configuration is kept.
    pub fn reset(&mut self) {
        *self = Self {
            config: self.config,
            object_position: self.object_position,
            ..Default::default()
        };
    }

    fn update_hand(&mut self, sample: &HandSample, effects: &mut FrameEffects) {
        let hand = sample.handedness;
        let distance = sample.pinch_distance();

        let state = self.pinch_states[hand].get_or_insert_with(Default::default);
        let was_pinching = state.is_pinching;
        let is_pinching = self.config.classify(was_pinching, distance);
        state.is_pinching = is_pinching;
        state.frames_untracked = 0;

        match (was_pinching, is_pinching) {
            (false, true) => {
                debug!(
                    "[PINCHGRAB] {} hand started pinching ({:.4}m)",
                    hand.as_str(),
                    distance
                );
                effects.events.push(GestureEvent::PinchStarted { hand });

                match self.grab_state.owner {
                    None => {
                        debug!("[PINCHGRAB] {} hand grabbed the object", hand.as_str());
                        self.grab_state.owner = Some(hand);
                        effects.events.push(GestureEvent::GrabStarted { hand });
                    }
                    Some(owner) => {
                        debug!(
                            "[PINCHGRAB] {} hand is already holding the object, ignoring {} hand",
                            owner.as_str(),
                            hand.as_str()
                        );
                    }
                }
            }
            (true, false) => {
                debug!(
                    "[PINCHGRAB] {} hand stopped pinching ({:.4}m)",
                    hand.as_str(),
                    distance
                );
                effects.events.push(GestureEvent::PinchEnded { hand });

                if self.grab_state.owner == Some(hand) {
                    self.release_grab(hand, ReleaseReason::PinchReleased, effects);
                }
            }
            _ => {}
        }

        if self.grab_state.owner == Some(hand) {
            let position = sample.index_tip.position;
            self.object_position = Some(position);
            effects.object_position = Some(position);
        }
    }

    fn update_untracked_hand(&mut self, hand: Handedness, effects: &mut FrameEffects) {
        let Some(state) = self.pinch_states[hand].as_mut() else {
            return;
        };
        state.frames_untracked = state.frames_untracked.saturating_add(1);

        let LostTrackingPolicy::Release { after_frames } = self.config.lost_tracking else {
            return;
        };
        if state.frames_untracked <= after_frames || !state.is_pinching {
            return;
        }

        debug!(
            "[PINCHGRAB] Lost track of {} hand for {} frames, resetting its pinch",
            hand.as_str(),
            state.frames_untracked
        );
        state.is_pinching = false;
        effects.events.push(GestureEvent::PinchEnded { hand });

        if self.grab_state.owner == Some(hand) {
            self.release_grab(hand, ReleaseReason::TrackingLost, effects);
        }
    }

    fn release_grab(
        &mut self,
        hand: Handedness,
        reason: ReleaseReason,
        effects: &mut FrameEffects,
    ) {
        self.grab_state.owner = None;

        let other = hand.other();
        if self.config.handoff_on_release && self.is_pinching(other) {
            debug!(
                "[PINCHGRAB] {} hand let go, handing the object to {} hand",
                hand.as_str(),
                other.as_str()
            );
            self.grab_state.owner = Some(other);
            effects.events.push(GestureEvent::GrabTransferred {
                from: hand,
                to: other,
            });
            return;
        }

        debug!(
            "[PINCHGRAB] {} hand released the object ({:?})",
            hand.as_str(),
            reason
        );
        effects
            .events
            .push(GestureEvent::GrabEnded { hand, reason });
    }
}
