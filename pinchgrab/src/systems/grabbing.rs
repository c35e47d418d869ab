use hecs::{ComponentError, Entity, World};
use log::{debug, trace, warn};

use crate::{
    components::{Grabbable, Grabbed, HandSample, LocalTransform},
    contexts::{FrameEffects, GestureContext, GestureEvent},
};

/// Grabbing system
/// Runs a frame of hand samples through `gesture_context`, then moves the [`Grabbable`] entity in
/// `world` to wherever the hand holding it put it.
///
/// While an entity is held it also has a [`Grabbed`] component naming the hand holding it. If there
/// is no `Grabbable` entity the gestures are still tracked and the effects still returned.
pub fn grabbing_system<I>(
    world: &mut World,
    gesture_context: &mut GestureContext,
    samples: I,
) -> FrameEffects
where
    I: IntoIterator<Item = HandSample>,
{
    let effects = gesture_context.step(samples);

    let Some(entity) = find_grabbable(world) else {
        return effects;
    };

    for event in &effects.events {
        match *event {
            GestureEvent::GrabStarted { hand } | GestureEvent::GrabTransferred { to: hand, .. } => {
                debug!(
                    "[PINCHGRAB_GRABBING] {:?} is now held by {} hand",
                    entity,
                    hand.as_str()
                );
                if let Err(e) = world.insert_one(entity, Grabbed { hand }) {
                    warn!("[PINCHGRAB_GRABBING] Unable to mark {:?} as grabbed: {:?}", entity, e);
                }
            }
            GestureEvent::GrabEnded { .. } => {
                debug!("[PINCHGRAB_GRABBING] {:?} was released", entity);
                match world.remove_one::<Grabbed>(entity) {
                    Ok(_) => {}
                    Err(ComponentError::MissingComponent(_)) => {
                        trace!("[PINCHGRAB_GRABBING] {:?} was never marked as grabbed", entity);
                    }
                    Err(e) => {
                        warn!("[PINCHGRAB_GRABBING] Unable to release {:?}: {:?}", entity, e);
                    }
                }
            }
            _ => {}
        }
    }

    if let Some(position) = effects.object_position {
        if let Ok(mut local_transform) = world.get::<&mut LocalTransform>(entity) {
            local_transform.translation = position;
        }
    }

    effects
}

fn find_grabbable(world: &mut World) -> Option<Entity> {
    world
        .query_mut::<&Grabbable>()
        .into_iter()
        .map(|(entity, _)| entity)
        .next()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        components::{Handedness, JointSample},
        contexts::GestureConfig,
    };
    use approx::assert_relative_eq;
    use glam::Vec3;

    fn sample(handedness: Handedness, index_tip: Vec3, distance: f32) -> HandSample {
        HandSample {
            handedness,
            thumb_tip: JointSample::valid(index_tip + Vec3::Y * distance),
            index_tip: JointSample::valid(index_tip),
        }
    }

    #[test]
    fn test_grabbing_system() {
        let mut world = World::default();
        let mut gesture_context = GestureContext::default();
        let cube = world.spawn((
            Grabbable,
            LocalTransform::from_translation([0.0, 1.0, -0.5].into()),
        ));

        // Open hand, nothing happens
        grabbing_system(
            &mut world,
            &mut gesture_context,
            [sample(Handedness::Right, [0.0, 1.2, -0.4].into(), 0.05)],
        );
        assert!(world.get::<&Grabbed>(cube).is_err());
        assert_eq!(
            world.get::<&LocalTransform>(cube).unwrap().translation,
            Vec3::new(0.0, 1.0, -0.5)
        );

        // Pinch - the cube jumps to the index finger
        grabbing_system(
            &mut world,
            &mut gesture_context,
            [sample(Handedness::Right, [0.0, 1.2, -0.4].into(), 0.01)],
        );
        assert_eq!(
            *world.get::<&Grabbed>(cube).unwrap(),
            Grabbed {
                hand: Handedness::Right
            }
        );
        assert_relative_eq!(
            world.get::<&LocalTransform>(cube).unwrap().translation,
            Vec3::new(0.0, 1.2, -0.4)
        );

        // Drag
        grabbing_system(
            &mut world,
            &mut gesture_context,
            [sample(Handedness::Right, [0.1, 1.3, -0.4].into(), 0.01)],
        );
        assert_relative_eq!(
            world.get::<&LocalTransform>(cube).unwrap().translation,
            Vec3::new(0.1, 1.3, -0.4)
        );

        // Let go - the cube stays where it was dropped
        grabbing_system(
            &mut world,
            &mut gesture_context,
            [sample(Handedness::Right, [0.3, 1.3, -0.4].into(), 0.03)],
        );
        assert!(world.get::<&Grabbed>(cube).is_err());
        assert_relative_eq!(
            world.get::<&LocalTransform>(cube).unwrap().translation,
            Vec3::new(0.1, 1.3, -0.4)
        );
    }

    #[test]
    fn test_grabbed_follows_handoff() {
        let mut world = World::default();
        let mut gesture_context = GestureContext::new(GestureConfig {
            handoff_on_release: true,
            ..Default::default()
        });
        let cube = world.spawn((Grabbable, LocalTransform::default()));
        let left = Vec3::new(-0.2, 1.4, -0.5);
        let right = Vec3::new(0.2, 1.4, -0.5);

        grabbing_system(
            &mut world,
            &mut gesture_context,
            [sample(Handedness::Left, left, 0.01)],
        );
        grabbing_system(
            &mut world,
            &mut gesture_context,
            [
                sample(Handedness::Left, left, 0.01),
                sample(Handedness::Right, right, 0.01),
            ],
        );
        assert_eq!(world.get::<&Grabbed>(cube).unwrap().hand, Handedness::Left);

        grabbing_system(
            &mut world,
            &mut gesture_context,
            [
                sample(Handedness::Left, left, 0.05),
                sample(Handedness::Right, right, 0.01),
            ],
        );
        assert_eq!(world.get::<&Grabbed>(cube).unwrap().hand, Handedness::Right);
        assert_relative_eq!(world.get::<&LocalTransform>(cube).unwrap().translation, right);
    }

    #[test]
    fn test_grabbable_spawned_mid_grab() {
        let mut world = World::default();
        let mut gesture_context = GestureContext::default();
        let hand = Vec3::new(0.0, 1.2, -0.4);

        // The grab starts before there's anything to hold
        grabbing_system(
            &mut world,
            &mut gesture_context,
            [sample(Handedness::Left, hand, 0.01)],
        );
        let cube = world.spawn((Grabbable, LocalTransform::default()));

        // Still dragged, but it never saw the grab start
        grabbing_system(
            &mut world,
            &mut gesture_context,
            [sample(Handedness::Left, hand, 0.01)],
        );
        assert!(world.get::<&Grabbed>(cube).is_err());
        assert_relative_eq!(world.get::<&LocalTransform>(cube).unwrap().translation, hand);

        // Releasing it is fine too
        let effects = grabbing_system(
            &mut world,
            &mut gesture_context,
            [sample(Handedness::Left, hand, 0.05)],
        );
        assert!(effects
            .events
            .iter()
            .any(|e| matches!(e, GestureEvent::GrabEnded { .. })));
        assert!(world.get::<&Grabbed>(cube).is_err());
        assert!(world.contains(cube));
    }

    #[test]
    fn test_empty_world() {
        let mut world = World::default();
        let mut gesture_context = GestureContext::default();

        let effects = grabbing_system(
            &mut world,
            &mut gesture_context,
            [sample(Handedness::Left, Vec3::ONE, 0.0)],
        );
        assert_eq!(effects.object_position, Some(Vec3::ONE));
        assert!(gesture_context.grab_state().active());
    }
}
