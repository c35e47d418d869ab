use log::trace;

use crate::components::{HandJoint, HandSample, HandSource, HandTable, Handedness, JointSample};

/// The hand samples for a single frame, yielded left hand first.
///
/// Not restartable: extract the hands again next frame.
#[derive(Debug, Clone)]
pub struct HandSamples {
    inner: std::iter::Flatten<std::array::IntoIter<Option<HandSample>, 2>>,
}

impl Iterator for HandSamples {
    type Item = HandSample;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

/// Hands system
/// Turns this frame's tracked input sources into at most one [`HandSample`] per hand.
///
/// A source only produces a sample if both its thumb tip and index finger tip could be located.
/// Anything else (no hand data, joints the runtime isn't sure about) is silently skipped. If two
/// sources claim the same hand, the later one wins.
pub fn hands_system<I>(sources: I) -> HandSamples
where
    I: IntoIterator,
    I::Item: HandSource,
{
    let mut samples = HandTable::<Option<HandSample>>::default();

    for source in sources {
        let handedness = source.handedness();
        let Some(sample) = sample_from_source(&source) else {
            continue;
        };

        if samples[handedness].replace(sample).is_some() {
            trace!(
                "[PINCHGRAB_HANDS] More than one source for {} hand, using the last one",
                handedness.as_str()
            );
        }
    }

    HandSamples {
        inner: [samples[Handedness::Left], samples[Handedness::Right]]
            .into_iter()
            .flatten(),
    }
}

fn sample_from_source(source: &impl HandSource) -> Option<HandSample> {
    let thumb_tip = locate_valid_joint(source, HandJoint::ThumbTip)?;
    let index_tip = locate_valid_joint(source, HandJoint::IndexTip)?;

    Some(HandSample {
        handedness: source.handedness(),
        thumb_tip,
        index_tip,
    })
}

fn locate_valid_joint(source: &impl HandSource, joint: HandJoint) -> Option<JointSample> {
    let located = source.locate_joint(joint).filter(|j| j.valid);
    if located.is_none() {
        trace!(
            "[PINCHGRAB_HANDS] Unable to locate {} for {} hand",
            joint.as_str(),
            source.handedness().as_str()
        );
    }
    located
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::SimulatedHand;
    use glam::Vec3;

    /// A hand whose index tip the runtime has lost track of
    struct FlakyHand(Handedness);

    impl HandSource for FlakyHand {
        fn handedness(&self) -> Handedness {
            self.0
        }

        fn locate_joint(&self, joint: HandJoint) -> Option<JointSample> {
            match joint {
                HandJoint::IndexTip => Some(JointSample::invalid(Vec3::ZERO)),
                _ => Some(JointSample::valid(Vec3::ONE)),
            }
        }
    }

    #[test]
    fn test_hands_system() {
        let right = SimulatedHand::pinching_at(Handedness::Right, [0.2, 1.4, -0.5].into(), 0.05);
        let left = SimulatedHand::pinching_at(Handedness::Left, [-0.2, 1.4, -0.5].into(), 0.01);

        // Right comes first, but samples are always yielded left first
        let samples = hands_system([&right, &left]).collect::<Vec<_>>();
        assert_eq!(samples.len(), 2);
        assert_eq!(samples[0].handedness, Handedness::Left);
        assert_eq!(samples[0].index_tip.position, Vec3::new(-0.2, 1.4, -0.5));
        assert_eq!(samples[1].handedness, Handedness::Right);
        assert_eq!(
            samples[1].thumb_tip.position,
            Vec3::new(0.2, 1.4, -0.5) + Vec3::X * 0.05
        );
    }

    #[test]
    fn test_no_hands() {
        let sources: Vec<SimulatedHand> = Vec::new();
        assert_eq!(hands_system(sources).count(), 0);
    }

    #[test]
    fn test_missing_joints_are_skipped() {
        let controller = SimulatedHand::without_hand_data(Handedness::Left);
        let thumb_only = SimulatedHand::new(Handedness::Right)
            .with_joint(HandJoint::ThumbTip, Vec3::ZERO);
        assert_eq!(hands_system([controller, thumb_only]).count(), 0);

        assert_eq!(hands_system([FlakyHand(Handedness::Left)]).count(), 0);
    }

    #[test]
    fn test_last_source_wins() {
        let first = SimulatedHand::pinching_at(Handedness::Right, Vec3::ZERO, 0.01);
        let second = SimulatedHand::pinching_at(Handedness::Right, Vec3::ONE, 0.01);

        let samples = hands_system([first, second]).collect::<Vec<_>>();
        assert_eq!(samples.len(), 1);
        assert_eq!(samples[0].index_tip.position, Vec3::ONE);
    }
}
