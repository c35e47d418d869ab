use super::Handedness;

/// Marks the entity that hands are able to pick up and drag around.
/// Only the first `Grabbable` found is manipulated.
#[derive(Debug, Clone, Copy, Default)]
pub struct Grabbable;

/// Added to the `Grabbable` entity while a hand is holding it, removed on release.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Grabbed {
    /// The hand doing the holding
    pub hand: Handedness,
}
