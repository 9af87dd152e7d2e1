use crate::types::{PlatformId, Vec3};

/// Platform-induced motion carried by one body across steps.
///
/// Owned by its body and mutated in place by [`crate::process_step`]; nothing else
/// writes it. A fresh body starts at rest with no platform reference.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct MotionState {
    /// Platform most recently touched. Weak: the platform may no longer exist.
    pub last_touched_platform: Option<PlatformId>,
    /// Steps since the body last touched `last_touched_platform`.
    pub steps_since_contact: u32,
    /// Displacement per step imparted by the platform (world units).
    pub added_linear_velocity: Vec3,
    /// Yaw change per step imparted by the platform (degrees).
    pub added_yaw_velocity: f32,
}

impl MotionState {
    /// Whether a platform is still close enough in time to drag the body.
    #[inline]
    pub fn is_riding(&self, contact_retention_steps: u32) -> bool {
        self.last_touched_platform.is_some() && self.steps_since_contact < contact_retention_steps
    }

    /// Record contact with `platform` this step.
    #[inline]
    pub fn touch(&mut self, platform: PlatformId) {
        self.last_touched_platform = Some(platform);
        self.steps_since_contact = 0;
    }

    /// Record a step without contact.
    #[inline]
    pub fn tick_without_contact(&mut self) {
        self.steps_since_contact = self.steps_since_contact.saturating_add(1);
    }

    /// Drop all carried motion and the platform reference.
    #[inline]
    pub fn come_to_rest(&mut self) {
        self.last_touched_platform = None;
        self.added_linear_velocity = Vec3::zeros();
        self.added_yaw_velocity = 0.0;
    }

    #[inline]
    pub fn is_at_rest(&self) -> bool {
        self.added_linear_velocity == Vec3::zeros() && self.added_yaw_velocity == 0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_at_rest_without_platform() {
        let state = MotionState::default();
        assert!(state.is_at_rest());
        assert_eq!(state.last_touched_platform, None);
        assert!(!state.is_riding(20));
    }

    #[test]
    fn touch_resets_counter() {
        let mut state = MotionState {
            steps_since_contact: 57,
            ..MotionState::default()
        };
        state.touch(9);
        assert_eq!(state.steps_since_contact, 0);
        assert_eq!(state.last_touched_platform, Some(9));
        assert!(state.is_riding(20));
    }

    #[test]
    fn riding_ends_at_retention_threshold() {
        let mut state = MotionState::default();
        state.touch(1);
        for _ in 0..19 {
            state.tick_without_contact();
        }
        assert!(state.is_riding(20));
        state.tick_without_contact();
        assert!(!state.is_riding(20));
    }

    #[test]
    fn counter_saturates() {
        let mut state = MotionState {
            steps_since_contact: u32::MAX,
            ..MotionState::default()
        };
        state.tick_without_contact();
        assert_eq!(state.steps_since_contact, u32::MAX);
    }
}
