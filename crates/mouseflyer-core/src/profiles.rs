use crate::edit::PendingEdit;
use crate::profile::{Profile, ProfileError};

/// Numbered profile slots with one active selection.
#[derive(Debug, Clone, PartialEq)]
pub struct ProfileManager {
    profiles: Vec<PendingEdit<Profile>>,
    active: usize,
    max_profiles: usize,
}

impl ProfileManager {
    /// Builds `max_profiles` default slots named "1", "2", ...
    pub fn with_default_slots(max_profiles: usize) -> Self {
        let profiles = (1..=max_profiles.max(1))
            .map(|slot| PendingEdit::new(Profile::named(slot.to_string())))
            .collect();
        Self {
            profiles,
            active: 0,
            max_profiles: max_profiles.max(1),
        }
    }

    /// Wraps already-loaded profiles. An empty list falls back to default slots.
    pub fn from_profiles(profiles: Vec<Profile>, max_profiles: usize) -> Self {
        if profiles.is_empty() {
            return Self::with_default_slots(max_profiles);
        }
        let max_profiles = max_profiles.max(profiles.len());
        Self {
            profiles: profiles.into_iter().map(PendingEdit::new).collect(),
            active: 0,
            max_profiles,
        }
    }

    pub fn len(&self) -> usize {
        self.profiles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.profiles.is_empty()
    }

    pub fn max_profiles(&self) -> usize {
        self.max_profiles
    }

    pub fn active_index(&self) -> usize {
        self.active
    }

    /// Committed values of the active profile; this is what the controller reads.
    pub fn active(&self) -> &Profile {
        self.profiles[self.active].committed()
    }

    pub fn active_edit(&self) -> &PendingEdit<Profile> {
        &self.profiles[self.active]
    }

    pub fn active_edit_mut(&mut self) -> &mut PendingEdit<Profile> {
        &mut self.profiles[self.active]
    }

    pub fn profiles(&self) -> impl Iterator<Item = &Profile> {
        self.profiles.iter().map(PendingEdit::committed)
    }

    pub fn names(&self) -> Vec<&str> {
        self.profiles().map(|profile| profile.name.as_str()).collect()
    }

    /// Appends the next numbered slot. Returns its index, or `None` when full.
    pub fn create_profile(&mut self) -> Option<usize> {
        if self.profiles.len() >= self.max_profiles {
            return None;
        }
        let slot = self.profiles.len() + 1;
        self.profiles
            .push(PendingEdit::new(Profile::named(slot.to_string())));
        Some(slot - 1)
    }

    pub fn set_active(&mut self, index: usize) -> bool {
        if index >= self.profiles.len() {
            return false;
        }
        self.active = index;
        true
    }

    pub fn next(&mut self) -> &Profile {
        self.active = (self.active + 1) % self.profiles.len();
        self.active()
    }

    pub fn previous(&mut self) -> &Profile {
        self.active = (self.active + self.profiles.len() - 1) % self.profiles.len();
        self.active()
    }

    /// Validates and commits the active draft. An invalid draft stays pending.
    pub fn commit_active(&mut self) -> Result<(), ProfileError> {
        let edit = &mut self.profiles[self.active];
        edit.draft().validate()?;
        edit.commit();
        Ok(())
    }

    pub fn revert_active(&mut self) {
        self.profiles[self.active].revert();
    }

    /// Commits every valid draft; returns the errors of the ones left pending.
    pub fn commit_all(&mut self) -> Vec<ProfileError> {
        let mut errors = Vec::new();
        for edit in &mut self.profiles {
            match edit.draft().validate() {
                Ok(()) => edit.commit(),
                Err(err) => errors.push(err),
            }
        }
        errors
    }
}

impl Default for ProfileManager {
    fn default() -> Self {
        Self::with_default_slots(crate::DEFAULT_MAX_PROFILES)
    }
}
