use std::{
    collections::BTreeMap,
    sync::{Arc, PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard},
};

use thiserror::Error;
use uom::si::f64::Angle;

use super::{AirfoilProfile, catalog};

/// Error returned when a profile identifier is not in the repository.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("profile '{id}' not found; available profiles: {}", .available.join(", "))]
pub struct ProfileNotFound {
    /// The identifier that was requested.
    pub id: String,

    /// Identifiers present at the time of the lookup, sorted.
    pub available: Vec<String>,
}

/// Errors that can occur while removing a profile.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RemoveError {
    /// Built-in NACA sections cannot be removed.
    #[error("standard profile '{0}' cannot be removed")]
    Standard(String),

    /// No profile with the requested identifier exists.
    #[error(transparent)]
    NotFound(#[from] ProfileNotFound),
}

/// In-memory store of airfoil profiles keyed by identifier.
///
/// Models only read from the repository. Loaders and user interfaces add or
/// remove profiles through the same shared reference; a reader/writer lock
/// guards the map and each profile is held behind an [`Arc`], so a lookup
/// observes either the state before an edit or the state after it.
#[derive(Debug, Default)]
pub struct ProfileRepository {
    profiles: RwLock<BTreeMap<String, Arc<AirfoilProfile>>>,
}

impl ProfileRepository {
    /// Creates an empty repository.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a repository seeded with the built-in NACA sections.
    #[must_use]
    pub fn standard() -> Self {
        catalog::standard_profiles().into_iter().collect()
    }

    /// Returns the profile stored under `id`.
    ///
    /// # Errors
    ///
    /// Returns [`ProfileNotFound`], listing the available identifiers, if no
    /// profile is stored under `id`.
    pub fn get(&self, id: &str) -> Result<Arc<AirfoilProfile>, ProfileNotFound> {
        let profiles = self.read();
        profiles
            .get(id)
            .cloned()
            .ok_or_else(|| ProfileNotFound {
                id: id.to_owned(),
                available: profiles.keys().cloned().collect(),
            })
    }

    #[must_use]
    pub fn contains(&self, id: &str) -> bool {
        self.read().contains_key(id)
    }

    /// Returns the angle of the maximum-lift sample, or `None` for an unknown id.
    #[must_use]
    pub fn stall_angle(&self, id: &str) -> Option<Angle> {
        self.read().get(id).map(|profile| profile.stall_angle())
    }

    /// Identifiers of all stored profiles, sorted.
    #[must_use]
    pub fn ids(&self) -> Vec<String> {
        self.read().keys().cloned().collect()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.read().len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.read().is_empty()
    }

    /// Stores a profile under its own identifier.
    ///
    /// Returns the profile previously stored under that identifier, if any.
    pub fn insert(&self, profile: AirfoilProfile) -> Option<Arc<AirfoilProfile>> {
        self.write()
            .insert(profile.id().to_owned(), Arc::new(profile))
    }

    /// Stores a profile without replacing an existing one.
    ///
    /// If the identifier is taken, the profile is renamed `ID_1`, `ID_2`, ...
    /// using the first free suffix. Returns the identifier it was stored under.
    pub fn insert_unique(&self, profile: AirfoilProfile) -> String {
        let mut profiles = self.write();

        let base = profile.id().to_owned();
        let mut id = base.clone();
        let mut counter = 1;
        while profiles.contains_key(&id) {
            id = format!("{base}_{counter}");
            counter += 1;
        }

        profiles.insert(id.clone(), Arc::new(profile.with_id(id.clone())));
        id
    }

    /// Removes a custom profile.
    ///
    /// # Errors
    ///
    /// Returns [`RemoveError::Standard`] for a built-in NACA identifier and
    /// [`RemoveError::NotFound`] if no profile is stored under `id`.
    pub fn remove(&self, id: &str) -> Result<Arc<AirfoilProfile>, RemoveError> {
        if catalog::is_standard(id) {
            return Err(RemoveError::Standard(id.to_owned()));
        }

        let mut profiles = self.write();
        profiles.remove(id).ok_or_else(|| {
            RemoveError::NotFound(ProfileNotFound {
                id: id.to_owned(),
                available: profiles.keys().cloned().collect(),
            })
        })
    }

    // Writers replace whole entries, so a poisoned map is still consistent.
    fn read(&self) -> RwLockReadGuard<'_, BTreeMap<String, Arc<AirfoilProfile>>> {
        self.profiles.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, BTreeMap<String, Arc<AirfoilProfile>>> {
        self.profiles.write().unwrap_or_else(PoisonError::into_inner)
    }
}

impl FromIterator<AirfoilProfile> for ProfileRepository {
    fn from_iter<I: IntoIterator<Item = AirfoilProfile>>(iter: I) -> Self {
        let profiles = iter
            .into_iter()
            .map(|profile| (profile.id().to_owned(), Arc::new(profile)))
            .collect();
        Self {
            profiles: RwLock::new(profiles),
        }
    }
}
