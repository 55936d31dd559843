use super::OperationResult;
use crate::columns;
use crate::config::DEFAULT_AUTHORITY;
use crate::metric::PROFILE_PATH;
use crate::profile::MedicalProfile;
use crate::store::{Store, StoreUri, DENIED_RESULT};
use once_cell::sync::OnceCell;
use std::fmt;
use std::sync::Arc;

static PROFILE_REPO: OnceCell<MedicalProfileRepo> = OnceCell::new();

/// Repository for the single medical profile row
#[derive(Clone)]
pub struct MedicalProfileRepo {
    store: Arc<dyn Store>,
    uri: StoreUri,
}

impl fmt::Debug for MedicalProfileRepo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MedicalProfileRepo").field("uri", &self.uri).finish()
    }
}

impl MedicalProfileRepo {
    pub fn for_authority(store: Arc<dyn Store>, authority: &str) -> Self {
        MedicalProfileRepo {
            store,
            uri: StoreUri::base(authority, PROFILE_PATH),
        }
    }

    /// Process-wide repository bound to the default authority
    pub fn instance(store: Arc<dyn Store>) -> &'static MedicalProfileRepo {
        PROFILE_REPO.get_or_init(|| Self::for_authority(store, DEFAULT_AUTHORITY))
    }

    pub fn uri(&self) -> &StoreUri {
        &self.uri
    }

    /// The stored profile, or the default one if none was ever set
    pub fn get(&self) -> MedicalProfile {
        self.store
            .query(&self.uri, Some(columns::profile::ALL), None)
            .and_then(|rows| rows.first().map(MedicalProfile::from_row))
            .unwrap_or_default()
    }

    /// Replace the stored profile
    pub fn set(&self, profile: &MedicalProfile) -> OperationResult<()> {
        let result = match self.store.insert(&self.uri, profile.to_row()) {
            None => OperationResult::Failure,
            Some(uri) if uri.is_empty() => OperationResult::PolicyError,
            Some(_) => OperationResult::Success(()),
        };
        if !result.is_success() {
            tracing::warn!("Setting medical profile at {}: {:?}", self.uri, result);
        }
        result
    }

    /// Remove the stored profile
    ///
    /// Fails when there was nothing to remove.
    pub fn reset(&self) -> OperationResult<()> {
        match self.store.delete(&self.uri) {
            1 => OperationResult::Success(()),
            DENIED_RESULT => OperationResult::PolicyError,
            count => {
                tracing::debug!("Profile reset removed {} rows", count);
                OperationResult::Failure
            }
        }
    }
}
