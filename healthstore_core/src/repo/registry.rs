use super::{MedicalProfileRepo, RecordsRepo};
use crate::config::Config;
use crate::records::{
    ActivityRecord, BodyRecord, BreathingRecord, HeartBloodRecord, MindfulnessRecord,
};
use crate::store::Store;
use std::sync::Arc;

/// Every repository of one store, bound to one authority
///
/// An explicitly constructed alternative to the process-wide `instance`
/// repositories.
#[derive(Clone, Debug)]
pub struct HealthStore {
    authority: String,
    activity: RecordsRepo<ActivityRecord>,
    body: RecordsRepo<BodyRecord>,
    breathing: RecordsRepo<BreathingRecord>,
    heart_blood: RecordsRepo<HeartBloodRecord>,
    mindfulness: RecordsRepo<MindfulnessRecord>,
    profile: MedicalProfileRepo,
}

impl HealthStore {
    pub fn new(store: Arc<dyn Store>, authority: &str) -> Self {
        tracing::info!("Opening health store at {}", authority);
        HealthStore {
            authority: authority.to_string(),
            activity: RecordsRepo::for_authority(store.clone(), authority),
            body: RecordsRepo::for_authority(store.clone(), authority),
            breathing: RecordsRepo::for_authority(store.clone(), authority),
            heart_blood: RecordsRepo::for_authority(store.clone(), authority),
            mindfulness: RecordsRepo::for_authority(store.clone(), authority),
            profile: MedicalProfileRepo::for_authority(store, authority),
        }
    }

    pub fn from_config(store: Arc<dyn Store>, config: &Config) -> Self {
        Self::new(store, &config.store.authority)
    }

    pub fn authority(&self) -> &str {
        &self.authority
    }

    pub fn activity(&self) -> &RecordsRepo<ActivityRecord> {
        &self.activity
    }

    pub fn body(&self) -> &RecordsRepo<BodyRecord> {
        &self.body
    }

    pub fn breathing(&self) -> &RecordsRepo<BreathingRecord> {
        &self.breathing
    }

    pub fn heart_blood(&self) -> &RecordsRepo<HeartBloodRecord> {
        &self.heart_blood
    }

    pub fn mindfulness(&self) -> &RecordsRepo<MindfulnessRecord> {
        &self.mindfulness
    }

    pub fn profile(&self) -> &MedicalProfileRepo {
        &self.profile
    }
}
