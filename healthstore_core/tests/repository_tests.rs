//! End-to-end tests of the repositories against the in-memory store.
//!
//! These tests verify that:
//! - Writes reconcile store sentinels into typed results
//! - Batches report results by position
//! - Reads treat absence as empty, never as failure
//! - Store contents survive a save and reopen

use healthstore_core::metric::Metric;
use healthstore_core::records::*;
use healthstore_core::store::{MemoryStore, Permission, Store};
use healthstore_core::values::*;
use healthstore_core::{Config, HealthStore, MedicalProfile, OperationResult};
use std::sync::Arc;
use tempfile::TempDir;

const AUTHORITY: &str = "org.example.health";

fn setup() -> (Arc<MemoryStore>, HealthStore) {
    let store = Arc::new(MemoryStore::new(AUTHORITY));
    let health = HealthStore::new(store.clone(), AUTHORITY);
    (store, health)
}

#[test]
fn test_insert_new_record_gets_store_id() {
    let (_, health) = setup();
    let record = RunningRecord::new(
        1_700_000_000_000,
        1_800_000,
        Speed::kilometers_per_hour(10.0),
        Length::kilometers(5.0),
    );
    assert_eq!(record.core.id, 0);

    assert_eq!(health.activity().insert(record.clone()), OperationResult::Success(1));
    assert_eq!(health.activity().insert(record), OperationResult::Success(2));
}

#[test]
fn test_stored_record_equals_original() {
    let (_, health) = setup();
    let record = CyclingRecord::new(
        5_000,
        3_600_000,
        Speed::meters_per_second(7.5),
        Length::kilometers(27.0),
        Length::meters(310.0),
    );

    let id = health.activity().insert(record.clone()).success().unwrap();
    let stored: CyclingRecord = health.activity().record_of(id).unwrap();

    // Equality ignores the id the store assigned
    assert_eq!(stored.core.id, id);
    assert_eq!(stored, record);
    assert_eq!(stored.distance.as_meters(), 27_000.0);
}

#[test]
fn test_empty_read_is_not_failure() {
    let (_, health) = setup();
    assert!(health.heart_blood().get_by_metric(Metric::HeartRate).is_empty());
    assert!(health.heart_blood().get_all().is_empty());
    assert!(health.heart_blood().get_by_id(Metric::HeartRate, 1).is_none());
    assert!(health.breathing().records_of::<VitalCapacityRecord>().is_empty());
}

#[test]
fn test_get_all_sorted_by_time_across_metrics() {
    let (_, health) = setup();
    let repo = health.mindfulness();
    repo.insert(SleepRecord::new(300, 28_800_000));
    repo.insert(MoodRecord::new(100, MoodLevel::HAPPY, ""));
    repo.insert(MeditationRecord::new(200, 600_000));
    repo.insert(MoodRecord::new(400, MoodLevel::TIRED, "late"));

    let metrics: Vec<Metric> = repo.get_all().iter().map(|r| r.metric()).collect();
    assert_eq!(
        metrics,
        vec![Metric::Mood, Metric::Meditation, Metric::Sleep, Metric::Mood]
    );

    let moods: Vec<i64> = repo.records_of::<MoodRecord>().iter().map(|r| r.core.time).collect();
    assert_eq!(moods, vec![400, 100]);
}

#[test]
fn test_policy_denial_is_distinct_from_failure() {
    let (store, health) = setup();
    let repo = health.heart_blood();
    let id = repo
        .insert(HeartRateRecord::new(1, Scalar::new(62.0)))
        .success()
        .unwrap();
    store.set_permission(Metric::HeartRate.id(), Permission::READ);

    let stored: HeartRateRecord = repo.record_of(id).unwrap();
    assert_eq!(repo.insert(HeartRateRecord::new(2, Scalar::new(64.0))), OperationResult::PolicyError);
    assert_eq!(repo.update(stored.clone()), OperationResult::PolicyError);
    assert_eq!(repo.delete(stored), OperationResult::PolicyError);

    // A row that does not exist is a failure, not a denial
    let missing = HeartBloodRecord::from(GlucoseRecord::new(
        3,
        MealRelation::Before,
        BloodGlucose::mg_dl(95),
    ));
    assert_eq!(repo.delete(missing), OperationResult::Failure);
}

#[test]
fn test_denied_reads_are_empty() {
    let (store, health) = setup();
    health
        .body()
        .insert(WeightRecord::new(1, Mass::kilograms(70.0)));
    store.set_permission(Metric::Weight.id(), Permission::WRITE);

    assert!(health.body().get_by_metric(Metric::Weight).is_empty());
    assert_eq!(
        health.body().insert(WeightRecord::new(2, Mass::kilograms(71.0))),
        OperationResult::Success(2)
    );
}

#[test]
fn test_batch_results_align_with_operations() {
    let (store, health) = setup();
    let repo = health.body();
    let b = repo
        .insert(UvIndexRecord::new(10, Scalar::new(6.0)))
        .success()
        .unwrap();
    let c = repo
        .insert(WeightRecord::new(20, Mass::kilograms(80.0)))
        .success()
        .unwrap();
    store.set_permission(Metric::UvIndex.id(), Permission::READ);

    let b: UvIndexRecord = repo.record_of(b).unwrap();
    let c: WeightRecord = repo.record_of(c).unwrap();

    let mut batch = repo.batch();
    batch
        .insert(WeightRecord::new(30, Mass::kilograms(79.5)))
        .update(b)
        .delete(c);
    let results = repo.execute_batch(&batch);

    assert_eq!(
        results,
        vec![
            OperationResult::Success(3),
            OperationResult::PolicyError,
            OperationResult::Success(1),
        ]
    );
    let weights: Vec<WeightRecord> = repo.records_of();
    assert_eq!(weights.len(), 1);
    assert_eq!(weights[0].value, Mass::kilograms(79.5));
}

#[test]
fn test_batch_transport_failure_fails_every_operation() {
    let (store, health) = setup();
    store.set_fail_batches(true);

    let results = health.breathing().execute_batch_with(|batch| {
        batch
            .insert(InhalerUsageRecord::new(1, "morning"))
            .insert(OxygenSaturationRecord::new(2, Scalar::percent(98.0)))
            .insert(RespiratoryRateRecord::new(3, Scalar::new(14.0)));
    });
    assert_eq!(results, vec![OperationResult::Failure; 3]);
    assert_eq!(store.record_count(), 0);
}

#[test]
fn test_batched_and_single_writes_are_equivalent() {
    let (single_store, single) = setup();
    let (batch_store, batched) = setup();
    let record = WalkingRecord::new(9, 1_200_000, Length::miles(1.0), 2_100);

    single.activity().insert(record.clone());
    batched.activity().execute_batch_with(|batch| {
        batch.insert(record.clone());
    });

    let a = single_store.query(single.activity().base_uri(), None, None);
    let b = batch_store.query(batched.activity().base_uri(), None, None);
    assert_eq!(a, b);
    assert_eq!(a.map(|rows| rows.len()), Some(1));
}

#[test]
fn test_delete_all_empties_family() {
    let (_, health) = setup();
    let repo = health.heart_blood();
    repo.insert(BloodPressureRecord::new(1, Pressure::mm_hg(120.0), Pressure::mm_hg(80.0)));
    repo.insert(GlucoseRecord::new(2, MealRelation::After, BloodGlucose::mmol_l(6.1)));
    repo.insert(PerfusionIndexRecord::new(3, Scalar::new(0.04)));
    health.body().insert(WeightRecord::new(4, Mass::kilograms(70.0)));

    assert!(repo.delete_all());
    assert!(repo.get_all().is_empty());
    assert_eq!(health.body().get_all().len(), 1);
}

#[test]
fn test_medical_profile() {
    let (_, health) = setup();
    assert_eq!(health.profile().get(), MedicalProfile::default());

    let profile = MedicalProfile {
        allergies: "peanuts".into(),
        blood_type: BloodType::BNeg,
        height: Length::centimeters(168.0),
        medications: "none".into(),
        notes: String::new(),
        organ_donor: OrganDonor::Yes,
        biological_sex: BiologicalSex::Male,
    };
    assert!(health.profile().set(&profile).is_success());
    assert_eq!(health.profile().get(), profile);
    assert!(health.profile().reset().is_success());
    assert_eq!(health.profile().get(), MedicalProfile::default());
}

#[test]
fn test_registry_from_config() {
    let config: Config = toml::from_str("[store]\nauthority = \"org.example.health\"\n").unwrap();
    let store = Arc::new(MemoryStore::new(AUTHORITY));
    let health = HealthStore::from_config(store, &config);

    assert!(health
        .body()
        .insert(WeightRecord::new(1, Mass::pounds(150.0)))
        .is_success());
}

#[test]
fn test_wrong_authority_fails() {
    let store = Arc::new(MemoryStore::new(AUTHORITY));
    let health = HealthStore::new(store, "org.other");

    assert_eq!(
        health.body().insert(WeightRecord::new(1, Mass::kilograms(70.0))),
        OperationResult::Failure
    );
    assert!(health.body().get_all().is_empty());
}

#[test]
fn test_contents_survive_reopen() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("health.json");

    let (store, health) = setup();
    health
        .mindfulness()
        .insert(MoodRecord::new(50, MoodLevel::EXCITED | MoodLevel::FOCUSED, "walk"));
    health.body().insert(WeightRecord::new(60, Mass::kilograms(72.0)));
    store.save_to(&path).unwrap();

    let reopened = Arc::new(MemoryStore::open(&path).unwrap());
    let health = HealthStore::new(reopened, AUTHORITY);

    let moods: Vec<MoodRecord> = health.mindfulness().records_of();
    assert_eq!(moods.len(), 1);
    assert!(moods[0].mood.contains(MoodLevel::EXCITED));
    assert_eq!(moods[0].notes, "walk");
    assert_eq!(
        health.body().insert(WeightRecord::new(70, Mass::kilograms(72.5))),
        OperationResult::Success(2)
    );
}

#[test]
fn test_non_finite_values_survive_reopen() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("health.json");

    let (store, health) = setup();
    let id = health
        .body()
        .insert(WeightRecord::new(1, Mass::kilograms(f64::NAN)))
        .success()
        .unwrap();
    health
        .body()
        .insert(BodyTemperatureRecord::new(2, Temperature::celsius(f64::INFINITY)));
    store.save_to(&path).unwrap();

    let health = HealthStore::new(Arc::new(MemoryStore::open(&path).unwrap()), AUTHORITY);
    let weight: WeightRecord = health.body().record_of(id).unwrap();
    assert!(weight.value.as_kilograms().is_nan());

    let temperatures: Vec<BodyTemperatureRecord> = health.body().records_of();
    assert_eq!(temperatures[0].value.as_celsius(), f64::INFINITY);
}

