//! Property-based tests using proptest.
//!
//! Tests invariants of unit conversion, record encoding and batch
//! reconciliation over generated inputs.

use healthstore_core::metric::Metric;
use healthstore_core::records::*;
use healthstore_core::store::{MemoryStore, Permission};
use healthstore_core::values::*;
use healthstore_core::{OperationResult, RecordsRepo};
use proptest::prelude::*;
use std::sync::Arc;

fn close(a: f64, b: f64) -> bool {
    (a - b).abs() <= 1e-9 * a.abs().max(b.abs()).max(1.0)
}

proptest! {
    // ========================================================================
    // Unit conversion
    // ========================================================================

    #[test]
    fn length_unit_round_trip(x in -1.0e6f64..1.0e6) {
        prop_assert!(close(Length::kilometers(x).as_kilometers(), x));
        prop_assert!(close(Length::feet(x).as_feet(), x));
        prop_assert!(close(Length::inches(Length::miles(x).as_inches()).as_miles(), x));
    }

    #[test]
    fn mass_and_speed_round_trip(x in -1.0e6f64..1.0e6) {
        prop_assert!(close(Mass::pounds(x).as_pounds(), x));
        prop_assert!(close(Mass::grams(Mass::ounces(x).as_grams()).as_ounces(), x));
        prop_assert!(close(Speed::miles_per_hour(x).as_miles_per_hour(), x));
        prop_assert!(close(
            Speed::meters_per_second(Speed::kilometers_per_hour(x).as_meters_per_second())
                .as_kilometers_per_hour(),
            x
        ));
    }

    #[test]
    fn pressure_and_temperature_round_trip(x in -1.0e5f64..1.0e5) {
        prop_assert!(close(Pressure::mm_hg(x).as_mm_hg(), x));
        prop_assert!(close(Pressure::bars(Pressure::in_hg(x).as_bars()).as_in_hg(), x));
        prop_assert!(close(Temperature::fahrenheit(x).as_fahrenheit(), x));
        prop_assert!(close(Temperature::kelvin(Temperature::celsius(x).as_kelvin()).as_celsius(), x));
    }

    #[test]
    fn glucose_mg_dl_survives_mmol_l(n in 0i64..100_000) {
        let glucose = BloodGlucose::mg_dl(n);
        prop_assert_eq!(BloodGlucose::mmol_l(glucose.as_mmol_l()), glucose);
    }

    #[test]
    fn plus_then_minus_is_identity(a in -1.0e6f64..1.0e6, b in -1.0e6f64..1.0e6) {
        let x = Mass::kilograms(a);
        let y = Mass::kilograms(b);
        prop_assert!(close((x + y - y).as_kilograms(), a));
    }

    #[test]
    fn glucose_arithmetic_never_panics(a: i64, b: i64) {
        let sum = BloodGlucose::mg_dl(a) + BloodGlucose::mg_dl(b);
        prop_assert_eq!(sum.as_mg_dl(), a.saturating_add(b));
        let difference = BloodGlucose::mg_dl(a) - BloodGlucose::mg_dl(b);
        prop_assert_eq!(difference.as_mg_dl(), a.saturating_sub(b));
    }

    // ========================================================================
    // Record encoding
    // ========================================================================

    #[test]
    fn record_equality_ignores_id(time: i64, kg in 0.0f64..500.0, id_a: i64, id_b: i64) {
        let mut a = WeightRecord::new(time, Mass::kilograms(kg));
        let mut b = a.clone();
        a.core.id = id_a;
        b.core.id = id_b;
        prop_assert_eq!(a, b);
    }

    #[test]
    fn weight_row_round_trip(time: i64, id in 0i64..i64::MAX, kg in 0.0f64..500.0) {
        let mut record = WeightRecord::new(time, Mass::kilograms(kg));
        record.core.id = id;

        let decoded = BodyRecord::parse_row(&record.to_family_row());
        prop_assert_eq!(decoded.metric(), Metric::Weight);
        prop_assert_eq!(decoded.id(), id);
        prop_assert_eq!(decoded, BodyRecord::Weight(record));
    }

    #[test]
    fn mood_row_round_trip(time: i64, bits: u32, notes in "[a-z ]{0,24}") {
        let record = MoodRecord::new(time, MoodLevel::from_bits_truncate(bits), notes);
        let decoded = MindfulnessRecord::parse_row(&record.to_family_row());
        prop_assert_eq!(decoded, MindfulnessRecord::Mood(record));
    }

    #[test]
    fn glucose_row_round_trip(time: i64, mg_dl: i64, relation in 0i64..3) {
        let record = GlucoseRecord::new(
            time,
            MealRelation::from_raw(relation),
            BloodGlucose::mg_dl(mg_dl),
        );
        let decoded = HeartBloodRecord::parse_row(&record.to_family_row());
        prop_assert_eq!(decoded, HeartBloodRecord::Glucose(record));
    }

    #[test]
    fn unknown_metric_decodes_to_generic(metric_id in 4004i32..5000, time: i64) {
        let record = MindfulnessRecord::from(GenericMindfulnessRecord {
            core: RecordCore::new(time),
            metric_id,
            ..GenericMindfulnessRecord::default()
        });
        let decoded = MindfulnessRecord::parse_row(&record.to_row());
        prop_assert_eq!(decoded.metric(), Metric::Unknown);
        prop_assert_eq!(decoded, record);
    }

    // ========================================================================
    // Batch reconciliation
    // ========================================================================

    #[test]
    fn batch_results_follow_denied_positions(weights in prop::collection::vec(any::<bool>(), 1..12)) {
        let store = Arc::new(MemoryStore::new("p"));
        store.set_permission(Metric::UvIndex.id(), Permission::READ);
        let repo: RecordsRepo<BodyRecord> = RecordsRepo::for_authority(store, "p");

        let mut batch = repo.batch();
        for (i, &weight) in weights.iter().enumerate() {
            if weight {
                batch.insert(WeightRecord::new(i as i64, Mass::kilograms(70.0)));
            } else {
                batch.insert(UvIndexRecord::new(i as i64, Scalar::new(1.0)));
            }
        }

        let results = repo.execute_batch(&batch);
        prop_assert_eq!(results.len(), weights.len());

        let mut next_id = 0;
        for (result, &weight) in results.iter().zip(&weights) {
            if weight {
                next_id += 1;
                prop_assert_eq!(result, &OperationResult::Success(next_id));
            } else {
                prop_assert_eq!(result, &OperationResult::PolicyError);
            }
        }
    }
}
