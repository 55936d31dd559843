use super::{record_family, MetricRecord, RecordCore};
use crate::columns::*;
use crate::metric::{Metric, MetricFamily};
use crate::store::Row;
use crate::values::{Length, Scalar, Speed};
use serde::{Deserialize, Serialize};

record_family! {
    /// Records of the activity family
    ActivityRecord(MetricFamily::Activity) {
        Cycling(CyclingRecord),
        Running(RunningRecord),
        Walking(WalkingRecord),
        Workout(WorkoutRecord),
    }
    generic GenericActivityRecord,
    cell ACTIVITY_REPO
}

/// A bike ride
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CyclingRecord {
    pub core: RecordCore,
    /// Milliseconds
    pub duration: i64,
    pub avg_speed: Speed,
    pub distance: Length,
    pub elevation_gain: Length,
}

impl CyclingRecord {
    pub fn new(
        time: i64,
        duration: i64,
        avg_speed: Speed,
        distance: Length,
        elevation_gain: Length,
    ) -> Self {
        CyclingRecord {
            core: RecordCore::new(time),
            duration,
            avg_speed,
            distance,
            elevation_gain,
        }
    }
}

impl MetricRecord for CyclingRecord {
    type Family = ActivityRecord;
    const METRIC: Metric = Metric::Cycling;

    fn core(&self) -> &RecordCore {
        &self.core
    }

    fn write_columns(&self, row: &mut Row) {
        row.set(DURATION, self.duration);
        row.set(AVG_SPEED, self.avg_speed.as_meters_per_second());
        row.set(DISTANCE, self.distance.as_meters());
        row.set(ELEVATION_GAIN, self.elevation_gain.as_meters());
    }

    fn read_columns(core: RecordCore, row: &Row) -> Self {
        CyclingRecord {
            core,
            duration: row.get_i64(DURATION),
            avg_speed: Speed::meters_per_second(row.get_f64(AVG_SPEED)),
            distance: Length::meters(row.get_f64(DISTANCE)),
            elevation_gain: Length::meters(row.get_f64(ELEVATION_GAIN)),
        }
    }
}

/// A run
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RunningRecord {
    pub core: RecordCore,
    /// Milliseconds
    pub duration: i64,
    pub avg_speed: Speed,
    pub distance: Length,
}

impl RunningRecord {
    pub fn new(time: i64, duration: i64, avg_speed: Speed, distance: Length) -> Self {
        RunningRecord {
            core: RecordCore::new(time),
            duration,
            avg_speed,
            distance,
        }
    }
}

impl MetricRecord for RunningRecord {
    type Family = ActivityRecord;
    const METRIC: Metric = Metric::Running;

    fn core(&self) -> &RecordCore {
        &self.core
    }

    fn write_columns(&self, row: &mut Row) {
        row.set(DURATION, self.duration);
        row.set(AVG_SPEED, self.avg_speed.as_meters_per_second());
        row.set(DISTANCE, self.distance.as_meters());
    }

    fn read_columns(core: RecordCore, row: &Row) -> Self {
        RunningRecord {
            core,
            duration: row.get_i64(DURATION),
            avg_speed: Speed::meters_per_second(row.get_f64(AVG_SPEED)),
            distance: Length::meters(row.get_f64(DISTANCE)),
        }
    }
}

/// A walk
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct WalkingRecord {
    pub core: RecordCore,
    /// Milliseconds
    pub duration: i64,
    pub distance: Length,
    pub steps: i64,
}

impl WalkingRecord {
    pub fn new(time: i64, duration: i64, distance: Length, steps: i64) -> Self {
        WalkingRecord {
            core: RecordCore::new(time),
            duration,
            distance,
            steps,
        }
    }
}

impl MetricRecord for WalkingRecord {
    type Family = ActivityRecord;
    const METRIC: Metric = Metric::Walking;

    fn core(&self) -> &RecordCore {
        &self.core
    }

    fn write_columns(&self, row: &mut Row) {
        row.set(DURATION, self.duration);
        row.set(DISTANCE, self.distance.as_meters());
        row.set(STEPS, self.steps);
    }

    fn read_columns(core: RecordCore, row: &Row) -> Self {
        WalkingRecord {
            core,
            duration: row.get_i64(DURATION),
            distance: Length::meters(row.get_f64(DISTANCE)),
            steps: row.get_i64(STEPS),
        }
    }
}

/// A generic training session
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct WorkoutRecord {
    pub core: RecordCore,
    /// Milliseconds
    pub duration: i64,
    /// Kilocalories
    pub calories: Scalar,
    pub notes: String,
}

impl WorkoutRecord {
    pub fn new(time: i64, duration: i64, calories: f64, notes: impl Into<String>) -> Self {
        WorkoutRecord {
            core: RecordCore::new(time),
            duration,
            calories: Scalar::new(calories),
            notes: notes.into(),
        }
    }
}

impl MetricRecord for WorkoutRecord {
    type Family = ActivityRecord;
    const METRIC: Metric = Metric::Workout;

    fn core(&self) -> &RecordCore {
        &self.core
    }

    fn write_columns(&self, row: &mut Row) {
        row.set(DURATION, self.duration);
        row.set(CALORIES, self.calories.value());
        row.set(NOTES, self.notes.as_str());
    }

    fn read_columns(core: RecordCore, row: &Row) -> Self {
        WorkoutRecord {
            core,
            duration: row.get_i64(DURATION),
            calories: Scalar::new(row.get_f64(CALORIES)),
            notes: row.get_string(NOTES),
        }
    }
}

/// Activity row whose metric this library does not know
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct GenericActivityRecord {
    pub core: RecordCore,
    pub metric_id: i32,
    pub duration: i64,
    pub avg_speed: Speed,
    pub calories: Scalar,
    pub distance: Length,
    pub elevation_gain: Length,
    pub notes: String,
    pub steps: i64,
}

impl GenericActivityRecord {
    fn read(metric_id: i32, core: RecordCore, row: &Row) -> Self {
        GenericActivityRecord {
            core,
            metric_id,
            duration: row.get_i64(DURATION),
            avg_speed: Speed::meters_per_second(row.get_f64(AVG_SPEED)),
            calories: Scalar::new(row.get_f64(CALORIES)),
            distance: Length::meters(row.get_f64(DISTANCE)),
            elevation_gain: Length::meters(row.get_f64(ELEVATION_GAIN)),
            notes: row.get_string(NOTES),
            steps: row.get_i64(STEPS),
        }
    }

    fn write_columns(&self, row: &mut Row) {
        row.set(DURATION, self.duration);
        row.set(AVG_SPEED, self.avg_speed.as_meters_per_second());
        row.set(CALORIES, self.calories.value());
        row.set(DISTANCE, self.distance.as_meters());
        row.set(ELEVATION_GAIN, self.elevation_gain.as_meters());
        row.set(NOTES, self.notes.as_str());
        row.set(STEPS, self.steps);
    }
}
