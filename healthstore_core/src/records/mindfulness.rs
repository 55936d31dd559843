use super::{record_family, MetricRecord, RecordCore};
use crate::columns::*;
use crate::metric::{Metric, MetricFamily};
use crate::store::Row;
use crate::values::{flags_from_column, flags_to_column, MoodLevel};
use serde::{Deserialize, Serialize};

record_family! {
    /// Records of the mindfulness family
    MindfulnessRecord(MetricFamily::Mindfulness) {
        Meditation(MeditationRecord),
        Mood(MoodRecord),
        Sleep(SleepRecord),
    }
    generic GenericMindfulnessRecord,
    cell MINDFULNESS_REPO
}

/// A meditation session
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MeditationRecord {
    pub core: RecordCore,
    /// Milliseconds
    pub duration: i64,
}

impl MeditationRecord {
    pub fn new(time: i64, duration: i64) -> Self {
        MeditationRecord {
            core: RecordCore::new(time),
            duration,
        }
    }
}

impl MetricRecord for MeditationRecord {
    type Family = MindfulnessRecord;
    const METRIC: Metric = Metric::Meditation;

    fn core(&self) -> &RecordCore {
        &self.core
    }

    fn write_columns(&self, row: &mut Row) {
        row.set(DURATION, self.duration);
    }

    fn read_columns(core: RecordCore, row: &Row) -> Self {
        MeditationRecord {
            core,
            duration: row.get_i64(DURATION),
        }
    }
}

/// How the user felt
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MoodRecord {
    pub core: RecordCore,
    pub mood: MoodLevel,
    pub notes: String,
}

impl MoodRecord {
    pub fn new(time: i64, mood: MoodLevel, notes: impl Into<String>) -> Self {
        MoodRecord {
            core: RecordCore::new(time),
            mood,
            notes: notes.into(),
        }
    }
}

impl MetricRecord for MoodRecord {
    type Family = MindfulnessRecord;
    const METRIC: Metric = Metric::Mood;

    fn core(&self) -> &RecordCore {
        &self.core
    }

    fn write_columns(&self, row: &mut Row) {
        row.set(MOOD, flags_to_column(self.mood));
        row.set(NOTES, self.notes.as_str());
    }

    fn read_columns(core: RecordCore, row: &Row) -> Self {
        MoodRecord {
            core,
            mood: flags_from_column(row.get_i64(MOOD)),
            notes: row.get_string(NOTES),
        }
    }
}

/// A night of sleep
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SleepRecord {
    pub core: RecordCore,
    /// Milliseconds
    pub duration: i64,
}

impl SleepRecord {
    pub fn new(time: i64, duration: i64) -> Self {
        SleepRecord {
            core: RecordCore::new(time),
            duration,
        }
    }
}

impl MetricRecord for SleepRecord {
    type Family = MindfulnessRecord;
    const METRIC: Metric = Metric::Sleep;

    fn core(&self) -> &RecordCore {
        &self.core
    }

    fn write_columns(&self, row: &mut Row) {
        row.set(DURATION, self.duration);
    }

    fn read_columns(core: RecordCore, row: &Row) -> Self {
        SleepRecord {
            core,
            duration: row.get_i64(DURATION),
        }
    }
}

/// Mindfulness row whose metric this library does not know
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct GenericMindfulnessRecord {
    pub core: RecordCore,
    pub metric_id: i32,
    pub duration: i64,
    pub mood: MoodLevel,
    pub notes: String,
}

impl GenericMindfulnessRecord {
    fn read(metric_id: i32, core: RecordCore, row: &Row) -> Self {
        GenericMindfulnessRecord {
            core,
            metric_id,
            duration: row.get_i64(DURATION),
            mood: flags_from_column(row.get_i64(MOOD)),
            notes: row.get_string(NOTES),
        }
    }

    fn write_columns(&self, row: &mut Row) {
        row.set(DURATION, self.duration);
        row.set(MOOD, flags_to_column(self.mood));
        row.set(NOTES, self.notes.as_str());
    }
}
