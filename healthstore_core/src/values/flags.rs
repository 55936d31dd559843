//! Bit-flag value domains.
//!
//! `from_bits` validates membership; rows coming back from the store are
//! decoded with unknown bits dropped.

use bitflags::Flags;

bitflags::bitflags! {
    /// How the user felt. The empty set means "unknown".
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    #[derive(serde::Serialize, serde::Deserialize)]
    pub struct MoodLevel: u32 {
        const AMAZING = 1;
        const HAPPY = 1 << 1;
        const EXCITED = 1 << 2;
        const STRESSED = 1 << 3;
        const FOCUSED = 1 << 4;
        const TIRED = 1 << 5;
        const SAD = 1 << 6;
        const SICK = 1 << 7;
        const EXHAUSTED = 1 << 8;
        const NERVOUS = 1 << 9;
        const ANGRY = 1 << 10;
    }
}

bitflags::bitflags! {
    /// Non-physical menstrual cycle symptoms. The empty set means "none".
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    #[derive(serde::Serialize, serde::Deserialize)]
    pub struct MenstrualCycleOtherSymptoms: u32 {
        const ANXIETY = 1;
        const CRYING_SPELLS = 1 << 1;
        const DEPRESSION = 1 << 2;
        const HIGH_SEX_DRIVE = 1 << 3;
        const INSOMNIA = 1 << 4;
        const MOOD_SWINGS = 1 << 5;
        const POOR_CONCENTRATION = 1 << 6;
        const SOCIAL_WITHDRAWAL = 1 << 7;
    }
}

bitflags::bitflags! {
    /// Physical menstrual cycle symptoms. The empty set means "none".
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    #[derive(serde::Serialize, serde::Deserialize)]
    pub struct MenstrualCyclePhysicalSymptoms: u32 {
        const ACNE = 1;
        const BLOATING = 1 << 1;
        const CRAMPS = 1 << 2;
        const CONSTIPATION = 1 << 3;
        const FATIGUE = 1 << 4;
        const HEADACHE = 1 << 5;
        const JOINT_MUSCLE_PAIN = 1 << 6;
        const SPOTTING = 1 << 7;
        const TENDER_BREASTS = 1 << 8;
    }
}

bitflags::bitflags! {
    /// Sexual activity during a menstrual cycle day. The empty set means "none".
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    #[derive(serde::Serialize, serde::Deserialize)]
    pub struct SexualActivity: u32 {
        const MASTURBATION = 1;
        const NO_SEX = 1 << 1;
        const PROTECTED_SEX = 1 << 2;
        const SEX = 1 << 3;
    }
}

impl MoodLevel {
    pub const UNKNOWN: MoodLevel = MoodLevel::empty();
}

impl MenstrualCycleOtherSymptoms {
    pub const NONE: MenstrualCycleOtherSymptoms = MenstrualCycleOtherSymptoms::empty();
}

impl MenstrualCyclePhysicalSymptoms {
    pub const NONE: MenstrualCyclePhysicalSymptoms = MenstrualCyclePhysicalSymptoms::empty();
}

impl SexualActivity {
    pub const NONE: SexualActivity = SexualActivity::empty();
}

/// Decode a flag column, dropping bits outside the domain
pub(crate) fn flags_from_column<F: Flags<Bits = u32>>(raw: i64) -> F {
    F::from_bits_truncate(u32::try_from(raw).unwrap_or(0))
}

/// Encode a flag set as a column value
pub(crate) fn flags_to_column<F: Flags<Bits = u32>>(flags: F) -> i64 {
    i64::from(flags.bits())
}
