//! Raid lockout evaluation.
//!
//! The encounters endpoint reports lifetime kill history, not an explicit
//! weekly lock flag. A character counts as *saved* for a boss when its most
//! recent kill falls after the region's last weekly reset.

use chrono::{DateTime, Datelike, Duration, NaiveTime, Utc, Weekday};

use crate::models::{Difficulty, RaidEncounters, RaidMode, Region};

/// Weekly raid-lockout status for one raid difficulty.
#[derive(Debug, Clone)]
pub struct LockoutStatus {
    /// Raid instance name
    pub instance: String,
    /// Difficulty checked
    pub difficulty: Difficulty,
    /// Bosses killed at least once on this difficulty
    pub completed: u32,
    /// Total bosses in the raid
    pub total: u32,
    /// Per-boss kill records
    pub kills: Vec<BossKill>,
}

/// Kill record for one boss, evaluated against the weekly reset.
#[derive(Debug, Clone)]
pub struct BossKill {
    /// Boss name
    pub boss: String,
    /// Most recent kill time
    pub last_kill: DateTime<Utc>,
    /// Whether the kill happened since the last weekly reset
    pub this_reset: bool,
}

impl LockoutStatus {
    /// Whether the character is saved to any boss this reset.
    pub fn saved(&self) -> bool {
        self.kills.iter().any(|k| k.this_reset)
    }

    /// Bosses killed since the last weekly reset.
    pub fn saved_count(&self) -> usize {
        self.kills.iter().filter(|k| k.this_reset).count()
    }

    /// Render a chat-friendly report.
    ///
    /// Boss kill times use Discord's `<t:{secs}:D>` timestamp markup so the
    /// bot output renders in the reader's timezone.
    pub fn report(&self) -> String {
        let mut out = format!(
            "{} [{}]:\n- Progress: {} / {}",
            self.instance, self.difficulty, self.completed, self.total
        );
        for kill in &self.kills {
            let marker = if kill.this_reset { " (saved)" } else { "" };
            out.push_str(&format!(
                "\n- {}: <t:{}:D>{}",
                kill.boss,
                kill.last_kill.timestamp(),
                marker
            ));
        }
        out
    }
}

/// The most recent weekly reset boundary for a region.
///
/// Resets happen at a fixed UTC time each week: Tuesday 15:00 for US,
/// Wednesday 04:00 for EU, Wednesday 22:00 for KR/TW.
pub fn last_weekly_reset(region: Region, now: DateTime<Utc>) -> DateTime<Utc> {
    let (weekday, hour) = reset_schedule(region);

    let days_back =
        (now.weekday().num_days_from_monday() + 7 - weekday.num_days_from_monday()) % 7;
    let midnight = now.date_naive().and_time(NaiveTime::MIN).and_utc();
    let candidate = midnight - Duration::days(i64::from(days_back)) + Duration::hours(hour);

    if candidate > now {
        candidate - Duration::days(7)
    } else {
        candidate
    }
}

fn reset_schedule(region: Region) -> (Weekday, i64) {
    match region {
        Region::Us => (Weekday::Tue, 15),
        Region::Eu => (Weekday::Wed, 4),
        Region::Kr | Region::Tw => (Weekday::Wed, 22),
    }
}

/// Evaluate the lockout for an expansion/instance/difficulty triple.
///
/// Returns `None` when the character has no recorded kills for that
/// combination; the API omits raids without history rather than reporting
/// zeros.
pub fn lockout_status(
    raids: &RaidEncounters,
    expansion: &str,
    instance: &str,
    difficulty: Difficulty,
    region: Region,
    now: DateTime<Utc>,
) -> Option<LockoutStatus> {
    let mode = raids.find_mode(expansion, instance, difficulty)?;
    Some(status_from_mode(instance, difficulty, mode, region, now))
}

fn status_from_mode(
    instance: &str,
    difficulty: Difficulty,
    mode: &RaidMode,
    region: Region,
    now: DateTime<Utc>,
) -> LockoutStatus {
    let reset = last_weekly_reset(region, now);

    let kills = mode
        .progress
        .encounters
        .iter()
        .filter_map(|e| {
            let last_kill = DateTime::from_timestamp_millis(e.last_kill_timestamp)?;
            Some(BossKill {
                boss: e.encounter.name.clone(),
                this_reset: last_kill >= reset,
                last_kill,
            })
        })
        .collect();

    LockoutStatus {
        instance: instance.to_string(),
        difficulty,
        completed: mode.progress.completed_count,
        total: mode.progress.total_count,
        kills,
    }
}

/// Chat message for a raid/difficulty with no recorded data.
pub fn no_data_message(instance: &str, difficulty: Difficulty) -> String {
    format!("No data found for {} [{}]", instance, difficulty)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_eu_reset_after_wednesday() {
        // Friday 2024-09-20 12:00 UTC -> reset was Wednesday 04:00
        let now = Utc.with_ymd_and_hms(2024, 9, 20, 12, 0, 0).unwrap();
        let reset = last_weekly_reset(Region::Eu, now);
        assert_eq!(reset, Utc.with_ymd_and_hms(2024, 9, 18, 4, 0, 0).unwrap());
    }

    #[test]
    fn test_eu_reset_before_wednesday_boundary() {
        // Wednesday 03:59 UTC is still the previous week's lockout
        let now = Utc.with_ymd_and_hms(2024, 9, 18, 3, 59, 0).unwrap();
        let reset = last_weekly_reset(Region::Eu, now);
        assert_eq!(reset, Utc.with_ymd_and_hms(2024, 9, 11, 4, 0, 0).unwrap());
    }

    #[test]
    fn test_us_reset_on_tuesday() {
        // Tuesday 16:00 UTC -> reset happened an hour earlier
        let now = Utc.with_ymd_and_hms(2024, 9, 17, 16, 0, 0).unwrap();
        let reset = last_weekly_reset(Region::Us, now);
        assert_eq!(reset, Utc.with_ymd_and_hms(2024, 9, 17, 15, 0, 0).unwrap());
    }

    fn sample_raids(kill_millis: i64) -> RaidEncounters {
        serde_json::from_value(serde_json::json!({
            "expansions": [{
                "expansion": { "id": 505, "name": "The War Within" },
                "instances": [{
                    "instance": { "id": 1273, "name": "Nerub-ar Palace" },
                    "modes": [{
                        "difficulty": { "type": "HEROIC", "name": "Heroic" },
                        "progress": {
                            "completed_count": 2,
                            "total_count": 8,
                            "encounters": [
                                {
                                    "encounter": { "id": 2607, "name": "Ulgrax the Devourer" },
                                    "completed_count": 5,
                                    "last_kill_timestamp": kill_millis
                                },
                                {
                                    "encounter": { "id": 2611, "name": "The Bloodbound Horror" },
                                    "completed_count": 1,
                                    // Well before any recent reset
                                    "last_kill_timestamp": 1_600_000_000_000i64
                                }
                            ]
                        }
                    }]
                }]
            }]
        }))
        .unwrap()
    }

    #[test]
    fn test_saved_this_reset() {
        // Kill on Thursday, checked on Friday: saved
        let kill = Utc.with_ymd_and_hms(2024, 9, 19, 20, 0, 0).unwrap();
        let now = Utc.with_ymd_and_hms(2024, 9, 20, 12, 0, 0).unwrap();
        let raids = sample_raids(kill.timestamp_millis());

        let status = lockout_status(
            &raids,
            "The War Within",
            "Nerub-ar Palace",
            Difficulty::Heroic,
            Region::Eu,
            now,
        )
        .expect("mode present");

        assert!(status.saved());
        assert_eq!(status.saved_count(), 1);
        assert_eq!(status.completed, 2);
        assert_eq!(status.total, 8);
    }

    #[test]
    fn test_not_saved_after_reset() {
        // Kill on Tuesday, checked after Wednesday's reset: not saved
        let kill = Utc.with_ymd_and_hms(2024, 9, 17, 20, 0, 0).unwrap();
        let now = Utc.with_ymd_and_hms(2024, 9, 19, 12, 0, 0).unwrap();
        let raids = sample_raids(kill.timestamp_millis());

        let status = lockout_status(
            &raids,
            "The War Within",
            "Nerub-ar Palace",
            Difficulty::Heroic,
            Region::Eu,
            now,
        )
        .expect("mode present");

        assert!(!status.saved());
    }

    #[test]
    fn test_missing_combination() {
        let raids = sample_raids(1_700_000_000_000);
        assert!(lockout_status(
            &raids,
            "The War Within",
            "Nerub-ar Palace",
            Difficulty::Mythic,
            Region::Eu,
            Utc::now(),
        )
        .is_none());
    }

    #[test]
    fn test_report_format() {
        let kill = Utc.with_ymd_and_hms(2024, 9, 19, 20, 0, 0).unwrap();
        let now = Utc.with_ymd_and_hms(2024, 9, 20, 12, 0, 0).unwrap();
        let raids = sample_raids(kill.timestamp_millis());

        let status = lockout_status(
            &raids,
            "The War Within",
            "Nerub-ar Palace",
            Difficulty::Heroic,
            Region::Eu,
            now,
        )
        .unwrap();

        let report = status.report();
        assert!(report.starts_with("Nerub-ar Palace [Heroic]:"));
        assert!(report.contains("- Progress: 2 / 8"));
        assert!(report.contains(&format!("<t:{}:D>", kill.timestamp())));
        assert!(report.contains("(saved)"));
    }

    #[test]
    fn test_no_data_message() {
        assert_eq!(
            no_data_message("Nerub-ar Palace", Difficulty::Mythic),
            "No data found for Nerub-ar Palace [Mythic]"
        );
    }
}
