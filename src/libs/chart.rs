//! Goal progress chart model.
//!
//! The dashboard renders goal completion as a three-ring donut: daily is
//! the innermost ring, monthly the outermost, with ring extent derived
//! from the donut cutout radii (70%/55%/40%). The terminal rendition keeps
//! the same structure as one bar per ring whose length grows with the
//! ring radius, and the same labelling rule: only the completed segment
//! gets a caption, the remainder stays silent.

use console::Color;
use serde::Deserialize;

/// Completed/total counts for one goal period. Read-only on the client.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
pub struct PeriodStats {
    pub completed: u32,
    pub total: u32,
}

impl PeriodStats {
    /// Remaining count, clamped at zero when the server reports more
    /// completions than totals.
    pub fn remaining(&self) -> u32 {
        self.total.saturating_sub(self.completed)
    }

    /// Completion percentage, rounded to the nearest whole number.
    /// A period with no goals is 0%, never a division by zero.
    pub fn percentage(&self) -> u32 {
        if self.total == 0 {
            return 0;
        }
        ((self.completed as f64 / self.total as f64) * 100.0).round() as u32
    }

    /// Caption for the completed segment: "2/5 (40%)".
    pub fn caption(&self) -> String {
        format!("{}/{} ({}%)", self.completed, self.total, self.percentage())
    }
}

/// The `/todo_stats` snapshot: one [`PeriodStats`] per goal period.
#[derive(Debug, Clone, Copy, Default, Deserialize)]
pub struct GoalStats {
    #[serde(default)]
    pub daily: PeriodStats,
    #[serde(default)]
    pub weekly: PeriodStats,
    #[serde(default)]
    pub monthly: PeriodStats,
}

impl GoalStats {
    /// Aggregate across all three periods, used for the summary line.
    pub fn overall(&self) -> PeriodStats {
        PeriodStats {
            completed: self.daily.completed + self.weekly.completed + self.monthly.completed,
            total: self.daily.total + self.weekly.total + self.monthly.total,
        }
    }
}

/// One donut ring: a labelled period with its fixed colors and cutout.
#[derive(Debug, Clone, Copy)]
pub struct Ring {
    pub label: &'static str,
    pub stats: PeriodStats,
    /// Donut cutout radius in percent; a larger cutout means a ring
    /// closer to the center.
    pub cutout: u32,
    pub completed_color: Color,
    pub remaining_color: Color,
}

impl Ring {
    /// Bar length for this ring at the given chart width. The extent is
    /// the part of the radius outside the cutout, so outer rings render
    /// longer bars and the nesting stays visible.
    pub fn extent(&self, width: usize) -> usize {
        width * (100 - self.cutout as usize) / 100
    }

    /// Number of filled cells within the extent for the completed
    /// segment. Zero when the period has no goals.
    pub fn filled(&self, extent: usize) -> usize {
        if self.stats.total == 0 {
            return 0;
        }
        let ratio = self.stats.completed as f64 / self.stats.total as f64;
        ((extent as f64) * ratio).round() as usize
    }
}

/// Builds the three rings in drawing order, innermost first, with the
/// dashboard's fixed color pairs.
pub fn rings(stats: &GoalStats) -> [Ring; 3] {
    [
        Ring {
            label: "Daily Goals",
            stats: stats.daily,
            cutout: 70,
            completed_color: Color::Color256(107), // muted green
            remaining_color: Color::Color256(252),
        },
        Ring {
            label: "Weekly Goals",
            stats: stats.weekly,
            cutout: 55,
            completed_color: Color::Color256(214), // amber
            remaining_color: Color::Color256(254),
        },
        Ring {
            label: "Monthly Goals",
            stats: stats.monthly,
            cutout: 40,
            completed_color: Color::Color256(69), // cornflower blue
            remaining_color: Color::Color256(253),
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    fn stats(completed: u32, total: u32) -> PeriodStats {
        PeriodStats { completed, total }
    }

    #[test]
    fn percentage_rounds_to_nearest() {
        assert_eq!(stats(1, 3).percentage(), 33);
        assert_eq!(stats(2, 3).percentage(), 67);
        assert_eq!(stats(5, 5).percentage(), 100);
    }

    #[test]
    fn empty_period_is_zero_percent() {
        assert_eq!(stats(0, 0).percentage(), 0);
        assert_eq!(stats(0, 0).caption(), "0/0 (0%)");
    }

    #[test]
    fn remaining_clamps_at_zero() {
        assert_eq!(stats(7, 5).remaining(), 0);
        assert_eq!(stats(2, 5).remaining(), 3);
    }

    #[test]
    fn overall_sums_all_periods() {
        let goal_stats = GoalStats {
            daily: stats(1, 2),
            weekly: stats(2, 3),
            monthly: stats(0, 5),
        };
        let overall = goal_stats.overall();
        assert_eq!(overall.completed, 3);
        assert_eq!(overall.total, 10);
        assert_eq!(overall.percentage(), 30);
    }

    #[test]
    fn outer_rings_extend_further() {
        let goal_stats = GoalStats::default();
        let [daily, weekly, monthly] = rings(&goal_stats);
        assert!(daily.extent(40) < weekly.extent(40));
        assert!(weekly.extent(40) < monthly.extent(40));
    }

    #[test]
    fn filled_cells_track_completion() {
        let ring = Ring {
            label: "Daily Goals",
            stats: stats(1, 2),
            cutout: 0,
            completed_color: Color::Green,
            remaining_color: Color::White,
        };
        assert_eq!(ring.filled(40), 20);
    }

    #[test]
    fn filled_cells_guard_empty_period() {
        let ring = Ring {
            label: "Daily Goals",
            stats: stats(0, 0),
            cutout: 0,
            completed_color: Color::Green,
            remaining_color: Color::White,
        };
        assert_eq!(ring.filled(40), 0);
    }
}
