use std::ops::RangeInclusive;

/// Suggested records per week for an age.
pub fn recommended_weekly_frequency(age: u32) -> RangeInclusive<u32> {
    match age {
        18..=25 => 2..=3,
        26..=35 => 1..=2,
        36..=45 => 1..=1,
        _ => 1..=1,
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HealthTip {
    pub message: &'static str,
    pub high_frequency: bool,
}

pub fn health_tip(age: u32, today_count: usize, week_count: usize) -> HealthTip {
    let max = *recommended_weekly_frequency(age).end() as usize;

    let message = if today_count >= 2 {
        "Quite a few today, take it easy and look after yourself."
    } else if today_count == 1 {
        "Already logged today, hope you're feeling good."
    } else if week_count > max {
        "A bit frequent lately, remember to balance work and rest."
    } else {
        "Healthy rhythm! Keep it up."
    };

    HealthTip {
        message,
        high_frequency: today_count >= 2 || week_count > max,
    }
}

pub fn greeting(hour: u32) -> &'static str {
    match hour {
        0..=4 => "Good night",
        5..=10 => "Good morning",
        11..=12 => "Good noon",
        13..=17 => "Good afternoon",
        _ => "Good evening",
    }
}
