use chrono::{Local, TimeZone};

use super::{DailyForecast, ForecastSample};

pub const MAX_FORECAST_DAYS: usize = 7;

/// Collapse 3-hour samples into per-day aggregates using the local timezone.
#[must_use]
pub fn bucket_by_day(series: &[ForecastSample]) -> Vec<DailyForecast> {
    bucket_by_day_in(series, &Local)
}

/// Timezone-explicit core of [`bucket_by_day`].
///
/// Groups samples by calendar date in first-seen order. Each group keeps the
/// min/max of its samples' `temp` and the first sample's condition, wind, and
/// precipitation probability. At most [`MAX_FORECAST_DAYS`] groups survive.
#[must_use]
pub fn bucket_by_day_in<Tz: TimeZone>(series: &[ForecastSample], tz: &Tz) -> Vec<DailyForecast> {
    let mut days: Vec<DailyForecast> = Vec::new();

    for sample in series {
        let date = sample.timestamp.with_timezone(tz).date_naive();
        if let Some(day) = days.iter_mut().find(|day| day.date == date) {
            day.temp_min = day.temp_min.min(sample.temp);
            day.temp_max = day.temp_max.max(sample.temp);
        } else {
            days.push(DailyForecast {
                date,
                timestamp: sample.timestamp,
                temp_min: sample.temp,
                temp_max: sample.temp,
                condition_id: sample.condition_id,
                condition: sample.condition.clone(),
                icon: sample.icon.clone(),
                wind_speed: sample.wind_speed,
                pop: sample.pop,
            });
        }
    }

    days.truncate(MAX_FORECAST_DAYS);
    days
}
