use anyhow::{Context, Result};
use chrono::{Datelike, Utc};

use timegrid::calendar;
use timegrid::config::Config;
use timegrid::format::{point, range};
use timegrid::moment;
use timegrid::TimeRange;

fn main() -> Result<()> {
    let config = Config::load().context("failed to load configuration")?;
    init_logging(&config)?;

    let tz = config.timezone()?;
    let now = Utc::now();
    log::debug!("rendering month grid in {}", tz);

    let today = moment::day_start(tz, now);
    let first_of_month = moment::shift_day_start(today, -(i64::from(today.day()) - 1));

    // pad the partial first and last rows out to full 7-column weeks
    let mut weeks = calendar::month_to_weeks(first_of_month.with_timezone(&Utc), tz, &config.locale);
    if let Some(first) = weeks.first_mut() {
        let missing = 7 - first.len() as i64;
        *first = calendar::prepend_days(std::mem::take(first), missing);
    }
    if let Some(last) = weeks.last_mut() {
        let missing = 7 - last.len() as i64;
        *last = calendar::append_days(std::mem::take(last), missing);
    }

    println!("{}", point::format_year_month(tz, now));
    let header: String = calendar::weekday_labels(&config.locale)
        .iter()
        .map(|label| format!("{:>4}", label))
        .collect();
    println!("{}", header);
    for week in &weeks {
        let row: String = week.iter().map(|day| format!("{:>4}", day.day())).collect();
        println!("{}", row);
    }

    let month_range = TimeRange {
        start: first_of_month.with_timezone(&Utc),
        end: moment::shift_months(first_of_month, 1).with_timezone(&Utc),
    };
    let local_now = moment::to_local_moment(now, tz);
    println!();
    println!("month: {}", range::format_time_range(month_range, tz));
    println!(
        "today: {} {}",
        local_now.format(&config.display.date_format),
        local_now.format(&config.display.time_format)
    );
    println!("month began {} ago", point::format_time_elapsed(month_range.start));

    Ok(())
}

fn init_logging(config: &Config) -> Result<()> {
    let level = if config.logging.enabled {
        log::LevelFilter::Debug
    } else {
        log::LevelFilter::Warn
    };

    fern::Dispatch::new()
        .format(|out, message, record| {
            out.finish(format_args!(
                "[{} {}] {}",
                Utc::now().format("%H:%M:%S%.3f"),
                record.level(),
                message
            ))
        })
        .level(level)
        .chain(std::io::stderr())
        .apply()
        .context("failed to initialize logging")
}
