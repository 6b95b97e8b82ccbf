use crate::cli::parser::{Cli, Commands};
use crate::config::Config;
use crate::core::repository::RecordRepository;
use crate::core::stats::{Statistics, compute_statistics};
use crate::errors::{AppError, AppResult};
use crate::ui::messages::header;
use crate::utils::colors::{CYAN, GREY, RESET, bar, color_for_count};
use crate::utils::date::{parse_date, today};
use chrono::{Datelike, NaiveDate};

pub fn handle(cli: &Cli, cfg: &Config) -> AppResult<()> {
    if let Commands::Stats { date } = &cli.command {
        let reference = match date {
            Some(d) => parse_date(d).ok_or_else(|| AppError::InvalidDate(d.clone()))?,
            None => today(),
        };

        let mut session = super::unlocked_session(cli, cfg)?;
        let repo = RecordRepository::new(&mut session.pool, &session.cipher);
        let records = repo.all_records()?;

        print_statistics(&compute_statistics(&records, reference), reference);
    }
    Ok(())
}

fn print_statistics(stats: &Statistics, reference: NaiveDate) {
    header(format!("Week of {}", reference.format("%Y-%m-%d")));
    for (day, count) in &stats.week {
        println!(
            "  {:<4} {}{:>3}{} {}",
            day.to_string(),
            color_for_count(*count),
            count,
            RESET,
            bar(*count, 20)
        );
    }
    println!();

    header(reference.format("%B %Y").to_string());
    print_month_grid(stats);
    println!();

    header("All time");
    println!("  {CYAN}Total records:{RESET}   {}", stats.total);
    println!("  {CYAN}Longest streak:{RESET}  {} day(s)", stats.longest_streak);
    println!(
        "  {CYAN}Average / week:{RESET}  {:.1}",
        stats.average_weekly
    );
}

/// Month laid out Monday-first, one cell per day showing its count.
fn print_month_grid(stats: &Statistics) {
    println!("  {GREY}Mo  Tu  We  Th  Fr  Sa  Su{RESET}");

    let Some(first) = stats.month.keys().next() else {
        return;
    };
    let offset = first.weekday().num_days_from_monday() as usize;

    let mut line = String::from("  ");
    line.push_str(&"    ".repeat(offset));
    let mut col = offset;

    for count in stats.month.values() {
        line.push_str(&format!("{}{:<4}{}", color_for_count(*count), count, RESET));
        col += 1;
        if col % 7 == 0 {
            println!("{}", line.trim_end());
            line = String::from("  ");
        }
    }

    if line.trim().is_empty() {
        return;
    }
    println!("{}", line.trim_end());
}
