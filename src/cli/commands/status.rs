use crate::cli::parser::Cli;
use crate::config::Config;
use crate::core::advice::{greeting, health_tip, recommended_weekly_frequency};
use crate::core::repository::RecordRepository;
use crate::core::status::{StatusSnapshot, StatusView};
use crate::errors::AppResult;
use crate::ui::messages::{header, info, success, warning};
use crate::utils::colors::colorize_note;
use crate::utils::date::{format_millis, today};
use chrono::{Local, Timelike};

pub fn handle(cli: &Cli, cfg: &Config) -> AppResult<()> {
    let mut session = super::unlocked_session(cli, cfg)?;
    let age = session.settings.age;
    let repo = RecordRepository::new(&mut session.pool, &session.cipher);

    let mut view = StatusView::new();
    let snap = view.refresh(|| StatusSnapshot::load(&repo, today(), age))?;

    print_status(snap);
    Ok(())
}

fn print_status(snap: &StatusSnapshot) {
    println!("{}!\n", greeting(Local::now().hour()));

    header(format!("Today ({})", snap.day.format("%Y-%m-%d")));
    if snap.today.is_empty() {
        info("Nothing logged today.");
    } else {
        success(format!("{} record(s) today", snap.today.len()));
        for r in &snap.today {
            println!(
                "  #{:<5} {}  {}",
                r.id,
                format_millis(r.timestamp),
                colorize_note(r.note.as_deref())
            );
        }
    }
    println!();

    let band = recommended_weekly_frequency(snap.age);
    header("This week");
    println!(
        "  {} record(s), recommended {}-{} for age {}",
        snap.week_count,
        band.start(),
        band.end(),
        snap.age
    );
    println!();

    let tip = health_tip(snap.age, snap.today.len(), snap.week_count);
    header("💡 Tip");
    if tip.high_frequency {
        warning(tip.message);
    } else {
        info(tip.message);
    }
}
