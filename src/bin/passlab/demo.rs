use std::io::{self, Write};

use anyhow::Context;
use passlab::demo::{self, DemoEntry};
use passlab::{chart, CommonPasswords, Strength, Suggestion};
use serde::Serialize;

use crate::ProgError;

#[derive(Serialize)]
struct DemoRow {
    #[serde(flatten)]
    entry: DemoEntry,
    /// `None` when no common-password list is loaded.
    common: Option<bool>,
}

impl DemoRow {
    fn new(entry: DemoEntry, common: &CommonPasswords) -> DemoRow {
        DemoRow {
            entry,
            common: common.contains(entry.password).ok(),
        }
    }
}

impl crate::table::TableDisplay for DemoRow {
    fn columns() -> usize {
        3
    }

    fn column_name(column_index: usize) -> &'static str {
        match column_index {
            0 => "Password",
            1 => "Strength",
            2 => "Common",
            _ => panic!(),
        }
    }

    fn item(&self, column_index: usize) -> &str {
        match column_index {
            0 => self.entry.password,
            1 => self.entry.strength.name(),
            2 => match self.common {
                Some(true) => "yes",
                Some(false) => "no",
                None => "unknown",
            },
            _ => panic!(),
        }
    }
}

pub(crate) fn list(
    strength: Option<Strength>,
    all: bool,
    common: &CommonPasswords,
    json: bool,
) -> Result<(), ProgError> {
    let strength = if strength.is_some() || all || json || !console::user_attended() {
        strength
    } else {
        crate::select::select_strength()?
    };
    let entries = demo::filter_by_strength(strength);
    let rows = entries
        .iter()
        .map(|&entry| DemoRow::new(entry, common))
        .collect::<Vec<_>>();

    if json {
        serde_json::to_writer_pretty(io::stdout().lock(), &rows)
            .context("failed to write JSON to stdout")?;
        println!();
        return Ok(());
    }

    let mut stdout = io::stdout().lock();
    if entries.is_empty() {
        writeln!(stdout, "No sample passwords match.").context("failed to write to stdout")?;
        return Ok(());
    }
    crate::table::display_table(&rows, &mut stdout).context("failed to output table")?;
    writeln!(stdout).context("failed to write to stdout")?;

    let tiers = entries.iter().map(|e| e.strength).collect::<Vec<_>>();
    crate::chart::render_chart(&chart::strength_distribution_chart(&tiers), &mut stdout)
        .context("failed to draw chart")?;
    Ok(())
}

pub(crate) fn search(query: &str, common: &CommonPasswords) -> Result<(), ProgError> {
    let matches = demo::search(query);
    if matches.is_empty() {
        println!("No sample passwords contain {query:?}.");
        return Ok(());
    }
    for entry in matches {
        let suggestions = entry.suggestions(common)?;
        println!(
            "{}  {}",
            console::style(entry.password).bold(),
            crate::analyze::styled_strength(entry.strength)
        );
        if suggestions.contains(&Suggestion::AvoidCommonPasswords) {
            println!("  {}", console::style("This password is too common!").red().bold());
        }
        crate::analyze::print_suggestions(&suggestions);
    }
    Ok(())
}
