//! Strength, composition and suggestions for a single password.

use std::io::{self, Write};

use anyhow::Context;
use passlab::chart::{self, ChartSpec, Color};
use passlab::{CommonPasswords, Composition, Secret, Strength, Suggestion};
use serde::Serialize;

use crate::ProgError;

#[derive(Serialize)]
pub(crate) struct Report<'a> {
    #[serde(skip_serializing_if = "Option::is_none")]
    password: Option<&'a Secret>,
    strength: Strength,
    composition: Composition,
    charts: [ChartSpec; 2],
}

impl<'a> Report<'a> {
    pub(crate) fn new(password: &str) -> Report<'a> {
        let strength = passlab::analyze(password);
        let composition = Composition::tally(password);
        Report {
            password: None,
            strength,
            composition,
            charts: [
                chart::composition_chart(&composition),
                chart::strength_chart(strength),
            ],
        }
    }

    pub(crate) fn with_password(self, password: &'a Secret) -> Report<'a> {
        Report {
            password: Some(password),
            ..self
        }
    }
}

pub(crate) fn print_report(report: &Report<'_>) -> Result<(), ProgError> {
    let mut stdout = io::stdout().lock();
    writeln!(stdout, "Strength: {}\n", styled_strength(report.strength))
        .context("failed to write to stdout")?;
    for (idx, chart) in report.charts.iter().enumerate() {
        if idx != 0 {
            writeln!(stdout).context("failed to write to stdout")?;
        }
        crate::chart::render_chart(chart, &mut stdout).context("failed to draw chart")?;
    }
    Ok(())
}

pub(crate) fn styled_strength(strength: Strength) -> console::StyledObject<&'static str> {
    let styled = console::style(strength.name()).bold();
    match Color::for_strength(strength) {
        Color::Red => styled.red(),
        Color::Yellow => styled.yellow(),
        Color::Green => styled.green(),
        Color::Blue => styled.blue(),
    }
}

pub(crate) fn analyze(password: Option<String>, json: bool) -> Result<(), ProgError> {
    let password = crate::read_password(password)?;
    let report = Report::new(&password);
    if json {
        serde_json::to_writer_pretty(io::stdout().lock(), &report)
            .context("failed to write JSON to stdout")?;
        println!();
        Ok(())
    } else {
        print_report(&report)
    }
}

#[derive(Serialize)]
struct SuggestionJson {
    kind: Suggestion,
    message: &'static str,
}

pub(crate) fn suggest(
    password: Option<String>,
    common: &CommonPasswords,
    json: bool,
) -> Result<(), ProgError> {
    let password = crate::read_password(password)?;
    let suggestions = passlab::suggest_improvements(&password, common)?;
    if json {
        let suggestions = suggestions
            .into_iter()
            .map(|kind| SuggestionJson {
                kind,
                message: kind.message(),
            })
            .collect::<Vec<_>>();
        serde_json::to_writer_pretty(io::stdout().lock(), &suggestions)
            .context("failed to write JSON to stdout")?;
        println!();
    } else {
        print_suggestions(&suggestions);
    }
    Ok(())
}

pub(crate) fn print_suggestions(suggestions: &[Suggestion]) {
    for suggestion in suggestions {
        match suggestion {
            Suggestion::Strong => println!("  {}", console::style(suggestion).green()),
            _ => println!("  - {suggestion}"),
        }
    }
}
