//! Draws chart specs as colored horizontal bars.

use std::io::{self, Write};

use passlab::chart::{ChartKind, ChartSpec, Color};
use unicode_width::UnicodeWidthStr;

const BAR_WIDTH: usize = 30;

pub(crate) fn render_chart(chart: &ChartSpec, mut output: impl Write) -> io::Result<()> {
    if let Some(title) = chart.title() {
        writeln!(&mut output, "{}", console::style(title).bold())?;
    }

    let label_width = chart
        .points()
        .map(|(label, _, _)| label.width())
        .max()
        .unwrap_or(0);
    let total = chart.points().map(|(_, value, _)| value).sum::<u32>();

    for (label, value, color) in chart.points() {
        let scale = match (chart.kind, chart.y_max()) {
            (ChartKind::Bar, Some(max)) => max,
            (ChartKind::Bar, None) => chart.points().map(|(_, v, _)| v).max().unwrap_or(0),
            (ChartKind::Pie | ChartKind::Doughnut, _) => total,
        };
        let filled = bar_length(value, scale);
        let bar = format!(
            "{}{}",
            "█".repeat(filled),
            "░".repeat(BAR_WIDTH - filled)
        );
        let padding = label_width.saturating_sub(label.width());
        write!(
            &mut output,
            "  {}{}  {}  ",
            label,
            " ".repeat(padding),
            console::style(bar).fg(terminal_color(color))
        )?;
        match chart.kind {
            ChartKind::Bar => writeln!(&mut output, "{value}/{scale}")?,
            ChartKind::Pie | ChartKind::Doughnut => {
                let percent = if total == 0 {
                    0.0
                } else {
                    f64::from(value) * 100.0 / f64::from(total)
                };
                writeln!(&mut output, "{value} ({percent:.1}%)")?
            }
        }
    }
    Ok(())
}

fn bar_length(value: u32, scale: u32) -> usize {
    if scale == 0 {
        return 0;
    }
    let filled = (u64::from(value) * BAR_WIDTH as u64 + u64::from(scale) / 2) / u64::from(scale);
    usize::try_from(filled).unwrap_or(BAR_WIDTH).min(BAR_WIDTH)
}

fn terminal_color(color: Color) -> console::Color {
    match color {
        Color::Blue => console::Color::Blue,
        Color::Green => console::Color::Green,
        Color::Yellow => console::Color::Yellow,
        Color::Red => console::Color::Red,
    }
}
