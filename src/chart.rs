//! Declarative chart descriptions.
//!
//! These only say *what* to draw: labels, values and colors. Serialized to JSON they take the
//! shape charting libraries expect (`type`, `data.labels`, `data.datasets`); the `passlab` binary
//! also draws them straight to the terminal.

use serde::{Serialize, Serializer};

use crate::{Composition, Strength};

#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ChartKind {
    Pie,
    Bar,
    Doughnut,
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Color {
    Blue,
    Green,
    Yellow,
    Red,
}

impl Color {
    pub fn hex(self) -> &'static str {
        match self {
            Color::Blue => "#007bff",
            Color::Green => "#28a745",
            Color::Yellow => "#ffc107",
            Color::Red => "#dc3545",
        }
    }

    pub fn for_strength(strength: Strength) -> Color {
        match strength {
            Strength::Weak => Color::Red,
            Strength::Moderate => Color::Yellow,
            Strength::Strong => Color::Green,
        }
    }
}

impl Serialize for Color {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(self.hex())
    }
}

#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Dataset {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    pub data: Vec<u32>,
    /// One color per value.
    pub background_color: Vec<Color>,
}

#[derive(Clone, Debug, Serialize)]
pub struct ChartData {
    pub labels: Vec<String>,
    pub datasets: Vec<Dataset>,
}

#[derive(Clone, Debug, Serialize)]
pub struct ChartSpec {
    #[serde(rename = "type")]
    pub kind: ChartKind,
    pub data: ChartData,
    pub options: ChartOptions,
}

#[derive(Clone, Debug, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ChartOptions {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub responsive: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scales: Option<Scales>,
    pub plugins: Plugins,
}

#[derive(Clone, Debug, Serialize)]
pub struct Scales {
    pub y: Axis,
}

/// A value axis with a fixed range.
#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Axis {
    pub begin_at_zero: bool,
    pub max: u32,
    pub ticks: Ticks,
}

#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Ticks {
    pub step_size: u32,
}

#[derive(Clone, Debug, Default, Serialize)]
pub struct Plugins {
    pub legend: Legend,
}

#[derive(Clone, Debug, Default, Serialize)]
pub struct Legend {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub display: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub position: Option<&'static str>,
}

impl ChartOptions {
    /// Responsive chart with the legend underneath.
    fn legend_below() -> ChartOptions {
        ChartOptions {
            responsive: Some(true),
            scales: None,
            plugins: Plugins {
                legend: Legend {
                    display: None,
                    position: Some("bottom"),
                },
            },
        }
    }
}

impl ChartSpec {
    /// Labels zipped with the values and colors of the first dataset.
    pub fn points(&self) -> impl Iterator<Item = (&str, u32, Color)> + '_ {
        let dataset = self.data.datasets.first();
        self.data
            .labels
            .iter()
            .enumerate()
            .filter_map(move |(idx, label)| {
                let dataset = dataset?;
                let value = *dataset.data.get(idx)?;
                let color = *dataset.background_color.get(idx)?;
                Some((label.as_str(), value, color))
            })
    }

    /// Fixed upper bound of the value axis, if the chart has one.
    pub fn y_max(&self) -> Option<u32> {
        self.options.scales.as_ref().map(|scales| scales.y.max)
    }

    pub fn title(&self) -> Option<&str> {
        self.data.datasets.first()?.label.as_deref()
    }
}

static COMPOSITION_LABELS: [&str; 4] = ["Lowercase", "Uppercase", "Numbers", "Symbols"];
static COMPOSITION_COLORS: [Color; 4] = [Color::Blue, Color::Green, Color::Yellow, Color::Red];

/// Pie chart of character-class counts.
pub fn composition_chart(composition: &Composition) -> ChartSpec {
    ChartSpec {
        kind: ChartKind::Pie,
        data: ChartData {
            labels: COMPOSITION_LABELS.iter().map(|&l| l.to_owned()).collect(),
            datasets: vec![Dataset {
                label: Some("Password Composition".to_owned()),
                data: composition
                    .as_array()
                    .iter()
                    .map(|&count| saturating_u32(count))
                    .collect(),
                background_color: COMPOSITION_COLORS.to_vec(),
            }],
        },
        options: ChartOptions::legend_below(),
    }
}

/// Single bar whose height is the tier's score, on a 0-3 axis.
pub fn strength_chart(strength: Strength) -> ChartSpec {
    ChartSpec {
        kind: ChartKind::Bar,
        data: ChartData {
            labels: vec!["Strength".to_owned()],
            datasets: vec![Dataset {
                label: Some("Password Strength".to_owned()),
                data: vec![strength.score()],
                background_color: vec![Color::for_strength(strength)],
            }],
        },
        options: ChartOptions {
            responsive: None,
            scales: Some(Scales {
                y: Axis {
                    begin_at_zero: true,
                    max: Strength::Strong.score(),
                    ticks: Ticks { step_size: 1 },
                },
            }),
            plugins: Plugins {
                legend: Legend {
                    display: Some(false),
                    position: None,
                },
            },
        },
    }
}

/// Doughnut chart of how many of `tiers` fall into each strength tier.
pub fn strength_distribution_chart(tiers: &[Strength]) -> ChartSpec {
    let counts = Strength::ALL
        .iter()
        .map(|&tier| saturating_u32(tiers.iter().filter(|&&t| t == tier).count()))
        .collect();
    ChartSpec {
        kind: ChartKind::Doughnut,
        data: ChartData {
            labels: Strength::ALL.iter().map(|t| t.name().to_owned()).collect(),
            datasets: vec![Dataset {
                label: Some("Strength Distribution".to_owned()),
                data: counts,
                background_color: Strength::ALL
                    .iter()
                    .map(|&t| Color::for_strength(t))
                    .collect(),
            }],
        },
        options: ChartOptions::legend_below(),
    }
}

fn saturating_u32(n: usize) -> u32 {
    u32::try_from(n).unwrap_or(u32::MAX)
}
