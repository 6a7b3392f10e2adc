//! Sample data shown on the dashboard.
//!
//! Everything here is fixed at startup. Project rows are the only generated
//! data; they come from [`generate_projects`], which takes the RNG as an
//! argument so callers can seed it.

use rand::Rng;
use serde::Serialize;

/// A point on the "Monthly Active Users" line chart.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ChartPoint {
    pub label: &'static str,
    pub value: f64,
}

/// A slice of the "Product Mix" chart. Slice values add up to 100.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PieSlice {
    pub name: &'static str,
    pub value: u64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Quote {
    pub id: u32,
    pub text: &'static str,
    pub author: &'static str,
}

/// Metric shown in one of the stat cards under the hero banner.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StatCardSpec {
    pub title: &'static str,
    pub value: &'static str,
    pub subtitle: Option<&'static str>,
    pub icon: &'static str,
}

#[derive(Debug, Copy, Clone, Eq, PartialEq, Serialize, strum::Display)]
#[strum(serialize_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum ProjectStatus {
    Active,
    Paused,
    Completed,
}

impl ProjectStatus {
    /// Capitalised form used in the table's status column.
    pub fn label(&self) -> &'static str {
        match self {
            ProjectStatus::Active => "Active",
            ProjectStatus::Paused => "Paused",
            ProjectStatus::Completed => "Completed",
        }
    }
}

/// One row of the "Active Projects" table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProjectRow {
    pub id: usize,
    pub name: String,
    pub owner: &'static str,
    /// Completion percentage in `[10, 99]`.
    pub progress: u8,
    pub status: ProjectStatus,
}

pub const LINE_DATA: [ChartPoint; 6] = [
    ChartPoint { label: "Jan", value: 400.0 },
    ChartPoint { label: "Feb", value: 520.0 },
    ChartPoint { label: "Mar", value: 610.0 },
    ChartPoint { label: "Apr", value: 720.0 },
    ChartPoint { label: "May", value: 680.0 },
    ChartPoint { label: "Jun", value: 820.0 },
];

pub const PIE_DATA: [PieSlice; 3] = [
    PieSlice { name: "Product A", value: 45 },
    PieSlice { name: "Product B", value: 25 },
    PieSlice { name: "Product C", value: 30 },
];

pub const QUOTES: [Quote; 3] = [
    Quote {
        id: 1,
        text: "Good design is obvious. Great design is transparent.",
        author: "Joe Sparano",
    },
    Quote {
        id: 2,
        text: "Simplicity is the ultimate sophistication.",
        author: "Leonardo da Vinci",
    },
    Quote {
        id: 3,
        text: "Done is better than perfect.",
        author: "Sheryl Sandberg",
    },
];

pub const IMAGES: [&str; 4] = [
    "https://images.unsplash.com/photo-1542281286-9e0a16bb7366?w=1200&q=80&auto=format&fit=crop",
    "https://images.unsplash.com/photo-1521737604893-d14cc237f11d?w=1200&q=80&auto=format&fit=crop",
    "https://images.unsplash.com/photo-1504674900247-0877df9cc836?w=1200&q=80&auto=format&fit=crop",
    "https://images.unsplash.com/photo-1496307042754-b4aa456c4a2d?w=1200&q=80&auto=format&fit=crop",
];

pub const STAT_CARDS: [StatCardSpec; 3] = [
    StatCardSpec {
        title: "Revenue",
        value: "$1.2M",
        subtitle: Some("+12% MoM"),
        icon: "💸",
    },
    StatCardSpec {
        title: "Active Users",
        value: "24.3k",
        subtitle: Some("+8% MoM"),
        icon: "👥",
    },
    StatCardSpec {
        title: "Bugs",
        value: "24",
        subtitle: Some("Critical: 2"),
        icon: "🐛",
    },
];

pub const QUICK_ACTIONS: [&str; 3] = ["Create Project", "Invite Team", "Export Report"];

const OWNERS: [&str; 4] = ["Alice", "Bob", "Maya", "Ravi"];

const STATUSES: [ProjectStatus; 3] = [
    ProjectStatus::Active,
    ProjectStatus::Paused,
    ProjectStatus::Completed,
];

/// Generate `count` project rows with ids `1..=count`.
///
/// Owners and statuses cycle by index; progress is drawn from `rng` in
/// `[10, 99]`.
pub fn generate_projects<R: Rng>(count: usize, rng: &mut R) -> Vec<ProjectRow> {
    (0..count)
        .map(|i| ProjectRow {
            id: i + 1,
            name: format!("Project {}", i + 1),
            owner: OWNERS[i % OWNERS.len()],
            progress: rng.gen_range(10..=99),
            status: STATUSES[i % STATUSES.len()],
        })
        .collect()
}
