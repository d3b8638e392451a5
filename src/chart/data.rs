//! Service mix shown on the home page.

/// One slice of the chart.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChartDatum {
    pub label: &'static str,
    pub value: u32,
    /// CSS color of the slice.
    pub color: &'static str,
}

/// Share of work per service area, in display order.
pub const SERVICE_MIX: [ChartDatum; 4] = [
    ChartDatum { label: "Research", value: 35, color: "#3B82F6" },
    ChartDatum { label: "Engineering", value: 30, color: "#10B981" },
    ChartDatum { label: "Planning", value: 25, color: "#8B5CF6" },
    ChartDatum { label: "Social", value: 10, color: "#F59E0B" },
];
