use crate::format::MetricKind;

/// One of the fixed annotation columns.
///
/// Identifiers and ordering are shared with every renderer; changing either
/// requires a schema version bump.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Column {
    /// Inclusive cost as a share of the reference total
    TotalPercent,
    /// Inclusive cost
    Total,
    /// Exclusive cost as a share of the reference total
    SelfPercent,
    /// Exclusive cost
    SelfCost,
}

impl Column {
    /// All columns in display order
    pub const ALL: [Self; 4] = [
        Self::TotalPercent,
        Self::Total,
        Self::SelfPercent,
        Self::SelfCost,
    ];

    /// Number of columns
    pub const COUNT: usize = Self::ALL.len();

    /// Stable identifier used as the key of annotation fields
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::TotalPercent => "TotalPercent",
            Self::Total => "Total",
            Self::SelfPercent => "SelfPercent",
            Self::SelfCost => "Self",
        }
    }

    /// Caption shown in the header row
    #[must_use]
    pub const fn label(self) -> &'static str {
        self.as_str()
    }

    /// How values of this column are rendered
    #[must_use]
    pub const fn kind(self) -> MetricKind {
        match self {
            Self::TotalPercent | Self::SelfPercent => MetricKind::Percentage,
            Self::Total | Self::SelfCost => MetricKind::Plain,
        }
    }

    /// Position in [`Column::ALL`]
    #[must_use]
    pub const fn index(self) -> usize {
        match self {
            Self::TotalPercent => 0,
            Self::Total => 1,
            Self::SelfPercent => 2,
            Self::SelfCost => 3,
        }
    }

    #[must_use]
    pub const fn spec(self) -> ColumnSpec {
        ColumnSpec {
            identifier: self.as_str(),
            display_label: self.label(),
        }
    }

    /// Parse a column identifier
    #[must_use]
    pub fn from_identifier(identifier: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|column| column.as_str() == identifier)
    }
}

impl std::fmt::Display for Column {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Static description of a column
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColumnSpec {
    pub identifier: &'static str,
    pub display_label: &'static str,
}

/// Column specs in display order
#[must_use]
pub fn default_columns() -> [ColumnSpec; Column::COUNT] {
    Column::ALL.map(Column::spec)
}
