use serde::{Deserialize, Serialize};

/// Report columns, in fixed output order.
pub const REPORT_COLUMNS: [Column; 7] = [
    Column::TestCaseId,
    Column::Class,
    Column::Test,
    Column::Category,
    Column::Priority,
    Column::Property,
    Column::Description,
];

/// A column of the report grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Column {
    TestCaseId,
    Class,
    Test,
    Category,
    Priority,
    Property,
    Description,
}

impl Column {
    /// Header text for this column.
    #[must_use]
    pub fn title(self) -> &'static str {
        match self {
            Column::TestCaseId => "TestCaseId",
            Column::Class => "Class",
            Column::Test => "Test",
            Column::Category => "Category",
            Column::Priority => "Priority",
            Column::Property => "Property",
            Column::Description => "Description",
        }
    }

    /// Position of this column in [`REPORT_COLUMNS`].
    #[must_use]
    pub fn index(self) -> usize {
        REPORT_COLUMNS.iter().position(|c| *c == self).unwrap_or(0)
    }
}

/// A single cell: display text plus the missing-field highlight flag.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GridCell {
    pub text: String,
    #[serde(default)]
    pub highlighted: bool,
}

impl GridCell {
    /// A plain text cell.
    #[must_use]
    pub fn text(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            highlighted: false,
        }
    }

    /// An empty, highlighted cell marking a missing field.
    #[must_use]
    pub fn missing() -> Self {
        Self {
            text: String::new(),
            highlighted: true,
        }
    }

    /// Whether the cell carries neither text nor a highlight.
    #[must_use]
    pub fn is_blank(&self) -> bool {
        self.text.is_empty() && !self.highlighted
    }
}

/// One data row, cells in [`REPORT_COLUMNS`] order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GridRow {
    pub cells: Vec<GridCell>,
}

impl GridRow {
    /// Cell under the given column.
    #[must_use]
    pub fn cell(&self, column: Column) -> Option<&GridCell> {
        self.cells.get(column.index())
    }

    /// Text of the `Test` column, the sort key.
    #[must_use]
    pub fn test_name(&self) -> &str {
        self.cell(Column::Test).map_or("", |c| c.text.as_str())
    }
}

/// The assembled report: header titles, sorted data rows, and the sort key
/// column for renderers that re-sort.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReportGrid {
    pub columns: Vec<String>,
    pub rows: Vec<GridRow>,
    pub sort_column: Column,
}
