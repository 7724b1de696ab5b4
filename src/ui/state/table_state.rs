use std::cmp::Ordering;
use std::collections::BTreeMap;

use crate::domain::entities::page::SortDirection;

/// Records shown in a resource table expose their cells by column key.
pub trait TableRecord {
    fn row_id(&self) -> i64;
    fn field(&self, key: &str) -> Option<String>;
}

pub type CellRenderer<R> = fn(&R) -> String;

pub struct ColumnSpec<R> {
    pub key: &'static str,
    pub label: &'static str,
    pub width: Option<&'static str>,
    pub render: Option<CellRenderer<R>>,
}

impl<R> Clone for ColumnSpec<R> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<R> Copy for ColumnSpec<R> {}

impl<R> ColumnSpec<R> {
    pub const fn new(key: &'static str, label: &'static str) -> Self {
        Self {
            key,
            label,
            width: None,
            render: None,
        }
    }

    pub fn width(mut self, width: &'static str) -> Self {
        self.width = Some(width);
        self
    }

    pub fn render(mut self, render: CellRenderer<R>) -> Self {
        self.render = Some(render);
        self
    }
}

impl<R: TableRecord> ColumnSpec<R> {
    pub fn cell(&self, record: &R) -> String {
        match self.render {
            Some(render) => render(record),
            None => record.field(self.key).unwrap_or_default(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SortState {
    pub key: &'static str,
    pub direction: SortDirection,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct TableState {
    pub sort: Option<SortState>,
    pub filter_column: Option<&'static str>,
    pub filter_text: String,
    pub visibility: BTreeMap<&'static str, bool>,
}

impl TableState {
    pub fn with_filter_column(key: &'static str) -> Self {
        Self {
            filter_column: Some(key),
            ..Self::default()
        }
    }

    /// A new column starts ascending; the active column flips.
    pub fn toggle_sort(&mut self, key: &'static str) {
        self.sort = Some(match self.sort {
            Some(current) if current.key == key => SortState {
                key,
                direction: current.direction.flipped(),
            },
            _ => SortState {
                key,
                direction: SortDirection::Asc,
            },
        });
    }

    pub fn set_filter_text(&mut self, text: &str) {
        self.filter_text = text.to_string();
    }

    pub fn set_column_visible(&mut self, key: &'static str, visible: bool) {
        self.visibility.insert(key, visible);
    }

    pub fn is_visible(&self, key: &str) -> bool {
        self.visibility.get(key).copied().unwrap_or(true)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct HeaderCell {
    pub key: &'static str,
    pub label: &'static str,
    pub width: Option<&'static str>,
    pub sort: Option<SortDirection>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct TableRow {
    pub id: i64,
    pub cells: Vec<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum TableBody {
    Empty { colspan: usize },
    Rows(Vec<TableRow>),
}

#[derive(Debug, Clone, PartialEq)]
pub struct ColumnToggle {
    pub key: &'static str,
    pub label: &'static str,
    pub visible: bool,
}

/// Everything the table component needs to draw, already filtered, sorted
/// and cut down to the visible columns.
#[derive(Debug, Clone, PartialEq)]
pub struct TableView {
    pub headers: Vec<HeaderCell>,
    pub body: TableBody,
    pub toggles: Vec<ColumnToggle>,
    pub filter_label: Option<&'static str>,
    pub filter_text: String,
}

pub fn apply_column_visibility<'a, R>(
    columns: &'a [ColumnSpec<R>],
    state: &TableState,
) -> Vec<(usize, &'a ColumnSpec<R>)> {
    columns
        .iter()
        .enumerate()
        .filter(|(_, column)| state.is_visible(column.key))
        .collect()
}

pub fn compare_cells(left: &str, right: &str) -> Ordering {
    let left_trimmed = left.trim();
    let right_trimmed = right.trim();
    match (left_trimmed.parse::<f64>(), right_trimmed.parse::<f64>()) {
        (Ok(a), Ok(b)) => a.partial_cmp(&b).unwrap_or(Ordering::Equal),
        _ => left_trimmed
            .to_lowercase()
            .cmp(&right_trimmed.to_lowercase()),
    }
}

pub fn build_table_view<R: TableRecord>(
    columns: &[ColumnSpec<R>],
    records: &[R],
    state: &TableState,
) -> TableView {
    let mut rows: Vec<TableRow> = records
        .iter()
        .map(|record| TableRow {
            id: record.row_id(),
            cells: columns.iter().map(|column| column.cell(record)).collect(),
        })
        .collect();

    let needle = state.filter_text.trim().to_lowercase();
    if !needle.is_empty() {
        if let Some(filter_idx) = state
            .filter_column
            .and_then(|key| columns.iter().position(|column| column.key == key))
        {
            rows.retain(|row| row.cells[filter_idx].to_lowercase().contains(&needle));
        }
    }

    if let Some(sort) = state.sort {
        if let Some(sort_idx) = columns.iter().position(|column| column.key == sort.key) {
            rows.sort_by(|a, b| {
                let ordering = compare_cells(&a.cells[sort_idx], &b.cells[sort_idx]);
                match sort.direction {
                    SortDirection::Asc => ordering,
                    SortDirection::Desc => ordering.reverse(),
                }
            });
        }
    }

    let visible = apply_column_visibility(columns, state);
    let headers = visible
        .iter()
        .map(|(_, column)| HeaderCell {
            key: column.key,
            label: column.label,
            width: column.width,
            sort: state
                .sort
                .filter(|sort| sort.key == column.key)
                .map(|sort| sort.direction),
        })
        .collect();

    let body = if rows.is_empty() {
        TableBody::Empty {
            colspan: columns.len().max(1),
        }
    } else {
        TableBody::Rows(
            rows.into_iter()
                .map(|row| TableRow {
                    id: row.id,
                    cells: visible
                        .iter()
                        .map(|(idx, _)| row.cells[*idx].clone())
                        .collect(),
                })
                .collect(),
        )
    };

    TableView {
        headers,
        body,
        toggles: columns
            .iter()
            .map(|column| ColumnToggle {
                key: column.key,
                label: column.label,
                visible: state.is_visible(column.key),
            })
            .collect(),
        filter_label: state.filter_column.and_then(|key| {
            columns
                .iter()
                .find(|column| column.key == key)
                .map(|column| column.label)
        }),
        filter_text: state.filter_text.clone(),
    }
}
