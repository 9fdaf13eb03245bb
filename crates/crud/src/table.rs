//! Table model for an entity collection
//!
//! Columns are derived from the schema: a selection checkbox column, one
//! column per visible field, and an actions column. Rows keep their fetch
//! order; sorting and filtering only compute a view over them, so clearing
//! the sort always restores the original order.

use aricon_core::{FieldKind, RecordId, SortDirection};
use aricon_schema::{FieldSpec, Lookups, Record, Schema};
use std::cmp::Ordering;
use std::collections::BTreeSet;

// ============================================================================
// Columns
// ============================================================================

/// One table column
#[derive(Debug, Clone, PartialEq)]
pub enum TableColumn {
    /// Row selection checkbox
    Select,
    /// A domain field
    Field {
        name: String,
        label: String,
        sortable: bool,
    },
    /// Edit and delete buttons
    Actions,
}

impl TableColumn {
    /// Stable key for rendering
    pub fn key(&self) -> &str {
        match self {
            TableColumn::Select => "__select",
            TableColumn::Field { name, .. } => name,
            TableColumn::Actions => "__actions",
        }
    }
}

/// Columns for a schema
pub fn columns_for(schema: &Schema) -> Vec<TableColumn> {
    let mut columns = vec![TableColumn::Select];
    columns.extend(
        schema
            .fields
            .iter()
            .filter(|f| f.in_table)
            .map(|f| TableColumn::Field {
                name: f.name.clone(),
                label: f.label.clone(),
                sortable: f.sortable,
            }),
    );
    columns.push(TableColumn::Actions);
    columns
}

// ============================================================================
// Cells
// ============================================================================

/// Text shown for a field of a record
///
/// References show the looked-up label and choices their option label.
pub fn cell_text(field: &FieldSpec, record: &Record, lookups: &Lookups) -> String {
    match field.kind {
        FieldKind::Reference => {
            let raw = record.text(&field.name);
            match field.lookup {
                Some(source) => lookups.label(source, raw).to_string(),
                None => raw.to_string(),
            }
        }
        FieldKind::Choice => field.option_label(record.text(&field.name)).to_string(),
        FieldKind::MultiChoice => record
            .list(&field.name)
            .iter()
            .map(|v| field.option_label(v).to_string())
            .collect::<Vec<_>>()
            .join(", "),
        _ => record.display(&field.name),
    }
}

/// Name used to refer to a record in confirmations
pub fn record_label(schema: &Schema, record: &Record, lookups: &Lookups) -> String {
    schema
        .fields
        .iter()
        .filter(|f| f.in_table)
        .map(|f| cell_text(f, record, lookups))
        .find(|text| !text.trim().is_empty())
        .unwrap_or_else(|| "this record".to_string())
}

// ============================================================================
// Sorting
// ============================================================================

/// Active sort, cycling ascending → descending → unsorted per column
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SortState {
    column: Option<String>,
    direction: Option<SortDirection>,
}

impl SortState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Advance the sort for a header click
    ///
    /// Clicking a different column starts that column at ascending.
    pub fn toggle(&mut self, column: &str) {
        let current = if self.column.as_deref() == Some(column) {
            self.direction
        } else {
            None
        };

        self.direction = SortDirection::cycle(current);
        self.column = self.direction.map(|_| column.to_string());
    }

    /// Direction applied to a column, if it is the sorted one
    pub fn direction_for(&self, column: &str) -> Option<SortDirection> {
        if self.column.as_deref() == Some(column) {
            self.direction
        } else {
            None
        }
    }

    pub fn is_sorted(&self) -> bool {
        self.direction.is_some()
    }

    /// Order row indices by the raw value of the sorted column
    ///
    /// The sort is stable, and descending keeps equal rows in fetch order.
    pub fn order(&self, rows: &[Record], indices: &mut [usize]) {
        let (Some(column), Some(direction)) = (&self.column, self.direction) else {
            return;
        };

        indices.sort_by(|&a, &b| {
            let left = rows[a].display(column);
            let right = rows[b].display(column);
            let ordering = compare_raw(&left, &right);
            match direction {
                SortDirection::Ascending => ordering,
                SortDirection::Descending => ordering.reverse(),
            }
        });
    }
}

/// Case-insensitive comparison of raw strings, ties broken by exact bytes
fn compare_raw(left: &str, right: &str) -> Ordering {
    left.to_lowercase()
        .cmp(&right.to_lowercase())
        .then_with(|| left.cmp(right))
}

// ============================================================================
// Selection
// ============================================================================

/// Checked rows; bulk selection state only
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RowSelection {
    selected: BTreeSet<RecordId>,
}

impl RowSelection {
    pub fn new() -> Self {
        Self::default()
    }

    /// Flip one row
    pub fn toggle(&mut self, id: &RecordId) {
        if !self.selected.remove(id) {
            self.selected.insert(id.clone());
        }
    }

    /// Select every given row, or clear them all if they are all selected
    pub fn toggle_all<'a>(&mut self, ids: impl IntoIterator<Item = &'a RecordId>) {
        let ids: Vec<&RecordId> = ids.into_iter().collect();
        if !ids.is_empty() && ids.iter().all(|id| self.selected.contains(*id)) {
            for id in ids {
                self.selected.remove(id);
            }
        } else {
            self.selected.extend(ids.into_iter().cloned());
        }
    }

    pub fn is_selected(&self, id: &RecordId) -> bool {
        self.selected.contains(id)
    }

    /// Whether every given row is selected
    pub fn all_selected<'a>(&self, ids: impl IntoIterator<Item = &'a RecordId>) -> bool {
        let mut any = false;
        for id in ids {
            any = true;
            if !self.selected.contains(id) {
                return false;
            }
        }
        any
    }

    pub fn clear(&mut self) {
        self.selected.clear();
    }

    pub fn len(&self) -> usize {
        self.selected.len()
    }

    pub fn is_empty(&self) -> bool {
        self.selected.is_empty()
    }
}

// ============================================================================
// View
// ============================================================================

/// Row indices to display, after filtering and sorting
pub fn visible_rows(
    schema: &Schema,
    rows: &[Record],
    lookups: &Lookups,
    filter: &str,
    sort: &SortState,
) -> Vec<usize> {
    let needle = filter.trim().to_lowercase();
    let mut indices: Vec<usize> = (0..rows.len())
        .filter(|&i| {
            needle.is_empty()
                || schema
                    .fields
                    .iter()
                    .filter(|f| f.in_table)
                    .any(|f| cell_text(f, &rows[i], lookups).to_lowercase().contains(&needle))
        })
        .collect();

    sort.order(rows, &mut indices);
    indices
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use aricon_schema::{EntityKind, LookupList, LookupSource};
    use pretty_assertions::assert_eq;
    use serde_json::json;

    fn hotels() -> Vec<Record> {
        EntityKind::Hotel
            .decode_collection(&json!([
                { "_id": "h1", "facultyName": "f2", "hotelName": "Taj",
                  "checkInDate": "2026-10-19", "checkOutDate": "2026-10-21" },
                { "_id": "h2", "facultyName": "f1", "hotelName": "Oberoi",
                  "checkInDate": "2026-10-18", "checkOutDate": "2026-10-20" },
                { "_id": "h3", "facultyName": "f1", "hotelName": "Leela",
                  "checkInDate": "2026-10-19", "checkOutDate": "2026-10-22" }
            ]))
            .unwrap()
    }

    fn lookups() -> Lookups {
        let mut lookups = Lookups::new();
        lookups.insert(
            LookupList::from_json(
                LookupSource::Faculty,
                &json!([
                    { "_id": "f1", "facultyName": "Dr. Rao" },
                    { "_id": "f2", "facultyName": "Dr. Iyer" }
                ]),
            )
            .unwrap(),
        );
        lookups
    }

    fn ids(rows: &[Record], order: &[usize]) -> Vec<String> {
        order
            .iter()
            .map(|&i| rows[i].id.clone().unwrap().to_string())
            .collect()
    }

    #[test]
    fn test_columns_wrap_fields() {
        let columns = columns_for(&EntityKind::Team.schema());
        assert_eq!(columns.first(), Some(&TableColumn::Select));
        assert_eq!(columns.last(), Some(&TableColumn::Actions));
        let keys: Vec<&str> = columns.iter().map(TableColumn::key).collect();
        assert_eq!(keys, vec!["__select", "name", "email", "mobile", "__actions"]);
    }

    #[test]
    fn test_three_toggles_restore_original_order() {
        let schema = EntityKind::Hotel.schema();
        let rows = hotels();
        let lookups = lookups();
        let mut sort = SortState::new();

        let original = visible_rows(&schema, &rows, &lookups, "", &sort);
        assert_eq!(ids(&rows, &original), vec!["h1", "h2", "h3"]);

        sort.toggle("hotelName");
        let asc = visible_rows(&schema, &rows, &lookups, "", &sort);
        assert_eq!(ids(&rows, &asc), vec!["h3", "h2", "h1"]);
        assert_eq!(sort.direction_for("hotelName"), Some(SortDirection::Ascending));

        sort.toggle("hotelName");
        let desc = visible_rows(&schema, &rows, &lookups, "", &sort);
        assert_eq!(ids(&rows, &desc), vec!["h1", "h2", "h3"]);

        sort.toggle("hotelName");
        assert!(!sort.is_sorted());
        let restored = visible_rows(&schema, &rows, &lookups, "", &sort);
        assert_eq!(restored, original);
    }

    #[test]
    fn test_sort_is_stable_on_equal_keys() {
        let schema = EntityKind::Hotel.schema();
        let rows = hotels();
        let mut sort = SortState::new();

        sort.toggle("checkInDate");
        let asc = visible_rows(&schema, &rows, &Lookups::new(), "", &sort);
        assert_eq!(ids(&rows, &asc), vec!["h2", "h1", "h3"]);

        sort.toggle("checkInDate");
        let desc = visible_rows(&schema, &rows, &Lookups::new(), "", &sort);
        assert_eq!(ids(&rows, &desc), vec!["h1", "h3", "h2"]);
    }

    #[test]
    fn test_raw_comparison_is_a_total_order() {
        let values = ["9", "10", "1a", "NaN", "inf", "Taj", "taj", "", "2026-10-19"];
        for a in values {
            assert_eq!(compare_raw(a, a), Ordering::Equal);
            for b in values {
                assert_eq!(compare_raw(a, b), compare_raw(b, a).reverse());
                for c in values {
                    if compare_raw(a, b) == Ordering::Less && compare_raw(b, c) == Ordering::Less {
                        assert_eq!(compare_raw(a, c), Ordering::Less, "{a} < {b} < {c}");
                    }
                }
            }
        }
    }

    #[test]
    fn test_mixed_values_sort_as_text() {
        let schema = EntityKind::Team.schema();
        let rows: Vec<Record> = ["9", "10", "1a", "Beta", "alpha"]
            .iter()
            .enumerate()
            .map(|(i, name)| Record::new().with_id(format!("t{i}")).with("name", *name))
            .collect();
        let mut sort = SortState::new();
        sort.toggle("name");

        let order = visible_rows(&schema, &rows, &Lookups::new(), "", &sort);
        let names: Vec<String> = order.iter().map(|&i| rows[i].display("name")).collect();
        assert_eq!(names, vec!["10", "1a", "9", "alpha", "Beta"]);
    }

    #[test]
    fn test_switching_column_starts_ascending() {
        let mut sort = SortState::new();
        sort.toggle("hotelName");
        sort.toggle("hotelName");
        sort.toggle("checkInDate");
        assert_eq!(sort.direction_for("checkInDate"), Some(SortDirection::Ascending));
        assert_eq!(sort.direction_for("hotelName"), None);
    }

    #[test]
    fn test_sort_uses_raw_reference_value() {
        let rows = hotels();
        let mut sort = SortState::new();
        sort.toggle("facultyName");
        let order = visible_rows(&EntityKind::Hotel.schema(), &rows, &lookups(), "", &sort);
        assert_eq!(ids(&rows, &order), vec!["h2", "h3", "h1"]);
    }

    #[test]
    fn test_reference_cells_show_labels() {
        let schema = EntityKind::Hotel.schema();
        let field = schema.get_field("facultyName").unwrap();
        let rows = hotels();
        assert_eq!(cell_text(field, &rows[0], &lookups()), "Dr. Iyer");
        assert_eq!(cell_text(field, &rows[0], &Lookups::new()), "f2");
        assert_eq!(record_label(&schema, &rows[1], &lookups()), "Dr. Rao");
    }

    #[test]
    fn test_filter_matches_displayed_text() {
        let schema = EntityKind::Hotel.schema();
        let rows = hotels();
        let order = visible_rows(&schema, &rows, &lookups(), "rao", &SortState::new());
        assert_eq!(ids(&rows, &order), vec!["h2", "h3"]);
        assert!(visible_rows(&schema, &rows, &lookups(), "zzz", &SortState::new()).is_empty());
    }

    #[test]
    fn test_row_selection() {
        let rows = hotels();
        let all: Vec<&RecordId> = rows.iter().filter_map(|r| r.id.as_ref()).collect();
        let mut selection = RowSelection::new();

        selection.toggle(all[0]);
        assert!(selection.is_selected(all[0]));
        assert!(!selection.all_selected(all.iter().copied()));

        selection.toggle_all(all.iter().copied());
        assert_eq!(selection.len(), 3);
        assert!(selection.all_selected(all.iter().copied()));

        selection.toggle_all(all.iter().copied());
        assert!(selection.is_empty());
        assert!(!selection.all_selected(std::iter::empty()));
    }

    #[test]
    fn test_choice_cells_show_option_labels() {
        let schema = EntityKind::EventAssignment.schema();
        let field = schema.get_field("items").unwrap();
        let record = Record::new().with("items", vec!["hotel".to_string(), "session".to_string()]);
        assert_eq!(
            cell_text(field, &record, &Lookups::new()),
            "Hotel, Faculty Hall Session"
        );
    }
}
