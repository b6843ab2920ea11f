//! Subject table view model and dashboard markup extraction.
//!
//! The server renders the subject table into the dashboard page; the
//! client reads the displayed values back out of that markup. Row hooks
//! are a fixed contract with the page template: the row carries
//! `id="subject-<i>"`, the value cells carry `marks-display-<i>`,
//! `priority<i>` and `category<i>`, and the name cell is the first cell
//! of the row without an id. Updates and deletes address rows by that
//! same position index.

use quick_xml::escape::unescape;
use quick_xml::events::{BytesStart, Event};
use quick_xml::reader::Reader as XmlReader;
use thiserror::Error;

/// One rendered subject row, addressed by its position index.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubjectRow {
    pub index: usize,
    pub name: String,
    pub marks: i64,
    pub priority: String,
    pub category: String,
}

#[derive(Debug, Error)]
pub enum MarkupError {
    #[error("dashboard markup parse error: {0}")]
    Xml(String),
    #[error("subject row {0} is missing its {1} cell")]
    MissingCell(usize, &'static str),
    #[error("subject row {0} has non-numeric marks '{1}'")]
    BadMarks(usize, String),
}

/// The displayed subject table with the in-place patch semantics of the
/// dashboard: editing a row rewrites its three value cells, deleting a
/// row removes it without renumbering the survivors.
#[derive(Debug, Default)]
pub struct DashboardTable {
    rows: Vec<SubjectRow>,
}

impl DashboardTable {
    pub fn new(rows: Vec<SubjectRow>) -> Self {
        Self { rows }
    }

    pub fn rows(&self) -> &[SubjectRow] {
        &self.rows
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Looks a row up by subject name, case-insensitively, the way the
    /// server keys subjects on their lowercased name.
    pub fn find(&self, name: &str) -> Option<&SubjectRow> {
        let wanted = name.to_lowercase();
        self.rows.iter().find(|row| row.name.to_lowercase() == wanted)
    }

    /// Patches the three displayed values of the row with the given
    /// index. Returns false when no such row exists.
    pub fn patch(&mut self, index: usize, marks: i64, priority: &str, category: &str) -> bool {
        match self.rows.iter_mut().find(|row| row.index == index) {
            Some(row) => {
                row.marks = marks;
                row.priority = priority.to_string();
                row.category = category.to_string();
                true
            }
            None => false,
        }
    }

    /// Removes the row with the given index. Remaining rows keep their
    /// original indices, exactly like removing one row element from the
    /// rendered table.
    pub fn remove(&mut self, index: usize) -> Option<SubjectRow> {
        let position = self.rows.iter().position(|row| row.index == index)?;
        Some(self.rows.remove(position))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Cell {
    Name,
    Marks,
    Priority,
    Category,
}

#[derive(Debug, Default)]
struct RowBuilder {
    index: usize,
    name: Option<String>,
    marks: Option<String>,
    priority: Option<String>,
    category: Option<String>,
}

impl RowBuilder {
    fn set(&mut self, cell: Cell, value: String) {
        let slot = match cell {
            Cell::Name => &mut self.name,
            Cell::Marks => &mut self.marks,
            Cell::Priority => &mut self.priority,
            Cell::Category => &mut self.category,
        };
        if slot.is_none() {
            *slot = Some(value);
        }
    }

    fn finish(self) -> Result<SubjectRow, MarkupError> {
        let index = self.index;
        let name = self.name.ok_or(MarkupError::MissingCell(index, "name"))?;
        let marks = self.marks.ok_or(MarkupError::MissingCell(index, "marks"))?;
        let priority = self.priority.ok_or(MarkupError::MissingCell(index, "priority"))?;
        let category = self.category.ok_or(MarkupError::MissingCell(index, "category"))?;
        let marks = marks.parse::<i64>().map_err(|_| MarkupError::BadMarks(index, marks))?;
        Ok(SubjectRow {
            index,
            name,
            marks,
            priority,
            category,
        })
    }
}

fn attribute(e: &BytesStart<'_>, key: &[u8]) -> Option<String> {
    e.attributes()
        .flatten()
        .find(|attr| attr.key.as_ref() == key)
        .map(|attr| String::from_utf8_lossy(&attr.value).into_owned())
}

fn row_index(id: &str) -> Option<usize> {
    id.strip_prefix("subject-")?.parse().ok()
}

/// Extracts the subject rows out of the dashboard page markup.
///
/// The reader streams through the whole document and reacts only to the
/// row and cell hooks; any surrounding markup is ignored. A row missing
/// one of its hooked cells is an error rather than a silently short row.
pub fn extract_subjects(markup: &str) -> Result<Vec<SubjectRow>, MarkupError> {
    let mut reader = XmlReader::from_str(markup);
    reader.config_mut().trim_text(false);
    reader.config_mut().check_end_names = false;

    let mut rows: Vec<SubjectRow> = Vec::new();
    let mut row: Option<RowBuilder> = None;
    let mut row_tag: Vec<u8> = Vec::new();
    let mut cell: Option<Cell> = None;
    let mut cell_tag: Vec<u8> = Vec::new();
    let mut current_text = String::new();

    loop {
        match reader.read_event() {
            Ok(Event::Start(e)) => {
                if let Some(builder) = row.as_mut() {
                    if cell.is_none() {
                        let target = match attribute(&e, b"id") {
                            Some(id) if id == format!("marks-display-{}", builder.index) => Some(Cell::Marks),
                            Some(id) if id == format!("priority{}", builder.index) => Some(Cell::Priority),
                            Some(id) if id == format!("category{}", builder.index) => Some(Cell::Category),
                            Some(_) => None,
                            // The name cell is the first un-hooked cell of the row.
                            None if builder.name.is_none() => Some(Cell::Name),
                            None => None,
                        };
                        if let Some(target) = target {
                            cell = Some(target);
                            cell_tag = e.local_name().as_ref().to_vec();
                            current_text.clear();
                        }
                    }
                } else if let Some(index) = attribute(&e, b"id").as_deref().and_then(row_index) {
                    row = Some(RowBuilder {
                        index,
                        ..RowBuilder::default()
                    });
                    row_tag = e.local_name().as_ref().to_vec();
                }
            }
            Ok(Event::End(e)) => {
                let local_name = e.local_name();
                if let Some(target) = cell {
                    if local_name.as_ref() == cell_tag.as_slice() {
                        if let Some(builder) = row.as_mut() {
                            builder.set(target, current_text.trim().to_string());
                        }
                        current_text.clear();
                        cell = None;
                    }
                } else if local_name.as_ref() == row_tag.as_slice() {
                    if let Some(builder) = row.take() {
                        rows.push(builder.finish()?);
                    }
                }
            }
            Ok(Event::Text(e)) => {
                if cell.is_some() {
                    if let Ok(decoded) = e.decode() {
                        if let Ok(text) = unescape(&decoded) {
                            current_text.push_str(&text);
                        }
                    }
                }
            }
            Ok(Event::GeneralRef(e)) => {
                // Handle entity references like &amp;
                if cell.is_some() {
                    if let Ok(decoded) = e.decode() {
                        let resolved = match decoded.as_ref() {
                            "amp" => "&",
                            "lt" => "<",
                            "gt" => ">",
                            "quot" => "\"",
                            "apos" => "'",
                            _ => "",
                        };
                        current_text.push_str(resolved);
                    }
                }
            }
            Ok(Event::Eof) => break,
            Err(e) => return Err(MarkupError::Xml(e.to_string())),
            _ => {}
        }
    }

    Ok(rows)
}

#[cfg(test)]
mod tests {
    use super::*;

    const PAGE: &str = r#"
        <table id="subjectTable">
          <tr id="subject-0">
            <td>maths</td>
            <td id="marks-display-0">78</td>
            <td id="priority0">High</td>
            <td id="category0">Core</td>
          </tr>
          <tr id="subject-1">
            <td>history &amp; civics</td>
            <td id="marks-display-1">64</td>
            <td id="priority1">Low</td>
            <td id="category1">Elective</td>
          </tr>
        </table>
    "#;

    #[test]
    fn extracts_rows_with_indices() {
        let rows = extract_subjects(PAGE).unwrap();
        assert_eq!(rows.len(), 2);
        assert_eq!(
            rows[0],
            SubjectRow {
                index: 0,
                name: "maths".to_string(),
                marks: 78,
                priority: "High".to_string(),
                category: "Core".to_string(),
            }
        );
        assert_eq!(rows[1].name, "history & civics");
        assert_eq!(rows[1].index, 1);
    }

    #[test]
    fn missing_cell_is_an_error() {
        let markup = r#"<tr id="subject-0"><td>maths</td><td id="marks-display-0">78</td></tr>"#;
        assert!(matches!(extract_subjects(markup), Err(MarkupError::MissingCell(0, _))));
    }

    #[test]
    fn non_numeric_marks_are_an_error() {
        let markup = r#"
            <tr id="subject-0">
              <td>maths</td>
              <td id="marks-display-0">n/a</td>
              <td id="priority0">High</td>
              <td id="category0">Core</td>
            </tr>
        "#;
        assert!(matches!(extract_subjects(markup), Err(MarkupError::BadMarks(0, _))));
    }

    #[test]
    fn table_lookup_is_case_insensitive() {
        let table = DashboardTable::new(extract_subjects(PAGE).unwrap());
        assert_eq!(table.find("MATHS").map(|row| row.index), Some(0));
        assert!(table.find("physics").is_none());
    }

    #[test]
    fn patch_rewrites_displayed_values_in_place() {
        let mut table = DashboardTable::new(extract_subjects(PAGE).unwrap());
        assert!(table.patch(1, 71, "Medium", "Core"));

        let row = table.find("history & civics").unwrap();
        assert_eq!(row.marks, 71);
        assert_eq!(row.priority, "Medium");
        assert_eq!(row.category, "Core");
    }

    #[test]
    fn remove_keeps_surviving_indices() {
        let mut table = DashboardTable::new(extract_subjects(PAGE).unwrap());
        assert!(table.remove(0).is_some());

        assert_eq!(table.rows().len(), 1);
        assert_eq!(table.rows()[0].index, 1);
        assert!(table.remove(0).is_none());
    }
}
