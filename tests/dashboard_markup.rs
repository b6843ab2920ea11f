#[cfg(test)]
mod tests {
    use pathway::libs::dashboard::{extract_subjects, DashboardTable, MarkupError};

    /// A trimmed-down dashboard page: the subject table with the fixed id
    /// hooks, surrounded by unrelated markup the extractor must ignore.
    const PAGE: &str = r#"
        <html>
          <body>
            <h1>Welcome back, sam</h1>
            <div class="toolbar"><span id="todoSidebarToggle">Todo</span></div>
            <table id="subjectTable">
              <tr class="heading"><th>Subject</th><th>Marks</th><th>Priority</th><th>Category</th></tr>
              <tr id="subject-0">
                <td>maths</td>
                <td id="marks-display-0">78</td>
                <td id="priority0">High</td>
                <td id="category0">Core</td>
              </tr>
              <tr id="subject-1">
                <td>chemistry</td>
                <td id="marks-display-1">55</td>
                <td id="priority1">Medium</td>
                <td id="category1">Science</td>
              </tr>
              <tr id="subject-2">
                <td>art &amp; design</td>
                <td id="marks-display-2">91</td>
                <td id="priority2">Low</td>
                <td id="category2">Elective</td>
              </tr>
            </table>
          </body>
        </html>
    "#;

    #[test]
    fn test_extraction_reads_all_hooked_rows() {
        let rows = extract_subjects(PAGE).unwrap();
        assert_eq!(rows.len(), 3);

        assert_eq!(rows[0].name, "maths");
        assert_eq!(rows[0].marks, 78);
        assert_eq!(rows[0].priority, "High");
        assert_eq!(rows[0].category, "Core");

        assert_eq!(rows[2].name, "art & design");
        assert_eq!(rows[2].index, 2);
    }

    #[test]
    fn test_heading_row_without_hooks_is_ignored() {
        let rows = extract_subjects(PAGE).unwrap();
        assert!(rows.iter().all(|row| row.name != "Subject"));
    }

    #[test]
    fn test_update_patches_the_displayed_row_in_place() {
        let mut table = DashboardTable::new(extract_subjects(PAGE).unwrap());

        assert!(table.patch(1, 62, "High", "Science"));
        let row = table.find("chemistry").unwrap();
        assert_eq!(row.marks, 62);
        assert_eq!(row.priority, "High");

        // Patching an unknown index changes nothing.
        assert!(!table.patch(9, 0, "Low", ""));
    }

    #[test]
    fn test_delete_removes_only_the_target_row() {
        let mut table = DashboardTable::new(extract_subjects(PAGE).unwrap());

        let removed = table.remove(1).unwrap();
        assert_eq!(removed.name, "chemistry");

        // Surviving rows keep their original indices, like row elements
        // keeping their ids after a sibling is removed.
        let indices: Vec<usize> = table.rows().iter().map(|row| row.index).collect();
        assert_eq!(indices, vec![0, 2]);
        assert!(table.find("chemistry").is_none());
    }

    #[test]
    fn test_lookup_matches_lowercased_key() {
        let table = DashboardTable::new(extract_subjects(PAGE).unwrap());
        assert!(table.find("Maths").is_some());
        assert!(table.find("MATHS").is_some());
        assert!(table.find("biology").is_none());
    }

    #[test]
    fn test_incomplete_row_is_a_payload_error() {
        let markup = r#"
            <tr id="subject-0">
              <td>maths</td>
              <td id="priority0">High</td>
              <td id="category0">Core</td>
            </tr>
        "#;
        assert!(matches!(extract_subjects(markup), Err(MarkupError::MissingCell(0, "marks"))));
    }
}
