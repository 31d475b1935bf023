//! Report rendering
//!
//! Pure presentation: takes the sorted reports and totals from the scan and
//! builds the table text. Callers decide where to print it.

use crate::scan::{FileReport, Totals};

/// Render the per-file table followed by the summary block.
///
/// The path column is as wide as the longest path. Callers must handle the
/// zero-file case before rendering; the column width is meaningless for an
/// empty report list.
pub fn render(reports: &[FileReport], totals: &Totals) -> String {
    let width = reports.iter().map(|r| r.path.len()).max().unwrap_or(0);

    let mut output = String::new();
    output.push_str(&format!(
        "{:<width$} | Code Lines | Excluded Lines | Total Lines\n",
        "File Path"
    ));
    output.push_str(&"-".repeat(width + 45));
    output.push('\n');

    for report in reports {
        output.push_str(&format!(
            "{:<width$} | {:<11} | {:<14} | {}\n",
            report.path, report.code_lines, report.excluded_lines, report.total_lines
        ));
    }

    output.push('\n');
    output.push_str(&format!("Total .cs files counted: {}\n", totals.files));
    output.push_str(&format!(
        "Total code lines in .cs files: {}\n",
        totals.code_lines
    ));
    output.push_str(&format!(
        "Total excluded lines (comments and empty lines) in .cs files: {}\n",
        totals.excluded_lines
    ));
    output.push_str(&format!("Total lines in .cs files: {}\n", totals.total_lines));

    output
}

#[cfg(test)]
mod tests {
    use super::*;

    fn report(path: &str, code: usize, excluded: usize) -> FileReport {
        FileReport {
            path: path.to_string(),
            code_lines: code,
            excluded_lines: excluded,
            total_lines: code + excluded,
        }
    }

    fn totals_of(reports: &[FileReport]) -> Totals {
        Totals {
            files: reports.len(),
            code_lines: reports.iter().map(|r| r.code_lines).sum(),
            excluded_lines: reports.iter().map(|r| r.excluded_lines).sum(),
            total_lines: reports.iter().map(|r| r.total_lines).sum(),
        }
    }

    #[test]
    fn test_render_single_file() {
        let reports = vec![report("src/Program.cs", 10, 4)];
        let output = render(&reports, &totals_of(&reports));

        let lines: Vec<&str> = output.lines().collect();
        assert_eq!(
            lines[0],
            "File Path      | Code Lines | Excluded Lines | Total Lines"
        );
        assert_eq!(lines[1], "-".repeat("src/Program.cs".len() + 45));
        assert_eq!(
            lines[2],
            "src/Program.cs | 10          | 4              | 14"
        );
        assert_eq!(lines[3], "");
        assert_eq!(lines[4], "Total .cs files counted: 1");
        assert_eq!(lines[5], "Total code lines in .cs files: 10");
        assert_eq!(
            lines[6],
            "Total excluded lines (comments and empty lines) in .cs files: 4"
        );
        assert_eq!(lines[7], "Total lines in .cs files: 14");
    }

    #[test]
    fn test_render_pads_to_longest_path() {
        let reports = vec![
            report("a/very/long/path/File.cs", 3, 0),
            report("short.cs", 1, 1),
        ];
        let output = render(&reports, &totals_of(&reports));
        let width = "a/very/long/path/File.cs".len();

        let lines: Vec<&str> = output.lines().collect();
        assert!(lines[0].starts_with(&format!("{:<width$} |", "File Path")));
        assert_eq!(lines[1].len(), width + 45);
        assert!(lines[3].starts_with(&format!("{:<width$} |", "short.cs")));
    }

    #[test]
    fn test_render_row_order_follows_input() {
        let reports = vec![report("b.cs", 5, 0), report("a.cs", 2, 0)];
        let output = render(&reports, &totals_of(&reports));

        let b_pos = output.find("b.cs").unwrap();
        let a_pos = output.find("a.cs").unwrap();
        assert!(b_pos < a_pos);
    }
}
