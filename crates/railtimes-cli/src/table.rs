//! Fixed-width table rendering for departure rows

use railtimes_store::DepartureRow;
use std::io::Write;

const DEST_WIDTH: usize = 30;
const NUMBER_WIDTH: usize = 20;
const TIME_WIDTH: usize = 20;

/// Render rows as a three-column bordered table
///
/// An empty slice prints a short notice instead of a table.
pub fn render<W: Write>(out: &mut W, rows: &[DepartureRow]) -> std::io::Result<()> {
    if rows.is_empty() {
        writeln!(out, "The departure list is empty.")?;
        return Ok(());
    }

    let line = format!(
        "+-{}-+-{}-+-{}-+",
        "-".repeat(DEST_WIDTH),
        "-".repeat(NUMBER_WIDTH),
        "-".repeat(TIME_WIDTH)
    );

    writeln!(out, "{}", line)?;
    writeln!(
        out,
        "| {:^dw$} | {:^nw$} | {:^tw$} |",
        "Destination",
        "Train number",
        "Departure time",
        dw = DEST_WIDTH,
        nw = NUMBER_WIDTH,
        tw = TIME_WIDTH
    )?;
    writeln!(out, "{}", line)?;

    for row in rows {
        writeln!(
            out,
            "| {:<dw$} | {:<nw$} | {:>tw$} |",
            row.dest,
            row.number,
            row.departure_time,
            dw = DEST_WIDTH,
            nw = NUMBER_WIDTH,
            tw = TIME_WIDTH
        )?;
        writeln!(out, "{}", line)?;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render_to_string(rows: &[DepartureRow]) -> String {
        let mut buf = Vec::new();
        render(&mut buf, rows).unwrap();
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn test_empty_rows_print_notice() {
        let output = render_to_string(&[]);
        assert_eq!(output, "The departure list is empty.\n");
    }

    #[test]
    fn test_table_contains_header_and_row() {
        let rows = vec![DepartureRow {
            dest: "Moscow".to_string(),
            departure_time: "08:00".to_string(),
            number: 1,
        }];

        let output = render_to_string(&rows);
        assert!(output.contains("Destination"));
        assert!(output.contains("Train number"));
        assert!(output.contains("Departure time"));
        assert!(output.contains("Moscow"));
        assert!(output.contains("08:00"));
        assert!(output.starts_with("+-"));
    }

    #[test]
    fn test_rows_render_in_order() {
        let rows = vec![
            DepartureRow {
                dest: "Moscow".to_string(),
                departure_time: "08:00".to_string(),
                number: 1,
            },
            DepartureRow {
                dest: "Kazan".to_string(),
                departure_time: "10:15".to_string(),
                number: 2,
            },
        ];

        let output = render_to_string(&rows);
        let moscow = output.find("Moscow").unwrap();
        let kazan = output.find("Kazan").unwrap();
        assert!(moscow < kazan);
    }
}
