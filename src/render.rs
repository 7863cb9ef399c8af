//! Plain-text rendering of records for the terminal.

use std::fmt::Display;

use crate::models::{BoardingPass, FlightParameters};

/// Render key/value rows as a framed two-column table.
///
/// Both columns share one width: the longest key or value plus two. Keys are
/// left-aligned, values right-aligned.
///
/// Example output:
/// ```text
/// ----------------------------
/// | gate number |          2 |
/// ----------------------------
/// ```
pub fn render_table(rows: &[(&str, String)]) -> String {
    let width = rows
        .iter()
        .map(|(key, value)| key.chars().count().max(value.chars().count()) + 2)
        .max()
        .unwrap_or(0);

    let frame = format!("{}\n", "-".repeat(2 * width + 2));
    let mut output = frame.clone();
    for (key, value) in rows {
        let key_pad = width - key.chars().count() - 1;
        let value_pad = width - value.chars().count() - 2;
        output.push_str("| ");
        output.push_str(key);
        output.push_str(&" ".repeat(key_pad));
        output.push('|');
        output.push_str(&" ".repeat(value_pad));
        output.push_str(value);
        output.push_str(" |\n");
        output.push_str(&frame);
    }
    output
}

pub fn boarding_pass_table(pass: &BoardingPass) -> String {
    render_table(&[
        ("ticket id", pass.ticket_id.clone()),
        ("first name", pass.first_name.clone()),
        ("last name", pass.last_name.clone()),
        ("plane number", pass.plane_number.to_string()),
        ("seat class", pass.seat_class.to_string()),
        ("seat number", pass.seat_number.to_string()),
        ("gate number", pass.gate_number.to_string()),
    ])
}

pub fn flight_parameters_table(params: &FlightParameters) -> String {
    render_table(&[
        ("flight number", params.plane_number.to_string()),
        ("plane type", params.kind.to_string()),
        (
            "number of business class seats",
            params.business_seats_number.to_string(),
        ),
        (
            "number of economic class seats",
            params.economic_seats_number.to_string(),
        ),
        ("carrier name", params.carrier.clone()),
    ])
}

pub fn gate_table(gate_number: u32) -> String {
    render_table(&[("gate number", gate_number.to_string())])
}

/// One description line per record.
pub fn render_records<'a, T, I>(records: I) -> String
where
    T: Display + 'a,
    I: IntoIterator<Item = &'a T>,
{
    let mut output = String::new();
    for record in records {
        output.push_str(&record.to_string());
        output.push('\n');
    }
    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Flight, PlaneKind, SeatClass};

    #[test]
    fn test_single_row() {
        let output = gate_table(2);
        assert_eq!(
            output,
            "----------------------------\n\
             | gate number |          2 |\n\
             ----------------------------\n"
        );
    }

    #[test]
    fn test_rows_share_width() {
        let output = render_table(&[("a", "1".to_string()), ("key", "longer".to_string())]);
        let lines: Vec<&str> = output.lines().collect();
        assert_eq!(lines.len(), 5);
        assert!(lines.iter().all(|l| l.chars().count() == 18));
        assert_eq!(lines[1], "| a      |     1 |");
        assert_eq!(lines[3], "| key    |longer |");
    }

    #[test]
    fn test_empty_table() {
        assert_eq!(render_table(&[]), "--\n");
    }

    #[test]
    fn test_boarding_pass() {
        let pass = BoardingPass {
            ticket_id: "5".to_string(),
            first_name: "Jan".to_string(),
            last_name: "Kowalski".to_string(),
            plane_number: 1,
            seat_class: SeatClass::Economic,
            seat_number: 10,
            gate_number: 2,
        };
        let output = boarding_pass_table(&pass);
        assert!(output.contains("| first name   |         Jan |"));
        assert!(output.contains("| seat class   |    economic |"));
    }

    #[test]
    fn test_flight_parameters() {
        let params = FlightParameters {
            plane_number: 1,
            kind: PlaneKind::WideBody,
            business_seats_number: 50,
            economic_seats_number: 200,
            carrier: "LOT".to_string(),
        };
        let output = flight_parameters_table(&params);
        assert!(output.contains("wide-body |"));
        assert!(output.contains("| carrier name"));
    }

    #[test]
    fn test_records() {
        let flights = vec![Flight::new(1).unwrap(), Flight::new(2).unwrap()];
        assert_eq!(
            render_records(&flights),
            "Flight: plane number: 1\nFlight: plane number: 2\n"
        );
    }
}
