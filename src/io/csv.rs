use std::io::{self, Write};
use std::path::Path;

use crate::sim::Sample;

/// Write the flight series to CSV format.
///
/// Columns: time, altitude, velocity, thrust
pub fn write_series<W: Write>(writer: &mut W, series: &[Sample]) -> io::Result<()> {
    writeln!(writer, "time,altitude,velocity,thrust")?;

    for s in series {
        writeln!(
            writer,
            "{:.4},{:.4},{:.4},{:.4}",
            s.time, s.altitude, s.velocity, s.thrust
        )?;
    }

    Ok(())
}

/// Write the flight series to a CSV file at the given path.
pub fn write_series_file(path: impl AsRef<Path>, series: &[Sample]) -> io::Result<()> {
    let mut file = io::BufWriter::new(std::fs::File::create(path)?);
    write_series(&mut file, series)?;
    file.flush()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn csv_output_has_header_and_rows() {
        let series = vec![
            Sample { time: 0.0, altitude: 0.0, velocity: 0.0, thrust: 105.0 },
            Sample { time: 0.001, altitude: 0.0001, velocity: 0.091, thrust: 105.0 },
        ];

        let mut buf = Vec::new();
        write_series(&mut buf, &series).unwrap();
        let output = String::from_utf8(buf).unwrap();
        let lines: Vec<&str> = output.lines().collect();

        assert_eq!(lines[0], "time,altitude,velocity,thrust");
        assert_eq!(lines.len(), 3); // header + 2 data rows
        assert_eq!(lines[1], "0.0000,0.0000,0.0000,105.0000");
        assert!(lines[2].starts_with("0.0010,"));
    }

    #[test]
    fn csv_file_roundtrip_line_count() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("flight.csv");
        let series = vec![Sample { time: 0.0, altitude: 0.0, velocity: 0.0, thrust: 0.0 }; 4];
        write_series_file(&path, &series).unwrap();
        let text = std::fs::read_to_string(&path).unwrap();
        assert_eq!(text.lines().count(), 5);
    }
}
