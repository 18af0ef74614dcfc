//! Tab-delimited report file
//!
//! Labels are always English so reports from different machines can be
//! merged in a spreadsheet. Each session takes a title line with the file
//! name, three rows, and a blank line:
//!
//! ```text
//! run1.dat------------------------------------------------------------------
//! Heading:	300°	THdg:	300° 9' 8"	0°09'08"	X	0.5000
//! Duration:	1800 s.	Roll:	-0°30'0"	0°30'00"	Y	0.2500
//! Temperature:	26°C	Pitch:	1°15'0"	0°15'00"	Z	1.0000
//! ```

use std::io::{self, Write};

use crate::analysis::SessionSummary;

/// Width of the dashed title line
const TITLE_WIDTH: usize = 74;

/// Write one block per `(name, summary)` pair, in order
pub fn write_report<'a, W, I>(entries: I, mut writer: W) -> io::Result<()>
where
    W: Write,
    I: IntoIterator<Item = (&'a str, &'a SessionSummary)>,
{
    for (name, s) in entries {
        writeln!(writer, "{:-<width$}", name, width = TITLE_WIDTH)?;
        writeln!(
            writer,
            "Heading:\t{}°\tTHdg:\t{}°{:>2}'{:>2}\"\t{}\tX\t{:.4}",
            s.heading,
            s.thdg.degree_label(),
            s.thdg.minute,
            s.thdg.second,
            s.thdg.error_label(),
            s.deviation.x
        )?;
        writeln!(
            writer,
            "Duration:\t{} s.\tRoll:\t{}\t{}\tY\t{:.4}",
            s.duration,
            s.roll,
            s.roll.error_label(),
            s.deviation.y
        )?;
        writeln!(
            writer,
            "Temperature:\t{}°C\tPitch:\t{}\t{}\tZ\t{:.4}",
            s.average_temperature(),
            s.pitch,
            s.pitch.error_label(),
            s.deviation.z
        )?;
        writeln!(writer)?;
    }
    writer.flush()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::AngleDecomposition;
    use crate::types::Axes;

    #[test]
    fn test_report_block() {
        let summary = SessionSummary {
            thdg: AngleDecomposition::from_degrees(300.1523),
            roll: AngleDecomposition::from_degrees(-0.5),
            pitch: AngleDecomposition::from_degrees(1.25),
            heading: 300,
            duration: 1800,
            deviation: Axes::new(0.5, 0.25, 1.0),
            temperature: Axes::new(25, 26, 27),
            reference_index: 540,
            record_count: 1741,
        };

        let mut out = Vec::new();
        write_report([("run1.dat", &summary)], &mut out).unwrap();
        let text = String::from_utf8(out).unwrap();
        let lines: Vec<&str> = text.split('\n').collect();

        assert_eq!(lines[0].len(), TITLE_WIDTH);
        assert!(lines[0].starts_with("run1.dat---"));
        assert_eq!(
            lines[1],
            "Heading:\t300°\tTHdg:\t300° 9' 8\"\t0°09'08\"\tX\t0.5000"
        );
        assert_eq!(lines[2], "Duration:\t1800 s.\tRoll:\t-0°30'0\"\t0°30'00\"\tY\t0.2500");
        assert_eq!(lines[3], "Temperature:\t26°C\tPitch:\t1°15'0\"\t0°15'00\"\tZ\t1.0000");
        assert_eq!(lines[4], "");
        assert_eq!(lines.len(), 6);
    }

    #[test]
    fn test_empty_report() {
        let mut out = Vec::new();
        write_report(std::iter::empty(), &mut out).unwrap();
        assert!(out.is_empty());
    }
}
