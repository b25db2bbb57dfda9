use std::io::{self, Write};

use crate::limiter::decibel_limiter;
use crate::validation::ValidationReport;

/// Levels shown by the plain input/output table when none are given.
pub const DEFAULT_LEVELS: [f64; 10] = [-15.0, -10.0, -5.0, 0.0, 3.0, 6.0, 10.0, 15.0, 20.0, 25.0];

pub fn write_level_table<W: Write>(out: &mut W, levels: &[f64]) -> io::Result<()> {
    writeln!(out, "Input (dB) | Output (dB)")?;
    writeln!(out, "----------|-----------")?;
    for &level in levels {
        writeln!(out, "{:10.2} | {:10.2}", level, decibel_limiter(level))?;
    }
    Ok(())
}

pub fn write_validation_report<W: Write>(out: &mut W, report: &ValidationReport) -> io::Result<()> {
    writeln!(out, "Detailed Test Results:")?;
    writeln!(out, "Input (dB) | Output (dB) | Within Range")?;
    writeln!(out, "----------|-------------|-------------")?;
    for s in report.samples() {
        let within = if s.within_range { "Yes" } else { "No" };
        writeln!(out, "{:10.2} | {:11.2} | {:13}", s.input, s.output, within)?;
    }

    writeln!(out)?;
    writeln!(out, "Overall Test Result: {}", if report.passed() { "PASSED" } else { "FAILED" })?;

    if !report.passed() {
        writeln!(out)?;
        writeln!(out, "Failed Tests (Input, Output):")?;
        for s in report.failures() {
            writeln!(out, "  {:.2} dB -> {:.2} dB", s.input, s.output)?;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {

    use super::*;
    use crate::validation::test_limiter;

    fn render<F>(f: F) -> String
    where F: FnOnce(&mut Vec<u8>) -> io::Result<()> {
        let mut buf = Vec::new();
        f(&mut buf).unwrap();
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn level_table() {
        let text = render(|out| write_level_table(out, &[-15.0, 0.0, 20.0]));
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines, [
            "Input (dB) | Output (dB)",
            "----------|-----------",
            "    -15.00 |     -15.00",
            "      0.00 |       3.69",
            "     20.00 |      14.00",
        ]);
    }

    #[test]
    fn default_table_has_a_row_per_level() {
        let text = render(|out| write_level_table(out, &DEFAULT_LEVELS));
        assert_eq!(text.lines().count(), DEFAULT_LEVELS.len() + 2);
        assert!(text.contains("     10.00 |       6.14"));
    }

    #[test]
    fn passing_report() {
        let report = test_limiter(vec![-10.0, 4.0]);
        let text = render(|out| write_validation_report(out, &report));
        assert_eq!(text, "Detailed Test Results:\n\
                          Input (dB) | Output (dB) | Within Range\n\
                          ----------|-------------|-------------\n\
                          \x20   -10.00 |       -4.00 | Yes          \n\
                          \x20     4.00 |        4.00 | Yes          \n\
                          \n\
                          Overall Test Result: PASSED\n");
    }

    #[test]
    fn failing_report_lists_failures() {
        let report = test_limiter(vec![20.0, 25.0]);
        let text = render(|out| write_validation_report(out, &report));
        assert!(text.contains("     25.00 |       25.00 | No           \n"));
        assert!(text.contains("Overall Test Result: FAILED\n"));
        assert!(text.ends_with("Failed Tests (Input, Output):\n  25.00 dB -> 25.00 dB\n"));
    }
}
