//! Check report output

use std::io::{self, Write};
use termcolor::{Color, ColorChoice, ColorSpec, StandardStream, WriteColor};

use crate::check::CaseOutcome;

/// Print a PASS/FAIL line per case, diffs for failures, and a summary.
pub fn print_report(outcomes: &[CaseOutcome], use_color: bool) -> io::Result<()> {
    let choice = if use_color {
        ColorChoice::Auto
    } else {
        ColorChoice::Never
    };
    let mut stdout = StandardStream::stdout(choice);
    write_report(&mut stdout, outcomes)
}

pub fn write_report<W: WriteColor>(out: &mut W, outcomes: &[CaseOutcome]) -> io::Result<()> {
    for outcome in outcomes {
        let (label, color) = if outcome.passed {
            ("PASS", Color::Green)
        } else {
            ("FAIL", Color::Red)
        };
        out.set_color(ColorSpec::new().set_fg(Some(color)).set_bold(true))?;
        write!(out, "{}", label)?;
        out.reset()?;
        writeln!(out, " {}", outcome.name)?;

        if let Some(error) = &outcome.error {
            writeln!(out, "    error: {}", error)?;
        }
        for diff in &outcome.diff {
            writeln!(out, "    line {}:", diff.index + 1)?;
            out.set_color(ColorSpec::new().set_fg(Some(Color::Green)))?;
            writeln!(out, "      - {}", diff.expected.as_deref().unwrap_or("<none>"))?;
            out.set_color(ColorSpec::new().set_fg(Some(Color::Red)))?;
            writeln!(out, "      + {}", diff.received.as_deref().unwrap_or("<none>"))?;
            out.reset()?;
        }
    }

    let passed = outcomes.iter().filter(|o| o.passed).count();
    writeln!(out)?;
    writeln!(out, "{} passed, {} failed", passed, outcomes.len() - passed)?;
    Ok(())
}
