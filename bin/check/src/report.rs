use std::fmt;

use contrast::{Color, Component, ContrastResult, Level, TextSize};
use serde::Serialize;

/// Pass/fail of both levels for one text size.
#[derive(Debug, PartialEq, Serialize)]
pub struct Conformance {
    pub aa: bool,
    pub aaa: bool,
}

impl Conformance {
    fn new(result: &ContrastResult, size: TextSize) -> Self {
        Self {
            aa: result.passes(Level::AA, size),
            aaa: result.passes(Level::AAA, size),
        }
    }
}

/// Everything printed for one foreground/background pair.
#[derive(Debug, Serialize)]
pub struct Report {
    pub foreground: String,
    pub background: String,
    /// Truncated to two decimals so it never overstates the contrast.
    pub ratio: Component,
    pub normal: Conformance,
    pub large: Conformance,
}

impl Report {
    pub fn new(foreground: &Color, background: &Color, result: &ContrastResult) -> Self {
        Self {
            foreground: foreground.to_string(),
            background: background.to_string(),
            ratio: result.truncated_ratio(),
            normal: Conformance::new(result, TextSize::Normal),
            large: Conformance::new(result, TextSize::Large),
        }
    }
}

fn pass_fail(pass: bool) -> &'static str {
    if pass {
        "pass"
    } else {
        "fail"
    }
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Foreground: {}", self.foreground)?;
        writeln!(f, "Background: {}", self.background)?;
        writeln!(f, "Contrast:   {:.2}:1", self.ratio)?;
        writeln!(f)?;

        for (size, conformance) in [(TextSize::Normal, &self.normal), (TextSize::Large, &self.large)] {
            writeln!(f, "  {:<6} text  {:<3}  {}", size, Level::AA, pass_fail(conformance.aa))?;
            writeln!(f, "  {:<6} text  {:<3}  {}", size, Level::AAA, pass_fail(conformance.aaa))?;
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn report(foreground: Color, background: Color) -> Report {
        Report::new(&foreground, &background, &foreground.contrast_ratio(&background))
    }

    #[test]
    fn red_on_white() {
        let report = report(Color::new(255, 0, 0), Color::WHITE);
        assert_eq!(report.ratio, 3.99);
        assert_eq!(report.normal, Conformance { aa: false, aaa: false });
        assert_eq!(report.large, Conformance { aa: true, aaa: false });
    }

    #[test]
    fn ratio_below_aa_is_not_shown_as_passing() {
        let report = report(Color::new(0x15, 0x8a, 0x00), Color::WHITE);
        assert_eq!(report.ratio, 4.49);
        assert!(!report.normal.aa);
        assert!(report.to_string().contains("Contrast:   4.49:1\n"));
    }

    #[test]
    fn text_layout() {
        let report = report(Color::new(0x76, 0x76, 0x76), Color::WHITE);
        assert_eq!(
            report.to_string(),
            "Foreground: #767676\n\
             Background: #ffffff\n\
             Contrast:   4.54:1\n\
             \n  normal text  AA   pass\n\
             \x20 normal text  AAA  fail\n\
             \x20 large  text  AA   pass\n\
             \x20 large  text  AAA  pass\n"
        );
    }
}
