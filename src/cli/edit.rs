//! Edit command implementation.
//!
//! Reads a PPM file, applies one operation and writes the result.

use std::path::{Path, PathBuf};

use clap::{Args, ValueEnum};
use log::info;

use crate::error::{PpmError, Result};
use crate::output::{display_path, Printer};
use crate::parser::{parse_file, ParseOptions};
use crate::render::{write_ppm, EncodeOptions};
use crate::transform::{self, Operation};

/// Edit names accepted on the command line.
#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum OperationKind {
    Invert,
    Grayscale,
    Emboss,
    Motionblur,
}

/// Apply an edit to a PPM image
#[derive(Args, Debug)]
pub struct EditArgs {
    /// Input PPM (P3) file
    pub input: PathBuf,

    /// Output file
    pub output: PathBuf,

    /// Edit to apply
    #[arg(value_enum)]
    pub operation: OperationKind,

    /// Blur length in pixels (motionblur only)
    pub length: Option<u32>,

    /// Reject data after the last pixel
    #[arg(long)]
    pub strict: bool,

    /// Header comment for the output file
    #[arg(long, conflicts_with = "no_comment")]
    pub comment: Option<String>,

    /// Omit the header comment
    #[arg(long)]
    pub no_comment: bool,
}

impl EditArgs {
    /// Resolve the operation, checking that a blur length is given only
    /// where one is expected.
    pub fn operation(&self) -> Result<Operation> {
        let op = match (self.operation, self.length) {
            (OperationKind::Motionblur, Some(length)) => Operation::MotionBlur { length },
            (OperationKind::Motionblur, None) => {
                return Err(PpmError::Usage {
                    message: "motionblur requires a blur length".to_string(),
                    help: Some("e.g. ppmedit in.ppm out.ppm motionblur 5".to_string()),
                });
            }
            (_, Some(length)) => {
                return Err(PpmError::Usage {
                    message: format!("unexpected argument '{}'", length),
                    help: Some("Only motionblur takes a blur length".to_string()),
                });
            }
            (OperationKind::Invert, None) => Operation::Invert,
            (OperationKind::Grayscale, None) => Operation::Grayscale,
            (OperationKind::Emboss, None) => Operation::Emboss,
        };
        Ok(op)
    }

    pub fn parse_options(&self) -> ParseOptions {
        ParseOptions {
            strict: self.strict,
        }
    }

    pub fn encode_options(&self) -> EncodeOptions {
        if self.no_comment {
            return EncodeOptions { comment: None };
        }
        match &self.comment {
            Some(comment) => EncodeOptions {
                comment: Some(comment.clone()),
            },
            None => EncodeOptions::default(),
        }
    }
}

pub fn run(args: EditArgs, printer: &Printer) -> Result<()> {
    // Validate the invocation before touching the file system
    let op = args.operation()?;

    let mut image = parse_file(&args.input, &args.parse_options())?;
    info!(
        "loaded {} ({}x{})",
        args.input.display(),
        image.width(),
        image.height()
    );

    transform::apply(&mut image, &op);

    write_ppm(&image, &args.output, &args.encode_options())?;

    printer.status(
        op.verb(),
        &status_message(&op, &args.input, &args.output, printer),
    );

    Ok(())
}

/// Message for the status line after a successful edit,
/// e.g. "in.ppm (length 3) -> out.ppm".
fn status_message(op: &Operation, input: &Path, output: &Path, printer: &Printer) -> String {
    let detail = match op {
        Operation::MotionBlur { length } => format!(" (length {})", length),
        _ => String::new(),
    };
    format!(
        "{}{} {} {}",
        display_path(input),
        detail,
        printer.dim("->"),
        display_path(output)
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    fn fixture(name: &str) -> PathBuf {
        PathBuf::from(env!("CARGO_MANIFEST_DIR"))
            .join("tests")
            .join("fixtures")
            .join(name)
    }

    fn args(input: &Path, output: &Path, operation: OperationKind, length: Option<u32>) -> EditArgs {
        EditArgs {
            input: input.to_path_buf(),
            output: output.to_path_buf(),
            operation,
            length,
            strict: false,
            comment: None,
            no_comment: false,
        }
    }

    /// Channel values after the header, in file order.
    fn body_values(text: &str) -> Vec<u32> {
        text.lines()
            .filter(|l| !l.starts_with('#'))
            .skip(3)
            .map(|l| l.parse().unwrap())
            .collect()
    }

    #[test]
    fn test_invert_file() {
        let dir = tempdir().unwrap();
        let input = dir.path().join("in.ppm");
        let output = dir.path().join("out.ppm");
        fs::write(&input, "P3\n2 1\n255\n10\n20\n30\n40\n50\n60\n").unwrap();

        run(args(&input, &output, OperationKind::Invert, None), &Printer::plain()).unwrap();

        let written = fs::read_to_string(&output).unwrap();
        assert!(written.starts_with("P3\n# Created by ppmedit\n2 1\n255\n"));
        assert_eq!(body_values(&written), vec![245, 235, 225, 215, 205, 195]);
    }

    #[test]
    fn test_fixture_operations() {
        let dir = tempdir().unwrap();
        let input = fixture("gradient.ppm");

        for (kind, length) in [
            (OperationKind::Invert, None),
            (OperationKind::Grayscale, None),
            (OperationKind::Emboss, None),
            (OperationKind::Motionblur, Some(3)),
        ] {
            let output = dir.path().join(format!("{:?}.ppm", kind));
            run(args(&input, &output, kind, length), &Printer::plain()).unwrap();

            let written = fs::read_to_string(&output).unwrap();
            assert!(written.starts_with("P3\n"));
            assert_eq!(body_values(&written).len(), 4 * 3 * 3);
        }
    }

    #[test]
    fn test_motionblur_without_length_writes_nothing() {
        let dir = tempdir().unwrap();
        let output = dir.path().join("out.ppm");

        let err = run(
            args(&fixture("gradient.ppm"), &output, OperationKind::Motionblur, None),
            &Printer::plain(),
        )
        .unwrap_err();

        assert!(matches!(err, PpmError::Usage { .. }));
        assert!(!output.exists());
    }

    #[test]
    fn test_length_for_other_operation_is_usage_error() {
        let a = args(Path::new("in.ppm"), Path::new("out.ppm"), OperationKind::Emboss, Some(2));
        assert!(matches!(a.operation(), Err(PpmError::Usage { .. })));
    }

    #[test]
    fn test_usage_checked_before_reading_input() {
        let dir = tempdir().unwrap();
        let missing = dir.path().join("missing.ppm");
        let output = dir.path().join("out.ppm");

        let err = run(
            args(&missing, &output, OperationKind::Invert, Some(1)),
            &Printer::plain(),
        )
        .unwrap_err();

        assert!(matches!(err, PpmError::Usage { .. }));
    }

    #[test]
    fn test_parse_error_writes_nothing() {
        let dir = tempdir().unwrap();
        let output = dir.path().join("out.ppm");

        let err = run(
            args(&fixture("bad-max.ppm"), &output, OperationKind::Invert, None),
            &Printer::plain(),
        )
        .unwrap_err();

        assert!(matches!(err, PpmError::InvalidMaxValue { value: 200, .. }));
        assert!(!output.exists());
    }

    #[test]
    fn test_strict_flag() {
        let dir = tempdir().unwrap();
        let input = dir.path().join("in.ppm");
        let output = dir.path().join("out.ppm");
        fs::write(&input, "P3 1 1 255 1 2 3 9").unwrap();

        let mut a = args(&input, &output, OperationKind::Invert, None);
        a.strict = true;
        let err = run(a, &Printer::plain()).unwrap_err();
        assert!(matches!(err, PpmError::TrailingData { .. }));

        run(args(&input, &output, OperationKind::Invert, None), &Printer::plain()).unwrap();
        assert!(output.exists());
    }

    #[test]
    fn test_comment_options() {
        let dir = tempdir().unwrap();
        let output = dir.path().join("out.ppm");

        let mut a = args(&fixture("gradient.ppm"), &output, OperationKind::Grayscale, None);
        a.comment = Some("hello".to_string());
        run(a, &Printer::plain()).unwrap();
        assert_eq!(fs::read_to_string(&output).unwrap().lines().nth(1), Some("# hello"));

        let mut a = args(&fixture("gradient.ppm"), &output, OperationKind::Grayscale, None);
        a.no_comment = true;
        run(a, &Printer::plain()).unwrap();
        assert!(!fs::read_to_string(&output).unwrap().contains('#'));
    }

    #[test]
    fn test_status_message() {
        let plain = Printer::plain();
        let (input, output) = (Path::new("in.ppm"), Path::new("out.ppm"));

        assert_eq!(
            status_message(&Operation::Invert, input, output, &plain),
            "in.ppm -> out.ppm"
        );
        assert_eq!(
            status_message(&Operation::MotionBlur { length: 3 }, input, output, &plain),
            "in.ppm (length 3) -> out.ppm"
        );
    }

    #[test]
    fn test_status_message_absolute_paths() {
        let message = status_message(
            &Operation::Emboss,
            Path::new("/nonexistent/in.ppm"),
            Path::new("/nonexistent/out.ppm"),
            &Printer::plain(),
        );
        assert_eq!(message, "/nonexistent/in.ppm -> /nonexistent/out.ppm");
    }
}
