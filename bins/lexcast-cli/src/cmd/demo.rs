use lexcast::demo::DemoReport;
use lexcast::Strategy;

use crate::config::DemoArgs;
use crate::error::CliError;

pub fn run(args: &DemoArgs, strategy: &Strategy) -> Result<(), CliError> {
    let report = lexcast::demo::run_with(&args.text, args.number, strategy);
    print!("{}", render(&report));

    if !report.is_success() {
        return Err(CliError::DemoFailed {
            failed: report.problems().count(),
            total: report.steps().len(),
        });
    }
    Ok(())
}

/// One line per step: `1. lexical_cast  i32     123`.
fn render(report: &DemoReport) -> String {
    let mut out = String::new();
    for (i, step) in report.steps().iter().enumerate() {
        let outcome = match &step.outcome {
            Ok(value) => value.clone(),
            Err(e) => format!("! {e}"),
        };
        out.push_str(&format!(
            "{}. {:<13} {:<7} {outcome}\n",
            i + 1,
            step.convention.to_string(),
            step.target
        ));
    }
    out
}

#[cfg(test)]
mod tests {
    use lexcast::{LexicalCast, Stream};

    use super::*;

    #[test]
    fn renders_each_step() {
        let report = lexcast::demo::run(&LexicalCast);
        let text = render(&report);
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 6);
        assert_eq!(lines[0], "1. lexical_cast  i32     123");
        assert_eq!(lines[5], "6. convert+cnv   string  123");
    }

    #[test]
    fn failing_demo_is_an_error() {
        let args = DemoArgs { text: "12x".into(), number: 1 };
        let err = run(&args, &Strategy::Lexical(LexicalCast)).unwrap_err();
        assert!(matches!(err, CliError::DemoFailed { failed: 3, total: 6 }));
    }

    #[test]
    fn disagreeing_converter_is_an_error() {
        let args = DemoArgs { text: "10".into(), number: 10 };
        let strategy = Strategy::Stream(Stream::new().radix(lexcast::Radix::Bin));
        let err = run(&args, &strategy).unwrap_err();
        assert!(matches!(err, CliError::DemoFailed { failed: 2, total: 6 }));
    }
}
