//! Partial Whitespace-language emulator.
//!
//! Only the push instruction is modelled: any line starting with three
//! spaces is taken as a push whose operand is the rest of the line, read as
//! binary with space = 0 and tab = 1. Nothing is ever popped.

use crate::assignment::BitAssignment;
use crate::pipeline::ascii::printable_char;
use crate::pipeline::binary::{map_bits, parse_binary_wide};
use num_bigint::BigUint;
use serde::{Serialize, Serializer};
use tracing::{debug, trace};

/// Indent marking a line as a push command
pub const PUSH_PREFIX: &str = "   ";

/// How a single source line was interpreted
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "kebab-case")]
pub enum LineOutcome {
    /// Operand decoded and pushed. Operands have no width limit.
    Pushed {
        #[serde(serialize_with = "serialize_value")]
        value: BigUint,
    },
    /// Push command whose operand is empty or not pure space/tab
    ParseFailed { operand: String },
    NotACommand,
}

impl LineOutcome {
    /// Printable ASCII character for a pushed value
    pub fn ascii(&self) -> Option<char> {
        match self {
            Self::Pushed { value } => printable_value(value),
            _ => None,
        }
    }
}

/// Printable ASCII character for a stack value of any width
pub fn printable_value(value: &BigUint) -> Option<char> {
    u64::try_from(value).ok().and_then(printable_char)
}

/// Values that fit in a `u64` serialize as numbers, wider ones as decimal
/// strings
fn serialize_value<S: Serializer>(value: &BigUint, serializer: S) -> Result<S::Ok, S::Error> {
    match u64::try_from(value) {
        Ok(small) => serializer.serialize_u64(small),
        Err(_) => serializer.collect_str(value),
    }
}

/// Interpret one line (without its trailing newline)
pub fn interpret_line(line: &str) -> LineOutcome {
    let Some(operand) = line.strip_prefix(PUSH_PREFIX) else {
        return LineOutcome::NotACommand;
    };

    let bits = map_bits(operand, BitAssignment::SpaceZero);
    match parse_binary_wide(&bits) {
        Some(value) => LineOutcome::Pushed { value },
        None => LineOutcome::ParseFailed {
            operand: operand.to_string(),
        },
    }
}

/// One push command and what became of it
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Observation {
    /// 1-based line number in the input
    pub line: usize,
    #[serde(flatten)]
    pub outcome: LineOutcome,
}

/// Final rendering of the stack
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", content = "text", rename_all = "kebab-case")]
pub enum StackOutcome {
    /// Printable stack values, bottom to top. May be empty when every value
    /// fell outside the printable range.
    Rendered(String),
    /// No command ever pushed a value
    Empty,
}

/// Result of running every push command in a text
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StackSimulation {
    pub push_commands: usize,
    pub observations: Vec<Observation>,
    pub stack: Vec<BigUint>,
}

impl StackSimulation {
    pub fn run(text: &str) -> Self {
        let mut sim = Self::default();

        for (idx, line) in text.split('\n').enumerate() {
            let outcome = interpret_line(line);
            match &outcome {
                LineOutcome::NotACommand => continue,
                LineOutcome::Pushed { value } => {
                    trace!(line = idx + 1, %value, "push");
                    sim.stack.push(value.clone());
                }
                LineOutcome::ParseFailed { operand } => {
                    debug!(line = idx + 1, ?operand, "skipping unparseable push operand");
                }
            }
            sim.push_commands += 1;
            sim.observations.push(Observation {
                line: idx + 1,
                outcome,
            });
        }

        sim
    }

    pub fn render(&self) -> StackOutcome {
        if self.stack.is_empty() {
            return StackOutcome::Empty;
        }
        StackOutcome::Rendered(
            self.stack
                .iter()
                .filter_map(printable_value)
                .collect(),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pushed(value: u64) -> LineOutcome {
        LineOutcome::Pushed {
            value: BigUint::from(value),
        }
    }

    fn stack_of(values: &[u64]) -> Vec<BigUint> {
        values.iter().map(|&v| BigUint::from(v)).collect()
    }

    #[test]
    fn test_non_printable_push() {
        let outcome = interpret_line("      \t   ");
        assert_eq!(outcome, pushed(8));
        assert_eq!(outcome.ascii(), None);
    }

    #[test]
    fn test_printable_push() {
        let outcome = interpret_line("   \t  \t   ");
        assert_eq!(outcome, pushed(72));
        assert_eq!(outcome.ascii(), Some('H'));
    }

    #[test]
    fn test_short_and_unindented_lines() {
        assert_eq!(interpret_line(""), LineOutcome::NotACommand);
        assert_eq!(interpret_line("  "), LineOutcome::NotACommand);
        assert_eq!(interpret_line("\t   \t"), LineOutcome::NotACommand);
        assert_eq!(interpret_line("  x \t"), LineOutcome::NotACommand);
    }

    #[test]
    fn test_empty_operand_fails() {
        assert_eq!(
            interpret_line("   "),
            LineOutcome::ParseFailed {
                operand: String::new()
            }
        );
    }

    #[test]
    fn test_carriage_return_operand_fails() {
        assert_eq!(
            interpret_line("   \t\r"),
            LineOutcome::ParseFailed {
                operand: "\t\r".into()
            }
        );
    }

    #[test]
    fn test_simulation_renders_printable_values_only() {
        let text = "      \t   \n   \t  \t   \nplain text\n   \t\t \t  \t\n";
        let sim = StackSimulation::run(text);
        assert_eq!(sim.push_commands, 3);
        assert_eq!(sim.stack, stack_of(&[8, 72, 105]));
        assert_eq!(sim.render(), StackOutcome::Rendered("Hi".into()));
        let lines: Vec<usize> = sim.observations.iter().map(|o| o.line).collect();
        assert_eq!(lines, vec![1, 2, 4]);
    }

    #[test]
    fn test_parse_failure_does_not_stop_run() {
        let text = "   \tx\n   \t  \t   ";
        let sim = StackSimulation::run(text);
        assert_eq!(sim.push_commands, 2);
        assert_eq!(
            sim.observations[0].outcome,
            LineOutcome::ParseFailed {
                operand: "\tx".into()
            }
        );
        assert_eq!(sim.observations[1].outcome, pushed(72));
        assert_eq!(sim.render(), StackOutcome::Rendered("H".into()));
    }

    #[test]
    fn test_no_commands_is_empty() {
        let sim = StackSimulation::run("no indent here\n  two spaces\n");
        assert_eq!(sim.push_commands, 0);
        assert!(sim.observations.is_empty());
        assert_eq!(sim.render(), StackOutcome::Empty);
    }

    #[test]
    fn test_only_failures_is_empty() {
        let sim = StackSimulation::run("   abc\n   ");
        assert_eq!(sim.push_commands, 2);
        assert_eq!(sim.render(), StackOutcome::Empty);
    }

    #[test]
    fn test_all_non_printable_renders_empty_string() {
        let sim = StackSimulation::run("    \n   \t");
        assert_eq!(sim.stack, stack_of(&[0, 1]));
        assert_eq!(sim.render(), StackOutcome::Rendered(String::new()));
    }

    #[test]
    fn test_wide_operand_is_pushed_non_printable() {
        let text = format!("   \t{}\n   \t  \t   ", " ".repeat(64));
        let sim = StackSimulation::run(&text);

        assert_eq!(sim.push_commands, 2);
        let expected = BigUint::from(1u32) << 64usize;
        assert_eq!(
            sim.observations[0].outcome,
            LineOutcome::Pushed {
                value: expected.clone()
            }
        );
        assert_eq!(sim.observations[0].outcome.ascii(), None);
        assert_eq!(sim.stack, vec![expected, BigUint::from(72u32)]);
        assert_eq!(sim.render(), StackOutcome::Rendered("H".into()));
    }

    #[test]
    fn test_pushed_value_serialization() {
        let small = serde_json::to_value(pushed(72)).unwrap();
        assert_eq!(small["kind"], "pushed");
        assert_eq!(small["value"], 72);

        let wide = LineOutcome::Pushed {
            value: BigUint::from(1u32) << 64usize,
        };
        let json = serde_json::to_value(wide).unwrap();
        assert_eq!(json["value"], "18446744073709551616");
    }
}
