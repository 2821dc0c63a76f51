//! Two-operand calculation engine.

use crate::core::{
    checked, format_plain, CalcError, FormatOptions, HistoryEntry, HistoryLog, Operand, Operator,
};
use crate::engine::input::{BinaryFunction, Constant, UnaryFunction};
use crate::math::{AngleMode, Conversion};
use tracing::debug;

/// Operation waiting for its second operand.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum PendingOp {
    Arithmetic(Operator),
    Function(BinaryFunction),
}

impl PendingOp {
    pub fn apply(&self, lhs: f64, rhs: f64) -> Result<f64, CalcError> {
        match self {
            Self::Arithmetic(op) => op.apply(lhs, rhs),
            Self::Function(function) => function.apply(lhs, rhs),
        }
    }

    /// History expression: `12 + 7` or `power(2, 10)`.
    pub fn expression(&self, lhs: f64, rhs: f64) -> String {
        match self {
            Self::Arithmetic(op) => {
                format!("{} {} {}", format_plain(lhs), op.symbol(), format_plain(rhs))
            }
            Self::Function(function) => format!(
                "{}({}, {})",
                function.name(),
                format_plain(lhs),
                format_plain(rhs)
            ),
        }
    }

    fn label_suffix(&self) -> &'static str {
        match self {
            Self::Arithmetic(op) => op.symbol(),
            Self::Function(function) => function.name(),
        }
    }
}

/// An operator chosen but not yet applied.
#[derive(Clone, PartialEq, Debug)]
pub struct PendingOperation {
    pub previous: Operand,
    pub op: PendingOp,
}

impl PendingOperation {
    /// Label shown above the display, e.g. `5 +`.
    pub fn label(&self) -> String {
        format!("{} {}", self.previous, self.op.label_suffix())
    }
}

/// Outcome of an operation that may complete a calculation.
#[derive(Clone, PartialEq, Debug)]
pub enum Evaluation {
    /// Nothing was computed
    Unchanged,
    /// A calculation completed and was recorded in history
    Completed(HistoryEntry),
    /// The calculation failed; the display shows `"Error"`
    Failed(CalcError),
}

impl Evaluation {
    pub fn is_completed(&self) -> bool {
        matches!(self, Self::Completed(_))
    }

    pub fn is_failed(&self) -> bool {
        matches!(self, Self::Failed(_))
    }
}

/// Calculator state machine.
///
/// Holds the live input buffer, an optional pending operation and the
/// in-memory history. There is no operator precedence: each operator
/// applies to exactly the previous operand and the current buffer.
///
/// Two flags drive input handling. `reset_on_next_input` makes the next
/// digit start a fresh buffer; it is set after an operator, a result, an
/// error or any value placed in the buffer. `awaiting_operand` is set by an
/// operator and cleared once a new operand arrives (a typed digit, a
/// function result, a constant or a recalled value); while it is set,
/// evaluation is a no-op.
///
/// # Example
///
/// ```rust
/// use abacus::core::Operator;
/// use abacus::engine::CalculationEngine;
///
/// let mut engine = CalculationEngine::default();
/// engine.input_digit('1');
/// engine.input_digit('2');
/// engine.input_operator(Operator::Add);
/// engine.input_digit('7');
/// engine.evaluate();
///
/// assert_eq!(engine.display(), "19");
/// assert_eq!(engine.history().entries()[0].expression(), "12 + 7");
/// ```
#[derive(Clone, Debug)]
pub struct CalculationEngine {
    current: Operand,
    pending: Option<PendingOperation>,
    reset_on_next_input: bool,
    awaiting_operand: bool,
    history: HistoryLog,
    angle_mode: AngleMode,
    format: FormatOptions,
}

impl Default for CalculationEngine {
    fn default() -> Self {
        Self::new(AngleMode::default(), FormatOptions::default(), HistoryLog::new())
    }
}

impl CalculationEngine {
    pub fn new(angle_mode: AngleMode, format: FormatOptions, history: HistoryLog) -> Self {
        Self {
            current: Operand::zero(),
            pending: None,
            reset_on_next_input: false,
            awaiting_operand: false,
            history,
            angle_mode,
            format,
        }
    }

    /// Current display text.
    pub fn display(&self) -> &str {
        self.current.text()
    }

    pub fn current(&self) -> &Operand {
        &self.current
    }

    pub fn pending(&self) -> Option<&PendingOperation> {
        self.pending.as_ref()
    }

    /// Pending-operation label, e.g. `5 +`; `None` when nothing is pending.
    pub fn pending_label(&self) -> Option<String> {
        self.pending.as_ref().map(PendingOperation::label)
    }

    pub fn is_reset_pending(&self) -> bool {
        self.reset_on_next_input
    }

    pub fn history(&self) -> &HistoryLog {
        &self.history
    }

    pub fn angle_mode(&self) -> AngleMode {
        self.angle_mode
    }

    pub fn set_angle_mode(&mut self, mode: AngleMode) {
        self.angle_mode = mode;
    }

    pub fn format_options(&self) -> &FormatOptions {
        &self.format
    }

    /// Append a digit or decimal point to the buffer.
    ///
    /// Starts a fresh buffer in reset mode. Returns `false` if the character
    /// was rejected.
    pub fn input_digit(&mut self, digit: char) -> bool {
        if !(digit.is_ascii_digit() || digit == '.') {
            return false;
        }
        if self.reset_on_next_input {
            self.current = Operand::empty();
            self.reset_on_next_input = false;
        }
        self.awaiting_operand = false;
        self.current.push_digit(digit)
    }

    /// Choose an arithmetic operator.
    ///
    /// A pending operation whose second operand has been entered is
    /// evaluated first, which chains calculations left to right.
    pub fn input_operator(&mut self, op: Operator) -> Evaluation {
        self.choose(PendingOp::Arithmetic(op))
    }

    /// Choose a two-argument function; the buffer becomes its first argument.
    pub fn input_binary_function(&mut self, function: BinaryFunction) -> Evaluation {
        self.choose(PendingOp::Function(function))
    }

    fn choose(&mut self, op: PendingOp) -> Evaluation {
        if self.current.is_error() {
            return Evaluation::Unchanged;
        }

        let mut outcome = Evaluation::Unchanged;
        if self.pending.is_some() && !self.awaiting_operand {
            outcome = self.evaluate();
            if outcome.is_failed() {
                return outcome;
            }
        }

        self.pending = Some(PendingOperation {
            previous: self.current.clone(),
            op,
        });
        self.reset_on_next_input = true;
        self.awaiting_operand = true;
        debug!(label = ?self.pending_label(), "operation pending");
        outcome
    }

    /// Apply the pending operation to the previous operand and the buffer.
    ///
    /// A no-op when nothing is pending or no operand was entered since the
    /// operator was chosen.
    pub fn evaluate(&mut self) -> Evaluation {
        if self.awaiting_operand {
            return Evaluation::Unchanged;
        }
        let Some(pending) = self.pending.take() else {
            return Evaluation::Unchanged;
        };

        let lhs = pending.previous.value();
        let rhs = self.current.value();
        match pending.op.apply(lhs, rhs).and_then(checked) {
            Ok(value) => {
                let expression = pending.op.expression(lhs, rhs);
                self.complete(expression, value)
            }
            Err(error) => self.fail(error),
        }
    }

    /// Apply a one-argument function to the buffer.
    pub fn apply_function(&mut self, function: UnaryFunction) -> Evaluation {
        let value = self.current.value();
        match function.apply(value, self.angle_mode) {
            Ok(result) => self.complete(function.expression(value), result),
            Err(error) => self.fail(error),
        }
    }

    /// Convert the buffer between units, e.g. `celsius_to_fahrenheit(100)`.
    pub fn apply_conversion(&mut self, conversion: Conversion) -> Evaluation {
        let value = self.current.value();
        match checked(conversion.apply(value)) {
            Ok(result) => self.complete(
                format!("{}({})", conversion.name(), format_plain(value)),
                result,
            ),
            Err(error) => self.fail(error),
        }
    }

    /// Replace the buffer with a constant.
    pub fn insert_constant(&mut self, constant: Constant) {
        self.place(Operand::new(format_plain(constant.value())));
    }

    /// Replace the buffer with a value, formatted for display.
    pub fn set_value(&mut self, value: f64) {
        if value.is_finite() {
            self.place(Operand::new(self.format.format(value)));
        } else {
            self.fail(CalcError::NonFinite);
        }
    }

    /// Finish the current entry so the next digit starts a fresh buffer.
    pub fn commit_entry(&mut self) {
        self.reset_on_next_input = true;
    }

    /// Load the result of a history entry into the buffer.
    ///
    /// Returns `false` if there is no entry at `index`.
    pub fn recall_history(&mut self, index: usize) -> bool {
        let Some(entry) = self.history.get(index) else {
            return false;
        };
        let operand = Operand::new(entry.result());
        self.place(operand);
        true
    }

    pub fn clear_history(&mut self) {
        self.history = self.history.cleared();
    }

    /// Reset to a fresh `"0"` buffer with nothing pending.
    pub fn clear(&mut self) {
        self.current = Operand::zero();
        self.pending = None;
        self.reset_on_next_input = false;
        self.awaiting_operand = false;
    }

    /// Remove the last character of the buffer.
    pub fn backspace(&mut self) {
        self.current.backspace();
    }

    /// Divide the buffer by 100, regardless of any pending operation.
    pub fn percent(&mut self) -> Evaluation {
        match checked(self.current.value() / 100.0) {
            Ok(value) => {
                self.current = Operand::new(self.format.format(value));
                Evaluation::Unchanged
            }
            Err(error) => self.fail(error),
        }
    }

    /// Append `(`, or `)` once the buffer already holds an opening one.
    ///
    /// This only edits the text; no grouping is evaluated.
    pub fn toggle_parentheses(&mut self) {
        let paren = if self.current.text().contains('(') {
            ')'
        } else {
            '('
        };
        self.current.push_raw(paren);
    }

    fn place(&mut self, operand: Operand) {
        self.current = operand;
        self.reset_on_next_input = true;
        self.awaiting_operand = false;
    }

    fn complete(&mut self, expression: String, value: f64) -> Evaluation {
        let result = self.format.format(value);
        let entry = HistoryEntry::new(expression, result.clone());
        debug!(expression = entry.expression(), result = %result, "calculation completed");

        self.history = self.history.record(entry.clone());
        self.place(Operand::new(result));
        Evaluation::Completed(entry)
    }

    fn fail(&mut self, error: CalcError) -> Evaluation {
        debug!(%error, "calculation failed");
        self.current = Operand::error();
        self.pending = None;
        self.reset_on_next_input = true;
        self.awaiting_operand = false;
        Evaluation::Failed(error)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn type_number(engine: &mut CalculationEngine, number: &str) {
        for digit in number.chars() {
            engine.input_digit(digit);
        }
    }

    fn calculate(lhs: &str, op: Operator, rhs: &str) -> CalculationEngine {
        let mut engine = CalculationEngine::default();
        type_number(&mut engine, lhs);
        engine.input_operator(op);
        type_number(&mut engine, rhs);
        engine.evaluate();
        engine
    }

    #[test]
    fn simple_addition_records_history() {
        let engine = calculate("12", Operator::Add, "7");

        assert_eq!(engine.display(), "19");
        let entry = engine.history().latest().unwrap();
        assert_eq!(entry.expression(), "12 + 7");
        assert_eq!(entry.result(), "19");
        assert!(engine.pending().is_none());
    }

    #[test]
    fn expression_uses_operator_symbols() {
        let engine = calculate("9", Operator::Subtract, "4");
        assert_eq!(engine.history().entries()[0].expression(), "9 − 4");

        let engine = calculate("6", Operator::Divide, "4");
        assert_eq!(engine.display(), "1.5");
        assert_eq!(engine.history().entries()[0].expression(), "6 ÷ 4");
    }

    #[test]
    fn expression_normalizes_typed_operands() {
        let engine = calculate("12.", Operator::Multiply, "0.50");
        assert_eq!(engine.history().entries()[0].expression(), "12 × 0.5");
        assert_eq!(engine.display(), "6");
    }

    #[test]
    fn division_by_zero_shows_error() {
        let mut engine = calculate("1", Operator::Divide, "0");

        assert_eq!(engine.display(), "Error");
        assert!(engine.pending().is_none());
        assert!(engine.history().is_empty());

        engine.input_digit('4');
        assert_eq!(engine.display(), "4");
    }

    #[test]
    fn evaluate_reports_division_by_zero() {
        let mut engine = CalculationEngine::default();
        engine.input_digit('5');
        engine.input_operator(Operator::Divide);
        engine.input_digit('0');
        assert_eq!(engine.evaluate(), Evaluation::Failed(CalcError::DivisionByZero));
    }

    #[test]
    fn overflow_shows_error() {
        let mut engine = CalculationEngine::default();
        engine.set_value(1e300);
        engine.input_operator(Operator::Multiply);
        engine.set_value(1e300);
        assert_eq!(engine.evaluate(), Evaluation::Failed(CalcError::NonFinite));
        assert_eq!(engine.display(), "Error");
    }

    #[test]
    fn evaluate_without_operator_is_noop() {
        let mut engine = CalculationEngine::default();
        type_number(&mut engine, "42");
        assert_eq!(engine.evaluate(), Evaluation::Unchanged);
        assert_eq!(engine.display(), "42");
    }

    #[test]
    fn evaluate_right_after_operator_is_noop() {
        let mut engine = CalculationEngine::default();
        type_number(&mut engine, "5");
        engine.input_operator(Operator::Add);

        assert_eq!(engine.evaluate(), Evaluation::Unchanged);
        assert_eq!(engine.display(), "5");
        assert_eq!(engine.pending_label().as_deref(), Some("5 +"));
    }

    #[test]
    fn operators_chain_left_to_right() {
        let mut engine = CalculationEngine::default();
        type_number(&mut engine, "2");
        engine.input_operator(Operator::Add);
        type_number(&mut engine, "3");
        let chained = engine.input_operator(Operator::Multiply);

        assert!(chained.is_completed());
        assert_eq!(engine.display(), "5");
        assert_eq!(engine.pending_label().as_deref(), Some("5 ×"));

        type_number(&mut engine, "4");
        engine.evaluate();
        assert_eq!(engine.display(), "20");
        assert_eq!(engine.history().len(), 2);
    }

    #[test]
    fn repeated_operator_replaces_pending_one() {
        let mut engine = CalculationEngine::default();
        type_number(&mut engine, "8");
        engine.input_operator(Operator::Add);
        engine.input_operator(Operator::Subtract);
        type_number(&mut engine, "3");
        engine.evaluate();

        assert_eq!(engine.display(), "5");
        assert_eq!(engine.history().len(), 1);
    }

    #[test]
    fn chained_failure_drops_new_operator() {
        let mut engine = CalculationEngine::default();
        type_number(&mut engine, "1");
        engine.input_operator(Operator::Divide);
        type_number(&mut engine, "0");
        let outcome = engine.input_operator(Operator::Add);

        assert!(outcome.is_failed());
        assert_eq!(engine.display(), "Error");
        assert!(engine.pending().is_none());
    }

    #[test]
    fn operator_on_error_is_ignored() {
        let mut engine = calculate("1", Operator::Divide, "0");
        assert_eq!(engine.input_operator(Operator::Add), Evaluation::Unchanged);
        assert!(engine.pending().is_none());
    }

    #[test]
    fn digit_after_result_starts_fresh() {
        let mut engine = calculate("2", Operator::Add, "2");
        engine.input_digit('9');
        assert_eq!(engine.display(), "9");
    }

    #[test]
    fn operator_after_result_continues_from_it() {
        let mut engine = calculate("2", Operator::Add, "2");
        engine.input_operator(Operator::Multiply);
        type_number(&mut engine, "10");
        engine.evaluate();
        assert_eq!(engine.display(), "40");
        assert_eq!(engine.history().entries()[0].expression(), "4 × 10");
    }

    #[test]
    fn clear_resets_everything_but_history() {
        let mut engine = calculate("2", Operator::Add, "2");
        engine.input_operator(Operator::Add);
        engine.clear();

        assert_eq!(engine.display(), "0");
        assert!(engine.pending_label().is_none());
        assert!(!engine.is_reset_pending());
        assert_eq!(engine.history().len(), 1);
    }

    #[test]
    fn backspace_edits_buffer() {
        let mut engine = CalculationEngine::default();
        type_number(&mut engine, "123");
        engine.backspace();
        assert_eq!(engine.display(), "12");
        engine.backspace();
        engine.backspace();
        assert_eq!(engine.display(), "0");
    }

    #[test]
    fn percent_divides_by_hundred() {
        let mut engine = CalculationEngine::default();
        type_number(&mut engine, "50");
        engine.input_operator(Operator::Add);
        type_number(&mut engine, "7");
        engine.percent();

        assert_eq!(engine.display(), "0.07");
        assert_eq!(engine.pending_label().as_deref(), Some("50 +"));
        engine.evaluate();
        assert_eq!(engine.display(), "50.07");
    }

    #[test]
    fn percent_of_error_stays_error() {
        let mut engine = calculate("1", Operator::Divide, "0");
        assert!(engine.percent().is_failed());
        assert_eq!(engine.display(), "Error");
    }

    #[test]
    fn parentheses_toggle_literally() {
        let mut engine = CalculationEngine::default();
        type_number(&mut engine, "5");
        engine.toggle_parentheses();
        assert_eq!(engine.display(), "5(");
        engine.toggle_parentheses();
        assert_eq!(engine.display(), "5()");
        assert_eq!(engine.current().value(), 5.0);
    }

    #[test]
    fn unary_function_records_history() {
        let mut engine = CalculationEngine::default();
        type_number(&mut engine, "16");
        let outcome = engine.apply_function(UnaryFunction::Sqrt);

        assert!(outcome.is_completed());
        assert_eq!(engine.display(), "4");
        assert_eq!(engine.history().entries()[0].expression(), "sqrt(16)");

        engine.input_digit('2');
        assert_eq!(engine.display(), "2");
    }

    #[test]
    fn trig_uses_engine_angle_mode() {
        let mut engine = CalculationEngine::default();
        type_number(&mut engine, "30");
        engine.apply_function(UnaryFunction::Sin);
        assert_eq!(engine.display(), "0.5");

        engine.set_angle_mode(AngleMode::Radians);
        engine.clear();
        engine.apply_function(UnaryFunction::Cos);
        assert_eq!(engine.display(), "1");
    }

    #[test]
    fn function_result_counts_as_operand() {
        let mut engine = CalculationEngine::default();
        type_number(&mut engine, "2");
        engine.input_operator(Operator::Add);
        type_number(&mut engine, "9");
        engine.apply_function(UnaryFunction::Sqrt);
        engine.evaluate();

        assert_eq!(engine.display(), "5");
    }

    #[test]
    fn function_on_pending_operator_uses_displayed_value() {
        let mut engine = CalculationEngine::default();
        type_number(&mut engine, "9");
        engine.input_operator(Operator::Add);
        engine.apply_function(UnaryFunction::Sqrt);
        engine.evaluate();

        assert_eq!(engine.display(), "12");
    }

    #[test]
    fn factorial_of_negative_is_error() {
        let mut engine = CalculationEngine::default();
        engine.set_value(-1.0);
        assert!(engine.apply_function(UnaryFunction::Factorial).is_failed());
        assert_eq!(engine.display(), "Error");
    }

    #[test]
    fn binary_function_is_entered_infix() {
        let mut engine = CalculationEngine::default();
        type_number(&mut engine, "2");
        engine.input_binary_function(BinaryFunction::Power);
        assert_eq!(engine.pending_label().as_deref(), Some("2 power"));
        type_number(&mut engine, "10");
        engine.evaluate();

        assert_eq!(engine.display(), "1024");
        assert_eq!(engine.history().entries()[0].expression(), "power(2, 10)");
    }

    #[test]
    fn constant_replaces_buffer() {
        let mut engine = CalculationEngine::default();
        type_number(&mut engine, "7");
        engine.insert_constant(Constant::Pi);
        assert_eq!(engine.display(), "3.141592653589793");
        assert!(engine.history().is_empty());

        engine.input_digit('1');
        assert_eq!(engine.display(), "1");
    }

    #[test]
    fn conversion_records_history() {
        let mut engine = CalculationEngine::default();
        type_number(&mut engine, "100");

        assert!(engine.apply_conversion(Conversion::CelsiusToFahrenheit).is_completed());
        assert_eq!(engine.display(), "212");
        assert_eq!(
            engine.history().entries()[0].expression(),
            "celsius_to_fahrenheit(100)"
        );

        engine.input_digit('3');
        assert_eq!(engine.display(), "3");
    }

    #[test]
    fn conversion_of_error_display_fails() {
        let mut engine = CalculationEngine::default();
        engine.set_value(f64::MAX);
        assert!(engine.apply_conversion(Conversion::InchesToCm).is_failed());
        assert_eq!(engine.display(), crate::core::ERROR_DISPLAY);
    }

    #[test]
    fn recall_history_loads_result() {
        let mut engine = calculate("12", Operator::Add, "7");
        engine.clear();

        assert!(engine.recall_history(0));
        assert_eq!(engine.display(), "19");
        assert!(!engine.recall_history(5));
    }

    #[test]
    fn large_results_use_exponential_display() {
        let engine = calculate("99999", Operator::Multiply, "999999");
        assert_eq!(engine.display(), "9.999890e+10");
    }

    #[test]
    fn exponential_result_can_be_reused() {
        let mut engine = calculate("99999", Operator::Multiply, "999999");
        engine.input_operator(Operator::Divide);
        type_number(&mut engine, "10");
        engine.evaluate();

        assert_eq!(engine.display(), "9999890000");
        assert_eq!(
            engine.history().entries()[0].expression(),
            "99998900000 ÷ 10"
        );
    }

    #[test]
    fn committed_entry_is_replaced_by_next_digit() {
        let mut engine = CalculationEngine::default();
        type_number(&mut engine, "42");
        engine.commit_entry();
        type_number(&mut engine, "7");

        assert_eq!(engine.display(), "7");
        assert!(engine.pending().is_none());
    }
}
