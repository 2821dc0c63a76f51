//! Input tokens accepted by the calculator.

use crate::core::{checked, format_plain, CalcError, Operator};
use crate::math::{self, AngleMode, Conversion};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors produced while reading input tokens
#[derive(Debug, Clone, Error, PartialEq)]
pub enum InputError {
    #[error("Unknown input token '{0}'")]
    UnknownToken(String),
}

/// Editing and evaluation actions.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Action {
    Clear,
    Delete,
    Calculate,
    Percent,
    ToggleParentheses,
}

/// Memory cell keys.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum MemoryAction {
    Store,
    Recall,
    Add,
    Subtract,
    Clear,
}

/// Constants that replace the buffer.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Constant {
    Pi,
    E,
    Phi,
    Sqrt2,
    Sqrt3,
}

impl Constant {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Pi => "pi",
            Self::E => "e",
            Self::Phi => "phi",
            Self::Sqrt2 => "sqrt2",
            Self::Sqrt3 => "sqrt3",
        }
    }

    pub fn value(&self) -> f64 {
        match self {
            Self::Pi => std::f64::consts::PI,
            Self::E => std::f64::consts::E,
            Self::Phi => math::PHI,
            Self::Sqrt2 => std::f64::consts::SQRT_2,
            Self::Sqrt3 => 3.0_f64.sqrt(),
        }
    }
}

/// Scientific functions of the current buffer value.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum UnaryFunction {
    Sin,
    Cos,
    Tan,
    Asin,
    Acos,
    Atan,
    Sinh,
    Cosh,
    Tanh,
    Log,
    Ln,
    Log2,
    Sqrt,
    Square,
    Cube,
    CubeRoot,
    Factorial,
    IsPrime,
}

impl UnaryFunction {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Sin => "sin",
            Self::Cos => "cos",
            Self::Tan => "tan",
            Self::Asin => "asin",
            Self::Acos => "acos",
            Self::Atan => "atan",
            Self::Sinh => "sinh",
            Self::Cosh => "cosh",
            Self::Tanh => "tanh",
            Self::Log => "log",
            Self::Ln => "ln",
            Self::Log2 => "log2",
            Self::Sqrt => "sqrt",
            Self::Square => "square",
            Self::Cube => "cube",
            Self::CubeRoot => "cubeRoot",
            Self::Factorial => "factorial",
            Self::IsPrime => "isPrime",
        }
    }

    /// Evaluate the function. Non-finite results are errors.
    ///
    /// `factorial` floors its argument first; `isPrime` yields 1 or 0.
    pub fn apply(&self, value: f64, mode: AngleMode) -> Result<f64, CalcError> {
        let result = match self {
            Self::Sin => math::sin(value, mode),
            Self::Cos => math::cos(value, mode),
            Self::Tan => math::tan(value, mode),
            Self::Asin => math::asin(value, mode),
            Self::Acos => math::acos(value, mode),
            Self::Atan => math::atan(value, mode),
            Self::Sinh => math::sinh(value, mode),
            Self::Cosh => math::cosh(value, mode),
            Self::Tanh => math::tanh(value, mode),
            Self::Log => math::log10(value),
            Self::Ln => math::ln(value),
            Self::Log2 => math::log2(value),
            Self::Sqrt => math::sqrt(value),
            Self::Square => math::square(value),
            Self::Cube => math::cube(value),
            Self::CubeRoot => math::cube_root(value),
            Self::Factorial => {
                math::factorial(math::integer_argument("factorial", value.floor())?)?
            }
            Self::IsPrime => {
                if math::is_prime(math::integer_argument("isPrime", value)?) {
                    1.0
                } else {
                    0.0
                }
            }
        };
        checked(result)
    }

    /// History expression, e.g. `sqrt(16)`.
    pub fn expression(&self, value: f64) -> String {
        format!("{}({})", self.name(), format_plain(value))
    }
}

/// Scientific functions of two operands, entered infix like an operator.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum BinaryFunction {
    Power,
    NthRoot,
    LogBase,
    Permutation,
    Combination,
    Gcd,
    Lcm,
}

impl BinaryFunction {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Power => "power",
            Self::NthRoot => "nthRoot",
            Self::LogBase => "logBase",
            Self::Permutation => "permutation",
            Self::Combination => "combination",
            Self::Gcd => "gcd",
            Self::Lcm => "lcm",
        }
    }

    pub fn apply(&self, a: f64, b: f64) -> Result<f64, CalcError> {
        let result = match self {
            Self::Power => math::power(a, b),
            Self::NthRoot => math::nth_root(a, b),
            Self::LogBase => math::log_base(a, b),
            Self::Permutation => math::permutation(
                math::integer_argument("permutation", a)?,
                math::integer_argument("permutation", b)?,
            )?,
            Self::Combination => math::combination(
                math::integer_argument("combination", a)?,
                math::integer_argument("combination", b)?,
            )?,
            Self::Gcd => math::gcd(
                math::integer_argument("gcd", a)?,
                math::integer_argument("gcd", b)?,
            ) as f64,
            Self::Lcm => math::lcm(
                math::integer_argument("lcm", a)?,
                math::integer_argument("lcm", b)?,
            )? as f64,
        };
        checked(result)
    }
}

/// A single key press.
///
/// # Example
///
/// ```rust
/// use abacus::core::Operator;
/// use abacus::engine::{Action, Input};
///
/// assert_eq!("7".parse::<Input>(), Ok(Input::Digit('7')));
/// assert_eq!("÷".parse::<Input>(), Ok(Input::Operator(Operator::Divide)));
/// assert_eq!("=".parse::<Input>(), Ok(Input::Action(Action::Calculate)));
/// assert!("frobnicate".parse::<Input>().is_err());
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Debug, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Input {
    /// A digit `0-9` or the decimal point
    Digit(char),
    Operator(Operator),
    Action(Action),
    Function(UnaryFunction),
    BinaryFunction(BinaryFunction),
    Constant(Constant),
    /// A unit conversion of the buffer, such as `celsius_to_fahrenheit`
    Convert(Conversion),
    Memory(MemoryAction),
}

impl std::str::FromStr for Input {
    type Err = InputError;

    fn from_str(token: &str) -> Result<Self, Self::Err> {
        let mut chars = token.chars();
        if let (Some(c), None) = (chars.next(), chars.next()) {
            if c.is_ascii_digit() || c == '.' {
                return Ok(Self::Digit(c));
            }
        }
        if let Ok(op) = token.parse::<Operator>() {
            return Ok(Self::Operator(op));
        }

        let input = match token {
            "clear" | "C" | "AC" => Self::Action(Action::Clear),
            "delete" | "backspace" | "del" => Self::Action(Action::Delete),
            "calculate" | "=" | "enter" => Self::Action(Action::Calculate),
            "percent" | "%" => Self::Action(Action::Percent),
            "parentheses" | "toggle-parentheses" | "()" => Self::Action(Action::ToggleParentheses),

            "sin" => Self::Function(UnaryFunction::Sin),
            "cos" => Self::Function(UnaryFunction::Cos),
            "tan" => Self::Function(UnaryFunction::Tan),
            "asin" => Self::Function(UnaryFunction::Asin),
            "acos" => Self::Function(UnaryFunction::Acos),
            "atan" => Self::Function(UnaryFunction::Atan),
            "sinh" => Self::Function(UnaryFunction::Sinh),
            "cosh" => Self::Function(UnaryFunction::Cosh),
            "tanh" => Self::Function(UnaryFunction::Tanh),
            "log" => Self::Function(UnaryFunction::Log),
            "ln" => Self::Function(UnaryFunction::Ln),
            "log2" => Self::Function(UnaryFunction::Log2),
            "sqrt" => Self::Function(UnaryFunction::Sqrt),
            "square" | "pow" => Self::Function(UnaryFunction::Square),
            "cube" => Self::Function(UnaryFunction::Cube),
            "cubeRoot" => Self::Function(UnaryFunction::CubeRoot),
            "factorial" | "!" => Self::Function(UnaryFunction::Factorial),
            "isPrime" => Self::Function(UnaryFunction::IsPrime),

            "power" | "^" => Self::BinaryFunction(BinaryFunction::Power),
            "nthRoot" => Self::BinaryFunction(BinaryFunction::NthRoot),
            "logBase" => Self::BinaryFunction(BinaryFunction::LogBase),
            "permutation" | "nPr" => Self::BinaryFunction(BinaryFunction::Permutation),
            "combination" | "nCr" => Self::BinaryFunction(BinaryFunction::Combination),
            "gcd" => Self::BinaryFunction(BinaryFunction::Gcd),
            "lcm" => Self::BinaryFunction(BinaryFunction::Lcm),

            "pi" | "π" => Self::Constant(Constant::Pi),
            "e" => Self::Constant(Constant::E),
            "phi" | "φ" => Self::Constant(Constant::Phi),
            "sqrt2" => Self::Constant(Constant::Sqrt2),
            "sqrt3" => Self::Constant(Constant::Sqrt3),

            "mc" => Self::Memory(MemoryAction::Clear),
            "mr" => Self::Memory(MemoryAction::Recall),
            "ms" => Self::Memory(MemoryAction::Store),
            "m+" => Self::Memory(MemoryAction::Add),
            "m-" => Self::Memory(MemoryAction::Subtract),

            _ => match token.parse::<Conversion>() {
                Ok(conversion) => Self::Convert(conversion),
                Err(_) => return Err(InputError::UnknownToken(token.to_string())),
            },
        };
        Ok(input)
    }
}

/// Split a line into inputs.
///
/// Tokens are separated by whitespace. A token made only of digits and
/// decimal points, like `12.5`, expands into one input per character.
///
/// # Example
///
/// ```rust
/// use abacus::core::Operator;
/// use abacus::engine::{parse_inputs, Action, Input};
///
/// let inputs = parse_inputs("12 + 7 =").unwrap();
/// assert_eq!(
///     inputs,
///     vec![
///         Input::Digit('1'),
///         Input::Digit('2'),
///         Input::Operator(Operator::Add),
///         Input::Digit('7'),
///         Input::Action(Action::Calculate),
///     ]
/// );
/// ```
pub fn parse_inputs(line: &str) -> Result<Vec<Input>, InputError> {
    let mut inputs = Vec::new();
    for token in line.split_whitespace() {
        if token.len() > 1 && token.chars().all(|c| c.is_ascii_digit() || c == '.') {
            inputs.extend(token.chars().map(Input::Digit));
        } else {
            inputs.push(token.parse()?);
        }
    }
    Ok(inputs)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn digits_and_decimal_point() {
        assert_eq!("0".parse::<Input>(), Ok(Input::Digit('0')));
        assert_eq!(".".parse::<Input>(), Ok(Input::Digit('.')));
    }

    #[test]
    fn operators_in_both_forms() {
        assert_eq!("-".parse::<Input>(), Ok(Input::Operator(Operator::Subtract)));
        assert_eq!("×".parse::<Input>(), Ok(Input::Operator(Operator::Multiply)));
    }

    #[test]
    fn actions_and_functions() {
        assert_eq!("clear".parse::<Input>(), Ok(Input::Action(Action::Clear)));
        assert_eq!("%".parse::<Input>(), Ok(Input::Action(Action::Percent)));
        assert_eq!(
            "toggle-parentheses".parse::<Input>(),
            Ok(Input::Action(Action::ToggleParentheses))
        );
        assert_eq!(
            "cubeRoot".parse::<Input>(),
            Ok(Input::Function(UnaryFunction::CubeRoot))
        );
        assert_eq!(
            "nthRoot".parse::<Input>(),
            Ok(Input::BinaryFunction(BinaryFunction::NthRoot))
        );
        assert_eq!("pi".parse::<Input>(), Ok(Input::Constant(Constant::Pi)));
        assert_eq!("m+".parse::<Input>(), Ok(Input::Memory(MemoryAction::Add)));
    }

    #[test]
    fn every_function_name_parses_back() {
        let unary = [
            UnaryFunction::Sin,
            UnaryFunction::Cos,
            UnaryFunction::Tan,
            UnaryFunction::Asin,
            UnaryFunction::Acos,
            UnaryFunction::Atan,
            UnaryFunction::Sinh,
            UnaryFunction::Cosh,
            UnaryFunction::Tanh,
            UnaryFunction::Log,
            UnaryFunction::Ln,
            UnaryFunction::Log2,
            UnaryFunction::Sqrt,
            UnaryFunction::Square,
            UnaryFunction::Cube,
            UnaryFunction::CubeRoot,
            UnaryFunction::Factorial,
            UnaryFunction::IsPrime,
        ];
        for function in unary {
            assert_eq!(function.name().parse::<Input>(), Ok(Input::Function(function)));
        }

        let binary = [
            BinaryFunction::Power,
            BinaryFunction::NthRoot,
            BinaryFunction::LogBase,
            BinaryFunction::Permutation,
            BinaryFunction::Combination,
            BinaryFunction::Gcd,
            BinaryFunction::Lcm,
        ];
        for function in binary {
            assert_eq!(
                function.name().parse::<Input>(),
                Ok(Input::BinaryFunction(function))
            );
        }
    }

    #[test]
    fn every_constant_parses_and_matches_math_library() {
        for constant in [
            Constant::Pi,
            Constant::E,
            Constant::Phi,
            Constant::Sqrt2,
            Constant::Sqrt3,
        ] {
            assert_eq!(constant.name().parse::<Input>(), Ok(Input::Constant(constant)));
            assert_eq!(Some(constant.value()), math::constant(constant.name()));
        }
        assert_eq!("φ".parse::<Input>(), Ok(Input::Constant(Constant::Phi)));
    }

    #[test]
    fn conversion_names_are_inputs() {
        for conversion in Conversion::ALL {
            assert_eq!(
                conversion.name().parse::<Input>(),
                Ok(Input::Convert(conversion))
            );
        }
    }

    #[test]
    fn unknown_token_is_an_error() {
        assert_eq!(
            "sec".parse::<Input>(),
            Err(InputError::UnknownToken("sec".to_string()))
        );
    }

    #[test]
    fn number_tokens_expand_to_digits() {
        let inputs = parse_inputs("3.5 sqrt").unwrap();
        assert_eq!(
            inputs,
            vec![
                Input::Digit('3'),
                Input::Digit('.'),
                Input::Digit('5'),
                Input::Function(UnaryFunction::Sqrt),
            ]
        );
    }

    #[test]
    fn parse_inputs_stops_at_first_bad_token() {
        assert!(parse_inputs("1 + what").is_err());
    }

    #[test]
    fn unary_functions_check_their_results() {
        assert_eq!(UnaryFunction::Sqrt.apply(16.0, AngleMode::Degrees), Ok(4.0));
        assert_eq!(
            UnaryFunction::Sqrt.apply(-1.0, AngleMode::Degrees),
            Err(CalcError::NonFinite)
        );
        assert_eq!(UnaryFunction::Factorial.apply(5.7, AngleMode::Degrees), Ok(120.0));
        assert_eq!(UnaryFunction::IsPrime.apply(17.0, AngleMode::Degrees), Ok(1.0));
        assert_eq!(UnaryFunction::IsPrime.apply(1.0, AngleMode::Degrees), Ok(0.0));
        assert!(UnaryFunction::Factorial.apply(-1.0, AngleMode::Degrees).is_err());
    }

    #[test]
    fn binary_functions_apply_in_order() {
        assert_eq!(BinaryFunction::Power.apply(2.0, 10.0), Ok(1024.0));
        assert_eq!(BinaryFunction::Permutation.apply(5.0, 2.0), Ok(20.0));
        assert_eq!(BinaryFunction::Gcd.apply(12.0, 18.0), Ok(6.0));
        assert_eq!(BinaryFunction::Lcm.apply(4.0, 6.0), Ok(12.0));
        assert!(BinaryFunction::Combination.apply(2.0, 5.0).is_err());
        assert!(BinaryFunction::Gcd.apply(1.5, 3.0).is_err());
    }

    #[test]
    fn unary_expression_uses_plain_operand() {
        assert_eq!(UnaryFunction::Sqrt.expression(16.0), "sqrt(16)");
        assert_eq!(UnaryFunction::Sin.expression(0.5), "sin(0.5)");
    }
}
