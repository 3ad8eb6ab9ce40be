/// Operation selected by the user. `Mixed` is a meta-kind resolved to one of
/// the four basic kinds per problem; it is never stored on a generated
/// problem.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OperationKind {
    Addition,
    Subtraction,
    Multiplication,
    Division,
    Mixed,
    Life,
}

impl OperationKind {
    pub fn as_str(&self) -> &str {
        match self {
            OperationKind::Addition => "addition",
            OperationKind::Subtraction => "subtraction",
            OperationKind::Multiplication => "multiplication",
            OperationKind::Division => "division",
            OperationKind::Mixed => "mixed",
            OperationKind::Life => "life",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "addition" => Some(OperationKind::Addition),
            "subtraction" => Some(OperationKind::Subtraction),
            "multiplication" => Some(OperationKind::Multiplication),
            "division" => Some(OperationKind::Division),
            "mixed" => Some(OperationKind::Mixed),
            "life" => Some(OperationKind::Life),
            _ => None,
        }
    }
}

/// Word-problem flavour for life problems
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LifeScenario {
    Shopping,
    Change,
}

/// Concrete operation carried by a generated problem. A fresh value per
/// problem; resolving `mixed` never touches shared state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ResolvedOperation {
    Addition,
    Subtraction,
    Multiplication,
    Division,
    Life(LifeScenario),
}

impl ResolvedOperation {
    pub fn symbol(&self) -> &str {
        match self {
            ResolvedOperation::Addition => "+",
            ResolvedOperation::Subtraction => "-",
            ResolvedOperation::Multiplication => "×",
            ResolvedOperation::Division => "÷",
            ResolvedOperation::Life(_) => "?",
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            ResolvedOperation::Addition => "addition",
            ResolvedOperation::Subtraction => "subtraction",
            ResolvedOperation::Multiplication => "multiplication",
            ResolvedOperation::Division => "division",
            ResolvedOperation::Life(_) => "life",
        }
    }
}

/// One generated problem. Immutable once created; the caller holds it only
/// for the duration of the round.
#[derive(Debug, Clone)]
pub struct Problem {
    pub operation: ResolvedOperation,
    pub operand1: i32,
    pub operand2: i32,
    pub answer: i32,
    pub text: String,
}

impl Problem {
    /// Builds a formula problem for one of the four basic kinds,
    /// computing the answer from the operands.
    pub fn formula(operation: ResolvedOperation, operand1: i32, operand2: i32) -> Self {
        let answer = match operation {
            ResolvedOperation::Addition => operand1 + operand2,
            ResolvedOperation::Subtraction => operand1 - operand2,
            ResolvedOperation::Multiplication => operand1 * operand2,
            ResolvedOperation::Division => operand1 / operand2,
            ResolvedOperation::Life(_) => {
                unreachable!("life problems carry their own text and answer")
            }
        };
        let text = format!("{} {} {} = ?", operand1, operation.symbol(), operand2);

        Problem {
            operation,
            operand1,
            operand2,
            answer,
            text,
        }
    }

    /// Builds a life word problem with precomputed answer and sentence text.
    pub fn worded(
        scenario: LifeScenario,
        operand1: i32,
        operand2: i32,
        answer: i32,
        text: String,
    ) -> Self {
        Problem {
            operation: ResolvedOperation::Life(scenario),
            operand1,
            operand2,
            answer,
            text,
        }
    }

    pub fn check_answer(&self, answer: i32) -> bool {
        self.answer == answer
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_operation_kind_round_trip() {
        for kind in [
            OperationKind::Addition,
            OperationKind::Subtraction,
            OperationKind::Multiplication,
            OperationKind::Division,
            OperationKind::Mixed,
            OperationKind::Life,
        ] {
            assert_eq!(OperationKind::from_str(kind.as_str()), Some(kind));
        }
        assert_eq!(OperationKind::from_str("modulo"), None);
    }

    #[test]
    fn test_formula_addition() {
        let problem = Problem::formula(ResolvedOperation::Addition, 47, 38);
        assert_eq!(problem.answer, 85);
        assert_eq!(problem.text, "47 + 38 = ?");
        assert!(problem.check_answer(85));
        assert!(!problem.check_answer(84));
    }

    #[test]
    fn test_formula_subtraction() {
        let problem = Problem::formula(ResolvedOperation::Subtraction, 42, 17);
        assert_eq!(problem.answer, 25);
        assert_eq!(problem.text, "42 - 17 = ?");
    }

    #[test]
    fn test_formula_multiplication() {
        let problem = Problem::formula(ResolvedOperation::Multiplication, 6, 7);
        assert_eq!(problem.answer, 42);
        assert_eq!(problem.text, "6 × 7 = ?");
    }

    #[test]
    fn test_formula_division() {
        let problem = Problem::formula(ResolvedOperation::Division, 12, 4);
        assert_eq!(problem.answer, 3);
        assert_eq!(problem.text, "12 ÷ 4 = ?");
    }

    #[test]
    fn test_worded_problem_keeps_given_answer() {
        let problem = Problem::worded(
            LifeScenario::Change,
            400,
            345,
            55,
            "The purchase comes to 345. How much change is due from 400?".to_string(),
        );
        assert_eq!(problem.answer, 55);
        assert_eq!(
            problem.operation,
            ResolvedOperation::Life(LifeScenario::Change)
        );
        assert!(problem.check_answer(55));
    }
}
