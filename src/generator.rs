use crate::difficulty::{Difficulty, InvalidRangeError, NumberRange};
use crate::operations::{LifeScenario, OperationKind, Problem, ResolvedOperation};
use log::{debug, info};
use rand::Rng;
use rand::rngs::ThreadRng;

/// Generates one problem for the selected operation and difficulty tier.
pub fn generate(kind: OperationKind, difficulty: Difficulty) -> Result<Problem, InvalidRangeError> {
    generate_in_range(kind, difficulty.range(), difficulty)
}

/// Same as [`generate`] but with an explicit range. Fails only when the
/// range is inverted, which the fixed tiers never produce.
pub fn generate_in_range(
    kind: OperationKind,
    range: NumberRange,
    difficulty: Difficulty,
) -> Result<Problem, InvalidRangeError> {
    range.validate()?;
    let mut rng = rand::thread_rng();

    let problem = match kind {
        OperationKind::Mixed => {
            let basic = [
                OperationKind::Addition,
                OperationKind::Subtraction,
                OperationKind::Multiplication,
                OperationKind::Division,
            ];
            let resolved = basic[rng.gen_range(0..basic.len())];
            debug!("Mixed mode resolved to {}", resolved.as_str());
            generate_basic(&mut rng, resolved, range, difficulty)
        }
        OperationKind::Life => generate_life(&mut rng, range),
        basic => generate_basic(&mut rng, basic, range, difficulty),
    };

    info!(
        "Generated {} problem: {} (answer: {})",
        problem.operation.as_str(),
        problem.text,
        problem.answer
    );
    Ok(problem)
}

fn generate_basic(
    rng: &mut ThreadRng,
    kind: OperationKind,
    range: NumberRange,
    difficulty: Difficulty,
) -> Problem {
    match kind {
        OperationKind::Addition => {
            let num1 = rng.gen_range(range.min..=range.max);
            let num2 = rng.gen_range(range.min..=range.max);
            Problem::formula(ResolvedOperation::Addition, num1, num2)
        }
        OperationKind::Subtraction => {
            // num2 never exceeds num1, so the result stays non-negative
            let num1 = rng.gen_range(range.min..=range.max);
            let num2 = rng.gen_range(range.min..=num1);
            Problem::formula(ResolvedOperation::Subtraction, num1, num2)
        }
        OperationKind::Multiplication => {
            // Medium operands are capped at 12 to keep products within
            // multiplication-table scale
            let max = if difficulty == Difficulty::Medium {
                12
            } else {
                range.max
            };
            let num1 = rng.gen_range(range.min..=max);
            let num2 = rng.gen_range(range.min..=max);
            Problem::formula(ResolvedOperation::Multiplication, num1, num2)
        }
        OperationKind::Division => {
            // Answer-first construction: the quotient is the unknown
            let (num2, multiplier) = if difficulty == Difficulty::Medium {
                let num2 = rng.gen_range(1..=10).max(2);
                let multiplier = rng.gen_range(1..=10);
                (num2, multiplier)
            } else {
                let num2 = rng.gen_range(range.min..=range.max).max(2);
                // Ceiling cap: when num2 does not divide max evenly the
                // dividend may overshoot max by up to num2 - 1
                let multiplier = rng.gen_range(1..=(range.max + num2 - 1) / num2);
                (num2, multiplier)
            };
            Problem::formula(ResolvedOperation::Division, num2 * multiplier, num2)
        }
        OperationKind::Mixed | OperationKind::Life => {
            unreachable!("meta-kinds are resolved before operand generation")
        }
    }
}

fn generate_life(rng: &mut ThreadRng, range: NumberRange) -> Problem {
    if rng.gen_bool(0.5) {
        let price = rng.gen_range(range.min..=range.max);
        let quantity = rng.gen_range(1..=5);
        let answer = price * quantity;
        let text = format!(
            "A single item costs {}. How much do {} of them cost?",
            price, quantity
        );
        Problem::worded(LifeScenario::Shopping, price, quantity, answer, text)
    } else {
        let total = rng.gen_range(range.min..=range.max);
        // Pay with the next multiple of 100 at or above the total
        let paid = (total + 99) / 100 * 100;
        let answer = paid - total;
        let text = format!(
            "The purchase comes to {}. How much change is due from {}?",
            total, paid
        );
        Problem::worded(LifeScenario::Change, paid, total, answer, text)
    }
}
