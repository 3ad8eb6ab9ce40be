use crate::factors::prime_factors;
use crate::operations::{LifeScenario, ResolvedOperation};

/// One explanatory step shown when hint mode is on
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HintStep {
    pub title: String,
    pub body: String,
}

impl HintStep {
    fn new(number: usize, heading: &str, body: String) -> Self {
        HintStep {
            title: format!("Step {}: {}", number, heading),
            body,
        }
    }
}

fn tens(n: i32) -> i32 {
    n / 10 * 10
}

fn ones(n: i32) -> i32 {
    n % 10
}

/// Decomposes a problem into ordered explanatory steps. Returns an empty
/// sequence when no useful decomposition exists: addition, subtraction and
/// multiplication skip hints entirely while both operands are single-digit,
/// since splitting into tens and ones is meaningless below 10. Division and
/// life problems always produce hints.
pub fn compose_hints(
    operation: ResolvedOperation,
    operand1: i32,
    operand2: i32,
    answer: i32,
) -> Vec<HintStep> {
    match operation {
        ResolvedOperation::Addition => addition_hints(operand1, operand2),
        ResolvedOperation::Subtraction => subtraction_hints(operand1, operand2),
        ResolvedOperation::Multiplication => multiplication_hints(operand1, operand2, answer),
        ResolvedOperation::Division => division_hints(operand1, operand2, answer),
        ResolvedOperation::Life(LifeScenario::Shopping) => {
            shopping_hints(operand1, operand2, answer)
        }
        ResolvedOperation::Life(LifeScenario::Change) => change_hints(operand1, operand2, answer),
    }
}

fn split_step(number: usize, num1: i32, num2: i32) -> HintStep {
    HintStep::new(
        number,
        "Split the numbers into tens and ones",
        format!(
            "{} = {} + {}\n{} = {} + {}",
            num1,
            tens(num1),
            ones(num1),
            num2,
            tens(num2),
            ones(num2)
        ),
    )
}

fn addition_hints(num1: i32, num2: i32) -> Vec<HintStep> {
    if num1 <= 10 && num2 <= 10 {
        return Vec::new();
    }

    let sum_tens = tens(num1) + tens(num2);
    let sum_ones = ones(num1) + ones(num2);
    let total = sum_tens + sum_ones;

    vec![
        split_step(1, num1, num2),
        HintStep::new(
            2,
            "Add the tens",
            format!("{} + {} = {}", tens(num1), tens(num2), sum_tens),
        ),
        HintStep::new(
            3,
            "Add the ones",
            format!("{} + {} = {}", ones(num1), ones(num2), sum_ones),
        ),
        HintStep::new(
            4,
            "Add the partial sums",
            format!(
                "{} + {} = {}\nSo {} + {} = {}",
                sum_tens, sum_ones, total, num1, num2, total
            ),
        ),
    ]
}

fn subtraction_hints(num1: i32, num2: i32) -> Vec<HintStep> {
    if num1 <= 10 && num2 <= 10 {
        return Vec::new();
    }

    let mut steps = vec![split_step(1, num1, num2)];
    let mut step = 2;

    // Borrow ten from the tens column when the minuend's ones digit is
    // too small to subtract from
    let (top_tens, top_ones) = if ones(num1) < ones(num2) {
        let borrowed_tens = tens(num1) - 10;
        let borrowed_ones = ones(num1) + 10;
        steps.push(HintStep::new(
            step,
            "Borrow ten",
            format!(
                "Since {} < {}, borrow ten from the tens:\n{} + {} = {} + {}",
                ones(num1),
                ones(num2),
                tens(num1),
                ones(num1),
                borrowed_tens,
                borrowed_ones
            ),
        ));
        step += 1;
        (borrowed_tens, borrowed_ones)
    } else {
        (tens(num1), ones(num1))
    };

    let diff_tens = top_tens - tens(num2);
    let diff_ones = top_ones - ones(num2);
    let total = diff_tens + diff_ones;

    steps.push(HintStep::new(
        step,
        "Subtract the tens",
        format!("{} - {} = {}", top_tens, tens(num2), diff_tens),
    ));
    steps.push(HintStep::new(
        step + 1,
        "Subtract the ones",
        format!("{} - {} = {}", top_ones, ones(num2), diff_ones),
    ));
    steps.push(HintStep::new(
        step + 2,
        "Add the partial results",
        format!(
            "{} + {} = {}\nSo {} - {} = {}",
            diff_tens, diff_ones, total, num1, num2, total
        ),
    ));
    steps
}

fn multiplication_hints(num1: i32, num2: i32, answer: i32) -> Vec<HintStep> {
    if num1 <= 10 && num2 <= 10 {
        return Vec::new();
    }

    let tens_by_tens = tens(num1) * tens(num2);
    let tens_by_ones = tens(num1) * ones(num2);
    let ones_by_tens = ones(num1) * tens(num2);
    let ones_by_ones = ones(num1) * ones(num2);

    vec![
        split_step(1, num1, num2),
        HintStep::new(
            2,
            "Multiply the tens by the tens",
            format!("{} × {} = {}", tens(num1), tens(num2), tens_by_tens),
        ),
        HintStep::new(
            3,
            "Multiply the tens by the ones",
            format!("{} × {} = {}", tens(num1), ones(num2), tens_by_ones),
        ),
        HintStep::new(
            4,
            "Multiply the ones by the tens",
            format!("{} × {} = {}", ones(num1), tens(num2), ones_by_tens),
        ),
        HintStep::new(
            5,
            "Multiply the ones by the ones",
            format!("{} × {} = {}", ones(num1), ones(num2), ones_by_ones),
        ),
        HintStep::new(
            6,
            "Add all the partial products",
            format!(
                "{} + {} + {} + {} = {}\nSo {} × {} = {}",
                tens_by_tens,
                tens_by_ones,
                ones_by_tens,
                ones_by_ones,
                answer,
                num1,
                num2,
                answer
            ),
        ),
    ]
}

fn division_hints(num1: i32, num2: i32, answer: i32) -> Vec<HintStep> {
    let mut steps = vec![
        HintStep::new(
            1,
            "Check the divisibility",
            format!("Does {} divide {} evenly?\n{} ÷ {} = ?", num2, num1, num1, num2),
        ),
        HintStep::new(
            2,
            "Recall the multiplication fact",
            format!(
                "Find the number that multiplied by {} gives {}:\n{} × {} = {}",
                num2, num1, num2, answer, num1
            ),
        ),
    ];

    if num1 > 100 || num2 > 10 {
        let format_factors = |n: i32| {
            prime_factors(n)
                .iter()
                .map(|f| f.to_string())
                .collect::<Vec<_>>()
                .join(" × ")
        };
        steps.push(HintStep::new(
            3,
            "Break both numbers into prime factors",
            format!(
                "{} = {}\n{} = {}\nCancel the common factors to get {}.",
                num1,
                format_factors(num1),
                num2,
                format_factors(num2),
                answer
            ),
        ));
    }

    steps
}

fn shopping_hints(price: i32, quantity: i32, answer: i32) -> Vec<HintStep> {
    let cost_body = if price >= 100 {
        // Expand the price into tens and ones before multiplying
        format!(
            "{} × {} = {} × ({} + {})\n{} × {} + {} × {} = {} + {}\n= {}",
            quantity,
            price,
            quantity,
            tens(price),
            ones(price),
            quantity,
            tens(price),
            quantity,
            ones(price),
            quantity * tens(price),
            quantity * ones(price),
            answer
        )
    } else {
        format!("{} × {} = {}", quantity, price, answer)
    };

    let hundreds = answer / 100 * 100;
    let remainder = answer % 100;
    let sum_body = if hundreds > 0 && remainder > 0 {
        format!(
            "Group the hundreds first: {}\nThen add the rest: {} + {} = {}",
            hundreds, hundreds, remainder, answer
        )
    } else if hundreds > 0 {
        format!("The total is a whole number of hundreds: {}", answer)
    } else {
        format!("No hundreds to group; the total is {}", answer)
    };

    vec![
        HintStep::new(1, "Work out the item cost", cost_body),
        HintStep::new(2, "Add up the costs", sum_body),
        HintStep::new(
            3,
            "Check the total",
            format!("Total: {}\nCheck: {} × {} = {}", answer, quantity, price, answer),
        ),
    ]
}

fn change_hints(paid: i32, total: i32, answer: i32) -> Vec<HintStep> {
    let hundreds = total / 100 * 100;
    let remainder = total % 100;

    vec![
        HintStep::new(
            1,
            "Break down the purchase amount",
            format!("{} = {} + {}", total, hundreds, remainder),
        ),
        HintStep::new(
            2,
            "Round up to the amount paid",
            format!("Pay with the next whole hundred: {}", paid),
        ),
        HintStep::new(
            3,
            "Check the change",
            format!("{} - {} = {}", paid, total, answer),
        ),
    ]
}
