use crate::difficulty::NumberRange;
use crate::operations::ResolvedOperation;
use log::{debug, warn};
use rand::Rng;
use rand::seq::SliceRandom;

/// Attempt budget for drawing plausible wrong answers before the
/// deterministic fallback kicks in
const MAX_ATTEMPTS: u32 = 20;
const OPTION_COUNT: usize = 4;

/// Builds the four-entry multiple-choice option list for a problem: the
/// correct answer plus three unique, range-valid distractors, shuffled so
/// the correct answer's position is unpredictable.
///
/// When the perturbation loop cannot find enough candidates (narrow ranges,
/// answers near the range edge, or answers outside the range entirely), the
/// remaining slots are filled with `answer + 2k` fallback values. Those
/// fillers may fall outside the range; this is a documented degradation,
/// not an error.
pub fn generate_options(
    correct_answer: i32,
    range: NumberRange,
    operation: ResolvedOperation,
) -> Vec<i32> {
    let mut rng = rand::thread_rng();
    let mut options = vec![correct_answer];
    let mut attempts = 0;

    while options.len() < OPTION_COUNT && attempts < MAX_ATTEMPTS {
        attempts += 1;
        let offset = match operation {
            // Quotients are small, so wrong answers must sit close by
            ResolvedOperation::Division => rng.gen_range(1..=2),
            ResolvedOperation::Multiplication => rng.gen_range(1..=3),
            // Addition, subtraction and life problems scale the offset to
            // 20% of the answer, with a floor of 5
            _ => {
                let spread = (correct_answer / 5).max(5);
                rng.gen_range(1..=spread)
            }
        };
        let candidate = if rng.gen_bool(0.5) {
            correct_answer + offset
        } else {
            correct_answer - offset
        };

        if candidate > 0 && range.contains(candidate) && !options.contains(&candidate) {
            options.push(candidate);
        }
    }

    if options.len() < OPTION_COUNT {
        warn!(
            "Only {} unique option(s) for answer {} after {} attempts; filling with fallback values",
            options.len(),
            correct_answer,
            MAX_ATTEMPTS
        );
        let mut k = options.len() as i32;
        while options.len() < OPTION_COUNT {
            let fallback = correct_answer + 2 * k;
            if !options.contains(&fallback) {
                options.push(fallback);
            }
            k += 1;
        }
    }

    options.shuffle(&mut rng);
    debug!(
        "Options {:?} for correct answer {} ({})",
        options,
        correct_answer,
        operation.as_str()
    );
    options
}
