//! Rating computation for questionnaire sessions.

use crate::answer::POSITIVE_ANSWERS;

/// Count the answers in `answers` that are positive ("yes" or "y").
///
/// Answers are expected in their stored lowercase form.
pub fn count_positive<S: AsRef<str>>(answers: &[S]) -> usize {
    answers
        .iter()
        .filter(|a| POSITIVE_ANSWERS.contains(&a.as_ref()))
        .count()
}

/// Session rating: `floor(100 * positive / total_questions)`.
///
/// A session with no questions rates 0 rather than dividing by zero.
pub fn session_rating<S: AsRef<str>>(answers: &[S], total_questions: usize) -> u32 {
    if total_questions == 0 {
        return 0;
    }
    (100 * count_positive(answers) / total_questions) as u32
}

/// Running average across stored ratings: `sum / divisor`, integer division.
///
/// The divisor is the numeric value of the most recent rating key, not the
/// number of stored ratings. The two only coincide when sessions run
/// sequentially against the same store; earlier versions of the tool
/// computed the average this way and the behavior is kept for parity.
///
/// Returns `None` when there is nothing to average or the divisor is zero.
pub fn average_rating(ratings: &[i64], divisor: i64) -> Option<i64> {
    if ratings.is_empty() || divisor == 0 {
        return None;
    }
    Some(ratings.iter().sum::<i64>() / divisor)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_positive_rates_100() {
        let answers = ["yes", "y", "yes", "y", "yes"];
        assert_eq!(session_rating(&answers, 5), 100);
    }

    #[test]
    fn all_negative_rates_0() {
        let answers = ["no", "n", "no"];
        assert_eq!(session_rating(&answers, 3), 0);
    }

    #[test]
    fn mixed_answers_floor_percentage() {
        // 2 positive of 5 questions
        let answers = ["yes", "y", "no", "n", "no"];
        assert_eq!(session_rating(&answers, 5), 40);
    }

    #[test]
    fn rating_uses_integer_division() {
        let answers = ["yes", "no", "no"];
        assert_eq!(session_rating(&answers, 3), 33);
        let answers = ["yes", "yes", "no"];
        assert_eq!(session_rating(&answers, 3), 66);
    }

    #[test]
    fn no_answers_rates_0() {
        let answers: [&str; 0] = [];
        assert_eq!(session_rating(&answers, 5), 0);
    }

    #[test]
    fn zero_questions_rates_0() {
        let answers = ["yes"];
        assert_eq!(session_rating(&answers, 0), 0);
    }

    #[test]
    fn count_positive_ignores_short_negative_forms() {
        let answers = ["y", "n", "yes", "no"];
        assert_eq!(count_positive(&answers), 2);
    }

    #[test]
    fn average_of_sequential_sessions() {
        // Three sequential sessions: keys 1..=3, so the divisor is 3.
        assert_eq!(average_rating(&[100, 0, 50], 3), Some(50));
    }

    #[test]
    fn average_uses_integer_division() {
        assert_eq!(average_rating(&[100, 33], 2), Some(66));
    }

    #[test]
    fn average_of_nothing_is_none() {
        assert_eq!(average_rating(&[], 0), None);
        assert_eq!(average_rating(&[], 5), None);
        assert_eq!(average_rating(&[40], 0), None);
    }
}
