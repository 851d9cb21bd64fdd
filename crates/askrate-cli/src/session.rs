//! Interactive questionnaire session: prompt, record, report.
//!
//! A session runs two linear phases. PROMPT walks the question list,
//! validating and recording every answer, then records the session rating.
//! REPORT prints the session rating and the running average across all
//! stored ratings.

use std::io::{BufRead, Write};

use anyhow::{bail, Context, Result};
use askrate_core::answer::Answer;
use askrate_core::questions::QuestionSet;
use askrate_core::scoring;
use askrate_store::Store;

/// Printed once per invalid answer before re-reading input.
pub const INVALID_ANSWER_MESSAGE: &str = "Please, write only Yes|No or y|n ";

/// One run of the questionnaire against a pair of stores.
///
/// The session key and rating are computed once and memoized. Both are
/// re-derivable from the stores, so a fresh session over the same files
/// sees the same data.
pub struct Session {
    questions: QuestionSet,
    answers: Store,
    ratings: Store,
    session_key: Option<String>,
    rating: Option<u32>,
}

impl Session {
    pub fn new(questions: QuestionSet, answers: Store, ratings: Store) -> Self {
        Self {
            questions,
            answers,
            ratings,
            session_key: None,
            rating: None,
        }
    }

    /// The key this session's data is stored under: one past the number of
    /// answer keys already on disk, stringified.
    ///
    /// Every answer of the session shares this single key, and the session
    /// rating is saved under it too.
    fn session_key(&mut self) -> Result<String> {
        if let Some(key) = &self.session_key {
            return Ok(key.clone());
        }
        let key = (self.answers.keys()?.len() + 1).to_string();
        self.session_key = Some(key.clone());
        Ok(key)
    }

    /// Percentage of positive answers recorded under the session key.
    fn rating(&mut self) -> Result<u32> {
        if let Some(rating) = self.rating {
            return Ok(rating);
        }
        let key = self.session_key()?;
        let answers: Vec<String> = self.answers.read_by_key(&key)?.unwrap_or_default();
        let rating = scoring::session_rating(&answers, self.questions.len());
        self.rating = Some(rating);
        Ok(rating)
    }

    /// PROMPT phase: ask every question in order, validating and recording
    /// each answer, then record the session rating.
    pub fn run_prompt<R: BufRead, W: Write>(&mut self, input: &mut R, output: &mut W) -> Result<()> {
        let key = self.session_key()?;

        for question in &self.questions.questions {
            write!(output, "{}", question.text)?;
            output.flush()?;
            let answer = read_answer(input, output)?;
            self.answers
                .merge_to_array_by_key(&key, answer.as_str().to_string())?;
        }

        let rating = self.rating()?;
        self.ratings.save_by_key(&key, &rating)?;
        tracing::debug!(session = %key, rating, "session recorded");
        Ok(())
    }

    /// REPORT phase: print this session's rating and the running average.
    pub fn run_report<W: Write>(&mut self, output: &mut W) -> Result<()> {
        let rating = self.rating()?;
        let average = self.average_rating()?;
        writeln!(output, "Your rating is {rating}")?;
        writeln!(output, "Average rating is {average}")?;
        Ok(())
    }

    /// Sum of all stored ratings divided by the numeric value of the most
    /// recent rating key. The divisor equals the session count only when
    /// sessions run sequentially against the same store; see
    /// [`scoring::average_rating`].
    fn average_rating(&self) -> Result<i64> {
        let ratings: Vec<i64> = self.ratings.all_stored()?;
        let keys = self.ratings.keys()?;
        let divisor = match keys.last() {
            Some(k) => k
                .parse::<i64>()
                .with_context(|| format!("rating key is not numeric: {k}"))?,
            None => bail!("no ratings recorded yet"),
        };
        scoring::average_rating(&ratings, divisor)
            .ok_or_else(|| anyhow::anyhow!("no ratings recorded yet"))
    }
}

/// Read lines until one parses as a yes/no answer, printing the fixed error
/// message once per invalid attempt.
///
/// An explicit loop with no retry bound: a hostile input stream must not
/// grow the stack. EOF mid-session is an error.
fn read_answer<R: BufRead, W: Write>(input: &mut R, output: &mut W) -> Result<Answer> {
    loop {
        let mut line = String::new();
        let read = input
            .read_line(&mut line)
            .context("failed to read answer")?;
        if read == 0 {
            bail!("unexpected end of input while waiting for an answer");
        }

        let raw = line.trim_end_matches(['\r', '\n']).to_lowercase();
        match raw.parse::<Answer>() {
            Ok(answer) => return Ok(answer),
            Err(_) => {
                writeln!(output, "{INVALID_ANSWER_MESSAGE}")?;
                output.flush()?;
            }
        }
    }
}
