//! The `askrate ask` command — also the default when no subcommand is given.

use std::io;
use std::path::PathBuf;

use anyhow::Result;
use askrate_core::questions::QuestionSet;
use askrate_store::Store;

use crate::session::Session;

pub fn execute(
    questions: Option<PathBuf>,
    answers_store: PathBuf,
    ratings_store: PathBuf,
) -> Result<()> {
    let questions = QuestionSet::load_or_builtin(questions.as_deref())?;
    let answers = Store::open(&answers_store)?;
    let ratings = Store::open(&ratings_store)?;

    let mut session = Session::new(questions, answers, ratings);

    let stdin = io::stdin();
    let mut input = stdin.lock();
    let mut output = io::stdout();

    session.run_prompt(&mut input, &mut output)?;
    session.run_report(&mut output)?;
    Ok(())
}
