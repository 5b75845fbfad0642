//! One game from opening guess to a terminal status
//!
//! A [`GameSession`] exclusively owns its constraint state and candidate
//! set. It moves `Active → {Active, Won, Lost}` on recorded feedback, or to
//! `Aborted` when no legal guess remains, the oracle never settles, or an
//! internal invariant breaks.

use super::constraint::ConstraintState;
use super::engine::Solver;
use super::filter::filter;
use super::oracle::{FeedbackOracle, PollOutcome, poll_feedback};
use super::scorer::{best_candidate, score, select_guess};
use crate::core::{Feedback, GameStatus, SolverError, Word};
use rand::Rng;
use rustc_hash::FxHashSet;

/// Summary of one recorded round
#[derive(Debug, Clone, PartialEq)]
pub struct RoundReport {
    pub guess: Word,
    pub feedback: Feedback,
    /// Score of the guess in the state it was chosen from
    pub score: f64,
    pub candidates_before: usize,
    pub candidates_after: usize,
}

/// State of a single game
pub struct GameSession<'a> {
    solver: &'a Solver<'a>,
    state: ConstraintState,
    candidates: Vec<Word>,
    history: Vec<RoundReport>,
    attempts: usize,
    status: GameStatus,
    rejected: FxHashSet<Word>,
}

impl<'a> GameSession<'a> {
    pub(super) fn new(solver: &'a Solver<'a>) -> Self {
        Self {
            solver,
            state: ConstraintState::new(),
            candidates: solver.dictionary().to_vec(),
            history: Vec::new(),
            attempts: 0,
            status: GameStatus::Active,
            rejected: FxHashSet::default(),
        }
    }

    #[must_use]
    pub const fn status(&self) -> GameStatus {
        self.status
    }

    #[must_use]
    pub fn history(&self) -> &[RoundReport] {
        &self.history
    }

    /// Words still consistent with every recorded round, in dictionary order
    #[must_use]
    pub fn candidates(&self) -> &[Word] {
        &self.candidates
    }

    #[must_use]
    pub const fn state(&self) -> &ConstraintState {
        &self.state
    }

    /// Recorded attempts; retries and rejected guesses do not count
    #[must_use]
    pub const fn attempts(&self) -> usize {
        self.attempts
    }

    #[must_use]
    pub fn remaining_attempts(&self) -> usize {
        self.solver.config().max_attempts.saturating_sub(self.attempts)
    }

    /// Guesses the game refused during this session
    #[must_use]
    pub const fn rejected(&self) -> &FxHashSet<Word> {
        &self.rejected
    }

    /// Pick the next guess
    ///
    /// Leaves the game state untouched on success. An error that ends the
    /// game (`WordGeneration` or a fault) moves the session to `Aborted`.
    ///
    /// # Errors
    /// - `GameOver` if the session is finished
    /// - `GuessLimit` if the attempt counter is out of range
    /// - `WordGeneration` if no candidate remains
    pub fn next_guess<R>(&mut self, rng: &mut R) -> Result<Word, SolverError>
    where
        R: Rng + ?Sized,
    {
        self.pick_guess(rng).map_err(|err| self.fail(err))
    }

    /// Fold settled feedback for `guess` into the session
    ///
    /// Uses one attempt, narrows the candidates and decides whether the game
    /// is won or lost.
    ///
    /// # Errors
    /// - `GameOver` if the session is finished
    /// - `UnsettledFeedback` if any position is still pending
    /// - `GuessLimit` if the attempt counter is out of range (aborts the session)
    pub fn record(
        &mut self,
        guess: &Word,
        feedback: Feedback,
    ) -> Result<RoundReport, SolverError> {
        if let Err(err) = self.ensure_active() {
            return Err(self.fail(err));
        }
        if !feedback.is_settled() {
            return Err(SolverError::UnsettledFeedback);
        }

        let config = self.solver.config();
        let guess_score = score(guess, &self.state, self.solver.weights(), &config.scoring);
        let candidates_before = self.candidates.len();

        self.state.update(guess, &feedback);
        self.attempts += 1;
        self.candidates = filter(&self.candidates, &self.state);

        let report = RoundReport {
            guess: guess.clone(),
            feedback,
            score: guess_score,
            candidates_before,
            candidates_after: self.candidates.len(),
        };
        log::debug!(
            "guess {} is {guess} ({guess_score:.2}) -> {feedback}, {} of {} candidates remain",
            self.attempts,
            report.candidates_after,
            candidates_before,
        );
        self.history.push(report.clone());

        if feedback.is_solved() {
            self.status = GameStatus::Won;
        } else if self.attempts >= config.max_attempts {
            self.status = GameStatus::Lost;
        }
        Ok(report)
    }

    /// Drop a guess the game refused and never offer it again
    ///
    /// Does not use an attempt.
    ///
    /// # Errors
    /// `GameOver` if the session is finished.
    pub fn reject(&mut self, guess: &Word) -> Result<(), SolverError> {
        if self.status.is_terminal() {
            return Err(SolverError::GameOver(self.status));
        }
        log::warn!("{guess} was rejected, dropping it from the candidates");
        self.candidates.retain(|word| word != guess);
        self.rejected.insert(guess.clone());
        Ok(())
    }

    /// Give up on an unfinished game
    pub fn abort(&mut self) {
        if !self.status.is_terminal() {
            self.status = GameStatus::Aborted;
        }
    }

    /// Choose a guess, get it scored by `oracle` and record the result
    ///
    /// A guess that stays pending past the retry budget is withdrawn and
    /// rejected; an empty row is withdrawn and resubmitted. Neither uses an
    /// attempt.
    ///
    /// # Errors
    /// Everything [`next_guess`](Self::next_guess) and [`record`](Self::record)
    /// return, plus `OracleExhausted` once the resubmission budget is spent.
    /// `WordGeneration`, `OracleExhausted` and faults abort the session.
    pub fn play_round<O, R>(
        &mut self,
        oracle: &mut O,
        rng: &mut R,
    ) -> Result<RoundReport, SolverError>
    where
        O: FeedbackOracle + ?Sized,
        R: Rng + ?Sized,
    {
        let policy = self.solver.config().retry;
        let mut resubmissions = 0;

        loop {
            let guess = self.next_guess(rng)?;

            let outcome = poll_feedback(oracle, &guess, &policy);
            if let PollOutcome::Settled(feedback) = outcome {
                return self.record(&guess, feedback);
            }

            oracle.withdraw(&guess);
            if resubmissions >= policy.max_resubmissions {
                self.status = GameStatus::Aborted;
                return Err(SolverError::OracleExhausted { resubmissions });
            }
            resubmissions += 1;

            if outcome == PollOutcome::Indeterminate {
                self.reject(&guess)?;
            } else {
                log::warn!("{guess} left an empty row, resubmitting");
            }
        }
    }

    /// Play rounds until the game ends
    ///
    /// # Errors
    /// The first error from [`play_round`](Self::play_round).
    pub fn play<O, R>(&mut self, oracle: &mut O, rng: &mut R) -> Result<GameStatus, SolverError>
    where
        O: FeedbackOracle + ?Sized,
        R: Rng + ?Sized,
    {
        while !self.status.is_terminal() {
            self.play_round(oracle, rng)?;
        }
        Ok(self.status)
    }

    fn pick_guess<R>(&self, rng: &mut R) -> Result<Word, SolverError>
    where
        R: Rng + ?Sized,
    {
        self.ensure_active()?;
        if self.candidates.is_empty() {
            return Err(SolverError::WordGeneration);
        }

        let scoring = &self.solver.config().scoring;
        let weights = self.solver.weights();
        let guess = match select_guess(&self.candidates, &self.state, weights, scoring, rng) {
            Some(word) if !self.rejected.contains(&word) => Some(word),
            _ => best_candidate(&self.candidates, &self.state, weights, scoring, rng),
        };
        guess.ok_or(SolverError::WordGeneration)
    }

    fn ensure_active(&self) -> Result<(), SolverError> {
        if self.status.is_terminal() {
            return Err(SolverError::GameOver(self.status));
        }
        let max = self.solver.config().max_attempts;
        if self.attempts >= max {
            return Err(SolverError::GuessLimit {
                attempts: self.attempts,
                max,
            });
        }
        Ok(())
    }

    fn fail(&mut self, err: SolverError) -> SolverError {
        if err.is_fault() || err == SolverError::WordGeneration {
            self.status = GameStatus::Aborted;
        }
        err
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::solver::{SolverConfig, TargetOracle};
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn words(list: &[&str]) -> Vec<Word> {
        list.iter().map(|w| Word::new(*w).unwrap()).collect()
    }

    fn word(s: &str) -> Word {
        Word::new(s).unwrap()
    }

    fn dictionary() -> Vec<Word> {
        words(&[
            "duvet", "dwelt", "debut", "adieu", "sorry", "story", "rorts", "knead", "tease",
            "eerie", "dunce", "deter", "tuned",
        ])
    }

    #[test]
    fn first_guess_is_opening_word() {
        let dict = dictionary();
        let solver = Solver::from_dictionary(&dict, SolverConfig::default());
        let mut session = solver.new_session();
        let mut rng = StdRng::seed_from_u64(3);
        assert_eq!(session.next_guess(&mut rng).unwrap(), word("adieu"));
    }

    #[test]
    fn record_updates_everything() {
        let dict = dictionary();
        let solver = Solver::from_dictionary(&dict, SolverConfig::default());
        let mut session = solver.new_session();

        let guess = word("adieu");
        let report = session
            .record(&guess, Feedback::calculate(&guess, &word("duvet")))
            .unwrap();

        assert_eq!(report.candidates_before, dict.len());
        assert_eq!(report.candidates_after, session.candidates().len());
        assert!(session.candidates().contains(&word("duvet")));
        assert_eq!(session.attempts(), 1);
        assert_eq!(session.history().len(), 1);
        assert_eq!(session.status(), GameStatus::Active);
    }

    #[test]
    fn solved_feedback_wins() {
        let dict = dictionary();
        let solver = Solver::from_dictionary(&dict, SolverConfig::default());
        let mut session = solver.new_session();

        session.record(&word("duvet"), Feedback::SOLVED).unwrap();
        assert_eq!(session.status(), GameStatus::Won);
        assert_eq!(session.state().template().to_string(), "duvet");
    }

    #[test]
    fn attempt_limit_loses() {
        let dict = dictionary();
        let config = SolverConfig {
            max_attempts: 2,
            ..SolverConfig::default()
        };
        let solver = Solver::from_dictionary(&dict, config);
        let mut session = solver.new_session();

        let target = word("tuned");
        for guess in ["adieu", "sorry"] {
            let guess = word(guess);
            session
                .record(&guess, Feedback::calculate(&guess, &target))
                .unwrap();
        }
        assert_eq!(session.status(), GameStatus::Lost);
        assert_eq!(session.remaining_attempts(), 0);
    }

    #[test]
    fn finished_session_rejects_moves() {
        let dict = dictionary();
        let solver = Solver::from_dictionary(&dict, SolverConfig::default());
        let mut session = solver.new_session();
        session.record(&word("duvet"), Feedback::SOLVED).unwrap();

        let mut rng = StdRng::seed_from_u64(0);
        assert_eq!(
            session.next_guess(&mut rng),
            Err(SolverError::GameOver(GameStatus::Won))
        );
        assert_eq!(
            session.record(&word("duvet"), Feedback::SOLVED),
            Err(SolverError::GameOver(GameStatus::Won))
        );
        assert_eq!(session.status(), GameStatus::Won);
        assert_eq!(session.history().len(), 1);
    }

    #[test]
    fn pending_feedback_is_not_recorded() {
        let dict = dictionary();
        let solver = Solver::from_dictionary(&dict, SolverConfig::default());
        let mut session = solver.new_session();

        let result = session.record(&word("adieu"), "GY-??".parse().unwrap());
        assert_eq!(result, Err(SolverError::UnsettledFeedback));
        assert_eq!(session.attempts(), 0);
        assert!(session.history().is_empty());
        assert!(session.state().is_blank());
    }

    #[test]
    fn empty_candidates_abort() {
        let dict = dictionary();
        let solver = Solver::from_dictionary(&dict, SolverConfig::default());

        // duve_ without t: nothing in the dictionary fits
        let mut fresh = solver.new_session();
        fresh.record(&word("duvet"), "GGGG-".parse().unwrap()).unwrap();
        fresh.record(&word("dunce"), "GG---".parse().unwrap()).unwrap();
        assert!(fresh.candidates().is_empty());

        let mut oracle = TargetOracle::new(word("duvet"));
        let mut rng = StdRng::seed_from_u64(0);
        assert_eq!(
            fresh.play_round(&mut oracle, &mut rng),
            Err(SolverError::WordGeneration)
        );
        assert_eq!(fresh.status(), GameStatus::Aborted);
    }

    #[test]
    fn next_guess_with_no_candidates_aborts() {
        let dict = dictionary();
        let solver = Solver::from_dictionary(&dict, SolverConfig::default());
        let mut session = solver.new_session();
        session.record(&word("duvet"), "GGGG-".parse().unwrap()).unwrap();
        session.record(&word("dunce"), "GG---".parse().unwrap()).unwrap();

        let mut rng = StdRng::seed_from_u64(0);
        assert_eq!(session.next_guess(&mut rng), Err(SolverError::WordGeneration));
        assert_eq!(session.status(), GameStatus::Aborted);
        assert_eq!(
            session.next_guess(&mut rng),
            Err(SolverError::GameOver(GameStatus::Aborted))
        );
    }

    #[test]
    fn reject_removes_candidate_without_attempt() {
        let dict = dictionary();
        let solver = Solver::from_dictionary(&dict, SolverConfig::default());
        let mut session = solver.new_session();

        session.reject(&word("story")).unwrap();
        assert!(!session.candidates().contains(&word("story")));
        assert!(session.rejected().contains(&word("story")));
        assert_eq!(session.attempts(), 0);
    }

    #[test]
    fn rejected_opening_word_is_not_repeated() {
        let dict = dictionary();
        let solver = Solver::from_dictionary(&dict, SolverConfig::default());
        let mut session = solver.new_session();
        session.reject(&word("adieu")).unwrap();

        let mut rng = StdRng::seed_from_u64(5);
        let guess = session.next_guess(&mut rng).unwrap();
        assert_ne!(guess, word("adieu"));
        assert!(session.candidates().contains(&guess));
    }

    #[test]
    fn abort_only_affects_active_sessions() {
        let dict = dictionary();
        let solver = Solver::from_dictionary(&dict, SolverConfig::default());

        let mut active = solver.new_session();
        active.abort();
        assert_eq!(active.status(), GameStatus::Aborted);

        let mut won = solver.new_session();
        won.record(&word("duvet"), Feedback::SOLVED).unwrap();
        won.abort();
        assert_eq!(won.status(), GameStatus::Won);
    }

    #[test]
    fn play_finds_target() {
        let dict = dictionary();
        let solver = Solver::from_dictionary(&dict, SolverConfig::default());
        let mut rng = StdRng::seed_from_u64(11);

        for target in &dict {
            let mut session = solver.new_session();
            let mut oracle = TargetOracle::new(target.clone());
            let status = session.play(&mut oracle, &mut rng).unwrap();

            assert!(session.attempts() <= 6, "target={target}");
            if status == GameStatus::Won {
                assert_eq!(&session.history().last().unwrap().guess, target);
            } else {
                assert_eq!(status, GameStatus::Lost);
            }
        }
    }
}
