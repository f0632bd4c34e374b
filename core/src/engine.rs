use core::num::Saturating;
use ndarray::Array2;
use serde::{Deserialize, Serialize};

use crate::*;

#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum EngineState {
    Ready,
    Active,
    Won,
}

impl EngineState {
    pub const fn is_ready(self) -> bool {
        matches!(self, Self::Ready)
    }

    pub const fn is_finished(self) -> bool {
        matches!(self, Self::Won)
    }
}

impl Default for EngineState {
    fn default() -> Self {
        Self::Ready
    }
}

/// Phase of the two-pick turn cycle.
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum TurnPhase {
    AwaitFirst,
    AwaitSecond(Coord2),
}

impl TurnPhase {
    pub const fn first_pick(self) -> Option<Coord2> {
        match self {
            Self::AwaitFirst => None,
            Self::AwaitSecond(first) => Some(first),
        }
    }
}

impl Default for TurnPhase {
    fn default() -> Self {
        Self::AwaitFirst
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct MatchEngine {
    board: Board,
    matched: Array2<bool>,
    matched_count: Saturating<CellCount>,
    attempts: Saturating<CellCount>,
    phase: TurnPhase,
    state: EngineState,
}

impl MatchEngine {
    pub fn new(board: Board) -> Self {
        let size = board.size();
        Self {
            board,
            matched: Array2::default(size.to_nd_index()),
            matched_count: Saturating(0),
            attempts: Saturating(0),
            phase: Default::default(),
            state: Default::default(),
        }
    }

    pub fn state(&self) -> EngineState {
        self.state
    }

    pub fn phase(&self) -> TurnPhase {
        self.phase
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn config(&self) -> GameConfig {
        self.board.config()
    }

    pub fn size(&self) -> Coord2 {
        self.board.size()
    }

    pub fn pair_count(&self) -> CellCount {
        self.board.pair_count()
    }

    pub fn attempts(&self) -> CellCount {
        self.attempts.0
    }

    pub fn matched_count(&self) -> CellCount {
        self.matched_count.0
    }

    pub fn matched_pairs(&self) -> CellCount {
        self.matched_count.0 / 2
    }

    pub fn is_matched(&self, coords: Coord2) -> bool {
        self.matched[coords.to_nd_index()]
    }

    pub fn is_complete(&self) -> bool {
        self.matched_count.0 == self.board.total_cards()
    }

    pub fn validate_coords(&self, coords: Coord2) -> Result<Coord2> {
        self.board.validate_coords(coords)
    }

    /// How the cell currently shows to the player: matched cards and the
    /// turn's accepted first pick are face up, everything else is hidden.
    pub fn card_at(&self, coords: Coord2) -> CardView {
        if self.is_matched(coords) || self.phase.first_pick() == Some(coords) {
            CardView::FaceUp(self.board[coords])
        } else {
            CardView::Hidden
        }
    }

    /// Submits one pick to the turn machine.
    ///
    /// A matched position is rejected in either phase; as the second pick
    /// it also abandons the turn, so the first pick must be re-solicited.
    /// Repeating the first pick as the second is rejected in place. None
    /// of the rejections count as an attempt.
    pub fn pick(&mut self, coords: Coord2) -> Result<PickOutcome> {
        let coords = self.board.validate_coords(coords)?;
        self.check_not_finished()?;

        match self.phase {
            TurnPhase::AwaitFirst => {
                if self.is_matched(coords) {
                    return Err(GameError::AlreadyMatched);
                }
                self.phase = TurnPhase::AwaitSecond(coords);
                self.mark_started();
                Ok(PickOutcome::FirstUp(coords))
            }
            TurnPhase::AwaitSecond(first) => {
                if coords == first {
                    return Err(GameError::SameCard);
                }
                if self.is_matched(coords) {
                    self.phase = TurnPhase::AwaitFirst;
                    return Err(GameError::AlreadyMatched);
                }

                self.phase = TurnPhase::AwaitFirst;
                let outcome = self.resolve_pair(first, coords)?;
                Ok(PickOutcome::Resolved {
                    first,
                    second: coords,
                    outcome,
                })
            }
        }
    }

    /// Compares the cards at two positions, charging exactly one attempt
    /// whatever the outcome.
    ///
    /// Callers must pass two distinct, unmatched positions; `pick`
    /// enforces this for interactive play.
    pub fn resolve_pair(&mut self, first: Coord2, second: Coord2) -> Result<PairOutcome> {
        let first = self.board.validate_coords(first)?;
        let second = self.board.validate_coords(second)?;
        self.check_not_finished()?;

        self.attempts += 1;

        if self.board[first] == self.board[second] {
            self.mark_matched(first);
            self.mark_matched(second);
            if self.is_complete() {
                self.state = EngineState::Won;
            }
            Ok(PairOutcome::Matched)
        } else {
            Ok(PairOutcome::NoMatch)
        }
    }

    fn mark_matched(&mut self, coords: Coord2) {
        let cell = &mut self.matched[coords.to_nd_index()];
        if !*cell {
            *cell = true;
            self.matched_count += 1;
        }
    }

    fn mark_started(&mut self) {
        if matches!(self.state, EngineState::Ready) {
            self.state = EngineState::Active;
        }
    }

    fn check_not_finished(&self) -> Result<()> {
        if self.state.is_finished() {
            Err(GameError::AlreadyEnded)
        } else {
            Ok(())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn engine_2x2() -> MatchEngine {
        // A B
        // B A
        let board = Board::from_faces(&[&['A', 'B'], &['B', 'A']]).unwrap();
        MatchEngine::new(board)
    }

    fn symbol(face: char) -> Symbol {
        Symbol::from_char(face).unwrap()
    }

    #[test]
    fn first_pick_goes_face_up_and_waits_for_its_partner() {
        let mut engine = engine_2x2();

        let outcome = engine.pick((0, 0)).unwrap();

        assert_eq!(outcome, PickOutcome::FirstUp((0, 0)));
        assert!(!outcome.ends_turn());
        assert_eq!(engine.phase(), TurnPhase::AwaitSecond((0, 0)));
        assert_eq!(engine.state(), EngineState::Active);
        assert_eq!(engine.card_at((0, 0)), CardView::FaceUp(symbol('A')));
        assert!(engine.card_at((0, 0)).is_face_up());
        assert_eq!(engine.card_at((0, 1)), CardView::Hidden);
        assert_eq!(engine.attempts(), 0);
    }

    #[test]
    fn matching_pair_joins_the_matched_set() {
        let mut engine = engine_2x2();

        engine.pick((0, 0)).unwrap();
        let outcome = engine.pick((1, 1)).unwrap();

        assert_eq!(
            outcome,
            PickOutcome::Resolved {
                first: (0, 0),
                second: (1, 1),
                outcome: PairOutcome::Matched,
            }
        );
        assert!(engine.is_matched((0, 0)));
        assert!(engine.is_matched((1, 1)));
        assert_eq!(engine.matched_count(), 2);
        assert_eq!(engine.attempts(), 1);
    }

    #[test]
    fn mismatched_pair_counts_the_attempt_without_matching() {
        let mut engine = engine_2x2();

        engine.pick((0, 0)).unwrap();
        let outcome = engine.pick((0, 1)).unwrap();

        assert_eq!(
            outcome,
            PickOutcome::Resolved {
                first: (0, 0),
                second: (0, 1),
                outcome: PairOutcome::NoMatch,
            }
        );
        assert_eq!(engine.matched_count(), 0);
        assert_eq!(engine.attempts(), 1);
        assert_eq!(engine.card_at((0, 0)), CardView::Hidden);
        assert_eq!(engine.phase(), TurnPhase::AwaitFirst);
    }

    #[test]
    fn picking_the_same_card_twice_is_rejected_in_place() {
        let mut engine = engine_2x2();

        engine.pick((0, 0)).unwrap();
        let err = engine.pick((0, 0)).unwrap_err();

        assert_eq!(err, GameError::SameCard);
        assert_eq!(engine.phase(), TurnPhase::AwaitSecond((0, 0)));
        assert_eq!(engine.attempts(), 0);
    }

    #[test]
    fn first_pick_on_a_matched_card_is_rejected() {
        let mut engine = engine_2x2();
        engine.pick((0, 0)).unwrap();
        engine.pick((1, 1)).unwrap();

        let err = engine.pick((0, 0)).unwrap_err();

        assert_eq!(err, GameError::AlreadyMatched);
        assert_eq!(engine.phase(), TurnPhase::AwaitFirst);
        assert_eq!(engine.attempts(), 1);
    }

    #[test]
    fn matched_second_pick_abandons_the_whole_turn() {
        let mut engine = engine_2x2();
        engine.pick((0, 0)).unwrap();
        engine.pick((1, 1)).unwrap();

        engine.pick((0, 1)).unwrap();
        let err = engine.pick((1, 1)).unwrap_err();

        assert_eq!(err, GameError::AlreadyMatched);
        assert_eq!(engine.phase(), TurnPhase::AwaitFirst);
        assert_eq!(engine.attempts(), 1);
        assert_eq!(engine.card_at((0, 1)), CardView::Hidden);
    }

    #[test]
    fn out_of_bounds_pick_changes_nothing() {
        let mut engine = engine_2x2();

        let err = engine.pick((5, 0)).unwrap_err();

        assert_eq!(err, GameError::OutOfBounds);
        assert_eq!(engine.validate_coords((5, 0)), Err(GameError::OutOfBounds));
        assert_eq!(engine.phase(), TurnPhase::AwaitFirst);
        assert!(engine.state().is_ready());
        assert_eq!(engine.attempts(), 0);
        assert_eq!(engine.matched_count(), 0);
    }

    #[test]
    fn clearing_every_pair_wins_the_game() {
        let mut engine = engine_2x2();

        engine.pick((0, 0)).unwrap();
        engine.pick((1, 1)).unwrap();
        engine.pick((0, 1)).unwrap();
        let outcome = engine.pick((1, 0)).unwrap();

        assert_eq!(
            outcome,
            PickOutcome::Resolved {
                first: (0, 1),
                second: (1, 0),
                outcome: PairOutcome::Matched,
            }
        );
        assert!(engine.is_complete());
        assert_eq!(engine.state(), EngineState::Won);
        assert_eq!(engine.matched_count(), 4);
        assert_eq!(engine.attempts(), 2);
    }

    #[test]
    fn picks_after_the_win_are_rejected() {
        let mut engine = engine_2x2();
        engine.pick((0, 0)).unwrap();
        engine.pick((1, 1)).unwrap();
        engine.pick((0, 1)).unwrap();
        engine.pick((1, 0)).unwrap();

        assert_eq!(engine.pick((0, 0)).unwrap_err(), GameError::AlreadyEnded);
    }

    #[test]
    fn resolve_pair_charges_every_call_exactly_once() {
        let mut engine = engine_2x2();

        assert!(!engine.resolve_pair((0, 0), (0, 1)).unwrap().is_match());
        assert!(engine.resolve_pair((0, 0), (1, 1)).unwrap().is_match());
        assert_eq!(engine.attempts(), 2);
    }

    #[test]
    fn matched_set_only_grows() {
        let mut engine = engine_2x2();

        engine.pick((0, 0)).unwrap();
        engine.pick((0, 1)).unwrap();
        assert_eq!(engine.matched_count(), 0);

        engine.pick((0, 0)).unwrap();
        engine.pick((1, 1)).unwrap();
        assert_eq!(engine.matched_count(), 2);

        engine.pick((0, 1)).unwrap();
        engine.pick((1, 0)).unwrap();
        assert_eq!(engine.matched_count(), 4);
    }
}
