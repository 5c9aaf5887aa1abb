use crate::game::board::{new_shuffled_board, Board};
use crate::game::round_state::{RoundPhase, RoundState};
use crate::game::snapshot::{build_snapshot, GameSnapshot};
use crate::game::symbol::Symbol;
use rand::rngs::StdRng;

// ============================================================================
// TIMER COMMANDS
// ============================================================================

/// A pair to turn face down again, stamped with the generation it belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FlipBack {
    pub pair: [usize; 2],
    pub generation: u64,
}

/// Scheduling work the controller asks its owner to carry out. The controller
/// never sleeps; ticks and flip-backs come back through `tick` and `resolve_mismatch`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimerCommand {
    /// Retire any running tick source, then start a new one.
    StartTicker,
    StopTicker,
    ScheduleFlipBack(FlipBack),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectionResult {
    Ignored,
    FirstReveal { index: usize },
    Matched { pair: [usize; 2], solved: bool },
    Mismatch { pair: [usize; 2] },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Transition {
    pub result: SelectionResult,
    pub commands: Vec<TimerCommand>,
}

impl Transition {
    fn ignored(commands: Vec<TimerCommand>) -> Self {
        Self {
            result: SelectionResult::Ignored,
            commands,
        }
    }
}

// ============================================================================
// CONTROLLER
// ============================================================================

/// Round state machine: owns the board, the round state and the shuffle source.
pub struct GameController {
    alphabet: Vec<Symbol>,
    rng: StdRng,
    board: Board,
    round: RoundState,
}

impl GameController {
    pub fn new(alphabet: &[Symbol], mut rng: StdRng) -> Self {
        let board = new_shuffled_board(alphabet, &mut rng);
        Self {
            alphabet: alphabet.to_vec(),
            rng,
            board,
            round: RoundState::new(),
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn round(&self) -> &RoundState {
        &self.round
    }

    pub fn phase(&self) -> RoundPhase {
        if self.board.is_solved() {
            RoundPhase::Solved
        } else if !self.round.pending_selection.is_empty() {
            RoundPhase::AwaitingSecond
        } else if !self.round.is_timer_running && self.round.move_count == 0 {
            RoundPhase::Idle
        } else {
            RoundPhase::AwaitingFirst
        }
    }

    pub fn snapshot(&self) -> GameSnapshot {
        build_snapshot(&self.board, &self.round, self.phase())
    }

    pub fn select_tile(&mut self, index: usize) -> Transition {
        if index >= self.board.len() || self.board.is_solved() {
            return Transition::ignored(Vec::new());
        }

        let mut commands = Vec::new();
        if !self.round.is_timer_running {
            self.round.is_timer_running = true;
            commands.push(TimerCommand::StartTicker);
        }

        let already_matched = self.board.tiles()[index].is_matched;
        if self.round.pending_selection.len() >= 2 || self.round.is_pending(index) || already_matched {
            return Transition::ignored(commands);
        }

        self.board = self.board.with_revealed(index);

        let first = match self.round.pending_selection.first().copied() {
            Some(first) => first,
            None => {
                self.round.pending_selection.push(index);
                return Transition {
                    result: SelectionResult::FirstReveal { index },
                    commands,
                };
            }
        };

        let pair = [first, index];
        self.round.pending_selection.clear();
        self.round.move_count += 1;

        let result = if self.board.tiles()[first].symbol == self.board.tiles()[index].symbol {
            self.board = self.board.with_matched(pair);
            let solved = self.board.is_solved();
            if solved {
                self.round.is_timer_running = false;
                commands.push(TimerCommand::StopTicker);
            }
            SelectionResult::Matched { pair, solved }
        } else {
            commands.push(TimerCommand::ScheduleFlipBack(FlipBack {
                pair,
                generation: self.round.generation,
            }));
            SelectionResult::Mismatch { pair }
        };

        Transition { result, commands }
    }

    /// Turns a mismatched pair face down. Returns false when the flip-back belongs
    /// to an older board. Tiles matched or pending by now stay revealed.
    pub fn resolve_mismatch(&mut self, flip: FlipBack) -> bool {
        if flip.generation != self.round.generation {
            return false;
        }

        let to_hide: Vec<usize> = flip
            .pair
            .iter()
            .copied()
            .filter(|&index| {
                let matched = self.board.get(index).is_some_and(|tile| tile.is_matched);
                !matched && !self.round.is_pending(index)
            })
            .collect();
        self.board = self.board.with_hidden(&to_hide);
        true
    }

    /// One timer period elapsed. Returns whether the clock advanced.
    pub fn tick(&mut self) -> bool {
        if !self.round.is_timer_running {
            return false;
        }
        self.round.elapsed_seconds += 1;
        true
    }

    pub fn restart(&mut self) -> Vec<TimerCommand> {
        self.board = new_shuffled_board(&self.alphabet, &mut self.rng);
        self.round.reset();
        vec![TimerCommand::StopTicker]
    }

    pub fn start_new_game(&mut self) -> Vec<TimerCommand> {
        let commands = self.restart();
        self.round.is_intro_visible = true;
        commands
    }

    pub fn begin_from_intro(&mut self) -> Vec<TimerCommand> {
        self.round.is_intro_visible = false;
        if self.round.is_timer_running {
            return Vec::new();
        }
        self.round.is_timer_running = true;
        vec![TimerCommand::StartTicker]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::symbol::alphabet;
    use assert_matches::assert_matches;
    use rand::SeedableRng;

    fn controller(pairs: usize) -> GameController {
        GameController::new(alphabet(pairs), StdRng::seed_from_u64(11))
    }

    fn find_pair(board: &Board, symbol: Symbol) -> [usize; 2] {
        let indices: Vec<usize> = board
            .tiles()
            .iter()
            .enumerate()
            .filter(|(_, tile)| tile.symbol == symbol)
            .map(|(index, _)| index)
            .collect();
        [indices[0], indices[1]]
    }

    fn find_mismatch(board: &Board, a: Symbol, b: Symbol) -> [usize; 2] {
        [find_pair(board, a)[0], find_pair(board, b)[0]]
    }

    #[test]
    fn test_first_click_starts_timer_once() {
        let mut game = controller(18);
        assert_eq!(game.phase(), RoundPhase::Idle);

        let transition = game.select_tile(0);
        assert_eq!(transition.result, SelectionResult::FirstReveal { index: 0 });
        assert_eq!(transition.commands, vec![TimerCommand::StartTicker]);
        assert!(game.round().is_timer_running);
        assert!(game.board().tiles()[0].is_revealed);
        assert_eq!(game.phase(), RoundPhase::AwaitingSecond);

        let [a, b] = find_pair(game.board(), game.board().tiles()[0].symbol);
        let second = if a == 0 { b } else { a };
        let transition = game.select_tile(second);
        assert!(!transition.commands.contains(&TimerCommand::StartTicker));
    }

    #[test]
    fn test_matching_pair() {
        let mut game = controller(18);
        let [a, b] = find_pair(game.board(), Symbol::HeartEyes);

        game.select_tile(a);
        let transition = game.select_tile(b);

        assert_eq!(
            transition.result,
            SelectionResult::Matched {
                pair: [a, b],
                solved: false
            }
        );
        assert!(transition.commands.is_empty(), "a match schedules no flip-back");
        assert!(game.board().tiles()[a].is_matched);
        assert!(game.board().tiles()[b].is_matched);
        assert!(game.round().pending_selection.is_empty());
        assert_eq!(game.round().move_count, 1);
        assert_eq!(game.phase(), RoundPhase::AwaitingFirst);
    }

    #[test]
    fn test_mismatch_schedules_flip_back() {
        let mut game = controller(18);
        let [a, b] = find_mismatch(game.board(), Symbol::HeartEyes, Symbol::Pizza);

        game.select_tile(a);
        let transition = game.select_tile(b);

        assert_eq!(transition.result, SelectionResult::Mismatch { pair: [a, b] });
        let flip = assert_matches!(
            transition.commands.as_slice(),
            [TimerCommand::ScheduleFlipBack(flip)] => *flip
        );
        assert_eq!(flip.pair, [a, b]);
        assert_eq!(game.round().move_count, 1);
        assert!(game.round().pending_selection.is_empty(), "clicks unblock before the flip-back");
        assert!(game.board().tiles()[a].is_revealed);
        assert!(game.board().tiles()[b].is_revealed);

        assert!(game.resolve_mismatch(flip));
        assert!(!game.board().tiles()[a].is_revealed);
        assert!(!game.board().tiles()[b].is_revealed);
    }

    #[test]
    fn test_pending_and_matched_tiles_ignore_clicks() {
        let mut game = controller(18);
        let [a, b] = find_pair(game.board(), Symbol::Cowboy);

        game.select_tile(a);
        let before = game.snapshot();
        assert_eq!(game.select_tile(a).result, SelectionResult::Ignored);
        assert_eq!(game.snapshot(), before);

        game.select_tile(b);
        let before = game.snapshot();
        assert_eq!(game.select_tile(a).result, SelectionResult::Ignored);
        assert_eq!(game.select_tile(b).result, SelectionResult::Ignored);
        assert_eq!(game.snapshot(), before);
    }

    #[test]
    fn test_out_of_range_index_is_ignored() {
        let mut game = controller(2);
        let transition = game.select_tile(4);
        assert_eq!(transition.result, SelectionResult::Ignored);
        assert!(transition.commands.is_empty());
        assert!(!game.round().is_timer_running);
    }

    #[test]
    fn test_flip_back_spares_tiles_matched_meanwhile() {
        let mut game = controller(18);
        let [heart_a, heart_b] = find_pair(game.board(), Symbol::HeartEyes);
        let pizza = find_pair(game.board(), Symbol::Pizza)[0];

        game.select_tile(heart_a);
        let flip = match game.select_tile(pizza).commands.as_slice() {
            [TimerCommand::ScheduleFlipBack(flip)] => *flip,
            other => panic!("expected a flip-back, got {:?}", other),
        };

        // heart_a is still face up, so the player can pair it before the delay ends
        game.select_tile(heart_a);
        game.select_tile(heart_b);
        assert!(game.board().tiles()[heart_a].is_matched);

        assert!(game.resolve_mismatch(flip));
        assert!(game.board().tiles()[heart_a].is_revealed);
        assert!(!game.board().tiles()[pizza].is_revealed);
    }

    #[test]
    fn test_flip_back_spares_pending_tile() {
        let mut game = controller(18);
        let [a, b] = find_mismatch(game.board(), Symbol::Angel, Symbol::Melon);

        game.select_tile(a);
        let flip = match game.select_tile(b).commands.as_slice() {
            [TimerCommand::ScheduleFlipBack(flip)] => *flip,
            other => panic!("expected a flip-back, got {:?}", other),
        };
        game.select_tile(a);
        assert_eq!(game.round().pending_selection, vec![a]);

        game.resolve_mismatch(flip);
        assert!(game.board().tiles()[a].is_revealed);
        assert!(!game.board().tiles()[b].is_revealed);
    }

    #[test]
    fn test_stale_flip_back_is_dropped_after_restart() {
        let mut game = controller(18);
        let [a, b] = find_mismatch(game.board(), Symbol::Hot, Symbol::Cold);

        game.select_tile(a);
        let flip = match game.select_tile(b).commands.as_slice() {
            [TimerCommand::ScheduleFlipBack(flip)] => *flip,
            other => panic!("expected a flip-back, got {:?}", other),
        };

        game.restart();
        game.select_tile(a);
        let board_before = game.board().clone();

        assert!(!game.resolve_mismatch(flip));
        assert_eq!(game.board(), &board_before);
        assert!(game.board().tiles()[a].is_revealed);
    }

    #[test]
    fn test_tick_only_while_running() {
        let mut game = controller(18);
        assert!(!game.tick());
        assert_eq!(game.round().elapsed_seconds, 0);

        game.begin_from_intro();
        assert!(game.tick());
        assert!(game.tick());
        assert_eq!(game.round().elapsed_seconds, 2);

        game.restart();
        assert!(!game.tick());
        assert_eq!(game.round().elapsed_seconds, 0);
    }

    #[test]
    fn test_restart_preserves_intro_visibility() {
        let mut game = controller(18);
        game.begin_from_intro();
        game.select_tile(0);
        game.tick();

        let commands = game.restart();
        assert_eq!(commands, vec![TimerCommand::StopTicker]);
        assert!(!game.round().is_intro_visible);
        assert_eq!(game.round().move_count, 0);
        assert_eq!(game.round().elapsed_seconds, 0);
        assert!(game.round().pending_selection.is_empty());
        assert!(!game.round().is_timer_running);
        assert_eq!(game.round().generation, 1);
        assert!(game.board().tiles().iter().all(|tile| !tile.is_face_up()));
        assert_eq!(game.phase(), RoundPhase::Idle);
    }

    #[test]
    fn test_new_game_forces_intro() {
        let mut game = controller(18);
        game.begin_from_intro();
        assert!(!game.round().is_intro_visible);

        let commands = game.start_new_game();
        assert_eq!(commands, vec![TimerCommand::StopTicker]);
        assert!(game.round().is_intro_visible);
        assert!(!game.round().is_timer_running);
    }

    #[test]
    fn test_begin_from_intro_starts_timer_once() {
        let mut game = controller(18);
        assert_eq!(game.begin_from_intro(), vec![TimerCommand::StartTicker]);
        assert!(!game.round().is_intro_visible);
        assert!(game.round().is_timer_running);

        assert!(game.begin_from_intro().is_empty());
        assert!(game.select_tile(0).commands.is_empty());
    }

    #[test]
    fn test_solving_the_board_stops_the_timer() {
        let mut game = controller(2);
        game.begin_from_intro();

        let first = find_pair(game.board(), Symbol::HeartEyes);
        game.select_tile(first[0]);
        game.select_tile(first[1]);

        let last = find_pair(game.board(), Symbol::WinkingTongue);
        game.select_tile(last[0]);
        let transition = game.select_tile(last[1]);

        assert_eq!(
            transition.result,
            SelectionResult::Matched {
                pair: last,
                solved: true
            }
        );
        assert_eq!(transition.commands, vec![TimerCommand::StopTicker]);
        assert_eq!(game.phase(), RoundPhase::Solved);
        assert!(!game.tick());

        let after = game.select_tile(0);
        assert_eq!(after.result, SelectionResult::Ignored);
        assert!(after.commands.is_empty(), "a solved board does not restart the clock");
    }
}
