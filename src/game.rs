use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use tracing::{debug, info, trace};

use crate::board::Board;
use crate::body::SnakeBody;
use crate::direction::{self, Direction};
use crate::engine::{GameOverReason, StepOutcome, World};
use crate::food::Food;
use crate::random::RandomSource;
use crate::ticker::TickPeriod;
use crate::{ConfigError, GameConfig};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameStatus {
    Running,
    Over(GameOverReason),
}

/// UI-agnostic result of a tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TickResult {
    pub ate_food: bool,
    pub grew: bool,
    pub reversed: bool,
    pub status: GameStatus,
    pub score: u32,
}

#[derive(Debug)]
pub struct Game<R = ChaCha8Rng> {
    cfg: GameConfig,
    world: World,
    /// Last accepted direction request, consumed by the next tick.
    pending_dir: Option<Direction>,
    score: u32,
    status: GameStatus,
    speed: TickPeriod,
    rng: R,
}

impl Game<ChaCha8Rng> {
    /// Create a new game with non-deterministic seed.
    pub fn new(cfg: GameConfig) -> Result<Self, ConfigError> {
        Self::with_random(cfg, ChaCha8Rng::from_os_rng())
    }

    /// Create a new game with deterministic RNG from `seed`.
    pub fn with_seed(cfg: GameConfig, seed: u64) -> Result<Self, ConfigError> {
        Self::with_random(cfg, ChaCha8Rng::seed_from_u64(seed))
    }
}

impl<R> Game<R> {
    pub fn with_random(cfg: GameConfig, rng: R) -> Result<Self, ConfigError> {
        cfg.validate()?;
        let world = World::start(Board::new(cfg.board_size));
        let speed = cfg.tick_period();
        info!(board_size = cfg.board_size, "game started");
        Ok(Self {
            cfg,
            world,
            pending_dir: None,
            score: 0,
            status: GameStatus::Running,
            speed,
            rng,
        })
    }

    pub fn config(&self) -> &GameConfig {
        &self.cfg
    }

    pub fn board(&self) -> &Board {
        self.world.board()
    }

    pub fn snake(&self) -> &SnakeBody {
        self.world.snake()
    }

    pub fn food(&self) -> Food {
        self.world.food()
    }

    /// Direction the snake travelled in on the last tick.
    pub fn direction(&self) -> Direction {
        self.world.direction()
    }

    /// Direction the next tick will use.
    pub fn next_direction(&self) -> Direction {
        self.pending_dir.unwrap_or(self.world.direction())
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn status(&self) -> GameStatus {
        self.status
    }

    pub fn is_over(&self) -> bool {
        matches!(self.status, GameStatus::Over(_))
    }

    /// Current tick period; `Stopped` once the round is over.
    pub fn speed(&self) -> TickPeriod {
        self.speed
    }

    /// Request a direction change for the next tick. Returns whether it was
    /// accepted; a later accepted request replaces an earlier one.
    pub fn request_direction(&mut self, requested: Direction) -> bool {
        if self.is_over() {
            return false;
        }
        match direction::resolve(self.world.direction(), requested, self.snake().len()) {
            Some(dir) => {
                self.pending_dir = Some(dir);
                true
            }
            None => {
                trace!(?requested, current = ?self.world.direction(), "direction rejected");
                false
            }
        }
    }

    /// Start a new round from scratch, score included.
    pub fn restart(&mut self) {
        self.world = World::start(Board::new(self.cfg.board_size));
        self.pending_dir = None;
        self.score = 0;
        self.status = GameStatus::Running;
        self.speed = self.cfg.tick_period();
        info!("game restarted");
    }

    /// Stop ticking and put the pieces back at their starting places. The
    /// board and the score stay until the player restarts.
    fn end(&mut self, reason: GameOverReason) {
        info!(?reason, score = self.score, "game over");
        self.status = GameStatus::Over(reason);
        self.speed = TickPeriod::Stopped;
        self.world = World::start(self.world.board);
        self.pending_dir = None;
    }
}

impl<R: RandomSource> Game<R> {
    /// Advance the game by one tick. Does nothing once the round is over.
    pub fn tick(&mut self) -> TickResult {
        let mut result = TickResult {
            ate_food: false,
            grew: false,
            reversed: false,
            status: self.status,
            score: self.score,
        };
        if self.is_over() {
            return result;
        }

        if let Some(dir) = self.pending_dir.take() {
            self.world.direction = dir;
        }

        match self
            .world
            .step(self.cfg.reversal_probability, &mut self.rng)
        {
            StepOutcome::Moved => {}
            StepOutcome::Ate(meal) => {
                self.score += 1;
                debug!(
                    cell = meal.eaten.cell,
                    score = self.score,
                    len = self.snake().len(),
                    "food eaten"
                );
                result.ate_food = true;
                result.grew = meal.growth.grew();
                result.reversed = meal.reversed;
                if meal.board_filled {
                    self.end(GameOverReason::BoardFilled);
                }
            }
            StepOutcome::Collided(reason) => self.end(reason),
        }

        result.status = self.status;
        result.score = self.score;
        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::Coords;
    use crate::random::scripted::Scripted;

    /// 5×5 game whose food, once eaten, lands on the first free corner cells.
    fn small_game() -> Game<Scripted> {
        let cfg = GameConfig {
            board_size: 5,
            ..Default::default()
        };
        Game::with_random(cfg, Scripted::new(&[1, 5, 21, 25], &[])).unwrap()
    }

    fn run_until_over(game: &mut Game<Scripted>) -> TickResult {
        for _ in 0..100 {
            let res = game.tick();
            if game.is_over() {
                return res;
            }
        }
        panic!("game never ended");
    }

    #[test]
    fn initial_state() {
        let g = small_game();
        assert_eq!(g.status(), GameStatus::Running);
        assert_eq!(g.score(), 0);
        assert_eq!(g.snake().len(), 1);
        assert_eq!(g.snake().head().coords, Coords::new(2, 2));
        assert_eq!(g.food().cell, 18);
        assert_eq!(g.direction(), Direction::Right);
        assert_eq!(g.speed(), g.config().tick_period());
    }

    #[test]
    fn invalid_config_is_refused() {
        let cfg = GameConfig {
            board_size: 2,
            ..Default::default()
        };
        assert!(matches!(
            Game::with_seed(cfg, 0),
            Err(ConfigError::BoardTooSmall(2))
        ));
    }

    #[test]
    fn direction_applies_on_next_tick() {
        let mut g = small_game();
        assert!(g.request_direction(Direction::Up));
        assert_eq!(g.direction(), Direction::Right);
        assert_eq!(g.next_direction(), Direction::Up);
        g.tick();
        assert_eq!(g.direction(), Direction::Up);
        assert_eq!(g.snake().head().coords, Coords::new(1, 2));
    }

    #[test]
    fn last_accepted_request_wins() {
        let mut g = small_game();
        g.request_direction(Direction::Up);
        g.request_direction(Direction::Down);
        g.tick();
        assert_eq!(g.snake().head().coords, Coords::new(3, 2));
    }

    #[test]
    fn single_cell_may_turn_back() {
        let mut g = small_game();
        assert!(g.request_direction(Direction::Left));
        g.tick();
        assert_eq!(g.snake().head().coords, Coords::new(2, 1));
    }

    #[test]
    fn long_snake_may_not_turn_back_even_via_pending() {
        let mut g = small_game();
        // Eat the starting food at 18 = (3,2): down one.
        g.request_direction(Direction::Down);
        let res = g.tick();
        assert!(res.ate_food);
        assert_eq!(g.snake().len(), 2);
        assert_eq!(g.food(), Food { cell: 1, reversing: false });

        assert!(g.request_direction(Direction::Left));
        // Reversal is judged against the last travelled direction, not the pending one.
        assert!(!g.request_direction(Direction::Up));
        assert_eq!(g.next_direction(), Direction::Left);
    }

    #[test]
    fn wall_ends_game_and_stops_ticks() {
        let mut g = small_game();
        let res = run_until_over(&mut g);
        assert_eq!(res.status, GameStatus::Over(GameOverReason::Wall));
        assert_eq!(g.speed(), TickPeriod::Stopped);
    }

    #[test]
    fn game_over_resets_pieces_but_keeps_score() {
        let mut g = small_game();
        g.request_direction(Direction::Down);
        assert!(g.tick().ate_food);
        run_until_over(&mut g);

        assert_eq!(g.score(), 1);
        assert_eq!(g.snake().len(), 1);
        assert_eq!(g.snake().head().cell, 13);
        assert_eq!(g.food().cell, 18);
        assert_eq!(g.direction(), Direction::Right);

        let head = g.snake().head();
        let res = g.tick();
        assert_eq!(res.score, 1);
        assert!(!res.ate_food);
        assert_eq!(g.snake().head(), head);
        assert!(!g.request_direction(Direction::Up));
    }

    #[test]
    fn restart_restores_starting_values() {
        let mut g = small_game();
        g.request_direction(Direction::Down);
        g.tick();
        run_until_over(&mut g);
        g.restart();

        assert_eq!(g.status(), GameStatus::Running);
        assert_eq!(g.score(), 0);
        assert_eq!(g.snake().len(), 1);
        assert_eq!(g.snake().head().coords, Coords::new(2, 2));
        assert_eq!(g.direction(), Direction::Right);
        assert_eq!(g.speed(), g.config().tick_period());
    }

    #[test]
    fn reversing_food_sets_next_direction() {
        let cfg = GameConfig {
            board_size: 5,
            ..Default::default()
        };
        // First placed food at 20 = (3,4) is reversing.
        let rng = Scripted::new(&[20, 1], &[0.0, 0.9]);
        let mut g = Game::with_random(cfg, rng).unwrap();
        g.request_direction(Direction::Down);
        g.tick(); // eats 18 at (3,2), grows to [13, 18]
        assert_eq!(g.food(), Food { cell: 20, reversing: true });

        g.request_direction(Direction::Right);
        g.tick(); // (3,3)
        let res = g.tick(); // (3,4), eats the reversing food
        assert!(res.ate_food);
        assert!(res.reversed);
        assert_eq!(g.score(), 2);
        assert_eq!(g.snake().len(), 3);
        // Tail was (3,2) heading right; it is now the head, heading left.
        assert_eq!(g.snake().head().coords, Coords::new(3, 2));
        assert_eq!(g.direction(), Direction::Left);
    }
}
