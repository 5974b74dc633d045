use crate::{EngineError, GameCommand, GameConfig, GameEvent, GameSession, PseudoRandom, Direction};

/// Receives a snapshot after every command that changed the session.
/// The snapshot is borrowed; observers that keep it must clone it.
pub trait SessionObserver {
    fn session_updated(&mut self, session: &GameSession, events: &[GameEvent]);
}

pub struct GameEngine {
    config: GameConfig,
    session: GameSession,
    rng: PseudoRandom,
    observers: Vec<Box<dyn SessionObserver + Send>>,
    tick_count: u32,
}

impl GameEngine {
    pub fn new(config: GameConfig) -> Result<Self, EngineError> {
        Self::with_rng(config, PseudoRandom::from_entropy_seed())
    }

    pub fn new_with_seed(config: GameConfig, rng_seed: u64) -> Result<Self, EngineError> {
        Self::with_rng(config, PseudoRandom::new(rng_seed))
    }

    /// Start from a staged session instead of the configured initial one.
    pub fn from_session(
        config: GameConfig,
        session: GameSession,
        rng_seed: u64,
    ) -> Result<Self, EngineError> {
        config.validate()?;
        if session.grid() != config.grid()? {
            return Err(EngineError::SessionMismatch(format!(
                "session grid {}x{} differs from configured {}x{}",
                session.grid().rows(),
                session.grid().cols(),
                config.num_rows,
                config.num_cols
            )));
        }
        session.check_invariants()?;

        Ok(GameEngine {
            config,
            session,
            rng: PseudoRandom::new(rng_seed),
            observers: Vec::new(),
            tick_count: 0,
        })
    }

    fn with_rng(config: GameConfig, rng: PseudoRandom) -> Result<Self, EngineError> {
        let session = GameSession::new(&config)?;
        Ok(GameEngine {
            config,
            session,
            rng,
            observers: Vec::new(),
            tick_count: 0,
        })
    }

    pub fn subscribe(&mut self, observer: Box<dyn SessionObserver + Send>) {
        self.observers.push(observer);
    }

    /// Run one command to completion and return the events it produced.
    ///
    /// On error the live session is left exactly as it was.
    pub fn exec_command(&mut self, command: GameCommand) -> Result<Vec<GameEvent>, EngineError> {
        let events = match command {
            GameCommand::Reset => {
                self.session = GameSession::new(&self.config)?;
                self.tick_count = 0;
                vec![GameEvent::Reset]
            }
            _ => {
                let step = match self
                    .session
                    .reduce(&command, self.config.food_policy, &mut self.rng)
                {
                    Ok(Some(step)) => step,
                    Ok(None) => return Ok(Vec::new()),
                    Err(e) => {
                        log::error!("Command {:?} failed: {}", command, e);
                        return Err(e);
                    }
                };
                if command == GameCommand::Tick {
                    self.tick_count += 1;
                }
                self.session = step.session;
                step.events
            }
        };

        log::debug!("Command {:?} produced {:?}", command, events);
        for observer in self.observers.iter_mut() {
            observer.session_updated(&self.session, &events);
        }

        Ok(events)
    }

    pub fn tick(&mut self) -> Result<Vec<GameEvent>, EngineError> {
        self.exec_command(GameCommand::Tick)
    }

    /// Illegal turns are ignored and yield no events.
    pub fn set_direction(&mut self, direction: Direction) -> Vec<GameEvent> {
        self.infallible(GameCommand::Turn { direction })
    }

    pub fn pause(&mut self) -> Vec<GameEvent> {
        self.infallible(GameCommand::Pause)
    }

    pub fn resume(&mut self) -> Vec<GameEvent> {
        self.infallible(GameCommand::Resume)
    }

    pub fn reset(&mut self) -> Vec<GameEvent> {
        self.infallible(GameCommand::Reset)
    }

    // Only ticks place food and a validated config always builds a session,
    // so these commands cannot fail.
    fn infallible(&mut self, command: GameCommand) -> Vec<GameEvent> {
        self.exec_command(command).unwrap_or_default()
    }

    pub fn session(&self) -> &GameSession {
        &self.session
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn tick_count(&self) -> u32 {
        self.tick_count
    }
}
