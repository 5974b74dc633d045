use anyhow::{Context, Result};
use common::{GameCommand, GameEngine, GameEvent, GameSession, GameStatus};
use crossterm::event::{Event, KeyEventKind};
use ratatui::Frame;
use tracing::{error, info};

use crate::config::Settings;
use crate::input;
use crate::observer::TracingObserver;
use crate::views::{GameView, View};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AppCommand {
    Quit,
    Engine(GameCommand),
    TogglePause,
    /// Reset and start right away.
    NewGame,
}

pub struct App {
    engine: GameEngine,
    view: GameView,
    has_focus: bool,
}

impl App {
    pub fn new(settings: &Settings) -> Result<Self> {
        let mut engine = match settings.seed {
            Some(seed) => GameEngine::new_with_seed(settings.game.clone(), seed),
            None => GameEngine::new(settings.game.clone()),
        }
        .context("Failed to create game engine")?;
        engine.subscribe(Box::new(TracingObserver));

        Ok(Self {
            engine,
            view: GameView::new(settings.render),
            has_focus: false,
        })
    }

    /// Start playing, as when the board is first shown.
    pub fn start(&mut self) -> Result<()> {
        self.handle_command(AppCommand::Engine(GameCommand::Resume))
    }

    pub fn handle_event(&mut self, event: &Event) -> Option<AppCommand> {
        match event {
            Event::Key(key) if key.kind == KeyEventKind::Press => self.view.handle_input(*key),
            _ => input::map_event(event),
        }
    }

    pub fn handle_command(&mut self, command: AppCommand) -> Result<()> {
        let events = match command {
            AppCommand::Engine(command) => self.exec(command)?,
            AppCommand::TogglePause => {
                let command = match self.engine.session().status() {
                    GameStatus::Running => GameCommand::Pause,
                    _ => GameCommand::Resume,
                };
                self.exec(command)?
            }
            AppCommand::NewGame => {
                let mut events = self.exec(GameCommand::Reset)?;
                events.extend(self.exec(GameCommand::Resume)?);
                info!("New game started");
                events
            }
            AppCommand::Quit => {
                // Handled in main loop
                Vec::new()
            }
        };

        if events.contains(&GameEvent::Resumed) {
            self.has_focus = true;
        } else if events.contains(&GameEvent::Paused) {
            self.has_focus = false;
        }
        Ok(())
    }

    /// Advance the game by one tick. An error here ends the session.
    pub fn on_tick(&mut self) -> Result<()> {
        self.exec(GameCommand::Tick).map(|_| ())
    }

    fn exec(&mut self, command: GameCommand) -> Result<Vec<GameEvent>> {
        self.engine.exec_command(command.clone()).map_err(|e| {
            error!("Engine rejected {:?}: {}", command, e);
            anyhow::Error::new(e).context(format!("Failed to run {:?}", command))
        })
    }

    pub fn render(&self, frame: &mut Frame) {
        self.view.render(frame, self.engine.session());
    }

    pub fn session(&self) -> &GameSession {
        self.engine.session()
    }

    /// True once the game has asked for input focus by resuming.
    pub fn has_focus(&self) -> bool {
        self.has_focus
    }
}
