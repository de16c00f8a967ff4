//! Application layer - session state plus the screen loop

mod config;
pub mod labels;
mod screens;

pub use config::AppConfig;
pub use screens::{Screen, ScreenMenu, Step};

use anyhow::Result;
use log::{debug, info};

use crate::actions::DocumentConverter;
use crate::menu::{Console, Flow, Interactive, Navigator};
use crate::session::Session;

/// Everything a menu action can reach: the console, the session directory,
/// the configuration and the document converter
pub struct App<K> {
    console: K,
    session: Session,
    config: AppConfig,
    converter: Box<dyn DocumentConverter>,
}

impl<K: Console> App<K> {
    pub fn new(
        console: K,
        config: AppConfig,
        converter: Box<dyn DocumentConverter>,
    ) -> Result<Self> {
        let session = Session::new(&config.start_dir)?;
        Ok(Self {
            console,
            session,
            config,
            converter,
        })
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn session_mut(&mut self) -> &mut Session {
        &mut self.session
    }

    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    pub fn converter(&self) -> &dyn DocumentConverter {
        self.converter.as_ref()
    }

    /// Give back the console, e.g. to inspect a scripted transcript
    pub fn into_console(self) -> K {
        self.console
    }

    /// Show screens until an action asks to exit.
    ///
    /// Errors from an action end the loop and propagate to the caller.
    pub fn run(&mut self) -> Result<()> {
        info!("Session started in {}", self.session.cwd().display());
        let mut navigator = Navigator::new(Screen::Main);

        loop {
            let screen = *navigator.current();
            let crumbs: Vec<&str> = navigator.path().map(|s| s.title()).collect();
            debug!("Showing {}", crumbs.join(" > "));

            let menu = screens::build(screen, self, &crumbs)?;
            let step = menu.select(self)?;

            if navigator.apply(step) == Flow::Exit {
                info!("Session ended in {}", self.session.cwd().display());
                return Ok(());
            }
        }
    }
}

impl<K: Console> Interactive for App<K> {
    fn console(&mut self) -> &mut dyn Console {
        &mut self.console
    }
}
