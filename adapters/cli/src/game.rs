//! Interactive play loop wiring the session to persistence and effects.

use std::io::{BufRead, Write};

use anyhow::{Context, Result};
use color_alchemy_core::{Command, Event, Mode};
use color_alchemy_effects::{Celebration, Effects};
use color_alchemy_session::{self as session, query, Session};
use color_alchemy_storage::{KeyValueStore, Persistence};
use tracing::{debug, warn};

use crate::{
    display,
    input::{self, Line},
};

/// Session plus the adapters reacting to its events.
pub(crate) struct Game<S, C> {
    session: Session,
    persistence: Persistence<S>,
    effects: Effects<C>,
}

impl<S: KeyValueStore, C: Celebration> Game<S, C> {
    /// Creates a game around an already restored session.
    pub(crate) fn new(session: Session, persistence: Persistence<S>, effects: Effects<C>) -> Self {
        Self {
            session,
            persistence,
            effects,
        }
    }

    #[cfg(test)]
    pub(crate) fn session(&self) -> &Session {
        &self.session
    }

    /// Applies one command and lets every adapter react to its events.
    pub(crate) fn dispatch(&mut self, command: Command) -> Vec<Event> {
        debug!(?command, "dispatching command");
        let mut events = Vec::new();
        session::apply(&mut self.session, command, &mut events);

        if let Err(error) = self
            .persistence
            .handle(&events, query::unlocked(&self.session))
        {
            warn!(%error, "failed to persist progress");
        }
        let celebrations = self.effects.handle(&events);
        if celebrations > 0 {
            debug!(celebrations, "celebrated win");
        }
        events
    }

    /// Enters `mode` and reads prompt lines until `quit` or end of input.
    pub(crate) fn run(
        &mut self,
        mode: Mode,
        input: impl BufRead,
        out: &mut impl Write,
    ) -> Result<()> {
        let events = self.dispatch(Command::EnterMode { mode });
        self.report(&events, out)?;
        if query::active(&self.session).is_none() {
            return Ok(());
        }
        writeln!(out, "Type 'help' for commands.")?;

        for line in input.lines() {
            let line = line.context("failed to read from stdin")?;
            match input::parse_line(&line) {
                Ok(None) => {}
                Ok(Some(Line::Quit)) => break,
                Ok(Some(Line::Help)) => writeln!(out, "{}", input::HELP)?,
                Ok(Some(Line::Status)) => self.print_status(out)?,
                Ok(Some(Line::Share)) => self.print_share(out)?,
                Ok(Some(Line::Play(command))) => {
                    let events = self.dispatch(command);
                    self.report(&events, out)?;
                }
                Err(error) => writeln!(out, "{error}")?,
            }
        }
        Ok(())
    }

    fn report(&self, events: &[Event], out: &mut impl Write) -> Result<()> {
        for event in events {
            if let Some(text) = display::describe(event) {
                writeln!(out, "{text}")?;
            }
        }

        let redraw = events.iter().any(|event| {
            matches!(
                event,
                Event::ChallengeStarted { .. }
                    | Event::ChallengeRestored { .. }
                    | Event::MixChanged { .. }
                    | Event::TargetAdvanced { .. }
                    | Event::SessionReset { .. }
            )
        });
        if redraw {
            self.print_status(out)?;
        }
        if query::phase(&self.session).is_terminal() && events.iter().any(ends_challenge) {
            self.print_share(out)?;
        }
        Ok(())
    }

    fn print_status(&self, out: &mut impl Write) -> Result<()> {
        match query::active(&self.session) {
            Some(state) => writeln!(out, "{}", display::status(state))?,
            None => writeln!(out, "No challenge in progress.")?,
        }
        Ok(())
    }

    fn print_share(&self, out: &mut impl Write) -> Result<()> {
        let text = query::summary(&self.session)
            .as_ref()
            .and_then(color_alchemy_system_sharing::share_text);
        match text {
            Some(text) => writeln!(out, "\n{text}\n")?,
            None => writeln!(out, "Finish the challenge to share a result.")?,
        }
        Ok(())
    }
}

fn ends_challenge(event: &Event) -> bool {
    matches!(
        event,
        Event::ChallengeWon { .. }
            | Event::ChallengeExhausted { .. }
            | Event::ChallengeRestored { .. }
    )
}
