//! # Menu Sessions
//!
//! Both demos share one loop: print the menu, read a choice, dispatch it, repeat
//! until the choice says to stop. [`MenuSession`] is the per-demo part of that
//! loop and [`run_session`] is the loop itself, written once.
//!
//! ## States
//!
//! ```text
//! AwaitingChoice --valid--> dispatch --Continue--> after_dispatch --> AwaitingChoice
//!        |                      \--Exit--> done
//!        \--invalid--> "Invalid option, please try again." --> AwaitingChoice
//! ```
//!
//! End of input while awaiting a choice, or while a dispatch is prompting, ends
//! the session gracefully, exactly like picking the exit entry.

use crate::lifecycle::Console;
use async_trait::async_trait;
use std::fmt::Debug;
use tokio::io::{AsyncBufRead, AsyncWrite};
use tracing::{debug, info, instrument, warn};

pub const CHOICE_PROMPT: &str = "Choose an option: ";
pub const INVALID_OPTION: &str = "Invalid option, please try again.";

/// What the loop does after a dispatch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Exit,
}

/// Errors that end a session early.
#[derive(Debug, thiserror::Error)]
pub enum SessionError {
    /// Reading the input or writing the output failed.
    #[error("Console I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// The demo-specific half of the interactive loop.
///
/// # Async & Console
/// Dispatch is async because it prompts for further input through the
/// [`Console`]. Domain failures (an unknown type tag, say) are reported on the
/// console and yield [`Flow::Continue`]; only console I/O failures are errors.
#[async_trait]
pub trait MenuSession: Send {
    /// Short name used in log spans.
    const NAME: &'static str;

    /// Menu text printed before every choice prompt.
    const MENU: &'static str;

    /// A menu entry, built from the number the user typed.
    type Choice: TryFrom<u32> + Debug + Send;

    /// Runs one menu entry.
    async fn dispatch<R, W>(
        &mut self,
        choice: Self::Choice,
        console: &mut Console<R, W>,
    ) -> Result<Flow, SessionError>
    where
        R: AsyncBufRead + Unpin + Send,
        W: AsyncWrite + Unpin + Send;

    /// Runs after every dispatch that did not exit. Does nothing by default.
    async fn after_dispatch<R, W>(
        &mut self,
        _console: &mut Console<R, W>,
    ) -> Result<(), SessionError>
    where
        R: AsyncBufRead + Unpin + Send,
        W: AsyncWrite + Unpin + Send,
    {
        Ok(())
    }
}

/// Parses a menu line. Anything that is not a listed number yields `None`.
pub fn parse_choice<C: TryFrom<u32>>(line: &str) -> Option<C> {
    line.trim()
        .parse::<u32>()
        .ok()
        .and_then(|n| C::try_from(n).ok())
}

/// Drives `session` over `console` until it exits or the input ends.
#[instrument(skip_all, fields(session = S::NAME))]
pub async fn run_session<S, R, W>(
    session: &mut S,
    console: &mut Console<R, W>,
) -> Result<(), SessionError>
where
    S: MenuSession,
    R: AsyncBufRead + Unpin + Send,
    W: AsyncWrite + Unpin + Send,
{
    info!("Session started");

    loop {
        console.write(S::MENU).await?;
        let Some(line) = console.prompt(CHOICE_PROMPT).await? else {
            info!("Input closed");
            break;
        };

        let Some(choice) = parse_choice::<S::Choice>(&line) else {
            warn!(input = %line, "Invalid menu choice");
            console.say(INVALID_OPTION).await?;
            continue;
        };

        debug!(?choice, "Dispatch");
        let flow = session.dispatch(choice, console).await?;
        console.flush().await?;
        if flow == Flow::Exit {
            break;
        }

        session.after_dispatch(console).await?;
        console.flush().await?;
    }

    console.flush().await?;
    info!("Session finished");
    Ok(())
}
