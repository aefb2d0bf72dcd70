//! Command queue between the host loop and the match.
//!
//! The host (input/UI layer) writes commands between frames; the match
//! drains them at the start of the next tick. No command runs mid-tick.

use crate::api::types::BallId;

/// A command the external input layer can issue.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Command {
    /// A pointer/ray selection resolved to a ball.
    SelectBall { id: BallId },
    /// The camera azimuth toward the selected ball changed.
    Aim { azimuth: f32 },
    /// A discrete trigger input fired.
    Shoot { force: f32 },
}

/// Pending commands, consumed in arrival order.
pub struct CommandQueue {
    pending: Vec<Command>,
}

impl CommandQueue {
    pub fn new() -> Self {
        Self {
            pending: Vec::with_capacity(8),
        }
    }

    /// Enqueue a command for the next tick.
    pub fn push(&mut self, command: Command) {
        self.pending.push(command);
    }

    /// Take all pending commands, clearing the queue.
    pub fn drain(&mut self) -> Vec<Command> {
        std::mem::take(&mut self.pending)
    }

    /// Peek at pending commands without consuming them.
    pub fn iter(&self) -> impl Iterator<Item = &Command> {
        self.pending.iter()
    }

    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }

    pub fn len(&self) -> usize {
        self.pending.len()
    }
}

impl Default for CommandQueue {
    fn default() -> Self {
        Self::new()
    }
}
