use crate::command::Command;
use crate::surface::Surface;

/// The committed drawing history plus the commands available for redo.
///
/// A command lives in at most one of the two lists. Committing a new command
/// drops the redo buffer, so history is linear.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Document {
    committed: Vec<Command>,
    redo_buffer: Vec<Command>,
}

impl Document {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append `command` to the history, invalidating any redo
    pub fn commit(&mut self, command: Command) {
        log::debug!(
            "Committing {} (discarding {} redoable)",
            command.name(),
            self.redo_buffer.len()
        );
        self.committed.push(command);
        self.redo_buffer.clear();
    }

    /// Move the newest committed command onto the redo buffer.
    /// Returns false and changes nothing when there is nothing to undo.
    pub fn undo(&mut self) -> bool {
        match self.committed.pop() {
            Some(command) => {
                log::debug!("Undo {}", command.name());
                self.redo_buffer.push(command);
                true
            }
            None => false,
        }
    }

    /// Move the most recently undone command back into the history.
    /// Returns false and changes nothing when the redo buffer is empty.
    pub fn redo(&mut self) -> bool {
        match self.redo_buffer.pop() {
            Some(command) => {
                log::debug!("Redo {}", command.name());
                self.committed.push(command);
                true
            }
            None => false,
        }
    }

    /// Drop both lists. Not undoable.
    pub fn clear(&mut self) {
        log::debug!(
            "Clearing {} committed and {} redoable commands",
            self.committed.len(),
            self.redo_buffer.len()
        );
        self.committed.clear();
        self.redo_buffer.clear();
    }

    pub fn committed(&self) -> &[Command] {
        &self.committed
    }

    pub fn redo_buffer(&self) -> &[Command] {
        &self.redo_buffer
    }

    /// The newest committed command, for extending a stroke still being drawn
    pub fn last_mut(&mut self) -> Option<&mut Command> {
        self.committed.last_mut()
    }

    pub fn can_undo(&self) -> bool {
        !self.committed.is_empty()
    }

    pub fn can_redo(&self) -> bool {
        !self.redo_buffer.is_empty()
    }

    pub fn is_empty(&self) -> bool {
        self.committed.is_empty() && self.redo_buffer.is_empty()
    }

    /// Replay every committed command in order
    pub fn render(&self, surface: &mut dyn Surface) {
        for command in &self.committed {
            command.render(surface);
        }
    }
}
