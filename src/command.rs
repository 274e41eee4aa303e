//! Panel command queue.
//!
//! The control-surface adapter pushes commands from the request path; the
//! render loop drains them at the start of every tick. Built on
//! `critical-section` and a fixed-size `heapless::Deque` so the same code
//! runs under interrupts and on the host.

use core::cell::RefCell;

use critical_section::Mutex;
use heapless::Deque;

use crate::{color::Rgb, effect::RenderMode};

/// State change requested by the control surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PanelCommand {
    /// Switch the render mode
    SetMode(RenderMode),
    /// Set the fixed fill color
    SetColor(Rgb),
    /// Set the manual brightness drive
    SetBrightness(u8),
    /// Enable or disable auto-brightness
    SetAutoBrightness(bool),
}

/// Error returned when the queue is full; carries the rejected command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QueueFull(pub PanelCommand);

/// Bounded queue of pending panel commands.
pub struct CommandQueue<const N: usize> {
    inner: Mutex<RefCell<Deque<PanelCommand, N>>>,
}

impl<const N: usize> CommandQueue<N> {
    pub const fn new() -> Self {
        Self {
            inner: Mutex::new(RefCell::new(Deque::new())),
        }
    }

    /// Get a sender handle for the control surface.
    pub const fn sender(&self) -> CommandSender<'_, N> {
        CommandSender { queue: self }
    }

    /// Get the receiver handle for the render loop.
    pub const fn receiver(&self) -> CommandReceiver<'_, N> {
        CommandReceiver { queue: self }
    }

    fn try_send(&self, command: PanelCommand) -> Result<(), QueueFull> {
        critical_section::with(|cs| {
            let mut queue = self.inner.borrow(cs).borrow_mut();
            queue.push_back(command).map_err(QueueFull)
        })
    }

    fn try_receive(&self) -> Option<PanelCommand> {
        critical_section::with(|cs| {
            let mut queue = self.inner.borrow(cs).borrow_mut();
            queue.pop_front()
        })
    }
}

impl<const N: usize> Default for CommandQueue<N> {
    fn default() -> Self {
        Self::new()
    }
}

/// Sender handle for a [`CommandQueue`].
#[derive(Clone, Copy)]
pub struct CommandSender<'a, const N: usize> {
    queue: &'a CommandQueue<N>,
}

impl<const N: usize> CommandSender<'_, N> {
    /// Try to enqueue a command.
    ///
    /// Returns `Err(QueueFull)` if the queue is full; the command is
    /// dropped, never partially applied.
    pub fn try_send(&self, command: PanelCommand) -> Result<(), QueueFull> {
        self.queue.try_send(command)
    }
}

/// Receiver handle for a [`CommandQueue`].
#[derive(Clone, Copy)]
pub struct CommandReceiver<'a, const N: usize> {
    queue: &'a CommandQueue<N>,
}

impl<const N: usize> CommandReceiver<'_, N> {
    /// Take the next pending command, if any.
    pub fn try_receive(&self) -> Option<PanelCommand> {
        self.queue.try_receive()
    }
}
