//! Completion delivery context abstraction

use tokio::runtime::Handle;
use tokio::sync::mpsc;

/// Unit of work run by a [`CompletionContext`]
pub type CompletionTask = Box<dyn FnOnce() + Send + 'static>;

/// Context on which request outcomes are delivered
///
/// Hosts pass the context they consider safe for receiving results, e.g. a
/// queue drained by their UI thread.
pub trait CompletionContext: Send + Sync {
    /// Schedule `task` to run on this context
    fn execute(&self, task: CompletionTask);
}

/// Runs completions on whichever thread produced them
#[derive(Debug, Clone, Copy, Default)]
pub struct ImmediateContext;

impl CompletionContext for ImmediateContext {
    fn execute(&self, task: CompletionTask) {
        task();
    }
}

/// Runs completions as tasks on a tokio runtime
#[derive(Debug, Clone)]
pub struct RuntimeContext {
    handle: Handle,
}

impl RuntimeContext {
    #[must_use]
    pub fn new(handle: Handle) -> Self {
        Self { handle }
    }

    /// Context bound to the runtime of the caller, if any
    pub fn try_current() -> Option<Self> {
        Handle::try_current().ok().map(Self::new)
    }
}

impl CompletionContext for RuntimeContext {
    fn execute(&self, task: CompletionTask) {
        drop(self.handle.spawn(async move { task() }));
    }
}

/// Sending half of a single-consumer completion queue
///
/// Tasks run on the thread that drives the paired [`MainQueueRunner`].
#[derive(Debug, Clone)]
pub struct MainQueue {
    sender: mpsc::UnboundedSender<CompletionTask>,
}

/// Receiving half of [`MainQueue`], owned by the thread completions must run on
pub struct MainQueueRunner {
    receiver: mpsc::UnboundedReceiver<CompletionTask>,
}

/// 创建主队列
#[must_use]
pub fn main_queue() -> (MainQueue, MainQueueRunner) {
    let (sender, receiver) = mpsc::unbounded_channel();
    (MainQueue { sender }, MainQueueRunner { receiver })
}

impl CompletionContext for MainQueue {
    fn execute(&self, task: CompletionTask) {
        if self.sender.send(task).is_err() {
            log::error!("Main queue runner is gone, completion dropped");
        }
    }
}

impl MainQueueRunner {
    /// Wait for the next task and run it on the current thread
    ///
    /// Returns `false` once every [`MainQueue`] has been dropped and the
    /// queue is drained.
    pub async fn run_next(&mut self) -> bool {
        match self.receiver.recv().await {
            Some(task) => {
                task();
                true
            }
            None => false,
        }
    }

    /// Run every task already queued without waiting; returns how many ran
    pub fn run_pending(&mut self) -> usize {
        let mut count = 0;
        while let Ok(task) = self.receiver.try_recv() {
            task();
            count += 1;
        }
        count
    }

    /// Drive the queue on the current thread until all senders are dropped
    ///
    /// Must not be called from within an async context.
    pub fn run_blocking(mut self) {
        while let Some(task) = self.receiver.blocking_recv() {
            task();
        }
    }
}
