mod builder;
mod state;

use tokio::sync::mpsc::{self, UnboundedReceiver, WeakUnboundedSender};
use tokio::sync::oneshot;
use tracing::Instrument;

use crate::outcome::Outcome;
use crate::transcript::Transcript;
pub use builder::SessionBuilder;
use state::SessionState;

/// The stage a session is in.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum SessionStage {
    /// Waiting for the user. Input is enabled.
    #[default]
    Idle,
    /// One query is outstanding. Input is disabled.
    Sending,
}

/// A copy of the session state at some point in time.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SessionSnapshot {
    /// The displayed messages.
    pub transcript: Transcript,
    /// The current stage.
    pub stage: SessionStage,
    /// The pending input buffer.
    pub draft: String,
}

impl SessionSnapshot {
    /// Returns `true` if the session accepts a new query.
    #[inline]
    pub fn input_enabled(&self) -> bool {
        self.stage == SessionStage::Idle
    }
}

#[derive(Debug)]
enum Command {
    SubmitQuery(String),
    SubmitDraft,
    SetDraft(String),
    Snapshot(oneshot::Sender<SessionSnapshot>),
    Settled(Outcome),
}

/// A chat session, like a window that displays messages and has an input
/// box.
///
/// The session state lives in its own task, and every method here just
/// posts a command to it, so commands are handled one at a time in the
/// order they are sent. A query submitted while another one is
/// outstanding is dropped, not queued.
///
/// Dropping the session doesn't cancel an outstanding query; the task
/// lets it settle and then exits.
pub struct Session {
    cmd_tx: mpsc::UnboundedSender<Command>,
}

impl Session {
    /// Submits a query.
    ///
    /// Leading and trailing whitespace is trimmed. Nothing happens if the
    /// remaining text is empty or the input is currently disabled.
    #[inline]
    pub fn submit_query<S: Into<String>>(&self, text: S) {
        self.send(Command::SubmitQuery(text.into()));
    }

    /// Submits the current draft, as if it was passed to
    /// [`Session::submit_query`].
    #[inline]
    pub fn submit_draft(&self) {
        self.send(Command::SubmitDraft);
    }

    /// Replaces the draft.
    #[inline]
    pub fn set_draft<S: Into<String>>(&self, draft: S) {
        self.send(Command::SetDraft(draft.into()));
    }

    /// Returns a snapshot taken after all previously sent commands have
    /// been handled.
    pub async fn snapshot(&self) -> SessionSnapshot {
        let (tx, rx) = oneshot::channel();
        self.send(Command::Snapshot(tx));
        rx.await.expect("session task has been dropped too early")
    }

    #[inline]
    fn send(&self, cmd: Command) {
        self.cmd_tx
            .send(cmd)
            .expect("session task has been dropped too early");
    }

    fn spawn(state: SessionState) -> Self {
        let (cmd_tx, cmd_rx) = mpsc::unbounded_channel();
        tokio::spawn(
            run_session(state, cmd_rx, cmd_tx.downgrade())
                .instrument(trace_span!("session")),
        );
        Self { cmd_tx }
    }
}

async fn run_session(
    mut state: SessionState,
    mut cmd_rx: UnboundedReceiver<Command>,
    cmd_tx: WeakUnboundedSender<Command>,
) {
    debug!("started");
    while let Some(cmd) = cmd_rx.recv().await {
        trace!("received command: {cmd:?}");

        let proc_span = trace_span!("proc cmd");
        proc_span.in_scope(|| {
            state.handle(cmd, &cmd_tx);
            trace!("finished");
        });
    }
    debug!("will terminate");
}
