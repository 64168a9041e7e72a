use little_chat_responder::ChatQuery;
use tokio::sync::mpsc::WeakUnboundedSender;

use super::{Command, SessionSnapshot, SessionStage};
use crate::outcome::Outcome;
use crate::responder_client::ResponderClient;
use crate::transcript::{Message, Sender, Transcript};

type MessageCallback = Box<dyn Fn(&Message) + Send + Sync>;

#[derive(Default)]
pub(crate) struct Callbacks {
    pub(crate) on_message_appended: Option<MessageCallback>,
    pub(crate) on_message_removed: Option<MessageCallback>,
    pub(crate) on_input_enabled: Option<Box<dyn Fn(bool) + Send + Sync>>,
    pub(crate) on_draft_changed: Option<Box<dyn Fn(&str) + Send + Sync>>,
    pub(crate) on_idle: Option<Box<dyn Fn() + Send + Sync>>,
}

pub(crate) struct SessionState {
    responder: ResponderClient,
    transcript: Transcript,
    stage: SessionStage,
    draft: String,
    callbacks: Callbacks,
}

impl SessionState {
    pub(crate) fn new(
        responder: ResponderClient,
        callbacks: Callbacks,
    ) -> Self {
        Self {
            responder,
            transcript: Default::default(),
            stage: Default::default(),
            draft: Default::default(),
            callbacks,
        }
    }

    pub(super) fn handle(
        &mut self,
        cmd: Command,
        cmd_tx: &WeakUnboundedSender<Command>,
    ) {
        match cmd {
            Command::SubmitQuery(text) => self.submit_query(&text, cmd_tx),
            Command::SubmitDraft => {
                let draft = self.draft.clone();
                self.submit_query(&draft, cmd_tx);
            }
            Command::SetDraft(draft) => self.set_draft(draft),
            Command::Snapshot(reply_tx) => {
                reply_tx.send(self.snapshot()).ok();
            }
            Command::Settled(outcome) => self.settle(outcome),
        }
    }

    fn submit_query(
        &mut self,
        text: &str,
        cmd_tx: &WeakUnboundedSender<Command>,
    ) {
        let query = text.trim();
        if query.is_empty() {
            debug!("ignoring blank query");
            return;
        }
        if self.stage != SessionStage::Idle {
            // Input is disabled, there is nothing to queue the query for.
            warn!("a query is already outstanding, dropping the new one");
            return;
        }
        let Some(cmd_tx) = cmd_tx.upgrade() else {
            warn!("session handle has been dropped, discard the query");
            return;
        };

        self.set_stage(SessionStage::Sending);
        self.append(Sender::User, query.to_owned());
        self.set_draft(String::new());
        if let Some(pending) = self.transcript.push_pending() {
            if let Some(on_message_appended) =
                &self.callbacks.on_message_appended
            {
                on_message_appended(pending);
            }
        }

        let responder = self.responder.clone();
        let query = ChatQuery::new(query);
        tokio::spawn(async move {
            // Run the request in its own task, so a panicking responder
            // still settles the query.
            let request =
                tokio::spawn(async move { responder.send_query(query).await });
            let outcome = match request.await {
                Ok(outcome) => outcome,
                Err(err) => {
                    error!("responder task failed: {err}");
                    Outcome::TransportError
                }
            };
            cmd_tx.send(Command::Settled(outcome)).ok();
        });
    }

    fn settle(&mut self, outcome: Outcome) {
        if self.stage != SessionStage::Sending {
            warn!("got an outcome while idle: {outcome:?}");
            return;
        }

        if let Some(pending) = self.transcript.remove_pending() {
            if let Some(on_message_removed) = &self.callbacks.on_message_removed
            {
                on_message_removed(&pending);
            }
        }
        self.append(Sender::Bot, outcome.text());
        self.set_stage(SessionStage::Idle);

        if let Some(on_idle) = &self.callbacks.on_idle {
            on_idle();
        }
    }

    fn set_draft(&mut self, draft: String) {
        if self.draft == draft {
            return;
        }
        self.draft = draft;
        if let Some(on_draft_changed) = &self.callbacks.on_draft_changed {
            on_draft_changed(&self.draft);
        }
    }

    fn set_stage(&mut self, stage: SessionStage) {
        self.stage = stage;
        if let Some(on_input_enabled) = &self.callbacks.on_input_enabled {
            on_input_enabled(stage == SessionStage::Idle);
        }
    }

    fn append(&mut self, sender: Sender, text: String) {
        let message = self.transcript.push(sender, text);
        if let Some(on_message_appended) = &self.callbacks.on_message_appended
        {
            on_message_appended(message);
        }
    }

    fn snapshot(&self) -> SessionSnapshot {
        SessionSnapshot {
            transcript: self.transcript.clone(),
            stage: self.stage,
            draft: self.draft.clone(),
        }
    }
}
