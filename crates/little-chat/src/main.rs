//! A simple program demonstrates how to use `little-chat` as a library.

#[macro_use]
extern crate tracing;

use std::env;
use std::io::Write as _;
use std::time::Duration;

use indicatif::{ProgressBar, ProgressStyle};
use little_chat::core::{Message, Sender, SessionBuilder};
use little_chat::http::{HttpResponder, HttpResponderConfigBuilder};
use little_chat::render::format_message;
use tokio::io::{self, AsyncBufReadExt};
use tokio::select;
use tokio::sync::mpsc;
use tokio::time::sleep;

enum SessionEvent {
    Idle,
    Appended(Message),
}

#[tokio::main(flavor = "current_thread")]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let mut config = HttpResponderConfigBuilder::new();
    if let Ok(base_url) = env::var("LITTLE_CHAT_URL") {
        config = config.with_base_url(base_url);
    }
    let config = config.build();
    info!("sending queries to {}", config.endpoint_url());
    let responder = HttpResponder::new(config);

    let (event_tx, mut event_rx) = mpsc::unbounded_channel();

    let session = SessionBuilder::with_responder(responder)
        .on_idle({
            let event_tx = event_tx.clone();
            move || {
                event_tx.send(SessionEvent::Idle).ok();
            }
        })
        .on_message_appended({
            let event_tx = event_tx.clone();
            move |message: &Message| {
                event_tx.send(SessionEvent::Appended(message.clone())).ok();
            }
        })
        .build();

    let progress_style = ProgressStyle::with_template("{spinner} {wide_msg}")
        .unwrap_or_else(|_| ProgressStyle::default_spinner())
        .tick_chars("⠋⠙⠹⠸⠼⠴⠦⠧⠇⠏");

    'outer: loop {
        print!("> ");
        std::io::stdout().flush().ok();

        let Some(line) = read_line().await else {
            break;
        };
        // The session ignores blank input, so there would be no idle
        // event to wait for.
        if line.trim().is_empty() {
            continue;
        }
        session.submit_query(line);

        let mut progress_bar: Option<ProgressBar> = None;

        loop {
            let sleep = sleep(Duration::from_millis(100));
            let event = select! {
                event = event_rx.recv() => {
                    let Some(event) = event else {
                        break 'outer;
                    };
                    event
                },
                _ = sleep => {
                    if let Some(progress_bar) = &progress_bar {
                        progress_bar.inc(1);
                    }
                    continue;
                }
            };

            match event {
                SessionEvent::Appended(message) if message.is_pending() => {
                    let bar = ProgressBar::new_spinner();
                    bar.set_style(progress_style.clone());
                    bar.set_message("🤔 Thinking...");
                    progress_bar = Some(bar);
                }
                SessionEvent::Appended(message) => {
                    // Finish the progress bar before printing anything else.
                    if let Some(progress_bar) = progress_bar.take() {
                        progress_bar.finish_and_clear();
                    }
                    // The user's own line is already on screen.
                    if message.sender() == Sender::Bot {
                        if let Some(text) = format_message(&message) {
                            println!("{text}");
                        }
                    }
                }
                SessionEvent::Idle => {
                    break;
                }
            }
        }
    }
}

async fn read_line() -> Option<String> {
    let mut stdin = io::BufReader::new(io::stdin());
    let mut line = String::new();

    match stdin.read_line(&mut line).await {
        Ok(count) => {
            if count == 0 {
                return None;
            }
            Some(line)
        }
        Err(err) => {
            error!("error reading input: {}", err);
            None
        }
    }
}
