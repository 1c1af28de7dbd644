//! Spinner shown while requests to the calculator service are in flight

use colored::*;
use is_terminal::IsTerminal;
use std::io::{self, Write};
use std::time::{Duration, Instant};
use tokio::sync::oneshot;

const FRAMES: &[char] = &['⠋', '⠙', '⠹', '⠸', '⠼', '⠴', '⠦', '⠧', '⠇', '⠏'];
const FRAME_INTERVAL: Duration = Duration::from_millis(80);
/// Elapsed time is only shown once a request is noticeably slow
const SHOW_ELAPSED_AFTER: Duration = Duration::from_secs(1);

/// An animated progress indicator that stops when dropped.
///
/// Does nothing when stdout is not a terminal, so piped output stays clean.
pub struct Spinner {
    stop_tx: Option<oneshot::Sender<()>>,
    task: Option<tokio::task::JoinHandle<()>>,
}

impl Spinner {
    pub fn start(message: impl Into<String>) -> Self {
        if !io::stdout().is_terminal() {
            return Self { stop_tx: None, task: None };
        }

        let (stop_tx, stop_rx) = oneshot::channel();
        let task = tokio::spawn(animate(message.into(), stop_rx));
        Self {
            stop_tx: Some(stop_tx),
            task: Some(task),
        }
    }
}

impl Drop for Spinner {
    fn drop(&mut self) {
        if let Some(stop_tx) = self.stop_tx.take() {
            let _ = stop_tx.send(());
        }
        if let Some(task) = self.task.take() {
            task.abort();
            clear_line();
        }
    }
}

async fn animate(message: String, mut stop_rx: oneshot::Receiver<()>) {
    let started = Instant::now();
    let mut ticker = tokio::time::interval(FRAME_INTERVAL);
    let mut stdout = io::stdout();

    for frame in FRAMES.iter().cycle() {
        tokio::select! {
            _ = ticker.tick() => {}
            _ = &mut stop_rx => break,
        }

        let elapsed = started.elapsed();
        if elapsed >= SHOW_ELAPSED_AFTER {
            let secs = format!("({:.1}s)", elapsed.as_secs_f32());
            print!("\r{} {} {}", frame.to_string().bright_cyan(), message, secs.dimmed());
        } else {
            print!("\r{} {}", frame.to_string().bright_cyan(), message);
        }
        let _ = stdout.flush();
    }

    clear_line();
}

fn clear_line() {
    print!("\r\x1b[K");
    let _ = io::stdout().flush();
}

/// Run a future with a spinner
pub async fn with_spinner<F, T>(message: impl Into<String>, future: F) -> T
where
    F: std::future::Future<Output = T>,
{
    let _spinner = Spinner::start(message);
    future.await
}
