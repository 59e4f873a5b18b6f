// Dashboard event loop
//
// Owns the aggregate state. Sample results from the scheduler and terminal input are applied
// one at a time through `reduce`, then the frame is redrawn from the new state.

use std::io;
use std::sync::Arc;
use std::time::Duration;

use crossterm::event::{Event as TermEvent, EventStream};
use futures_util::StreamExt;
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;
use tokio::sync::{mpsc, oneshot};

use crate::collector::MetricsSource;
use crate::error::ErrorKind;
use crate::scheduler::{self, SchedulerConfig, SchedulerDeps, SchedulerStats};
use crate::state::{AggregateState, Effect, Event, reduce};

use super::input::translate_key;
use super::render::render;
use super::terminal::TerminalGuard;

/// Dashboard settings, already merged from config and command line.
#[derive(Debug, Clone)]
pub struct TuiOptions {
    pub mouse: bool,
    pub alt_screen: bool,
    pub cpu_history_len: usize,
    pub scheduler: SchedulerConfig,
}

/// Runs the dashboard until the user quits. Terminal setup failures are returned before
/// anything is sampled; the terminal is restored on every exit path.
pub async fn run(source: Arc<dyn MetricsSource>, options: TuiOptions) -> anyhow::Result<()> {
    let guard = TerminalGuard::enter(options.mouse, options.alt_screen)
        .map_err(|e| anyhow::anyhow!("initialising terminal: {}", e))?;
    let mut terminal = Terminal::new(CrosstermBackend::new(io::stdout()))
        .map_err(|e| anyhow::anyhow!("initialising terminal: {}", e))?;
    let size = terminal
        .size()
        .map_err(|e| anyhow::anyhow!("reading terminal size: {}", e))?;

    let (event_tx, event_rx) = mpsc::unbounded_channel();
    let (refresh_tx, refresh_rx) = mpsc::channel(4);
    let (shutdown_tx, shutdown_rx) = oneshot::channel();
    let stats = Arc::new(SchedulerStats::default());

    let scheduler_handle = scheduler::spawn(
        SchedulerDeps {
            source,
            events: event_tx,
            refresh_rx,
            shutdown_rx,
            stats: stats.clone(),
        },
        options.scheduler.clone(),
    );
    tracing::info!(
        interval_us = options.scheduler.interval.as_micros() as u64,
        width = size.width,
        height = size.height,
        "Dashboard started"
    );

    let state = AggregateState::new(size.width, size.height, options.cpu_history_len);
    let result = event_loop(&mut terminal, state, event_rx, refresh_tx).await;

    // In-flight samples are abandoned; their sends fail once the receiver is gone.
    let _ = shutdown_tx.send(());
    let _ = tokio::time::timeout(Duration::from_secs(1), scheduler_handle).await;
    drop(guard);

    tracing::info!(
        rounds_started = stats.rounds(),
        samples_ok = stats.ok(),
        samples_failed = stats.failed(),
        "Dashboard stopped"
    );
    result
}

async fn event_loop(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    mut state: AggregateState,
    mut events: mpsc::UnboundedReceiver<Event>,
    refresh_tx: mpsc::Sender<()>,
) -> anyhow::Result<()> {
    let mut input = EventStream::new();

    loop {
        if let Err(e) = terminal.draw(|frame| render(frame, &state)) {
            tracing::error!(kind = %ErrorKind::Presentation, error = %e, "draw failed");
            return Err(anyhow::anyhow!("{}: {}", ErrorKind::Presentation, e));
        }

        let event = tokio::select! {
            Some(event) = events.recv() => event,
            maybe = input.next() => match maybe {
                Some(Ok(TermEvent::Key(key))) => match translate_key(key) {
                    Some(key) => Event::KeyPressed(key),
                    None => continue,
                },
                Some(Ok(TermEvent::Resize(width, height))) => {
                    Event::ViewportResized { width, height }
                }
                Some(Ok(_)) => continue,
                Some(Err(e)) => {
                    tracing::error!(error = %e, "reading terminal input failed");
                    return Err(anyhow::anyhow!("reading terminal input: {}", e));
                }
                None => {
                    tracing::debug!("terminal input closed");
                    break;
                }
            },
        };

        let (next, quit) = apply(state, event, &refresh_tx);
        state = next;
        if quit {
            break;
        }

        // Fold everything else already queued into this frame.
        while let Ok(event) = events.try_recv() {
            let (next, quit) = apply(state, event, &refresh_tx);
            state = next;
            if quit {
                return Ok(());
            }
        }
    }
    Ok(())
}

/// Reduces one event and carries out its effect. Returns true when the user asked to quit.
fn apply(
    state: AggregateState,
    event: Event,
    refresh_tx: &mpsc::Sender<()>,
) -> (AggregateState, bool) {
    let (state, effect) = reduce(state, event);
    match effect {
        Some(Effect::Quit) => (state, true),
        Some(Effect::Refresh) => {
            // A full queue already holds a pending refresh round.
            let _ = refresh_tx.try_send(());
            (state, false)
        }
        None => (state, false),
    }
}
