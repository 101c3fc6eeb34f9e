use crate::bus::EventChannel;
use crate::config::Config;
use crate::shutdown::ShutdownHandle;
use crate::ui::app::App;
use crate::ui::events::{AppEvent, EventHandler};
use crate::ui::input::handle_key;
use crate::ui::render::draw;
use crate::ui::terminal_guard::setup_terminal;
use std::io;
use std::sync::Arc;
use std::time::Duration;

const TICK_RATE: Duration = Duration::from_millis(250);

pub fn run(config: &Config, shutdown: ShutdownHandle) -> io::Result<()> {
    let bus = Arc::new(EventChannel::new());
    let mut app = App::new(config, bus);
    let (mut terminal, guard) = setup_terminal()?;
    let events = EventHandler::new(TICK_RATE, shutdown.clone());
    tracing::info!(
        premium = app.premium_member(),
        cart_items = app.cart().len(),
        "product page started"
    );

    loop {
        terminal.draw(|frame| draw(frame, &app))?;
        if app.should_quit() {
            break;
        }

        match events.next(TICK_RATE) {
            Ok(AppEvent::Key(key)) => handle_key(&mut app, key),
            Ok(AppEvent::Tick) => app.pump_reviews(),
            // ratatui re-measures the frame on the next draw.
            Ok(AppEvent::Resize(cols, rows)) => {
                tracing::trace!(cols, rows, "terminal resized");
            }
            Ok(AppEvent::Shutdown) => {
                tracing::info!("shutdown signal received");
                app.request_quit();
            }
            Err(std::sync::mpsc::RecvTimeoutError::Timeout) => {}
            Err(std::sync::mpsc::RecvTimeoutError::Disconnected) => break,
        }
    }

    // Stops the event thread even when the quit came from a key press.
    shutdown.signal();
    drop(guard);
    tracing::info!(
        cart_items = app.cart().len(),
        reviews = app.product().reviews().len(),
        "product page closed"
    );
    Ok(())
}
