mod post_form;
mod amount_prompt;
mod handle_key_events;
mod handle_app_event;

use std::time::Instant;

use color_eyre::Result;
use ratatui::{
    crossterm::event::{Event as CrosstermEvent, KeyEventKind},
    DefaultTerminal,
};
use tokio::sync::mpsc;

use crate::active_quest::{ActiveQuestFlow, TickReceiver};
use crate::config::AppConfig;
use crate::event::{Event, EventHandler};
use crate::ledger::LedgerStore;
use crate::log_info;
use crate::marketplace::Marketplace;
use crate::storage::{KeyValueStorage, MemoryStorage};
use crate::toast::Toasts;
use crate::util::database::Database;

pub use amount_prompt::{AmountPrompt, WalletAction};
pub use post_form::{FormAction, PostForm, PostStep};

pub type AppStorage = Box<dyn KeyValueStorage>;
pub type AppMarketplace = Marketplace<AppStorage, Toasts>;

/// Application.
pub struct App {
    /// Is the application running?
    pub running: bool,
    /// Ledger, active quest and toasts
    pub market: AppMarketplace,
    /// Event handler.
    pub events: EventHandler,
    /// Countdown ticks from the active quest's timer
    pub countdown_receiver: TickReceiver,

    pub post_form: PostForm,
    pub selected_quest: usize,
    pub history_offset: usize,
    pub amount_prompt: Option<AmountPrompt>,
}

impl App {
    /// Constructs a new instance of [`App`].
    pub fn new(config: &AppConfig) -> Result<Self> {
        let storage: AppStorage = if config.in_memory {
            Box::new(MemoryStorage::new())
        } else {
            Box::new(Database::open_in_dir(&config.data_dir)?)
        };
        let store = LedgerStore::load(storage)?;

        let (tick_sender, countdown_receiver) = mpsc::unbounded_channel();
        let flow = ActiveQuestFlow::with_timer(tick_sender, config.countdown_interval())
            .with_error_display(config.otp_error_display());

        let market = Marketplace::new(
            store,
            flow,
            Toasts::new(config.toast_display()),
            config.accept_window_secs,
        );

        log_info!("Campus Jugaad started, balance {}", market.store().balance());

        Ok(Self {
            running: true,
            market,
            events: EventHandler::new(),
            countdown_receiver,
            post_form: PostForm::default(),
            selected_quest: 0,
            history_offset: 0,
            amount_prompt: None,
        })
    }

    /// Run the application's main loop.
    pub async fn run(mut self, mut terminal: DefaultTerminal) -> Result<()> {
        let mut needs_redraw = true;

        while self.running {
            if needs_redraw {
                terminal.draw(|frame| frame.render_widget(&self, frame.area()))?;
                needs_redraw = false;
            }

            tokio::select! {
                event = self.events.next() => {
                    match event? {
                        Event::Tick => {
                            needs_redraw = self.market.housekeeping(Instant::now());
                        }
                        Event::Crossterm(CrosstermEvent::Key(key_event))
                            if key_event.kind == KeyEventKind::Press =>
                        {
                            self.handle_key_events(key_event);
                            needs_redraw = true;
                        }
                        Event::Crossterm(CrosstermEvent::Resize(_, _)) => needs_redraw = true,
                        Event::Crossterm(_) => {}
                        Event::App(app_event) => {
                            self.handle_app_event(app_event);
                            needs_redraw = true;
                        }
                    }
                }
                Some(tick) = self.countdown_receiver.recv() => {
                    if self.market.countdown_tick(tick) {
                        needs_redraw = true;
                    }
                }
            }
        }

        log_info!("Campus Jugaad stopped, balance {}", self.market.store().balance());
        Ok(())
    }

    /// Set running to false to quit the application.
    pub fn quit(&mut self) {
        self.running = false;
    }
}
