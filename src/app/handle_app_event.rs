use std::time::Instant;

use crate::event::AppEvent;
use crate::log_debug;
use crate::marketplace::Tab;
use super::App;

impl App {
    pub fn handle_app_event(&mut self, app_event: AppEvent) {
        match app_event {
            AppEvent::NextTab => {
                let next = self.market.active_tab().next();
                self.market.set_active_tab(next);
            }
            AppEvent::PrevTab => {
                let prev = self.market.active_tab().prev();
                self.market.set_active_tab(prev);
            }
            AppEvent::SelectNext => self.select_next(),
            AppEvent::SelectPrev => self.select_prev(),
            AppEvent::AcceptSelected => {
                if let Err(e) = self.market.accept_quest(self.selected_quest) {
                    log_debug!("Accept failed: {}", e);
                }
            }
            AppEvent::OpenVerification => {
                if let Err(e) = self.market.open_verification() {
                    log_debug!("Cannot open verification: {}", e);
                }
            }
            AppEvent::CloseVerification => self.market.close_verification(),
            AppEvent::CodeInput(ch) => {
                self.market.push_code_char(ch);
            }
            AppEvent::CodeBackspace => {
                self.market.pop_code_char();
            }
            AppEvent::SubmitCode => {
                if let Err(e) = self.market.verify(Instant::now()) {
                    log_debug!("Verification failed: {}", e);
                }
            }
            AppEvent::DismissQuest => {
                self.market.dismiss_active_quest();
            }
            AppEvent::Quit => self.quit(),
        }
    }

    fn select_next(&mut self) {
        match self.market.active_tab() {
            Tab::Find => {
                let last = self.market.store().quests().len().saturating_sub(1);
                if self.selected_quest < last {
                    self.selected_quest += 1;
                }
            }
            Tab::Wallet => {
                let last = self.market.store().transactions().len().saturating_sub(1);
                if self.history_offset < last {
                    self.history_offset += 1;
                }
            }
            Tab::Post => {}
        }
    }

    fn select_prev(&mut self) {
        match self.market.active_tab() {
            Tab::Find => self.selected_quest = self.selected_quest.saturating_sub(1),
            Tab::Wallet => self.history_offset = self.history_offset.saturating_sub(1),
            Tab::Post => {}
        }
    }
}
