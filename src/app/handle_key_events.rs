use ratatui::crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::active_quest::FlowState;
use crate::event::AppEvent;
use crate::marketplace::Tab;
use super::{App, AmountPrompt, FormAction, WalletAction};

impl App {
    /// Handles the key events and updates the state of [`App`].
    pub fn handle_key_events(&mut self, key_event: KeyEvent) {
        if let KeyCode::Char('c' | 'C') = key_event.code {
            if key_event.modifiers == KeyModifiers::CONTROL {
                self.events.send(AppEvent::Quit);
                return;
            }
        }

        // Verification dialog sits on top of everything
        if self.market.flow().state() == FlowState::Verifying {
            match key_event.code {
                KeyCode::Esc => self.events.send(AppEvent::CloseVerification),
                KeyCode::Enter => self.events.send(AppEvent::SubmitCode),
                KeyCode::Backspace => self.events.send(AppEvent::CodeBackspace),
                KeyCode::Char(ch) => self.events.send(AppEvent::CodeInput(ch)),
                _ => {}
            }
            return;
        }

        if self.amount_prompt.is_some() {
            self.handle_amount_prompt_key(key_event.code);
            return;
        }

        match key_event.code {
            KeyCode::Tab => return self.events.send(AppEvent::NextTab),
            KeyCode::BackTab => return self.events.send(AppEvent::PrevTab),
            _ => {}
        }

        if self.market.active_tab() == Tab::Post {
            match self.post_form.handle_key(key_event.code) {
                FormAction::Consumed => return,
                FormAction::Submit(draft) => {
                    if self.market.post_quest(draft).is_ok() {
                        self.post_form.reset();
                        self.selected_quest = 0;
                    }
                    return;
                }
                // Global keys (quit, verify, dismiss) belong to the other tabs
                FormAction::Unhandled => return,
            }
        }

        match key_event.code {
            KeyCode::Esc | KeyCode::Char('q') => self.events.send(AppEvent::Quit),
            KeyCode::Up | KeyCode::Char('k') => self.events.send(AppEvent::SelectPrev),
            KeyCode::Down | KeyCode::Char('j') => self.events.send(AppEvent::SelectNext),
            KeyCode::Char('v') => self.events.send(AppEvent::OpenVerification),
            KeyCode::Char('x') => self.events.send(AppEvent::DismissQuest),
            KeyCode::Enter if self.market.active_tab() == Tab::Find => {
                self.events.send(AppEvent::AcceptSelected)
            }
            KeyCode::Char('w') if self.market.active_tab() == Tab::Wallet => {
                self.amount_prompt = Some(AmountPrompt::new(WalletAction::Withdraw));
            }
            KeyCode::Char('a') if self.market.active_tab() == Tab::Wallet => {
                self.amount_prompt = Some(AmountPrompt::new(WalletAction::AddMoney));
            }
            _ => {}
        }
    }

    fn handle_amount_prompt_key(&mut self, key_code: KeyCode) {
        let Some(prompt) = self.amount_prompt.as_mut() else {
            return;
        };

        match key_code {
            KeyCode::Esc => self.amount_prompt = None,
            KeyCode::Backspace => prompt.backspace(),
            KeyCode::Char(ch) => prompt.push(ch),
            KeyCode::Enter => {
                let amount = match prompt.amount() {
                    Ok(amount) => amount,
                    Err(message) => {
                        prompt.error = Some(message);
                        return;
                    }
                };
                let action = prompt.action;
                self.amount_prompt = None;

                // Outcome is reported through the toast line either way
                let _ = match action {
                    WalletAction::Withdraw => self.market.withdraw(amount),
                    WalletAction::AddMoney => self.market.add_money(amount),
                };
            }
            _ => {}
        }
    }
}
