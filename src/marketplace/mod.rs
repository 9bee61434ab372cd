//! Marketplace facade
//!
//! Ties the ledger, the active-quest flow, the toast sink and the selected
//! view together. UI actions come in here and never touch the ledger directly.

mod tab;
mod post_quest;
mod accept_quest;
mod verification;
mod wallet;

#[cfg(test)]
mod tests;

use std::time::Instant;

use crate::active_quest::{ActiveQuestFlow, CountdownTick};
use crate::error::JugaadError;
use crate::ledger::LedgerStore;
use crate::log_error;
use crate::storage::KeyValueStorage;
use crate::toast::{ToastKind, ToastSink};

pub use tab::Tab;

#[derive(Debug)]
pub struct Marketplace<S: KeyValueStorage, N: ToastSink> {
    store: LedgerStore<S>,
    flow: ActiveQuestFlow,
    notifier: N,
    active_tab: Tab,
    accept_window_secs: u64,
}

impl<S: KeyValueStorage, N: ToastSink> Marketplace<S, N> {
    pub fn new(
        store: LedgerStore<S>,
        flow: ActiveQuestFlow,
        notifier: N,
        accept_window_secs: u64,
    ) -> Self {
        Self {
            store,
            flow,
            notifier,
            active_tab: Tab::Post,
            accept_window_secs,
        }
    }

    pub fn store(&self) -> &LedgerStore<S> {
        &self.store
    }

    pub fn flow(&self) -> &ActiveQuestFlow {
        &self.flow
    }

    pub fn notifier(&self) -> &N {
        &self.notifier
    }

    pub fn active_tab(&self) -> Tab {
        self.active_tab
    }

    pub fn set_active_tab(&mut self, tab: Tab) {
        self.active_tab = tab;
    }

    pub fn countdown_tick(&mut self, tick: CountdownTick) -> bool {
        self.flow.tick(tick)
    }

    /// Clears an expired OTP error and old toasts. Returns true if anything visible changed.
    pub fn housekeeping(&mut self, now: Instant) -> bool {
        let error_cleared = self.flow.clear_expired_error(now);
        let toasts_expired = self.notifier.expire(now);
        error_cleared || toasts_expired
    }

    /// Anything that is not a user-recoverable condition ends up here
    fn report_failure(&mut self, error: &JugaadError) {
        log_error!("Marketplace operation failed: {}", error);
        self.notifier
            .show_toast(ToastKind::Error, "Storage Error", &error.to_string());
    }
}
