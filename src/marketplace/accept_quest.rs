use crate::error::{JugaadError, Result};
use crate::storage::KeyValueStorage;
use crate::toast::{ToastKind, ToastSink};
use super::Marketplace;

impl<S: KeyValueStorage, N: ToastSink> Marketplace<S, N> {
    pub fn accept_quest(&mut self, index: usize) -> Result<()> {
        let active = self.store.accept_quest(index, self.accept_window_secs)?;

        match self.flow.accept(active) {
            Ok(()) => Ok(()),
            Err(JugaadError::QuestAlreadyActive(current)) => {
                self.notifier.show_toast(
                    ToastKind::Error,
                    "Quest In Progress",
                    &format!("Finish or dismiss '{}' first.", current),
                );
                Err(JugaadError::QuestAlreadyActive(current))
            }
            Err(e) => Err(e),
        }
    }

    /// Gives up on the accepted quest. No payout, no refund.
    pub fn dismiss_active_quest(&mut self) -> bool {
        self.flow.dismiss().is_some()
    }
}
