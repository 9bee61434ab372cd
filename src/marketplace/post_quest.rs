use crate::error::Result;
use crate::ledger::{Quest, QuestDraft};
use crate::storage::KeyValueStorage;
use crate::toast::{ToastKind, ToastSink};
use super::{Marketplace, Tab};

impl<S: KeyValueStorage, N: ToastSink> Marketplace<S, N> {
    /// Posts a quest and jumps to the quest board so the poster sees it listed.
    pub fn post_quest(&mut self, draft: QuestDraft) -> Result<Quest> {
        match self.store.add_quest(draft) {
            Ok(quest) => {
                self.notifier.show_toast(
                    ToastKind::Success,
                    "Quest Posted",
                    &format!(
                        "₹{} held in escrow. Share OTP {} once the job is done.",
                        quest.reward, quest.otp
                    ),
                );
                self.active_tab = Tab::Find;
                Ok(quest)
            }
            Err(e) if e.is_balance_shortfall() => {
                self.notifier.show_toast(
                    ToastKind::Error,
                    "Insufficient Balance",
                    "Add money to your wallet to post this quest.",
                );
                Err(e)
            }
            Err(e) => {
                self.report_failure(&e);
                Err(e)
            }
        }
    }
}
