use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Instant;

use crate::active_quest::{ActiveQuestFlow, FlowState, VerifyOutcome};
use crate::error::{JugaadError, Result};
use crate::ledger::{LedgerStore, QuestDraft, Urgency};
use crate::storage::{KeyValueStorage, MemoryStorage, BALANCE_KEY, QUESTS_KEY, TRANSACTIONS_KEY};
use crate::toast::{ToastKind, Toasts};
use super::{Marketplace, Tab};

/// Storage that can be told to start refusing writes
#[derive(Debug, Clone, Default)]
struct FlakyStorage {
    inner: MemoryStorage,
    failing: Arc<AtomicBool>,
}

impl KeyValueStorage for FlakyStorage {
    fn get_item(&self, key: &str) -> Result<Option<String>> {
        self.inner.get_item(key)
    }

    fn set_item(&self, key: &str, value: &str) -> Result<()> {
        if self.failing.load(Ordering::SeqCst) {
            return Err(JugaadError::StorageLock);
        }
        self.inner.set_item(key, value)
    }
}

fn marketplace() -> Marketplace<MemoryStorage, Toasts> {
    let store = LedgerStore::load(MemoryStorage::new()).unwrap();
    Marketplace::new(store, ActiveQuestFlow::new(), Toasts::default(), 7185)
}

fn draft(reward: u64) -> QuestDraft {
    QuestDraft {
        title: "Return Library Books".to_string(),
        description: "Three books, due today.".to_string(),
        reward,
        xp: 20,
        urgency: Urgency::Low,
        deadline: "Today, 6 PM".to_string(),
        location: None,
        highlighted: None,
        is_my_quest: Some(true),
    }
}

#[test]
fn test_tabs_cycle() {
    assert_eq!(Tab::Post.next(), Tab::Find);
    assert_eq!(Tab::Wallet.next(), Tab::Post);
    assert_eq!(Tab::Post.prev(), Tab::Wallet);
}

#[test]
fn test_post_switches_to_find_and_toasts_otp() {
    let mut market = marketplace();
    assert_eq!(market.active_tab(), Tab::Post);

    let quest = market.post_quest(draft(80)).unwrap();

    assert_eq!(market.active_tab(), Tab::Find);
    let toast = market.notifier().latest().unwrap();
    assert_eq!(toast.kind, ToastKind::Success);
    assert!(toast.message.contains(&quest.otp));
}

#[test]
fn test_post_over_balance_stays_on_post_tab() {
    let mut market = marketplace();

    let result = market.post_quest(draft(10_000));

    assert!(result.unwrap_err().is_balance_shortfall());
    assert_eq!(market.active_tab(), Tab::Post);
    let toast = market.notifier().latest().unwrap();
    assert_eq!(toast.title, "Insufficient Balance");
    assert_eq!(toast.message, "Add money to your wallet to post this quest.");
}

#[test]
fn test_second_accept_is_reported() {
    let mut market = marketplace();
    market.accept_quest(0).unwrap();

    let result = market.accept_quest(1);

    assert!(matches!(result, Err(JugaadError::QuestAlreadyActive(_))));
    assert_eq!(market.flow().active().unwrap().title, "Hold Canteen Line Spot");
    assert_eq!(market.notifier().latest().unwrap().title, "Quest In Progress");
}

#[test]
fn test_dismiss_gives_no_refund() {
    let mut market = marketplace();
    market.post_quest(draft(100)).unwrap();
    market.accept_quest(0).unwrap();

    assert!(market.dismiss_active_quest());

    assert_eq!(market.flow().state(), FlowState::Idle);
    assert_eq!(market.store().balance(), 350);
    assert!(!market.dismiss_active_quest());
}

#[test]
fn test_mismatch_shows_no_toast() {
    let mut market = marketplace();
    market.accept_quest(1).unwrap();
    market.open_verification().unwrap();
    for ch in "1111".chars() {
        market.push_code_char(ch);
    }
    let toasts_before = market.notifier().len();

    let outcome = market.verify(Instant::now()).unwrap();

    assert_eq!(outcome, VerifyOutcome::Mismatch);
    assert_eq!(market.notifier().len(), toasts_before);
    assert!(market.flow().has_error(Instant::now()));
}

#[test]
fn test_storage_failure_is_toasted() {
    let storage = FlakyStorage::default();
    let store = LedgerStore::load(storage.clone()).unwrap();
    let mut market = Marketplace::new(store, ActiveQuestFlow::new(), Toasts::default(), 10);

    storage.failing.store(true, Ordering::SeqCst);
    let result = market.add_money(10);

    assert!(matches!(result, Err(JugaadError::StorageLock)));
    let toast = market.notifier().latest().unwrap();
    assert_eq!(toast.kind, ToastKind::Error);
    assert_eq!(toast.title, "Storage Error");
}

fn flaky_marketplace() -> (FlakyStorage, Marketplace<FlakyStorage, Toasts>) {
    let storage = FlakyStorage::default();
    let store = LedgerStore::load(storage.clone()).unwrap();
    (storage.clone(), Marketplace::new(store, ActiveQuestFlow::new(), Toasts::default(), 10))
}

fn stored_quest_count(storage: &FlakyStorage) -> usize {
    let raw = storage.get_item(QUESTS_KEY).unwrap().unwrap();
    serde_json::from_str::<Vec<serde_json::Value>>(&raw).unwrap().len()
}

#[test]
fn test_storage_failure_while_posting() {
    let (storage, mut market) = flaky_marketplace();

    storage.failing.store(true, Ordering::SeqCst);
    let result = market.post_quest(draft(120));

    assert!(matches!(result, Err(JugaadError::StorageLock)));
    assert_eq!(market.notifier().latest().unwrap().title, "Storage Error");
    assert_eq!(market.active_tab(), Tab::Post);
    assert_eq!(market.store().balance(), 330);
    assert_eq!(market.store().quests().len(), 5);
    // Nothing reached storage
    assert_eq!(storage.get_item(BALANCE_KEY).unwrap().as_deref(), Some("450"));
    assert_eq!(stored_quest_count(&storage), 4);

    storage.failing.store(false, Ordering::SeqCst);
    market.add_money(30).unwrap();

    assert_eq!(storage.get_item(BALANCE_KEY).unwrap().as_deref(), Some("360"));
    assert_eq!(stored_quest_count(&storage), 5);
    let history = storage.get_item(TRANSACTIONS_KEY).unwrap().unwrap();
    assert!(history.contains("Escrow Hold: Return Library Books"));
}

#[test]
fn test_storage_failure_during_payout() {
    let (storage, mut market) = flaky_marketplace();
    market.accept_quest(1).unwrap();
    market.open_verification().unwrap();
    for ch in "5678".chars() {
        market.push_code_char(ch);
    }

    storage.failing.store(true, Ordering::SeqCst);
    let result = market.verify(Instant::now());

    assert!(matches!(result, Err(JugaadError::StorageLock)));
    assert_eq!(market.notifier().latest().unwrap().title, "Storage Error");
    // Code matched, so the quest is finished and the credit stays in memory
    assert_eq!(market.flow().state(), FlowState::Idle);
    assert_eq!(market.store().balance(), 700);
    assert_eq!(storage.get_item(BALANCE_KEY).unwrap().as_deref(), Some("450"));
    assert!(market.store().is_out_of_sync());

    storage.failing.store(false, Ordering::SeqCst);
    market.withdraw(100).unwrap();

    assert_eq!(storage.get_item(BALANCE_KEY).unwrap().as_deref(), Some("600"));
    let history = storage.get_item(TRANSACTIONS_KEY).unwrap().unwrap();
    assert!(history.contains("Quest Reward: Deliver Lab Coat ASAP"));
    assert!(!market.store().is_out_of_sync());
}

#[test]
fn test_housekeeping_expires_toasts() {
    let store = LedgerStore::load(MemoryStorage::new()).unwrap();
    let mut market = Marketplace::new(
        store,
        ActiveQuestFlow::new(),
        Toasts::new(std::time::Duration::from_millis(100)),
        7185,
    );

    market.add_money(50).unwrap();
    let shown = market.notifier().latest().unwrap().shown_at;

    assert!(!market.housekeeping(shown + std::time::Duration::from_millis(10)));
    assert!(market.housekeeping(shown + std::time::Duration::from_millis(150)));
    assert!(market.notifier().is_empty());
}
