use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use crate::active_quest::ActiveQuest;
use crate::error::{JugaadError, Result};
use crate::ledger::{
    is_well_formed_otp, seed_quests, QuestDraft, TransactionKind, Urgency, SEED_BALANCE,
};
use crate::storage::{KeyValueStorage, MemoryStorage, BALANCE_KEY, QUESTS_KEY, TRANSACTIONS_KEY};
use super::LedgerStore;

fn draft(title: &str, reward: u64) -> QuestDraft {
    QuestDraft {
        title: title.to_string(),
        description: "Pick up two samosas from the night canteen.".to_string(),
        reward,
        xp: 40,
        urgency: Urgency::Urgent,
        deadline: "Tonight, 11 PM".to_string(),
        location: Some("Night Canteen".to_string()),
        highlighted: None,
        is_my_quest: Some(true),
    }
}

/// Refuses writes to one key while `failing` is set
#[derive(Debug, Clone)]
struct KeyFailingStorage {
    inner: MemoryStorage,
    key: &'static str,
    failing: Arc<AtomicBool>,
}

impl KeyFailingStorage {
    fn new(key: &'static str) -> Self {
        Self {
            inner: MemoryStorage::new(),
            key,
            failing: Arc::new(AtomicBool::new(false)),
        }
    }
}

impl KeyValueStorage for KeyFailingStorage {
    fn get_item(&self, key: &str) -> Result<Option<String>> {
        self.inner.get_item(key)
    }

    fn set_item(&self, key: &str, value: &str) -> Result<()> {
        if key == self.key && self.failing.load(Ordering::SeqCst) {
            return Err(JugaadError::StorageLock);
        }
        self.inner.set_item(key, value)
    }
}

fn store_with_balance(balance: u64) -> LedgerStore<MemoryStorage> {
    let storage = MemoryStorage::with_items([(BALANCE_KEY, balance.to_string())]);
    LedgerStore::load(storage).unwrap()
}

#[test]
fn test_empty_storage_loads_seed_and_writes_it_back() {
    let storage = MemoryStorage::new();
    let store = LedgerStore::load(storage.clone()).unwrap();

    assert_eq!(store.balance(), SEED_BALANCE);
    assert_eq!(store.quests().len(), 4);
    assert_eq!(store.transactions().len(), 1);
    assert_eq!(store.transactions()[0].id, "TXN-1021");

    assert_eq!(storage.get_item(BALANCE_KEY).unwrap().as_deref(), Some("450"));
    assert!(storage.get_item(QUESTS_KEY).unwrap().is_some());
    assert!(storage.get_item(TRANSACTIONS_KEY).unwrap().is_some());
}

#[test]
fn test_post_quest_holds_reward_in_escrow() {
    let mut store = LedgerStore::load(MemoryStorage::new()).unwrap();

    let quest = store.add_quest(draft("Samosa Run", 200)).unwrap();

    assert_eq!(store.balance(), 250);
    assert!(is_well_formed_otp(&quest.otp));
    assert_eq!(store.quests()[0], quest);
    assert_eq!(store.quests().len(), 5);

    let hold = &store.transactions()[0];
    assert_eq!(hold.kind, TransactionKind::Debit);
    assert_eq!(hold.amount, 200);
    assert_eq!(hold.description, "Escrow Hold: Samosa Run");
    assert_eq!(store.transactions().len(), 2);
}

#[test]
fn test_post_quest_over_balance_changes_nothing() {
    let storage = MemoryStorage::new();
    let mut store = LedgerStore::load(storage.clone()).unwrap();
    let before_quests = storage.get_item(QUESTS_KEY).unwrap();

    let result = store.add_quest(draft("Too Pricey", 451));

    assert!(matches!(
        result,
        Err(JugaadError::InsufficientBalance { required: 451, available: 450 })
    ));
    assert_eq!(store.balance(), 450);
    assert_eq!(store.quests().len(), 4);
    assert_eq!(store.transactions().len(), 1);
    assert_eq!(storage.get_item(QUESTS_KEY).unwrap(), before_quests);
}

#[test]
fn test_post_quest_for_exact_balance_is_allowed() {
    let mut store = store_with_balance(100);
    store.add_quest(draft("All In", 100)).unwrap();
    assert_eq!(store.balance(), 0);
}

#[test]
fn test_accept_is_a_projection_without_balance_effect() {
    let store = LedgerStore::load(MemoryStorage::new()).unwrap();

    let active = store.accept_quest(1, 7185).unwrap();

    assert_eq!(active.title, "Deliver Lab Coat ASAP");
    assert_eq!(active.otp, "5678");
    assert_eq!(active.reward, 250);
    assert_eq!(active.duration, 7185);
    assert_eq!(store.balance(), 450);
    assert_eq!(store.transactions().len(), 1);
}

#[test]
fn test_accept_unknown_index() {
    let store = LedgerStore::load(MemoryStorage::new()).unwrap();
    assert!(matches!(store.accept_quest(9, 10), Err(JugaadError::QuestNotFound(9))));
}

#[test]
fn test_complete_credits_reward() {
    let mut store = LedgerStore::load(MemoryStorage::new()).unwrap();
    let active = ActiveQuest::from_quest(&seed_quests()[1], 10);

    let credit = store.complete_active_quest(active).unwrap();

    assert_eq!(store.balance(), 700);
    assert_eq!(credit.kind, TransactionKind::Credit);
    assert_eq!(credit.description, "Quest Reward: Deliver Lab Coat ASAP");
    assert_eq!(store.transactions()[0], credit);
}

#[test]
fn test_withdraw_over_balance_is_rejected() {
    let mut store = store_with_balance(100);

    let result = store.withdraw(150);

    assert!(matches!(result, Err(JugaadError::InsufficientFunds { requested: 150, available: 100 })));
    assert_eq!(store.balance(), 100);
    assert_eq!(store.transactions().len(), 1);
}

#[test]
fn test_withdraw_debits_and_logs() {
    let mut store = store_with_balance(100);

    let debit = store.withdraw(60).unwrap();

    assert_eq!(store.balance(), 40);
    assert_eq!(debit.description, "Withdrawal to Bank");
    assert_eq!(debit.kind, TransactionKind::Debit);
}

#[test]
fn test_add_money_credits() {
    let storage = MemoryStorage::with_items([(BALANCE_KEY, "100")]);
    let mut store = LedgerStore::load(storage.clone()).unwrap();

    let credit = store.add_money(50).unwrap();

    assert_eq!(store.balance(), 150);
    assert_eq!(credit.description, "Added to Wallet");
    assert_eq!(credit.amount, 50);
    assert_eq!(storage.get_item(BALANCE_KEY).unwrap().as_deref(), Some("150"));
}

#[test]
fn test_state_round_trips_through_storage() {
    let storage = MemoryStorage::new();
    let mut store = LedgerStore::load(storage.clone()).unwrap();
    store.add_quest(draft("Samosa Run", 120)).unwrap();
    store.add_money(30).unwrap();
    store.withdraw(10).unwrap();

    let reloaded = LedgerStore::load(storage).unwrap();

    assert_eq!(reloaded.balance(), store.balance());
    assert_eq!(reloaded.quests(), store.quests());
    assert_eq!(reloaded.transactions(), store.transactions());
}

#[test]
fn test_transaction_ids_are_unique() {
    let mut store = store_with_balance(0);
    for _ in 0..50 {
        store.add_money(1).unwrap();
    }

    let mut ids: Vec<_> = store.transactions().iter().map(|t| t.id.clone()).collect();
    ids.sort();
    ids.dedup();
    assert_eq!(ids.len(), 51);
    assert!(ids.iter().all(|id| id.starts_with("TXN-")));
}

#[test]
fn test_web_storage_dump_loads() {
    let quests = r#"[{"title":"Print Assignment","description":"Print 10 pages","reward":100,"xp":30,"urgency":"medium","deadline":"Today, 4 PM","location":"Block A","isMyQuest":true,"otp":"3456"}]"#;
    let transactions = r#"[{"id":"TXN-1021","type":"credit","description":"Welcome Bonus","amount":50,"status":"success","date":"Joined"}]"#;
    let storage = MemoryStorage::with_items([
        (QUESTS_KEY, quests),
        (BALANCE_KEY, "320"),
        (TRANSACTIONS_KEY, transactions),
    ]);

    let store = LedgerStore::load(storage).unwrap();

    assert_eq!(store.balance(), 320);
    assert_eq!(store.quests()[0].is_my_quest, Some(true));
    assert_eq!(store.quests()[0].urgency, Urgency::Medium);
    assert_eq!(store.transactions()[0].kind, TransactionKind::Credit);
}

#[test]
fn test_corrupt_records_fail_load_with_key() {
    let storage = MemoryStorage::with_items([(BALANCE_KEY, "lots")]);
    match LedgerStore::load(storage) {
        Err(JugaadError::CorruptRecord { key, .. }) => assert_eq!(key, BALANCE_KEY),
        other => panic!("expected corrupt record, got {:?}", other.map(|s| s.balance())),
    }

    let storage = MemoryStorage::with_items([(QUESTS_KEY, "{not json")]);
    assert!(matches!(
        LedgerStore::load(storage),
        Err(JugaadError::CorruptRecord { ref key, .. }) if key == QUESTS_KEY
    ));
}

#[test]
fn test_failed_catalog_write_is_repaired_by_next_mutation() {
    let storage = KeyFailingStorage::new(QUESTS_KEY);
    let mut store = LedgerStore::load(storage.clone()).unwrap();

    storage.failing.store(true, Ordering::SeqCst);
    assert!(store.add_quest(draft("Lost Umbrella", 200)).is_err());
    assert!(store.is_out_of_sync());
    assert_eq!(store.quests().len(), 5);

    storage.failing.store(false, Ordering::SeqCst);
    store.add_money(1).unwrap();
    assert!(!store.is_out_of_sync());

    let reloaded = LedgerStore::load(storage.inner.clone()).unwrap();
    assert_eq!(reloaded.balance(), 251);
    assert_eq!(reloaded.quests().len(), 5);
    assert_eq!(reloaded.quests()[0].title, "Lost Umbrella");
    assert!(reloaded
        .transactions()
        .iter()
        .any(|t| t.description == "Escrow Hold: Lost Umbrella"));
}

#[test]
fn test_failed_write_keeps_memory_state() {
    let storage = KeyFailingStorage::new(BALANCE_KEY);
    let mut store = LedgerStore::load(storage.clone()).unwrap();

    storage.failing.store(true, Ordering::SeqCst);
    assert!(store.withdraw(50).is_err());

    assert_eq!(store.balance(), 400);
    assert_eq!(store.transactions()[0].description, "Withdrawal to Bank");
    assert_eq!(storage.get_item(BALANCE_KEY).unwrap().as_deref(), Some("450"));
    assert!(store.is_out_of_sync());
}

#[test]
fn test_integral_float_balance_loads() {
    let store = LedgerStore::load(MemoryStorage::with_items([(BALANCE_KEY, "450.0")])).unwrap();
    assert_eq!(store.balance(), 450);

    let fractional = MemoryStorage::with_items([(BALANCE_KEY, "320.5")]);
    assert!(matches!(
        LedgerStore::load(fractional),
        Err(JugaadError::CorruptRecord { ref key, .. }) if key == BALANCE_KEY
    ));
}
