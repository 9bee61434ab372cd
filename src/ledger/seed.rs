// Starting dataset for a device with nothing in storage

use super::{Amount, Quest, Transaction, TransactionKind, TransactionStatus, Urgency};

pub const SEED_BALANCE: Amount = 450;

fn quest(
    title: &str,
    description: &str,
    reward: Amount,
    xp: u32,
    urgency: Urgency,
    deadline: &str,
    location: &str,
    otp: &str,
) -> Quest {
    Quest {
        title: title.to_string(),
        description: description.to_string(),
        reward,
        xp,
        urgency,
        deadline: deadline.to_string(),
        location: Some(location.to_string()),
        highlighted: None,
        is_my_quest: None,
        otp: otp.to_string(),
    }
}

pub fn seed_quests() -> Vec<Quest> {
    let mut tutoring = quest(
        "Tutoring Session: Calculus II",
        "2-hour session to prep for midterm exam.",
        600,
        200,
        Urgency::Low,
        "Tomorrow, 5 PM",
        "Library",
        "9012",
    );
    tutoring.highlighted = Some(true);

    vec![
        quest(
            "Hold Canteen Line Spot",
            "Stand in the lunch queue for me for 20 mins.",
            150,
            50,
            Urgency::Medium,
            "Today, 2 PM",
            "Main Canteen",
            "1234",
        ),
        quest(
            "Deliver Lab Coat ASAP",
            "Forgot my coat at Hostel 4. Need it at Chem Lab now!",
            250,
            75,
            Urgency::Urgent,
            "In 30 Mins",
            "Hostel 4 → Chem Lab",
            "5678",
        ),
        tutoring,
        quest(
            "Print Assignment",
            "Print 10 pages and deliver to Block A, Room 204.",
            100,
            30,
            Urgency::Medium,
            "Today, 4 PM",
            "Block A",
            "3456",
        ),
    ]
}

pub fn seed_transactions() -> Vec<Transaction> {
    vec![Transaction {
        id: "TXN-1021".to_string(),
        kind: TransactionKind::Credit,
        description: "Welcome Bonus".to_string(),
        amount: 50,
        status: TransactionStatus::Success,
        date: "Joined".to_string(),
    }]
}
