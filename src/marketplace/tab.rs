#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tab {
    Post,   // Post a quest
    Find,   // Browse and accept quests
    Wallet, // Balance and history
}

impl Tab {
    pub fn all() -> &'static [Tab] {
        &[Tab::Post, Tab::Find, Tab::Wallet]
    }

    pub fn title(&self) -> &'static str {
        match self {
            Tab::Post => "Post Quest",
            Tab::Find => "Find Quests",
            Tab::Wallet => "Wallet",
        }
    }

    pub fn index(&self) -> usize {
        Self::all().iter().position(|t| t == self).unwrap_or(0)
    }

    pub fn next(&self) -> Tab {
        let all = Self::all();
        all[(self.index() + 1) % all.len()]
    }

    pub fn prev(&self) -> Tab {
        let all = Self::all();
        all[(self.index() + all.len() - 1) % all.len()]
    }
}
