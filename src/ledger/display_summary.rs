use super::Quest;

impl Quest {
    pub fn display_summary(&self) -> String {
        let location = self
            .location
            .as_deref()
            .map(|l| format!(" @ {}", l))
            .unwrap_or_default();
        let star = if self.highlighted.unwrap_or(false) { "★ " } else { "" };

        format!(
            "{}[{}] {} - ₹{} / {} XP ({}){}",
            star,
            self.urgency.as_str(),
            self.title,
            self.reward,
            self.xp,
            self.deadline,
            location
        )
    }
}
