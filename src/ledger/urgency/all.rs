use super::Urgency;

impl Urgency {
    pub fn all() -> &'static [Urgency] {
        &[Urgency::Low, Urgency::Medium, Urgency::Urgent]
    }
}
