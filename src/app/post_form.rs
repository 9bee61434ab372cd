use ratatui::crossterm::event::KeyCode;

use crate::ledger::{Amount, QuestDraft, Urgency};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PostStep {
    Title,
    Description,
    Reward,
    Xp,
    Urgency,
    Deadline,
    Location,
    Confirm,
}

impl PostStep {
    pub fn label(&self) -> &'static str {
        match self {
            PostStep::Title => "Title",
            PostStep::Description => "Description",
            PostStep::Reward => "Reward (₹)",
            PostStep::Xp => "XP",
            PostStep::Urgency => "Urgency",
            PostStep::Deadline => "Deadline",
            PostStep::Location => "Location (optional)",
            PostStep::Confirm => "Confirm",
        }
    }

    fn next(&self) -> PostStep {
        match self {
            PostStep::Title => PostStep::Description,
            PostStep::Description => PostStep::Reward,
            PostStep::Reward => PostStep::Xp,
            PostStep::Xp => PostStep::Urgency,
            PostStep::Urgency => PostStep::Deadline,
            PostStep::Deadline => PostStep::Location,
            PostStep::Location | PostStep::Confirm => PostStep::Confirm,
        }
    }

    fn prev(&self) -> PostStep {
        match self {
            PostStep::Title | PostStep::Description => PostStep::Title,
            PostStep::Reward => PostStep::Description,
            PostStep::Xp => PostStep::Reward,
            PostStep::Urgency => PostStep::Xp,
            PostStep::Deadline => PostStep::Urgency,
            PostStep::Location => PostStep::Deadline,
            PostStep::Confirm => PostStep::Location,
        }
    }

    fn is_numeric(&self) -> bool {
        matches!(self, PostStep::Reward | PostStep::Xp)
    }
}

#[derive(Debug, PartialEq, Eq)]
pub enum FormAction {
    Consumed,
    Submit(QuestDraft),
    /// Key means nothing to the form; let the app have it
    Unhandled,
}

/// Step-by-step quest posting form
#[derive(Debug, Clone)]
pub struct PostForm {
    pub step: PostStep,
    pub title: String,
    pub description: String,
    pub reward: String,
    pub xp: String,
    pub urgency_index: usize,
    pub deadline: String,
    pub location: String,
    pub error: Option<String>,
}

impl Default for PostForm {
    fn default() -> Self {
        Self {
            step: PostStep::Title,
            title: String::new(),
            description: String::new(),
            reward: String::new(),
            xp: String::new(),
            urgency_index: 1, // medium
            deadline: String::new(),
            location: String::new(),
            error: None,
        }
    }
}

impl PostForm {
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    pub fn urgency(&self) -> Urgency {
        Urgency::all()
            .get(self.urgency_index)
            .copied()
            .unwrap_or_default()
    }

    fn current_field(&mut self) -> Option<&mut String> {
        match self.step {
            PostStep::Title => Some(&mut self.title),
            PostStep::Description => Some(&mut self.description),
            PostStep::Reward => Some(&mut self.reward),
            PostStep::Xp => Some(&mut self.xp),
            PostStep::Deadline => Some(&mut self.deadline),
            PostStep::Location => Some(&mut self.location),
            PostStep::Urgency | PostStep::Confirm => None,
        }
    }

    pub fn handle_key(&mut self, key_code: KeyCode) -> FormAction {
        match key_code {
            KeyCode::Enter => self.advance(),
            KeyCode::Esc => {
                if self.step == PostStep::Title {
                    return FormAction::Consumed;
                }
                self.error = None;
                self.step = self.step.prev();
                FormAction::Consumed
            }
            KeyCode::Backspace => {
                if let Some(field) = self.current_field() {
                    field.pop();
                }
                FormAction::Consumed
            }
            KeyCode::Up | KeyCode::Left if self.step == PostStep::Urgency => {
                self.urgency_index = self.urgency_index.saturating_sub(1);
                FormAction::Consumed
            }
            KeyCode::Down | KeyCode::Right if self.step == PostStep::Urgency => {
                if self.urgency_index + 1 < Urgency::all().len() {
                    self.urgency_index += 1;
                }
                FormAction::Consumed
            }
            KeyCode::Char('y') if self.step == PostStep::Confirm => self.advance(),
            KeyCode::Char('n') if self.step == PostStep::Confirm => {
                self.step = PostStep::Title;
                FormAction::Consumed
            }
            KeyCode::Char(ch) => {
                let numeric = self.step.is_numeric();
                match self.current_field() {
                    Some(field) if !numeric || ch.is_ascii_digit() => {
                        field.push(ch);
                        FormAction::Consumed
                    }
                    // Letters on the picker and confirm steps are swallowed
                    _ => FormAction::Consumed,
                }
            }
            _ => FormAction::Unhandled,
        }
    }

    fn advance(&mut self) -> FormAction {
        if let Err(message) = self.validate_step() {
            self.error = Some(message);
            return FormAction::Consumed;
        }
        self.error = None;

        if self.step == PostStep::Confirm {
            return match self.to_draft() {
                Ok(draft) => FormAction::Submit(draft),
                Err(message) => {
                    self.error = Some(message);
                    FormAction::Consumed
                }
            };
        }

        self.step = self.step.next();
        FormAction::Consumed
    }

    fn validate_step(&self) -> Result<(), String> {
        match self.step {
            PostStep::Title if self.title.trim().is_empty() => Err("Title is required".to_string()),
            PostStep::Reward => parse_reward(&self.reward).map(|_| ()),
            PostStep::Deadline if self.deadline.trim().is_empty() => {
                Err("Deadline is required".to_string())
            }
            _ => Ok(()),
        }
    }

    pub fn to_draft(&self) -> Result<QuestDraft, String> {
        if self.title.trim().is_empty() {
            return Err("Title is required".to_string());
        }
        let reward = parse_reward(&self.reward)?;
        let xp = if self.xp.is_empty() {
            0
        } else {
            self.xp.parse::<u32>().map_err(|_| "XP is too large".to_string())?
        };
        let location = self.location.trim();

        Ok(QuestDraft {
            title: self.title.trim().to_string(),
            description: self.description.trim().to_string(),
            reward,
            xp,
            urgency: self.urgency(),
            deadline: self.deadline.trim().to_string(),
            location: (!location.is_empty()).then(|| location.to_string()),
            highlighted: None,
            is_my_quest: Some(true),
        })
    }
}

fn parse_reward(raw: &str) -> Result<Amount, String> {
    if raw.is_empty() {
        return Err("Reward is required".to_string());
    }
    match raw.parse::<Amount>() {
        Ok(0) => Err("Reward must be at least ₹1".to_string()),
        Ok(amount) => Ok(amount),
        Err(_) => Err("Reward is too large".to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn type_text(form: &mut PostForm, text: &str) {
        for ch in text.chars() {
            form.handle_key(KeyCode::Char(ch));
        }
    }

    #[test]
    fn test_full_walkthrough_submits_draft() {
        let mut form = PostForm::default();
        type_text(&mut form, "Fetch Chai");
        form.handle_key(KeyCode::Enter);
        type_text(&mut form, "Two cups, less sugar");
        form.handle_key(KeyCode::Enter);
        type_text(&mut form, "4x0");
        form.handle_key(KeyCode::Enter);
        type_text(&mut form, "15");
        form.handle_key(KeyCode::Enter);
        form.handle_key(KeyCode::Down);
        form.handle_key(KeyCode::Enter);
        type_text(&mut form, "In 15 Mins");
        form.handle_key(KeyCode::Enter);
        form.handle_key(KeyCode::Enter);
        assert_eq!(form.step, PostStep::Confirm);

        match form.handle_key(KeyCode::Char('y')) {
            FormAction::Submit(draft) => {
                assert_eq!(draft.title, "Fetch Chai");
                assert_eq!(draft.reward, 40);
                assert_eq!(draft.xp, 15);
                assert_eq!(draft.urgency, Urgency::Urgent);
                assert_eq!(draft.location, None);
                assert_eq!(draft.is_my_quest, Some(true));
            }
            other => panic!("expected submit, got {:?}", other),
        }
    }

    #[test]
    fn test_empty_title_blocks_next_step() {
        let mut form = PostForm::default();
        form.handle_key(KeyCode::Enter);
        assert_eq!(form.step, PostStep::Title);
        assert_eq!(form.error.as_deref(), Some("Title is required"));
    }

    #[test]
    fn test_zero_reward_is_rejected() {
        let mut form = PostForm {
            step: PostStep::Reward,
            title: "x".to_string(),
            ..PostForm::default()
        };
        type_text(&mut form, "0");
        form.handle_key(KeyCode::Enter);
        assert_eq!(form.step, PostStep::Reward);
        assert_eq!(form.error.as_deref(), Some("Reward must be at least ₹1"));
    }

    #[test]
    fn test_esc_never_leaves_the_form() {
        let mut form = PostForm::default();
        assert_eq!(form.handle_key(KeyCode::Esc), FormAction::Consumed);
        assert_eq!(form.step, PostStep::Title);

        form.step = PostStep::Xp;
        assert_eq!(form.handle_key(KeyCode::Esc), FormAction::Consumed);
        assert_eq!(form.step, PostStep::Reward);
    }

    #[test]
    fn test_letters_on_picker_and_confirm_stay_in_form() {
        let mut form = PostForm {
            step: PostStep::Urgency,
            ..PostForm::default()
        };
        for ch in ['q', 'x', 'v', 'w'] {
            assert_eq!(form.handle_key(KeyCode::Char(ch)), FormAction::Consumed);
        }
        assert_eq!(form.step, PostStep::Urgency);

        form.step = PostStep::Confirm;
        for ch in ['q', 'x', 'v'] {
            assert_eq!(form.handle_key(KeyCode::Char(ch)), FormAction::Consumed);
        }
        assert_eq!(form.step, PostStep::Confirm);
    }
}
