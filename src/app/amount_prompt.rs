use crate::ledger::Amount;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WalletAction {
    Withdraw,
    AddMoney,
}

impl WalletAction {
    pub fn title(&self) -> &'static str {
        match self {
            WalletAction::Withdraw => "Withdraw to Bank",
            WalletAction::AddMoney => "Add Money",
        }
    }
}

/// Numeric amount entry for the wallet actions
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AmountPrompt {
    pub action: WalletAction,
    pub input: String,
    pub error: Option<String>,
}

impl AmountPrompt {
    pub fn new(action: WalletAction) -> Self {
        Self {
            action,
            input: String::new(),
            error: None,
        }
    }

    pub fn push(&mut self, ch: char) {
        if ch.is_ascii_digit() {
            self.input.push(ch);
            self.error = None;
        }
    }

    pub fn backspace(&mut self) {
        self.input.pop();
    }

    pub fn amount(&self) -> Result<Amount, String> {
        match self.input.parse::<Amount>() {
            Ok(0) => Err("Enter an amount above ₹0".to_string()),
            Ok(amount) => Ok(amount),
            Err(_) if self.input.is_empty() => Err("Enter an amount above ₹0".to_string()),
            Err(_) => Err("Amount is too large".to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_only_digits_are_taken() {
        let mut prompt = AmountPrompt::new(WalletAction::AddMoney);
        for ch in "5a0".chars() {
            prompt.push(ch);
        }
        assert_eq!(prompt.amount(), Ok(50));
    }

    #[test]
    fn test_empty_and_zero_are_rejected() {
        let mut prompt = AmountPrompt::new(WalletAction::Withdraw);
        assert!(prompt.amount().is_err());
        prompt.push('0');
        assert!(prompt.amount().is_err());
    }
}
