use tweetcast_util::parse_comma_list;

use crate::post::Account;

/// Parse a comma separated account list, like `"alice, bob"`.
/// Whitespace is trimmed, empty items are dropped and order is kept.
pub fn list_accounts(raw: &str) -> Vec<Account> {
    parse_comma_list(raw).into_iter().map(Account::new).collect()
}

/// The configured set of monitored accounts.
#[derive(Debug, Clone, Default)]
pub struct AccountRegistry {
    raw: String,
}

impl AccountRegistry {
    pub fn new(raw: impl Into<String>) -> Self {
        Self { raw: raw.into() }
    }

    pub fn list_accounts(&self) -> Vec<Account> {
        list_accounts(&self.raw)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_list_accounts() {
        let registry = AccountRegistry::new(" 44196397 , elonmusk,, jack ,");
        let accounts = registry.list_accounts();
        assert_eq!(
            accounts,
            [Account::from("44196397"), Account::from("elonmusk"), Account::from("jack")]
        );
    }

    #[test]
    fn test_list_accounts_empty() {
        assert!(AccountRegistry::default().list_accounts().is_empty());
        assert!(list_accounts(" ,  , ").is_empty());
    }
}
