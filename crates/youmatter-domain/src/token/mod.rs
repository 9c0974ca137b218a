use chrono::{DateTime, Utc};
use rand::Rng;
use serde::{Deserialize, Serialize};
use std::collections::VecDeque;

use crate::shared::TokenId;

/// A milestone token. Minting is simulated: the transaction hash is random.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RewardToken {
    pub id: TokenId,
    pub title: String,
    pub description: String,
    pub points: u64,
    pub minted_at: DateTime<Utc>,
    pub tx_hash: String,
}

#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TokenWallet {
    tokens: VecDeque<RewardToken>,
    last_tx_hash: Option<String>,
}

impl TokenWallet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn mint(&mut self, title: String, description: String, points: u64) -> &RewardToken {
        let minted_at = Utc::now();
        let tx_hash = simulated_tx_hash(minted_at);
        self.last_tx_hash = Some(tx_hash.clone());
        self.tokens.push_front(RewardToken {
            id: TokenId::new(),
            title,
            description,
            points,
            minted_at,
            tx_hash,
        });
        &self.tokens[0]
    }

    pub fn clear(&mut self) {
        self.tokens.clear();
        self.last_tx_hash = None;
    }

    pub fn tokens(&self) -> impl Iterator<Item = &RewardToken> {
        self.tokens.iter()
    }

    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    pub fn last_tx_hash(&self) -> Option<&str> {
        self.last_tx_hash.as_deref()
    }
}

fn simulated_tx_hash(at: DateTime<Utc>) -> String {
    let nonce: u64 = rand::thread_rng().gen();
    format!("0x{:016x}{:x}", nonce, at.timestamp_millis())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mint_records_last_hash() {
        let mut wallet = TokenWallet::new();
        let token = wallet
            .mint("Milestone Token".to_string(), "Tokenized 500 pts milestone".to_string(), 500)
            .clone();

        assert!(token.tx_hash.starts_with("0x"));
        assert_eq!(wallet.last_tx_hash(), Some(token.tx_hash.as_str()));
        assert_eq!(wallet.len(), 1);
    }

    #[test]
    fn test_clear_forgets_hash() {
        let mut wallet = TokenWallet::new();
        wallet.mint("a".to_string(), String::new(), 1);
        wallet.clear();

        assert!(wallet.is_empty());
        assert!(wallet.last_tx_hash().is_none());
    }
}
