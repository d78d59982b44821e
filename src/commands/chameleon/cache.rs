use std::{
    collections::{hash_map::Entry, HashMap},
    sync::Arc,
};

use poise::serenity_prelude::ChannelId;
use tokio::sync::{Mutex, RwLock};

use super::ChannelGame;

pub type SharedGame = Arc<Mutex<ChannelGame>>;

/// The game running in each channel, at most one per channel.
#[derive(Clone, Debug, Default)]
pub struct GamesCache(Arc<RwLock<HashMap<ChannelId, SharedGame>>>);

impl GamesCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn get(&self, channel_id: ChannelId) -> Option<SharedGame> {
        let guard = self.0.read().await;
        guard.get(&channel_id).cloned()
    }

    pub async fn channel_is_locked(&self, channel_id: ChannelId) -> bool {
        self.0.read().await.contains_key(&channel_id)
    }

    /// Stores a new game, or hands it back if the channel already has one.
    pub async fn insert(&self, game: ChannelGame) -> Result<SharedGame, ChannelGame> {
        let channel_id = game.session().channel_id();
        let mut guard = self.0.write().await;

        match guard.entry(channel_id) {
            Entry::Occupied(_) => Err(game),
            Entry::Vacant(entry) => Ok(entry.insert(Arc::new(Mutex::new(game))).clone()),
        }
    }

    /// Frees the channel if `game` is still the one running there.
    ///
    /// A handle to a game that already finished never removes its successor.
    pub async fn remove_game(&self, channel_id: ChannelId, game: &SharedGame) -> bool {
        let mut guard = self.0.write().await;

        match guard.entry(channel_id) {
            Entry::Occupied(entry) if Arc::ptr_eq(entry.get(), game) => {
                entry.remove();
                true
            }
            _ => false,
        }
    }

    pub async fn len(&self) -> usize {
        self.0.read().await.len()
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use poise::serenity_prelude::{ChannelId, UserId};

    use super::GamesCache;
    use crate::{commands::chameleon::ChannelGame, games::chameleon::TieBreak};

    fn game(channel: u64) -> ChannelGame {
        ChannelGame::new(
            ChannelId::new(channel),
            UserId::new(1),
            [UserId::new(2), UserId::new(3)],
            TieBreak::default(),
        )
    }

    #[tokio::test]
    async fn one_game_per_channel() {
        let cache = GamesCache::new();

        cache.insert(game(5)).await.expect("channel is free");
        let rejected = cache.insert(game(5)).await.expect_err("channel is taken");

        assert_eq!(rejected.session().channel_id(), ChannelId::new(5));
        assert_eq!(cache.len().await, 1);

        cache.insert(game(6)).await.expect("other channel is free");
        assert_eq!(cache.len().await, 2);
    }

    #[tokio::test]
    async fn removed_games_free_the_channel() {
        let cache = GamesCache::new();
        let inserted = cache.insert(game(5)).await.expect("channel is free");

        assert!(cache.channel_is_locked(ChannelId::new(5)).await);
        assert!(cache.remove_game(ChannelId::new(5), &inserted).await);
        assert!(!cache.channel_is_locked(ChannelId::new(5)).await);
        assert!(!cache.remove_game(ChannelId::new(5), &inserted).await);

        cache.insert(game(5)).await.expect("channel is free again");
    }

    #[tokio::test]
    async fn finished_game_cannot_remove_its_successor() {
        let cache = GamesCache::new();
        let first = cache.insert(game(5)).await.expect("channel is free");

        first.lock().await.session_mut().end();
        assert!(cache.remove_game(ChannelId::new(5), &first).await);

        let second = cache.insert(game(5)).await.expect("channel is free again");

        assert!(first.lock().await.state().is_ended());
        assert!(!cache.remove_game(ChannelId::new(5), &first).await);
        assert!(cache.channel_is_locked(ChannelId::new(5)).await);

        let running = cache.get(ChannelId::new(5)).await.expect("second game is running");
        assert!(Arc::ptr_eq(&running, &second));
    }

    #[tokio::test]
    async fn handles_share_one_game() {
        let cache = GamesCache::new();
        let inserted = cache.insert(game(5)).await.expect("channel is free");

        inserted
            .lock()
            .await
            .session_mut()
            .add_clue(UserId::new(2), "hello")
            .expect("player");

        let fetched = cache.get(ChannelId::new(5)).await.expect("game exists");
        assert_eq!(fetched.lock().await.session().clue(&UserId::new(2)), Some("hello"));
    }
}
