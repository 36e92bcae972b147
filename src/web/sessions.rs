//! Game session registry for the web front end.

use crate::games::tictactoe::{Game, TurnEvent};
use std::collections::{HashMap, VecDeque};
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use tracing::{debug, info, instrument, warn};

/// Unique identifier for a game session.
pub type GameId = String;

/// Longest accepted game id.
pub const MAX_GAME_ID_LEN: usize = 64;

/// Checks that `id` is 1-64 characters of `[A-Za-z0-9_-]`.
///
/// Ids end up in page URLs and `Location` headers verbatim, so anything
/// needing percent-encoding is refused.
pub fn is_valid_game_id(id: &str) -> bool {
    !id.is_empty()
        && id.len() <= MAX_GAME_ID_LEN
        && id
            .bytes()
            .all(|b| b.is_ascii_alphanumeric() || b == b'_' || b == b'-')
}

/// One independent game plus the last thing that happened in it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameSession {
    /// Session ID.
    pub id: GameId,
    /// The game state.
    pub game: Game,
    /// Most recent move or restart result, shown as the page status.
    pub last_event: Option<TurnEvent>,
}

impl GameSession {
    /// Creates a session around a freshly started game.
    pub fn new(id: GameId, game: Game) -> Self {
        Self {
            id,
            game,
            last_event: None,
        }
    }

    /// Status line for the page.
    pub fn message(&self) -> String {
        match &self.last_event {
            Some(event) => event.to_string(),
            None => self.game.status_message(),
        }
    }
}

#[derive(Debug, Default)]
struct Registry {
    games: HashMap<GameId, GameSession>,
    /// Ids in creation order, oldest first.
    order: VecDeque<GameId>,
}

impl Registry {
    /// Stores `session`, evicting the oldest games beyond `capacity`.
    fn insert(&mut self, session: GameSession, capacity: usize) {
        let id = session.id.clone();
        if self.games.insert(id.clone(), session).is_some() {
            return;
        }
        self.order.push_back(id);
        while self.games.len() > capacity {
            let Some(oldest) = self.order.pop_front() else {
                break;
            };
            self.games.remove(&oldest);
            warn!(game_id = %oldest, capacity, "Evicted oldest game");
        }
    }
}

/// Manages all game sessions.
///
/// Each game is updated under the registry lock, so one request's move is
/// applied in full before the next one is looked at. At most `max_games`
/// sessions are kept; creating one more drops the oldest.
#[derive(Debug, Clone)]
pub struct SessionManager {
    registry: Arc<Mutex<Registry>>,
    next_id: Arc<AtomicU64>,
    default_players: Arc<(String, String)>,
    max_games: usize,
}

impl SessionManager {
    /// Creates an empty registry; new games use the given names.
    #[instrument]
    pub fn new(player_x: String, player_o: String, max_games: usize) -> Self {
        info!("Creating session manager");
        Self {
            registry: Arc::new(Mutex::new(Registry::default())),
            next_id: Arc::new(AtomicU64::new(1)),
            default_players: Arc::new((player_x, player_o)),
            max_games: max_games.max(1),
        }
    }

    fn lock(&self) -> MutexGuard<'_, Registry> {
        self.registry.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Starts a game under `id`, replacing any game already there.
    #[instrument(skip(self))]
    pub fn create(&self, id: Option<GameId>, player_x: &str, player_o: &str) -> GameSession {
        let id = id.unwrap_or_else(|| self.generate_id());
        let session = GameSession::new(id.clone(), Game::start(player_x, player_o));
        self.lock().insert(session.clone(), self.max_games);
        info!(game_id = %id, "Created game session");
        session
    }

    /// Returns a snapshot of the session, starting one with the default names if needed.
    #[instrument(skip(self))]
    pub fn get_or_create(&self, id: &str) -> GameSession {
        let mut registry = self.lock();
        if let Some(session) = registry.games.get(id) {
            return session.clone();
        }
        info!(game_id = id, "Starting game on first visit");
        let (player_x, player_o) = &*self.default_players;
        let session = GameSession::new(id.to_string(), Game::start(player_x, player_o));
        registry.insert(session.clone(), self.max_games);
        session
    }

    /// Gets a snapshot of a session by ID.
    #[instrument(skip(self))]
    pub fn get(&self, id: &str) -> Option<GameSession> {
        let session = self.lock().games.get(id).cloned();
        if session.is_none() {
            debug!(game_id = id, "Session not found");
        }
        session
    }

    /// Runs `f` against the stored session and returns its result with a snapshot.
    #[instrument(skip(self, f))]
    pub fn update<R>(
        &self,
        id: &str,
        f: impl FnOnce(&mut GameSession) -> R,
    ) -> Option<(R, GameSession)> {
        let mut registry = self.lock();
        let session = registry.games.get_mut(id)?;
        let result = f(session);
        debug!(game_id = id, "Session updated");
        Some((result, session.clone()))
    }

    /// Lists all session IDs, sorted.
    #[instrument(skip(self))]
    pub fn list(&self) -> Vec<GameId> {
        let mut ids: Vec<_> = self.lock().games.keys().cloned().collect();
        ids.sort();
        debug!(count = ids.len(), "Listed sessions");
        ids
    }

    /// Default names for new games, X first.
    pub fn default_players(&self) -> (&str, &str) {
        (&self.default_players.0, &self.default_players.1)
    }

    fn generate_id(&self) -> GameId {
        loop {
            let n = self.next_id.fetch_add(1, Ordering::Relaxed);
            let id = format!("game-{}", n);
            if !self.lock().games.contains_key(&id) {
                return id;
            }
        }
    }
}
