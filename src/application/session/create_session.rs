use std::sync::Arc;

use rand::seq::SliceRandom;
use rand::{Rng, RngCore};
use tokio::sync::Mutex;
use uuid::Uuid;

use crate::application::notifications::{message_keys, Notice, Notifier};
use crate::domain::entities::{GameSession, SessionDetails};
use crate::domain::repositories::{RepositoryError, SessionRepository, WordRepository};
use crate::domain::value_objects::{GameType, JoinCode, PlayerCount, PlayerCountError};

/// Create session output
#[derive(Debug, Clone)]
pub struct CreatedSession {
    pub session: GameSession,
    /// Client path to redirect to, `/games/<gametype>/<code>`
    pub path: String,
}

impl CreatedSession {
    pub fn code(&self) -> &JoinCode {
        &self.session.code
    }
}

/// Creates game sessions for the per-game "create" screens.
///
/// One creator stands for one form: while an attempt is outstanding a second
/// call is refused with `CreationError::AttemptInProgress`. The random source
/// is only touched under the same lock.
pub struct SessionCreator<S: SessionRepository, W: WordRepository, R: RngCore + Send> {
    session_repo: Arc<S>,
    word_repo: Arc<W>,
    notifier: Arc<dyn Notifier>,
    rng: Mutex<R>,
}

impl<S: SessionRepository, W: WordRepository, R: RngCore + Send> SessionCreator<S, W, R> {
    pub fn new(
        session_repo: Arc<S>,
        word_repo: Arc<W>,
        notifier: Arc<dyn Notifier>,
        rng: R,
    ) -> Self {
        Self {
            session_repo,
            word_repo,
            notifier,
            rng: Mutex::new(rng),
        }
    }

    /// Whether an attempt is currently outstanding
    pub fn is_busy(&self) -> bool {
        self.rng.try_lock().is_err()
    }

    /// Validate the player count, compose and persist a new session.
    ///
    /// Failed attempts send exactly one notice and write nothing that has to be
    /// undone; calling again starts over with freshly drawn values.
    pub async fn create_session(
        &self,
        game_type: GameType,
        raw_player_count: &str,
    ) -> Result<CreatedSession, CreationError> {
        let mut rng = self.rng.try_lock().map_err(|_| {
            tracing::debug!(game = game_type.as_str(), "Session creation already in progress");
            CreationError::AttemptInProgress
        })?;

        let result = self.attempt(game_type, raw_player_count, &mut *rng).await;

        if let Err(e) = &result {
            tracing::warn!(game = game_type.as_str(), "Failed to create session: {}", e);
            self.notifier.notify(Notice::error(e.message_key()));
        }

        result
    }

    async fn attempt(
        &self,
        game_type: GameType,
        raw_player_count: &str,
        rng: &mut R,
    ) -> Result<CreatedSession, CreationError> {
        let player_count = PlayerCount::parse(raw_player_count, game_type.player_range())?;

        let details = match game_type {
            GameType::Battleship => SessionDetails::battleship(player_count),
            GameType::Impostor => self.compose_impostor(player_count, rng).await?,
        };

        let code = JoinCode::generate(rng);
        let session = GameSession::new(Uuid::new_v4().to_string(), code, player_count, details);

        // Duplicate codes surface here as well; they are not retried
        self.session_repo
            .insert_session(&session)
            .await
            .map_err(CreationError::Persistence)?;

        let path = session.path();
        tracing::info!(
            game = game_type.as_str(),
            code = %session.code,
            players = player_count.get(),
            "Game session created"
        );

        Ok(CreatedSession { session, path })
    }

    async fn compose_impostor(
        &self,
        player_count: PlayerCount,
        rng: &mut R,
    ) -> Result<SessionDetails, CreationError> {
        let words = self.word_repo.list_words().await.map_err(|e| {
            tracing::error!("Word pool lookup failed: {}", e);
            CreationError::EmptyWordPool
        })?;

        let word = words.choose(&mut *rng).ok_or(CreationError::EmptyWordPool)?;
        let impostor_index = rng.gen_range(0..player_count.get());

        Ok(SessionDetails::Impostor {
            word_id: word.id.clone(),
            impostor_index,
        })
    }
}

#[derive(Debug, thiserror::Error)]
pub enum CreationError {
    #[error("Invalid player count: {0}")]
    InvalidPlayerCount(#[from] PlayerCountError),
    #[error("No words available")]
    EmptyWordPool,
    #[error("Failed to save game session: {0}")]
    Persistence(RepositoryError),
    #[error("A game is already being created")]
    AttemptInProgress,
}

impl CreationError {
    /// Localization key shown to the user
    pub fn message_key(&self) -> &'static str {
        match self {
            CreationError::InvalidPlayerCount(_) => message_keys::INVALID_PLAYER_COUNT,
            CreationError::EmptyWordPool => message_keys::NO_WORDS_AVAILABLE,
            CreationError::Persistence(_) => message_keys::CREATE_GAME_FAILED,
            CreationError::AttemptInProgress => message_keys::CREATE_IN_PROGRESS,
        }
    }
}
