//! Line-delimited JSON messages exchanged between the engine and an external renderer.
//!
//! The renderer sends [`ClientMessage`]s for taps and resets and gets back a
//! [`ServerMessage::Snapshot`] describing the whole state after every transition.

use numpath_core::*;
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ProtocolError {
    #[error("Malformed message: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = core::result::Result<T, ProtocolError>;

#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ClientMessage {
    CellTapped { row: Coord, col: Coord },
    ResetRequested,
    QueryState,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ServerMessage {
    Snapshot(Snapshot),
    Rejected { reason: String },
}

/// Legal target as the renderer draws it.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveHint {
    pub row: Coord,
    pub col: Coord,
    pub operation: Operation,
    pub symbol: char,
}

impl From<AvailableMove> for MoveHint {
    fn from(available: AvailableMove) -> Self {
        let (row, col) = available.coords;
        Self {
            row,
            col,
            operation: available.operation,
            symbol: available.operation.symbol(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Snapshot {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub outcome: Option<MoveOutcome>,
    pub state: GameState,
    pub available_moves: Vec<MoveHint>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub summary: Option<GameSummary>,
}

impl Snapshot {
    pub fn capture(state: &GameState, outcome: Option<MoveOutcome>) -> Self {
        Self {
            outcome,
            state: state.clone(),
            available_moves: state
                .available_moves()
                .into_iter()
                .map(MoveHint::from)
                .collect(),
            summary: state.is_game_over().then(|| state.summary()),
        }
    }
}

pub fn decode_client(line: &str) -> Result<ClientMessage> {
    Ok(serde_json::from_str(line.trim())?)
}

pub fn encode_server(message: &ServerMessage) -> Result<String> {
    Ok(serde_json::to_string(message)?)
}

/// Applies one client message to the engine and describes the resulting state.
pub fn handle_message<G: GridGenerator>(
    engine: &mut PlayEngine<G>,
    message: ClientMessage,
) -> ServerMessage {
    let outcome = match message {
        ClientMessage::CellTapped { row, col } => Some(engine.on_cell_tapped((row, col))),
        ClientMessage::ResetRequested => {
            engine.on_reset_requested();
            None
        }
        ClientMessage::QueryState => None,
    };
    log::trace!("Handled {:?}, outcome: {:?}", message, outcome);
    ServerMessage::Snapshot(Snapshot::capture(engine.state(), outcome))
}

/// Decodes a line, applies it, and encodes the reply; malformed input yields `rejected`.
pub fn handle_line<G: GridGenerator>(engine: &mut PlayEngine<G>, line: &str) -> Result<String> {
    let reply = match decode_client(line) {
        Ok(message) => handle_message(engine, message),
        Err(err) => {
            log::debug!("Rejected client line {:?}: {}", line, err);
            ServerMessage::Rejected {
                reason: err.to_string(),
            }
        }
    };
    encode_server(&reply)
}
