use crate::{
    dictionary::Dictionary,
    error::{GameError, RoundError},
    game::{Event, Session},
    websocket::messages::{ClientMessage, ServerMessage, WordResult},
    AppState,
};
use axum::{
    extract::{
        ws::{Message, WebSocket},
        State, WebSocketUpgrade,
    },
    response::IntoResponse,
};
use futures::{sink::SinkExt, stream::StreamExt};
use rand::{rngs::StdRng, Rng, SeedableRng};
use std::sync::Arc;
use tokio::sync::mpsc;

/// WebSocket upgrade handler; every connection plays its own session
pub async fn handle_websocket(
    ws: WebSocketUpgrade,
    State(state): State<Arc<AppState>>,
) -> impl IntoResponse {
    ws.on_upgrade(move |socket| handle_socket(socket, state))
}

/// Handle individual WebSocket connection
async fn handle_socket(socket: WebSocket, state: Arc<AppState>) {
    let (mut sender, mut receiver) = socket.split();
    let (tx, mut rx) = mpsc::channel::<ServerMessage>(100);

    let session = Session::new(state.config.game.board_size);
    let session_id = session.id();
    tracing::info!("WebSocket connection established for session {}", session_id);

    // Spawn a task to send messages to the client
    let mut send_task = tokio::spawn(async move {
        while let Some(msg) = rx.recv().await {
            match serde_json::to_string(&msg) {
                Ok(json) => {
                    if sender.send(Message::Text(json.into())).await.is_err() {
                        break;
                    }
                }
                Err(e) => {
                    tracing::error!("Failed to serialize message: {}", e);
                }
            }
        }
    });

    // The receive loop owns the session; nothing else touches it
    let mut recv_task = tokio::spawn(async move {
        let mut session = session;
        let mut rng = StdRng::from_os_rng();

        if tx.send(ServerMessage::snapshot(&session)).await.is_err() {
            return;
        }

        while let Some(Ok(msg)) = receiver.next().await {
            match msg {
                Message::Text(text) => {
                    let replies = match serde_json::from_str::<ClientMessage>(&text) {
                        Ok(client_msg) => {
                            let (next, replies) =
                                handle_client_message(client_msg, session, &state.dictionary, &mut rng);
                            session = next;
                            replies
                        }
                        Err(e) => {
                            tracing::error!("Failed to parse message: {}", e);
                            vec![ServerMessage::error(format!("Invalid message format: {}", e))]
                        }
                    };

                    for reply in replies {
                        if tx.send(reply).await.is_err() {
                            return;
                        }
                    }
                }
                Message::Close(_) => {
                    tracing::info!("Client disconnected from session {}", session.id());
                    break;
                }
                _ => {}
            }
        }
    });

    // Wait for either task to finish
    tokio::select! {
        _ = (&mut send_task) => {
            recv_task.abort();
        }
        _ = (&mut recv_task) => {
            send_task.abort();
        }
    }

    tracing::info!("WebSocket connection closed for session {}", session_id);
}

/// Apply one client message to the session and build the replies.
///
/// The outcome message (if any) comes first, followed by a fresh snapshot.
pub fn handle_client_message(
    msg: ClientMessage,
    session: Session,
    dictionary: &Dictionary,
    rng: &mut impl Rng,
) -> (Session, Vec<ServerMessage>) {
    let (session, result) = session.apply(msg.into(), dictionary, rng);

    let mut replies = Vec::with_capacity(2);
    match result {
        Ok(Event::LevelStarted { level }) => replies.push(ServerMessage::Info {
            message: format!("Level: {} | Score: {}", level, session.score()),
        }),
        Ok(Event::RoundAccepted { round, total_score }) => {
            replies.push(ServerMessage::WordsAccepted {
                message: format!(
                    "Words accepted! +{} points (Total: {})",
                    round.score_delta, total_score
                ),
                words: round
                    .words
                    .into_iter()
                    .map(|c| WordResult::new(c, true))
                    .collect(),
                score_delta: round.score_delta,
                total_score,
            })
        }
        Ok(Event::RackShuffled) => replies.push(ServerMessage::Info {
            message: "Tiles exchanged.".to_string(),
        }),
        Ok(Event::GameOver { final_score }) => replies.push(ServerMessage::GameOver { final_score }),
        Ok(Event::TilePlaced { .. } | Event::TileReturned { .. } | Event::SummaryClosed) => {}
        Err(GameError::Round(err @ RoundError::DictionaryRejection { .. })) => {
            replies.push(ServerMessage::WordsRejected {
                words: WordResult::from_rejection(&err),
                positions: err.flagged_positions(),
                message: err.to_string(),
            })
        }
        Err(err) => {
            tracing::debug!("Session {} action failed: {}", session.id(), err);
            replies.push(ServerMessage::error(err.to_string()));
        }
    }

    replies.push(ServerMessage::snapshot(&session));
    (session, replies)
}
