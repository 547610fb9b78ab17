//! WebSocket connection handler: the session glue between the
//! transport and the usecases.

use std::sync::Arc;

use axum::{
    extract::{
        Query, State,
        ws::{Message, WebSocket, WebSocketUpgrade},
    },
    http::StatusCode,
    response::IntoResponse,
};
use futures_util::{sink::SinkExt, stream::StreamExt};
use serde::Deserialize;
use tokio::sync::mpsc;

use marubatsu_shared::protocol::{ClientEvent, GameStateMessage};

use crate::{
    domain::{ClientId, RoomId},
    infrastructure::dto::conversion::player_assigned_message,
    ui::state::AppState,
};

/// Query parameters for the WebSocket connection
#[derive(Debug, Deserialize)]
pub struct ConnectQuery {
    pub client_id: String,
}

pub async fn websocket_handler(
    ws: WebSocketUpgrade,
    State(state): State<Arc<AppState>>,
    Query(query): Query<ConnectQuery>,
) -> Result<impl IntoResponse, StatusCode> {
    // Convert String -> ClientId before accepting the upgrade
    let client_id = match ClientId::try_from(query.client_id.clone()) {
        Ok(id) => id,
        Err(e) => {
            tracing::warn!("Invalid client_id '{}': {}", query.client_id, e);
            return Err(StatusCode::BAD_REQUEST);
        }
    };

    // Create a channel for this client to receive pushed messages
    let (tx, rx) = mpsc::unbounded_channel();
    state
        .connect_client_usecase
        .execute(client_id.clone(), tx)
        .await;

    tracing::info!("Client '{}' connected and registered", client_id.as_str());

    Ok(ws.on_upgrade(move |socket| handle_socket(socket, state, client_id, rx)))
}

/// Spawns a task that receives messages from the rx channel and writes
/// them to the WebSocket sender.
///
/// This is the outbound half of the session: room broadcasts and direct
/// replies land on the client's channel and are flushed to its socket
/// here.
fn pusher_loop(
    mut rx: mpsc::UnboundedReceiver<String>,
    mut sender: futures_util::stream::SplitSink<WebSocket, Message>,
) -> tokio::task::JoinHandle<()> {
    tokio::spawn(async move {
        while let Some(msg) = rx.recv().await {
            if sender.send(Message::Text(msg.into())).await.is_err() {
                break;
            }
        }
    })
}

async fn handle_socket(
    socket: WebSocket,
    state: Arc<AppState>,
    client_id: ClientId,
    rx: mpsc::UnboundedReceiver<String>,
) {
    let (sender, mut receiver) = socket.split();

    let mut send_task = pusher_loop(rx, sender);

    let client_id_clone = client_id.clone();
    let state_clone = state.clone();

    // Receive messages from this client
    let mut recv_task = tokio::spawn(async move {
        while let Some(msg) = receiver.next().await {
            let msg = match msg {
                Ok(msg) => msg,
                Err(e) => {
                    tracing::error!("WebSocket error: {}", e);
                    break;
                }
            };

            match msg {
                Message::Text(text) => {
                    tracing::debug!("Received text: {}", text);

                    // Parse into one of the request variants; anything
                    // else is malformed and dropped without a reply
                    match serde_json::from_str::<ClientEvent>(&text) {
                        Ok(event) => {
                            dispatch_event(&state_clone, &client_id_clone, event).await;
                        }
                        Err(e) => {
                            tracing::debug!(
                                "Ignoring malformed payload from '{}': {}",
                                client_id_clone.as_str(),
                                e
                            );
                        }
                    }
                }
                Message::Ping(_) => {
                    // Pong replies are handled by axum itself
                    tracing::debug!("Received ping");
                }
                Message::Close(_) => {
                    tracing::info!("Client '{}' requested close", client_id_clone.as_str());
                    break;
                }
                _ => {}
            }
        }
    });

    // If any one of the tasks completes, abort the other
    tokio::select! {
        _ = &mut recv_task => send_task.abort(),
        _ = &mut send_task => recv_task.abort(),
    };

    // Tear down: free the player slot, clear membership, unregister the
    // send handle, then announce the new state to the remaining members
    if let Some((game, remaining)) = state.disconnect_client_usecase.execute(&client_id).await {
        let state_json = serde_json::to_string(&GameStateMessage::from(&game)).unwrap();
        if let Err(e) = state
            .disconnect_client_usecase
            .broadcast_state(remaining, &state_json)
            .await
        {
            tracing::warn!("Failed to broadcast game state after disconnect: {}", e);
        }
    }
    tracing::info!(
        "Client '{}' disconnected and removed from registry",
        client_id.as_str()
    );
}

/// Dispatch one parsed client event to its usecase.
async fn dispatch_event(state: &Arc<AppState>, client_id: &ClientId, event: ClientEvent) {
    match event {
        ClientEvent::JoinRoom { room_id } => {
            let room_id = match RoomId::try_from(room_id) {
                Ok(id) => id,
                Err(e) => {
                    tracing::debug!(
                        "Ignoring join with invalid room id from '{}': {}",
                        client_id.as_str(),
                        e
                    );
                    return;
                }
            };

            let outcome = state
                .join_room_usecase
                .execute(client_id.clone(), room_id.clone())
                .await;
            tracing::info!(
                "Client '{}' joined room '{}' as {:?}",
                client_id.as_str(),
                room_id.as_str(),
                outcome.mark
            );

            // Direct reply to the joiner only
            let assigned_json =
                serde_json::to_string(&player_assigned_message(outcome.mark)).unwrap();
            if let Err(e) = state
                .join_room_usecase
                .notify_assignment(client_id, &assigned_json)
                .await
            {
                tracing::warn!(
                    "Failed to send player assignment to '{}': {}",
                    client_id.as_str(),
                    e
                );
            }

            // Full room state to every member, the joiner included
            let state_json =
                serde_json::to_string(&GameStateMessage::from(&outcome.state)).unwrap();
            if let Err(e) = state
                .join_room_usecase
                .broadcast_state(outcome.members, &state_json)
                .await
            {
                tracing::warn!("Failed to broadcast game state after join: {}", e);
            }
        }
        ClientEvent::MakeMove { index } => {
            match state.make_move_usecase.execute(client_id, index).await {
                Ok((outcome, members)) => {
                    if let Some(reason) = outcome.rejected {
                        tracing::debug!("Rejected move from '{}': {}", client_id.as_str(), reason);
                    }

                    // Broadcast whether or not the move was accepted; a
                    // rejected move fans out the unchanged state
                    let state_json =
                        serde_json::to_string(&GameStateMessage::from(&outcome.state)).unwrap();
                    if let Err(e) = state
                        .make_move_usecase
                        .broadcast_state(members, &state_json)
                        .await
                    {
                        tracing::warn!("Failed to broadcast game state after move: {}", e);
                    }
                }
                Err(e) => {
                    tracing::debug!("Dropping move request from '{}': {}", client_id.as_str(), e);
                }
            }
        }
        ClientEvent::ResetGame => match state.reset_game_usecase.execute(client_id).await {
            Ok((game, members)) => {
                tracing::info!("Client '{}' reset their room", client_id.as_str());
                let state_json = serde_json::to_string(&GameStateMessage::from(&game)).unwrap();
                if let Err(e) = state
                    .reset_game_usecase
                    .broadcast_state(members, &state_json)
                    .await
                {
                    tracing::warn!("Failed to broadcast game state after reset: {}", e);
                }
            }
            Err(e) => {
                tracing::debug!("Dropping reset request from '{}': {}", client_id.as_str(), e);
            }
        },
    }
}
