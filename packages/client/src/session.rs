//! WebSocket client session management.

use futures_util::{SinkExt, StreamExt};
use rustyline::DefaultEditor;
use rustyline::error::ReadlineError;
use tokio::sync::mpsc;
use tokio_tungstenite::{connect_async, tungstenite::protocol::Message};

use marubatsu_shared::protocol::{
    ClientEvent, GameStateMessage, MessageType, PlayerAssignedMessage,
};

use crate::error::ClientError;

use super::{
    command::{Command, HELP_TEXT, parse_command},
    formatter::MessageFormatter,
    ui::redisplay_prompt,
};

/// Run the WebSocket client session
pub async fn run_client_session(
    url: &str,
    client_id: &str,
    room: Option<&str>,
) -> Result<(), Box<dyn std::error::Error>> {
    // Construct URL with client_id as query parameter
    let url = format!("{}?client_id={}", url, client_id);

    let (ws_stream, _response) = match connect_async(&url).await {
        Ok(result) => result,
        Err(e) => {
            return Err(Box::new(ClientError::ConnectionError(e.to_string())));
        }
    };

    tracing::info!("Connected to game server!");
    println!(
        "\nYou are '{}'. Type /join <room> to start playing, /help for commands.\n",
        client_id
    );

    let (mut write, mut read) = ws_stream.split();

    // Join the requested room right away, before the prompt opens
    if let Some(room) = room {
        let event = ClientEvent::JoinRoom {
            room_id: room.to_string(),
        };
        let json = serde_json::to_string(&event)?;
        write.send(Message::Text(json.into())).await?;
    }

    // Clone client_id for read task
    let client_id_for_read = client_id.to_string();

    // Spawn a task to handle incoming messages
    let mut read_task = tokio::spawn(async move {
        let mut connection_error = false;

        while let Some(message) = read.next().await {
            match message {
                Ok(Message::Text(text)) => {
                    // Try to parse as GameStateMessage first: it is the
                    // common case, and a game-state payload would also
                    // satisfy PlayerAssignedMessage (its only extra
                    // field is an Option)
                    if let Ok(state) = serde_json::from_str::<GameStateMessage>(&text) {
                        print!("{}", MessageFormatter::format_game_state(&state));
                        redisplay_prompt(&client_id_for_read);
                    } else if let Ok(assigned) =
                        serde_json::from_str::<PlayerAssignedMessage>(&text)
                        && assigned.r#type == MessageType::PlayerAssigned
                    {
                        print!(
                            "{}",
                            MessageFormatter::format_assignment(assigned.player.as_deref())
                        );
                        redisplay_prompt(&client_id_for_read);
                    }
                    // If parsing fails, display as raw text
                    else {
                        print!("{}", MessageFormatter::format_raw_message(&text));
                        redisplay_prompt(&client_id_for_read);
                    }
                }
                Ok(Message::Close(_)) => {
                    tracing::info!("Server closed the connection");
                    connection_error = true;
                    break;
                }
                Err(e) => {
                    tracing::warn!("WebSocket read error: {}", e);
                    connection_error = true;
                    break;
                }
                _ => {}
            }
        }

        connection_error
    });

    // Clone client_id for the input loop
    let client_id_for_prompt = client_id.to_string();

    // Create channel for rustyline input
    let (input_tx, mut input_rx) = mpsc::unbounded_channel::<String>();

    // Spawn a blocking thread for rustyline (synchronous readline)
    let _readline_handle = std::thread::spawn(move || {
        let mut rl = match DefaultEditor::new() {
            Ok(rl) => rl,
            Err(e) => {
                eprintln!("Failed to initialize readline: {}", e);
                return;
            }
        };

        let prompt = format!("{}> ", client_id_for_prompt);

        loop {
            match rl.readline(&prompt) {
                Ok(line) => {
                    let line = line.trim();
                    if !line.is_empty() {
                        rl.add_history_entry(line).ok();
                        if input_tx.send(line.to_string()).is_err() {
                            // Channel closed, exit thread
                            break;
                        }
                    }
                }
                Err(ReadlineError::Interrupted) => {
                    // Ctrl+C
                    tracing::info!("Interrupted");
                    break;
                }
                Err(ReadlineError::Eof) => {
                    // Ctrl+D
                    tracing::info!("EOF");
                    break;
                }
                Err(err) => {
                    tracing::error!("Readline error: {}", err);
                    break;
                }
            }
        }
    });

    // Spawn a task to parse input lines and send events to the server
    let client_id_for_write = client_id.to_string();
    let mut write_task = tokio::spawn(async move {
        let mut write_error = false;

        while let Some(line) = input_rx.recv().await {
            let command = match parse_command(&line) {
                Ok(command) => command,
                Err(e) => {
                    println!("{}", e);
                    redisplay_prompt(&client_id_for_write);
                    continue;
                }
            };

            match command {
                Command::Help => {
                    print!("{}", HELP_TEXT);
                    redisplay_prompt(&client_id_for_write);
                    continue;
                }
                Command::Quit => break,
                _ => {}
            }

            let Some(event) = command.to_event() else {
                continue;
            };

            let json = match serde_json::to_string(&event) {
                Ok(json) => json,
                Err(e) => {
                    tracing::error!("Failed to serialize event: {}", e);
                    continue;
                }
            };

            if let Err(e) = write.send(Message::Text(json.into())).await {
                tracing::warn!("Failed to send event: {}", e);
                write_error = true;
                break;
            }
        }

        write_error
    });

    // If any one of the tasks completes, abort the other
    tokio::select! {
        read_result = &mut read_task => {
            write_task.abort();
            let connection_error = read_result.unwrap_or(false);
            if connection_error {
                return Err(Box::new(ClientError::ConnectionError(
                    "Connection lost".to_string(),
                )));
            }
        }
        write_result = &mut write_task => {
            read_task.abort();
            let write_error = write_result.unwrap_or(false);
            if write_error {
                return Err(Box::new(ClientError::ConnectionError(
                    "Connection lost".to_string(),
                )));
            }
        }
    }

    Ok(())
}
