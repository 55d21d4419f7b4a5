//! Live-server websocket tests: join/roster/disconnect, private errors,
//! and the bidding opening of a four-player table.

mod support;

use std::time::Duration;

use actix_web::{web, App, HttpServer};
use belote_server::state::AppState;
use belote_server::ws;
use serde_json::json;
use support::websocket_client::WsClient;

const RECV_TIMEOUT: Duration = Duration::from_secs(5);

async fn spawn_server() -> String {
    let app_state = AppState::new();
    let server = HttpServer::new(move || {
        App::new()
            .app_data(web::Data::new(app_state.clone()))
            .route("/ws", web::get().to(ws::session::upgrade))
    })
    .workers(1)
    .bind(("127.0.0.1", 0))
    .expect("bind test server");
    let addr = server.addrs()[0];
    actix_web::rt::spawn(server.run());
    format!("ws://{addr}/ws")
}

#[actix_web::test]
async fn join_roster_and_disconnect() {
    let url = spawn_server().await;

    let mut c1 = WsClient::connect_retry(&url, RECV_TIMEOUT)
        .await
        .expect("connect c1");
    c1.send_json(&json!({
        "type": "join_room",
        "payload": {"roomCode": "x", "nickname": "A"}
    }))
    .await
    .unwrap();
    let update = c1.recv_json(RECV_TIMEOUT).await.unwrap();
    assert_eq!(update["type"], "room_update");
    assert_eq!(update["payload"]["roomCode"], "X");
    let players = update["payload"]["players"].as_array().unwrap();
    assert_eq!(players.len(), 1);
    assert_eq!(players[0]["nickname"], "A");
    assert_eq!(players[0]["seat"], 0);

    let mut c2 = WsClient::connect_retry(&url, RECV_TIMEOUT)
        .await
        .expect("connect c2");
    c2.send_json(&json!({
        "type": "join_room",
        "payload": {"roomCode": " x ", "nickname": "B"}
    }))
    .await
    .unwrap();
    let update = c2.recv_json(RECV_TIMEOUT).await.unwrap();
    let players = update["payload"]["players"].as_array().unwrap();
    assert_eq!(players.len(), 2);
    assert_eq!(players[1]["nickname"], "B");
    assert_eq!(players[1]["seat"], 1);

    // The first client sees the same roster.
    let update = c1.recv_json(RECV_TIMEOUT).await.unwrap();
    assert_eq!(update["payload"]["players"].as_array().unwrap().len(), 2);

    // c1 drops: seat 0 is vacated and only B remains.
    c1.close().await.unwrap();
    let update = c2.recv_json(RECV_TIMEOUT).await.unwrap();
    assert_eq!(update["type"], "room_update");
    let players = update["payload"]["players"].as_array().unwrap();
    assert_eq!(players.len(), 1);
    assert_eq!(players[0]["nickname"], "B");
    assert_eq!(players[0]["seat"], 1);
}

#[actix_web::test]
async fn rejections_reach_only_the_sender() {
    let url = spawn_server().await;
    let mut c1 = WsClient::connect_retry(&url, RECV_TIMEOUT)
        .await
        .expect("connect");

    c1.send_json(&json!({"type": "resign"})).await.unwrap();
    let err = c1.recv_json(RECV_TIMEOUT).await.unwrap();
    assert_eq!(err["type"], "error");

    c1.send_json(&json!({"type": "start_game"})).await.unwrap();
    let err = c1.recv_json(RECV_TIMEOUT).await.unwrap();
    assert_eq!(err["type"], "error");
    assert_eq!(err["payload"]["message"], "join a room first");

    c1.send_json(&json!({
        "type": "join_room",
        "payload": {"roomCode": "solo", "nickname": "A"}
    }))
    .await
    .unwrap();
    let update = c1.recv_json(RECV_TIMEOUT).await.unwrap();
    assert_eq!(update["type"], "room_update");

    c1.send_json(&json!({"type": "start_game"})).await.unwrap();
    let err = c1.recv_json(RECV_TIMEOUT).await.unwrap();
    assert_eq!(err["type"], "error");
    assert_eq!(
        err["payload"]["message"],
        "cannot start game: four seated players are required"
    );
}

#[actix_web::test]
async fn four_players_open_the_bidding() {
    let url = spawn_server().await;
    let mut clients = Vec::new();
    for name in ["A", "B", "C", "D"] {
        let mut c = WsClient::connect_retry(&url, RECV_TIMEOUT)
            .await
            .expect("connect");
        c.send_json(&json!({
            "type": "join_room",
            "payload": {"roomCode": "t1", "nickname": name}
        }))
        .await
        .unwrap();
        clients.push(c);
    }
    // The i-th joiner sees one roster update per later join, plus its own.
    for (i, c) in clients.iter_mut().enumerate() {
        for _ in 0..(4 - i) {
            let m = c.recv_json(RECV_TIMEOUT).await.unwrap();
            assert_eq!(m["type"], "room_update");
        }
    }

    clients[0]
        .send_json(&json!({"type": "start_game"}))
        .await
        .unwrap();
    for (i, c) in clients.iter_mut().enumerate() {
        let m = c.recv_json(RECV_TIMEOUT).await.unwrap();
        assert_eq!(m["type"], "game_state");
        let s = &m["payload"]["state"];
        assert_eq!(s["phase"], "bidding_first_round");
        assert_eq!(s["yourSeat"], i);
        assert_eq!(s["yourHand"].as_array().unwrap().len(), 5);
        assert_eq!(s["handCounts"], json!([5, 5, 5, 5]));
        assert_eq!(s["dealer"], 0);
        assert_eq!(s["biddingPlayer"], 1);
        assert!(s["turnedCard"].is_object());
        assert!(s["trumpSuit"].is_null());
    }

    // Left of the dealer takes: hands fill to eight, the deal begins.
    clients[1]
        .send_json(&json!({
            "type": "choose_trump",
            "payload": {"action": "take"}
        }))
        .await
        .unwrap();
    for c in clients.iter_mut() {
        let m = c.recv_json(RECV_TIMEOUT).await.unwrap();
        assert_eq!(m["type"], "game_state");
        let s = &m["payload"]["state"];
        assert_eq!(s["phase"], "playing");
        assert_eq!(s["yourHand"].as_array().unwrap().len(), 8);
        assert_eq!(s["handCounts"], json!([8, 8, 8, 8]));
        assert_eq!(s["trumpChooser"], 1);
        assert_eq!(s["currentPlayer"], 1);
        assert!(s["turnedCard"].is_null());
        assert!(s["trumpSuit"].is_string());
    }

    // Starting over mid-deal is refused, privately.
    clients[2]
        .send_json(&json!({"type": "start_game"}))
        .await
        .unwrap();
    let err = clients[2].recv_json(RECV_TIMEOUT).await.unwrap();
    assert_eq!(err["type"], "error");

    // A mid-deal disconnect cancels the deal for the table.
    clients.pop().unwrap().close().await.unwrap();
    let m = clients[0].recv_json(RECV_TIMEOUT).await.unwrap();
    assert_eq!(m["type"], "game_cancelled");
    let m = clients[0].recv_json(RECV_TIMEOUT).await.unwrap();
    assert_eq!(m["type"], "room_update");
    assert_eq!(m["payload"]["players"].as_array().unwrap().len(), 3);
}
