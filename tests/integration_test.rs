use reqwest::Client;
use serde_json::{json, Value};
use std::time::Duration;

use stackdeck::client::{App, CardDraft, HttpRemote};

const BASE_URL: &str = "http://localhost:3000";

fn create_test_client() -> Client {
    Client::builder()
        .timeout(Duration::from_secs(10))
        .build()
        .expect("Failed to create client")
}

#[tokio::test]
#[ignore] // Run with: cargo test -- --ignored
async fn test_stack_crud() {
    let client = create_test_client();

    // Create a stack
    let create_response = client
        .post(format!("{}/api/stacks", BASE_URL))
        .json(&json!({
            "name": "Integration Stack",
            "cover": { "type": "color", "value": "#334455" }
        }))
        .send()
        .await
        .expect("Failed to create stack");

    assert_eq!(create_response.status(), 200);
    let stack: Value = create_response.json().await.unwrap();
    let stack_id = stack["id"].as_str().unwrap().to_string();
    assert_eq!(stack["cardCount"], 0);

    // Get the stack
    let get_response = client
        .get(format!("{}/api/stacks/{}", BASE_URL, stack_id))
        .send()
        .await
        .expect("Failed to get stack");

    assert_eq!(get_response.status(), 200);

    // Update the stack
    let update_response = client
        .put(format!("{}/api/stacks/{}", BASE_URL, stack_id))
        .json(&json!({ "name": "Renamed Stack" }))
        .send()
        .await
        .expect("Failed to update stack");

    assert_eq!(update_response.status(), 200);
    let updated: Value = update_response.json().await.unwrap();
    assert_eq!(updated["name"], "Renamed Stack");

    // Delete the stack
    let delete_response = client
        .delete(format!("{}/api/stacks/{}", BASE_URL, stack_id))
        .send()
        .await
        .expect("Failed to delete stack");

    assert_eq!(delete_response.status(), 200);

    let gone = client
        .get(format!("{}/api/stacks/{}", BASE_URL, stack_id))
        .send()
        .await
        .unwrap();
    assert_eq!(gone.status(), 404);
}

#[tokio::test]
#[ignore]
async fn test_card_flow_with_move() {
    let client = create_test_client();

    let source: Value = client
        .post(format!("{}/api/stacks", BASE_URL))
        .json(&json!({
            "name": "Move Source",
            "cover": { "type": "color", "value": "#111" }
        }))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    let target: Value = client
        .post(format!("{}/api/stacks", BASE_URL))
        .json(&json!({
            "name": "Move Target",
            "cover": { "type": "color", "value": "#222" }
        }))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    let source_id = source["id"].as_str().unwrap();
    let target_id = target["id"].as_str().unwrap();

    let card: Value = client
        .post(format!("{}/api/stacks/{}/cards", BASE_URL, source_id))
        .json(&json!({ "name": "Traveler", "cover": "#333" }))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    let card_id = card["id"].as_str().unwrap();

    let moved: Value = client
        .patch(format!("{}/api/cards/{}/move", BASE_URL, card_id))
        .json(&json!({ "stackId": target_id }))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(moved["stackId"], target_id);

    let source_after: Value = client
        .get(format!("{}/api/stacks/{}", BASE_URL, source_id))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    let target_after: Value = client
        .get(format!("{}/api/stacks/{}", BASE_URL, target_id))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(source_after["cardCount"], 0);
    assert_eq!(target_after["cardCount"], 1);

    // Cleanup
    for id in [source_id, target_id] {
        client
            .delete(format!("{}/api/stacks/{}", BASE_URL, id))
            .send()
            .await
            .unwrap();
    }
}

#[tokio::test]
#[ignore]
async fn test_optimistic_store_against_live_server() {
    let mut app = App::new(HttpRemote::new(BASE_URL));

    app.load().await;
    assert!(app.error().is_none(), "load failed: {:?}", app.error());

    let stack = app
        .workspace
        .create_stack("Live Stack", "color:#445566")
        .await
        .expect("Failed to create stack");

    let card = app
        .workspace
        .create_card(CardDraft {
            stack_id: stack.id.clone(),
            name: "Live Card".to_string(),
            cover: "#556677".to_string(),
            description: Some("created through the optimistic store".to_string()),
        })
        .await
        .expect("Failed to create card");

    assert!(!card.id.starts_with("tmp-"));
    assert_eq!(
        app.workspace
            .stacks
            .stack_by_id(&stack.id)
            .unwrap()
            .card_count,
        1
    );

    app.workspace
        .delete_stack(&stack.id)
        .await
        .expect("Failed to delete stack");
    assert!(app.workspace.stacks.stack_by_id(&stack.id).is_none());
    assert!(app.workspace.cards.card_by_id(&card.id).is_none());
}
