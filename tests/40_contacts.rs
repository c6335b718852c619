mod common;

use anyhow::Result;
use axum::http::{Method, StatusCode};
use serde_json::{json, Value};
use uuid::Uuid;

use common::TestApp;
use quarano_api_rust::auth::hash_password;
use quarano_api_rust::database::Store;
use quarano_api_rust::domain::{Role, User};

fn contact_payload() -> Value {
    json!({
        "firstName": "Max",
        "lastName": "Muster",
        "phone": "0621 998877",
        "email": "",
        "isHealthStaff": true,
        "remark": "Arbeitskollege"
    })
}

#[tokio::test]
async fn lists_own_contacts() -> Result<()> {
    let app = TestApp::spawn().await?;
    let token = app.login("test3").await?;

    let res = app.get("/api/contacts", Some(&token)).await?;

    assert_eq!(res.status, StatusCode::OK);
    let last_names: Vec<Value> = res.body["_embedded"]["contacts"]
        .as_array()
        .unwrap()
        .iter()
        .map(|c| c["lastName"].clone())
        .collect();
    // the contact known only by an identification hint carries no name and sorts first
    assert_eq!(last_names, vec![Value::Null, json!("Adler"), json!("Berger")]);
    Ok(())
}

#[tokio::test]
async fn creates_a_contact() -> Result<()> {
    let app = TestApp::spawn().await?;
    let token = app.login("test3").await?;

    let res = app.post("/api/contacts", Some(&token), contact_payload()).await?;

    assert_eq!(res.status, StatusCode::CREATED);
    assert_eq!(res.body["isHealthStaff"], true);
    assert_eq!(res.body["email"], Value::Null);
    assert_eq!(res.body["remark"], "Arbeitskollege");

    let location = res.header("location").expect("location header").to_string();
    assert_eq!(res.body["_links"]["self"]["href"], location);

    let fetched = app.get(&location, Some(&token)).await?;
    assert_eq!(fetched.status, StatusCode::OK);
    assert_eq!(fetched.body["firstName"], "Max");
    Ok(())
}

#[tokio::test]
async fn requires_a_way_of_contact() -> Result<()> {
    let app = TestApp::spawn().await?;
    let token = app.login("test3").await?;

    let res = app
        .post("/api/contacts", Some(&token), json!({ "firstName": "Max", "lastName": "Muster", "email": "" }))
        .await?;

    assert_eq!(res.status, StatusCode::BAD_REQUEST);
    let message = res.body["phone"].as_str().unwrap();
    assert!(message.contains("Kontaktmöglichkeit"));
    for field in ["mobilePhone", "email", "identificationHint"] {
        assert_eq!(res.body[field], message, "{}", field);
    }
    Ok(())
}

#[tokio::test]
async fn any_single_way_of_contact_is_enough() -> Result<()> {
    let app = TestApp::spawn().await?;
    let token = app.login("test3").await?;

    let ways = [
        ("phone", "0621 123456"),
        ("mobilePhone", "0171 1234567"),
        ("email", "max@example.com"),
        ("identificationHint", "Trägt immer einen roten Hut"),
    ];

    for (field, value) in ways {
        let mut payload = json!({ "firstName": "Max", "lastName": "Muster" });
        payload[field] = json!(value);

        let res = app.post("/api/contacts", Some(&token), payload).await?;
        assert_eq!(res.status, StatusCode::CREATED, "{}: {}", field, res.body);
    }
    Ok(())
}

#[tokio::test]
async fn rejects_invalid_characters() -> Result<()> {
    let app = TestApp::spawn().await?;
    let token = app.login("test3").await?;

    let payload = json!({
        "firstName": "Test121231",
        "lastName": "TestN121231",
        "phone": "012356789A",
        "city": "city 123",
        "street": "\\",
        "houseNumber": "-"
    });
    let res = app.post("/api/contacts", Some(&token), payload).await?;

    assert_eq!(res.status, StatusCode::BAD_REQUEST);
    assert_eq!(res.body["firstName"], "Bitte geben Sie einen gültigen Vornamen ein!");
    assert_eq!(res.body["lastName"], "Bitte geben Sie einen gültigen Nachnamen ein!");
    assert_eq!(res.body["phone"], "Bitte geben Sie eine gültige Telefonnummer ein!");
    assert!(res.body["city"].as_str().unwrap().contains("gültige Stadt"));
    assert!(res.body["street"].as_str().unwrap().contains("gültige Straße"));
    assert_eq!(res.body["houseNumber"], "Dieses Feld darf nur Buchstaben und Zahlen enthalten!");
    Ok(())
}

#[tokio::test]
async fn updates_and_deletes_a_contact() -> Result<()> {
    let app = TestApp::spawn().await?;
    let token = app.login("test3").await?;

    let created = app.post("/api/contacts", Some(&token), contact_payload()).await?;
    let location = created.header("location").expect("location header").to_string();

    let mut payload = contact_payload();
    payload["isHealthStaff"] = json!(false);
    payload["isSenior"] = json!(true);
    let res = app.put(&location, Some(&token), payload).await?;
    assert_eq!(res.status, StatusCode::OK);
    assert_eq!(res.body["isHealthStaff"], false);
    assert_eq!(res.body["isSenior"], true);

    let res = app.delete(&location, Some(&token)).await?;
    assert_eq!(res.status, StatusCode::NO_CONTENT);

    let res = app.get(&location, Some(&token)).await?;
    assert_eq!(res.status, StatusCode::NOT_FOUND);
    Ok(())
}

#[tokio::test]
async fn contacts_of_other_persons_are_hidden() -> Result<()> {
    let app = TestApp::spawn().await?;
    let owner = app.login("test3").await?;

    let created = app.post("/api/contacts", Some(&owner), contact_payload()).await?;
    let location = created.header("location").expect("location header").to_string();

    let stranger = User::new(
        "test4",
        hash_password("test4"),
        Role::TrackedPerson {
            person_id: Uuid::new_v4(),
        },
    );
    app.store.save_user(&stranger).await?;
    let token = app.login("test4").await?;

    let res = app.get(&location, Some(&token)).await?;
    assert_eq!(res.status, StatusCode::NOT_FOUND);

    let res = app.delete(&location, Some(&token)).await?;
    assert_eq!(res.status, StatusCode::NOT_FOUND);

    let res = app.get("/api/contacts", Some(&token)).await?;
    assert_eq!(res.body["_embedded"]["contacts"], json!([]));

    let res = app.get(&location, Some(&owner)).await?;
    assert_eq!(res.status, StatusCode::OK);
    Ok(())
}

#[tokio::test]
async fn contact_flags_must_be_booleans() -> Result<()> {
    let app = TestApp::spawn().await?;
    let token = app.login("test3").await?;

    let payload = json!({ "lastName": "Muster", "phone": "0621 123456", "isHealthStaff": "true" });
    let res = app
        .request(Method::POST, "/api/contacts", Some(&token), Some(payload), Some("en"))
        .await?;

    assert_eq!(res.status, StatusCode::BAD_REQUEST);
    assert_eq!(res.body["isHealthStaff"], "Please answer this field with yes or no!");
    Ok(())
}
