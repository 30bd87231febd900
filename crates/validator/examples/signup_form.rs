//! Sanitizing a signup form posted as JSON.
//!
//! Run: `RUST_LOG=sift_validator=trace cargo run -p sift-validator --example signup_form`

use serde_json::{Value as Json, json};
use sift_validator::prelude::*;
use tracing_subscriber::EnvFilter;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let signup = Pipeline::new()
        .step(filter([
            "email",
            "phone",
            "password",
            "password_confirmation",
            "birthday",
        ]))
        .step(trim())
        .step(nil_empty(["phone"]))
        .step(required(["email", "password"]))
        .step(email("email"))
        .step(phone_with("phone", lenient_phone))
        .step(min_length("password", 7))
        .step(max_length("password", 64))
        .step(password("password", "password_confirmation"))
        .step(time("%d/%m/%Y", ["birthday"])?)
        .step(drop_keys(["password_confirmation"]));

    let posts = [
        json!({
            "email": "ada@example.com\n",
            "phone": "+44 (20) 7946-0958",
            "password": "analytical engine",
            "password_confirmation": "analytical engine",
            "birthday": "10/12/1815",
            "is_admin": true,
        }),
        json!({
            "email": "ada at example",
            "phone": "",
            "password": "engine",
            "password_confirmation": "Engine",
            "birthday": "December 10th",
        }),
    ];

    for post in posts {
        println!("=== request ===\n{post:#}");
        let outcome = signup.run(Data::try_from(post)?);
        let response = match outcome.into_result() {
            Ok(data) => json!({ "status": "created", "user": Json::from(data) }),
            Err(errors) => json!({ "status": "invalid", "errors": Json::from(errors) }),
        };
        println!("=== response ===\n{response:#}\n");
    }

    Ok(())
}
