//! Package truth tables the way a chat command would send them
//!
//! Run with: cargo run --example chat_reply -- "a ^ b v c"

use proptable::report::{reply, user_message, Delivery, DeliveryLimits};
use proptable::TableConfig;
use std::env;

fn main() {
    simplelog::TermLogger::init(
        simplelog::LevelFilter::Debug,
        simplelog::Config::default(),
        simplelog::TerminalMode::Mixed,
        simplelog::ColorChoice::Auto,
    )
    .unwrap();

    let input = env::args()
        .nth(1)
        .unwrap_or_else(|| "a ^ b ^ c ^ d ^ e ^ f ^ g".to_string());

    match reply(&input, &TableConfig::default(), &DeliveryLimits::default()) {
        Ok(Delivery::Inline(message)) => println!("{}", message),
        Ok(delivery) => {
            println!("{}", delivery.text());
            if let Some(path) = delivery.attachment_path() {
                println!("[attached {}]", path.display());
            }
            // dropping the delivery removes the attachment
        }
        Err(err) => println!("{}", user_message(&err)),
    }
}
