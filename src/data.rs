// src/data.rs

use crate::model::JeeTopic;

/// Loads the topic catalog from the embedded JSON
pub fn jee_topics() -> Vec<JeeTopic> {
    let file_content = include_str!("data/jee_topics.json");
    serde_json::from_str(file_content).expect("could not parse the embedded topic catalog")
}
