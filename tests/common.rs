use oi_contribute::exceptions::ContribError;
use oi_contribute::flow::{ConsentUi, ProfileWriter};
use serde_json::Value;
use std::collections::VecDeque;
use std::fs;
use std::path::Path;

/// Answers prompts from a fixed script and records everything it was shown.
#[derive(Default)]
#[allow(dead_code)]
pub struct ScriptedUi {
    pub answers: VecDeque<bool>,
    pub questions: Vec<String>,
    pub messages: Vec<String>,
}

#[allow(dead_code)]
impl ScriptedUi {
    pub fn answering(answers: &[bool]) -> Self {
        Self {
            answers: answers.iter().copied().collect(),
            ..Default::default()
        }
    }

    pub fn saw_message_containing(&self, needle: &str) -> bool {
        self.messages.iter().any(|m| m.contains(needle))
    }
}

impl ConsentUi for ScriptedUi {
    fn ask_yes_no(&mut self, question: &str) -> Result<bool, ContribError> {
        self.questions.push(question.to_string());
        // Running out of answers behaves like EOF on stdin.
        Ok(self.answers.pop_front().unwrap_or(false))
    }

    fn show_message(&mut self, markdown: &str) -> Result<(), ContribError> {
        self.messages.push(markdown.to_string());
        Ok(())
    }
}

#[derive(Default)]
#[allow(dead_code)]
pub struct RecordingProfile {
    pub writes: Vec<(String, Value)>,
}

impl ProfileWriter for RecordingProfile {
    fn write_key(&mut self, key: &str, value: Value) -> Result<(), ContribError> {
        self.writes.push((key.to_string(), value));
        Ok(())
    }
}

#[allow(dead_code)]
pub fn write_conversation(dir: &Path, name: &str, conversation: Value) {
    fs::create_dir_all(dir).unwrap();
    fs::write(dir.join(name), serde_json::to_string(&conversation).unwrap()).unwrap();
}

#[allow(dead_code)]
pub fn write_cache(path: &Path, displayed: bool, past: bool, future: bool) {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).unwrap();
    }
    let content = serde_json::json!({
        "displayed_contribution_message": displayed,
        "asked_to_contribute_past": past,
        "asked_to_contribute_future": future,
    });
    fs::write(path, content.to_string()).unwrap();
}

#[allow(dead_code)]
pub fn read_cache(path: &Path) -> Value {
    serde_json::from_str(&fs::read_to_string(path).unwrap()).unwrap()
}

/// An address nothing is listening on.
#[allow(dead_code)]
pub fn closed_port_url() -> String {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let port = listener.local_addr().unwrap().port();
    drop(listener);
    format!("http://127.0.0.1:{}/contribute/", port)
}
