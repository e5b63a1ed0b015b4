use std::time::Duration;

use tokio::time::interval;

use crate::effects::{Patch, PatchSender, FRAME};

/// The first `count` characters of `text` (not bytes).
pub fn typed_prefix(text: &str, count: usize) -> &str {
    match text.char_indices().nth(count) {
        Some((idx, _)) => &text[..idx],
        None => text,
    }
}

/// Types `text` into `target` one character per tick, starting from empty.
/// Ticks are never shorter than one frame.
pub async fn run_typing(target: String, text: String, every: Duration, tx: PatchSender) {
    let total = text.chars().count();
    let mut ticker = interval(every.max(FRAME));
    for count in 0..=total {
        ticker.tick().await;
        let patch = Patch::Text {
            target: target.clone(),
            text: typed_prefix(&text, count).to_string(),
        };
        if tx.send(patch).await.is_err() {
            return;
        }
    }
}
