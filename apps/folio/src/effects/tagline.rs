use std::time::Duration;

use tokio::time::{interval_at, sleep, Instant};

use crate::effects::{Patch, PatchSender, FRAME};

const FADE: Duration = Duration::from_millis(500);

pub fn next_tagline_index(current: usize, len: usize) -> usize {
    if len == 0 {
        0
    } else {
        (current + 1) % len
    }
}

/// Cycles the landing tagline every `every`: fade out, swap the text, fade in.
/// Returns immediately when there is nothing to rotate. The period is never
/// shorter than one frame.
pub async fn run_tagline_rotation(
    target: String,
    taglines: Vec<String>,
    every: Duration,
    tx: PatchSender,
) {
    if taglines.len() < 2 {
        return;
    }
    let every = every.max(FRAME);
    let mut index = 0;
    let mut ticker = interval_at(Instant::now() + every, every);
    loop {
        ticker.tick().await;
        index = next_tagline_index(index, taglines.len());

        let fade_out = Patch::Style {
            target: target.clone(),
            property: "opacity",
            value: "0".to_string(),
        };
        if tx.send(fade_out).await.is_err() {
            return;
        }
        sleep(FADE).await;

        let swap = Patch::Text {
            target: target.clone(),
            text: taglines[index].clone(),
        };
        let fade_in = Patch::Style {
            target: target.clone(),
            property: "opacity",
            value: "1".to_string(),
        };
        if tx.send(swap).await.is_err() || tx.send(fade_in).await.is_err() {
            return;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::effects::{patch_channel, PatchReceiver, TaskHandle};

    fn texts(rx: &mut PatchReceiver) -> Vec<String> {
        let mut out = Vec::new();
        while let Ok(patch) = rx.try_recv() {
            if let Patch::Text { text, .. } = patch {
                out.push(text);
            }
        }
        out
    }

    #[test]
    fn test_index_wraps() {
        assert_eq!(next_tagline_index(0, 3), 1);
        assert_eq!(next_tagline_index(2, 3), 0);
        assert_eq!(next_tagline_index(0, 0), 0);
    }

    #[tokio::test(start_paused = true)]
    async fn test_rotates_and_wraps_around() {
        let (tx, mut rx) = patch_channel();
        let taglines = vec!["a".to_string(), "b".to_string(), "c".to_string()];
        let handle = TaskHandle::spawn(
            "tagline",
            run_tagline_rotation("landing-tagline".into(), taglines, Duration::from_secs(3), tx),
        );

        // three full cycles plus the fade of the third
        tokio::time::sleep(Duration::from_millis(9_600)).await;
        drop(handle);
        assert_eq!(texts(&mut rx), vec!["b", "c", "a"]);
    }

    #[tokio::test(start_paused = true)]
    async fn test_single_tagline_does_not_rotate() {
        let (tx, mut rx) = patch_channel();
        run_tagline_rotation(
            "landing-tagline".into(),
            vec!["only".to_string()],
            Duration::from_secs(3),
            tx,
        )
        .await;
        assert!(rx.try_recv().is_err());
    }

    #[tokio::test(start_paused = true)]
    async fn test_zero_interval_keeps_rotating() {
        let (tx, mut rx) = patch_channel();
        let taglines = vec!["a".to_string(), "b".to_string()];
        let handle = TaskHandle::spawn(
            "tagline",
            run_tagline_rotation("landing-tagline".into(), taglines, Duration::ZERO, tx),
        );

        tokio::time::sleep(Duration::from_secs(2)).await;
        assert!(!handle.is_finished());
        drop(handle);
        let seen = texts(&mut rx);
        assert!(seen.len() >= 2);
        assert_eq!(&seen[..2], ["b", "a"]);
    }
}
