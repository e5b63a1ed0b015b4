//! Tweens: time-interpolated display values.

use std::time::Duration;

use tokio::time::{interval, Instant, MissedTickBehavior};

use crate::effects::{Patch, PatchSender, FRAME};
use crate::models::ImpactMeter;
use crate::render::Side;

/// Quadratic ease-in-out.
pub fn ease_power1_in_out(t: f64) -> f64 {
    let t = t.clamp(0.0, 1.0);
    if t < 0.5 {
        2.0 * t * t
    } else {
        1.0 - (-2.0 * t + 2.0).powi(2) / 2.0
    }
}

/// Quadratic ease-out.
pub fn ease_power1_out(t: f64) -> f64 {
    let t = t.clamp(0.0, 1.0);
    1.0 - (1.0 - t) * (1.0 - t)
}

fn progress(elapsed: Duration, duration: Duration) -> f64 {
    if duration.is_zero() {
        return 1.0;
    }
    (elapsed.as_secs_f64() / duration.as_secs_f64()).min(1.0)
}

/// Counts an impact meter up from zero.
#[derive(Debug, Clone, PartialEq)]
pub struct CounterTween {
    pub prefix: String,
    pub unit: String,
    pub end: f64,
    pub duration: Duration,
}

impl CounterTween {
    pub fn for_meter(meter: &ImpactMeter, duration: Duration) -> Self {
        Self {
            prefix: meter.prefix().to_string(),
            unit: meter.unit().to_string(),
            end: meter.value,
            duration,
        }
    }

    /// Display text `elapsed` into the tween. Intermediate values are rounded
    /// up; once the duration has passed the exact end value is shown.
    pub fn text_at(&self, elapsed: Duration) -> String {
        if elapsed >= self.duration {
            return self.final_text();
        }
        let value = self.end * ease_power1_in_out(progress(elapsed, self.duration));
        format!("{}{}{}", self.prefix, value.ceil(), self.unit)
    }

    pub fn final_text(&self) -> String {
        format!("{}{}{}", self.prefix, self.end, self.unit)
    }
}

/// Drives `target`'s text through the tween, one patch per frame.
pub async fn run_counter(target: String, tween: CounterTween, tx: PatchSender) {
    let start = Instant::now();
    let mut ticker = interval(FRAME);
    ticker.set_missed_tick_behavior(MissedTickBehavior::Skip);
    loop {
        ticker.tick().await;
        let elapsed = start.elapsed();
        let text = tween.text_at(elapsed);
        let frame = Patch::Text {
            target: target.clone(),
            text,
        };
        if tx.send(frame).await.is_err() {
            return;
        }
        if elapsed >= tween.duration {
            return;
        }
    }
}

/// Style values for a timeline item sliding in from its side.
pub fn reveal_frame(side: Side, t: f64) -> (String, String) {
    let eased = ease_power1_out(t);
    // `+ 0.0` normalises -0.0 so a finished left reveal prints 0.0
    let offset = side.reveal_offset() * (1.0 - eased) + 0.0;
    (format!("{eased:.3}"), format!("translateX({offset:.1}px)"))
}

/// Fades and slides `target` into place over `duration`.
pub async fn run_reveal(target: String, side: Side, duration: Duration, tx: PatchSender) {
    let start = Instant::now();
    let mut ticker = interval(FRAME);
    ticker.set_missed_tick_behavior(MissedTickBehavior::Skip);
    loop {
        ticker.tick().await;
        let t = progress(start.elapsed(), duration);
        let (opacity, transform) = reveal_frame(side, t);
        let opacity = Patch::Style {
            target: target.clone(),
            property: "opacity",
            value: opacity,
        };
        let transform = Patch::Style {
            target: target.clone(),
            property: "transform",
            value: transform,
        };
        if tx.send(opacity).await.is_err() || tx.send(transform).await.is_err() || t >= 1.0 {
            return;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::effects::patch_channel;

    fn tween(end: f64, prefix: &str, unit: &str) -> CounterTween {
        CounterTween {
            prefix: prefix.to_string(),
            unit: unit.to_string(),
            end,
            duration: Duration::from_secs(2),
        }
    }

    #[test]
    fn test_ease_endpoints() {
        assert_eq!(ease_power1_in_out(0.0), 0.0);
        assert_eq!(ease_power1_in_out(1.0), 1.0);
        assert_eq!(ease_power1_in_out(0.5), 0.5);
        assert_eq!(ease_power1_out(1.0), 1.0);
    }

    #[test]
    fn test_intermediate_values_round_up() {
        let t = tween(150.0, "$", "M");
        // halfway: eased 0.5 → 75
        assert_eq!(t.text_at(Duration::from_millis(1000)), "$75M");
        assert_eq!(t.text_at(Duration::ZERO), "$0M");
    }

    #[test]
    fn test_final_text_is_exact_for_fractional_values() {
        let t = tween(2.5, "", "x");
        // Intermediate ceil overshoots to 3x, the end value does not.
        assert_eq!(t.text_at(Duration::from_millis(1990)), "3x");
        assert_eq!(t.text_at(Duration::from_secs(2)), "2.5x");
        assert_eq!(t.text_at(Duration::from_secs(5)), "2.5x");
    }

    #[test]
    fn test_reveal_frame_ends_in_place() {
        let (opacity, transform) = reveal_frame(Side::Left, 0.0);
        assert_eq!(opacity, "0.000");
        assert_eq!(transform, "translateX(-100.0px)");
        let (opacity, transform) = reveal_frame(Side::Right, 1.0);
        assert_eq!(opacity, "1.000");
        assert_eq!(transform, "translateX(0.0px)");
    }

    #[tokio::test(start_paused = true)]
    async fn test_counter_completes_with_exact_text() {
        let (tx, mut rx) = patch_channel();
        run_counter("meter-0".to_string(), tween(98.6, "", "%"), tx).await;

        let mut last = None;
        let mut frames = 0;
        while let Ok(Patch::Text { target, text }) = rx.try_recv() {
            assert_eq!(target, "meter-0");
            last = Some(text);
            frames += 1;
        }
        assert!(frames > 2);
        assert_eq!(last.as_deref(), Some("98.6%"));
    }

    #[tokio::test(start_paused = true)]
    async fn test_reveal_ends_fully_visible() {
        let (tx, mut rx) = patch_channel();
        run_reveal(
            "timeline-item-0".to_string(),
            Side::Right,
            Duration::from_secs(1),
            tx,
        )
        .await;

        let mut last_opacity = String::new();
        let mut last_transform = String::new();
        while let Ok(patch) = rx.try_recv() {
            if let Patch::Style { property, value, .. } = patch {
                match property {
                    "opacity" => last_opacity = value,
                    "transform" => last_transform = value,
                    _ => {}
                }
            }
        }
        assert_eq!(last_opacity, "1.000");
        assert_eq!(last_transform, "translateX(0.0px)");
    }
}
