use crate::dom::Element;
use crate::models::ImpactMeter;
use crate::render::{ids, Fragment};

/// Impact counters. Each starts at `prefix + 0 + unit` and carries its target
/// in data attributes for the counter tween.
pub fn render_impact_meters(meters: &[ImpactMeter]) -> Fragment {
    meters
        .iter()
        .enumerate()
        .map(|(i, meter)| {
            let initial = format!("{}0{}", meter.prefix(), meter.unit());
            Element::new("div")
                .class("glass-panel p-6 rounded-xl")
                .child(
                    Element::new("div")
                        .id(ids::meter(i))
                        .class("font-orbitron text-4xl font-bold text-cyan-400")
                        .attr("data-value", meter.value.to_string())
                        .attr("data-prefix", meter.prefix())
                        .attr("data-unit", meter.unit())
                        .text(initial),
                )
                .child(
                    Element::new("div")
                        .class("text-sm text-slate-400 mt-2")
                        .text(meter.label.as_str()),
                )
                .into()
        })
        .collect()
}
