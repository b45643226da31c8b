//! Window construction and diverse selection over scored days.

use std::collections::BTreeSet;

use log::debug;

use crate::scan_types::{DayScore, DayWindow, ScanConfig, SlowSignature};
use crate::score::romance_score;

/// Grows candidate windows around score peaks.
///
/// Days are visited in descending score order (ties to the earlier date).
/// Each unclaimed day seeds a window that extends over neighboring
/// unclaimed days scoring at least `expansion_threshold` of the peak; the
/// whole range is then claimed so later, weaker peaks cannot reuse it.
/// Candidates come back strongest peak first.
pub fn build_windows(days: &[DayScore], config: &ScanConfig) -> Vec<DayWindow> {
    let mut order: Vec<usize> = (0..days.len()).collect();
    order.sort_by(|&a, &b| {
        days[b]
            .score
            .total_cmp(&days[a].score)
            .then_with(|| days[a].date.cmp(&days[b].date))
    });

    let mut claimed = vec![false; days.len()];
    let mut windows = Vec::new();
    for &peak in &order {
        if claimed[peak] {
            continue;
        }
        let floor = config.expansion_threshold * days[peak].score;
        let mut start = peak;
        while start > 0 && !claimed[start - 1] && days[start - 1].score >= floor {
            start -= 1;
        }
        let mut end = peak;
        while end + 1 < days.len() && !claimed[end + 1] && days[end + 1].score >= floor {
            end += 1;
        }
        for flag in &mut claimed[start..=end] {
            *flag = true;
        }
        windows.push(window_from_range(days, start, end, peak, config));
    }
    windows
}

/// Picks up to `max_windows` mutually diverse windows.
///
/// Candidates are taken strongest first; a candidate is kept only when its
/// peak lies at least `min_peak_separation_days` from every kept peak and
/// it shares fewer than `max_shared_slow_signatures` slow signatures with
/// every kept window.
pub fn select_diverse(mut candidates: Vec<DayWindow>, config: &ScanConfig) -> Vec<DayWindow> {
    candidates.sort_by(|a, b| {
        b.score
            .total_cmp(&a.score)
            .then_with(|| a.peak_date.cmp(&b.peak_date))
    });

    let mut selected: Vec<DayWindow> = Vec::new();
    for window in candidates {
        if selected.len() >= config.max_windows {
            break;
        }
        let compatible = selected.iter().all(|kept| {
            let gap = window
                .peak_date
                .signed_duration_since(kept.peak_date)
                .num_days()
                .abs();
            let shared = window
                .slow_signatures
                .intersection(&kept.slow_signatures)
                .count();
            gap >= config.min_peak_separation_days && shared < config.max_shared_slow_signatures
        });
        if compatible {
            debug!(
                "selected window {} .. {} (peak {}, score {:.3})",
                window.start_date, window.end_date, window.peak_date, window.score
            );
            selected.push(window);
        }
    }
    selected
}

fn window_from_range(
    days: &[DayScore],
    start: usize,
    end: usize,
    peak: usize,
    config: &ScanConfig,
) -> DayWindow {
    let mut moon_signs = Vec::new();
    for day in &days[start..=end] {
        if moon_signs.last() != Some(&day.moon_sign) {
            moon_signs.push(day.moon_sign);
        }
    }

    let mut representative: Vec<_> = days[peak]
        .aspects
        .iter()
        .filter(|m| m.kind.is_harmonious())
        .copied()
        .collect();
    representative.sort_by(|a, b| romance_score(b).total_cmp(&romance_score(a)));
    representative.truncate(config.max_representative_aspects);

    let mut slow_signatures = BTreeSet::new();
    for day in &days[start..=end] {
        for m in &day.aspects {
            if let Some(sig) = SlowSignature::from_match(m) {
                slow_signatures.insert(sig);
            }
        }
    }

    DayWindow {
        start_date: days[start].date,
        end_date: days[end].date,
        peak_date: days[peak].date,
        score: days[peak].score,
        moon_signs,
        representative_aspects: representative,
        slow_signatures,
    }
}
