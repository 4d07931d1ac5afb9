//! Progress reporting utilities: unbounded count spinner for paginated fetches.

use indicatif::{MultiProgress, ProgressBar, ProgressStyle};
use std::sync::{Arc, OnceLock};

/// Optional global MultiProgress that allows multiple bars to render
/// concurrently. If unset, bars draw to the default terminal target.
static GLOBAL_MP: OnceLock<Arc<MultiProgress>> = OnceLock::new();

/// Install a global MultiProgress used by all subsequently created bars.
/// Safe to call once; additional calls are ignored.
pub fn set_global_multiprogress(mp: Arc<MultiProgress>) {
    let _ = GLOBAL_MP.set(mp);
}

fn new_spinner() -> ProgressBar {
    if let Some(mp) = GLOBAL_MP.get() {
        mp.add(ProgressBar::new_spinner())
    } else {
        ProgressBar::new_spinner()
    }
}

/// Count-style spinner for fetches whose total is unknown until the final
/// empty page arrives.
pub fn make_fetch_spinner(label: Option<&str>) -> ProgressBar {
    let pb = new_spinner();
    let style = ProgressStyle::with_template(
        "{spinner:.green} {msg} {pos} fetched  it/s: {per_sec}  elapsed: {elapsed_precise}",
    )
    .unwrap();
    pb.set_style(style);
    if let Some(msg) = label {
        pb.set_message(msg.to_string());
    }
    pb.enable_steady_tick(std::time::Duration::from_millis(100));
    pb
}
