use std::cell::RefCell;
use std::rc::Rc;

use anyhow::Context;
use tabsync_core::SyncConfig;
use tabsync_ui::TabStrip;
use web_time::Duration;

const TAB_WIDTHS: [f32; 8] = [96.0, 140.0, 72.0, 180.0, 110.0, 64.0, 150.0, 120.0];
const VIEWPORT: f32 = 320.0;
const FRAME: Duration = Duration::from_millis(16);

/// Stand-in for a pager's page animation: ease-out from `from` to `to`.
struct PageTween {
    from: f32,
    to: f32,
    frame: u32,
    frames: u32,
}

impl PageTween {
    fn new(from: f32, to: f32, frames: u32) -> Self {
        Self {
            from,
            to,
            frame: 0,
            frames: frames.max(1),
        }
    }

    fn next(&mut self) -> Option<f32> {
        if self.frame >= self.frames {
            return None;
        }
        self.frame += 1;
        let t = self.frame as f32 / self.frames as f32;
        let eased = 1.0 - (1.0 - t).powi(3);
        Some(self.from + (self.to - self.from) * eased)
    }
}

fn load_config() -> anyhow::Result<SyncConfig> {
    let Some(path) = std::env::args().nth(1) else {
        return Ok(SyncConfig::default());
    };
    let text = std::fs::read_to_string(&path).with_context(|| format!("reading {path}"))?;
    let config = serde_json::from_str(&text).with_context(|| format!("parsing {path}"))?;
    Ok(config)
}

fn run_tween(tabs: &mut TabStrip, tween: &mut PageTween) {
    while let Some(position) = tween.next() {
        let outcome = tabs.pager_moved(position);
        let line = tabs.underline().get();
        log::info!(
            "pager {position:.3}: {outcome:?} strip={:.1} underline={:.1}+{:.1}",
            tabs.strip().get(),
            line.left,
            line.width
        );
        std::thread::sleep(FRAME);
    }
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let config = load_config()?;
    log::info!("Starting tab pager demo ({config:?})");

    let mut tabs = TabStrip::with_config(&TAB_WIDTHS, VIEWPORT, config);

    let last = tabs.sync().layout().last_index().context("no tabs")?;
    let far_end = tabs.sync().layout().offset_for_position(last, 0.0)?;
    log::info!("strip scrolls between 0 and {far_end:.1}");

    let requests = Rc::new(RefCell::new(Vec::new()));
    tabs.pager().requested().subscribe({
        let requests = requests.clone();
        move |page| {
            if let Some(page) = page {
                requests.borrow_mut().push(*page);
            }
        }
    });

    log::info!("-- swipe 0 -> 3");
    for (from, to) in [(0.0, 1.0), (1.0, 2.0), (2.0, 3.0)] {
        run_tween(&mut tabs, &mut PageTween::new(from, to, 12));
    }

    log::info!("-- drag strip back, then tap tab 6");
    let leftover = tabs.drag_strip(-400.0);
    log::info!("drag leftover {leftover:.1}, strip at {:.1}", tabs.strip().get());
    tabs.press(6);

    let pending: Vec<usize> = requests.borrow_mut().drain(..).collect();
    for page in pending {
        let from = tabs.sync().positions().reference;
        run_tween(&mut tabs, &mut PageTween::new(from, page as f32, 20));
    }

    while tabs.sync().is_page_press() {
        std::thread::sleep(FRAME);
        if tabs.tick() {
            log::info!("press window closed, phase {:?}", tabs.sync().phase());
        }
    }

    tabs.dispose();
    Ok(())
}
