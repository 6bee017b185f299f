//! Bitmap text demo application
//!
//! Headless host for the text widgets. Loads an optional TOML/RON config
//! given as the first argument, builds a status line, a scrollable log and a
//! text box, then runs a scripted pointer and keyboard session through the
//! widget manager at a fixed 16 ms step. Draw commands go to a
//! `CommandRecorder`; run with `RUST_LOG=debug` to see them per frame.

use std::path::PathBuf;
use std::sync::Arc;
use std::time::{Duration, Instant};

use bitmap_text::foundation::logging;
use bitmap_text::prelude::*;

const FRAME_STEP: Duration = Duration::from_millis(16);
const FRAMES: u64 = 240;

const LOG_TEXT: &str = "SHIP LOG\n\
    DAY 1: LEFT THE STATION WITH A FULL HOLD AND A NERVOUS CREW.\n\
    DAY 2: ROCKS EVERYWHERE. THE PILOT CLAIMS THIS IS FINE.\n\
    DAY 3: IT WAS NOT FINE.\n\
    DAY 4: PATCHED THE HULL WITH WHAT WAS LEFT OF THE GALLEY.\n\
    DAY 5: STATION IN SIGHT.";

#[derive(Debug, thiserror::Error)]
enum DemoError {
    #[error("config: {0}")]
    Config(#[from] ConfigError),

    #[error("assets: {0}")]
    Asset(#[from] AssetError),

    #[error("render: {0}")]
    Render(#[from] RenderError),
}

/// One scripted input, queued on a given frame
struct ScriptStep {
    frame: u64,
    event: InputEvent,
}

struct DemoApp {
    manager: WidgetManager,
    backend: CommandRecorder,
    clock: FrameClock,
    start: Instant,
    status: WidgetId,
    script: Vec<ScriptStep>,
}

impl DemoApp {
    fn new(config: &EngineConfig) -> Result<Self, DemoError> {
        let mut backend = CommandRecorder::new();
        let mut fonts = FontRegistry::new().with_search_dir("assets");
        let font = load_font(&mut fonts, config, &mut backend)?;

        let mut manager = WidgetManager::new();
        let status = manager.add(TextPresenter::with_style(
            Arc::clone(&font),
            Rect::new(8, 4, 240, 7),
            "LOADING...",
            &config.text,
        ));

        let log_region = Rect::new(8, 16, 127, 70);
        let log = manager.add(ScrollableText::with_style(
            Arc::clone(&font),
            log_region,
            LOG_TEXT,
            &config.text,
            &config.scrollbar,
        ));
        manager.add(TextBox::new(font, 8, 92, "PRESS END"));

        let strip_x = log_region.right() - config.scrollbar.width / 2 - 1;
        let script = scripted_session(strip_x, log_region);
        log::info!("Demo ready: {} widgets, {} scripted inputs", manager.len(), script.len());
        manager.set_focus(Some(log));

        let start = Instant::now();
        Ok(Self {
            manager,
            backend,
            clock: FrameClock::starting_at(start),
            start,
            status,
            script,
        })
    }

    fn run(&mut self) -> Result<(), DemoError> {
        for frame in 0..FRAMES {
            for step in self.script.iter().filter(|step| step.frame == frame) {
                self.manager.queue(step.event);
            }

            let now = self.start + FRAME_STEP * (frame as u32 + 1);
            let elapsed = self.clock.tick_at(now);

            self.backend.clear();
            let redraw = self.manager.frame(elapsed, &mut self.backend)?;
            if redraw {
                self.update_status(frame);
            }

            log::debug!(
                "frame {:3}: {:3} commands ({} blits)",
                frame,
                self.backend.commands().len(),
                self.backend.blit_count()
            );
        }

        log::info!(
            "Ran {} frames covering {} ms",
            self.clock.frame_count(),
            self.clock.total_ms()
        );
        Ok(())
    }

    fn update_status(&mut self, frame: u64) {
        let Some(log) = self.manager.focus().and_then(|id| self.manager.get(id)) else {
            return;
        };
        let presenter = log.presenter();
        let message = format!(
            "LINE {} OF {}",
            presenter.scroll_position() + 1,
            presenter.line_count()
        );

        if let Some(status) = self.manager.get_mut(self.status) {
            log::info!("frame {}: {}", frame, message);
            status.set_message(&message);
        }
    }
}

fn load_font(
    fonts: &mut FontRegistry,
    config: &EngineConfig,
    backend: &mut CommandRecorder,
) -> Result<Arc<BitmapFont>, DemoError> {
    let metrics = config.text.font.metrics();
    match fonts.load(&config.text.font.bitmap, metrics, backend) {
        Ok(font) => Ok(font),
        Err(AssetError::NotFound(name)) => {
            log::warn!("Font bitmap '{}' not found, drawing with a blank atlas", name);
            let blank = ImageData::solid_color(65 * metrics.cell_width, metrics.cell_height, [0xff; 4]);
            Ok(fonts.register_image("blank", &blank, metrics, backend)?)
        }
        Err(e) => Err(e.into()),
    }
}

/// Hover the strip, click the down arrow twice, drag the thumb to the
/// bottom, wheel back up and finish with the End key
fn scripted_session(strip_x: i32, region: Rect) -> Vec<ScriptStep> {
    let down_arrow_y = region.bottom() - 3;
    let thumb_y = region.y + 9;
    let at = |frame, event: PointerEvent| ScriptStep {
        frame,
        event: event.into(),
    };

    vec![
        at(20, PointerEvent::moved(strip_x, region.y + region.h / 2)),
        at(30, PointerEvent::down(strip_x, down_arrow_y, MouseButton::Left)),
        at(31, PointerEvent::up(strip_x, down_arrow_y, MouseButton::Left)),
        at(40, PointerEvent::down(strip_x, down_arrow_y, MouseButton::Left)),
        at(41, PointerEvent::up(strip_x, down_arrow_y, MouseButton::Left)),
        at(60, PointerEvent::down(strip_x, thumb_y, MouseButton::Left)),
        at(70, PointerEvent::moved(strip_x, thumb_y + region.h)),
        at(80, PointerEvent::up(strip_x, thumb_y + region.h, MouseButton::Left)),
        at(100, PointerEvent::wheel(region.x + 4, region.y + 4, -3)),
        at(120, PointerEvent::moved(0, 0)),
        ScriptStep {
            frame: 140,
            event: KeyCode::End.into(),
        },
    ]
}

fn load_config() -> Result<EngineConfig, DemoError> {
    match std::env::args_os().nth(1).map(PathBuf::from) {
        Some(path) => Ok(EngineConfig::load_from_file(&path)?),
        None => Ok(EngineConfig::default()),
    }
}

fn main() -> Result<(), DemoError> {
    let config = load_config()?;
    logging::init_with_level(&config.log_level);

    let mut app = DemoApp::new(&config)?;
    app.run()
}
