//! Canvas Pong entry point
//!
//! Handles platform-specific initialization and runs the game loop.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
mod wasm_game {
    use std::cell::RefCell;
    use std::rc::Rc;
    use wasm_bindgen::prelude::*;
    use web_sys::{HtmlCanvasElement, MouseEvent};

    use canvas_pong::platform::{frame_delta, surface_y};
    use canvas_pong::renderer::RenderState;
    use canvas_pong::sim::GameEvent;
    use canvas_pong::{GameConfig, Session};

    /// Canvas element id
    const CANVAS_ID: &str = "pong";

    /// Game instance holding all state
    struct Game {
        session: Session,
        render_state: Option<RenderState>,
        last_time: Option<f64>,
    }

    impl Game {
        fn new(config: &GameConfig, seed: u64) -> Self {
            Self {
                session: Session::seeded(config, seed),
                render_state: None,
                last_time: None,
            }
        }

        /// Simulate and draw one animation frame
        fn frame(&mut self, time: f64) {
            let dt = frame_delta(self.last_time, time);
            self.last_time = Some(time);

            let Some(render_state) = self.render_state.as_mut() else {
                self.session.update(dt);
                return;
            };

            match self.session.frame(dt, render_state) {
                Ok(events) => {
                    for event in events {
                        if let GameEvent::Scored(side) = event {
                            let score = self.session.world.score;
                            log::info!("{:?} scores: {} - {}", side, score.left, score.right);
                        }
                    }
                }
                Err(wgpu::SurfaceError::Lost) => {
                    render_state.resize(render_state.size.0, render_state.size.1);
                }
                Err(wgpu::SurfaceError::OutOfMemory) => {
                    log::error!("Out of memory!");
                }
                Err(e) => log::warn!("Render error: {:?}", e),
            }
        }
    }

    fn js_err(msg: impl std::fmt::Display) -> JsValue {
        JsValue::from_str(&msg.to_string())
    }

    /// Config from the canvas `data-config` attribute, sized to the canvas by default
    fn load_config(canvas: &HtmlCanvasElement) -> Result<GameConfig, JsValue> {
        match canvas.get_attribute("data-config") {
            Some(json) => {
                let config = GameConfig::from_json(&json).map_err(js_err)?;
                log::info!("Loaded config from data-config");
                Ok(config)
            }
            None => {
                let config = GameConfig::default()
                    .with_surface(canvas.width() as f32, canvas.height() as f32);
                config.validate().map_err(js_err)?;
                Ok(config)
            }
        }
    }

    pub async fn run() -> Result<(), JsValue> {
        console_error_panic_hook::set_once();
        console_log::init_with_level(log::Level::Info).map_err(js_err)?;

        log::info!("Canvas Pong starting...");

        let window = web_sys::window().ok_or_else(|| js_err("no window"))?;
        let document = window.document().ok_or_else(|| js_err("no document"))?;

        let canvas: HtmlCanvasElement = document
            .get_element_by_id(CANVAS_ID)
            .ok_or_else(|| js_err("no canvas"))?
            .dyn_into()
            .map_err(|_| js_err("not a canvas"))?;

        let config = load_config(&canvas)?;

        // Backing store follows the displayed size; the playfield keeps its own units
        let dpr = window.device_pixel_ratio();
        let width = ((canvas.client_width() as f64 * dpr) as u32).max(1);
        let height = ((canvas.client_height() as f64 * dpr) as u32).max(1);
        canvas.set_width(width);
        canvas.set_height(height);

        let seed = js_sys::Date::now() as u64;
        let game = Rc::new(RefCell::new(Game::new(&config, seed)));

        let instance = wgpu::Instance::new(&wgpu::InstanceDescriptor {
            backends: wgpu::Backends::BROWSER_WEBGPU | wgpu::Backends::GL,
            ..Default::default()
        });

        let surface = instance
            .create_surface(wgpu::SurfaceTarget::Canvas(canvas.clone()))
            .map_err(js_err)?;

        let adapter = instance
            .request_adapter(&wgpu::RequestAdapterOptions {
                power_preference: wgpu::PowerPreference::HighPerformance,
                compatible_surface: Some(&surface),
                force_fallback_adapter: false,
            })
            .await
            .map_err(js_err)?;

        log::info!("Using adapter: {:?}", adapter.get_info().name);

        let render_state = RenderState::new(surface, &adapter, width, height)
            .await
            .map_err(js_err)?;
        game.borrow_mut().render_state = Some(render_state);

        setup_input_handlers(&canvas, game.clone());

        request_animation_frame(game);

        log::info!("Canvas Pong running!");
        Ok(())
    }

    fn setup_input_handlers(canvas: &HtmlCanvasElement, game: Rc<RefCell<Game>>) {
        // Mouse move - centre the left paddle on the pointer
        let canvas_clone = canvas.clone();
        let closure = Closure::<dyn FnMut(_)>::new(move |event: MouseEvent| {
            let rect = canvas_clone.get_bounding_client_rect();
            let mut g = game.borrow_mut();
            let y = surface_y(
                event.client_y() as f32,
                rect.top() as f32,
                rect.height() as f32,
                g.session.world.height(),
            );
            g.session.pointer_moved(y);
        });
        let _ = canvas.add_event_listener_with_callback("mousemove", closure.as_ref().unchecked_ref());
        closure.forget();
    }

    fn request_animation_frame(game: Rc<RefCell<Game>>) {
        let Some(window) = web_sys::window() else {
            log::error!("No window; frame loop stopped");
            return;
        };
        let closure = Closure::once(move |time: f64| {
            game_loop(game, time);
        });
        let _ = window.request_animation_frame(closure.as_ref().unchecked_ref());
        closure.forget();
    }

    fn game_loop(game: Rc<RefCell<Game>>, time: f64) {
        game.borrow_mut().frame(time);
        request_animation_frame(game);
    }
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub async fn wasm_main() -> Result<(), JsValue> {
    let result = wasm_game::run().await;
    if let Err(ref e) = result {
        log::error!("Startup failed: {:?}", e);
    }
    result
}

#[cfg(not(target_arch = "wasm32"))]
fn main() -> std::process::ExitCode {
    use canvas_pong::GameConfig;

    env_logger::init();
    log::info!("Canvas Pong (native) starting...");
    log::info!("Native mode runs a headless match - use `trunk serve` for the web version");

    let config = match std::env::args().nth(1) {
        Some(path) => match std::fs::read_to_string(&path)
            .map_err(|e| e.to_string())
            .and_then(|json| GameConfig::from_json(&json).map_err(|e| e.to_string()))
        {
            Ok(config) => config,
            Err(e) => {
                log::error!("Could not load config {}: {}", path, e);
                return std::process::ExitCode::FAILURE;
            }
        },
        None => GameConfig::default(),
    };

    headless::run(&config, 60.0);
    std::process::ExitCode::SUCCESS
}

#[cfg(not(target_arch = "wasm32"))]
mod headless {
    use std::convert::Infallible;
    use std::time::{SystemTime, UNIX_EPOCH};

    use canvas_pong::consts::SIM_DT;
    use canvas_pong::renderer::{RenderSink, build_scene};
    use canvas_pong::sim::{GameEvent, World};
    use canvas_pong::{GameConfig, Session};

    /// Builds the scene each frame without presenting it
    #[derive(Default)]
    struct SceneCounter {
        frames: u64,
        vertices: usize,
    }

    impl RenderSink for SceneCounter {
        type Error = Infallible;

        fn draw(&mut self, world: &World) -> Result<(), Infallible> {
            self.frames += 1;
            self.vertices = build_scene(world).len();
            Ok(())
        }
    }

    /// Whole reference frames in `seconds`, rounded to nearest
    fn frame_count(seconds: f32) -> u64 {
        (seconds / SIM_DT).round() as u64
    }

    /// Play `seconds` of AI vs a pointer that shadows the ball
    pub fn run(config: &GameConfig, seconds: f32) {
        let seed = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_millis() as u64)
            .unwrap_or(0);
        let mut session = Session::seeded(config, seed);
        let mut sink = SceneCounter::default();

        let frames = frame_count(seconds);
        for _ in 0..frames {
            let ball = &session.world.ball;
            let target = ball.pos.y + ball.size / 2.0;
            session.pointer_moved(target);

            let Ok(events) = session.frame(SIM_DT, &mut sink);
            for event in events {
                if let GameEvent::Scored(side) = event {
                    let score = session.world.score;
                    log::info!("{:?} scores: {} - {}", side, score.left, score.right);
                }
            }
        }

        let score = session.world.score;
        log::info!(
            "Finished after {} frames ({} vertices/frame): {} - {}",
            sink.frames,
            sink.vertices,
            score.left,
            score.right
        );
        println!("Final score: {} - {}", score.left, score.right);
    }

}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is wasm_main, this is just to satisfy the compiler
}
