//! Blake the Snake entry point
//!
//! Handles platform-specific initialization and runs the game loop.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
mod wasm_game {
    use std::cell::RefCell;
    use std::rc::Rc;
    use wasm_bindgen::prelude::*;
    use web_sys::{HtmlCanvasElement, KeyboardEvent};

    use blake_snake::render::{CanvasSink, RenderSink};
    use blake_snake::sim::Bounds;
    use blake_snake::{GameConfig, Session};

    /// Game instance holding all state
    struct Game {
        session: Session,
        sink: CanvasSink,
        canvas: HtmlCanvasElement,
        last_time: f64,
    }

    impl Game {
        /// Run simulation ticks for the elapsed frame time
        fn update(&mut self, time: f64) {
            let dt = if self.last_time > 0.0 {
                ((time - self.last_time) / 1000.0) as f32
            } else {
                0.0
            };
            self.last_time = time;

            // Ticks run against the surface's current pixel size
            self.session.set_bounds(Bounds::new(
                self.canvas.width() as f32,
                self.canvas.height() as f32,
            ));
            self.session.update(dt);
        }

        /// Render the current frame
        fn render(&mut self) {
            let bounds = self.session.bounds();
            if let Err(e) = self.sink.present(self.session.state(), bounds) {
                log::warn!("Render error: {:?}", e);
            }
        }
    }

    pub fn run() -> Result<(), JsValue> {
        console_error_panic_hook::set_once();
        if let Err(e) = console_log::init_with_level(log::Level::Info) {
            web_sys::console::error_1(&JsValue::from_str(&e.to_string()));
        }

        log::info!("Blake the snake starting...");

        let window = web_sys::window().ok_or_else(|| JsValue::from_str("no window"))?;
        let document = window
            .document()
            .ok_or_else(|| JsValue::from_str("no document"))?;

        let canvas: HtmlCanvasElement = document
            .get_element_by_id("gameCanvas")
            .ok_or_else(|| JsValue::from_str("no #gameCanvas element"))?
            .dyn_into()?;

        let config = GameConfig::load();
        canvas.set_width(config.field_width as u32);
        canvas.set_height(config.field_height as u32);

        let seed = js_sys::Date::now() as u64;
        let session =
            Session::new(&config, seed).map_err(|e| JsValue::from_str(&e.to_string()))?;
        let sink = CanvasSink::new(&canvas)?;

        setup_input_handlers(&window, &session)?;

        let game = Rc::new(RefCell::new(Game {
            session,
            sink,
            canvas,
            last_time: 0.0,
        }));

        request_animation_frame(game);

        log::info!("Blake the snake running!");
        Ok(())
    }

    fn setup_input_handlers(window: &web_sys::Window, session: &Session) -> Result<(), JsValue> {
        let latch = session.latch();
        let closure = Closure::<dyn FnMut(_)>::new(move |event: KeyboardEvent| {
            // Arrow keys would otherwise scroll the page
            if latch.on_key(&event.code()) {
                event.prevent_default();
            }
        });
        window.add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref())?;
        closure.forget();
        Ok(())
    }

    fn request_animation_frame(game: Rc<RefCell<Game>>) {
        let Some(window) = web_sys::window() else {
            log::error!("Lost window, stopping game loop");
            return;
        };
        let closure = Closure::once(move |time: f64| {
            game_loop(game, time);
        });
        if let Err(e) = window.request_animation_frame(closure.as_ref().unchecked_ref()) {
            log::error!("requestAnimationFrame failed: {:?}", e);
        }
        closure.forget();
    }

    fn game_loop(game: Rc<RefCell<Game>>, time: f64) {
        {
            let mut g = game.borrow_mut();
            g.update(time);
            g.render();
        }

        request_animation_frame(game);
    }
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn wasm_main() {
    if let Err(e) = wasm_game::run() {
        log::error!("Startup failed: {:?}", e);
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    env_logger::init();
    log::info!("Blake the snake (native) starting...");
    log::info!("Native mode runs a headless demo - build for wasm32 to play in a browser");

    run_headless_demo();
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is wasm_main, this is just to satisfy the compiler
}

/// Steer toward the food, preferring the axis with the larger gap
#[cfg(not(target_arch = "wasm32"))]
fn autopilot_key(state: &blake_snake::sim::GameState) -> &'static str {
    let avatar_center = state.avatar_pos + state.avatar_size as f32 / 2.0;
    let food_center = state.food_pos + state.food_size as f32 / 2.0;
    let gap = food_center - avatar_center;

    if gap.x.abs() >= gap.y.abs() {
        if gap.x < 0.0 { "ArrowLeft" } else { "ArrowRight" }
    } else if gap.y < 0.0 {
        "ArrowUp"
    } else {
        "ArrowDown"
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn run_headless_demo() {
    use blake_snake::render::hud_text;
    use blake_snake::{GameConfig, Session};

    const MAX_TICKS: u64 = 60 * 60;
    const FOOD_GOAL: u64 = 10;

    let config = GameConfig::load();
    let seed = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .map(|d| d.as_nanos() as u64)
        .unwrap_or(0);

    let mut session = match Session::new(&config, seed) {
        Ok(session) => session,
        Err(e) => {
            log::error!("Invalid config: {}", e);
            return;
        }
    };
    let latch = session.latch();

    // Chase food until the goal, then ride straight into a wall
    while !session.state().game_over && session.ticks() < MAX_TICKS {
        if session.state().score < FOOD_GOAL {
            latch.on_key(autopilot_key(session.state()));
        } else {
            latch.on_key("ArrowUp");
        }
        session.tick();
    }

    println!("{}", hud_text(session.state()));
    if session.state().game_over {
        println!("GAME OVER after {} ticks", session.ticks());
    } else {
        println!("Stopped after {} ticks", session.ticks());
    }
}
