//! Balloon Catcher entry point
//!
//! Handles platform-specific initialization and runs the game loop.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
mod wasm_game {
    use std::cell::RefCell;
    use std::rc::Rc;
    use wasm_bindgen::prelude::*;
    use web_sys::{Document, HtmlCanvasElement, MouseEvent, TouchEvent};

    use balloon_catcher::audio::AudioManager;
    use balloon_catcher::input::PointerMapper;
    use balloon_catcher::renderer::{RenderState, build_scene};
    use balloon_catcher::sim::{GamePhase, GameState};
    use balloon_catcher::{PointerTarget, Session, Settings};

    /// Game instance holding all state
    struct Game {
        session: Session<PointerTarget, AudioManager>,
        /// Writer half of the session's input slot
        pointer: PointerTarget,
        render_state: Option<RenderState>,
        settings: Settings,
        last_time: f64,
        /// Device pixels per CSS pixel
        dpr: f64,
    }

    impl Game {
        fn new(seed: u64, settings: Settings) -> Self {
            let pointer = PointerTarget::new();
            let audio = AudioManager::new(&settings);
            Self {
                session: Session::new(GameState::new(seed), pointer.clone(), audio),
                pointer,
                render_state: None,
                settings,
                last_time: 0.0,
                dpr: 1.0,
            }
        }

        fn run_active(&self) -> bool {
            self.session.phase() == GamePhase::Playing
        }

        /// Advance one simulation step
        fn update(&mut self, dt: f32) {
            let cosmetic_time = js_sys::Date::now() / 1000.0;
            self.session.frame(dt, cosmetic_time);
            self.session.sink_mut().update_music(dt);
        }

        /// Render the current frame
        fn render(&mut self) {
            let vertices = build_scene(self.session.state(), &self.settings);
            if let Some(ref mut render_state) = self.render_state {
                match render_state.render(&vertices) {
                    Ok(_) => {}
                    Err(wgpu::SurfaceError::Lost) => {
                        let (w, h) = render_state.size;
                        let viewport = render_state.viewport;
                        render_state.resize(w, h, viewport);
                    }
                    Err(wgpu::SurfaceError::OutOfMemory) => {
                        log::error!("Out of memory!");
                    }
                    Err(e) => log::warn!("Render error: {:?}", e),
                }
            }
        }

        /// Match the play area to the canvas's CSS size
        fn resize(&mut self, canvas: &HtmlCanvasElement) {
            let css_w = canvas.client_width() as f32;
            let css_h = canvas.client_height() as f32;
            let width = (css_w as f64 * self.dpr) as u32;
            let height = (css_h as f64 * self.dpr) as u32;
            canvas.set_width(width);
            canvas.set_height(height);

            self.session.resize(css_w, css_h);
            if let Some(ref mut render_state) = self.render_state {
                render_state.resize(width, height, (css_w, css_h));
            }
            log::debug!("Resized to {}x{} (surface {}x{})", css_w, css_h, width, height);
        }

        /// Update HUD elements in DOM
        fn update_hud(&self, document: &Document) {
            let phase = self.session.phase();

            if let Some(el) = document.query_selector("#hud-score .hud-value").ok().flatten() {
                el.set_text_content(Some(&self.session.score().to_string()));
            }
            set_visible(document, "hud", phase == GamePhase::Playing);
            set_visible(document, "start-screen", phase == GamePhase::Start);
            set_visible(document, "game-over", phase == GamePhase::GameOver);

            if let Some(summary) = self.session.summary() {
                if let Some(el) = document.get_element_by_id("final-score") {
                    el.set_text_content(Some(&summary.final_score.to_string()));
                }
                if let Some(el) = document.get_element_by_id("final-message") {
                    el.set_text_content(Some(summary.message()));
                }
            }

            if let Some(el) = document.get_element_by_id("autopilot-badge") {
                let class = if self.session.autopilot() { "" } else { "hidden" };
                let _ = el.set_attribute("class", class);
            }
        }

        fn start(&mut self) {
            self.session.sink_mut().resume();
            if self.session.start_game() {
                log::info!("Run started");
            }
        }

        fn restart(&mut self) {
            self.session.sink_mut().resume();
            if self.session.restart_game() {
                log::info!("Run restarted");
            }
        }

        fn toggle_mute(&mut self) {
            let muted = self.settings.toggle_mute();
            let run_active = self.run_active();
            self.session.sink_mut().set_muted(muted, run_active);
            self.settings.save();
            log::info!("Muted: {}", muted);
        }
    }

    fn set_visible(document: &Document, id: &str, visible: bool) {
        if let Some(el) = document.get_element_by_id(id) {
            let _ = el.set_attribute("class", if visible { "" } else { "hidden" });
        }
    }

    /// Client x of a mouse event in play-area pixels
    fn canvas_x(canvas: &HtmlCanvasElement, client_x: f32) -> Option<f32> {
        let rect = canvas.get_bounding_client_rect();
        PointerMapper::new(
            rect.left() as f32,
            rect.width() as f32,
            canvas.client_width() as f32,
        )
        .to_canvas_x(client_x)
    }

    pub async fn run() {
        console_error_panic_hook::set_once();
        if console_log::init_with_level(log::Level::Info).is_err() {
            web_sys::console::warn_1(&"Logger already initialized".into());
        }

        log::info!("Balloon Catcher starting...");

        let Some(window) = web_sys::window() else {
            return;
        };
        let Some(document) = window.document() else {
            return;
        };

        // Hide loading indicator
        if let Some(loading) = document.get_element_by_id("loading") {
            let _ = loading.set_attribute("class", "hidden");
        }

        let Some(canvas) = document
            .get_element_by_id("canvas")
            .and_then(|el| el.dyn_into::<HtmlCanvasElement>().ok())
        else {
            log::error!("No canvas element - cannot start");
            return;
        };

        let seed = js_sys::Date::now() as u64;
        let settings = Settings::load();
        let game = Rc::new(RefCell::new(Game::new(seed, settings)));
        game.borrow_mut().dpr = window.device_pixel_ratio();

        log::info!("Game initialized with seed: {}", seed);

        // Initialize WebGPU
        let instance = wgpu::Instance::new(&wgpu::InstanceDescriptor {
            backends: wgpu::Backends::BROWSER_WEBGPU | wgpu::Backends::GL,
            ..Default::default()
        });

        match instance.create_surface(wgpu::SurfaceTarget::Canvas(canvas.clone())) {
            Ok(surface) => {
                let adapter = instance
                    .request_adapter(&wgpu::RequestAdapterOptions {
                        power_preference: wgpu::PowerPreference::LowPower,
                        compatible_surface: Some(&surface),
                        force_fallback_adapter: false,
                    })
                    .await;
                match adapter {
                    Ok(adapter) => {
                        log::info!("Using adapter: {:?}", adapter.get_info().name);
                        let width = canvas.width().max(1);
                        let height = canvas.height().max(1);
                        game.borrow_mut().render_state =
                            RenderState::new(surface, &adapter, width, height).await;
                    }
                    Err(e) => log::warn!("No graphics adapter: {} - rendering disabled", e),
                }
            }
            Err(e) => log::warn!("Failed to create surface: {} - rendering disabled", e),
        }

        game.borrow_mut().resize(&canvas);

        setup_input_handlers(&canvas, game.clone());
        setup_buttons(game.clone());
        setup_page_listeners(&canvas, game.clone());

        request_animation_frame(game);

        log::info!("Balloon Catcher running!");
    }

    fn setup_input_handlers(canvas: &HtmlCanvasElement, game: Rc<RefCell<Game>>) {
        let Some(window) = web_sys::window() else {
            return;
        };
        let pointer = game.borrow().pointer.clone();

        // Mouse down and move share one handler
        for name in ["mousedown", "mousemove"] {
            let pointer = pointer.clone();
            let canvas_clone = canvas.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: MouseEvent| {
                if let Some(x) = canvas_x(&canvas_clone, event.client_x() as f32) {
                    pointer.set(x);
                }
            });
            let _ = canvas.add_event_listener_with_callback(name, closure.as_ref().unchecked_ref());
            closure.forget();
        }

        // Touch start and move share one handler
        for name in ["touchstart", "touchmove"] {
            let pointer = pointer.clone();
            let canvas_clone = canvas.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: TouchEvent| {
                event.prevent_default();
                if let Some(touch) = event.touches().get(0) {
                    if let Some(x) = canvas_x(&canvas_clone, touch.client_x() as f32) {
                        pointer.set(x);
                    }
                }
            });
            let _ = canvas.add_event_listener_with_callback(name, closure.as_ref().unchecked_ref());
            closure.forget();
        }

        // Touch end: keep the browser from synthesizing mouse events
        {
            let closure = Closure::<dyn FnMut(_)>::new(move |event: TouchEvent| {
                event.prevent_default();
            });
            let _ = canvas
                .add_event_listener_with_callback("touchend", closure.as_ref().unchecked_ref());
            closure.forget();
        }

        // Keyboard
        {
            let closure = Closure::<dyn FnMut(_)>::new(move |event: web_sys::KeyboardEvent| {
                let mut g = game.borrow_mut();
                match event.key().as_str() {
                    " " | "Enter" => match g.session.phase() {
                        GamePhase::Start => g.start(),
                        GamePhase::GameOver => g.restart(),
                        GamePhase::Playing => {}
                    },
                    "i" | "I" => {
                        let on = !g.session.autopilot();
                        g.session.set_autopilot(on);
                    }
                    "m" | "M" => g.toggle_mute(),
                    _ => {}
                }
            });
            let _ = window
                .add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref());
            closure.forget();
        }
    }

    fn setup_buttons(game: Rc<RefCell<Game>>) {
        let Some(document) = web_sys::window().and_then(|w| w.document()) else {
            return;
        };

        if let Some(btn) = document.get_element_by_id("start-btn") {
            let game = game.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |_event: MouseEvent| {
                game.borrow_mut().start();
            });
            let _ = btn.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
            closure.forget();
        }

        if let Some(btn) = document.get_element_by_id("restart-btn") {
            let game = game.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |_event: MouseEvent| {
                game.borrow_mut().restart();
            });
            let _ = btn.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
            closure.forget();
        }

        if let Some(btn) = document.get_element_by_id("quit-btn") {
            let closure = Closure::<dyn FnMut(_)>::new(move |_event: MouseEvent| {
                game.borrow_mut().session.quit_game();
            });
            let _ = btn.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
            closure.forget();
        }
    }

    fn setup_page_listeners(canvas: &HtmlCanvasElement, game: Rc<RefCell<Game>>) {
        let Some(window) = web_sys::window() else {
            return;
        };
        let Some(document) = window.document() else {
            return;
        };

        // Visibility change: duck audio while the tab is hidden
        {
            let game = game.clone();
            let document_clone = document.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |_event: web_sys::Event| {
                let mut g = game.borrow_mut();
                let volume = if document_clone.visibility_state() == web_sys::VisibilityState::Hidden
                {
                    g.settings.hidden_volume
                } else {
                    g.settings.master_volume
                };
                g.session.sink_mut().set_master_volume(volume);
                log::debug!("Page visibility changed, master volume {:.1}", volume);
            });
            let _ = document.add_event_listener_with_callback(
                "visibilitychange",
                closure.as_ref().unchecked_ref(),
            );
            closure.forget();
        }

        // Window resize
        {
            let canvas_clone = canvas.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |_event: web_sys::Event| {
                let mut g = game.borrow_mut();
                if let Some(w) = web_sys::window() {
                    g.dpr = w.device_pixel_ratio();
                }
                g.resize(&canvas_clone);
            });
            let _ =
                window.add_event_listener_with_callback("resize", closure.as_ref().unchecked_ref());
            closure.forget();
        }
    }

    fn request_animation_frame(game: Rc<RefCell<Game>>) {
        let Some(window) = web_sys::window() else {
            return;
        };
        let closure = Closure::once(move |time: f64| {
            game_loop(game, time);
        });
        let _ = window.request_animation_frame(closure.as_ref().unchecked_ref());
        closure.forget();
    }

    fn game_loop(game: Rc<RefCell<Game>>, time: f64) {
        {
            let mut g = game.borrow_mut();

            // Calculate delta time; the simulation clamps it further
            let dt = if g.last_time > 0.0 {
                ((time - g.last_time) / 1000.0) as f32
            } else {
                0.0
            };
            g.last_time = time;

            g.update(dt);
            g.render();
            if let Some(document) = web_sys::window().and_then(|w| w.document()) {
                g.update_hud(&document);
            }
        }

        request_animation_frame(game);
    }
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub async fn wasm_main() {
    wasm_game::run().await;
}

/// Headless demo: one autopilot run logged to stdout
///
/// Usage: `balloon-catcher [seed] [tuning.json]`
#[cfg(not(target_arch = "wasm32"))]
fn main() {
    use balloon_catcher::Session;
    use balloon_catcher::events::LogSink;
    use balloon_catcher::sim::{GamePhase, GameState};

    const FRAME_DT: f32 = 1.0 / 60.0;
    const MAX_FRAMES: u32 = 60 * 180;

    env_logger::init();
    log::info!("Balloon Catcher (native) starting...");
    log::info!("Native mode runs a headless autopilot demo - use `trunk serve` for the game");

    let mut args = std::env::args().skip(1);
    let seed = args
        .next()
        .and_then(|s| s.parse::<u64>().ok())
        .unwrap_or(42);
    let tuning = args.next().map(|path| load_tuning(&path)).unwrap_or_default();

    let mut state = GameState::with_tuning(seed, tuning);
    state.resize(800.0, 600.0);
    let mut session = Session::new(state, (), LogSink::default());
    session.set_autopilot(true);
    session.start_game();

    let mut frames = 0;
    while session.phase() == GamePhase::Playing && frames < MAX_FRAMES {
        session.frame(FRAME_DT, (frames as f32 * FRAME_DT) as f64);
        frames += 1;
    }

    let sink = session.sink();
    log::info!(
        "Ran {} frames: score {}, {} catches ({} bonus)",
        frames,
        session.score(),
        sink.catches,
        sink.bonus_catches
    );
    match session.summary() {
        Some(summary) => println!("{} - {}", summary.final_score, summary.message()),
        None => println!("Still catching after {} frames, score {}", frames, session.score()),
    }

    match serde_json::to_string_pretty(session.state()) {
        Ok(json) => log::debug!("Final state: {}", json),
        Err(e) => log::warn!("Could not serialize state: {}", e),
    }
}

/// Read a tuning JSON file, falling back to defaults on any problem
#[cfg(not(target_arch = "wasm32"))]
fn load_tuning(path: &str) -> balloon_catcher::sim::Tuning {
    use balloon_catcher::sim::Tuning;

    match std::fs::read_to_string(path) {
        Ok(json) => match Tuning::from_json(&json) {
            Ok(tuning) => {
                log::info!("Loaded tuning from {}", path);
                tuning
            }
            Err(e) => {
                log::warn!("Invalid tuning in {}: {} - using defaults", path, e);
                Tuning::default()
            }
        },
        Err(e) => {
            log::warn!("Could not read {}: {} - using defaults", path, e);
            Tuning::default()
        }
    }
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is wasm_main, this is just to satisfy the compiler
}
