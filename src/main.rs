//! Flappy entry point
//!
//! Handles platform-specific initialization and runs the game loop.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
mod wasm_game {
    use std::cell::RefCell;
    use std::rc::Rc;
    use wasm_bindgen::prelude::*;
    use web_sys::{Document, Element, HtmlCanvasElement, KeyboardEvent, MouseEvent, TouchEvent};

    use flappy::Settings;
    use flappy::audio::AudioManager;
    use flappy::consts::*;
    use flappy::renderer::{RenderState, build_scene};
    use flappy::sim::{GamePhase, GameState, TickInput, tick};
    use flappy::ui::{self, Label};

    /// Game instance holding all state
    struct Game {
        state: GameState,
        settings: Settings,
        render_state: Option<RenderState>,
        audio: AudioManager,
        accumulator: f32,
        last_time: f64,
        input: TickInput,
        /// Canvas size in CSS pixels, for pointer mapping
        canvas_size: (f32, f32),
        // FPS tracking
        frame_times: [f64; 60],
        frame_index: usize,
        fps: u32,
        // Track phase for logging
        last_phase: GamePhase,
        // Overlay text nodes, reused across frames
        label_nodes: Vec<Element>,
        last_labels: Vec<Label>,
        stopped: bool,
    }

    impl Game {
        fn new(seed: u64, settings: Settings) -> Self {
            let input = TickInput {
                idle_mode: settings.autopilot,
                ..Default::default()
            };
            Self {
                state: GameState::new(seed),
                audio: AudioManager::new(&settings),
                settings,
                render_state: None,
                accumulator: 0.0,
                last_time: 0.0,
                input,
                canvas_size: (WIDTH as f32, HEIGHT as f32),
                frame_times: [0.0; 60],
                frame_index: 0,
                fps: 0,
                last_phase: GamePhase::Splash,
                label_nodes: Vec::new(),
                last_labels: Vec::new(),
                stopped: false,
            }
        }

        /// Convert canvas-relative CSS pixels to game units
        fn to_game(&self, x: f32, y: f32) -> glam::Vec2 {
            let (w, h) = self.canvas_size;
            glam::Vec2::new(x * WIDTH as f32 / w.max(1.0), y * HEIGHT as f32 / h.max(1.0))
        }

        /// Run simulation ticks
        fn update(&mut self, dt: f32, time: f64) {
            let dt = dt.min(0.1);
            self.accumulator += dt;

            let mut substeps = 0;
            while self.accumulator >= SIM_DT && substeps < MAX_SUBSTEPS {
                tick(&mut self.state, &self.input);
                self.accumulator -= SIM_DT;
                substeps += 1;

                // Clear one-shot inputs after processing. Presses that land
                // before the next tick coalesce into a single action.
                self.input.activate = false;
                self.input.click = false;
                self.input.menu = false;

                let events = self.state.drain_events();
                self.audio.play_events(&events);
            }

            // Track frame times for FPS
            self.frame_times[self.frame_index] = time;
            self.frame_index = (self.frame_index + 1) % 60;

            // Calculate FPS from oldest to newest frame
            let oldest_time = self.frame_times[self.frame_index];
            if oldest_time > 0.0 {
                let elapsed = time - oldest_time;
                if elapsed > 0.0 {
                    self.fps = (60000.0 / elapsed).round() as u32;
                }
            }

            let current_phase = self.state.phase;
            if current_phase != self.last_phase {
                log::info!(
                    "{:?} -> {:?} (score {}, best {})",
                    self.last_phase,
                    current_phase,
                    self.state.score,
                    self.state.best_score
                );
                self.last_phase = current_phase;
            }

            if self.state.quit_requested && !self.stopped {
                self.stop();
            }
        }

        /// Render the current frame
        fn render(&mut self) {
            let hovered = self
                .input
                .pointer
                .and_then(|p| ui::button_at(self.state.phase, p));
            if let Some(ref mut render_state) = self.render_state {
                let vertices = build_scene(&self.state, hovered);
                match render_state.render(&vertices) {
                    Ok(_) => {}
                    Err(wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated) => {
                        render_state.resize(render_state.size.0, render_state.size.1);
                    }
                    Err(wgpu::SurfaceError::OutOfMemory) => {
                        log::error!("Out of memory!");
                    }
                    Err(e) => log::warn!("Render error: {:?}", e),
                }
            }
        }

        /// Mirror overlay labels into DOM nodes
        fn update_overlay(&mut self, document: &Document) {
            if let Some(el) = document.get_element_by_id("fps") {
                if self.settings.show_fps {
                    el.set_text_content(Some(&format!("{} fps", self.fps)));
                    let _ = el.set_attribute("class", "");
                } else {
                    let _ = el.set_attribute("class", "hidden");
                }
            }

            let labels = ui::labels(&self.state);
            if labels == self.last_labels {
                return;
            }
            let Some(overlay) = document.get_element_by_id("overlay") else {
                return;
            };

            while self.label_nodes.len() < labels.len() {
                let Ok(node) = document.create_element("div") else {
                    return;
                };
                if overlay.append_child(&node).is_err() {
                    return;
                }
                self.label_nodes.push(node);
            }

            let px_per_unit = self.canvas_size.1 / HEIGHT as f32;
            for (i, node) in self.label_nodes.iter().enumerate() {
                match labels.get(i) {
                    Some(label) => {
                        let [r, g, b] = label.color;
                        let style = format!(
                            "left:{:.3}%;top:{:.3}%;font-size:{:.1}px;color:rgb({},{},{})",
                            label.center.x / WIDTH as f32 * 100.0,
                            label.center.y / HEIGHT as f32 * 100.0,
                            label.size * px_per_unit,
                            r,
                            g,
                            b
                        );
                        node.set_text_content(Some(&label.text));
                        let _ = node.set_attribute("class", "label");
                        let _ = node.set_attribute("style", &style);
                    }
                    None => {
                        let _ = node.set_attribute("class", "label hidden");
                    }
                }
            }
            self.last_labels = labels;
        }

        /// Quit: stop ticking and show the goodbye card
        fn stop(&mut self) {
            log::info!(
                "Quit requested after {} ticks (best {})",
                self.state.time_ticks,
                self.state.best_score
            );
            self.stopped = true;
            if let Some(document) = web_sys::window().and_then(|w| w.document()) {
                if let Some(el) = document.get_element_by_id("goodbye") {
                    let _ = el.set_attribute("class", "");
                }
                if let Some(el) = document.get_element_by_id("overlay") {
                    let _ = el.set_attribute("class", "hidden");
                }
            }
        }
    }

    fn clock_seed() -> u64 {
        js_sys::Date::now() as u64
    }

    pub async fn run() -> Result<(), JsValue> {
        console_error_panic_hook::set_once();
        let _ = console_log::init_with_level(log::Level::Info);

        log::info!("Flappy starting...");

        let window = web_sys::window().ok_or("no window")?;
        let document = window.document().ok_or("no document")?;

        // Hide loading indicator
        if let Some(loading) = document.get_element_by_id("loading") {
            let _ = loading.set_attribute("class", "hidden");
        }

        let canvas: HtmlCanvasElement = document
            .get_element_by_id("canvas")
            .ok_or("no canvas")?
            .dyn_into()
            .map_err(|_| "element #canvas is not a canvas")?;

        // Set canvas size
        let dpr = window.device_pixel_ratio();
        let client_w = canvas.client_width();
        let client_h = canvas.client_height();
        let width = (client_w as f64 * dpr) as u32;
        let height = (client_h as f64 * dpr) as u32;
        canvas.set_width(width);
        canvas.set_height(height);

        let settings = Settings::load();
        let seed = settings.seed.unwrap_or_else(clock_seed);
        let game = Rc::new(RefCell::new(Game::new(seed, settings)));
        game.borrow_mut().canvas_size = (client_w as f32, client_h as f32);

        log::info!("Game initialized with seed: {}", seed);

        // Initialize WebGPU (WebGL2 fallback)
        let instance = wgpu::Instance::new(&wgpu::InstanceDescriptor {
            backends: wgpu::Backends::BROWSER_WEBGPU | wgpu::Backends::GL,
            ..Default::default()
        });

        let surface = instance
            .create_surface(wgpu::SurfaceTarget::Canvas(canvas.clone()))
            .map_err(|e| JsValue::from_str(&format!("Failed to create surface: {e}")))?;

        let adapter = instance
            .request_adapter(&wgpu::RequestAdapterOptions {
                power_preference: wgpu::PowerPreference::HighPerformance,
                compatible_surface: Some(&surface),
                force_fallback_adapter: false,
            })
            .await
            .map_err(|e| JsValue::from_str(&format!("Failed to get adapter: {e}")))?;

        log::info!("Using adapter: {:?}", adapter.get_info().name);

        let render_state = RenderState::new(surface, &adapter, width, height)
            .await
            .map_err(|e| JsValue::from_str(&format!("Failed to create device: {e}")))?;
        game.borrow_mut().render_state = Some(render_state);

        setup_input_handlers(&canvas, game.clone());
        setup_resize_handler(&canvas, game.clone());

        // Start game loop
        request_animation_frame(game);

        log::info!("Flappy running!");
        Ok(())
    }

    /// Pointer position relative to the canvas from a touch
    fn touch_pos(canvas: &HtmlCanvasElement, event: &TouchEvent) -> Option<(f32, f32)> {
        let touch = event.touches().get(0)?;
        let rect = canvas.get_bounding_client_rect();
        Some((
            touch.client_x() as f32 - rect.left() as f32,
            touch.client_y() as f32 - rect.top() as f32,
        ))
    }

    fn setup_input_handlers(canvas: &HtmlCanvasElement, game: Rc<RefCell<Game>>) {
        // Mouse move - track hover
        {
            let game = game.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: MouseEvent| {
                let mut g = game.borrow_mut();
                let p = g.to_game(event.offset_x() as f32, event.offset_y() as f32);
                g.input.pointer = Some(p);
            });
            let _ = canvas
                .add_event_listener_with_callback("mousemove", closure.as_ref().unchecked_ref());
            closure.forget();
        }

        // Mouse leave - no hover
        {
            let game = game.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |_event: MouseEvent| {
                game.borrow_mut().input.pointer = None;
            });
            let _ = canvas
                .add_event_listener_with_callback("mouseleave", closure.as_ref().unchecked_ref());
            closure.forget();
        }

        // Mouse click - buttons, otherwise activate
        {
            let game = game.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: MouseEvent| {
                let mut g = game.borrow_mut();
                let p = g.to_game(event.offset_x() as f32, event.offset_y() as f32);
                g.input.pointer = Some(p);
                g.input.click = true;
                g.audio.resume();
            });
            let _ = canvas
                .add_event_listener_with_callback("mousedown", closure.as_ref().unchecked_ref());
            closure.forget();
        }

        // Touch start - same as a click
        {
            let game = game.clone();
            let canvas_clone = canvas.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: TouchEvent| {
                event.prevent_default();
                let mut g = game.borrow_mut();
                if let Some((x, y)) = touch_pos(&canvas_clone, &event) {
                    let p = g.to_game(x, y);
                    g.input.pointer = Some(p);
                }
                g.input.click = true;
                g.audio.resume();
            });
            let _ = canvas
                .add_event_listener_with_callback("touchstart", closure.as_ref().unchecked_ref());
            closure.forget();
        }

        // Page close - quit from any phase
        {
            let Some(window) = web_sys::window() else {
                return;
            };
            let game = game.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |_event: web_sys::Event| {
                let mut g = game.borrow_mut();
                g.state.request_quit();
                if !g.stopped {
                    g.stop();
                }
            });
            let _ = window
                .add_event_listener_with_callback("pagehide", closure.as_ref().unchecked_ref());
            closure.forget();
        }

        // Keyboard
        {
            let Some(window) = web_sys::window() else {
                return;
            };
            let closure = Closure::<dyn FnMut(_)>::new(move |event: KeyboardEvent| {
                if event.repeat() {
                    return;
                }
                let mut g = game.borrow_mut();
                match event.key().as_str() {
                    " " | "Enter" => {
                        event.prevent_default();
                        g.input.activate = true;
                        g.audio.resume();
                    }
                    "Escape" => g.input.menu = true,
                    "i" | "I" => {
                        g.input.idle_mode = !g.input.idle_mode;
                        log::info!("Idle mode: {}", g.input.idle_mode);
                    }
                    _ => {}
                }
            });
            let _ = window
                .add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref());
            closure.forget();
        }
    }

    fn setup_resize_handler(canvas: &HtmlCanvasElement, game: Rc<RefCell<Game>>) {
        let Some(window) = web_sys::window() else {
            return;
        };
        let canvas = canvas.clone();
        let closure = Closure::<dyn FnMut(_)>::new(move |_event: web_sys::Event| {
            let Some(window) = web_sys::window() else {
                return;
            };
            let dpr = window.device_pixel_ratio();
            let client_w = canvas.client_width();
            let client_h = canvas.client_height();
            let width = (client_w as f64 * dpr) as u32;
            let height = (client_h as f64 * dpr) as u32;
            canvas.set_width(width);
            canvas.set_height(height);

            let mut g = game.borrow_mut();
            g.canvas_size = (client_w as f32, client_h as f32);
            // Font sizes depend on the canvas height
            g.last_labels.clear();
            if let Some(ref mut render_state) = g.render_state {
                render_state.resize(width, height);
            }
        });
        let _ = window.add_event_listener_with_callback("resize", closure.as_ref().unchecked_ref());
        closure.forget();
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

            // Calculate delta time
            let dt = if g.last_time > 0.0 {
                ((time - g.last_time) / 1000.0) as f32
            } else {
                SIM_DT
            };
            g.last_time = time;

            g.update(dt, time);
            if g.stopped {
                return;
            }
            g.render();
            if let Some(document) = web_sys::window().and_then(|w| w.document()) {
                g.update_overlay(&document);
            }
        }

        request_animation_frame(game);
    }
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub async fn wasm_main() {
    if let Err(e) = wasm_game::run().await {
        log::error!("Startup failed: {:?}", e);
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    env_logger::init();
    log::info!("Flappy (native) starting...");
    log::info!("The graphical frontend is web-only - run with `trunk serve`; running headless autopilot");

    let settings = flappy::Settings::load();
    let seed = settings.seed.unwrap_or_else(clock_seed);
    run_headless(seed, settings.max_ticks);
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is wasm_main, this is just to satisfy the compiler
}

#[cfg(not(target_arch = "wasm32"))]
fn clock_seed() -> u64 {
    use std::time::{SystemTime, UNIX_EPOCH};
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis() as u64)
        .unwrap_or(0)
}

/// Fly one autopilot run through the real state machine, logging each event
#[cfg(not(target_arch = "wasm32"))]
fn run_headless(seed: u64, max_ticks: u64) {
    use flappy::sim::{GamePhase, GameState, TickInput, tick};

    let mut state = GameState::new(seed);
    log::info!("Headless run with seed {}", seed);

    let activate = TickInput {
        activate: true,
        ..Default::default()
    };
    // Splash -> Menu -> Playing
    tick(&mut state, &activate);
    tick(&mut state, &activate);

    let input = TickInput {
        idle_mode: true,
        ..Default::default()
    };
    while state.phase == GamePhase::Playing && state.time_ticks < max_ticks {
        tick(&mut state, &input);
        for event in state.drain_events() {
            log::debug!("tick {}: {:?}", state.time_ticks, event);
        }
    }

    log::info!(
        "Run ended in {:?} after {} ticks: score {}, best {}",
        state.phase,
        state.time_ticks,
        state.score,
        state.best_score
    );
    println!("score {} (best {}) after {} ticks", state.score, state.best_score, state.time_ticks);
}
