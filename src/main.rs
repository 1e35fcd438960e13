//! Smash Sticks entry point
//!
//! Handles platform-specific initialization and runs the game loop.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
mod wasm_game {
    use std::cell::RefCell;
    use std::rc::Rc;

    use glam::Vec2;
    use wasm_bindgen::prelude::*;
    use web_sys::{HtmlCanvasElement, KeyboardEvent, MouseEvent, TouchEvent, TouchList};

    use smash_sticks::Game;
    use smash_sticks::platform::{SystemClock, Viewport};
    use smash_sticks::renderer::Canvas2d;
    use smash_sticks::settings::Settings;

    /// Pointer slots reserved for touches (slot 0 is the mouse)
    const MAX_TOUCHES: usize = 10;

    type Shared<T> = Rc<RefCell<T>>;

    pub fn run() {
        console_error_panic_hook::set_once();
        if console_log::init_with_level(log::Level::Info).is_err() {
            web_sys::console::warn_1(&"Logger already initialized".into());
        }

        log::info!("Smash Sticks starting...");

        let Some(document) = web_sys::window().and_then(|w| w.document()) else {
            log::error!("No window/document");
            return;
        };

        let Some(canvas) = document
            .get_element_by_id("canvas")
            .and_then(|el| el.dyn_into::<HtmlCanvasElement>().ok())
        else {
            log::error!("No <canvas id=\"canvas\"> element");
            return;
        };

        let viewport = Viewport::new(canvas.client_width() as f32, canvas.client_height() as f32);
        let game = match Game::new(Settings::load(), viewport, Rc::new(SystemClock)) {
            Ok(game) => Rc::new(RefCell::new(game)),
            Err(e) => {
                log::error!("Failed to build scenes: {}", e);
                return;
            }
        };

        let Some(surface) = Canvas2d::new(canvas.clone()) else {
            log::error!("Canvas has no 2D context");
            return;
        };
        let surface = Rc::new(RefCell::new(surface));

        setup_input_handlers(&canvas, game.clone());
        setup_resize_handler(&canvas, game.clone());

        // Start game loop
        request_animation_frame(game, surface);

        log::info!("Smash Sticks running!");
    }

    /// Pointer position relative to the canvas, in CSS pixels
    fn local_pos(canvas: &HtmlCanvasElement, client_x: i32, client_y: i32) -> Vec2 {
        let rect = canvas.get_bounding_client_rect();
        Vec2::new(
            client_x as f32 - rect.left() as f32,
            client_y as f32 - rect.top() as f32,
        )
    }

    fn touch_slot(identifier: i32) -> usize {
        1 + identifier.unsigned_abs() as usize % MAX_TOUCHES
    }

    /// Feed every touch in `list` to the game, pressing them if `press`
    fn apply_touches(game: &Shared<Game>, canvas: &HtmlCanvasElement, list: TouchList, press: bool) {
        let mut g = game.borrow_mut();
        let input = g.input_mut();
        for i in 0..list.length() {
            let Some(touch) = list.get(i) else { continue };
            let pos = local_pos(canvas, touch.client_x(), touch.client_y());
            let slot = touch_slot(touch.identifier());
            if press {
                input.pointer_pressed(slot, pos);
            } else {
                input.pointer_moved(slot, pos);
            }
        }
    }

    fn setup_input_handlers(canvas: &HtmlCanvasElement, game: Shared<Game>) {
        // Mouse move
        {
            let game = game.clone();
            let canvas_clone = canvas.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: MouseEvent| {
                let pos = local_pos(&canvas_clone, event.client_x(), event.client_y());
                game.borrow_mut().input_mut().pointer_moved(0, pos);
            });
            let _ = canvas
                .add_event_listener_with_callback("mousemove", closure.as_ref().unchecked_ref());
            closure.forget();
        }

        // Mouse down (select)
        {
            let game = game.clone();
            let canvas_clone = canvas.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: MouseEvent| {
                let pos = local_pos(&canvas_clone, event.client_x(), event.client_y());
                game.borrow_mut().input_mut().pointer_pressed(0, pos);
            });
            let _ = canvas
                .add_event_listener_with_callback("mousedown", closure.as_ref().unchecked_ref());
            closure.forget();
        }

        // Touch move
        {
            let game = game.clone();
            let canvas_clone = canvas.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: TouchEvent| {
                event.prevent_default();
                apply_touches(&game, &canvas_clone, event.touches(), false);
            });
            let _ = canvas
                .add_event_listener_with_callback("touchmove", closure.as_ref().unchecked_ref());
            closure.forget();
        }

        // Touch start (select)
        {
            let game = game.clone();
            let canvas_clone = canvas.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: TouchEvent| {
                event.prevent_default();
                apply_touches(&game, &canvas_clone, event.changed_touches(), true);
            });
            let _ = canvas
                .add_event_listener_with_callback("touchstart", closure.as_ref().unchecked_ref());
            closure.forget();
        }

        let Some(window) = web_sys::window() else {
            return;
        };

        // Keyboard
        {
            let game = game.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: KeyboardEvent| {
                let code = event.code();
                // Arrow keys would scroll the page
                if code.starts_with("Arrow") {
                    event.prevent_default();
                }
                game.borrow_mut().input_mut().key_down(&code);
            });
            let _ = window
                .add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref());
            closure.forget();
        }
        {
            let closure = Closure::<dyn FnMut(_)>::new(move |event: KeyboardEvent| {
                game.borrow_mut().input_mut().key_up(&event.code());
            });
            let _ = window
                .add_event_listener_with_callback("keyup", closure.as_ref().unchecked_ref());
            closure.forget();
        }
    }

    fn setup_resize_handler(canvas: &HtmlCanvasElement, game: Shared<Game>) {
        let Some(window) = web_sys::window() else {
            return;
        };
        let canvas_clone = canvas.clone();
        let closure = Closure::<dyn FnMut(_)>::new(move |_event: web_sys::Event| {
            let w = canvas_clone.client_width() as f32;
            let h = canvas_clone.client_height() as f32;
            if let Err(e) = game.borrow_mut().resize(w, h) {
                log::error!("Resize failed: {}", e);
            }
        });
        let _ = window.add_event_listener_with_callback("resize", closure.as_ref().unchecked_ref());
        closure.forget();
    }

    fn request_animation_frame(game: Shared<Game>, surface: Shared<Canvas2d>) {
        let Some(window) = web_sys::window() else {
            return;
        };
        let closure = Closure::once(move |time: f64| {
            game_loop(game, surface, time);
        });
        let _ = window.request_animation_frame(closure.as_ref().unchecked_ref());
        closure.forget();
    }

    fn game_loop(game: Shared<Game>, surface: Shared<Canvas2d>, time: f64) {
        {
            let mut canvas = surface.borrow_mut();
            canvas.sync_size();
            if let Err(e) = game.borrow_mut().frame(&mut *canvas, time) {
                // Scene errors are configuration bugs; stop rather than spin
                log::error!("Game loop stopped: {}", e);
                return;
            }
        }

        request_animation_frame(game, surface);
    }
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn wasm_main() {
    wasm_game::run();
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    env_logger::init();
    log::info!("Smash Sticks (native) starting...");
    log::info!("Native mode runs headless - build for wasm32 to play in the browser");

    if let Err(e) = headless::run() {
        log::error!("Headless run failed: {}", e);
        std::process::exit(1);
    }
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is wasm_main, this is just to satisfy the compiler
}

/// Plays one scripted match against a recording canvas
#[cfg(not(target_arch = "wasm32"))]
mod headless {
    use std::rc::Rc;

    use glam::Vec2;

    use smash_sticks::platform::{ManualClock, Viewport};
    use smash_sticks::renderer::RecordingCanvas;
    use smash_sticks::{Game, SceneResult, Settings};

    const WIDTH: f32 = 1280.0;
    const HEIGHT: f32 = 720.0;
    const FRAME_MS: f64 = 1000.0 / 60.0;

    pub fn run() -> SceneResult<()> {
        let clock = ManualClock::new(0.0);
        let settings = Settings::load();
        let match_ms = settings.match_length_ms();
        let mut game = Game::new(settings, Viewport::new(WIDTH, HEIGHT), Rc::new(clock.clone()))?;
        let mut canvas = RecordingCanvas::new(WIDTH, HEIGHT);
        let mut time = 0.0;

        let mut step = |game: &mut Game, canvas: &mut RecordingCanvas, ms: f64| {
            clock.advance(ms);
            time += ms;
            canvas.clear();
            game.frame(canvas, time)
        };

        // Press START!
        game.input_mut()
            .pointer_pressed(0, Vec2::new(WIDTH / 2.0, HEIGHT * 13.0 / 20.0));
        step(&mut game, &mut canvas, FRAME_MS)?;
        log::info!("Scene after pressing START!: {:?}", game.active_scene());

        // Player one walks right once the lead-in ends
        game.input_mut().key_down("KeyD");
        let mut elapsed = 0.0;
        while elapsed < 3000.0 + match_ms + FRAME_MS {
            step(&mut game, &mut canvas, FRAME_MS)?;
            elapsed += FRAME_MS;
        }

        log::info!(
            "Scene after the match: {:?} ({} draw calls in the last frame, {} fps)",
            game.active_scene(),
            canvas.commands.len(),
            game.fps()
        );
        Ok(())
    }
}
