//! Blobfield entry point
//!
//! Handles platform-specific initialization and runs the animation loop.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
mod wasm_app {
    use std::cell::RefCell;
    use std::rc::Rc;

    use glam::Vec2;
    use wasm_bindgen::prelude::*;
    use web_sys::{
        CanvasRenderingContext2d, Document, HtmlCanvasElement, HtmlInputElement,
        HtmlTextAreaElement, MouseEvent,
    };

    use blobfield::Settings;
    use blobfield::consts::CONTACT_RECIPIENT;
    use blobfield::mailto;
    use blobfield::render::CanvasRenderer;
    use blobfield::sim::{Field, FrameContext, ScrollTracker};

    /// App instance holding all state shared between listeners and the loop
    struct App {
        field: Field,
        frame: FrameContext,
        renderer: CanvasRenderer,
        canvas: HtmlCanvasElement,
        ctx2d: CanvasRenderingContext2d,
        /// scrollY deltas between events feed the scroll speed
        scroll: ScrollTracker,
    }

    impl App {
        fn new(
            seed: u64,
            particle_count: usize,
            canvas: HtmlCanvasElement,
            ctx2d: CanvasRenderingContext2d,
            initial_scroll_y: f64,
        ) -> Self {
            Self {
                field: Field::new(seed, particle_count, Vec2::ZERO),
                frame: FrameContext::new(Vec2::ZERO),
                renderer: CanvasRenderer::new(ctx2d.clone()),
                canvas,
                ctx2d,
                scroll: ScrollTracker::seeded(initial_scroll_y),
            }
        }

        /// Size the canvas to the viewport and rebuild the field
        fn resize(&mut self) {
            let window = web_sys::window().expect("no window");
            let dpr = window.device_pixel_ratio();
            let w = window
                .inner_width()
                .ok()
                .and_then(|v| v.as_f64())
                .unwrap_or(0.0);
            let h = window
                .inner_height()
                .ok()
                .and_then(|v| v.as_f64())
                .unwrap_or(0.0);

            self.canvas.set_width((w * dpr) as u32);
            self.canvas.set_height((h * dpr) as u32);
            // Resizing the backing store resets the transform; re-apply DPR scale
            let _ = self.ctx2d.scale(dpr, dpr);

            self.frame.bounds = Vec2::new(w as f32, h as f32);
            self.field.reset(self.frame.bounds);

            log::info!("Resized to {w}x{h} (dpr {dpr}), field rebuilt");
        }
    }

    pub fn run() {
        console_error_panic_hook::set_once();
        console_log::init_with_level(log::Level::Info).expect("Failed to init logger");

        log::info!("Blobfield starting...");

        let window = web_sys::window().expect("no window");
        let document = window.document().expect("no document");

        let canvas: HtmlCanvasElement = document
            .get_element_by_id("canvas")
            .expect("no canvas")
            .dyn_into()
            .expect("not a canvas");
        let ctx2d: CanvasRenderingContext2d = canvas
            .get_context("2d")
            .expect("get_context failed")
            .expect("no 2d context")
            .dyn_into()
            .expect("not a 2d context");

        let mut settings = Settings::load();
        if let Ok(query) = window.location().search() {
            if settings.apply_query(&query) {
                settings.save();
            }
        }
        let seed = js_sys::Date::now() as u64;

        let app = Rc::new(RefCell::new(App::new(
            seed,
            settings.effective_particle_count(),
            canvas,
            ctx2d,
            window.scroll_y().unwrap_or(0.0),
        )));
        app.borrow_mut().resize();

        log::info!(
            "Field initialized with seed {seed} ({} blobs)",
            settings.effective_particle_count()
        );

        setup_input_handlers(app.clone(), &settings);
        setup_contact_form(&document);

        request_animation_frame(app);

        log::info!("Blobfield running");
    }

    fn setup_input_handlers(app: Rc<RefCell<App>>, settings: &Settings) {
        let window = web_sys::window().expect("no window");
        let document = window.document().expect("no document");

        // Pointer move - absolute position feeds the repel force
        {
            let app = app.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: MouseEvent| {
                app.borrow_mut().frame.pointer =
                    Some(Vec2::new(event.client_x() as f32, event.client_y() as f32));
            });
            let _ = window
                .add_event_listener_with_callback("mousemove", closure.as_ref().unchecked_ref());
            closure.forget();
        }

        // Pointer leaving the page disables the repel force
        {
            let app = app.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |_event: web_sys::Event| {
                app.borrow_mut().frame.pointer = None;
            });
            let _ = document
                .add_event_listener_with_callback("mouseleave", closure.as_ref().unchecked_ref());
            closure.forget();
        }

        // Viewport resize rebuilds the whole field
        {
            let app = app.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |_event: web_sys::Event| {
                app.borrow_mut().resize();
            });
            let _ = window
                .add_event_listener_with_callback("resize", closure.as_ref().unchecked_ref());
            closure.forget();
        }

        // Scroll delta becomes the new scroll speed (overwrite, not accumulate)
        if !settings.reduced_motion {
            let app = app.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |_event: web_sys::Event| {
                let y = web_sys::window()
                    .and_then(|w| w.scroll_y().ok())
                    .unwrap_or(0.0);
                let mut a = app.borrow_mut();
                let delta = a.scroll.sample(y);
                a.frame.scroll_speed = delta;
            });
            let _ = window
                .add_event_listener_with_callback("scroll", closure.as_ref().unchecked_ref());
            closure.forget();
        } else {
            log::info!("Reduced motion: scroll parallax disabled");
        }
    }

    fn setup_contact_form(document: &Document) {
        let Some(form) = document.get_element_by_id("contact-form") else {
            return;
        };

        let closure = Closure::<dyn FnMut(_)>::new(move |event: web_sys::Event| {
            event.prevent_default();

            let document = web_sys::window()
                .and_then(|w| w.document())
                .expect("no document");
            let name = input_value(&document, "contact-name");
            let email = input_value(&document, "contact-email");
            let subject = input_value(&document, "contact-subject");
            let message = textarea_value(&document, "contact-message");

            let uri = mailto::compose(CONTACT_RECIPIENT, &name, &email, &subject, &message);
            log::info!("Handing off contact form to mail handler");
            if let Some(window) = web_sys::window() {
                let _ = window.location().set_href(&uri);
            }
        });
        let _ = form.add_event_listener_with_callback("submit", closure.as_ref().unchecked_ref());
        closure.forget();
    }

    /// Read an input field's value, empty string when the element is missing
    fn input_value(document: &Document, id: &str) -> String {
        document
            .get_element_by_id(id)
            .and_then(|el| el.dyn_into::<HtmlInputElement>().ok())
            .map(|el| el.value())
            .unwrap_or_default()
    }

    fn textarea_value(document: &Document, id: &str) -> String {
        document
            .get_element_by_id(id)
            .and_then(|el| el.dyn_into::<HtmlTextAreaElement>().ok())
            .map(|el| el.value())
            .unwrap_or_default()
    }

    fn request_animation_frame(app: Rc<RefCell<App>>) {
        let window = web_sys::window().expect("no window");
        let closure = Closure::once(move |time: f64| {
            frame(app, time);
        });
        let _ = window.request_animation_frame(closure.as_ref().unchecked_ref());
        closure.forget();
    }

    fn frame(app: Rc<RefCell<App>>, time: f64) {
        {
            let mut a = app.borrow_mut();
            let frame_ctx = a.frame;
            a.field.advance(&frame_ctx);
            a.renderer.render(&a.field, frame_ctx.bounds, time);
            a.frame.decay_scroll();
        }

        request_animation_frame(app);
    }
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn wasm_main() {
    wasm_app::run();
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    env_logger::init();
    log::info!("Blobfield (native) starting...");
    log::info!("Native mode is headless - run with `trunk serve` for the web version");

    println!("\nRunning field smoke check...");
    smoke_check();
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is wasm_main, this is just to satisfy the compiler
}

#[cfg(not(target_arch = "wasm32"))]
fn smoke_check() {
    use blobfield::consts::PARTICLE_COUNT;
    use blobfield::sim::{Field, FrameContext};
    use glam::Vec2;

    let bounds = Vec2::new(1280.0, 720.0);
    let mut field = Field::new(42, PARTICLE_COUNT, bounds);
    let mut ctx = FrameContext::new(bounds);
    ctx.pointer = Some(Vec2::new(640.0, 360.0));
    ctx.scroll_speed = 25.0;

    for _ in 0..600 {
        field.advance(&ctx);
        ctx.decay_scroll();
    }

    for p in field.particles() {
        assert!(p.pos.x >= -p.radius && p.pos.x <= bounds.x + p.radius);
        assert!(p.pos.y >= -p.radius && p.pos.y <= bounds.y + p.radius);
    }
    println!("✓ Field smoke check passed!");
}
