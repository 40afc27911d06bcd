mod logger;
mod options;
mod surface;

use std::{
    cell::{Ref, RefCell},
    rc::Rc,
};

pub use options::SnowOptions;
use snowflakes::SnowEffect;
pub use surface::{css_color, CanvasSurface, FrameHost};
use wasm_bindgen::{prelude::*, JsCast};
use web_sys::{console, CanvasRenderingContext2d, HtmlCanvasElement};

fn window() -> web_sys::Window {
    web_sys::window().expect("no global `window` exists")
}

fn request_animation_frame(f: &Closure<dyn FnMut()>) -> Result<i32, JsValue> {
    window().request_animation_frame(f.as_ref().unchecked_ref())
}

#[wasm_bindgen(start)]
fn start() {
    console_error_panic_hook::set_once();
    logger::init();
}

/// Holds the frame callback, which keeps a clone of this slot to reschedule itself.
/// The cycle lasts until [`FrameSlot::release`] empties the slot.
struct FrameSlot<F> {
    callback: Rc<RefCell<Option<F>>>,
}

impl<F> FrameSlot<F> {
    fn new() -> FrameSlot<F> {
        FrameSlot {
            callback: Rc::new(RefCell::new(None)),
        }
    }

    fn share(&self) -> FrameSlot<F> {
        FrameSlot {
            callback: self.callback.clone(),
        }
    }

    fn set(&self, callback: F) {
        *self.callback.borrow_mut() = Some(callback);
    }

    fn get(&self) -> Ref<'_, Option<F>> {
        self.callback.borrow()
    }

    /// Takes the callback out, dropping it once the borrow has ended.
    fn release(&self) -> bool {
        let callback = self.callback.borrow_mut().take();
        callback.is_some()
    }
}

struct Overlay {
    effect: SnowEffect,
    host: FrameHost,
    canvas: HtmlCanvasElement,
    context: Option<CanvasRenderingContext2d>,
    pending_frame: Option<i32>,
    running: bool,
}

impl Overlay {
    fn frame(&mut self) -> Result<(), JsValue> {
        let width = self.canvas.width() as f64;
        let height = self.canvas.height() as f64;

        let mut surface = self.context.as_ref().map(|context| {
            context.clear_rect(0.0, 0.0, width, height);
            CanvasSurface::new(context)
        });

        self.effect
            .step(Some(&mut self.host), surface.as_mut(), width, height)
    }
}

/// Handle to a running overlay, returned by [`attach`]. Dropping it (`free()` from JS) stops
/// the overlay as well.
#[wasm_bindgen]
pub struct SnowHandle {
    overlay: Rc<RefCell<Overlay>>,
    frame: FrameSlot<Closure<dyn FnMut()>>,
}

impl SnowHandle {
    fn teardown(&self) -> Result<(), JsValue> {
        let pending = {
            let mut overlay = self.overlay.borrow_mut();
            overlay.running = false;
            overlay.pending_frame.take()
        };

        // A pending frame must be cancelled before its closure is dropped.
        let cancelled = match pending {
            Some(handle) => window().cancel_animation_frame(handle),
            None => Ok(()),
        };

        if self.frame.release() {
            log::info!("snowfall stopped");
        }

        cancelled
    }
}

#[wasm_bindgen]
impl SnowHandle {
    /// Stops requesting frames and frees the frame loop. The canvas keeps whatever was drawn
    /// last.
    pub fn stop(&self) -> Result<(), JsValue> {
        self.teardown()
    }

    #[wasm_bindgen(js_name = liveCount)]
    pub fn live_count(&self) -> usize {
        self.overlay.borrow().effect.pool().live_len()
    }
}

impl Drop for SnowHandle {
    fn drop(&mut self) {
        if let Err(err) = self.teardown() {
            console::error_1(&err);
        }
    }
}

/// Starts snowing on `canvas`. `options` is a [`SnowOptions`] object, or `undefined`.
#[wasm_bindgen]
pub fn attach(canvas: HtmlCanvasElement, options: JsValue) -> Result<SnowHandle, JsValue> {
    let options: SnowOptions = if options.is_undefined() || options.is_null() {
        SnowOptions::default()
    } else {
        serde_wasm_bindgen::from_value(options)?
    };
    let config = options.into_config(window().device_pixel_ratio());

    let context = canvas
        .get_context("2d")?
        .map(|context| context.dyn_into::<CanvasRenderingContext2d>())
        .transpose()?;

    if context.is_none() {
        log::warn!("canvas has no 2d context, nothing will be drawn");
    }

    let overlay = Rc::new(RefCell::new(Overlay {
        effect: SnowEffect::new(config, js_sys::Date::now().to_bits()),
        host: FrameHost::default(),
        canvas,
        context,
        pending_frame: None,
        running: true,
    }));

    let frame: FrameSlot<Closure<dyn FnMut()>> = FrameSlot::new();

    {
        let overlay = overlay.clone();
        let f = frame.share();

        frame.set(Closure::new(move || {
            let mut overlay = overlay.borrow_mut();
            overlay.pending_frame = None;

            if !overlay.running {
                return;
            }

            if let Err(err) = overlay.frame() {
                console::error_1(&err);
            }

            if overlay.host.take_invalidated() {
                if let Some(closure) = f.get().as_ref() {
                    match request_animation_frame(closure) {
                        Ok(handle) => overlay.pending_frame = Some(handle),
                        Err(err) => console::error_1(&err),
                    }
                }
            }
        }));
    }

    // Built first, so a failed request below tears the loop down on drop.
    let handle = SnowHandle { overlay, frame };

    if let Some(closure) = handle.frame.get().as_ref() {
        handle.overlay.borrow_mut().pending_frame = Some(request_animation_frame(closure)?);
    }

    log::info!("snowfall attached");

    Ok(handle)
}
