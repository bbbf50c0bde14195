//! Ripple feedback for clickable elements.
//!
//! Geometry is computed natively so it can be unit tested; spawning the animated elements only
//! happens in the browser.

use leptos::{ev, html::ElementDescriptor, *};

/// Time a ripple stays mounted before it is removed.
pub const RIPPLE_DURATION_MS: u64 = 450;

#[derive(Debug, Clone, Copy, Default, PartialEq)]
/// Ripple behaviour for one element.
pub struct RippleOptions {
    /// Start every ripple at the element center instead of the pointer.
    pub center: bool,
    /// Element is circular; ripples use its width as the diameter.
    pub circle: bool,
}

#[derive(Debug, Clone, Copy, PartialEq)]
/// Pointer position and element box in element-local pixels.
pub struct RippleInput {
    /// Pointer x relative to the element's left edge.
    pub local_x: f64,
    /// Pointer y relative to the element's top edge.
    pub local_y: f64,
    /// Element client width.
    pub width: f64,
    /// Element client height.
    pub height: f64,
}

#[derive(Debug, Clone, Copy, PartialEq)]
/// Placement of a single ripple.
pub struct RippleGeometry {
    /// Ripple radius.
    pub radius: f64,
    /// Initial scale of the ripple.
    pub scale: f64,
    /// Initial offset of the ripple box.
    pub x: f64,
    /// Initial offset of the ripple box.
    pub y: f64,
    /// Offset that centers the ripple box in the element.
    pub center_x: f64,
    /// Offset that centers the ripple box in the element.
    pub center_y: f64,
}

impl RippleGeometry {
    /// Places a ripple so that, fully grown, it covers the whole element.
    pub fn calculate(input: RippleInput, options: RippleOptions) -> Self {
        let (radius, scale) = if options.circle {
            let radius = input.width / 2.0;
            let radius = if options.center {
                radius
            } else {
                radius + (input.local_x - radius).hypot(input.local_y - radius) / 4.0
            };
            (radius, 0.15)
        } else {
            (input.width.hypot(input.height) / 2.0, 0.3)
        };
        let center_x = (input.width - radius * 2.0) / 2.0;
        let center_y = (input.height - radius * 2.0) / 2.0;
        let (x, y) = if options.center {
            (center_x, center_y)
        } else {
            (input.local_x - radius, input.local_y - radius)
        };
        Self {
            radius,
            scale,
            x,
            y,
            center_x,
            center_y,
        }
    }

    /// Inline style of the ripple when it appears under the pointer.
    pub fn enter_style(&self) -> String {
        let diameter = self.radius * 2.0;
        format!(
            "width: {diameter}px; height: {diameter}px; transform: translate({}px, {}px) scale3d({s}, {s}, {s})",
            self.x,
            self.y,
            s = self.scale
        )
    }

    /// Inline style of the ripple once it has grown to cover the element.
    pub fn active_style(&self) -> String {
        let diameter = self.radius * 2.0;
        format!(
            "width: {diameter}px; height: {diameter}px; transform: translate({}px, {}px) scale3d(1, 1, 1)",
            self.center_x, self.center_y
        )
    }
}

/// Attaches ripple feedback to `el`; ripples only spawn while `enabled` is true.
pub fn bind<El: ElementDescriptor + 'static>(
    el: HtmlElement<El>,
    enabled: Signal<bool>,
    options: RippleOptions,
) -> HtmlElement<El> {
    el.on(ev::pointerdown, move |ev| {
        if enabled.get_untracked() {
            spawn(&ev, options);
        }
    })
}

#[cfg(target_arch = "wasm32")]
fn spawn(ev: &web_sys::PointerEvent, options: RippleOptions) {
    use std::time::Duration;
    use wasm_bindgen::JsCast;

    let Some(target) = ev
        .current_target()
        .and_then(|target| target.dyn_into::<web_sys::HtmlElement>().ok())
    else {
        return;
    };
    let Some(document) = target.owner_document() else {
        return;
    };
    let rect = target.get_bounding_client_rect();
    let geometry = RippleGeometry::calculate(
        RippleInput {
            local_x: f64::from(ev.client_x()) - rect.left(),
            local_y: f64::from(ev.client_y()) - rect.top(),
            width: f64::from(target.client_width()),
            height: f64::from(target.client_height()),
        },
        options,
    );

    let (Ok(container), Ok(animation)) = (
        document.create_element("span"),
        document.create_element("span"),
    ) else {
        return;
    };
    container.set_class_name("ui-ripple__container");
    animation.set_class_name("ui-ripple__animation ui-ripple__animation--enter");
    if animation
        .set_attribute("style", &geometry.enter_style())
        .and_then(|_| container.append_child(&animation).map(|_| ()))
        .and_then(|_| target.append_child(&container).map(|_| ()))
        .is_err()
    {
        logging::warn!("ripple mount failed");
        return;
    }

    set_timeout(
        move || {
            animation.set_class_name("ui-ripple__animation ui-ripple__animation--in");
            let _ = animation.set_attribute("style", &geometry.active_style());
        },
        Duration::ZERO,
    );
    set_timeout(
        move || container.remove(),
        Duration::from_millis(RIPPLE_DURATION_MS),
    );
}

#[cfg(not(target_arch = "wasm32"))]
fn spawn(ev: &web_sys::PointerEvent, options: RippleOptions) {
    let _ = (ev, options);
}
