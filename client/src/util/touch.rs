//! Touch-event helpers.
//!
//! Touch drags get no drop target from the browser, so the hole under the
//! finger is found by hit-testing the release point and walking up to the
//! nearest `.hole` element, whose `data-shape` attribute names its kind.

#[cfg(feature = "hydrate")]
use sorter::input::{Point, Rect};
#[cfg(feature = "hydrate")]
use sorter::shape::ShapeKind;
#[cfg(feature = "hydrate")]
use wasm_bindgen::JsCast;

/// Client coordinates of the first active touch (or, for `touchend`, the
/// first touch that just lifted).
#[cfg(feature = "hydrate")]
pub fn touch_point(ev: &web_sys::TouchEvent, lifted: bool) -> Option<Point> {
    let list = if lifted { ev.changed_touches() } else { ev.touches() };
    let touch = list.get(0)?;
    Some(Point::new(f64::from(touch.client_x()), f64::from(touch.client_y())))
}

/// Bounding client rect of the element the touch listener is attached to.
#[cfg(feature = "hydrate")]
pub fn current_target_rect(ev: &web_sys::TouchEvent) -> Option<Rect> {
    let element = ev.current_target()?.dyn_into::<web_sys::Element>().ok()?;
    let rect = element.get_bounding_client_rect();
    Some(Rect { left: rect.left(), top: rect.top(), width: rect.width(), height: rect.height() })
}

/// The hole under `point`, if any.
#[cfg(feature = "hydrate")]
#[allow(clippy::cast_possible_truncation)]
pub fn hole_at(point: Point) -> Option<ShapeKind> {
    let document = web_sys::window()?.document()?;
    let below = document.element_from_point(point.x as f32, point.y as f32)?;
    let hole = match below.closest(".hole") {
        Ok(hole) => hole?,
        Err(e) => {
            log::warn!("hole lookup failed: {e:?}");
            return None;
        }
    };
    let tag = hole.get_attribute("data-shape")?;
    match tag.parse::<ShapeKind>() {
        Ok(kind) => Some(kind),
        Err(e) => {
            log::warn!("{e}");
            None
        }
    }
}
