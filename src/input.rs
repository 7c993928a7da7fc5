use glam::Vec2;
use web_sys as web;

/// Latest pointer and scroll readings, written by event listeners and read
/// once per frame. `inside` is false until the first move and after the
/// pointer leaves the document; repulsion is off while it is false.
#[derive(Default, Clone, Copy, Debug)]
pub struct PointerState {
    pub x: f32,
    pub y: f32,
    pub scroll_y: f32,
    pub inside: bool,
}

impl PointerState {
    /// Pointer position in document space.
    #[inline]
    pub fn document(&self) -> Vec2 {
        Vec2::new(self.x, self.y + self.scroll_y)
    }

    #[inline]
    pub fn move_to(&mut self, client: Vec2) {
        self.x = client.x;
        self.y = client.y;
        self.inside = true;
    }
}

#[inline]
pub fn rect_center(left: f64, top: f64, width: f64, height: f64) -> Vec2 {
    Vec2::new((left + width / 2.0) as f32, (top + height / 2.0) as f32)
}

#[inline]
pub fn pointer_client(ev: &web::PointerEvent) -> Vec2 {
    Vec2::new(ev.client_x() as f32, ev.client_y() as f32)
}

#[inline]
pub fn element_client_center(el: &web::Element) -> Vec2 {
    let rect = el.get_bounding_client_rect();
    rect_center(rect.left(), rect.top(), rect.width(), rect.height())
}
