use gtk4 as gtk;

use gtk::cairo;
use gtk::gdk_pixbuf::Pixbuf;
use gtk4::prelude::*;
use std::f64::consts::{FRAC_PI_2, PI};

use super::geometry::{handle_squares, LabelBox, Rect, SurfaceTransform};

pub const DIM_ALPHA: f64 = 100.0 / 255.0;
pub const BORDER_WIDTH: f64 = 2.0;
pub const HANDLE_SIZE: f64 = 8.0;
pub const HANDLE_COLOR: (f64, f64, f64) = (0.0, 120.0 / 255.0, 215.0 / 255.0);
pub const LABEL_FONT: &str = "Sans";
pub const LABEL_FONT_SIZE: f64 = 13.0;
pub const LABEL_GAP: f64 = 5.0;
pub const LABEL_PADDING: f64 = 5.0;
pub const LABEL_RADIUS: f64 = 3.0;
pub const LABEL_BG_ALPHA: f64 = 160.0 / 255.0;

/// Everything a frame of the overlay depends on
pub struct OverlayView<'a> {
    pub background: Option<&'a Pixbuf>,
    pub transform: SurfaceTransform,
    pub selection: Option<Rect>,
}

/// Draw one overlay frame covering `width` x `height`.
pub fn render_overlay(
    cr: &cairo::Context,
    view: &OverlayView<'_>,
    width: f64,
    height: f64,
) -> Result<(), cairo::Error> {
    if let Some(pixbuf) = view.background {
        paint_background(cr, pixbuf, view.transform)?;
    }

    cr.set_source_rgba(0.0, 0.0, 0.0, DIM_ALPHA);
    cr.rectangle(0.0, 0.0, width, height);
    cr.fill()?;

    if let Some(rect) = view.selection {
        draw_selection(cr, view, &rect)?;
    }

    Ok(())
}

fn paint_background(
    cr: &cairo::Context,
    pixbuf: &Pixbuf,
    transform: SurfaceTransform,
) -> Result<(), cairo::Error> {
    cr.save()?;
    cr.scale(transform.scale, transform.scale);
    cr.set_source_pixbuf(pixbuf, 0.0, 0.0);
    cr.paint()?;
    cr.restore()
}

fn draw_selection(
    cr: &cairo::Context,
    view: &OverlayView<'_>,
    rect: &Rect,
) -> Result<(), cairo::Error> {
    let rx = rect.x as f64;
    let ry = rect.y as f64;
    let rw = rect.width as f64;
    let rh = rect.height as f64;

    cr.set_source_rgb(1.0, 1.0, 1.0);
    cr.set_line_width(BORDER_WIDTH);
    cr.rectangle(rx, ry, rw, rh);
    cr.stroke()?;

    let (r, g, b) = HANDLE_COLOR;
    cr.set_source_rgb(r, g, b);
    for (hx, hy, hw, hh) in handle_squares(rect, HANDLE_SIZE) {
        cr.rectangle(hx, hy, hw, hh);
    }
    cr.fill()?;

    draw_dimension_label(cr, rect)?;

    // Undo the dimming inside the selection
    cr.save()?;
    cr.set_operator(cairo::Operator::Clear);
    cr.rectangle(rx, ry, rw, rh);
    cr.fill()?;
    cr.restore()?;

    if let Some(pixbuf) = view.background {
        cr.save()?;
        cr.rectangle(rx, ry, rw, rh);
        cr.clip();
        paint_background(cr, pixbuf, view.transform)?;
        cr.restore()?;
    }

    Ok(())
}

fn draw_dimension_label(cr: &cairo::Context, rect: &Rect) -> Result<(), cairo::Error> {
    let text = rect.dimension_label();

    cr.select_font_face(LABEL_FONT, cairo::FontSlant::Normal, cairo::FontWeight::Bold);
    cr.set_font_size(LABEL_FONT_SIZE);
    let extents = cr.text_extents(&text)?;

    let label = LabelBox::above(
        rect,
        extents.width(),
        extents.height(),
        LABEL_GAP,
        LABEL_PADDING,
    );

    rounded_rectangle(cr, &label, LABEL_RADIUS);
    cr.set_source_rgba(0.0, 0.0, 0.0, LABEL_BG_ALPHA);
    cr.fill()?;

    let (cx, cy) = label.center();
    cr.move_to(
        cx - extents.width() / 2.0 - extents.x_bearing(),
        cy - extents.height() / 2.0 - extents.y_bearing(),
    );
    cr.set_source_rgb(1.0, 1.0, 1.0);
    cr.show_text(&text)?;

    Ok(())
}

fn rounded_rectangle(cr: &cairo::Context, area: &LabelBox, radius: f64) {
    let right = area.x + area.width;
    let bottom = area.y + area.height;

    cr.new_sub_path();
    cr.arc(right - radius, area.y + radius, radius, -FRAC_PI_2, 0.0);
    cr.arc(right - radius, bottom - radius, radius, 0.0, FRAC_PI_2);
    cr.arc(area.x + radius, bottom - radius, radius, FRAC_PI_2, PI);
    cr.arc(area.x + radius, area.y + radius, radius, PI, 3.0 * FRAC_PI_2);
    cr.close_path();
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::capture::rgba_to_pixbuf;
    use image::{Rgba, RgbaImage};

    const SIZE: i32 = 100;

    fn render(view: &OverlayView<'_>) -> cairo::ImageSurface {
        let surface = cairo::ImageSurface::create(cairo::Format::ARgb32, SIZE, SIZE).unwrap();
        {
            let cr = cairo::Context::new(&surface).unwrap();
            render_overlay(&cr, view, SIZE as f64, SIZE as f64).unwrap();
        }
        surface
    }

    /// Returns (r, g, b, a) from a little-endian ARGB32 surface
    fn pixel(surface: &mut cairo::ImageSurface, x: usize, y: usize) -> (u8, u8, u8, u8) {
        surface.flush();
        let stride = surface.stride() as usize;
        let data = surface.data().unwrap();
        let i = y * stride + x * 4;
        (data[i + 2], data[i + 1], data[i], data[i + 3])
    }

    fn red_background() -> Pixbuf {
        let image = RgbaImage::from_pixel(SIZE as u32, SIZE as u32, Rgba([255, 0, 0, 255]));
        rgba_to_pixbuf(&image)
    }

    #[test]
    fn test_idle_frame_is_dimmed() {
        let pixbuf = red_background();
        let mut surface = render(&OverlayView {
            background: Some(&pixbuf),
            transform: SurfaceTransform::identity(),
            selection: None,
        });

        let (r, g, b, a) = pixel(&mut surface, 50, 50);
        assert_eq!(a, 255);
        assert!((150..=160).contains(&r), "dimmed red, got {r}");
        assert_eq!((g, b), (0, 0));
    }

    #[test]
    fn test_selection_shows_undimmed_background() {
        let pixbuf = red_background();
        let mut surface = render(&OverlayView {
            background: Some(&pixbuf),
            transform: SurfaceTransform::identity(),
            selection: Some(Rect::new(30, 30, 40, 40)),
        });

        assert_eq!(pixel(&mut surface, 50, 50), (255, 0, 0, 255));

        let (r, _, _, _) = pixel(&mut surface, 5, 95);
        assert!((150..=160).contains(&r), "outside stays dimmed, got {r}");
    }

    #[test]
    fn test_border_handles_and_label() {
        let pixbuf = red_background();
        let mut surface = render(&OverlayView {
            background: Some(&pixbuf),
            transform: SurfaceTransform::identity(),
            selection: Some(Rect::new(30, 30, 40, 40)),
        });

        // outer half of the 2px border
        assert_eq!(pixel(&mut surface, 29, 50), (255, 255, 255, 255));

        // handle corner outside the selection
        let (r, g, b, _) = pixel(&mut surface, 27, 72);
        assert!(r < 10 && (115..=125).contains(&g) && b > 205, "accent, got {r},{g},{b}");

        // label padding just above the top edge, darker than the dim layer
        let (r, _, _, a) = pixel(&mut surface, 50, 28);
        assert_eq!(a, 255);
        assert!(r < 100, "label background, got {r}");
    }

    #[test]
    fn test_hole_is_transparent_without_background() {
        let mut surface = render(&OverlayView {
            background: None,
            transform: SurfaceTransform::identity(),
            selection: Some(Rect::new(30, 30, 40, 40)),
        });

        assert_eq!(pixel(&mut surface, 50, 50).3, 0);
        let alpha = pixel(&mut surface, 5, 95).3;
        assert!((95..=105).contains(&alpha), "dim layer alpha, got {alpha}");
    }
}
