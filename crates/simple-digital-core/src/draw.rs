//! Paints a planned frame onto an `embedded-graphics` draw target.

use embedded_graphics_core::{
    draw_target::DrawTarget,
    geometry::{Point as EgPoint, Size},
    primitives::Rectangle,
};
use sevencell::graphics::fill_cell;

use crate::frame::FramePlan;
use crate::settings::Color;

/// Fills the plan's bounds with its background color, then paints every
/// cell in the foreground color.
///
/// `convert` maps the face's one-byte colors onto the panel color type.
/// Nothing is painted outside this call, so a frame is either fully drawn
/// or not drawn at all.
pub fn draw_frame<D, F>(target: &mut D, plan: &FramePlan, mut convert: F) -> Result<(), D::Error>
where
    D: DrawTarget,
    F: FnMut(Color) -> D::Color,
{
    let area = Rectangle::new(
        EgPoint::zero(),
        Size::new(plan.bounds.width, plan.bounds.height),
    );
    target.fill_solid(&area, convert(plan.background))?;

    let foreground = convert(plan.foreground);
    for cell in &plan.cells {
        fill_cell(target, &cell.polygon, cell.origin, foreground)?;
    }

    Ok(())
}
