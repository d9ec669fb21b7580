use cairo::{Context, Format, ImageSurface};
use pango::FontDescription;

use crate::error::{TimelineError, TimelineResult};
use crate::render::{
    Color, LinePrimitive, RectPrimitive, RenderFrame, Renderer, TextHAlign, TextPrimitive,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CairoRenderStats {
    pub lines_drawn: usize,
    pub rects_drawn: usize,
    pub texts_drawn: usize,
}

/// Renderers that can also draw into a Cairo context owned by someone else,
/// such as a GTK `DrawingArea` draw callback.
pub trait CairoContextRenderer {
    fn render_on_cairo_context(
        &mut self,
        context: &Context,
        frame: &RenderFrame,
    ) -> TimelineResult<()>;
}

/// Cairo + Pango renderer.
///
/// `Renderer::render` paints into an owned image surface; the
/// `CairoContextRenderer` path paints into a host context.
#[derive(Debug)]
pub struct CairoRenderer {
    surface: ImageSurface,
    font_family: String,
    last_stats: CairoRenderStats,
}

impl CairoRenderer {
    pub fn new(width: i32, height: i32) -> TimelineResult<Self> {
        if width <= 0 || height <= 0 {
            return Err(TimelineError::InvalidData(
                "cairo surface size must be > 0".to_owned(),
            ));
        }

        let surface = ImageSurface::create(Format::ARgb32, width, height)
            .map_err(|err| map_backend_error("failed to create cairo surface", err))?;
        Ok(Self {
            surface,
            font_family: "Sans".to_owned(),
            last_stats: CairoRenderStats::default(),
        })
    }

    #[must_use]
    pub fn surface(&self) -> &ImageSurface {
        &self.surface
    }

    pub fn set_font_family(&mut self, family: impl Into<String>) -> TimelineResult<()> {
        let family = family.into();
        if family.trim().is_empty() {
            return Err(TimelineError::InvalidData(
                "font family must not be empty".to_owned(),
            ));
        }
        self.font_family = family;
        Ok(())
    }

    #[must_use]
    pub fn last_stats(&self) -> CairoRenderStats {
        self.last_stats
    }

    /// Writes the owned surface as PNG.
    pub fn write_png(&self, path: &std::path::Path) -> TimelineResult<()> {
        let mut file = std::fs::File::create(path).map_err(|err| {
            TimelineError::InvalidData(format!("failed to create `{}`: {err}", path.display()))
        })?;
        self.surface
            .write_to_png(&mut file)
            .map_err(|err| TimelineError::InvalidData(format!("failed to write png: {err}")))
    }

    fn render_with_context(&mut self, context: &Context, frame: &RenderFrame) -> TimelineResult<()> {
        frame.validate()?;

        // Clip to the frame so off-window markers never bleed into the host widget.
        context.rectangle(
            0.0,
            0.0,
            f64::from(frame.viewport.width),
            f64::from(frame.viewport.height),
        );
        context.clip();

        let mut stats = CairoRenderStats::default();
        for rect in &frame.rects {
            fill_rect(context, *rect)?;
            stats.rects_drawn += 1;
        }
        for line in &frame.lines {
            stroke_line(context, *line)?;
            stats.lines_drawn += 1;
        }
        for text in &frame.texts {
            self.show_text(context, text);
            stats.texts_drawn += 1;
        }

        context.reset_clip();
        self.last_stats = stats;
        Ok(())
    }

    fn show_text(&self, context: &Context, text: &TextPrimitive) {
        let layout = pangocairo::functions::create_layout(context);
        let font_description =
            FontDescription::from_string(&format!("{} {}px", self.font_family, text.font_size_px));
        layout.set_font_description(Some(&font_description));
        layout.set_alignment(match text.h_align {
            TextHAlign::Left => pango::Alignment::Left,
            TextHAlign::Center => pango::Alignment::Center,
            TextHAlign::Right => pango::Alignment::Right,
        });
        layout.set_text(&text.text);

        let (text_width, _) = layout.pixel_size();
        let x = match text.h_align {
            TextHAlign::Left => text.x,
            TextHAlign::Center => text.x - f64::from(text_width) / 2.0,
            TextHAlign::Right => text.x - f64::from(text_width),
        };

        apply_color(context, text.color);
        context.move_to(x, text.y);
        pangocairo::functions::show_layout(context, &layout);
    }
}

impl Renderer for CairoRenderer {
    fn render(&mut self, frame: &RenderFrame) -> TimelineResult<()> {
        let context = Context::new(&self.surface)
            .map_err(|err| map_backend_error("failed to create cairo context", err))?;
        self.render_with_context(&context, frame)
    }
}

impl CairoContextRenderer for CairoRenderer {
    fn render_on_cairo_context(
        &mut self,
        context: &Context,
        frame: &RenderFrame,
    ) -> TimelineResult<()> {
        self.render_with_context(context, frame)
    }
}

fn fill_rect(context: &Context, rect: RectPrimitive) -> TimelineResult<()> {
    apply_color(context, rect.fill_color);
    context.rectangle(rect.x, rect.y, rect.width, rect.height);
    context
        .fill()
        .map_err(|err| map_backend_error("failed to fill rectangle", err))
}

fn stroke_line(context: &Context, line: LinePrimitive) -> TimelineResult<()> {
    apply_color(context, line.color);
    context.set_line_width(line.stroke_width);
    if line.x1 == line.x2 {
        // Snap vertical lines to the pixel center so 1px strokes stay crisp.
        let x = line.x1.floor() + 0.5;
        context.move_to(x, line.y1);
        context.line_to(x, line.y2);
    } else {
        context.move_to(line.x1, line.y1);
        context.line_to(line.x2, line.y2);
    }
    context
        .stroke()
        .map_err(|err| map_backend_error("failed to stroke line", err))
}

fn apply_color(context: &Context, color: Color) {
    context.set_source_rgba(color.red, color.green, color.blue, color.alpha);
}

fn map_backend_error(prefix: &str, err: cairo::Error) -> TimelineError {
    TimelineError::InvalidData(format!("{prefix}: {err}"))
}
