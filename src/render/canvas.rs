//! 2D canvas backend

use std::collections::HashMap;

use wasm_bindgen::{JsCast, JsValue};
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement, HtmlImageElement};

use super::RenderSink;
use super::frame::{DrawCommand, Sprite};

/// Draws frames onto an `HtmlCanvasElement` through its 2D context
pub struct CanvasSink {
    context: CanvasRenderingContext2d,
    images: HashMap<Sprite, HtmlImageElement>,
}

impl CanvasSink {
    /// Acquire the 2D context and start loading every sprite image
    pub fn new(canvas: &HtmlCanvasElement) -> Result<Self, JsValue> {
        let context = canvas
            .get_context("2d")?
            .ok_or_else(|| JsValue::from_str("canvas has no 2d context"))?
            .dyn_into::<CanvasRenderingContext2d>()?;

        let mut images = HashMap::with_capacity(Sprite::ALL.len());
        for sprite in Sprite::ALL {
            let image = HtmlImageElement::new()?;
            image.set_src(sprite.path());
            images.insert(sprite, image);
        }

        Ok(Self { context, images })
    }
}

impl RenderSink for CanvasSink {
    type Error = JsValue;

    fn execute(&mut self, command: &DrawCommand) -> Result<(), JsValue> {
        match command {
            DrawCommand::Clear { width, height } => {
                self.context
                    .clear_rect(0.0, 0.0, *width as f64, *height as f64);
            }
            DrawCommand::Text {
                text,
                pos,
                font,
                color,
            } => {
                self.context.set_font(font);
                self.context.set_fill_style_str(color);
                self.context.fill_text(text, pos.x as f64, pos.y as f64)?;
            }
            DrawCommand::Image { sprite, pos, size } => {
                // Images that are still loading are skipped for this frame
                let Some(image) = self.images.get(sprite) else {
                    return Ok(());
                };
                if !image.complete() {
                    return Ok(());
                }
                self.context
                    .draw_image_with_html_image_element_and_dw_and_dh(
                        image,
                        pos.x as f64,
                        pos.y as f64,
                        *size as f64,
                        *size as f64,
                    )?;
            }
        }
        Ok(())
    }
}
